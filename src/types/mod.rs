pub mod blog;
pub mod evidence;
pub mod image;
pub mod routing;
