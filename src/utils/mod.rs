pub mod slug;
pub mod threads;
pub mod token_estimator;
