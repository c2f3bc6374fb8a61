pub mod context;
pub mod orchestrator;
pub mod outlet;
pub mod prompts;
pub mod reducer;
pub mod research;
pub mod router;
pub mod sections;
pub mod state;
pub mod worker;
pub mod workflow;
