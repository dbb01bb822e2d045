//! API layer - HTTP endpoints of the workflow executor

pub mod documents;
pub mod health;
pub mod router;
pub mod state;
pub mod types;
pub mod workflow;

pub use router::create_router;
pub use state::AppState;
