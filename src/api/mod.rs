//! API layer - HTTP endpoints

pub mod features;
pub mod health;
pub mod predict;
pub mod router;
pub mod state;
pub mod types;

pub use router::{create_api_router, create_router, create_router_with_state};
pub use state::AppState;
