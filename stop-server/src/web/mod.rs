//! Web layer for the stop index.
//!
//! Read-only HTTP endpoints for stop lookup, name search and trips by
//! arrival time.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
