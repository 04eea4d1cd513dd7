//! Web layer for the ecosystem API.
//!
//! Provides the HTTP endpoints the client application calls.

mod dto;
mod error;
mod routes;
mod state;

pub use dto::*;
pub use error::AppError;
pub use routes::create_router;
pub use state::AppState;
