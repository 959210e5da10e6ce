//! Web layer for the travel agency.
//!
//! Serves the landing page and dashboard, switches the active locale, and
//! exposes JSON endpoints that validate domain shapes.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::*;
