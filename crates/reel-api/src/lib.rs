//! Axum HTTP delivery boundary.
//!
//! This crate exposes the generation orchestrator to callers:
//! - Prompt validation before any remote call is made
//! - Translation of internal failures into user-facing messages
//! - Health probe

pub mod config;
pub mod handlers;
pub mod routes;
pub mod state;

pub use config::ApiConfig;
pub use routes::create_router;
pub use state::AppState;
