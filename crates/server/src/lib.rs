//! HTTP API server for the webwrap conversion service.
//!
//! This crate provides the transport glue around the generation pipeline:
//! - Conversion endpoint accepting the multipart form
//! - Archive download streaming
//! - Liveness endpoint

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
