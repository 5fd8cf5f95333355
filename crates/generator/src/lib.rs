//! Project generation pipeline for the webwrap conversion service.
//!
//! This crate turns a [`webwrap_core::GenerationRequest`] into a packed ZIP
//! archive: it renders the template set into an isolated working directory,
//! resizes the optional launcher icon, archives the tree, and removes the
//! working directory.
//!
//! Everything here is synchronous and blocking. Callers on an async runtime
//! run generation through `tokio::task::spawn_blocking`.

pub mod archive;
pub mod error;
pub mod icon;
pub mod project;

pub use archive::archive_dir;
pub use error::{GeneratorError, GeneratorResult};
pub use icon::process_icon;
pub use project::ProjectGenerator;
