//! Core domain types and shared logic for the webwrap conversion service.
//!
//! This crate defines the canonical data model used across all other crates:
//! - Package name sanitization
//! - Site URL normalization
//! - The Android project template set and renderer
//! - Launcher icon size table
//! - Generation request/result types
//! - Configuration

pub mod config;
pub mod icon;
pub mod package_name;
pub mod project;
pub mod templates;
pub mod url;

pub use icon::{ICON_FILE_NAME, ICON_SIZES, IconSize};
pub use package_name::{DEFAULT_PACKAGE_NAME, PACKAGE_PREFIX, PackageName};
pub use project::{GeneratedProject, GenerationRequest};
pub use templates::{TemplateContext, TemplateKey};
pub use url::normalize_url;
