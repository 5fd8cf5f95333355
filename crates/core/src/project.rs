//! Generation request and result types.

use crate::package_name::PackageName;
use std::path::PathBuf;
use uuid::Uuid;

/// One incoming conversion request. Created per request, never persisted.
#[derive(Clone, Debug)]
pub struct GenerationRequest {
    /// Free-form display name shown under the launcher icon.
    pub app_name: String,
    /// Website URL as submitted; normalized during generation.
    pub website_url: String,
    /// Raw bytes of an optional uploaded icon image.
    pub icon: Option<Vec<u8>>,
}

/// The result of one successful generation.
#[derive(Clone, Debug)]
pub struct GeneratedProject {
    /// Unique identifier naming this generation; storage key of the archive
    /// and the public download reference.
    pub project_id: Uuid,
    /// Package name derived from the display name.
    pub package_name: PackageName,
    /// Location of the packed archive on disk.
    pub archive_path: PathBuf,
}
