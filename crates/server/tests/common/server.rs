//! Server test utilities.

use axum::body::Body;
use axum::http::Request;
use axum::http::header::CONTENT_TYPE;
use std::path::PathBuf;
use tempfile::TempDir;
use webwrap_core::config::AppConfig;
use webwrap_generator::ProjectGenerator;
use webwrap_server::{AppState, create_router};

/// A test server wrapper with temporary storage.
/// Note: #[allow(dead_code)] because each test file compiles common/ separately.
#[allow(dead_code)]
pub struct TestServer {
    pub router: axum::Router,
    pub state: AppState,
    _temp_dir: TempDir,
}

#[allow(dead_code)]
impl TestServer {
    /// Create a new test server with a temporary work root.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");

        let mut config = AppConfig::for_testing();
        config.storage.work_root = temp_dir.path().join("work");

        let generator = ProjectGenerator::new(&config.storage.work_root)
            .expect("Failed to create project generator");

        let state = AppState::new(config, generator);
        let router = create_router(state.clone());

        Self {
            router,
            state,
            _temp_dir: temp_dir,
        }
    }

    /// Work root holding generated archives.
    pub fn work_root(&self) -> PathBuf {
        self.state.generator.work_root().to_path_buf()
    }
}

/// Boundary used by [`multipart_request`].
pub const BOUNDARY: &str = "webwrap-test-boundary";

/// Build a multipart/form-data request with text fields and an optional
/// uploaded file.
#[allow(dead_code)]
pub fn multipart_request(
    uri: &str,
    fields: &[(&str, &str)],
    file: Option<(&str, &str, &[u8])>,
) -> Request<Body> {
    let mut body = Vec::new();

    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }

    if let Some((name, filename, data)) = file {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; \
                 filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .expect("valid request")
}
