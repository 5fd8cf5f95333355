//! Archive download endpoint.

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_LENGTH, CONTENT_TYPE};
use axum::response::{IntoResponse, Response};
use bytes::Bytes;
use futures::Stream;
use tokio::io::AsyncReadExt;
use uuid::Uuid;

/// Chunk size for streaming archive downloads (64 KiB).
const STREAM_CHUNK_SIZE: usize = 64 * 1024;

/// GET /api/download/{project_id} - Stream a generated archive.
///
/// The path parameter must be a project id returned by the conversion
/// endpoint. Anything that does not name an existing archive (including a
/// malformed id) is a 404; ids are the only lookup key.
pub async fn download_project(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
) -> ApiResult<Response> {
    let project_id: Uuid = project_id
        .parse()
        .map_err(|_| ApiError::NotFound(format!("no archive for project: {project_id}")))?;

    let archive_path = state.generator.archive_path(project_id);
    let file = tokio::fs::File::open(&archive_path).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ApiError::NotFound(format!("no archive for project: {project_id}"))
        } else {
            ApiError::Internal(format!("failed to open archive: {e}"))
        }
    })?;

    let size = file
        .metadata()
        .await
        .map_err(|e| ApiError::Internal(format!("failed to stat archive: {e}")))?
        .len();

    Ok((
        StatusCode::OK,
        [
            (CONTENT_TYPE, "application/zip".to_string()),
            (CONTENT_LENGTH, size.to_string()),
            (
                CONTENT_DISPOSITION,
                format!("attachment; filename=\"android_project_{project_id}.zip\""),
            ),
        ],
        Body::from_stream(archive_stream(file)),
    )
        .into_response())
}

/// Stream a file in fixed-size chunks instead of loading it into memory.
fn archive_stream(
    file: tokio::fs::File,
) -> impl Stream<Item = Result<Bytes, std::io::Error>> + Send + 'static {
    async_stream::try_stream! {
        let mut file = file;
        let mut buf = vec![0u8; STREAM_CHUNK_SIZE];
        loop {
            let n = file.read(&mut buf).await?;
            if n == 0 {
                break;
            }
            yield Bytes::copy_from_slice(&buf[..n]);
        }
    }
}
