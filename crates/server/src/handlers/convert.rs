//! Conversion endpoint.

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use axum::Json;
use axum::extract::{Multipart, State};
use serde::Serialize;
use uuid::Uuid;
use webwrap_core::GenerationRequest;

/// Successful conversion response.
#[derive(Debug, Serialize)]
pub struct ConvertResponse {
    pub success: bool,
    /// Identifier of the generated project; key for the download endpoint.
    pub project_id: Uuid,
    /// Sanitized package name derived from the display name.
    pub package_name: String,
    /// Relative download reference for the archive.
    pub download_url: String,
}

/// POST /api/convert - Generate an Android WebView project from a form.
///
/// Required form fields: `app_name`, `website_url`. Optional file field
/// `icon`; an entry with an empty filename counts as absent, matching how
/// browsers submit an untouched file input.
pub async fn convert_website(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> ApiResult<Json<ConvertResponse>> {
    let mut app_name = None;
    let mut website_url = None;
    let mut icon = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("invalid multipart body: {e}")))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("app_name") => {
                app_name = Some(field.text().await.map_err(|e| {
                    ApiError::BadRequest(format!("unreadable app_name field: {e}"))
                })?);
            }
            Some("website_url") => {
                website_url = Some(field.text().await.map_err(|e| {
                    ApiError::BadRequest(format!("unreadable website_url field: {e}"))
                })?);
            }
            Some("icon") => {
                let has_file = field.file_name().is_some_and(|name| !name.is_empty());
                let data = field.bytes().await.map_err(|e| {
                    ApiError::BadRequest(format!("unreadable icon upload: {e}"))
                })?;
                if has_file && !data.is_empty() {
                    icon = Some(data.to_vec());
                }
            }
            _ => {}
        }
    }

    let app_name = app_name
        .filter(|name| !name.trim().is_empty())
        .ok_or_else(|| ApiError::BadRequest("app_name and website_url are required".to_string()))?;
    let website_url = website_url
        .filter(|url| !url.trim().is_empty())
        .ok_or_else(|| ApiError::BadRequest("app_name and website_url are required".to_string()))?;

    let request = GenerationRequest {
        app_name,
        website_url,
        icon,
    };

    // Generation is blocking work: template writes, image resizing, zipping.
    let generator = state.generator.clone();
    let generated = tokio::task::spawn_blocking(move || generator.generate(&request))
        .await
        .map_err(|e| ApiError::Internal(format!("generation task failed: {e}")))??;

    tracing::info!(
        project_id = %generated.project_id,
        package_name = %generated.package_name,
        "project generated"
    );

    Ok(Json(ConvertResponse {
        success: true,
        project_id: generated.project_id,
        package_name: generated.package_name.to_string(),
        download_url: format!("/api/download/{}", generated.project_id),
    }))
}
