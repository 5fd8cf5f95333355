//! Launcher icon processing.

use image::imageops::FilterType;
use std::fs;
use std::path::Path;
use thiserror::Error;
use webwrap_core::{ICON_FILE_NAME, ICON_SIZES};

#[derive(Debug, Error)]
enum IconError {
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Resize an uploaded icon into every launcher density bucket.
///
/// For each entry of [`ICON_SIZES`] this creates `res_root/mipmap-{density}/`
/// and writes an `ic_launcher.png` resized to that bucket's square pixel size.
/// Any alpha channel is flattened; launcher icons are written as opaque RGB.
///
/// Failures are logged and reported as `false`; the caller proceeds without
/// custom icons rather than aborting the generation.
pub fn process_icon(data: &[u8], res_root: &Path) -> bool {
    match write_launcher_icons(data, res_root) {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "icon processing failed, project ships without custom icons");
            false
        }
    }
}

fn write_launcher_icons(data: &[u8], res_root: &Path) -> Result<(), IconError> {
    let decoded = image::load_from_memory(data)?;
    let source = decoded.to_rgb8();

    for size in &ICON_SIZES {
        let dir = res_root.join(size.mipmap_dir());
        fs::create_dir_all(&dir)?;

        let resized = image::imageops::resize(&source, size.px, size.px, FilterType::Lanczos3);
        resized.save(dir.join(ICON_FILE_NAME))?;
    }

    Ok(())
}
