//! Launcher icon size table.

/// One launcher icon resolution tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IconSize {
    /// Android density bucket label (e.g. "xhdpi").
    pub density: &'static str,
    /// Square pixel dimension for this bucket.
    pub px: u32,
}

impl IconSize {
    /// Resource directory name for this bucket, e.g. `mipmap-xhdpi`.
    pub fn mipmap_dir(&self) -> String {
        format!("mipmap-{}", self.density)
    }
}

/// The fixed set of launcher icon sizes, one per density bucket.
pub const ICON_SIZES: [IconSize; 5] = [
    IconSize { density: "mdpi", px: 48 },
    IconSize { density: "hdpi", px: 72 },
    IconSize { density: "xhdpi", px: 96 },
    IconSize { density: "xxhdpi", px: 144 },
    IconSize { density: "xxxhdpi", px: 192 },
];

/// Filename of the launcher icon inside each mipmap directory.
pub const ICON_FILE_NAME: &str = "ic_launcher.png";
