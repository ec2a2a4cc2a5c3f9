//! Asset loading, icon/logo compositing and PNG export

use crate::bestiary::element::Element;
use crate::io::error::{Result, WeakmapError};
use image::imageops::{self, FilterType};
use image::{DynamicImage, ImageFormat, RgbImage, RgbaImage};
use std::path::{Path, PathBuf};

/// Directory of element icons and region logos
///
/// Icons are stored as `<Element>.<ext>`, logos as `<region mode>.<ext>`.
#[derive(Debug, Clone)]
pub struct AssetStore {
    dir: PathBuf,
    extension: String,
}

impl AssetStore {
    /// Create a store reading `<dir>/<name>.<extension>` files
    pub fn new<P: Into<PathBuf>>(dir: P, extension: &str) -> Self {
        Self {
            dir: dir.into(),
            extension: extension.trim_start_matches('.').to_string(),
        }
    }

    /// Path of the icon for an element
    pub fn icon_path(&self, element: Element) -> PathBuf {
        self.asset_path(element.name())
    }

    /// Path of the logo for a region mode
    pub fn logo_path(&self, region: &str) -> PathBuf {
        self.asset_path(region)
    }

    fn asset_path(&self, stem: &str) -> PathBuf {
        self.dir.join(format!("{stem}.{}", self.extension))
    }

    /// Load an element icon resized to a `size` x `size` square
    ///
    /// # Errors
    ///
    /// Returns an error if the icon file is missing or cannot be decoded
    pub fn load_icon(&self, element: Element, size: u32) -> Result<RgbaImage> {
        let icon = load_rgba(&self.icon_path(element))?;
        Ok(imageops::resize(&icon, size, size, FilterType::Lanczos3))
    }

    /// Load a region logo resized to `width`, keeping its aspect ratio
    ///
    /// # Errors
    ///
    /// Returns an error if the logo file is missing or cannot be decoded
    pub fn load_logo(&self, region: &str, width: u32) -> Result<RgbaImage> {
        let logo = load_rgba(&self.logo_path(region))?;
        let (logo_width, logo_height) = logo.dimensions();
        let height = scaled_height(logo_width, logo_height, width);
        Ok(imageops::resize(&logo, width, height, FilterType::Lanczos3))
    }
}

/// Height matching `target_width` for an image of the given size
pub fn scaled_height(width: u32, height: u32, target_width: u32) -> u32 {
    if width == 0 {
        return 0;
    }
    (u64::from(target_width) * u64::from(height) / u64::from(width)) as u32
}

fn load_rgba(path: &Path) -> Result<RgbaImage> {
    image::open(path)
        .map(|img| img.to_rgba8())
        .map_err(|e| WeakmapError::AssetLoad {
            path: path.to_path_buf(),
            source: e,
        })
}

/// Convert a packed RGB plotting buffer into an RGBA canvas
///
/// # Errors
///
/// Returns an error if the buffer length does not match the dimensions
pub fn canvas_from_rgb(width: u32, height: u32, buffer: Vec<u8>) -> Result<RgbaImage> {
    let rgb = RgbImage::from_raw(width, height, buffer).ok_or_else(|| WeakmapError::Chart {
        chart: "canvas",
        reason: format!("plot buffer does not hold {width}x{height} RGB pixels"),
    })?;
    Ok(DynamicImage::ImageRgb8(rgb).to_rgba8())
}

/// Alpha-blend `overlay` onto `canvas` so that it is centred on `center`
pub fn paste_centered(canvas: &mut RgbaImage, overlay: &RgbaImage, center: (i32, i32)) {
    let x = i64::from(center.0) - i64::from(overlay.width() / 2);
    let y = i64::from(center.1) - i64::from(overlay.height() / 2);
    imageops::overlay(canvas, overlay, x, y);
}

/// Alpha-blend `logo` onto `canvas`, `offset` pixels away from the right and
/// bottom edges
pub fn paste_bottom_right(canvas: &mut RgbaImage, logo: &RgbaImage, offset: (u32, u32)) {
    let x = i64::from(canvas.width()) - i64::from(logo.width()) - i64::from(offset.0);
    let y = i64::from(canvas.height()) - i64::from(logo.height()) - i64::from(offset.1);
    imageops::overlay(canvas, logo, x, y);
}

/// Write a composed chart as PNG, creating the parent directory if needed
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written
pub fn save_png(canvas: &RgbaImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| WeakmapError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    canvas
        .save_with_format(output_path, ImageFormat::Png)
        .map_err(|e| WeakmapError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}
