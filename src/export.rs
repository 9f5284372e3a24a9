use std::path::Path;

use image::{DynamicImage, ImageFormat, RgbaImage};

use crate::error::{CanvasError, CanvasResult};

/// Raster formats an export can be written as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Jpeg,
    Gif,
    Png,
    Bmp,
    Tiff,
}

impl ExportFormat {
    /// Pick a format from the path's extension, case-insensitively.
    ///
    /// Unknown or missing extensions fall back to PNG.
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "jpg" | "jpeg" => ExportFormat::Jpeg,
            "gif" => ExportFormat::Gif,
            "png" => ExportFormat::Png,
            "bmp" => ExportFormat::Bmp,
            "tiff" => ExportFormat::Tiff,
            other => {
                log::warn!("Unrecognized export extension {:?}, saving as PNG", other);
                ExportFormat::Png
            }
        }
    }

    pub fn image_format(self) -> ImageFormat {
        match self {
            ExportFormat::Jpeg => ImageFormat::Jpeg,
            ExportFormat::Gif => ImageFormat::Gif,
            ExportFormat::Png => ImageFormat::Png,
            ExportFormat::Bmp => ImageFormat::Bmp,
            ExportFormat::Tiff => ImageFormat::Tiff,
        }
    }
}

/// Encode `image` to `path` in the format its extension names
pub fn save_image(image: &RgbaImage, path: &Path) -> CanvasResult<()> {
    let format = ExportFormat::from_path(path);
    log::info!("💾 Saving {}x{} image to {} as {:?}", image.width(), image.height(), path.display(), format);

    let result = match format {
        // JPEG has no alpha channel
        ExportFormat::Jpeg => DynamicImage::ImageRgba8(image.clone())
            .to_rgb8()
            .save_with_format(path, ImageFormat::Jpeg),
        other => image.save_with_format(path, other.image_format()),
    };

    result.map_err(|source| {
        log::error!("Failed to save image to {}: {}", path.display(), source);
        CanvasError::Export {
            path: path.to_path_buf(),
            source,
        }
    })
}
