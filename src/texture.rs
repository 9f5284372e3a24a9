use std::path::Path;
use std::sync::{Arc, OnceLock};

use log::{debug, info};
use tiny_skia::{ColorU8, Pixmap};

use crate::error::{CanvasError, CanvasResult};

const DEFAULT_TEXTURE_SIZE: u32 = 32;

static DEFAULT_TEXTURE: OnceLock<Texture> = OnceLock::new();

/// Shared, immutable image used by texture fills.
///
/// Cloning a `Texture` only clones the handle: any number of shapes may
/// reference the same pixels, and none of them can modify it.
#[derive(Clone)]
pub struct Texture {
    pixmap: Arc<Pixmap>,
}

// Custom Debug implementation so logs don't dump pixel data
impl std::fmt::Debug for Texture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Texture")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}

impl PartialEq for Texture {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.pixmap, &other.pixmap)
    }
}

impl Texture {
    /// Load a texture from an image file.
    ///
    /// Decoding failures are returned to the caller; nothing is substituted.
    pub fn load(path: impl AsRef<Path>) -> CanvasResult<Self> {
        let path = path.as_ref();
        let decoded = image::open(path).map_err(|source| CanvasError::TextureLoad {
            path: path.to_path_buf(),
            source,
        })?;
        let rgba = decoded.to_rgba8();
        info!("🖼️ Loaded texture {}: {}x{}", path.display(), rgba.width(), rgba.height());
        Self::from_rgba(rgba.width(), rgba.height(), rgba.as_raw())
    }

    /// Build a texture from unmultiplied RGBA bytes
    pub fn from_rgba(width: u32, height: u32, rgba: &[u8]) -> CanvasResult<Self> {
        let invalid = CanvasError::InvalidDimensions { width, height };
        if rgba.len() != width as usize * height as usize * 4 {
            return Err(invalid);
        }
        let mut pixmap = Pixmap::new(width, height).ok_or(invalid)?;
        for (dst, src) in pixmap.pixels_mut().iter_mut().zip(rgba.chunks_exact(4)) {
            *dst = ColorU8::from_rgba(src[0], src[1], src[2], src[3]).premultiply();
        }
        Ok(Self {
            pixmap: Arc::new(pixmap),
        })
    }

    /// The built-in texture used by shapes that have none assigned
    pub fn default_texture() -> Texture {
        DEFAULT_TEXTURE
            .get_or_init(|| {
                debug!("Generating default texture");
                Texture {
                    pixmap: Arc::new(default_pattern()),
                }
            })
            .clone()
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    pub(crate) fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Number of live handles to this texture's pixels
    pub fn handle_count(&self) -> usize {
        Arc::strong_count(&self.pixmap)
    }
}

impl Default for Texture {
    fn default() -> Self {
        Self::default_texture()
    }
}

// Bark-like two tone tile: warm checker with a darker diagonal grain.
fn default_pattern() -> Pixmap {
    let size = DEFAULT_TEXTURE_SIZE;
    let light = ColorU8::from_rgba(176, 132, 84, 255).premultiply();
    let dark = ColorU8::from_rgba(92, 60, 34, 255).premultiply();
    let grain = ColorU8::from_rgba(60, 38, 20, 255).premultiply();

    let mut pixmap = Pixmap::new(size, size).expect("DEFAULT_TEXTURE_SIZE should be non-zero");
    let half = size / 2;
    for (i, pixel) in pixmap.pixels_mut().iter_mut().enumerate() {
        let x = i as u32 % size;
        let y = i as u32 / size;
        *pixel = if (x + y) % 8 == 0 {
            grain
        } else if (x < half) == (y < half) {
            light
        } else {
            dark
        };
    }
    pixmap
}
