#![warn(clippy::all, rust_2018_idioms)]

pub mod background;
pub mod collection;
pub mod config;
pub mod error;
pub mod export;
pub mod fill;
pub mod geometry;
pub mod print;
pub mod renderer;
pub mod shape;
pub mod surface;
pub mod texture;

pub use background::{Background, BackgroundLayout};
pub use collection::ShapeCollection;
pub use config::{CanvasConfig, ShapeDefaults};
pub use error::{CanvasError, CanvasResult};
pub use export::ExportFormat;
pub use fill::{FillContext, FillDescriptor, FillMode, FillStyle, HatchStyle};
pub use geometry::ControlPoint;
pub use print::PrintStyle;
pub use shape::{Appearance, EdgeStyle, Shape, ShapeId, ShapeKind, ShapeType, factory};
pub use surface::Surface;
pub use texture::Texture;
