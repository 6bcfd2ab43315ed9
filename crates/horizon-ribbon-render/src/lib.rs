//! Drawing and measurement contract for Horizon Ribbon.
//!
//! The ribbon view engine never talks to a windowing system or GPU
//! directly. Instead it draws and measures through the traits in this
//! crate, which the host application implements on top of whatever surface
//! it owns:
//!
//! - [`Renderer`] - the 2D drawing and text-measurement interface
//! - [`Palette`] - state-keyed colors and fonts supplied by the active theme
//! - [`PaletteDragDrop`] - the drawing values used by drag feedback overlays
//!
//! The crate also provides the shared geometry vocabulary ([`Point`],
//! [`Size`], [`Rect`], [`Padding`], [`Color`], [`Stroke`]) and a
//! [`RecordingRenderer`] that captures draw calls for tests.
//!
//! # Example
//!
//! ```
//! use horizon_ribbon_render::{Color, RecordingRenderer, Rect, Renderer};
//!
//! let mut renderer = RecordingRenderer::new();
//! renderer.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::RED);
//! assert_eq!(renderer.ops().len(), 1);
//! ```

mod error;
mod paint;
mod palette;
mod recording;
mod renderer;
mod types;

pub use error::ColorParseError;
pub use paint::Stroke;
pub use palette::{Palette, PaletteDragDrop, PaletteState};
pub use recording::{DrawOp, RecordingRenderer};
pub use renderer::Renderer;
pub use types::{Color, ImageHandle, Padding, Point, Rect, Size};
