//! Core renderer trait defining the 2D drawing interface.
//!
//! This module defines the [`Renderer`] trait through which every view
//! element draws and measures. The host application implements it on its
//! own surface (GPU, software raster, test recorder); the view engine only
//! ever borrows it for the duration of a single layout or paint pass.

use crate::paint::Stroke;
use crate::types::{Color, ImageHandle, Point, Rect, Size};

/// The 2D drawing and measurement contract.
///
/// Implementations may be immediate-mode or retained; the view engine makes
/// no assumption beyond call ordering. All coordinates are in the same
/// space as the view tree's client rectangles.
///
/// # State Stack
///
/// The renderer maintains a clip state stack. [`save`](Self::save) pushes
/// the current state, [`restore`](Self::restore) pops it. The paint
/// dispatcher brackets clipped subtree draws with save/clip/restore.
pub trait Renderer {
    /// Save the current render state (clip region).
    fn save(&mut self);

    /// Restore the previously saved render state.
    fn restore(&mut self);

    /// Intersect the current clip region with the given rectangle.
    fn clip_rect(&mut self, rect: Rect);

    /// Fill a rectangle with a solid color.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Stroke the outline of a rectangle.
    fn stroke_rect(&mut self, rect: Rect, stroke: &Stroke);

    /// Draw a line between two points.
    fn draw_line(&mut self, from: Point, to: Point, stroke: &Stroke);

    /// Draw an open polyline through the given points.
    fn draw_polyline(&mut self, points: &[Point], stroke: &Stroke);

    /// Draw a single line of text inside the given rectangle.
    ///
    /// Text is horizontally centered and vertically centered in `rect`;
    /// overflowing text is clipped by the host.
    fn draw_text(&mut self, text: &str, rect: Rect, color: Color);

    /// Draw a host-owned image scaled into the given rectangle.
    fn draw_image(&mut self, image: ImageHandle, rect: Rect);

    /// Measure a single line of text in the host's ribbon font.
    ///
    /// This is the measurement half of the contract: layout negotiation
    /// calls it while computing preferred sizes, so it must be consistent
    /// with what [`draw_text`](Self::draw_text) will later produce.
    fn measure_text(&self, text: &str) -> Size;
}
