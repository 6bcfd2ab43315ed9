//! A renderer that records draw calls instead of rasterizing them.
//!
//! [`RecordingRenderer`] implements the full [`Renderer`] contract and
//! appends every call to an op list. Tests use it to assert what a view
//! subtree drew, and with which values, without any GPU or window.
//!
//! Text measurement is deterministic: each character is 7x14 logical
//! pixels, which is close enough to a real UI font for layout tests to be
//! meaningful.

use crate::paint::Stroke;
use crate::renderer::Renderer;
use crate::types::{Color, ImageHandle, Point, Rect, Size};

/// Width used for every measured character.
const CHAR_WIDTH: f32 = 7.0;
/// Line height used for measured text.
const LINE_HEIGHT: f32 = 14.0;

/// A single recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// `save()` was called.
    Save,
    /// `restore()` was called.
    Restore,
    /// `clip_rect(rect)` was called.
    Clip(Rect),
    /// `fill_rect(rect, color)` was called.
    FillRect(Rect, Color),
    /// `stroke_rect(rect, stroke)` was called.
    StrokeRect(Rect, Stroke),
    /// `draw_line(from, to, stroke)` was called.
    Line(Point, Point, Stroke),
    /// `draw_polyline(points, stroke)` was called.
    Polyline(Vec<Point>, Stroke),
    /// `draw_text(text, rect, color)` was called.
    Text(String, Rect, Color),
    /// `draw_image(image, rect)` was called.
    Image(ImageHandle, Rect),
}

/// A [`Renderer`] implementation that records draw calls for inspection.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    ops: Vec<DrawOp>,
    save_depth: usize,
}

impl RecordingRenderer {
    /// Create a new, empty recording renderer.
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded operations in call order.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Discard all recorded operations.
    pub fn clear(&mut self) {
        self.ops.clear();
    }

    /// Count of recorded fill operations (a cheap "did anything paint" probe).
    pub fn fill_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::FillRect(..)))
            .count()
    }

    /// The texts drawn so far, in call order.
    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text(text, _, _) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Current save/restore nesting depth.
    pub fn save_depth(&self) -> usize {
        self.save_depth
    }
}

impl Renderer for RecordingRenderer {
    fn save(&mut self) {
        self.save_depth += 1;
        self.ops.push(DrawOp::Save);
    }

    fn restore(&mut self) {
        debug_assert!(self.save_depth > 0, "restore() without matching save()");
        self.save_depth = self.save_depth.saturating_sub(1);
        self.ops.push(DrawOp::Restore);
    }

    fn clip_rect(&mut self, rect: Rect) {
        self.ops.push(DrawOp::Clip(rect));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ops.push(DrawOp::FillRect(rect, color));
    }

    fn stroke_rect(&mut self, rect: Rect, stroke: &Stroke) {
        self.ops.push(DrawOp::StrokeRect(rect, *stroke));
    }

    fn draw_line(&mut self, from: Point, to: Point, stroke: &Stroke) {
        self.ops.push(DrawOp::Line(from, to, *stroke));
    }

    fn draw_polyline(&mut self, points: &[Point], stroke: &Stroke) {
        self.ops.push(DrawOp::Polyline(points.to_vec(), *stroke));
    }

    fn draw_text(&mut self, text: &str, rect: Rect, color: Color) {
        self.ops.push(DrawOp::Text(text.to_string(), rect, color));
    }

    fn draw_image(&mut self, image: ImageHandle, rect: Rect) {
        self.ops.push(DrawOp::Image(image, rect));
    }

    fn measure_text(&self, text: &str) -> Size {
        if text.is_empty() {
            return Size::ZERO;
        }
        Size::new(text.chars().count() as f32 * CHAR_WIDTH, LINE_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_renderer_records_in_order() {
        let mut renderer = RecordingRenderer::new();
        renderer.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::RED);
        renderer.draw_text("hi", Rect::new(0.0, 0.0, 20.0, 14.0), Color::BLACK);

        assert_eq!(renderer.ops().len(), 2);
        assert_eq!(renderer.fill_count(), 1);
        assert_eq!(renderer.texts(), vec!["hi"]);
    }

    #[test]
    fn test_measure_text_is_deterministic() {
        let renderer = RecordingRenderer::new();
        assert_eq!(renderer.measure_text(""), Size::ZERO);
        assert_eq!(renderer.measure_text("abc"), Size::new(21.0, 14.0));
    }

    #[test]
    fn test_save_restore_depth() {
        let mut renderer = RecordingRenderer::new();
        renderer.save();
        renderer.clip_rect(Rect::new(0.0, 0.0, 5.0, 5.0));
        assert_eq!(renderer.save_depth(), 1);
        renderer.restore();
        assert_eq!(renderer.save_depth(), 0);
    }
}
