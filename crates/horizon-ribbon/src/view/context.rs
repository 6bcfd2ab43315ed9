//! Transient contexts threaded through layout and paint passes.
//!
//! Both contexts are built fresh for each pass and never retained: they
//! borrow the renderer and palette owned by the surrounding application.
//!
//! # Key Types
//!
//! - [`LayoutContext`] - carries the display rectangle being carved plus
//!   the measurement half of the drawing contract
//! - [`PaintContext`] - carries the drawing contract plus an optional
//!   invalid-rectangle culling hint

use horizon_ribbon_render::{Palette, Rect, Renderer, Size};

use crate::ribbon::RibbonMetrics;

/// Context provided during layout negotiation.
///
/// The display rectangle is mutated as composites carve space for their
/// children: a parent sets the slice, recurses, and restores. Measurement
/// goes through the same renderer the later paint pass will use, so
/// preferred sizes and drawn output agree.
pub struct LayoutContext<'a> {
    /// The rectangle the current element may occupy.
    display_rect: Rect,
    /// The renderer, used here only for measurement.
    renderer: &'a mut dyn Renderer,
    /// The active palette.
    palette: &'a dyn Palette,
    /// Calculated ribbon metrics.
    metrics: &'a RibbonMetrics,
}

impl<'a> LayoutContext<'a> {
    /// Create a new layout context for one pass.
    pub fn new(
        display_rect: Rect,
        renderer: &'a mut dyn Renderer,
        palette: &'a dyn Palette,
        metrics: &'a RibbonMetrics,
    ) -> Self {
        Self {
            display_rect,
            renderer,
            palette,
            metrics,
        }
    }

    /// The rectangle the current element may occupy.
    #[inline]
    pub fn display_rect(&self) -> Rect {
        self.display_rect
    }

    /// Replace the display rectangle, returning the previous one.
    ///
    /// Composites use this to carve space before recursing into a child,
    /// restoring the returned rectangle afterwards.
    pub fn swap_display_rect(&mut self, rect: Rect) -> Rect {
        std::mem::replace(&mut self.display_rect, rect)
    }

    /// Measure a single line of text in the host's ribbon font.
    pub fn measure_text(&self, text: &str) -> Size {
        self.renderer.measure_text(text)
    }

    /// The active palette.
    #[inline]
    pub fn palette(&self) -> &dyn Palette {
        self.palette
    }

    /// Calculated ribbon metrics.
    #[inline]
    pub fn metrics(&self) -> &RibbonMetrics {
        self.metrics
    }
}

/// Context provided during paint dispatch.
///
/// The clip rectangle, when present, is a culling hint: elements entirely
/// outside it may skip their draw calls, but must never skip state updates
/// needed for correctness.
pub struct PaintContext<'a> {
    /// The renderer to draw with.
    renderer: &'a mut dyn Renderer,
    /// The active palette.
    palette: &'a dyn Palette,
    /// The invalid rectangle, if the paint is restricted.
    clip: Option<Rect>,
}

impl<'a> PaintContext<'a> {
    /// Create a new paint context for one pass.
    pub fn new(
        renderer: &'a mut dyn Renderer,
        palette: &'a dyn Palette,
        clip: Option<Rect>,
    ) -> Self {
        Self {
            renderer,
            palette,
            clip,
        }
    }

    /// The renderer to draw with.
    #[inline]
    pub fn renderer(&mut self) -> &mut dyn Renderer {
        self.renderer
    }

    /// The active palette.
    #[inline]
    pub fn palette(&self) -> &dyn Palette {
        self.palette
    }

    /// The invalid rectangle, if the paint is restricted.
    #[inline]
    pub fn clip(&self) -> Option<Rect> {
        self.clip
    }

    /// Check whether an element with the given client rectangle needs to
    /// issue draw calls for this pass.
    ///
    /// Children are geometrically contained in their parent, so a parent
    /// that fails this check may return without visiting its subtree.
    pub fn should_draw(&self, rect: Rect) -> bool {
        match self.clip {
            Some(clip) => clip.intersects(&rect),
            None => true,
        }
    }
}
