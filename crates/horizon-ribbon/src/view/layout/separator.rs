//! Fixed-length spacing element.

use horizon_ribbon_render::Size;

use crate::view::base::ViewBase;
use crate::view::context::{LayoutContext, PaintContext};
use crate::view::traits::ViewElement;

/// A fixed-size spacer that draws nothing.
///
/// Used to put themed gaps between row elements (for example around a
/// drop-down arrow) and thin breaks between docked lines. Visibility is
/// toggled by the owning widget when the neighbouring content comes and
/// goes.
pub struct FixedSeparator {
    /// Common element state.
    base: ViewBase,
    /// Edge length reported in both dimensions.
    length: f32,
}

impl FixedSeparator {
    /// Create a separator with the given edge length.
    pub fn new(length: f32) -> Self {
        Self {
            base: ViewBase::new(),
            length,
        }
    }

    /// The separator's edge length.
    pub fn length(&self) -> f32 {
        self.length
    }
}

impl ViewElement for FixedSeparator {
    fn base(&self) -> &ViewBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ViewBase {
        &mut self.base
    }

    fn preferred_size(&mut self, _ctx: &mut LayoutContext<'_>) -> Size {
        Size::new(self.length, self.length)
    }

    fn layout(&mut self, ctx: &mut LayoutContext<'_>) {
        self.base.set_client_rect(ctx.display_rect());
    }

    fn paint(&mut self, _ctx: &mut PaintContext<'_>) {
        // Pure spacing; nothing to draw.
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ribbon::RibbonMetrics;
    use crate::test_support::TestPalette;
    use horizon_ribbon_render::{RecordingRenderer, Rect};

    #[test]
    fn test_reports_fixed_size() {
        let mut sep = FixedSeparator::new(4.0);
        let mut renderer = RecordingRenderer::new();
        let palette = TestPalette;
        let metrics = RibbonMetrics::default();
        let mut ctx = LayoutContext::new(Rect::ZERO, &mut renderer, &palette, &metrics);
        assert_eq!(sep.preferred_size(&mut ctx), Size::new(4.0, 4.0));
    }

    #[test]
    fn test_paints_nothing() {
        let mut sep = FixedSeparator::new(4.0);
        let mut renderer = RecordingRenderer::new();
        let palette = TestPalette;
        let mut ctx = PaintContext::new(&mut renderer, &palette, None);
        sep.paint(&mut ctx);
        assert!(renderer.ops().is_empty());
    }
}
