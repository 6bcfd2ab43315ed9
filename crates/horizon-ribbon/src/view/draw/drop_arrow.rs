//! Drop-down arrow glyph.

use horizon_ribbon_render::{PaletteState, Point, Size, Stroke};

use crate::view::base::ViewBase;
use crate::view::context::{LayoutContext, PaintContext};
use crate::view::traits::ViewElement;

/// Edge length of the arrow's layout box.
const ARROW_BOX: f32 = 8.0;
/// Half-width of the chevron.
const ARROW_HALF: f32 = 3.0;

/// The chevron drawn on drop-down and split buttons.
///
/// Visibility is controlled by the owning widget: the arrow only shows for
/// button types that actually open a drop-down.
#[derive(Default)]
pub struct DropArrow {
    /// Common element state.
    base: ViewBase,
}

impl DropArrow {
    /// Create a drop arrow.
    pub fn new() -> Self {
        Self {
            base: ViewBase::new(),
        }
    }
}

impl ViewElement for DropArrow {
    fn base(&self) -> &ViewBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ViewBase {
        &mut self.base
    }

    fn preferred_size(&mut self, _ctx: &mut LayoutContext<'_>) -> Size {
        Size::new(ARROW_BOX, ARROW_BOX)
    }

    fn layout(&mut self, ctx: &mut LayoutContext<'_>) {
        self.base.set_client_rect(ctx.display_rect());
    }

    fn paint(&mut self, ctx: &mut PaintContext<'_>) {
        let rect = self.base.client_rect();
        if !self.base.is_visible() || !ctx.should_draw(rect) {
            return;
        }

        let state = PaletteState::from_flags(self.base.is_enabled(), false);
        let color = ctx.palette().drop_arrow(state);
        let center = rect.center();

        let points = [
            Point::new(center.x - ARROW_HALF, center.y - ARROW_HALF / 2.0),
            Point::new(center.x, center.y + ARROW_HALF / 2.0),
            Point::new(center.x + ARROW_HALF, center.y - ARROW_HALF / 2.0),
        ];

        let stroke = Stroke::new(color, 1.5);
        ctx.renderer().draw_polyline(&points, &stroke);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::TestPalette;
    use horizon_ribbon_render::{DrawOp, RecordingRenderer, Rect};

    #[test]
    fn test_paints_chevron_when_visible() {
        let mut arrow = DropArrow::new();
        arrow.base_mut().set_client_rect(Rect::new(0.0, 0.0, 8.0, 8.0));

        let mut renderer = RecordingRenderer::new();
        let palette = TestPalette;
        let mut ctx = PaintContext::new(&mut renderer, &palette, None);
        arrow.paint(&mut ctx);

        assert!(matches!(renderer.ops()[0], DrawOp::Polyline(..)));
    }

    #[test]
    fn test_hidden_arrow_paints_nothing() {
        let mut arrow = DropArrow::new();
        arrow.set_visible(false);

        let mut renderer = RecordingRenderer::new();
        let palette = TestPalette;
        let mut ctx = PaintContext::new(&mut renderer, &palette, None);
        arrow.paint(&mut ctx);

        assert!(renderer.ops().is_empty());
    }
}
