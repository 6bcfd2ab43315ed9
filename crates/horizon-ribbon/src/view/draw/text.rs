//! Text line element of a group color button.

use std::sync::Weak;

use horizon_ribbon_render::{PaletteState, Size};

use crate::model::RibbonColorButton;
use crate::view::base::ViewBase;
use crate::view::context::{LayoutContext, PaintContext};
use crate::view::traits::ViewElement;

/// Horizontal slack added around measured text.
const TEXT_PADDING: f32 = 2.0;

/// One text line of a color button presentation.
///
/// The measured size is cached between layout passes; the reactor calls
/// [`make_dirty`](Self::make_dirty) when the definition's text changes and
/// the next negotiation re-measures.
pub struct ColorButtonText {
    /// Common element state.
    base: ViewBase,
    /// The observed definition. Non-owning.
    model: Weak<RibbonColorButton>,
    /// Whether this element shows the first text line.
    first_line: bool,
    /// Cached measurement of the current text.
    cached_size: Option<Size>,
}

impl ColorButtonText {
    /// Create the element for the first or second text line.
    pub fn new(model: Weak<RibbonColorButton>, first_line: bool) -> Self {
        Self {
            base: ViewBase::new(),
            model,
            first_line,
            cached_size: None,
        }
    }

    /// Whether this element shows the first text line.
    pub fn is_first_line(&self) -> bool {
        self.first_line
    }

    /// Invalidate the cached measurement.
    pub fn make_dirty(&mut self) {
        self.cached_size = None;
    }

    /// Whether the measurement is currently dirty (test observability).
    pub fn is_dirty(&self) -> bool {
        self.cached_size.is_none()
    }

    /// The text this element currently presents.
    fn text(&self) -> String {
        let Some(model) = self.model.upgrade() else {
            return String::new();
        };
        if self.first_line {
            model.effective_text_line1()
        } else {
            model.effective_text_line2()
        }
    }
}

impl ViewElement for ColorButtonText {
    fn base(&self) -> &ViewBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ViewBase {
        &mut self.base
    }

    fn preferred_size(&mut self, ctx: &mut LayoutContext<'_>) -> Size {
        if let Some(size) = self.cached_size {
            return size;
        }

        let measured = ctx.measure_text(&self.text());
        let size = if measured.is_empty() {
            measured
        } else {
            Size::new(measured.width + TEXT_PADDING * 2.0, measured.height)
        };
        self.cached_size = Some(size);
        size
    }

    fn layout(&mut self, ctx: &mut LayoutContext<'_>) {
        self.base.set_client_rect(ctx.display_rect());
    }

    fn paint(&mut self, ctx: &mut PaintContext<'_>) {
        let rect = self.base.client_rect();
        if !self.base.is_visible() || !ctx.should_draw(rect) {
            return;
        }

        let text = self.text();
        if text.is_empty() {
            return;
        }

        let state = PaletteState::from_flags(self.base.is_enabled(), false);
        let color = ctx.palette().content_text(state);
        ctx.renderer().draw_text(&text, rect, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ribbon::RibbonMetrics;
    use crate::test_support::TestPalette;
    use horizon_ribbon_render::{RecordingRenderer, Rect};
    use std::sync::Arc;

    #[test]
    fn test_measurement_cached_until_dirty() {
        let model = crate::model::RibbonColorButton::new();
        model.set_text_line1("ab");
        let mut text = ColorButtonText::new(Arc::downgrade(&model), true);

        let mut renderer = RecordingRenderer::new();
        let palette = TestPalette;
        let metrics = RibbonMetrics::default();
        let mut ctx = LayoutContext::new(Rect::ZERO, &mut renderer, &palette, &metrics);

        // "ab" = 2 * 7 + padding
        assert_eq!(text.preferred_size(&mut ctx), Size::new(18.0, 14.0));

        // Stale cache survives a definition edit...
        model.set_text_line1("abcd");
        assert_eq!(text.preferred_size(&mut ctx), Size::new(18.0, 14.0));

        // ...until marked dirty.
        text.make_dirty();
        assert_eq!(text.preferred_size(&mut ctx), Size::new(32.0, 14.0));
    }

    #[test]
    fn test_empty_text_measures_zero_and_paints_nothing() {
        let model = crate::model::RibbonColorButton::new();
        model.set_text_line2("");
        let mut text = ColorButtonText::new(Arc::downgrade(&model), false);

        let mut renderer = RecordingRenderer::new();
        let palette = TestPalette;
        let metrics = RibbonMetrics::default();
        let mut ctx = LayoutContext::new(Rect::ZERO, &mut renderer, &palette, &metrics);
        assert_eq!(text.preferred_size(&mut ctx), Size::ZERO);

        let mut ctx = PaintContext::new(&mut renderer, &palette, None);
        text.paint(&mut ctx);
        assert!(renderer.ops().is_empty());
    }

    #[test]
    fn test_paints_effective_text() {
        let model = crate::model::RibbonColorButton::new();
        model.set_text_line1("Fill");
        let mut text = ColorButtonText::new(Arc::downgrade(&model), true);
        text.base_mut()
            .set_client_rect(Rect::new(0.0, 0.0, 40.0, 14.0));

        let mut renderer = RecordingRenderer::new();
        let palette = TestPalette;
        let mut ctx = PaintContext::new(&mut renderer, &palette, None);
        text.paint(&mut ctx);

        assert_eq!(renderer.texts(), vec!["Fill"]);
    }
}
