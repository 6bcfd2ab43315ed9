//! Color swatch element of a group color button.

use std::sync::Weak;

use horizon_ribbon_render::{Rect, Size, Stroke};

use crate::model::RibbonColorButton;
use crate::view::base::ViewBase;
use crate::view::context::{LayoutContext, PaintContext};
use crate::view::traits::ViewElement;

/// Edge length of the large presentation's image box.
const LARGE_IMAGE_EDGE: f32 = 32.0;
/// Edge length of the small presentation's image box.
const SMALL_IMAGE_EDGE: f32 = 16.0;

/// The image-plus-selection-strip block of a color button.
///
/// Composes the definition's image with the currently selected color drawn
/// as a strip inside the image box. The strip geometry is cached; the
/// reactor calls [`mark_swatch_dirty`](Self::mark_swatch_dirty) when any
/// selection field changes and the next paint recomposes it.
pub struct ColorButtonSwatch {
    /// Common element state.
    base: ViewBase,
    /// The observed definition. Non-owning.
    model: Weak<RibbonColorButton>,
    /// Whether this is the large presentation's swatch.
    large: bool,
    /// Cached strip rectangle, relative to the image box.
    cached_strip: Option<Rect>,
}

impl ColorButtonSwatch {
    /// Create the swatch element for one presentation.
    pub fn new(model: Weak<RibbonColorButton>, large: bool) -> Self {
        Self {
            base: ViewBase::new(),
            model,
            large,
            cached_strip: None,
        }
    }

    /// Whether this is the large presentation's swatch.
    pub fn is_large(&self) -> bool {
        self.large
    }

    /// Invalidate the cached selection strip composition.
    pub fn mark_swatch_dirty(&mut self) {
        self.cached_strip = None;
    }

    /// Whether the composition is currently dirty (test observability).
    pub fn is_swatch_dirty(&self) -> bool {
        self.cached_strip.is_none()
    }

    /// The strip rectangle, recomposing it from the definition if dirty.
    fn strip_rect(&mut self, model: &RibbonColorButton) -> Rect {
        *self.cached_strip.get_or_insert_with(|| {
            if self.large {
                model.selected_rect_large()
            } else {
                model.selected_rect_small()
            }
        })
    }
}

impl ViewElement for ColorButtonSwatch {
    fn base(&self) -> &ViewBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ViewBase {
        &mut self.base
    }

    fn preferred_size(&mut self, _ctx: &mut LayoutContext<'_>) -> Size {
        let edge = if self.large {
            LARGE_IMAGE_EDGE
        } else {
            SMALL_IMAGE_EDGE
        };
        Size::new(edge, edge)
    }

    fn layout(&mut self, ctx: &mut LayoutContext<'_>) {
        self.base.set_client_rect(ctx.display_rect());
    }

    fn paint(&mut self, ctx: &mut PaintContext<'_>) {
        let rect = self.base.client_rect();
        if !self.base.is_visible() || !ctx.should_draw(rect) {
            return;
        }
        let Some(model) = self.model.upgrade() else {
            return;
        };

        // Host-owned image first, then the selection strip composed over it.
        let image = if self.large {
            model.effective_image_large()
        } else {
            model.effective_image_small()
        };
        if let Some(image) = image {
            ctx.renderer().draw_image(image, rect);
        }

        let strip = self.strip_rect(&model).offset(rect.left(), rect.top());
        let mut color = model.selected_color();
        if !self.base.is_enabled() {
            color = color.with_alpha(color.a * 0.4);
        }

        if color.is_transparent() {
            // Nothing selected: outline the strip so it stays discoverable.
            let stroke = Stroke::new(model.empty_border_color(), 1.0);
            ctx.renderer().stroke_rect(strip, &stroke);
        } else {
            ctx.renderer().fill_rect(strip, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::TestPalette;
    use horizon_ribbon_render::{Color, DrawOp, RecordingRenderer};
    use std::sync::Arc;

    fn swatch_for(model: &Arc<RibbonColorButton>, large: bool) -> ColorButtonSwatch {
        let mut swatch = ColorButtonSwatch::new(Arc::downgrade(model), large);
        swatch
            .base_mut()
            .set_client_rect(Rect::new(10.0, 10.0, 32.0, 32.0));
        swatch
    }

    #[test]
    fn test_strip_drawn_at_offset_rect() {
        let model = RibbonColorButton::new();
        model.set_selected_rect_large(Rect::new(2.0, 26.0, 28.0, 4.0));
        model.set_selected_color(Color::BLUE);
        let mut swatch = swatch_for(&model, true);

        let mut renderer = RecordingRenderer::new();
        let palette = TestPalette;
        let mut ctx = PaintContext::new(&mut renderer, &palette, None);
        swatch.paint(&mut ctx);

        assert_eq!(
            renderer.ops(),
            &[DrawOp::FillRect(Rect::new(12.0, 36.0, 28.0, 4.0), Color::BLUE)]
        );
    }

    #[test]
    fn test_transparent_selection_draws_empty_border() {
        let model = RibbonColorButton::new();
        model.set_selected_color(Color::TRANSPARENT);
        let mut swatch = swatch_for(&model, false);

        let mut renderer = RecordingRenderer::new();
        let palette = TestPalette;
        let mut ctx = PaintContext::new(&mut renderer, &palette, None);
        swatch.paint(&mut ctx);

        assert!(matches!(renderer.ops()[0], DrawOp::StrokeRect(..)));
    }

    #[test]
    fn test_dirty_strip_recomposes_from_model() {
        let model = RibbonColorButton::new();
        model.set_selected_rect_large(Rect::new(0.0, 0.0, 10.0, 2.0));
        let mut swatch = swatch_for(&model, true);

        let mut renderer = RecordingRenderer::new();
        let palette = TestPalette;
        let mut ctx = PaintContext::new(&mut renderer, &palette, None);
        swatch.paint(&mut ctx);
        assert!(!swatch.is_swatch_dirty());

        // Changing the definition alone does not move the cached strip...
        model.set_selected_rect_large(Rect::new(0.0, 0.0, 20.0, 2.0));
        renderer.clear();
        let mut ctx = PaintContext::new(&mut renderer, &palette, None);
        swatch.paint(&mut ctx);
        assert_eq!(
            renderer.ops()[0],
            DrawOp::FillRect(Rect::new(10.0, 10.0, 10.0, 2.0), Color::RED)
        );

        // ...until the reactor marks it dirty.
        swatch.mark_swatch_dirty();
        renderer.clear();
        let mut ctx = PaintContext::new(&mut renderer, &palette, None);
        swatch.paint(&mut ctx);
        assert_eq!(
            renderer.ops()[0],
            DrawOp::FillRect(Rect::new(10.0, 10.0, 20.0, 2.0), Color::RED)
        );
    }

    #[test]
    fn test_image_drawn_before_strip() {
        let model = RibbonColorButton::new();
        model.set_image_large(Some(horizon_ribbon_render::ImageHandle(7)));
        let mut swatch = swatch_for(&model, true);

        let mut renderer = RecordingRenderer::new();
        let palette = TestPalette;
        let mut ctx = PaintContext::new(&mut renderer, &palette, None);
        swatch.paint(&mut ctx);

        assert!(matches!(renderer.ops()[0], DrawOp::Image(..)));
        assert!(matches!(renderer.ops()[1], DrawOp::FillRect(..)));
    }
}
