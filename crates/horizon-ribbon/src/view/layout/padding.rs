//! Padded centring wrapper.

use horizon_ribbon_render::{Padding, Rect, Size};

use crate::view::base::ViewBase;
use crate::view::composite::ViewComposite;
use crate::view::context::{LayoutContext, PaintContext};
use crate::view::traits::{ViewElement, ViewHandle};

/// A container that centres each child at its preferred size inside a
/// padded display rectangle.
///
/// Group buttons wrap their image element in one of these so the image
/// keeps its natural size with themed breathing room around it.
pub struct CenterPadding {
    /// Common element state.
    base: ViewBase,
    /// The padding applied inside the display rectangle.
    padding: Padding,
    /// Children, each centred independently.
    children: Vec<ViewHandle>,
}

impl CenterPadding {
    /// Create an empty wrapper with the given padding.
    pub fn new(padding: Padding) -> Self {
        Self {
            base: ViewBase::new(),
            padding,
            children: Vec::new(),
        }
    }

    /// Append a child.
    pub fn add(&mut self, child: ViewHandle) {
        self.children.push(child);
    }

    /// The padding applied inside the display rectangle.
    pub fn padding(&self) -> Padding {
        self.padding
    }
}

impl ViewElement for CenterPadding {
    fn base(&self) -> &ViewBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ViewBase {
        &mut self.base
    }

    fn preferred_size(&mut self, ctx: &mut LayoutContext<'_>) -> Size {
        let mut size = Size::ZERO;
        for child in &self.children {
            let mut child = child.write();
            if child.is_visible() {
                size = size.max(child.preferred_size(ctx));
            }
        }
        Size::new(
            size.width + self.padding.horizontal(),
            size.height + self.padding.vertical(),
        )
    }

    fn layout(&mut self, ctx: &mut LayoutContext<'_>) {
        let display = ctx.display_rect();
        self.base.set_client_rect(display);

        let inner = display.shrink(self.padding);

        for child in &self.children {
            let pref = {
                let mut child = child.write();
                if !child.is_visible() {
                    continue;
                }
                child.preferred_size(ctx)
            };

            let size = Size::new(pref.width.min(inner.width()), pref.height.min(inner.height()));
            let slice = Rect::from_center(inner.center(), size);

            let saved = ctx.swap_display_rect(slice);
            child.write().layout(ctx);
            ctx.swap_display_rect(saved);
        }
    }

    fn paint(&mut self, ctx: &mut PaintContext<'_>) {
        if !self.base.is_visible() || !ctx.should_draw(self.base.client_rect()) {
            return;
        }

        for child in &self.children {
            let mut child = child.write();
            if child.is_visible() {
                child.paint(ctx);
            }
        }
    }

    fn dispose(&mut self) {
        if !self.base.mark_disposed() {
            return;
        }
        ViewComposite::dispose_children(&mut self.children);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ribbon::RibbonMetrics;
    use crate::test_support::{TestPalette, leaf};
    use horizon_ribbon_render::RecordingRenderer;

    #[test]
    fn test_preferred_size_includes_padding() {
        let mut wrapper = CenterPadding::new(Padding::new(3.0, 2.0, 3.0, 3.0));
        wrapper.add(leaf(Size::new(32.0, 32.0)));

        let mut renderer = RecordingRenderer::new();
        let palette = TestPalette;
        let metrics = RibbonMetrics::default();
        let mut ctx = LayoutContext::new(Rect::ZERO, &mut renderer, &palette, &metrics);

        assert_eq!(wrapper.preferred_size(&mut ctx), Size::new(38.0, 37.0));
    }

    #[test]
    fn test_child_centered_in_padded_area() {
        let mut wrapper = CenterPadding::new(Padding::uniform(3.0));
        let child = leaf(Size::new(16.0, 16.0));
        wrapper.add(child.clone());

        let mut renderer = RecordingRenderer::new();
        let palette = TestPalette;
        let metrics = RibbonMetrics::default();
        let display = Rect::new(0.0, 0.0, 38.0, 38.0);
        let mut ctx = LayoutContext::new(display, &mut renderer, &palette, &metrics);
        wrapper.layout(&mut ctx);

        assert_eq!(child.read().client_rect(), Rect::new(11.0, 11.0, 16.0, 16.0));
    }
}
