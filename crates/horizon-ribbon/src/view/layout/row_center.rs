//! Centred horizontal row layout container.

use horizon_ribbon_render::{Rect, Size};

use crate::view::base::ViewBase;
use crate::view::composite::ViewComposite;
use crate::view::context::{LayoutContext, PaintContext};
use crate::view::traits::{ViewElement, ViewHandle};

/// A container that lays its children out as one horizontal run, centred
/// both ways within the display rectangle.
///
/// Each visible child gets its preferred size; the run as a whole is
/// centred horizontally, and each child is centred vertically on the row.
/// Group buttons use this for their text/drop-arrow line.
#[derive(Default)]
pub struct RowCenter {
    /// Common element state.
    base: ViewBase,
    /// Children, in run order.
    children: Vec<ViewHandle>,
}

impl RowCenter {
    /// Create an empty row.
    pub fn new() -> Self {
        Self {
            base: ViewBase::new(),
            children: Vec::new(),
        }
    }

    /// Append a child to the run.
    pub fn add(&mut self, child: ViewHandle) {
        self.children.push(child);
    }

    /// The number of children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Check if the row has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl ViewElement for RowCenter {
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
            if !child.is_visible() {
                continue;
            }
            let child_size = child.preferred_size(ctx);
            size.width += child_size.width;
            size.height = size.height.max(child_size.height);
        }
        size
    }

    fn layout(&mut self, ctx: &mut LayoutContext<'_>) {
        let display = ctx.display_rect();
        self.base.set_client_rect(display);

        // Measure the run first so it can be centred as a whole.
        let mut sizes = Vec::with_capacity(self.children.len());
        let mut run_width = 0.0f32;
        for child in &self.children {
            let mut child = child.write();
            if !child.is_visible() {
                sizes.push(None);
                continue;
            }
            let size = child.preferred_size(ctx);
            run_width += size.width;
            sizes.push(Some(size));
        }

        let mut x = display.center().x - run_width / 2.0;
        x = x.max(display.left());

        for (child, size) in self.children.iter().zip(sizes) {
            let Some(size) = size else { continue };
            let y = display.center().y - size.height / 2.0;
            let slice = Rect::new(x, y, size.width, size.height);
            x += size.width;

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
