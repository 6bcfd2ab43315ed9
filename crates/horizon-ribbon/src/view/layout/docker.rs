//! Edge-docking layout container.

use horizon_ribbon_render::{Rect, Size};

use super::Dock;
use crate::view::base::ViewBase;
use crate::view::composite::ViewComposite;
use crate::view::context::{LayoutContext, PaintContext};
use crate::view::traits::{ViewElement, ViewHandle};

/// One docked child and the edge it requested.
struct DockItem {
    view: ViewHandle,
    dock: Dock,
}

/// A container that carves its display rectangle edge by edge.
///
/// Children are processed in child order: each edge-docked child takes a
/// slice of the remaining rectangle from its requested edge, and the
/// `Fill` child takes whatever remains afterwards. Slices are clamped to
/// the remaining space, so the assigned rectangles always tile the display
/// rectangle exactly, with no gaps and no overlap.
///
/// At most one `Fill` child is supported; adding a second is a
/// configuration error caught by a debug assertion. In release builds the
/// extra child is tolerated and shares the remainder last-wins, shrinking
/// it for earlier fills.
#[derive(Default)]
pub struct ViewDocker {
    /// Common element state.
    base: ViewBase,
    /// Docked children, in child order.
    items: Vec<DockItem>,
}

impl ViewDocker {
    /// Create an empty docker.
    pub fn new() -> Self {
        Self {
            base: ViewBase::new(),
            items: Vec::new(),
        }
    }

    /// Append a child docked to the given edge.
    pub fn add(&mut self, view: ViewHandle, dock: Dock) {
        debug_assert!(
            !(dock == Dock::Fill && self.items.iter().any(|item| item.dock == Dock::Fill)),
            "a docker supports at most one Fill child"
        );
        self.items.push(DockItem { view, dock });
    }

    /// The number of children.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the docker has no children.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Remove all children without disposing them.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl ViewElement for ViewDocker {
    fn base(&self) -> &ViewBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ViewBase {
        &mut self.base
    }

    fn preferred_size(&mut self, ctx: &mut LayoutContext<'_>) -> Size {
        // Accumulate in reverse child order: the innermost (fill) size is
        // grown by each docked child working outwards.
        let mut size = Size::ZERO;
        for item in self.items.iter().rev() {
            let mut child = item.view.write();
            if !child.is_visible() {
                continue;
            }
            let child_size = child.preferred_size(ctx);
            match item.dock {
                Dock::Top | Dock::Bottom => {
                    size.height += child_size.height;
                    size.width = size.width.max(child_size.width);
                }
                Dock::Left | Dock::Right => {
                    size.width += child_size.width;
                    size.height = size.height.max(child_size.height);
                }
                Dock::Fill => {
                    size = size.max(child_size);
                }
            }
        }
        size
    }

    fn layout(&mut self, ctx: &mut LayoutContext<'_>) {
        let display = ctx.display_rect();
        self.base.set_client_rect(display);

        let mut remaining = display;
        let mut fills: Vec<&DockItem> = Vec::new();

        for item in &self.items {
            let visible = item.view.read().is_visible();
            if !visible {
                continue;
            }

            if item.dock == Dock::Fill {
                fills.push(item);
                continue;
            }

            let pref = item.view.write().preferred_size(ctx);
            let slice = match item.dock {
                Dock::Top => {
                    let h = pref.height.min(remaining.height());
                    let slice = Rect::new(remaining.left(), remaining.top(), remaining.width(), h);
                    remaining =
                        Rect::new(remaining.left(), remaining.top() + h, remaining.width(), remaining.height() - h);
                    slice
                }
                Dock::Bottom => {
                    let h = pref.height.min(remaining.height());
                    let slice =
                        Rect::new(remaining.left(), remaining.bottom() - h, remaining.width(), h);
                    remaining =
                        Rect::new(remaining.left(), remaining.top(), remaining.width(), remaining.height() - h);
                    slice
                }
                Dock::Left => {
                    let w = pref.width.min(remaining.width());
                    let slice = Rect::new(remaining.left(), remaining.top(), w, remaining.height());
                    remaining =
                        Rect::new(remaining.left() + w, remaining.top(), remaining.width() - w, remaining.height());
                    slice
                }
                Dock::Right => {
                    let w = pref.width.min(remaining.width());
                    let slice =
                        Rect::new(remaining.right() - w, remaining.top(), w, remaining.height());
                    remaining =
                        Rect::new(remaining.left(), remaining.top(), remaining.width() - w, remaining.height());
                    slice
                }
                Dock::Fill => unreachable!("fill items are deferred"),
            };

            let saved = ctx.swap_display_rect(slice);
            item.view.write().layout(ctx);
            ctx.swap_display_rect(saved);
        }

        // Fill children consume whatever remains after the edges.
        for item in fills {
            let saved = ctx.swap_display_rect(remaining);
            item.view.write().layout(ctx);
            ctx.swap_display_rect(saved);
        }
    }

    fn paint(&mut self, ctx: &mut PaintContext<'_>) {
        if !self.base.is_visible() || !ctx.should_draw(self.base.client_rect()) {
            return;
        }

        for item in &self.items {
            let mut child = item.view.write();
            if child.is_visible() {
                child.paint(ctx);
            }
        }
    }

    fn dispose(&mut self) {
        if !self.base.mark_disposed() {
            return;
        }
        let mut children: Vec<ViewHandle> =
            self.items.drain(..).map(|item| item.view).collect();
        ViewComposite::dispose_children(&mut children);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ribbon::RibbonMetrics;
    use crate::test_support::{TestPalette, leaf};
    use horizon_ribbon_render::RecordingRenderer;

    fn layout_docker(docker: &mut ViewDocker, display: Rect) {
        let mut renderer = RecordingRenderer::new();
        let palette = TestPalette;
        let metrics = RibbonMetrics::default();
        let mut ctx = LayoutContext::new(display, &mut renderer, &palette, &metrics);
        docker.layout(&mut ctx);
    }

    #[test]
    fn test_edges_and_fill_tile_exactly() {
        let mut docker = ViewDocker::new();
        let top = leaf(Size::new(0.0, 10.0));
        let bottom = leaf(Size::new(0.0, 8.0));
        let fill = leaf(Size::new(5.0, 5.0));
        docker.add(top.clone(), Dock::Top);
        docker.add(bottom.clone(), Dock::Bottom);
        docker.add(fill.clone(), Dock::Fill);

        let display = Rect::new(0.0, 0.0, 40.0, 30.0);
        layout_docker(&mut docker, display);

        assert_eq!(top.read().client_rect(), Rect::new(0.0, 0.0, 40.0, 10.0));
        assert_eq!(bottom.read().client_rect(), Rect::new(0.0, 22.0, 40.0, 8.0));
        assert_eq!(fill.read().client_rect(), Rect::new(0.0, 10.0, 40.0, 12.0));

        // No gaps, no overlap: the three slices sum to the display height.
        let total = top.read().client_rect().height()
            + bottom.read().client_rect().height()
            + fill.read().client_rect().height();
        assert_eq!(total, display.height());
    }

    #[test]
    fn test_layout_is_deterministic() {
        let mut docker = ViewDocker::new();
        let left = leaf(Size::new(12.0, 0.0));
        let fill = leaf(Size::new(5.0, 5.0));
        docker.add(left.clone(), Dock::Left);
        docker.add(fill.clone(), Dock::Fill);

        let display = Rect::new(10.0, 10.0, 40.0, 20.0);
        layout_docker(&mut docker, display);
        let first = (left.read().client_rect(), fill.read().client_rect());

        layout_docker(&mut docker, display);
        let second = (left.read().client_rect(), fill.read().client_rect());

        assert_eq!(first, second);
        assert_eq!(first.0, Rect::new(10.0, 10.0, 12.0, 20.0));
        assert_eq!(first.1, Rect::new(22.0, 10.0, 28.0, 20.0));
    }

    #[test]
    fn test_oversized_child_is_clamped_no_overflow() {
        let mut docker = ViewDocker::new();
        let tall = leaf(Size::new(0.0, 100.0));
        docker.add(tall.clone(), Dock::Top);

        let display = Rect::new(0.0, 0.0, 20.0, 30.0);
        layout_docker(&mut docker, display);

        assert_eq!(tall.read().client_rect(), display);
    }

    #[test]
    fn test_invisible_child_takes_no_space() {
        let mut docker = ViewDocker::new();
        let hidden = leaf(Size::new(0.0, 10.0));
        hidden.write().set_visible(false);
        let fill = leaf(Size::new(5.0, 5.0));
        docker.add(hidden, Dock::Top);
        docker.add(fill.clone(), Dock::Fill);

        let display = Rect::new(0.0, 0.0, 20.0, 30.0);
        layout_docker(&mut docker, display);

        assert_eq!(fill.read().client_rect(), display);
    }

    #[test]
    fn test_preferred_size_stacks_edges() {
        let mut docker = ViewDocker::new();
        docker.add(leaf(Size::new(30.0, 10.0)), Dock::Top);
        docker.add(leaf(Size::new(8.0, 6.0)), Dock::Left);
        docker.add(leaf(Size::new(20.0, 12.0)), Dock::Fill);

        let mut renderer = RecordingRenderer::new();
        let palette = TestPalette;
        let metrics = RibbonMetrics::default();
        let mut ctx = LayoutContext::new(Rect::ZERO, &mut renderer, &palette, &metrics);

        // Fill (20x12) widened by the left edge (8) then stacked under the
        // top edge (10 high, 30 wide minimum).
        assert_eq!(docker.preferred_size(&mut ctx), Size::new(30.0, 22.0));
    }

    #[test]
    #[should_panic(expected = "at most one Fill child")]
    #[cfg(debug_assertions)]
    fn test_second_fill_child_is_configuration_error() {
        let mut docker = ViewDocker::new();
        docker.add(leaf(Size::ZERO), Dock::Fill);
        docker.add(leaf(Size::ZERO), Dock::Fill);
    }
}
