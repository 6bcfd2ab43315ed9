//! An ordered container of child view elements.

use horizon_ribbon_render::Size;

use super::base::{ViewBase, ViewId};
use super::context::{LayoutContext, PaintContext};
use super::traits::{ViewElement, ViewHandle};

/// A view element that owns an ordered sequence of children.
///
/// Child order is significant: layout and paint both walk the list front to
/// back. The composite's own policy is the simplest one (every child is
/// offered the full display rectangle and the preferred size is the
/// component-wise maximum), which is what background/border elements
/// wrapping a single content child need. Docking and centring policies
/// live in [`super::layout`].
///
/// Disposing a composite disposes every descendant exactly once and then
/// releases child ownership; a second dispose is a no-op.
#[derive(Default)]
pub struct ViewComposite {
    /// Common element state.
    base: ViewBase,
    /// Owned children, in layout/paint order.
    children: Vec<ViewHandle>,
}

impl ViewComposite {
    /// Create an empty composite.
    pub fn new() -> Self {
        Self {
            base: ViewBase::new(),
            children: Vec::new(),
        }
    }

    /// Append a child.
    pub fn add(&mut self, child: ViewHandle) {
        self.children.push(child);
    }

    /// Insert a child at the given index.
    pub fn insert(&mut self, index: usize, child: ViewHandle) {
        self.children.insert(index, child);
    }

    /// Remove and return the child at the given index.
    pub fn remove(&mut self, index: usize) -> Option<ViewHandle> {
        if index < self.children.len() {
            Some(self.children.remove(index))
        } else {
            None
        }
    }

    /// Remove a child by identity. Returns `true` if it was found.
    pub fn remove_view(&mut self, id: ViewId) -> bool {
        let before = self.children.len();
        self.children.retain(|child| child.read().id() != id);
        self.children.len() != before
    }

    /// Remove all children without disposing them.
    pub fn clear(&mut self) {
        self.children.clear();
    }

    /// The number of children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Check if the composite has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// The children, in layout/paint order.
    pub fn children(&self) -> &[ViewHandle] {
        &self.children
    }

    /// Dispose every child of `children`, then release them.
    ///
    /// Shared by the container elements so their `dispose` overrides agree
    /// on cascade order (children in list order, then release).
    pub(crate) fn dispose_children(children: &mut Vec<ViewHandle>) {
        for child in children.iter() {
            child.write().dispose();
        }
        children.clear();
    }
}

impl ViewElement for ViewComposite {
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
        size
    }

    fn layout(&mut self, ctx: &mut LayoutContext<'_>) {
        self.base.set_client_rect(ctx.display_rect());

        for child in &self.children {
            let mut child = child.write();
            if child.is_visible() {
                child.layout(ctx);
            }
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
        Self::dispose_children(&mut self.children);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{CountingLeaf, TestPalette, leaf};
    use crate::ribbon::RibbonMetrics;
    use horizon_ribbon_render::{RecordingRenderer, Rect};

    #[test]
    fn test_child_order_and_removal() {
        let mut composite = ViewComposite::new();
        let first = leaf(Size::new(10.0, 10.0));
        let second = leaf(Size::new(20.0, 20.0));
        let second_id = second.read().id();

        composite.add(first);
        composite.add(second);
        assert_eq!(composite.len(), 2);

        assert!(composite.remove_view(second_id));
        assert!(!composite.remove_view(second_id));
        assert_eq!(composite.len(), 1);

        assert!(composite.remove(0).is_some());
        assert!(composite.is_empty());
    }

    #[test]
    fn test_preferred_size_is_max_of_children() {
        let mut composite = ViewComposite::new();
        composite.add(leaf(Size::new(10.0, 40.0)));
        composite.add(leaf(Size::new(30.0, 20.0)));

        let mut renderer = RecordingRenderer::new();
        let palette = TestPalette;
        let metrics = RibbonMetrics::default();
        let mut ctx = LayoutContext::new(Rect::ZERO, &mut renderer, &palette, &metrics);

        assert_eq!(composite.preferred_size(&mut ctx), Size::new(30.0, 40.0));
    }

    #[test]
    fn test_invisible_children_skipped() {
        let mut composite = ViewComposite::new();
        let hidden = leaf(Size::new(50.0, 50.0));
        hidden.write().set_visible(false);
        composite.add(hidden);
        composite.add(leaf(Size::new(10.0, 10.0)));

        let mut renderer = RecordingRenderer::new();
        let palette = TestPalette;
        let metrics = RibbonMetrics::default();
        let mut ctx = LayoutContext::new(Rect::ZERO, &mut renderer, &palette, &metrics);

        assert_eq!(composite.preferred_size(&mut ctx), Size::new(10.0, 10.0));
    }

    #[test]
    fn test_dispose_cascades_exactly_once() {
        let mut composite = ViewComposite::new();
        let child = CountingLeaf::shared();
        let grandchild = CountingLeaf::shared();

        let mut inner = ViewComposite::new();
        inner.add(grandchild.clone());
        let inner = std::sync::Arc::new(parking_lot::RwLock::new(inner));

        composite.add(child.clone());
        composite.add(inner);

        composite.dispose();
        composite.dispose();

        assert_eq!(child.read().dispose_count(), 1);
        assert_eq!(grandchild.read().dispose_count(), 1);
        assert!(composite.is_disposed());
        assert!(composite.is_empty());
    }
}
