//! Core view element trait definition.
//!
//! This module defines the [`ViewElement`] trait which is the foundation of
//! the retained-mode view tree, plus the [`ViewHandle`] alias composites
//! store their children as.
//!
//! # Related Types
//!
//! - [`super::ViewBase`] - Common state for elements
//! - [`super::ViewComposite`] - Ordered child container
//! - [`super::context::LayoutContext`] / [`super::context::PaintContext`] -
//!   pass contexts

use std::sync::Arc;

use parking_lot::RwLock;

use horizon_ribbon_render::{Rect, Size};

use super::base::{ViewBase, ViewId};
use super::context::{LayoutContext, PaintContext};

/// A shared, type-erased view element.
///
/// Composites own their children through this handle; widgets additionally
/// keep typed clones ([`SharedView`]) of the specific descendants they need
/// to poke when reacting to definition changes. The view engine runs on a
/// single logical thread, so lock acquisition never contends; the lock
/// exists to make sharing sound.
pub type ViewHandle = Arc<RwLock<dyn ViewElement>>;

/// A shared view element of a known concrete type.
///
/// Coerces to [`ViewHandle`] when handed to a composite.
pub type SharedView<T> = Arc<RwLock<T>>;

/// The core trait for all view elements.
///
/// A view element is one node in the retained-mode scene graph: it has a
/// client rectangle assigned by layout, visibility/enabled/checked state,
/// and knows how to negotiate its size, lay itself out, and paint itself.
///
/// # Required Methods
///
/// - [`base()`](Self::base) / [`base_mut()`](Self::base_mut): access to the
///   embedded [`ViewBase`]
/// - [`preferred_size()`](Self::preferred_size): size negotiation
/// - [`layout()`](Self::layout): rectangle assignment
/// - [`paint()`](Self::paint): drawing
///
/// # Disposal
///
/// [`dispose()`](Self::dispose) severs any definition subscriptions first,
/// then cascades to children, then marks the element disposed. The default
/// implementation covers leaf elements with no subscriptions; composites
/// override it to cascade. Double-disposal is a no-op, not an error.
pub trait ViewElement: Send + Sync {
    /// Get a reference to the element's base state.
    fn base(&self) -> &ViewBase;

    /// Get a mutable reference to the element's base state.
    fn base_mut(&mut self) -> &mut ViewBase;

    /// Discover the preferred size of the element.
    ///
    /// This is a pure function of the element's current state and the
    /// context: it must not mutate layout-relevant state, beyond
    /// configuring drawable flags that are part of the current requested
    /// configuration (and caching measurements that are deterministic for
    /// that configuration).
    fn preferred_size(&mut self, ctx: &mut LayoutContext<'_>) -> Size;

    /// Perform a layout of the element and its children.
    ///
    /// Assigns the client rectangle from the context's display rectangle,
    /// then carves the display rectangle for children per the element's
    /// layout policy.
    fn layout(&mut self, ctx: &mut LayoutContext<'_>);

    /// Paint the element and its children, honoring visibility and the
    /// context's culling hint.
    fn paint(&mut self, ctx: &mut PaintContext<'_>);

    /// Release the element.
    ///
    /// The default implementation marks the base disposed; elements with
    /// subscriptions or children override it and must remain idempotent.
    fn dispose(&mut self) {
        self.base_mut().mark_disposed();
    }

    // =========================================================================
    // State (default implementations delegate to ViewBase)
    // =========================================================================

    /// The element's identity.
    fn id(&self) -> ViewId {
        self.base().id()
    }

    /// Rectangle assigned by the most recent layout pass.
    fn client_rect(&self) -> Rect {
        self.base().client_rect()
    }

    /// Check if the element is visible.
    fn is_visible(&self) -> bool {
        self.base().is_visible()
    }

    /// Set whether the element is visible.
    fn set_visible(&mut self, visible: bool) {
        self.base_mut().set_visible(visible);
    }

    /// Check if the element is enabled.
    fn is_enabled(&self) -> bool {
        self.base().is_enabled()
    }

    /// Set whether the element is enabled.
    fn set_enabled(&mut self, enabled: bool) {
        self.base_mut().set_enabled(enabled);
    }

    /// Check if the element is checked.
    fn is_checked(&self) -> bool {
        self.base().is_checked()
    }

    /// Set whether the element is checked.
    fn set_checked(&mut self, checked: bool) {
        self.base_mut().set_checked(checked);
    }

    /// Check if the element has been disposed.
    fn is_disposed(&self) -> bool {
        self.base().is_disposed()
    }
}
