//! View element base implementation.
//!
//! This module provides [`ViewBase`], the common state every view element
//! carries: identity, the client rectangle assigned by layout, and the
//! visible/enabled/checked/disposed flags.

use std::sync::atomic::{AtomicU64, Ordering};

use horizon_ribbon_render::Rect;

/// Identifies a view element for the lifetime of the process.
///
/// Identities are never reused, so a stale `ViewId` held by a definition
/// back-reference can never accidentally name a newer element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewId(u64);

/// Next view identity to hand out.
static NEXT_VIEW_ID: AtomicU64 = AtomicU64::new(1);

impl ViewId {
    /// Allocate a fresh identity.
    pub fn next() -> Self {
        Self(NEXT_VIEW_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// The common state shared by all view elements.
///
/// Concrete elements embed this as a field and expose it through
/// [`ViewElement::base`](super::ViewElement::base); the trait's provided
/// methods delegate here.
#[derive(Debug)]
pub struct ViewBase {
    /// The element's identity.
    id: ViewId,
    /// Rectangle assigned by the most recent layout pass.
    client_rect: Rect,
    /// Whether the element participates in layout and paint.
    visible: bool,
    /// Whether the element draws in its enabled presentation.
    enabled: bool,
    /// Whether the element draws in its checked presentation.
    checked: bool,
    /// Whether the element has been disposed.
    disposed: bool,
}

impl Default for ViewBase {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewBase {
    /// Create a new view base with a fresh identity.
    pub fn new() -> Self {
        Self {
            id: ViewId::next(),
            client_rect: Rect::ZERO,
            visible: true,
            enabled: true,
            checked: false,
            disposed: false,
        }
    }

    /// The element's identity.
    #[inline]
    pub fn id(&self) -> ViewId {
        self.id
    }

    /// Rectangle assigned by the most recent layout pass.
    #[inline]
    pub fn client_rect(&self) -> Rect {
        self.client_rect
    }

    /// Assign the client rectangle (called from layout).
    pub fn set_client_rect(&mut self, rect: Rect) {
        self.client_rect = rect;
    }

    /// Check if the element is visible.
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Set whether the element is visible.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Check if the element is enabled.
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Set whether the element is enabled.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Check if the element is checked.
    #[inline]
    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// Set whether the element is checked.
    pub fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
    }

    /// Check if the element has been disposed.
    #[inline]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Mark the element disposed.
    ///
    /// Returns `false` if it was already disposed, making double-disposal
    /// a detectable no-op for callers that cascade.
    pub fn mark_disposed(&mut self) -> bool {
        if self.disposed {
            return false;
        }
        self.disposed = true;
        true
    }
}
