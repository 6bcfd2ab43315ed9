//! Key-tip (keyboard accelerator) overlay protocol.
//!
//! When the host enters accelerator mode it asks each group item view to
//! contribute [`KeyTipInfo`] entries to a caller-owned list. Each entry
//! carries everything the overlay needs: the accelerator string, where on
//! screen to anchor the tip, the item's client rectangle, and an
//! invocation target to fire when the user types the string.
//!
//! Entries are built fresh for every collection and are owned by the
//! caller's list for the duration of the overlay's display.

use std::sync::Arc;

use horizon_ribbon_render::{Point, Rect};

use crate::ribbon::Ribbon;

/// A target that can be invoked when its key tip is selected.
///
/// Implementations perform the equivalent of a primary activation: a
/// click, or a drop-down for items whose primary action is showing one.
pub trait KeyTipTarget: Send + Sync {
    /// Perform the activation this key tip stands for.
    fn key_tip_select(&self, ribbon: &Ribbon);
}

/// One entry in a key-tip overlay.
pub struct KeyTipInfo {
    /// Enabled state of the source item at collection time.
    enabled: bool,
    /// Whether the overlay should currently show this tip.
    visible: bool,
    /// Characters that select the item.
    key_string: String,
    /// Screen coordinate for the center of the tip.
    screen_pt: Point,
    /// Client rectangle of the source item.
    client_rect: Rect,
    /// Target invoked on selection.
    target: Arc<dyn KeyTipTarget>,
}

impl KeyTipInfo {
    /// Create a new key-tip entry.
    pub fn new(
        enabled: bool,
        key_string: impl Into<String>,
        screen_pt: Point,
        client_rect: Rect,
        target: Arc<dyn KeyTipTarget>,
    ) -> Self {
        Self {
            enabled,
            visible: true,
            key_string: key_string.into(),
            screen_pt,
            client_rect,
            target,
        }
    }

    /// Enabled state of the source item at collection time.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether the overlay should currently show this tip.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show or hide the tip (used while the user narrows a multi-character
    /// prefix).
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// The characters that select the item.
    pub fn key_string(&self) -> &str {
        &self.key_string
    }

    /// Screen coordinate for the center of the tip.
    pub fn screen_pt(&self) -> Point {
        self.screen_pt
    }

    /// Client rectangle of the source item.
    pub fn client_rect(&self) -> Rect {
        self.client_rect
    }

    /// Perform the selection of this entry.
    ///
    /// Selecting a disabled entry is a no-op, not an error.
    pub fn select(&self, ribbon: &Ribbon) {
        if !self.enabled {
            tracing::trace!(
                target: "horizon_ribbon::keytip",
                key = %self.key_string,
                "ignoring selection of disabled key tip"
            );
            return;
        }
        self.target.key_tip_select(ribbon);
    }
}

impl std::fmt::Debug for KeyTipInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyTipInfo")
            .field("enabled", &self.enabled)
            .field("visible", &self.visible)
            .field("key_string", &self.key_string)
            .field("screen_pt", &self.screen_pt)
            .field("client_rect", &self.client_rect)
            .finish_non_exhaustive()
    }
}
