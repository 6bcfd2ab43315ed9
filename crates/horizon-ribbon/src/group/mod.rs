//! Group item views.
//!
//! A group item view is the widget-level composite a ribbon group lays
//! out: it owns the per-size-variant subtrees of one definition and
//! implements the group-level protocols (focus chain, key tips, size
//! override) on top of [`ViewElement`].

pub mod color_button;

pub use color_button::RibbonColorButtonView;

use crate::keytip::KeyTipInfo;
use crate::model::ItemSize;
use crate::view::{ViewElement, ViewId};

/// The protocol a ribbon group speaks to its item views.
pub trait GroupItemView: ViewElement {
    /// The first focusable view of the item.
    ///
    /// `None` when the item is invisible or disabled; a missing focus
    /// target is an expected result, not an error.
    fn first_focus_view(&self) -> Option<ViewId>;

    /// The last focusable view of the item.
    fn last_focus_view(&self) -> Option<ViewId>;

    /// Whether the given view belongs to this item's focus chain.
    ///
    /// Group-level traversal uses this to find its position before moving
    /// to the neighbouring item.
    fn matches_focus_view(&self, current: ViewId) -> bool;

    /// Contribute key-tip entries for this item.
    ///
    /// Invisible items contribute nothing. `line_hint` tells Medium/Small
    /// items which group line they sit on.
    fn collect_key_tips(&self, list: &mut Vec<KeyTipInfo>, line_hint: u8);

    /// Override the item's size variant for the current group layout.
    ///
    /// Out-of-range requests resolve to the nearest declared size.
    fn set_item_size(&mut self, size: ItemSize);

    /// Reset the size variant to the definition's current size.
    fn reset_item_size(&mut self);
}
