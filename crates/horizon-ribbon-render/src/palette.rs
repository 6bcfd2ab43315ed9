//! Palette contract: state-keyed drawing values supplied by the theme.
//!
//! The ribbon never hard-codes its colors. Every draw node asks the active
//! [`Palette`] for the values matching its current [`PaletteState`], so a
//! theme swap restyles the whole control suite without touching the view
//! tree. Drag feedback overlays use the separate, smaller
//! [`PaletteDragDrop`] contract.

use crate::types::Color;

/// The visual state a palette value is requested for.
///
/// Derived from a view element's enabled/checked/tracking flags; the
/// ordering mirrors increasing visual emphasis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteState {
    /// Element is disabled.
    Disabled,
    /// Element is enabled and idle.
    Normal,
    /// Element is enabled and under the pointer.
    Tracking,
    /// Element is enabled and pressed.
    Pressed,
    /// Element is checked and idle.
    CheckedNormal,
    /// Element is checked and under the pointer.
    CheckedTracking,
    /// Element is checked and pressed.
    CheckedPressed,
}

impl PaletteState {
    /// Derive the state for an idle element from its flags.
    pub fn from_flags(enabled: bool, checked: bool) -> Self {
        match (enabled, checked) {
            (false, _) => Self::Disabled,
            (true, false) => Self::Normal,
            (true, true) => Self::CheckedNormal,
        }
    }

    /// Whether this state represents a checked element.
    pub fn is_checked(self) -> bool {
        matches!(
            self,
            Self::CheckedNormal | Self::CheckedTracking | Self::CheckedPressed
        )
    }
}

/// State-keyed colors and metrics supplied by the active theme.
///
/// The view engine treats this as an opaque contract: it asks for values,
/// it never computes them. Hosts typically back it with their theme
/// definition system.
pub trait Palette: Send + Sync {
    /// Background fill for a group button in the given state.
    fn button_back(&self, state: PaletteState) -> Color;

    /// Border color for a group button in the given state.
    fn button_border(&self, state: PaletteState) -> Color;

    /// Text color for group item content in the given state.
    fn content_text(&self, state: PaletteState) -> Color;

    /// Color of the drop-down arrow glyph in the given state.
    fn drop_arrow(&self, state: PaletteState) -> Color;

    /// Color of the thin separator line between a split button's areas.
    fn split_separator(&self) -> Color;
}

/// Drawing values used by drag feedback overlays.
///
/// Kept separate from [`Palette`] because drag feedback is consumed by an
/// external collaborator with a much smaller surface.
pub trait PaletteDragDrop: Send + Sync {
    /// Fill color of the drop-target highlight.
    fn drop_highlight_back(&self) -> Color;

    /// Border color of the drop-target highlight.
    fn drop_highlight_border(&self) -> Color;

    /// Solid color used when rendering docking indicators.
    fn docking_indicator(&self) -> Color;
}
