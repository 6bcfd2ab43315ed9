//! Property-change kinds and their view effects.
//!
//! Definition objects notify the view layer through a stream of
//! [`PropertyChange`] values. External notification sources that only know
//! property names can parse them with [`PropertyChange::from_name`];
//! unknown names are a forward-compatible no-op (`None`), never an error.
//!
//! The mapping from a change to the work it causes lives in one static
//! table, [`change_effects`], checked exhaustively at compile time:
//! adding a change kind without deciding its effects does not build.

/// A change to one property of a group color button definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyChange {
    /// The currently selected color.
    SelectedColor,
    /// The border color drawn when the selection is transparent.
    EmptyBorderColor,
    /// The selection strip rectangle of the small presentation.
    SelectedRectSmall,
    /// The selection strip rectangle of the large presentation.
    SelectedRectLarge,
    /// Definition visibility.
    Visible,
    /// The first text line.
    TextLine1,
    /// The second text line.
    TextLine2,
    /// The keyboard-accelerator string.
    KeyTip,
    /// The activation behavior (push/check/drop-down/split).
    ButtonType,
    /// The checked state.
    Checked,
    /// The enabled state.
    Enabled,
    /// The large presentation image.
    ImageLarge,
    /// The small presentation image.
    ImageSmall,
    /// The smallest supported presentation.
    ItemSizeMinimum,
    /// The largest supported presentation.
    ItemSizeMaximum,
    /// The current presentation.
    ItemSizeCurrent,
    /// The bound command, or one of its derived values.
    Command,
}

impl PropertyChange {
    /// Parse a change from its property name.
    ///
    /// Returns `None` for names this engine does not know about; new model
    /// fields must never crash the reactor.
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "SelectedColor" => Self::SelectedColor,
            "EmptyBorderColor" => Self::EmptyBorderColor,
            "SelectedRectSmall" => Self::SelectedRectSmall,
            "SelectedRectLarge" => Self::SelectedRectLarge,
            "Visible" => Self::Visible,
            "TextLine1" => Self::TextLine1,
            "TextLine2" => Self::TextLine2,
            "KeyTip" => Self::KeyTip,
            "ButtonType" => Self::ButtonType,
            "Checked" => Self::Checked,
            "Enabled" => Self::Enabled,
            "ImageLarge" => Self::ImageLarge,
            "ImageSmall" => Self::ImageSmall,
            "ItemSizeMinimum" => Self::ItemSizeMinimum,
            "ItemSizeMaximum" => Self::ItemSizeMaximum,
            "ItemSizeCurrent" => Self::ItemSizeCurrent,
            "Command" => Self::Command,
            _ => return None,
        })
    }

    /// The property name for this change.
    pub fn name(self) -> &'static str {
        match self {
            Self::SelectedColor => "SelectedColor",
            Self::EmptyBorderColor => "EmptyBorderColor",
            Self::SelectedRectSmall => "SelectedRectSmall",
            Self::SelectedRectLarge => "SelectedRectLarge",
            Self::Visible => "Visible",
            Self::TextLine1 => "TextLine1",
            Self::TextLine2 => "TextLine2",
            Self::KeyTip => "KeyTip",
            Self::ButtonType => "ButtonType",
            Self::Checked => "Checked",
            Self::Enabled => "Enabled",
            Self::ImageLarge => "ImageLarge",
            Self::ImageSmall => "ImageSmall",
            Self::ItemSizeMinimum => "ItemSizeMinimum",
            Self::ItemSizeMaximum => "ItemSizeMaximum",
            Self::ItemSizeCurrent => "ItemSizeCurrent",
            Self::Command => "Command",
        }
    }
}

/// The view state a change marks dirty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DirtyTargets {
    /// The color swatch composition of both presentations.
    pub swatch: bool,
    /// The cached measurement of the first text line.
    pub text_line1: bool,
    /// The cached measurement of the second text line.
    pub text_line2: bool,
    /// Drop-arrow and separator visibility.
    pub drop_down: bool,
    /// Derived enabled state across both presentations.
    pub enabled: bool,
    /// Derived checked state across both presentations.
    pub checked: bool,
    /// The size-variant selection.
    pub item_size: bool,
}

impl DirtyTargets {
    /// Nothing dirty.
    pub const NONE: Self = Self {
        swatch: false,
        text_line1: false,
        text_line2: false,
        drop_down: false,
        enabled: false,
        checked: false,
        item_size: false,
    };
}

/// The full effect of one property change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangeEffects {
    /// View state to refresh.
    pub dirty: DirtyTargets,
    /// Whether rectangles must be renegotiated.
    pub needs_layout: bool,
    /// Whether the widget must be redrawn.
    pub needs_paint: bool,
}

impl ChangeEffects {
    /// No work at all.
    pub const NONE: Self = Self {
        dirty: DirtyTargets::NONE,
        needs_layout: false,
        needs_paint: false,
    };

    fn paint(dirty: DirtyTargets) -> Self {
        Self {
            dirty,
            needs_layout: false,
            needs_paint: true,
        }
    }

    fn layout(dirty: DirtyTargets) -> Self {
        Self {
            dirty,
            needs_layout: true,
            needs_paint: false,
        }
    }
}

/// The static change-to-effects table.
pub fn change_effects(change: PropertyChange) -> ChangeEffects {
    use PropertyChange as P;

    match change {
        // Selection and image content redraw the swatch in place.
        P::SelectedColor
        | P::EmptyBorderColor
        | P::SelectedRectSmall
        | P::SelectedRectLarge
        | P::ImageLarge
        | P::ImageSmall => ChangeEffects::paint(DirtyTargets {
            swatch: true,
            ..DirtyTargets::NONE
        }),

        P::Visible => ChangeEffects::layout(DirtyTargets::NONE),

        P::TextLine1 => ChangeEffects::layout(DirtyTargets {
            text_line1: true,
            ..DirtyTargets::NONE
        }),

        // The second line doubles as the drop-down separator gate.
        P::TextLine2 => ChangeEffects::layout(DirtyTargets {
            text_line2: true,
            drop_down: true,
            ..DirtyTargets::NONE
        }),

        P::ButtonType => ChangeEffects::layout(DirtyTargets {
            drop_down: true,
            ..DirtyTargets::NONE
        }),

        P::Checked => ChangeEffects::paint(DirtyTargets {
            checked: true,
            ..DirtyTargets::NONE
        }),

        P::Enabled => ChangeEffects::paint(DirtyTargets {
            enabled: true,
            ..DirtyTargets::NONE
        }),

        P::ItemSizeMinimum | P::ItemSizeMaximum | P::ItemSizeCurrent => {
            ChangeEffects::layout(DirtyTargets {
                item_size: true,
                ..DirtyTargets::NONE
            })
        }

        // A rebound command invalidates every derived visual.
        P::Command => ChangeEffects::layout(DirtyTargets {
            swatch: true,
            text_line1: true,
            text_line2: true,
            enabled: true,
            checked: true,
            ..DirtyTargets::NONE
        }),

        // The key-tip string is only read when an overlay is collected.
        P::KeyTip => ChangeEffects::NONE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_round_trips() {
        for change in [
            PropertyChange::SelectedColor,
            PropertyChange::TextLine2,
            PropertyChange::ItemSizeCurrent,
            PropertyChange::Command,
        ] {
            assert_eq!(PropertyChange::from_name(change.name()), Some(change));
        }
    }

    #[test]
    fn test_unknown_name_is_none() {
        assert_eq!(PropertyChange::from_name("Gradient"), None);
        assert_eq!(PropertyChange::from_name(""), None);
    }

    #[test]
    fn test_color_changes_are_paint_only() {
        let effects = change_effects(PropertyChange::SelectedColor);
        assert!(effects.dirty.swatch);
        assert!(effects.needs_paint);
        assert!(!effects.needs_layout);
    }

    #[test]
    fn test_text_changes_need_layout() {
        let effects = change_effects(PropertyChange::TextLine1);
        assert!(effects.dirty.text_line1);
        assert!(effects.needs_layout);
    }

    #[test]
    fn test_command_cascades_all_derived_state() {
        let effects = change_effects(PropertyChange::Command);
        assert!(effects.dirty.swatch);
        assert!(effects.dirty.text_line1);
        assert!(effects.dirty.text_line2);
        assert!(effects.dirty.enabled);
        assert!(effects.dirty.checked);
        assert!(effects.needs_layout);
    }

    #[test]
    fn test_key_tip_change_is_inert() {
        assert_eq!(change_effects(PropertyChange::KeyTip), ChangeEffects::NONE);
    }
}
