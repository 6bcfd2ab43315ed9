//! Reusable command definitions.
//!
//! A [`RibbonCommand`] centralizes the state shared by every control bound
//! to the same application action: enabled, checked, text and images. A
//! definition with a bound command presents the command's state instead of
//! its own, and re-publishes the command's change notifications as its own.

use horizon_ribbon_core::{Property, Signal};
use horizon_ribbon_render::ImageHandle;

use super::change::PropertyChange;

/// Shared state for one application action.
pub struct RibbonCommand {
    /// Whether controls bound to this command are enabled.
    enabled: Property<bool>,
    /// Whether controls bound to this command show as checked.
    checked: Property<bool>,
    /// First text line shown by bound controls.
    text_line1: Property<String>,
    /// Second text line shown by bound controls.
    text_line2: Property<String>,
    /// Image for large presentations.
    image_large: Property<Option<ImageHandle>>,
    /// Image for small presentations.
    image_small: Property<Option<ImageHandle>>,
    /// Emitted when any of the command's values change.
    pub state_changed: Signal<PropertyChange>,
}

impl Default for RibbonCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl RibbonCommand {
    /// Create a command that is enabled and unchecked.
    pub fn new() -> Self {
        Self {
            enabled: Property::new(true),
            checked: Property::new(false),
            text_line1: Property::new(String::new()),
            text_line2: Property::new(String::new()),
            image_large: Property::new(None),
            image_small: Property::new(None),
            state_changed: Signal::new(),
        }
    }

    /// Whether bound controls are enabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled.get()
    }

    /// Set whether bound controls are enabled.
    pub fn set_enabled(&self, enabled: bool) {
        if self.enabled.set(enabled) {
            self.state_changed.emit(PropertyChange::Enabled);
        }
    }

    /// Whether bound controls show as checked.
    pub fn is_checked(&self) -> bool {
        self.checked.get()
    }

    /// Set whether bound controls show as checked.
    pub fn set_checked(&self, checked: bool) {
        if self.checked.set(checked) {
            self.state_changed.emit(PropertyChange::Checked);
        }
    }

    /// The first text line.
    pub fn text_line1(&self) -> String {
        self.text_line1.get()
    }

    /// Set the first text line.
    pub fn set_text_line1(&self, text: impl Into<String>) {
        if self.text_line1.set(text.into()) {
            self.state_changed.emit(PropertyChange::TextLine1);
        }
    }

    /// The second text line.
    pub fn text_line2(&self) -> String {
        self.text_line2.get()
    }

    /// Set the second text line.
    pub fn set_text_line2(&self, text: impl Into<String>) {
        if self.text_line2.set(text.into()) {
            self.state_changed.emit(PropertyChange::TextLine2);
        }
    }

    /// The image for large presentations.
    pub fn image_large(&self) -> Option<ImageHandle> {
        self.image_large.get()
    }

    /// Set the image for large presentations.
    pub fn set_image_large(&self, image: Option<ImageHandle>) {
        if self.image_large.set(image) {
            self.state_changed.emit(PropertyChange::ImageLarge);
        }
    }

    /// The image for small presentations.
    pub fn image_small(&self) -> Option<ImageHandle> {
        self.image_small.get()
    }

    /// Set the image for small presentations.
    pub fn set_image_small(&self, image: Option<ImageHandle>) {
        if self.image_small.set(image) {
            self.state_changed.emit(PropertyChange::ImageSmall);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[test]
    fn test_command_emits_on_change_only() {
        let command = RibbonCommand::new();
        let changes = Arc::new(Mutex::new(Vec::new()));

        let changes_clone = changes.clone();
        command.state_changed.connect(move |&change| {
            changes_clone.lock().push(change);
        });

        command.set_enabled(true); // unchanged
        command.set_enabled(false);
        command.set_checked(true);
        command.set_text_line1("Fill");

        assert_eq!(
            *changes.lock(),
            vec![
                PropertyChange::Enabled,
                PropertyChange::Checked,
                PropertyChange::TextLine1
            ]
        );
    }
}
