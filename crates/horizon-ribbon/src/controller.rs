//! Activation controllers for group buttons.
//!
//! A controller is the input half of a presentation: it owns no visuals
//! and no definition state, it just turns activation requests (from the
//! key-tip overlay, or from the host's input routing) into definition
//! activations, applying the enabled gating the views present.

use std::sync::{Arc, Weak};

use crate::keytip::KeyTipTarget;
use crate::model::RibbonColorButton;
use crate::ribbon::Ribbon;

/// Controller bound to one presentation of a group button.
///
/// Each size variant's back/border element carries its own controller, so
/// the key-tip overlay can invoke whichever presentation is active.
pub struct ButtonController {
    /// The definition to activate. Non-owning.
    model: Weak<RibbonColorButton>,
    /// The shell, consulted for control-level enablement. Non-owning.
    ribbon: Weak<Ribbon>,
}

impl ButtonController {
    /// Create a controller for the given definition.
    pub fn new(ribbon: &Arc<Ribbon>, model: &Arc<RibbonColorButton>) -> Arc<Self> {
        Arc::new(Self {
            model: Arc::downgrade(model),
            ribbon: Arc::downgrade(ribbon),
        })
    }

    /// Whether activation is currently allowed.
    fn can_activate(&self, model: &RibbonColorButton) -> bool {
        let ribbon_enabled = self.ribbon.upgrade().is_none_or(|ribbon| ribbon.is_enabled());
        ribbon_enabled && model.effective_enabled()
    }

    /// Perform the button's primary (click) activation.
    ///
    /// Disabled buttons ignore the request.
    pub fn perform_click(&self) {
        let Some(model) = self.model.upgrade() else {
            return;
        };
        if self.can_activate(&model) {
            model.perform_click();
        }
    }

    /// Perform the button's drop-down activation.
    ///
    /// Disabled buttons, and button types without a drop-down, ignore the
    /// request.
    pub fn perform_drop_down(&self) {
        let Some(model) = self.model.upgrade() else {
            return;
        };
        if self.can_activate(&model) {
            model.perform_drop_down();
        }
    }
}

impl KeyTipTarget for ButtonController {
    fn key_tip_select(&self, _ribbon: &Ribbon) {
        let Some(model) = self.model.upgrade() else {
            return;
        };

        // Items whose primary action is a drop-down open it; everything
        // else clicks.
        if model.button_type().has_drop_down() {
            self.perform_drop_down();
        } else {
            self.perform_click();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::GroupButtonType;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn click_counter(model: &Arc<RibbonColorButton>) -> Arc<AtomicUsize> {
        let clicks = Arc::new(AtomicUsize::new(0));
        let clicks_clone = clicks.clone();
        model.click.connect(move |()| {
            clicks_clone.fetch_add(1, Ordering::SeqCst);
        });
        clicks
    }

    #[test]
    fn test_click_respects_enabled() {
        let ribbon = Ribbon::new();
        let model = RibbonColorButton::new();
        let controller = ButtonController::new(&ribbon, &model);
        let clicks = click_counter(&model);

        model.set_enabled(false);
        controller.perform_click();
        assert_eq!(clicks.load(Ordering::SeqCst), 0);

        model.set_enabled(true);
        controller.perform_click();
        assert_eq!(clicks.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_click_respects_ribbon_enabled() {
        let ribbon = Ribbon::new();
        let model = RibbonColorButton::new();
        let controller = ButtonController::new(&ribbon, &model);
        let clicks = click_counter(&model);

        ribbon.set_enabled(false);
        controller.perform_click();
        assert_eq!(clicks.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_key_tip_select_routes_by_type() {
        let ribbon = Ribbon::new();
        let model = RibbonColorButton::new();
        let controller = ButtonController::new(&ribbon, &model);
        let clicks = click_counter(&model);

        let drops = Arc::new(AtomicUsize::new(0));
        let drops_clone = drops.clone();
        model.drop_down.connect(move |()| {
            drops_clone.fetch_add(1, Ordering::SeqCst);
        });

        model.set_button_type(GroupButtonType::Split);
        controller.key_tip_select(&ribbon);
        assert_eq!(drops.load(Ordering::SeqCst), 1);
        assert_eq!(clicks.load(Ordering::SeqCst), 0);

        model.set_button_type(GroupButtonType::Push);
        controller.key_tip_select(&ribbon);
        assert_eq!(clicks.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_dead_model_is_noop() {
        let ribbon = Ribbon::new();
        let model = RibbonColorButton::new();
        let controller = ButtonController::new(&ribbon, &model);
        drop(model);
        controller.perform_click();
        controller.perform_drop_down();
    }
}
