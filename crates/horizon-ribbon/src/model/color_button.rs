//! The group color button definition.
//!
//! [`RibbonColorButton`] is the model half of the color button: the pure
//! state a host application configures, persisted and edited outside the
//! view layer. It owns no views; the view layer attaches to it, observes
//! [`property_changed`](RibbonColorButton::property_changed), and records
//! the active presentation root through a non-owning [`ViewId`]
//! back-reference.

use std::sync::{Arc, Weak};

use parking_lot::Mutex;

use horizon_ribbon_core::{ConnectionGuard, Property, Signal};
use horizon_ribbon_render::{Color, ImageHandle, Rect};

use super::change::PropertyChange;
use super::command::RibbonCommand;
use super::item_size::{ItemSize, ItemSizeRange};
use crate::ribbon::TabId;
use crate::view::ViewId;

/// How a group button reacts to activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GroupButtonType {
    /// A plain push button.
    #[default]
    Push,
    /// A toggle button that flips its checked state.
    Check,
    /// A button whose only action is showing a drop-down.
    DropDown,
    /// A button split into a push area and a drop-down area.
    Split,
}

impl GroupButtonType {
    /// Whether this type shows a drop-down arrow.
    pub fn has_drop_down(self) -> bool {
        matches!(self, Self::DropDown | Self::Split)
    }
}

/// The bound command and the guard keeping its re-publication alive.
#[derive(Default)]
struct CommandBinding {
    command: Option<Arc<RibbonCommand>>,
    _guard: Option<ConnectionGuard>,
}

/// Definition of one group color button.
///
/// All state lives in reactive properties; every setter that changes a
/// value emits one [`PropertyChange`] on
/// [`property_changed`](Self::property_changed). Create with
/// [`RibbonColorButton::new`], which returns an `Arc` because views and
/// controllers hold weak references back to the definition.
pub struct RibbonColorButton {
    visible: Property<bool>,
    enabled: Property<bool>,
    checked: Property<bool>,
    button_type: Property<GroupButtonType>,
    text_line1: Property<String>,
    text_line2: Property<String>,
    key_tip: Property<String>,
    selected_color: Property<Color>,
    empty_border_color: Property<Color>,
    selected_rect_small: Property<Rect>,
    selected_rect_large: Property<Rect>,
    image_large: Property<Option<ImageHandle>>,
    image_small: Property<Option<ImageHandle>>,
    item_size_minimum: Property<ItemSize>,
    item_size_maximum: Property<ItemSize>,
    item_size_current: Property<ItemSize>,
    ribbon_tab: Property<Option<TabId>>,
    command: Mutex<CommandBinding>,
    /// Active presentation root, written by the view layer only.
    attached_view: Mutex<Option<ViewId>>,

    /// Emitted once per changed property.
    pub property_changed: Signal<PropertyChange>,
    /// Emitted when the button is activated.
    pub click: Signal<()>,
    /// Emitted when the drop-down should be shown.
    pub drop_down: Signal<()>,
}

impl RibbonColorButton {
    /// Create a definition with the stock defaults: visible, enabled,
    /// unchecked split button, red selection, full size range.
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            visible: Property::new(true),
            enabled: Property::new(true),
            checked: Property::new(false),
            button_type: Property::new(GroupButtonType::Split),
            text_line1: Property::new("Color".to_string()),
            text_line2: Property::new(String::new()),
            key_tip: Property::new("B".to_string()),
            selected_color: Property::new(Color::RED),
            empty_border_color: Property::new(Color::from_rgb8(140, 140, 140)),
            selected_rect_small: Property::new(Rect::new(0.0, 12.0, 16.0, 4.0)),
            selected_rect_large: Property::new(Rect::new(2.0, 26.0, 28.0, 4.0)),
            image_large: Property::new(None),
            image_small: Property::new(None),
            item_size_minimum: Property::new(ItemSize::Small),
            item_size_maximum: Property::new(ItemSize::Large),
            item_size_current: Property::new(ItemSize::Large),
            ribbon_tab: Property::new(None),
            command: Mutex::new(CommandBinding::default()),
            attached_view: Mutex::new(None),
            property_changed: Signal::new(),
            click: Signal::new(),
            drop_down: Signal::new(),
        })
    }

    fn emit_if(&self, changed: bool, change: PropertyChange) {
        if changed {
            tracing::trace!(
                target: "horizon_ribbon::model",
                property = change.name(),
                "definition property changed"
            );
            self.property_changed.emit(change);
        }
    }

    // =========================================================================
    // Simple Properties
    // =========================================================================

    /// Whether the button participates in group layout.
    pub fn is_visible(&self) -> bool {
        self.visible.get()
    }

    /// Set whether the button participates in group layout.
    pub fn set_visible(&self, visible: bool) {
        self.emit_if(self.visible.set(visible), PropertyChange::Visible);
    }

    /// The definition's own enabled state (ignores any bound command).
    pub fn is_enabled(&self) -> bool {
        self.enabled.get()
    }

    /// Set the definition's own enabled state.
    pub fn set_enabled(&self, enabled: bool) {
        self.emit_if(self.enabled.set(enabled), PropertyChange::Enabled);
    }

    /// The definition's own checked state (ignores any bound command).
    pub fn is_checked(&self) -> bool {
        self.checked.get()
    }

    /// Set the definition's own checked state.
    pub fn set_checked(&self, checked: bool) {
        self.emit_if(self.checked.set(checked), PropertyChange::Checked);
    }

    /// The activation behavior.
    pub fn button_type(&self) -> GroupButtonType {
        self.button_type.get()
    }

    /// Set the activation behavior.
    pub fn set_button_type(&self, button_type: GroupButtonType) {
        self.emit_if(self.button_type.set(button_type), PropertyChange::ButtonType);
    }

    /// The definition's own first text line.
    pub fn text_line1(&self) -> String {
        self.text_line1.get()
    }

    /// Set the first text line.
    pub fn set_text_line1(&self, text: impl Into<String>) {
        self.emit_if(self.text_line1.set(text.into()), PropertyChange::TextLine1);
    }

    /// The definition's own second text line.
    pub fn text_line2(&self) -> String {
        self.text_line2.get()
    }

    /// Set the second text line.
    pub fn set_text_line2(&self, text: impl Into<String>) {
        self.emit_if(self.text_line2.set(text.into()), PropertyChange::TextLine2);
    }

    /// The keyboard-accelerator string.
    pub fn key_tip(&self) -> String {
        self.key_tip.get()
    }

    /// Set the keyboard-accelerator string.
    pub fn set_key_tip(&self, key_tip: impl Into<String>) {
        self.emit_if(self.key_tip.set(key_tip.into()), PropertyChange::KeyTip);
    }

    /// The currently selected color.
    pub fn selected_color(&self) -> Color {
        self.selected_color.get()
    }

    /// Set the currently selected color.
    pub fn set_selected_color(&self, color: Color) {
        self.emit_if(self.selected_color.set(color), PropertyChange::SelectedColor);
    }

    /// Border drawn around the selection strip when the color is transparent.
    pub fn empty_border_color(&self) -> Color {
        self.empty_border_color.get()
    }

    /// Set the transparent-selection border color.
    pub fn set_empty_border_color(&self, color: Color) {
        self.emit_if(
            self.empty_border_color.set(color),
            PropertyChange::EmptyBorderColor,
        );
    }

    /// The selection strip rectangle of the small presentation, relative to
    /// the small image.
    pub fn selected_rect_small(&self) -> Rect {
        self.selected_rect_small.get()
    }

    /// Set the small selection strip rectangle.
    pub fn set_selected_rect_small(&self, rect: Rect) {
        self.emit_if(
            self.selected_rect_small.set(rect),
            PropertyChange::SelectedRectSmall,
        );
    }

    /// The selection strip rectangle of the large presentation, relative to
    /// the large image.
    pub fn selected_rect_large(&self) -> Rect {
        self.selected_rect_large.get()
    }

    /// Set the large selection strip rectangle.
    pub fn set_selected_rect_large(&self, rect: Rect) {
        self.emit_if(
            self.selected_rect_large.set(rect),
            PropertyChange::SelectedRectLarge,
        );
    }

    /// The definition's own large image.
    pub fn image_large(&self) -> Option<ImageHandle> {
        self.image_large.get()
    }

    /// Set the large image.
    pub fn set_image_large(&self, image: Option<ImageHandle>) {
        self.emit_if(self.image_large.set(image), PropertyChange::ImageLarge);
    }

    /// The definition's own small image.
    pub fn image_small(&self) -> Option<ImageHandle> {
        self.image_small.get()
    }

    /// Set the small image.
    pub fn set_image_small(&self, image: Option<ImageHandle>) {
        self.emit_if(self.image_small.set(image), PropertyChange::ImageSmall);
    }

    // =========================================================================
    // Item Size
    // =========================================================================

    /// The smallest supported presentation.
    pub fn item_size_minimum(&self) -> ItemSize {
        self.item_size_minimum.get()
    }

    /// Set the smallest supported presentation.
    pub fn set_item_size_minimum(&self, size: ItemSize) {
        self.emit_if(
            self.item_size_minimum.set(size),
            PropertyChange::ItemSizeMinimum,
        );
    }

    /// The largest supported presentation.
    pub fn item_size_maximum(&self) -> ItemSize {
        self.item_size_maximum.get()
    }

    /// Set the largest supported presentation.
    pub fn set_item_size_maximum(&self, size: ItemSize) {
        self.emit_if(
            self.item_size_maximum.set(size),
            PropertyChange::ItemSizeMaximum,
        );
    }

    /// The current presentation.
    pub fn item_size_current(&self) -> ItemSize {
        self.item_size_current.get()
    }

    /// Set the current presentation.
    pub fn set_item_size_current(&self, size: ItemSize) {
        self.emit_if(
            self.item_size_current.set(size),
            PropertyChange::ItemSizeCurrent,
        );
    }

    /// The declared supported range.
    pub fn item_size_range(&self) -> ItemSizeRange {
        ItemSizeRange::new(self.item_size_minimum(), self.item_size_maximum())
    }

    // =========================================================================
    // Tab Association
    // =========================================================================

    /// The tab this button's group belongs to, if any.
    pub fn ribbon_tab(&self) -> Option<TabId> {
        self.ribbon_tab.get()
    }

    /// Associate the button with a tab.
    ///
    /// The association gates layout/paint reactions: a button outside the
    /// selected tab never requests work.
    pub fn set_ribbon_tab(&self, tab: Option<TabId>) {
        self.ribbon_tab.set(tab);
    }

    // =========================================================================
    // Command Binding
    // =========================================================================

    /// The bound command, if any.
    pub fn command(&self) -> Option<Arc<RibbonCommand>> {
        self.command.lock().command.clone()
    }

    /// Bind or clear the command.
    ///
    /// While bound, the command's enabled/checked/text/image state replaces
    /// the definition's own, and the command's change notifications are
    /// re-published through [`property_changed`](Self::property_changed).
    pub fn set_command(self: &Arc<Self>, command: Option<Arc<RibbonCommand>>) {
        {
            let mut binding = self.command.lock();

            let guard = command.as_ref().map(|command| {
                let weak: Weak<Self> = Arc::downgrade(self);
                command.state_changed.connect_scoped(move |&change| {
                    if let Some(button) = weak.upgrade() {
                        button.property_changed.emit(change);
                    }
                })
            });

            binding.command = command;
            binding._guard = guard;
        }

        self.property_changed.emit(PropertyChange::Command);
    }

    /// The enabled state bound controls should present.
    pub fn effective_enabled(&self) -> bool {
        match self.command() {
            Some(command) => command.is_enabled(),
            None => self.is_enabled(),
        }
    }

    /// The checked state bound controls should present.
    pub fn effective_checked(&self) -> bool {
        match self.command() {
            Some(command) => command.is_checked(),
            None => self.is_checked(),
        }
    }

    /// The first text line bound controls should present.
    pub fn effective_text_line1(&self) -> String {
        match self.command() {
            Some(command) if !command.text_line1().is_empty() => command.text_line1(),
            _ => self.text_line1(),
        }
    }

    /// The second text line bound controls should present.
    pub fn effective_text_line2(&self) -> String {
        match self.command() {
            Some(command) if !command.text_line2().is_empty() => command.text_line2(),
            _ => self.text_line2(),
        }
    }

    /// The large image bound controls should present.
    pub fn effective_image_large(&self) -> Option<ImageHandle> {
        match self.command() {
            Some(command) => command.image_large().or_else(|| self.image_large()),
            None => self.image_large(),
        }
    }

    /// The small image bound controls should present.
    pub fn effective_image_small(&self) -> Option<ImageHandle> {
        match self.command() {
            Some(command) => command.image_small().or_else(|| self.image_small()),
            None => self.image_small(),
        }
    }

    // =========================================================================
    // Activation
    // =========================================================================

    /// Perform the button's primary activation.
    ///
    /// Check-type buttons toggle their (or their command's) checked state
    /// before the click notification goes out.
    pub fn perform_click(&self) {
        if self.button_type() == GroupButtonType::Check {
            match self.command() {
                Some(command) => command.set_checked(!command.is_checked()),
                None => self.set_checked(!self.is_checked()),
            }
        }
        self.click.emit(());
    }

    /// Request the button's drop-down.
    ///
    /// Only meaningful for DropDown/Split buttons; other types ignore it.
    pub fn perform_drop_down(&self) {
        if self.button_type().has_drop_down() {
            self.drop_down.emit(());
        }
    }

    // =========================================================================
    // View Back-Reference
    // =========================================================================

    /// The active presentation root attached to this definition, if any.
    ///
    /// This is a non-owning association maintained by the view layer; it
    /// always names the active size variant's root, or `None` when no view
    /// is attached.
    pub fn attached_view(&self) -> Option<ViewId> {
        *self.attached_view.lock()
    }

    /// Record the active presentation root. View layer use only.
    pub fn set_attached_view(&self, view: Option<ViewId>) {
        *self.attached_view.lock() = view;
    }
}
