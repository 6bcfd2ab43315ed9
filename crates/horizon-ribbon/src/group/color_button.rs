//! The group color button view.
//!
//! [`RibbonColorButtonView`] composes the whole widget: it prebuilds one
//! subtree per size class (a Large presentation and a shared Medium/Small
//! presentation), keeps both in sync with the definition, and swaps which
//! one is active without ever rebuilding. It is also the widget's
//! property-change reactor: definition notifications are mapped through
//! the static effects table and turned into dirty marks plus layout/paint
//! requests, suppressed while the widget's tab is not selected.

use std::sync::{Arc, Weak};

use parking_lot::RwLock;

use horizon_ribbon_core::ConnectionGuard;
use horizon_ribbon_render::{Padding, Rect, Size};

use crate::controller::ButtonController;
use crate::group::GroupItemView;
use crate::keytip::KeyTipInfo;
use crate::model::{
    DirtyTargets, GroupButtonType, ItemSize, PropertyChange, RibbonColorButton, change_effects,
};
use crate::ribbon::Ribbon;
use crate::view::draw::{ButtonBackBorder, ColorButtonSwatch, ColorButtonText, DropArrow};
use crate::view::layout::{CenterPadding, Dock, FixedSeparator, RowCenter, ViewDocker};
use crate::view::{LayoutContext, PaintContext, SharedView, ViewBase, ViewElement, ViewId};

/// Padding around the large presentation's image.
const LARGE_IMAGE_PADDING: Padding = Padding::new(3.0, 2.0, 3.0, 3.0);
/// Padding around the medium/small presentation's image.
const SMALL_IMAGE_PADDING: Padding = Padding::uniform(3.0);
/// Gap either side of the large presentation's drop arrow.
const LARGE_ARROW_GAP: f32 = 4.0;
/// Gap either side of the medium/small presentation's drop arrow.
const SMALL_ARROW_GAP: f32 = 3.0;
/// Space between a large split button's image and the split line.
const LARGE_SPLIT_GAP: f32 = 2.0;

/// The typed handles of one size variant's prebuilt subtree.
struct VariantViews {
    /// The background/border plate rooting the subtree.
    root: SharedView<ButtonBackBorder>,
    /// The image/selection swatch.
    swatch: SharedView<ColorButtonSwatch>,
    /// First text line.
    text1: SharedView<ColorButtonText>,
    /// Second text line.
    text2: SharedView<ColorButtonText>,
    /// Drop-down arrow.
    arrow: SharedView<DropArrow>,
    /// Separator before the arrow.
    sep_before_arrow: SharedView<FixedSeparator>,
    /// Separator after the arrow.
    sep_after_arrow: SharedView<FixedSeparator>,
}

/// View composite for one [`RibbonColorButton`] definition.
///
/// Both size-variant subtrees exist for the view's whole lifetime; variant
/// switching rebinds the active slot and nothing else, so it is O(1) and
/// flicker-free. Enabled/checked/drop-down state is pushed to *both*
/// subtrees whenever it changes: an inactive variant is never stale, so
/// activating it needs no corrective refresh pass.
pub struct RibbonColorButtonView {
    /// Common element state.
    base: ViewBase,
    /// The shell. Non-owning.
    ribbon: Weak<Ribbon>,
    /// The observed definition. Non-owning.
    model: Weak<RibbonColorButton>,
    /// The active size class.
    current_size: ItemSize,
    /// Whether a variant has been bound yet (first activation must run).
    bound: bool,
    /// The Large presentation.
    large: VariantViews,
    /// The shared Medium/Small presentation.
    medium_small: VariantViews,
    /// Subscription to the definition's change signal; dropped first in
    /// the disposal path.
    subscription: Option<ConnectionGuard>,
}

impl RibbonColorButtonView {
    /// Build the view for a definition and attach it.
    ///
    /// Both variant subtrees are created up front, synced to the
    /// definition, and the definition's change signal is hooked. The
    /// returned handle is the widget the group composite stores.
    pub fn new(ribbon: &Arc<Ribbon>, model: &Arc<RibbonColorButton>) -> SharedView<Self> {
        let large = Self::create_large_view(ribbon, model);
        let medium_small = Self::create_medium_small_view(ribbon, model);

        let view = Arc::new(RwLock::new(Self {
            base: ViewBase::new(),
            ribbon: Arc::downgrade(ribbon),
            model: Arc::downgrade(model),
            current_size: model.item_size_current(),
            bound: false,
            large,
            medium_small,
            subscription: None,
        }));

        {
            let mut this = view.write();
            this.update_enabled_state();
            this.update_checked_state();
            this.update_drop_down_state();
            this.update_item_size_state(model.item_size_current());
        }

        // Hook definition changes last, so construction never re-enters.
        let weak_view = Arc::downgrade(&view);
        let guard = model.property_changed.connect_scoped(move |&change| {
            if let Some(view) = weak_view.upgrade() {
                view.write().on_property_changed(change);
            }
        });
        view.write().subscription = Some(guard);

        view
    }

    /// Build the Large presentation subtree.
    fn create_large_view(ribbon: &Arc<Ribbon>, model: &Arc<RibbonColorButton>) -> VariantViews {
        let weak = Arc::downgrade(model);
        let controller = ButtonController::new(ribbon, model);
        let root = Arc::new(RwLock::new(ButtonBackBorder::new(
            weak.clone(),
            controller,
            true,
        )));

        let swatch = Arc::new(RwLock::new(ColorButtonSwatch::new(weak.clone(), true)));
        let text1 = Arc::new(RwLock::new(ColorButtonText::new(weak.clone(), true)));
        let text2 = Arc::new(RwLock::new(ColorButtonText::new(weak.clone(), false)));
        let arrow = Arc::new(RwLock::new(DropArrow::new()));
        let sep_before_arrow = Arc::new(RwLock::new(FixedSeparator::new(LARGE_ARROW_GAP)));
        let sep_after_arrow = Arc::new(RwLock::new(FixedSeparator::new(LARGE_ARROW_GAP)));

        // Image centred at the top with themed padding.
        let mut image_padding = CenterPadding::new(LARGE_IMAGE_PADDING);
        image_padding.add(swatch.clone());

        // Second line: text, then the drop arrow between its separators.
        let mut line2 = RowCenter::new();
        line2.add(text2.clone());
        line2.add(sep_before_arrow.clone());
        line2.add(arrow.clone());
        line2.add(sep_after_arrow.clone());

        // Bottom-up: a one-pixel break at the very bottom, the second line
        // above it, the first line above that.
        let mut content = ViewDocker::new();
        content.add(Arc::new(RwLock::new(image_padding)), Dock::Top);
        content.add(Arc::new(RwLock::new(FixedSeparator::new(1.0))), Dock::Bottom);
        content.add(Arc::new(RwLock::new(line2)), Dock::Bottom);
        content.add(text1.clone(), Dock::Bottom);

        root.write().add(Arc::new(RwLock::new(content)));

        VariantViews {
            root,
            swatch,
            text1,
            text2,
            arrow,
            sep_before_arrow,
            sep_after_arrow,
        }
    }

    /// Build the shared Medium/Small presentation subtree.
    fn create_medium_small_view(
        ribbon: &Arc<Ribbon>,
        model: &Arc<RibbonColorButton>,
    ) -> VariantViews {
        let weak = Arc::downgrade(model);
        let controller = ButtonController::new(ribbon, model);
        let root = Arc::new(RwLock::new(ButtonBackBorder::new(
            weak.clone(),
            controller,
            false,
        )));

        let swatch = Arc::new(RwLock::new(ColorButtonSwatch::new(weak.clone(), false)));
        let text1 = Arc::new(RwLock::new(ColorButtonText::new(weak.clone(), true)));
        let text2 = Arc::new(RwLock::new(ColorButtonText::new(weak.clone(), false)));
        let arrow = Arc::new(RwLock::new(DropArrow::new()));
        let sep_before_arrow = Arc::new(RwLock::new(FixedSeparator::new(SMALL_ARROW_GAP)));
        let sep_after_arrow = Arc::new(RwLock::new(FixedSeparator::new(SMALL_ARROW_GAP)));

        let mut image_padding = CenterPadding::new(SMALL_IMAGE_PADDING);
        image_padding.add(swatch.clone());

        // Everything on one centred line.
        let mut line = RowCenter::new();
        line.add(Arc::new(RwLock::new(image_padding)));
        line.add(text1.clone());
        line.add(text2.clone());
        line.add(sep_before_arrow.clone());
        line.add(arrow.clone());
        line.add(sep_after_arrow.clone());

        let mut content = ViewDocker::new();
        content.add(Arc::new(RwLock::new(line)), Dock::Fill);

        root.write().add(Arc::new(RwLock::new(content)));

        VariantViews {
            root,
            swatch,
            text1,
            text2,
            arrow,
            sep_before_arrow,
            sep_after_arrow,
        }
    }

    // =========================================================================
    // Size Variant Selection
    // =========================================================================

    /// The active size class.
    pub fn current_size(&self) -> ItemSize {
        self.current_size
    }

    /// The active variant's root identity (what the definition's
    /// back-reference names).
    pub fn active_root_id(&self) -> ViewId {
        self.active().root.read().id()
    }

    /// The active variant.
    fn active(&self) -> &VariantViews {
        match self.current_size {
            ItemSize::Large => &self.large,
            ItemSize::Small | ItemSize::Medium => &self.medium_small,
        }
    }

    /// Rebind the active slot and the definition's back-reference.
    fn define_root(&mut self) {
        if let Some(model) = self.model.upgrade() {
            model.set_attached_view(Some(self.active_root_id()));
        }
    }

    /// Switch to the given size class, clamped to the declared range.
    ///
    /// Re-activating the current class performs no work, so repeated
    /// activation is observably idempotent.
    fn update_item_size_state(&mut self, size: ItemSize) {
        let range = self
            .model
            .upgrade()
            .map(|model| model.item_size_range())
            .unwrap_or_default();
        let size = range.clamp(size);

        if self.bound && size == self.current_size {
            return;
        }

        self.current_size = size;
        self.bound = true;

        match size {
            ItemSize::Small | ItemSize::Medium => {
                // The single line drops its text entirely at Small.
                let show_text = size == ItemSize::Medium;
                self.medium_small.text1.write().set_visible(show_text);
                self.medium_small.text2.write().set_visible(show_text);
            }
            ItemSize::Large => {}
        }

        self.define_root();
    }

    // =========================================================================
    // Definition State Sync
    // =========================================================================

    /// Push the effective enabled state into both variant subtrees.
    fn update_enabled_state(&mut self) {
        let Some(model) = self.model.upgrade() else {
            return;
        };
        let ribbon_enabled = self.ribbon.upgrade().is_none_or(|ribbon| ribbon.is_enabled());
        let enabled = ribbon_enabled && model.effective_enabled();

        for variant in [&self.large, &self.medium_small] {
            variant.root.write().set_enabled(enabled);
            variant.swatch.write().set_enabled(enabled);
            variant.text1.write().set_enabled(enabled);
            variant.text2.write().set_enabled(enabled);
            variant.arrow.write().set_enabled(enabled);
        }
    }

    /// Push the effective checked state into both variant subtrees.
    fn update_checked_state(&mut self) {
        let Some(model) = self.model.upgrade() else {
            return;
        };

        // Only check-type buttons ever present as checked.
        let checked =
            model.button_type() == GroupButtonType::Check && model.effective_checked();

        self.large.root.write().set_checked(checked);
        self.medium_small.root.write().set_checked(checked);
    }

    /// Refresh drop-arrow and separator visibility in both subtrees.
    fn update_drop_down_state(&mut self) {
        let Some(model) = self.model.upgrade() else {
            return;
        };

        let drop_down = model.button_type().has_drop_down();
        // The large line only needs its gaps when text shares the row with
        // the arrow.
        let large_separators = drop_down && !model.effective_text_line2().is_empty();

        self.large.arrow.write().set_visible(drop_down);
        self.large
            .sep_before_arrow
            .write()
            .set_visible(large_separators);
        self.large
            .sep_after_arrow
            .write()
            .set_visible(large_separators);

        self.medium_small.arrow.write().set_visible(drop_down);
        self.medium_small
            .sep_before_arrow
            .write()
            .set_visible(drop_down);
        self.medium_small
            .sep_after_arrow
            .write()
            .set_visible(drop_down);
    }

    /// Apply one set of dirty marks to the subtrees.
    fn apply_dirty(&mut self, dirty: DirtyTargets) {
        if dirty.swatch {
            self.large.swatch.write().mark_swatch_dirty();
            self.medium_small.swatch.write().mark_swatch_dirty();
        }
        if dirty.text_line1 {
            self.large.text1.write().make_dirty();
            self.medium_small.text1.write().make_dirty();
        }
        if dirty.text_line2 {
            self.large.text2.write().make_dirty();
            self.medium_small.text2.write().make_dirty();
        }
        if dirty.drop_down {
            self.update_drop_down_state();
        }
        if dirty.enabled {
            self.update_enabled_state();
        }
        if dirty.checked {
            self.update_checked_state();
        }
        if dirty.item_size {
            if let Some(model) = self.model.upgrade() {
                let size = model.item_size_current();
                self.update_item_size_state(size);
            }
        }
    }

    /// React to one definition change.
    ///
    /// Dirty state is always refreshed, so both variants stay correct
    /// even off screen. Layout/paint requests are suppressed unless the
    /// widget's tab is the selected tab, and paint additionally requires
    /// the definition to be visible.
    fn on_property_changed(&mut self, change: PropertyChange) {
        if self.base.is_disposed() {
            return;
        }

        let effects = change_effects(change);
        self.apply_dirty(effects.dirty);

        let Some(model) = self.model.upgrade() else {
            return;
        };
        let Some(ribbon) = self.ribbon.upgrade() else {
            return;
        };

        let on_selected_tab = ribbon.is_tab_selected(model.ribbon_tab());

        if effects.needs_layout && on_selected_tab {
            ribbon.update_request(true, None);
        }

        if effects.needs_paint && on_selected_tab && model.is_visible() {
            ribbon.update_request(false, Some(self.base.client_rect()));
        }
    }

    // =========================================================================
    // Split Geometry
    // =========================================================================

    /// Compute the split areas after the active subtree has been laid out.
    fn update_split_rects(&mut self, button_type: GroupButtonType) {
        if button_type != GroupButtonType::Split {
            self.large.root.write().set_split_rect(None);
            self.medium_small.root.write().set_split_rect(None);
            return;
        }

        let client = self.base.client_rect();
        match self.current_size {
            ItemSize::Large => {
                // The drop-down area is everything under the image.
                let split_top =
                    self.large.swatch.read().client_rect().bottom() + LARGE_SPLIT_GAP;
                self.large.root.write().set_split_rect(Some(Rect::new(
                    client.left(),
                    split_top,
                    client.width(),
                    client.bottom() - split_top,
                )));
                self.medium_small.root.write().set_split_rect(None);
            }
            ItemSize::Small | ItemSize::Medium => {
                // The drop-down area starts at the separator before the arrow.
                let split_left = self
                    .medium_small
                    .sep_before_arrow
                    .read()
                    .client_rect()
                    .left();
                self.medium_small.root.write().set_split_rect(Some(Rect::new(
                    split_left,
                    client.top(),
                    client.right() - split_left,
                    client.height(),
                )));
                self.large.root.write().set_split_rect(None);
            }
        }
    }
}

impl ViewElement for RibbonColorButtonView {
    fn base(&self) -> &ViewBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ViewBase {
        &mut self.base
    }

    fn preferred_size(&mut self, ctx: &mut LayoutContext<'_>) -> Size {
        let Some(model) = self.model.upgrade() else {
            return Size::ZERO;
        };

        // Configure the drawable type on both plates; this is part of the
        // requested configuration, not a layout side effect.
        let button_type = model.button_type();
        self.large.root.write().set_button_type(button_type);
        self.medium_small.root.write().set_button_type(button_type);

        let mut size = self.active().root.write().preferred_size(ctx);
        size.height = match self.current_size {
            ItemSize::Large => ctx.metrics().group_triple_height,
            ItemSize::Small | ItemSize::Medium => ctx.metrics().group_line_height,
        };
        size
    }

    fn layout(&mut self, ctx: &mut LayoutContext<'_>) {
        let Some(model) = self.model.upgrade() else {
            return;
        };

        // Derived state first, so this pass lays out current visuals.
        self.update_enabled_state();
        self.update_checked_state();
        self.update_drop_down_state();
        self.base.set_visible(model.is_visible());

        let button_type = model.button_type();
        self.large.root.write().set_button_type(button_type);
        self.medium_small.root.write().set_button_type(button_type);

        // The widget takes the whole display area offered to it.
        self.base.set_client_rect(ctx.display_rect());
        self.active().root.write().layout(ctx);

        self.update_split_rects(model.button_type());
    }

    fn paint(&mut self, ctx: &mut PaintContext<'_>) {
        if !self.base.is_visible() || !ctx.should_draw(self.base.client_rect()) {
            return;
        }
        self.active().root.write().paint(ctx);
    }

    fn dispose(&mut self) {
        if !self.base.mark_disposed() {
            return;
        }

        // Unhook before teardown so the definition can never call into a
        // partially disposed view.
        self.subscription = None;

        if let Some(model) = self.model.upgrade() {
            model.set_attached_view(None);
        }

        self.large.root.write().dispose();
        self.medium_small.root.write().dispose();
    }
}

impl GroupItemView for RibbonColorButtonView {
    fn first_focus_view(&self) -> Option<ViewId> {
        let model = self.model.upgrade()?;
        if model.is_visible() && model.effective_enabled() {
            Some(self.active_root_id())
        } else {
            None
        }
    }

    fn last_focus_view(&self) -> Option<ViewId> {
        // A single button: first and last coincide.
        self.first_focus_view()
    }

    fn matches_focus_view(&self, current: ViewId) -> bool {
        current == self.large.root.read().id() || current == self.medium_small.root.read().id()
    }

    fn collect_key_tips(&self, list: &mut Vec<KeyTipInfo>, line_hint: u8) {
        let Some(model) = self.model.upgrade() else {
            return;
        };
        if !self.base.is_visible() || !model.is_visible() {
            return;
        }
        let Some(ribbon) = self.ribbon.upgrade() else {
            return;
        };

        let active = self.active();
        let client_rect = active.root.read().client_rect();
        let screen_rect = ribbon.key_tip_to_screen(client_rect);

        let screen_pt = match self.current_size {
            ItemSize::Large => {
                horizon_ribbon_render::Point::new(screen_rect.center().x, screen_rect.bottom())
            }
            ItemSize::Small | ItemSize::Medium => {
                ribbon.metrics().key_tip_rect_to_point(screen_rect, line_hint)
            }
        };

        let controller = active.root.read().controller().clone();
        list.push(KeyTipInfo::new(
            model.effective_enabled(),
            model.key_tip(),
            screen_pt,
            client_rect,
            controller,
        ));
    }

    fn set_item_size(&mut self, size: ItemSize) {
        self.update_item_size_state(size);
    }

    fn reset_item_size(&mut self) {
        if let Some(model) = self.model.upgrade() {
            let size = model.item_size_current();
            self.update_item_size_state(size);
        }
    }
}

static_assertions::assert_impl_all!(RibbonColorButtonView: Send, Sync);

#[cfg(test)]
impl RibbonColorButtonView {
    /// The variant for probing, by size class.
    fn probe_variant(&self, large: bool) -> &VariantViews {
        if large { &self.large } else { &self.medium_small }
    }

    pub(crate) fn probe_enabled(&self, large: bool) -> bool {
        let variant = self.probe_variant(large);
        variant.root.read().is_enabled() && variant.text1.read().is_enabled()
    }

    pub(crate) fn probe_checked(&self, large: bool) -> bool {
        self.probe_variant(large).root.read().is_checked()
    }

    pub(crate) fn probe_arrow_visible(&self, large: bool) -> bool {
        self.probe_variant(large).arrow.read().is_visible()
    }

    pub(crate) fn probe_separators_visible(&self, large: bool) -> (bool, bool) {
        let variant = self.probe_variant(large);
        (
            variant.sep_before_arrow.read().is_visible(),
            variant.sep_after_arrow.read().is_visible(),
        )
    }

    pub(crate) fn probe_ms_text_visible(&self) -> (bool, bool) {
        (
            self.medium_small.text1.read().is_visible(),
            self.medium_small.text2.read().is_visible(),
        )
    }

    pub(crate) fn probe_split_rect(&self, large: bool) -> Option<Rect> {
        self.probe_variant(large).root.read().split_rect()
    }

    pub(crate) fn probe_texts_dirty(&self, large: bool) -> (bool, bool) {
        let variant = self.probe_variant(large);
        (
            variant.text1.read().is_dirty(),
            variant.text2.read().is_dirty(),
        )
    }

    pub(crate) fn probe_swatch_dirty(&self, large: bool) -> bool {
        self.probe_variant(large).swatch.read().is_swatch_dirty()
    }

    pub(crate) fn probe_descendants_disposed(&self) -> bool {
        self.large.root.read().is_disposed()
            && self.large.text1.read().is_disposed()
            && self.large.swatch.read().is_disposed()
            && self.medium_small.root.read().is_disposed()
            && self.medium_small.text1.read().is_disposed()
            && self.medium_small.swatch.read().is_disposed()
    }
}
