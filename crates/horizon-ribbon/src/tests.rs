//! Cross-module scenario tests for the view engine.

use std::sync::{Arc, Weak};

use parking_lot::RwLock;

use horizon_ribbon_render::{DrawOp, RecordingRenderer, Rect, Size};

use crate::group::{GroupItemView, RibbonColorButtonView};
use crate::model::{GroupButtonType, ItemSize, PropertyChange, RibbonColorButton};
use crate::ribbon::{Ribbon, TabId};
use crate::test_support::TestPalette;
use crate::view::{
    LayoutContext, PaintContext, SharedView, ViewBase, ViewElement, ViewHandle,
};

/// A ribbon with one selected tab, a definition on that tab, and its view.
fn setup() -> (
    Arc<Ribbon>,
    TabId,
    Arc<RibbonColorButton>,
    SharedView<RibbonColorButtonView>,
) {
    let ribbon = Ribbon::new();
    let tab = ribbon.add_tab();

    let model = RibbonColorButton::new();
    model.set_ribbon_tab(Some(tab));
    model.set_key_tip("C");

    let view = RibbonColorButtonView::new(&ribbon, &model);
    (ribbon, tab, model, view)
}

fn run_layout(ribbon: &Arc<Ribbon>, view: &SharedView<RibbonColorButtonView>, rect: Rect) {
    let root: ViewHandle = view.clone();
    let mut renderer = RecordingRenderer::new();
    let palette = TestPalette;
    ribbon.perform_layout(&root, &mut renderer, &palette, rect);
}

// =============================================================================
// Size-Variant Selection
// =============================================================================

#[test]
fn variant_switch_rebinds_back_reference() {
    let (_ribbon, _tab, model, view) = setup();

    let large_id = view.read().active_root_id();
    assert_eq!(view.read().current_size(), ItemSize::Large);
    assert_eq!(model.attached_view(), Some(large_id));

    model.set_item_size_current(ItemSize::Medium);
    let medium_id = view.read().active_root_id();
    assert_ne!(large_id, medium_id);
    assert_eq!(view.read().current_size(), ItemSize::Medium);
    assert_eq!(model.attached_view(), Some(medium_id));
}

#[test]
fn repeated_activation_requests_no_additional_work() {
    let (ribbon, _tab, model, _view) = setup();
    assert_eq!(ribbon.layout_requests(), 0);

    model.set_item_size_current(ItemSize::Medium);
    assert_eq!(ribbon.layout_requests(), 1);

    // Same variant again: the definition detects no change, the selector
    // performs no rebind, no further layout is requested.
    model.set_item_size_current(ItemSize::Medium);
    assert_eq!(ribbon.layout_requests(), 1);
}

#[test]
fn explicit_override_is_idempotent() {
    let (_ribbon, _tab, model, view) = setup();

    view.write().set_item_size(ItemSize::Small);
    let first = view.read().active_root_id();
    view.write().set_item_size(ItemSize::Small);

    assert_eq!(view.read().active_root_id(), first);
    assert_eq!(model.attached_view(), Some(first));
}

#[test]
fn out_of_range_size_resolves_nearest() {
    let (_ribbon, _tab, model, view) = setup();
    model.set_item_size_minimum(ItemSize::Medium);

    view.write().set_item_size(ItemSize::Small);
    assert_eq!(view.read().current_size(), ItemSize::Medium);

    model.set_item_size_maximum(ItemSize::Medium);
    view.write().set_item_size(ItemSize::Large);
    assert_eq!(view.read().current_size(), ItemSize::Medium);
}

#[test]
fn medium_shows_text_small_hides_it() {
    let (_ribbon, _tab, model, view) = setup();

    model.set_item_size_current(ItemSize::Medium);
    assert_eq!(view.read().probe_ms_text_visible(), (true, true));

    model.set_item_size_current(ItemSize::Small);
    assert_eq!(view.read().probe_ms_text_visible(), (false, false));
}

// =============================================================================
// Property-Change Reactor
// =============================================================================

#[test]
fn unknown_property_names_are_noops() {
    assert_eq!(PropertyChange::from_name("NotAProperty"), None);

    // An inert change reaches the reactor and produces no requests.
    let (ribbon, _tab, model, _view) = setup();
    model.set_key_tip("Z");
    assert_eq!(ribbon.layout_requests(), 0);
    assert_eq!(ribbon.paint_requests(), 0);
}

#[test]
fn text_change_requests_layout_on_selected_tab() {
    let (ribbon, _tab, model, view) = setup();

    // A layout pass settles the active variant's measurement caches.
    run_layout(&ribbon, &view, Rect::new(0.0, 0.0, 64.0, 74.0));
    assert!(!view.read().probe_texts_dirty(true).0);

    model.set_text_line1("Fill Color");
    assert_eq!(ribbon.layout_requests(), 1);
    // Both variants' measurements were invalidated.
    assert!(view.read().probe_texts_dirty(true).0);
    assert!(view.read().probe_texts_dirty(false).0);
}

#[test]
fn color_change_requests_paint_not_layout() {
    let (ribbon, _tab, model, view) = setup();
    run_layout(&ribbon, &view, Rect::new(0.0, 0.0, 48.0, 74.0));

    // Paint once to settle the swatch caches.
    let root: ViewHandle = view.clone();
    let mut renderer = RecordingRenderer::new();
    let palette = TestPalette;
    ribbon.perform_paint(&root, &mut renderer, &palette);
    assert!(!view.read().probe_swatch_dirty(true));

    let layout_before = ribbon.layout_requests();
    model.set_selected_color(horizon_ribbon_render::Color::GREEN);

    assert_eq!(ribbon.layout_requests(), layout_before);
    assert_eq!(ribbon.paint_requests(), 1);
    assert!(view.read().probe_swatch_dirty(true));
    assert!(view.read().probe_swatch_dirty(false));
}

#[test]
fn off_tab_changes_are_suppressed_until_tab_selected() {
    let (ribbon, _tab1, _model1, _view1) = setup();
    let tab2 = ribbon.add_tab();

    let model = RibbonColorButton::new();
    model.set_ribbon_tab(Some(tab2));
    let _view = RibbonColorButtonView::new(&ribbon, &model);

    // tab2 is not selected: the change reaches the view but no work is
    // requested.
    model.property_changed.emit(PropertyChange::TextLine1);
    assert_eq!(ribbon.layout_requests(), 0);

    // Selecting the tab requests one layout itself...
    ribbon.set_selected_tab(tab2).unwrap();
    let baseline = ribbon.layout_requests();

    // ...and now the same change does trigger work.
    model.property_changed.emit(PropertyChange::TextLine1);
    assert_eq!(ribbon.layout_requests(), baseline + 1);
}

#[test]
fn invisible_widget_suppresses_paint_but_not_layout() {
    let (ribbon, _tab, model, _view) = setup();

    model.set_visible(false);
    let layout_after_hide = ribbon.layout_requests();
    let paint_after_hide = ribbon.paint_requests();

    model.set_selected_color(horizon_ribbon_render::Color::BLUE);
    assert_eq!(ribbon.paint_requests(), paint_after_hide);

    model.set_text_line1("still relayouts");
    assert_eq!(ribbon.layout_requests(), layout_after_hide + 1);
}

#[test]
fn enabled_state_syncs_both_variants() {
    let (_ribbon, _tab, model, view) = setup();

    model.set_enabled(false);
    assert!(!view.read().probe_enabled(true));
    assert!(!view.read().probe_enabled(false));

    model.set_enabled(true);
    assert!(view.read().probe_enabled(true));
    assert!(view.read().probe_enabled(false));
}

#[test]
fn ribbon_disable_disables_widget() {
    let (ribbon, _tab, model, view) = setup();
    ribbon.set_enabled(false);

    // The ribbon-level flag is consulted at the next state refresh.
    model.property_changed.emit(PropertyChange::Enabled);
    assert!(!view.read().probe_enabled(true));
}

#[test]
fn checked_presentation_requires_check_type() {
    let (_ribbon, _tab, model, view) = setup();

    model.set_checked(true);
    // Split buttons never present as checked.
    assert!(!view.read().probe_checked(true));

    model.set_button_type(GroupButtonType::Check);
    model.property_changed.emit(PropertyChange::Checked);
    assert!(view.read().probe_checked(true));
    assert!(view.read().probe_checked(false));
}

#[test]
fn command_binding_cascades_and_overrides() {
    let (ribbon, _tab, model, view) = setup();

    let command = Arc::new(crate::model::RibbonCommand::new());
    command.set_enabled(false);
    model.set_command(Some(command.clone()));

    // Binding dirties every derived visual and requests a layout.
    assert_eq!(ribbon.layout_requests(), 1);
    assert_eq!(view.read().probe_texts_dirty(true), (true, true));
    assert!(view.read().probe_swatch_dirty(true));
    assert!(!view.read().probe_enabled(true));

    // Command state changes flow through the same reactor.
    command.set_enabled(true);
    assert!(view.read().probe_enabled(true));
    assert_eq!(ribbon.paint_requests(), 1);
}

// =============================================================================
// Drop-Down Presentation
// =============================================================================

#[test]
fn drop_arrow_visibility_follows_button_type() {
    let (_ribbon, _tab, model, view) = setup();

    // Default Split type shows the arrow everywhere.
    assert!(view.read().probe_arrow_visible(true));
    assert!(view.read().probe_arrow_visible(false));
    // Medium/small separators follow the arrow; large ones also need text.
    assert_eq!(view.read().probe_separators_visible(false), (true, true));
    assert_eq!(view.read().probe_separators_visible(true), (false, false));

    model.set_text_line2("More");
    assert_eq!(view.read().probe_separators_visible(true), (true, true));

    model.set_button_type(GroupButtonType::Push);
    assert!(!view.read().probe_arrow_visible(true));
    assert!(!view.read().probe_arrow_visible(false));
    assert_eq!(view.read().probe_separators_visible(false), (false, false));
}

#[test]
fn split_rect_computed_after_layout() {
    let (ribbon, _tab, model, view) = setup();
    assert_eq!(model.button_type(), GroupButtonType::Split);

    run_layout(&ribbon, &view, Rect::new(0.0, 0.0, 48.0, 74.0));

    let split = view.read().probe_split_rect(true).expect("split rect");
    let client = view.read().client_rect();
    assert_eq!(split.left(), client.left());
    assert_eq!(split.right(), client.right());
    assert_eq!(split.bottom(), client.bottom());
    assert!(split.top() > client.top());

    // Push buttons clear it again.
    model.set_button_type(GroupButtonType::Push);
    run_layout(&ribbon, &view, Rect::new(0.0, 0.0, 48.0, 74.0));
    assert_eq!(view.read().probe_split_rect(true), None);
}

#[test]
fn medium_split_rect_starts_at_arrow_separator() {
    let (ribbon, _tab, model, view) = setup();
    model.set_item_size_current(ItemSize::Medium);

    run_layout(&ribbon, &view, Rect::new(0.0, 0.0, 120.0, 26.0));

    let split = view.read().probe_split_rect(false).expect("split rect");
    let client = view.read().client_rect();
    assert_eq!(split.top(), client.top());
    assert_eq!(split.bottom(), client.bottom());
    assert!(split.left() > client.left());
    assert!(view.read().probe_split_rect(true).is_none());
}

// =============================================================================
// Layout and Paint Dispatch
// =============================================================================

#[test]
fn preferred_height_comes_from_metrics() {
    let (ribbon, _tab, model, view) = setup();

    let mut renderer = RecordingRenderer::new();
    let palette = TestPalette;
    let metrics = *ribbon.metrics();
    let mut ctx = LayoutContext::new(Rect::ZERO, &mut renderer, &palette, &metrics);

    let large = view.write().preferred_size(&mut ctx);
    assert_eq!(large.height, metrics.group_triple_height);

    model.set_item_size_current(ItemSize::Small);
    let small = view.write().preferred_size(&mut ctx);
    assert_eq!(small.height, metrics.group_line_height);
}

#[test]
fn paint_draws_swatch_text_and_arrow() {
    let (ribbon, _tab, model, view) = setup();
    model.set_text_line1("Color");
    run_layout(&ribbon, &view, Rect::new(0.0, 0.0, 64.0, 74.0));

    let root: ViewHandle = view.clone();
    let mut renderer = RecordingRenderer::new();
    let palette = TestPalette;
    ribbon.perform_paint(&root, &mut renderer, &palette);

    assert!(renderer.texts().contains(&"Color"));
    assert!(renderer.fill_count() >= 1); // the selection strip
    assert!(
        renderer
            .ops()
            .iter()
            .any(|op| matches!(op, DrawOp::Polyline(..)))
    );
}

#[test]
fn paint_outside_invalid_rect_is_culled() {
    let (ribbon, _tab, _model, view) = setup();
    run_layout(&ribbon, &view, Rect::new(0.0, 0.0, 64.0, 74.0));

    ribbon.update_request(false, Some(Rect::new(500.0, 500.0, 10.0, 10.0)));

    let root: ViewHandle = view.clone();
    let mut renderer = RecordingRenderer::new();
    let palette = TestPalette;
    ribbon.perform_paint(&root, &mut renderer, &palette);

    // Only the clip bracket was issued; the widget itself drew nothing.
    assert_eq!(
        renderer.ops(),
        &[
            DrawOp::Save,
            DrawOp::Clip(Rect::new(500.0, 500.0, 10.0, 10.0)),
            DrawOp::Restore
        ]
    );

    // The invalid region was consumed; the next paint is unrestricted.
    let mut renderer = RecordingRenderer::new();
    ribbon.perform_paint(&root, &mut renderer, &palette);
    assert!(renderer.fill_count() >= 1);
}

#[test]
fn reentrant_layout_request_coalesces_to_one_extra_pass() {
    /// A leaf that requests another layout the first time it is laid out.
    struct ReentrantLeaf {
        base: ViewBase,
        ribbon: Weak<Ribbon>,
        fired: bool,
    }

    impl ViewElement for ReentrantLeaf {
        fn base(&self) -> &ViewBase {
            &self.base
        }
        fn base_mut(&mut self) -> &mut ViewBase {
            &mut self.base
        }
        fn preferred_size(&mut self, _ctx: &mut LayoutContext<'_>) -> Size {
            Size::new(10.0, 10.0)
        }
        fn layout(&mut self, ctx: &mut LayoutContext<'_>) {
            self.base.set_client_rect(ctx.display_rect());
            if !self.fired {
                self.fired = true;
                if let Some(ribbon) = self.ribbon.upgrade() {
                    ribbon.update_request(true, None);
                }
            }
        }
        fn paint(&mut self, _ctx: &mut PaintContext<'_>) {}
    }

    let ribbon = Ribbon::new();
    let root: ViewHandle = Arc::new(RwLock::new(ReentrantLeaf {
        base: ViewBase::new(),
        ribbon: Arc::downgrade(&ribbon),
        fired: false,
    }));

    let mut renderer = RecordingRenderer::new();
    let palette = TestPalette;
    ribbon.perform_layout(&root, &mut renderer, &palette, Rect::new(0.0, 0.0, 10.0, 10.0));

    // The re-entrant request ran as exactly one follow-up pass, not a
    // recursion and not a pass per request.
    assert_eq!(ribbon.layout_passes(), 2);
    assert!(!ribbon.needs_layout());
}

// =============================================================================
// Key Tips
// =============================================================================

#[test]
fn large_key_tip_anchors_at_bottom_center() {
    let (ribbon, _tab, _model, view) = setup();
    run_layout(&ribbon, &view, Rect::new(10.0, 10.0, 40.0, 20.0));

    let mut tips = Vec::new();
    view.read().collect_key_tips(&mut tips, 1);

    assert_eq!(tips.len(), 1);
    let tip = &tips[0];
    assert_eq!(tip.key_string(), "C");
    assert!(tip.is_enabled());
    assert_eq!(tip.client_rect(), Rect::new(10.0, 10.0, 40.0, 20.0));
    assert_eq!(tip.screen_pt(), horizon_ribbon_render::Point::new(30.0, 30.0));
}

#[test]
fn invisible_widget_contributes_no_key_tips() {
    let (ribbon, _tab, model, view) = setup();
    run_layout(&ribbon, &view, Rect::new(10.0, 10.0, 40.0, 20.0));

    model.set_visible(false);
    let mut tips = Vec::new();
    view.read().collect_key_tips(&mut tips, 1);
    assert!(tips.is_empty());
}

#[test]
fn key_tip_selection_activates_through_controller() {
    use std::sync::atomic::{AtomicUsize, Ordering};

    let (ribbon, _tab, model, view) = setup();
    run_layout(&ribbon, &view, Rect::new(0.0, 0.0, 48.0, 74.0));

    let drops = Arc::new(AtomicUsize::new(0));
    let drops_clone = drops.clone();
    model.drop_down.connect(move |()| {
        drops_clone.fetch_add(1, Ordering::SeqCst);
    });

    let mut tips = Vec::new();
    view.read().collect_key_tips(&mut tips, 1);
    // A split button's key tip opens the drop-down.
    tips[0].select(&ribbon);
    assert_eq!(drops.load(Ordering::SeqCst), 1);
}

#[test]
fn disabled_key_tip_select_is_noop() {
    use std::sync::atomic::{AtomicUsize, Ordering};

    let (ribbon, _tab, model, view) = setup();
    model.set_enabled(false);
    run_layout(&ribbon, &view, Rect::new(0.0, 0.0, 48.0, 74.0));

    let clicks = Arc::new(AtomicUsize::new(0));
    let clicks_clone = clicks.clone();
    model.click.connect(move |()| {
        clicks_clone.fetch_add(1, Ordering::SeqCst);
    });

    let mut tips = Vec::new();
    view.read().collect_key_tips(&mut tips, 1);
    assert_eq!(tips.len(), 1);
    assert!(!tips[0].is_enabled());

    tips[0].select(&ribbon);
    assert_eq!(clicks.load(Ordering::SeqCst), 0);
}

#[test]
fn medium_key_tip_uses_line_hint() {
    let (ribbon, _tab, model, view) = setup();
    model.set_item_size_current(ItemSize::Medium);
    run_layout(&ribbon, &view, Rect::new(0.0, 10.0, 120.0, 26.0));

    let mut tips = Vec::new();
    view.read().collect_key_tips(&mut tips, 2);
    assert_eq!(tips.len(), 1);

    let expected = ribbon
        .metrics()
        .key_tip_rect_to_point(Rect::new(0.0, 10.0, 120.0, 26.0), 2);
    assert_eq!(tips[0].screen_pt(), expected);
}

// =============================================================================
// Focus Chain
// =============================================================================

#[test]
fn focus_targets_follow_state() {
    let (_ribbon, _tab, model, view) = setup();

    let first = view.read().first_focus_view();
    assert_eq!(first, Some(view.read().active_root_id()));
    assert_eq!(view.read().last_focus_view(), first);
    assert!(view.read().matches_focus_view(first.unwrap()));

    model.set_enabled(false);
    assert_eq!(view.read().first_focus_view(), None);

    model.set_enabled(true);
    model.set_visible(false);
    assert_eq!(view.read().first_focus_view(), None);
}

#[test]
fn focus_matches_both_variant_roots() {
    let (_ribbon, _tab, model, view) = setup();

    let large_id = view.read().active_root_id();
    model.set_item_size_current(ItemSize::Small);
    let small_id = view.read().active_root_id();

    assert!(view.read().matches_focus_view(large_id));
    assert!(view.read().matches_focus_view(small_id));
    assert!(!view.read().matches_focus_view(crate::view::ViewId::next()));
}

// =============================================================================
// Disposal
// =============================================================================

#[test]
fn dispose_unhooks_and_cascades_once() {
    let (_ribbon, _tab, model, view) = setup();
    assert_eq!(model.property_changed.connection_count(), 1);
    assert!(model.attached_view().is_some());

    view.write().dispose();
    assert_eq!(model.property_changed.connection_count(), 0);
    assert_eq!(model.attached_view(), None);
    assert!(view.read().is_disposed());
    assert!(view.read().probe_descendants_disposed());

    // Second dispose is a no-op.
    view.write().dispose();
    assert!(view.read().is_disposed());
}

#[test]
fn changes_after_dispose_are_ignored() {
    let (ribbon, _tab, model, view) = setup();
    view.write().dispose();

    model.set_text_line1("after teardown");
    assert_eq!(ribbon.layout_requests(), 0);
}
