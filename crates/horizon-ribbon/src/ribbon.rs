//! The ribbon shell: shared services every view element reaches back to.
//!
//! [`Ribbon`] is the view layer's equivalent of the application object. It
//! does not own the view trees (widgets do); it provides the things they
//! all need:
//!
//! - calculated metrics ([`RibbonMetrics`]) used during size negotiation
//!   and key-tip placement
//! - the registered tab list and the selected tab, which gates whether
//!   off-screen widgets may request work
//! - client-to-screen mapping for key-tip anchors
//! - the layout/paint request queue with re-entrancy coalescing
//!
//! Widgets hold a `Weak<Ribbon>` and early-return when the shell is gone,
//! mirroring the rest of the view layer's non-owning associations.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;

use horizon_ribbon_core::{PerfSpan, Property};
use horizon_ribbon_render::{Palette, Point, Rect, Renderer};

use crate::error::{Result, RibbonError};
use crate::view::ViewHandle;
use crate::view::context::{LayoutContext, PaintContext};
use crate::view::layout::UpdateCoalescer;

/// Upper bound on immediately re-run layout passes.
///
/// A property handler that unconditionally requests layout from inside a
/// layout pass would otherwise spin forever; past this bound the remaining
/// request is left pending for the next frame.
const MAX_CHAINED_PASSES: u32 = 8;

/// Identifies a top-level ribbon tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TabId(u64);

/// Next tab identity to hand out.
static NEXT_TAB_ID: AtomicU64 = AtomicU64::new(1);

impl TabId {
    fn next() -> Self {
        Self(NEXT_TAB_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Calculated metrics shared by every group item during layout.
///
/// These are the values the theme/measurement pass of a full ribbon would
/// produce; group items consume them when negotiating heights and when
/// placing key-tip anchors on group lines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RibbonMetrics {
    /// Height of a full (triple-line) group item, used by Large items.
    pub group_triple_height: f32,
    /// Height of a single group line, used by Medium and Small items.
    pub group_line_height: f32,
    /// Vertical offsets of the key-tip anchor for each group line.
    pub key_tip_line_offsets: [f32; 3],
}

impl Default for RibbonMetrics {
    fn default() -> Self {
        Self {
            group_triple_height: 74.0,
            group_line_height: 26.0,
            key_tip_line_offsets: [26.0, 52.0, 74.0],
        }
    }
}

impl RibbonMetrics {
    /// Compute the key-tip anchor for a Medium/Small item.
    ///
    /// The anchor sits at the horizontal center of the item's screen
    /// rectangle, on the group line selected by `line_hint` (clamped to the
    /// available lines).
    pub fn key_tip_rect_to_point(&self, rect: Rect, line_hint: u8) -> Point {
        let line = (line_hint.max(1) as usize - 1).min(self.key_tip_line_offsets.len() - 1);
        Point::new(rect.center().x, rect.top() + self.key_tip_line_offsets[line])
    }
}

/// Shared services for a family of ribbon group views.
///
/// Create one per ribbon control with [`Ribbon::new`] and hand the `Arc` to
/// every widget view built for it. All methods take `&self`; interior state
/// is behind locks because the shell is reached from property-change slots
/// as well as layout/paint passes.
pub struct Ribbon {
    /// Whether the whole ribbon control is enabled.
    enabled: Property<bool>,
    /// Screen position of the ribbon's client origin.
    screen_origin: Property<Point>,
    /// Metrics used during size negotiation.
    metrics: RibbonMetrics,
    /// Registered top-level tabs, in registration order.
    tabs: Mutex<Vec<TabId>>,
    /// The currently selected tab, if any.
    selected_tab: Mutex<Option<TabId>>,
    /// Pending layout/paint work.
    updates: Mutex<UpdateCoalescer>,
}

impl Ribbon {
    /// Create a ribbon shell with default metrics.
    pub fn new() -> Arc<Self> {
        Self::with_metrics(RibbonMetrics::default())
    }

    /// Create a ribbon shell with explicit metrics.
    pub fn with_metrics(metrics: RibbonMetrics) -> Arc<Self> {
        Arc::new(Self {
            enabled: Property::new(true),
            screen_origin: Property::new(Point::ZERO),
            metrics,
            tabs: Mutex::new(Vec::new()),
            selected_tab: Mutex::new(None),
            updates: Mutex::new(UpdateCoalescer::new()),
        })
    }

    // =========================================================================
    // Enabled / Screen Mapping
    // =========================================================================

    /// Check if the ribbon control is enabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled.get()
    }

    /// Set whether the ribbon control is enabled.
    ///
    /// Disabling the ribbon disables every group item regardless of its
    /// definition state; a layout pass is requested so the derived state
    /// is refreshed and shown.
    pub fn set_enabled(&self, enabled: bool) {
        if self.enabled.set(enabled) {
            self.update_request(true, None);
        }
    }

    /// The screen position of the ribbon's client origin.
    pub fn screen_origin(&self) -> Point {
        self.screen_origin.get()
    }

    /// Tell the shell where the ribbon sits on screen.
    ///
    /// The host calls this when the containing window moves; key-tip
    /// anchors are computed against it.
    pub fn set_screen_origin(&self, origin: Point) {
        self.screen_origin.set(origin);
    }

    /// Map a client rectangle to screen coordinates for key-tip placement.
    pub fn key_tip_to_screen(&self, client_rect: Rect) -> Rect {
        let origin = self.screen_origin.get();
        client_rect.offset(origin.x, origin.y)
    }

    /// The metrics used during size negotiation.
    pub fn metrics(&self) -> &RibbonMetrics {
        &self.metrics
    }

    // =========================================================================
    // Tabs
    // =========================================================================

    /// Register a new top-level tab, returning its identity.
    ///
    /// The first registered tab becomes the selected tab.
    pub fn add_tab(&self) -> TabId {
        let id = TabId::next();
        self.tabs.lock().push(id);

        let mut selected = self.selected_tab.lock();
        if selected.is_none() {
            *selected = Some(id);
        }
        id
    }

    /// The currently selected tab, if any.
    pub fn selected_tab(&self) -> Option<TabId> {
        *self.selected_tab.lock()
    }

    /// Select a registered tab.
    ///
    /// Selecting the already-selected tab is a no-op. Selecting a tab that
    /// was never registered is API misuse and reports [`RibbonError::UnknownTab`].
    pub fn set_selected_tab(&self, tab: TabId) -> Result<()> {
        if !self.tabs.lock().contains(&tab) {
            return Err(RibbonError::UnknownTab(tab));
        }

        let mut selected = self.selected_tab.lock();
        if *selected != Some(tab) {
            *selected = Some(tab);
            drop(selected);
            self.update_request(true, None);
        }
        Ok(())
    }

    /// Check whether the given tab association is the selected tab.
    ///
    /// A widget with no tab association (`None`) is never considered
    /// selected.
    pub fn is_tab_selected(&self, tab: Option<TabId>) -> bool {
        match tab {
            Some(tab) => self.selected_tab() == Some(tab),
            None => false,
        }
    }

    // =========================================================================
    // Update Requests
    // =========================================================================

    /// Record a layout and/or paint request.
    ///
    /// This is the view layer's need-paint channel: property reactors and
    /// state updates call it instead of touching the tree directly, and the
    /// shell folds re-entrant requests into a single pending pass.
    pub fn update_request(&self, needs_layout: bool, invalid: Option<Rect>) {
        tracing::trace!(
            target: "horizon_ribbon::layout",
            needs_layout,
            ?invalid,
            "update request"
        );
        self.updates.lock().request(needs_layout, invalid);
    }

    /// Whether a layout pass is pending.
    pub fn needs_layout(&self) -> bool {
        self.updates.lock().needs_layout()
    }

    /// Take the accumulated invalid paint region, clearing it.
    pub fn take_invalid(&self) -> Option<Rect> {
        self.updates.lock().take_invalid()
    }

    /// Total layout requests observed (diagnostic).
    pub fn layout_requests(&self) -> u64 {
        self.updates.lock().layout_requests()
    }

    /// Total paint requests observed (diagnostic).
    pub fn paint_requests(&self) -> u64 {
        self.updates.lock().paint_requests()
    }

    /// Total layout passes performed (diagnostic).
    pub fn layout_passes(&self) -> u64 {
        self.updates.lock().layout_passes()
    }

    // =========================================================================
    // Layout / Paint Driving
    // =========================================================================

    /// Run a layout pass over `root`, coalescing re-entrant requests.
    ///
    /// If a property handler fired during the pass requests another layout,
    /// exactly one follow-up pass runs (bounded by a safety cap). Calling
    /// this from inside a running pass records the request and returns
    /// without recursing.
    pub fn perform_layout(
        &self,
        root: &ViewHandle,
        renderer: &mut dyn Renderer,
        palette: &dyn Palette,
        display_rect: Rect,
    ) {
        let mut chained = 0u32;
        loop {
            if !self.updates.lock().begin_pass() {
                // Re-entrant call from inside a pass: already coalesced.
                return;
            }

            {
                let _span = PerfSpan::new("layout_pass");
                let mut ctx = LayoutContext::new(display_rect, renderer, palette, &self.metrics);
                root.write().layout(&mut ctx);
            }

            if !self.updates.lock().end_pass() {
                return;
            }

            chained += 1;
            if chained >= MAX_CHAINED_PASSES {
                tracing::warn!(
                    target: "horizon_ribbon::layout",
                    chained,
                    "layout requests did not settle; leaving request pending"
                );
                self.updates.lock().request(true, None);
                return;
            }
        }
    }

    /// Paint `root`, restricted to the accumulated invalid region if any.
    ///
    /// The invalid region is consumed: a second call with no intervening
    /// paint requests repaints everything.
    pub fn perform_paint(
        &self,
        root: &ViewHandle,
        renderer: &mut dyn Renderer,
        palette: &dyn Palette,
    ) {
        let _span = PerfSpan::new("paint_pass");
        let clip = self.take_invalid();

        if let Some(rect) = clip {
            renderer.save();
            renderer.clip_rect(rect);
        }

        let mut ctx = PaintContext::new(renderer, palette, clip);
        root.write().paint(&mut ctx);

        if clip.is_some() {
            renderer.restore();
        }
    }
}

static_assertions::assert_impl_all!(Ribbon: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_tab_becomes_selected() {
        let ribbon = Ribbon::new();
        assert_eq!(ribbon.selected_tab(), None);

        let tab = ribbon.add_tab();
        assert_eq!(ribbon.selected_tab(), Some(tab));
    }

    #[test]
    fn test_set_selected_tab_unknown_is_error() {
        let ribbon = Ribbon::new();
        let registered = ribbon.add_tab();

        let other = Ribbon::new();
        let foreign = other.add_tab();

        assert_eq!(
            ribbon.set_selected_tab(foreign),
            Err(RibbonError::UnknownTab(foreign))
        );
        assert_eq!(ribbon.selected_tab(), Some(registered));
    }

    #[test]
    fn test_is_tab_selected_none_is_never_selected() {
        let ribbon = Ribbon::new();
        ribbon.add_tab();
        assert!(!ribbon.is_tab_selected(None));
    }

    #[test]
    fn test_key_tip_to_screen_applies_origin() {
        let ribbon = Ribbon::new();
        ribbon.set_screen_origin(Point::new(100.0, 200.0));

        let screen = ribbon.key_tip_to_screen(Rect::new(10.0, 10.0, 40.0, 20.0));
        assert_eq!(screen, Rect::new(110.0, 210.0, 40.0, 20.0));
    }

    #[test]
    fn test_metrics_key_tip_line_clamps_hint() {
        let metrics = RibbonMetrics::default();
        let rect = Rect::new(0.0, 0.0, 40.0, 74.0);

        let first = metrics.key_tip_rect_to_point(rect, 0);
        let clamped = metrics.key_tip_rect_to_point(rect, 9);
        assert_eq!(first.y, metrics.key_tip_line_offsets[0]);
        assert_eq!(clamped.y, metrics.key_tip_line_offsets[2]);
        assert_eq!(first.x, 20.0);
    }
}
