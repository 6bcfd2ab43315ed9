//! Layout/paint request coalescing.
//!
//! The view engine is single-threaded and event-driven: a property-change
//! slot may request a layout while a layout pass is already running (for
//! example, a handler reacting to state the pass itself refreshed). Those
//! re-entrant requests must not recurse; they are folded into one pending
//! pass that runs after the current one completes.
//!
//! [`UpdateCoalescer`] also merges paint requests between frames: repeated
//! invalid rectangles are unioned into a single region, and counters are
//! kept so callers (and tests) can observe how much work was requested
//! versus performed.

use horizon_ribbon_render::Rect;

/// Tracks pending layout and paint work, folding re-entrant requests.
#[derive(Debug, Default)]
pub struct UpdateCoalescer {
    /// Whether a layout pass has been requested and not yet performed.
    needs_layout: bool,

    /// Union of all invalid rectangles requested since the last paint.
    invalid: Option<Rect>,

    /// Whether a layout pass is currently executing.
    in_layout_pass: bool,

    /// Whether a request arrived while a pass was executing.
    rerun_requested: bool,

    /// Total layout requests observed.
    layout_requests: u64,

    /// Total paint requests observed.
    paint_requests: u64,

    /// Total layout passes performed.
    layout_passes: u64,
}

impl UpdateCoalescer {
    /// Create a new coalescer with no pending work.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an update request.
    ///
    /// `needs_layout` requests a layout pass; `invalid` requests a repaint
    /// of the given region (`None` leaves the paint region untouched when
    /// only layout is needed). Requests arriving during a pass are deferred,
    /// never recursed into.
    pub fn request(&mut self, needs_layout: bool, invalid: Option<Rect>) {
        if needs_layout {
            self.layout_requests += 1;
            self.needs_layout = true;
            if self.in_layout_pass {
                self.rerun_requested = true;
            }
        }

        if let Some(rect) = invalid {
            self.paint_requests += 1;
            if !rect.is_empty() {
                self.invalid = Some(match self.invalid {
                    Some(existing) => existing.union(&rect),
                    None => rect,
                });
            }
        }
    }

    /// Begin a layout pass.
    ///
    /// Returns `false` if a pass is already running; the request is folded
    /// into that pass instead (it will re-run once).
    pub fn begin_pass(&mut self) -> bool {
        if self.in_layout_pass {
            self.rerun_requested = true;
            return false;
        }
        self.in_layout_pass = true;
        true
    }

    /// End the current layout pass.
    ///
    /// Returns `true` if a request arrived during the pass, in which case
    /// the caller should run exactly one more pass.
    pub fn end_pass(&mut self) -> bool {
        self.layout_passes += 1;
        self.in_layout_pass = false;
        self.needs_layout = false;
        std::mem::take(&mut self.rerun_requested)
    }

    /// Whether a layout pass is pending.
    #[inline]
    pub fn needs_layout(&self) -> bool {
        self.needs_layout
    }

    /// Take the accumulated invalid region, clearing it.
    pub fn take_invalid(&mut self) -> Option<Rect> {
        self.invalid.take()
    }

    /// Total layout requests observed so far.
    #[inline]
    pub fn layout_requests(&self) -> u64 {
        self.layout_requests
    }

    /// Total paint requests observed so far.
    #[inline]
    pub fn paint_requests(&self) -> u64 {
        self.paint_requests
    }

    /// Total layout passes performed so far.
    #[inline]
    pub fn layout_passes(&self) -> u64 {
        self.layout_passes
    }
}
