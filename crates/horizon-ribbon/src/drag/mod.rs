//! Drag feedback contract.
//!
//! During a drag operation the host drives a [`DragFeedback`]
//! implementation through a fixed lifecycle:
//!
//! 1. [`start`](DragFeedback::start) with the drawing collaborators, the
//!    payload being dragged and the candidate target list
//! 2. zero or more [`feedback`](DragFeedback::feedback) calls as the
//!    pointer moves
//! 3. [`quit`](DragFeedback::quit) when the drag ends, however it ends
//!
//! Implementations must tolerate `quit` without a prior `start` and
//! release their payload/target references exactly once, on `quit` or
//! disposal, whichever comes first. [`DragFeedbackBase`] provides that
//! bookkeeping so implementations only supply the visuals.

use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

use horizon_ribbon_render::{PaletteDragDrop, Point, Rect, Renderer};

/// Standard payload formats.
pub mod mime {
    /// Plain text payload.
    pub const TEXT_PLAIN: &str = "text/plain";
    /// Custom application data prefix.
    pub const APPLICATION_PREFIX: &str = "application/x-horizon-ribbon-";
}

/// A renderer shared with the drag overlay for its lifetime.
///
/// Unlike layout/paint passes, which borrow the renderer per call, drag
/// feedback caches it across the whole drag; the host hands it over
/// behind a lock.
pub type SharedRenderer = Arc<Mutex<dyn Renderer + Send>>;

/// The data being dragged.
///
/// A payload can hold several representations keyed by format name, so a
/// target can pick the richest one it understands.
#[derive(Default)]
pub struct DragPayload {
    /// Data stored by format name.
    data: HashMap<String, Vec<u8>>,
    /// Custom user data (type-erased).
    user_data: Option<Arc<dyn Any + Send + Sync>>,
}

impl DragPayload {
    /// Create an empty payload.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a payload carrying plain text.
    pub fn from_text(text: impl Into<String>) -> Self {
        let mut payload = Self::default();
        payload.set_data(mime::TEXT_PLAIN, text.into().into_bytes());
        payload
    }

    /// Check if data is available for the given format.
    pub fn has_format(&self, format: &str) -> bool {
        self.data.contains_key(format)
    }

    /// Raw data for a format.
    pub fn get_data(&self, format: &str) -> Option<&[u8]> {
        self.data.get(format).map(|v| v.as_slice())
    }

    /// Store raw data for a format.
    pub fn set_data(&mut self, format: impl Into<String>, data: impl Into<Vec<u8>>) {
        self.data.insert(format.into(), data.into());
    }

    /// The plain text content, if present.
    pub fn text(&self) -> Option<String> {
        self.get_data(mime::TEXT_PLAIN)
            .and_then(|bytes| String::from_utf8(bytes.to_vec()).ok())
    }

    /// Attach custom user data.
    pub fn set_user_data(&mut self, data: Arc<dyn Any + Send + Sync>) {
        self.user_data = Some(data);
    }

    /// The custom user data, if any.
    pub fn user_data(&self) -> Option<&Arc<dyn Any + Send + Sync>> {
        self.user_data.as_ref()
    }
}

/// One candidate drop location.
#[derive(Debug, Clone, PartialEq)]
pub struct DragTarget {
    /// The screen area the feedback highlights.
    pub screen_rect: Rect,
    /// The screen area that activates this target.
    pub hot_rect: Rect,
}

impl DragTarget {
    /// Create a target whose hot area equals its visible area.
    pub fn new(screen_rect: Rect) -> Self {
        Self {
            screen_rect,
            hot_rect: screen_rect,
        }
    }

    /// Check whether a screen point activates this target.
    pub fn is_match(&self, screen_pt: Point) -> bool {
        self.hot_rect.contains(screen_pt)
    }
}

/// The list of candidate targets for one drag, shared with the feedback.
pub type DragTargetList = Vec<DragTarget>;

/// The drag feedback lifecycle consumed by the host during drags.
pub trait DragFeedback: Send {
    /// Initialize the feedback when dragging starts.
    fn start(
        &mut self,
        palette: Arc<dyn PaletteDragDrop>,
        renderer: SharedRenderer,
        payload: Arc<DragPayload>,
        targets: Arc<DragTargetList>,
    );

    /// Show feedback for the pointer at `screen_pt`.
    ///
    /// `target` is the host's current match, if any; the implementation
    /// returns the target it decided to indicate (usually the same one).
    fn feedback(&mut self, screen_pt: Point, target: Option<&DragTarget>) -> Option<DragTarget>;

    /// Clean up when dragging finishes.
    ///
    /// Must be callable without a prior [`start`](Self::start), and more
    /// than once, without error.
    fn quit(&mut self);
}

/// Cached collaborator state shared by feedback implementations.
///
/// Holds the references handed to [`start`](DragFeedback::start) and
/// guarantees the payload/target references are released exactly once,
/// on the first of `quit` or `dispose`.
#[derive(Default)]
pub struct DragFeedbackBase {
    /// Drawing palette cached for the drag.
    palette: Option<Arc<dyn PaletteDragDrop>>,
    /// Renderer cached for the drag.
    renderer: Option<SharedRenderer>,
    /// Payload cached for the drag.
    payload: Option<Arc<DragPayload>>,
    /// Target list cached for the drag.
    targets: Option<Arc<DragTargetList>>,
    /// Whether the feedback has been disposed.
    disposed: bool,
}

impl DragFeedbackBase {
    /// Create an idle base with nothing cached.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache the collaborators for a starting drag.
    pub fn start(
        &mut self,
        palette: Arc<dyn PaletteDragDrop>,
        renderer: SharedRenderer,
        payload: Arc<DragPayload>,
        targets: Arc<DragTargetList>,
    ) {
        debug_assert!(!self.disposed, "start() on a disposed drag feedback");
        self.palette = Some(palette);
        self.renderer = Some(renderer);
        self.payload = Some(payload);
        self.targets = Some(targets);
    }

    /// The cached drawing palette.
    pub fn palette(&self) -> Option<&Arc<dyn PaletteDragDrop>> {
        self.palette.as_ref()
    }

    /// The cached renderer.
    pub fn renderer(&self) -> Option<&SharedRenderer> {
        self.renderer.as_ref()
    }

    /// The cached drag payload.
    pub fn payload(&self) -> Option<&Arc<DragPayload>> {
        self.payload.as_ref()
    }

    /// The cached target list.
    pub fn targets(&self) -> Option<&Arc<DragTargetList>> {
        self.targets.as_ref()
    }

    /// Release the payload and target references.
    ///
    /// Safe without a prior [`start`](Self::start) and safe to repeat: the
    /// references are dropped at most once.
    pub fn quit(&mut self) {
        self.payload = None;
        self.targets = None;
    }

    /// Release everything and mark the feedback disposed.
    ///
    /// Double-disposal is a no-op.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.quit();
        self.palette = None;
        self.renderer = None;
        self.disposed = true;
    }

    /// Whether the feedback has been disposed.
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}
