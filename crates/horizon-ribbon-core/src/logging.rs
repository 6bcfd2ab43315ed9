//! Logging and debugging facilities for Horizon Ribbon.
//!
//! This module provides:
//! - Integration with the `tracing` crate for structured logging
//! - Performance tracing hooks for profiling layout and paint passes
//!
//! # Tracing Integration
//!
//! Horizon Ribbon uses the `tracing` crate for instrumentation. To see logs,
//! install a tracing subscriber in your application:
//!
//! ```ignore
//! use tracing_subscriber;
//!
//! fn main() {
//!     // Initialize tracing (you can customize this)
//!     tracing_subscriber::fmt::init();
//!
//!     // Your application code...
//! }
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "horizon_ribbon_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "horizon_ribbon_core::signal";
    /// Property system target.
    pub const PROPERTY: &str = "horizon_ribbon_core::property";
    /// View tree and disposal target.
    pub const VIEW: &str = "horizon_ribbon::view";
    /// Layout negotiation target.
    pub const LAYOUT: &str = "horizon_ribbon::layout";
    /// Paint dispatch target.
    pub const PAINT: &str = "horizon_ribbon::paint";
    /// Key-tip overlay target.
    pub const KEYTIP: &str = "horizon_ribbon::keytip";
    /// Drag feedback target.
    pub const DRAG: &str = "horizon_ribbon::drag";
}

/// A guard that creates a performance tracing span.
///
/// Use this to measure the duration of operations like layout and paint
/// passes. The span records timing that can be analyzed with tracing tools.
///
/// # Example
///
/// ```ignore
/// {
///     let _span = PerfSpan::new("layout_pass");
///     // ... negotiate rectangles ...
/// } // Span ends here, duration recorded
/// ```
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    ///
    /// The span will be active until the guard is dropped.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: "horizon_ribbon::perf", "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}
