//! Core systems for Horizon Ribbon.
//!
//! This crate provides the foundational pieces shared by the ribbon control
//! suite:
//!
//! - **Signal/Slot System**: Type-safe notification between the definition
//!   (model) layer and the view layer
//! - **Property System**: Reactive values with change detection
//! - **Logging**: `tracing` targets and timing spans for the layout and
//!   paint subsystems
//!
//! The ribbon view engine is single-threaded and event-driven: signals here
//! are always delivered synchronously on the emitting thread. The types are
//! still `Send + Sync` so definitions can be constructed off the UI thread
//! before being handed over.
//!
//! # Signal/Slot Example
//!
//! ```
//! use horizon_ribbon_core::{Signal, Property};
//!
//! // Create a signal that notifies when a value changes
//! let value_changed = Signal::<i32>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! // Emit the signal
//! value_changed.emit(42);
//!
//! // Disconnect when done
//! value_changed.disconnect(conn_id);
//! ```
//!
//! # Property Example
//!
//! ```
//! use horizon_ribbon_core::{Property, Signal};
//!
//! // A reactive text line with change notification
//! struct TextLine {
//!     text: Property<String>,
//!     text_changed: Signal<String>,
//! }
//!
//! impl TextLine {
//!     fn set_text(&self, text: String) {
//!         if self.text.set(text.clone()) {
//!             self.text_changed.emit(text);
//!         }
//!     }
//! }
//! ```

mod error;
pub mod logging;
pub mod property;
pub mod signal;

pub use error::{CoreError, Result, SignalError};
pub use logging::PerfSpan;
pub use property::Property;
pub use signal::{ConnectionGuard, ConnectionId, Signal};
