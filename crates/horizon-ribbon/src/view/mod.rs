//! The retained-mode view tree.
//!
//! This module provides the scene graph the ribbon controls are composed
//! from:
//!
//! - [`ViewElement`]: the base trait for all visual elements
//! - [`ViewBase`]: common state embedded by every element
//! - [`ViewComposite`]: ordered child container
//! - [`context`]: the transient layout/paint pass contexts
//! - [`layout`]: docking, centring, padding and spacing policies
//! - [`draw`]: concrete drawing nodes for group buttons
//!
//! # Overview
//!
//! A widget builds its subtree once, at construction, and retains it. Each
//! layout pass walks the tree top-down assigning client rectangles; each
//! paint pass walks it depth-first issuing draw calls through the
//! renderer/palette contract, optionally culled by an invalid rectangle.

pub mod base;
pub mod composite;
pub mod context;
pub mod draw;
pub mod layout;
pub mod traits;

pub use base::{ViewBase, ViewId};
pub use composite::ViewComposite;
pub use context::{LayoutContext, PaintContext};
pub use traits::{SharedView, ViewElement, ViewHandle};
