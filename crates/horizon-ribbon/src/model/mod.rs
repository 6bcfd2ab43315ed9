//! The definition (model) layer the views observe.
//!
//! Definitions are the host-configured state of each ribbon item. They own
//! no views and issue no draw calls; they emit
//! [`PropertyChange`] notifications and the view layer decides what those
//! mean in terms of dirty state, layout and paint.

pub mod change;
pub mod color_button;
pub mod command;
pub mod item_size;

pub use change::{ChangeEffects, DirtyTargets, PropertyChange, change_effects};
pub use color_button::{GroupButtonType, RibbonColorButton};
pub use command::RibbonCommand;
pub use item_size::{ItemSize, ItemSizeRange};
