//! Concrete drawing nodes for group buttons.
//!
//! These are the leaves and near-leaves of a group button's subtree: the
//! background/border plate, the color swatch, the text lines and the
//! drop-down arrow. Each one reads the definition through a non-owning
//! reference and draws through the palette contract.

mod back_border;
mod drop_arrow;
mod swatch;
mod text;

pub use back_border::ButtonBackBorder;
pub use drop_arrow::DropArrow;
pub use swatch::ColorButtonSwatch;
pub use text::ColorButtonText;
