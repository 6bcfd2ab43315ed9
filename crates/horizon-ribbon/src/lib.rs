//! Horizon Ribbon: a themed ribbon control suite.
//!
//! This crate is the view engine behind the ribbon controls: a
//! retained-mode scene graph that negotiates sizes, assigns rectangles,
//! paints through the pluggable renderer/palette contract of
//! [`horizon_ribbon_render`], and reacts to change notifications from the
//! definition (model) layer built on [`horizon_ribbon_core`].
//!
//! # Architecture
//!
//! - [`model`] - definitions: host-configured state, reactive properties,
//!   change notifications, commands
//! - [`view`] - the scene graph: elements, composites, layout policies,
//!   drawing nodes, pass contexts
//! - [`group`] - widget-level composites implementing size variants and
//!   the group item protocols
//! - [`ribbon`] - the shell: metrics, tab selection, request coalescing
//! - [`keytip`] - the keyboard-accelerator overlay protocol
//! - [`drag`] - the drag feedback contract consumed during drags
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use horizon_ribbon::model::RibbonColorButton;
//! use horizon_ribbon::group::RibbonColorButtonView;
//! use horizon_ribbon::ribbon::Ribbon;
//! use horizon_ribbon::view::ViewHandle;
//! use horizon_ribbon_render::{RecordingRenderer, Rect};
//!
//! let ribbon = Ribbon::new();
//! let tab = ribbon.add_tab();
//!
//! let button = RibbonColorButton::new();
//! button.set_ribbon_tab(Some(tab));
//! button.set_text_line1("Font Color");
//!
//! let view = RibbonColorButtonView::new(&ribbon, &button);
//! let root: ViewHandle = view.clone();
//!
//! let mut renderer = RecordingRenderer::new();
//! let palette = horizon_ribbon::StockPalette::default();
//! ribbon.perform_layout(&root, &mut renderer, &palette, Rect::new(0.0, 0.0, 64.0, 74.0));
//! ribbon.perform_paint(&root, &mut renderer, &palette);
//! ```

pub mod controller;
pub mod drag;
pub mod error;
pub mod group;
pub mod keytip;
pub mod model;
pub mod ribbon;
pub mod view;

#[cfg(test)]
pub(crate) mod test_support;

#[cfg(test)]
mod tests;

pub use controller::ButtonController;
pub use error::{Result, RibbonError};
pub use keytip::{KeyTipInfo, KeyTipTarget};
pub use ribbon::{Ribbon, RibbonMetrics, TabId};

use horizon_ribbon_render::{Color, Palette, PaletteState};

/// A neutral built-in palette.
///
/// Hosts normally provide their theme's palette; this one exists so the
/// crate is usable (and documentable) without a theme package.
#[derive(Debug, Default)]
pub struct StockPalette;

impl Palette for StockPalette {
    fn button_back(&self, state: PaletteState) -> Color {
        match state {
            PaletteState::Disabled => Color::from_rgb8(234, 234, 234),
            PaletteState::Normal | PaletteState::Tracking => Color::from_rgb8(245, 246, 247),
            PaletteState::Pressed => Color::from_rgb8(201, 224, 247),
            PaletteState::CheckedNormal
            | PaletteState::CheckedTracking
            | PaletteState::CheckedPressed => Color::from_rgb8(209, 226, 242),
        }
    }

    fn button_border(&self, state: PaletteState) -> Color {
        match state {
            PaletteState::Disabled => Color::from_rgb8(204, 204, 204),
            PaletteState::Normal | PaletteState::Tracking => Color::from_rgb8(171, 173, 179),
            PaletteState::Pressed => Color::from_rgb8(98, 162, 228),
            PaletteState::CheckedNormal
            | PaletteState::CheckedTracking
            | PaletteState::CheckedPressed => Color::from_rgb8(122, 176, 231),
        }
    }

    fn content_text(&self, state: PaletteState) -> Color {
        match state {
            PaletteState::Disabled => Color::from_rgb8(131, 131, 131),
            _ => Color::from_rgb8(38, 38, 38),
        }
    }

    fn drop_arrow(&self, state: PaletteState) -> Color {
        self.content_text(state)
    }

    fn split_separator(&self) -> Color {
        Color::from_rgb8(171, 173, 179)
    }
}
