//! Shared fixtures for the crate's tests.

use std::sync::Arc;

use parking_lot::RwLock;

use horizon_ribbon_render::{Color, Palette, PaletteDragDrop, PaletteState, Size};

use crate::view::{LayoutContext, PaintContext, SharedView, ViewBase, ViewElement, ViewHandle};

/// A palette with fixed, distinguishable values.
pub struct TestPalette;

impl Palette for TestPalette {
    fn button_back(&self, state: PaletteState) -> Color {
        if state == PaletteState::Disabled {
            Color::from_rgb8(220, 220, 220)
        } else {
            Color::from_rgb8(255, 227, 149)
        }
    }

    fn button_border(&self, _state: PaletteState) -> Color {
        Color::from_rgb8(194, 150, 60)
    }

    fn content_text(&self, state: PaletteState) -> Color {
        if state == PaletteState::Disabled {
            Color::from_rgb8(140, 140, 140)
        } else {
            Color::from_rgb8(60, 60, 60)
        }
    }

    fn drop_arrow(&self, _state: PaletteState) -> Color {
        Color::from_rgb8(80, 80, 80)
    }

    fn split_separator(&self) -> Color {
        Color::from_rgb8(180, 180, 180)
    }
}

impl PaletteDragDrop for TestPalette {
    fn drop_highlight_back(&self) -> Color {
        Color::from_rgba8(120, 170, 220, 128)
    }

    fn drop_highlight_border(&self) -> Color {
        Color::from_rgb8(60, 110, 180)
    }

    fn docking_indicator(&self) -> Color {
        Color::from_rgb8(90, 140, 200)
    }
}

/// A leaf element with a fixed preferred size and a dispose counter.
pub struct CountingLeaf {
    base: ViewBase,
    preferred: Size,
    dispose_count: usize,
}

impl CountingLeaf {
    /// Create a leaf with the given preferred size.
    pub fn new(preferred: Size) -> Self {
        Self {
            base: ViewBase::new(),
            preferred,
            dispose_count: 0,
        }
    }

    /// Create a default-sized shared leaf.
    pub fn shared() -> SharedView<Self> {
        Arc::new(RwLock::new(Self::new(Size::new(10.0, 10.0))))
    }

    /// How many times `dispose` ran to completion.
    pub fn dispose_count(&self) -> usize {
        self.dispose_count
    }
}

impl ViewElement for CountingLeaf {
    fn base(&self) -> &ViewBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ViewBase {
        &mut self.base
    }

    fn preferred_size(&mut self, _ctx: &mut LayoutContext<'_>) -> Size {
        self.preferred
    }

    fn layout(&mut self, ctx: &mut LayoutContext<'_>) {
        self.base.set_client_rect(ctx.display_rect());
    }

    fn paint(&mut self, _ctx: &mut PaintContext<'_>) {}

    fn dispose(&mut self) {
        if !self.base.mark_disposed() {
            return;
        }
        self.dispose_count += 1;
    }
}

/// A fixed-size leaf as a type-erased handle.
pub fn leaf(preferred: Size) -> ViewHandle {
    Arc::new(RwLock::new(CountingLeaf::new(preferred)))
}
