//! Background and border plate of a group button presentation.

use std::sync::{Arc, Weak};

use horizon_ribbon_render::{PaletteState, Point, Rect, Size, Stroke};

use crate::controller::ButtonController;
use crate::model::{GroupButtonType, RibbonColorButton};
use crate::view::base::ViewBase;
use crate::view::composite::ViewComposite;
use crate::view::context::{LayoutContext, PaintContext};
use crate::view::traits::{ViewElement, ViewHandle};

/// The outermost element of one size variant: themed background/border,
/// the variant's activation controller, and the content subtree.
///
/// For split buttons the owning widget assigns a
/// [`split_rect`](Self::split_rect) after layout; the plate draws the thin
/// separator between the push area and the drop-down area along its edge.
pub struct ButtonBackBorder {
    /// Common element state.
    base: ViewBase,
    /// The observed definition. Non-owning.
    model: Weak<RibbonColorButton>,
    /// This presentation's activation controller.
    controller: Arc<ButtonController>,
    /// Content children (a single layout docker in practice).
    children: Vec<ViewHandle>,
    /// Whether the split areas stack vertically (large presentation).
    split_vertical: bool,
    /// The drop-down area, assigned after layout for split buttons.
    split_rect: Option<Rect>,
    /// Activation behavior being presented, configured during negotiation.
    button_type: GroupButtonType,
}

impl ButtonBackBorder {
    /// Create the plate for one presentation.
    pub fn new(
        model: Weak<RibbonColorButton>,
        controller: Arc<ButtonController>,
        split_vertical: bool,
    ) -> Self {
        Self {
            base: ViewBase::new(),
            model,
            controller,
            children: Vec::new(),
            split_vertical,
            split_rect: None,
            button_type: GroupButtonType::default(),
        }
    }

    /// Append a content child.
    pub fn add(&mut self, child: ViewHandle) {
        self.children.push(child);
    }

    /// This presentation's activation controller.
    pub fn controller(&self) -> &Arc<ButtonController> {
        &self.controller
    }

    /// Whether the split areas stack vertically.
    pub fn split_vertical(&self) -> bool {
        self.split_vertical
    }

    /// The drop-down area, if this is a laid-out split button.
    pub fn split_rect(&self) -> Option<Rect> {
        self.split_rect
    }

    /// Assign or clear the drop-down area. Owning widget use only.
    pub fn set_split_rect(&mut self, rect: Option<Rect>) {
        self.split_rect = rect;
    }

    /// The activation behavior being presented.
    pub fn button_type(&self) -> GroupButtonType {
        self.button_type
    }

    /// Configure the activation behavior to present.
    ///
    /// Part of the current requested configuration; the owning widget sets
    /// it while negotiating sizes so the plate draws the right areas.
    pub fn set_button_type(&mut self, button_type: GroupButtonType) {
        self.button_type = button_type;
    }
}

impl ViewElement for ButtonBackBorder {
    fn base(&self) -> &ViewBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ViewBase {
        &mut self.base
    }

    fn preferred_size(&mut self, ctx: &mut LayoutContext<'_>) -> Size {
        let mut size = Size::ZERO;
        for child in &self.children {
            let mut child = child.write();
            if child.is_visible() {
                size = size.max(child.preferred_size(ctx));
            }
        }
        size
    }

    fn layout(&mut self, ctx: &mut LayoutContext<'_>) {
        self.base.set_client_rect(ctx.display_rect());

        for child in &self.children {
            let mut child = child.write();
            if child.is_visible() {
                child.layout(ctx);
            }
        }
    }

    fn paint(&mut self, ctx: &mut PaintContext<'_>) {
        let rect = self.base.client_rect();
        if !self.base.is_visible() || !ctx.should_draw(rect) {
            return;
        }
        // A plate whose definition is gone is mid-teardown; draw nothing.
        if self.model.upgrade().is_none() {
            return;
        }

        let state = PaletteState::from_flags(self.base.is_enabled(), self.base.is_checked());

        // Idle, unchecked buttons sit flat on the group background; only
        // checked presentations draw their plate.
        if state.is_checked() {
            let back = ctx.palette().button_back(state);
            ctx.renderer().fill_rect(rect, back);
            let stroke = Stroke::new(ctx.palette().button_border(state), 1.0);
            ctx.renderer().stroke_rect(rect, &stroke);
        }

        // Separator between push and drop-down areas of a split button.
        if self.button_type == GroupButtonType::Split {
            if let Some(split) = self.split_rect {
                let stroke = Stroke::new(ctx.palette().split_separator(), 1.0);
                if self.split_vertical {
                    ctx.renderer().draw_line(
                        Point::new(split.left(), split.top()),
                        Point::new(split.right(), split.top()),
                        &stroke,
                    );
                } else {
                    ctx.renderer().draw_line(
                        Point::new(split.left(), split.top()),
                        Point::new(split.left(), split.bottom()),
                        &stroke,
                    );
                }
            }
        }

        for child in &self.children {
            let mut child = child.write();
            if child.is_visible() {
                child.paint(ctx);
            }
        }
    }

    fn dispose(&mut self) {
        if !self.base.mark_disposed() {
            return;
        }
        ViewComposite::dispose_children(&mut self.children);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ribbon::Ribbon;
    use crate::test_support::TestPalette;
    use horizon_ribbon_render::{DrawOp, RecordingRenderer};

    fn plate(split_vertical: bool) -> (ButtonBackBorder, Arc<RibbonColorButton>) {
        let ribbon = Ribbon::new();
        let model = RibbonColorButton::new();
        let controller = ButtonController::new(&ribbon, &model);
        let mut plate = ButtonBackBorder::new(Arc::downgrade(&model), controller, split_vertical);
        plate
            .base_mut()
            .set_client_rect(Rect::new(0.0, 0.0, 40.0, 70.0));
        (plate, model)
    }

    #[test]
    fn test_flat_when_unchecked() {
        let (mut plate, _model) = plate(true);
        let mut renderer = RecordingRenderer::new();
        let palette = TestPalette;
        let mut ctx = PaintContext::new(&mut renderer, &palette, None);
        plate.paint(&mut ctx);
        assert_eq!(renderer.fill_count(), 0);
    }

    #[test]
    fn test_checked_plate_fills_and_strokes() {
        let (mut plate, _model) = plate(true);
        plate.set_checked(true);

        let mut renderer = RecordingRenderer::new();
        let palette = TestPalette;
        let mut ctx = PaintContext::new(&mut renderer, &palette, None);
        plate.paint(&mut ctx);

        assert!(matches!(renderer.ops()[0], DrawOp::FillRect(..)));
        assert!(matches!(renderer.ops()[1], DrawOp::StrokeRect(..)));
    }

    #[test]
    fn test_split_separator_orientation() {
        let (mut vertical, _model) = plate(true);
        vertical.set_button_type(GroupButtonType::Split);
        vertical.set_split_rect(Some(Rect::new(0.0, 40.0, 40.0, 30.0)));

        let mut renderer = RecordingRenderer::new();
        let palette = TestPalette;
        let mut ctx = PaintContext::new(&mut renderer, &palette, None);
        vertical.paint(&mut ctx);

        // Vertical stacking draws a horizontal line across the split top.
        let DrawOp::Line(from, to, _) = renderer.ops()[0] else {
            panic!("expected a separator line");
        };
        assert_eq!(from, Point::new(0.0, 40.0));
        assert_eq!(to, Point::new(40.0, 40.0));
    }

    #[test]
    fn test_non_split_draws_no_separator() {
        let (mut plate, _model) = plate(false);
        plate.set_button_type(GroupButtonType::Push);
        plate.set_split_rect(Some(Rect::new(20.0, 0.0, 20.0, 70.0)));

        let mut renderer = RecordingRenderer::new();
        let palette = TestPalette;
        let mut ctx = PaintContext::new(&mut renderer, &palette, None);
        plate.paint(&mut ctx);
        assert!(renderer.ops().is_empty());
    }

    #[test]
    fn test_dead_definition_paints_nothing() {
        let (mut plate, model) = plate(true);
        plate.set_checked(true);
        drop(model);

        let mut renderer = RecordingRenderer::new();
        let palette = TestPalette;
        let mut ctx = PaintContext::new(&mut renderer, &palette, None);
        plate.paint(&mut ctx);
        assert!(renderer.ops().is_empty());
    }
}
