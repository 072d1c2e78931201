//! Cell-level geometry and painting for a labelled field.
//!
//! [`LabelledFieldCell`] owns the split of the control rectangle into a
//! caption region and an edit region, and paints the frame: border, caption
//! background, and the hairline separator between the two regions. Interior
//! content (text, caret, placeholder) is delegated back to the caller with
//! the computed edit region, mirroring how a native text cell hands its
//! interior to the platform text machinery.
//!
//! All geometry is direction-aware: the caption always sits at the layout
//! direction's start edge, and the edit-region corrections mirror under
//! right-to-left layout.

use crate::geometry::{snap_to_pixel_center, LayoutDirection, Point, Rect};
use crate::paint::{Color, PaintContext, RoundedRect, Stroke};
use crate::theme::{self, CellColors};

/// How the edit region compensates for the native editor's bezel inset.
///
/// These corrections exist to line the edit region up with the text inset
/// of the host's native editor chrome; see the constants below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BezelStyle {
    /// Rounded bezel: the editor indents its text, so the edit region is
    /// shifted and widened to compensate.
    #[default]
    Rounded,
    /// Square bezel: the edit region only backs off a small trailing margin
    /// to avoid clipping against the border.
    Square,
}

/// Leftward shift of the edit region under a rounded bezel.
///
/// This and the two constants below are pixel-fitting values tuned against
/// one set of native control metrics. Hosts with different editor chrome
/// should treat them as tunables, not invariants.
pub const ROUNDED_BEZEL_ORIGIN_SHIFT: f32 = 8.0;

/// Width added to the edit region under a rounded bezel.
pub const ROUNDED_BEZEL_WIDTH_EXPANSION: f32 = 14.0;

/// Trailing margin removed from the edit region under a square bezel.
pub const SQUARE_BEZEL_TRAILING_MARGIN: f32 = 2.0;

/// Inset of the border path from the control rectangle.
pub const BORDER_INSET: f32 = 1.0;

/// Corner radius of the rounded border path.
pub const CORNER_RADIUS: f32 = 2.0;

/// Stroke width of the rounded border.
pub const ROUNDED_BORDER_WIDTH: f32 = 1.5;

/// Stroke width of the square border.
pub const SQUARE_BORDER_WIDTH: f32 = 1.0;

/// Stroke width of the caption/edit separator line.
pub const SEPARATOR_WIDTH: f32 = 1.0;

/// The backing cell of a [`LabelledField`](super::LabelledField).
///
/// The cell never resolves widths itself: `label_width` is always concrete,
/// pushed down by the owning field after it resolves the auto-fit sentinel
/// against the caption's natural size. A width of zero is legal and
/// degenerates to no visible caption region, with the separator collapsing
/// onto the start edge.
pub struct LabelledFieldCell {
    /// Concrete caption width in logical units.
    label_width: f32,

    /// Whether to fill the caption region and stroke the separator.
    draws_label_background: bool,

    /// Whether the outer border uses rounded corners.
    rounded_edges: bool,

    /// Edit-region compensation style.
    bezel: BezelStyle,

    /// Fill color of the caption region.
    label_background_color: Color,
}

impl Default for LabelledFieldCell {
    fn default() -> Self {
        Self::new()
    }
}

impl LabelledFieldCell {
    /// Create a cell with default styling.
    pub fn new() -> Self {
        Self {
            label_width: 20.0,
            draws_label_background: true,
            rounded_edges: true,
            bezel: BezelStyle::default(),
            label_background_color: theme::LABEL_BACKGROUND,
        }
    }

    /// The concrete caption width.
    pub fn label_width(&self) -> f32 {
        self.label_width
    }

    /// Set the concrete caption width. Negative input clamps to zero.
    pub fn set_label_width(&mut self, width: f32) {
        self.label_width = width.max(0.0);
    }

    /// Whether the caption background and separator are drawn.
    pub fn draws_label_background(&self) -> bool {
        self.draws_label_background
    }

    /// Set whether the caption background and separator are drawn.
    pub fn set_draws_label_background(&mut self, draws: bool) {
        self.draws_label_background = draws;
    }

    /// Whether the outer border uses rounded corners.
    pub fn rounded_edges(&self) -> bool {
        self.rounded_edges
    }

    /// Set whether the outer border uses rounded corners.
    pub fn set_rounded_edges(&mut self, rounded: bool) {
        self.rounded_edges = rounded;
    }

    /// The edit-region compensation style.
    pub fn bezel(&self) -> BezelStyle {
        self.bezel
    }

    /// Set the edit-region compensation style.
    pub fn set_bezel(&mut self, bezel: BezelStyle) {
        self.bezel = bezel;
    }

    /// The caption region fill color.
    pub fn label_background_color(&self) -> Color {
        self.label_background_color
    }

    /// Set the caption region fill color.
    pub fn set_label_background_color(&mut self, color: Color) {
        self.label_background_color = color;
    }

    /// The caption fill color for the given enabled state.
    pub fn current_label_background_color(&self, enabled: bool) -> Color {
        if enabled {
            self.label_background_color
        } else {
            self.label_background_color
                .with_alpha(self.label_background_color.a * theme::DISABLED_ALPHA)
        }
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// The caption sub-rectangle: the first `label_width` units from the
    /// layout direction's start edge.
    pub fn label_region(&self, full: Rect, direction: LayoutDirection) -> Rect {
        let (slice, _) = full.divided_at(self.label_width, direction.start_edge());
        slice
    }

    /// The edit sub-rectangle delegated to the native editor.
    ///
    /// Subtracts the caption width at the start edge, then applies the
    /// bezel compensation. Under right-to-left layout the whole result is
    /// the horizontal mirror of the left-to-right computation.
    pub fn edit_region(&self, full: Rect, direction: LayoutDirection) -> Rect {
        let mut region = Rect::new(
            full.left() + self.label_width,
            full.top(),
            full.width() - self.label_width,
            full.height(),
        );

        match self.bezel {
            BezelStyle::Rounded => {
                region.origin.x -= ROUNDED_BEZEL_ORIGIN_SHIFT;
                region.size.width += ROUNDED_BEZEL_WIDTH_EXPANSION;
            }
            BezelStyle::Square => {
                region.size.width -= SQUARE_BEZEL_TRAILING_MARGIN;
            }
        }

        if direction.is_rtl() {
            region = region.mirrored_in(&full);
        }
        region
    }

    /// X coordinate of the caption/edit separator, snapped to a pixel
    /// center so a [`SEPARATOR_WIDTH`] stroke stays crisp.
    pub fn separator_x(&self, full: Rect, direction: LayoutDirection, scale_factor: f32) -> f32 {
        let label = self.label_region(full, direction);
        let boundary = if direction.is_rtl() {
            label.left()
        } else {
            label.right()
        };
        snap_to_pixel_center(boundary, scale_factor)
    }

    // =========================================================================
    // Painting
    // =========================================================================

    /// Paint the cell frame, then hand the edit region to `interior`.
    ///
    /// Steps: fill and stroke the outer border path, clip to it, fill the
    /// pixel-aligned caption background and stroke the separator (with
    /// antialiasing off), then invoke `interior` with the edit region while
    /// the clip is still active.
    pub fn render(
        &self,
        ctx: &mut PaintContext<'_>,
        colors: &CellColors,
        enabled: bool,
        direction: LayoutDirection,
        interior: impl FnOnce(&mut PaintContext<'_>, Rect),
    ) {
        let full = ctx.rect();
        let border_rect = full.inset_by(BORDER_INSET, BORDER_INSET);

        if self.rounded_edges {
            let rounded = RoundedRect::new(border_rect, CORNER_RADIUS);
            let stroke = Stroke::new(colors.border, ROUNDED_BORDER_WIDTH);
            ctx.renderer().fill_rounded_rect(rounded, colors.background);
            ctx.renderer().stroke_rounded_rect(rounded, &stroke);
        } else {
            let stroke = Stroke::new(colors.border, SQUARE_BORDER_WIDTH);
            ctx.renderer().fill_rect(border_rect, colors.background);
            ctx.renderer().stroke_rect(border_rect, &stroke);
        }

        ctx.with_saved_state(|ctx| {
            if self.rounded_edges {
                ctx.renderer()
                    .clip_rounded_rect(RoundedRect::new(border_rect, CORNER_RADIUS));
            } else {
                ctx.renderer().clip_rect(border_rect);
            }

            if self.draws_label_background {
                let scale = ctx.scale_factor();
                let label = self.label_region(full, direction);
                ctx.renderer().fill_rect(
                    label.snapped_to_grid(scale),
                    self.current_label_background_color(enabled),
                );

                let x = self.separator_x(full, direction, scale);
                let stroke = Stroke::new(colors.border, SEPARATOR_WIDTH);
                ctx.without_antialias(|ctx| {
                    ctx.renderer().draw_line(
                        Point::new(x, full.top()),
                        Point::new(x, full.bottom()),
                        &stroke,
                    );
                });
            }

            interior(ctx, self.edit_region(full, direction));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::recording::{DrawOp, RecordingRenderer};
    use crate::theme::{resolve_cell_colors, Appearance, DISABLED_ALPHA};

    const FULL: Rect = Rect::new(0.0, 0.0, 200.0, 24.0);

    fn cell_with_width(width: f32) -> LabelledFieldCell {
        let mut cell = LabelledFieldCell::new();
        cell.set_label_width(width);
        cell
    }

    #[test]
    fn test_edit_region_rounded_ltr() {
        let cell = cell_with_width(50.0);
        let region = cell.edit_region(FULL, LayoutDirection::LeftToRight);
        assert_eq!(region.left(), 50.0 - ROUNDED_BEZEL_ORIGIN_SHIFT);
        assert_eq!(region.width(), 150.0 + ROUNDED_BEZEL_WIDTH_EXPANSION);
        assert_eq!(region.height(), FULL.height());
    }

    #[test]
    fn test_edit_region_square_ltr() {
        let mut cell = cell_with_width(50.0);
        cell.set_bezel(BezelStyle::Square);
        let region = cell.edit_region(FULL, LayoutDirection::LeftToRight);
        assert_eq!(region.left(), 50.0);
        assert_eq!(region.width(), 150.0 - SQUARE_BEZEL_TRAILING_MARGIN);
    }

    #[test]
    fn test_edit_region_mirrors_under_rtl() {
        for bezel in [BezelStyle::Rounded, BezelStyle::Square] {
            let mut cell = cell_with_width(60.0);
            cell.set_bezel(bezel);

            let ltr = cell.edit_region(FULL, LayoutDirection::LeftToRight);
            let rtl = cell.edit_region(FULL, LayoutDirection::RightToLeft);

            assert_eq!(rtl.width(), ltr.width());
            assert_eq!(rtl, ltr.mirrored_in(&FULL));
        }
    }

    #[test]
    fn test_label_region_sits_at_start_edge() {
        let cell = cell_with_width(40.0);

        let ltr = cell.label_region(FULL, LayoutDirection::LeftToRight);
        assert_eq!(ltr, Rect::new(0.0, 0.0, 40.0, 24.0));

        let rtl = cell.label_region(FULL, LayoutDirection::RightToLeft);
        assert_eq!(rtl, Rect::new(160.0, 0.0, 40.0, 24.0));
    }

    #[test]
    fn test_zero_label_width_degenerates() {
        let cell = cell_with_width(0.0);

        let label = cell.label_region(FULL, LayoutDirection::LeftToRight);
        assert!(label.is_empty());

        // The separator collapses onto the start edge.
        let x = cell.separator_x(FULL, LayoutDirection::LeftToRight, 1.0);
        assert_eq!(x, snap_to_pixel_center(0.0, 1.0));

        let rtl_x = cell.separator_x(FULL, LayoutDirection::RightToLeft, 1.0);
        assert_eq!(rtl_x, snap_to_pixel_center(FULL.right(), 1.0));
    }

    #[test]
    fn test_negative_label_width_clamps() {
        let cell = cell_with_width(-5.0);
        assert_eq!(cell.label_width(), 0.0);
    }

    #[test]
    fn test_render_paints_frame_then_interior() {
        let cell = cell_with_width(50.0);
        let colors = resolve_cell_colors(Appearance::light(), true);

        let mut renderer = RecordingRenderer::new();
        let mut ctx = PaintContext::new(&mut renderer, FULL);

        let mut interior_rect = None;
        cell.render(
            &mut ctx,
            &colors,
            true,
            LayoutDirection::LeftToRight,
            |_, rect| interior_rect = Some(rect),
        );

        assert_eq!(
            interior_rect,
            Some(cell.edit_region(FULL, LayoutDirection::LeftToRight))
        );

        // Border fill comes first, and the clip happens inside a saved state.
        assert!(matches!(renderer.ops[0], DrawOp::FillRoundedRect(..)));
        assert!(matches!(renderer.ops[1], DrawOp::StrokeRoundedRect(..)));
        assert!(renderer.ops.contains(&DrawOp::Save));
        assert!(renderer.ops.last() == Some(&DrawOp::Restore));
        assert!(renderer
            .ops
            .iter()
            .any(|op| matches!(op, DrawOp::ClipRoundedRect(..))));
    }

    #[test]
    fn test_render_square_frame() {
        let mut cell = cell_with_width(50.0);
        cell.set_rounded_edges(false);
        let colors = resolve_cell_colors(Appearance::light(), true);

        let mut renderer = RecordingRenderer::new();
        let mut ctx = PaintContext::new(&mut renderer, FULL);
        cell.render(&mut ctx, &colors, true, LayoutDirection::LeftToRight, |_, _| {});

        assert!(matches!(renderer.ops[0], DrawOp::FillRect(..)));
        assert!(matches!(renderer.ops[1], DrawOp::StrokeRect(..)));
        assert!(renderer
            .ops
            .iter()
            .any(|op| matches!(op, DrawOp::ClipRect(..))));
    }

    #[test]
    fn test_separator_drawn_without_antialias() {
        let cell = cell_with_width(50.0);
        let colors = resolve_cell_colors(Appearance::light(), true);

        let mut renderer = RecordingRenderer::new();
        let mut ctx = PaintContext::new(&mut renderer, FULL);
        cell.render(&mut ctx, &colors, true, LayoutDirection::LeftToRight, |_, _| {});

        let crisp_ops = renderer.ops_without_antialias();
        assert_eq!(crisp_ops.len(), 1);
        match crisp_ops[0] {
            DrawOp::Line(from, to, stroke) => {
                assert_eq!(from.x, to.x);
                assert_eq!(from.x, snap_to_pixel_center(50.0, 1.0));
                assert_eq!(stroke.width, SEPARATOR_WIDTH);
                assert_eq!(stroke.color, colors.border);
            }
            other => panic!("expected separator line, got {other:?}"),
        }
    }

    #[test]
    fn test_no_label_background_skips_separator() {
        let mut cell = cell_with_width(50.0);
        cell.set_draws_label_background(false);
        let colors = resolve_cell_colors(Appearance::light(), true);

        let mut renderer = RecordingRenderer::new();
        let mut ctx = PaintContext::new(&mut renderer, FULL);
        cell.render(&mut ctx, &colors, true, LayoutDirection::LeftToRight, |_, _| {});

        assert!(!renderer
            .ops
            .iter()
            .any(|op| matches!(op, DrawOp::Line(..))));
    }

    #[test]
    fn test_disabled_dims_label_background() {
        let cell = cell_with_width(50.0);
        let enabled = cell.current_label_background_color(true);
        let disabled = cell.current_label_background_color(false);
        assert_eq!(disabled.a, enabled.a * DISABLED_ALPHA);
        assert_eq!(disabled.r, enabled.r);
    }
}
