//! The labelled text field control.
//!
//! [`LabelledField`] is the host-facing widget: a text field whose control
//! rectangle embeds a caption region at the layout direction's start edge.
//! The field owns a [`FieldLabel`] sub-view for the caption and a
//! [`LabelledFieldCell`] for geometry and frame painting, and keeps both in
//! sync with its configuration.
//!
//! Width coordination across several fields is handled by
//! [`FieldGroup`](super::FieldGroup) through the
//! [`FieldArena`](super::FieldArena); a field only carries the back
//! reference to the group that controls it.

use fieldcap_core::{debug_assert_main_thread, Signal};

use crate::geometry::{LayoutDirection, Point, Rect, Size};
use crate::paint::{Color, PaintContext};
use crate::text::{Font, SharedTextMeasure};
use crate::theme::{resolve_cell_colors, Appearance, CellColors, DISABLED_ALPHA};

use super::arena::GroupId;
use super::base::WidgetBase;
use super::cell::{BezelStyle, LabelledFieldCell};
use super::events::WidgetEvent;
use super::label::{FieldLabel, TextAlignment};
use super::traits::{SizeHint, Widget};

/// The caption width policy of a field.
///
/// `Auto` sizes the caption to the label's natural content width on each
/// layout pass. `Fixed` pins it; construct fixed widths through
/// [`LabelWidth::fixed`], which clamps negative input to zero so no invalid
/// width is representable.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum LabelWidth {
    /// Fit the caption to the label's natural content width.
    #[default]
    Auto,
    /// Pin the caption to a concrete width.
    Fixed(f32),
}

impl LabelWidth {
    /// A fixed width, clamped to be non-negative.
    pub fn fixed(width: f32) -> Self {
        Self::Fixed(width.max(0.0))
    }

    /// Check if this is the auto-fit policy.
    pub fn is_auto(&self) -> bool {
        matches!(self, Self::Auto)
    }
}

/// Extra width added to a pinned caption when the label text is not
/// centered, so glyphs don't visually crowd the separator.
///
/// A pixel-fitting tunable, like the bezel constants on the cell.
pub const ALIGNMENT_EDGE_CORRECTION: f32 = 3.0;

/// Preferred width of the edit region when the host asks for a size hint.
pub const DEFAULT_EDIT_WIDTH: f32 = 100.0;

/// Minimum usable width of the edit region.
pub const MIN_EDIT_WIDTH: f32 = 20.0;

/// Vertical padding between the caption text and the control edge.
pub const VERTICAL_PADDING: f32 = 3.0;

/// Horizontal inset of the edit text from the edit region edge.
const TEXT_PADDING: f32 = 2.0;

/// A text field with an embedded caption region.
///
/// # Signals
///
/// - `label_changed`: emitted when the caption text changes
/// - `text_changed`: emitted when the edit text changes
///
/// # Enabled state
///
/// Disabling the field dims the embedded caption to
/// [`DISABLED_ALPHA`](crate::theme::DISABLED_ALPHA) opacity. The dimming is
/// re-applied when the host attaches the control to a displayable
/// hierarchy, because the enabled-state notification may predate the
/// attachment; the host must deliver
/// [`WidgetEvent::AttachedToWindow`] / [`WidgetEvent::DetachFromWindow`]
/// in matched pairs.
pub struct LabelledField {
    /// Widget base for common functionality.
    base: WidgetBase,

    /// The backing cell (geometry and frame painting).
    cell: LabelledFieldCell,

    /// The embedded caption label.
    label: FieldLabel,

    /// The edit text content.
    text: String,

    /// Placeholder shown while the edit text is empty.
    placeholder: String,

    /// The edit font.
    font: Font,

    /// Edit text color.
    text_color: Color,

    /// Placeholder text color.
    placeholder_color: Color,

    /// The caption width policy.
    label_width: LabelWidth,

    /// The control's effective layout direction.
    layout_direction: LayoutDirection,

    /// Back reference to the group controlling this field's caption width.
    group: Option<GroupId>,

    /// Whether we are subscribed to host enabled-state notifications.
    observing_enabled: bool,

    /// Shared host text measurer (also used by the embedded label).
    measure: SharedTextMeasure,

    /// Signal emitted when the caption text changes.
    pub label_changed: Signal<String>,

    /// Signal emitted when the edit text changes.
    pub text_changed: Signal<String>,
}

impl LabelledField {
    /// Create an empty field measuring text through `measure`.
    pub fn new(measure: SharedTextMeasure) -> Self {
        let font = Font::default();
        let mut label = FieldLabel::new(measure.clone());
        label.set_font_derived_from(&font);

        Self {
            base: WidgetBase::new(),
            cell: LabelledFieldCell::new(),
            label,
            text: String::new(),
            placeholder: String::new(),
            font,
            text_color: Color::BLACK,
            placeholder_color: Color::from_rgb8(160, 160, 160),
            label_width: LabelWidth::Auto,
            layout_direction: LayoutDirection::default(),
            group: None,
            observing_enabled: false,
            measure,
            label_changed: Signal::new(),
            text_changed: Signal::new(),
        }
    }

    /// Set the caption text using the builder pattern.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.set_label_text(label);
        self
    }

    /// Set the edit text using the builder pattern.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.set_text(text);
        self
    }

    /// Set the placeholder using the builder pattern.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    // =========================================================================
    // Caption
    // =========================================================================

    /// The caption text.
    pub fn label_text(&self) -> &str {
        self.label.text()
    }

    /// Set the caption text.
    ///
    /// Emits `label_changed` and requests a layout pass. When the field is
    /// a group member, change the caption through
    /// [`FieldArena::set_label_text`](super::FieldArena::set_label_text)
    /// instead, which also resynchronizes the sibling widths before
    /// returning.
    pub fn set_label_text(&mut self, text: impl Into<String>) {
        debug_assert_main_thread!();
        if self.label.set_text(text) {
            self.base.request_layout();
            self.label_changed.emit(self.label.text().to_owned());
        }
    }

    /// The caption width policy.
    pub fn label_width(&self) -> LabelWidth {
        self.label_width
    }

    /// Set the caption width policy.
    ///
    /// While the field is in a group this is overwritten by the group's
    /// next width synchronization; the group owns the effective width.
    pub fn set_label_width(&mut self, width: LabelWidth) {
        debug_assert_main_thread!();
        let width = match width {
            LabelWidth::Fixed(w) => LabelWidth::fixed(w),
            auto => auto,
        };
        if self.label_width != width {
            self.label_width = width;
            self.base.request_layout();
        }
    }

    /// The caption text alignment.
    pub fn label_alignment(&self) -> TextAlignment {
        self.label.alignment()
    }

    /// Set the caption text alignment.
    pub fn set_label_alignment(&mut self, alignment: TextAlignment) {
        debug_assert_main_thread!();
        if self.label.alignment() != alignment {
            self.label.set_alignment(alignment);
            // The non-centered edge correction changes the resolved width.
            self.base.request_layout();
        }
    }

    /// The caption text color.
    pub fn label_foreground_color(&self) -> Color {
        self.label.color()
    }

    /// Set the caption text color.
    pub fn set_label_foreground_color(&mut self, color: Color) {
        self.label.set_color(color);
        self.base.update();
    }

    /// The caption region background color.
    pub fn label_background_color(&self) -> Color {
        self.cell.label_background_color()
    }

    /// Set the caption region background color.
    pub fn set_label_background_color(&mut self, color: Color) {
        self.cell.set_label_background_color(color);
        self.base.update();
    }

    /// Whether the caption background and separator are drawn.
    pub fn draws_label_background(&self) -> bool {
        self.cell.draws_label_background()
    }

    /// Set whether the caption background and separator are drawn.
    pub fn set_draws_label_background(&mut self, draws: bool) {
        self.cell.set_draws_label_background(draws);
        self.base.update();
    }

    /// Whether the border uses rounded corners.
    pub fn rounded_edges(&self) -> bool {
        self.cell.rounded_edges()
    }

    /// Set whether the border uses rounded corners.
    pub fn set_rounded_edges(&mut self, rounded: bool) {
        self.cell.set_rounded_edges(rounded);
        self.base.update();
    }

    /// The bezel compensation style of the edit region.
    pub fn bezel(&self) -> BezelStyle {
        self.cell.bezel()
    }

    /// Set the bezel compensation style of the edit region.
    pub fn set_bezel(&mut self, bezel: BezelStyle) {
        self.cell.set_bezel(bezel);
        self.base.update();
    }

    /// The natural (unconstrained) size of the caption text.
    ///
    /// This is the aggregation input for group width synchronization and is
    /// answerable at any time, including before the first layout pass.
    pub fn label_natural_size(&self) -> Size {
        self.label.natural_size()
    }

    /// The embedded caption label.
    pub fn label(&self) -> &FieldLabel {
        &self.label
    }

    // =========================================================================
    // Edit Text
    // =========================================================================

    /// The edit text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Set the edit text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        debug_assert_main_thread!();
        let text = text.into();
        if self.text != text {
            self.text = text.clone();
            self.base.update();
            self.text_changed.emit(text);
        }
    }

    /// The placeholder text.
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Set the placeholder text.
    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        self.placeholder = placeholder.into();
        self.base.update();
    }

    /// The edit font.
    pub fn font(&self) -> &Font {
        &self.font
    }

    /// Set the edit font. The caption font is re-derived from it.
    pub fn set_font(&mut self, font: Font) {
        debug_assert_main_thread!();
        if self.font != font {
            self.label.set_font_derived_from(&font);
            self.font = font;
            self.base.request_layout();
        }
    }

    // =========================================================================
    // Direction
    // =========================================================================

    /// The control's effective layout direction.
    pub fn layout_direction(&self) -> LayoutDirection {
        self.layout_direction
    }

    /// Set the control's effective layout direction.
    ///
    /// Hosts call this at setup and whenever the ambient direction changes;
    /// the caption region, separator, and edit-region corrections all
    /// mirror under right-to-left layout.
    pub fn set_layout_direction(&mut self, direction: LayoutDirection) {
        debug_assert_main_thread!();
        if self.layout_direction != direction {
            self.layout_direction = direction;
            self.base.request_layout();
        }
    }

    // =========================================================================
    // Enabled State
    // =========================================================================

    /// Check if the field is enabled.
    pub fn is_enabled(&self) -> bool {
        self.base.is_enabled()
    }

    /// Set the enabled state, dimming the caption when disabled.
    pub fn set_enabled(&mut self, enabled: bool) {
        debug_assert_main_thread!();
        self.base.set_enabled(enabled);
        self.sync_label_opacity();
    }

    /// Re-derive the caption opacity from the enabled state.
    fn sync_label_opacity(&mut self) {
        let opacity = if self.base.is_enabled() {
            1.0
        } else {
            DISABLED_ALPHA
        };
        self.label.set_opacity(opacity);
        self.base.update();
    }

    /// Whether the field is currently subscribed to host enabled-state
    /// notifications (between attach and detach).
    pub fn is_observing_enabled(&self) -> bool {
        self.observing_enabled
    }

    // =========================================================================
    // Group Membership
    // =========================================================================

    /// The group controlling this field's caption width, if any.
    pub fn group(&self) -> Option<GroupId> {
        self.group
    }

    /// Set the group back reference (arena bookkeeping).
    pub(crate) fn set_group(&mut self, group: Option<GroupId>) {
        self.group = group;
    }

    // =========================================================================
    // Layout
    // =========================================================================

    /// The concrete caption width the cell will use on the next layout pass.
    ///
    /// Resolves the auto-fit policy against the label's natural width;
    /// pinned widths gain [`ALIGNMENT_EDGE_CORRECTION`] when the caption
    /// text is not centered.
    pub fn resolved_label_width(&self) -> f32 {
        match self.label_width {
            LabelWidth::Auto => self.label.natural_size().width,
            LabelWidth::Fixed(width) => {
                if self.label.alignment() == TextAlignment::Center {
                    width
                } else {
                    width + ALIGNMENT_EDGE_CORRECTION
                }
            }
        }
    }

    /// The edit sub-rectangle for the current geometry, for hosts wiring a
    /// native editor over the control.
    pub fn edit_region(&self) -> Rect {
        self.cell.edit_region(self.base.rect(), self.layout_direction)
    }

    /// The backing cell.
    pub fn cell(&self) -> &LabelledFieldCell {
        &self.cell
    }

    /// The border and background colors this field would paint with under
    /// the given appearance, for host styling code.
    pub fn resolved_cell_colors(&self, appearance: Appearance) -> CellColors {
        resolve_cell_colors(appearance, self.base.is_enabled())
    }

    // =========================================================================
    // Accessibility
    // =========================================================================

    /// The accessibility description of the control's value.
    pub fn accessibility_value_description(&self) -> String {
        format!("Text field is labelled '{}'", self.label.text())
    }

    /// The accessibility description of the control's role.
    pub fn accessibility_role_description(&self) -> String {
        format!("Text field is labelled '{}'", self.label.text())
    }
}

impl Widget for LabelledField {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn size_hint(&self) -> SizeHint {
        let natural = self.label.natural_size();
        let resolved = self.resolved_label_width();
        let height = natural.height + VERTICAL_PADDING * 2.0;

        SizeHint::from_dimensions(resolved + DEFAULT_EDIT_WIDTH, height)
            .with_minimum(Size::new(resolved + MIN_EDIT_WIDTH, height))
    }

    fn layout(&mut self) {
        // Resolve the auto-fit sentinel here, never earlier: the caption's
        // natural width may have changed since the policy was set.
        let width = self.resolved_label_width();
        self.cell.set_label_width(width);
        self.base.clear_layout_flag();
    }

    fn paint(&self, ctx: &mut PaintContext<'_>) {
        let enabled = self.base.is_enabled();
        let colors = resolve_cell_colors(ctx.appearance(), enabled);
        let direction = self.layout_direction;
        let full = ctx.rect();

        self.cell
            .render(ctx, &colors, enabled, direction, |ctx, edit_rect| {
                let show_placeholder = self.text.is_empty() && !self.placeholder.is_empty();
                let (content, color) = if show_placeholder {
                    (self.placeholder.as_str(), self.placeholder_color)
                } else if !self.text.is_empty() {
                    let color = if enabled {
                        self.text_color
                    } else {
                        self.text_color.with_alpha(self.text_color.a * DISABLED_ALPHA)
                    };
                    (self.text.as_str(), color)
                } else {
                    return;
                };

                let width = self.measure.measure(content, &self.font).width;
                let x = if direction.is_rtl() {
                    edit_rect.right() - TEXT_PADDING - width
                } else {
                    edit_rect.left() + TEXT_PADDING
                };
                let y = edit_rect.center().y - self.font.line_height() / 2.0;
                ctx.renderer()
                    .draw_text(content, Point::new(x, y), &self.font, color);
            });

        let label_rect = self.cell.label_region(full, direction);
        self.label.paint(ctx, label_rect, direction);
    }

    fn event(&mut self, event: &mut WidgetEvent) -> bool {
        match event {
            WidgetEvent::AttachedToWindow(e) => {
                // Attach/detach must arrive in matched pairs.
                debug_assert!(
                    !self.observing_enabled,
                    "attach notification received while already attached"
                );
                self.observing_enabled = true;
                // The enabled-state notification may not have been
                // delivered before attachment; re-derive the caption
                // opacity from current state.
                self.sync_label_opacity();
                e.base.accept();
                true
            }
            WidgetEvent::DetachFromWindow(e) => {
                debug_assert!(
                    self.observing_enabled,
                    "detach notification received while not attached"
                );
                self.observing_enabled = false;
                e.base.accept();
                true
            }
            WidgetEvent::EnabledChange(e) => {
                if !self.observing_enabled {
                    return false;
                }
                let enabled = e.enabled;
                e.base.accept();
                self.set_enabled(enabled);
                true
            }
        }
    }

    fn set_enabled(&mut self, enabled: bool) {
        LabelledField::set_enabled(self, enabled);
    }
}

// Ensure LabelledField can be shared with host infrastructure.
static_assertions::assert_impl_all!(LabelledField: Send, Sync);
