//! Core widget trait definitions.
//!
//! This module defines the [`Widget`] trait that hosts drive, and the
//! [`SizeHint`] type used for layout negotiation.

use crate::geometry::{Rect, Size};
use crate::paint::PaintContext;

use super::base::WidgetBase;
use super::events::WidgetEvent;

/// Size hint containing the preferred, minimum, and maximum sizes for a
/// widget.
///
/// Layout code uses the hint to decide how much space to give a widget; the
/// actual assigned geometry may differ.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SizeHint {
    /// The preferred size for the widget to display optimally.
    pub preferred: Size,

    /// The minimum acceptable size. `None` means the widget can shrink to
    /// zero.
    pub minimum: Option<Size>,

    /// The maximum size the widget should be. `None` means unbounded.
    pub maximum: Option<Size>,
}

impl SizeHint {
    /// Create a new size hint with the specified preferred size.
    pub fn new(preferred: Size) -> Self {
        Self {
            preferred,
            minimum: None,
            maximum: None,
        }
    }

    /// Create a size hint with explicit width and height.
    pub fn from_dimensions(width: f32, height: f32) -> Self {
        Self::new(Size::new(width, height))
    }

    /// Set the minimum size.
    pub fn with_minimum(mut self, minimum: Size) -> Self {
        self.minimum = Some(minimum);
        self
    }

    /// Set the maximum size.
    pub fn with_maximum(mut self, maximum: Size) -> Self {
        self.maximum = Some(maximum);
        self
    }

    /// Get the effective minimum size (zero if not set).
    pub fn effective_minimum(&self) -> Size {
        self.minimum.unwrap_or(Size::ZERO)
    }

    /// Constrain a size to be within the minimum and maximum bounds.
    pub fn constrain(&self, size: Size) -> Size {
        let min = self.effective_minimum();
        let max = self.maximum.unwrap_or(Size::new(f32::MAX, f32::MAX));
        Size::new(
            size.width.clamp(min.width, max.width),
            size.height.clamp(min.height, max.height),
        )
    }
}

/// The core trait for widgets the host embeds and drives.
///
/// # Required Methods
///
/// - [`widget_base()`](Self::widget_base) / [`widget_base_mut()`](Self::widget_base_mut)
/// - [`size_hint()`](Self::size_hint)
/// - [`paint()`](Self::paint)
///
/// Everything else has default implementations that delegate to
/// [`WidgetBase`].
///
/// # Host Contract
///
/// The host runs [`layout()`](Self::layout) whenever
/// [`needs_layout()`](Self::needs_layout) reports `true` and before the
/// next [`paint()`](Self::paint); paint is only called with an active
/// rendering context (a paint request without one is simply not issued).
/// Lifecycle notifications arrive through [`event()`](Self::event).
pub trait Widget: Send + Sync {
    /// Get a reference to the widget's base.
    fn widget_base(&self) -> &WidgetBase;

    /// Get a mutable reference to the widget's base.
    fn widget_base_mut(&mut self) -> &mut WidgetBase;

    /// Get the widget's size hint for layout purposes.
    fn size_hint(&self) -> SizeHint;

    /// Run a layout pass, deriving internal geometry from current state.
    ///
    /// The default implementation only clears the layout flag.
    fn layout(&mut self) {
        self.widget_base_mut().clear_layout_flag();
    }

    /// Paint the widget.
    ///
    /// The paint context's coordinate space has (0, 0) at the widget's
    /// top-left corner; use `ctx.rect()` for the full bounds.
    fn paint(&self, ctx: &mut PaintContext<'_>);

    /// Handle a host event. Return `true` if the event was handled.
    fn event(&mut self, _event: &mut WidgetEvent) -> bool {
        false
    }

    // =========================================================================
    // Geometry (default implementations delegate to WidgetBase)
    // =========================================================================

    /// Get the widget's geometry (position and size).
    fn geometry(&self) -> Rect {
        self.widget_base().geometry()
    }

    /// Set the widget's geometry.
    fn set_geometry(&mut self, rect: Rect) {
        self.widget_base_mut().set_geometry(rect);
    }

    /// Get the widget's local rectangle (origin at 0,0).
    fn rect(&self) -> Rect {
        self.widget_base().rect()
    }

    /// Get the widget's size.
    fn size(&self) -> Size {
        self.widget_base().size()
    }

    // =========================================================================
    // Visibility and Enabled State
    // =========================================================================

    /// Check if the widget is visible.
    fn is_visible(&self) -> bool {
        self.widget_base().is_visible()
    }

    /// Set whether the widget is visible.
    fn set_visible(&mut self, visible: bool) {
        self.widget_base_mut().set_visible(visible);
    }

    /// Check if the widget is enabled.
    fn is_enabled(&self) -> bool {
        self.widget_base().is_enabled()
    }

    /// Set whether the widget is enabled.
    fn set_enabled(&mut self, enabled: bool) {
        self.widget_base_mut().set_enabled(enabled);
    }

    // =========================================================================
    // Update / Repaint
    // =========================================================================

    /// Request a repaint of the widget.
    fn update(&mut self) {
        self.widget_base_mut().update();
    }

    /// Check if the widget needs to be repainted.
    fn needs_repaint(&self) -> bool {
        self.widget_base().needs_repaint()
    }

    /// Check if the widget needs a layout pass.
    fn needs_layout(&self) -> bool {
        self.widget_base().needs_layout()
    }
}
