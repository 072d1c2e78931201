//! Widget base implementation.
//!
//! This module provides [`WidgetBase`], the common implementation details
//! for widgets in this kit: geometry, visibility, enabled state, and the
//! dirty flags the host polls between frames. Widget implementations
//! include it as a field and delegate to it.

use fieldcap_core::{debug_assert_main_thread, Signal};

use crate::geometry::{Rect, Size};

/// The base implementation for widgets.
///
/// # Signals
///
/// - `geometry_changed`: emitted when position or size changes
/// - `visible_changed`: emitted when visibility changes
/// - `enabled_changed`: emitted when the enabled state changes
///
/// # Example
///
/// ```ignore
/// struct MyControl {
///     base: WidgetBase,
/// }
///
/// impl Widget for MyControl {
///     fn widget_base(&self) -> &WidgetBase { &self.base }
///     fn widget_base_mut(&mut self) -> &mut WidgetBase { &mut self.base }
///     // ...
/// }
/// ```
pub struct WidgetBase {
    /// The widget's geometry (position relative to parent and size).
    geometry: Rect,

    /// Whether the widget is visible.
    visible: bool,

    /// Whether the widget is enabled (can receive input).
    enabled: bool,

    /// Whether the widget needs to be repainted.
    needs_repaint: bool,

    /// Whether the widget needs a layout pass before the next paint.
    needs_layout: bool,

    /// Signal emitted when the geometry changes.
    pub geometry_changed: Signal<Rect>,

    /// Signal emitted when visibility changes.
    pub visible_changed: Signal<bool>,

    /// Signal emitted when enabled state changes.
    pub enabled_changed: Signal<bool>,
}

impl Default for WidgetBase {
    fn default() -> Self {
        Self::new()
    }
}

impl WidgetBase {
    /// Create a new widget base.
    pub fn new() -> Self {
        Self {
            geometry: Rect::ZERO,
            visible: true,
            enabled: true,
            needs_repaint: true,
            needs_layout: true,
            geometry_changed: Signal::new(),
            visible_changed: Signal::new(),
            enabled_changed: Signal::new(),
        }
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// Get the widget's geometry (position and size).
    #[inline]
    pub fn geometry(&self) -> Rect {
        self.geometry
    }

    /// Set the widget's geometry.
    ///
    /// Emits `geometry_changed` if the geometry actually changed, and marks
    /// the widget for relayout and repaint.
    pub fn set_geometry(&mut self, rect: Rect) {
        debug_assert_main_thread!();
        if self.geometry != rect {
            self.geometry = rect;
            self.needs_repaint = true;
            self.needs_layout = true;
            self.geometry_changed.emit(rect);
        }
    }

    /// Get the widget's size.
    #[inline]
    pub fn size(&self) -> Size {
        self.geometry.size
    }

    /// Get the widget's width.
    #[inline]
    pub fn width(&self) -> f32 {
        self.geometry.size.width
    }

    /// Get the widget's height.
    #[inline]
    pub fn height(&self) -> f32 {
        self.geometry.size.height
    }

    /// Get a rectangle representing the widget's local coordinate space.
    ///
    /// This is always positioned at (0, 0) with the widget's size.
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.geometry.size.width, self.geometry.size.height)
    }

    // =========================================================================
    // Visibility
    // =========================================================================

    /// Check if the widget is visible.
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Set whether the widget is visible.
    pub fn set_visible(&mut self, visible: bool) {
        debug_assert_main_thread!();
        if self.visible != visible {
            self.visible = visible;
            self.needs_repaint = true;
            self.visible_changed.emit(visible);
        }
    }

    // =========================================================================
    // Enabled State
    // =========================================================================

    /// Check if the widget is enabled.
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Set whether the widget is enabled.
    pub fn set_enabled(&mut self, enabled: bool) {
        debug_assert_main_thread!();
        if self.enabled != enabled {
            self.enabled = enabled;
            self.needs_repaint = true;
            self.enabled_changed.emit(enabled);
        }
    }

    // =========================================================================
    // Dirty Flags
    // =========================================================================

    /// Check if the widget needs to be repainted.
    #[inline]
    pub fn needs_repaint(&self) -> bool {
        self.needs_repaint
    }

    /// Request a repaint of the widget.
    pub fn update(&mut self) {
        self.needs_repaint = true;
    }

    /// Clear the repaint flag. The host calls this after painting.
    pub fn clear_repaint_flag(&mut self) {
        self.needs_repaint = false;
    }

    /// Check if the widget needs a layout pass.
    #[inline]
    pub fn needs_layout(&self) -> bool {
        self.needs_layout
    }

    /// Request a layout pass before the next paint.
    pub fn request_layout(&mut self) {
        self.needs_layout = true;
        self.needs_repaint = true;
    }

    /// Clear the layout flag (called after a layout pass).
    pub(crate) fn clear_layout_flag(&mut self) {
        self.needs_layout = false;
    }
}
