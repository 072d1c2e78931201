//! Colors, strokes, and the host-graphics seam.
//!
//! The kit does not render pixels itself. Everything a labelled field draws
//! goes through the object-safe [`Renderer`] trait, which the host backs
//! with its own graphics stack. [`PaintContext`] bundles the renderer with
//! the widget rectangle, the device scale factor, and the effective
//! [`Appearance`](crate::theme::Appearance), and provides the scoped
//! state-save and antialias helpers the cell painting relies on.

use crate::geometry::{Point, Rect, Size};
use crate::text::Font;
use crate::theme::Appearance;

/// An RGBA color with straight (non-premultiplied) alpha, components in
/// the 0.0-1.0 range.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Create a new color from RGBA components (0.0-1.0 range).
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from RGB components.
    #[inline]
    pub const fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create an opaque color from 8-bit RGB components.
    #[inline]
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    /// Create a color from 8-bit RGBA components.
    #[inline]
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    /// Return the same color with a different alpha.
    #[inline]
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self { a: alpha, ..self }
    }

    /// Opaque black.
    pub const BLACK: Self = Self::from_rgb(0.0, 0.0, 0.0);
    /// Opaque white.
    pub const WHITE: Self = Self::from_rgb(1.0, 1.0, 1.0);
    /// Fully transparent.
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);
}

/// Stroke options for outlines and lines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    /// Stroke color.
    pub color: Color,
    /// Stroke width in logical units.
    pub width: f32,
}

impl Stroke {
    /// Create a new stroke with the given color and width.
    #[inline]
    pub const fn new(color: Color, width: f32) -> Self {
        Self { color, width }
    }
}

/// A rectangle with a uniform corner radius.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RoundedRect {
    /// The base rectangle.
    pub rect: Rect,
    /// Uniform corner radius.
    pub radius: f32,
}

impl RoundedRect {
    /// Create a rounded rectangle with a uniform corner radius.
    #[inline]
    pub const fn new(rect: Rect, radius: f32) -> Self {
        Self { rect, radius }
    }
}

/// The host-graphics interface.
///
/// The trait is object-safe so hosts can hand the kit a `&mut dyn Renderer`
/// borrowed from whatever backend they use. State (clip, antialias) follows
/// a save/restore stack; [`PaintContext::with_saved_state`] is the scoped
/// way to use it.
pub trait Renderer {
    /// Save the current render state (clip, antialias setting).
    fn save(&mut self);

    /// Restore the previously saved render state.
    fn restore(&mut self);

    /// Enable or disable antialiasing for subsequent operations.
    fn set_antialias(&mut self, enabled: bool);

    /// Whether antialiasing is currently enabled.
    fn antialias(&self) -> bool;

    /// Intersect the clip region with a rectangle.
    fn clip_rect(&mut self, rect: Rect);

    /// Intersect the clip region with a rounded rectangle.
    fn clip_rounded_rect(&mut self, rect: RoundedRect);

    /// Fill a rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Fill a rounded rectangle.
    fn fill_rounded_rect(&mut self, rect: RoundedRect, color: Color);

    /// Stroke the outline of a rectangle.
    fn stroke_rect(&mut self, rect: Rect, stroke: &Stroke);

    /// Stroke the outline of a rounded rectangle.
    fn stroke_rounded_rect(&mut self, rect: RoundedRect, stroke: &Stroke);

    /// Draw a line between two points.
    fn draw_line(&mut self, from: Point, to: Point, stroke: &Stroke);

    /// Draw a single line of text with the top-left corner of its line box
    /// at `origin`.
    fn draw_text(&mut self, text: &str, origin: Point, font: &Font, color: Color);
}

/// Context provided during widget painting.
///
/// Wraps the host renderer together with the widget's local rectangle
/// (origin always at 0,0), the device scale factor used for pixel-grid
/// snapping, and the effective appearance for color resolution.
pub struct PaintContext<'a> {
    renderer: &'a mut dyn Renderer,
    widget_rect: Rect,
    scale_factor: f32,
    appearance: Appearance,
}

impl<'a> PaintContext<'a> {
    /// Create a new paint context.
    pub fn new(renderer: &'a mut dyn Renderer, widget_rect: Rect) -> Self {
        Self {
            renderer,
            widget_rect,
            scale_factor: 1.0,
            appearance: Appearance::default(),
        }
    }

    /// Set the device scale factor (builder pattern).
    #[inline]
    pub fn with_scale_factor(mut self, scale_factor: f32) -> Self {
        self.scale_factor = scale_factor;
        self
    }

    /// Set the effective appearance (builder pattern).
    #[inline]
    pub fn with_appearance(mut self, appearance: Appearance) -> Self {
        self.appearance = appearance;
        self
    }

    /// Get the renderer.
    #[inline]
    pub fn renderer(&mut self) -> &mut dyn Renderer {
        self.renderer
    }

    /// Get the widget's local rectangle.
    #[inline]
    pub fn rect(&self) -> Rect {
        self.widget_rect
    }

    /// Get the widget's size.
    #[inline]
    pub fn size(&self) -> Size {
        self.widget_rect.size
    }

    /// Get the device scale factor.
    #[inline]
    pub fn scale_factor(&self) -> f32 {
        self.scale_factor
    }

    /// Get the effective appearance.
    #[inline]
    pub fn appearance(&self) -> Appearance {
        self.appearance
    }

    /// Run `f` between a `save()`/`restore()` pair.
    ///
    /// Clip and antialias changes made inside `f` do not leak out.
    pub fn with_saved_state(&mut self, f: impl FnOnce(&mut Self)) {
        self.renderer.save();
        f(&mut *self);
        self.renderer.restore();
    }

    /// Run `f` with antialiasing disabled, restoring the previous setting
    /// afterwards.
    ///
    /// Hairline strokes on pixel boundaries need this to stay crisp.
    pub fn without_antialias(&mut self, f: impl FnOnce(&mut Self)) {
        let previous = self.renderer.antialias();
        self.renderer.set_antialias(false);
        f(&mut *self);
        self.renderer.set_antialias(previous);
    }
}
