//! The embedded caption label of a labelled field.
//!
//! A [`FieldLabel`] is the display-only text element a
//! [`LabelledField`](super::LabelledField) owns for its caption region. It
//! never receives input; the owning field configures it and paints it into
//! the caption region each frame.

use parking_lot::RwLock;

use crate::geometry::{LayoutDirection, Point, Rect, Size};
use crate::paint::{Color, PaintContext};
use crate::text::{Font, FontWeight, SharedTextMeasure};
use crate::theme;

/// Horizontal text alignment within the caption region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextAlignment {
    /// Align to the left edge.
    Left,
    /// Center within the region (default for captions).
    #[default]
    Center,
    /// Align to the right edge.
    Right,
}

/// A display-only text element for a field's caption region.
///
/// The label measures its own natural (unconstrained) size through the
/// shared [`TextMeasure`](crate::text::TextMeasure) seam, caching the
/// result until the text or font changes. The natural size is the input to
/// group width synchronization and must be answerable at any time, so no
/// layout pass is involved.
pub struct FieldLabel {
    /// The caption text.
    text: String,

    /// The caption font, derived from the field font.
    font: Font,

    /// Caption text color.
    color: Color,

    /// Horizontal alignment inside the caption region.
    alignment: TextAlignment,

    /// Rendered opacity; 1.0 when enabled, dimmed when disabled.
    opacity: f32,

    /// Shared host text measurer.
    measure: SharedTextMeasure,

    /// Cached natural size, invalidated on text or font change.
    cached_natural_size: RwLock<Option<Size>>,
}

impl FieldLabel {
    /// Create an empty label measuring through `measure`.
    pub fn new(measure: SharedTextMeasure) -> Self {
        Self {
            text: String::new(),
            font: derive_caption_font(&Font::default()),
            color: theme::LABEL_FOREGROUND,
            alignment: TextAlignment::default(),
            opacity: 1.0,
            measure,
            cached_natural_size: RwLock::new(None),
        }
    }

    /// Get the caption text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Set the caption text. Returns `true` if the text actually changed.
    pub fn set_text(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        if self.text == text {
            return false;
        }
        self.text = text;
        *self.cached_natural_size.write() = None;
        true
    }

    /// Get the caption font.
    pub fn font(&self) -> &Font {
        &self.font
    }

    /// Set the caption font directly.
    pub fn set_font(&mut self, font: Font) {
        if self.font != font {
            self.font = font;
            *self.cached_natural_size.write() = None;
        }
    }

    /// Derive the caption font from the owning field's font.
    pub fn set_font_derived_from(&mut self, field_font: &Font) {
        self.set_font(derive_caption_font(field_font));
    }

    /// Get the caption text color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Set the caption text color.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Get the horizontal alignment.
    pub fn alignment(&self) -> TextAlignment {
        self.alignment
    }

    /// Set the horizontal alignment.
    pub fn set_alignment(&mut self, alignment: TextAlignment) {
        self.alignment = alignment;
    }

    /// Get the rendered opacity.
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Set the rendered opacity.
    pub fn set_opacity(&mut self, opacity: f32) {
        self.opacity = opacity.clamp(0.0, 1.0);
    }

    /// The natural (unconstrained) size of the caption text.
    ///
    /// Cached until the text or font changes. An empty caption has zero
    /// width but still reports the font's line height.
    pub fn natural_size(&self) -> Size {
        if let Some(size) = *self.cached_natural_size.read() {
            return size;
        }
        let size = self.measure.measure(&self.text, &self.font);
        *self.cached_natural_size.write() = Some(size);
        size
    }

    /// Paint the caption into `region`.
    ///
    /// Alignment is resolved against the region; under right-to-left layout
    /// the left/right alignments swap so text still hugs the intended edge.
    pub fn paint(&self, ctx: &mut PaintContext<'_>, region: Rect, direction: LayoutDirection) {
        if self.text.is_empty() || region.is_empty() {
            return;
        }

        let natural = self.natural_size();
        let alignment = match (self.alignment, direction.is_rtl()) {
            (TextAlignment::Left, true) => TextAlignment::Right,
            (TextAlignment::Right, true) => TextAlignment::Left,
            (other, _) => other,
        };

        let x = match alignment {
            TextAlignment::Left => region.left(),
            TextAlignment::Center => region.center().x - natural.width / 2.0,
            TextAlignment::Right => region.right() - natural.width,
        };
        let y = region.center().y - natural.height / 2.0;

        let color = self.color.with_alpha(self.color.a * self.opacity);
        ctx.renderer()
            .draw_text(&self.text, Point::new(x, y), &self.font, color);
    }
}

/// Derive a caption font from the field font: one point smaller, semibold.
fn derive_caption_font(field_font: &Font) -> Font {
    field_font
        .clone()
        .with_size((field_font.size() - 1.0).max(1.0))
        .with_weight(FontWeight::SEMI_BOLD)
}
