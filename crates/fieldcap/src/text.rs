//! Fonts and the text-measurement seam.
//!
//! The labelled field never lays text out itself; it asks the host how wide
//! a string renders through the [`TextMeasure`] trait. The caption label's
//! natural size (the input to group width synchronization) must be
//! answerable at any time, including before the first layout pass, so
//! implementations are expected to work without a live window or renderer.
//!
//! Two implementations ship with the kit:
//!
//! - [`SystemTextMeasure`] shapes text with `cosmic-text` against the
//!   system font database.
//! - [`FixedAdvanceMeasure`] assigns every character the same advance,
//!   for headless hosts and deterministic tests.

use std::sync::Arc;

use cosmic_text::{Attrs, Buffer, Metrics, Shaping};
use parking_lot::Mutex;

use crate::geometry::Size;

/// Multiplier from font size to line height.
const LINE_HEIGHT_FACTOR: f32 = 1.2;

/// A font family specification.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum FontFamily {
    /// The system's default sans-serif family.
    #[default]
    SansSerif,
    /// The system's default serif family.
    Serif,
    /// The system's default monospace family.
    Monospace,
    /// A named family.
    Name(String),
}

/// Font weight on the standard 100-900 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FontWeight(pub u16);

impl FontWeight {
    /// Normal/regular weight (400).
    pub const NORMAL: Self = Self(400);
    /// Medium weight (500).
    pub const MEDIUM: Self = Self(500);
    /// Semi-bold weight (600).
    pub const SEMI_BOLD: Self = Self(600);
    /// Bold weight (700).
    pub const BOLD: Self = Self(700);
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::NORMAL
    }
}

/// A font specification: family, size, and weight.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    family: FontFamily,
    size: f32,
    weight: FontWeight,
}

impl Font {
    /// Create a new font with normal weight.
    pub fn new(family: FontFamily, size: f32) -> Self {
        Self {
            family,
            size,
            weight: FontWeight::NORMAL,
        }
    }

    /// Set the weight using the builder pattern.
    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    /// Set the size using the builder pattern.
    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// The font family.
    pub fn family(&self) -> &FontFamily {
        &self.family
    }

    /// The font size in points.
    pub fn size(&self) -> f32 {
        self.size
    }

    /// The font weight.
    pub fn weight(&self) -> FontWeight {
        self.weight
    }

    /// The line height this font lays out at.
    pub fn line_height(&self) -> f32 {
        self.size * LINE_HEIGHT_FACTOR
    }

    /// Convert to cosmic-text attributes for shaping.
    pub(crate) fn to_attrs(&self) -> Attrs<'_> {
        let family = match &self.family {
            FontFamily::Name(name) => cosmic_text::Family::Name(name.as_str()),
            FontFamily::Serif => cosmic_text::Family::Serif,
            FontFamily::SansSerif => cosmic_text::Family::SansSerif,
            FontFamily::Monospace => cosmic_text::Family::Monospace,
        };

        Attrs::new()
            .family(family)
            .weight(cosmic_text::Weight(self.weight.0))
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::new(FontFamily::SansSerif, 13.0)
    }
}

/// Host seam for text measurement.
///
/// `measure` returns the unconstrained single-line extent of `text` in the
/// given font. Implementations must be callable at any time; the kit
/// queries natural sizes outside of layout and paint passes.
pub trait TextMeasure: Send + Sync {
    /// Measure the natural (unconstrained) size of a single line of text.
    fn measure(&self, text: &str, font: &Font) -> Size;
}

/// Shared handle to a text measurer.
pub type SharedTextMeasure = Arc<dyn TextMeasure>;

/// Text measurement backed by `cosmic-text` and the system font database.
///
/// Construction scans the system fonts once; the font system is then reused
/// (behind a mutex) for every measurement.
pub struct SystemTextMeasure {
    font_system: Mutex<cosmic_text::FontSystem>,
}

impl SystemTextMeasure {
    /// Create a measurer over the system font database.
    pub fn new() -> Self {
        Self {
            font_system: Mutex::new(cosmic_text::FontSystem::new()),
        }
    }
}

impl Default for SystemTextMeasure {
    fn default() -> Self {
        Self::new()
    }
}

impl TextMeasure for SystemTextMeasure {
    fn measure(&self, text: &str, font: &Font) -> Size {
        let metrics = Metrics::new(font.size(), font.line_height());
        if text.is_empty() {
            return Size::new(0.0, metrics.line_height);
        }

        let mut font_system = self.font_system.lock();
        let mut buffer = Buffer::new(&mut font_system, metrics);

        // Unconstrained: we want the natural single-line extent.
        buffer.set_size(&mut font_system, None, None);
        buffer.set_text(&mut font_system, text, font.to_attrs(), Shaping::Advanced);
        buffer.shape_until_scroll(&mut font_system, false);

        let mut width = 0.0f32;
        let mut lines = 0usize;
        for run in buffer.layout_runs() {
            width = width.max(run.line_w);
            lines += 1;
        }

        Size::new(width, metrics.line_height * lines.max(1) as f32)
    }
}

/// Deterministic measurement with a fixed advance per character.
///
/// Useful for headless hosts and tests, where measured widths must not
/// depend on the machine's installed fonts.
#[derive(Debug, Clone, Copy)]
pub struct FixedAdvanceMeasure {
    advance: f32,
}

impl FixedAdvanceMeasure {
    /// Create a measurer where every character is `advance` units wide.
    pub fn new(advance: f32) -> Self {
        Self { advance }
    }
}

impl TextMeasure for FixedAdvanceMeasure {
    fn measure(&self, text: &str, font: &Font) -> Size {
        let count = text.chars().count() as f32;
        Size::new(count * self.advance, font.line_height())
    }
}

// The measurement seam must be shareable across widgets.
static_assertions::assert_impl_all!(SystemTextMeasure: Send, Sync);
static_assertions::assert_impl_all!(FixedAdvanceMeasure: Send, Sync);
