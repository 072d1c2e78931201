//! Appearance queries and themed color resolution.
//!
//! The host owns appearance: the kit only consumes a read-only
//! [`Appearance`] snapshot (color scheme plus accessibility flags) and
//! derives concrete colors from it. [`Appearance::system`] is a convenience
//! that fills in the scheme from the operating system; hosts with richer
//! platform integration construct the snapshot themselves.

use crate::paint::Color;

/// The alpha applied to themed colors when a control is disabled.
pub const DISABLED_ALPHA: f32 = 0.4;

/// The system color scheme (light/dark mode).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorScheme {
    /// Light mode.
    #[default]
    Light,
    /// Dark mode.
    Dark,
    /// Could not be determined; treated as light.
    Unknown,
}

impl ColorScheme {
    /// Check if this is dark mode.
    #[inline]
    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Check if this is light mode (or undetermined).
    #[inline]
    pub fn is_light(self) -> bool {
        !self.is_dark()
    }
}

/// Query the operating system's current color scheme.
pub fn system_color_scheme() -> ColorScheme {
    match dark_light::detect() {
        dark_light::Mode::Dark => ColorScheme::Dark,
        dark_light::Mode::Light => ColorScheme::Light,
        dark_light::Mode::Default => ColorScheme::Unknown,
    }
}

/// A read-only snapshot of the host's appearance and accessibility state.
///
/// `reduce_transparency` and `reduce_motion` are carried for hosts that
/// style around them; the cell's own drawing is already fully opaque and
/// static, so only `scheme` and `high_contrast` feed color resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Appearance {
    /// The effective color scheme of the control's surroundings.
    pub scheme: ColorScheme,
    /// Whether the increase-contrast accessibility setting is on.
    pub high_contrast: bool,
    /// Whether the reduce-transparency accessibility setting is on.
    pub reduce_transparency: bool,
    /// Whether the reduce-motion accessibility setting is on.
    pub reduce_motion: bool,
}

impl Appearance {
    /// A plain light appearance.
    pub fn light() -> Self {
        Self::default()
    }

    /// A plain dark appearance.
    pub fn dark() -> Self {
        Self {
            scheme: ColorScheme::Dark,
            ..Self::default()
        }
    }

    /// Snapshot the system appearance.
    ///
    /// The color scheme comes from the operating system. The accessibility
    /// flags default to off; hosts that surface those settings should set
    /// them explicitly.
    pub fn system() -> Self {
        Self {
            scheme: system_color_scheme(),
            ..Self::default()
        }
    }

    /// Set the increase-contrast flag (builder pattern).
    pub fn with_high_contrast(mut self, high_contrast: bool) -> Self {
        self.high_contrast = high_contrast;
        self
    }

    /// Set the reduce-transparency flag (builder pattern).
    pub fn with_reduce_transparency(mut self, reduce_transparency: bool) -> Self {
        self.reduce_transparency = reduce_transparency;
        self
    }

    /// Set the reduce-motion flag (builder pattern).
    pub fn with_reduce_motion(mut self, reduce_motion: bool) -> Self {
        self.reduce_motion = reduce_motion;
        self
    }

    /// Check if the effective scheme is dark.
    #[inline]
    pub fn is_dark(&self) -> bool {
        self.scheme.is_dark()
    }
}

/// Resolved colors for a field cell's frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellColors {
    /// Border and separator color.
    pub border: Color,
    /// Fill color behind the whole cell.
    pub background: Color,
}

/// Light-mode border (grid) color.
pub const LIGHT_BORDER: Color = Color::from_rgb(0.8, 0.8, 0.8);
/// Light-mode cell background.
pub const LIGHT_BACKGROUND: Color = Color::WHITE;
/// Dark-mode border color.
pub const DARK_BORDER: Color = Color::from_rgb(0.25, 0.25, 0.25);
/// Dark-mode cell background.
pub const DARK_BACKGROUND: Color = Color::from_rgb(0.12, 0.12, 0.12);
/// High-contrast border color (scheme-independent).
pub const HIGH_CONTRAST_BORDER: Color = Color::BLACK;
/// High-contrast cell background (scheme-independent).
pub const HIGH_CONTRAST_BACKGROUND: Color = Color::WHITE;

/// Default background for the caption region (light window-background grey).
pub const LABEL_BACKGROUND: Color = Color::from_rgb(0.925, 0.925, 0.925);
/// Default caption text color (secondary label grey).
pub const LABEL_FOREGROUND: Color = Color::new(0.0, 0.0, 0.0, 0.55);

/// Resolve the cell frame colors for an appearance and enabled state.
///
/// The resolution is a pure lookup over `(high_contrast, dark, enabled)`.
/// High contrast short-circuits the scheme; the disabled column is always
/// the enabled color at [`DISABLED_ALPHA`]:
///
/// | high contrast | dark | enabled  | border / background                          |
/// |---------------|------|----------|----------------------------------------------|
/// | yes           | any  | yes      | `HIGH_CONTRAST_BORDER` / `HIGH_CONTRAST_BACKGROUND` |
/// | yes           | any  | no       | the row above at `DISABLED_ALPHA`            |
/// | no            | yes  | yes      | `DARK_BORDER` / `DARK_BACKGROUND`            |
/// | no            | yes  | no       | the row above at `DISABLED_ALPHA`            |
/// | no            | no   | yes      | `LIGHT_BORDER` / `LIGHT_BACKGROUND`          |
/// | no            | no   | no       | the row above at `DISABLED_ALPHA`            |
pub fn resolve_cell_colors(appearance: Appearance, enabled: bool) -> CellColors {
    let (border, background) = if appearance.high_contrast {
        (HIGH_CONTRAST_BORDER, HIGH_CONTRAST_BACKGROUND)
    } else if appearance.is_dark() {
        (DARK_BORDER, DARK_BACKGROUND)
    } else {
        (LIGHT_BORDER, LIGHT_BACKGROUND)
    };

    if enabled {
        CellColors { border, background }
    } else {
        CellColors {
            border: border.with_alpha(border.a * DISABLED_ALPHA),
            background: background.with_alpha(background.a * DISABLED_ALPHA),
        }
    }
}
