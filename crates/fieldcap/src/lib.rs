//! fieldcap: a labelled text-field widget kit.
//!
//! fieldcap provides a text-field control whose rectangle embeds a
//! secondary caption ("label") region next to the editable area, plus a
//! grouping mechanism that keeps the caption widths of several such
//! controls synchronized, for the classic aligned-form layout.
//!
//! The kit is host-agnostic: rendering, text measurement, and appearance
//! are consumed through narrow seams ([`Renderer`](paint::Renderer),
//! [`TextMeasure`](text::TextMeasure), [`Appearance`](theme::Appearance)),
//! so it can sit on top of any 2D backend.
//!
//! # Example
//!
//! ```
//! use fieldcap::widget::{FieldArena, LabelWidth};
//! use fieldcap::text::FixedAdvanceMeasure;
//! use std::sync::Arc;
//!
//! // An arena owns the fields; here with deterministic text metrics.
//! let mut arena = FieldArena::with_measure(Arc::new(FixedAdvanceMeasure::new(6.0)));
//!
//! let name = arena.insert(arena.new_field().with_label("Name"));
//! let location = arena.insert(arena.new_field().with_label("Location"));
//!
//! // One group keeps both caption widths identical.
//! let group = arena.add_group(4.0);
//! assert!(arena.group_add_all(group, &[name, location]));
//!
//! // "Location" is the widest caption (8 chars * 6.0); both fields now
//! // pin their caption width to 48 + 4 padding.
//! assert_eq!(
//!     arena.get(name).unwrap().label_width(),
//!     LabelWidth::Fixed(52.0)
//! );
//! ```
//!
//! # Threading
//!
//! All widget mutation is main-thread only, verified by debug assertions;
//! see [`fieldcap_core::thread_check`].

pub mod geometry;
pub mod paint;
pub mod text;
pub mod theme;
pub mod widget;

pub use geometry::{LayoutDirection, Point, Rect, RectEdge, Size};
pub use paint::{Color, PaintContext, Renderer, RoundedRect, Stroke};
pub use text::{Font, FontFamily, FontWeight, SharedTextMeasure, TextMeasure};
pub use theme::{Appearance, CellColors, ColorScheme};
pub use widget::{
    BezelStyle, FieldArena, FieldGroup, FieldId, FieldLabel, GroupId, LabelWidth, LabelledField,
    LabelledFieldCell, SizeHint, TextAlignment, Widget, WidgetBase, WidgetEvent,
};
