//! The widget layer: the labelled field, its cell, and width groups.
//!
//! # Structure
//!
//! - [`LabelledField`] - the host-facing control: a text field with an
//!   embedded caption region
//! - [`LabelledFieldCell`] - cell-level geometry and frame painting
//! - [`FieldLabel`] - the display-only caption sub-view
//! - [`FieldGroup`] - keeps caption widths synchronized across fields
//! - [`FieldArena`] - owns fields and groups behind stable handles and
//!   runs the cross-field cascades
//! - [`WidgetBase`] / [`Widget`] - the chassis hosts drive

mod arena;
mod base;
mod cell;
mod events;
mod field;
mod group;
mod label;
mod traits;

pub use arena::{FieldArena, FieldId, GroupId};
pub use base::WidgetBase;
pub use cell::{
    BezelStyle, LabelledFieldCell, BORDER_INSET, CORNER_RADIUS, ROUNDED_BEZEL_ORIGIN_SHIFT,
    ROUNDED_BEZEL_WIDTH_EXPANSION, ROUNDED_BORDER_WIDTH, SEPARATOR_WIDTH, SQUARE_BEZEL_TRAILING_MARGIN,
    SQUARE_BORDER_WIDTH,
};
pub use events::{AttachEvent, DetachEvent, EnabledChangeEvent, EventBase, WidgetEvent};
pub use field::{
    LabelWidth, LabelledField, ALIGNMENT_EDGE_CORRECTION, DEFAULT_EDIT_WIDTH, MIN_EDIT_WIDTH,
    VERTICAL_PADDING,
};
pub use group::FieldGroup;
pub use label::{FieldLabel, TextAlignment};
pub use traits::{SizeHint, Widget};
