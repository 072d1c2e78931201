//! Width-synchronization group for labelled fields.
//!
//! A [`FieldGroup`] keeps the caption widths of several fields identical:
//! the widest member's natural caption width, plus a configurable padding,
//! is applied to every member. Groups are non-visual coordinators; they
//! live in the [`FieldArena`](super::FieldArena) and hold members by
//! [`FieldId`], so a destroyed field simply stops resolving and drops out
//! of the computation.

use std::collections::HashSet;

use slotmap::SlotMap;

use super::arena::FieldId;
use super::field::{LabelWidth, LabelledField};

/// A group of fields sharing one caption width.
///
/// Membership is an unordered set: synchronization is a commutative max
/// reduction, so the applied width never depends on insertion order. Each
/// field belongs to at most one group at a time, enforced through the
/// field's back reference by the arena's add operations.
pub struct FieldGroup {
    /// Extra width added to the computed maximum.
    padding: f32,

    /// Member handles. Stale handles (destroyed fields) are skipped and
    /// compacted away on the next synchronization.
    members: HashSet<FieldId>,
}

impl FieldGroup {
    /// Create an empty group with the given padding.
    pub(crate) fn new(padding: f32) -> Self {
        Self {
            padding,
            members: HashSet::new(),
        }
    }

    /// The padding added to the computed maximum width.
    pub fn padding(&self) -> f32 {
        self.padding
    }

    /// Set the padding. The arena re-synchronizes after this.
    pub(crate) fn set_padding(&mut self, padding: f32) {
        self.padding = padding;
    }

    /// All member handles (unordered; may include stale handles of
    /// destroyed fields until the next synchronization).
    pub fn members(&self) -> Vec<FieldId> {
        self.members.iter().copied().collect()
    }

    /// Check if a field handle is a member.
    pub fn contains(&self, field: FieldId) -> bool {
        self.members.contains(&field)
    }

    /// The number of member handles.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Check if the group has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Record a member handle. Returns `false` if it was already present.
    pub(crate) fn insert_member(&mut self, field: FieldId) -> bool {
        self.members.insert(field)
    }

    /// Drop a member handle. Returns `false` if it was not present.
    pub(crate) fn remove_member(&mut self, field: FieldId) -> bool {
        self.members.remove(&field)
    }

    /// Apply one shared caption width to every live member.
    ///
    /// Computes the maximum natural caption width over live members, then
    /// pins every live member's width policy to `max + padding`. Stale
    /// handles are compacted away first. Returns the pre-padding maximum
    /// (zero when no live member remains).
    ///
    /// Calling this twice without an intervening content or membership
    /// change applies identical widths both times.
    pub(crate) fn sync_widths(&mut self, fields: &mut SlotMap<FieldId, LabelledField>) -> f32 {
        self.members.retain(|&id| fields.contains_key(id));

        let mut combined: f32 = 0.0;
        for &id in &self.members {
            if let Some(field) = fields.get(id) {
                combined = combined.max(field.label_natural_size().width);
            }
        }

        for &id in &self.members {
            if let Some(field) = fields.get_mut(id) {
                field.set_label_width(LabelWidth::fixed(combined + self.padding));
            }
        }

        tracing::trace!(
            target: "fieldcap::group",
            members = self.members.len(),
            width = combined,
            padding = self.padding,
            "synchronized caption widths"
        );

        combined
    }
}
