//! Arena ownership of fields and groups.
//!
//! [`FieldArena`] is the coordination point of the kit: it owns every
//! [`LabelledField`] and [`FieldGroup`] behind stable, generational handles
//! ([`FieldId`], [`GroupId`]). Destroying a field invalidates its handle,
//! so a group that still records the handle simply finds nothing on its
//! next enumeration: the weak-membership semantics, without weak
//! references.
//!
//! The arena also runs the cross-field cascades: changing a grouped
//! field's caption through [`set_label_text`](FieldArena::set_label_text)
//! re-synchronizes the sibling widths before returning, so callers can
//! rely on every member's width being authoritative immediately
//! afterwards. Mutations made directly through
//! [`get_mut`](FieldArena::get_mut) follow the explicit protocol instead:
//! apply the change, then call [`sync_widths`](FieldArena::sync_widths)
//! yourself.

use std::sync::Arc;

use fieldcap_core::debug_assert_main_thread;
use slotmap::{new_key_type, SlotMap};

use crate::text::{SharedTextMeasure, SystemTextMeasure};

use super::field::LabelledField;
use super::group::FieldGroup;

new_key_type! {
    /// A stable, generational handle to a field in a [`FieldArena`].
    ///
    /// Handles stay valid while the field lives and never resolve again
    /// after it is removed, even if the slot is reused.
    pub struct FieldId;
}

new_key_type! {
    /// A stable, generational handle to a group in a [`FieldArena`].
    pub struct GroupId;
}

/// Owner and coordinator of labelled fields and their groups.
pub struct FieldArena {
    fields: SlotMap<FieldId, LabelledField>,
    groups: SlotMap<GroupId, FieldGroup>,
    measure: SharedTextMeasure,
}

impl Default for FieldArena {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldArena {
    /// Create an arena measuring text through the system font database.
    pub fn new() -> Self {
        Self::with_measure(Arc::new(SystemTextMeasure::new()))
    }

    /// Create an arena with an explicit text measurer.
    pub fn with_measure(measure: SharedTextMeasure) -> Self {
        Self {
            fields: SlotMap::with_key(),
            groups: SlotMap::with_key(),
            measure,
        }
    }

    /// The arena's shared text measurer.
    pub fn measure(&self) -> &SharedTextMeasure {
        &self.measure
    }

    // =========================================================================
    // Field Lifecycle
    // =========================================================================

    /// Construct a field wired to this arena's text measurer, without
    /// inserting it. Pair with [`insert`](Self::insert).
    pub fn new_field(&self) -> LabelledField {
        LabelledField::new(self.measure.clone())
    }

    /// Create and insert an empty field, returning its handle.
    pub fn create_field(&mut self) -> FieldId {
        let field = self.new_field();
        self.insert(field)
    }

    /// Insert a field, returning its handle.
    pub fn insert(&mut self, field: LabelledField) -> FieldId {
        debug_assert_main_thread!();
        let id = self.fields.insert(field);
        tracing::trace!(target: "fieldcap::arena", ?id, "inserted field");
        id
    }

    /// Remove a field, returning it if the handle was live.
    ///
    /// Any group recording the handle drops it on its next enumeration.
    /// The returned field's group back reference is cleared, so it can be
    /// re-inserted as a fresh, ungrouped field.
    pub fn remove(&mut self, id: FieldId) -> Option<LabelledField> {
        debug_assert_main_thread!();
        let mut field = self.fields.remove(id)?;
        field.set_group(None);
        tracing::trace!(target: "fieldcap::arena", ?id, "removed field");
        Some(field)
    }

    /// Get a field by handle.
    pub fn get(&self, id: FieldId) -> Option<&LabelledField> {
        self.fields.get(id)
    }

    /// Get a field mutably by handle.
    ///
    /// Direct mutation does not run group cascades; after changing a
    /// grouped field's caption this way, call
    /// [`sync_widths`](Self::sync_widths) on its group.
    pub fn get_mut(&mut self, id: FieldId) -> Option<&mut LabelledField> {
        self.fields.get_mut(id)
    }

    /// Check if a field handle is live.
    pub fn contains(&self, id: FieldId) -> bool {
        self.fields.contains_key(id)
    }

    /// The number of live fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the arena holds no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over live fields.
    pub fn iter(&self) -> impl Iterator<Item = (FieldId, &LabelledField)> {
        self.fields.iter()
    }

    // =========================================================================
    // Group Lifecycle
    // =========================================================================

    /// Create an empty group with the given caption padding.
    pub fn add_group(&mut self, padding: f32) -> GroupId {
        debug_assert_main_thread!();
        let id = self.groups.insert(FieldGroup::new(padding));
        tracing::trace!(target: "fieldcap::arena", ?id, padding, "created group");
        id
    }

    /// Destroy a group, returning it if the handle was live.
    ///
    /// Members survive: their back references are cleared and their caption
    /// widths keep the last synchronized value.
    pub fn remove_group(&mut self, id: GroupId) -> Option<FieldGroup> {
        debug_assert_main_thread!();
        let group = self.groups.remove(id)?;
        for member in group.members() {
            if let Some(field) = self.fields.get_mut(member) {
                if field.group() == Some(id) {
                    field.set_group(None);
                }
            }
        }
        tracing::trace!(target: "fieldcap::arena", ?id, "removed group");
        Some(group)
    }

    /// Get a group by handle.
    pub fn group(&self, id: GroupId) -> Option<&FieldGroup> {
        self.groups.get(id)
    }

    // =========================================================================
    // Group Membership
    // =========================================================================

    /// Add a field to a group.
    ///
    /// Fails, returning `false` with no mutation, if either handle is
    /// dead or the field already belongs to any group (including this
    /// one). Does not synchronize widths; callers batch adds and finish
    /// with [`sync_widths`](Self::sync_widths), or use
    /// [`group_add_all`](Self::group_add_all).
    pub fn group_add(&mut self, group: GroupId, field: FieldId) -> bool {
        debug_assert_main_thread!();
        if !self.groups.contains_key(group) {
            return false;
        }
        let Some(f) = self.fields.get(field) else {
            return false;
        };
        if f.group().is_some() {
            return false;
        }

        self.groups[group].insert_member(field);
        self.fields[field].set_group(Some(group));
        tracing::trace!(target: "fieldcap::arena", ?group, ?field, "added field to group");
        true
    }

    /// Add several fields to a group, all-or-nothing.
    ///
    /// If any candidate is dead or already grouped, nothing is added and
    /// `false` is returned. On success every field is added and the group
    /// is synchronized exactly once before returning.
    pub fn group_add_all(&mut self, group: GroupId, fields: &[FieldId]) -> bool {
        debug_assert_main_thread!();
        if !self.groups.contains_key(group) {
            return false;
        }

        // Check every candidate before mutating anything.
        let all_free = fields
            .iter()
            .all(|&id| self.fields.get(id).is_some_and(|f| f.group().is_none()));
        if !all_free {
            return false;
        }

        for &id in fields {
            self.groups[group].insert_member(id);
            self.fields[id].set_group(Some(group));
        }
        self.sync_widths(group);
        true
    }

    /// Remove a field from a group.
    ///
    /// Succeeds only if the field is live and its back reference is this
    /// group; returns `false` otherwise.
    pub fn group_remove(&mut self, group: GroupId, field: FieldId) -> bool {
        debug_assert_main_thread!();
        let Some(f) = self.fields.get_mut(field) else {
            return false;
        };
        if f.group() != Some(group) {
            return false;
        }

        f.set_group(None);
        if let Some(g) = self.groups.get_mut(group) {
            g.remove_member(field);
        }
        tracing::trace!(target: "fieldcap::arena", ?group, ?field, "removed field from group");
        true
    }

    // =========================================================================
    // Width Synchronization
    // =========================================================================

    /// Synchronize the caption widths of a group's live members.
    ///
    /// Returns the pre-padding maximum natural width, or `None` if the
    /// group handle is dead. See [`FieldGroup::sync_widths`] for the
    /// reduction semantics.
    pub fn sync_widths(&mut self, group: GroupId) -> Option<f32> {
        debug_assert_main_thread!();
        let g = self.groups.get_mut(group)?;
        Some(g.sync_widths(&mut self.fields))
    }

    /// Set a group's padding and re-synchronize. Returns `false` if the
    /// group handle is dead.
    pub fn set_group_padding(&mut self, group: GroupId, padding: f32) -> bool {
        debug_assert_main_thread!();
        let Some(g) = self.groups.get_mut(group) else {
            return false;
        };
        g.set_padding(padding);
        g.sync_widths(&mut self.fields);
        true
    }

    /// Set a field's caption text, cascading into its group.
    ///
    /// If the field is a group member, the group's widths are
    /// re-synchronized before this returns, so every sibling's caption
    /// width is authoritative immediately afterwards. Returns `false` if
    /// the field handle is dead.
    pub fn set_label_text(&mut self, field: FieldId, text: impl Into<String>) -> bool {
        debug_assert_main_thread!();
        let Some(f) = self.fields.get_mut(field) else {
            return false;
        };
        f.set_label_text(text);
        if let Some(group) = f.group() {
            self.sync_widths(group);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::{FixedAdvanceMeasure, Font, TextMeasure};
    use crate::geometry::Size;
    use crate::widget::field::LabelWidth;
    use std::collections::HashMap;

    /// Measures captions from a fixed table, for exact-width scenarios.
    struct TableMeasure(HashMap<&'static str, f32>);

    impl TableMeasure {
        fn new(entries: &[(&'static str, f32)]) -> Self {
            Self(entries.iter().copied().collect())
        }
    }

    impl TextMeasure for TableMeasure {
        fn measure(&self, text: &str, font: &Font) -> Size {
            let width = self.0.get(text).copied().unwrap_or(0.0);
            Size::new(width, font.line_height())
        }
    }

    fn arena_with_table(entries: &[(&'static str, f32)]) -> FieldArena {
        FieldArena::with_measure(Arc::new(TableMeasure::new(entries)))
    }

    fn arena_with_advance(advance: f32) -> FieldArena {
        FieldArena::with_measure(Arc::new(FixedAdvanceMeasure::new(advance)))
    }

    fn insert_labelled(arena: &mut FieldArena, label: &str) -> FieldId {
        let field = arena.new_field().with_label(label);
        arena.insert(field)
    }

    #[test]
    fn test_field_lifecycle() {
        let mut arena = arena_with_advance(6.0);
        assert!(arena.is_empty());

        let id = arena.create_field();
        assert!(arena.contains(id));
        assert_eq!(arena.len(), 1);

        let field = arena.remove(id);
        assert!(field.is_some());
        assert!(!arena.contains(id));
        assert!(arena.get(id).is_none());
        assert!(arena.remove(id).is_none());
    }

    #[test]
    fn test_removed_field_returns_ungrouped() {
        let mut arena = arena_with_advance(6.0);
        let id = arena.create_field();
        let group = arena.add_group(0.0);
        assert!(arena.group_add(group, id));

        let field = arena.remove(id).unwrap();
        assert!(field.group().is_none());
    }

    #[test]
    fn test_single_add_sets_back_reference_without_sync() {
        let mut arena = arena_with_advance(6.0);
        let a = insert_labelled(&mut arena, "ab");
        let group = arena.add_group(5.0);

        assert!(arena.group_add(group, a));
        assert_eq!(arena.get(a).unwrap().group(), Some(group));
        // No resync yet: the width policy is still the default auto-fit.
        assert!(arena.get(a).unwrap().label_width().is_auto());
    }

    #[test]
    fn test_add_rejects_already_grouped_field() {
        let mut arena = arena_with_advance(6.0);
        let a = insert_labelled(&mut arena, "ab");
        let group1 = arena.add_group(0.0);
        let group2 = arena.add_group(0.0);

        assert!(arena.group_add(group1, a));
        // A second add is rejected, whether to another group or this one.
        assert!(!arena.group_add(group2, a));
        assert!(!arena.group_add(group1, a));
        assert_eq!(arena.get(a).unwrap().group(), Some(group1));
    }

    #[test]
    fn test_add_rejects_dead_handles() {
        let mut arena = arena_with_advance(6.0);
        let a = arena.create_field();
        let group = arena.add_group(0.0);
        arena.remove(a);

        assert!(!arena.group_add(group, a));

        let b = arena.create_field();
        arena.remove_group(group);
        assert!(!arena.group_add(group, b));
    }

    #[test]
    fn test_batch_add_is_all_or_nothing() {
        let mut arena = arena_with_advance(6.0);
        let a = insert_labelled(&mut arena, "a");
        let b = insert_labelled(&mut arena, "b");
        let c = insert_labelled(&mut arena, "c");

        let group1 = arena.add_group(0.0);
        let group2 = arena.add_group(0.0);
        assert!(arena.group_add(group1, b));

        // B is already grouped: the whole batch fails, A and C stay free.
        assert!(!arena.group_add_all(group2, &[a, b, c]));
        assert!(arena.get(a).unwrap().group().is_none());
        assert!(arena.get(c).unwrap().group().is_none());
        assert!(arena.group(group2).unwrap().is_empty());
    }

    #[test]
    fn test_batch_add_syncs_once_on_success() {
        let mut arena = arena_with_table(&[("Red", 18.0), ("Green", 30.0), ("Blue", 22.0)]);
        let r = insert_labelled(&mut arena, "Red");
        let g = insert_labelled(&mut arena, "Green");
        let b = insert_labelled(&mut arena, "Blue");

        let group = arena.add_group(5.0);
        assert!(arena.group_add_all(group, &[r, g, b]));

        for id in [r, g, b] {
            assert_eq!(arena.get(id).unwrap().label_width(), LabelWidth::Fixed(35.0));
        }
    }

    #[test]
    fn test_sync_max_plus_padding_law() {
        let mut arena = arena_with_table(&[("one", 12.0), ("two", 20.0), ("three", 7.0)]);
        let ids: Vec<_> = ["one", "two", "three"]
            .iter()
            .map(|&label| insert_labelled(&mut arena, label))
            .collect();

        let group = arena.add_group(5.0);
        for &id in &ids {
            assert!(arena.group_add(group, id));
        }

        assert_eq!(arena.sync_widths(group), Some(20.0));
        for &id in &ids {
            assert_eq!(arena.get(id).unwrap().label_width(), LabelWidth::Fixed(25.0));
        }
    }

    #[test]
    fn test_sync_is_idempotent() {
        let mut arena = arena_with_table(&[("one", 12.0), ("two", 20.0)]);
        let a = insert_labelled(&mut arena, "one");
        let b = insert_labelled(&mut arena, "two");
        let group = arena.add_group(4.0);
        arena.group_add_all(group, &[a, b]);

        let first = arena.sync_widths(group);
        let widths_after_first: Vec<_> = [a, b]
            .iter()
            .map(|&id| arena.get(id).unwrap().label_width())
            .collect();

        let second = arena.sync_widths(group);
        let widths_after_second: Vec<_> = [a, b]
            .iter()
            .map(|&id| arena.get(id).unwrap().label_width())
            .collect();

        assert_eq!(first, second);
        assert_eq!(widths_after_first, widths_after_second);
    }

    #[test]
    fn test_sync_is_order_independent() {
        let labels = ["alpha", "beta", "gamma"];
        let table = [("alpha", 14.0), ("beta", 31.0), ("gamma", 9.0)];

        let orderings: [[usize; 3]; 3] = [[0, 1, 2], [2, 0, 1], [1, 2, 0]];
        let mut results = Vec::new();

        for order in orderings {
            let mut arena = arena_with_table(&table);
            let ids: Vec<_> = labels
                .iter()
                .map(|&label| insert_labelled(&mut arena, label))
                .collect();
            let group = arena.add_group(3.0);
            for &index in &order {
                assert!(arena.group_add(group, ids[index]));
            }
            results.push(arena.sync_widths(group).unwrap());
        }

        assert_eq!(results, vec![31.0, 31.0, 31.0]);
    }

    #[test]
    fn test_destroyed_member_degrades_silently() {
        let mut arena = arena_with_table(&[("long caption", 40.0), ("short", 10.0)]);
        let a = insert_labelled(&mut arena, "long caption");
        let b = insert_labelled(&mut arena, "short");
        let group = arena.add_group(0.0);
        arena.group_add_all(group, &[a, b]);
        assert_eq!(arena.sync_widths(group), Some(40.0));

        arena.remove(a);
        assert_eq!(arena.sync_widths(group), Some(10.0));
        assert_eq!(arena.get(b).unwrap().label_width(), LabelWidth::Fixed(10.0));
    }

    #[test]
    fn test_remove_from_group() {
        let mut arena = arena_with_advance(6.0);
        let a = insert_labelled(&mut arena, "ab");
        let group = arena.add_group(0.0);
        let other = arena.add_group(0.0);
        arena.group_add(group, a);

        // Not a member of `other`.
        assert!(!arena.group_remove(other, a));
        assert_eq!(arena.get(a).unwrap().group(), Some(group));

        assert!(arena.group_remove(group, a));
        assert!(arena.get(a).unwrap().group().is_none());
        assert!(!arena.group(group).unwrap().contains(a));

        // Removing twice is a no-op.
        assert!(!arena.group_remove(group, a));

        // The field can join a group again afterwards.
        assert!(arena.group_add(other, a));
    }

    #[test]
    fn test_remove_group_keeps_members() {
        let mut arena = arena_with_table(&[("a", 10.0), ("bb", 16.0)]);
        let a = insert_labelled(&mut arena, "a");
        let b = insert_labelled(&mut arena, "bb");
        let group = arena.add_group(2.0);
        arena.group_add_all(group, &[a, b]);

        assert!(arena.remove_group(group).is_some());
        assert!(arena.group(group).is_none());

        // Members survive, ungrouped, keeping the last synchronized width.
        for id in [a, b] {
            let field = arena.get(id).unwrap();
            assert!(field.group().is_none());
            assert_eq!(field.label_width(), LabelWidth::Fixed(18.0));
        }
    }

    #[test]
    fn test_padding_change_resyncs() {
        let mut arena = arena_with_table(&[("a", 10.0), ("bb", 16.0)]);
        let a = insert_labelled(&mut arena, "a");
        let b = insert_labelled(&mut arena, "bb");
        let group = arena.add_group(0.0);
        arena.group_add_all(group, &[a, b]);

        assert!(arena.set_group_padding(group, 8.0));
        for id in [a, b] {
            assert_eq!(arena.get(id).unwrap().label_width(), LabelWidth::Fixed(24.0));
        }
    }

    #[test]
    fn test_label_text_change_cascades_to_siblings() {
        let mut arena = arena_with_advance(6.0);
        let a = insert_labelled(&mut arena, "ab"); // 12
        let b = insert_labelled(&mut arena, "abc"); // 18
        let group = arena.add_group(0.0);
        arena.group_add_all(group, &[a, b]);
        assert_eq!(arena.get(a).unwrap().label_width(), LabelWidth::Fixed(18.0));

        // Growing A's caption re-synchronizes both before returning.
        assert!(arena.set_label_text(a, "abcdef")); // 36
        assert_eq!(arena.get(a).unwrap().label_width(), LabelWidth::Fixed(36.0));
        assert_eq!(arena.get(b).unwrap().label_width(), LabelWidth::Fixed(36.0));
    }

    #[test]
    fn test_label_text_on_standalone_field() {
        let mut arena = arena_with_advance(6.0);
        let a = insert_labelled(&mut arena, "ab");
        assert!(arena.set_label_text(a, "abcd"));
        // Standalone fields keep their auto-fit policy.
        assert!(arena.get(a).unwrap().label_width().is_auto());

        let dead = arena.create_field();
        arena.remove(dead);
        assert!(!arena.set_label_text(dead, "x"));
    }

    #[test]
    fn test_end_to_end_scenario() {
        // Fields R("Red"), G("Green"), B("Blue") with natural caption
        // widths 18, 30, 22 and a group padding of 5.
        let mut arena = arena_with_table(&[("Red", 18.0), ("Green", 30.0), ("Blue", 22.0)]);
        let r = insert_labelled(&mut arena, "Red");
        let g = insert_labelled(&mut arena, "Green");
        let b = insert_labelled(&mut arena, "Blue");

        let group = arena.add_group(5.0);
        assert!(arena.group_add_all(group, &[r, g, b]));

        assert_eq!(arena.sync_widths(group), Some(30.0));
        for id in [r, g, b] {
            assert_eq!(arena.get(id).unwrap().label_width(), LabelWidth::Fixed(35.0));
        }
    }
}
