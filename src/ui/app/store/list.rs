use std::ops::Deref;

use crate::domain::{Identified, RecordId};

/// Ordered records owned by a slice.
///
/// Server order is kept until a mutation changes it: a fetch replaces the
/// whole list, a create appends, a delete filters by id, an update swaps the
/// matching element in place.
#[derive(Debug, Clone, PartialEq)]
pub struct ListCollection<T>(Vec<T>);

impl<T> Default for ListCollection<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T> From<Vec<T>> for ListCollection<T> {
    fn from(items: Vec<T>) -> Self {
        Self(items)
    }
}

impl<T> Deref for ListCollection<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.0
    }
}

impl<T> ListCollection<T> {
    pub fn replace_all(&mut self, items: Vec<T>) {
        self.0 = items;
    }

    /// Appends without checking the id; a record the backend returned without
    /// one is still listed.
    pub fn push(&mut self, item: T) {
        self.0.push(item);
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl<T: Identified> ListCollection<T> {
    /// Drop every element with this id. Returns how many were removed; zero
    /// leaves the list untouched.
    pub fn remove_by_id(&mut self, id: RecordId) -> usize {
        let before = self.0.len();
        self.0.retain(|item| item.record_id() != Some(id));
        before - self.0.len()
    }

    /// Swap the element carrying `item`'s id for `item`. Returns false when
    /// there is no such element or `item` has no id.
    pub fn replace_in_place(&mut self, item: T) -> bool {
        let Some(id) = item.record_id() else {
            return false;
        };
        match self.0.iter().position(|existing| existing.record_id() == Some(id)) {
            Some(idx) => {
                self.0[idx] = item;
                true
            }
            None => false,
        }
    }

    pub fn get_by_id(&self, id: RecordId) -> Option<&T> {
        self.0.iter().find(|item| item.record_id() == Some(id))
    }

    pub fn contains_id(&self, id: RecordId) -> bool {
        self.get_by_id(id).is_some()
    }

    pub fn get_by_id_mut(&mut self, id: RecordId) -> Option<&mut T> {
        self.0.iter_mut().find(|item| item.record_id() == Some(id))
    }
}
