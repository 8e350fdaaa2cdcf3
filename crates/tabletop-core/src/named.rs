//! Name-keyed entity store.
//!
//! Characters, items and places are all identified by a unique name. A
//! `NamedList` keeps them in insertion order and upserts by name, so a
//! duplicate can never be introduced through `add`.

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::error::DomainError;

/// An entity keyed by its name.
pub trait NamedData {
    /// Returns the entity's key.
    fn name(&self) -> &str;

    /// Replaces the entity's key.
    ///
    /// Entries held in a `NamedList` must be renamed through
    /// [`NamedList::rename`], which guards uniqueness.
    fn set_name(&mut self, name: String);
}

/// An insertion-ordered collection with at most one entry per name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedList<T> {
    entries: Vec<T>,
}

impl<T> Default for NamedList<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T: NamedData> NamedList<T> {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Position of the entry called `name`, if any.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.name() == name)
    }

    /// Whether an entry called `name` exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Inserts `entry`, replacing an existing entry of the same name in place.
    ///
    /// Returns the replaced entry. A new name is appended at the end.
    pub fn add(&mut self, entry: T) -> Option<T> {
        match self.position(entry.name()) {
            Some(index) => Some(std::mem::replace(&mut self.entries[index], entry)),
            None => {
                self.entries.push(entry);
                None
            }
        }
    }

    /// Removes the entry called `name`, returning whether one was found.
    pub fn remove(&mut self, name: &str) -> bool {
        self.take(name).is_some()
    }

    /// Removes and returns the entry called `name`.
    pub fn take(&mut self, name: &str) -> Option<T> {
        self.position(name).map(|index| self.entries.remove(index))
    }

    /// Probes for the entry called `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&T> {
        self.entries.iter().find(|entry| entry.name() == name)
    }

    /// Probes mutably for the entry called `name`.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut T> {
        self.entries.iter_mut().find(|entry| entry.name() == name)
    }

    /// Indexed access by name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NotFound` if no entry is called `name`.
    pub fn lookup(&self, name: &str) -> Result<&T, DomainError> {
        self.get(name).ok_or_else(|| not_found(name))
    }

    /// Mutable indexed access by name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NotFound` if no entry is called `name`.
    pub fn lookup_mut(&mut self, name: &str) -> Result<&mut T, DomainError> {
        self.get_mut(name).ok_or_else(|| not_found(name))
    }

    /// Renames the entry `from` to `to` without moving it.
    ///
    /// Rejected when `to` is blank, `from` is absent, or `to` is already
    /// taken by another entry.
    pub fn rename(&mut self, from: &str, to: &str) -> bool {
        if to.trim().is_empty() {
            return false;
        }
        let Some(index) = self.position(from) else {
            return false;
        };
        if from == to {
            return true;
        }
        if self.contains(to) {
            return false;
        }
        self.entries[index].set_name(to.to_owned());
        true
    }

    /// Entry names in list order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(NamedData::name)
    }

    /// Iterates entries in list order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }

    /// Iterates entries mutably in list order.
    ///
    /// Names must not be changed through this iterator.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.entries.iter_mut()
    }
}

fn not_found(name: &str) -> DomainError {
    DomainError::NotFound(format!("no entry named '{name}'"))
}

impl<T: NamedData> FromIterator<T> for NamedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T: NamedData> Extend<T> for NamedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for entry in iter {
            self.add(entry);
        }
    }
}

impl<'a, T> IntoIterator for &'a NamedList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut NamedList<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter_mut()
    }
}

impl<T: Serialize> Serialize for NamedList<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.entries)
    }
}

impl<'de, T> Deserialize<'de> for NamedList<T>
where
    T: Deserialize<'de> + NamedData,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Folding through `add` keeps the uniqueness invariant for
        // hand-edited documents.
        Vec::<T>::deserialize(deserializer).map(|entries| entries.into_iter().collect())
    }
}
