//! The world aggregate.

use std::fmt;

use serde::{Deserialize, Serialize};
use tabletop_character::domain::character::Character;
use tabletop_core::error::DomainError;
use tabletop_core::named::NamedList;
use tabletop_inventory::domain::item::Item;

use super::place::Place;

/// Name given to the party in a fresh world.
pub const PARTY_NAME: &str = "Party";

/// Which roster a character belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Location {
    /// The travelling party.
    Party,
    /// A place, by name.
    Place(String),
}

impl Location {
    /// Shorthand for `Location::Place`.
    #[must_use]
    pub fn place(name: impl Into<String>) -> Self {
        Location::Place(name.into())
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Party => f.write_str("party"),
            Location::Place(name) => write!(f, "place '{name}'"),
        }
    }
}

/// Everything a campaign persists: the party, every place, and the item
/// catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct World {
    /// The travelling party.
    pub party: Place,
    /// Known places in display order.
    pub places: NamedList<Place>,
    /// The item catalog.
    pub items: NamedList<Item>,
}

impl Default for World {
    fn default() -> Self {
        Self {
            party: Place::new(PARTY_NAME),
            places: NamedList::new(),
            items: NamedList::new(),
        }
    }
}

impl World {
    /// Creates an empty world with an empty party.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The place addressed by `location`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NotFound` for an unknown place.
    pub fn roster(&self, location: &Location) -> Result<&Place, DomainError> {
        match location {
            Location::Party => Ok(&self.party),
            Location::Place(name) => self.places.lookup(name),
        }
    }

    /// Mutable access to the place addressed by `location`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NotFound` for an unknown place.
    pub fn roster_mut(&mut self, location: &Location) -> Result<&mut Place, DomainError> {
        match location {
            Location::Party => Ok(&mut self.party),
            Location::Place(name) => self.places.lookup_mut(name),
        }
    }

    /// The character `name` at `location`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NotFound` if the place or character is unknown.
    pub fn character(&self, location: &Location, name: &str) -> Result<&Character, DomainError> {
        self.roster(location)?.characters.lookup(name)
    }

    /// Mutable access to the character `name` at `location`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NotFound` if the place or character is unknown.
    pub fn character_mut(
        &mut self,
        location: &Location,
        name: &str,
    ) -> Result<&mut Character, DomainError> {
        self.roster_mut(location)?.characters.lookup_mut(name)
    }

    /// Resolves every carried item in the world against the catalog.
    ///
    /// Returns how many instances resolved. Instances naming items missing
    /// from the catalog stay unresolved.
    pub fn link_items(&mut self) -> usize {
        let catalog = &self.items;
        let mut resolved = 0;
        for character in self.party.characters.iter_mut() {
            resolved += character.link_items(catalog);
        }
        for place in self.places.iter_mut() {
            for character in place.characters.iter_mut() {
                resolved += character.link_items(catalog);
            }
        }
        resolved
    }
}
