//! Places and the characters in them.

use serde::{Deserialize, Serialize};
use tabletop_character::domain::character::Character;
use tabletop_core::named::{NamedData, NamedList};

/// A named location holding characters. The party is a place too.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Place {
    /// Unique name among places.
    pub name: String,
    /// Characters present, in display order.
    pub characters: NamedList<Character>,
}

impl Place {
    /// Creates an empty place.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            characters: NamedList::new(),
        }
    }

    /// Builder-style character upsert.
    #[must_use]
    pub fn with_character(mut self, character: Character) -> Self {
        self.characters.add(character);
        self
    }
}

impl NamedData for Place {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }
}
