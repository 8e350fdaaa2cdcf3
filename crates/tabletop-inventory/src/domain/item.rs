//! Item definitions and carried instances.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tabletop_core::named::{NamedData, NamedList};
use tracing::debug;

/// Property holding an item's maximum durability.
pub const DURABILITY: &str = "Durability";

/// A catalog entry describing a kind of item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Item {
    /// Catalog key.
    pub name: String,
    /// Named integer properties, e.g. `Durability`.
    pub properties: BTreeMap<String, i32>,
}

impl Item {
    /// Creates an item with no properties.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: BTreeMap::new(),
        }
    }

    /// Builder-style property setter.
    #[must_use]
    pub fn with_property(mut self, property: impl Into<String>, value: i32) -> Self {
        self.properties.insert(property.into(), value);
        self
    }

    /// Value of `property`, if set.
    #[must_use]
    pub fn property(&self, property: &str) -> Option<i32> {
        self.properties.get(property).copied()
    }

    /// Adds `property` at 0. Rejected if blank or already present.
    pub fn add_property(&mut self, property: &str) -> bool {
        if property.trim().is_empty() || self.properties.contains_key(property) {
            return false;
        }
        self.properties.insert(property.to_owned(), 0);
        true
    }

    /// Sets `property` to `value`, creating it if needed. Rejected if blank.
    pub fn set_property(&mut self, property: &str, value: i32) -> bool {
        if property.trim().is_empty() {
            return false;
        }
        self.properties.insert(property.to_owned(), value);
        true
    }

    /// Removes `property`, returning whether it existed.
    pub fn remove_property(&mut self, property: &str) -> bool {
        self.properties.remove(property).is_some()
    }
}

impl NamedData for Item {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }
}

/// A quantity of some item carried by a character.
///
/// `definition` is resolved from the catalog by name after load and is not
/// persisted; an instance whose name is missing from the catalog simply
/// stays unresolved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemInstance {
    /// Name of the catalog entry this instance refers to.
    pub name: String,
    /// How many are carried.
    pub quantity: i32,
    /// Remaining durability.
    pub durability: i32,
    #[serde(skip)]
    definition: Option<Item>,
}

impl ItemInstance {
    /// Creates an unresolved instance.
    #[must_use]
    pub fn new(name: impl Into<String>, quantity: i32, durability: i32) -> Self {
        Self {
            name: name.into(),
            quantity,
            durability,
            definition: None,
        }
    }

    /// The resolved catalog definition, if any.
    #[must_use]
    pub fn definition(&self) -> Option<&Item> {
        self.definition.as_ref()
    }

    /// Whether the instance has been resolved against a catalog.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.definition.is_some()
    }

    /// Maximum durability from the definition; 0 when unresolved or unset.
    #[must_use]
    pub fn max_durability(&self) -> i32 {
        self.definition
            .as_ref()
            .and_then(|item| item.property(DURABILITY))
            .unwrap_or(0)
    }

    /// Resolves this instance against `catalog` by name.
    ///
    /// Returns whether a definition was found. A miss clears any stale
    /// definition.
    pub fn link(&mut self, catalog: &NamedList<Item>) -> bool {
        self.definition = catalog.get(&self.name).cloned();
        if self.definition.is_none() {
            debug!(item = %self.name, "item instance left unresolved");
        }
        self.definition.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> NamedList<Item> {
        [
            Item::new("Sword").with_property(DURABILITY, 10),
            Item::new("Rope"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_link_resolves_definition_by_name() {
        // Arrange
        let mut sword = ItemInstance::new("Sword", 1, 7);

        // Act
        let resolved = sword.link(&catalog());

        // Assert
        assert!(resolved);
        assert!(sword.is_resolved());
        assert_eq!(sword.max_durability(), 10);
        assert_eq!(sword.definition().unwrap().name, "Sword");
    }

    #[test]
    fn test_link_leaves_unknown_instance_unresolved() {
        let mut relic = ItemInstance::new("Relic", 1, 3);

        assert!(!relic.link(&catalog()));
        assert!(!relic.is_resolved());
        assert_eq!(relic.max_durability(), 0);
    }

    #[test]
    fn test_relink_clears_definition_removed_from_catalog() {
        let mut sword = ItemInstance::new("Sword", 1, 7);
        sword.link(&catalog());

        let mut catalog = catalog();
        catalog.remove("Sword");
        sword.link(&catalog);

        assert!(!sword.is_resolved());
    }

    #[test]
    fn test_max_durability_defaults_to_zero_without_property() {
        let mut rope = ItemInstance::new("Rope", 3, 0);
        rope.link(&catalog());

        assert!(rope.is_resolved());
        assert_eq!(rope.max_durability(), 0);
    }

    #[test]
    fn test_property_mutations_report_acceptance() {
        let mut item = Item::new("Shield");

        assert!(item.add_property(DURABILITY));
        assert!(!item.add_property(DURABILITY));
        assert!(!item.add_property(" "));
        assert!(item.set_property(DURABILITY, 12));
        assert_eq!(item.property(DURABILITY), Some(12));
        assert!(item.remove_property(DURABILITY));
        assert!(!item.remove_property(DURABILITY));
    }

    #[test]
    fn test_definition_is_not_serialized() {
        let mut sword = ItemInstance::new("Sword", 2, 9);
        sword.link(&catalog());

        let json = serde_json::to_value(&sword).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"name": "Sword", "quantity": 2, "durability": 9})
        );
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let json = serde_json::json!({
            "name": "Sword",
            "properties": {"Durability": 10},
            "rarity": "legendary"
        });

        let item: Item = serde_json::from_value(json).unwrap();

        assert_eq!(item, Item::new("Sword").with_property(DURABILITY, 10));
    }
}
