//! Character sheets.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tabletop_core::named::{NamedData, NamedList};
use tabletop_inventory::domain::item::{Item, ItemInstance};

use super::stats::{Stat, Stats};

/// Added to STR and NTU to get maximum body and mind.
pub const VITALS_BASE: i32 = 8;

/// A character sheet.
///
/// `body` and `mind` are the current pools. They are never clamped against
/// [`Character::max_body`] / [`Character::max_mind`]; stat changes leave them
/// untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Character {
    /// Unique name within the place that holds the character.
    pub name: String,
    /// Current body pool.
    pub body: i32,
    /// Current mind pool.
    pub mind: i32,
    /// The five core stats.
    pub stats: Stats,
    /// Skill ratings by skill name.
    pub skills: BTreeMap<String, i32>,
    /// Carried items.
    pub items: Vec<ItemInstance>,
}

impl Character {
    /// Creates a character with all stats at 0 and empty pools.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Builder-style stat block setter.
    #[must_use]
    pub fn with_stats(mut self, stats: Stats) -> Self {
        self.stats = stats;
        self
    }

    /// Builder-style variant of [`Character::fill_vitals`].
    #[must_use]
    pub fn filled(mut self) -> Self {
        self.fill_vitals();
        self
    }

    /// `STR + 8`, saturating at `i32::MAX`.
    #[must_use]
    pub fn max_body(&self) -> i32 {
        self.stats.strength.saturating_add(VITALS_BASE)
    }

    /// `NTU + 8`, saturating at `i32::MAX`.
    #[must_use]
    pub fn max_mind(&self) -> i32 {
        self.stats.intuition.saturating_add(VITALS_BASE)
    }

    /// Restores body and mind to their maxima.
    pub fn fill_vitals(&mut self) {
        self.body = self.max_body();
        self.mind = self.max_mind();
    }

    /// Value of `stat`.
    #[must_use]
    pub fn stat(&self, stat: Stat) -> i32 {
        self.stats.get(stat)
    }

    /// Sets `stat`. Vitals are left as they are.
    pub fn set_stat(&mut self, stat: Stat, value: i32) {
        self.stats.set(stat, value);
    }

    /// Sets the stat with code `code`. Rejected for an unknown code.
    pub fn set_stat_named(&mut self, code: &str, value: i32) -> bool {
        match Stat::from_code(code) {
            Some(stat) => {
                self.set_stat(stat, value);
                true
            }
            None => false,
        }
    }

    /// Sets the current body pool.
    pub fn set_body(&mut self, value: i32) {
        self.body = value;
    }

    /// Sets the current mind pool.
    pub fn set_mind(&mut self, value: i32) {
        self.mind = value;
    }

    /// Rating in `skill`, if the character has it.
    #[must_use]
    pub fn skill(&self, skill: &str) -> Option<i32> {
        self.skills.get(skill).copied()
    }

    /// Adds `skill` at 0.
    ///
    /// Rejected when the name is blank, shadows a stat code, or the skill
    /// already exists.
    pub fn add_skill(&mut self, skill: &str) -> bool {
        if !is_skill_name(skill) || self.skills.contains_key(skill) {
            return false;
        }
        self.skills.insert(skill.to_owned(), 0);
        true
    }

    /// Sets `skill` to `value`, adding it if needed.
    ///
    /// Rejected when the name is blank or shadows a stat code.
    pub fn set_skill(&mut self, skill: &str, value: i32) -> bool {
        if !is_skill_name(skill) {
            return false;
        }
        self.skills.insert(skill.to_owned(), value);
        true
    }

    /// Removes `skill`, returning whether it existed.
    pub fn remove_skill(&mut self, skill: &str) -> bool {
        self.skills.remove(skill).is_some()
    }

    /// Hands the character an item. Rejected for a blank item name or a
    /// non-positive quantity.
    pub fn give_item(&mut self, instance: ItemInstance) -> bool {
        if instance.name.trim().is_empty() || instance.quantity <= 0 {
            return false;
        }
        self.items.push(instance);
        true
    }

    /// Removes and returns the first carried item called `name`.
    pub fn take_item(&mut self, name: &str) -> Option<ItemInstance> {
        let index = self.items.iter().position(|item| item.name == name)?;
        Some(self.items.remove(index))
    }

    /// Resolves every carried item against `catalog`; returns how many
    /// resolved.
    pub fn link_items(&mut self, catalog: &NamedList<Item>) -> usize {
        self.items
            .iter_mut()
            .map(|instance| instance.link(catalog))
            .filter(|resolved| *resolved)
            .count()
    }
}

fn is_skill_name(name: &str) -> bool {
    !name.trim().is_empty() && Stat::from_code(name).is_none()
}

impl NamedData for Character {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }
}

#[cfg(test)]
mod tests {
    use tabletop_inventory::domain::item::DURABILITY;

    use super::*;

    fn aria() -> Character {
        Character::new("Aria").with_stats(Stats::new(5, 5, 5, 5, 5))
    }

    #[test]
    fn test_new_character_has_zeroed_stats() {
        let character = Character::new("Nobody");

        for stat in Stat::ALL {
            assert_eq!(character.stat(stat), 0);
        }
        assert_eq!(character.max_body(), 8);
        assert_eq!(character.max_mind(), 8);
    }

    #[test]
    fn test_fill_vitals_uses_derived_maxima() {
        let character = aria().filled();

        assert_eq!(character.body, 13);
        assert_eq!(character.mind, 13);
    }

    #[test]
    fn test_derived_vitals_track_stats_without_clamping_pools() {
        // Arrange
        let mut character = aria().filled();

        // Act
        character.set_stat(Stat::Str, 2);
        character.set_stat(Stat::Ntu, 9);

        // Assert
        assert_eq!(character.max_body(), 10);
        assert_eq!(character.max_mind(), 17);
        assert_eq!(character.body, 13);
        assert_eq!(character.mind, 13);
    }

    #[test]
    fn test_pools_accept_values_beyond_maxima() {
        let mut character = aria();

        character.set_body(99);
        character.set_mind(-4);

        assert_eq!(character.body, 99);
        assert_eq!(character.mind, -4);
    }

    #[test]
    fn test_set_stat_named_rejects_unknown_code() {
        let mut character = aria();

        assert!(character.set_stat_named("DEX", 7));
        assert!(!character.set_stat_named("LCK", 7));
        assert_eq!(character.stat(Stat::Dex), 7);
    }

    #[test]
    fn test_add_skill_rejects_duplicates_and_stat_codes() {
        let mut character = aria();

        assert!(character.add_skill("Climbing"));
        assert!(!character.add_skill("Climbing"));
        assert!(!character.add_skill("STR"));
        assert!(!character.add_skill(""));
        assert_eq!(character.skill("Climbing"), Some(0));
    }

    #[test]
    fn test_set_and_remove_skill() {
        let mut character = aria();

        assert!(character.set_skill("Haggling", 3));
        assert!(!character.set_skill("NTU", 3));
        assert_eq!(character.skill("Haggling"), Some(3));
        assert!(character.remove_skill("Haggling"));
        assert!(!character.remove_skill("Haggling"));
    }

    #[test]
    fn test_give_and_take_item() {
        let mut character = aria();

        assert!(character.give_item(ItemInstance::new("Sword", 1, 10)));
        assert!(!character.give_item(ItemInstance::new("Sword", 0, 10)));
        assert!(!character.give_item(ItemInstance::new(" ", 1, 10)));

        let taken = character.take_item("Sword").unwrap();
        assert_eq!(taken.durability, 10);
        assert!(character.take_item("Sword").is_none());
    }

    #[test]
    fn test_link_items_counts_resolved_instances() {
        let catalog: NamedList<Item> = [Item::new("Sword").with_property(DURABILITY, 10)]
            .into_iter()
            .collect();
        let mut character = aria();
        character.give_item(ItemInstance::new("Sword", 1, 10));
        character.give_item(ItemInstance::new("Relic", 1, 1));

        assert_eq!(character.link_items(&catalog), 1);
        assert_eq!(character.items[0].max_durability(), 10);
        assert!(!character.items[1].is_resolved());
    }

    #[test]
    fn test_deserializes_with_defaults_and_ignores_unknown_fields() {
        let json = serde_json::json!({
            "name": "Bram",
            "body": 4,
            "stats": {"STR": 6},
            "portrait": "bram.png"
        });

        let character: Character = serde_json::from_value(json).unwrap();

        assert_eq!(character.name, "Bram");
        assert_eq!(character.body, 4);
        assert_eq!(character.mind, 0);
        assert_eq!(character.stat(Stat::Str), 6);
        assert!(character.skills.is_empty());
        assert!(character.items.is_empty());
    }

    #[test]
    fn test_maxima_saturate_for_extreme_stats() {
        let mut character = Character::new("Giant");
        character.set_stat(Stat::Str, i32::MAX);
        character.set_stat(Stat::Ntu, i32::MAX - 3);

        character.fill_vitals();

        assert_eq!(character.max_body(), i32::MAX);
        assert_eq!(character.max_mind(), i32::MAX);
        assert_eq!(character.body, i32::MAX);
    }
}
