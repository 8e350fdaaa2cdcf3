//! Commands for the world context.
//!
//! Each command is one discrete user action. Handlers report whether the
//! mutation was accepted so the presentation layer can react.

use tabletop_character::domain::character::Character;
use tabletop_core::command::Command;
use uuid::Uuid;

use super::world::Location;

/// A character's current pools.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vital {
    /// Physical pool, maximum `STR + 8`.
    Body,
    /// Mental pool, maximum `NTU + 8`.
    Mind,
}

/// Command to create an empty place.
#[derive(Debug, Clone)]
pub struct CreatePlace {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Name of the new place.
    pub name: String,
}

impl Command for CreatePlace {
    fn command_type(&self) -> &'static str {
        "world.create_place"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to remove a place and everyone in it.
#[derive(Debug, Clone)]
pub struct RemovePlace {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Name of the place.
    pub name: String,
}

impl Command for RemovePlace {
    fn command_type(&self) -> &'static str {
        "world.remove_place"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to rename a place.
#[derive(Debug, Clone)]
pub struct RenamePlace {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Current name.
    pub from: String,
    /// New name.
    pub to: String,
}

impl Command for RenamePlace {
    fn command_type(&self) -> &'static str {
        "world.rename_place"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to put a character into a roster, replacing any namesake.
#[derive(Debug, Clone)]
pub struct AddCharacter {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Target roster.
    pub location: Location,
    /// The character sheet.
    pub character: Character,
}

impl Command for AddCharacter {
    fn command_type(&self) -> &'static str {
        "world.add_character"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to remove a character from a roster.
#[derive(Debug, Clone)]
pub struct RemoveCharacter {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Roster holding the character.
    pub location: Location,
    /// Character name.
    pub name: String,
}

impl Command for RemoveCharacter {
    fn command_type(&self) -> &'static str {
        "world.remove_character"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to rename a character within its roster.
#[derive(Debug, Clone)]
pub struct RenameCharacter {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Roster holding the character.
    pub location: Location,
    /// Current name.
    pub from: String,
    /// New name.
    pub to: String,
}

impl Command for RenameCharacter {
    fn command_type(&self) -> &'static str {
        "world.rename_character"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to change one of a character's stats.
#[derive(Debug, Clone)]
pub struct SetStat {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Roster holding the character.
    pub location: Location,
    /// Character name.
    pub character: String,
    /// Stat code, e.g. `DEX`.
    pub stat: String,
    /// The new value.
    pub value: i32,
}

impl Command for SetStat {
    fn command_type(&self) -> &'static str {
        "world.set_stat"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to change a character's current body or mind pool.
#[derive(Debug, Clone)]
pub struct SetVital {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Roster holding the character.
    pub location: Location,
    /// Character name.
    pub character: String,
    /// Which pool.
    pub vital: Vital,
    /// The new value.
    pub value: i32,
}

impl Command for SetVital {
    fn command_type(&self) -> &'static str {
        "world.set_vital"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to give a character a new skill at 0.
#[derive(Debug, Clone)]
pub struct AddSkill {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Roster holding the character.
    pub location: Location,
    /// Character name.
    pub character: String,
    /// Skill name.
    pub skill: String,
}

impl Command for AddSkill {
    fn command_type(&self) -> &'static str {
        "world.add_skill"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to set a character's skill rating.
#[derive(Debug, Clone)]
pub struct SetSkill {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Roster holding the character.
    pub location: Location,
    /// Character name.
    pub character: String,
    /// Skill name.
    pub skill: String,
    /// The new rating.
    pub value: i32,
}

impl Command for SetSkill {
    fn command_type(&self) -> &'static str {
        "world.set_skill"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to drop a skill from a character.
#[derive(Debug, Clone)]
pub struct RemoveSkill {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Roster holding the character.
    pub location: Location,
    /// Character name.
    pub character: String,
    /// Skill name.
    pub skill: String,
}

impl Command for RemoveSkill {
    fn command_type(&self) -> &'static str {
        "world.remove_skill"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to hand a character some of a catalog item.
#[derive(Debug, Clone)]
pub struct GiveItem {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Roster holding the character.
    pub location: Location,
    /// Character name.
    pub character: String,
    /// Catalog item name.
    pub item: String,
    /// How many.
    pub quantity: i32,
}

impl Command for GiveItem {
    fn command_type(&self) -> &'static str {
        "world.give_item"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to take an item away from a character.
#[derive(Debug, Clone)]
pub struct TakeItem {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Roster holding the character.
    pub location: Location,
    /// Character name.
    pub character: String,
    /// Carried item name.
    pub item: String,
}

impl Command for TakeItem {
    fn command_type(&self) -> &'static str {
        "world.take_item"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to add an item to the catalog.
#[derive(Debug, Clone)]
pub struct CreateItem {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Name of the new item.
    pub name: String,
}

impl Command for CreateItem {
    fn command_type(&self) -> &'static str {
        "world.create_item"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to drop an item from the catalog.
#[derive(Debug, Clone)]
pub struct RemoveItem {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Catalog item name.
    pub name: String,
}

impl Command for RemoveItem {
    fn command_type(&self) -> &'static str {
        "world.remove_item"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to rename a catalog item.
#[derive(Debug, Clone)]
pub struct RenameItem {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Current name.
    pub from: String,
    /// New name.
    pub to: String,
}

impl Command for RenameItem {
    fn command_type(&self) -> &'static str {
        "world.rename_item"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to set a property on a catalog item.
#[derive(Debug, Clone)]
pub struct SetItemProperty {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Catalog item name.
    pub item: String,
    /// Property name, e.g. `Durability`.
    pub property: String,
    /// The new value.
    pub value: i32,
}

impl Command for SetItemProperty {
    fn command_type(&self) -> &'static str {
        "world.set_item_property"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to drop a property from a catalog item.
#[derive(Debug, Clone)]
pub struct RemoveItemProperty {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Catalog item name.
    pub item: String,
    /// Property name.
    pub property: String,
}

impl Command for RemoveItemProperty {
    fn command_type(&self) -> &'static str {
        "world.remove_item_property"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
