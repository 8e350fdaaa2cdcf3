//! Command handlers for the world context.
//!
//! Every handler applies one command to the world and reports whether the
//! mutation was accepted. Errors are reserved for commands whose target does
//! not exist or whose input is malformed; a well-formed but refused mutation
//! (a duplicate skill, a taken name) yields `Ok(false)`.

use tabletop_core::command::Command;
use tabletop_core::error::DomainError;
use tabletop_inventory::domain::item::{DURABILITY, Item, ItemInstance};
use tracing::{debug, info};

use crate::domain::commands::{
    AddCharacter, AddSkill, CreateItem, CreatePlace, GiveItem, RemoveCharacter, RemoveItem,
    RemoveItemProperty, RemovePlace, RemoveSkill, RenameCharacter, RenameItem, RenamePlace,
    SetItemProperty, SetSkill, SetStat, SetVital, TakeItem, Vital,
};
use crate::domain::place::Place;
use crate::domain::world::World;

fn outcome(command: &impl Command, accepted: bool) -> bool {
    if accepted {
        info!(
            correlation_id = %command.correlation_id(),
            command = command.command_type(),
            "command accepted"
        );
    } else {
        debug!(
            correlation_id = %command.correlation_id(),
            command = command.command_type(),
            "command rejected"
        );
    }
    accepted
}

fn require_name(name: &str, what: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::Validation(format!("{what} name must not be empty")));
    }
    Ok(())
}

/// Catalog edits can change what carried items resolve to.
fn relink(world: &mut World) {
    let resolved = world.link_items();
    debug!(resolved, "relinked carried items");
}

/// Handles the `CreatePlace` command. Refused if the name is taken.
///
/// # Errors
///
/// Returns `DomainError::Validation` if the name is blank.
pub fn handle_create_place(command: &CreatePlace, world: &mut World) -> Result<bool, DomainError> {
    require_name(&command.name, "place")?;
    let accepted = !world.places.contains(&command.name);
    if accepted {
        world.places.add(Place::new(command.name.clone()));
    }
    Ok(outcome(command, accepted))
}

/// Handles the `RemovePlace` command. Refused if no such place exists.
///
/// # Errors
///
/// Does not currently fail.
pub fn handle_remove_place(command: &RemovePlace, world: &mut World) -> Result<bool, DomainError> {
    let accepted = world.places.remove(&command.name);
    Ok(outcome(command, accepted))
}

/// Handles the `RenamePlace` command. Refused on a blank or taken name.
///
/// # Errors
///
/// Returns `DomainError::NotFound` if the place does not exist.
pub fn handle_rename_place(command: &RenamePlace, world: &mut World) -> Result<bool, DomainError> {
    world.places.lookup(&command.from)?;
    let accepted = world.places.rename(&command.from, &command.to);
    Ok(outcome(command, accepted))
}

/// Handles the `AddCharacter` command: links the character's items against
/// the catalog and upserts it into the roster.
///
/// # Errors
///
/// Returns `DomainError::Validation` if the character name is blank, or
/// `DomainError::NotFound` if the roster does not exist.
pub fn handle_add_character(
    command: &AddCharacter,
    world: &mut World,
) -> Result<bool, DomainError> {
    require_name(&command.character.name, "character")?;
    let mut character = command.character.clone();
    character.link_items(&world.items);
    let replaced = world
        .roster_mut(&command.location)?
        .characters
        .add(character)
        .is_some();
    if replaced {
        debug!(
            location = %command.location,
            character = %command.character.name,
            "replaced existing character"
        );
    }
    Ok(outcome(command, true))
}

/// Handles the `RemoveCharacter` command. Refused if nobody has that name.
///
/// # Errors
///
/// Returns `DomainError::NotFound` if the roster does not exist.
pub fn handle_remove_character(
    command: &RemoveCharacter,
    world: &mut World,
) -> Result<bool, DomainError> {
    let accepted = world
        .roster_mut(&command.location)?
        .characters
        .remove(&command.name);
    Ok(outcome(command, accepted))
}

/// Handles the `RenameCharacter` command. Refused on a blank or taken name.
///
/// # Errors
///
/// Returns `DomainError::NotFound` if the roster or character does not exist.
pub fn handle_rename_character(
    command: &RenameCharacter,
    world: &mut World,
) -> Result<bool, DomainError> {
    let roster = world.roster_mut(&command.location)?;
    roster.characters.lookup(&command.from)?;
    let accepted = roster.characters.rename(&command.from, &command.to);
    Ok(outcome(command, accepted))
}

/// Handles the `SetStat` command. Refused for an unknown stat code.
///
/// # Errors
///
/// Returns `DomainError::NotFound` if the roster or character does not exist.
pub fn handle_set_stat(command: &SetStat, world: &mut World) -> Result<bool, DomainError> {
    let accepted = world
        .character_mut(&command.location, &command.character)?
        .set_stat_named(&command.stat, command.value);
    Ok(outcome(command, accepted))
}

/// Handles the `SetVital` command. Pools are not clamped.
///
/// # Errors
///
/// Returns `DomainError::NotFound` if the roster or character does not exist.
pub fn handle_set_vital(command: &SetVital, world: &mut World) -> Result<bool, DomainError> {
    let character = world.character_mut(&command.location, &command.character)?;
    match command.vital {
        Vital::Body => character.set_body(command.value),
        Vital::Mind => character.set_mind(command.value),
    }
    Ok(outcome(command, true))
}

/// Handles the `AddSkill` command.
///
/// # Errors
///
/// Returns `DomainError::NotFound` if the roster or character does not exist.
pub fn handle_add_skill(command: &AddSkill, world: &mut World) -> Result<bool, DomainError> {
    let accepted = world
        .character_mut(&command.location, &command.character)?
        .add_skill(&command.skill);
    Ok(outcome(command, accepted))
}

/// Handles the `SetSkill` command.
///
/// # Errors
///
/// Returns `DomainError::NotFound` if the roster or character does not exist.
pub fn handle_set_skill(command: &SetSkill, world: &mut World) -> Result<bool, DomainError> {
    let accepted = world
        .character_mut(&command.location, &command.character)?
        .set_skill(&command.skill, command.value);
    Ok(outcome(command, accepted))
}

/// Handles the `RemoveSkill` command.
///
/// # Errors
///
/// Returns `DomainError::NotFound` if the roster or character does not exist.
pub fn handle_remove_skill(command: &RemoveSkill, world: &mut World) -> Result<bool, DomainError> {
    let accepted = world
        .character_mut(&command.location, &command.character)?
        .remove_skill(&command.skill);
    Ok(outcome(command, accepted))
}

/// Handles the `GiveItem` command: creates an instance at the catalog item's
/// full durability, already linked.
///
/// # Errors
///
/// Returns `DomainError::NotFound` if the item is not in the catalog or the
/// roster or character does not exist.
pub fn handle_give_item(command: &GiveItem, world: &mut World) -> Result<bool, DomainError> {
    let durability = world
        .items
        .lookup(&command.item)?
        .property(DURABILITY)
        .unwrap_or(0);
    let mut instance = ItemInstance::new(command.item.clone(), command.quantity, durability);
    instance.link(&world.items);
    let accepted = world
        .character_mut(&command.location, &command.character)?
        .give_item(instance);
    Ok(outcome(command, accepted))
}

/// Handles the `TakeItem` command. Refused if the character carries no such
/// item.
///
/// # Errors
///
/// Returns `DomainError::NotFound` if the roster or character does not exist.
pub fn handle_take_item(command: &TakeItem, world: &mut World) -> Result<bool, DomainError> {
    let accepted = world
        .character_mut(&command.location, &command.character)?
        .take_item(&command.item)
        .is_some();
    Ok(outcome(command, accepted))
}

/// Handles the `CreateItem` command. Refused if the name is taken.
///
/// # Errors
///
/// Returns `DomainError::Validation` if the name is blank.
pub fn handle_create_item(command: &CreateItem, world: &mut World) -> Result<bool, DomainError> {
    require_name(&command.name, "item")?;
    let accepted = !world.items.contains(&command.name);
    if accepted {
        world.items.add(Item::new(command.name.clone()));
        relink(world);
    }
    Ok(outcome(command, accepted))
}

/// Handles the `RemoveItem` command. Carried instances become unresolved.
///
/// # Errors
///
/// Does not currently fail.
pub fn handle_remove_item(command: &RemoveItem, world: &mut World) -> Result<bool, DomainError> {
    let accepted = world.items.remove(&command.name);
    if accepted {
        relink(world);
    }
    Ok(outcome(command, accepted))
}

/// Handles the `RenameItem` command. Carried instances keep their names, so
/// they resolve against whatever the catalog now holds under that name.
///
/// # Errors
///
/// Returns `DomainError::NotFound` if the item does not exist.
pub fn handle_rename_item(command: &RenameItem, world: &mut World) -> Result<bool, DomainError> {
    world.items.lookup(&command.from)?;
    let accepted = world.items.rename(&command.from, &command.to);
    if accepted {
        relink(world);
    }
    Ok(outcome(command, accepted))
}

/// Handles the `SetItemProperty` command. Refused for a blank property name.
///
/// # Errors
///
/// Returns `DomainError::NotFound` if the item does not exist.
pub fn handle_set_item_property(
    command: &SetItemProperty,
    world: &mut World,
) -> Result<bool, DomainError> {
    let accepted = world
        .items
        .lookup_mut(&command.item)?
        .set_property(&command.property, command.value);
    if accepted {
        relink(world);
    }
    Ok(outcome(command, accepted))
}

/// Handles the `RemoveItemProperty` command. Refused if the property is not
/// set.
///
/// # Errors
///
/// Returns `DomainError::NotFound` if the item does not exist.
pub fn handle_remove_item_property(
    command: &RemoveItemProperty,
    world: &mut World,
) -> Result<bool, DomainError> {
    let accepted = world
        .items
        .lookup_mut(&command.item)?
        .remove_property(&command.property);
    if accepted {
        relink(world);
    }
    Ok(outcome(command, accepted))
}
