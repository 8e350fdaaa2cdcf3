//! Query handlers for the world context.

use std::collections::BTreeMap;

use serde::Serialize;
use tabletop_core::error::DomainError;

use crate::domain::world::{Location, World};

/// One row of a roster listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharacterSummary {
    pub name: String,
    pub body: i32,
    pub max_body: i32,
    pub mind: i32,
    pub max_mind: i32,
}

/// One row of the item catalog listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemSummary {
    pub name: String,
    pub properties: BTreeMap<String, i32>,
}

/// Place names in display order.
#[must_use]
pub fn list_places(world: &World) -> Vec<String> {
    world.places.names().map(str::to_owned).collect()
}

/// Characters at `location` with their current and maximum vitals.
///
/// # Errors
///
/// Returns `DomainError::NotFound` if the place does not exist.
pub fn get_roster(
    world: &World,
    location: &Location,
) -> Result<Vec<CharacterSummary>, DomainError> {
    Ok(world
        .roster(location)?
        .characters
        .iter()
        .map(|character| CharacterSummary {
            name: character.name.clone(),
            body: character.body,
            max_body: character.max_body(),
            mind: character.mind,
            max_mind: character.max_mind(),
        })
        .collect())
}

/// The item catalog in display order.
#[must_use]
pub fn get_item_catalog(world: &World) -> Vec<ItemSummary> {
    world
        .items
        .iter()
        .map(|item| ItemSummary {
            name: item.name.clone(),
            properties: item.properties.clone(),
        })
        .collect()
}
