//! Command handlers for the character context.

use tabletop_core::error::DomainError;
use tabletop_core::rng::DeterministicRng;
use tracing::info;

use crate::domain::archetypes::archetype;
use crate::domain::character::Character;
use crate::domain::commands::GenerateCharacter;
use crate::domain::names::NameTables;

/// Handles the `GenerateCharacter` command: looks up the archetype and rolls
/// a new character with full vitals. The caller decides where it goes.
///
/// # Errors
///
/// Returns `DomainError::Validation` if the archetype name is blank, or
/// `DomainError::NotFound` if no archetype has that name.
pub fn handle_generate_character(
    command: &GenerateCharacter,
    names: &NameTables,
    rng: &mut dyn DeterministicRng,
) -> Result<Character, DomainError> {
    if command.archetype.trim().is_empty() {
        return Err(DomainError::Validation(
            "archetype name must not be empty".into(),
        ));
    }

    let recipe = archetype(&command.archetype)
        .ok_or_else(|| DomainError::NotFound(format!("archetype '{}'", command.archetype)))?;

    let character = recipe.generate(rng, names);
    info!(
        correlation_id = %command.correlation_id,
        archetype = recipe.name,
        character = %character.name,
        "generated character"
    );
    Ok(character)
}
