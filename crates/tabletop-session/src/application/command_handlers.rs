//! Command handlers for the turn-session context.

use tabletop_character::domain::character::Character;
use tabletop_core::error::DomainError;
use tabletop_world::domain::world::World;
use tracing::info;

use crate::domain::commands::{AdvanceTurn, StartTurns};
use crate::domain::scheduler::TurnScheduler;

/// Handles the `StartTurns` command: seeds a session from the party followed
/// by the occupants of the named place.
///
/// The session borrows the world; edits made afterwards need a new session.
///
/// # Errors
///
/// Returns `DomainError::NotFound` if the place does not exist.
pub fn handle_start_turns<'w>(
    command: &StartTurns,
    world: &'w World,
) -> Result<TurnScheduler<'w>, DomainError> {
    let place = world.places.lookup(&command.place)?;
    let scheduler = TurnScheduler::new(
        world
            .party
            .characters
            .iter()
            .chain(place.characters.iter()),
    );
    info!(
        correlation_id = %command.correlation_id,
        place = %place.name,
        turns = scheduler.len(),
        "turn session started"
    );
    Ok(scheduler)
}

/// Handles the `AdvanceTurn` command and returns who acted, or `None` for an
/// empty session.
pub fn handle_advance_turn<'w>(
    command: &AdvanceTurn,
    scheduler: &mut TurnScheduler<'w>,
) -> Option<&'w Character> {
    let actor = scheduler.advance();
    if let Some(character) = actor {
        info!(
            correlation_id = %command.correlation_id,
            character = %character.name,
            "character acted"
        );
    }
    actor
}
