//! Whole-world load and save.
//!
//! The world travels through a `SnapshotRepository` as a single JSON
//! document. Loading resolves carried items against the catalog before the
//! world is handed out.

use tabletop_core::error::DomainError;
use tabletop_core::repository::SnapshotRepository;
use tracing::{info, instrument};

use crate::domain::world::World;

/// Loads the world, or a fresh empty one if nothing has been saved yet.
///
/// # Errors
///
/// Returns `DomainError::MalformedState` if the snapshot does not fit the
/// world schema, or whatever the repository reports if it cannot be read.
#[instrument(skip_all)]
pub fn load_world(repo: &dyn SnapshotRepository) -> Result<World, DomainError> {
    let Some(snapshot) = repo.load_snapshot()? else {
        info!("no saved world found, starting fresh");
        return Ok(World::default());
    };

    let mut world: World = serde_json::from_value(snapshot).map_err(|e| {
        DomainError::MalformedState(format!("world snapshot does not match schema: {e}"))
    })?;
    let resolved = world.link_items();

    info!(
        party = world.party.characters.len(),
        places = world.places.len(),
        items = world.items.len(),
        resolved,
        "loaded world"
    );
    Ok(world)
}

/// Writes the whole world as one snapshot.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if the world cannot be encoded or
/// the repository fails to store it.
#[instrument(skip_all)]
pub fn save_world(repo: &dyn SnapshotRepository, world: &World) -> Result<(), DomainError> {
    let snapshot = serde_json::to_value(world)
        .map_err(|e| DomainError::Infrastructure(format!("world encoding failed: {e}")))?;
    repo.save_snapshot(&snapshot)?;
    info!(
        party = world.party.characters.len(),
        places = world.places.len(),
        items = world.items.len(),
        "saved world"
    );
    Ok(())
}
