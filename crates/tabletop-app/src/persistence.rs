//! Path-level world load and save.

use std::path::Path;

use tabletop_store::json_file_repository::JsonFileRepository;
use tabletop_world::application::persistence::{load_world, save_world};
use tabletop_world::domain::world::World;

use crate::error::AppError;

/// Loads the world stored at `path`, with item references resolved. A
/// missing file yields an empty world.
///
/// # Errors
///
/// Returns `DomainError::MalformedState` if the file cannot be parsed as a
/// world, or `DomainError::Infrastructure` if it cannot be read.
pub fn load_world_file(path: &Path) -> Result<World, AppError> {
    Ok(load_world(&JsonFileRepository::new(path))?)
}

/// Writes `world` to `path` as one complete snapshot, replacing any previous
/// contents.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if the file cannot be written.
pub fn save_world_file(path: &Path, world: &World) -> Result<(), AppError> {
    Ok(save_world(&JsonFileRepository::new(path), world)?)
}
