//! The campaign facade: one world loaded at the start of play and saved at
//! the end.

use std::sync::OnceLock;

use tabletop_character::application::command_handlers::handle_generate_character;
use tabletop_character::domain::character::Character;
use tabletop_character::domain::commands::GenerateCharacter;
use tabletop_character::domain::names::NameTables;
use tabletop_core::error::DomainError;
use tabletop_core::rng::StdRngSource;
use tabletop_session::application::command_handlers::handle_start_turns;
use tabletop_session::domain::commands::StartTurns;
use tabletop_session::domain::scheduler::TurnScheduler;
use tabletop_store::json_file_repository::JsonFileRepository;
use tabletop_world::application::command_handlers::handle_add_character;
use tabletop_world::application::persistence::{load_world, save_world};
use tabletop_world::domain::commands::AddCharacter;
use tabletop_world::domain::world::{Location, World};
use tracing::info;
use uuid::Uuid;

use crate::config::CampaignConfig;
use crate::error::AppError;

/// A running campaign.
#[derive(Debug)]
pub struct Campaign {
    config: CampaignConfig,
    repository: JsonFileRepository,
    world: World,
    names: OnceLock<NameTables>,
    rng: StdRngSource,
}

impl Campaign {
    /// Loads the world named by `config`. A missing world file starts an
    /// empty campaign.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::MalformedState` or `DomainError::Infrastructure`
    /// if an existing world file cannot be loaded.
    pub fn open(config: CampaignConfig) -> Result<Self, AppError> {
        let repository = JsonFileRepository::new(&config.world_path);
        let world = load_world(&repository)?;
        let rng = config
            .rng_seed
            .map_or_else(StdRngSource::from_entropy, StdRngSource::seeded);
        info!(
            path = %config.world_path.display(),
            places = world.places.len(),
            "campaign opened"
        );
        Ok(Self {
            config,
            repository,
            world,
            names: OnceLock::new(),
            rng,
        })
    }

    /// The configuration the campaign was opened with.
    #[must_use]
    pub fn config(&self) -> &CampaignConfig {
        &self.config
    }

    /// The live world, including edits not yet saved.
    #[must_use]
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable access for the world command handlers.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// The name tables, read from disk on first use.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if a corpus cannot be read.
    pub fn name_tables(&self) -> Result<&NameTables, AppError> {
        Ok(name_tables(&self.names, &self.config)?)
    }

    /// Rolls a character from `archetype` without placing it anywhere.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NotFound` for an unknown archetype, or
    /// `DomainError::Infrastructure` if the name tables cannot be read.
    pub fn generate_character(&mut self, archetype: &str) -> Result<Character, AppError> {
        let names = name_tables(&self.names, &self.config)?;
        let command = GenerateCharacter {
            correlation_id: Uuid::new_v4(),
            archetype: archetype.to_owned(),
        };
        Ok(handle_generate_character(&command, names, &mut self.rng)?)
    }

    /// Rolls a character from `archetype` and upserts it into `location`.
    /// Returns the new character's name.
    ///
    /// # Errors
    ///
    /// As [`Self::generate_character`]; also `DomainError::NotFound` for an
    /// unknown place and `DomainError::Validation` if the corpus produced no
    /// name.
    pub fn recruit(&mut self, archetype: &str, location: Location) -> Result<String, AppError> {
        let character = self.generate_character(archetype)?;
        let name = character.name.clone();
        let command = AddCharacter {
            correlation_id: Uuid::new_v4(),
            location,
            character,
        };
        handle_add_character(&command, &mut self.world)?;
        Ok(name)
    }

    /// Opens a turn session for the party and the occupants of `place`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NotFound` if the place does not exist.
    pub fn start_turns(&self, place: &str) -> Result<TurnScheduler<'_>, AppError> {
        let command = StartTurns {
            correlation_id: Uuid::new_v4(),
            place: place.to_owned(),
        };
        Ok(handle_start_turns(&command, &self.world)?)
    }

    /// Writes the world snapshot without ending the campaign.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the file cannot be written.
    pub fn save(&self) -> Result<(), AppError> {
        save_world(&self.repository, &self.world)?;
        Ok(())
    }

    /// Saves and ends the campaign.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the file cannot be written.
    pub fn close(self) -> Result<(), AppError> {
        self.save()?;
        info!(path = %self.config.world_path.display(), "campaign closed");
        Ok(())
    }
}

fn name_tables<'a>(
    cell: &'a OnceLock<NameTables>,
    config: &CampaignConfig,
) -> Result<&'a NameTables, DomainError> {
    if let Some(tables) = cell.get() {
        return Ok(tables);
    }
    let tables = NameTables::load(&config.male_names, &config.female_names)?;
    info!(
        male = tables.male.len(),
        female = tables.female.len(),
        "name tables loaded"
    );
    Ok(cell.get_or_init(|| tables))
}
