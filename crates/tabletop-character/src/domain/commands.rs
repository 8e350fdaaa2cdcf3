//! Commands for the character context.

use tabletop_core::command::Command;
use uuid::Uuid;

/// Command to generate a character from an archetype.
#[derive(Debug, Clone)]
pub struct GenerateCharacter {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Name of the archetype to generate from.
    pub archetype: String,
}

impl Command for GenerateCharacter {
    fn command_type(&self) -> &'static str {
        "character.generate_character"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
