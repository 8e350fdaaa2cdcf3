//! Commands for the turn-session context.

use tabletop_core::command::Command;
use uuid::Uuid;

/// Command to open a turn session for the party and one place.
#[derive(Debug, Clone)]
pub struct StartTurns {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The place whose occupants join the party.
    pub place: String,
}

impl Command for StartTurns {
    fn command_type(&self) -> &'static str {
        "session.start_turns"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to let the next character act.
#[derive(Debug, Clone)]
pub struct AdvanceTurn {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
}

impl Command for AdvanceTurn {
    fn command_type(&self) -> &'static str {
        "session.advance_turn"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
