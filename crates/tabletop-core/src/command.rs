//! The command contract shared by every context.

use uuid::Uuid;

/// A request to change campaign state.
///
/// Handlers log `command_type` under the `command` field, so names take the
/// form `<context>.<action>`, e.g. `world.create_place`.
pub trait Command: std::fmt::Debug {
    /// Stable `<context>.<action>` name.
    fn command_type(&self) -> &'static str;

    /// Ties together every log line produced while handling this command.
    fn correlation_id(&self) -> Uuid;
}
