//! A single entry in the turn order.

use tabletop_character::domain::character::Character;

/// Ticks divided by a speed stat to get a delay.
pub const DELAY_BUDGET: i32 = 500;

/// `ceil(500 / speed)`. Speeds below 1 count as 1.
#[must_use]
pub fn delay_for(speed: i32) -> i32 {
    let speed = speed.max(1);
    (DELAY_BUDGET - 1) / speed + 1
}

/// A character's place in a turn session.
#[derive(Debug, Clone, Copy)]
pub struct Turn<'w> {
    pub(crate) character: &'w Character,
    pub(crate) delay: i32,
    pub(crate) seat: usize,
}

impl<'w> Turn<'w> {
    /// Seeds a turn from the character's intuition.
    #[must_use]
    pub fn seeded(character: &'w Character, seat: usize) -> Self {
        Self {
            character,
            delay: delay_for(character.stats.intuition),
            seat,
        }
    }

    /// The character this turn belongs to.
    #[must_use]
    pub fn character(&self) -> &'w Character {
        self.character
    }

    /// Ticks remaining until the character acts.
    #[must_use]
    pub fn delay(&self) -> i32 {
        self.delay
    }

    /// Position in which the character joined the session; breaks ties.
    #[must_use]
    pub fn seat(&self) -> usize {
        self.seat
    }
}
