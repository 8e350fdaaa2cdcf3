//! Initiative ordering for one turn session.
//!
//! Every turn counts down the ticks until its character acts. Advancing
//! lets the soonest character act: the elapsed ticks are drained from every
//! turn, the actor is re-seeded from its dexterity, and the set is re-sorted.
//! Ties go to whoever joined the session first.

use tabletop_character::domain::character::Character;
use tracing::debug;

use super::turn::{Turn, delay_for};

/// The ordered working set of one turn session.
#[derive(Debug, Clone, Default)]
pub struct TurnScheduler<'w> {
    turns: Vec<Turn<'w>>,
}

impl<'w> TurnScheduler<'w> {
    /// Seeds one turn per character, in the order given.
    pub fn new<I>(characters: I) -> Self
    where
        I: IntoIterator<Item = &'w Character>,
    {
        let turns = characters
            .into_iter()
            .enumerate()
            .map(|(seat, character)| Turn::seeded(character, seat))
            .collect();
        let mut scheduler = Self { turns };
        scheduler.sort();
        scheduler
    }

    fn sort(&mut self) {
        self.turns.sort_by_key(|turn| (turn.delay, turn.seat));
    }

    /// Number of turns in the session.
    #[must_use]
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// Whether the session has nobody in it.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// The turn that acts next, without advancing.
    #[must_use]
    pub fn current(&self) -> Option<&Turn<'w>> {
        self.turns.first()
    }

    /// Lets the soonest character act and returns it.
    ///
    /// Returns `None` and changes nothing when the session is empty.
    pub fn advance(&mut self) -> Option<&'w Character> {
        let elapsed = self.turns.first()?.delay;
        for turn in &mut self.turns {
            turn.delay -= elapsed;
        }

        let actor = &mut self.turns[0];
        actor.delay = delay_for(actor.character.stats.dexterity);
        let character = actor.character;
        debug!(
            character = %character.name,
            elapsed,
            next_delay = actor.delay,
            "turn advanced"
        );

        self.sort();
        Some(character)
    }

    /// The current order, soonest first, as `(character, delay)` pairs.
    ///
    /// Read-only; call again for a fresh pass.
    pub fn order(&self) -> impl Iterator<Item = (&'w Character, i32)> + '_ {
        self.turns.iter().map(|turn| (turn.character, turn.delay))
    }
}

#[cfg(test)]
mod tests {
    use tabletop_character::domain::stats::Stats;

    use super::*;

    fn character(name: &str, dex: i32, ntu: i32) -> Character {
        Character::new(name).with_stats(Stats::new(5, dex, 5, 5, ntu))
    }

    fn snapshot(scheduler: &TurnScheduler<'_>) -> Vec<(String, i32)> {
        scheduler
            .order()
            .map(|(character, delay)| (character.name.clone(), delay))
            .collect()
    }

    #[test]
    fn test_solo_turn_matches_worked_example() {
        // Arrange
        let aria = character("Aria", 5, 5);
        let mut scheduler = TurnScheduler::new([&aria]);
        assert_eq!(snapshot(&scheduler), vec![("Aria".to_owned(), 100)]);

        // Act
        let actor = scheduler.advance();

        // Assert
        assert_eq!(actor.map(|c| c.name.as_str()), Some("Aria"));
        assert_eq!(snapshot(&scheduler), vec![("Aria".to_owned(), 100)]);
    }

    #[test]
    fn test_new_sorts_by_seed_delay() {
        let slow = character("Slow", 5, 2);
        let quick = character("Quick", 5, 10);
        let mid = character("Mid", 5, 4);

        let scheduler = TurnScheduler::new([&slow, &quick, &mid]);

        assert_eq!(
            snapshot(&scheduler),
            vec![
                ("Quick".to_owned(), 50),
                ("Mid".to_owned(), 125),
                ("Slow".to_owned(), 250),
            ]
        );
    }

    #[test]
    fn test_ties_break_by_seat() {
        let first = character("First", 5, 5);
        let second = character("Second", 5, 5);
        let third = character("Third", 5, 5);

        let scheduler = TurnScheduler::new([&third, &first, &second]);

        let names: Vec<_> = scheduler.order().map(|(c, _)| c.name.as_str()).collect();
        assert_eq!(names, vec!["Third", "First", "Second"]);
    }

    #[test]
    fn test_advance_drains_prior_minimum_and_reseeds_actor_from_dex() {
        // Arrange
        let aria = character("Aria", 4, 5); // seed 100, next 125
        let bram = character("Bram", 5, 4); // seed 125
        let cato = character("Cato", 5, 3); // seed 167
        let mut scheduler = TurnScheduler::new([&aria, &bram, &cato]);
        let before = snapshot(&scheduler);

        // Act
        let actor = scheduler.advance().unwrap();

        // Assert
        assert_eq!(actor.name, "Aria");
        let after = snapshot(&scheduler);
        for (name, delay) in &before[1..] {
            let now = after.iter().find(|(n, _)| n == name).unwrap().1;
            assert_eq!(now, delay - 100);
        }
        assert_eq!(
            after,
            vec![
                ("Bram".to_owned(), 25),
                ("Cato".to_owned(), 67),
                ("Aria".to_owned(), 125),
            ]
        );
    }

    #[test]
    fn test_fast_character_can_act_consecutively() {
        let hare = character("Hare", 50, 5); // seed 100, next 10
        let tortoise = character("Tortoise", 1, 4); // seed 125

        let mut scheduler = TurnScheduler::new([&hare, &tortoise]);

        assert_eq!(scheduler.advance().unwrap().name, "Hare");
        assert_eq!(scheduler.advance().unwrap().name, "Hare");
        assert_eq!(
            snapshot(&scheduler),
            vec![("Hare".to_owned(), 10), ("Tortoise".to_owned(), 15)]
        );
    }

    #[test]
    fn test_actor_reseeded_to_zero_ties_with_waiting_turn_by_seat() {
        let a = character("A", 5, 5); // seed 100, next 100
        let b = character("B", 5, 5); // seed 100

        let mut scheduler = TurnScheduler::new([&a, &b]);

        assert_eq!(scheduler.advance().unwrap().name, "A");
        assert_eq!(
            snapshot(&scheduler),
            vec![("B".to_owned(), 0), ("A".to_owned(), 100)]
        );
        assert_eq!(scheduler.advance().unwrap().name, "B");
        assert_eq!(
            snapshot(&scheduler),
            vec![("A".to_owned(), 100), ("B".to_owned(), 100)]
        );
    }

    #[test]
    fn test_non_positive_stats_fall_back_to_speed_one() {
        let frozen = character("Frozen", 0, -2);

        let mut scheduler = TurnScheduler::new([&frozen]);
        assert_eq!(scheduler.current().unwrap().delay(), 500);

        scheduler.advance();
        assert_eq!(scheduler.current().unwrap().delay(), 500);
    }

    #[test]
    fn test_order_queries_are_repeatable() {
        let aria = character("Aria", 3, 5);
        let bram = character("Bram", 7, 6);
        let mut scheduler = TurnScheduler::new([&aria, &bram]);
        scheduler.advance();

        let first = snapshot(&scheduler);
        let second = snapshot(&scheduler);

        assert_eq!(first, second);
    }

    #[test]
    fn test_advance_on_empty_session_is_noop() {
        let mut scheduler = TurnScheduler::new(std::iter::empty());

        assert!(scheduler.is_empty());
        assert!(scheduler.advance().is_none());
        assert!(scheduler.current().is_none());
        assert_eq!(scheduler.order().count(), 0);
    }

    #[test]
    fn test_extreme_speed_stats_act_every_tick() {
        let blur = character("Blur", i32::MAX, i32::MAX);
        let snail = character("Snail", 1, 1);
        let mut scheduler = TurnScheduler::new([&blur, &snail]);

        assert_eq!(scheduler.current().unwrap().delay(), 1);
        assert_eq!(scheduler.advance().unwrap().name, "Blur");

        let order: Vec<(&str, i32)> = scheduler
            .order()
            .map(|(c, delay)| (c.name.as_str(), delay))
            .collect();
        assert_eq!(order, vec![("Blur", 1), ("Snail", 499)]);
    }
}
