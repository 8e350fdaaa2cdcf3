//! Query handlers for the turn-session context.

use serde::Serialize;

use crate::domain::scheduler::TurnScheduler;

/// One row of the turn-order display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TurnRow {
    /// Character name.
    pub name: String,
    /// Ticks until the character acts.
    pub delay: i32,
}

/// The current order, soonest first.
#[must_use]
pub fn get_turn_order(scheduler: &TurnScheduler<'_>) -> Vec<TurnRow> {
    scheduler
        .order()
        .map(|(character, delay)| TurnRow {
            name: character.name.clone(),
            delay,
        })
        .collect()
}

/// Who acts next, without advancing.
#[must_use]
pub fn get_next_actor(scheduler: &TurnScheduler<'_>) -> Option<TurnRow> {
    scheduler.current().map(|turn| TurnRow {
        name: turn.character().name.clone(),
        delay: turn.delay(),
    })
}

#[cfg(test)]
mod tests {
    use tabletop_character::domain::character::Character;
    use tabletop_character::domain::stats::Stats;

    use super::*;

    #[test]
    fn test_get_turn_order_lists_rows_soonest_first() {
        let aria = Character::new("Aria").with_stats(Stats::new(5, 5, 5, 5, 5));
        let bram = Character::new("Bram").with_stats(Stats::new(5, 5, 5, 5, 10));
        let scheduler = TurnScheduler::new([&aria, &bram]);

        let rows = get_turn_order(&scheduler);

        assert_eq!(
            rows,
            vec![
                TurnRow {
                    name: "Bram".to_owned(),
                    delay: 50,
                },
                TurnRow {
                    name: "Aria".to_owned(),
                    delay: 100,
                },
            ]
        );
        assert_eq!(get_next_actor(&scheduler), Some(rows[0].clone()));
    }

    #[test]
    fn test_get_next_actor_on_empty_session_is_none() {
        let scheduler = TurnScheduler::new(std::iter::empty());

        assert!(get_next_actor(&scheduler).is_none());
        assert!(get_turn_order(&scheduler).is_empty());
    }
}
