//! Archetype table for procedural character generation.

use tabletop_core::rng::DeterministicRng;

use super::character::Character;
use super::names::NameTables;
use super::stats::{Stat, Stats};

/// A recipe for generating characters of one kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Archetype {
    /// Name shown when choosing what to generate.
    pub name: &'static str,
    /// Stats before the nudge pass.
    pub base: Stats,
    /// Probability that the name is drawn from the female corpus.
    pub p_female: f64,
}

/// Every archetype, in menu order.
pub static ARCHETYPES: [Archetype; 3] = [
    Archetype {
        name: "Average",
        base: Stats::new(5, 5, 5, 5, 5),
        p_female: 0.5,
    },
    Archetype {
        name: "Brute",
        base: Stats::new(8, 5, 4, 4, 4),
        p_female: 0.05,
    },
    Archetype {
        name: "Inn patron",
        base: Stats::new(5, 4, 5, 6, 4),
        p_female: 0.3,
    },
];

/// Looks up an archetype by name.
#[must_use]
pub fn archetype(name: &str) -> Option<&'static Archetype> {
    ARCHETYPES.iter().find(|archetype| archetype.name == name)
}

/// Archetype names in menu order.
pub fn archetype_names() -> impl Iterator<Item = &'static str> {
    ARCHETYPES.iter().map(|archetype| archetype.name)
}

impl Archetype {
    /// Generates a character: base stats, nudge pass, name draw, then full
    /// vitals. An empty corpus leaves the name blank.
    pub fn generate(&self, rng: &mut dyn DeterministicRng, names: &NameTables) -> Character {
        let mut stats = self.base;
        nudge_stats(&mut stats, rng);
        let name = names.draw(rng, self.p_female).unwrap_or_default();
        Character::new(name).with_stats(stats).filled()
    }
}

/// Independently for each stat, with probability 1/3, adds -1, 0 or +1.
pub fn nudge_stats(stats: &mut Stats, rng: &mut dyn DeterministicRng) {
    for stat in Stat::ALL {
        if rng.next_u32_range(0, 2) != 0 {
            continue;
        }
        let delta = match rng.next_u32_range(0, 2) {
            0 => -1,
            1 => 0,
            _ => 1,
        };
        *stats.get_mut(stat) += delta;
    }
}
