//! The five core stats.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the five core stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Stat {
    /// Strength; drives maximum body.
    Str,
    /// Dexterity; drives how soon a character acts again.
    Dex,
    /// Intelligence.
    Nte,
    /// Empathy.
    Emp,
    /// Intuition; drives maximum mind and the opening turn delay.
    Ntu,
}

impl Stat {
    /// All stats in sheet order.
    pub const ALL: [Stat; 5] = [Stat::Str, Stat::Dex, Stat::Nte, Stat::Emp, Stat::Ntu];

    /// Three-letter code used on the sheet and in saved worlds.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Stat::Str => "STR",
            Stat::Dex => "DEX",
            Stat::Nte => "NTE",
            Stat::Emp => "EMP",
            Stat::Ntu => "NTU",
        }
    }

    /// Parses a three-letter code.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Stat> {
        Stat::ALL.into_iter().find(|stat| stat.code() == code)
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A character's stat block. Persisted as a `{code: value}` map; missing
/// stats default to 0 and unknown codes are ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stats {
    #[serde(rename = "STR")]
    pub strength: i32,
    #[serde(rename = "DEX")]
    pub dexterity: i32,
    #[serde(rename = "NTE")]
    pub intelligence: i32,
    #[serde(rename = "EMP")]
    pub empathy: i32,
    #[serde(rename = "NTU")]
    pub intuition: i32,
}

impl Stats {
    /// Builds a stat block in sheet order.
    #[must_use]
    pub const fn new(
        strength: i32,
        dexterity: i32,
        intelligence: i32,
        empathy: i32,
        intuition: i32,
    ) -> Self {
        Self {
            strength,
            dexterity,
            intelligence,
            empathy,
            intuition,
        }
    }

    /// Value of `stat`.
    #[must_use]
    pub fn get(&self, stat: Stat) -> i32 {
        match stat {
            Stat::Str => self.strength,
            Stat::Dex => self.dexterity,
            Stat::Nte => self.intelligence,
            Stat::Emp => self.empathy,
            Stat::Ntu => self.intuition,
        }
    }

    /// Mutable access to `stat`.
    pub fn get_mut(&mut self, stat: Stat) -> &mut i32 {
        match stat {
            Stat::Str => &mut self.strength,
            Stat::Dex => &mut self.dexterity,
            Stat::Nte => &mut self.intelligence,
            Stat::Emp => &mut self.empathy,
            Stat::Ntu => &mut self.intuition,
        }
    }

    /// Sets `stat` to `value`.
    pub fn set(&mut self, stat: Stat, value: i32) {
        *self.get_mut(stat) = value;
    }
}
