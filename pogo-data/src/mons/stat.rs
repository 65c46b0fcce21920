use core::ops::Add;

use serde::{
    Deserialize,
    Serialize,
};

/// The three stats of a Mon: attack, defense, and stamina (HP).
///
/// Used for the base stats shared by every Mon of a species, for the individual values (IVs) of a
/// single Mon, and for its calculated stats. Values are floating point because calculated stats
/// are scaled by the CP multiplier.
///
/// The gamemaster spells the keys `atk`, `def`, and `hp`. Persisted Mons spell them `attack`,
/// `defense`, and `hp`. Both are accepted; the latter is always written.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    #[serde(alias = "atk")]
    pub attack: f64,
    #[serde(alias = "def")]
    pub defense: f64,
    pub hp: f64,
}

impl Stats {
    /// Creates a new stat triple.
    pub const fn new(attack: f64, defense: f64, hp: f64) -> Self {
        Self {
            attack,
            defense,
            hp,
        }
    }

    /// The stat product, which is commonly used to rank Mons of the same species.
    pub fn product(&self) -> f64 {
        self.attack * self.defense * self.hp
    }

    /// Applies the function to every stat.
    pub fn map<F>(self, f: F) -> Self
    where
        F: Fn(f64) -> f64,
    {
        Self {
            attack: f(self.attack),
            defense: f(self.defense),
            hp: f(self.hp),
        }
    }
}

impl Add for Stats {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            attack: self.attack + rhs.attack,
            defense: self.defense + rhs.defense,
            hp: self.hp + rhs.hp,
        }
    }
}
