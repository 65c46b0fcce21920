use pogo_data::{
    Species,
    SpeciesStore,
    Stats,
};
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    CreatureError,
    calculate,
};

/// The moves a Mon knows: one fast move and up to two charged moves.
///
/// Empty charged move slots are empty strings.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Moves {
    pub fast: String,
    pub charge: [String; 2],
}

/// A single Mon owned by a player.
///
/// Identity and base stats are copied from the species, so a Mon does not need the catalog after
/// creation. `calculated_stats` and `cp` are derived from `base_stats`, `ivs`, and `level` by
/// [`Creature::calculate`]. Editing the inputs leaves them stale until the next calculation.
///
/// Derived fields and moves may be left out of a hand-written file; they load as empty.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Creature {
    pub id: String,
    pub dex: u32,
    pub name: String,
    #[serde(alias = "basestats")]
    pub base_stats: Stats,
    /// Individual values, typically integers between 0 and 15.
    pub ivs: Stats,
    /// Effective stats, with HP rounded down.
    #[serde(alias = "calculatedstats", default)]
    pub calculated_stats: Stats,
    /// A half level between 1 and 40.
    pub level: f64,
    #[serde(default)]
    pub cp: u32,
    #[serde(default)]
    pub moves: Moves,
}

impl Creature {
    /// Creates a new Mon of the given species.
    ///
    /// Derived fields are left empty until [`Creature::calculate`] is called.
    pub fn new(species: &Species, ivs: Stats, level: f64) -> Self {
        Self {
            id: species.id.clone(),
            dex: species.dex,
            name: species.name.clone(),
            base_stats: species.base_stats,
            ivs,
            level,
            ..Default::default()
        }
    }

    /// Creates a new Mon of the species with the given ID.
    pub fn from_store(
        data: &dyn SpeciesStore,
        id: &str,
        ivs: Stats,
        level: f64,
    ) -> Result<Self, CreatureError> {
        let species = data
            .species_by_id(id)
            .ok_or_else(|| CreatureError::UnknownSpecies(id.to_owned()))?;
        Ok(Self::new(species, ivs, level))
    }

    /// Sets the Mon's moves.
    pub fn with_moves<S>(mut self, fast: S, charge: [S; 2]) -> Self
    where
        S: Into<String>,
    {
        self.moves = Moves {
            fast: fast.into(),
            charge: charge.map(|name| name.into()),
        };
        self
    }

    /// Calculates the Mon's CP and effective stats from its base stats, IVs, and level.
    ///
    /// The Mon is left untouched if the level is invalid.
    pub fn calculate(&mut self) -> Result<(), CreatureError> {
        let calculation = calculate(&self.base_stats, &self.ivs, self.level)?;
        self.cp = calculation.cp;
        self.calculated_stats = calculation.display_stats();
        Ok(())
    }

    /// The product of the Mon's calculated stats.
    pub fn stat_product(&self) -> f64 {
        self.calculated_stats.product()
    }
}
