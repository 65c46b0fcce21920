use serde::{
    Deserialize,
    Serialize,
};

use crate::Stats;

/// Data about a particular species, as listed in the gamemaster.
///
/// Species data is common to all Mons of a given species. Data about a specific Mon (such as its
/// IVs, level, or CP) does not belong here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Species {
    /// The unique species ID, such as `mewtwo_armored`.
    #[serde(rename = "speciesId")]
    pub id: String,
    /// National Pokedex number.
    ///
    /// Regional forms and other variants share the dex number of their base species.
    pub dex: u32,
    /// The display name, such as `Mewtwo (Armored)`.
    ///
    /// Not guaranteed to be unique.
    #[serde(rename = "speciesName")]
    pub name: String,
    /// Base stats.
    #[serde(rename = "baseStats")]
    pub base_stats: Stats,
    /// Is this species a shadow variant?
    ///
    /// Never read from the species record itself. The catalog sets this flag from its list of
    /// shadow IDs.
    #[serde(rename = "isShadow", default, skip_deserializing)]
    pub is_shadow: bool,
    /// Fast moves the species can learn.
    #[serde(rename = "fastMoves", default)]
    pub fast_moves: Vec<String>,
    /// Charged moves the species can learn.
    #[serde(rename = "chargedMoves", default)]
    pub charge_moves: Vec<String>,
}
