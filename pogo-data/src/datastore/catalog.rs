use std::io::Read;

use ahash::{
    HashMap,
    HashSet,
};
use log::debug;
use serde::Deserialize;

use crate::{
    CatalogError,
    Species,
    SpeciesStore,
};

/// The subset of the gamemaster document that the catalog reads.
///
/// The gamemaster also contains cups, moves, and settings, which are ignored.
#[derive(Deserialize)]
struct Gamemaster {
    pokemon: Vec<Species>,
    #[serde(rename = "shadowPokemon", default)]
    shadow: Vec<String>,
}

/// Species reference data parsed from a gamemaster document.
///
/// Species are indexed by dex number, name, and ID. Dex numbers and names are shared by variants
/// of the same species, so those indices point at the last species in the source list with the
/// key. [`Catalog::variants_by_dex`] returns every species sharing a dex number.
///
/// The catalog is immutable once built and can be shared freely between readers.
#[derive(Debug, Default, Clone)]
pub struct Catalog {
    species: Vec<Species>,
    shadow_ids: HashSet<String>,
    dex_index: HashMap<u32, usize>,
    name_index: HashMap<String, usize>,
    id_index: HashMap<String, usize>,
    variants: HashMap<u32, Vec<usize>>,
}

impl Catalog {
    /// Builds a catalog from a species list and a list of shadow species IDs.
    ///
    /// Indices are populated in a single pass in list order, so later species overwrite earlier
    /// ones that share a key.
    pub fn new<I, S>(species: Vec<Species>, shadow_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let shadow_ids = shadow_ids
            .into_iter()
            .map(Into::into)
            .collect::<HashSet<String>>();
        let mut catalog = Self {
            species,
            shadow_ids,
            ..Default::default()
        };

        for (i, species) in catalog.species.iter_mut().enumerate() {
            species.is_shadow = catalog.shadow_ids.contains(&species.id);
            catalog.dex_index.insert(species.dex, i);
            catalog.name_index.insert(species.name.clone(), i);
            catalog.id_index.insert(species.id.clone(), i);
            catalog.variants.entry(species.dex).or_default().push(i);
        }

        debug!(
            "Catalog built with {} species and {} shadow IDs",
            catalog.species.len(),
            catalog.shadow_ids.len()
        );
        catalog
    }

    /// Parses a gamemaster JSON document.
    ///
    /// Fails if the bytes are not valid JSON or do not contain a `pokemon` list of species
    /// records.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, CatalogError> {
        let gamemaster: Gamemaster = serde_json::from_slice(bytes)?;
        Ok(Self::new(gamemaster.pokemon, gamemaster.shadow))
    }

    /// Reads the source to exhaustion and parses it as a gamemaster JSON document.
    ///
    /// The reader is not closed.
    pub fn from_reader<R>(mut reader: R) -> Result<Self, CatalogError>
    where
        R: Read,
    {
        let mut bytes = Vec::new();
        reader
            .read_to_end(&mut bytes)
            .map_err(|err| CatalogError::io("failed to read gamemaster", err))?;
        Self::from_slice(&bytes)
    }

    /// Gets a species by national dex number.
    pub fn species_by_dex(&self, dex: u32) -> Option<&Species> {
        self.dex_index.get(&dex).map(|i| &self.species[*i])
    }

    /// Gets a species by display name, such as `Bulbasaur`.
    pub fn species_by_name(&self, name: &str) -> Option<&Species> {
        self.name_index.get(name).map(|i| &self.species[*i])
    }

    /// Gets a species by ID, such as `mewtwo_armored`.
    pub fn species_by_id(&self, id: &str) -> Option<&Species> {
        self.id_index.get(id).map(|i| &self.species[*i])
    }

    /// Every species with the given dex number, in source order.
    pub fn variants_by_dex(&self, dex: u32) -> impl Iterator<Item = &Species> {
        self.variants
            .get(&dex)
            .into_iter()
            .flatten()
            .map(|i| &self.species[*i])
    }

    /// All species, in source order.
    pub fn species(&self) -> &[Species] {
        &self.species
    }

    /// IDs listed as shadow species.
    ///
    /// May contain IDs that do not correspond to any species.
    pub fn shadow_ids(&self) -> impl Iterator<Item = &str> {
        self.shadow_ids.iter().map(|id| id.as_str())
    }

    /// The number of species.
    pub fn len(&self) -> usize {
        self.species.len()
    }

    /// Does the catalog contain no species?
    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }
}

impl SpeciesStore for Catalog {
    fn species_by_dex(&self, dex: u32) -> Option<&Species> {
        Catalog::species_by_dex(self, dex)
    }

    fn species_by_name(&self, name: &str) -> Option<&Species> {
        Catalog::species_by_name(self, name)
    }

    fn species_by_id(&self, id: &str) -> Option<&Species> {
        Catalog::species_by_id(self, id)
    }
}
