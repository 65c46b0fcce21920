use crate::Species;

/// Lookup of species reference data.
///
/// This trait can be implemented for different data sources. A missing key is a normal outcome and
/// is reported as [`None`].
pub trait SpeciesStore: Send + Sync {
    /// Gets a species by national dex number.
    fn species_by_dex(&self, dex: u32) -> Option<&Species>;
    /// Gets a species by display name, such as `Bulbasaur`.
    fn species_by_name(&self, name: &str) -> Option<&Species>;
    /// Gets a species by ID, such as `mewtwo_armored`.
    fn species_by_id(&self, id: &str) -> Option<&Species>;
}
