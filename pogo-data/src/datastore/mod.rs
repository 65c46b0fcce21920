mod catalog;
mod local;
mod species_store;

pub use catalog::Catalog;
pub use species_store::SpeciesStore;
