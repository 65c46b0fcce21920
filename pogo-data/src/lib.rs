mod datastore;
mod error;
mod mons;

pub use datastore::*;
pub use error::CatalogError;
pub use mons::*;
