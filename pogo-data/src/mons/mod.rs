mod species;
mod stat;

pub use species::Species;
pub use stat::Stats;
