mod calc;
mod cpm;
mod creature;
mod error;
mod persist;

pub use calc::{
    Calculation,
    MIN_CP,
    calculate,
};
pub use cpm::{
    CP_MULTIPLIERS,
    LEVEL_STEP,
    MAX_LEVEL,
    MIN_LEVEL,
    cp_multiplier,
    level_index,
    levels,
};
pub use creature::{
    Creature,
    Moves,
};
pub use error::CreatureError;
