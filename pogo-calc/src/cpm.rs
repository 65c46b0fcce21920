use crate::CreatureError;

/// The lowest level a Mon can be.
pub const MIN_LEVEL: f64 = 1.0;
/// The highest level a Mon can be.
pub const MAX_LEVEL: f64 = 40.0;
/// Mons level up in half levels.
pub const LEVEL_STEP: f64 = 0.5;

/// CP multiplier (CPM) for every half level.
///
/// Index 0 is level 1, index 1 is level 1.5, index 2 is level 2, and so on up to index 78 for
/// level 40. These are the exact values used by the game.
pub const CP_MULTIPLIERS: [f64; 79] = [
    0.094,
    0.1351374318,
    0.16639787,
    0.192650919,
    0.21573247,
    0.2365726613,
    0.25572005,
    0.2735303812,
    0.29024988,
    0.3060573775,
    0.3210876,
    0.3354450362,
    0.34921268,
    0.3624577511,
    0.3752356,
    0.387592416,
    0.39956728,
    0.4111935514,
    0.4225,
    0.4329264091,
    0.44310755,
    0.4530599591,
    0.4627984,
    0.472336093,
    0.48168495,
    0.4908558003,
    0.49985844,
    0.508701765,
    0.51739395,
    0.5259425113,
    0.5343543,
    0.5426357375,
    0.5507927,
    0.5588305862,
    0.5667545,
    0.5745691333,
    0.5822789,
    0.5898879072,
    0.5974,
    0.6048236651,
    0.6121573,
    0.6194041216,
    0.6265671,
    0.6336491432,
    0.64065295,
    0.6475809666,
    0.65443563,
    0.6612192524,
    0.667934,
    0.6745818959,
    0.6811649,
    0.6876849038,
    0.69414365,
    0.70054287,
    0.7068842,
    0.7131691091,
    0.7193991,
    0.7255756136,
    0.7317,
    0.7347410093,
    0.7377695,
    0.7407855938,
    0.74378943,
    0.7467812109,
    0.74976104,
    0.7527290867,
    0.7556855,
    0.7586303683,
    0.76156384,
    0.7644860647,
    0.76739717,
    0.7702972656,
    0.7731865,
    0.7760649616,
    0.77893275,
    0.7817900548,
    0.784637,
    0.7874736075,
    0.7903,
];

/// Maps a level to its index in [`CP_MULTIPLIERS`].
///
/// Fails if the level is not a half level between [`MIN_LEVEL`] and [`MAX_LEVEL`], inclusive.
pub fn level_index(level: f64) -> Result<usize, CreatureError> {
    if !level.is_finite() || level < MIN_LEVEL || level > MAX_LEVEL {
        return Err(CreatureError::InvalidLevel(level));
    }
    let index = (level - MIN_LEVEL) / LEVEL_STEP;
    if index.fract() != 0.0 {
        return Err(CreatureError::InvalidLevel(level));
    }
    Ok(index as usize)
}

/// The CP multiplier for the given level.
pub fn cp_multiplier(level: f64) -> Result<f64, CreatureError> {
    Ok(CP_MULTIPLIERS[level_index(level)?])
}

/// Every valid level, in ascending order.
pub fn levels() -> impl Iterator<Item = f64> {
    (0..CP_MULTIPLIERS.len()).map(|i| MIN_LEVEL + i as f64 * LEVEL_STEP)
}
