use log::trace;
use pogo_data::Stats;

use crate::{
    CreatureError,
    cp_multiplier,
};

/// The lowest CP the game displays, no matter how weak the Mon is.
pub const MIN_CP: u32 = 10;

/// The result of a stat calculation.
///
/// Effective stats are kept unrounded. The game displays HP rounded down, but the CP formula uses
/// the unrounded value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calculation {
    pub attack: f64,
    pub defense: f64,
    pub hp: f64,
    pub cp: u32,
}

impl Calculation {
    /// The stats as the game displays them, with HP rounded down.
    pub fn display_stats(&self) -> Stats {
        Stats::new(self.attack, self.defense, self.hp.floor())
    }
}

/// Calculates the effective stats and CP of a Mon with the given base stats, IVs, and level.
pub fn calculate(
    base_stats: &Stats,
    ivs: &Stats,
    level: f64,
) -> Result<Calculation, CreatureError> {
    let cpm = cp_multiplier(level)?;
    let effective = (*base_stats + *ivs).map(|stat| stat * cpm);

    let cp = (effective.hp.sqrt() * effective.attack * effective.defense.sqrt() / 10.0).floor();
    let cp = (cp.min(u32::MAX as f64) as u32).max(MIN_CP);

    trace!("Calculated CP {cp} at level {level} (CPM {cpm})");
    Ok(Calculation {
        attack: effective.attack,
        defense: effective.defense,
        hp: effective.hp,
        cp,
    })
}

#[cfg(test)]
mod calc_test {
    use assert_matches::assert_matches;
    use pogo_data::Stats;
    use pretty_assertions::assert_eq;

    use crate::{
        CreatureError,
        MIN_CP,
        calculate,
    };

    const WIGGLYTUFF: Stats = Stats::new(156.0, 90.0, 295.0);
    const SHEDINJA: Stats = Stats::new(153.0, 73.0, 1.0);

    #[test]
    fn calculates_cp() {
        for (base_stats, ivs, level, expected) in [
            (WIGGLYTUFF, Stats::new(10.0, 15.0, 12.0), 28.0, 1489),
            (WIGGLYTUFF, Stats::new(0.0, 0.0, 0.0), 36.0, 1496),
            (WIGGLYTUFF, Stats::new(15.0, 15.0, 15.0), 27.0, 1486),
            (WIGGLYTUFF, Stats::new(0.0, 0.0, 0.0), 1.0, 22),
            (SHEDINJA, Stats::new(0.0, 0.0, 0.0), 4.5, 10),
            (SHEDINJA, Stats::new(0.0, 0.0, 0.0), 40.0, 81),
            (Stats::new(118.0, 111.0, 128.0), Stats::new(15.0, 15.0, 15.0), 40.0, 1115),
        ] {
            assert_matches!(calculate(&base_stats, &ivs, level), Ok(calculation) => {
                assert_eq!(calculation.cp, expected, "{base_stats:?} {ivs:?} level {level}");
            });
        }
    }

    #[test]
    fn keeps_unrounded_hp_for_cp() {
        let calculation = calculate(&WIGGLYTUFF, &Stats::new(10.0, 15.0, 12.0), 28.0).unwrap();
        assert_eq!(calculation.attack, 117.3427772);
        assert_eq!(calculation.defense, 74.222841);
        assert!(calculation.hp > 217.0 && calculation.hp < 218.0);
        assert_eq!(
            calculation.display_stats(),
            Stats::new(117.3427772, 74.222841, 217.0)
        );
    }

    #[test]
    fn clamps_to_minimum_cp() {
        let calculation = calculate(&SHEDINJA, &Stats::default(), 4.5).unwrap();
        assert_eq!(calculation.cp, MIN_CP);
        assert_eq!(calculation.display_stats().hp, 0.0);

        let calculation = calculate(&Stats::default(), &Stats::default(), 1.0).unwrap();
        assert_eq!(calculation.cp, MIN_CP);
    }

    #[test]
    fn caps_cp_at_largest_value() {
        let huge = Stats::new(1e300, 1e300, 1e300);
        let calculation = calculate(&huge, &Stats::default(), 40.0).unwrap();
        assert_eq!(calculation.cp, u32::MAX);
    }

    #[test]
    fn is_deterministic() {
        let ivs = Stats::new(3.0, 7.0, 11.0);
        assert_eq!(
            calculate(&WIGGLYTUFF, &ivs, 22.5).unwrap(),
            calculate(&WIGGLYTUFF, &ivs, 22.5).unwrap()
        );
    }

    #[test]
    fn fails_for_invalid_level() {
        assert_matches!(
            calculate(&WIGGLYTUFF, &Stats::default(), 0.0),
            Err(CreatureError::InvalidLevel(level)) => assert_eq!(level, 0.0)
        );
        assert_matches!(
            calculate(&WIGGLYTUFF, &Stats::default(), 51.0),
            Err(CreatureError::InvalidLevel(_))
        );
        assert_matches!(
            calculate(&WIGGLYTUFF, &Stats::default(), 10.2),
            Err(CreatureError::InvalidLevel(_))
        );
    }
}
