use assert_matches::assert_matches;
use pogo_calc::{
    Creature,
    CreatureError,
    levels,
};
use pogo_data::{
    Catalog,
    Stats,
};
use pretty_assertions::assert_eq;

const GAMEMASTER: &str = r#"{
    "pokemon": [
        {
            "dex": 40,
            "speciesName": "Wigglytuff",
            "speciesId": "wigglytuff",
            "baseStats": { "atk": 156, "def": 90, "hp": 295 },
            "fastMoves": ["CHARM", "FEINT_ATTACK", "POUND"],
            "chargedMoves": ["DISARMING_VOICE", "ICE_BEAM", "PLAY_ROUGH"]
        },
        {
            "dex": 292,
            "speciesName": "Shedinja",
            "speciesId": "shedinja",
            "baseStats": { "atk": 153, "def": 73, "hp": 1 },
            "fastMoves": ["BITE", "SHADOW_CLAW", "STRUGGLE_BUG"],
            "chargedMoves": ["DIG", "SHADOW_SNEAK", "AERIAL_ACE"]
        }
    ],
    "shadowPokemon": ["shedinja"]
}"#;

#[test]
fn creates_calculates_and_persists_creature() {
    let catalog = Catalog::from_slice(GAMEMASTER.as_bytes()).unwrap();
    let species = catalog.species_by_name("Wigglytuff").unwrap();

    let mut creature = Creature::new(species, Stats::new(10.0, 15.0, 12.0), 28.0).with_moves(
        species.fast_moves[0].as_str(),
        [
            species.charge_moves[1].as_str(),
            species.charge_moves[2].as_str(),
        ],
    );
    creature.calculate().unwrap();
    assert_eq!(creature.cp, 1489);
    assert_eq!(
        creature.calculated_stats,
        Stats::new(117.3427772, 74.222841, 217.0)
    );

    let mut bytes = Vec::new();
    creature.save(&mut bytes).unwrap();
    drop(catalog);

    assert_matches!(Creature::load(bytes.as_slice()), Ok(mut loaded) => {
        assert_eq!(loaded, creature);
        loaded.calculate().unwrap();
        assert_eq!(loaded, creature);
    });
}

#[test]
fn cp_never_drops_below_minimum() {
    let catalog = Catalog::from_slice(GAMEMASTER.as_bytes()).unwrap();
    let shedinja = catalog.species_by_dex(292).unwrap();
    assert!(shedinja.is_shadow);

    for level in levels() {
        let mut creature = Creature::new(shedinja, Stats::default(), level);
        creature.calculate().unwrap();
        assert!(creature.cp >= 10, "level {level} has CP {}", creature.cp);
    }

    let mut creature = Creature::new(shedinja, Stats::default(), 4.5);
    creature.calculate().unwrap();
    assert_eq!(creature.cp, 10);
}

#[test]
fn rejects_creature_of_unknown_species() {
    let catalog = Catalog::from_slice(GAMEMASTER.as_bytes()).unwrap();
    assert_matches!(
        Creature::from_store(&catalog, "jigglypuff", Stats::default(), 20.0),
        Err(CreatureError::UnknownSpecies(_))
    );
}
