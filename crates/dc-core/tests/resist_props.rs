//! Property tests for the resistance adjustor

use dc_core::combat::{
    DamageFlavour, DefenderKind, ResistOutcome, resist_adjust_damage, resist_adjust_damage_with,
};
use proptest::prelude::*;
use strum::IntoEnumIterator;

fn any_flavour() -> impl Strategy<Value = DamageFlavour> {
    let all: Vec<DamageFlavour> = DamageFlavour::iter().collect();
    prop::sample::select(all)
}

fn any_defender() -> impl Strategy<Value = DefenderKind> {
    prop_oneof![Just(DefenderKind::Player), Just(DefenderKind::Monster)]
}

proptest! {
    #[test]
    fn prop_zero_resistance_is_identity(
        defender in any_defender(),
        flavour in any_flavour(),
        raw in 0i32..10_000,
        ranged in any::<bool>(),
    ) {
        prop_assert_eq!(resist_adjust_damage(defender, flavour, 0, raw, ranged), raw);
    }

    #[test]
    fn prop_monster_immunity_leaves_irresistible_part(
        flavour in any_flavour(),
        res in 3i32..50,
        raw in 0i32..10_000,
        ranged in any::<bool>(),
    ) {
        let resistible = raw * flavour.resistible_fraction() / 100;
        prop_assert_eq!(
            resist_adjust_damage(DefenderKind::Monster, flavour, res, raw, ranged),
            raw - resistible
        );
    }

    #[test]
    fn prop_monster_acid_immunity(res in 1i32..50, raw in 0i32..10_000) {
        prop_assert_eq!(
            resist_adjust_damage(DefenderKind::Monster, DamageFlavour::Acid, res, raw, false),
            0
        );
    }

    #[test]
    fn prop_vulnerability_never_reduces(
        defender in any_defender(),
        flavour in any_flavour(),
        res in -5i32..0,
        raw in 0i32..10_000,
    ) {
        let ranged = resist_adjust_damage(defender, flavour, res, raw, true);
        let melee = resist_adjust_damage(defender, flavour, res, raw, false);
        prop_assert!(ranged >= raw);
        prop_assert!(melee >= raw);
        prop_assert!(ranged <= melee);
    }

    #[test]
    fn prop_resistance_never_increases(
        defender in any_defender(),
        flavour in any_flavour(),
        res in 1i32..10,
        raw in 0i32..10_000,
        ranged in any::<bool>(),
    ) {
        let adjusted = resist_adjust_damage(defender, flavour, res, raw, ranged);
        prop_assert!(adjusted <= raw);
        prop_assert_ne!(ResistOutcome::classify(raw, adjusted), ResistOutcome::Vulnerable);
    }

    #[test]
    fn prop_never_negative(
        defender in any_defender(),
        flavour in any_flavour(),
        res in -10i32..10,
        raw in any::<i32>(),
        ranged in any::<bool>(),
        divisor in any::<i32>(),
    ) {
        prop_assert!(resist_adjust_damage(defender, flavour, res, raw, ranged) >= 0);
        let curve = move |_res: i32, _bonus: i32| divisor;
        prop_assert!(resist_adjust_damage_with(defender, flavour, res, raw, ranged, curve) >= 0);
    }

    #[test]
    fn prop_stronger_monster_resistance_helps(
        flavour in any_flavour(),
        res in 1i32..3,
        raw in 0i32..10_000,
    ) {
        let weaker = resist_adjust_damage(DefenderKind::Monster, flavour, res, raw, false);
        let stronger = resist_adjust_damage(DefenderKind::Monster, flavour, res + 1, raw, false);
        prop_assert!(stronger <= weaker);
    }
}
