//! Resistance adjustment of elemental damage

use strum::Display;

use super::DamageFlavour;

/// Which damage formula applies to a defender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum DefenderKind {
    Player,
    Monster,
}

/// Default player resistance curve: the divisor applied to the resistible
/// part of the damage. Never less than 1.
pub fn player_resist_fraction(res: i32, bonus: i32) -> i32 {
    ((3 * res + 1) / 2 + bonus).max(1)
}

/// Adjust `raw` damage of `flavour` for a defender with resistance level
/// `res`, using the default player curve.
pub fn resist_adjust_damage(
    defender: DefenderKind,
    flavour: DamageFlavour,
    res: i32,
    raw: i32,
    ranged: bool,
) -> i32 {
    resist_adjust_damage_with(defender, flavour, res, raw, ranged, player_resist_fraction)
}

/// As [`resist_adjust_damage`], with the player resistance curve supplied
/// by the caller. The curve's result is treated as at least 1.
///
/// Only the resistible fraction of the damage is affected; the rest always
/// lands. The result is never negative.
pub fn resist_adjust_damage_with<F>(
    defender: DefenderKind,
    flavour: DamageFlavour,
    res: i32,
    raw: i32,
    ranged: bool,
    curve: F,
) -> i32
where
    F: Fn(i32, i32) -> i32,
{
    let raw = raw.max(0);
    if res == 0 {
        return raw;
    }

    let raw = i64::from(raw);
    let mut resistible = raw * i64::from(flavour.resistible_fraction()) / 100;
    let irresistible = raw - resistible;

    if res > 0 {
        let immune =
            defender == DefenderKind::Monster && (flavour == DamageFlavour::Acid || res >= 3);

        if immune {
            resistible = 0;
        } else {
            let bonus = i32::from(flavour.is_boolean_resist());
            let divisor = match defender {
                DefenderKind::Monster => 1 + i64::from(bonus) + i64::from(res) * i64::from(res),
                DefenderKind::Player => i64::from(curve(res, bonus).max(1)),
            };
            resistible /= divisor;
        }
    } else if ranged {
        resistible = resistible * 3 / 2;
    } else {
        resistible *= 2;
    }

    i32::try_from((resistible + irresistible).max(0)).unwrap_or(i32::MAX)
}

/// How resistance changed a hit, for messaging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ResistOutcome {
    Unaffected,
    Resisted,
    Immune,
    Vulnerable,
}

impl ResistOutcome {
    pub fn classify(raw: i32, adjusted: i32) -> Self {
        let raw = raw.max(0);
        if adjusted > raw {
            ResistOutcome::Vulnerable
        } else if adjusted == raw {
            ResistOutcome::Unaffected
        } else if adjusted == 0 {
            ResistOutcome::Immune
        } else {
            ResistOutcome::Resisted
        }
    }
}

/// The message shown when resistance changed some elemental damage.
///
/// `name` is the defender's sentence-opening name; it is ignored for the
/// player. Returns `None` when there is nothing to say.
pub fn resist_message(
    defender: DefenderKind,
    name: &str,
    flavour: DamageFlavour,
    outcome: ResistOutcome,
) -> Option<String> {
    let msg = match (defender, outcome) {
        (_, ResistOutcome::Unaffected) => return None,
        (DefenderKind::Player, ResistOutcome::Resisted) => match flavour {
            DamageFlavour::Ice | DamageFlavour::Lava | DamageFlavour::PoisonArrow => {
                "You partially resist.".to_string()
            }
            _ => "You resist.".to_string(),
        },
        (DefenderKind::Player, ResistOutcome::Immune) => "You are unaffected.".to_string(),
        (DefenderKind::Player, ResistOutcome::Vulnerable) => match flavour {
            DamageFlavour::Fire
            | DamageFlavour::Lava
            | DamageFlavour::StickyFlame
            | DamageFlavour::Steam => "It burns terribly!".to_string(),
            DamageFlavour::Cold => "You feel a terrible chill!".to_string(),
            DamageFlavour::Ice => "You feel a painful chill!".to_string(),
            _ => format!("The {} hurts you terribly!", flavour.noun()),
        },
        (DefenderKind::Monster, ResistOutcome::Resisted) => format!("{name} resists."),
        (DefenderKind::Monster, ResistOutcome::Immune) => format!("{name} is unaffected."),
        (DefenderKind::Monster, ResistOutcome::Vulnerable) => match flavour {
            DamageFlavour::Fire
            | DamageFlavour::Lava
            | DamageFlavour::StickyFlame
            | DamageFlavour::Steam => format!("{name} is burned terribly!"),
            DamageFlavour::Cold | DamageFlavour::Ice => format!("{name} is frozen!"),
            _ => format!("{name} is hurt terribly by the {}!", flavour.noun()),
        },
    };
    Some(msg)
}

#[cfg(test)]
mod tests {
    use super::*;

    use DefenderKind::{Monster, Player};

    #[test]
    fn test_zero_resistance_is_identity() {
        assert_eq!(resist_adjust_damage(Monster, DamageFlavour::Fire, 0, 17, false), 17);
        assert_eq!(resist_adjust_damage(Player, DamageFlavour::Water, 0, 17, true), 17);
    }

    #[test]
    fn test_monster_formula() {
        // 30 / (1 + 1) with rF+
        assert_eq!(resist_adjust_damage(Monster, DamageFlavour::Fire, 1, 30, false), 15);
        // 30 / (1 + 4) with rF++
        assert_eq!(resist_adjust_damage(Monster, DamageFlavour::Fire, 2, 30, false), 6);
        // boolean flavours add one: 30 / (1 + 1 + 1)
        assert_eq!(resist_adjust_damage(Monster, DamageFlavour::Electricity, 1, 30, false), 10);
    }

    #[test]
    fn test_monster_immunity() {
        assert_eq!(resist_adjust_damage(Monster, DamageFlavour::Fire, 3, 30, false), 0);
        assert_eq!(resist_adjust_damage(Monster, DamageFlavour::Acid, 1, 30, false), 0);
        // only the resistible 55% of lava is stopped
        assert_eq!(resist_adjust_damage(Monster, DamageFlavour::Lava, 3, 100, false), 45);
        // players get no free immunity
        assert!(resist_adjust_damage(Player, DamageFlavour::Acid, 1, 30, false) > 0);
    }

    #[test]
    fn test_player_curve() {
        assert_eq!(player_resist_fraction(1, 0), 2);
        assert_eq!(player_resist_fraction(2, 0), 3);
        assert_eq!(player_resist_fraction(3, 1), 6);
        assert_eq!(player_resist_fraction(-5, 0), 1);

        assert_eq!(resist_adjust_damage(Player, DamageFlavour::Fire, 1, 30, false), 15);
        assert_eq!(resist_adjust_damage(Player, DamageFlavour::Fire, 3, 30, false), 6);
    }

    #[test]
    fn test_injected_curve() {
        let halve = |_res: i32, _bonus: i32| 2;
        assert_eq!(
            resist_adjust_damage_with(Player, DamageFlavour::Cold, 3, 40, false, halve),
            20
        );
        // a curve returning nonsense is treated as 1
        let broken = |_res: i32, _bonus: i32| -3;
        assert_eq!(
            resist_adjust_damage_with(Player, DamageFlavour::Cold, 1, 40, false, broken),
            40
        );
        // the curve is never consulted for monsters
        let panics = |_res: i32, _bonus: i32| -> i32 { unreachable!() };
        assert_eq!(
            resist_adjust_damage_with(Monster, DamageFlavour::Cold, 1, 40, false, panics),
            20
        );
    }

    #[test]
    fn test_vulnerability() {
        assert_eq!(resist_adjust_damage(Monster, DamageFlavour::Fire, -1, 10, false), 20);
        assert_eq!(resist_adjust_damage(Monster, DamageFlavour::Fire, -1, 10, true), 15);
        // irresistible part is not amplified: 4 resistible * 2 + 6
        assert_eq!(resist_adjust_damage(Player, DamageFlavour::Water, -1, 10, false), 14);
    }

    #[test]
    fn test_negative_raw_damage() {
        assert_eq!(resist_adjust_damage(Monster, DamageFlavour::Fire, 0, -5, false), 0);
        assert_eq!(resist_adjust_damage(Monster, DamageFlavour::Fire, -1, -5, false), 0);
    }

    #[test]
    fn test_outcome_classification() {
        assert_eq!(ResistOutcome::classify(10, 10), ResistOutcome::Unaffected);
        assert_eq!(ResistOutcome::classify(10, 4), ResistOutcome::Resisted);
        assert_eq!(ResistOutcome::classify(10, 0), ResistOutcome::Immune);
        assert_eq!(ResistOutcome::classify(10, 15), ResistOutcome::Vulnerable);
        assert_eq!(ResistOutcome::classify(0, 0), ResistOutcome::Unaffected);
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            resist_message(Player, "", DamageFlavour::Fire, ResistOutcome::Resisted).as_deref(),
            Some("You resist.")
        );
        assert_eq!(
            resist_message(Player, "", DamageFlavour::Cold, ResistOutcome::Vulnerable).as_deref(),
            Some("You feel a terrible chill!")
        );
        assert_eq!(
            resist_message(Monster, "The ogre", DamageFlavour::Fire, ResistOutcome::Vulnerable)
                .as_deref(),
            Some("The ogre is burned terribly!")
        );
        assert_eq!(
            resist_message(Monster, "The ogre", DamageFlavour::Acid, ResistOutcome::Immune)
                .as_deref(),
            Some("The ogre is unaffected.")
        );
        assert!(resist_message(Monster, "The ogre", DamageFlavour::Acid, ResistOutcome::Unaffected)
            .is_none());
    }
}
