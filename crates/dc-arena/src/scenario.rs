//! Arena scenarios
//!
//! A scenario is a JSON file holding a text map and the monsters to place
//! on it.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use dc_core::GameRng;
use dc_core::actor::{Attitude, Monster, MonsterId, MonsterTraits, ResistanceSet};
use dc_core::combat::{MonAttack, attack_set};
use dc_core::dungeon::{Coord, LevelMap};
use dc_core::object::Weapon;
use dc_core::world::{CombatOptions, World, WorldError};

const HYDRA_PIT: &str = include_str!("../scenarios/hydra_pit.json");

#[derive(Error, Debug)]
pub enum ScenarioError {
    #[error("failed to read scenario: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid scenario JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("monster '{monster}' has unknown trait '{name}'")]
    UnknownTrait { monster: String, name: String },

    #[error("scenario has no monsters")]
    Empty,

    #[error(transparent)]
    World(#[from] WorldError),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub name: String,
    pub map: Vec<String>,
    pub monsters: Vec<MonsterSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonsterSpec {
    pub name: String,
    pub pos: Coord,
    #[serde(default = "default_hp")]
    pub hp: i32,
    #[serde(default)]
    pub ac: i32,
    #[serde(default = "default_ev")]
    pub ev: i32,
    #[serde(default = "default_hd")]
    pub hd: u8,
    #[serde(default)]
    pub attitude: Attitude,
    #[serde(default = "default_heads")]
    pub heads: u8,
    #[serde(default)]
    pub traits: Vec<String>,
    #[serde(default)]
    pub attacks: Vec<MonAttack>,
    #[serde(default)]
    pub melee_weapon: Option<Weapon>,
    #[serde(default)]
    pub resists: ResistanceSet,
}

fn default_hp() -> i32 {
    10
}

fn default_ev() -> i32 {
    10
}

fn default_hd() -> u8 {
    1
}

fn default_heads() -> u8 {
    1
}

fn parse_trait(name: &str) -> Option<MonsterTraits> {
    let flag = match name.to_lowercase().replace('-', "_").as_str() {
        "projectile" => MonsterTraits::PROJECTILE,
        "multi_target" => MonsterTraits::MULTI_TARGET,
        "multi_headed" => MonsterTraits::MULTI_HEADED,
        "batty" => MonsterTraits::BATTY,
        "see_invisible" => MonsterTraits::SEE_INVISIBLE,
        "no_fight" => MonsterTraits::NO_FIGHT,
        _ => return None,
    };
    Some(flag)
}

impl MonsterSpec {
    fn to_monster(&self) -> Result<Monster, ScenarioError> {
        let mut traits = MonsterTraits::empty();
        for name in &self.traits {
            traits |= parse_trait(name).ok_or_else(|| ScenarioError::UnknownTrait {
                monster: self.name.clone(),
                name: name.clone(),
            })?;
        }

        let mut m = Monster::new(MonsterId::NONE, self.name.as_str(), self.pos);
        m.hp = self.hp;
        m.hp_max = self.hp;
        m.ac = self.ac;
        m.ev = self.ev;
        m.hd = self.hd;
        m.attitude = self.attitude;
        m.heads = self.heads;
        m.traits = traits;
        m.attacks = attack_set(&self.attacks);
        m.resists = self.resists;
        m.inventory.melee = self.melee_weapon.clone();
        Ok(m)
    }
}

impl Scenario {
    pub fn parse(json: &str) -> Result<Self, ScenarioError> {
        let scenario: Scenario = serde_json::from_str(json)?;
        if scenario.monsters.is_empty() {
            return Err(ScenarioError::Empty);
        }
        Ok(scenario)
    }

    pub fn load(path: &Path) -> Result<Self, ScenarioError> {
        let json = std::fs::read_to_string(path)?;
        Self::parse(&json)
    }

    /// The scenario used when none is given
    pub fn builtin() -> Result<Self, ScenarioError> {
        Self::parse(HYDRA_PIT)
    }

    /// Build a world with every monster placed. The player stays off the
    /// level, so `options.arena` is always switched on.
    pub fn build_world(&self, seed: u64, mut options: CombatOptions) -> Result<World, ScenarioError> {
        options.arena = true;
        let map = LevelMap::from_rows(&self.map)?;
        let mut world = World::with_options(map, GameRng::new(seed), options);
        for spec in &self.monsters {
            world.spawn_monster(spec.to_monster()?)?;
        }
        Ok(world)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_scenario_builds() {
        let scenario = Scenario::builtin().unwrap();
        let world = scenario
            .build_world(1, CombatOptions::default())
            .unwrap();
        assert!(world.options.arena);
        assert_eq!(world.living_monsters().len(), scenario.monsters.len());

        let hydra = world.monsters.iter().find(|m| m.name == "hydra").unwrap();
        assert!(hydra.has_hydra_multi_attack());
        assert!(hydra.heads > 1);
    }

    #[test]
    fn test_unknown_trait() {
        let json = r#"{
            "map": ["...."],
            "monsters": [{"name": "blob", "pos": {"x": 1, "y": 0}, "traits": ["sticky"]}]
        }"#;
        let scenario = Scenario::parse(json).unwrap();
        let err = scenario.build_world(1, CombatOptions::default()).unwrap_err();
        assert!(matches!(err, ScenarioError::UnknownTrait { .. }));
    }

    #[test]
    fn test_empty_scenario() {
        let json = r#"{"map": ["...."], "monsters": []}"#;
        assert!(matches!(Scenario::parse(json), Err(ScenarioError::Empty)));
    }

    #[test]
    fn test_monster_in_wall() {
        let json = r##"{
            "map": ["#.."],
            "monsters": [{"name": "rat", "pos": {"x": 0, "y": 0}}]
        }"##;
        let scenario = Scenario::parse(json).unwrap();
        let err = scenario.build_world(1, CombatOptions::default()).unwrap_err();
        assert!(matches!(err, ScenarioError::World(WorldError::Solid { .. })));
    }

    #[test]
    fn test_trait_names() {
        assert_eq!(parse_trait("Multi-Headed"), Some(MonsterTraits::MULTI_HEADED));
        assert_eq!(parse_trait("no_fight"), Some(MonsterTraits::NO_FIGHT));
        assert_eq!(parse_trait("wings"), None);
    }
}
