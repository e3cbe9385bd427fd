//! Combat options
//!
//! Read from an rc-style file: `OPTIONS=` lines holding comma-separated
//! entries, booleans as `name`, `!name` or `noname`, values as `name:value`.

use std::fmt::Display;
use std::ops::RangeInclusive;
use std::path::Path;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

use super::OptionsError;
use crate::consts::{CLEAVE_ARC_STEPS, CLEAVE_DAMAGE_PERCENT, MAX_NUM_ATTACKS, MSG_HISTORY};

const ATTACK_RANGE: RangeInclusive<u32> = 1..=MAX_NUM_ATTACKS as u32;
// 3 per side plus the target covers everything but the cell behind
const ARC_RANGE: RangeInclusive<u32> = 0..=3;
const PERCENT_RANGE: RangeInclusive<i32> = 0..=100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatOptions {
    /// Spectator mode: the player is not on the level
    pub arena: bool,
    /// Swing cap for monsters without a per-head attack count
    #[serde(deserialize_with = "de_attacks")]
    pub max_monster_attacks: u32,
    /// Cells scanned on each side of a cleave target
    #[serde(deserialize_with = "de_arc")]
    pub cleave_arc: u32,
    /// Damage percentage for secondary cleave swings
    #[serde(deserialize_with = "de_percent")]
    pub cleave_damage_percent: i32,
    /// Ask before attacking with something that is not a melee weapon
    pub confirm_unsuitable_weapon: bool,
    pub msghistory: usize,
}

fn de_bounded<'de, D, T>(deserializer: D, range: RangeInclusive<T>) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + PartialOrd + Display,
{
    let value = T::deserialize(deserializer)?;
    if range.contains(&value) {
        Ok(value)
    } else {
        Err(D::Error::custom(format!(
            "{value} is outside {}..={}",
            range.start(),
            range.end()
        )))
    }
}

fn de_attacks<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    de_bounded(deserializer, ATTACK_RANGE)
}

fn de_arc<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    de_bounded(deserializer, ARC_RANGE)
}

fn de_percent<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i32, D::Error> {
    de_bounded(deserializer, PERCENT_RANGE)
}

impl Default for CombatOptions {
    fn default() -> Self {
        Self {
            arena: false,
            max_monster_attacks: MAX_NUM_ATTACKS as u32,
            cleave_arc: CLEAVE_ARC_STEPS,
            cleave_damage_percent: CLEAVE_DAMAGE_PERCENT,
            confirm_unsuitable_weapon: true,
            msghistory: MSG_HISTORY,
        }
    }
}

impl CombatOptions {
    pub fn load_from_file(path: &Path) -> Result<Self, OptionsError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| OptionsError::Io(e.to_string()))?;
        Self::parse_config(&contents)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<(), OptionsError> {
        std::fs::write(path, self.to_config_string()).map_err(|e| OptionsError::Io(e.to_string()))
    }

    /// Parse options from config text, starting from the defaults.
    pub fn parse_config(contents: &str) -> Result<Self, OptionsError> {
        let mut options = Self::default();

        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some(opts) = line.strip_prefix("OPTIONS=") {
                for opt in opts.split(',').map(str::trim).filter(|o| !o.is_empty()) {
                    options.parse_option(opt)?;
                }
            } else {
                warn!(line, "ignoring unrecognised config line");
            }
        }

        Ok(options)
    }

    fn parse_option(&mut self, opt: &str) -> Result<(), OptionsError> {
        if let Some((key, value)) = opt.split_once(':').or_else(|| opt.split_once('=')) {
            return self.set_option(key.trim(), value.trim());
        }

        let (negated, name) = if let Some(name) = opt.strip_prefix('!') {
            (true, name)
        } else if let Some(name) = opt.strip_prefix("no") {
            (true, name)
        } else {
            (false, opt)
        };
        self.set_bool_option(name, !negated)
    }

    fn set_bool_option(&mut self, name: &str, value: bool) -> Result<(), OptionsError> {
        match name {
            "arena" => self.arena = value,
            "confirm_unsuitable_weapon" => self.confirm_unsuitable_weapon = value,
            "max_monster_attacks" | "cleave_arc" | "cleave_damage_percent" | "msghistory" => {
                return Err(OptionsError::MissingValue(name.to_string()));
            }
            _ => return Err(OptionsError::UnknownOption(name.to_string())),
        }
        Ok(())
    }

    fn set_option(&mut self, name: &str, value: &str) -> Result<(), OptionsError> {
        let invalid = || OptionsError::InvalidValue(name.to_string(), value.to_string());

        match name {
            "arena" | "confirm_unsuitable_weapon" => {
                let flag = match value.to_lowercase().as_str() {
                    "true" | "yes" | "on" | "1" => true,
                    "false" | "no" | "off" | "0" => false,
                    _ => return Err(invalid()),
                };
                self.set_bool_option(name, flag)?;
            }
            "max_monster_attacks" => {
                let n: u32 = value.parse().map_err(|_| invalid())?;
                if !ATTACK_RANGE.contains(&n) {
                    return Err(invalid());
                }
                self.max_monster_attacks = n;
            }
            "cleave_arc" => {
                let arc: u32 = value.parse().map_err(|_| invalid())?;
                if !ARC_RANGE.contains(&arc) {
                    return Err(invalid());
                }
                self.cleave_arc = arc;
            }
            "cleave_damage_percent" => {
                let pct: i32 = value.parse().map_err(|_| invalid())?;
                if !PERCENT_RANGE.contains(&pct) {
                    return Err(invalid());
                }
                self.cleave_damage_percent = pct;
            }
            "msghistory" => {
                self.msghistory = value.parse().map_err(|_| invalid())?;
            }
            _ => return Err(OptionsError::UnknownOption(name.to_string())),
        }
        Ok(())
    }

    /// Render the options in config file format.
    pub fn to_config_string(&self) -> String {
        let mut lines = Vec::new();
        lines.push("# combat options".to_string());
        lines.push(format!(
            "OPTIONS={}arena,{}confirm_unsuitable_weapon",
            if self.arena { "" } else { "!" },
            if self.confirm_unsuitable_weapon { "" } else { "!" },
        ));
        lines.push(format!(
            "OPTIONS=max_monster_attacks:{},cleave_arc:{},cleave_damage_percent:{}",
            self.max_monster_attacks, self.cleave_arc, self.cleave_damage_percent
        ));
        lines.push(format!("OPTIONS=msghistory:{}", self.msghistory));
        lines.join("\n")
    }
}
