//! Tunable parameters for a labyrinth game.
//!
//! Every field falls back to the matching constant in [`super::constants`], so a
//! partial JSON document only overrides what it names.

use super::constants::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("grid must be at least 2x2, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    #[error("a labyrinth needs at least one floor")]
    NoFloors,
    #[error("initial search radius {initial} exceeds maximum {max}")]
    SearchRadius { initial: u32, max: u32 },
    #[error("player max health must be positive")]
    InvalidHealth,
    #[error("{name} must be within [0, 1], got {value}")]
    Probability { name: &'static str, value: f64 },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabyrinthConfig {
    pub width: usize,
    pub height: usize,
    pub num_floors: usize,
    pub items_per_floor: usize,
    pub static_items_per_floor: usize,
    pub base_enemies: usize,
    pub enemies_per_floor: usize,
    pub torch_chance: f64,
    pub lit_torch_chance: f64,
    pub hidden_passage_chance: f64,
    pub boss_ambient_chance: f64,
    pub player_max_health: u32,
    pub base_attack: u32,
    pub base_defense: u32,
    pub initial_search_radius: u32,
    pub max_search_radius: u32,
    pub trap_damage: u32,
}

impl Default for LabyrinthConfig {
    fn default() -> Self {
        Self {
            width: MAP_WIDTH,
            height: MAP_HEIGHT,
            num_floors: NUM_FLOORS,
            items_per_floor: ITEMS_PER_FLOOR,
            static_items_per_floor: STATIC_ITEMS_PER_FLOOR,
            base_enemies: BASE_ENEMIES_PER_FLOOR,
            enemies_per_floor: EXTRA_ENEMIES_PER_DEPTH,
            torch_chance: TORCH_CHANCE,
            lit_torch_chance: LIT_TORCH_CHANCE,
            hidden_passage_chance: HIDDEN_PASSAGE_CHANCE,
            boss_ambient_chance: BOSS_AMBIENT_CHANCE,
            player_max_health: PLAYER_MAX_HEALTH,
            base_attack: PLAYER_BASE_ATTACK,
            base_defense: PLAYER_BASE_DEFENSE,
            initial_search_radius: INITIAL_SEARCH_RADIUS,
            max_search_radius: MAX_SEARCH_RADIUS,
            trap_damage: TRAP_DAMAGE,
        }
    }
}

impl LabyrinthConfig {
    /// Parses and validates a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width < 2 || self.height < 2 {
            return Err(ConfigError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.num_floors == 0 {
            return Err(ConfigError::NoFloors);
        }
        if self.initial_search_radius > self.max_search_radius {
            return Err(ConfigError::SearchRadius {
                initial: self.initial_search_radius,
                max: self.max_search_radius,
            });
        }
        if self.player_max_health == 0 {
            return Err(ConfigError::InvalidHealth);
        }
        let chances = [
            ("torch_chance", self.torch_chance),
            ("lit_torch_chance", self.lit_torch_chance),
            ("hidden_passage_chance", self.hidden_passage_chance),
            ("boss_ambient_chance", self.boss_ambient_chance),
        ];
        for (name, value) in chances {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::Probability { name, value });
            }
        }
        Ok(())
    }

    /// Index of the deepest floor, where the boss and the exit live.
    pub fn final_floor(&self) -> usize {
        self.num_floors - 1
    }

    /// Regular enemies placed on `floor`; deeper floors are more crowded.
    pub fn enemies_on_floor(&self, floor: usize) -> usize {
        self.base_enemies + floor * self.enemies_per_floor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = LabyrinthConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.width, 20);
        assert_eq!(config.height, 20);
        assert_eq!(config.final_floor(), 2);
    }

    #[test]
    fn test_enemies_scale_with_depth() {
        let config = LabyrinthConfig::default();
        assert_eq!(config.enemies_on_floor(0), 3);
        assert_eq!(config.enemies_on_floor(1), 5);
        assert_eq!(config.enemies_on_floor(2), 7);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = LabyrinthConfig::from_json(r#"{"width": 6, "height": 5}"#).unwrap();
        assert_eq!(config.width, 6);
        assert_eq!(config.height, 5);
        assert_eq!(config.num_floors, NUM_FLOORS);
        assert_eq!(config.player_max_health, PLAYER_MAX_HEALTH);
    }

    #[test]
    fn test_rejects_tiny_grid() {
        let err = LabyrinthConfig::from_json(r#"{"width": 1}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDimensions { width: 1, .. }));
    }

    #[test]
    fn test_rejects_zero_floors() {
        let config = LabyrinthConfig {
            num_floors: 0,
            ..LabyrinthConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::NoFloors)));
    }

    #[test]
    fn test_rejects_inverted_search_radius() {
        let config = LabyrinthConfig {
            initial_search_radius: 4,
            max_search_radius: 2,
            ..LabyrinthConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::SearchRadius { initial: 4, max: 2 })
        ));
    }

    #[test]
    fn test_rejects_out_of_range_probability() {
        let config = LabyrinthConfig {
            torch_chance: 1.5,
            ..LabyrinthConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("torch_chance"));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = LabyrinthConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
