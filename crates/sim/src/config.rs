//! Session-wide configuration, grouped per subsystem.

use blockworld_core::BlockType;
use blockworld_player::PlayerConfig;
use blockworld_world::{TargetingConfig, WorldGenConfig};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Everything needed to start a session. Missing sections fall back to defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// World seed; a random one is drawn when absent.
    pub seed: Option<u64>,
    /// Player body and movement.
    pub player: PlayerConfig,
    /// Terrain and trees.
    pub world: WorldGenConfig,
    /// Break/place reach.
    pub targeting: TargetingConfig,
    /// Placeable block types in slot order.
    pub hotbar: Vec<BlockType>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: None,
            player: PlayerConfig::default(),
            world: WorldGenConfig::default(),
            targeting: TargetingConfig::default(),
            hotbar: BlockType::ALL.to_vec(),
        }
    }
}

/// Invalid session configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// No placeable block types.
    #[error("hotbar must list at least one block type")]
    EmptyHotbar,
    /// Tree chance is not a probability.
    #[error("tree probability {0} is outside [0, 1]")]
    TreeProbability(f64),
    /// Trunk height bounds are inverted or below one block.
    #[error("invalid trunk height range {min}..={max}")]
    TrunkRange {
        /// Configured minimum.
        min: i32,
        /// Configured maximum.
        max: i32,
    },
    /// A quantity that must be strictly positive is not.
    #[error("{field} must be positive, got {value}")]
    NotPositive {
        /// Offending setting.
        field: &'static str,
        /// Configured value.
        value: f32,
    },
    /// A setting is NaN or infinite.
    #[error("{field} must be finite")]
    NonFinite {
        /// Offending setting.
        field: &'static str,
    },
    /// The ground plane would be empty.
    #[error("world half width must be positive, got {0}")]
    HalfWidth(i32),
}

impl SessionConfig {
    /// Check cross-field constraints that serde defaults cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hotbar.is_empty() {
            return Err(ConfigError::EmptyHotbar);
        }

        let p = self.world.tree_probability;
        if !(0.0..=1.0).contains(&p) {
            return Err(ConfigError::TreeProbability(p));
        }
        let (min, max) = (self.world.trunk_height_min, self.world.trunk_height_max);
        if min < 1 || max < min {
            return Err(ConfigError::TrunkRange { min, max });
        }
        if self.world.half_width <= 0 {
            return Err(ConfigError::HalfWidth(self.world.half_width));
        }

        let positive = [
            ("targeting.placement_range", self.targeting.placement_range),
            ("player.standing_height", self.player.standing_height),
            ("player.crouch_height", self.player.crouch_height),
            ("player.half_width", self.player.half_width),
        ];
        for (field, value) in positive {
            if value.is_nan() || value <= 0.0 {
                return Err(ConfigError::NotPositive { field, value });
            }
        }

        if !self.player.spawn.is_finite() {
            return Err(ConfigError::NonFinite {
                field: "player.spawn",
            });
        }
        let finite = positive.into_iter().chain([
            ("player.move_speed", self.player.move_speed),
            ("player.sprint_speed", self.player.sprint_speed),
            ("player.jump_speed", self.player.jump_speed),
            ("player.gravity", self.player.gravity),
            ("player.look_sensitivity", self.player.look_sensitivity),
            ("player.snap_tolerance", self.player.snap_tolerance),
            ("player.resting_epsilon", self.player.resting_epsilon),
        ]);
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(SessionConfig::default().validate(), Ok(()));
    }

    #[test]
    fn empty_hotbar_is_rejected() {
        let config = SessionConfig {
            hotbar: Vec::new(),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::EmptyHotbar));
    }

    #[test]
    fn probability_must_be_in_unit_range() {
        let mut config = SessionConfig::default();
        config.world.tree_probability = 1.5;
        assert_eq!(config.validate(), Err(ConfigError::TreeProbability(1.5)));
    }

    #[test]
    fn inverted_trunk_range_is_rejected() {
        let mut config = SessionConfig::default();
        config.world.trunk_height_min = 6;
        config.world.trunk_height_max = 5;
        assert_eq!(
            config.validate(),
            Err(ConfigError::TrunkRange { min: 6, max: 5 })
        );
    }

    #[test]
    fn nan_range_is_rejected() {
        let mut config = SessionConfig::default();
        config.targeting.placement_range = f32::NAN;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotPositive {
                field: "targeting.placement_range",
                ..
            })
        ));
    }

    #[test]
    fn nan_spawn_is_rejected() {
        let mut config = SessionConfig::default();
        config.player.spawn.y = f32::NAN;
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonFinite {
                field: "player.spawn"
            })
        );
    }

    #[test]
    fn infinite_gravity_is_rejected() {
        let mut config = SessionConfig::default();
        config.player.gravity = f32::NEG_INFINITY;
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonFinite {
                field: "player.gravity"
            })
        );
    }

    #[test]
    fn infinite_range_is_rejected() {
        let mut config = SessionConfig::default();
        config.targeting.placement_range = f32::INFINITY;
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonFinite {
                field: "targeting.placement_range"
            })
        );
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let config: SessionConfig =
            serde_json::from_str(r#"{ "seed": 7, "world": { "half_width": 4 } }"#)
                .expect("valid config");
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.world.half_width, 4);
        assert_eq!(config.world.tree_probability, 0.02);
        assert_eq!(config.player, PlayerConfig::default());
        assert_eq!(config.hotbar.len(), BlockType::ALL.len());
    }
}
