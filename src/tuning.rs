//! Data-driven game balance
//!
//! Every value defaults to the constants in [`crate::consts`], so a config
//! file only needs to name the fields it overrides.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Gameplay tunables consumed by the simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Lives at the start of a play-through
    pub start_lives: u32,
    /// Delay before the first spawn (seconds)
    pub initial_spawn_delay: f64,
    /// Delay between subsequent spawns (seconds)
    pub spawn_interval: f64,
    /// Target lifespan (seconds)
    pub target_lifespan: f64,
    /// Horizontal impulse range, inclusive
    pub impulse_x: (f32, f32),
    /// Vertical impulse
    pub impulse_y: f32,
    /// Torque range, inclusive
    pub torque: (f32, f32),
    /// Anchor distance in front of the camera
    pub anchor_distance: f32,
    /// Glyph multiset; duplicates weight the draw
    pub glyphs: Vec<char>,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            start_lives: START_LIVES,
            initial_spawn_delay: INITIAL_SPAWN_DELAY,
            spawn_interval: SPAWN_INTERVAL,
            target_lifespan: TARGET_LIFESPAN,
            impulse_x: (IMPULSE_X_MIN, IMPULSE_X_MAX),
            impulse_y: IMPULSE_Y,
            torque: (TORQUE_MIN, TORQUE_MAX),
            anchor_distance: ANCHOR_DISTANCE,
            glyphs: EMOJIS.to_vec(),
        }
    }
}

impl Tuning {
    /// Reject values the simulation can't run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.start_lives == 0 {
            return Err(ConfigError::InvalidTuning("start_lives must be at least 1".into()));
        }
        if self.initial_spawn_delay.is_nan() || self.initial_spawn_delay < 0.0 {
            return Err(ConfigError::InvalidTuning(format!(
                "initial_spawn_delay must be >= 0, got {}",
                self.initial_spawn_delay
            )));
        }
        if self.spawn_interval.is_nan() || self.spawn_interval <= 0.0 {
            return Err(ConfigError::InvalidTuning(format!(
                "spawn_interval must be > 0, got {}",
                self.spawn_interval
            )));
        }
        if self.target_lifespan.is_nan() || self.target_lifespan <= 0.0 {
            return Err(ConfigError::InvalidTuning(format!(
                "target_lifespan must be > 0, got {}",
                self.target_lifespan
            )));
        }
        check_range("impulse_x", self.impulse_x)?;
        check_range("torque", self.torque)?;
        if !self.impulse_y.is_finite() || !self.anchor_distance.is_finite() {
            return Err(ConfigError::InvalidTuning(
                "impulse_y and anchor_distance must be finite".into(),
            ));
        }
        if self.glyphs.is_empty() {
            return Err(ConfigError::InvalidTuning("glyph set is empty".into()));
        }
        Ok(())
    }
}

fn check_range(name: &str, (min, max): (f32, f32)) -> Result<(), ConfigError> {
    if min.is_finite() && max.is_finite() && min <= max {
        Ok(())
    } else {
        Err(ConfigError::InvalidTuning(format!(
            "{name} range is invalid: [{min}, {max}]"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let tuning = Tuning::default();
        assert!(tuning.validate().is_ok());
        assert_eq!(tuning.start_lives, 10);
        assert_eq!(tuning.glyphs.len(), 12);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning: Tuning = serde_json::from_str(r#"{ "start_lives": 3 }"#).unwrap();
        assert_eq!(tuning.start_lives, 3);
        assert_eq!(tuning.spawn_interval, SPAWN_INTERVAL);
        assert_eq!(tuning.impulse_x, (IMPULSE_X_MIN, IMPULSE_X_MAX));
    }

    #[test]
    fn test_rejects_bad_values() {
        let empty = Tuning {
            glyphs: Vec::new(),
            ..Default::default()
        };
        assert!(matches!(empty.validate(), Err(ConfigError::InvalidTuning(_))));

        let inverted = Tuning {
            torque: (0.2, -0.2),
            ..Default::default()
        };
        assert!(inverted.validate().is_err());

        let stalled = Tuning {
            spawn_interval: 0.0,
            ..Default::default()
        };
        assert!(stalled.validate().is_err());

        let nan = Tuning {
            target_lifespan: f64::NAN,
            ..Default::default()
        };
        assert!(nan.validate().is_err());

        for delay in [-0.5, f64::NAN] {
            let early = Tuning {
                initial_spawn_delay: delay,
                ..Default::default()
            };
            assert!(early.validate().is_err());
        }
        let zero_delay = Tuning {
            initial_spawn_delay: 0.0,
            ..Default::default()
        };
        assert!(zero_delay.validate().is_ok());
    }
}
