//! # Simulation Configuration Module
//!
//! 시뮬레이션의 모든 튜닝 상수를 한 곳에서 관리한다.
//!
//! ## 사용법
//! ```rust
//! use bb_core::engine::config::SimConfig;
//!
//! let config = SimConfig::default();
//! let calibration = SimConfig::no_randomness();
//! assert!(config.validate().is_ok());
//! assert!(!calibration.fatigue.collapse_enabled);
//! ```

mod at_bat_config;
mod bullpen_config;
mod fatigue_config;
mod profile_config;
mod running_config;

pub use at_bat_config::{AtBatConfig, CollapseEffect};
pub use bullpen_config::BullpenConfig;
pub use fatigue_config::{FatigueConfig, FatigueCurve};
pub use profile_config::ProfileConfig;
pub use running_config::{RunningConfig, StealConfig};

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// 경기 길이
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// 정규 이닝 (기본: 9)
    pub regulation_innings: u8,
    /// 연장 포함 최대 이닝 (기본: 12)
    pub max_innings: u8,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self { regulation_innings: 9, max_innings: 12 }
    }
}

/// 전체 시뮬레이션 설정
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SimConfig {
    #[serde(default)]
    pub profile: ProfileConfig,
    #[serde(default)]
    pub at_bat: AtBatConfig,
    #[serde(default)]
    pub fatigue: FatigueConfig,
    #[serde(default)]
    pub running: RunningConfig,
    #[serde(default)]
    pub steal: StealConfig,
    #[serde(default)]
    pub bullpen: BullpenConfig,
    #[serde(default)]
    pub game: GameConfig,
}

impl SimConfig {
    /// 표준 KBO 설정 (기본)
    pub fn standard() -> Self {
        Self::default()
    }

    /// 보정용: 타석 컨디션 변동과 투수 붕괴를 끈다
    pub fn no_randomness() -> Self {
        let mut cfg = Self::default();
        cfg.at_bat.form_min = 1.0;
        cfg.at_bat.form_max = 1.0;
        cfg.fatigue.collapse_enabled = false;
        cfg
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.profile.season_weights.is_empty() {
            return Err(ConfigError::EmptySeasonWeights);
        }
        for (&season, &weight) in &self.profile.season_weights {
            if weight <= 0.0 || !weight.is_finite() {
                return Err(ConfigError::NonPositiveSeasonWeight { season, weight });
            }
        }

        let running = &self.running;
        let probabilities = [
            ("profile.steal_attempt_cap", self.profile.steal_attempt_cap),
            ("profile.default_steal_success", self.profile.default_steal_success),
            ("running.sac_fly_base", running.sac_fly_base),
            ("running.dp_runner_on_first", running.dp_runner_on_first),
            ("running.dp_bases_loaded", running.dp_bases_loaded),
            ("running.dp_first_and_second", running.dp_first_and_second),
            ("running.dp_first_and_third", running.dp_first_and_third),
            ("running.out_third_scores", running.out_third_scores),
            ("running.out_second_advances", running.out_second_advances),
            ("running.single_second_scores", running.single_second_scores),
            ("running.double_first_scores", running.double_first_scores),
            ("fatigue.collapse_floor", self.fatigue.collapse_floor),
        ];
        for (name, value) in probabilities {
            check_probability(name, value)?;
        }
        for (i, &(_, p)) in self.fatigue.collapse_table.iter().enumerate() {
            check_probability(&format!("fatigue.collapse_table[{i}]"), p)?;
        }

        check_range("at_bat.form", self.at_bat.form_min, self.at_bat.form_max)?;
        check_range("at_bat.wrc_factor", self.at_bat.wrc_factor_min, self.at_bat.wrc_factor_max)?;
        for (name, curve) in [
            ("fatigue.ace_curve", self.fatigue.ace_curve),
            ("fatigue.above_average_curve", self.fatigue.above_average_curve),
            ("fatigue.below_average_curve", self.fatigue.below_average_curve),
        ] {
            check_range(name, curve.start, curve.severe)?;
        }
        if self.fatigue.overflow_span <= 0.0 {
            return Err(ConfigError::NonPositive {
                name: "fatigue.overflow_span",
                value: self.fatigue.overflow_span,
            });
        }
        if self.game.regulation_innings == 0 {
            return Err(ConfigError::NonPositive { name: "game.regulation_innings", value: 0.0 });
        }
        check_range(
            "game.innings",
            self.game.regulation_innings as f64,
            self.game.max_innings as f64,
        )?;
        Ok(())
    }
}

fn check_probability(name: &str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::ProbabilityOutOfRange { name: name.to_string(), value })
    }
}

fn check_range(name: &'static str, low: f64, high: f64) -> Result<(), ConfigError> {
    if low > high {
        Err(ConfigError::InvertedRange { name, low, high })
    } else {
        Ok(())
    }
}

// ========== Tests ==========

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = SimConfig::default();
        assert!((cfg.at_bat.avg_overall_weight - 0.5).abs() < 1e-9);
        assert!((cfg.fatigue.per_hit - 1.5).abs() < 1e-9);
        assert_eq!(cfg.game.max_innings, 12);
        assert_eq!(cfg.profile.weight_for(2025), Some(0.5));
        assert_eq!(cfg.profile.weight_for(2019), None);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_no_randomness_preset() {
        let cfg = SimConfig::no_randomness();
        assert_eq!(cfg.at_bat.form_min, cfg.at_bat.form_max);
        assert!(!cfg.fatigue.collapse_enabled);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_probability() {
        let mut cfg = SimConfig::default();
        cfg.running.dp_bases_loaded = 1.4;
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::ProbabilityOutOfRange { ref name, .. }) if name == "running.dp_bases_loaded"
        ));
    }

    #[test]
    fn test_validate_rejects_inverted_curve() {
        let mut cfg = SimConfig::default();
        cfg.fatigue.ace_curve = FatigueCurve { start: 130.0, severe: 120.0 };
        assert!(matches!(cfg.validate(), Err(ConfigError::InvertedRange { .. })));
    }

    #[test]
    fn test_validate_rejects_empty_weights() {
        let mut cfg = SimConfig::default();
        cfg.profile.season_weights.clear();
        assert_eq!(cfg.validate(), Err(ConfigError::EmptySeasonWeights));
    }

    #[test]
    fn test_config_serialization() {
        let cfg = SimConfig::default();
        let json = cfg.to_json().unwrap();
        let parsed = SimConfig::from_json(&json).unwrap();
        assert_eq!(parsed.profile.season_weights, cfg.profile.season_weights);
        assert_eq!(parsed.fatigue.collapse_table, cfg.fatigue.collapse_table);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let parsed = SimConfig::from_json(r#"{ "game": { "regulation_innings": 7, "max_innings": 9 } }"#)
            .unwrap();
        assert_eq!(parsed.game.regulation_innings, 7);
        assert!((parsed.running.sac_fly_base - 0.035).abs() < 1e-9);
    }
}
