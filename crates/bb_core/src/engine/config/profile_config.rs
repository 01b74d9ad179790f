//! Profile Derivation Configuration

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 시즌 가중치 + 중립 기본값
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    /// 시즌별 가중치 (기본: 2025=0.5, 2024=0.35, 2023=0.15)
    pub season_weights: BTreeMap<u16, f64>,

    // === Steal ===
    /// 도루 시도율 상한 (기본: 0.15)
    pub steal_attempt_cap: f64,
    /// SB% 컬럼이 없을 때 도루 성공률 (기본: 0.7)
    pub default_steal_success: f64,

    // === Neutral Defaults ===
    /// 장타력 기본값 (기본: 0.4)
    pub neutral_power: f64,
    /// ERA/FIP 기본값 (기본: 4.5)
    pub neutral_run_rate: f64,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            season_weights: BTreeMap::from([(2023, 0.15), (2024, 0.35), (2025, 0.5)]),
            steal_attempt_cap: 0.15,
            default_steal_success: 0.7,
            neutral_power: 0.4,
            neutral_run_rate: 4.5,
        }
    }
}

impl ProfileConfig {
    /// 해당 시즌의 가중치 (스케줄에 없으면 None)
    pub fn weight_for(&self, season: u16) -> Option<f64> {
        self.season_weights.get(&season).copied()
    }
}
