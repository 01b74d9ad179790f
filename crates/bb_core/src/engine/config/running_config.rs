//! Base Running Configuration (batted balls, double plays, steals)

use serde::{Deserialize, Serialize};

/// 진루/병살/희생플라이 확률
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RunningConfig {
    // === Sacrifice Fly ===
    /// 희생플라이 기본 확률 (기본: 0.035)
    pub sac_fly_base: f64,
    /// 장타율 기준점 (기본: 0.4)
    pub sac_fly_slg_pivot: f64,
    /// 장타율 보정 계수 (기본: 0.5)
    pub sac_fly_slg_scale: f64,

    // === Double Play ===
    /// 1루 주자만 (기본: 0.12)
    pub dp_runner_on_first: f64,
    /// 만루 (기본: 0.10)
    pub dp_bases_loaded: f64,
    /// 1,2루 (기본: 0.11)
    pub dp_first_and_second: f64,
    /// 1,3루 (기본: 0.09)
    pub dp_first_and_third: f64,

    // === Out Advancement ===
    /// 일반 아웃 시 3루 주자 득점 (기본: 0.15)
    pub out_third_scores: f64,
    /// 일반 아웃 시 2루 주자 3루 진루 (기본: 0.25)
    pub out_second_advances: f64,

    // === Hits ===
    /// 단타 시 2루 주자 득점 (기본: 0.30)
    pub single_second_scores: f64,
    /// 2루타 시 1루 주자 득점 (기본: 0.40)
    pub double_first_scores: f64,
}

impl Default for RunningConfig {
    fn default() -> Self {
        Self {
            sac_fly_base: 0.035,
            sac_fly_slg_pivot: 0.4,
            sac_fly_slg_scale: 0.5,

            dp_runner_on_first: 0.12,
            dp_bases_loaded: 0.10,
            dp_first_and_second: 0.11,
            dp_first_and_third: 0.09,

            out_third_scores: 0.15,
            out_second_advances: 0.25,

            single_second_scores: 0.30,
            double_first_scores: 0.40,
        }
    }
}

/// 도루 상황별 가중치
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StealConfig {
    /// 3점 초과 리드 (기본: 0.3)
    pub score_ahead: f64,
    /// 2점 이내 접전 (기본: 1.0)
    pub score_close: f64,
    /// 3점 이상 열세 (기본: 1.3)
    pub score_behind: f64,
    /// 후반 시작 이닝 (기본: 7)
    pub late_inning_from: u8,
    /// 후반 가중치 (기본: 1.2)
    pub late_inning: f64,
    /// 2아웃 가중치 (기본: 0.4)
    pub two_outs: f64,
    /// 강타자 판정 장타력 (기본: 0.5)
    pub power_threshold: f64,
    /// 다음 타자 강타자 가중치 (기본: 0.5)
    pub power_hitter: f64,
}

impl Default for StealConfig {
    fn default() -> Self {
        Self {
            score_ahead: 0.3,
            score_close: 1.0,
            score_behind: 1.3,
            late_inning_from: 7,
            late_inning: 1.2,
            two_outs: 0.4,
            power_threshold: 0.5,
            power_hitter: 0.5,
        }
    }
}
