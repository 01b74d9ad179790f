//! Bullpen Management Configuration

use serde::{Deserialize, Serialize};

/// 투수 교체 임계값
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BullpenConfig {
    // === Starter ===
    /// 선발 유지 피로 상한 (기본: 90)
    pub starter_fatigue_limit: f64,
    /// 선발 유지 실점 상한 (기본: 3)
    pub starter_runs_tolerated: u32,
    /// 조기 강판 실점 (기본: 5)
    pub starter_blowup_runs: u32,
    /// 조기 강판 최소 피로 (기본: 60)
    pub starter_blowup_fatigue: f64,
    /// 롱릴리프 가용 피로 (기본: 40)
    pub long_relief_fresh: f64,

    // === Leverage ===
    /// 세이브/하이 레버리지 시작 이닝 (기본: 9)
    pub save_inning_from: u8,
    /// 세이브 상황 최대 리드 (기본: 3)
    pub save_max_lead: i32,
    /// 미디엄 레버리지 시작 이닝 (기본: 7)
    pub medium_inning_from: u8,
    /// 미디엄 레버리지 점수차 (기본: 2)
    pub medium_max_margin: i32,
    /// 가비지 타임 점수차 (기본: 5)
    pub garbage_min_margin: i32,

    // === Relief Freshness ===
    /// 마무리 가용 피로 (기본: 20)
    pub closer_fresh: f64,
    /// 셋업 등판 이닝 (기본: 8)
    pub setup_inning: u8,
    /// 셋업 가용 피로 (기본: 20)
    pub setup_fresh: f64,
    /// 가비지 타임 가용 피로 (기본: 35)
    pub mop_up_fresh: f64,
    /// 하이 레버리지 가용 피로 (기본: 20)
    pub high_leverage_fresh: f64,
    /// 중간계투 가용 피로 (기본: 25)
    pub middle_relief_fresh: f64,
    /// 최후 대안 가용 피로 (기본: 30)
    pub any_arm_fresh: f64,
    /// 매치업 평가 타자 수 (기본: 3)
    pub matchup_lookahead: usize,
}

impl Default for BullpenConfig {
    fn default() -> Self {
        Self {
            starter_fatigue_limit: 90.0,
            starter_runs_tolerated: 3,
            starter_blowup_runs: 5,
            starter_blowup_fatigue: 60.0,
            long_relief_fresh: 40.0,

            save_inning_from: 9,
            save_max_lead: 3,
            medium_inning_from: 7,
            medium_max_margin: 2,
            garbage_min_margin: 5,

            closer_fresh: 20.0,
            setup_inning: 8,
            setup_fresh: 20.0,
            mop_up_fresh: 35.0,
            high_leverage_fresh: 20.0,
            middle_relief_fresh: 25.0,
            any_arm_fresh: 30.0,
            matchup_lookahead: 3,
        }
    }
}
