//! Pitcher Fatigue Configuration

use serde::{Deserialize, Serialize};

/// 투수 피로도 누적/저하 파라미터
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FatigueConfig {
    // === Accumulation ===
    /// 타자당 피로 (기본: 1.0)
    pub per_batter: f64,
    /// 피안타 추가 피로 (기본: 1.5)
    pub per_hit: f64,
    /// 볼넷 추가 피로 (기본: 1.2)
    pub per_walk: f64,
    /// 득점권 주자 스트레스 (기본: 0.8)
    pub high_stress: f64,

    // === Tiers ===
    /// 에이스 판정 quality 상한 (기본: 3.0)
    pub ace_quality_below: f64,
    /// 평균 이상 판정 quality 상한 (기본: 4.0)
    pub above_average_quality_below: f64,
    /// 에이스 피로 곡선 (기본: 100 → 120)
    pub ace_curve: FatigueCurve,
    /// 평균 이상 피로 곡선 (기본: 80 → 100)
    pub above_average_curve: FatigueCurve,
    /// 평균 이하 피로 곡선 (기본: 60 → 80)
    pub below_average_curve: FatigueCurve,

    // === Degradation ===
    /// severe 초과분 정규화 구간 (기본: 20.0)
    pub overflow_span: f64,
    /// 피로 비율 상한 (기본: 2.0)
    pub ratio_cap: f64,
    /// 삼진률 감소 기울기 (기본: 0.3)
    pub strikeout_slope: f64,
    /// 삼진률 배율 하한 (기본: 0.7)
    pub strikeout_floor: f64,
    /// 볼넷률 증가 기울기 (기본: 0.5)
    pub walk_slope: f64,
    /// 볼넷률 배율 상한 (기본: 1.5)
    pub walk_cap: f64,
    /// 제구 저하 기울기 (기본: 0.15)
    pub control_slope: f64,
    /// 제구 배율 상한 (기본: 1.15)
    pub control_cap: f64,

    // === Collapse ===
    /// 붕괴 사용 여부 (기본: true)
    pub collapse_enabled: bool,
    /// quality 구간별 붕괴 확률 `(quality 상한, 확률)`, 오름차순
    pub collapse_table: Vec<(f64, f64)>,
    /// 테이블 밖 quality 의 붕괴 확률 (기본: 0.08)
    pub collapse_floor: f64,
}

/// 피로 저하 시작/심화 지점
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FatigueCurve {
    pub start: f64,
    pub severe: f64,
}

impl Default for FatigueConfig {
    fn default() -> Self {
        Self {
            per_batter: 1.0,
            per_hit: 1.5,
            per_walk: 1.2,
            high_stress: 0.8,

            ace_quality_below: 3.0,
            above_average_quality_below: 4.0,
            ace_curve: FatigueCurve { start: 100.0, severe: 120.0 },
            above_average_curve: FatigueCurve { start: 80.0, severe: 100.0 },
            below_average_curve: FatigueCurve { start: 60.0, severe: 80.0 },

            overflow_span: 20.0,
            ratio_cap: 2.0,
            strikeout_slope: 0.3,
            strikeout_floor: 0.7,
            walk_slope: 0.5,
            walk_cap: 1.5,
            control_slope: 0.15,
            control_cap: 1.15,

            collapse_enabled: true,
            collapse_table: vec![(3.0, 0.01), (3.5, 0.02), (4.0, 0.03), (5.0, 0.05)],
            collapse_floor: 0.08,
        }
    }
}
