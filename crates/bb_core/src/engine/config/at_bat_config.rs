//! At-Bat Model Configuration

use serde::{Deserialize, Serialize};

/// 하이브리드 타율/출루율 계산 파라미터
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AtBatConfig {
    // === AVG Blend ===
    /// 시즌 타율 가중치 (기본: 0.5)
    pub avg_overall_weight: f64,
    /// 상대 유형별 타율 가중치 (기본: 0.35)
    pub avg_split_weight: f64,
    /// BABIP 가중치 (기본: 0.15)
    pub avg_babip_weight: f64,

    // === OBP Blend ===
    /// 시즌 출루율 가중치 (기본: 0.5)
    pub obp_overall_weight: f64,
    /// 상대 유형별 출루율 가중치 (기본: 0.5)
    pub obp_split_weight: f64,

    // === Form ===
    /// 타석당 컨디션 하한 (기본: 0.95)
    pub form_min: f64,
    /// 타석당 컨디션 상한 (기본: 1.05)
    pub form_max: f64,

    // === wRC+ ===
    /// wRC+ 배율 하한 (기본: 0.75)
    pub wrc_factor_min: f64,
    /// wRC+ 배율 상한 (기본: 1.25)
    pub wrc_factor_max: f64,

    /// 투수 붕괴 시 배율
    pub collapse: CollapseEffect,
}

/// 붕괴 등판 시 타자 스탯 배율
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct CollapseEffect {
    /// 타율 배율 (기본: 1.25)
    pub avg: f64,
    /// 출루율 배율 (기본: 1.25)
    pub obp: f64,
    /// 장타율 배율 (기본: 1.2)
    pub slg: f64,
    /// 볼넷률 배율 (기본: 1.3)
    pub walk: f64,
    /// 삼진률 배율 (기본: 0.6)
    pub strikeout: f64,
}

impl Default for CollapseEffect {
    fn default() -> Self {
        Self { avg: 1.25, obp: 1.25, slg: 1.2, walk: 1.3, strikeout: 0.6 }
    }
}

impl Default for AtBatConfig {
    fn default() -> Self {
        Self {
            avg_overall_weight: 0.5,
            avg_split_weight: 0.35,
            avg_babip_weight: 0.15,

            obp_overall_weight: 0.5,
            obp_split_weight: 0.5,

            form_min: 0.95,
            form_max: 1.05,

            wrc_factor_min: 0.75,
            wrc_factor_max: 1.25,

            collapse: CollapseEffect::default(),
        }
    }
}
