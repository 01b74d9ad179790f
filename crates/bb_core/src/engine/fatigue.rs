//! Pitcher fatigue & collapse model
//!
//! Fatigue is an additive per-pitcher counter. Quality places a pitcher on one
//! of three degradation curves; past the curve's start point the pitcher's
//! strikeout rate drops, walks rise and hitters gain a control bonus.
//!
//! Collapse is a separate bad-outing flag rolled once per mound appearance.

use super::config::{FatigueConfig, FatigueCurve};
use super::probability::PlateOutcome;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// 투수 등급 (quality 기준)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FatigueTier {
    /// quality < 3.0
    Ace,
    /// 3.0 <= quality < 4.0
    AboveAverage,
    /// quality >= 4.0
    BelowAverage,
}

impl FatigueTier {
    pub fn from_quality(quality: f64, cfg: &FatigueConfig) -> Self {
        if quality < cfg.ace_quality_below {
            FatigueTier::Ace
        } else if quality < cfg.above_average_quality_below {
            FatigueTier::AboveAverage
        } else {
            FatigueTier::BelowAverage
        }
    }

    pub fn curve(self, cfg: &FatigueConfig) -> FatigueCurve {
        match self {
            FatigueTier::Ace => cfg.ace_curve,
            FatigueTier::AboveAverage => cfg.above_average_curve,
            FatigueTier::BelowAverage => cfg.below_average_curve,
        }
    }
}

/// 피로에 따른 능력 저하 배율
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FatiguePenalty {
    /// 삼진률 배율 (<= 1.0)
    pub strikeout: f64,
    /// 볼넷률 배율 (>= 1.0)
    pub walk: f64,
    /// 타자 타율/출루율 배율 (>= 1.0)
    pub control: f64,
}

impl FatiguePenalty {
    pub const NONE: Self = Self { strikeout: 1.0, walk: 1.0, control: 1.0 };
}

impl Default for FatiguePenalty {
    fn default() -> Self {
        Self::NONE
    }
}

/// 피로 진행 비율
///
/// - start 미만: 0
/// - start ~ severe: 0 → 1 선형
/// - severe 초과: 1 + 초과분 / 20, 최대 2.0
pub fn fatigue_ratio(quality: f64, fatigue: f64, cfg: &FatigueConfig) -> f64 {
    let FatigueCurve { start, severe } = FatigueTier::from_quality(quality, cfg).curve(cfg);

    if fatigue < start {
        0.0
    } else if fatigue < severe {
        (fatigue - start) / (severe - start)
    } else {
        (1.0 + (fatigue - severe) / cfg.overflow_span).min(cfg.ratio_cap)
    }
}

pub fn fatigue_penalty(quality: f64, fatigue: f64, cfg: &FatigueConfig) -> FatiguePenalty {
    let ratio = fatigue_ratio(quality, fatigue, cfg);
    if ratio <= 0.0 {
        return FatiguePenalty::NONE;
    }

    FatiguePenalty {
        strikeout: (1.0 - cfg.strikeout_slope * ratio).max(cfg.strikeout_floor),
        walk: (1.0 + cfg.walk_slope * ratio).min(cfg.walk_cap),
        control: (1.0 + cfg.control_slope * ratio).min(cfg.control_cap),
    }
}

/// 타석 하나가 투수에게 주는 피로
pub fn fatigue_cost(outcome: PlateOutcome, runner_in_scoring_position: bool, cfg: &FatigueConfig) -> f64 {
    let mut cost = cfg.per_batter;
    if outcome.is_hit() {
        cost += cfg.per_hit;
    } else if outcome == PlateOutcome::Walk {
        cost += cfg.per_walk;
    }
    if runner_in_scoring_position {
        cost += cfg.high_stress;
    }
    cost
}

/// 붕괴 확률 (quality 구간 테이블)
pub fn collapse_probability(quality: f64, cfg: &FatigueConfig) -> f64 {
    cfg.collapse_table
        .iter()
        .find(|&&(below, _)| quality < below)
        .map_or(cfg.collapse_floor, |&(_, p)| p)
}

/// 등판마다 한 번 붕괴 여부 결정
pub fn roll_collapse(quality: f64, cfg: &FatigueConfig, rng: &mut impl Rng) -> bool {
    if !cfg.collapse_enabled {
        return false;
    }
    rng.gen::<f64>() < collapse_probability(quality, cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::probability::HitType;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn cfg() -> FatigueConfig {
        FatigueConfig::default()
    }

    #[test]
    fn test_tiers() {
        let cfg = cfg();
        assert_eq!(FatigueTier::from_quality(2.5, &cfg), FatigueTier::Ace);
        assert_eq!(FatigueTier::from_quality(3.0, &cfg), FatigueTier::AboveAverage);
        assert_eq!(FatigueTier::from_quality(3.99, &cfg), FatigueTier::AboveAverage);
        assert_eq!(FatigueTier::from_quality(4.0, &cfg), FatigueTier::BelowAverage);
    }

    #[test]
    fn test_ace_below_start_has_no_penalty() {
        // quality 2.5, fatigue 70 < 100
        let penalty = fatigue_penalty(2.5, 70.0, &cfg());
        assert_eq!(penalty, FatiguePenalty::NONE);
    }

    #[test]
    fn test_below_average_heavy_fatigue_hits_caps() {
        // quality 4.5 → (60, 80), fatigue 90 → ratio 1.5
        let cfg = cfg();
        assert!((fatigue_ratio(4.5, 90.0, &cfg) - 1.5).abs() < 1e-9);

        let penalty = fatigue_penalty(4.5, 90.0, &cfg);
        assert!((penalty.strikeout - 0.7).abs() < 1e-9);
        assert!((penalty.walk - 1.5).abs() < 1e-9);
        assert!((penalty.control - 1.15).abs() < 1e-9);
    }

    #[test]
    fn test_linear_region() {
        // quality 3.5 → (80, 100), fatigue 90 → ratio 0.5
        let cfg = cfg();
        assert!((fatigue_ratio(3.5, 90.0, &cfg) - 0.5).abs() < 1e-9);
        let penalty = fatigue_penalty(3.5, 90.0, &cfg);
        assert!((penalty.strikeout - 0.85).abs() < 1e-9);
        assert!((penalty.walk - 1.25).abs() < 1e-9);
        assert!((penalty.control - 1.075).abs() < 1e-9);
    }

    #[test]
    fn test_ratio_capped() {
        let cfg = cfg();
        assert!((fatigue_ratio(4.5, 500.0, &cfg) - 2.0).abs() < 1e-9);
        assert_eq!(fatigue_ratio(2.5, 0.0, &cfg), 0.0);
    }

    #[test]
    fn test_fatigue_costs() {
        let cfg = cfg();
        assert!((fatigue_cost(PlateOutcome::Out, false, &cfg) - 1.0).abs() < 1e-9);
        assert!((fatigue_cost(PlateOutcome::Strikeout, true, &cfg) - 1.8).abs() < 1e-9);
        assert!((fatigue_cost(PlateOutcome::Walk, false, &cfg) - 2.2).abs() < 1e-9);
        assert!((fatigue_cost(PlateOutcome::Hit(HitType::HomeRun), true, &cfg) - 3.3).abs() < 1e-9);
    }

    #[test]
    fn test_collapse_table() {
        let cfg = cfg();
        assert_eq!(collapse_probability(2.9, &cfg), 0.01);
        assert_eq!(collapse_probability(3.2, &cfg), 0.02);
        assert_eq!(collapse_probability(3.7, &cfg), 0.03);
        assert_eq!(collapse_probability(4.5, &cfg), 0.05);
        assert_eq!(collapse_probability(6.1, &cfg), 0.08);
    }

    #[test]
    fn test_collapse_disabled_never_rolls() {
        let mut cfg = cfg();
        cfg.collapse_enabled = false;
        cfg.collapse_floor = 1.0;
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        assert!((0..100).all(|_| !roll_collapse(9.0, &cfg, &mut rng)));
    }

    #[test]
    fn test_collapse_rate_roughly_matches_table() {
        let cfg = cfg();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let n = 20_000;
        let hits = (0..n).filter(|_| roll_collapse(6.0, &cfg, &mut rng)).count();
        let rate = hits as f64 / n as f64;
        assert!((rate - 0.08).abs() < 0.01, "rate = {rate}");
    }
}
