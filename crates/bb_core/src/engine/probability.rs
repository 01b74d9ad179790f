//! At-bat outcome model
//!
//! Season profile + matchup + pitcher state → adjusted rates → one outcome draw.
//! Everything except the two `draw_*` functions is pure, so the rate pipeline
//! can be tested without a game in progress.

use super::config::AtBatConfig;
use super::fatigue::FatiguePenalty;
use crate::models::{Delivery, HitterProfile};
use rand::Rng;
use serde::{Deserialize, Serialize};

// ============================================================================
// Outcomes
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HitType {
    Single,
    Double,
    Triple,
    HomeRun,
}

impl HitType {
    pub const ALL: [HitType; 4] = [HitType::Single, HitType::Double, HitType::Triple, HitType::HomeRun];
}

/// 타석 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlateOutcome {
    Strikeout,
    Walk,
    Hit(HitType),
    /// 인플레이 아웃 (땅볼/뜬공 구분 없음)
    Out,
}

impl PlateOutcome {
    #[inline]
    pub fn is_hit(self) -> bool {
        matches!(self, PlateOutcome::Hit(_))
    }
}

// ============================================================================
// Rate pipeline
// ============================================================================

/// 최종 보정된 타석 확률
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HybridRates {
    pub avg: f64,
    pub obp: f64,
    pub slg: f64,
    pub k_rate: f64,
    pub bb_rate: f64,
}

impl HybridRates {
    /// 장타력 지표 (SLG - AVG)
    #[inline]
    pub fn iso(&self) -> f64 {
        self.slg - self.avg
    }
}

/// wRC+ 보정 배율, [min, max] 로 제한. wRC+ 가 0 이하이면 1.0
#[inline]
pub fn wrc_factor(wrc_plus: f64, cfg: &AtBatConfig) -> f64 {
    if wrc_plus > 0.0 {
        (wrc_plus / 100.0).clamp(cfg.wrc_factor_min, cfg.wrc_factor_max)
    } else {
        1.0
    }
}

/// 타석마다 새로 뽑는 컨디션 배율
pub fn draw_form(rng: &mut impl Rng, cfg: &AtBatConfig) -> f64 {
    if cfg.form_min >= cfg.form_max {
        return cfg.form_min;
    }
    rng.gen_range(cfg.form_min..=cfg.form_max)
}

/// 하이브리드 타격 확률 계산 (순수 함수)
///
/// 순서: 기본 가중합 × 컨디션 × wRC+ → 피로 배율 → 붕괴 배율.
/// 삼진/볼넷률은 타자 기록에서 오고 투수 상태로만 조정된다.
pub fn hybrid_rates(
    hitter: &HitterProfile,
    delivery: Delivery,
    penalty: FatiguePenalty,
    collapsed: bool,
    form: f64,
    cfg: &AtBatConfig,
) -> HybridRates {
    let split = hitter.split_against(delivery);
    let scale = form * wrc_factor(hitter.wrc_plus, cfg);

    let mut rates = HybridRates {
        avg: (cfg.avg_overall_weight * hitter.avg
            + cfg.avg_split_weight * split.avg
            + cfg.avg_babip_weight * hitter.babip)
            * scale
            * penalty.control,
        obp: (cfg.obp_overall_weight * hitter.obp + cfg.obp_split_weight * split.obp)
            * scale
            * penalty.control,
        slg: hitter.slg * scale,
        k_rate: hitter.k_rate * penalty.strikeout,
        bb_rate: hitter.bb_rate * penalty.walk,
    };

    if collapsed {
        let c = &cfg.collapse;
        rates.avg *= c.avg;
        rates.obp *= c.obp;
        rates.slg *= c.slg;
        rates.bb_rate *= c.walk;
        rates.k_rate *= c.strikeout;
    }
    rates
}

// ============================================================================
// Draws
// ============================================================================

/// 한 번의 균등 난수로 결과 결정
///
/// k, k+bb, k+bb+obp 누적 구간. 합이 1을 넘으면 아웃 구간이 사라질 뿐 오류는 아니다.
pub fn draw_outcome(rates: &HybridRates, rng: &mut impl Rng) -> PlateOutcome {
    let r: f64 = rng.gen();
    classify_roll(r, rates).unwrap_or_else(|| PlateOutcome::Hit(draw_hit_type(rates.iso(), rng)))
}

/// 안타가 아닌 결과는 바로 반환, 안타면 `None` (종류는 별도 추첨)
fn classify_roll(r: f64, rates: &HybridRates) -> Option<PlateOutcome> {
    let strikeout = rates.k_rate;
    let walk = strikeout + rates.bb_rate;
    let on_base = walk + rates.obp;

    match r {
        r if r < strikeout => Some(PlateOutcome::Strikeout),
        r if r < walk => Some(PlateOutcome::Walk),
        r if r < on_base => None,
        _ => Some(PlateOutcome::Out),
    }
}

/// ISO 구간별 안타 종류 가중치 [1루타, 2루타, 3루타, 홈런]
struct HitTier {
    iso_above: f64,
    weights: [u32; 4],
}

const HIT_TIERS: [HitTier; 4] = [
    HitTier { iso_above: 0.25, weights: [55, 25, 5, 15] },
    HitTier { iso_above: 0.18, weights: [60, 25, 5, 10] },
    HitTier { iso_above: 0.12, weights: [70, 23, 0, 7] },
    HitTier { iso_above: f64::NEG_INFINITY, weights: [80, 17, 0, 3] },
];

/// ISO 에 해당하는 안타 종류 가중치
pub fn hit_type_weights(iso: f64) -> [u32; 4] {
    HIT_TIERS
        .iter()
        .find(|tier| iso > tier.iso_above)
        .unwrap_or(&HIT_TIERS[HIT_TIERS.len() - 1])
        .weights
}

pub fn draw_hit_type(iso: f64, rng: &mut impl Rng) -> HitType {
    let weights = hit_type_weights(iso);
    let total: u32 = weights.iter().sum();
    let mut roll = rng.gen_range(0..total);

    for (hit, weight) in HitType::ALL.into_iter().zip(weights) {
        if roll < weight {
            return hit;
        }
        roll -= weight;
    }
    HitType::Single
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SplitLine;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn hitter() -> HitterProfile {
        HitterProfile {
            avg: 0.300,
            obp: 0.380,
            slg: 0.500,
            wrc_plus: 140.0,
            babip: 0.320,
            k_rate: 0.15,
            bb_rate: 0.10,
            vs_right: SplitLine { avg: 0.320, obp: 0.400 },
            vs_left: SplitLine { avg: 0.260, obp: 0.330 },
            ..HitterProfile::neutral("최형우")
        }
    }

    fn rates(k: f64, bb: f64, obp: f64) -> HybridRates {
        HybridRates { avg: 0.3, obp, slg: 0.45, k_rate: k, bb_rate: bb }
    }

    #[test]
    fn test_wrc_factor_clamped() {
        let cfg = AtBatConfig::default();
        assert!((wrc_factor(140.0, &cfg) - 1.25).abs() < 1e-9);
        assert!((wrc_factor(60.0, &cfg) - 0.75).abs() < 1e-9);
        assert!((wrc_factor(110.0, &cfg) - 1.1).abs() < 1e-9);
        assert_eq!(wrc_factor(0.0, &cfg), 1.0);
        assert_eq!(wrc_factor(-20.0, &cfg), 1.0);
    }

    #[test]
    fn test_hybrid_rates_neutral_state() {
        let cfg = AtBatConfig::default();
        let r = hybrid_rates(&hitter(), Delivery::Right, FatiguePenalty::NONE, false, 1.0, &cfg);

        let avg = (0.5 * 0.300 + 0.35 * 0.320 + 0.15 * 0.320) * 1.25;
        let obp = (0.5 * 0.380 + 0.5 * 0.400) * 1.25;
        assert!((r.avg - avg).abs() < 1e-9);
        assert!((r.obp - obp).abs() < 1e-9);
        assert!((r.slg - 0.625).abs() < 1e-9);
        assert!((r.k_rate - 0.15).abs() < 1e-9);
        assert!((r.bb_rate - 0.10).abs() < 1e-9);
    }

    #[test]
    fn test_left_split_used_against_lefty() {
        let cfg = AtBatConfig::default();
        let vs_r = hybrid_rates(&hitter(), Delivery::Right, FatiguePenalty::NONE, false, 1.0, &cfg);
        let vs_l = hybrid_rates(&hitter(), Delivery::Left, FatiguePenalty::NONE, false, 1.0, &cfg);
        let vs_s = hybrid_rates(&hitter(), Delivery::Sidearm, FatiguePenalty::NONE, false, 1.0, &cfg);
        assert!(vs_l.avg < vs_r.avg);
        assert_eq!(vs_s, vs_r);
    }

    #[test]
    fn test_fatigue_and_collapse_multipliers() {
        let cfg = AtBatConfig::default();
        let base = hybrid_rates(&hitter(), Delivery::Right, FatiguePenalty::NONE, false, 1.0, &cfg);
        let tired = FatiguePenalty { strikeout: 0.7, walk: 1.5, control: 1.15 };
        let r = hybrid_rates(&hitter(), Delivery::Right, tired, true, 1.0, &cfg);

        assert!((r.avg - base.avg * 1.15 * 1.25).abs() < 1e-9);
        assert!((r.obp - base.obp * 1.15 * 1.25).abs() < 1e-9);
        assert!((r.slg - base.slg * 1.2).abs() < 1e-9);
        assert!((r.k_rate - 0.15 * 0.7 * 0.6).abs() < 1e-9);
        assert!((r.bb_rate - 0.10 * 1.5 * 1.3).abs() < 1e-9);
    }

    #[test]
    fn test_form_range() {
        let cfg = AtBatConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..1000 {
            let form = draw_form(&mut rng, &cfg);
            assert!((0.95..=1.05).contains(&form));
        }
        let fixed = AtBatConfig { form_min: 1.0, form_max: 1.0, ..cfg };
        assert_eq!(draw_form(&mut rng, &fixed), 1.0);
    }

    #[test]
    fn test_classify_roll_bands() {
        let r = rates(0.2, 0.1, 0.3);
        assert_eq!(classify_roll(0.0, &r), Some(PlateOutcome::Strikeout));
        assert_eq!(classify_roll(0.199, &r), Some(PlateOutcome::Strikeout));
        assert_eq!(classify_roll(0.2, &r), Some(PlateOutcome::Walk));
        assert_eq!(classify_roll(0.35, &r), None);
        assert_eq!(classify_roll(0.6, &r), Some(PlateOutcome::Out));
        assert_eq!(classify_roll(0.99, &r), Some(PlateOutcome::Out));
    }

    #[test]
    fn test_out_unreachable_when_rates_exceed_one() {
        let r = rates(0.4, 0.3, 0.5);
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..2000 {
            assert_ne!(draw_outcome(&r, &mut rng), PlateOutcome::Out);
        }
    }

    #[test]
    fn test_hit_tiers() {
        assert_eq!(hit_type_weights(0.30), [55, 25, 5, 15]);
        assert_eq!(hit_type_weights(0.25), [60, 25, 5, 10]);
        assert_eq!(hit_type_weights(0.15), [70, 23, 0, 7]);
        assert_eq!(hit_type_weights(0.12), [80, 17, 0, 3]);
        assert_eq!(hit_type_weights(-0.1), [80, 17, 0, 3]);
        assert_eq!(hit_type_weights(f64::NAN), [80, 17, 0, 3]);
    }

    #[test]
    fn test_low_iso_never_triples() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        for _ in 0..5000 {
            assert_ne!(draw_hit_type(0.10, &mut rng), HitType::Triple);
        }
    }

    #[test]
    fn test_hit_type_frequencies() {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let n = 40_000;
        let homers = (0..n).filter(|_| draw_hit_type(0.30, &mut rng) == HitType::HomeRun).count();
        let rate = homers as f64 / n as f64;
        assert!((rate - 0.15).abs() < 0.01, "rate = {rate}");
    }

    proptest! {
        #[test]
        fn prop_outcome_follows_roll_bands(k in 0.0f64..0.4, bb in 0.0f64..0.2, obp in 0.0f64..0.5, seed in any::<u64>()) {
            let r = rates(k, bb, obp);
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut probe = rng.clone();
            let roll: f64 = probe.gen();
            let outcome = draw_outcome(&r, &mut rng);
            match outcome {
                PlateOutcome::Strikeout => prop_assert!(roll < k),
                PlateOutcome::Walk => prop_assert!(roll >= k && roll < k + bb),
                PlateOutcome::Hit(_) => prop_assert!(roll >= k + bb && roll < k + bb + obp),
                PlateOutcome::Out => prop_assert!(roll >= k + bb + obp),
            }
        }
    }
}
