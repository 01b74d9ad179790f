//! Season rows → player profiles

use super::weighting::{plain_mean, weighted_stat};
use crate::engine::config::ProfileConfig;
use crate::models::profile::neutral;
use crate::models::{
    Delivery, HitterProfile, HitterSeasonRow, PitcherProfile, PitcherSeasonRow, SplitLine,
};

/// 타자 프로필 생성
///
/// 비어 있는 통계는 중립값으로 대체한다. 상대 유형별 스플릿이 없으면
/// 시즌 전체 타율/출루율을 그대로 사용한다 (플래툰 효과 없음).
pub fn derive_hitter_profile(
    name: &str,
    rows: &[&HitterSeasonRow],
    config: &ProfileConfig,
) -> HitterProfile {
    let stat = |f: fn(&HitterSeasonRow) -> Option<f64>| {
        weighted_stat(rows.iter().copied(), config, f)
    };

    let avg = stat(|r| r.avg).unwrap_or(neutral::AVG);
    let obp = stat(|r| r.obp).unwrap_or(neutral::OBP);
    let slg = stat(|r| r.slg);
    let vs_right = SplitLine {
        avg: stat(|r| r.ravg).unwrap_or(avg),
        obp: stat(|r| r.robp).unwrap_or(obp),
    };
    let vs_left = SplitLine {
        avg: stat(|r| r.lavg).unwrap_or(avg),
        obp: stat(|r| r.lobp).unwrap_or(obp),
    };
    let (steal_attempt_rate, steal_success_rate) = steal_rates(rows, config);

    HitterProfile {
        name: name.to_string(),
        avg,
        obp,
        slg: slg.unwrap_or(neutral::SLG),
        wrc_plus: stat(|r| r.wrc_plus).unwrap_or(neutral::WRC_PLUS),
        babip: stat(|r| r.babip).unwrap_or(neutral::BABIP),
        k_rate: stat(|r| r.k_pct).map_or(neutral::K_RATE, percent),
        bb_rate: stat(|r| r.bb_pct).map_or(neutral::BB_RATE, percent),
        vs_right,
        vs_left,
        power: slg.unwrap_or(config.neutral_power),
        steal_attempt_rate,
        steal_success_rate,
    }
}

/// 도루 시도율/성공률
///
/// 시도율 = 평균 SB / 평균 PA (상한 적용), 성공률 = 평균 SB% (없으면 기본값).
/// 타석 기록이 없으면 둘 다 0.
pub fn steal_rates(rows: &[&HitterSeasonRow], config: &ProfileConfig) -> (f64, f64) {
    let sb = plain_mean(rows.iter().copied(), |r| r.sb);
    let pa = plain_mean(rows.iter().copied(), |r| r.pa);

    match (sb, pa) {
        (Some(sb), Some(pa)) if pa > 0.0 => {
            let attempt = (sb / pa).clamp(0.0, config.steal_attempt_cap);
            let success = plain_mean(rows.iter().copied(), |r| r.sb_pct)
                .map_or(config.default_steal_success, percent)
                .clamp(0.0, 1.0);
            (attempt, success)
        }
        _ => (0.0, 0.0),
    }
}

/// 투수 프로필 생성: quality = (가중 ERA + 가중 FIP) / 2
pub fn derive_pitcher_profile(
    name: &str,
    rows: &[&PitcherSeasonRow],
    delivery: Delivery,
    config: &ProfileConfig,
) -> PitcherProfile {
    let era = weighted_stat(rows.iter().copied(), config, |r| r.era)
        .unwrap_or(config.neutral_run_rate);
    let fip = weighted_stat(rows.iter().copied(), config, |r| r.fip)
        .unwrap_or(config.neutral_run_rate);

    PitcherProfile { name: name.to_string(), quality: (era + fip) / 2.0, delivery }
}

fn percent(value: f64) -> f64 {
    value / 100.0
}
