//! Stolen-base attempts (first → second only)

use super::base_state::{Bases, InningState};
use super::config::StealConfig;
use crate::models::HitterProfile;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// 도루 판단에 필요한 경기 상황
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StealSituation {
    pub inning: u8,
    /// 공격팀 기준 점수차 (양수 = 리드)
    pub score_diff: i32,
    pub outs: u8,
    /// 다음 타자의 장타력
    pub next_hitter_power: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StealResult {
    NoAttempt,
    Safe,
    CaughtStealing,
}

/// 1루 주자만 있고 (2루 비어 있음) 2아웃 전일 때만 시도 가능
#[inline]
pub fn steal_eligible(bases: Bases, outs: u8) -> bool {
    bases.first() && !bases.second() && outs < 2
}

/// 상황별 가중치를 곱한 시도 확률
pub fn steal_probability(attempt_rate: f64, situation: &StealSituation, cfg: &StealConfig) -> f64 {
    let diff = situation.score_diff;
    let mut weight = if diff > 3 {
        cfg.score_ahead
    } else if diff.abs() <= 2 {
        cfg.score_close
    } else if diff < -2 {
        cfg.score_behind
    } else {
        1.0
    };

    if situation.inning >= cfg.late_inning_from {
        weight *= cfg.late_inning;
    }
    // 시도 조건상 2아웃에서는 여기까지 오지 않는다
    if situation.outs == 2 {
        weight *= cfg.two_outs;
    }
    if situation.next_hitter_power > cfg.power_threshold {
        weight *= cfg.power_hitter;
    }
    attempt_rate * weight
}

/// 도루 시도 및 결과 반영. 실패하면 주자를 지우고 아웃 하나 추가.
pub fn attempt_steal(
    state: InningState,
    runner: &HitterProfile,
    situation: &StealSituation,
    cfg: &StealConfig,
    rng: &mut impl Rng,
) -> (InningState, StealResult) {
    if !steal_eligible(state.bases, state.outs) {
        return (state, StealResult::NoAttempt);
    }

    let p = steal_probability(runner.steal_attempt_rate, situation, cfg);
    if p <= 0.0 || rng.gen::<f64>() >= p {
        return (state, StealResult::NoAttempt);
    }

    let third = state.bases.third();
    if rng.gen::<f64>() < runner.steal_success_rate {
        let bases = Bases::new(false, true, third);
        (InningState { bases, ..state }, StealResult::Safe)
    } else {
        let bases = Bases::new(false, false, third);
        (InningState { bases, outs: state.outs + 1, ..state }, StealResult::CaughtStealing)
    }
}
