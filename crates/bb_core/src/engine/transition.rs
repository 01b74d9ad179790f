//! One plate appearance applied to the game: bases/outs/runs, pitcher fatigue,
//! then a possible steal by the runner on first.

use super::base_state::{resolve_outcome, InningState};
use super::config::SimConfig;
use super::game_state::TeamGameState;
use super::probability::PlateOutcome;
use super::steal::{attempt_steal, StealResult, StealSituation};
use crate::models::HitterProfile;
use rand::Rng;

/// 타석 시점의 경기 상황
#[derive(Debug, Clone, Copy)]
pub struct AtBatContext {
    pub inning: u8,
    /// 공격팀 기준 점수차 (이번 하프이닝 득점 포함)
    pub score_diff: i32,
}

/// 타석에 선 타자
#[derive(Debug, Clone, Copy)]
pub struct BatterInPlay<'a> {
    pub profile: &'a HitterProfile,
    /// 보정된 장타율 (희생플라이 확률용)
    pub slg: f64,
    pub next_hitter_power: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub state: InningState,
    pub runs_scored: u32,
    pub fatigue_added: f64,
    pub steal: StealResult,
}

/// 결과 반영 → 수비팀 현재 투수 피로 → (3아웃 전이면) 도루
pub fn apply_plate_appearance(
    outcome: PlateOutcome,
    before: InningState,
    ctx: &AtBatContext,
    batter: &BatterInPlay<'_>,
    defense: &mut TeamGameState,
    config: &SimConfig,
    rng: &mut impl Rng,
) -> Transition {
    let mut state = resolve_outcome(outcome, before, batter.slg, &config.running, rng);
    let fatigue_added =
        defense.record_batter_faced(outcome, before.bases.scoring_position(), &config.fatigue);

    let mut steal = StealResult::NoAttempt;
    if !state.is_over() {
        let runs_now = state.runs - before.runs;
        let situation = StealSituation {
            inning: ctx.inning,
            score_diff: ctx.score_diff + runs_now as i32,
            outs: state.outs,
            next_hitter_power: batter.next_hitter_power,
        };
        (state, steal) = attempt_steal(state, batter.profile, &situation, &config.steal, rng);
    }

    Transition { state, runs_scored: state.runs - before.runs, fatigue_added, steal }
}
