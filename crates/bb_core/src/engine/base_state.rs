//! Base/out/run state and the outcome → state transition rules
//!
//! Runners are anonymous: the state only records which bases are occupied.

use super::config::RunningConfig;
use super::probability::{HitType, PlateOutcome};
use rand::Rng;
use serde::{Deserialize, Serialize};

pub const OUTS_PER_INNING: u8 = 3;

/// 주자 상황 [1루, 2루, 3루]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Bases([bool; 3]);

impl Bases {
    pub const EMPTY: Self = Self([false; 3]);
    pub const LOADED: Self = Self([true; 3]);

    pub const fn new(first: bool, second: bool, third: bool) -> Self {
        Self([first, second, third])
    }

    #[inline]
    pub fn first(&self) -> bool {
        self.0[0]
    }

    #[inline]
    pub fn second(&self) -> bool {
        self.0[1]
    }

    #[inline]
    pub fn third(&self) -> bool {
        self.0[2]
    }

    pub fn occupied(&self) -> u32 {
        self.0.iter().filter(|&&b| b).count() as u32
    }

    pub fn is_loaded(&self) -> bool {
        *self == Self::LOADED
    }

    /// 득점권 (2루 또는 3루) 주자 여부
    pub fn scoring_position(&self) -> bool {
        self.second() || self.third()
    }

    pub fn as_array(&self) -> [bool; 3] {
        self.0
    }

    /// 병살 가능한 주자 배치 (1루 주자 필수)
    pub fn double_play_situation(&self) -> Option<DoublePlaySituation> {
        match self.0 {
            [true, false, false] => Some(DoublePlaySituation::RunnerOnFirst),
            [true, true, false] => Some(DoublePlaySituation::FirstAndSecond),
            [true, false, true] => Some(DoublePlaySituation::FirstAndThird),
            [true, true, true] => Some(DoublePlaySituation::BasesLoaded),
            _ => None,
        }
    }
}

impl From<[bool; 3]> for Bases {
    fn from(bases: [bool; 3]) -> Self {
        Self(bases)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DoublePlaySituation {
    RunnerOnFirst,
    FirstAndSecond,
    FirstAndThird,
    BasesLoaded,
}

impl DoublePlaySituation {
    pub fn probability(self, cfg: &RunningConfig) -> f64 {
        match self {
            DoublePlaySituation::RunnerOnFirst => cfg.dp_runner_on_first,
            DoublePlaySituation::FirstAndSecond => cfg.dp_first_and_second,
            DoublePlaySituation::FirstAndThird => cfg.dp_first_and_third,
            DoublePlaySituation::BasesLoaded => cfg.dp_bases_loaded,
        }
    }
}

/// 하프이닝 진행 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InningState {
    /// 이번 하프이닝 득점
    pub runs: u32,
    pub outs: u8,
    pub bases: Bases,
}

impl InningState {
    pub fn new(runs: u32, outs: u8, bases: impl Into<Bases>) -> Self {
        Self { runs, outs, bases: bases.into() }
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.outs >= OUTS_PER_INNING
    }
}

/// 타석 결과를 주자/아웃/득점에 반영
///
/// `hitter_slg` 는 희생플라이 확률에 쓰이는 보정된 장타율.
/// 확률 분기마다 새 난수를 하나씩 뽑는다.
pub fn resolve_outcome(
    outcome: PlateOutcome,
    state: InningState,
    hitter_slg: f64,
    cfg: &RunningConfig,
    rng: &mut impl Rng,
) -> InningState {
    match outcome {
        PlateOutcome::Strikeout => InningState { outs: state.outs + 1, ..state },
        PlateOutcome::Out => resolve_ball_in_play_out(state, hitter_slg, cfg, rng),
        PlateOutcome::Walk => resolve_walk(state),
        PlateOutcome::Hit(HitType::Single) => resolve_single(state, cfg, rng),
        PlateOutcome::Hit(HitType::Double) => resolve_double(state, cfg, rng),
        PlateOutcome::Hit(HitType::Triple) => InningState {
            runs: state.runs + state.bases.occupied(),
            bases: Bases::new(false, false, true),
            ..state
        },
        PlateOutcome::Hit(HitType::HomeRun) => InningState {
            runs: state.runs + 1 + state.bases.occupied(),
            bases: Bases::EMPTY,
            ..state
        },
    }
}

/// 인플레이 아웃: 희생플라이 → 병살 → 일반 아웃 (+ 진루) 순서로 판정
fn resolve_ball_in_play_out(
    state: InningState,
    hitter_slg: f64,
    cfg: &RunningConfig,
    rng: &mut impl Rng,
) -> InningState {
    let InningState { mut runs, mut outs, bases } = state;
    let [first, mut second, mut third] = bases.as_array();

    if third && outs < 2 {
        let p = cfg.sac_fly_base * (1.0 + (hitter_slg - cfg.sac_fly_slg_pivot) * cfg.sac_fly_slg_scale);
        if rng.gen::<f64>() < p {
            return InningState::new(runs + 1, outs + 1, [first, second, false]);
        }
    }

    if outs < 2 {
        if let Some(situation) = bases.double_play_situation() {
            if rng.gen::<f64>() < situation.probability(cfg) {
                return InningState::new(runs, outs + 2, [false, second, third]);
            }
        }
    }

    outs += 1;
    if outs >= OUTS_PER_INNING {
        return InningState { runs, outs, bases };
    }

    if third && rng.gen::<f64>() < cfg.out_third_scores {
        runs += 1;
        third = false;
    }
    if second && !third && rng.gen::<f64>() < cfg.out_second_advances {
        second = false;
        third = true;
    }
    InningState::new(runs, outs, [first, second, third])
}

/// 볼넷: 밀어내기만 진루
fn resolve_walk(state: InningState) -> InningState {
    let [first, second, third] = state.bases.as_array();
    let runs = state.runs + u32::from(first && second && third);
    InningState::new(
        runs,
        state.outs,
        [true, first || second, (first && second) || third],
    )
}

fn resolve_single(state: InningState, cfg: &RunningConfig, rng: &mut impl Rng) -> InningState {
    let [first, second, third] = state.bases.as_array();
    let mut runs = state.runs + u32::from(third);

    let second_scores = second && rng.gen::<f64>() < cfg.single_second_scores;
    if second_scores {
        runs += 1;
    }
    InningState::new(runs, state.outs, [true, first, second && !second_scores])
}

fn resolve_double(state: InningState, cfg: &RunningConfig, rng: &mut impl Rng) -> InningState {
    let [first, second, third] = state.bases.as_array();
    let mut runs = state.runs + u32::from(second) + u32::from(third);

    let mut runner_on_third = false;
    if first {
        if rng.gen::<f64>() < cfg.double_first_scores {
            runs += 1;
        } else {
            runner_on_third = true;
        }
    }
    InningState::new(runs, state.outs, [false, true, runner_on_third])
}
