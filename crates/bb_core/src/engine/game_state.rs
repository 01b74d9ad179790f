//! Per-team mutable state for one game

use super::config::FatigueConfig;
use super::fatigue::fatigue_cost;
use super::probability::PlateOutcome;
use crate::models::TeamRoster;
use fxhash::FxHashMap;

/// 한 경기 동안 팀별로 바뀌는 상태
///
/// 타순 위치, 투수별 누적 피로, 현재 투수, 선발 실점.
/// 경기가 시작될 때 새로 만들고 경기가 끝나면 버린다.
#[derive(Debug, Clone)]
pub struct TeamGameState {
    batter_index: usize,
    fatigue: FxHashMap<String, f64>,
    starter: String,
    current_pitcher: String,
    starter_runs_allowed: u32,
    /// 등판 순서 (선발 포함)
    appearances: Vec<String>,
}

impl TeamGameState {
    pub fn new(roster: &TeamRoster) -> Self {
        let fatigue = roster.pitchers().map(|p| (p.clone(), 0.0)).collect();
        Self {
            batter_index: 0,
            fatigue,
            starter: roster.starter.clone(),
            current_pitcher: roster.starter.clone(),
            starter_runs_allowed: 0,
            appearances: vec![roster.starter.clone()],
        }
    }

    /// 이번 타자의 타순 인덱스를 돌려주고 다음으로 넘긴다
    pub fn take_batter(&mut self) -> usize {
        let index = self.batter_index;
        self.batter_index += 1;
        index
    }

    /// 다음에 타석에 설 타자의 인덱스 (누적값, 타순 길이로 나누지 않음)
    pub fn batter_index(&self) -> usize {
        self.batter_index
    }

    pub fn fatigue_of(&self, pitcher: &str) -> f64 {
        self.fatigue.get(pitcher).copied().unwrap_or(0.0)
    }

    pub fn current_pitcher(&self) -> &str {
        &self.current_pitcher
    }

    pub fn starter(&self) -> &str {
        &self.starter
    }

    pub fn starter_is_pitching(&self) -> bool {
        self.current_pitcher == self.starter
    }

    pub fn starter_runs_allowed(&self) -> u32 {
        self.starter_runs_allowed
    }

    pub fn appearances(&self) -> &[String] {
        &self.appearances
    }

    /// 현재 투수가 상대한 타자 한 명의 피로 반영
    pub fn record_batter_faced(
        &mut self,
        outcome: PlateOutcome,
        runner_in_scoring_position: bool,
        cfg: &FatigueConfig,
    ) -> f64 {
        let cost = fatigue_cost(outcome, runner_in_scoring_position, cfg);
        *self.fatigue.entry(self.current_pitcher.clone()).or_insert(0.0) += cost;
        cost
    }

    /// 선발이 던지는 동안 나온 실점만 누적
    pub fn charge_runs(&mut self, runs: u32) {
        if self.starter_is_pitching() {
            self.starter_runs_allowed += runs;
        }
    }

    pub fn change_pitcher(&mut self, pitcher: &str) {
        if pitcher == self.current_pitcher {
            return;
        }
        self.current_pitcher = pitcher.to_string();
        self.fatigue.entry(self.current_pitcher.clone()).or_insert(0.0);
        self.appearances.push(self.current_pitcher.clone());
    }
}
