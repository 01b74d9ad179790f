//! Game result and batch aggregation
//!
//! `BatchSummary` is a plain associative fold over `GameResult`s: recording
//! results one by one, merging partial summaries, or summarizing a shuffled
//! list all produce the same counts.

use serde::{Deserialize, Serialize};

/// 한 경기 최종 점수
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameResult {
    pub home: u32,
    pub away: u32,
    /// 실제 진행한 이닝 수 (연장 포함)
    pub innings: u8,
}

impl GameResult {
    pub fn total_runs(&self) -> u32 {
        self.home + self.away
    }

    pub fn winner(&self) -> Option<Side> {
        match self.home.cmp(&self.away) {
            std::cmp::Ordering::Greater => Some(Side::Home),
            std::cmp::Ordering::Less => Some(Side::Away),
            std::cmp::Ordering::Equal => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Home,
    Away,
}

/// 총 득점 구간
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunBucket {
    /// 6점 미만
    Low,
    /// 6~11점
    Mid,
    /// 12점 이상
    High,
}

impl RunBucket {
    pub fn of(total_runs: u32) -> Self {
        match total_runs {
            0..=5 => RunBucket::Low,
            6..=11 => RunBucket::Mid,
            _ => RunBucket::High,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RunDistribution {
    pub low: u32,
    pub mid: u32,
    pub high: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BatchSummary {
    pub games: u32,
    pub home_wins: u32,
    pub away_wins: u32,
    pub draws: u32,
    pub home_runs: u64,
    pub away_runs: u64,
    pub extra_inning_games: u32,
    pub distribution: RunDistribution,
}

impl BatchSummary {
    pub fn from_results(results: &[GameResult]) -> Self {
        results.iter().fold(Self::default(), |mut acc, r| {
            acc.record(r);
            acc
        })
    }

    pub fn record(&mut self, result: &GameResult) {
        self.games += 1;
        self.home_runs += u64::from(result.home);
        self.away_runs += u64::from(result.away);
        match result.winner() {
            Some(Side::Home) => self.home_wins += 1,
            Some(Side::Away) => self.away_wins += 1,
            None => self.draws += 1,
        }
        if result.innings > 9 {
            self.extra_inning_games += 1;
        }
        match RunBucket::of(result.total_runs()) {
            RunBucket::Low => self.distribution.low += 1,
            RunBucket::Mid => self.distribution.mid += 1,
            RunBucket::High => self.distribution.high += 1,
        }
    }

    /// 부분 집계 병합 (병렬 reduce 용)
    pub fn merge(mut self, other: Self) -> Self {
        self.games += other.games;
        self.home_wins += other.home_wins;
        self.away_wins += other.away_wins;
        self.draws += other.draws;
        self.home_runs += other.home_runs;
        self.away_runs += other.away_runs;
        self.extra_inning_games += other.extra_inning_games;
        self.distribution.low += other.distribution.low;
        self.distribution.mid += other.distribution.mid;
        self.distribution.high += other.distribution.high;
        self
    }

    pub fn home_avg_runs(&self) -> f64 {
        ratio(self.home_runs as f64, self.games)
    }

    pub fn away_avg_runs(&self) -> f64 {
        ratio(self.away_runs as f64, self.games)
    }

    pub fn home_win_rate(&self) -> f64 {
        ratio(self.home_wins as f64, self.games)
    }

    pub fn away_win_rate(&self) -> f64 {
        ratio(self.away_wins as f64, self.games)
    }
}

fn ratio(numerator: f64, games: u32) -> f64 {
    if games == 0 {
        0.0
    } else {
        numerator / games as f64
    }
}
