//! Full game: nine innings, visitors bat first, extra innings up to the cap.

use super::game_state::TeamGameState;
use super::half_inning::{play_half_inning, HalfInningSummary, SimContext, TeamView};
use crate::models::{GameResult, TeamRoster};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// 하프이닝 단위 경기 기록
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameLog {
    pub half_innings: Vec<HalfInningSummary>,
}

impl GameLog {
    /// 이닝별 득점 (원정, 홈). 홈 공격이 없으면 None
    pub fn line_score(&self) -> Vec<(u32, Option<u32>)> {
        self.half_innings
            .chunks(2)
            .map(|pair| (pair[0].runs, pair.get(1).map(|h| h.runs)))
            .collect()
    }

    /// 선발이 계속 던진 이닝을 뺀 하프이닝 수
    pub fn relief_innings(&self) -> usize {
        self.half_innings
            .iter()
            .filter(|h| h.pitcher_reason != super::bullpen::ChoiceReason::StarterContinues)
            .count()
    }
}

/// 한 매치업의 경기 엔진. 여러 스레드에서 공유해도 된다 (상태 없음).
#[derive(Debug, Clone, Copy)]
pub struct GameEngine<'a> {
    ctx: SimContext<'a>,
    away: &'a TeamRoster,
    home: &'a TeamRoster,
}

impl<'a> GameEngine<'a> {
    pub fn new(ctx: SimContext<'a>, away: &'a TeamRoster, home: &'a TeamRoster) -> Self {
        Self { ctx, away, home }
    }

    /// 시드 하나로 한 경기 (재현 가능)
    pub fn simulate_seeded(&self, seed: u64) -> GameResult {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.simulate(&mut rng)
    }

    pub fn simulate(&self, rng: &mut impl Rng) -> GameResult {
        self.run(rng, None)
    }

    /// 하프이닝 기록까지 남기는 버전
    pub fn simulate_with_log(&self, rng: &mut impl Rng) -> (GameResult, GameLog) {
        let mut log = GameLog::default();
        let result = self.run(rng, Some(&mut log));
        (result, log)
    }

    fn run(&self, rng: &mut impl Rng, mut log: Option<&mut GameLog>) -> GameResult {
        let game = &self.ctx.config.game;
        let mut away = TeamGameState::new(self.away);
        let mut home = TeamGameState::new(self.home);
        let (mut away_runs, mut home_runs) = (0u32, 0u32);
        let mut inning = 0u8;

        while inning < game.regulation_innings || (away_runs == home_runs && inning < game.max_innings) {
            inning += 1;

            let top = play_half_inning(
                self.ctx,
                TeamView { roster: self.away, state: &mut away },
                TeamView { roster: self.home, state: &mut home },
                inning,
                away_runs as i32 - home_runs as i32,
                rng,
            );
            away_runs += top.runs;

            let bottom = play_half_inning(
                self.ctx,
                TeamView { roster: self.home, state: &mut home },
                TeamView { roster: self.away, state: &mut away },
                inning,
                home_runs as i32 - away_runs as i32,
                rng,
            );
            home_runs += bottom.runs;

            if let Some(log) = log.as_deref_mut() {
                log.half_innings.push(top);
                log.half_innings.push(bottom);
            }
        }

        if inning > game.regulation_innings {
            tracing::trace!(inning, away_runs, home_runs, "extra innings finished");
        }
        GameResult { away: away_runs, home: home_runs, innings: inning }
    }
}
