//! Batch runner: many independent games, reduced into a summary
//!
//! Game `i` is seeded with `base_seed.wrapping_add(i)`, so a batch is
//! reproducible regardless of how rayon schedules the work.

use super::game::GameEngine;
use super::half_inning::SimContext;
use crate::models::{BatchSummary, GameResult, TeamRoster};
use rayon::prelude::*;

/// 이 수 이하의 경기는 순차 실행
const PARALLEL_THRESHOLD: u32 = 16;

/// 고정 매치업 N경기 시뮬레이션 (경기 순서대로 결과 반환)
pub fn run_batch(
    ctx: SimContext<'_>,
    away: &TeamRoster,
    home: &TeamRoster,
    games: u32,
    base_seed: u64,
) -> Vec<GameResult> {
    tracing::info!(away = %away.name, home = %home.name, games, base_seed, "batch started");
    let engine = GameEngine::new(ctx, away, home);
    let seed_for = |i: u32| base_seed.wrapping_add(u64::from(i));

    let results: Vec<GameResult> = if games > PARALLEL_THRESHOLD {
        (0..games)
            .into_par_iter()
            .map(|i| engine.simulate_seeded(seed_for(i)))
            .collect()
    } else {
        (0..games).map(|i| engine.simulate_seeded(seed_for(i))).collect()
    };

    tracing::info!(
        away = %away.name,
        home = %home.name,
        games,
        base_seed,
        "batch finished"
    );
    results
}

/// 결과 목록 없이 요약만 (경기별 결과를 모으지 않고 병렬 fold)
pub fn run_summary(
    ctx: SimContext<'_>,
    away: &TeamRoster,
    home: &TeamRoster,
    games: u32,
    base_seed: u64,
) -> BatchSummary {
    tracing::info!(away = %away.name, home = %home.name, games, base_seed, "batch started");
    let engine = GameEngine::new(ctx, away, home);

    let summary = (0..games)
        .into_par_iter()
        .fold(BatchSummary::default, |mut acc, i| {
            acc.record(&engine.simulate_seeded(base_seed.wrapping_add(u64::from(i))));
            acc
        })
        .reduce(BatchSummary::default, BatchSummary::merge);

    tracing::info!(
        away = %away.name,
        home = %home.name,
        games,
        away_wins = summary.away_wins,
        home_wins = summary.home_wins,
        draws = summary.draws,
        "batch summary"
    );
    summary
}
