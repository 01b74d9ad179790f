//! JSON batch API
//!
//! Request: two rosters, the season tables, seed, game count and an optional
//! config. Response: the batch summary and, on request, every game's score.

use super::config_env::sim_config_from_env;
use crate::engine::config::SimConfig;
use crate::engine::{run_batch, SimContext};
use crate::error::{Result, SimError};
use crate::models::{
    BatchSummary, GameResult, HitterSeasonRow, PitcherSeasonRow, PitcherTypeRow, RosterData,
};
use crate::player::PlayerRegistry;
use crate::SCHEMA_VERSION;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct BatchRequest {
    pub schema_version: u8,
    pub seed: u64,
    pub games: u32,
    /// 원정팀 (먼저 공격)
    pub away: RosterData,
    pub home: RosterData,
    #[serde(default)]
    pub hitters: Vec<HitterSeasonRow>,
    #[serde(default)]
    pub pitchers: Vec<PitcherSeasonRow>,
    #[serde(default)]
    pub pitcher_types: Vec<PitcherTypeRow>,
    /// 없으면 `BB_SIM_CONFIG_PATH`, 그것도 없으면 기본 설정
    #[serde(default)]
    pub config: Option<SimConfig>,
    /// 경기별 점수 포함 여부
    #[serde(default)]
    pub include_results: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchResponse {
    pub schema_version: u8,
    pub away_team: String,
    pub home_team: String,
    pub seed: u64,
    pub summary: BatchSummary,
    pub away_avg_runs: f64,
    pub home_avg_runs: f64,
    pub away_win_rate: f64,
    pub home_win_rate: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<GameResult>>,
}

/// 요청 검증 후 배치 실행
pub fn simulate_batch(request: BatchRequest) -> Result<BatchResponse> {
    if request.schema_version != SCHEMA_VERSION {
        return Err(SimError::SchemaVersion {
            found: request.schema_version,
            expected: SCHEMA_VERSION,
        });
    }

    let config = match request.config {
        Some(config) => config,
        None => sim_config_from_env()?.unwrap_or_default(),
    };
    config.validate()?;

    let away = request.away.into_roster()?;
    let home = request.home.into_roster()?;

    let registry = PlayerRegistry::from_tables(
        &request.hitters,
        &request.pitchers,
        &request.pitcher_types,
        &config.profile,
    );
    registry.validate()?;

    let ctx = SimContext::new(&registry, &config);
    let results = run_batch(ctx, &away, &home, request.games, request.seed);
    let summary = BatchSummary::from_results(&results);

    Ok(BatchResponse {
        schema_version: SCHEMA_VERSION,
        away_team: away.name,
        home_team: home.name,
        seed: request.seed,
        away_avg_runs: summary.away_avg_runs(),
        home_avg_runs: summary.home_avg_runs(),
        away_win_rate: summary.away_win_rate(),
        home_win_rate: summary.home_win_rate(),
        summary,
        results: request.include_results.then_some(results),
    })
}

/// JSON 문자열 → JSON 문자열
pub fn simulate_batch_json(request_json: &str) -> Result<String> {
    let request: BatchRequest = serde_json::from_str(request_json)?;
    let response = simulate_batch(request)?;
    serde_json::to_string(&response).map_err(|e| SimError::Serialization(e.to_string()))
}
