//! # bb_core - Seeded Baseball Game Simulation Engine
//!
//! Simulates KBO-style baseball games as a sequence of probabilistic at-bats
//! and aggregates many independent games into win/run distributions.
//!
//! ## Features
//! - Season-weighted hitter/pitcher profiles with platoon splits
//! - Hybrid at-bat model (matchup, form, wRC+, pitcher fatigue and collapse)
//! - Base-running rules with sac flies, double plays and steals
//! - Rule-based bullpen policy driven by fatigue and leverage
//! - Reproducible batches (same seed = same games), parallel via rayon
//! - JSON API for embedding
//!
//! ## Usage
//! ```rust
//! use bb_core::{run_summary, PlayerRegistry, SimConfig, SimContext, TeamRoster};
//!
//! let lineup = |p: &str| (0..9).map(|i| format!("{p}{i}")).collect::<Vec<_>>();
//! let away = TeamRoster::new("KIA", lineup("k"), "네일", vec!["전상현".into()], None);
//! let home = TeamRoster::new("KT", lineup("t"), "조이현", vec!["박영현".into()], None);
//!
//! let registry = PlayerRegistry::default();
//! let config = SimConfig::default();
//! let summary = run_summary(SimContext::new(&registry, &config), &away, &home, 10, 42);
//! assert_eq!(summary.games, 10);
//! ```

// Simulation entry points take many context parameters
#![allow(clippy::too_many_arguments)]
// Config structs are tuned field-by-field after Default
#![allow(clippy::field_reassign_with_default)]

pub mod api;
pub mod engine;
pub mod error;
pub mod models;
pub mod player;

pub use api::{simulate_batch, simulate_batch_json, BatchRequest, BatchResponse};
pub use engine::config::SimConfig;
pub use engine::{run_batch, run_summary, GameEngine, GameLog, SimContext};
pub use error::{ConfigError, ProfileError, Result, RosterError, SimError};
pub use models::{
    BatchSummary, Delivery, GameResult, HitterProfile, HitterSeasonRow, PitcherProfile,
    PitcherSeasonRow, PitcherTypeRow, RosterData, RunBucket, Side, TeamRoster,
};
pub use player::PlayerRegistry;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// JSON API schema version
pub const SCHEMA_VERSION: u8 = 1;

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn kia() -> TeamRoster {
        TeamRoster::new(
            "KIA",
            ["박찬호", "오선우", "김도영", "최형우", "김선빈", "이우성", "한준수", "김호령", "최원준"]
                .map(String::from)
                .to_vec(),
            "네일",
            ["김기훈", "김현수", "성영탁", "윤중현", "이준영", "장재혁", "전상현", "조상우", "정해영"]
                .map(String::from)
                .to_vec(),
            None,
        )
    }

    fn kt() -> TeamRoster {
        TeamRoster::new(
            "KT",
            ["황재균", "김민혁", "안현민", "장성우", "로하스", "강백호", "김상수", "문상철", "박민석"]
                .map(String::from)
                .to_vec(),
            "조이현",
            ["김민수", "김재원", "문용익", "손동현", "우규민", "원상현", "주권", "박영현"]
                .map(String::from)
                .to_vec(),
            None,
        )
    }

    fn registry(config: &SimConfig) -> PlayerRegistry {
        let mut slugger = HitterSeasonRow::new(2025, "김도영");
        slugger.avg = Some(0.347);
        slugger.obp = Some(0.420);
        slugger.slg = Some(0.647);
        slugger.wrc_plus = Some(172.0);
        slugger.pa = Some(625.0);
        slugger.sb = Some(40.0);
        slugger.sb_pct = Some(85.0);
        let pitchers = vec![
            PitcherSeasonRow::new(2025, "네일", Some(2.53), Some(2.87)),
            PitcherSeasonRow::new(2025, "조이현", Some(4.10), Some(4.40)),
        ];
        PlayerRegistry::from_tables(&[slugger], &pitchers, &[], &config.profile)
    }

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_rosters_validate() {
        assert!(kia().validate().is_ok());
        assert!(kt().validate().is_ok());
    }

    #[test]
    fn test_batch_end_to_end() {
        let config = SimConfig::default();
        let registry = registry(&config);
        let ctx = SimContext::new(&registry, &config);
        let (away, home) = (kia(), kt());

        let results = run_batch(ctx, &away, &home, 200, 2025);
        let summary = BatchSummary::from_results(&results);

        assert_eq!(summary.games, 200);
        assert_eq!(summary.home_wins + summary.away_wins + summary.draws, 200);
        let d = summary.distribution;
        assert_eq!(d.low + d.mid + d.high, 200);
        // 평균 득점이 야구다운 범위인지 대략 확인
        assert!(summary.away_avg_runs() > 1.0 && summary.away_avg_runs() < 15.0);
        assert!(summary.home_avg_runs() > 1.0 && summary.home_avg_runs() < 15.0);
    }

    #[test]
    fn test_no_randomness_preset_is_still_seeded() {
        let config = SimConfig::no_randomness();
        let registry = registry(&config);
        let (away, home) = (kia(), kt());
        let engine = GameEngine::new(SimContext::new(&registry, &config), &away, &home);

        let mut a = ChaCha8Rng::seed_from_u64(1);
        let mut b = ChaCha8Rng::seed_from_u64(1);
        let (ra, la) = engine.simulate_with_log(&mut a);
        let (rb, lb) = engine.simulate_with_log(&mut b);
        assert_eq!(ra, rb);
        assert_eq!(la, lb);
        assert!(la.half_innings.iter().all(|h| !h.collapsed));
    }

    #[test]
    fn test_batch_summary_order_independent() {
        let config = SimConfig::default();
        let registry = registry(&config);
        let ctx = SimContext::new(&registry, &config);
        let (away, home) = (kia(), kt());

        let mut results = run_batch(ctx, &away, &home, 30, 9);
        let forward = BatchSummary::from_results(&results);
        results.reverse();
        assert_eq!(forward, BatchSummary::from_results(&results));
    }
}
