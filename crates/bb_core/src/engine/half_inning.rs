//! Half-inning driver: pick the pitcher, roll collapse once, then run at-bats
//! until the third out.

use super::base_state::InningState;
use super::bullpen::{choose_pitcher, ChoiceReason, ReliefContext};
use super::config::SimConfig;
use super::fatigue::{fatigue_penalty, roll_collapse};
use super::game_state::TeamGameState;
use super::probability::{draw_form, draw_outcome, hybrid_rates};
use super::steal::StealResult;
use super::transition::{apply_plate_appearance, AtBatContext, BatterInPlay};
use crate::models::{HitterProfile, TeamRoster};
use crate::player::PlayerRegistry;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// 게임 태스크가 공유하는 읽기 전용 컨텍스트
#[derive(Debug, Clone, Copy)]
pub struct SimContext<'a> {
    pub registry: &'a PlayerRegistry,
    pub config: &'a SimConfig,
}

impl<'a> SimContext<'a> {
    pub fn new(registry: &'a PlayerRegistry, config: &'a SimConfig) -> Self {
        Self { registry, config }
    }
}

/// 공격/수비 한쪽 팀 (로스터 + 경기 상태)
pub struct TeamView<'r, 's> {
    pub roster: &'r TeamRoster,
    pub state: &'s mut TeamGameState,
}

/// 하프이닝 결과 요약
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HalfInningSummary {
    pub inning: u8,
    pub batting: String,
    pub pitcher: String,
    pub pitcher_reason: ChoiceReason,
    pub collapsed: bool,
    pub runs: u32,
    pub plate_appearances: u32,
    pub stolen_bases: u32,
    pub caught_stealing: u32,
}

/// 하프이닝 시뮬레이션
///
/// `score_diff` 는 이닝 시작 시점의 공격팀 기준 점수차.
pub fn play_half_inning(
    ctx: SimContext<'_>,
    offense: TeamView<'_, '_>,
    defense: TeamView<'_, '_>,
    inning: u8,
    score_diff: i32,
    rng: &mut impl Rng,
) -> HalfInningSummary {
    let SimContext { registry, config } = ctx;
    let lookahead = config.bullpen.matchup_lookahead;

    let upcoming: Vec<&HitterProfile> = (0..lookahead)
        .map(|k| registry.hitter(offense.roster.batter_at(offense.state.batter_index() + k)))
        .collect();
    let choice = choose_pitcher(&ReliefContext {
        inning,
        defense_lead: -score_diff,
        defense: &*defense.state,
        roster: defense.roster,
        upcoming: &upcoming,
        registry,
        config,
    });

    if choice.pitcher != defense.state.current_pitcher() {
        tracing::debug!(
            team = %defense.roster.name,
            inning,
            from = defense.state.current_pitcher(),
            to = %choice.pitcher,
            reason = ?choice.reason,
            "pitching change"
        );
        defense.state.change_pitcher(&choice.pitcher);
    }

    let pitcher = registry.pitcher(&choice.pitcher);
    let collapsed = roll_collapse(pitcher.quality, &config.fatigue, rng);
    if collapsed {
        tracing::debug!(team = %defense.roster.name, inning, pitcher = %pitcher.name, "pitcher collapse");
    }

    let mut summary = HalfInningSummary {
        inning,
        batting: offense.roster.name.clone(),
        pitcher: choice.pitcher.clone(),
        pitcher_reason: choice.reason,
        collapsed,
        runs: 0,
        plate_appearances: 0,
        stolen_bases: 0,
        caught_stealing: 0,
    };

    let mut state = InningState::default();
    while !state.is_over() {
        let index = offense.state.take_batter();
        let hitter = registry.hitter(offense.roster.batter_at(index));
        let next_hitter_power = registry.hitter_power(offense.roster.batter_at(index + 1));

        let fatigue = defense.state.fatigue_of(&choice.pitcher);
        let penalty = fatigue_penalty(pitcher.quality, fatigue, &config.fatigue);
        let form = draw_form(rng, &config.at_bat);
        let rates = hybrid_rates(hitter, pitcher.delivery, penalty, collapsed, form, &config.at_bat);
        let outcome = draw_outcome(&rates, rng);

        let at_bat = AtBatContext { inning, score_diff: score_diff + state.runs as i32 };
        let batter = BatterInPlay { profile: hitter, slg: rates.slg, next_hitter_power };
        let transition =
            apply_plate_appearance(outcome, state, &at_bat, &batter, defense.state, config, rng);

        tracing::trace!(
            inning,
            batter = %hitter.name,
            ?outcome,
            outs = transition.state.outs,
            runs = transition.runs_scored,
            "plate appearance"
        );

        defense.state.charge_runs(transition.runs_scored);
        match transition.steal {
            StealResult::Safe => summary.stolen_bases += 1,
            StealResult::CaughtStealing => summary.caught_stealing += 1,
            StealResult::NoAttempt => {}
        }
        summary.plate_appearances += 1;
        state = transition.state;
    }

    summary.runs = state.runs;
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PitcherProfile;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn roster(name: &str, prefix: &str) -> TeamRoster {
        let lineup = (0..9).map(|i| format!("{prefix}h{i}")).collect();
        let bullpen = (0..5).map(|i| format!("{prefix}rp{i}")).collect();
        TeamRoster::new(name, lineup, format!("{prefix}sp"), bullpen, None)
    }

    #[test]
    fn test_half_inning_ends_on_third_out() {
        let registry = PlayerRegistry::default();
        let config = SimConfig::default();
        let ctx = SimContext::new(&registry, &config);
        let (away, home) = (roster("A", "a"), roster("H", "h"));
        let mut away_state = TeamGameState::new(&away);
        let mut home_state = TeamGameState::new(&home);
        let mut rng = ChaCha8Rng::seed_from_u64(10);

        for inning in 1..=30u8 {
            let summary = play_half_inning(
                ctx,
                TeamView { roster: &away, state: &mut away_state },
                TeamView { roster: &home, state: &mut home_state },
                inning.min(9),
                0,
                &mut rng,
            );
            // 병살, 도루 실패가 있어도 최소 3타석
            assert!(summary.plate_appearances >= 3);
        }
        let faced = away_state.batter_index();
        assert!(faced >= 90);
    }

    #[test]
    fn test_batting_order_carries_over() {
        let registry = PlayerRegistry::default();
        let config = SimConfig::default();
        let ctx = SimContext::new(&registry, &config);
        let (away, home) = (roster("A", "a"), roster("H", "h"));
        let mut away_state = TeamGameState::new(&away);
        let mut home_state = TeamGameState::new(&home);
        let mut rng = ChaCha8Rng::seed_from_u64(77);

        let first = play_half_inning(
            ctx,
            TeamView { roster: &away, state: &mut away_state },
            TeamView { roster: &home, state: &mut home_state },
            1,
            0,
            &mut rng,
        );
        assert_eq!(away_state.batter_index(), first.plate_appearances as usize);
        assert_eq!(home_state.batter_index(), 0);
        assert!(home_state.fatigue_of("hsp") >= first.plate_appearances as f64);
    }

    #[test]
    fn test_exhausted_starter_is_replaced_at_inning_start() {
        let mut registry = PlayerRegistry::default();
        registry.insert_pitcher(PitcherProfile { quality: 5.5, ..PitcherProfile::neutral("hsp") });
        let config = SimConfig::default();
        let ctx = SimContext::new(&registry, &config);
        let (away, home) = (roster("A", "a"), roster("H", "h"));
        let mut away_state = TeamGameState::new(&away);
        let mut home_state = TeamGameState::new(&home);
        for _ in 0..90 {
            home_state.record_batter_faced(
                crate::engine::probability::PlateOutcome::Out,
                false,
                &config.fatigue,
            );
        }
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let summary = play_half_inning(
            ctx,
            TeamView { roster: &away, state: &mut away_state },
            TeamView { roster: &home, state: &mut home_state },
            6,
            0,
            &mut rng,
        );
        assert_ne!(summary.pitcher, "hsp");
        assert_eq!(home_state.current_pitcher(), summary.pitcher);
        assert_eq!(home_state.starter_runs_allowed(), 0);
    }

    #[test]
    fn test_deterministic_for_seed() {
        let registry = PlayerRegistry::default();
        let config = SimConfig::default();
        let ctx = SimContext::new(&registry, &config);
        let (away, home) = (roster("A", "a"), roster("H", "h"));

        let run = |seed| {
            let mut away_state = TeamGameState::new(&away);
            let mut home_state = TeamGameState::new(&home);
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            play_half_inning(
                ctx,
                TeamView { roster: &away, state: &mut away_state },
                TeamView { roster: &home, state: &mut home_state },
                1,
                0,
                &mut rng,
            )
        };
        assert_eq!(run(123), run(123));
    }
}
