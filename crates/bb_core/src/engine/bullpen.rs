//! Bullpen / relief decision policy
//!
//! Called once at the start of every half-inning. The chosen pitcher faces
//! every batter of that half-inning; there is no mid-inning substitution.
//!
//! Order of evaluation:
//! 1. starter check (stay / long relief after a blowup / pull when exhausted)
//! 2. leverage category for the inning and score
//! 3. [`RELIEF_PRIORITY`] rules, first one that finds a rested arm wins
//! 4. nobody rested: current pitcher keeps going

use super::config::{BullpenConfig, SimConfig};
use super::fatigue::fatigue_penalty;
use super::game_state::TeamGameState;
use super::probability::hybrid_rates;
use crate::models::{HitterProfile, TeamRoster};
use crate::player::PlayerRegistry;
use serde::{Deserialize, Serialize};

/// 경기 상황의 중요도
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Leverage {
    Save,
    High,
    Medium,
    Garbage,
    Low,
}

/// 레버리지 판정. `defense_lead` 는 수비팀 기준 점수차 (양수 = 수비팀 리드)
pub fn leverage(inning: u8, defense_lead: i32, cfg: &BullpenConfig) -> Leverage {
    if inning >= cfg.save_inning_from {
        if (1..=cfg.save_max_lead).contains(&defense_lead) {
            return Leverage::Save;
        }
        if (-cfg.save_max_lead..=0).contains(&defense_lead) {
            return Leverage::High;
        }
    }
    if inning >= cfg.medium_inning_from && defense_lead.abs() <= cfg.medium_max_margin {
        return Leverage::Medium;
    }
    if defense_lead.abs() >= cfg.garbage_min_margin {
        return Leverage::Garbage;
    }
    Leverage::Low
}

/// 교체 판단에 필요한 읽기 전용 정보
#[derive(Debug, Clone, Copy)]
pub struct ReliefContext<'a> {
    pub inning: u8,
    pub defense_lead: i32,
    pub defense: &'a TeamGameState,
    pub roster: &'a TeamRoster,
    /// 다음에 나올 타자들 (매치업 계산용)
    pub upcoming: &'a [&'a HitterProfile],
    pub registry: &'a PlayerRegistry,
    pub config: &'a SimConfig,
}

impl<'a> ReliefContext<'a> {
    fn is_rested(&self, pitcher: &str, below: f64) -> bool {
        self.defense.fatigue_of(pitcher) < below
    }

    fn rested<I>(&self, pool: I, below: f64) -> impl Iterator<Item = &'a String> + '_
    where
        I: IntoIterator<Item = &'a String>,
        I::IntoIter: 'a,
    {
        pool.into_iter().filter(move |p| self.is_rested(p, below))
    }
}

/// 불펜 선택 규칙 (우선순위 순)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReliefRule {
    /// 세이브 상황: 지정 마무리
    Closer,
    /// 8회 1~3점 리드: 지정 셋업
    Setup,
    /// 큰 점수차: 가장 약한 투수로 소화
    MopUp,
    /// 접전 후반: 가장 강한 투수
    HighLeverage,
    /// 중간계투 중 다음 타자들 상대로 예상 타율이 가장 낮은 투수
    Matchup,
    /// 아무나 쉬고 있는 투수 (불펜 순서)
    AnyRested,
}

pub const RELIEF_PRIORITY: [ReliefRule; 6] = [
    ReliefRule::Closer,
    ReliefRule::Setup,
    ReliefRule::MopUp,
    ReliefRule::HighLeverage,
    ReliefRule::Matchup,
    ReliefRule::AnyRested,
];

impl ReliefRule {
    /// 규칙이 적용되는 상황인지
    pub fn applies(self, leverage: Leverage, ctx: &ReliefContext<'_>) -> bool {
        let cfg = &ctx.config.bullpen;
        match self {
            ReliefRule::Closer => leverage == Leverage::Save,
            ReliefRule::Setup => {
                ctx.inning == cfg.setup_inning && (1..=cfg.save_max_lead).contains(&ctx.defense_lead)
            }
            ReliefRule::MopUp => leverage == Leverage::Garbage,
            ReliefRule::HighLeverage => leverage == Leverage::High,
            ReliefRule::Matchup | ReliefRule::AnyRested => true,
        }
    }

    /// 규칙에 맞는 투수 선택 (없으면 `None`)
    pub fn select<'a>(self, ctx: &ReliefContext<'a>) -> Option<&'a str> {
        let cfg = &ctx.config.bullpen;
        let roles = &ctx.roster.roles;
        let bullpen = &ctx.roster.bullpen;

        match self {
            ReliefRule::Closer => roles
                .closer
                .as_deref()
                .filter(|p| ctx.is_rested(p, cfg.closer_fresh)),
            ReliefRule::Setup => roles
                .setup
                .as_deref()
                .filter(|p| ctx.is_rested(p, cfg.setup_fresh)),
            ReliefRule::MopUp => {
                pick_by_quality(ctx.rested(bullpen, cfg.mop_up_fresh), ctx.registry, |q, best| q > best)
            }
            ReliefRule::HighLeverage => pick_by_quality(
                ctx.rested(bullpen, cfg.high_leverage_fresh),
                ctx.registry,
                |q, best| q < best,
            ),
            ReliefRule::Matchup => best_matchup(ctx.rested(&roles.middle_relief, cfg.middle_relief_fresh), ctx),
            ReliefRule::AnyRested => ctx.rested(bullpen, cfg.any_arm_fresh).next().map(String::as_str),
        }
    }
}

/// 교체 사유
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChoiceReason {
    StarterContinues,
    /// 선발이 난타당해 롱릴리프 투입
    LongRelief,
    Rule(ReliefRule),
    /// 쉬고 있는 투수가 없어 현재 투수 계속
    NoneRested,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PitchingChoice {
    pub pitcher: String,
    pub reason: ChoiceReason,
}

impl PitchingChoice {
    fn new(pitcher: &str, reason: ChoiceReason) -> Self {
        Self { pitcher: pitcher.to_string(), reason }
    }
}

enum StarterCall<'a> {
    Stay,
    LongRelief(&'a str),
    Pull,
}

fn starter_call<'a>(ctx: &ReliefContext<'a>) -> StarterCall<'a> {
    let cfg = &ctx.config.bullpen;
    let fatigue = ctx.defense.fatigue_of(ctx.defense.current_pitcher());
    let runs = ctx.defense.starter_runs_allowed();

    if fatigue < cfg.starter_fatigue_limit && runs <= cfg.starter_runs_tolerated {
        return StarterCall::Stay;
    }
    if runs >= cfg.starter_blowup_runs && fatigue >= cfg.starter_blowup_fatigue {
        if let Some(arm) = ctx.rested(&ctx.roster.roles.long_relief, cfg.long_relief_fresh).next() {
            return StarterCall::LongRelief(arm);
        }
    }
    if fatigue >= cfg.starter_fatigue_limit {
        StarterCall::Pull
    } else {
        StarterCall::Stay
    }
}

/// 이번 하프이닝을 던질 투수 결정
pub fn choose_pitcher(ctx: &ReliefContext<'_>) -> PitchingChoice {
    let current = ctx.defense.current_pitcher();

    if ctx.defense.starter_is_pitching() {
        match starter_call(ctx) {
            StarterCall::Stay => return PitchingChoice::new(current, ChoiceReason::StarterContinues),
            StarterCall::LongRelief(arm) => return PitchingChoice::new(arm, ChoiceReason::LongRelief),
            StarterCall::Pull => {}
        }
    }

    let lev = leverage(ctx.inning, ctx.defense_lead, &ctx.config.bullpen);
    RELIEF_PRIORITY
        .iter()
        .filter(|rule| rule.applies(lev, ctx))
        .find_map(|&rule| rule.select(ctx).map(|p| PitchingChoice::new(p, ChoiceReason::Rule(rule))))
        .unwrap_or_else(|| PitchingChoice::new(current, ChoiceReason::NoneRested))
}

/// quality 비교로 한 명 선택. 동률이면 불펜 순서상 앞선 투수.
fn pick_by_quality<'a>(
    candidates: impl Iterator<Item = &'a String>,
    registry: &PlayerRegistry,
    better: impl Fn(f64, f64) -> bool,
) -> Option<&'a str> {
    let mut best: Option<(&'a String, f64)> = None;
    for pitcher in candidates {
        let quality = registry.pitcher_quality(pitcher);
        match best {
            Some((_, best_quality)) if !better(quality, best_quality) => {}
            _ => best = Some((pitcher, quality)),
        }
    }
    best.map(|(p, _)| p.as_str())
}

/// 다음 타자들 상대 예상 하이브리드 타율 합계 (컨디션 1.0, 피로 0, 붕괴 없음)
pub fn projected_matchup_avg(pitcher: &str, ctx: &ReliefContext<'_>) -> f64 {
    let profile = ctx.registry.pitcher(pitcher);
    let penalty = fatigue_penalty(profile.quality, 0.0, &ctx.config.fatigue);
    ctx.upcoming
        .iter()
        .map(|hitter| hybrid_rates(hitter, profile.delivery, penalty, false, 1.0, &ctx.config.at_bat).avg)
        .sum()
}

fn best_matchup<'a>(
    candidates: impl Iterator<Item = &'a String>,
    ctx: &ReliefContext<'a>,
) -> Option<&'a str> {
    let mut best: Option<(&'a String, f64)> = None;
    for pitcher in candidates {
        let projected = projected_matchup_avg(pitcher, ctx);
        match best {
            Some((_, lowest)) if projected >= lowest => {}
            _ => best = Some((pitcher, projected)),
        }
    }
    best.map(|(p, _)| p.as_str())
}
