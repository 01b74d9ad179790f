pub mod base_state;
pub mod batch;
pub mod bullpen;
pub mod config;
pub mod fatigue;
pub mod game;
pub mod game_state;
pub mod half_inning;
pub mod probability;
pub mod steal;
pub mod transition;

pub use base_state::{resolve_outcome, Bases, DoublePlaySituation, InningState, OUTS_PER_INNING};
pub use batch::{run_batch, run_summary};
pub use bullpen::{choose_pitcher, leverage, ChoiceReason, Leverage, PitchingChoice, ReliefContext, ReliefRule};
pub use config::SimConfig;
pub use fatigue::{collapse_probability, fatigue_penalty, fatigue_ratio, FatiguePenalty, FatigueTier};
pub use game::{GameEngine, GameLog};
pub use game_state::TeamGameState;
pub use half_inning::{play_half_inning, HalfInningSummary, SimContext, TeamView};
pub use probability::{draw_outcome, hybrid_rates, HitType, HybridRates, PlateOutcome};
pub use steal::{attempt_steal, steal_probability, StealResult, StealSituation};
pub use transition::{apply_plate_appearance, AtBatContext, BatterInPlay, Transition};
