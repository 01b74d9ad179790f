//! Player statistic profiles
//!
//! Raw per-season rows are folded into immutable `HitterProfile` /
//! `PitcherProfile` values once, before any game is scheduled.

pub mod profile_builder;
pub mod registry;
pub mod weighting;

pub use profile_builder::{derive_hitter_profile, derive_pitcher_profile, steal_rates};
pub use registry::PlayerRegistry;
pub use weighting::{plain_mean, weighted_stat};
