pub mod game_result;
pub mod profile;
pub mod roster;
pub mod season;

pub use game_result::{BatchSummary, GameResult, RunBucket, RunDistribution, Side};
pub use profile::{Delivery, HitterProfile, PitcherProfile, SplitLine};
pub use roster::{BullpenRoles, RoleOverrides, RosterData, TeamRoster, LINEUP_SIZE};
pub use season::{HitterSeasonRow, PitcherSeasonRow, PitcherTypeRow, SeasonRow};
