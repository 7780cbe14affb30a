pub mod player_stats;
pub mod prediction;
pub mod recommendation;
pub mod strategy_tips;
pub mod types;
pub mod win_probability;

pub use player_stats::{PlayerStats, compute_player_stats};
pub use prediction::{SkillPredictor, WinRateSkillPredictor};
pub use recommendation::{FixedOffsetRecommender, OpponentSkillRecommender};
pub use strategy_tips::generate_strategy_tips;
pub use types::{GameRecord, PlayerId, SkillValue, WinRate};
pub use win_probability::estimate_win_probability;
