use crate::analysis::types::{PlayerId, SkillValue};

/// Source of a player's current skill rating.
///
/// This service keeps no rating store of its own; a deployment that does
/// can implement this against its player table and hand it to
/// `AnalysisService`.
pub trait SkillLookup: Send + Sync {
    fn current_skill(&self, player_id: PlayerId) -> SkillValue;
}

/// Serves the configured fallback skill for every player.
pub struct StaticSkillLookup {
    skill: SkillValue,
}

impl StaticSkillLookup {
    pub fn new(skill: SkillValue) -> Self {
        Self { skill }
    }
}

impl SkillLookup for StaticSkillLookup {
    fn current_skill(&self, _player_id: PlayerId) -> SkillValue {
        self.skill
    }
}
