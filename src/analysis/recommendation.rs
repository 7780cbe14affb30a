use super::types::SkillValue;

/// Suggests an opponent skill level for a player of the given strength.
/// The matching formula is still an open product decision, so callers
/// depend on this seam rather than any concrete rule.
pub trait OpponentSkillRecommender: Send + Sync {
    fn recommend(&self, current_skill: SkillValue) -> SkillValue;
}

/// Placeholder recommender: current skill plus a configured offset.
/// With the default offset of 0 this is the identity mapping.
// TODO: replace with the real matching rule once product settles on one.
pub struct FixedOffsetRecommender {
    offset: SkillValue,
}

impl FixedOffsetRecommender {
    pub fn new(offset: SkillValue) -> Self {
        Self { offset }
    }
}

impl OpponentSkillRecommender for FixedOffsetRecommender {
    fn recommend(&self, current_skill: SkillValue) -> SkillValue {
        current_skill + self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_offset_is_identity() {
        let recommender = FixedOffsetRecommender::new(0);
        assert_eq!(recommender.recommend(1000), 1000);
    }

    #[test]
    fn test_offset_is_applied() {
        let recommender = FixedOffsetRecommender::new(50);
        assert_eq!(recommender.recommend(1000), 1050);
        assert_eq!(recommender.recommend(200), 250);
    }
}
