use log::info;

use crate::analysis::{
    FixedOffsetRecommender, GameRecord, OpponentSkillRecommender, PlayerId, PlayerStats,
    SkillPredictor, SkillValue, WinRateSkillPredictor, compute_player_stats,
    estimate_win_probability, generate_strategy_tips,
};
use crate::config::settings::AppConfig;
use crate::skill::{SkillLookup, StaticSkillLookup};

/// Runs the per-request computations and assembles their outputs.
/// Stateless between requests; concurrent calls share nothing mutable.
pub struct AnalysisService {
    config: AppConfig,
    skill_lookup: Box<dyn SkillLookup>,
    recommender: Box<dyn OpponentSkillRecommender>,
    predictor: Box<dyn SkillPredictor>,
}

#[derive(Debug)]
pub struct AnalysisOutcome {
    pub win_probability: f64,
    pub recommended_opponent_skill: SkillValue,
    pub strategy_tips: [&'static str; 2],
    pub predicted_skill: SkillValue,
}

impl AnalysisService {
    pub fn new(config: AppConfig) -> Self {
        let skill_lookup = Box::new(StaticSkillLookup::new(config.skill.fallback_skill));
        let recommender = Box::new(FixedOffsetRecommender::new(config.skill.opponent_skill_offset));
        let predictor = Box::new(WinRateSkillPredictor::new(
            config.skill.prediction_spread,
            config.skill.prediction_baseline,
        ));
        Self {
            config,
            skill_lookup,
            recommender,
            predictor,
        }
    }

    /// Swap in alternative strategies (a real matchmaking formula, a
    /// rating-store lookup) without touching the handler.
    pub fn with_strategies(
        config: AppConfig,
        skill_lookup: Box<dyn SkillLookup>,
        recommender: Box<dyn OpponentSkillRecommender>,
        predictor: Box<dyn SkillPredictor>,
    ) -> Self {
        Self {
            config,
            skill_lookup,
            recommender,
            predictor,
        }
    }

    pub fn analyze(&self, player_id: PlayerId, games: &[GameRecord]) -> AnalysisOutcome {
        info!("Analyzing {} games for player {}", games.len(), player_id);

        let win_probability = estimate_win_probability(player_id, games, &self.config.analysis);
        let current_skill = self.skill_lookup.current_skill(player_id);

        AnalysisOutcome {
            win_probability,
            recommended_opponent_skill: self.recommender.recommend(current_skill),
            strategy_tips: generate_strategy_tips(win_probability, &self.config.analysis),
            predicted_skill: self.predictor.predict(current_skill, win_probability),
        }
    }

    pub fn player_stats(&self, player_id: PlayerId, games: &[GameRecord]) -> PlayerStats {
        compute_player_stats(player_id, games)
    }
}
