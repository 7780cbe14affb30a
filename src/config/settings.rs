#[derive(Debug, Clone)]
pub struct AnalysisSettings {
    pub default_win_probability: f64,
    pub low_win_rate_threshold: f64,
    pub high_win_rate_threshold: f64,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            default_win_probability: 0.5,
            low_win_rate_threshold: 0.4,
            high_win_rate_threshold: 0.7,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SkillSettings {
    pub fallback_skill: i64,
    pub opponent_skill_offset: i64,
    pub prediction_spread: f64,
    pub prediction_baseline: f64,
}

impl Default for SkillSettings {
    fn default() -> Self {
        Self {
            fallback_skill: 1000,
            opponent_skill_offset: 0,
            prediction_spread: 400.0,
            prediction_baseline: 0.5,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub analysis: AnalysisSettings,
    pub skill: SkillSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            analysis: AnalysisSettings::default(),
            skill: SkillSettings::default(),
        }
    }
}

// Passed explicitly (Dependency Injection) rather than held in a global.
