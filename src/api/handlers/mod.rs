use std::time::Instant;

use crate::services::analysis::AnalysisService;

pub mod analysis;
pub mod health;

pub struct AppState {
    pub analysis: AnalysisService,
    pub started_at: Instant,
}
