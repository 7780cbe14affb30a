use super::types::{SkillValue, WinRate};

/// Projects a player's skill from their current value and win rate.
pub trait SkillPredictor: Send + Sync {
    fn predict(&self, current_skill: SkillValue, win_rate: WinRate) -> SkillValue;
}

/// Linear projection around a baseline win rate:
///
///   predicted = current + round(spread * (win_rate - baseline))
///
/// A win rate at the baseline leaves skill unchanged; the defaults
/// (spread 400, baseline 0.5) move a perfect record up by 200 and a
/// winless one down by 200.
pub struct WinRateSkillPredictor {
    spread: f64,
    baseline: f64,
}

impl WinRateSkillPredictor {
    pub fn new(spread: f64, baseline: f64) -> Self {
        Self { spread, baseline }
    }

    fn adjustment(&self, win_rate: WinRate) -> f64 {
        self.spread * (win_rate - self.baseline)
    }
}

impl SkillPredictor for WinRateSkillPredictor {
    fn predict(&self, current_skill: SkillValue, win_rate: WinRate) -> SkillValue {
        current_skill + self.adjustment(win_rate).round() as SkillValue
    }
}
