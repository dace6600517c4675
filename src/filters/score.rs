//! Star rating filter.

use super::Filter;
use crate::play::App;

/// Filters apps by star rating.
///
/// Unrated apps fail when a minimum is set and pass a maximum-only filter.
pub struct ScoreFilter {
    min: Option<f32>,
    max: Option<f32>,
}

impl ScoreFilter {
    /// Creates a new score filter. Bounds are clamped to 0.0-5.0.
    pub fn new(min: Option<f32>, max: Option<f32>) -> Self {
        Self { min: min.map(|m| m.clamp(0.0, 5.0)), max: max.map(|m| m.clamp(0.0, 5.0)) }
    }

    /// Creates a filter with only a minimum score.
    pub fn min(score: f32) -> Self {
        Self::new(Some(score), None)
    }
}

impl Filter for ScoreFilter {
    fn matches(&self, app: &App) -> bool {
        let Some(score) = app.score else {
            return self.min.is_none();
        };

        self.min.map_or(true, |min| score >= min) && self.max.map_or(true, |max| score <= max)
    }

    fn description(&self) -> String {
        match (self.min, self.max) {
            (Some(min), Some(max)) => format!("Score: {:.1} - {:.1} stars", min, max),
            (Some(min), None) => format!("Score: >= {:.1} stars", min),
            (None, Some(max)) => format!("Score: <= {:.1} stars", max),
            (None, None) => "Score: any".to_string(),
        }
    }
}
