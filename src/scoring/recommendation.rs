use super::component::ScoreComponent;
use crate::heroes::Hero;
use crate::Score;
use serde::Deserialize;
use serde::Serialize;
use std::sync::Arc;

/// A ranked hero suggestion with its scoring breakdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub hero: Arc<Hero>,
    /// Weighted aggregate of the component values, in [0, 1].
    pub score: Score,
    pub components: Vec<ScoreComponent>,
    /// Free-text rationale attached by an external explanation generator.
    pub explanation: Option<String>,
}

impl Recommendation {
    pub fn new(hero: Arc<Hero>, score: Score, components: Vec<ScoreComponent>) -> Self {
        Self {
            hero,
            score,
            components,
            explanation: None,
        }
    }

    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = Some(explanation.into());
        self
    }
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:.2} {}", self.score, self.hero.localized_name)?;
        for component in &self.components {
            write!(f, "  [{}]", component)?;
        }
        Ok(())
    }
}
