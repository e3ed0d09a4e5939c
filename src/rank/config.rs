//! Ranking configuration.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Weights for the four normalized scoring dimensions.
///
/// The composite score is the plain linear combination
/// `urgency·u + importance·i + effort·e + dependency·d` over sub-scores in
/// [0, 1]. Weights are **not** required to sum to 1.0 and the score is not
/// clamped; uniform rescaling changes score magnitudes but never the
/// ranking. Keeping the weights normalized is the caller's responsibility.
///
/// Serde uses per-field defaults, so a partial mapping like
/// `{"urgency": 0.5}` deserializes with the remaining defaults intact.
///
/// # Examples
///
/// ```
/// use taskrank::rank::ScoreWeights;
///
/// let weights = ScoreWeights::default()
///     .with_effort(0.4)
///     .with_dependency(0.0);
/// assert!((weights.urgency - 0.35).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    pub urgency: f64,
    pub importance: f64,
    pub effort: f64,
    pub dependency: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            urgency: 0.35,
            importance: 0.30,
            effort: 0.20,
            dependency: 0.15,
        }
    }
}

impl ScoreWeights {
    pub fn with_urgency(mut self, weight: f64) -> Self {
        self.urgency = weight;
        self
    }

    pub fn with_importance(mut self, weight: f64) -> Self {
        self.importance = weight;
        self
    }

    pub fn with_effort(mut self, weight: f64) -> Self {
        self.effort = weight;
        self
    }

    pub fn with_dependency(mut self, weight: f64) -> Self {
        self.dependency = weight;
        self
    }
}

/// Configuration for one ranking run.
#[derive(Debug, Clone)]
pub struct RankConfig {
    /// Dimension weights for the composite score.
    pub weights: ScoreWeights,

    /// Reference date for due-date arithmetic. `None` means the current
    /// local date; fix it explicitly for deterministic output.
    pub today: Option<NaiveDate>,

    /// Whether graph analysis and feature extraction run in parallel using
    /// rayon. Output is bit-identical either way.
    pub parallel: bool,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            weights: ScoreWeights::default(),
            today: None,
            parallel: true,
        }
    }
}

impl RankConfig {
    pub fn with_weights(mut self, weights: ScoreWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
