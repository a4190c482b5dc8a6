//! The analyzer's output.

use serde::{Deserialize, Serialize};

use crate::seo::scoring::{weight, weight_percent, WEIGHT_TOTAL};
use crate::types::{Dimension, OverallScore, ScoreRating, Status};

/// Grade of a text field judged by its length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthCheck {
    pub status: Status,
    pub recommendation: String,
    /// Length in characters; 0 when absent.
    pub length: usize,
}

/// Grade of a field judged only by its presence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresenceCheck {
    pub status: Status,
    pub recommendation: String,
}

/// Keyword consistency between title and description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordCheck {
    pub status: Status,
    pub analysis: String,
    /// Up to five keywords ranked by combined frequency.
    pub suggested: Vec<String>,
}

/// Weights used for the numeric score, as fractions of 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComponentWeights {
    pub title: f64,
    pub description: f64,
    pub image: f64,
    pub url: f64,
    pub keywords: f64,
}

impl Default for ComponentWeights {
    fn default() -> Self {
        Self {
            title: weight(Dimension::Title),
            description: weight(Dimension::Description),
            image: weight(Dimension::Image),
            url: weight(Dimension::Url),
            keywords: weight(Dimension::Keywords),
        }
    }
}

/// One row of the weighted score breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreContribution {
    pub dimension: Dimension,
    pub status: Status,
    /// Component score on the 0-100 scale.
    pub score: u32,
    pub weight: f64,
    /// `score * weight`, the points this dimension adds to the numeric score.
    pub contribution: f64,
}

/// Full SEO report for one metadata record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoReport {
    pub title: LengthCheck,
    pub description: LengthCheck,
    pub image: PresenceCheck,
    pub url: PresenceCheck,
    pub keywords: KeywordCheck,
    pub overall_score: OverallScore,
    pub numeric_score: u32,
    pub component_weights: ComponentWeights,
}

impl SeoReport {
    pub fn status(&self, dimension: Dimension) -> Status {
        match dimension {
            Dimension::Title => self.title.status,
            Dimension::Description => self.description.status,
            Dimension::Image => self.image.status,
            Dimension::Url => self.url.status,
            Dimension::Keywords => self.keywords.status,
        }
    }

    /// Status of every dimension, in weight table order.
    pub fn statuses(&self) -> [(Dimension, Status); 5] {
        Dimension::ALL.map(|dimension| (dimension, self.status(dimension)))
    }

    /// Per-dimension contributions to [`SeoReport::numeric_score`].
    pub fn breakdown(&self) -> Vec<ScoreContribution> {
        self.statuses()
            .into_iter()
            .map(|(dimension, status)| ScoreContribution {
                dimension,
                status,
                score: status.score(),
                weight: weight(dimension),
                contribution: (status.score() * weight_percent(dimension)) as f64
                    / WEIGHT_TOTAL as f64,
            })
            .collect()
    }

    pub fn rating(&self) -> ScoreRating {
        ScoreRating::from_score(self.numeric_score)
    }
}
