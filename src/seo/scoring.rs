//! Grading rules and score arithmetic.
//!
//! Weights are kept in integer percent so that they sum to exactly 100 and the
//! weighted score can be computed without floating point drift.

use crate::types::{Dimension, OverallScore, Status};

/// Per-dimension weight in percent of the numeric score.
pub const WEIGHT_TABLE: [(Dimension, u32); 5] = [
    (Dimension::Title, 25),
    (Dimension::Description, 25),
    (Dimension::Image, 20),
    (Dimension::Url, 10),
    (Dimension::Keywords, 20),
];

/// Sum of all weights in [`WEIGHT_TABLE`].
pub const WEIGHT_TOTAL: u32 = 100;

/// Length thresholds for a text field, in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthLimits {
    /// Shorter than this is poor.
    pub min: usize,
    /// Shorter than this (but at least `min`) is fair.
    pub good_from: usize,
    /// Longer than this is poor.
    pub max: usize,
}

pub const TITLE_LIMITS: LengthLimits = LengthLimits {
    min: 10,
    good_from: 30,
    max: 60,
};

pub const DESCRIPTION_LIMITS: LengthLimits = LengthLimits {
    min: 50,
    good_from: 80,
    max: 160,
};

/// Weight of `dimension` in percent.
pub fn weight_percent(dimension: Dimension) -> u32 {
    WEIGHT_TABLE
        .iter()
        .find(|(dim, _)| *dim == dimension)
        .map(|(_, weight)| *weight)
        .unwrap_or(0)
}

/// Weight of `dimension` as a fraction of 1.0.
pub fn weight(dimension: Dimension) -> f64 {
    weight_percent(dimension) as f64 / WEIGHT_TOTAL as f64
}

/// Grade a text field by its length in UTF-16 code units, the unit browsers
/// report for string length. `None` and empty text are missing.
pub fn grade_length(text: Option<&str>, limits: LengthLimits) -> (Status, usize) {
    let length = text.map(|t| t.encode_utf16().count()).unwrap_or(0);

    let status = if length == 0 {
        Status::Missing
    } else if length < limits.min || length > limits.max {
        Status::Poor
    } else if length < limits.good_from {
        Status::Fair
    } else {
        Status::Good
    };

    (status, length)
}

/// Grade a field that only needs to be present.
pub fn grade_presence(value: Option<&str>) -> Status {
    match value {
        Some(v) if !v.is_empty() => Status::Good,
        _ => Status::Missing,
    }
}

/// Weighted 0-100 score, rounded half up.
pub fn numeric_score(statuses: &[(Dimension, Status)]) -> u32 {
    let weighted: u32 = statuses
        .iter()
        .map(|(dimension, status)| status.score() * weight_percent(*dimension))
        .sum();

    (weighted + WEIGHT_TOTAL / 2) / WEIGHT_TOTAL
}

/// Overall label from the unweighted average of 0-3 ordinals.
pub fn overall_score(statuses: &[Status]) -> OverallScore {
    if statuses.is_empty() {
        return OverallScore::Poor;
    }

    let total: u32 = statuses.iter().map(Status::ordinal).sum();
    let average = total as f64 / statuses.len() as f64;

    if average >= 2.5 {
        OverallScore::Good
    } else if average >= 1.5 {
        OverallScore::NeedsImprovement
    } else {
        OverallScore::Poor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all(status: Status) -> Vec<(Dimension, Status)> {
        Dimension::ALL.iter().map(|dim| (*dim, status)).collect()
    }

    #[test]
    fn test_weights_sum_to_total() {
        let sum: u32 = WEIGHT_TABLE.iter().map(|(_, weight)| weight).sum();
        assert_eq!(sum, WEIGHT_TOTAL);

        for dimension in Dimension::ALL {
            assert!(weight_percent(dimension) > 0, "No weight for {}", dimension);
        }
    }

    #[test]
    fn test_fractional_weights() {
        assert_eq!(weight(Dimension::Title), 0.25);
        assert_eq!(weight(Dimension::Image), 0.2);
        assert_eq!(weight(Dimension::Url), 0.1);
    }

    #[test]
    fn test_title_length_boundaries() {
        let test_cases = vec![
            (0, Status::Missing),
            (9, Status::Poor),
            (10, Status::Fair),
            (29, Status::Fair),
            (30, Status::Good),
            (60, Status::Good),
            (61, Status::Poor),
        ];

        for (length, expected) in test_cases {
            let title = "x".repeat(length);
            let (status, counted) = grade_length(Some(&title), TITLE_LIMITS);
            assert_eq!(status, expected, "Wrong grade for title length {}", length);
            assert_eq!(counted, length);
        }
    }

    #[test]
    fn test_description_length_boundaries() {
        let test_cases = vec![
            (49, Status::Poor),
            (50, Status::Fair),
            (79, Status::Fair),
            (80, Status::Good),
            (160, Status::Good),
            (161, Status::Poor),
        ];

        for (length, expected) in test_cases {
            let description = "y".repeat(length);
            let (status, _) = grade_length(Some(&description), DESCRIPTION_LIMITS);
            assert_eq!(status, expected, "Wrong grade for description length {}", length);
        }
    }

    #[test]
    fn test_length_counts_utf16_units() {
        let (_, length) = grade_length(Some("h\u{e9}llo w\u{f6}rld"), TITLE_LIMITS);
        assert_eq!(length, 11);

        // Characters outside the BMP are surrogate pairs.
        let (status, length) = grade_length(Some(&"\u{1F600}".repeat(31)), TITLE_LIMITS);
        assert_eq!(length, 62);
        assert_eq!(status, Status::Poor);

        let (status, length) = grade_length(Some(&"\u{1F600}".repeat(15)), TITLE_LIMITS);
        assert_eq!(length, 30);
        assert_eq!(status, Status::Good);

        let (status, length) = grade_length(Some(&"\u{1F600}".repeat(40)), DESCRIPTION_LIMITS);
        assert_eq!(length, 80);
        assert_eq!(status, Status::Good);
    }

    #[test]
    fn test_presence() {
        assert_eq!(grade_presence(Some("https://example.com/og.png")), Status::Good);
        assert_eq!(grade_presence(Some("")), Status::Missing);
        assert_eq!(grade_presence(None), Status::Missing);
    }

    #[test]
    fn test_numeric_score_extremes() {
        assert_eq!(numeric_score(&all(Status::Good)), 100);
        assert_eq!(numeric_score(&all(Status::Fair)), 60);
        assert_eq!(numeric_score(&all(Status::Poor)), 30);
        assert_eq!(numeric_score(&all(Status::Missing)), 0);
    }

    #[test]
    fn test_numeric_score_rounds_half_up() {
        // 30 * 0.25 = 7.5
        let statuses = vec![
            (Dimension::Title, Status::Poor),
            (Dimension::Description, Status::Missing),
            (Dimension::Image, Status::Missing),
            (Dimension::Url, Status::Missing),
            (Dimension::Keywords, Status::Missing),
        ];
        assert_eq!(numeric_score(&statuses), 8);
    }

    #[test]
    fn test_overall_thresholds() {
        use Status::*;

        assert_eq!(overall_score(&[Good, Good, Good, Fair, Fair]), OverallScore::Good);
        assert_eq!(overall_score(&[Good, Good, Fair, Fair, Fair]), OverallScore::NeedsImprovement);
        assert_eq!(overall_score(&[Good, Good, Poor, Poor, Missing]), OverallScore::NeedsImprovement);
        assert_eq!(overall_score(&[Good, Poor, Poor, Missing, Missing]), OverallScore::Poor);
        assert_eq!(overall_score(&[Missing; 5]), OverallScore::Poor);
    }

    #[test]
    fn test_labels_can_disagree_with_weighted_score() {
        use Status::*;

        let statuses = vec![
            (Dimension::Title, Good),
            (Dimension::Description, Good),
            (Dimension::Image, Good),
            (Dimension::Url, Missing),
            (Dimension::Keywords, Poor),
        ];
        let grades: Vec<Status> = statuses.iter().map(|(_, s)| *s).collect();

        assert_eq!(numeric_score(&statuses), 76);
        assert_eq!(overall_score(&grades), OverallScore::NeedsImprovement);
    }
}
