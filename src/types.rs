//! Core data structures shared by the URL and SEO layers.

use std::fmt;
use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::url::resolve_url;

/// Open Graph metadata extracted from a page.
///
/// Every field is optional: a page may carry no OG tags at all. Empty strings are
/// treated the same as absent fields by the analyzer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OgData {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub url: Option<String>,
    pub site_name: Option<String>,
    #[serde(rename = "type")]
    pub og_type: Option<String>,
    /// The URL reached after following redirects.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_url: Option<String>,
}

impl OgData {
    /// Returns the final URL when the fetch ended somewhere other than `requested`.
    pub fn redirected_to(&self, requested: &str) -> Option<&str> {
        self.final_url
            .as_deref()
            .filter(|final_url| !final_url.is_empty() && *final_url != requested)
    }

    /// Make a relative `image` absolute against `base`.
    ///
    /// Resolution never fails; an unresolvable image keeps its original value.
    pub fn with_resolved_image(mut self, base: &str) -> Self {
        if let Some(image) = self.image.take() {
            self.image = Some(resolve_url(&image, base).into_string());
        }
        self
    }
}

/// Result of an operation that never fails but may have to degrade.
///
/// `Resolved` carries a value computed from a successfully parsed URL.
/// `Fallback` carries the caller's input returned unchanged because it could not
/// be interpreted; callers must treat it as best effort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlOutcome {
    Resolved(String),
    Fallback(String),
}

impl UrlOutcome {
    pub fn as_str(&self) -> &str {
        match self {
            UrlOutcome::Resolved(s) | UrlOutcome::Fallback(s) => s,
        }
    }

    pub fn into_string(self) -> String {
        match self {
            UrlOutcome::Resolved(s) | UrlOutcome::Fallback(s) => s,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, UrlOutcome::Resolved(_))
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, UrlOutcome::Fallback(_))
    }
}

impl Deref for UrlOutcome {
    type Target = str;

    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<str> for UrlOutcome {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for UrlOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialEq<str> for UrlOutcome {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for UrlOutcome {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl From<UrlOutcome> for String {
    fn from(outcome: UrlOutcome) -> Self {
        outcome.into_string()
    }
}

/// Grade assigned to one analyzed dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Good,
    Fair,
    Poor,
    Missing,
}

impl Status {
    pub const ALL: [Status; 4] = [Status::Good, Status::Fair, Status::Poor, Status::Missing];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Good => "good",
            Status::Fair => "fair",
            Status::Poor => "poor",
            Status::Missing => "missing",
        }
    }

    /// Component score on the 0-100 scale used by the weighted score.
    pub fn score(&self) -> u32 {
        match self {
            Status::Good => 100,
            Status::Fair => 60,
            Status::Poor => 30,
            Status::Missing => 0,
        }
    }

    /// Ordinal on the 0-3 scale used by the overall label.
    pub fn ordinal(&self) -> u32 {
        match self {
            Status::Good => 3,
            Status::Fair => 2,
            Status::Poor => 1,
            Status::Missing => 0,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse overall label derived from the unweighted 0-3 average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OverallScore {
    Good,
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
    Poor,
}

impl OverallScore {
    pub fn as_str(&self) -> &'static str {
        match self {
            OverallScore::Good => "Good",
            OverallScore::NeedsImprovement => "Needs Improvement",
            OverallScore::Poor => "Poor",
        }
    }
}

impl fmt::Display for OverallScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Colour band of a 0-100 numeric score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreRating {
    Good,
    Fair,
    Poor,
}

impl ScoreRating {
    pub fn from_score(score: u32) -> Self {
        if score >= 70 {
            ScoreRating::Good
        } else if score >= 40 {
            ScoreRating::Fair
        } else {
            ScoreRating::Poor
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreRating::Good => "Good",
            ScoreRating::Fair => "Fair",
            ScoreRating::Poor => "Poor",
        }
    }
}

impl fmt::Display for ScoreRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The five metadata dimensions graded by the analyzer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Title,
    Description,
    Image,
    Url,
    Keywords,
}

impl Dimension {
    pub const ALL: [Dimension; 5] = [
        Dimension::Title,
        Dimension::Description,
        Dimension::Image,
        Dimension::Url,
        Dimension::Keywords,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Dimension::Title => "Title",
            Dimension::Description => "Description",
            Dimension::Image => "Image",
            Dimension::Url => "URL",
            Dimension::Keywords => "Keywords",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_tables() {
        let scores: Vec<u32> = Status::ALL.iter().map(Status::score).collect();
        assert_eq!(scores, vec![100, 60, 30, 0]);

        let ordinals: Vec<u32> = Status::ALL.iter().map(Status::ordinal).collect();
        assert_eq!(ordinals, vec![3, 2, 1, 0]);
    }

    #[test]
    fn test_score_rating_bands() {
        assert_eq!(ScoreRating::from_score(100), ScoreRating::Good);
        assert_eq!(ScoreRating::from_score(70), ScoreRating::Good);
        assert_eq!(ScoreRating::from_score(69), ScoreRating::Fair);
        assert_eq!(ScoreRating::from_score(40), ScoreRating::Fair);
        assert_eq!(ScoreRating::from_score(39), ScoreRating::Poor);
        assert_eq!(ScoreRating::from_score(0), ScoreRating::Poor);
    }

    #[test]
    fn test_outcome_accessors() {
        let resolved = UrlOutcome::Resolved("https://example.com/".to_string());
        assert!(resolved.is_resolved());
        assert_eq!(resolved, "https://example.com/");

        let fallback = UrlOutcome::Fallback("image.jpg".to_string());
        assert!(fallback.is_fallback());
        assert_eq!(fallback.to_string(), "image.jpg");
        assert_eq!(fallback.into_string(), "image.jpg");
    }

    #[test]
    fn test_redirect_detection() {
        let data = OgData {
            final_url: Some("https://www.example.com/".to_string()),
            ..Default::default()
        };

        assert_eq!(
            data.redirected_to("https://example.com"),
            Some("https://www.example.com/")
        );
        assert_eq!(data.redirected_to("https://www.example.com/"), None);
        assert_eq!(OgData::default().redirected_to("https://example.com"), None);
    }

    #[test]
    fn test_image_resolution_against_final_url() {
        let data = OgData {
            image: Some("/images/logo.png".to_string()),
            ..Default::default()
        }
        .with_resolved_image("https://example.com/blog/post");

        assert_eq!(data.image.as_deref(), Some("https://example.com/images/logo.png"));
    }

    #[test]
    fn test_og_data_json_shape() {
        let json = r#"{"title":"Hello","siteName":"Example","type":"website","finalUrl":"https://example.com/"}"#;
        let data: OgData = serde_json::from_str(json).unwrap();

        assert_eq!(data.title.as_deref(), Some("Hello"));
        assert_eq!(data.site_name.as_deref(), Some("Example"));
        assert_eq!(data.og_type.as_deref(), Some("website"));
        assert_eq!(data.final_url.as_deref(), Some("https://example.com/"));
        assert_eq!(data.description, None);
    }
}
