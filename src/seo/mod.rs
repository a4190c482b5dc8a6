//! SEO analysis of Open Graph metadata.
//!
//! - `keywords`: keyword extraction and title/description consistency
//! - `scoring`: grading thresholds, weight table and score arithmetic
//! - `analyzer`: the `analyze_seo` entry point and recommendation texts
//! - `report`: the report types it produces

pub mod analyzer;
pub mod keywords;
pub mod report;
pub mod scoring;

pub use analyzer::analyze_seo;
pub use keywords::{extract_keywords, STOP_WORDS};
pub use report::{
    ComponentWeights, KeywordCheck, LengthCheck, PresenceCheck, ScoreContribution, SeoReport,
};
pub use scoring::{weight, weight_percent, WEIGHT_TABLE, WEIGHT_TOTAL};
