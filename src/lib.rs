//! ogscore - URL handling and Open Graph SEO scoring for link previews
//!
//! This crate holds the pure core of a link preview debugger: the URL rules used
//! to accept and canonicalize what a user types, the resolution of page-relative
//! links, and a deterministic SEO grade for the Open Graph metadata of a page.
//!
//! Fetching pages and extracting `<meta>` tags is left to the caller; the
//! analyzer only sees an [`OgData`] record.
//!
//! # Quick Start
//!
//! ```
//! use ogscore::{analyze_seo, extract_domain, normalize_url, resolve_url, OgData};
//!
//! let page = normalize_url("example.com/blog")?;
//! assert_eq!(page, "https://example.com/blog");
//! assert_eq!(extract_domain(&page), "example.com");
//!
//! let image = resolve_url("/og/cover.png", &page);
//! assert_eq!(image, "https://example.com/og/cover.png");
//!
//! let report = analyze_seo(&OgData {
//!     title: Some("Rust link previews done right".to_string()),
//!     image: Some(image.into_string()),
//!     ..Default::default()
//! });
//! println!("{} ({})", report.numeric_score, report.overall_score);
//! # Ok::<(), ogscore::UrlError>(())
//! ```
//!
//! # Scoring
//!
//! | Dimension   | Weight | Good when                          |
//! |-------------|--------|------------------------------------|
//! | title       | 0.25   | 30-60 characters                   |
//! | description | 0.25   | 80-160 characters                  |
//! | image       | 0.20   | present                            |
//! | url         | 0.10   | present                            |
//! | keywords    | 0.20   | two or more shared title keywords  |
//!
//! Statuses map to `good=100, fair=60, poor=30, missing=0` and the numeric score
//! is their weighted sum, rounded. The overall label is computed separately from
//! the unweighted average of `good=3, fair=2, poor=1, missing=0`.
//!
//! # Error Handling
//!
//! Only [`normalize_url`] fails, with [`UrlError::MissingUrl`] or
//! [`UrlError::MalformedUrl`]. [`extract_domain`] and [`resolve_url`] return a
//! [`UrlOutcome`] that says whether the value was resolved or is the input
//! handed back unchanged.

pub use error::UrlError;
pub use seo::{analyze_seo, ComponentWeights, ScoreContribution, SeoReport};
pub use types::{Dimension, OgData, OverallScore, ScoreRating, Status, UrlOutcome};
pub use crate::url::{extract_domain, is_valid_url, normalize_url, resolve_url};

pub mod error;
pub mod seo;
pub mod types;
pub mod url;
