//! Turns a metadata record into a graded [`SeoReport`].

use crate::seo::keywords::analyze_keywords;
use crate::seo::report::{ComponentWeights, LengthCheck, PresenceCheck, SeoReport};
use crate::seo::scoring::{
    grade_length, grade_presence, numeric_score, overall_score, DESCRIPTION_LIMITS, TITLE_LIMITS,
};
use crate::types::{Dimension, OgData, Status};

/// Analyze Open Graph metadata and produce recommendations plus a score.
///
/// Pure and infallible: absent or empty fields grade as `missing` and the report
/// is always fully populated.
///
/// # Examples
///
/// ```
/// use ogscore::{analyze_seo, OgData, OverallScore, Status};
///
/// let report = analyze_seo(&OgData::default());
/// assert_eq!(report.title.status, Status::Missing);
/// assert_eq!(report.numeric_score, 0);
/// assert_eq!(report.overall_score, OverallScore::Poor);
/// ```
pub fn analyze_seo(data: &OgData) -> SeoReport {
    let title = non_empty(&data.title);
    let description = non_empty(&data.description);
    let image = non_empty(&data.image);
    let url = non_empty(&data.url);

    let (title_status, title_length) = grade_length(title, TITLE_LIMITS);
    let (description_status, description_length) = grade_length(description, DESCRIPTION_LIMITS);
    let image_status = grade_presence(image);
    let url_status = grade_presence(url);
    let keywords = analyze_keywords(title, description, non_empty(&data.site_name));

    let statuses = [
        (Dimension::Title, title_status),
        (Dimension::Description, description_status),
        (Dimension::Image, image_status),
        (Dimension::Url, url_status),
        (Dimension::Keywords, keywords.status),
    ];
    let numeric = numeric_score(&statuses);
    let overall = overall_score(&statuses.map(|(_, status)| status));

    tracing::debug!(
        numeric_score = numeric,
        overall = %overall,
        title = %title_status,
        description = %description_status,
        keywords = %keywords.status,
        "analyzed metadata"
    );

    SeoReport {
        title: LengthCheck {
            status: title_status,
            recommendation: title_recommendation(title_status, title_length).to_string(),
            length: title_length,
        },
        description: LengthCheck {
            status: description_status,
            recommendation: description_recommendation(description_status, description_length)
                .to_string(),
            length: description_length,
        },
        image: PresenceCheck {
            status: image_status,
            recommendation: image_recommendation(image_status).to_string(),
        },
        url: PresenceCheck {
            status: url_status,
            recommendation: url_recommendation(url_status).to_string(),
        },
        keywords,
        overall_score: overall,
        numeric_score: numeric,
        component_weights: ComponentWeights::default(),
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

fn title_recommendation(status: Status, length: usize) -> &'static str {
    match status {
        Status::Missing => "Your page is missing a title. Add a descriptive title that includes your primary keyword.",
        Status::Poor if length < TITLE_LIMITS.min => "Your title is too short. Create a more descriptive title that clearly explains your content.",
        Status::Poor => "Your title is too long and may be truncated in search results. Consider shortening it to 50-60 characters.",
        Status::Fair => "Your title could be more descriptive. Consider adding more relevant information.",
        Status::Good => "Your title length is good. Ensure it accurately represents your content and includes relevant keywords.",
    }
}

fn description_recommendation(status: Status, length: usize) -> &'static str {
    match status {
        Status::Missing => "Your page is missing a description. Add a compelling description that summarizes your content.",
        Status::Poor if length < DESCRIPTION_LIMITS.min => "Your description is too short. Provide more details about your content to improve click-through rates.",
        Status::Poor => "Your description is too long and may be truncated in search results. Consider shortening it to 140-160 characters.",
        Status::Fair => "Your description could be more detailed. Consider adding more relevant information and keywords.",
        Status::Good => "Your description length is good. Ensure it accurately summarizes your content and includes relevant keywords.",
    }
}

fn image_recommendation(status: Status) -> &'static str {
    match status {
        Status::Missing => "Your page is missing an Open Graph image. Add a high-quality image to improve visibility in social shares.",
        _ => "You have an Open Graph image. Ensure it's high quality, relevant to your content, and properly sized (1200×630 pixels).",
    }
}

fn url_recommendation(status: Status) -> &'static str {
    match status {
        Status::Missing => "Your page is missing a canonical URL. Add the og:url tag to prevent duplicate content issues.",
        _ => "You have specified a canonical URL. Ensure it matches your preferred URL structure and is consistent across your site.",
    }
}
