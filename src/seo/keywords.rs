//! Keyword extraction and title/description consistency analysis.

use std::collections::HashMap;

use crate::seo::report::KeywordCheck;
use crate::types::Status;

/// English stop words ignored during keyword extraction.
pub const STOP_WORDS: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "is", "are", "was", "were", "be", "been", "being", "in",
    "on", "at", "to", "for", "with", "by", "about", "against", "between", "into", "through",
    "during", "before", "after", "above", "below", "from", "up", "down", "of", "off", "over",
    "under", "again", "further", "then", "once", "here", "there", "when", "where", "why", "how",
    "all", "any", "both", "each", "few", "more", "most", "other", "some", "such", "no", "nor",
    "not", "only", "own", "same", "so", "than", "too", "very", "s", "t", "can", "will", "just",
    "don", "should", "now",
];

/// Tokens of this length or shorter are never keywords.
pub const MAX_IGNORED_LEN: usize = 3;

/// Number of suggested keywords reported.
pub const SUGGESTED_LIMIT: usize = 5;

/// Check if a word is a stop word.
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(&word)
}

/// Extract candidate keywords from `text`, in order of appearance.
///
/// Lower-cases the text, drops everything but ASCII word characters and
/// whitespace, splits on whitespace, then removes stop words and short tokens.
/// Duplicates are kept.
pub fn extract_keywords(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect();

    cleaned
        .split_whitespace()
        .filter(|word| word.len() > MAX_IGNORED_LEN && !is_stop_word(word))
        .map(str::to_string)
        .collect()
}

/// Distinct keywords present in both lists, in title order.
pub fn shared_keywords(title: &[String], description: &[String]) -> Vec<String> {
    let mut shared: Vec<String> = Vec::new();
    for keyword in title {
        if description.contains(keyword) && !shared.contains(keyword) {
            shared.push(keyword.clone());
        }
    }
    shared
}

/// Rank keywords by combined frequency across title and description.
///
/// Ties keep the order in which keywords were first seen, title first.
pub fn suggest_keywords(title: &[String], description: &[String], limit: usize) -> Vec<String> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for keyword in title.iter().chain(description) {
        match index.get(keyword.as_str()) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                index.insert(keyword.as_str(), counts.len());
                counts.push((keyword.as_str(), 1));
            }
        }
    }

    // Stable sort keeps first-seen order among equal counts.
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    counts
        .into_iter()
        .take(limit)
        .map(|(keyword, _)| keyword.to_string())
        .collect()
}

/// Grade how consistently title and description share keywords.
///
/// The status comes from the number of shared keywords (none: poor, one: fair,
/// two or more: good). A title whose first keyword is not shared can only
/// lower `good` to `fair`. The site name check adds advice without touching
/// the status.
pub fn analyze_keywords(
    title: Option<&str>,
    description: Option<&str>,
    site_name: Option<&str>,
) -> KeywordCheck {
    let title = title.unwrap_or_default();
    let description = description.unwrap_or_default();

    if title.is_empty() && description.is_empty() {
        return KeywordCheck {
            status: Status::Missing,
            analysis: "Both title and description are missing. Add these elements with relevant keywords to improve SEO.".to_string(),
            suggested: Vec::new(),
        };
    }

    let title_keywords = extract_keywords(title);
    let description_keywords = extract_keywords(description);
    let shared = shared_keywords(&title_keywords, &description_keywords);
    let suggested = suggest_keywords(&title_keywords, &description_keywords, SUGGESTED_LIMIT);

    let (mut status, mut analysis) = match shared.len() {
        0 => (
            Status::Poor,
            "No common keywords found between title and description. Using consistent keywords across metadata improves SEO.".to_string(),
        ),
        1 => (
            Status::Fair,
            "Found 1 common keyword between title and description. Consider adding more consistent keywords.".to_string(),
        ),
        n => (
            Status::Good,
            format!("Found {} common keywords between title and description, which is good for SEO consistency.", n),
        ),
    };

    if let Some(primary) = title_keywords.first() {
        if shared.contains(primary) {
            analysis.push_str(" Your primary keyword appears at the beginning of the title, which is excellent for SEO.");
        } else {
            if status == Status::Good {
                status = Status::Fair;
            }
            analysis.push_str(" Consider placing your most important keyword at the beginning of your title.");
        }
    }

    if let Some(site_name) = site_name.filter(|name| !name.is_empty()) {
        if !title.to_lowercase().contains(&site_name.to_lowercase()) {
            analysis.push_str(" Consider including your site or brand name in the title for better recognition.");
        }
    }

    KeywordCheck {
        status,
        analysis,
        suggested,
    }
}
