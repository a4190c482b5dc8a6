use ogscore::seo::scoring::{numeric_score, weight_percent};
use ogscore::{
    analyze_seo, extract_domain, is_valid_url, normalize_url, resolve_url, Dimension, OgData,
    Status,
};
use proptest::prelude::*;

fn status() -> impl Strategy<Value = Status> {
    prop::sample::select(Status::ALL.to_vec())
}

proptest! {
    #[test]
    fn validity_agrees_with_normalization(s in ".*") {
        prop_assert_eq!(is_valid_url(&s), normalize_url(&s).is_ok());
    }

    #[test]
    fn extracted_domain_is_normalized_host(
        host in "[a-z][a-z0-9]{0,9}(\\.[a-z]{2,5}){1,2}",
        path in "(/[a-z0-9]{1,8}){0,3}"
    ) {
        let normalized = normalize_url(&format!("{}{}", host, path)).unwrap();
        let parsed = url::Url::parse(&normalized).unwrap();
        let domain = extract_domain(&normalized);

        prop_assert!(domain.is_resolved());
        prop_assert_eq!(domain.as_str(), parsed.host_str().unwrap());
    }

    #[test]
    fn absolute_urls_resolve_to_themselves(
        absolute in "https?://[a-z]{1,10}\\.com(/[a-z]{0,8}){0,3}",
        base in ".*"
    ) {
        let resolved = resolve_url(&absolute, &base);
        prop_assert_eq!(resolved.as_str(), absolute.as_str());
    }

    #[test]
    fn analysis_is_deterministic(
        title in proptest::option::of("[a-zA-Z0-9 ,.!]{0,80}"),
        description in proptest::option::of("[a-zA-Z0-9 ,.!]{0,200}"),
        image in proptest::option::of("[a-z/.]{0,20}"),
        site_name in proptest::option::of("[a-zA-Z]{0,12}")
    ) {
        let data = OgData { title, description, image, site_name, ..Default::default() };

        let first = serde_json::to_string(&analyze_seo(&data)).unwrap();
        let second = serde_json::to_string(&analyze_seo(&data)).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn numeric_score_moves_by_weighted_delta(
        grades in proptest::array::uniform5(status()),
        changed in 0usize..5,
        replacement in status()
    ) {
        let before: Vec<(Dimension, Status)> = Dimension::ALL.iter().copied().zip(grades).collect();
        let mut after = before.clone();
        after[changed].1 = replacement;

        let dimension = Dimension::ALL[changed];
        let expected = (replacement.score() as f64 - grades[changed].score() as f64)
            * weight_percent(dimension) as f64
            / 100.0;
        let actual = numeric_score(&after) as f64 - numeric_score(&before) as f64;

        prop_assert!((actual - expected).abs() <= 1.0, "expected {} got {}", expected, actual);
    }

    #[test]
    fn titles_between_thirty_and_sixty_are_good(length in 30usize..=60) {
        let data = OgData { title: Some("a".repeat(length)), ..Default::default() };
        prop_assert_eq!(analyze_seo(&data).title.status, Status::Good);
    }
}
