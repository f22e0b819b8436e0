use article_reader::{read, read_with_options, Error, Options, ScoringConfig};

const PARAGRAPH: &str = "The council approved the budget late on Thursday, after a long debate, and the new rates take effect in spring.";

fn paragraphs(n: usize) -> String {
    format!("<p>{PARAGRAPH}</p>").repeat(n)
}

#[test]
fn options_default_values_are_sensible() {
    let options = Options::default();
    assert!(options.body_only);
    assert!(!options.no_headline);
    assert!(options.base_url.is_none());
    assert!(options.strip_unlikely);
    assert_eq!(options.title_hint_attribute, "data-article-title");
    assert_eq!(options.scoring, ScoringConfig::default());
}

#[test]
fn options_struct_update_syntax_overrides_selected_fields_only() {
    let options = Options {
        no_headline: true,
        base_url: Some("https://example.com/article".to_string()),
        ..Options::default()
    };

    assert!(options.no_headline);
    assert!(options.body_only);
    assert_eq!(options.base_url.as_deref(), Some("https://example.com/article"));
}

#[test]
fn options_deserialize_from_partial_json() {
    let options: Options = serde_json::from_str(
        r#"{"body_only": false, "scoring": {"min_score": 20.0}}"#,
    )
    .expect("valid options json");

    assert!(!options.body_only);
    assert!(!options.no_headline);
    assert!((options.scoring.min_score - 20.0).abs() < f64::EPSILON);
    assert!((options.scoring.link_density_cutoff - 0.5).abs() < f64::EPSILON);
}

#[test]
fn raised_score_floor_rejects_thin_pages() {
    let html = format!("<article>{}</article>", paragraphs(2));
    assert!(read(&html).is_ok());

    let options = Options {
        scoring: ScoringConfig {
            min_score: 50.0,
            ..ScoringConfig::default()
        },
        ..Options::default()
    };
    match read_with_options(&html, &options) {
        Err(Error::ExtractionError { best, floor }) => {
            assert!(best > 3.0);
            assert!((floor - 50.0).abs() < f64::EPSILON);
        }
        other => panic!("expected ExtractionError, got {other:?}"),
    }
}

#[test]
fn custom_negative_keywords_change_cleanup() {
    let html = format!(
        r#"<article>{}<div class="newsletter-box">{PARAGRAPH}</div></article>"#,
        paragraphs(3)
    );
    let default_article = read(&html).expect("extraction failed");
    // "newsletter" is an unlikely keyword, so the box is stripped before scoring.
    assert_eq!(default_article.content.matches("council approved").count(), 3);

    let options = Options {
        strip_unlikely: false,
        ..Options::default()
    };
    let kept = read_with_options(&html, &options).expect("extraction failed");
    assert_eq!(kept.content.matches("council approved").count(), 4);

    let scoring = ScoringConfig::from_json(r#"{"negative_keywords": ["newsletter"]}"#).expect("valid json");
    let options = Options {
        strip_unlikely: false,
        scoring,
        ..Options::default()
    };
    let cleaned = read_with_options(&html, &options).expect("extraction failed");
    assert_eq!(cleaned.content.matches("council approved").count(), 3);
}

#[test]
fn sibling_fraction_controls_merging() {
    let html = format!(
        r#"<body><div id="main-story">{}</div><div id="second">{}</div></body>"#,
        paragraphs(4),
        paragraphs(2)
    );
    let merged = read(&html).expect("extraction failed");
    assert!(merged.content.contains(r#"<div id="second">"#));

    let options = Options {
        scoring: ScoringConfig {
            sibling_fraction: 0.9,
            ..ScoringConfig::default()
        },
        ..Options::default()
    };
    let alone = read_with_options(&html, &options).expect("extraction failed");
    assert!(!alone.content.contains(r#"<div id="second">"#));
}

#[test]
fn options_serialize_round_trip() {
    let options = Options {
        body_only: false,
        title_hint_attribute: "data-title".to_string(),
        ..Options::default()
    };
    let json = serde_json::to_string(&options).expect("serializable");
    let back: Options = serde_json::from_str(&json).expect("deserializable");
    assert_eq!(back, options);
}
