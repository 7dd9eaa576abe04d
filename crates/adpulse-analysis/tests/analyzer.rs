//! Integration tests for `CopyAnalyzer` using wiremock HTTP mocks.

use adpulse_analysis::{AnalyzerConfig, CopyAnalysisResult, CopyAnalyzer};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_config(base_url: &str, api_key: Option<&str>) -> AnalyzerConfig {
    AnalyzerConfig {
        api_key: api_key.map(ToOwned::to_owned),
        base_url: base_url.to_string(),
        model: "gpt-test".to_string(),
        max_tokens: 256,
        temperature: 0.0,
        timeout_secs: 5,
    }
}

fn completion_body(content: &str) -> serde_json::Value {
    serde_json::json!({
        "choices": [
            { "message": { "role": "assistant", "content": content } }
        ]
    })
}

#[tokio::test]
async fn successful_completion_is_parsed() {
    let server = MockServer::start().await;

    let content = serde_json::json!({
        "score": 88.5,
        "hooks": ["Stop scrolling"],
        "ctas": ["Shop now"],
        "improvements": ["Tighten the first line"],
        "winning_patterns": ["Scarcity"]
    })
    .to_string();

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body(&content)))
        .expect(1)
        .mount(&server)
        .await;

    let analyzer = CopyAnalyzer::new(test_config(&server.uri(), Some("test-key")))
        .expect("client construction should not fail");
    let result = analyzer
        .analyze("Stop scrolling. Shop now.", "conversion")
        .await;

    assert!((result.score - 88.5).abs() < f64::EPSILON);
    assert_eq!(result.hooks, vec!["Stop scrolling"]);
    assert_eq!(result.ctas, vec!["Shop now"]);
    assert_eq!(result.winning_patterns, vec!["Scarcity"]);
}

#[tokio::test]
async fn partially_shaped_answer_gets_field_defaults() {
    let server = MockServer::start().await;

    // Only `score` present; list fields default to empty.
    let content = serde_json::json!({ "score": 42.0 }).to_string();

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body(&content)))
        .mount(&server)
        .await;

    let analyzer = CopyAnalyzer::new(test_config(&server.uri(), Some("test-key")))
        .expect("client construction should not fail");
    let result = analyzer.analyze("text", "traffic").await;

    assert!((result.score - 42.0).abs() < f64::EPSILON);
    assert!(result.hooks.is_empty());
    assert!(result.improvements.is_empty());
}

#[tokio::test]
async fn keyless_analyzer_returns_fallback_without_calling_api() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let analyzer = CopyAnalyzer::new(test_config(&server.uri(), None))
        .expect("client construction should not fail");
    let result = analyzer.analyze("text", "awareness").await;

    assert_eq!(result, CopyAnalysisResult::fallback());
}

#[tokio::test]
async fn api_error_falls_back() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let analyzer = CopyAnalyzer::new(test_config(&server.uri(), Some("test-key")))
        .expect("client construction should not fail");
    let result = analyzer.analyze("text", "conversion").await;

    assert_eq!(result, CopyAnalysisResult::fallback());
}

#[tokio::test]
async fn non_json_message_content_falls_back() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(completion_body("sorry, I cannot help with that")),
        )
        .mount(&server)
        .await;

    let analyzer = CopyAnalyzer::new(test_config(&server.uri(), Some("test-key")))
        .expect("client construction should not fail");
    let result = analyzer.analyze("text", "conversion").await;

    assert_eq!(result, CopyAnalysisResult::fallback());
}

#[tokio::test]
async fn empty_choices_falls_back() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "choices": [] })),
        )
        .mount(&server)
        .await;

    let analyzer = CopyAnalyzer::new(test_config(&server.uri(), Some("test-key")))
        .expect("client construction should not fail");
    let result = analyzer.analyze("text", "conversion").await;

    assert_eq!(result, CopyAnalysisResult::fallback());
}
