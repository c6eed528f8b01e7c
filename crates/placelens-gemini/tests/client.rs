//! Integration tests for the generative model client using wiremock.

use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use placelens_core::{Coordinate, Review, Sentiment};
use placelens_gemini::{GeminiClient, GeminiError};

/// Builds a client pointed at the mock server.
fn test_client(server: &MockServer) -> GeminiClient {
    GeminiClient::with_base_url("test-key", "gemini-2.0-flash", 30, &server.uri())
        .expect("client construction should not fail")
}

/// Wraps a model answer in the generate-content response envelope.
fn model_answer(text: &str) -> serde_json::Value {
    serde_json::json!({
        "candidates": [
            { "content": { "parts": [{ "text": text }] } }
        ]
    })
}

const JPEG_BYTES: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10];

#[tokio::test]
async fn classify_parses_business_guess() {
    let server = MockServer::start().await;

    let answer = r#"{"name":"Blue Bottle Coffee","category":"coffee shop","description":"Specialty espresso bar with minimalist decor","location_text":"Mint Plaza"}"#;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-2.0-flash:generateContent"))
        .and(query_param("key", "test-key"))
        .and(body_partial_json(serde_json::json!({
            "generationConfig": { "response_mime_type": "application/json" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(model_answer(answer)))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let hint = Coordinate::new(37.7793, -122.4193).unwrap();
    let guess = client.classify(JPEG_BYTES, hint).await.unwrap();

    assert_eq!(guess.name, "Blue Bottle Coffee");
    assert_eq!(guess.category, "coffee shop");
    assert_eq!(guess.location_text.as_deref(), Some("Mint Plaza"));
}

#[tokio::test]
async fn classify_strips_markdown_fence_from_answer() {
    let server = MockServer::start().await;

    let fenced = "```json\n{\"name\":\"Tartine\",\"category\":\"bakery\"}\n```";
    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-2.0-flash:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(model_answer(fenced)))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let hint = Coordinate::new(37.7614, -122.4241).unwrap();
    let guess = client.classify(JPEG_BYTES, hint).await.unwrap();

    assert_eq!(guess.name, "Tartine");
    assert_eq!(guess.category, "bakery");
    assert!(guess.description.is_none());
}

#[tokio::test]
async fn classify_reports_empty_generation() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-2.0-flash:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "candidates": []
        })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let hint = Coordinate::new(37.7793, -122.4193).unwrap();
    let err = client.classify(JPEG_BYTES, hint).await.unwrap_err();

    assert!(matches!(err, GeminiError::EmptyResponse(_)));
}

#[tokio::test]
async fn classify_surfaces_api_error_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-2.0-flash:generateContent"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "error": { "code": 400, "message": "API key not valid. Please pass a valid API key." }
        })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let hint = Coordinate::new(37.7793, -122.4193).unwrap();
    let err = client.classify(JPEG_BYTES, hint).await.unwrap_err();

    match err {
        GeminiError::Api(msg) => {
            assert!(msg.contains("400"));
            assert!(msg.contains("API key not valid"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn summarize_parses_digest_with_mixed_case_sentiment() {
    let server = MockServer::start().await;

    let answer = r#"{"summary":"Locals love the espresso but queues run long.","pros":["Excellent espresso","Friendly staff"],"cons":["Long queues at peak hours"],"recommendations":["Try the New Orleans iced coffee"],"sentiment":"POSITIVE"}"#;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-2.0-flash:generateContent"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(model_answer(answer)))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let reviews = vec![
        Review {
            author: "Ana".to_string(),
            rating: Some(5.0),
            text: "Best espresso in the neighborhood.".to_string(),
            relative_time: Some("a week ago".to_string()),
        },
        Review {
            author: "Ben".to_string(),
            rating: Some(4.0),
            text: "Great coffee, slow line.".to_string(),
            relative_time: None,
        },
    ];
    let summary = client
        .summarize_reviews("Blue Bottle Coffee", "coffee shop", &reviews)
        .await
        .unwrap();

    assert_eq!(summary.text, "Locals love the espresso but queues run long.");
    assert_eq!(summary.pros.len(), 2);
    assert_eq!(summary.cons, vec!["Long queues at peak hours"]);
    assert_eq!(summary.sentiment, Sentiment::Positive);
}

#[tokio::test]
async fn summarize_defaults_missing_lists_to_empty() {
    let server = MockServer::start().await;

    let answer = r#"{"summary":"A quiet bookshop with a loyal following.","sentiment":"neutral"}"#;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-2.0-flash:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(model_answer(answer)))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let reviews = vec![Review {
        author: "Cal".to_string(),
        rating: None,
        text: "Lovely place to browse.".to_string(),
        relative_time: None,
    }];
    let summary = client
        .summarize_reviews("Green Apple Books", "book store", &reviews)
        .await
        .unwrap();

    assert!(summary.pros.is_empty());
    assert!(summary.cons.is_empty());
    assert!(summary.recommendations.is_empty());
    assert_eq!(summary.sentiment, Sentiment::Neutral);
}

#[tokio::test]
async fn summarize_rejects_malformed_answer() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-2.0-flash:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(model_answer("not json at all")))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = client
        .summarize_reviews("Somewhere", "cafe", &[])
        .await
        .unwrap_err();

    assert!(matches!(err, GeminiError::Deserialize { .. }));
}
