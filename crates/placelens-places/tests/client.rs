//! Integration tests for `PlacesClient` using wiremock HTTP mocks.

use placelens_core::Coordinate;
use placelens_places::{PlacesClient, PlacesError};
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> PlacesClient {
    PlacesClient::with_base_url("test-key", 30, 2, 0, base_url)
        .expect("client construction should not fail")
}

fn sf_center() -> Coordinate {
    Coordinate::new(37.7793, -122.4193).unwrap()
}

fn nearby_body() -> serde_json::Value {
    serde_json::json!({
        "status": "OK",
        "results": [
            {
                "place_id": "ChIJblue1",
                "name": "Blue Bottle Coffee",
                "vicinity": "66 Mint St",
                "geometry": { "location": { "lat": 37.7825, "lng": -122.4070 } },
                "rating": 4.5,
                "user_ratings_total": 812
            },
            {
                "place_id": "ChIJsight2",
                "name": "Sightglass Coffee",
                "vicinity": "270 7th St",
                "geometry": { "location": { "lat": 37.7770, "lng": -122.4086 } },
                "rating": 4.4,
                "user_ratings_total": 640
            }
        ]
    })
}

#[tokio::test]
async fn search_nearby_returns_candidates_in_provider_order() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/nearbysearch/json"))
        .and(query_param("key", "test-key"))
        .and(query_param("location", "37.7793,-122.4193"))
        .and(query_param("radius", "50"))
        .and(query_param("keyword", "Blue Bottle Coffee"))
        .and(query_param("type", "cafe"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&nearby_body()))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let candidates = client
        .search_nearby(sf_center(), 50, "Blue Bottle Coffee", Some("cafe"))
        .await
        .expect("should parse search results");

    assert_eq!(candidates.len(), 2);
    assert_eq!(candidates[0].provider_id, "ChIJblue1");
    assert_eq!(candidates[0].name, "Blue Bottle Coffee");
    assert_eq!(candidates[0].formatted_address.as_deref(), Some("66 Mint St"));
    assert_eq!(candidates[0].rating, Some(4.5));
    assert_eq!(candidates[1].provider_id, "ChIJsight2");
}

#[tokio::test]
async fn search_nearby_without_type_omits_the_parameter() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/nearbysearch/json"))
        .and(query_param("keyword", "Blue Bottle Coffee"))
        .and(query_param_is_missing("type"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&nearby_body()))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let candidates = client
        .search_nearby(sf_center(), 100, "Blue Bottle Coffee", None)
        .await
        .expect("should parse search results");

    assert_eq!(candidates.len(), 2);
}

#[tokio::test]
async fn search_nearby_zero_results_is_ok_and_empty() {
    let server = MockServer::start().await;

    let body = serde_json::json!({ "status": "ZERO_RESULTS", "results": [] });
    Mock::given(method("GET"))
        .and(path("/nearbysearch/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let candidates = client
        .search_nearby(sf_center(), 50, "Nonexistent Shop", Some("cafe"))
        .await
        .expect("ZERO_RESULTS must not be an error");

    assert!(candidates.is_empty());
}

#[tokio::test]
async fn search_nearby_skips_entries_with_invalid_geometry() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "status": "OK",
        "results": [
            {
                "place_id": "ChIJbroken",
                "name": "Broken Entry",
                "geometry": { "location": { "lat": 95.0, "lng": 0.0 } }
            },
            {
                "place_id": "ChIJgood",
                "name": "Good Entry",
                "vicinity": "1 Main St",
                "geometry": { "location": { "lat": 37.7793, "lng": -122.4193 } }
            }
        ]
    });
    Mock::given(method("GET"))
        .and(path("/nearbysearch/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let candidates = client
        .search_nearby(sf_center(), 50, "shop", None)
        .await
        .expect("good entries should survive a bad sibling");

    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].provider_id, "ChIJgood");
}

#[tokio::test]
async fn search_text_sends_bias_parameters() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "status": "OK",
        "results": [
            {
                "place_id": "ChIJtext1",
                "name": "Blue Bottle Coffee",
                "formatted_address": "66 Mint St, San Francisco, CA 94103",
                "geometry": { "location": { "lat": 37.7825, "lng": -122.4070 } },
                "rating": 4.5,
                "user_ratings_total": 812
            }
        ]
    });
    Mock::given(method("GET"))
        .and(path("/textsearch/json"))
        .and(query_param("query", "Blue Bottle Coffee cafe"))
        .and(query_param("location", "37.7793,-122.4193"))
        .and(query_param("radius", "250"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let candidates = client
        .search_text("Blue Bottle Coffee cafe", Some(sf_center()), Some(250))
        .await
        .expect("should parse search results");

    assert_eq!(candidates.len(), 1);
    assert_eq!(
        candidates[0].formatted_address.as_deref(),
        Some("66 Mint St, San Francisco, CA 94103")
    );
}

#[tokio::test]
async fn search_text_without_bias_omits_location() {
    let server = MockServer::start().await;

    let body = serde_json::json!({ "status": "ZERO_RESULTS", "results": [] });
    Mock::given(method("GET"))
        .and(path("/textsearch/json"))
        .and(query_param("query", "Corner Bakery"))
        .and(query_param_is_missing("location"))
        .and(query_param_is_missing("radius"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let candidates = client
        .search_text("Corner Bakery", None, None)
        .await
        .expect("should accept empty result");

    assert!(candidates.is_empty());
}

#[tokio::test]
async fn fetch_details_parses_full_record() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "status": "OK",
        "result": {
            "place_id": "ChIJblue1",
            "name": "Blue Bottle Coffee",
            "formatted_address": "66 Mint St, San Francisco, CA 94103",
            "geometry": { "location": { "lat": 37.7825, "lng": -122.4070 } },
            "rating": 4.5,
            "user_ratings_total": 812,
            "formatted_phone_number": "(510) 653-3394",
            "website": "https://bluebottlecoffee.com",
            "opening_hours": {
                "open_now": true,
                "weekday_text": [
                    "Monday: 7:00 AM - 5:00 PM",
                    "Tuesday: 7:00 AM - 5:00 PM"
                ]
            },
            "reviews": [
                {
                    "author_name": "Dana",
                    "rating": 5,
                    "text": "Great pour-over, short queue.",
                    "relative_time_description": "a month ago"
                },
                {
                    "author_name": "Riley",
                    "rating": 4,
                    "text": "Solid espresso.",
                    "relative_time_description": "2 weeks ago"
                }
            ]
        }
    });
    Mock::given(method("GET"))
        .and(path("/details/json"))
        .and(query_param("place_id", "ChIJblue1"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let details = client
        .fetch_details("ChIJblue1")
        .await
        .expect("should parse details");

    assert_eq!(details.provider_id, "ChIJblue1");
    assert_eq!(details.name, "Blue Bottle Coffee");
    assert_eq!(details.phone.as_deref(), Some("(510) 653-3394"));
    assert_eq!(details.website.as_deref(), Some("https://bluebottlecoffee.com"));
    assert_eq!(details.opening_hours.len(), 2);
    assert_eq!(details.open_now, Some(true));
    assert_eq!(details.reviews.len(), 2);
    assert_eq!(details.reviews[0].author, "Dana");
    assert_eq!(details.reviews[0].rating, Some(5.0));
}

#[tokio::test]
async fn fetch_details_without_result_is_an_api_error() {
    let server = MockServer::start().await;

    let body = serde_json::json!({ "status": "OK" });
    Mock::given(method("GET"))
        .and(path("/details/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.fetch_details("ChIJmissing").await;

    assert!(matches!(result, Err(PlacesError::Api(_))));
}

#[tokio::test]
async fn request_denied_returns_api_error_with_message() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "status": "REQUEST_DENIED",
        "error_message": "The provided API key is invalid."
    });
    Mock::given(method("GET"))
        .and(path("/nearbysearch/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.search_nearby(sf_center(), 50, "anything", None).await;

    let err = result.expect_err("REQUEST_DENIED must be an error");
    let msg = err.to_string();
    assert!(
        msg.contains("The provided API key is invalid"),
        "expected error message to carry the provider text, got: {msg}"
    );
}

#[tokio::test]
async fn over_query_limit_is_retried_until_success() {
    let server = MockServer::start().await;

    let limited = serde_json::json!({
        "status": "OVER_QUERY_LIMIT",
        "error_message": "You have exceeded your rate-limit for this API."
    });
    Mock::given(method("GET"))
        .and(path("/nearbysearch/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&limited))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/nearbysearch/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&nearby_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let candidates = client
        .search_nearby(sf_center(), 50, "Blue Bottle Coffee", Some("cafe"))
        .await
        .expect("rate-limited call should succeed on retry");

    assert_eq!(candidates.len(), 2);
}

#[tokio::test]
async fn server_error_is_retried_until_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/textsearch/json"))
        .respond_with(ResponseTemplate::new(502))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    let body = serde_json::json!({ "status": "ZERO_RESULTS", "results": [] });
    Mock::given(method("GET"))
        .and(path("/textsearch/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let candidates = client
        .search_text("Corner Bakery", None, None)
        .await
        .expect("5xx should be retried");

    assert!(candidates.is_empty());
}
