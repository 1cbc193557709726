//! Integration tests for `OverpassClient` using wiremock HTTP mocks.

use cafescout_overpass::{OverpassClient, OverpassError, SearchArea};
use wiremock::matchers::{method, query_param_contains};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> OverpassClient {
    OverpassClient::with_base_url(25, "cafescout-test/0.1", 3, 0, base_url)
        .expect("client construction should not fail")
}

fn ontario() -> SearchArea {
    SearchArea {
        name: "Ontario".to_owned(),
        admin_level: 4,
    }
}

#[tokio::test]
async fn fetch_parses_nodes_and_way_centers() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "version": 0.6,
        "elements": [
            {
                "type": "node",
                "id": 101,
                "lat": 43.6532,
                "lon": -79.3832,
                "tags": {
                    "name": "Tim Hortons #3012",
                    "addr:housenumber": "100",
                    "addr:street": "Queen Street West",
                    "addr:city": "Toronto",
                    "addr:postcode": "M5H 2N2"
                }
            },
            {
                "type": "way",
                "id": 202,
                "center": { "lat": 45.4215, "lon": -75.6972 },
                "tags": {
                    "addr:city": "Ottawa",
                    "addr:postcode": "K1P 1J1"
                }
            },
            {
                "type": "relation",
                "id": 303,
                "tags": { "name": "coordinate-less relation" }
            }
        ]
    });

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let records = client
        .fetch_brand_locations("Tim Hortons", &ontario())
        .await
        .expect("should parse locations");

    assert_eq!(records.len(), 2, "coordinate-less relation is dropped");

    assert_eq!(records[0].id, 101);
    assert_eq!(records[0].brand, "Tim Hortons");
    assert_eq!(records[0].name, "Tim Hortons #3012");
    assert_eq!(records[0].address, "100, Queen Street West, Toronto, M5H 2N2");
    assert!((records[0].lat - 43.6532).abs() < 1e-9);
    assert!((records[0].lon - -79.3832).abs() < 1e-9);
    assert!(records[0].distance_km.is_none());

    assert_eq!(records[1].id, 202);
    assert_eq!(records[1].name, "Tim Hortons", "name falls back to brand");
    assert_eq!(records[1].address, "Ottawa, K1P 1J1");
    assert!((records[1].lat - 45.4215).abs() < 1e-9);
}

#[tokio::test]
async fn query_embeds_brand_and_area() {
    let server = MockServer::start().await;

    let body = serde_json::json!({ "elements": [] });

    // The mock only matches when the data parameter carries both the brand
    // and the area; an unmatched request would 404 and surface as an error.
    Mock::given(method("GET"))
        .and(query_param_contains("data", "Tim Hortons"))
        .and(query_param_contains("data", "Ontario"))
        .and(query_param_contains("data", "out center;"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = OverpassClient::with_base_url(25, "cafescout-test/0.1", 0, 0, &server.uri())
        .expect("client construction should not fail");
    let records = client
        .fetch_brand_locations("Tim Hortons", &ontario())
        .await
        .expect("mock should match the encoded query");
    assert!(records.is_empty());
}

#[tokio::test]
async fn empty_elements_is_a_valid_result() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "elements": []
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let records = client
        .fetch_brand_locations("Second Cup", &ontario())
        .await
        .expect("zero matches is not a failure");
    assert!(records.is_empty());
}

#[tokio::test]
async fn retry_recovers_after_two_transient_failures() {
    let server = MockServer::start().await;

    // First two attempts fail with 504; the third succeeds.
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(504))
        .up_to_n_times(2)
        .expect(2)
        .mount(&server)
        .await;

    let body = serde_json::json!({
        "elements": [
            { "type": "node", "id": 7, "lat": 43.0, "lon": -80.0 }
        ]
    });
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let records = client
        .fetch_brand_locations("Starbucks", &ontario())
        .await
        .expect("should succeed on the third attempt");

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, 7);
}

#[tokio::test]
async fn retry_exhaustion_surfaces_the_last_error() {
    let server = MockServer::start().await;

    // max_retries=3 means 4 attempts total, all failing.
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(4)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.fetch_brand_locations("Starbucks", &ontario()).await;

    assert!(matches!(
        result,
        Err(OverpassError::UnexpectedStatus { status: 500, .. })
    ));
}

#[tokio::test]
async fn malformed_body_is_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.fetch_brand_locations("Starbucks", &ontario()).await;

    assert!(matches!(result, Err(OverpassError::Deserialize { .. })));
}
