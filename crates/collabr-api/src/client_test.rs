use std::sync::{Arc, Mutex};

use serde_json::json;
use wiremock::matchers::{body_json, header, method as http_method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::*;
use crate::types::{CheckoutStatus, CreatorQuery, ExternalBlob, Role};
use crate::upload::UploadProgress;

fn test_client(base_url: &str) -> BackendClient {
    BackendClient::with_base_url(base_url).expect("client construction should not fail")
}

#[test]
fn endpoint_appends_api_and_method_name() {
    let client = test_client("https://backend.collabr.test");
    let url = client.endpoint(Method::BrowseCreators);
    assert_eq!(url.as_str(), "https://backend.collabr.test/api/browseCreators");
}

#[test]
fn endpoint_strips_trailing_slash() {
    let client = test_client("https://backend.collabr.test/");
    let url = client.endpoint(Method::GetCallerUserProfile);
    assert_eq!(
        url.as_str(),
        "https://backend.collabr.test/api/getCallerUserProfile"
    );
}

#[test]
fn endpoint_preserves_base_path() {
    let client = test_client("https://backend.collabr.test/v1");
    let url = client.endpoint(Method::RegisterBrand);
    assert_eq!(url.as_str(), "https://backend.collabr.test/v1/api/registerBrand");
}

#[test]
fn construction_rejects_non_http_base_url() {
    let err = BackendClient::with_base_url("mailto:user@collabr.test").unwrap_err();
    assert!(
        matches!(err, ApiError::Api(ref msg) if msg.contains("invalid base URL")),
        "expected Api(invalid base URL), got: {err:?}"
    );
}

#[test]
fn construction_rejects_unparseable_base_url() {
    let err = BackendClient::with_base_url("not a url").unwrap_err();
    assert!(
        matches!(err, ApiError::Api(ref msg) if msg.contains("invalid base URL")),
        "expected Api(invalid base URL), got: {err:?}"
    );
}

#[test]
fn only_checkout_status_skips_the_session_requirement() {
    assert!(!Method::GetCheckoutStatus.requires_session());
    assert!(Method::GetCallerUserProfile.requires_session());
    assert!(Method::RegisterBrand.requires_session());
    assert!(Method::CreateCheckoutSession.requires_session());
    assert!(Method::UploadBlob.requires_session());
}

#[tokio::test]
async fn caller_profile_parses_null_as_none() {
    let server = MockServer::start().await;
    Mock::given(http_method("POST"))
        .and(path("/api/getCallerUserProfile"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "status": "ok", "profile": null })),
        )
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let profile = client.get_caller_user_profile().await.unwrap();
    assert!(profile.is_none());
}

#[tokio::test]
async fn caller_profile_parses_registered_account() {
    let server = MockServer::start().await;
    Mock::given(http_method("POST"))
        .and(path("/api/getCallerUserProfile"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "ok",
            "profile": {
                "email": "brand@acme.test",
                "role": "brand",
                "createdAt": "2026-02-01T09:30:00Z"
            }
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let profile = client.get_caller_user_profile().await.unwrap().unwrap();
    assert_eq!(profile.role, Role::Brand);
    assert_eq!(profile.email, "brand@acme.test");
}

#[tokio::test]
async fn browse_creators_sends_unset_filters_as_null() {
    let server = MockServer::start().await;
    Mock::given(http_method("POST"))
        .and(path("/api/browseCreators"))
        .and(body_json(json!({
            "platform": "instagram",
            "minFollowers": 10_000,
            "maxFollowers": null,
            "minPrice": null,
            "maxPrice": null,
            "category": null
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "status": "ok", "creators": [] })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let query = CreatorQuery {
        platform: Some("instagram".to_owned()),
        min_followers: Some(10_000),
        ..CreatorQuery::default()
    };
    let creators = client.browse_creators(&query).await.unwrap();
    assert!(creators.is_empty());
}

#[tokio::test]
async fn envelope_error_surfaces_as_api_error() {
    let server = MockServer::start().await;
    Mock::given(http_method("POST"))
        .and(path("/api/registerBrand"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "status": "error",
            "message": "email already registered"
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .register_brand("Acme", "brand@acme.test", "beverages")
        .await
        .unwrap_err();
    assert!(
        matches!(err, ApiError::Api(ref msg) if msg == "email already registered"),
        "expected Api error, got: {err:?}"
    );
}

#[tokio::test]
async fn non_json_failure_reports_the_status() {
    let server = MockServer::start().await;
    Mock::given(http_method("POST"))
        .and(path("/api/getBrandDashboardStats"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.get_brand_dashboard_stats().await.unwrap_err();
    assert!(
        matches!(err, ApiError::UnexpectedStatus { status: 502, .. }),
        "expected UnexpectedStatus(502), got: {err:?}"
    );
}

#[tokio::test]
async fn session_token_is_sent_as_bearer_auth() {
    let server = MockServer::start().await;
    Mock::given(http_method("POST"))
        .and(path("/api/getCallerUserProfile"))
        .and(header("authorization", "Bearer session-abc"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "status": "ok", "profile": null })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri()).with_session_token("session-abc");
    client.get_caller_user_profile().await.unwrap();
}

#[tokio::test]
async fn checkout_status_parses_enum() {
    let server = MockServer::start().await;
    Mock::given(http_method("POST"))
        .and(path("/api/getCheckoutStatus"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "ok",
            "checkout": "complete"
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let status = client.get_checkout_status("cs_123").await.unwrap();
    assert_eq!(status, CheckoutStatus::Complete);
}

/// Records every reported percentage for monotonicity assertions.
struct Recorder(Mutex<Vec<u8>>);

impl UploadProgress for Recorder {
    fn on_progress(&self, percent: u8) {
        self.0.lock().unwrap().push(percent);
    }
}

#[tokio::test]
async fn upload_progress_is_monotonic_and_terminates_at_100() {
    let server = MockServer::start().await;
    Mock::given(http_method("POST"))
        .and(path("/api/uploadBlob"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "ok",
            "blob": { "kind": "reference", "value": "blob-7f3a" }
        })))
        .mount(&server)
        .await;

    let recorder = Arc::new(Recorder(Mutex::new(Vec::new())));
    let client = test_client(&server.uri());
    let blob = client
        .upload_blob(vec![0u8; 200_000], Arc::clone(&recorder) as Arc<dyn UploadProgress>)
        .await
        .unwrap();
    assert_eq!(blob, ExternalBlob::Reference("blob-7f3a".to_owned()));

    let reported = recorder.0.lock().unwrap().clone();
    assert!(!reported.is_empty());
    assert!(
        reported.windows(2).all(|w| w[0] <= w[1]),
        "progress must be non-decreasing: {reported:?}"
    );
    assert_eq!(*reported.last().unwrap(), 100);
    // 100 is reserved for acknowledged success.
    assert!(reported[..reported.len() - 1].iter().all(|&p| p < 100));
}

#[tokio::test]
async fn empty_upload_reports_only_the_terminal_100() {
    let server = MockServer::start().await;
    Mock::given(http_method("POST"))
        .and(path("/api/uploadBlob"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "ok",
            "blob": { "kind": "reference", "value": "blob-empty" }
        })))
        .mount(&server)
        .await;

    let recorder = Arc::new(Recorder(Mutex::new(Vec::new())));
    let client = test_client(&server.uri());
    client
        .upload_blob(Vec::new(), Arc::clone(&recorder) as Arc<dyn UploadProgress>)
        .await
        .unwrap();
    assert_eq!(*recorder.0.lock().unwrap(), vec![100]);
}

#[tokio::test]
async fn upload_failure_never_reports_100() {
    let server = MockServer::start().await;
    Mock::given(http_method("POST"))
        .and(path("/api/uploadBlob"))
        .respond_with(ResponseTemplate::new(413).set_body_string("payload too large"))
        .mount(&server)
        .await;

    let recorder = Arc::new(Recorder(Mutex::new(Vec::new())));
    let client = test_client(&server.uri());
    let err = client
        .upload_blob(vec![0u8; 1024], Arc::clone(&recorder) as Arc<dyn UploadProgress>)
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::UnexpectedStatus { status: 413, .. }));
    assert!(recorder.0.lock().unwrap().iter().all(|&p| p < 100));
}
