use super::*;
use axum::Router;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::routing::{delete, get};
use serde_json::json;
use std::sync::{Arc, Mutex};

fn timeouts() -> ApiTimeouts {
    ApiTimeouts { request_secs: 5, connect_secs: 2 }
}

async fn spawn_server(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

// =============================================================
// parse_profiles
// =============================================================

#[test]
fn parse_profiles_reads_array() {
    let body = json!([
        { "_id": "a1", "name": "Ada", "city": "London" },
        { "_id": "b2", "name": "Grace", "city": "Arlington", "email": "g@example.com" },
    ])
    .to_string();
    let profiles = parse_profiles(&body).unwrap();
    assert_eq!(profiles.len(), 2);
    assert_eq!(profiles[0].id, "a1");
    assert_eq!(profiles[1].city, "Arlington");
}

#[test]
fn parse_profiles_tolerates_unusual_records() {
    let body = json!([
        { "_id": "1", "id": "1", "name": "Ada", "city": "London" },
        { "_id": "2", "name": "Bob", "city": null },
        { "id": 3, "name": "Cy", "city": "Oslo" },
    ])
    .to_string();
    let profiles = parse_profiles(&body).unwrap();
    let ids: Vec<&str> = profiles.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3"]);
    assert_eq!(profiles[1].city, "");
}

#[test]
fn parse_profiles_empty_array() {
    assert!(parse_profiles("[]").unwrap().is_empty());
}

#[test]
fn parse_profiles_rejects_object_body() {
    let err = parse_profiles(r#"{"profiles":[]}"#).unwrap_err();
    assert!(matches!(err, ApiError::ApiParse(_)));
}

// =============================================================
// ApiError::detail
// =============================================================

#[test]
fn detail_prefers_server_body() {
    let err = ApiError::ApiResponse { status: 404, body: r#"{"message":"Profile not found"}"#.into() };
    assert_eq!(err.detail(), r#"{"message":"Profile not found"}"#);
}

#[test]
fn detail_falls_back_to_message_for_empty_body() {
    let err = ApiError::ApiResponse { status: 500, body: "  ".into() };
    assert_eq!(err.detail(), "API response error: status 500");

    let err = ApiError::ApiRequest("connection refused".into());
    assert_eq!(err.detail(), "API request failed: connection refused");
}

// =============================================================
// URLs
// =============================================================

#[test]
fn new_trims_trailing_slashes() {
    let api = ProfileApi::new("http://localhost:5000//", timeouts()).unwrap();
    assert_eq!(api.collection_url().unwrap().as_str(), "http://localhost:5000/api/profiles");
}

#[test]
fn profile_url_encodes_id_as_one_segment() {
    let api = ProfileApi::new("http://localhost:5000", timeouts()).unwrap();
    let url = api.profile_url("a b/c").unwrap();
    assert_eq!(url.as_str(), "http://localhost:5000/api/profiles/a%20b%2Fc");
}

#[test]
fn profile_url_keeps_base_path_prefix() {
    let api = ProfileApi::new("http://localhost:5000/backend/", timeouts()).unwrap();
    let url = api.profile_url("abc").unwrap();
    assert_eq!(url.as_str(), "http://localhost:5000/backend/api/profiles/abc");
}

#[test]
fn collection_url_rejects_garbage_base() {
    let api = ProfileApi::new("not a url", timeouts()).unwrap();
    assert!(matches!(api.collection_url(), Err(ApiError::InvalidUrl(_))));
}

// =============================================================
// HTTP round trips
// =============================================================

#[tokio::test]
async fn list_profiles_fetches_collection() {
    let router = Router::new().route(
        "/api/profiles",
        get(|| async {
            axum::Json(json!([
                { "_id": "1", "name": "Ada", "city": "London" },
                { "_id": "2", "name": "Alan", "city": "Wilmslow" },
            ]))
        }),
    );
    let base = spawn_server(router).await;
    let api = ProfileApi::new(&base, timeouts()).unwrap();

    let profiles = api.list_profiles().await.unwrap();
    assert_eq!(profiles, vec![Profile::new("1", "Ada", "London"), Profile::new("2", "Alan", "Wilmslow")]);
}

#[tokio::test]
async fn list_profiles_maps_server_error() {
    let router = Router::new().route(
        "/api/profiles",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "database down") }),
    );
    let base = spawn_server(router).await;
    let api = ProfileApi::new(&base, timeouts()).unwrap();

    let err = api.list_profiles().await.unwrap_err();
    match err {
        ApiError::ApiResponse { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "database down");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn list_profiles_maps_bad_body_to_parse_error() {
    let router = Router::new().route("/api/profiles", get(|| async { "<html>oops</html>" }));
    let base = spawn_server(router).await;
    let api = ProfileApi::new(&base, timeouts()).unwrap();

    let err = api.list_profiles().await.unwrap_err();
    assert!(matches!(err, ApiError::ApiParse(_)));
}

#[tokio::test]
async fn delete_profile_hits_item_path() {
    let seen = Arc::new(Mutex::new(Vec::<String>::new()));
    let recorder = Arc::clone(&seen);
    let router = Router::new().route(
        "/api/profiles/{id}",
        delete(move |Path(id): Path<String>| {
            let recorder = Arc::clone(&recorder);
            async move {
                recorder.lock().unwrap().push(id);
                axum::Json(json!({ "message": "Profile deleted" }))
            }
        }),
    );
    let base = spawn_server(router).await;
    let api = ProfileApi::new(&base, timeouts()).unwrap();

    api.delete_profile("65f0c1").await.unwrap();
    api.delete_profile("a b/c").await.unwrap();
    assert_eq!(*seen.lock().unwrap(), vec!["65f0c1".to_owned(), "a b/c".to_owned()]);
}

#[tokio::test]
async fn delete_profile_accepts_no_content() {
    let router = Router::new().route(
        "/api/profiles/{id}",
        delete(|| async { StatusCode::NO_CONTENT }),
    );
    let base = spawn_server(router).await;
    let api = ProfileApi::new(&base, timeouts()).unwrap();

    assert!(api.delete_profile("x").await.is_ok());
}

#[tokio::test]
async fn delete_profile_maps_not_found() {
    let router = Router::new().route(
        "/api/profiles/{id}",
        delete(|| async { (StatusCode::NOT_FOUND, r#"{"message":"Profile not found"}"#) }),
    );
    let base = spawn_server(router).await;
    let api = ProfileApi::new(&base, timeouts()).unwrap();

    let err = api.delete_profile("missing").await.unwrap_err();
    assert!(matches!(err, ApiError::ApiResponse { status: 404, .. }));
    assert!(err.detail().contains("Profile not found"));
}

#[tokio::test]
async fn unreachable_server_is_request_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let api = ProfileApi::new(&format!("http://{addr}"), timeouts()).unwrap();
    let err = api.list_profiles().await.unwrap_err();
    assert!(matches!(err, ApiError::ApiRequest(_)));
}
