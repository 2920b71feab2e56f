//! `CamelJson` extractor behaviour behind a real router.

use std::sync::Arc;

use axum::{
    extract::FromRef,
    http::{header, HeaderValue, StatusCode},
    response::Json,
    routing::post,
    Router,
};
use axum_test::TestServer;
use serde::Deserialize;
use serde_json::{json, Value};

use casebridge_types::CaseConfig;

use crate::extract::CamelJson;
use crate::settings::CaseSettings;

#[derive(Clone)]
struct TestState {
    settings: Arc<CaseSettings>,
}

impl FromRef<TestState> for Arc<CaseSettings> {
    fn from_ref(state: &TestState) -> Self {
        state.settings.clone()
    }
}

#[derive(Debug, Deserialize)]
struct NewUser {
    user_name: String,
    home_address: Address,
    #[serde(default)]
    phone_numbers: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct Address {
    street_name: String,
}

async fn create_user(CamelJson(user): CamelJson<NewUser>) -> Json<Value> {
    Json(json!({
        "user_name": user.user_name,
        "street_name": user.home_address.street_name,
        "phones": user.phone_numbers.len(),
    }))
}

fn router(config: CaseConfig) -> Router {
    let state = TestState { settings: Arc::new(CaseSettings::from_config(&config).unwrap()) };
    Router::new().route("/users", post(create_user)).with_state(state)
}

#[tokio::test]
async fn test_camel_body_reaches_snake_struct() {
    let server = TestServer::new(router(CaseConfig::default())).unwrap();

    let response = server
        .post("/users")
        .json(&json!({
            "userName": "ada",
            "homeAddress": {"streetName": "Main"},
            "phoneNumbers": ["1", "2"]
        }))
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!({"user_name": "ada", "street_name": "Main", "phones": 2})
    );
}

#[tokio::test]
async fn test_conversion_ignores_normalize_inputs_flag() {
    let config = CaseConfig { normalize_inputs: false, ..CaseConfig::default() };
    let server = TestServer::new(router(config)).unwrap();

    let response = server
        .post("/users")
        .json(&json!({"userName": "ada", "homeAddress": {"streetName": "Main"}}))
        .await;

    response.assert_status_ok();
}

#[tokio::test]
async fn test_ignore_fields_apply_to_body() {
    let config = CaseConfig {
        ignore_fields: ["home_address".to_string()].into_iter().collect(),
        ..CaseConfig::default()
    };
    let server = TestServer::new(router(config)).unwrap();

    // street name stays camelCase inside the frozen field and no longer matches the struct
    let response = server
        .post("/users")
        .json(&json!({"userName": "ada", "homeAddress": {"streetName": "Main"}}))
        .expect_failure()
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_rejects_non_json_content_type() {
    let server = TestServer::new(router(CaseConfig::default())).unwrap();

    let response = server
        .post("/users")
        .text(r#"{"userName": "ada"}"#)
        .expect_failure()
        .await;

    response.assert_status(StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[tokio::test]
async fn test_rejects_malformed_json() {
    let server = TestServer::new(router(CaseConfig::default())).unwrap();

    let response = server
        .post("/users")
        .bytes("{\"userName\": ".into())
        .add_header(header::CONTENT_TYPE, HeaderValue::from_static("application/json"))
        .expect_failure()
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_rejects_oversize_body() {
    let config = CaseConfig { max_body_bytes: 4, ..CaseConfig::default() };
    let server = TestServer::new(router(config)).unwrap();

    let response = server
        .post("/users")
        .json(&json!({"userName": "ada", "homeAddress": {"streetName": "Main"}}))
        .expect_failure()
        .await;

    response.assert_status(StatusCode::PAYLOAD_TOO_LARGE);
}
