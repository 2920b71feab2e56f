//! Demo API handlers.
//!
//! Handlers speak snake_case only; the casebridge layers translate at the edge.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::{Deserialize, Serialize};

use casebridge_core::CamelJson;
use casebridge_types::CaseConfig;

use crate::state::AppState;

pub const LEGACY_USERS_PATH: &str = "/legacy/users";

/// Config used when no `casebridge.json` exists: the legacy route stays snake_case.
/// A config file replaces this wholesale.
pub fn demo_config() -> CaseConfig {
    CaseConfig {
        ignore_paths: [LEGACY_USERS_PATH.to_string()].into_iter().collect(),
        ..CaseConfig::default()
    }
}

const DEFAULT_PAGE_SIZE: usize = 20;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: u64,
    pub user_name: String,
    pub email_address: String,
    pub is_active: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct UserFilter {
    pub user_name: Option<String>,
    pub is_active: Option<bool>,
    pub page_size: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct UserPage {
    pub total_count: usize,
    pub page_size: usize,
    pub items: Vec<User>,
}

#[derive(Debug, Deserialize)]
pub struct NewUser {
    pub user_name: String,
    pub email_address: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

const fn default_active() -> bool {
    true
}

pub async fn list_users(
    State(state): State<AppState>,
    Query(filter): Query<UserFilter>,
) -> Json<UserPage> {
    Json(filtered_page(&state, &filter).await)
}

/// Same payload as `list_users`, served from an ignored path.
pub async fn list_legacy_users(State(state): State<AppState>) -> Json<UserPage> {
    Json(filtered_page(&state, &UserFilter::default()).await)
}

pub async fn create_user(
    State(state): State<AppState>,
    CamelJson(new_user): CamelJson<NewUser>,
) -> impl IntoResponse {
    if new_user.user_name.trim().is_empty() {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(serde_json::json!({"error_message": "user_name must not be empty"})),
        )
            .into_response();
    }

    let mut users = state.users().write().await;
    let id = users.iter().map(|u| u.id).max().unwrap_or(0).saturating_add(1);
    let user = User {
        id,
        user_name: new_user.user_name,
        email_address: new_user.email_address,
        is_active: new_user.is_active,
    };
    users.push(user.clone());
    tracing::info!("Created user {} ({})", user.id, user.user_name);

    (StatusCode::CREATED, Json(user)).into_response()
}

async fn filtered_page(state: &AppState, filter: &UserFilter) -> UserPage {
    let users = state.users().read().await;
    let page_size = filter.page_size.unwrap_or(DEFAULT_PAGE_SIZE);

    let matching: Vec<User> = users
        .iter()
        .filter(|u| filter.user_name.as_deref().map_or(true, |name| u.user_name.contains(name)))
        .filter(|u| filter.is_active.map_or(true, |active| u.is_active == active))
        .cloned()
        .collect();

    UserPage {
        total_count: matching.len(),
        page_size,
        items: matching.into_iter().take(page_size).collect(),
    }
}
