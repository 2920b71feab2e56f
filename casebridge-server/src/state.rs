//! Application State
//!
//! Holds the compiled case settings, the renderer pair and the demo user store.

use axum::extract::FromRef;
use std::sync::Arc;
use tokio::sync::RwLock;

use casebridge_core::{CamelCaseRenderers, CaseSettings};

use crate::api::User;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

pub struct AppStateInner {
    pub settings: Arc<CaseSettings>,
    pub renderers: Arc<CamelCaseRenderers>,
    pub users: RwLock<Vec<User>>,
}

impl AppState {
    pub fn new(settings: CaseSettings) -> Self {
        let settings = Arc::new(settings);
        let renderers = Arc::new(CamelCaseRenderers::new(settings.clone()));
        Self {
            inner: Arc::new(AppStateInner {
                settings,
                renderers,
                users: RwLock::new(seed_users()),
            }),
        }
    }

    pub fn settings(&self) -> Arc<CaseSettings> {
        self.inner.settings.clone()
    }

    pub fn renderers(&self) -> Arc<CamelCaseRenderers> {
        self.inner.renderers.clone()
    }

    pub fn users(&self) -> &RwLock<Vec<User>> {
        &self.inner.users
    }
}

impl FromRef<AppState> for Arc<CaseSettings> {
    fn from_ref(state: &AppState) -> Self {
        state.settings()
    }
}

fn seed_users() -> Vec<User> {
    vec![
        User {
            id: 1,
            user_name: "ada".to_string(),
            email_address: "ada@example.com".to_string(),
            is_active: true,
        },
        User {
            id: 2,
            user_name: "grace".to_string(),
            email_address: "grace@example.com".to_string(),
            is_active: false,
        },
    ]
}
