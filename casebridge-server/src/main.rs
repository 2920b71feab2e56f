//! casebridge Server - Headless Demo Daemon
//!
//! Serves a small user API whose handlers are written against snake_case
//! types while clients talk camelCase:
//! - camelCase query keys are normalized when `normalize_inputs` is on
//! - JSON responses are camelized, except for ignored paths
//! - `POST /api/users` bodies are accepted in camelCase
//!
//! Access via: http://localhost:8046

use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod api;
mod cli;
mod router;
mod state;


use casebridge_core::{config, CaseSettings};
use cli::Cli;
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut case_config = match config::find_config(cli.config.as_deref())
        .context("failed to load casebridge config")?
    {
        Some(case_config) => case_config,
        None => {
            info!(
                "No casebridge.json found, using demo defaults ({} stays snake_case)",
                api::LEGACY_USERS_PATH
            );
            api::demo_config()
        },
    };
    if cli.normalize_inputs {
        case_config.normalize_inputs = true;
    }

    let settings =
        CaseSettings::from_config(&case_config).context("invalid casebridge config")?;
    info!(
        "Case settings: normalize_inputs={}, browsable_api={}, ignore_paths={:?}",
        case_config.normalize_inputs, case_config.browsable_api, case_config.ignore_paths
    );

    let app = router::build_router(AppState::new(settings));

    let addr: SocketAddr = format!("{}:{}", cli.host, cli.port)
        .parse()
        .with_context(|| format!("invalid listen address {}:{}", cli.host, cli.port))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Server listening on http://{}", addr);
    info!("API available at http://{}/api/users", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
