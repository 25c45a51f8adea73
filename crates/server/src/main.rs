use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use spendview_core::{Account, Transaction};
use spendview_import::{AccountSettings, BreakdownMode, CleanEngine, Settings};

mod page;
mod payload;
mod routes;

/// Everything the handlers read. Loaded once at startup and never
/// mutated afterwards, so requests are plain reads.
pub struct AppState {
    pub checking_raw: Vec<Transaction>,
    pub checking: Vec<Transaction>,
    pub savings_raw: Option<Vec<Transaction>>,
    pub savings: Option<Vec<Transaction>>,
    pub breakdown_mode: BreakdownMode,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "settings.toml".to_string());
    let settings = Settings::load(Path::new(&settings_path))
        .with_context(|| format!("reading settings from {settings_path}"))?;

    let state = Arc::new(load_state(&settings)?);

    let app = Router::new()
        .route("/", get(routes::dashboard_page))
        .route("/api/dashboard", get(routes::dashboard_data))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr: SocketAddr = settings
        .dashboard
        .bind
        .parse()
        .with_context(|| format!("invalid bind address '{}'", settings.dashboard.bind))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("dashboard listening on http://{addr}");
    axum::serve(listener, app).await?;

    Ok(())
}

fn load_state(settings: &Settings) -> anyhow::Result<AppState> {
    let (checking_raw, checking) = load_account(&settings.accounts.checking, Account::Checking)?;
    let (savings_raw, savings) = match &settings.accounts.savings {
        Some(account_settings) => {
            let (raw, cleaned) = load_account(account_settings, Account::Savings)?;
            (Some(raw), Some(cleaned))
        }
        None => (None, None),
    };

    Ok(AppState {
        checking_raw,
        checking,
        savings_raw,
        savings,
        breakdown_mode: settings.dashboard.breakdown_mode,
    })
}

fn load_account(
    settings: &AccountSettings,
    account: Account,
) -> anyhow::Result<(Vec<Transaction>, Vec<Transaction>)> {
    let raw = spendview_import::load_file(settings, account)
        .with_context(|| format!("loading {account} export from {}", settings.path.display()))?;
    let engine = CleanEngine::new(settings)
        .with_context(|| format!("building the {account} cleaning engine"))?;
    let cleaned = engine.clean(&raw);
    tracing::info!(%account, rows = raw.len(), "export loaded and cleaned");
    Ok((raw, cleaned))
}
