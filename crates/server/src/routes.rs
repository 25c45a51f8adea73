use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;
use axum::Json;

use crate::page;
use crate::payload::DashboardPayload;
use crate::AppState;

/// GET /. The page shell; charts are drawn client-side from the
/// payload endpoint.
pub async fn dashboard_page() -> Html<&'static str> {
    Html(page::INDEX_HTML)
}

/// GET /api/dashboard. Previews, series and both breakdowns in one
/// response. All data was loaded at startup, so this cannot fail.
pub async fn dashboard_data(State(state): State<Arc<AppState>>) -> Json<DashboardPayload> {
    Json(DashboardPayload::build(&state))
}
