//! Handler for the recognition alert feed (`/alerts`).

use std::collections::HashMap;

use axum::extract::State;
use axum::Json;
use beacon_core::alert_enrichment::{enrich_alerts, resolvable_ids, EnrichedAlert, RawAlert};
use beacon_db::repositories::{AlertRepo, ReportRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

const FETCH_FAILED: &str = "Failed to fetch alerts";

/// GET /api/alerts
///
/// Returns every alert newest first, each resolved against the report it
/// refers to. Subject names are fetched in a single batch query.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<EnrichedAlert>>> {
    let alerts: Vec<RawAlert> = AlertRepo::list_newest_first(&state.pool)
        .await
        .map_err(|source| AppError::Failed {
            context: FETCH_FAILED,
            source,
        })?
        .into_iter()
        .map(RawAlert::from)
        .collect();

    let ids = resolvable_ids(&alerts);
    let names: HashMap<String, String> = ReportRepo::find_names_by_ids(&state.pool, &ids)
        .await
        .map_err(|source| AppError::Failed {
            context: FETCH_FAILED,
            source,
        })?
        .into_iter()
        .map(|r| (r.id, r.person_name))
        .collect();

    tracing::debug!(count = alerts.len(), resolved = names.len(), "Alerts fetched");

    Ok(Json(enrich_alerts(alerts, &names)))
}
