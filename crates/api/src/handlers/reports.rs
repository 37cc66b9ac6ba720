//! Handlers for missing-person reports (`/reports`).

use std::collections::HashMap;

use axum::extract::{Multipart, Path, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;
use beacon_core::error::CoreError;
use beacon_core::object_id::is_object_id;
use beacon_core::report_status::validate_status;
use beacon_core::report_submission::{validate_photo_count, SubmissionForm, DEFAULT_PHOTO_CONTENT_TYPE};
use beacon_core::types::DbId;
use beacon_db::models::report::{CreateReport, MissingReport, NewPhoto, StatusUpdate};
use beacon_db::models::user::ReportOwner;
use beacon_db::repositories::{ReportPhotoRepo, ReportRepo, UserRepo};
use beacon_db::DbPool;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{OptionalOfficer, RequireCitizen};
use crate::state::AppState;

const PHOTOS_FIELD: &str = "photos";

/// A report as returned by the API: the stored row plus its owner and
/// photo metadata. Photo bytes are served separately by [`get_photo`].
#[derive(Debug, Serialize)]
pub struct ReportResponse {
    #[serde(flatten)]
    pub report: MissingReport,
    pub user: Option<ReportOwner>,
    pub photos: Vec<PhotoLink>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoLink {
    pub index: i32,
    pub content_type: String,
    pub size: i64,
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct CreateReportResponse {
    pub message: &'static str,
    pub report: ReportResponse,
}

/// Request body for `PATCH /reports/{id}/status`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdateRequest {
    pub status: Option<String>,
    /// When present, the update only applies if the stored version matches.
    pub expected_version: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct StatusUpdateResponse {
    pub message: &'static str,
    pub status: String,
    pub id: DbId,
    pub version: i64,
}

/// POST /api/reports
///
/// Multipart form: the text fields of a submission plus up to
/// [`MAX_PHOTOS_PER_REPORT`](beacon_core::report_submission::MAX_PHOTOS_PER_REPORT)
/// files under `photos`. The report and its photos are stored in one
/// transaction.
pub async fn create(
    State(state): State<AppState>,
    RequireCitizen(user): RequireCitizen,
    mut multipart: Multipart,
) -> AppResult<Json<CreateReportResponse>> {
    let mut form = SubmissionForm::new();
    let mut photos: Vec<NewPhoto> = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        if name == PHOTOS_FIELD {
            // Reject before buffering a sixth file.
            validate_photo_count(photos.len() + 1)?;
            let content_type = field
                .content_type()
                .unwrap_or(DEFAULT_PHOTO_CONTENT_TYPE)
                .to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(e.to_string()))?;
            photos.push(NewPhoto {
                content_type,
                data: data.to_vec(),
            });
            continue;
        }

        let text = field
            .text()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        // Unknown fields are ignored.
        form.insert(&name, text);
    }

    let fields = form.validate()?;
    let report = ReportRepo::create_with_photos(
        &state.pool,
        &CreateReport {
            user_id: user.user_id,
            fields,
        },
        &photos,
    )
    .await?;

    tracing::info!(
        report_id = %report.id,
        user_id = %report.user_id,
        photo_count = photos.len(),
        "Missing person report submitted",
    );

    let report = with_details(&state.pool, vec![report])
        .await?
        .pop()
        .ok_or_else(|| AppError::InternalError("Created report vanished".into()))?;

    Ok(Json(CreateReportResponse {
        message: "Report submitted",
        report,
    }))
}

/// GET /api/reports
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ReportResponse>>> {
    let reports = ReportRepo::list(&state.pool).await?;
    Ok(Json(with_details(&state.pool, reports).await?))
}

/// GET /api/reports/my-reports
pub async fn my_reports(
    State(state): State<AppState>,
    RequireCitizen(user): RequireCitizen,
) -> AppResult<Json<Vec<ReportResponse>>> {
    let reports = ReportRepo::list_by_user(&state.pool, &user.user_id).await?;
    Ok(Json(with_details(&state.pool, reports).await?))
}

/// GET /api/reports/{id}/photos/{index}
///
/// Streams one stored photo with its recorded content type.
pub async fn get_photo(
    State(state): State<AppState>,
    Path((id, index)): Path<(String, String)>,
) -> AppResult<Response> {
    let report_not_found = || AppError::Core(CoreError::NotFound {
        entity: "Report",
        id: id.clone(),
    });

    if !is_object_id(&id) {
        return Err(report_not_found());
    }
    let id = id.to_lowercase();
    if ReportRepo::find_by_id(&state.pool, &id).await?.is_none() {
        return Err(report_not_found());
    }

    let photo_not_found = || AppError::Core(CoreError::NotFound {
        entity: "Photo",
        id: format!("{id}/{index}"),
    });
    let index: i32 = index.parse().map_err(|_| photo_not_found())?;
    let photo = ReportPhotoRepo::find(&state.pool, &id, index)
        .await?
        .ok_or_else(photo_not_found)?;

    Ok(([(header::CONTENT_TYPE, photo.content_type)], photo.data).into_response())
}

/// PATCH /api/reports/{id}/status
///
/// Moves a report between `active`, `investigating` and `found`. The police
/// dashboard calls this without a token; a token, when sent, must be an
/// officer's. Supplying `expectedVersion` turns the write into a
/// compare-and-swap.
pub async fn update_status(
    State(state): State<AppState>,
    OptionalOfficer(officer): OptionalOfficer,
    Path(id): Path<String>,
    Json(input): Json<StatusUpdateRequest>,
) -> AppResult<Json<StatusUpdateResponse>> {
    let status = input.status.unwrap_or_default();
    validate_status(&status)?;

    let not_found = || AppError::Core(CoreError::NotFound {
        entity: "Report",
        id: id.clone(),
    });
    if !is_object_id(&id) {
        return Err(not_found());
    }

    let report = match ReportRepo::update_status(
        &state.pool,
        &id.to_lowercase(),
        &status,
        input.expected_version,
    )
    .await?
    {
        StatusUpdate::Updated(report) => report,
        StatusUpdate::NotFound => return Err(not_found()),
        StatusUpdate::VersionMismatch { current } => {
            return Err(AppError::Core(CoreError::Conflict(format!(
                "Report was modified concurrently (current version {current})"
            ))));
        }
    };

    tracing::info!(
        report_id = %report.id,
        officer_id = ?officer.as_ref().map(|o| o.user_id.as_str()),
        status = %report.status,
        version = report.version,
        "Report status updated",
    );

    Ok(Json(StatusUpdateResponse {
        message: "Status updated",
        status: report.status,
        id: report.id,
        version: report.version,
    }))
}

/// Attach owners and photo metadata to a batch of reports, preserving order.
async fn with_details(
    pool: &DbPool,
    reports: Vec<MissingReport>,
) -> AppResult<Vec<ReportResponse>> {
    let report_ids: Vec<DbId> = reports.iter().map(|r| r.id.clone()).collect();
    let mut owner_ids: Vec<DbId> = reports.iter().map(|r| r.user_id.clone()).collect();
    owner_ids.sort();
    owner_ids.dedup();

    let owners: HashMap<DbId, ReportOwner> = UserRepo::find_owners(pool, &owner_ids)
        .await?
        .into_iter()
        .map(|o| (o.id.clone(), o))
        .collect();

    let mut photos: HashMap<DbId, Vec<PhotoLink>> = HashMap::new();
    for meta in ReportPhotoRepo::list_meta_for_reports(pool, &report_ids).await? {
        photos.entry(meta.report_id.clone()).or_default().push(PhotoLink {
            index: meta.photo_index,
            content_type: meta.content_type,
            size: meta.size_bytes,
            url: photo_url(&meta.report_id, meta.photo_index),
        });
    }

    Ok(reports
        .into_iter()
        .map(|report| ReportResponse {
            user: owners.get(&report.user_id).cloned(),
            photos: photos.remove(&report.id).unwrap_or_default(),
            report,
        })
        .collect())
}

fn photo_url(report_id: &str, index: i32) -> String {
    format!("/api/reports/{report_id}/photos/{index}")
}
