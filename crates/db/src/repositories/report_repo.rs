//! Repository for the `missing_reports` table.

use beacon_core::object_id;
use beacon_core::report_status::STATUS_ACTIVE;
use beacon_core::types::DbId;
use sqlx::PgPool;

use crate::models::report::{CreateReport, MissingReport, NewPhoto, ReportName, StatusUpdate};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, reporter_name, reporter_phone, reporter_relation, \
                        person_name, person_age, person_gender, person_height, person_clothing, \
                        description, last_seen_location, last_seen_time, status, version, \
                        created_at, updated_at";

/// Provides create, read and status-update operations for reports.
///
/// There is deliberately no delete: reports are never removed by the
/// application.
pub struct ReportRepo;

impl ReportRepo {
    /// Insert a report and its photos in one transaction.
    ///
    /// Photos are numbered from 0 in the order given. New reports start in the
    /// `active` status at version 1.
    pub async fn create_with_photos(
        pool: &PgPool,
        input: &CreateReport,
        photos: &[NewPhoto],
    ) -> Result<MissingReport, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let f = &input.fields;

        let query = format!(
            "INSERT INTO missing_reports (
                id, user_id, reporter_name, reporter_phone, reporter_relation,
                person_name, person_age, person_gender, person_height, person_clothing,
                description, last_seen_location, last_seen_time, status)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
             RETURNING {COLUMNS}"
        );
        let report = sqlx::query_as::<_, MissingReport>(&query)
            .bind(object_id::generate())
            .bind(&input.user_id)
            .bind(&f.reporter_name)
            .bind(&f.reporter_phone)
            .bind(&f.reporter_relation)
            .bind(&f.person_name)
            .bind(f.person_age)
            .bind(&f.person_gender)
            .bind(&f.person_height)
            .bind(&f.person_clothing)
            .bind(&f.description)
            .bind(&f.last_seen_location)
            .bind(f.last_seen_time)
            .bind(STATUS_ACTIVE)
            .fetch_one(&mut *tx)
            .await?;

        for (index, photo) in photos.iter().enumerate() {
            sqlx::query(
                "INSERT INTO report_photos (report_id, photo_index, content_type, size_bytes, data)
                 VALUES ($1, $2, $3, $4, $5)",
            )
            .bind(&report.id)
            .bind(index as i32)
            .bind(&photo.content_type)
            .bind(photo.data.len() as i64)
            .bind(&photo.data)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(report)
    }

    /// Find a report by id.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<MissingReport>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM missing_reports WHERE id = $1");
        sqlx::query_as::<_, MissingReport>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every report, most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<MissingReport>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM missing_reports ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, MissingReport>(&query)
            .fetch_all(pool)
            .await
    }

    /// List the reports filed by one user, most recently created first.
    pub async fn list_by_user(pool: &PgPool, user_id: &str) -> Result<Vec<MissingReport>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM missing_reports
             WHERE user_id = $1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, MissingReport>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Resolve subject names for a batch of report ids in one query.
    ///
    /// Ids with no matching report are simply absent from the result.
    pub async fn find_names_by_ids(pool: &PgPool, ids: &[DbId]) -> Result<Vec<ReportName>, sqlx::Error> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        sqlx::query_as::<_, ReportName>(
            "SELECT id, person_name FROM missing_reports WHERE id = ANY($1)",
        )
        .bind(ids)
        .fetch_all(pool)
        .await
    }

    /// Overwrite a report's status.
    ///
    /// With `expected_version`, the write only happens if the stored version
    /// still matches (compare-and-swap). Without it the last writer wins.
    /// Every successful write bumps `version`; the `updated_at` trigger
    /// advances the timestamp.
    ///
    /// The caller is responsible for validating `status` first; the table's
    /// check constraint is the backstop.
    pub async fn update_status(
        pool: &PgPool,
        id: &str,
        status: &str,
        expected_version: Option<i64>,
    ) -> Result<StatusUpdate, sqlx::Error> {
        let query = format!(
            "UPDATE missing_reports
             SET status = $2, version = version + 1
             WHERE id = $1 AND ($3::BIGINT IS NULL OR version = $3)
             RETURNING {COLUMNS}"
        );
        let updated = sqlx::query_as::<_, MissingReport>(&query)
            .bind(id)
            .bind(status)
            .bind(expected_version)
            .fetch_optional(pool)
            .await?;

        if let Some(report) = updated {
            return Ok(StatusUpdate::Updated(report));
        }

        let current: Option<i64> =
            sqlx::query_scalar("SELECT version FROM missing_reports WHERE id = $1")
                .bind(id)
                .fetch_optional(pool)
                .await?;

        Ok(match current {
            Some(current) => {
                tracing::debug!(
                    report_id = id,
                    current,
                    expected = ?expected_version,
                    "Status update rejected by version check",
                );
                StatusUpdate::VersionMismatch { current }
            }
            None => StatusUpdate::NotFound,
        })
    }
}
