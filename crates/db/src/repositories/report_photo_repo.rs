//! Repository for the `report_photos` table.

use beacon_core::types::DbId;
use sqlx::PgPool;

use crate::models::report::{PhotoData, PhotoMeta};

/// Read access to report photos. Photos are written only by
/// [`ReportRepo::create_with_photos`](crate::repositories::ReportRepo::create_with_photos).
pub struct ReportPhotoRepo;

impl ReportPhotoRepo {
    /// Photo metadata for a set of reports, ordered by report then index.
    pub async fn list_meta_for_reports(
        pool: &PgPool,
        report_ids: &[DbId],
    ) -> Result<Vec<PhotoMeta>, sqlx::Error> {
        if report_ids.is_empty() {
            return Ok(Vec::new());
        }
        sqlx::query_as::<_, PhotoMeta>(
            "SELECT report_id, photo_index, content_type, size_bytes
             FROM report_photos
             WHERE report_id = ANY($1)
             ORDER BY report_id, photo_index",
        )
        .bind(report_ids)
        .fetch_all(pool)
        .await
    }

    /// Fetch one photo's bytes by report id and zero-based index.
    pub async fn find(
        pool: &PgPool,
        report_id: &str,
        index: i32,
    ) -> Result<Option<PhotoData>, sqlx::Error> {
        sqlx::query_as::<_, PhotoData>(
            "SELECT content_type, data FROM report_photos
             WHERE report_id = $1 AND photo_index = $2",
        )
        .bind(report_id)
        .bind(index)
        .fetch_optional(pool)
        .await
    }
}
