//! Activity logging handler: embeds a workout or meal for later recall.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{Value, json};
use uuid::Uuid;

use fitcoach_types::activity::{ActivityKind, ActivityRecord};
use fitcoach_types::error::IndexError;

use crate::http::error::AppError;
use crate::state::AppState;

/// `POST /activities` body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRequest {
    pub id: Option<Uuid>,
    pub user_id: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub notes: Option<String>,
    pub calories: Option<f64>,
    /// Minutes.
    pub duration: Option<f64>,
    pub timestamp: Option<DateTime<Utc>>,
}

impl ActivityRequest {
    fn into_record(self) -> Result<ActivityRecord, AppError> {
        let kind = match self.kind.as_deref().map(str::trim) {
            None | Some("") => return Err(IndexError::MissingField("type").into()),
            Some(raw) => raw.parse::<ActivityKind>().map_err(AppError::Validation)?,
        };

        Ok(ActivityRecord {
            id: self.id.unwrap_or_else(Uuid::now_v7),
            owner_id: self.user_id.unwrap_or_default(),
            kind,
            notes: self.notes.unwrap_or_default(),
            calories: self.calories,
            duration_minutes: self.duration,
            logged_at: self.timestamp.unwrap_or_else(Utc::now),
        })
    }
}

/// POST /activities - Log and index one workout or meal.
pub async fn log_activity(
    State(state): State<AppState>,
    body: Result<Json<ActivityRequest>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(body) = body?;
    let record = body.into_record()?;

    let id = state.indexer.index_activity(&record).await?;

    Ok(Json(json!({ "success": true, "id": id })))
}
