//! Profile handler: stores the user's goals and stats as one vector.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::Deserialize;
use serde_json::{Value, json};

use fitcoach_types::activity::FitnessProfile;

use crate::http::error::AppError;
use crate::state::AppState;

/// `POST /profile` body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRequest {
    pub user_id: Option<String>,
    pub goals: Option<String>,
    pub fitness_level: Option<String>,
    pub dietary_preferences: Option<String>,
    pub age: Option<u32>,
    /// Kilograms.
    pub weight: Option<f64>,
    /// Centimetres.
    pub height: Option<f64>,
}

impl From<ProfileRequest> for FitnessProfile {
    fn from(req: ProfileRequest) -> Self {
        let non_blank = |s: Option<String>| s.filter(|v| !v.trim().is_empty());
        FitnessProfile {
            owner_id: req.user_id.unwrap_or_default(),
            goals: non_blank(req.goals),
            fitness_level: non_blank(req.fitness_level),
            dietary_preferences: non_blank(req.dietary_preferences),
            age: req.age,
            weight: req.weight,
            height: req.height,
        }
    }
}

/// POST /profile - Create or replace the user's profile vector.
pub async fn upsert_profile(
    State(state): State<AppState>,
    body: Result<Json<ProfileRequest>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(body) = body?;
    let profile = FitnessProfile::from(body);

    let id = state.indexer.index_profile(&profile).await?;

    Ok(Json(json!({ "success": true, "id": id })))
}
