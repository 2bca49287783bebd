//! Chat handler: one retrieval-augmented answer per request.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use fitcoach_types::chat::ChatQuery;
use fitcoach_types::llm::Message;

use crate::http::error::AppError;
use crate::state::AppState;

/// `POST /chat` body.
///
/// Every field is optional at the serde level so a missing `message` or
/// `userId` is reported as "required" by the pipeline instead of as a
/// generic deserialization failure. `chatHistory` is kept as raw JSON for
/// the same reason: malformed turns are dropped, not rejected.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub message: Option<String>,
    pub user_id: Option<String>,
    pub chat_history: Option<Value>,
}

impl ChatRequest {
    /// Well-formed history turns; anything else is dropped.
    fn history(&mut self) -> Vec<Message> {
        let entries = match self.chat_history.take() {
            Some(Value::Array(entries)) => entries,
            None | Some(Value::Null) => return Vec::new(),
            Some(_) => {
                debug!("Ignoring chatHistory that is not an array");
                return Vec::new();
            }
        };

        entries
            .into_iter()
            .enumerate()
            .filter_map(|(index, entry)| match serde_json::from_value::<Message>(entry) {
                Ok(message) => Some(message),
                Err(e) => {
                    debug!(index, error = %e, "Dropping malformed chatHistory entry");
                    None
                }
            })
            .collect()
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub success: bool,
    pub message: String,
    pub has_personalized_data: bool,
    pub context_data_points: usize,
}

/// POST /chat - Answer a fitness question using the user's own data.
pub async fn chat(
    State(state): State<AppState>,
    body: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(mut body) = body?;
    let history = body.history();

    let query = ChatQuery::new(
        body.user_id.unwrap_or_default(),
        body.message.unwrap_or_default(),
    )
    .with_history(history);

    let outcome = state.pipeline.answer(&query).await?;

    Ok(Json(ChatResponse {
        success: true,
        message: outcome.message,
        has_personalized_data: outcome.has_personalized_data,
        context_data_points: outcome.context_data_points,
    }))
}
