//! One-shot question to the coach.

use anyhow::Result;
use console::style;

use fitcoach_types::chat::ChatQuery;

use crate::state::AppState;

/// Run the pipeline once and print the answer.
///
/// With `--json` the output has the same shape as a `POST /chat` response.
pub async fn ask(state: &AppState, user_id: String, message: String, json: bool) -> Result<()> {
    let outcome = state
        .pipeline
        .answer(&ChatQuery::new(user_id, message))
        .await?;

    if json {
        let body = serde_json::json!({
            "success": true,
            "message": outcome.message,
            "hasPersonalizedData": outcome.has_personalized_data,
            "contextDataPoints": outcome.context_data_points,
            "intent": outcome.intent,
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(());
    }

    println!();
    println!("{}", outcome.message);
    println!();

    let source = if outcome.has_personalized_data {
        format!(
            "based on {} of your logged entries",
            style(outcome.context_data_points).bold()
        )
    } else if outcome.degraded {
        "general advice (your history was unavailable)".to_string()
    } else {
        "general advice (no matching entries yet)".to_string()
    };
    println!("  {} {}", style(format!("[{}]", outcome.intent)).cyan(), style(source).dim());

    Ok(())
}
