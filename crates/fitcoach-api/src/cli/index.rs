//! Index a single activity from the command line.

use anyhow::Result;
use chrono::Utc;
use console::style;
use uuid::Uuid;

use fitcoach_types::activity::{ActivityKind, ActivityRecord};

use crate::state::AppState;

/// Embed and store one workout or meal, then print its vector id.
pub async fn index_activity(
    state: &AppState,
    user_id: String,
    kind: ActivityKind,
    notes: String,
    calories: Option<f64>,
    duration: Option<f64>,
    json: bool,
) -> Result<()> {
    let record = ActivityRecord {
        id: Uuid::now_v7(),
        owner_id: user_id,
        kind,
        notes,
        calories,
        duration_minutes: duration,
        logged_at: Utc::now(),
    };

    let id = state.indexer.index_activity(&record).await?;

    if json {
        println!("{}", serde_json::json!({ "success": true, "id": id }));
    } else {
        println!(
            "  {} Indexed {} for '{}' as {}",
            style("✓").green().bold(),
            record.kind,
            style(&record.owner_id).bold(),
            style(&id).dim()
        );
    }

    Ok(())
}
