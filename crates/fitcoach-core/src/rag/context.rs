//! Augmented prompt assembly.
//!
//! Turns ranked matches into a numbered block of the user's own data and
//! wraps it with the persona, the question, and response-style instructions.
//!
//! Layout:
//! ```text
//! {persona}
//!
//! Based on the user's personal fitness data:
//! 1. workout: Morning run, 5km
//!    Date: 2025-03-02
//!    Calories: 320
//!    Duration: 30 minutes
//!    Relevance: 91.2%
//!
//! User question: {message}
//!
//! {instructions}
//! ```

use chrono::DateTime;

use fitcoach_types::retrieval::RetrievedMatch;

/// Replaces the data block when retrieval produced nothing.
pub const NO_CONTEXT_FALLBACK: &str = "No personal fitness data was found for this user. \
    Provide general, evidence-based fitness and nutrition advice.";

const CONTEXT_HEADER: &str = "Based on the user's personal fitness data:";

const RESPONSE_INSTRUCTIONS: &str = "Respond in a friendly, encouraging tone. \
    Reference the user's own data where it is relevant, keep the answer concise \
    and actionable, and recommend consulting a professional for medical concerns.";

/// Builds the user-turn prompt for a personalized completion.
pub struct ContextBuilder;

impl ContextBuilder {
    /// Compose the full prompt. Deterministic; never fails.
    ///
    /// Every metadata field is optional: a missing type renders as `entry`,
    /// missing content as an empty string, and missing date, calories, or
    /// duration lines are skipped.
    pub fn build_prompt(user_message: &str, matches: &[RetrievedMatch], persona: &str) -> String {
        let mut sections = Vec::with_capacity(4);

        if !persona.trim().is_empty() {
            sections.push(persona.trim().to_string());
        }

        if matches.is_empty() {
            sections.push(NO_CONTEXT_FALLBACK.to_string());
        } else {
            let entries: Vec<String> = matches
                .iter()
                .enumerate()
                .map(|(i, m)| Self::format_match(i + 1, m))
                .collect();
            sections.push(format!("{CONTEXT_HEADER}\n{}", entries.join("\n")));
        }

        sections.push(format!("User question: {}", user_message.trim()));
        sections.push(RESPONSE_INSTRUCTIONS.to_string());

        sections.join("\n\n")
    }

    fn format_match(index: usize, m: &RetrievedMatch) -> String {
        let mut lines = vec![format!(
            "{index}. {}: {}",
            m.source_type().unwrap_or("entry"),
            m.content().unwrap_or_default()
        )];

        if let Some(date) = m.date() {
            lines.push(format!("   Date: {}", format_date(date)));
        }
        if let Some(calories) = m.calories() {
            lines.push(format!("   Calories: {}", format_number(calories)));
        }
        if let Some(duration) = m.duration() {
            lines.push(format!("   Duration: {} minutes", format_number(duration)));
        }
        lines.push(format!(
            "   Relevance: {:.1}%",
            m.score.clamp(0.0, 1.0) * 100.0
        ));

        lines.join("\n")
    }
}

/// RFC 3339 timestamps are shortened to the calendar date; anything else is
/// shown as stored.
fn format_date(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt.format("%Y-%m-%d").to_string(),
        Err(_) => raw.to_string(),
    }
}

fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn m(score: f32, metadata: serde_json::Value) -> RetrievedMatch {
        RetrievedMatch {
            id: "id".into(),
            score,
            metadata: metadata.as_object().cloned().unwrap_or_default(),
        }
    }

    #[test]
    fn test_empty_matches_use_fallback_sentence() {
        let prompt = ContextBuilder::build_prompt("What now?", &[], "You are a coach.");
        assert!(prompt.contains(NO_CONTEXT_FALLBACK));
        assert!(!prompt.contains(CONTEXT_HEADER));
        assert!(prompt.starts_with("You are a coach."));
        assert!(prompt.contains("User question: What now?"));
    }

    #[test]
    fn test_matches_enumerated_in_ranking_order() {
        let matches = vec![
            m(0.92, json!({"type": "workout", "content": "5km run"})),
            m(0.81, json!({"type": "meal", "content": "chicken salad"})),
        ];
        let prompt = ContextBuilder::build_prompt("Tips?", &matches, "coach");
        let first = prompt.find("1. workout: 5km run").unwrap();
        let second = prompt.find("2. meal: chicken salad").unwrap();
        assert!(first < second);
        assert!(prompt.contains("Relevance: 92.0%"));
        assert!(!prompt.contains(NO_CONTEXT_FALLBACK));
    }

    #[test]
    fn test_optional_lines_rendered_when_present() {
        let matches = vec![m(
            0.5,
            json!({
                "type": "workout",
                "content": "leg day",
                "date": "2025-03-02T07:30:00Z",
                "calories": 410,
                "duration": 45.5,
            }),
        )];
        let prompt = ContextBuilder::build_prompt("q", &matches, "coach");
        assert!(prompt.contains("   Date: 2025-03-02\n"));
        assert!(prompt.contains("   Calories: 410\n"));
        assert!(prompt.contains("   Duration: 45.5 minutes\n"));
    }

    #[test]
    fn test_missing_metadata_renders_defaults() {
        let matches = vec![m(0.3, json!({}))];
        let prompt = ContextBuilder::build_prompt("q", &matches, "coach");
        assert!(prompt.contains("1. entry: \n"));
        assert!(!prompt.contains("Date:"));
        assert!(!prompt.contains("Calories:"));
        assert!(!prompt.contains("Duration:"));
    }

    #[test]
    fn test_unparseable_date_kept_verbatim() {
        let matches = vec![m(0.3, json!({"date": "last tuesday"}))];
        let prompt = ContextBuilder::build_prompt("q", &matches, "coach");
        assert!(prompt.contains("Date: last tuesday"));
    }

    #[test]
    fn test_out_of_range_score_is_clamped() {
        let matches = vec![m(1.7, json!({"type": "meal"}))];
        let prompt = ContextBuilder::build_prompt("q", &matches, "coach");
        assert!(prompt.contains("Relevance: 100.0%"));
    }

    #[test]
    fn test_deterministic() {
        let matches = vec![m(0.7, json!({"type": "meal", "content": "oats"}))];
        let a = ContextBuilder::build_prompt("q", &matches, "coach");
        let b = ContextBuilder::build_prompt("q", &matches, "coach");
        assert_eq!(a, b);
    }
}
