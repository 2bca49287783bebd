//! Chat exchange types.
//!
//! A chat exchange is one user message plus the coach's reply, together with
//! how much personalized context went into that reply.

use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

use crate::llm::Message;

/// Coarse category of a chat message, used to pick a coach persona.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoachIntent {
    Workout,
    Nutrition,
    Progress,
    General,
}

impl fmt::Display for CoachIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoachIntent::Workout => write!(f, "workout"),
            CoachIntent::Nutrition => write!(f, "nutrition"),
            CoachIntent::Progress => write!(f, "progress"),
            CoachIntent::General => write!(f, "general"),
        }
    }
}

impl FromStr for CoachIntent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "workout" => Ok(CoachIntent::Workout),
            "nutrition" => Ok(CoachIntent::Nutrition),
            "progress" => Ok(CoachIntent::Progress),
            "general" => Ok(CoachIntent::General),
            other => Err(format!("invalid coach intent: '{other}'")),
        }
    }
}

/// Input to one pipeline run.
#[derive(Debug, Clone)]
pub struct ChatQuery {
    pub user_id: String,
    pub message: String,
    /// Prior turns, oldest first.
    pub history: Vec<Message>,
}

impl ChatQuery {
    pub fn new(user_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            message: message.into(),
            history: Vec::new(),
        }
    }

    pub fn with_history(mut self, history: Vec<Message>) -> Self {
        self.history = history;
        self
    }
}

/// Result of a successful pipeline run.
///
/// `context_data_points` never exceeds the configured top-K bound.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatOutcome {
    pub message: String,
    pub has_personalized_data: bool,
    pub context_data_points: usize,
    pub intent: CoachIntent,
    /// True when embedding failed and the general path answered instead.
    pub degraded: bool,
}
