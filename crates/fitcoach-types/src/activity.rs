//! Activity and profile types.
//!
//! An activity is one logged user event (a workout or a meal). Activities and
//! profiles are the source documents that get embedded into the vector store
//! so the chat coach can recall them later.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use std::fmt;
use std::str::FromStr;

/// Kind of a logged activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Workout,
    Meal,
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivityKind::Workout => write!(f, "workout"),
            ActivityKind::Meal => write!(f, "meal"),
        }
    }
}

impl FromStr for ActivityKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "workout" => Ok(ActivityKind::Workout),
            "meal" => Ok(ActivityKind::Meal),
            other => Err(format!("invalid activity kind: '{other}'")),
        }
    }
}

/// Where an embedding vector came from.
///
/// Stored as the `type` metadata field next to every vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    Workout,
    Meal,
    Profile,
}

impl From<ActivityKind> for SourceType {
    fn from(kind: ActivityKind) -> Self {
        match kind {
            ActivityKind::Workout => SourceType::Workout,
            ActivityKind::Meal => SourceType::Meal,
        }
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceType::Workout => write!(f, "workout"),
            SourceType::Meal => write!(f, "meal"),
            SourceType::Profile => write!(f, "profile"),
        }
    }
}

impl FromStr for SourceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "workout" => Ok(SourceType::Workout),
            "meal" => Ok(SourceType::Meal),
            "profile" => Ok(SourceType::Profile),
            other => Err(format!("invalid source type: '{other}'")),
        }
    }
}

/// One logged workout or meal.
///
/// Owned exclusively by `owner_id`. Immutable once embedded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub id: Uuid,
    pub owner_id: String,
    pub kind: ActivityKind,
    /// Free-text notes entered by the user.
    pub notes: String,
    pub calories: Option<f64>,
    /// Duration in minutes.
    pub duration_minutes: Option<f64>,
    pub logged_at: DateTime<Utc>,
}

/// A user's fitness profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FitnessProfile {
    pub owner_id: String,
    pub goals: Option<String>,
    pub fitness_level: Option<String>,
    pub dietary_preferences: Option<String>,
    pub age: Option<u32>,
    /// Weight in kilograms.
    pub weight: Option<f64>,
    /// Height in centimetres.
    pub height: Option<f64>,
}

impl FitnessProfile {
    /// Whether the profile carries any descriptive field at all.
    pub fn is_empty(&self) -> bool {
        self.goals.is_none()
            && self.fitness_level.is_none()
            && self.dietary_preferences.is_none()
            && self.age.is_none()
            && self.weight.is_none()
            && self.height.is_none()
    }
}
