//! Write path: turn logged activities and profiles into stored vectors.
//!
//! Every record is rendered to a short plain-text document, embedded, and
//! upserted under the owner's namespace. Vector ids are derived from the
//! record so re-indexing the same record overwrites instead of duplicating.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::timeout;
use tracing::info;

use fitcoach_types::activity::{ActivityRecord, FitnessProfile, SourceType};
use fitcoach_types::error::{EmbeddingError, IndexError, VectorStoreError};
use fitcoach_types::retrieval::{VectorMetadata, VectorRecord};

use crate::memory::box_embedder::BoxEmbedder;
use crate::memory::box_vector::BoxVectorStore;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Embeds and stores user records for later retrieval.
///
/// Unlike the chat pipeline, failures here are returned to the caller.
pub struct ActivityIndexer {
    embedder: Arc<BoxEmbedder>,
    store: Arc<BoxVectorStore>,
    embed_timeout: Duration,
    upsert_timeout: Duration,
}

impl ActivityIndexer {
    pub fn new(embedder: Arc<BoxEmbedder>, store: Arc<BoxVectorStore>) -> Self {
        Self {
            embedder,
            store,
            embed_timeout: DEFAULT_TIMEOUT,
            upsert_timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeouts(mut self, embed: Duration, upsert: Duration) -> Self {
        self.embed_timeout = embed;
        self.upsert_timeout = upsert;
        self
    }

    /// Index one workout or meal. Returns the vector id.
    #[tracing::instrument(skip(self, record), fields(user_id = %record.owner_id, kind = %record.kind))]
    pub async fn index_activity(&self, record: &ActivityRecord) -> Result<String, IndexError> {
        if record.owner_id.trim().is_empty() {
            return Err(IndexError::MissingField("userId"));
        }
        if record.notes.trim().is_empty() {
            return Err(IndexError::MissingField("notes"));
        }

        let source_type = SourceType::from(record.kind);
        let content = render_activity(record);
        let metadata = VectorMetadata {
            user_id: record.owner_id.clone(),
            source_type,
            content: content.clone(),
            date: Some(record.logged_at.to_rfc3339()),
            calories: record.calories,
            duration: record.duration_minutes,
        };
        let id = format!("{source_type}-{}", record.id);

        self.store_document(id, &content, metadata, &record.owner_id)
            .await
    }

    /// Index (or replace) a user's profile. Returns the vector id.
    #[tracing::instrument(skip(self, profile), fields(user_id = %profile.owner_id))]
    pub async fn index_profile(&self, profile: &FitnessProfile) -> Result<String, IndexError> {
        if profile.owner_id.trim().is_empty() {
            return Err(IndexError::MissingField("userId"));
        }
        if profile.is_empty() {
            return Err(IndexError::MissingField("at least one profile field"));
        }

        let content = render_profile(profile);
        let metadata = VectorMetadata {
            user_id: profile.owner_id.clone(),
            source_type: SourceType::Profile,
            content: content.clone(),
            date: None,
            calories: None,
            duration: None,
        };
        let id = format!("profile-{}", profile.owner_id);

        self.store_document(id, &content, metadata, &profile.owner_id)
            .await
    }

    async fn store_document(
        &self,
        id: String,
        content: &str,
        metadata: VectorMetadata,
        namespace: &str,
    ) -> Result<String, IndexError> {
        let embed_ms = self.embed_timeout.as_millis() as u64;
        let values = timeout(self.embed_timeout, self.embedder.embed(content))
            .await
            .map_err(|_| EmbeddingError::Timeout(embed_ms))??;

        let record = VectorRecord {
            id,
            values,
            metadata,
        };

        let upsert_ms = self.upsert_timeout.as_millis() as u64;
        timeout(self.upsert_timeout, self.store.upsert(&record, namespace))
            .await
            .map_err(|_| VectorStoreError::Timeout(upsert_ms))??;

        info!(vector_id = %record.id, "Indexed document");
        Ok(record.id)
    }
}

/// Plain-text form of an activity, e.g.
/// `workout: Morning run. Calories: 320. Duration: 30 minutes`.
pub fn render_activity(record: &ActivityRecord) -> String {
    let mut parts = vec![format!("{}: {}", record.kind, record.notes.trim())];
    if let Some(calories) = record.calories {
        parts.push(format!("Calories: {}", trim_number(calories)));
    }
    if let Some(duration) = record.duration_minutes {
        parts.push(format!("Duration: {} minutes", trim_number(duration)));
    }
    parts.join(". ")
}

/// Plain-text form of a profile. Absent fields are omitted.
pub fn render_profile(profile: &FitnessProfile) -> String {
    let mut parts = Vec::new();
    if let Some(goals) = &profile.goals {
        parts.push(format!("Goals: {goals}"));
    }
    if let Some(level) = &profile.fitness_level {
        parts.push(format!("Fitness level: {level}"));
    }
    if let Some(diet) = &profile.dietary_preferences {
        parts.push(format!("Dietary preferences: {diet}"));
    }
    if let Some(age) = profile.age {
        parts.push(format!("Age: {age}"));
    }
    if let Some(weight) = profile.weight {
        parts.push(format!("Weight: {} kg", trim_number(weight)));
    }
    if let Some(height) = profile.height {
        parts.push(format!("Height: {} cm", trim_number(height)));
    }
    format!("profile: {}", parts.join(". "))
}

fn trim_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}
