//! Provider fakes for router tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use fitcoach_core::llm::box_provider::BoxLlmProvider;
use fitcoach_core::llm::provider::LlmProvider;
use fitcoach_core::memory::box_embedder::BoxEmbedder;
use fitcoach_core::memory::box_vector::BoxVectorStore;
use fitcoach_core::memory::embedder::Embedder;
use fitcoach_core::memory::vector::VectorStore;
use fitcoach_types::config::FitcoachConfig;
use fitcoach_types::error::{EmbeddingError, VectorStoreError};
use fitcoach_types::llm::{CompletionRequest, CompletionResponse, LlmError, StopReason, Usage};
use fitcoach_types::retrieval::{RetrievedMatch, VectorQuery, VectorRecord};

use crate::state::AppState;

/// Counts every outbound call across the three providers.
#[derive(Clone, Default)]
pub struct CallLog {
    pub embeds: Arc<AtomicUsize>,
    pub queries: Arc<AtomicUsize>,
    pub upserts: Arc<Mutex<Vec<(VectorRecord, String)>>>,
    pub completions: Arc<Mutex<Vec<CompletionRequest>>>,
}

impl CallLog {
    pub fn total(&self) -> usize {
        self.embeds.load(Ordering::SeqCst)
            + self.queries.load(Ordering::SeqCst)
            + self.upserts.lock().unwrap().len()
            + self.completions.lock().unwrap().len()
    }
}

struct StubEmbedder {
    log: CallLog,
    fail: bool,
}

impl Embedder for StubEmbedder {
    async fn embed(&self, _text: &str) -> Result<Vec<f32>, EmbeddingError> {
        self.log.embeds.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(EmbeddingError::Provider("HTTP 503: embedding backend down".into()));
        }
        Ok(vec![0.25; 4])
    }

    fn model_name(&self) -> &str {
        "stub-embed"
    }

    fn dimension(&self) -> usize {
        4
    }
}

struct StubStore {
    log: CallLog,
    matches: Vec<RetrievedMatch>,
}

impl VectorStore for StubStore {
    async fn upsert(&self, record: &VectorRecord, namespace: &str) -> Result<(), VectorStoreError> {
        self.log
            .upserts
            .lock()
            .unwrap()
            .push((record.clone(), namespace.to_string()));
        Ok(())
    }

    async fn query(
        &self,
        _query: &VectorQuery,
        _namespace: &str,
    ) -> Result<Vec<RetrievedMatch>, VectorStoreError> {
        self.log.queries.fetch_add(1, Ordering::SeqCst);
        Ok(self.matches.clone())
    }
}

struct StubLlm {
    log: CallLog,
    fail: bool,
}

impl LlmProvider for StubLlm {
    fn name(&self) -> &str {
        "stub"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        self.log.completions.lock().unwrap().push(request.clone());
        if self.fail {
            return Err(LlmError::Provider {
                message: "upstream 500: stack trace with internal hostnames".into(),
            });
        }
        Ok(CompletionResponse {
            id: "stub-1".into(),
            content: "Refuel with protein and carbs within an hour.".into(),
            model: "stub-model".into(),
            stop_reason: StopReason::EndTurn,
            usage: Usage::default(),
        })
    }
}

/// Knobs for building a test [`AppState`].
#[derive(Default)]
pub struct StubSetup {
    pub matches: Vec<RetrievedMatch>,
    pub embed_fails: bool,
    pub completion_fails: bool,
}

impl StubSetup {
    pub fn build(self) -> (AppState, CallLog) {
        let log = CallLog::default();
        let state = AppState::from_parts(
            BoxEmbedder::new(StubEmbedder {
                log: log.clone(),
                fail: self.embed_fails,
            }),
            BoxVectorStore::new(StubStore {
                log: log.clone(),
                matches: self.matches,
            }),
            BoxLlmProvider::new(StubLlm {
                log: log.clone(),
                fail: self.completion_fails,
            }),
            FitcoachConfig::default(),
        );
        (state, log)
    }
}

/// Two stored entries for user `u1`: one workout, one meal.
pub fn two_matches() -> Vec<RetrievedMatch> {
    let entry = |id: &str, score: f32, meta: serde_json::Value| RetrievedMatch {
        id: id.into(),
        score,
        metadata: meta.as_object().cloned().unwrap_or_default(),
    };
    vec![
        entry(
            "workout-1",
            0.9,
            serde_json::json!({ "userId": "u1", "type": "workout", "content": "Leg day, 5x5 squats" }),
        ),
        entry(
            "meal-1",
            0.8,
            serde_json::json!({ "userId": "u1", "type": "meal", "content": "Chicken and rice" }),
        ),
    ]
}
