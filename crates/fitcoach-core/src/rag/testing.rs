//! In-process fakes for the three provider ports, shared by the pipeline and
//! indexer tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use fitcoach_types::error::{EmbeddingError, VectorStoreError};
use fitcoach_types::llm::{CompletionRequest, CompletionResponse, LlmError, StopReason, Usage};
use fitcoach_types::retrieval::{RetrievedMatch, VectorQuery, VectorRecord};

use crate::llm::provider::LlmProvider;
use crate::memory::embedder::Embedder;
use crate::memory::vector::VectorStore;

#[derive(Clone, Default)]
pub struct FakeEmbedder {
    pub fail: bool,
    pub delay: Option<Duration>,
    pub calls: Arc<AtomicUsize>,
}

impl FakeEmbedder {
    pub fn ok() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Embedder for FakeEmbedder {
    async fn embed(&self, _text: &str) -> Result<Vec<f32>, EmbeddingError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail {
            return Err(EmbeddingError::Provider("embedding service unavailable".into()));
        }
        Ok(vec![0.1, 0.2, 0.3])
    }

    fn model_name(&self) -> &str {
        "fake-embed"
    }

    fn dimension(&self) -> usize {
        3
    }
}

#[derive(Clone, Default)]
pub struct FakeStore {
    pub matches: Vec<RetrievedMatch>,
    pub fail: bool,
    /// Applied to queries only.
    pub delay: Option<Duration>,
    pub queries: Arc<Mutex<Vec<(VectorQuery, String)>>>,
    pub upserts: Arc<Mutex<Vec<(VectorRecord, String)>>>,
}

impl FakeStore {
    pub fn with_matches(matches: Vec<RetrievedMatch>) -> Self {
        Self {
            matches,
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn query_count(&self) -> usize {
        self.queries.lock().unwrap().len()
    }

    pub fn upsert_count(&self) -> usize {
        self.upserts.lock().unwrap().len()
    }
}

impl VectorStore for FakeStore {
    async fn upsert(&self, record: &VectorRecord, namespace: &str) -> Result<(), VectorStoreError> {
        if self.fail {
            return Err(VectorStoreError::Provider("index unavailable".into()));
        }
        self.upserts
            .lock()
            .unwrap()
            .push((record.clone(), namespace.to_string()));
        Ok(())
    }

    async fn query(
        &self,
        query: &VectorQuery,
        namespace: &str,
    ) -> Result<Vec<RetrievedMatch>, VectorStoreError> {
        self.queries
            .lock()
            .unwrap()
            .push((query.clone(), namespace.to_string()));
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail {
            return Err(VectorStoreError::Provider("index unavailable".into()));
        }
        Ok(self.matches.clone())
    }
}

#[derive(Clone)]
pub struct FakeLlm {
    /// `None` makes every call fail.
    pub reply: Option<String>,
    pub delay: Option<Duration>,
    pub requests: Arc<Mutex<Vec<CompletionRequest>>>,
}

impl FakeLlm {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: Some(reply.to_string()),
            delay: None,
            requests: Arc::default(),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn failing() -> Self {
        Self {
            reply: None,
            delay: None,
            requests: Arc::default(),
        }
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> CompletionRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no completion request recorded")
    }
}

impl LlmProvider for FakeLlm {
    fn name(&self) -> &str {
        "fake"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        self.requests.lock().unwrap().push(request.clone());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        match &self.reply {
            Some(content) => Ok(CompletionResponse {
                id: "resp-1".into(),
                content: content.clone(),
                model: "fake-model".into(),
                stop_reason: StopReason::EndTurn,
                usage: Usage {
                    input_tokens: 10,
                    output_tokens: 20,
                },
            }),
            None => Err(LlmError::Provider {
                message: "upstream 503: secret internal detail".into(),
            }),
        }
    }
}

pub fn workout_and_meal_matches() -> Vec<RetrievedMatch> {
    let workout = serde_json::json!({
        "userId": "u1",
        "type": "workout",
        "content": "Upper body strength session",
        "duration": 50,
        "calories": 380,
    });
    let meal = serde_json::json!({
        "userId": "u1",
        "type": "meal",
        "content": "Greek yogurt with berries",
        "calories": 250,
    });
    vec![
        RetrievedMatch {
            id: "workout-1".into(),
            score: 0.91,
            metadata: workout.as_object().cloned().unwrap_or_default(),
        },
        RetrievedMatch {
            id: "meal-1".into(),
            score: 0.84,
            metadata: meal.as_object().cloned().unwrap_or_default(),
        },
    ]
}
