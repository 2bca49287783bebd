//! Retrieval-augmented chat pipeline.
//!
//! One linear pass per chat request:
//!
//! ```text
//! START -> embed query -> retrieve matches -> build prompt -> complete -> RESPOND
//! ```
//!
//! - Embedding failure (error or timeout) skips retrieval and answers from the
//!   persona and the raw message alone.
//! - Retrieval failure (error or timeout) counts as zero matches.
//! - Completion failure is terminal and surfaces as [`ChatError::Completion`].
//!
//! The pipeline holds no mutable state and never writes to the vector store.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::timeout;
use tracing::field::Empty;
use tracing::{Instrument, debug, info, info_span, warn};

use fitcoach_observe::genai_attrs::{
    GEN_AI_RESPONSE_FINISH_REASONS, GEN_AI_USAGE_INPUT_TOKENS, GEN_AI_USAGE_OUTPUT_TOKENS,
    OP_CHAT, OP_EMBEDDINGS,
};

use fitcoach_types::chat::{ChatOutcome, ChatQuery, CoachIntent};
use fitcoach_types::config::FitcoachConfig;
use fitcoach_types::error::{ChatError, EmbeddingError, VectorStoreError};
use fitcoach_types::llm::{CompletionRequest, LlmError, Message, MessageRole};
use fitcoach_types::retrieval::{RetrievedMatch, VectorQuery};

use crate::llm::box_provider::BoxLlmProvider;
use crate::memory::box_embedder::BoxEmbedder;
use crate::memory::box_vector::BoxVectorStore;

use super::context::ContextBuilder;
use super::intent::IntentRouter;

/// Tunables for one pipeline instance.
#[derive(Debug, Clone)]
pub struct PipelineSettings {
    pub top_k: usize,
    pub min_score: f32,
    pub history_limit: usize,
    pub intent_routing: bool,
    /// Empty means the completion provider's default model.
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f64,
    pub embed_timeout: Duration,
    pub retrieve_timeout: Duration,
    pub complete_timeout: Duration,
}

impl PipelineSettings {
    pub fn from_config(config: &FitcoachConfig) -> Self {
        Self {
            top_k: config.retrieval.top_k,
            min_score: config.retrieval.min_score,
            history_limit: config.retrieval.history_limit,
            intent_routing: config.retrieval.intent_routing,
            model: config.completion.model.clone(),
            max_tokens: config.completion.max_tokens,
            temperature: config.completion.temperature,
            embed_timeout: Duration::from_millis(config.embedding.timeout_ms),
            retrieve_timeout: Duration::from_millis(config.vector_store.timeout_ms),
            complete_timeout: Duration::from_millis(config.completion.timeout_ms),
        }
    }
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self::from_config(&FitcoachConfig::default())
    }
}

/// Orchestrates embed -> retrieve -> prompt -> complete for chat requests.
///
/// Providers are injected at construction so tests can pass fakes.
pub struct RagPipeline {
    embedder: Arc<BoxEmbedder>,
    store: Arc<BoxVectorStore>,
    llm: Arc<BoxLlmProvider>,
    settings: PipelineSettings,
}

impl RagPipeline {
    pub fn new(
        embedder: Arc<BoxEmbedder>,
        store: Arc<BoxVectorStore>,
        llm: Arc<BoxLlmProvider>,
        settings: PipelineSettings,
    ) -> Self {
        Self {
            embedder,
            store,
            llm,
            settings,
        }
    }

    pub fn settings(&self) -> &PipelineSettings {
        &self.settings
    }

    /// Answer one chat message.
    ///
    /// Missing `message` or `user_id` is rejected before any network call.
    #[tracing::instrument(name = "rag.answer", skip(self, query), fields(user_id = %query.user_id))]
    pub async fn answer(&self, query: &ChatQuery) -> Result<ChatOutcome, ChatError> {
        let message = query.message.trim();
        if message.is_empty() {
            return Err(ChatError::MissingField("message"));
        }
        let user_id = query.user_id.trim();
        if user_id.is_empty() {
            return Err(ChatError::MissingField("userId"));
        }

        let intent = if self.settings.intent_routing {
            IntentRouter::classify(message)
        } else {
            CoachIntent::General
        };
        let persona = IntentRouter::persona(intent);
        let history = self.bounded_history(&query.history);
        debug!(%intent, history_turns = history.len(), "Routing chat message");

        let embedding = match self.embed_query(message).await {
            Ok(embedding) => embedding,
            Err(e) => {
                warn!(error = %e, "Query embedding failed; answering without personal context");
                let mut messages = Vec::with_capacity(history.len() + 2);
                messages.push(Message::system(persona));
                messages.extend(history);
                messages.push(Message::user(message));

                let answer = self.complete(messages).await?;
                return Ok(ChatOutcome {
                    message: answer,
                    has_personalized_data: false,
                    context_data_points: 0,
                    intent,
                    degraded: true,
                });
            }
        };

        let matches = self.retrieve(user_id, embedding).await;
        let prompt = ContextBuilder::build_prompt(message, &matches, persona);

        let mut messages = history;
        messages.push(Message::user(prompt));
        let answer = self.complete(messages).await?;

        info!(
            %intent,
            context_data_points = matches.len(),
            "Chat answered"
        );

        Ok(ChatOutcome {
            message: answer,
            has_personalized_data: !matches.is_empty(),
            context_data_points: matches.len(),
            intent,
            degraded: false,
        })
    }

    /// Client-supplied history minus system turns and blanks, newest
    /// `history_limit` entries kept.
    fn bounded_history(&self, history: &[Message]) -> Vec<Message> {
        let usable: Vec<&Message> = history
            .iter()
            .filter(|m| m.role != MessageRole::System && !m.content.trim().is_empty())
            .collect();
        let skip = usable.len().saturating_sub(self.settings.history_limit);
        usable.into_iter().skip(skip).cloned().collect()
    }

    async fn embed_query(&self, message: &str) -> Result<Vec<f32>, EmbeddingError> {
        let span = info_span!(
            "gen_ai.embed",
            gen_ai.operation.name = OP_EMBEDDINGS,
            gen_ai.request.model = self.embedder.model_name(),
        );

        let limit = self.settings.embed_timeout;
        timeout(limit, self.embedder.embed(message).instrument(span))
            .await
            .map_err(|_| EmbeddingError::Timeout(limit.as_millis() as u64))?
    }

    /// Best-effort: any failure yields an empty list.
    async fn retrieve(&self, user_id: &str, embedding: Vec<f32>) -> Vec<RetrievedMatch> {
        let query = VectorQuery {
            vector: embedding,
            top_k: self.settings.top_k,
            owner_filter: Some(user_id.to_string()),
        };

        let limit = self.settings.retrieve_timeout;
        let result = timeout(limit, self.store.query(&query, user_id))
            .await
            .map_err(|_| VectorStoreError::Timeout(limit.as_millis() as u64))
            .and_then(|r| r);

        match result {
            Ok(mut matches) => {
                matches.retain(|m| m.score >= self.settings.min_score);
                matches.truncate(self.settings.top_k);
                debug!(count = matches.len(), "Retrieved personal context");
                matches
            }
            Err(e) => {
                warn!(error = %e, "Context retrieval failed; continuing without personal context");
                Vec::new()
            }
        }
    }

    async fn complete(&self, messages: Vec<Message>) -> Result<String, LlmError> {
        let request = CompletionRequest {
            model: self.settings.model.clone(),
            messages,
            max_tokens: self.settings.max_tokens,
            temperature: Some(self.settings.temperature),
        };

        let span = info_span!(
            "gen_ai.complete",
            gen_ai.operation.name = OP_CHAT,
            gen_ai.provider.name = self.llm.name(),
            gen_ai.request.model = %request.model,
            gen_ai.request.max_tokens = request.max_tokens,
            gen_ai.request.temperature = ?request.temperature,
            gen_ai.usage.input_tokens = Empty,
            gen_ai.usage.output_tokens = Empty,
            gen_ai.response.finish_reasons = Empty,
        );

        let limit = self.settings.complete_timeout;
        let response = timeout(limit, self.llm.complete(&request).instrument(span.clone()))
            .await
            .map_err(|_| LlmError::Timeout(limit.as_millis() as u64))??;

        span.record(GEN_AI_USAGE_INPUT_TOKENS, response.usage.input_tokens);
        span.record(GEN_AI_USAGE_OUTPUT_TOKENS, response.usage.output_tokens);
        span.record(
            GEN_AI_RESPONSE_FINISH_REASONS,
            response.stop_reason.to_string().as_str(),
        );

        let content = response.content.trim();
        if content.is_empty() {
            return Err(LlmError::Provider {
                message: "completion returned no content".into(),
            });
        }

        Ok(content.to_string())
    }
}
