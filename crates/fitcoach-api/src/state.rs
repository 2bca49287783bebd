//! Application state wiring all services together.
//!
//! AppState holds the pipeline and indexer used by both CLI and REST API.
//! Both share one embedder and one vector store client.

use std::sync::Arc;
use std::time::Duration;

use fitcoach_core::llm::box_provider::BoxLlmProvider;
use fitcoach_core::memory::box_embedder::BoxEmbedder;
use fitcoach_core::memory::box_vector::BoxVectorStore;
use fitcoach_core::rag::indexer::ActivityIndexer;
use fitcoach_core::rag::pipeline::{PipelineSettings, RagPipeline};
use fitcoach_infra::llm::create_provider;
use fitcoach_infra::secret::{EnvSecretProvider, OPENAI_API_KEY, PINECONE_API_KEY};
use fitcoach_infra::vector::embedder::OpenAiEmbedder;
use fitcoach_infra::vector::pinecone::PineconeStore;
use fitcoach_types::config::FitcoachConfig;

/// Shared application state.
///
/// Used by both CLI commands and REST API handlers.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<RagPipeline>,
    pub indexer: Arc<ActivityIndexer>,
    pub config: Arc<FitcoachConfig>,
}

impl AppState {
    /// Build the real provider clients from config and environment keys.
    pub fn init(config: FitcoachConfig) -> anyhow::Result<Self> {
        fitcoach_infra::config::validate(&config)?;

        let secrets = EnvSecretProvider::new();
        // The same OpenAI key serves embeddings and completions.
        let embedder = BoxEmbedder::new(OpenAiEmbedder::new(
            secrets.require(OPENAI_API_KEY)?,
            &config.embedding,
        )?);
        let store = BoxVectorStore::new(PineconeStore::new(
            secrets.require(PINECONE_API_KEY)?,
            &config.vector_store,
        )?);
        let llm = create_provider(&config.completion, secrets.require(OPENAI_API_KEY)?);

        tracing::info!(
            embedding_model = %config.embedding.model,
            completion_model = %config.completion.model,
            llm_provider = llm.name(),
            "Provider clients ready"
        );

        Ok(Self::from_parts(embedder, store, llm, config))
    }

    /// Wire state from already-built providers.
    pub fn from_parts(
        embedder: BoxEmbedder,
        store: BoxVectorStore,
        llm: BoxLlmProvider,
        config: FitcoachConfig,
    ) -> Self {
        let embedder = Arc::new(embedder);
        let store = Arc::new(store);

        let pipeline = RagPipeline::new(
            embedder.clone(),
            store.clone(),
            Arc::new(llm),
            PipelineSettings::from_config(&config),
        );
        let indexer = ActivityIndexer::new(embedder, store).with_timeouts(
            Duration::from_millis(config.embedding.timeout_ms),
            Duration::from_millis(config.vector_store.timeout_ms),
        );

        Self {
            pipeline: Arc::new(pipeline),
            indexer: Arc::new(indexer),
            config: Arc::new(config),
        }
    }
}
