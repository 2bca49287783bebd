//! OpenTelemetry GenAI Semantic Convention attribute names.
//!
//! Span fields must be declared with literal names in the `info_span!` call;
//! these constants are used to `record` values onto fields declared
//! `Empty` and as operation-name values.
//!
//! Field names declared on provider-call spans:
//! `gen_ai.operation.name`, `gen_ai.provider.name`, `gen_ai.request.model`,
//! `gen_ai.request.max_tokens`, `gen_ai.request.temperature`, plus the
//! recorded attributes below.

/// The number of input tokens consumed.
pub const GEN_AI_USAGE_INPUT_TOKENS: &str = "gen_ai.usage.input_tokens";

/// The number of output tokens generated.
pub const GEN_AI_USAGE_OUTPUT_TOKENS: &str = "gen_ai.usage.output_tokens";

/// The finish reason for the response (e.g., "end_turn", "max_tokens").
pub const GEN_AI_RESPONSE_FINISH_REASONS: &str = "gen_ai.response.finish_reasons";

// --- Operation name values ---

/// Chat completion.
pub const OP_CHAT: &str = "chat";

/// Text embedding.
pub const OP_EMBEDDINGS: &str = "embeddings";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_names_share_namespace() {
        for name in [
            GEN_AI_USAGE_INPUT_TOKENS,
            GEN_AI_USAGE_OUTPUT_TOKENS,
            GEN_AI_RESPONSE_FINISH_REASONS,
        ] {
            assert!(name.starts_with("gen_ai."));
        }
    }
}
