use async_trait::async_trait;
use rig::{agent::Agent, client::CompletionClient, completion::Chat, providers::openrouter};
use serde_json::json;
use tracing::debug;

use crate::error::{Result, TravelError};
use crate::prompt::GenerationRequest;

/// Narrow seam to the structured-generation endpoint: (prompt, schema) in,
/// raw textual payload out. Keeps the provider swappable without touching
/// prompt construction or presentation.
#[async_trait]
pub trait StructuredGenerator: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> Result<String>;
}

/// OpenRouter-backed generator.
///
/// The API key is read from the environment per call, so a missing
/// credential surfaces as a `Configuration` error exactly when a query is
/// attempted, never earlier. One round trip per call; no retry, no backoff,
/// no timeout beyond the transport default.
pub struct OpenRouterGenerator {
    model: String,
}

impl OpenRouterGenerator {
    pub const DEFAULT_MODEL: &'static str = "openai/gpt-4.1-mini";

    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
        }
    }

    fn agent(&self, request: &GenerationRequest) -> Result<Agent<openrouter::CompletionModel>> {
        let api_key = std::env::var("OPENROUTER_API_KEY")
            .map_err(|_| TravelError::Configuration("OPENROUTER_API_KEY not set".to_string()))?;
        let client = openrouter::Client::new(&api_key);
        Ok(client
            .agent(&self.model)
            .additional_params(json!({
                "response_format": {
                    "type": "json_schema",
                    "json_schema": {
                        "name": "travel_search_result",
                        "strict": true,
                        "schema": request.schema.clone(),
                    }
                }
            }))
            .build())
    }
}

impl Default for OpenRouterGenerator {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MODEL)
    }
}

#[async_trait]
impl StructuredGenerator for OpenRouterGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<String> {
        let agent = self.agent(request)?;
        debug!(model = %self.model, "calling structured generation endpoint");
        agent
            .chat(request.prompt.as_str(), vec![])
            .await
            .map_err(|e| TravelError::Transport(e.to_string()))
    }
}
