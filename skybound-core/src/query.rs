use std::sync::Arc;

use serde_json::Value;
use tracing::info;

use crate::domain::{SearchParams, SearchResult};
use crate::error::{Result, TravelError};
use crate::prompt;
use crate::provider::StructuredGenerator;
use crate::validate;

/// Single round trip to the structured-generation endpoint.
///
/// Owns the external-dependency boundary: builds the instruction and
/// schema, dispatches one call, and turns the textual payload into a
/// validated `SearchResult`. No caching, no retries, no persistence.
pub struct TravelQueryService {
    generator: Arc<dyn StructuredGenerator>,
}

impl TravelQueryService {
    pub fn new(generator: Arc<dyn StructuredGenerator>) -> Self {
        Self { generator }
    }

    pub async fn query(&self, params: &SearchParams) -> Result<SearchResult> {
        let request = prompt::build_request(params);
        info!(
            origin = %params.origin,
            destination = %params.destination,
            transport = ?params.transport,
            "dispatching travel query"
        );

        let payload = self.generator.generate(&request).await?;
        if payload.trim().is_empty() {
            return Err(TravelError::EmptyResponse);
        }

        let value: Value = serde_json::from_str(&payload)
            .map_err(|e| TravelError::MalformedResponse(e.to_string()))?;
        validate::validate(&request.schema, &value).map_err(TravelError::MalformedResponse)?;

        let result: SearchResult = serde_json::from_value(value)
            .map_err(|e| TravelError::MalformedResponse(e.to_string()))?;

        info!(options = result.options.len(), "travel query resolved");
        Ok(result)
    }
}
