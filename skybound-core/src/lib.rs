pub mod domain;
pub mod error;
pub mod presentation;
pub mod prompt;
pub mod provider;
pub mod query;
pub mod session;
pub mod validate;

// Re-export commonly used types
pub use domain::{
    Preference, SearchParams, SearchResult, TransportKind, TransportSelection, TravelOption,
    UpsellOption,
};
pub use error::{Result, TravelError};
pub use presentation::{BadgeStyle, OptionCard, ResultView, TransportIcon, present};
pub use prompt::{GenerationRequest, build_prompt, build_request, response_schema};
pub use provider::{OpenRouterGenerator, StructuredGenerator};
pub use query::TravelQueryService;
pub use session::{QueryTicket, SearchSession, SearchState};
