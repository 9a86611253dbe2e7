use serde::Deserialize;
use skybound_core::{Preference, SearchParams, TransportSelection};

/// Suggestion list offered for the origin/destination fields. Free text is
/// still accepted; these are hints, not an allowlist.
pub const POPULAR_CITIES: [&str; 13] = [
    "Jakarta (CGK/HLP)",
    "Surabaya (SUB)",
    "Bali (DPS)",
    "Medan (KNO)",
    "Yogyakarta (YIA)",
    "Bandung (BDO)",
    "Makassar (UPG)",
    "Semarang (SRG)",
    "Palembang (PLM)",
    "Batam (BTH)",
    "Ambon (AMQ)",
    "Jayapura (DJJ)",
    "Lombok (LOP)",
];

fn default_passengers() -> u32 {
    1
}

fn default_max_budget() -> f64 {
    5_000_000.0
}

/// One form submission. Defaults mirror the original search form: one
/// passenger, Rp 5.000.000 budget, best-value preference, all transport.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub origin: String,
    pub destination: String,
    pub departure_date: String,
    #[serde(default)]
    pub return_date: Option<String>,
    #[serde(default = "default_passengers")]
    pub passengers: u32,
    #[serde(default = "default_max_budget")]
    pub max_budget: f64,
    #[serde(default)]
    pub preference: Preference,
    #[serde(default, rename = "transportType")]
    pub transport: TransportSelection,
}

impl SearchRequest {
    /// Required-field semantics of the form: origin, destination and
    /// departure date must be non-empty, passengers positive, budget
    /// non-negative. Budget and passenger count get no validation beyond
    /// that.
    pub fn into_params(self) -> Result<SearchParams, String> {
        let origin = self.origin.trim().to_string();
        let destination = self.destination.trim().to_string();
        let departure_date = self.departure_date.trim().to_string();

        if origin.is_empty() {
            return Err("origin is required".to_string());
        }
        if destination.is_empty() {
            return Err("destination is required".to_string());
        }
        if departure_date.is_empty() {
            return Err("departureDate is required".to_string());
        }
        if self.passengers == 0 {
            return Err("passengers must be at least 1".to_string());
        }
        if !self.max_budget.is_finite() || self.max_budget < 0.0 {
            return Err("maxBudget must be a non-negative number".to_string());
        }

        Ok(SearchParams {
            origin,
            destination,
            departure_date,
            return_date: self.return_date,
            passengers: self.passengers,
            max_budget: self.max_budget,
            preference: self.preference,
            transport: self.transport,
        })
    }
}

/// Service configuration read from the environment at startup. The API
/// credential is intentionally not read here: its absence must surface on
/// the first query, not at boot.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub bind_addr: String,
    pub model: String,
}

impl ServiceConfig {
    pub fn from_env() -> Self {
        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string()),
            model: std::env::var("SKYBOUND_MODEL")
                .unwrap_or_else(|_| skybound_core::OpenRouterGenerator::DEFAULT_MODEL.to_string()),
        }
    }
}
