use serde::{Deserialize, Serialize};

/// Canonical transport kinds the generator is allowed to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransportKind {
    Plane,
    Train,
    Bus,
    Sea,
}

impl TransportKind {
    pub const ALL: [TransportKind; 4] = [
        TransportKind::Plane,
        TransportKind::Train,
        TransportKind::Bus,
        TransportKind::Sea,
    ];

    pub fn token(&self) -> &'static str {
        match self {
            TransportKind::Plane => "PLANE",
            TransportKind::Train => "TRAIN",
            TransportKind::Bus => "BUS",
            TransportKind::Sea => "SEA",
        }
    }
}

/// Transport filter chosen on the search form. `All` is the sentinel that
/// asks the generator for a mix across every kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransportSelection {
    #[default]
    All,
    Plane,
    Train,
    Bus,
    Sea,
}

impl TransportSelection {
    /// The concrete kind this selection constrains to, if any.
    pub fn kind(&self) -> Option<TransportKind> {
        match self {
            TransportSelection::All => None,
            TransportSelection::Plane => Some(TransportKind::Plane),
            TransportSelection::Train => Some(TransportKind::Train),
            TransportSelection::Bus => Some(TransportKind::Bus),
            TransportSelection::Sea => Some(TransportKind::Sea),
        }
    }
}

/// Ranking preference stated by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Preference {
    Cheapest,
    Fastest,
    #[default]
    BestValue,
}

impl Preference {
    pub fn token(&self) -> &'static str {
        match self {
            Preference::Cheapest => "CHEAPEST",
            Preference::Fastest => "FASTEST",
            Preference::BestValue => "BEST_VALUE",
        }
    }
}

/// One user query. Built once per form submission, never mutated after.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    pub origin: String,
    pub destination: String,
    pub departure_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_date: Option<String>,
    pub passengers: u32,
    pub max_budget: f64,
    pub preference: Preference,
    #[serde(default, rename = "transportType")]
    pub transport: TransportSelection,
}

/// Paid add-on attached to an option (seat selection, meals, lounge...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpsellOption {
    pub label: String,
    pub price: f64,
}

/// One simulated bookable itinerary. Lives only for the duration of the
/// search response that carried it; `id` is unique per batch, not globally.
///
/// `mode` is free text on the wire: the generator is instructed to use the
/// canonical tokens but the contract tolerates anything, so parsing never
/// rejects an unknown kind. Presentation handles the fallback.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelOption {
    pub id: String,
    pub ota_name: String,
    pub provider_name: String,
    #[serde(rename = "type")]
    pub mode: String,
    #[serde(default)]
    pub departure_time: String,
    #[serde(default)]
    pub arrival_time: String,
    #[serde(default)]
    pub duration: String,
    pub price: f64,
    pub currency: String,
    #[serde(default, rename = "class")]
    pub fare_class: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_seats: Option<u32>,
    #[serde(default)]
    pub affiliate_url: String,
    pub tags: Vec<String>,
    pub score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upsell_options: Option<Vec<UpsellOption>>,
}

/// Response envelope of one query. Replaces the previous result wholesale.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub options: Vec<TravelOption>,
    pub ai_analysis: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_upsell: Option<String>,
}
