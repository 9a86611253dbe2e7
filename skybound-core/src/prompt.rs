use serde_json::{Value, json};

use crate::domain::SearchParams;

/// Everything the provider needs for one structured-generation round trip.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub prompt: String,
    pub schema: Value,
}

/// Derive the instruction and the response schema from one query.
pub fn build_request(params: &SearchParams) -> GenerationRequest {
    GenerationRequest {
        prompt: build_prompt(params),
        schema: response_schema(),
    }
}

/// Deterministic natural-language instruction for the generator.
///
/// The transport hint either asks for a mix across all four kinds or pins
/// generation to exactly one canonical token.
pub fn build_prompt(params: &SearchParams) -> String {
    let transport_hint = match params.transport.kind() {
        Some(kind) => format!("Restrict every option to transport type: {}", kind.token()),
        None => {
            "Offer a varied mix of transport (planes, trains, buses and sea ferries).".to_string()
        }
    };

    let return_line = params
        .return_date
        .as_deref()
        .map(|date| format!("\nReturn date: {date}"))
        .unwrap_or_default();

    format!(
        r#"Act as a senior travel data analyst. Simulate a real-time API aggregation across leading online travel agents for:
Origin: {origin}
Destination: {destination}
Date: {departure_date}{return_line}
Passengers: {passengers}
Budget ceiling: {max_budget}
Preference: {preference}

{transport_hint}

STRICT RULES for the 'type' field:
- Airlines use 'PLANE'
- Railways use 'TRAIN'
- Bus and shuttle operators use 'BUS'
- Ferries and sea carriers use 'SEA'
Use exactly one of these four tokens per item.

URL rules:
- This is a demo. Never invent deep booking links, they would 404.
- Use each partner's generic category landing page as the affiliate URL.
- Example: Tiket.com flights use 'https://www.tiket.com/pesawat'.
- Example: Traveloka trains use 'https://www.traveloka.com/en-id/kereta-api'.
- Example: Pelni ferries use 'https://www.pelni.co.id/reservasi-tiket'.

Output rules:
1. Produce 5-7 varied travel options.
2. Score every option 0-100 against the stated preference.
3. The analysis paragraph must mention that prices are real-time estimates.
4. Keep the copy professional and convincing."#,
        origin = params.origin,
        destination = params.destination,
        departure_date = params.departure_date,
        passengers = params.passengers,
        max_budget = params.max_budget,
        preference = params.preference.token(),
    )
}

/// Structured-output schema the response must conform to.
///
/// Required per option: id, otaName, providerName, type, price, currency,
/// tags, score. The envelope requires options and aiAnalysis. Everything
/// else is optional.
pub fn response_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "options": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "id": { "type": "string" },
                        "otaName": { "type": "string" },
                        "providerName": { "type": "string" },
                        "type": {
                            "type": "string",
                            "description": "One of: PLANE, TRAIN, BUS or SEA"
                        },
                        "departureTime": { "type": "string" },
                        "arrivalTime": { "type": "string" },
                        "duration": { "type": "string" },
                        "price": { "type": "number" },
                        "currency": { "type": "string" },
                        "class": { "type": "string" },
                        "availableSeats": { "type": "number" },
                        "affiliateUrl": { "type": "string" },
                        "tags": {
                            "type": "array",
                            "items": { "type": "string" }
                        },
                        "score": { "type": "number" },
                        "upsellOptions": {
                            "type": "array",
                            "items": {
                                "type": "object",
                                "properties": {
                                    "label": { "type": "string" },
                                    "price": { "type": "number" }
                                },
                                "required": ["label", "price"]
                            }
                        }
                    },
                    "required": [
                        "id", "otaName", "providerName", "price",
                        "currency", "tags", "score", "type"
                    ]
                }
            },
            "aiAnalysis": { "type": "string" },
            "suggestedUpsell": { "type": "string" }
        },
        "required": ["options", "aiAnalysis"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Preference, TransportSelection};

    fn params(transport: TransportSelection) -> SearchParams {
        SearchParams {
            origin: "Jakarta (CGK/HLP)".to_string(),
            destination: "Bali (DPS)".to_string(),
            departure_date: "2026-08-10".to_string(),
            return_date: None,
            passengers: 2,
            max_budget: 5_000_000.0,
            preference: Preference::Cheapest,
            transport,
        }
    }

    #[test]
    fn all_selection_requests_a_mix() {
        let prompt = build_prompt(&params(TransportSelection::All));
        assert!(prompt.contains("varied mix of transport"));
        assert!(!prompt.contains("Restrict every option"));
    }

    #[test]
    fn concrete_selection_names_exactly_its_token() {
        let prompt = build_prompt(&params(TransportSelection::Train));
        assert!(prompt.contains("Restrict every option to transport type: TRAIN"));
        assert!(!prompt.contains("Restrict every option to transport type: PLANE"));
    }

    #[test]
    fn prompt_carries_route_and_preference() {
        let prompt = build_prompt(&params(TransportSelection::All));
        assert!(prompt.contains("Origin: Jakarta (CGK/HLP)"));
        assert!(prompt.contains("Destination: Bali (DPS)"));
        assert!(prompt.contains("Preference: CHEAPEST"));
        assert!(prompt.contains("real-time estimates"));
        assert!(prompt.contains("5-7"));
    }

    #[test]
    fn return_date_is_included_when_present() {
        let mut p = params(TransportSelection::All);
        p.return_date = Some("2026-08-17".to_string());
        let prompt = build_prompt(&p);
        assert!(prompt.contains("Return date: 2026-08-17"));
    }

    #[test]
    fn schema_declares_required_option_keys() {
        let schema = response_schema();
        let required = schema["properties"]["options"]["items"]["required"]
            .as_array()
            .unwrap();
        for key in [
            "id",
            "otaName",
            "providerName",
            "type",
            "price",
            "currency",
            "tags",
            "score",
        ] {
            assert!(required.iter().any(|v| v == key), "missing {key}");
        }
        assert!(!required.iter().any(|v| v == "departureTime"));
        assert!(!required.iter().any(|v| v == "availableSeats"));

        let envelope = schema["required"].as_array().unwrap();
        assert!(envelope.iter().any(|v| v == "options"));
        assert!(envelope.iter().any(|v| v == "aiAnalysis"));
        assert!(!envelope.iter().any(|v| v == "suggestedUpsell"));
    }
}
