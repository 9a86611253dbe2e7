//! Client-side check of a parsed generation payload against the declared
//! response schema. The remote service promises to honor the schema; this
//! verifies required keys and primitive types before any deserialization,
//! so a drifting provider fails with a named path instead of a serde error.

use serde_json::Value;

/// Validate `value` against a JSON-Schema-like descriptor.
///
/// Understands the subset the response schema uses: `type` of object,
/// array, string, number and boolean, with `properties`, `required` and
/// `items`. Unknown keys in the payload pass through untouched.
pub fn validate(schema: &Value, value: &Value) -> Result<(), String> {
    validate_at(schema, value, "$")
}

fn validate_at(schema: &Value, value: &Value, path: &str) -> Result<(), String> {
    let Some(expected) = schema.get("type").and_then(Value::as_str) else {
        return Ok(());
    };

    match expected {
        "object" => {
            let Some(object) = value.as_object() else {
                return Err(type_mismatch(path, "object", value));
            };
            if let Some(required) = schema.get("required").and_then(Value::as_array) {
                for key in required.iter().filter_map(Value::as_str) {
                    if !object.contains_key(key) {
                        return Err(format!("{path}.{key}: required field is missing"));
                    }
                }
            }
            if let Some(properties) = schema.get("properties").and_then(Value::as_object) {
                for (key, property_schema) in properties {
                    if let Some(property) = object.get(key) {
                        validate_at(property_schema, property, &format!("{path}.{key}"))?;
                    }
                }
            }
            Ok(())
        }
        "array" => {
            let Some(items) = value.as_array() else {
                return Err(type_mismatch(path, "array", value));
            };
            if let Some(item_schema) = schema.get("items") {
                for (index, item) in items.iter().enumerate() {
                    validate_at(item_schema, item, &format!("{path}[{index}]"))?;
                }
            }
            Ok(())
        }
        "string" => value
            .is_string()
            .then_some(())
            .ok_or_else(|| type_mismatch(path, "string", value)),
        "number" => value
            .is_number()
            .then_some(())
            .ok_or_else(|| type_mismatch(path, "number", value)),
        "boolean" => value
            .is_boolean()
            .then_some(())
            .ok_or_else(|| type_mismatch(path, "boolean", value)),
        _ => Ok(()),
    }
}

fn type_mismatch(path: &str, expected: &str, value: &Value) -> String {
    let actual = match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    };
    format!("{path}: expected {expected}, found {actual}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::response_schema;
    use serde_json::json;

    fn conformant_payload() -> Value {
        json!({
            "options": [{
                "id": "opt-1",
                "otaName": "Traveloka",
                "providerName": "KAI",
                "type": "TRAIN",
                "price": 350000,
                "currency": "IDR",
                "tags": ["CHEAPEST"],
                "score": 82
            }],
            "aiAnalysis": "Prices shown are real-time estimates."
        })
    }

    #[test]
    fn conformant_payload_passes() {
        assert!(validate(&response_schema(), &conformant_payload()).is_ok());
    }

    #[test]
    fn missing_required_envelope_field_is_named() {
        let mut payload = conformant_payload();
        payload.as_object_mut().unwrap().remove("aiAnalysis");
        let err = validate(&response_schema(), &payload).unwrap_err();
        assert!(err.contains("aiAnalysis"), "{err}");
    }

    #[test]
    fn missing_required_option_field_is_named() {
        let mut payload = conformant_payload();
        payload["options"][0].as_object_mut().unwrap().remove("price");
        let err = validate(&response_schema(), &payload).unwrap_err();
        assert!(err.contains("options[0].price"), "{err}");
    }

    #[test]
    fn wrong_primitive_type_is_rejected() {
        let mut payload = conformant_payload();
        payload["options"][0]["price"] = json!("350000");
        let err = validate(&response_schema(), &payload).unwrap_err();
        assert!(err.contains("expected number"), "{err}");
    }

    #[test]
    fn optional_fields_may_be_absent_or_present() {
        let mut payload = conformant_payload();
        assert!(validate(&response_schema(), &payload).is_ok());
        payload["suggestedUpsell"] = json!("Add travel insurance");
        payload["options"][0]["availableSeats"] = json!(12);
        assert!(validate(&response_schema(), &payload).is_ok());
    }

    #[test]
    fn extra_unknown_keys_pass_through() {
        let mut payload = conformant_payload();
        payload["options"][0]["cabinNote"] = json!("window seat");
        assert!(validate(&response_schema(), &payload).is_ok());
    }
}
