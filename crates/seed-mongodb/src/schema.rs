//! Collection validator for person documents.
//!
//! `person_validator` builds the `$jsonSchema` validator attached when the
//! collection is created. MongoDB enforces it server-side; `validate_document`
//! evaluates the same subset of `$jsonSchema` keywords locally for
//! `MemoryStore`.

use bson::{doc, Bson, Document};
use regex::Regex;

/// Pattern every email must match.
pub const EMAIL_PATTERN: &str = "^.+@.+$";

/// Fields a person document must carry.
pub const REQUIRED_FIELDS: [&str; 3] = ["name", "age", "email"];

/// Build the `$jsonSchema` schema for person documents.
pub fn person_json_schema() -> Document {
    doc! {
        "bsonType": "object",
        "required": REQUIRED_FIELDS.to_vec(),
        "properties": {
            "name": {
                "bsonType": "string",
                "description": "must be a string and is required",
            },
            "age": {
                "bsonType": "int",
                "minimum": 0,
                "description": "must be an integer and is required",
            },
            "email": {
                "bsonType": "string",
                "pattern": EMAIL_PATTERN,
                "description": "must be a string and match the regular expression pattern",
            },
        },
    }
}

/// Build the collection validator wrapping `person_json_schema`.
pub fn person_validator() -> Document {
    doc! { "$jsonSchema": person_json_schema() }
}

/// Check `document` against a `{ "$jsonSchema": ... }` validator.
///
/// Supports `bsonType`, `required`, `properties`, `minimum`, `maximum` and
/// `pattern`. Returns the first violation found.
pub fn validate_document(validator: &Document, document: &Document) -> Result<(), String> {
    let Ok(schema) = validator.get_document("$jsonSchema") else {
        return Ok(());
    };

    if let Ok(required) = schema.get_array("required") {
        for field in required.iter().filter_map(Bson::as_str) {
            if !document.contains_key(field) {
                return Err(format!("missing required field '{field}'"));
            }
        }
    }

    let Ok(properties) = schema.get_document("properties") else {
        return Ok(());
    };

    for (field, rules) in properties {
        let (Some(value), Bson::Document(rules)) = (document.get(field), rules) else {
            continue;
        };
        validate_field(field, value, rules)?;
    }

    Ok(())
}

fn validate_field(field: &str, value: &Bson, rules: &Document) -> Result<(), String> {
    if let Ok(expected) = rules.get_str("bsonType") {
        if !matches_bson_type(value, expected) {
            return Err(format!(
                "field '{field}' must be of type '{expected}', got {:?}",
                value.element_type()
            ));
        }
    }

    if let Some(number) = as_number(value) {
        if let Some(minimum) = rules.get("minimum").and_then(as_number) {
            if number < minimum {
                return Err(format!("field '{field}' must be >= {minimum}, got {number}"));
            }
        }
        if let Some(maximum) = rules.get("maximum").and_then(as_number) {
            if number > maximum {
                return Err(format!("field '{field}' must be <= {maximum}, got {number}"));
            }
        }
    }

    if let (Ok(pattern), Bson::String(text)) = (rules.get_str("pattern"), value) {
        let regex = Regex::new(pattern)
            .map_err(|e| format!("invalid pattern for field '{field}': {e}"))?;
        if !regex.is_match(text) {
            return Err(format!(
                "field '{field}' value '{text}' does not match pattern '{pattern}'"
            ));
        }
    }

    Ok(())
}

fn matches_bson_type(value: &Bson, expected: &str) -> bool {
    match expected {
        "string" => matches!(value, Bson::String(_)),
        "int" => matches!(value, Bson::Int32(_)),
        "long" => matches!(value, Bson::Int64(_)),
        "double" => matches!(value, Bson::Double(_)),
        "number" => matches!(value, Bson::Int32(_) | Bson::Int64(_) | Bson::Double(_)),
        "bool" => matches!(value, Bson::Boolean(_)),
        "object" => matches!(value, Bson::Document(_)),
        "array" => matches!(value, Bson::Array(_)),
        _ => true,
    }
}

fn as_number(value: &Bson) -> Option<f64> {
    match value {
        Bson::Int32(v) => Some(f64::from(*v)),
        Bson::Int64(v) => Some(*v as f64),
        Bson::Double(v) => Some(*v),
        _ => None,
    }
}
