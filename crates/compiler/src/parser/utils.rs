/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 *
 * Utility functions for parsing YAML and JSON content.
 * Works only with in-memory strings (no file I/O).
 */

use crate::parser::error::ParseError;
use serde_json::{Map, Value};
use yaml_rust::{Yaml, YamlLoader};

/// Parse YAML or JSON content from a string.
///
/// Detects the format from the file extension when one is given, otherwise
/// tries JSON first (stricter), then YAML.
///
/// # Errors
///
/// Returns `ParseError::InvalidJson` or `ParseError::InvalidYaml` when the
/// content cannot be parsed.
pub fn parse_yaml_or_json(content: &str, file_path: Option<&str>) -> Result<Value, ParseError> {
    if let Some(path) = file_path {
        let path_lower = path.to_lowercase();
        if path_lower.ends_with(".json") {
            return parse_json(content).map_err(ParseError::InvalidJson);
        }
        if path_lower.ends_with(".yaml") || path_lower.ends_with(".yml") {
            return parse_yaml(content).map_err(ParseError::InvalidYaml);
        }
    }

    match parse_json(content) {
        Ok(value) => Ok(value),
        Err(_) => parse_yaml(content).map_err(ParseError::InvalidYaml),
    }
}

fn parse_json(content: &str) -> Result<Value, String> {
    serde_json::from_str(content).map_err(|e| format!("JSON parse error: {e}"))
}

/// Parse YAML content with `yaml-rust`, then convert the first document to
/// `serde_json::Value`. Mapping order is preserved.
fn parse_yaml(content: &str) -> Result<Value, String> {
    let docs =
        YamlLoader::load_from_str(content).map_err(|e| format!("YAML parse error: {e}"))?;

    let first = docs
        .first()
        .ok_or_else(|| "YAML document is empty".to_string())?;

    yaml_to_json_value(first).ok_or_else(|| "Failed to convert YAML to JSON value".to_string())
}

fn yaml_to_json_value(yaml: &Yaml) -> Option<Value> {
    match yaml {
        Yaml::Real(s) => Some(
            s.parse::<f64>()
                .ok()
                .and_then(serde_json::Number::from_f64)
                .map_or_else(|| Value::String(s.clone()), Value::Number),
        ),
        Yaml::Integer(i) => Some(Value::from(*i)),
        Yaml::String(s) => Some(Value::String(s.clone())),
        Yaml::Boolean(b) => Some(Value::Bool(*b)),
        Yaml::Array(arr) => Some(Value::Array(
            arr.iter().filter_map(yaml_to_json_value).collect(),
        )),
        Yaml::Hash(hash) => {
            let mut map = Map::new();
            for (k, v) in hash {
                if let (Some(key), Some(value)) = (yaml_to_string(k), yaml_to_json_value(v)) {
                    map.insert(key, value);
                }
            }
            Some(Value::Object(map))
        }
        Yaml::Null => Some(Value::Null),
        // Aliases have no JSON counterpart
        Yaml::BadValue | Yaml::Alias(_) => None,
    }
}

/// Convert a YAML mapping key to a string key.
fn yaml_to_string(yaml: &Yaml) -> Option<String> {
    match yaml {
        Yaml::String(s) | Yaml::Real(s) => Some(s.clone()),
        Yaml::Integer(i) => Some(i.to_string()),
        Yaml::Boolean(b) => Some(b.to_string()),
        _ => None,
    }
}
