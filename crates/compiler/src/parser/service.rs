/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 *
 * Parser for service descriptions (functions, handlers, events).
 */

use crate::constants::AZURE_SETTINGS_KEY;
use crate::options::CompilerOptions;
use crate::parser::error::ParseError;
use crate::parser::utils::parse_yaml_or_json;
use crate::service::{EventDeclaration, FunctionDefinition, ServiceDefinition};
use serde_json::{Map, Value};

/// Parse a service description from a YAML/JSON string.
///
/// # Errors
///
/// Returns `ParseError` if:
/// - The content is invalid YAML/JSON
/// - The content is not an object or has no `functions` mapping
/// - A function has no string `handler`
/// - An event does not declare exactly one kind
pub fn parse_service(content: &str) -> Result<ServiceDefinition, ParseError> {
    parse_service_from_string(content, None)
}

/// Parse a service description with an optional file path used for format
/// detection.
///
/// # Errors
///
/// See [`parse_service`].
pub fn parse_service_from_string(
    content: &str,
    file_path: Option<&str>,
) -> Result<ServiceDefinition, ParseError> {
    let parsed = parse_yaml_or_json(content, file_path)?;
    parse_service_value(&parsed)
}

/// Convert an already-parsed document into a `ServiceDefinition`.
///
/// # Errors
///
/// See [`parse_service`].
pub fn parse_service_value(data: &Value) -> Result<ServiceDefinition, ParseError> {
    let root = data.as_object().ok_or_else(|| {
        ParseError::InvalidFieldType("Invalid service description: expected an object".to_string())
    })?;

    let functions = root.get("functions").ok_or_else(|| {
        ParseError::MissingField(
            "Invalid service description: missing required field \"functions\"".to_string(),
        )
    })?;
    let functions = functions.as_object().ok_or_else(|| {
        ParseError::InvalidFieldType(
            "Invalid service description: \"functions\" must be a mapping".to_string(),
        )
    })?;

    let functions = functions
        .iter()
        .map(|(name, function)| parse_function(name, function))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ServiceDefinition {
        service: root
            .get("service")
            .and_then(Value::as_str)
            .map(str::to_string),
        options: parse_options(root)?,
        functions,
    })
}

fn parse_options(root: &Map<String, Value>) -> Result<CompilerOptions, ParseError> {
    match root.get("custom").and_then(|c| c.get("azureBindings")) {
        Some(block) => serde_json::from_value(block.clone()).map_err(|e| {
            ParseError::InvalidFieldType(format!("Invalid custom.azureBindings: {e}"))
        }),
        None => Ok(CompilerOptions::default()),
    }
}

fn parse_function(name: &str, function: &Value) -> Result<FunctionDefinition, ParseError> {
    let obj = function.as_object().ok_or_else(|| {
        ParseError::InvalidFieldType(format!("Function \"{name}\" must be a mapping"))
    })?;

    let handler = match obj.get("handler") {
        Some(Value::String(handler)) if !handler.is_empty() => handler.clone(),
        Some(_) => {
            return Err(ParseError::InvalidFieldType(format!(
                "Function \"{name}\": \"handler\" must be a non-empty string"
            )))
        }
        None => {
            return Err(ParseError::MissingField(format!(
                "Function \"{name}\": missing required field \"handler\""
            )))
        }
    };

    let script_file = match obj.get("scriptFile") {
        None | Some(Value::Null) => None,
        Some(Value::String(path)) => Some(path.clone()),
        Some(_) => {
            return Err(ParseError::InvalidFieldType(format!(
                "Function \"{name}\": \"scriptFile\" must be a string"
            )))
        }
    };

    let events = match obj.get("events") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(events)) => events
            .iter()
            .enumerate()
            .map(|(index, event)| parse_event(name, index, event))
            .collect::<Result<Vec<_>, _>>()?,
        Some(_) => {
            return Err(ParseError::InvalidFieldType(format!(
                "Function \"{name}\": \"events\" must be a list"
            )))
        }
    };

    Ok(FunctionDefinition {
        name: name.to_string(),
        handler,
        script_file,
        events,
    })
}

/// Parse one event mapping: exactly one kind key plus optional settings.
pub(crate) fn parse_event(
    function: &str,
    index: usize,
    event: &Value,
) -> Result<EventDeclaration, ParseError> {
    let obj = event.as_object().ok_or_else(|| {
        ParseError::InvalidFieldType(format!(
            "Function \"{function}\", event {index}: expected a mapping"
        ))
    })?;

    let mut kinds = obj.iter().filter(|(key, _)| key.as_str() != AZURE_SETTINGS_KEY);
    let (kind, value) = match (kinds.next(), kinds.next()) {
        (Some(first), None) => first,
        (None, _) => {
            return Err(ParseError::MissingField(format!(
                "Function \"{function}\", event {index}: no event kind declared"
            )))
        }
        (Some(_), Some(_)) => {
            return Err(ParseError::InvalidFieldType(format!(
                "Function \"{function}\", event {index}: expected exactly one event kind, found {}",
                event_kinds(obj).join(", ")
            )))
        }
    };

    let azure_settings = match obj.get(AZURE_SETTINGS_KEY) {
        None | Some(Value::Null) => Map::new(),
        Some(Value::Object(settings)) => settings.clone(),
        Some(_) => {
            return Err(ParseError::InvalidFieldType(format!(
                "Function \"{function}\", event {index}: \"{AZURE_SETTINGS_KEY}\" must be a mapping"
            )))
        }
    };

    Ok(EventDeclaration::new(kind.clone(), value.clone()).with_settings(azure_settings))
}

/// Event kind keys of an event mapping, in declaration order.
pub(crate) fn event_kinds(event: &Map<String, Value>) -> Vec<&str> {
    event
        .keys()
        .map(String::as_str)
        .filter(|key| *key != AZURE_SETTINGS_KEY)
        .collect()
}
