/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 */

use serde_json::Value;

use crate::constants::AZURE_SETTINGS_KEY;
use crate::parser::service::event_kinds;
use crate::validator::common::validate_with_schema;
use crate::validator::error::{ValidationError, ValidationResult};
use crate::validator::type_guards::{function_events, is_record, service_functions};

/// Validate a service description against the service schema.
pub fn validate_service(schema: &Value, file_path: &str, data: &Value) -> ValidationResult {
    validate_with_schema(schema, file_path, data, validate_event_rules)
}

/// Event rules the schema cannot express: one kind per event and an
/// object-valued `x-azure-settings`.
fn validate_event_rules(file_path: &str, data: &Value) -> Vec<ValidationError> {
    let Some(functions) = service_functions(data) else {
        return Vec::new();
    };

    let mut errors = Vec::new();

    for (function_name, function) in functions {
        let Some(events) = function_events(function) else {
            continue;
        };

        for (index, event) in events.iter().enumerate() {
            let Some(event_obj) = event.as_object() else {
                continue;
            };
            let path = format!("/functions/{function_name}/events/{index}");

            let kinds = event_kinds(event_obj);
            if kinds.len() != 1 {
                let message = if kinds.is_empty() {
                    format!("Event {index} of function '{function_name}' declares no event kind")
                } else {
                    format!(
                        "Event {index} of function '{function_name}' declares {} event kinds \
                         ({}); expected exactly one",
                        kinds.len(),
                        kinds.join(", ")
                    )
                };
                errors.push(
                    ValidationError::new(file_path, message)
                        .at(path.clone())
                        .suggest("Split the event into one list entry per event kind."),
                );
            }

            if let Some(settings) = event_obj.get(AZURE_SETTINGS_KEY) {
                if !settings.is_null() && !is_record(settings) {
                    errors.push(
                        ValidationError::new(
                            file_path,
                            format!(
                                "'{AZURE_SETTINGS_KEY}' of event {index} in function \
                                 '{function_name}' must be a mapping"
                            ),
                        )
                        .at(format!("{path}/{AZURE_SETTINGS_KEY}"))
                        .suggest("Write binding settings as key: value pairs."),
                    );
                }
            }
        }
    }

    errors
}
