/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 */

use std::collections::HashSet;

use serde_json::Value;
use tracing::warn;

use crate::validator::common::validate_with_schema;
use crate::validator::error::{ValidationError, ValidationResult};
use crate::validator::type_guards::{catalog_bindings, string_field};

/// Validate a binding catalog against the catalog schema.
///
/// Shared types and colliding display names are reported as warnings: the
/// index keeps such entries and lookups return the first one.
pub fn validate_catalog(schema: &Value, file_path: &str, data: &Value) -> ValidationResult {
    let result = validate_with_schema(schema, file_path, data, validate_catalog_rules);

    let Some(bindings) = catalog_bindings(data) else {
        return result;
    };
    let mut warnings = shared_types(file_path, bindings);
    warnings.extend(colliding_display_names(file_path, bindings));
    for warning in &warnings {
        warn!(file = %warning.file, path = ?warning.path, "{}", warning.message);
    }
    result.with_warnings(warnings)
}

fn validate_catalog_rules(file_path: &str, data: &Value) -> Vec<ValidationError> {
    let Some(bindings) = catalog_bindings(data) else {
        return Vec::new();
    };
    validate_enum_settings(file_path, bindings)
}

/// Later entries of a shared type are reachable only through a direction
/// override, so their display name must have the `$<type><direction>_displayName`
/// shape.
fn shared_types(file_path: &str, bindings: &[Value]) -> Vec<ValidationError> {
    let mut seen = HashSet::new();
    let mut warnings = Vec::new();

    for (index, binding) in bindings.iter().enumerate() {
        let Some(binding_type) = string_field(binding, "type") else {
            continue;
        };
        if seen.insert(binding_type) {
            continue;
        }
        let display_name = string_field(binding, "displayName").unwrap_or_default();
        if !reachable_by_direction(binding_type, display_name) {
            warnings.push(
                ValidationError::new(
                    file_path,
                    format!(
                        "Entry for shared binding type '{binding_type}' is unreachable: \
                         '{display_name}' does not match a direction override"
                    ),
                )
                .at(format!("/bindings/{index}/displayName"))
                .suggest(format!("Name it ${binding_type}<Direction>_displayName.")),
            );
        }
    }

    warnings
}

fn reachable_by_direction(binding_type: &str, display_name: &str) -> bool {
    let display_name = display_name.to_lowercase();
    let prefix = format!("${}", binding_type.to_lowercase());
    display_name
        .strip_prefix(&prefix)
        .and_then(|rest| rest.strip_suffix("_displayname"))
        .is_some_and(|direction| !direction.is_empty())
}

/// Direction overrides resolve a colliding display name to its first entry.
fn colliding_display_names(file_path: &str, bindings: &[Value]) -> Vec<ValidationError> {
    let mut seen = HashSet::new();
    let mut warnings = Vec::new();

    for (index, binding) in bindings.iter().enumerate() {
        if let Some(display_name) = string_field(binding, "displayName") {
            if !seen.insert(display_name.to_lowercase()) {
                warnings.push(
                    ValidationError::new(
                        file_path,
                        format!("Duplicate display name (case-insensitive): '{display_name}'"),
                    )
                    .at(format!("/bindings/{index}/displayName")),
                );
            }
        }
    }

    warnings
}

/// Enum settings need at least one choice.
fn validate_enum_settings(file_path: &str, bindings: &[Value]) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for (binding_index, binding) in bindings.iter().enumerate() {
        let binding_type = string_field(binding, "type").unwrap_or("unnamed");
        let Some(settings) = binding.get("settings").and_then(Value::as_array) else {
            continue;
        };

        for (setting_index, setting) in settings.iter().enumerate() {
            if string_field(setting, "value") != Some("enum") {
                continue;
            }
            let has_choices = setting
                .get("enum")
                .and_then(Value::as_array)
                .is_some_and(|choices| !choices.is_empty());
            if !has_choices {
                let name = string_field(setting, "name").unwrap_or("unnamed");
                errors.push(
                    ValidationError::new(
                        file_path,
                        format!("Enum setting '{name}' of binding '{binding_type}' has no choices"),
                    )
                    .at(format!("/bindings/{binding_index}/settings/{setting_index}/enum"))
                    .suggest("Add an 'enum' array with at least one { value } entry."),
                );
            }
        }
    }

    errors
}
