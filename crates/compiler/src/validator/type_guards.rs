/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 */

use serde_json::{Map, Value};

/// Type guard to check if value is a record/object.
pub fn is_record(value: &Value) -> bool {
    value.is_object()
}

/// The `functions` mapping of a service description.
pub fn service_functions(value: &Value) -> Option<&Map<String, Value>> {
    value.get("functions").and_then(Value::as_object)
}

/// The `events` list of a function declaration.
pub fn function_events(function: &Value) -> Option<&Vec<Value>> {
    function.get("events").and_then(Value::as_array)
}

/// The `bindings` list of a catalog document.
pub fn catalog_bindings(value: &Value) -> Option<&Vec<Value>> {
    value.get("bindings").and_then(Value::as_array)
}

/// A string property of a record.
pub fn string_field<'a>(value: &'a Value, field: &str) -> Option<&'a str> {
    value.get(field).and_then(Value::as_str)
}
