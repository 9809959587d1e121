/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 */
use serde_json::Value;

/// Service description schema, embedded at compile time (no file I/O)
const SERVICE_SCHEMA_JSON: &str = include_str!("../../../schemas/service.schema.v1.json");

/// Binding catalog schema, embedded at compile time (no file I/O)
const CATALOG_SCHEMA_JSON: &str = include_str!("../../../schemas/binding-catalog.schema.v1.json");

/// Load the service description schema
///
/// # Panics
///
/// Panics if the embedded schema JSON is invalid (this should never happen).
#[must_use]
pub fn load_service_schema() -> Value {
    serde_json::from_str(SERVICE_SCHEMA_JSON)
        .expect("Failed to parse embedded service schema - this should never happen")
}

/// Load the binding catalog schema
///
/// # Panics
///
/// Panics if the embedded schema JSON is invalid (this should never happen).
#[must_use]
pub fn load_catalog_schema() -> Value {
    serde_json::from_str(CATALOG_SCHEMA_JSON)
        .expect("Failed to parse embedded catalog schema - this should never happen")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_service_schema() {
        let schema = load_service_schema();
        assert!(schema.is_object());
        assert_eq!(schema["$schema"], "http://json-schema.org/draft-07/schema#");
        assert_eq!(schema["required"][0], "functions");
    }

    #[test]
    fn test_load_catalog_schema() {
        let schema = load_catalog_schema();
        assert!(schema.is_object());
        assert_eq!(schema["$schema"], "http://json-schema.org/draft-07/schema#");
    }
}
