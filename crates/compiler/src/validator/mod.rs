/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 */

pub mod catalog;
pub mod common;
pub mod error;
pub mod service;
pub mod type_guards;


use serde_json::Value;

use crate::schemas;
use crate::validator::catalog::validate_catalog as validate_catalog_impl;
use crate::validator::error::{ValidationError, ValidationResult};
use crate::validator::service::validate_service as validate_service_impl;

/// Validates service descriptions and binding catalogs against JSON schemas
/// plus the rules the schemas cannot express.
pub struct Validator {
    service_schema: Value,
    catalog_schema: Value,
}

impl Validator {
    /// Create a validator with the schemas embedded at compile time.
    pub fn new() -> Self {
        Self {
            service_schema: schemas::load_service_schema(),
            catalog_schema: schemas::load_catalog_schema(),
        }
    }

    /// Create a validator with custom schemas.
    pub fn with_schemas(service_schema: Value, catalog_schema: Value) -> Self {
        Self {
            service_schema,
            catalog_schema,
        }
    }

    /// Validate a service description.
    pub fn validate_service(&self, file_path: &str, data: &Value) -> ValidationResult {
        validate_service_impl(&self.service_schema, file_path, data)
    }

    /// Validate a binding catalog.
    pub fn validate_catalog(&self, file_path: &str, data: &Value) -> ValidationResult {
        validate_catalog_impl(&self.catalog_schema, file_path, data)
    }

    /// Format validation errors for display.
    pub fn format_errors(&self, errors: &[ValidationError]) -> String {
        if errors.is_empty() {
            return String::new();
        }

        let mut error_lines = vec!["✗ Validation failed\n".to_string()];

        for error in errors {
            error_lines.push(error.file.clone());
            error_lines.push(format!("  Error: {}", error.message));

            if let Some(path) = &error.path {
                error_lines.push(format!("  Path: {path}"));
            }

            if let Some(suggestion) = &error.suggestion {
                error_lines.push(format!("  Suggestion: {suggestion}"));
            }

            error_lines.push(String::new());
        }

        error_lines.join("\n")
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}
