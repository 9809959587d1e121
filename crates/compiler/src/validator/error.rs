/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 */

use serde::{Deserialize, Serialize};

/// A single problem found in a service description or binding catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ValidationError {
    pub file: String,
    pub message: String,
    /// JSON pointer to the offending value.
    pub path: Option<String>,
    pub suggestion: Option<String>,
}

impl ValidationError {
    pub fn new(file: &str, message: impl Into<String>) -> Self {
        Self {
            file: file.to_string(),
            message: message.into(),
            path: None,
            suggestion: None,
        }
    }

    #[must_use]
    pub fn at(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    #[must_use]
    pub fn suggest(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// Outcome of validating one document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<ValidationError>,
    /// Findings that do not make the document invalid.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<ValidationError>,
}

impl ValidationResult {
    /// Create a valid result with no errors
    pub fn valid() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Create a result from collected errors
    pub fn invalid(errors: Vec<ValidationError>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
            warnings: Vec::new(),
        }
    }

    /// Attach warnings without changing validity
    pub fn with_warnings(mut self, warnings: Vec<ValidationError>) -> Self {
        self.warnings.extend(warnings);
        self
    }
}

/// Convert a `jsonschema` error into a `ValidationError`.
///
/// `jsonschema` reports instance paths but no line/column positions, so
/// errors point at JSON pointers only.
pub fn convert_jsonschema_error(
    file_path: &str,
    error: &jsonschema::ValidationError,
) -> ValidationError {
    let instance_path = error.instance_path.to_string();

    ValidationError {
        file: file_path.to_string(),
        message: error.to_string(),
        path: if instance_path.is_empty() {
            None
        } else {
            Some(instance_path)
        },
        suggestion: generate_suggestion_from_error(error),
    }
}

fn generate_suggestion_from_error(error: &jsonschema::ValidationError) -> Option<String> {
    // The Debug form of the kind starts with the failing keyword.
    let keyword = format!("{:?}", error.kind);

    if keyword.starts_with("Required") {
        Some("Add the missing required field".to_string())
    } else if keyword.starts_with("Type") {
        Some("Check the field type matches the schema".to_string())
    } else if keyword.starts_with("Enum") {
        Some("Check allowed values in the schema".to_string())
    } else if keyword.starts_with("AdditionalProperties") {
        Some("Remove fields the schema does not declare".to_string())
    } else if keyword.starts_with("MinLength") || keyword.starts_with("MinProperties") {
        Some("Provide a non-empty value".to_string())
    } else {
        None
    }
}
