/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 */
use thiserror::Error;

/// Top-level error type for the compiler
#[derive(Error, Debug)]
pub enum CompilerError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Function '{0}' is not declared in the service")]
    FunctionNotFound(String),

    #[error("Function '{function}': {source}")]
    Function {
        function: String,
        #[source]
        source: BindingError,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] SerializationError),
}

impl CompilerError {
    /// The binding error behind a function failure, if this is one.
    #[must_use]
    pub fn binding_error(&self) -> Option<&BindingError> {
        match self {
            Self::Function { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Parse errors for YAML/JSON parsing
///
/// This is a wrapper around the parser module's `ParseError` so the public
/// API does not expose parser internals.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Invalid YAML: {0}")]
    InvalidYaml(String),

    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid field type: {0}")]
    InvalidFieldType(String),
}

impl From<crate::parser::error::ParseError> for ParseError {
    fn from(err: crate::parser::error::ParseError) -> Self {
        match err {
            crate::parser::error::ParseError::InvalidYaml(msg) => Self::InvalidYaml(msg),
            crate::parser::error::ParseError::InvalidJson(msg) => Self::InvalidJson(msg),
            crate::parser::error::ParseError::MissingField(msg) => Self::MissingField(msg),
            crate::parser::error::ParseError::InvalidFieldType(msg) => Self::InvalidFieldType(msg),
        }
    }
}

impl From<crate::parser::error::ParseError> for CompilerError {
    fn from(err: crate::parser::error::ParseError) -> Self {
        Self::Parse(err.into())
    }
}

/// Validation errors for schema validation
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Schema validation failed: {0}")]
    SchemaValidation(String),

    #[error("Invalid service description: {0}")]
    InvalidService(String),

    #[error("Invalid binding catalog: {0}")]
    InvalidCatalog(String),
}

/// Errors raised while loading a binding catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Invalid catalog JSON: {0}")]
    InvalidJson(String),
}

/// Errors raised while resolving or building a single binding.
///
/// Both are configuration errors: the whole function fails and no partial
/// binding list is produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BindingError {
    #[error("Binding {binding_type} not supported{}", describe_direction(.direction))]
    UnsupportedBinding {
        binding_type: String,
        direction: Option<String>,
    },

    #[error("Required setting '{setting}' is missing for binding {binding_type}")]
    RequiredSettingMissing {
        setting: String,
        binding_type: String,
    },
}

fn describe_direction(direction: &Option<String>) -> String {
    direction
        .as_deref()
        .map(|d| format!(" with direction '{d}'"))
        .unwrap_or_default()
}

/// Serialization errors for binding configuration documents
#[derive(Error, Debug)]
pub enum SerializationError {
    #[error("JSON serialization failed: {0}")]
    Json(String),
}
