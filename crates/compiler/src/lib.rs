//! Azure Functions Binding Compiler Library
//!
//! Copyright 2025 Release Workshop Ltd
//! Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
//! See the LICENSE file in the project root for details.
//!
//! This library compiles the event declarations of a serverless service into
//! Azure Functions binding documents (`function.json`). It works only with
//! in-memory data (no file I/O).
//!
//! # Example
//!
//! ```rust,no_run
//! use azure_bindings_compiler::{bundled_index, compile, parse_service, serialize};
//!
//! let service_yaml = r#"
//! service: greeter
//! functions:
//!   hello:
//!     handler: src/handlers/hello.sayHello
//!     events:
//!       - http: true
//!         x-azure-settings:
//!           authLevel: anonymous
//! "#;
//!
//! let service = parse_service(service_yaml)?;
//! let compiled = compile(&service, bundled_index()?)?;
//! let function_json = serialize(&compiled[0].config)?;
//! # Ok::<(), azure_bindings_compiler::CompilerError>(())
//! ```

pub mod catalog;
pub mod compiler;
pub mod constants;
pub mod error;
pub mod metadata;
pub mod options;
pub mod parser;
pub mod schemas;
pub mod service;
pub mod validator;

use serde_json::Value;

pub use catalog::{bundled_index, BindingCatalog, BindingCatalogEntry, BindingIndex};
pub use compiler::{compile, function_metadata};
pub use error::{BindingError, CompilerError};
pub use metadata::{BindingRecord, CompiledFunction, FunctionConfig, FunctionMetadata};
pub use options::{CompilerOptions, UnknownSettingPolicy};
pub use service::{EventDeclaration, FunctionDefinition, FunctionRegistry, ServiceDefinition};

/// Parse a service description from a YAML/JSON string.
///
/// # Errors
///
/// Returns `CompilerError::Parse` if the input is not valid YAML/JSON or
/// does not have the shape of a service description.
pub fn parse_service(content: &str) -> Result<ServiceDefinition, CompilerError> {
    Ok(parser::parse_service(content)?)
}

/// Parse and index a binding catalog from JSON text.
///
/// # Errors
///
/// Returns `CompilerError::Catalog` if the text is not a catalog document.
pub fn parse_catalog(content: &str) -> Result<BindingIndex, CompilerError> {
    let catalog = BindingCatalog::from_json(content)?;
    Ok(BindingIndex::build(catalog))
}

/// Validate a service description against the embedded schema.
///
/// # Errors
///
/// Returns `CompilerError::Validation` listing every problem found.
pub fn validate_service(service: &Value) -> Result<(), CompilerError> {
    let validator = validator::Validator::new();
    let result = validator.validate_service("<service>", service);
    if result.valid {
        Ok(())
    } else {
        let message = validator.format_errors(&result.errors);
        Err(error::ValidationError::InvalidService(message).into())
    }
}

/// Validate a binding catalog document against the embedded schema.
///
/// # Errors
///
/// Returns `CompilerError::Validation` listing every problem found.
pub fn validate_catalog(catalog: &Value) -> Result<(), CompilerError> {
    let validator = validator::Validator::new();
    let result = validator.validate_catalog("<catalog>", catalog);
    if result.valid {
        Ok(())
    } else {
        let message = validator.format_errors(&result.errors);
        Err(error::ValidationError::InvalidCatalog(message).into())
    }
}

/// Serialize a binding document as pretty-printed JSON.
///
/// # Errors
///
/// Returns `CompilerError::Serialization` if serialization fails.
pub fn serialize(config: &FunctionConfig) -> Result<String, CompilerError> {
    serde_json::to_string_pretty(config)
        .map_err(|e| error::SerializationError::Json(e.to_string()).into())
}
