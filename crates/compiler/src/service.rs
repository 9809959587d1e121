/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 *
 * Typed service description: functions, their handlers and their events.
 */

use crate::constants::DIRECTION;
use crate::options::CompilerOptions;
use serde_json::{Map, Value};

/// One entry of a function's `events` list.
///
/// In the service file an event is a mapping with a single kind key, e.g.
/// `{ http: true }` or `{ queue: "jobs" }`, optionally next to an
/// `x-azure-settings` mapping of raw binding overrides.
#[derive(Debug, Clone, PartialEq)]
pub struct EventDeclaration {
    pub kind: String,
    /// Value under the kind key (`true`, `{}`, a queue name, ...).
    pub value: Value,
    pub azure_settings: Map<String, Value>,
}

impl EventDeclaration {
    pub fn new(kind: impl Into<String>, value: Value) -> Self {
        Self {
            kind: kind.into(),
            value,
            azure_settings: Map::new(),
        }
    }

    #[must_use]
    pub fn with_settings(mut self, settings: Map<String, Value>) -> Self {
        self.azure_settings = settings;
        self
    }

    /// The `x-azure-settings.direction` override, rendered as text.
    pub fn direction_override(&self) -> Option<String> {
        self.azure_settings.get(DIRECTION).map(|value| match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }
}

/// A function declared by the service.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDefinition {
    pub name: String,
    /// `path/to/module.export` or a bare export name.
    pub handler: String,
    /// Explicit handler file; replaces the path derived from `handler`.
    pub script_file: Option<String>,
    /// Declared events, trigger first.
    pub events: Vec<EventDeclaration>,
}

/// Source of function declarations for the metadata assembler.
pub trait FunctionRegistry {
    /// Look a function up by name.
    fn function(&self, name: &str) -> Option<&FunctionDefinition>;

    /// Function names in declaration order.
    fn function_names(&self) -> Vec<&str>;
}

/// A parsed service description.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ServiceDefinition {
    pub service: Option<String>,
    pub options: CompilerOptions,
    pub functions: Vec<FunctionDefinition>,
}

impl ServiceDefinition {
    pub fn functions(&self) -> impl Iterator<Item = &FunctionDefinition> {
        self.functions.iter()
    }
}

impl FunctionRegistry for ServiceDefinition {
    fn function(&self, name: &str) -> Option<&FunctionDefinition> {
        self.functions.iter().find(|f| f.name == name)
    }

    fn function_names(&self) -> Vec<&str> {
        self.functions.iter().map(|f| f.name.as_str()).collect()
    }
}
