/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 *
 * Compiler output: binding records and per-function binding documents.
 */

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One entry of a function's `bindings` array.
///
/// Serializes flat: `type`, `direction`, then the settings in catalog order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BindingRecord {
    #[serde(rename = "type")]
    pub binding_type: String,
    pub direction: String,
    #[serde(flatten)]
    pub settings: Map<String, Value>,
}

impl BindingRecord {
    pub fn new(binding_type: impl Into<String>, direction: impl Into<String>) -> Self {
        Self {
            binding_type: binding_type.into(),
            direction: direction.into(),
            settings: Map::new(),
        }
    }

    #[must_use]
    pub fn with_setting(mut self, name: impl Into<String>, value: Value) -> Self {
        self.settings.insert(name.into(), value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.settings.get(name)
    }

    /// The binding's `name` setting, when it is a string.
    pub fn name(&self) -> Option<&str> {
        self.get("name").and_then(Value::as_str)
    }
}

/// Binding metadata of one function.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionMetadata {
    pub entry_point: String,
    pub handler_path: String,
    /// Trigger first, then the other events, then the synthetic HTTP output.
    pub bindings: Vec<BindingRecord>,
}

impl FunctionMetadata {
    /// The `function.json` document for this function.
    #[must_use]
    pub fn into_config(self) -> FunctionConfig {
        FunctionConfig {
            disabled: false,
            bindings: self.bindings,
            entry_point: self.entry_point,
            script_file: self.handler_path,
        }
    }
}

/// Binding configuration document consumed by the Functions runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionConfig {
    pub disabled: bool,
    pub bindings: Vec<BindingRecord>,
    pub entry_point: String,
    pub script_file: String,
}

/// A compiled function of a service.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledFunction {
    pub name: String,
    pub config: FunctionConfig,
}
