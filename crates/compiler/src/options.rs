/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 *
 * Compiler configuration, read from the `custom.azureBindings` block of a
 * service description.
 */

use serde::{Deserialize, Serialize};

/// What to do with `x-azure-settings` keys that the resolved catalog entry
/// does not declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownSettingPolicy {
    /// Drop the key. Keeps older service files working against newer catalogs.
    #[default]
    Ignore,
    /// Copy the key verbatim into the binding record after the catalog settings.
    Forward,
}

/// Options controlling binding compilation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompilerOptions {
    /// Extension appended to handler paths derived from `module.export` handlers.
    #[serde(default = "default_script_extension")]
    pub script_extension: String,
    /// Handler file used when the handler names no module.
    #[serde(default = "default_handler_file")]
    pub default_handler_file: String,
    #[serde(default)]
    pub unknown_settings: UnknownSettingPolicy,
}

fn default_script_extension() -> String {
    "js".to_string()
}

fn default_handler_file() -> String {
    "handler.js".to_string()
}

impl Default for CompilerOptions {
    fn default() -> Self {
        Self {
            script_extension: default_script_extension(),
            default_handler_file: default_handler_file(),
            unknown_settings: UnknownSettingPolicy::default(),
        }
    }
}

impl CompilerOptions {
    #[must_use]
    pub fn with_unknown_settings(mut self, policy: UnknownSettingPolicy) -> Self {
        self.unknown_settings = policy;
        self
    }
}
