/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 *
 * Binding catalog: the table of supported trigger/binding types and the
 * settings each one accepts.
 */

pub mod index;

pub use index::{bundled_index, BindingIndex};

use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Embedded catalog shipped with the compiler.
pub(crate) const BUNDLED_CATALOG_JSON: &str = include_str!("../../../../catalog/bindings.v1.json");

/// How a setting's value is chosen when the user gives none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValueKind {
    Plain,
    /// One of `enum_values`; optional enums default to the first choice.
    Enum,
    /// Names a connection to an external resource (`resource_kind`).
    ResourceReference,
}

/// One allowed value of an enum setting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumChoice {
    pub value: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
}

/// Setting as written in the catalog file.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSettingSpec {
    name: String,
    value: String,
    #[serde(default)]
    required: bool,
    #[serde(default)]
    default_value: Option<Value>,
    #[serde(default, rename = "enum")]
    enum_values: Vec<EnumChoice>,
    #[serde(default)]
    resource: Option<String>,
}

/// A configurable setting of a binding type.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawSettingSpec")]
pub struct SettingSpec {
    pub name: String,
    pub value_kind: ValueKind,
    /// Raw value type from the catalog (`string`, `enum`, `boolean`, ...).
    pub value_type: String,
    pub required: bool,
    pub default_value: Option<Value>,
    pub enum_values: Vec<EnumChoice>,
    pub resource_kind: Option<String>,
}

impl From<RawSettingSpec> for SettingSpec {
    fn from(raw: RawSettingSpec) -> Self {
        let value_kind = if raw.value == "enum" {
            ValueKind::Enum
        } else if raw.resource.is_some() {
            ValueKind::ResourceReference
        } else {
            ValueKind::Plain
        };

        // Empty defaults count as absent.
        let default_value = raw
            .default_value
            .filter(|v| !v.is_null() && v.as_str() != Some(""));

        Self {
            name: raw.name,
            value_kind,
            value_type: raw.value,
            required: raw.required,
            default_value,
            enum_values: raw.enum_values,
            resource_kind: raw.resource,
        }
    }
}

impl SettingSpec {
    /// Whether this setting refers to a storage account connection.
    pub fn is_storage_resource(&self) -> bool {
        self.resource_kind
            .as_deref()
            .is_some_and(|kind| kind.eq_ignore_ascii_case(crate::constants::STORAGE_RESOURCE))
    }

    /// Value of the first enum choice, if any.
    pub fn first_enum_value(&self) -> Option<&Value> {
        self.enum_values.first().map(|choice| &choice.value)
    }
}

/// A supported trigger or binding type.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BindingCatalogEntry {
    #[serde(rename = "type")]
    pub binding_type: String,
    pub display_name: String,
    #[serde(default)]
    pub settings: Vec<SettingSpec>,
}

impl BindingCatalogEntry {
    pub fn setting(&self, name: &str) -> Option<&SettingSpec> {
        self.settings.iter().find(|s| s.name == name)
    }

    pub fn setting_names(&self) -> impl Iterator<Item = &str> {
        self.settings.iter().map(|s| s.name.as_str())
    }

    pub fn is_trigger(&self) -> bool {
        self.binding_type.contains(crate::constants::TRIGGER_SUFFIX)
    }
}

/// The full catalog, in file order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BindingCatalog {
    #[serde(default)]
    pub content_version: Option<String>,
    pub bindings: Vec<BindingCatalogEntry>,
}

impl BindingCatalog {
    /// Parse a catalog document from JSON text.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidJson` if the text is not a catalog document.
    pub fn from_json(content: &str) -> Result<Self, CatalogError> {
        serde_json::from_str(content).map_err(|e| CatalogError::InvalidJson(e.to_string()))
    }

    /// Convert an already-parsed catalog document.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidJson` if the value is not a catalog document.
    pub fn from_value(value: &Value) -> Result<Self, CatalogError> {
        Self::deserialize(value).map_err(|e| CatalogError::InvalidJson(e.to_string()))
    }

    /// The catalog embedded in the crate.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidJson` if the embedded file is malformed.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(BUNDLED_CATALOG_JSON)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
