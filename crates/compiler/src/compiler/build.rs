//! Binding record construction from a catalog entry and user settings.

use crate::catalog::{BindingCatalogEntry, SettingSpec, ValueKind};
use crate::constants::{
    DIRECTION, DIRECTION_IN, DIRECTION_OUT, STORAGE_CONNECTION_PLACEHOLDER, WEB_HOOK_TYPE,
};
use crate::error::BindingError;
use crate::metadata::BindingRecord;
use serde_json::{Map, Value};

/// Build one binding record.
///
/// Settings are emitted in catalog order. A user value (anything but `null`)
/// is copied verbatim; otherwise required settings take their default, or
/// the function app's storage connection for storage resources, and
/// optional enums take their first choice (except `webHookType`).
///
/// # Errors
///
/// Returns `BindingError::RequiredSettingMissing` for a required setting with
/// no user value, no default and no storage fallback.
pub fn build_binding(
    entry: &BindingCatalogEntry,
    user_settings: &Map<String, Value>,
) -> Result<BindingRecord, BindingError> {
    let mut record =
        BindingRecord::new(entry.binding_type.clone(), direction(entry, user_settings));

    for setting in &entry.settings {
        if let Some(value) = setting_value(entry, setting, user_settings)? {
            record.settings.insert(setting.name.clone(), value);
        }
    }

    Ok(record)
}

fn direction(entry: &BindingCatalogEntry, user_settings: &Map<String, Value>) -> String {
    match user_settings.get(DIRECTION) {
        Some(Value::String(direction)) => direction.clone(),
        Some(value) if !value.is_null() => value.to_string(),
        _ if entry.is_trigger() => DIRECTION_IN.to_string(),
        _ => DIRECTION_OUT.to_string(),
    }
}

fn setting_value(
    entry: &BindingCatalogEntry,
    setting: &SettingSpec,
    user_settings: &Map<String, Value>,
) -> Result<Option<Value>, BindingError> {
    if let Some(value) = user_settings.get(&setting.name).filter(|v| !v.is_null()) {
        return Ok(Some(value.clone()));
    }

    if setting.required {
        if let Some(default) = &setting.default_value {
            return Ok(Some(default.clone()));
        }
        if setting.is_storage_resource() {
            return Ok(Some(Value::String(STORAGE_CONNECTION_PLACEHOLDER.to_string())));
        }
        return Err(BindingError::RequiredSettingMissing {
            setting: setting.name.clone(),
            binding_type: entry.binding_type.clone(),
        });
    }

    if setting.value_kind == ValueKind::Enum && setting.name != WEB_HOOK_TYPE {
        return Ok(setting.first_enum_value().cloned());
    }

    Ok(None)
}
