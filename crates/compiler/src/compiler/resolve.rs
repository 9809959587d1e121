//! Binding resolution: maps one event declaration to a catalog entry and the
//! user settings that apply to it.

use crate::catalog::{BindingCatalogEntry, BindingIndex};
use crate::compiler::build::build_binding;
use crate::constants::{DIRECTION, QUEUE, QUEUE_NAME, TRIGGER_SUFFIX};
use crate::error::BindingError;
use crate::metadata::BindingRecord;
use crate::options::UnknownSettingPolicy;
use crate::service::EventDeclaration;
use serde_json::{Map, Value};
use tracing::debug;

/// An event matched to its catalog entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedBinding<'a> {
    pub entry: &'a BindingCatalogEntry,
    /// Type key the event was looked up under (`http` → `httpTrigger` for triggers).
    pub lookup_key: String,
    /// Settings the user supplied for this entry, including a direction override.
    pub user_settings: Map<String, Value>,
    /// Unknown settings to copy into the record (`UnknownSettingPolicy::Forward`).
    pub forwarded: Map<String, Value>,
}

impl ResolvedBinding<'_> {
    /// Build the binding record for this resolution.
    ///
    /// # Errors
    ///
    /// Returns `BindingError::RequiredSettingMissing` from [`build_binding`].
    pub fn build(&self) -> Result<BindingRecord, BindingError> {
        let mut record = build_binding(self.entry, &self.user_settings)?;
        for (key, value) in &self.forwarded {
            record.settings.insert(key.clone(), value.clone());
        }
        Ok(record)
    }
}

/// Catalog lookup key for the event kind at `position`.
///
/// The first event of a function is its trigger, so `http` at position 0
/// looks up `httpTrigger`.
pub fn lookup_key(kind: &str, position: usize) -> String {
    if position == 0 {
        format!("{kind}{TRIGGER_SUFFIX}")
    } else {
        kind.to_string()
    }
}

/// Display-name key used to re-resolve an event with a direction override.
pub fn direction_display_name(lookup_key: &str, direction: &str) -> String {
    format!("${lookup_key}{direction}_displayName").to_lowercase()
}

/// Resolve the catalog entry and user settings for one event.
///
/// # Errors
///
/// Returns `BindingError::UnsupportedBinding` when the lookup key, or the
/// direction-override display name, has no catalog entry.
pub fn resolve_binding<'a>(
    event: &EventDeclaration,
    position: usize,
    index: &'a BindingIndex,
    policy: UnknownSettingPolicy,
) -> Result<ResolvedBinding<'a>, BindingError> {
    let lookup_key = lookup_key(&event.kind, position);

    let mut entry = index
        .by_type(&lookup_key)
        .ok_or_else(|| BindingError::UnsupportedBinding {
            binding_type: lookup_key.clone(),
            direction: None,
        })?;

    let mut user_settings = Map::new();

    if let Some(direction) = event.direction_override() {
        // May land on a different entry than the type lookup did.
        let display_name = direction_display_name(&lookup_key, &direction);
        entry = index.by_display_name(&display_name).ok_or_else(|| {
            BindingError::UnsupportedBinding {
                binding_type: lookup_key.clone(),
                direction: Some(direction.clone()),
            }
        })?;
        user_settings.insert(DIRECTION.to_string(), Value::String(direction));
    }

    if lookup_key.contains(QUEUE) && event.kind == QUEUE {
        if let Some(queue_name) = event.value.as_str() {
            user_settings.insert(QUEUE_NAME.to_string(), Value::String(queue_name.to_string()));
        }
    }

    let mut forwarded = Map::new();
    for (key, value) in &event.azure_settings {
        if key == DIRECTION {
            continue;
        }
        if entry.setting(key).is_some() {
            user_settings.insert(key.clone(), value.clone());
            continue;
        }
        match policy {
            UnknownSettingPolicy::Ignore => {
                debug!(
                    binding_type = %entry.binding_type,
                    setting = %key,
                    "ignoring setting not declared by the catalog"
                );
            }
            UnknownSettingPolicy::Forward => {
                forwarded.insert(key.clone(), value.clone());
            }
        }
    }

    Ok(ResolvedBinding {
        entry,
        lookup_key,
        user_settings,
        forwarded,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::bundled_index;
    use serde_json::json;

    fn event(kind: &str, value: Value, settings: Value) -> EventDeclaration {
        let settings = settings.as_object().cloned().unwrap_or_default();
        EventDeclaration::new(kind, value).with_settings(settings)
    }

    #[test]
    fn test_trigger_suffix_only_for_first_event() {
        assert_eq!(lookup_key("http", 0), "httpTrigger");
        assert_eq!(lookup_key("http", 1), "http");
        assert_eq!(lookup_key("queue", 2), "queue");
    }

    #[test]
    fn test_direction_display_name_is_lowercased() {
        assert_eq!(direction_display_name("blob", "In"), "$blobin_displayname");
    }

    #[test]
    fn test_resolve_first_http_event() {
        let index = bundled_index().unwrap();
        let resolved = resolve_binding(
            &event("http", json!(true), json!({})),
            0,
            index,
            UnknownSettingPolicy::Ignore,
        )
        .unwrap();
        assert_eq!(resolved.lookup_key, "httpTrigger");
        assert_eq!(resolved.entry.binding_type, "httpTrigger");
        assert!(resolved.user_settings.is_empty());
    }

    #[test]
    fn test_unsupported_kind() {
        let index = bundled_index().unwrap();
        let result = resolve_binding(
            &event("carrierPigeon", json!({}), json!({})),
            0,
            index,
            UnknownSettingPolicy::Ignore,
        );
        assert_eq!(
            result.unwrap_err(),
            BindingError::UnsupportedBinding {
                binding_type: "carrierPigeonTrigger".to_string(),
                direction: None,
            }
        );
    }

    #[test]
    fn test_direction_override_redirects_by_display_name() {
        let index = bundled_index().unwrap();
        let type_match = index.by_type("blob").unwrap();
        assert_eq!(type_match.display_name, "$blobIn_displayName");

        let resolved = resolve_binding(
            &event("blob", json!(true), json!({ "direction": "out", "path": "out/{name}" })),
            1,
            index,
            UnknownSettingPolicy::Ignore,
        )
        .unwrap();
        assert!(!std::ptr::eq(resolved.entry, type_match));
        assert_eq!(resolved.entry.display_name, "$blobOut_displayName");
        assert_eq!(resolved.lookup_key, "blob");
        assert_eq!(resolved.user_settings["direction"], "out");
        assert_eq!(resolved.user_settings["path"], "out/{name}");
    }

    #[test]
    fn test_direction_override_matching_type_entry() {
        let index = bundled_index().unwrap();
        let resolved = resolve_binding(
            &event("blob", json!(true), json!({ "direction": "in" })),
            1,
            index,
            UnknownSettingPolicy::Ignore,
        )
        .unwrap();
        assert!(std::ptr::eq(resolved.entry, index.by_type("blob").unwrap()));
    }

    #[test]
    fn test_direction_override_without_match_is_unsupported() {
        let index = bundled_index().unwrap();
        let result = resolve_binding(
            &event("blob", json!(true), json!({ "direction": "inout" })),
            1,
            index,
            UnknownSettingPolicy::Ignore,
        );
        assert_eq!(
            result.unwrap_err(),
            BindingError::UnsupportedBinding {
                binding_type: "blob".to_string(),
                direction: Some("inout".to_string()),
            }
        );
    }

    #[test]
    fn test_queue_convenience_field() {
        let index = bundled_index().unwrap();
        let resolved = resolve_binding(
            &event("queue", json!("orders"), json!({})),
            0,
            index,
            UnknownSettingPolicy::Ignore,
        )
        .unwrap();
        assert_eq!(resolved.entry.binding_type, "queueTrigger");
        assert_eq!(resolved.user_settings["queueName"], "orders");
    }

    #[test]
    fn test_explicit_queue_name_setting_wins_over_convenience_field() {
        let index = bundled_index().unwrap();
        let resolved = resolve_binding(
            &event("queue", json!("orders"), json!({ "queueName": "priority-orders" })),
            1,
            index,
            UnknownSettingPolicy::Ignore,
        )
        .unwrap();
        assert_eq!(resolved.user_settings["queueName"], "priority-orders");
    }

    #[test]
    fn test_unknown_settings_ignored_by_default() {
        let index = bundled_index().unwrap();
        let resolved = resolve_binding(
            &event("http", json!(true), json!({ "authLevel": "anonymous", "flavour": "x" })),
            0,
            index,
            UnknownSettingPolicy::Ignore,
        )
        .unwrap();
        assert_eq!(resolved.user_settings["authLevel"], "anonymous");
        assert!(!resolved.user_settings.contains_key("flavour"));
        assert!(resolved.forwarded.is_empty());

        let record = resolved.build().unwrap();
        assert!(record.get("flavour").is_none());
    }

    #[test]
    fn test_unknown_settings_forwarded_when_asked() {
        let index = bundled_index().unwrap();
        let resolved = resolve_binding(
            &event("http", json!(true), json!({ "flavour": "x" })),
            0,
            index,
            UnknownSettingPolicy::Forward,
        )
        .unwrap();
        assert_eq!(resolved.forwarded["flavour"], "x");

        let record = resolved.build().unwrap();
        assert_eq!(record.get("flavour"), Some(&json!("x")));
    }
}
