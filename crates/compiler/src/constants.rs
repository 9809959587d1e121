/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 */

/// Key of the per-event user override object.
pub const AZURE_SETTINGS_KEY: &str = "x-azure-settings";

/// Suffix appended to the first event's kind to name the trigger binding.
pub const TRIGGER_SUFFIX: &str = "Trigger";

/// Canonical HTTP trigger binding type.
pub const HTTP_TRIGGER: &str = "httpTrigger";

/// Binding type of the synthetic HTTP output binding.
pub const HTTP_OUTPUT: &str = "http";

/// Setting key carrying a direction override.
pub const DIRECTION: &str = "direction";

pub const DIRECTION_IN: &str = "in";
pub const DIRECTION_OUT: &str = "out";

/// Optional enum setting that stays unset when absent.
pub const WEB_HOOK_TYPE: &str = "webHookType";

/// Convenience field on queue events and the setting it feeds.
pub const QUEUE: &str = "queue";
pub const QUEUE_NAME: &str = "queueName";

/// Resource kind whose connection falls back to the function app's storage account.
pub const STORAGE_RESOURCE: &str = "storage";

/// App setting naming the function app's storage connection string.
pub const STORAGE_CONNECTION_PLACEHOLDER: &str = "AzureWebJobsStorage";

/// Output binding names for HTTP functions.
pub const HTTP_RETURN_NAME: &str = "$return";
pub const HTTP_WEBHOOK_RESPONSE_NAME: &str = "res";
