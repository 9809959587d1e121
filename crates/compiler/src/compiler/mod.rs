//! Compiler module - turns function event declarations into binding documents
//!
//! This module handles:
//! - Binding resolution (event kind + overrides → catalog entry)
//! - Binding construction (catalog entry + user settings → binding record)
//! - Function metadata assembly (all events, HTTP output, entry point)

pub mod build;
pub mod handler;
pub mod resolve;

use crate::catalog::BindingIndex;
use crate::compiler::handler::handler_location;
use crate::compiler::resolve::resolve_binding;
use crate::constants::{
    DIRECTION_OUT, HTTP_OUTPUT, HTTP_RETURN_NAME, HTTP_TRIGGER, HTTP_WEBHOOK_RESPONSE_NAME,
    WEB_HOOK_TYPE,
};
use crate::error::{BindingError, CompilerError};
use crate::metadata::{BindingRecord, CompiledFunction, FunctionMetadata};
use crate::options::CompilerOptions;
use crate::service::{FunctionRegistry, ServiceDefinition};
use serde_json::{Map, Value};
use tracing::debug;

/// Compute the binding metadata of one function.
///
/// Events are resolved and built in declaration order; the first event is
/// the trigger. When the last resolved lookup key is `httpTrigger` a
/// synthetic `http` output binding is appended.
///
/// # Errors
///
/// Returns `CompilerError::FunctionNotFound` if the registry has no such
/// function, or `CompilerError::Function` wrapping the first
/// `BindingError` raised by any event.
pub fn function_metadata<R>(
    function_name: &str,
    index: &BindingIndex,
    registry: &R,
    options: &CompilerOptions,
) -> Result<FunctionMetadata, CompilerError>
where
    R: FunctionRegistry + ?Sized,
{
    let function = registry
        .function(function_name)
        .ok_or_else(|| CompilerError::FunctionNotFound(function_name.to_string()))?;

    let mut bindings = Vec::with_capacity(function.events.len() + 1);
    let mut last_resolved: Option<(String, Map<String, Value>)> = None;

    for (position, event) in function.events.iter().enumerate() {
        let resolved = resolve_binding(event, position, index, options.unknown_settings)
            .map_err(|source| function_error(function_name, source))?;
        let record = resolved
            .build()
            .map_err(|source| function_error(function_name, source))?;

        debug!(
            function = function_name,
            position,
            binding_type = %record.binding_type,
            direction = %record.direction,
            "resolved binding"
        );

        bindings.push(record);
        last_resolved = Some((resolved.lookup_key, resolved.user_settings));
    }

    if let Some((lookup_key, user_settings)) = &last_resolved {
        if lookup_key == HTTP_TRIGGER {
            bindings.push(http_output_binding(user_settings));
        }
    }

    let location = handler_location(&function.handler, function.script_file.as_deref(), options);

    Ok(FunctionMetadata {
        entry_point: location.entry_point,
        handler_path: location.handler_path,
        bindings,
    })
}

/// Compile every function of a service, in declaration order.
///
/// # Errors
///
/// Returns the first function's error; nothing is returned for the other
/// functions in that case.
pub fn compile(
    service: &ServiceDefinition,
    index: &BindingIndex,
) -> Result<Vec<CompiledFunction>, CompilerError> {
    service
        .function_names()
        .into_iter()
        .map(|name| -> Result<CompiledFunction, CompilerError> {
            let config = function_metadata(name, index, service, &service.options)?.into_config();
            debug!(
                function = name,
                bindings = config.bindings.len(),
                "compiled function"
            );
            Ok(CompiledFunction {
                name: name.to_string(),
                config,
            })
        })
        .collect()
}

fn function_error(function: &str, source: BindingError) -> CompilerError {
    CompilerError::Function {
        function: function.to_string(),
        source,
    }
}

/// The implicit response binding of an HTTP-triggered function.
///
/// Named `res` when the trigger was given a web hook type, `$return`
/// otherwise.
fn http_output_binding(trigger_settings: &Map<String, Value>) -> BindingRecord {
    let name = if trigger_settings.get(WEB_HOOK_TYPE).is_some_and(is_present) {
        HTTP_WEBHOOK_RESPONSE_NAME
    } else {
        HTTP_RETURN_NAME
    };

    BindingRecord::new(HTTP_OUTPUT, DIRECTION_OUT)
        .with_setting("name", Value::String(name.to_string()))
}

fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}
