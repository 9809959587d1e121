//! Entry point and handler file derivation from a function's handler string.

use crate::options::CompilerOptions;

/// Where the runtime finds a function's code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerLocation {
    pub entry_point: String,
    pub handler_path: String,
}

/// Split `path/to/module.export` into the export name and the module file.
///
/// A handler without a dot is the export name itself and lives in the
/// default handler file. An explicit `script_file` replaces the derived path.
pub fn handler_location(
    handler: &str,
    script_file: Option<&str>,
    options: &CompilerOptions,
) -> HandlerLocation {
    let (entry_point, derived_path) = match handler.rsplit_once('.') {
        Some((module, export)) => (
            export.to_string(),
            format!(
                "{module}.{}",
                options.script_extension.trim_start_matches('.')
            ),
        ),
        None => (handler.to_string(), options.default_handler_file.clone()),
    };

    HandlerLocation {
        entry_point,
        handler_path: script_file.map_or(derived_path, str::to_string),
    }
}
