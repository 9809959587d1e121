/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 *
 * Parser module for service descriptions written in YAML or JSON.
 * This module works only with in-memory data (no file I/O).
 */

pub mod error;
pub mod service;
pub mod utils;

pub use error::ParseError as ParserError;
pub use service::{parse_service, parse_service_value};
