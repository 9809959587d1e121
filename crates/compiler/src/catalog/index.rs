/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 *
 * Indexed view of a binding catalog.
 *
 * Entries keep catalog order; two derived maps resolve a binding type or a
 * lowercased display name to an entry.
 */

use crate::catalog::{BindingCatalog, BindingCatalogEntry};
use crate::error::CompilerError;
use once_cell::sync::OnceCell;
use std::collections::HashMap;

static BUNDLED_INDEX: OnceCell<BindingIndex> = OnceCell::new();

/// Binding catalog plus lookup maps by type and by lowercased display name.
#[derive(Debug, Clone)]
pub struct BindingIndex {
    entries: Vec<BindingCatalogEntry>,
    by_type: HashMap<String, usize>,
    by_display_name: HashMap<String, usize>,
}

impl BindingIndex {
    /// Build the index in one pass over the catalog.
    ///
    /// Several entries may share a type (one per direction) or a lowercased
    /// display name. Lookups return the first such entry in catalog order.
    pub fn build(catalog: BindingCatalog) -> Self {
        let mut by_type = HashMap::with_capacity(catalog.len());
        let mut by_display_name = HashMap::with_capacity(catalog.len());

        for (position, entry) in catalog.bindings.iter().enumerate() {
            by_type
                .entry(entry.binding_type.clone())
                .or_insert(position);
            by_display_name
                .entry(entry.display_name.to_lowercase())
                .or_insert(position);
        }

        Self {
            entries: catalog.bindings,
            by_type,
            by_display_name,
        }
    }

    /// First entry with the given binding type.
    pub fn by_type(&self, binding_type: &str) -> Option<&BindingCatalogEntry> {
        self.by_type.get(binding_type).map(|&i| &self.entries[i])
    }

    /// First entry whose display name, lowercased, equals `display_name` lowercased.
    pub fn by_display_name(&self, display_name: &str) -> Option<&BindingCatalogEntry> {
        self.by_display_name
            .get(&display_name.to_lowercase())
            .map(|&i| &self.entries[i])
    }

    /// Entries in catalog order.
    pub fn entries(&self) -> &[BindingCatalogEntry] {
        &self.entries
    }

    /// Binding types in catalog order.
    pub fn types(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.binding_type.as_str())
    }

    /// Lowercased display names in catalog order.
    pub fn display_names_lower(&self) -> impl Iterator<Item = String> + '_ {
        self.entries.iter().map(|e| e.display_name.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<BindingCatalog> for BindingIndex {
    fn from(catalog: BindingCatalog) -> Self {
        Self::build(catalog)
    }
}

/// Index over the embedded catalog, built on first use and shared afterwards.
///
/// # Errors
///
/// Returns `CompilerError::Catalog` if the embedded catalog cannot be parsed.
pub fn bundled_index() -> Result<&'static BindingIndex, CompilerError> {
    BUNDLED_INDEX.get_or_try_init(|| {
        let catalog = BindingCatalog::bundled()?;
        let index = BindingIndex::build(catalog);
        tracing::debug!(entries = index.len(), "indexed bundled binding catalog");
        Ok(index)
    })
}
