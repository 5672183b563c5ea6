// SPDX-License-Identifier: PMPL-1.0-or-later

//! Split-delivery bridge registry.
//!
//! Under split delivery the client bundle ships only the active locale's
//! strings; everything else resolves through a registry of renderers the
//! server materialized during page bootstrap. The registry is written once
//! before hydration and read many times after, so the runtime treats it as
//! immutable for the life of a page session.

use crate::catalog::Catalog;
use crate::inputs::MessageInputs;
use crate::locale::Locale;
use crate::template;
use std::collections::HashMap;

/// One bridge renderer: input payload in, resolved string out.
pub type BridgeFn = Box<dyn Fn(&MessageInputs) -> String + Send + Sync>;

/// Message identifier → renderer, populated by the page bootstrap.
#[derive(Default)]
pub struct BridgeRegistry {
    entries: HashMap<String, BridgeFn>,
}

impl BridgeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a renderer for one message identifier.
    pub fn insert<F>(&mut self, id: impl Into<String>, renderer: F)
    where
        F: Fn(&MessageInputs) -> String + Send + Sync + 'static,
    {
        self.entries.insert(id.into(), Box::new(renderer));
    }

    /// Bootstrap helper: one renderer per catalog entry, resolving the
    /// given locale with the catalog's own fallback walk.
    pub fn materialize(catalog: &'static Catalog, locale: Locale) -> Self {
        let mut registry = Self::new();
        for entry in catalog.entries {
            let template = catalog.template(entry, locale);
            registry.insert(entry.id, move |inputs: &MessageInputs| {
                template::render(template, inputs)
            });
        }
        registry
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve one message through the registry.
    ///
    /// # Panics
    ///
    /// Panics when no renderer is registered for `id`. A missing entry in
    /// delegated mode is a configuration error in the page bootstrap, not a
    /// runtime condition, so the failure is surfaced instead of recovered.
    pub fn render(&self, id: &str, inputs: &MessageInputs) -> String {
        match self.entries.get(id) {
            Some(renderer) => renderer(inputs),
            None => panic!(
                "split-delivery bridge has no renderer for `{id}`; \
                 the page bootstrap must populate the registry before \
                 any client-side resolution"
            ),
        }
    }
}

impl std::fmt::Debug for BridgeRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BridgeRegistry")
            .field("entries", &self.entries.len())
            .finish()
    }
}
