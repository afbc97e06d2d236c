//! Name normalization shared by every fuzzy lookup in the store.

use std::collections::HashMap;

use crate::error::{Result, VocabError};

/// Canonical normalization: trim surrounding whitespace, case-fold to lower.
///
/// Canonical entity names are already in this form, so a normalized input
/// can be matched directly against canonical keys.
pub fn normalize_name(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Maps normalized aliases to canonical names.
///
/// Two aliases may collapse to the same normalized key only when they point
/// at the same canonical name; anything else is a configuration defect
/// caught at build time, never at lookup time.
#[derive(Debug, Clone, Default)]
pub struct NameIndex {
    inner: HashMap<String, String>,
}

impl NameIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `alias` for `canonical`, rejecting ambiguous mappings.
    pub fn insert(&mut self, alias: &str, canonical: &str) -> Result<()> {
        let key = normalize_name(alias);
        match self.inner.get(&key) {
            Some(existing) if existing != canonical => Err(VocabError::configuration(format!(
                "alias '{alias}' is ambiguous: maps to both '{existing}' and '{canonical}'"
            ))),
            Some(_) => Ok(()),
            None => {
                self.inner.insert(key, canonical.to_string());
                Ok(())
            }
        }
    }

    /// Resolve a raw input to its canonical name, if registered.
    pub fn get(&self, raw: &str) -> Option<&str> {
        self.inner.get(&normalize_name(raw)).map(String::as_str)
    }

    pub fn contains(&self, raw: &str) -> bool {
        self.inner.contains_key(&normalize_name(raw))
    }
}
