//! Authorities and scopes: the upper two levels of the namespace.

use std::collections::HashMap;

use crate::error::{Level, Result, VocabError};
use crate::lookup::normalize_name;
use crate::term::{Collection, require_canonical};

/// A named convention within an authority, grouping collections.
#[derive(Debug, Clone)]
pub struct Scope {
    pub name: String,
    pub label: String,
    pub description: Option<String>,
    collections: Vec<Collection>,
    positions: HashMap<String, usize>,
    namespace: String,
}

impl Scope {
    pub(crate) fn new(
        authority_name: &str,
        name: &str,
        label: &str,
        description: Option<&str>,
    ) -> Result<Self> {
        let canonical = require_canonical(name, Level::Scope)?;
        Ok(Self {
            namespace: format!("{authority_name}:{canonical}"),
            name: canonical,
            label: label.to_string(),
            description: description.map(String::from),
            collections: Vec::new(),
            positions: HashMap::new(),
        })
    }

    /// Full namespace path: `authority:scope`.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub(crate) fn add_collection(
        &mut self,
        name: &str,
        label: &str,
        description: Option<&str>,
        term_name_pattern: Option<&str>,
    ) -> Result<&mut Collection> {
        let collection =
            Collection::new(&self.namespace, name, label, description, term_name_pattern)?;
        if self.positions.contains_key(&collection.name) {
            return Err(VocabError::configuration(format!(
                "collection '{}' already exists in scope '{}'",
                collection.name, self.namespace
            )));
        }
        let idx = self.collections.len();
        self.positions.insert(collection.name.clone(), idx);
        self.collections.push(collection);
        Ok(&mut self.collections[idx])
    }

    pub(crate) fn collection_mut(&mut self, name: &str) -> Option<&mut Collection> {
        self.positions
            .get(name)
            .copied()
            .map(|idx| &mut self.collections[idx])
    }

    /// Exact lookup by canonical name.
    pub fn collection(&self, name: &str) -> Option<&Collection> {
        self.positions.get(name).map(|&idx| &self.collections[idx])
    }

    /// Strict or case/whitespace-tolerant lookup.
    ///
    /// Canonical names are already normalized, so the non-strict path only
    /// has to normalize the input before an exact match.
    pub fn resolve_collection(&self, raw: &str, strict: bool) -> Result<&Collection> {
        let found = if strict {
            self.collection(raw)
        } else {
            self.collection(&normalize_name(raw))
        };
        found.ok_or_else(|| VocabError::Parsing {
            value: raw.to_string(),
            level: Level::Collection,
            target: self.namespace.clone(),
        })
    }

    /// Collections in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Collection> {
        self.collections.iter()
    }

    pub fn len(&self) -> usize {
        self.collections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }
}

/// Top-level namespace owner (e.g. a standards body).
#[derive(Debug, Clone)]
pub struct Authority {
    pub name: String,
    pub label: String,
    pub description: Option<String>,
    pub url: Option<String>,
    scopes: Vec<Scope>,
    positions: HashMap<String, usize>,
}

impl Authority {
    pub(crate) fn new(
        name: &str,
        label: &str,
        description: Option<&str>,
        url: Option<&str>,
    ) -> Result<Self> {
        let canonical = require_canonical(name, Level::Authority)?;
        Ok(Self {
            name: canonical,
            label: label.to_string(),
            description: description.map(String::from),
            url: url.map(String::from),
            scopes: Vec::new(),
            positions: HashMap::new(),
        })
    }

    /// Namespace of an authority is its own canonical name.
    pub fn namespace(&self) -> &str {
        &self.name
    }

    pub(crate) fn add_scope(
        &mut self,
        name: &str,
        label: &str,
        description: Option<&str>,
    ) -> Result<&mut Scope> {
        let scope = Scope::new(&self.name, name, label, description)?;
        if self.positions.contains_key(&scope.name) {
            return Err(VocabError::configuration(format!(
                "scope '{}' already exists in authority '{}'",
                scope.name, self.name
            )));
        }
        let idx = self.scopes.len();
        self.positions.insert(scope.name.clone(), idx);
        self.scopes.push(scope);
        Ok(&mut self.scopes[idx])
    }

    pub(crate) fn scope_mut(&mut self, name: &str) -> Option<&mut Scope> {
        self.positions
            .get(name)
            .copied()
            .map(|idx| &mut self.scopes[idx])
    }

    /// Exact lookup by canonical name.
    pub fn scope(&self, name: &str) -> Option<&Scope> {
        self.positions.get(name).map(|&idx| &self.scopes[idx])
    }

    /// Strict or case/whitespace-tolerant lookup.
    pub fn resolve_scope(&self, raw: &str, strict: bool) -> Result<&Scope> {
        let found = if strict {
            self.scope(raw)
        } else {
            self.scope(&normalize_name(raw))
        };
        found.ok_or_else(|| VocabError::Parsing {
            value: raw.to_string(),
            level: Level::Scope,
            target: self.name.clone(),
        })
    }

    /// Scopes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Scope> {
        self.scopes.iter()
    }

    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }
}
