//! Serializable records for external reporting.
//!
//! The store itself is never serialized; reporting layers encode individual
//! entities into these plain records instead.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::hierarchy::{Authority, Scope};
use crate::term::{Collection, Term, TermStatus};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorityRecord {
    pub name: String,
    pub label: String,
    pub description: Option<String>,
    pub url: Option<String>,
    /// Scope canonical names, in insertion order.
    pub scopes: Vec<String>,
}

impl From<&Authority> for AuthorityRecord {
    fn from(authority: &Authority) -> Self {
        Self {
            name: authority.name.clone(),
            label: authority.label.clone(),
            description: authority.description.clone(),
            url: authority.url.clone(),
            scopes: authority.iter().map(|scope| scope.name.clone()).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScopeRecord {
    pub name: String,
    pub label: String,
    pub description: Option<String>,
    pub namespace: String,
    /// Collection canonical names, in insertion order.
    pub collections: Vec<String>,
}

impl From<&Scope> for ScopeRecord {
    fn from(scope: &Scope) -> Self {
        Self {
            name: scope.name.clone(),
            label: scope.label.clone(),
            description: scope.description.clone(),
            namespace: scope.namespace().to_string(),
            collections: scope.iter().map(|c| c.name.clone()).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionRecord {
    pub name: String,
    pub label: String,
    pub description: Option<String>,
    pub namespace: String,
    pub term_name_regex: Option<String>,
    /// Term canonical names, in insertion order.
    pub terms: Vec<String>,
}

impl From<&Collection> for CollectionRecord {
    fn from(collection: &Collection) -> Self {
        Self {
            name: collection.name.clone(),
            label: collection.label.clone(),
            description: collection.description.clone(),
            namespace: collection.namespace().to_string(),
            term_name_regex: collection.term_name_pattern().map(String::from),
            terms: collection.iter().map(|term| term.name.clone()).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TermRecord {
    pub name: String,
    pub label: String,
    pub description: Option<String>,
    pub url: Option<String>,
    pub namespace: String,
    pub synonyms: Vec<String>,
    pub status: Option<TermStatus>,
    pub idx: usize,
    pub uid: Option<String>,
    pub create_date: Option<DateTime<Utc>>,
}

impl From<&Term> for TermRecord {
    fn from(term: &Term) -> Self {
        Self {
            name: term.name.clone(),
            label: term.label.clone(),
            description: term.description.clone(),
            url: term.url.clone(),
            namespace: term.namespace().to_string(),
            synonyms: term.synonyms.clone(),
            status: term.status,
            idx: term.idx,
            uid: term.uid.clone(),
            create_date: term.create_date,
        }
    }
}
