//! Terms and the collections that own them.
//!
//! A collection is one controlled naming field (e.g. `institution-id`) and
//! owns an ordered set of terms. Insertion order is display order; lookup is
//! by canonical name, with an optional non-strict mode that tolerates case,
//! surrounding whitespace and registered synonyms.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Level, Result, VocabError};
use crate::lookup::{NameIndex, normalize_name};

/// Governance state of a term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TermStatus {
    Draft,
    Valid,
    Deprecated,
}

impl TermStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            TermStatus::Draft => "draft",
            TermStatus::Valid => "valid",
            TermStatus::Deprecated => "deprecated",
        }
    }
}

/// The fixed set of string properties a term exposes.
///
/// Property access is by enumerated key; an unknown property name fails at
/// the `FromStr` boundary instead of silently yielding nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TermProperty {
    Name,
    Label,
    Description,
    Url,
    Status,
    Namespace,
}

impl std::str::FromStr for TermProperty {
    type Err = VocabError;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "name" => Ok(TermProperty::Name),
            "label" => Ok(TermProperty::Label),
            "description" => Ok(TermProperty::Description),
            "url" => Ok(TermProperty::Url),
            "status" => Ok(TermProperty::Status),
            "namespace" => Ok(TermProperty::Namespace),
            other => Err(VocabError::configuration(format!(
                "unknown term property '{other}'"
            ))),
        }
    }
}

/// One allowed value within a collection.
#[derive(Debug, Clone)]
pub struct Term {
    /// Canonical name: trimmed, lower-case, unique within the collection.
    pub name: String,
    /// Display label (compared verbatim by attribute checks).
    pub label: String,
    pub description: Option<String>,
    pub url: Option<String>,
    /// Alternate names accepted by non-strict resolution.
    pub synonyms: Vec<String>,
    pub status: Option<TermStatus>,
    /// Opaque identifier assigned by the loader, if any.
    pub uid: Option<String>,
    /// Ordinal position within the collection.
    pub idx: usize,
    pub create_date: Option<DateTime<Utc>>,
    namespace: String,
}

impl Term {
    /// Full namespace path: `authority:scope:collection:term`.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Value of one enumerated property; `None` when the property is unset.
    pub fn property(&self, key: TermProperty) -> Option<&str> {
        match key {
            TermProperty::Name => Some(&self.name),
            TermProperty::Label => Some(&self.label),
            TermProperty::Description => self.description.as_deref(),
            TermProperty::Url => self.url.as_deref(),
            TermProperty::Status => self.status.map(TermStatus::as_str),
            TermProperty::Namespace => Some(&self.namespace),
        }
    }
}

/// Input for creating a term; everything beyond name and label is optional.
#[derive(Debug, Clone, Default)]
pub struct TermSpec {
    pub name: String,
    pub label: String,
    pub description: Option<String>,
    pub url: Option<String>,
    pub synonyms: Vec<String>,
    pub status: Option<TermStatus>,
    pub uid: Option<String>,
}

impl TermSpec {
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            ..Self::default()
        }
    }

    pub fn with_synonyms<I, S>(mut self, synonyms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.synonyms = synonyms.into_iter().map(Into::into).collect();
        self
    }
}

/// A named, ordered set of controlled terms.
#[derive(Debug, Clone)]
pub struct Collection {
    /// Canonical name, unique within the owning scope.
    pub name: String,
    pub label: String,
    pub description: Option<String>,
    term_name_pattern: Option<String>,
    term_name_regex: Option<Regex>,
    terms: Vec<Term>,
    /// Canonical name -> position in `terms`.
    positions: HashMap<String, usize>,
    /// Verbatim synonym -> canonical name (strict resolution).
    exact_synonyms: HashMap<String, String>,
    /// Normalized names and synonyms -> canonical name (non-strict).
    fuzzy: NameIndex,
    namespace: String,
}

impl Collection {
    pub(crate) fn new(
        parent_namespace: &str,
        name: &str,
        label: &str,
        description: Option<&str>,
        term_name_pattern: Option<&str>,
    ) -> Result<Self> {
        let canonical = require_canonical(name, Level::Collection)?;
        let term_name_regex = term_name_pattern
            .map(|pattern| {
                Regex::new(pattern).map_err(|err| {
                    VocabError::configuration(format!(
                        "invalid term name regex for collection '{canonical}': {err}"
                    ))
                })
            })
            .transpose()?;
        Ok(Self {
            namespace: format!("{parent_namespace}:{canonical}"),
            name: canonical,
            label: label.to_string(),
            description: description.map(String::from),
            term_name_pattern: term_name_pattern.map(String::from),
            term_name_regex,
            terms: Vec::new(),
            positions: HashMap::new(),
            exact_synonyms: HashMap::new(),
            fuzzy: NameIndex::new(),
        })
    }

    /// Full namespace path: `authority:scope:collection`.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Source pattern of the term-name constraint, if one is defined.
    pub fn term_name_pattern(&self) -> Option<&str> {
        self.term_name_pattern.as_deref()
    }

    /// Append a term, enforcing the collection's naming invariants.
    pub fn add_term(&mut self, spec: TermSpec) -> Result<&Term> {
        if spec.name != normalize_name(&spec.name) {
            return Err(VocabError::Validation {
                name: spec.name,
                collection: self.name.clone(),
                reason: "term names must be canonical (trimmed, lower-case)".to_string(),
            });
        }
        if let Some(regex) = &self.term_name_regex
            && !regex.is_match(&spec.name)
        {
            return Err(VocabError::Validation {
                name: spec.name,
                collection: self.name.clone(),
                reason: format!(
                    "does not match term name regex '{}'",
                    self.term_name_pattern.as_deref().unwrap_or_default()
                ),
            });
        }
        if self.positions.contains_key(&spec.name) {
            return Err(VocabError::Validation {
                name: spec.name,
                collection: self.name.clone(),
                reason: "term already exists".to_string(),
            });
        }

        self.fuzzy.insert(&spec.name, &spec.name)?;
        for synonym in &spec.synonyms {
            self.fuzzy.insert(synonym, &spec.name)?;
            self.exact_synonyms
                .insert(synonym.clone(), spec.name.clone());
        }

        let idx = self.terms.len();
        let term = Term {
            namespace: format!("{}:{}", self.namespace, spec.name),
            name: spec.name,
            label: spec.label,
            description: spec.description,
            url: spec.url,
            synonyms: spec.synonyms,
            status: spec.status,
            uid: spec.uid,
            idx,
            create_date: Some(Utc::now()),
        };
        self.positions.insert(term.name.clone(), idx);
        self.terms.push(term);
        Ok(&self.terms[idx])
    }

    /// Exact lookup by canonical name.
    pub fn term(&self, name: &str) -> Option<&Term> {
        self.positions.get(name).map(|&idx| &self.terms[idx])
    }

    /// Resolve a raw input to its term.
    ///
    /// Strict mode accepts the canonical name or a registered synonym
    /// verbatim; non-strict mode normalizes the input first.
    pub fn resolve_term(&self, raw: &str, strict: bool) -> Result<&Term> {
        let canonical = if strict {
            if self.positions.contains_key(raw) {
                Some(raw)
            } else {
                self.exact_synonyms.get(raw).map(String::as_str)
            }
        } else {
            self.fuzzy.get(raw)
        };
        canonical
            .and_then(|name| self.term(name))
            .ok_or_else(|| VocabError::Parsing {
                value: raw.to_string(),
                level: Level::Term,
                target: self.namespace.clone(),
            })
    }

    /// Terms in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Term> {
        self.terms.iter()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// Entity names at every level must already be in canonical form.
pub(crate) fn require_canonical(name: &str, level: Level) -> Result<String> {
    if name.is_empty() || name != normalize_name(name) {
        return Err(VocabError::configuration(format!(
            "{level} name '{name}' is not canonical (trimmed, lower-case, non-empty)"
        )));
    }
    Ok(name.to_string())
}
