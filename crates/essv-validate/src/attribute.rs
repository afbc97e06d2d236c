//! Metadata attribute checks against a bound vocabulary scope.
//!
//! Attribute values are compared verbatim against a term property. This is
//! deliberately stricter than filename resolution: a metadata attribute is
//! expected to carry the exact published value, not a case variant or
//! synonym.

use essv_model::{ScopeBinding, TermProperty};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Tri-state verdict for one attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeStatus {
    /// Attribute not present in the input; no lookup attempted.
    Absent,
    /// Attribute present but its value matches no term.
    Unrecognized,
    /// Attribute present with an exact term-property match.
    Valid,
}

/// Collection name an attribute maps to. Total: every attribute name has a
/// well-defined collection name, whether or not the collection exists.
pub fn attribute_collection(attribute: &str) -> String {
    attribute.replace('_', "-")
}

/// Checks attribute values against the collections of one scope.
#[derive(Debug, Clone, Copy)]
pub struct AttributeValidator<'a> {
    binding: ScopeBinding<'a>,
    property: TermProperty,
}

impl<'a> AttributeValidator<'a> {
    /// Validator comparing against term labels (the conventional default).
    pub fn new(binding: ScopeBinding<'a>) -> Self {
        Self::with_property(binding, TermProperty::Label)
    }

    pub fn with_property(binding: ScopeBinding<'a>, property: TermProperty) -> Self {
        Self { binding, property }
    }

    /// Check one attribute.
    ///
    /// `None` means the attribute was absent from the input and returns
    /// [`AttributeStatus::Absent`] before any vocabulary lookup. A missing
    /// collection for a present attribute is a configuration error, not a
    /// per-file verdict.
    pub fn check(
        &self,
        attribute: &str,
        value: Option<&str>,
    ) -> Result<AttributeStatus, ConfigError> {
        let Some(raw) = value else {
            return Ok(AttributeStatus::Absent);
        };

        let name = attribute_collection(attribute);
        let collection =
            self.binding
                .collection(&name)
                .map_err(|_| ConfigError::UnknownCollection {
                    collection: name,
                    scope: self.binding.scope().name.clone(),
                })?;

        let recognised = collection
            .iter()
            .any(|term| term.property(self.property) == Some(raw));
        Ok(if recognised {
            AttributeStatus::Valid
        } else {
            AttributeStatus::Unrecognized
        })
    }
}
