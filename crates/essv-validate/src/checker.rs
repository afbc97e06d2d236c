//! Convention facade: one object bound to an `(authority, scope)` pair
//! offering both attribute and filename checks.

use essv_model::{Result as VocabResult, ScopeBinding, TermProperty, VocabularyStore};

use crate::attribute::{AttributeStatus, AttributeValidator, attribute_collection};
use crate::error::{ConfigError, ParseError};
use crate::template::{TemplateOptions, TemplateParser};

/// Checks files and metadata of one convention against its vocabularies.
#[derive(Debug, Clone, Copy)]
pub struct ConventionChecker<'a> {
    binding: ScopeBinding<'a>,
}

impl<'a> ConventionChecker<'a> {
    pub fn new(store: &'a VocabularyStore, authority: &str, scope: &str) -> VocabResult<Self> {
        Ok(Self {
            binding: ScopeBinding::new(store, authority, scope)?,
        })
    }

    pub fn binding(&self) -> ScopeBinding<'a> {
        self.binding
    }

    /// Check a global metadata attribute against its collection.
    pub fn check_attribute(
        &self,
        attribute: &str,
        value: Option<&str>,
        property: TermProperty,
    ) -> Result<AttributeStatus, ConfigError> {
        AttributeValidator::with_property(self.binding, property).check(attribute, value)
    }

    /// Check a filename whose positional fields correspond to `keys`
    /// (attribute names, mapped to collections the same way attribute
    /// checks map them). Returns the canonical filename.
    pub fn check_file_name(
        &self,
        filename: &str,
        keys: &[&str],
        options: TemplateOptions,
    ) -> Result<String, ParseError> {
        let mut collections = Vec::with_capacity(keys.len());
        for key in keys {
            let name = attribute_collection(key);
            let collection =
                self.binding
                    .collection(&name)
                    .map_err(|_| ConfigError::UnknownCollection {
                        collection: name,
                        scope: self.binding.scope().name.clone(),
                    })?;
            collections.push(collection);
        }

        let template = vec!["{}"; keys.len()].join(&options.delimiter) + &options.extension;
        let parser = TemplateParser::create(&template, collections, options)?;
        parser.parse(filename)
    }
}
