//! Delimiter-based filename template parsing.
//!
//! A template is a fixed positional grammar (`{}` placeholders joined by a
//! delimiter, plus an extension); the meaning of each position comes from an
//! ordered list of vocabulary collections. Parsing validates the structure
//! first, then each field against its own collection, then an optional
//! trailing date range whose layout is implied by the resolved frequency
//! field.

use essv_model::Collection;

use crate::daterange::DateFormat;
use crate::error::{ConfigError, ParseError, TemplateError};

/// Whether a filename may carry one extra trailing date-range field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateRangePolicy {
    #[default]
    Forbidden,
    Optional,
}

#[derive(Debug, Clone)]
pub struct TemplateOptions {
    pub delimiter: String,
    pub extension: String,
    pub date_range: DateRangePolicy,
}

impl Default for TemplateOptions {
    fn default() -> Self {
        Self {
            delimiter: "_".to_string(),
            extension: ".nc".to_string(),
            date_range: DateRangePolicy::Forbidden,
        }
    }
}

impl TemplateOptions {
    pub fn with_date_range(mut self) -> Self {
        self.date_range = DateRangePolicy::Optional;
        self
    }
}

/// Validates delimited filenames field-by-field against ordered collections.
///
/// Holds only borrows into the store plus immutable configuration, so one
/// parser can be reused across any number of concurrent `parse` calls.
#[derive(Debug, Clone)]
pub struct TemplateParser<'a> {
    collections: Vec<&'a Collection>,
    options: TemplateOptions,
    /// Position of the `frequency` collection; `Some` iff a trailing date
    /// range is permitted.
    frequency_field: Option<usize>,
}

impl<'a> TemplateParser<'a> {
    /// Build a parser from a `{}` template and one collection per placeholder.
    pub fn create(
        template: &str,
        collections: Vec<&'a Collection>,
        options: TemplateOptions,
    ) -> Result<Self, ConfigError> {
        let placeholders = template.matches("{}").count();
        if placeholders != collections.len() {
            return Err(ConfigError::PlaceholderMismatch {
                template: template.to_string(),
                placeholders,
                collections: collections.len(),
            });
        }
        let frequency_field = match options.date_range {
            DateRangePolicy::Forbidden => None,
            DateRangePolicy::Optional => Some(
                collections
                    .iter()
                    .position(|collection| collection.name == "frequency")
                    .ok_or(ConfigError::MissingFrequencyField)?,
            ),
        };
        Ok(Self {
            collections,
            options,
            frequency_field,
        })
    }

    /// Number of positional fields (excluding any date-range suffix).
    pub fn arity(&self) -> usize {
        self.collections.len()
    }

    /// Validate a filename and return its canonical form.
    ///
    /// The result re-joins the canonical name of every resolved field, so it
    /// need not be byte-identical to the input; re-parsing the result is a
    /// fixed point.
    pub fn parse(&self, filename: &str) -> Result<String, ParseError> {
        let stem = filename
            .strip_suffix(self.options.extension.as_str())
            .ok_or_else(|| TemplateError::Extension {
                filename: filename.to_string(),
                expected: self.options.extension.clone(),
            })?;

        let fields: Vec<&str> = stem.split(self.options.delimiter.as_str()).collect();
        let expected = self.collections.len();
        let date_range = match (fields.len(), self.frequency_field) {
            (found, _) if found == expected => None,
            (found, Some(_)) if found == expected + 1 => Some(fields[expected]),
            (found, _) => {
                return Err(TemplateError::FieldCount {
                    filename: filename.to_string(),
                    expected,
                    found,
                }
                .into());
            }
        };

        let mut canonical = Vec::with_capacity(fields.len());
        for (position, (raw, collection)) in
            fields.iter().zip(self.collections.iter()).enumerate()
        {
            let term =
                collection
                    .resolve_term(raw, false)
                    .map_err(|_| TemplateError::Field {
                        filename: filename.to_string(),
                        position,
                        value: (*raw).to_string(),
                        collection: collection.name.clone(),
                    })?;
            canonical.push(term.name.as_str());
        }

        if let Some(range) = date_range {
            // create() guarantees a frequency position whenever a trailing
            // field is accepted.
            let frequency = self
                .frequency_field
                .map(|idx| canonical[idx])
                .unwrap_or_default();
            let format = DateFormat::for_frequency(frequency)?;
            if !format.matches_range(range) {
                return Err(TemplateError::DateRange {
                    filename: filename.to_string(),
                    value: range.to_string(),
                    expected: format.pattern(),
                }
                .into());
            }
        }

        let mut result = canonical.join(&self.options.delimiter);
        if let Some(range) = date_range {
            result.push_str(&self.options.delimiter);
            result.push_str(range);
        }
        result.push_str(&self.options.extension);
        Ok(result)
    }
}
