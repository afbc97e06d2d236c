//! Validation of file names and metadata attributes against controlled
//! vocabularies.
//!
//! Two read-only consumers share one [`essv_model::VocabularyStore`]:
//! [`TemplateParser`] decomposes a delimited filename into positional fields
//! and resolves each against an ordered collection list, and
//! [`AttributeValidator`] gives a tri-state verdict for a single metadata
//! attribute. [`ConventionChecker`] wires both to one `(authority, scope)`
//! binding.

pub mod attribute;
pub mod checker;
pub mod daterange;
pub mod error;
pub mod template;

pub use attribute::{AttributeStatus, AttributeValidator, attribute_collection};
pub use checker::ConventionChecker;
pub use daterange::DateFormat;
pub use error::{ConfigError, ParseError, TemplateError};
pub use template::{DateRangePolicy, TemplateOptions, TemplateParser};
