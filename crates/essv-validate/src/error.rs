use thiserror::Error;

/// Construction-time defects. These abort setup and are never handled
/// per file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "template '{template}' has {placeholders} placeholders but {collections} collections were supplied"
    )]
    PlaceholderMismatch {
        template: String,
        placeholders: usize,
        collections: usize,
    },

    #[error("no collection '{collection}' in scope '{scope}'")]
    UnknownCollection { collection: String, scope: String },

    #[error("template permits a trailing date range but binds no 'frequency' collection")]
    MissingFrequencyField,

    #[error("no date-range format defined for frequency '{frequency}'")]
    UnsupportedFrequency { frequency: String },
}

/// Per-file failures. Expected outcomes of checking one filename; a batch
/// run keeps going past them.
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("file '{filename}': unexpected extension (expected '{expected}')")]
    Extension { filename: String, expected: String },

    #[error("file '{filename}': expected {expected} fields, found {found}")]
    FieldCount {
        filename: String,
        expected: usize,
        found: usize,
    },

    #[error("file '{filename}': field {position} value '{value}' is not a '{collection}' term")]
    Field {
        filename: String,
        position: usize,
        value: String,
        collection: String,
    },

    #[error("file '{filename}': date range '{value}' does not match '{expected}'")]
    DateRange {
        filename: String,
        value: String,
        expected: &'static str,
    },
}

/// Outcome of a single parse: either recoverable per-file data or a fatal
/// configuration gap surfacing mid-parse (e.g. an unsupported frequency).
#[derive(Debug, Error)]
pub enum ParseError {
    #[error(transparent)]
    Template(#[from] TemplateError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
