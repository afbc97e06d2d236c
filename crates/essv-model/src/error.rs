use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Level within the vocabulary namespace hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Authority,
    Scope,
    Collection,
    Term,
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Level::Authority => "authority",
            Level::Scope => "scope",
            Level::Collection => "collection",
            Level::Term => "term",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Error)]
pub enum VocabError {
    /// A namespace segment does not exist under exact structural lookup.
    #[error("unknown {level} '{segment}' in path '{path}'")]
    NotFound {
        path: String,
        level: Level,
        segment: String,
    },

    /// Name resolution failed even under non-strict normalization.
    #[error("cannot resolve {level} '{value}' within '{target}'")]
    Parsing {
        value: String,
        level: Level,
        target: String,
    },

    /// A term failed its collection's naming constraints at creation time.
    #[error("invalid term name '{name}' for collection '{collection}': {reason}")]
    Validation {
        name: String,
        collection: String,
        reason: String,
    },

    /// A construction-time configuration defect (ambiguous synonyms, bad
    /// regex, malformed namespace path). Never recovered per input.
    #[error("vocabulary configuration error: {message}")]
    Configuration { message: String },
}

impl VocabError {
    pub(crate) fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, VocabError>;
