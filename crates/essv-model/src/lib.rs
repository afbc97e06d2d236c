//! Controlled vocabulary namespace model.
//!
//! Vocabularies live in a four-level namespace: authority -> scope ->
//! collection -> term. A [`VocabularyStore`] owns the hierarchy, is built
//! once by an external loader, and is read-only afterwards, so it can be
//! shared freely across threads.

pub mod encode;
pub mod error;
pub mod hierarchy;
pub mod lookup;
pub mod store;
pub mod term;

pub use encode::{AuthorityRecord, CollectionRecord, ScopeRecord, TermRecord};
pub use error::{Level, Result, VocabError};
pub use hierarchy::{Authority, Scope};
pub use lookup::{NameIndex, normalize_name};
pub use store::{ScopeBinding, VocabularyStore};
pub use term::{Collection, Term, TermProperty, TermSpec, TermStatus};
