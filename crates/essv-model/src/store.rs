//! The vocabulary store: a build-once, read-only namespace of
//! authority -> scope -> collection -> term.
//!
//! External loaders populate the store through the `create_*` methods at
//! startup; afterwards every operation is a read. Reloading a vocabulary
//! release means building a fresh store and swapping the reference used by
//! new callers, never patching an existing one.

use std::collections::BTreeMap;

use crate::error::{Level, Result, VocabError};
use crate::hierarchy::{Authority, Scope};
use crate::lookup::normalize_name;
use crate::term::{Collection, Term, TermSpec};

#[derive(Debug, Clone, Default)]
pub struct VocabularyStore {
    /// Authorities keyed by canonical name.
    authorities: BTreeMap<String, Authority>,
}

impl VocabularyStore {
    pub fn new() -> Self {
        Self::default()
    }

    // --- construction (loader-facing) -------------------------------------

    pub fn create_authority(
        &mut self,
        name: &str,
        label: &str,
        description: Option<&str>,
        url: Option<&str>,
    ) -> Result<()> {
        let authority = Authority::new(name, label, description, url)?;
        if self.authorities.contains_key(&authority.name) {
            return Err(VocabError::configuration(format!(
                "authority '{}' already exists",
                authority.name
            )));
        }
        self.authorities.insert(authority.name.clone(), authority);
        Ok(())
    }

    pub fn create_scope(
        &mut self,
        authority: &str,
        name: &str,
        label: &str,
        description: Option<&str>,
    ) -> Result<()> {
        self.authority_mut(authority)?
            .add_scope(name, label, description)?;
        Ok(())
    }

    pub fn create_collection(
        &mut self,
        authority: &str,
        scope: &str,
        name: &str,
        label: &str,
        term_name_regex: Option<&str>,
    ) -> Result<()> {
        self.scope_mut(authority, scope)?
            .add_collection(name, label, None, term_name_regex)?;
        Ok(())
    }

    /// Create a term; fails with a validation error when the name collides
    /// or breaks the collection's term-name regex.
    pub fn create_term(
        &mut self,
        authority: &str,
        scope: &str,
        collection: &str,
        term: TermSpec,
    ) -> Result<()> {
        let path = format!("{authority}:{scope}:{collection}");
        self.scope_mut(authority, scope)?
            .collection_mut(collection)
            .ok_or_else(|| VocabError::NotFound {
                path,
                level: Level::Collection,
                segment: collection.to_string(),
            })?
            .add_term(term)?;
        Ok(())
    }

    // --- exact structural lookup ------------------------------------------

    pub fn authority(&self, name: &str) -> Option<&Authority> {
        self.authorities.get(name)
    }

    pub fn get_authority(&self, authority: &str) -> Result<&Authority> {
        self.authorities
            .get(authority)
            .ok_or_else(|| not_found(&[authority], Level::Authority, authority))
    }

    pub fn get_scope(&self, authority: &str, scope: &str) -> Result<&Scope> {
        self.get_authority(authority)?
            .scope(scope)
            .ok_or_else(|| not_found(&[authority, scope], Level::Scope, scope))
    }

    pub fn get_collection(
        &self,
        authority: &str,
        scope: &str,
        collection: &str,
    ) -> Result<&Collection> {
        self.get_scope(authority, scope)?
            .collection(collection)
            .ok_or_else(|| not_found(&[authority, scope, collection], Level::Collection, collection))
    }

    pub fn get_term(
        &self,
        authority: &str,
        scope: &str,
        collection: &str,
        term: &str,
    ) -> Result<&Term> {
        self.get_collection(authority, scope, collection)?
            .term(term)
            .ok_or_else(|| not_found(&[authority, scope, collection, term], Level::Term, term))
    }

    // --- name resolution ---------------------------------------------------

    /// Resolve a namespace path of one to four segments to the canonical
    /// name of its most specific segment.
    ///
    /// Strict mode demands exact canonical names (or, for terms, verbatim
    /// synonyms); non-strict mode normalizes each segment and also accepts
    /// term synonyms. The error identifies the first segment that failed.
    pub fn resolve(&self, segments: &[&str], strict: bool) -> Result<String> {
        let (first, rest) = match segments {
            [] => {
                return Err(VocabError::configuration(
                    "namespace path must have between one and four segments",
                ));
            }
            [first, rest @ ..] if rest.len() <= 3 => (first, rest),
            _ => {
                return Err(VocabError::configuration(
                    "namespace path must have between one and four segments",
                ));
            }
        };

        let authority = self.resolve_authority(first, strict)?;
        let Some((scope_raw, rest)) = rest.split_first() else {
            return Ok(authority.name.clone());
        };
        let scope = authority.resolve_scope(scope_raw, strict)?;
        let Some((collection_raw, rest)) = rest.split_first() else {
            return Ok(scope.name.clone());
        };
        let collection = scope.resolve_collection(collection_raw, strict)?;
        let Some(term_raw) = rest.first() else {
            return Ok(collection.name.clone());
        };
        let term = collection.resolve_term(term_raw, strict)?;
        Ok(term.name.clone())
    }

    fn resolve_authority(&self, raw: &str, strict: bool) -> Result<&Authority> {
        let found = if strict {
            self.authorities.get(raw)
        } else {
            self.authorities.get(&normalize_name(raw))
        };
        found.ok_or_else(|| VocabError::Parsing {
            value: raw.to_string(),
            level: Level::Authority,
            target: "vocabulary store".to_string(),
        })
    }

    /// Authorities in canonical name order.
    pub fn iter(&self) -> impl Iterator<Item = &Authority> {
        self.authorities.values()
    }

    pub fn len(&self) -> usize {
        self.authorities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.authorities.is_empty()
    }

    // --- private mutable navigation ---------------------------------------

    fn authority_mut(&mut self, name: &str) -> Result<&mut Authority> {
        self.authorities
            .get_mut(name)
            .ok_or_else(|| not_found(&[name], Level::Authority, name))
    }

    fn scope_mut(&mut self, authority: &str, scope: &str) -> Result<&mut Scope> {
        let path = format!("{authority}:{scope}");
        self.authority_mut(authority)?
            .scope_mut(scope)
            .ok_or_else(|| VocabError::NotFound {
                path,
                level: Level::Scope,
                segment: scope.to_string(),
            })
    }
}

fn not_found(path: &[&str], level: Level, segment: &str) -> VocabError {
    VocabError::NotFound {
        path: path.join(":"),
        level,
        segment: segment.to_string(),
    }
}

/// A store reference bound to one `(authority, scope)` pair, resolved once.
///
/// Validators hold one of these instead of re-walking the upper levels of
/// the namespace on every call.
#[derive(Debug, Clone, Copy)]
pub struct ScopeBinding<'a> {
    store: &'a VocabularyStore,
    authority: &'a Authority,
    scope: &'a Scope,
}

impl<'a> ScopeBinding<'a> {
    pub fn new(store: &'a VocabularyStore, authority: &str, scope: &str) -> Result<Self> {
        let authority = store.get_authority(authority)?;
        let scope = authority
            .scope(scope)
            .ok_or_else(|| not_found(&[&authority.name, scope], Level::Scope, scope))?;
        Ok(Self {
            store,
            authority,
            scope,
        })
    }

    pub fn store(&self) -> &'a VocabularyStore {
        self.store
    }

    pub fn authority(&self) -> &'a Authority {
        self.authority
    }

    pub fn scope(&self) -> &'a Scope {
        self.scope
    }

    /// Exact collection lookup within the bound scope.
    pub fn collection(&self, name: &str) -> Result<&'a Collection> {
        self.scope.collection(name).ok_or_else(|| {
            not_found(
                &[&self.authority.name, &self.scope.name, name],
                Level::Collection,
                name,
            )
        })
    }
}
