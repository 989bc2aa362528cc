//! Locale resolution — exact tag, base language, then the default locale.
//!
//! Purpose
//! -------
//! Map (locale, unit) to a [`LocaleTemplate`] with the resolution order of
//! §-style resource bundles made explicit: exact locale match, then the
//! locale's primary language subtag alone, then the crate default (`en`).
//!
//! Key behaviors
//! -------------
//! - Resolve lazily and cache per unit for the resolver's lifetime; one
//!   resolver belongs to one engine, so the cache is engine-local state.
//! - Fail only when the *default* locale lacks a template for the unit —
//!   a configuration defect surfaced as `FormatError::MissingResource`,
//!   never a runtime user error.
//!
//! Invariants & assumptions
//! ------------------------
//! - The cache is interior-mutable (`RefCell`) behind `&self` lookups; the
//!   resolver is single-owner and not thread-safe, matching the
//!   configure-then-freeze concurrency model of the engine.
//! - Custom units are expected to carry explicit templates and never reach
//!   the resolver; one that does resolves to `MissingResource`.

use std::{cell::RefCell, collections::HashMap};

use crate::{
    core::units::UnitName,
    errors::{FormatError, FormatResult},
    locale::{
        resources,
        templates::{LocaleId, LocaleTemplate},
    },
};

/// Per-engine template resolver with a lazily filled cache.
#[derive(Debug, Clone)]
pub struct LocaleResolver {
    locale: LocaleId,
    cache: RefCell<HashMap<UnitName, LocaleTemplate>>,
}

impl LocaleResolver {
    /// Resolver for one locale with an empty cache.
    pub fn new(locale: LocaleId) -> Self {
        LocaleResolver { locale, cache: RefCell::new(HashMap::new()) }
    }

    /// The locale this resolver serves.
    pub fn locale(&self) -> &LocaleId {
        &self.locale
    }

    /// Resolve the template for a unit name.
    ///
    /// Resolution order: exact tag → base language → default locale. The
    /// result is cached, so repeated formatting of the same units is a map
    /// lookup.
    ///
    /// Errors
    /// ------
    /// - `FormatError::MissingResource` when even the default locale has no
    ///   template for the unit.
    pub fn resolve(&self, name: &UnitName) -> FormatResult<LocaleTemplate> {
        if let Some(cached) = self.cache.borrow().get(name) {
            return Ok(cached.clone());
        }

        let resolved = resources::lookup(&self.locale.tag(), name)
            .or_else(|| resources::lookup(self.locale.language(), name))
            .or_else(|| resources::lookup(resources::DEFAULT_LOCALE, name))
            .ok_or_else(|| FormatError::MissingResource {
                locale: self.locale.tag(),
                unit: name.label().to_string(),
            })?;

        self.cache.borrow_mut().insert(name.clone(), resolved.clone());
        Ok(resolved)
    }
}
