//! locale — identifiers, phrase templates, compiled-in resources, and the
//! resolver.
//!
//! Purpose
//! -------
//! Provide the locale layer of the crate: explicit [`LocaleId`] values
//! (never ambient process state), [`LocaleTemplate`] phrase records, the
//! static resource tables, and the [`LocaleResolver`] that walks
//! exact-tag → base-language → default-locale resolution with a per-engine
//! cache.
//!
//! Conventions
//! -----------
//! - Resources are compiled-in data (`resources`), not runtime lookups; a
//!   template miss after default-locale fallback is a configuration defect
//!   (`FormatError::MissingResource`).
//! - Custom units bypass this layer entirely via their explicit templates.

pub mod resolver;
pub(crate) mod resources;
pub mod templates;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::resolver::LocaleResolver;
pub use self::templates::{LocaleId, LocaleTemplate, DEFAULT_ROUNDING_TOLERANCE};
