//! Locale identifiers and phrase templates.
//!
//! Purpose
//! -------
//! Define the two value records of the locale layer: [`LocaleId`] (an
//! explicit, parsed locale tag — never ambient process state) and
//! [`LocaleTemplate`] (the phrase fragments used to render one unit in one
//! locale).
//!
//! Key behaviors
//! -------------
//! - Parse `language[-REGION]` / `language[_REGION]` tags into a normalized
//!   identifier with a lowercase language subtag and uppercase region.
//! - Carry singular/plural names, a numeric pattern with `%n` (quantity) and
//!   `%u` (unit name) placeholders, sign-dependent prefix/suffix slots, and a
//!   rounding-tolerance percentage.
//! - Validate the tolerance at construction via typed errors.
//!
//! Conventions
//! -----------
//! - Tolerances are percentages in `0..=100`; [`DEFAULT_ROUNDING_TOLERANCE`]
//!   is 50 (round up past the half-unit mark).
//! - Decoration whitespace is forgiving: the formatter collapses runs of
//!   whitespace, so prefixes/suffixes may be supplied with or without their
//!   separating space.

use crate::errors::{FormatError, FormatResult};

/// Default rounding tolerance: round up once the leftover remainder passes
/// half of one unit.
pub const DEFAULT_ROUNDING_TOLERANCE: u32 = 50;

/// Explicit locale identifier: a primary language subtag plus an optional
/// region (`"en"`, `"en-US"`, `"de"`).
///
/// Each engine owns its own `LocaleId`; there is no mutable process-wide
/// default locale in this crate.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocaleId {
    language: String,
    region: Option<String>,
}

impl LocaleId {
    /// Parse a locale tag. The language subtag is lowercased and the region
    /// (anything after the first `-` or `_`) uppercased; an empty tag parses
    /// as the empty language, which simply never matches any resource and
    /// falls through to the default locale.
    pub fn new(tag: &str) -> Self {
        let mut parts = tag.splitn(2, ['-', '_']);
        let language = parts.next().unwrap_or_default().to_ascii_lowercase();
        let region = parts
            .next()
            .filter(|r| !r.is_empty())
            .map(|r| r.to_ascii_uppercase());
        LocaleId { language, region }
    }

    /// Primary language subtag (lowercase).
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Full normalized tag (`language` or `language-REGION`).
    pub fn tag(&self) -> String {
        match &self.region {
            Some(region) => format!("{}-{}", self.language, region),
            None => self.language.clone(),
        }
    }
}

impl std::fmt::Display for LocaleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.tag())
    }
}

impl From<&str> for LocaleId {
    fn from(tag: &str) -> Self {
        LocaleId::new(tag)
    }
}

/// LocaleTemplate — phrase fragments for rendering one unit in one locale.
///
/// Fields
/// ------
/// - `singular` / `plural`: unit names; magnitude exactly 1 selects the
///   singular, every other magnitude (including 0) the plural.
/// - `pattern`: numeric pattern; `%n` is replaced by the absolute quantity,
///   `%u` by the grammatically correct name. An empty pattern renders an
///   empty fragment (used by "moment" phrasing, where the suffix carries the
///   whole phrase).
/// - `future_prefix` / `future_suffix`: wrap the fragment for positive
///   deltas.
/// - `past_prefix` / `past_suffix`: wrap the fragment for negative deltas.
/// - `rounding_tolerance`: percentage of one full unit the leftover
///   remainder must exceed before the displayed quantity rounds up
///   (validated to `0..=100`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleTemplate {
    /// Name used when the displayed magnitude is exactly 1.
    pub singular: String,
    /// Name used for every other magnitude, including 0.
    pub plural: String,
    /// Numeric pattern with `%n` / `%u` placeholders.
    pub pattern: String,
    /// Prefix for future (positive) deltas.
    pub future_prefix: String,
    /// Suffix for future (positive) deltas.
    pub future_suffix: String,
    /// Prefix for past (negative) deltas.
    pub past_prefix: String,
    /// Suffix for past (negative) deltas.
    pub past_suffix: String,
    /// Round-up threshold as a percentage of one unit (`0..=100`).
    pub rounding_tolerance: u32,
}

impl LocaleTemplate {
    /// Construct a validated template.
    ///
    /// Returns
    /// -------
    /// FormatResult<LocaleTemplate>
    ///   - `Ok(LocaleTemplate)` when `rounding_tolerance <= 100`.
    ///   - `Err(FormatError::InvalidTolerance)` otherwise.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        singular: &str, plural: &str, pattern: &str, future_prefix: &str, future_suffix: &str,
        past_prefix: &str, past_suffix: &str, rounding_tolerance: u32,
    ) -> FormatResult<Self> {
        if rounding_tolerance > 100 {
            return Err(FormatError::InvalidTolerance { value: rounding_tolerance });
        }

        Ok(LocaleTemplate {
            singular: singular.to_string(),
            plural: plural.to_string(),
            pattern: pattern.to_string(),
            future_prefix: future_prefix.to_string(),
            future_suffix: future_suffix.to_string(),
            past_prefix: past_prefix.to_string(),
            past_suffix: past_suffix.to_string(),
            rounding_tolerance,
        })
    }

    /// Grammatically correct unit name for a displayed magnitude.
    pub fn name_for(&self, magnitude: i64) -> &str {
        if magnitude.abs() == 1 { &self.singular } else { &self.plural }
    }
}
