//! Engine facade — the public surface over the unit table, locale resolver,
//! decomposer, and formatter.
//!
//! Purpose
//! -------
//! Provide [`TimeEngine`], the configured entry point for humanized
//! relative-time formatting: it owns an independent unit table, a locale
//! (with its per-engine template cache), and an optional fixed reference
//! instant, and exposes the format / decompose / configure operations.
//!
//! Key behaviors
//! -------------
//! - Compute signed millisecond deltas between `chrono` instants
//!   (`DateTime<Utc>`); the reference defaults to `Utc::now()` at call time
//!   unless a fixed reference is configured.
//! - Format a target instant as a single rounded phrase, decompose it into
//!   a precise duration sequence, or format caller-supplied sequences.
//! - Mutate configuration explicitly: clear and register units, switch the
//!   locale (resetting the template cache), set or clear the fixed
//!   reference.
//!
//! Invariants & assumptions
//! ------------------------
//! - Engine state is process-local, never global: independent engines with
//!   different locales or unit tables cannot interfere with each other.
//! - The configure-then-freeze pattern governs concurrency: `&self`
//!   operations are pure apart from the template cache (interior-mutable,
//!   single-owner), so an engine is not `Sync`; clone per thread instead of
//!   sharing.
//! - Every call completes in time proportional to the number of registered
//!   units; there is no I/O, no logging, and no cancellation concept.
//!
//! Conventions
//! -----------
//! - `delta = target - reference`: positive phrases as future, negative as
//!   past. Swapping target and reference mirrors the phrasing sign while
//!   keeping magnitude and unit choice.
//! - Custom units registered through [`TimeEngine::register_unit`] carry
//!   their template explicitly and bypass locale resolution.
//!
//! Downstream usage
//! ----------------
//! - Typical flow: construct (optionally `with_locale`), optionally
//!   `set_reference` / `clear_units` / `register_unit`, then call `format`,
//!   `decompose`, or `format_durations` freely.
//!
//! Testing notes
//! -------------
//! - Unit tests below cover reference handling, configuration mutation, and
//!   the custom-unit scenario; the full phrase scenarios live in
//!   `tests/integration_format_pipeline.rs`.

use chrono::{DateTime, Utc};

use crate::{
    core::{
        decompose,
        durations::Duration,
        table::UnitTable,
        units::TimeUnit,
    },
    errors::FormatResult,
    formatter,
    locale::{
        resolver::LocaleResolver,
        templates::{LocaleId, LocaleTemplate},
    },
};

/// Configured humanized relative-time engine.
///
/// Each instance owns its unit table, locale, and reference-time policy;
/// construction seeds the default units and the English locale.
#[derive(Debug, Clone)]
pub struct TimeEngine {
    units: UnitTable,
    resolver: LocaleResolver,
    reference: Option<DateTime<Utc>>,
}

impl TimeEngine {
    /// Engine with default units, the English locale, and a floating "now"
    /// reference.
    pub fn new() -> Self {
        TimeEngine::with_locale(LocaleId::new("en"))
    }

    /// Engine with default units and an explicit locale.
    pub fn with_locale(locale: LocaleId) -> Self {
        TimeEngine {
            units: UnitTable::with_defaults(),
            resolver: LocaleResolver::new(locale),
            reference: None,
        }
    }

    // ---- Formatting ------------------------------------------------------

    /// Humanize `target` against the engine's reference (fixed reference if
    /// configured, else the current instant): a single leading-unit phrase
    /// with tolerance rounding, e.g. `"3 hours from now"`.
    pub fn format(&self, target: DateTime<Utc>) -> FormatResult<String> {
        self.format_between(target, self.reference_instant())
    }

    /// Humanize `target` against an explicit reference instant.
    pub fn format_between(
        &self, target: DateTime<Utc>, reference: DateTime<Utc>,
    ) -> FormatResult<String> {
        let duration = decompose::leading_duration(&self.units, delta_millis(target, reference))?;
        formatter::format_single(&duration, &self.resolver)
    }

    /// Render one already-decomposed duration as a decorated phrase.
    pub fn format_duration(&self, duration: &Duration) -> FormatResult<String> {
        formatter::format_single(duration, &self.resolver)
    }

    /// Render a decomposed sequence as one phrase
    /// (`"3 days 15 hours 38 minutes ago"`).
    pub fn format_durations(&self, durations: &[Duration]) -> FormatResult<String> {
        formatter::format_durations(durations, &self.resolver)
    }

    // ---- Decomposition ---------------------------------------------------

    /// Precise decomposition of `target` against the engine's reference,
    /// coarsest unit first.
    pub fn decompose(&self, target: DateTime<Utc>) -> FormatResult<Vec<Duration>> {
        self.decompose_between(target, self.reference_instant())
    }

    /// Precise decomposition against an explicit reference instant.
    pub fn decompose_between(
        &self, target: DateTime<Utc>, reference: DateTime<Utc>,
    ) -> FormatResult<Vec<Duration>> {
        decompose::precise_durations(&self.units, delta_millis(target, reference))
    }

    /// Leading-unit duration only (the quantity a single phrase would show,
    /// before rounding).
    pub fn approximate_duration(&self, target: DateTime<Utc>) -> FormatResult<Duration> {
        decompose::leading_duration(&self.units, delta_millis(target, self.reference_instant()))
    }

    // ---- Configuration ---------------------------------------------------

    /// Remove every registered unit. Subsequent decomposition fails with
    /// `UnresolvedUnit` until units are re-registered.
    pub fn clear_units(&mut self) {
        self.units.clear();
    }

    /// Append a custom unit with its explicit template. Registration order
    /// is evaluation order; the caller registers finest first when mimicking
    /// calendar behavior.
    ///
    /// Errors
    /// ------
    /// - `FormatError::DuplicateUnit` when a unit of the same size is
    ///   already registered.
    pub fn register_unit(&mut self, unit: TimeUnit, template: LocaleTemplate) -> FormatResult<()> {
        let mut unit = unit;
        unit.template = Some(template);
        self.units.register(unit)
    }

    /// Switch the locale; the template cache restarts empty.
    pub fn set_locale(&mut self, locale: LocaleId) {
        self.resolver = LocaleResolver::new(locale);
    }

    /// Freeze the reference instant; until cleared, every call measures
    /// against it instead of the current instant.
    pub fn set_reference(&mut self, instant: DateTime<Utc>) {
        self.reference = Some(instant);
    }

    /// Return to the floating "now" reference.
    pub fn clear_reference(&mut self) {
        self.reference = None;
    }

    // ---- Accessors -------------------------------------------------------

    /// Active locale.
    pub fn locale(&self) -> &LocaleId {
        self.resolver.locale()
    }

    /// Registered units in evaluation order.
    pub fn units(&self) -> &[TimeUnit] {
        self.units.units()
    }

    fn reference_instant(&self) -> DateTime<Utc> {
        self.reference.unwrap_or_else(Utc::now)
    }
}

impl Default for TimeEngine {
    fn default() -> Self {
        TimeEngine::new()
    }
}

/// Signed `target - reference` in milliseconds.
fn delta_millis(target: DateTime<Utc>, reference: DateTime<Utc>) -> i64 {
    target.signed_duration_since(reference).num_milliseconds()
}
