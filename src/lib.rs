//! humanize_time — humanized relative-time decomposition and formatting.
//!
//! Purpose
//! -------
//! Given a reference instant and a target instant, compute "how long ago /
//! from now" in human language ("3 days 15 hours 38 minutes ago"). The crate
//! supports calendar-like units from moments through centuries, runtime unit
//! registration, locale-specific phrasing with singular/plural forms and
//! sign-dependent prefixes/suffixes, and tolerance-based rounding.
//!
//! Key behaviors
//! -------------
//! - Decompose signed millisecond deltas into ordered (unit, quantity)
//!   sequences against a mutable but validated unit table ([`core`]).
//! - Resolve phrase templates per locale with exact → base-language →
//!   default fallback and per-engine caching ([`locale`]).
//! - Render single rounded phrases or precise multi-unit phrases
//!   ([`formatter`]), all through the [`TimeEngine`] facade ([`engine`]).
//!
//! Invariants & assumptions
//! ------------------------
//! - Unit sizes are deliberate calendar approximations (average Gregorian
//!   month, 12-month year); the crate optimizes for human phrasing, not
//!   calendar exactness. Leap seconds and timezone wall-clock semantics are
//!   out of scope.
//! - Engine state is per-instance: independent engines with different unit
//!   tables or locales coexist without interaction.
//! - The crate performs no I/O and no logging; callers orchestrate both.
//!   Errors are surfaced as [`FormatResult`] values, never panics.
//!
//! Downstream usage
//! ----------------
//! - Typical flow:
//!   1. Build a [`TimeEngine`] (optionally [`TimeEngine::with_locale`]).
//!   2. Optionally fix the reference instant, clear the default units, or
//!      register custom units with explicit templates.
//!   3. Call [`TimeEngine::format`] for a single phrase,
//!      [`TimeEngine::decompose`] + [`TimeEngine::format_durations`] for
//!      precise multi-unit phrasing.
//!
//! ```rust
//! use chrono::DateTime;
//! use humanize_time::prelude::*;
//!
//! let mut engine = TimeEngine::new();
//! engine.set_reference(DateTime::from_timestamp_millis(0).unwrap());
//!
//! let phrase = engine.format(DateTime::from_timestamp_millis(720_000).unwrap()).unwrap();
//! assert_eq!(phrase, "12 minutes from now");
//! ```
//!
//! Testing notes
//! -------------
//! - Unit tests live beside each module; the end-to-end scenarios (custom
//!   units, locales, multi-unit phrases) are in
//!   `tests/integration_format_pipeline.rs`.

pub mod core;
pub mod engine;
pub mod errors;
pub mod formatter;
pub mod locale;

// ---- Re-exports (primary public surface) ----------------------------------
//
// These are the “everyday” types most users need. Lower-level pieces
// (decomposition functions, the resolver, resource tables) remain under
// their respective submodules.

pub use crate::core::{Duration, TimeUnit, UnitName, UnitTable};
pub use crate::engine::TimeEngine;
pub use crate::errors::{FormatError, FormatResult};
pub use crate::locale::{LocaleId, LocaleTemplate};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use humanize_time::prelude::*;
//
// to import the main formatting surface in a single line.

pub mod prelude {
    pub use super::{
        Duration, FormatError, FormatResult, LocaleId, LocaleTemplate, TimeEngine, TimeUnit,
        UnitName, UnitTable,
    };
}
