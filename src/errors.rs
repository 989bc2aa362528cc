//! Errors for humanized-time formatting (unit validation, table invariants,
//! and locale-resource resolution).
//!
//! This module defines a single crate-wide error type, [`FormatError`], used
//! across the unit table, the decomposer, the locale resolver, and the engine
//! facade. It implements `Display`/`Error` so callers can bubble failures up
//! with `?` or report them directly.
//!
//! ## Conventions
//! - **Quantities are milliseconds** unless a variant says otherwise.
//! - Unit sizes must be **strictly positive**; overflow ceilings must be
//!   **non-negative** (0 means "inferred from the next coarser unit").
//! - Rounding tolerances are **percentages in `0..=100`**.
//! - All errors are synchronous and surfaced immediately; there are no
//!   transient failures in this crate and nothing is retried or swallowed.

/// Crate-wide result alias for operations that may produce [`FormatError`].
pub type FormatResult<T> = Result<T, FormatError>;

/// Unified error type for relative-time decomposition and formatting.
///
/// Covers construction-time validation of units and templates, unit-table
/// invariants, and locale-resource resolution. Resolution failures after the
/// default-locale fallback ([`FormatError::MissingResource`]) indicate a
/// configuration defect rather than a user error: the call fails, the process
/// does not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    // ---- Unit / template validation ----
    /// A unit's size in milliseconds must be strictly positive.
    NonPositiveMillisPerUnit { value: i64 },

    /// A unit's overflow ceiling must be non-negative (0 means "inferred").
    NegativeMaxQuantity { value: i64 },

    /// A rounding tolerance must be a percentage in `0..=100`.
    InvalidTolerance { value: u32 },

    // ---- Unit-table invariants ----
    /// Two registered units share the same `millis_per_unit`.
    DuplicateUnit { millis_per_unit: i64 },

    /// Decomposition was attempted against an empty unit table.
    UnresolvedUnit,

    // ---- Formatting input ----
    /// `format_durations` was called with an empty duration sequence.
    EmptyDurations,

    // ---- Locale resolution ----
    /// No template for the unit, even after default-locale fallback.
    MissingResource { locale: String, unit: String },
}

impl std::error::Error for FormatError {}

impl std::fmt::Display for FormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Unit / template validation ----
            FormatError::NonPositiveMillisPerUnit { value } => {
                write!(f, "millis_per_unit must be strictly positive; got: {value}")
            }
            FormatError::NegativeMaxQuantity { value } => {
                write!(f, "max_quantity must be non-negative (0 means inferred); got: {value}")
            }
            FormatError::InvalidTolerance { value } => {
                write!(f, "Rounding tolerance must be a percentage in 0..=100; got: {value}")
            }
            // ---- Unit-table invariants ----
            FormatError::DuplicateUnit { millis_per_unit } => {
                write!(
                    f,
                    "A unit with millis_per_unit = {millis_per_unit} is already registered; \
                     unit sizes must be distinct"
                )
            }
            FormatError::UnresolvedUnit => {
                write!(f, "No time unit is registered; cannot decompose a delta")
            }
            // ---- Formatting input ----
            FormatError::EmptyDurations => {
                write!(f, "Cannot format an empty duration sequence")
            }
            // ---- Locale resolution ----
            FormatError::MissingResource { locale, unit } => {
                write!(
                    f,
                    "No locale template for unit '{unit}' under locale '{locale}' \
                     (default locale fallback included); register the unit with an \
                     explicit template or add the resource"
                )
            }
        }
    }
}
