//! Time units for humanized formatting — identity, size, and overflow ceiling.
//!
//! Purpose
//! -------
//! Define the [`TimeUnit`] value record and the [`UnitName`] identity enum
//! used throughout decomposition and formatting, plus the default unit set
//! seeded into every new engine.
//!
//! Key behaviors
//! -------------
//! - Represent a unit as a plain data record: size in milliseconds, an
//!   overflow ceiling, and an optional explicit template override.
//! - Validate sizes and ceilings at construction time via typed errors
//!   (`FormatError`) instead of panicking at call sites.
//! - Provide the built-in calendar-approximation constants (average Gregorian
//!   month, 12-month year, and so on) and [`default_units`].
//!
//! Invariants & assumptions
//! ------------------------
//! - `millis_per_unit > 0` for every constructed unit.
//! - `max_quantity >= 0`; the value 0 means "no explicit ceiling" and is
//!   resolved against the next coarser unit by the table (see
//!   `core::table`).
//! - The built-in constants are deliberate approximations; the crate
//!   optimizes for human phrasing, not calendar exactness.
//!
//! Conventions
//! -----------
//! - A unit with `template: None` is a "default-templated unit" whose phrases
//!   come from locale resolution by `name`; a unit with `template: Some(..)`
//!   is a "fully custom unit" and never consults the resolver.
//! - Default units are listed finest first; the table preserves registration
//!   order and never re-sorts.

use crate::{
    errors::{FormatError, FormatResult},
    locale::templates::LocaleTemplate,
};

// ---- Built-in unit sizes (milliseconds) -----------------------------------

/// One second.
pub const MILLIS_PER_SECOND: i64 = 1_000;
/// One minute.
pub const MILLIS_PER_MINUTE: i64 = 60 * MILLIS_PER_SECOND;
/// One hour.
pub const MILLIS_PER_HOUR: i64 = 60 * MILLIS_PER_MINUTE;
/// One day.
pub const MILLIS_PER_DAY: i64 = 24 * MILLIS_PER_HOUR;
/// One week.
pub const MILLIS_PER_WEEK: i64 = 7 * MILLIS_PER_DAY;
/// Average Gregorian month.
pub const MILLIS_PER_MONTH: i64 = 2_629_743_830;
/// Twelve average months.
pub const MILLIS_PER_YEAR: i64 = 12 * MILLIS_PER_MONTH;
/// Ten years.
pub const MILLIS_PER_DECADE: i64 = 10 * MILLIS_PER_YEAR;
/// Ten decades.
pub const MILLIS_PER_CENTURY: i64 = 10 * MILLIS_PER_DECADE;

/// Ceiling of the moment unit: deltas within five minutes phrase as
/// "moments" rather than seconds or minutes.
pub const MOMENT_MAX_QUANTITY: i64 = 5 * MILLIS_PER_MINUTE;

/// Identity of a time unit, used as the locale-resolution key.
///
/// Built-in variants cover the default table; caller-registered units use
/// [`UnitName::Custom`] and are expected to carry an explicit template,
/// since no built-in locale ships resources for them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum UnitName {
    /// Degenerate "right now" unit (1 ms per unit, five-minute ceiling).
    Moment,
    /// Seconds.
    Second,
    /// Minutes.
    Minute,
    /// Hours.
    Hour,
    /// Days.
    Day,
    /// Weeks.
    Week,
    /// Average Gregorian months.
    Month,
    /// Twelve-month years.
    Year,
    /// Ten-year decades.
    Decade,
    /// Ten-decade centuries.
    Century,
    /// Caller-defined unit, labeled for error messages and debugging.
    Custom(String),
}

impl UnitName {
    /// Stable lowercase label (the custom label for [`UnitName::Custom`]).
    pub fn label(&self) -> &str {
        match self {
            UnitName::Moment => "moment",
            UnitName::Second => "second",
            UnitName::Minute => "minute",
            UnitName::Hour => "hour",
            UnitName::Day => "day",
            UnitName::Week => "week",
            UnitName::Month => "month",
            UnitName::Year => "year",
            UnitName::Decade => "decade",
            UnitName::Century => "century",
            UnitName::Custom(label) => label,
        }
    }
}

impl std::fmt::Display for UnitName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// TimeUnit — one entry of the unit table.
///
/// Purpose
/// -------
/// Carry everything the decomposer and formatter need to know about one
/// granularity: its identity, its size in milliseconds, the ceiling at which
/// remaining quantity overflows to the next coarser unit, and an optional
/// explicit phrase template.
///
/// Fields
/// ------
/// - `name`: [`UnitName`]
///   Identity; the locale resolver keys on it when `template` is `None`.
/// - `millis_per_unit`: `i64`
///   Size of one unit in milliseconds; strictly positive.
/// - `max_quantity`: `i64`
///   Effective-range ceiling. When the absolute remaining quantity in this
///   unit reaches or exceeds it, the remainder overflows to the next coarser
///   unit. 0 means "inferred from the next unit's size"; for the coarsest
///   unit, 0 means unbounded.
/// - `template`: `Option<LocaleTemplate>`
///   Explicit override; when present, locale resolution is skipped entirely
///   for this unit.
///
/// Invariants
/// ----------
/// - `millis_per_unit > 0` and `max_quantity >= 0`, enforced by
///   [`TimeUnit::new`]. Fields are public for ergonomic pattern access;
///   callers mutating them directly take over responsibility for these
///   invariants, as with the validated records elsewhere in this crate.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeUnit {
    /// Identity and locale-resolution key.
    pub name: UnitName,
    /// Size of one unit in milliseconds (strictly positive).
    pub millis_per_unit: i64,
    /// Overflow ceiling (non-negative; 0 means inferred / unbounded).
    pub max_quantity: i64,
    /// Explicit phrase template; `None` defers to locale resolution.
    pub template: Option<LocaleTemplate>,
}

impl TimeUnit {
    /// Construct a validated, default-templated unit.
    ///
    /// Returns
    /// -------
    /// FormatResult<TimeUnit>
    ///   - `Ok(TimeUnit)` when `millis_per_unit > 0` and `max_quantity >= 0`.
    ///   - `Err(FormatError::NonPositiveMillisPerUnit)` for a zero or
    ///     negative size.
    ///   - `Err(FormatError::NegativeMaxQuantity)` for a negative ceiling.
    ///
    /// Notes
    /// -----
    /// - The returned unit carries no explicit template; attach one via
    ///   the engine's `register_unit`, which stores the template on the unit
    ///   before appending it to the table.
    pub fn new(name: UnitName, millis_per_unit: i64, max_quantity: i64) -> FormatResult<Self> {
        if millis_per_unit <= 0 {
            return Err(FormatError::NonPositiveMillisPerUnit { value: millis_per_unit });
        }

        if max_quantity < 0 {
            return Err(FormatError::NegativeMaxQuantity { value: max_quantity });
        }

        Ok(TimeUnit { name, millis_per_unit, max_quantity, template: None })
    }
}

/// The default unit set, finest first: moment, second, minute, hour, day,
/// week, month, year, decade, century.
///
/// The moment unit is 1 ms per unit with an explicit five-minute ceiling, so
/// sub-five-minute deltas phrase as "moments"; every other ceiling is 0 and
/// is inferred from the next coarser unit by the table.
pub(crate) fn default_units() -> Vec<TimeUnit> {
    let defaults: [(UnitName, i64, i64); 10] = [
        (UnitName::Moment, 1, MOMENT_MAX_QUANTITY),
        (UnitName::Second, MILLIS_PER_SECOND, 0),
        (UnitName::Minute, MILLIS_PER_MINUTE, 0),
        (UnitName::Hour, MILLIS_PER_HOUR, 0),
        (UnitName::Day, MILLIS_PER_DAY, 0),
        (UnitName::Week, MILLIS_PER_WEEK, 0),
        (UnitName::Month, MILLIS_PER_MONTH, 0),
        (UnitName::Year, MILLIS_PER_YEAR, 0),
        (UnitName::Decade, MILLIS_PER_DECADE, 0),
        (UnitName::Century, MILLIS_PER_CENTURY, 0),
    ];

    defaults.into_iter()
        .map(|(name, millis_per_unit, max_quantity)| TimeUnit {
            name,
            millis_per_unit,
            max_quantity,
            template: None,
        })
        .collect()
}
