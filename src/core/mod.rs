//! core — unit catalog, duration values, and delta decomposition.
//!
//! Purpose
//! -------
//! Collect the data and algorithms underneath the engine facade: the
//! [`TimeUnit`] record and default unit set, the ordered [`UnitTable`]
//! registry with leading-unit selection, the transient [`Duration`] value
//! with its rounding rule, and the decomposition functions that turn signed
//! millisecond deltas into duration sequences.
//!
//! Key behaviors
//! -------------
//! - Validate unit definitions at construction and table invariants at
//!   registration, surfacing `FormatError` values instead of panicking.
//! - Select leading units by effective range (explicit or inferred overflow
//!   ceilings; the coarsest unit absorbs everything).
//! - Decompose deltas with truncation toward zero and an exact carried
//!   remainder, so decompositions are reversible.
//!
//! Conventions
//! -----------
//! - Everything here is pure computation on plain values: no I/O, no
//!   logging, no clocks. Instants and "now" handling live in `engine`;
//!   phrase rendering lives in `formatter`.
//! - Deltas are signed milliseconds (`target - reference`); unit order is
//!   registration order, finest first.
//!
//! Testing notes
//! -------------
//! - Each submodule carries its own unit tests (validation, selection,
//!   rounding, decomposition laws); end-to-end phrase scenarios live in
//!   `tests/integration_format_pipeline.rs`.

pub mod decompose;
pub mod durations;
pub mod table;
pub mod units;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::decompose::{leading_duration, precise_durations};
pub use self::durations::Duration;
pub use self::table::UnitTable;
pub use self::units::{TimeUnit, UnitName};
