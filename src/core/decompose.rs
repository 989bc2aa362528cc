//! Decomposition of signed millisecond deltas into duration sequences.
//!
//! Purpose
//! -------
//! Convert a signed delta into (unit, quantity, leftover) entries against an
//! active [`UnitTable`]: a single leading-unit duration for one-phrase
//! formatting, and a precise coarsest-first sequence for multi-unit phrasing.
//!
//! Key behaviors
//! -------------
//! - Select the leading unit via the table's effective-range scan and
//!   truncate the quantity toward zero, carrying the exact remainder in the
//!   entry's `delta`.
//! - Build precise decompositions by repeatedly taking the leading duration
//!   of the remaining delta, appending entries with non-zero quantity, until
//!   the remainder is zero or no finer unit can consume it.
//! - Fail with `FormatError::UnresolvedUnit` against an empty table; no
//!   other failure mode exists.
//!
//! Invariants & assumptions
//! ------------------------
//! - Quantities truncate toward zero, so every entry's `quantity` and
//!   `delta` carry the input delta's sign (or are zero).
//! - The terminal entry's `delta` is the final remainder:
//!   `Σ quantity_i × millis_per_unit_i + last.delta` reproduces the input
//!   exactly. No clamping or padding is applied at this layer; display
//!   rounding belongs to the formatter.
//! - Each loop iteration strictly reduces the set of units that can still
//!   consume the remainder, so the precise decomposition terminates after at
//!   most one entry per registered unit.
//!
//! Conventions
//! -----------
//! - Deltas are `target - reference` in milliseconds: positive means future,
//!   negative means past, zero decomposes to a single zero entry on the
//!   finest applicable unit.
//! - Output order is coarsest unit first.
//!
//! Downstream usage
//! ----------------
//! - `engine::TimeEngine` computes deltas from `chrono` instants and calls
//!   [`leading_duration`] for `format` / `approximate_duration` and
//!   [`precise_durations`] for `decompose`.
//!
//! Testing notes
//! -------------
//! - Unit tests below cover single-entry decomposition, the multi-unit
//!   day/hour/minute scenario, sign mirroring, the round-trip law across a
//!   spread of deltas, sub-unit remainders on custom tables, and the
//!   empty-table error. Phrase-level behavior is tested in `formatter` and
//!   end-to-end in `tests/`.

use crate::{
    core::{durations::Duration, table::UnitTable},
    errors::FormatResult,
};

/// Decompose a delta onto its leading unit only.
///
/// The quantity is `delta / millis_per_unit` truncated toward zero and the
/// entry's `delta` field holds the exact remainder. For a magnitude smaller
/// than the leading unit the quantity is 0 and the whole delta is carried as
/// the remainder — display rounding may still lift it to one unit.
///
/// Errors
/// ------
/// - `FormatError::UnresolvedUnit` when the table is empty.
pub fn leading_duration(table: &UnitTable, delta: i64) -> FormatResult<Duration> {
    let unit = table.leading_unit(delta.abs())?.clone();
    let quantity = delta / unit.millis_per_unit;
    let remainder = delta - quantity * unit.millis_per_unit;
    Ok(Duration::new(unit, quantity, remainder))
}

/// Decompose a delta into an ordered sequence, coarsest unit first.
///
/// Entries with a zero quantity are appended only when they terminate the
/// sequence as the remainder carrier (the first entry always appears, so a
/// sub-unit delta still yields its terminal entry). The final entry's
/// `delta` is the undecomposed remainder, making the decomposition exactly
/// reversible.
///
/// Errors
/// ------
/// - `FormatError::UnresolvedUnit` when the table is empty.
pub fn precise_durations(table: &UnitTable, delta: i64) -> FormatResult<Vec<Duration>> {
    let mut durations = Vec::new();
    let mut remaining = delta;

    loop {
        let duration = leading_duration(table, remaining)?;
        // A zero quantity means no finer unit can consume the remainder;
        // a zero leftover means the delta is fully decomposed.
        let done = duration.quantity == 0 || duration.delta == 0;
        remaining = duration.delta;

        if duration.quantity != 0 || durations.is_empty() {
            durations.push(duration);
        }
        if done {
            break;
        }
    }

    Ok(durations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::units::{
            TimeUnit, UnitName, MILLIS_PER_DAY, MILLIS_PER_HOUR, MILLIS_PER_MINUTE,
        },
        errors::FormatError,
    };

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Leading-unit decomposition for exact and inexact deltas, both signs.
    // - Precise decomposition ordering, zero-quantity suppression, and
    //   termination on custom tables.
    // - The exact round-trip law and the empty-table error.
    //
    // They intentionally DO NOT cover:
    // - Leading-unit *selection* rules (tested in `core::table`).
    // - Rounding and phrase rendering (tested in `durations` / `formatter`).
    // -------------------------------------------------------------------------

    /// Reconstruct the input delta from a precise decomposition:
    /// Σ quantity × millis_per_unit over all entries, plus the terminal
    /// entry's leftover.
    fn reassemble(durations: &[Duration]) -> i64 {
        let counted: i64 =
            durations.iter().map(|d| d.quantity * d.unit.millis_per_unit).sum();
        counted + durations.last().map(|d| d.delta).unwrap_or(0)
    }

    #[test]
    // Purpose
    // -------
    // Verify that an exact 12-minute future delta decomposes onto the minute
    // unit with no remainder.
    fn leading_duration_exact_minutes() {
        // Arrange
        let table = UnitTable::with_defaults();

        // Act
        let duration =
            leading_duration(&table, 12 * MILLIS_PER_MINUTE).expect("non-empty table");

        // Assert
        assert_eq!(duration.unit.name, UnitName::Minute);
        assert_eq!(duration.quantity, 12);
        assert_eq!(duration.delta, 0);
    }

    #[test]
    // Purpose
    // -------
    // Verify truncation toward zero with a remainder: 1 hour 49 minutes in
    // the past is -1 hour with -49 minutes left over.
    fn leading_duration_truncates_toward_zero() {
        // Arrange
        let table = UnitTable::with_defaults();
        let delta = -(MILLIS_PER_HOUR + 49 * MILLIS_PER_MINUTE);

        // Act
        let duration = leading_duration(&table, delta).expect("non-empty table");

        // Assert
        assert_eq!(duration.unit.name, UnitName::Hour);
        assert_eq!(duration.quantity, -1);
        assert_eq!(duration.delta, -49 * MILLIS_PER_MINUTE);
    }

    #[test]
    // Purpose
    // -------
    // Pin the multi-unit scenario: 3 days 15 hours 38 minutes in the past
    // decomposes coarsest-first into exactly those three entries with a zero
    // final remainder.
    fn precise_durations_day_hour_minute() {
        // Arrange
        let table = UnitTable::with_defaults();
        let delta = -(3 * MILLIS_PER_DAY + 15 * MILLIS_PER_HOUR + 38 * MILLIS_PER_MINUTE);

        // Act
        let durations = precise_durations(&table, delta).expect("non-empty table");

        // Assert
        let shape: Vec<(UnitName, i64)> =
            durations.iter().map(|d| (d.unit.name.clone(), d.quantity)).collect();
        assert_eq!(
            shape,
            vec![(UnitName::Day, -3), (UnitName::Hour, -15), (UnitName::Minute, -38)]
        );
        assert_eq!(durations.last().map(|d| d.delta), Some(0));
    }

    #[test]
    // Purpose
    // -------
    // Property: decomposition is exactly reversible for a spread of deltas
    // across unit boundaries and both signs (round-trip law).
    fn precise_durations_round_trip() {
        // Arrange
        let table = UnitTable::with_defaults();
        let deltas = [
            0,
            1,
            -1,
            999,
            2_000,
            -2_000,
            12 * MILLIS_PER_MINUTE,
            MILLIS_PER_HOUR + 49 * MILLIS_PER_MINUTE + 3_211,
            -(3 * MILLIS_PER_DAY + 15 * MILLIS_PER_HOUR + 38 * MILLIS_PER_MINUTE),
            7 * MILLIS_PER_DAY + 1,
            -1_234_567_890_123,
        ];

        // Act / Assert
        for delta in deltas {
            let durations = precise_durations(&table, delta).expect("non-empty table");
            assert_eq!(reassemble(&durations), delta, "round-trip failed for {delta}");
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify sign mirroring: negating the delta negates every quantity and
    // leftover but keeps the same unit sequence.
    fn precise_durations_mirror_sign() {
        // Arrange
        let table = UnitTable::with_defaults();
        let delta = 3 * MILLIS_PER_DAY + 15 * MILLIS_PER_HOUR + 38 * MILLIS_PER_MINUTE + 17;

        // Act
        let future = precise_durations(&table, delta).expect("non-empty table");
        let past = precise_durations(&table, -delta).expect("non-empty table");

        // Assert
        assert_eq!(future.len(), past.len());
        for (f, p) in future.iter().zip(past.iter()) {
            assert_eq!(f.unit, p.unit);
            assert_eq!(f.quantity, -p.quantity);
            assert_eq!(f.delta, -p.delta);
        }
    }

    #[test]
    // Purpose
    // -------
    // Ensure a sub-unit delta on a single-unit table terminates with one
    // zero-quantity entry carrying the whole delta as remainder.
    fn precise_durations_sub_unit_remainder() {
        // Arrange
        let mut table = UnitTable::empty();
        table
            .register(
                TimeUnit::new(UnitName::Custom("tick".to_string()), 5_000, 0)
                    .expect("valid custom unit"),
            )
            .expect("registration succeeds");

        // Act
        let durations = precise_durations(&table, 3_000).expect("non-empty table");

        // Assert
        assert_eq!(durations.len(), 1);
        assert_eq!(durations[0].quantity, 0);
        assert_eq!(durations[0].delta, 3_000);
        assert_eq!(reassemble(&durations), 3_000);
    }

    #[test]
    // Purpose
    // -------
    // Ensure decomposition against a cleared table fails with
    // `UnresolvedUnit` for any non-zero delta.
    fn empty_table_is_unresolved() {
        // Arrange
        let mut table = UnitTable::with_defaults();
        table.clear();

        // Act / Assert
        assert!(matches!(leading_duration(&table, 42), Err(FormatError::UnresolvedUnit)));
        assert!(matches!(precise_durations(&table, 42), Err(FormatError::UnresolvedUnit)));
    }
}
