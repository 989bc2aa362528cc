//! Ordered unit registry — seeding, mutation, and leading-unit selection.
//!
//! Purpose
//! -------
//! Provide the growable, ordered catalog of [`TimeUnit`] records that drives
//! decomposition: a table seeded with the built-in calendar approximations,
//! clearable and appendable at runtime, with the effective-range scan that
//! picks the leading unit for a given delta.
//!
//! Key behaviors
//! -------------
//! - Seed the default ten-unit table ([`UnitTable::with_defaults`]) and
//!   support `clear` / `register` for caller-defined unit sets.
//! - Reject duplicate unit sizes at registration with a typed error; never
//!   re-sort — registration order is the evaluation order and belongs to the
//!   caller.
//! - Resolve each unit's effective overflow ceiling (explicit value, or
//!   inferred from the next coarser unit's size, or unbounded for the
//!   coarsest) and select the leading unit for a delta magnitude.
//!
//! Invariants & assumptions
//! ------------------------
//! - No two registered units share a `millis_per_unit` (enforced here).
//! - Callers registering custom units are responsible for ascending-size
//!   order if they want calendar-style evaluation; the selection scan walks
//!   the table in registration order, finest first.
//! - An empty table is a legal state (after `clear`) but any decomposition
//!   against it fails with `FormatError::UnresolvedUnit`.
//!
//! Conventions
//! -----------
//! - "Effective range" of a unit is `millis_per_unit * effective ceiling`;
//!   a unit leads when its range exceeds the delta magnitude. The coarsest
//!   unit absorbs everything — no delta is "too large", only too small
//!   relative to finer granularity.
//!
//! Testing notes
//! -------------
//! - Unit tests below cover seeding, mutation, duplicate rejection, ceiling
//!   inference, and leading-unit selection across the default table and
//!   single-unit custom tables. Decomposition arithmetic on top of the
//!   selection is covered in `core::decompose`.

use crate::{
    core::units::{default_units, TimeUnit},
    errors::{FormatError, FormatResult},
};

/// Ordered catalog of time units, finest first.
///
/// One table belongs to exactly one engine; independent engines never share
/// or interact through a table.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitTable {
    units: Vec<TimeUnit>,
}

impl UnitTable {
    /// Table seeded with the built-in defaults (moment through century).
    pub fn with_defaults() -> Self {
        UnitTable { units: default_units() }
    }

    /// Empty table; decomposition against it fails until units are
    /// registered.
    pub fn empty() -> Self {
        UnitTable { units: Vec::new() }
    }

    /// Remove every unit.
    pub fn clear(&mut self) {
        self.units.clear();
    }

    /// Append a unit in evaluation order.
    ///
    /// Returns
    /// -------
    /// FormatResult<()>
    ///   - `Ok(())` when no registered unit shares the new unit's size.
    ///   - `Err(FormatError::DuplicateUnit)` otherwise; the table is left
    ///     unchanged.
    pub fn register(&mut self, unit: TimeUnit) -> FormatResult<()> {
        if self.units.iter().any(|u| u.millis_per_unit == unit.millis_per_unit) {
            return Err(FormatError::DuplicateUnit { millis_per_unit: unit.millis_per_unit });
        }

        self.units.push(unit);
        Ok(())
    }

    /// Registered units in evaluation order.
    pub fn units(&self) -> &[TimeUnit] {
        &self.units
    }

    /// True when no units are registered.
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Number of registered units.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Effective overflow ceiling for the unit at `index`: the explicit
    /// `max_quantity` when non-zero, else the next coarser unit's size in
    /// this unit (when that ratio is positive), else `None` for unbounded.
    fn effective_max_quantity(&self, index: usize) -> Option<i64> {
        let unit = &self.units[index];
        if unit.max_quantity != 0 {
            return Some(unit.max_quantity);
        }

        let next = self.units.get(index + 1)?;
        let inferred = next.millis_per_unit / unit.millis_per_unit;
        // A non-ascending caller-supplied ordering can make the ratio 0;
        // treat the unit as unbounded rather than unreachable.
        if inferred > 0 { Some(inferred) } else { None }
    }

    /// Index of the leading unit for a delta of the given absolute magnitude
    /// (milliseconds): the first unit, finest first, whose effective range
    /// exceeds the magnitude, falling back to the coarsest unit.
    pub(crate) fn leading_index(&self, magnitude: i64) -> FormatResult<usize> {
        if self.units.is_empty() {
            return Err(FormatError::UnresolvedUnit);
        }

        for (index, unit) in self.units.iter().enumerate() {
            match self.effective_max_quantity(index) {
                None => return Ok(index),
                Some(ceiling) => {
                    if unit.millis_per_unit.saturating_mul(ceiling) > magnitude {
                        return Ok(index);
                    }
                }
            }
        }

        // Every range was exceeded; the coarsest unit absorbs the delta.
        Ok(self.units.len() - 1)
    }

    /// Leading unit for a delta of the given absolute magnitude.
    pub fn leading_unit(&self, magnitude: i64) -> FormatResult<&TimeUnit> {
        self.leading_index(magnitude).map(|index| &self.units[index])
    }
}

impl Default for UnitTable {
    fn default() -> Self {
        UnitTable::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::units::{
        UnitName, MILLIS_PER_CENTURY, MILLIS_PER_DAY, MILLIS_PER_HOUR, MILLIS_PER_MINUTE,
        MOMENT_MAX_QUANTITY,
    };

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Seeding, clearing, and registration (including duplicate rejection).
    // - Ceiling inference and leading-unit selection on the default table and
    //   on small custom tables.
    //
    // They intentionally DO NOT cover:
    // - Quantity/remainder arithmetic (tested in `core::decompose`).
    // - Template lookup for selected units (tested in `locale` / `formatter`).
    // -------------------------------------------------------------------------

    fn custom(label: &str, millis_per_unit: i64) -> TimeUnit {
        TimeUnit::new(UnitName::Custom(label.to_string()), millis_per_unit, 0)
            .expect("valid custom unit")
    }

    #[test]
    // Purpose
    // -------
    // Verify that a defaults-seeded table is non-empty and that `clear`
    // empties it.
    fn with_defaults_seeds_and_clear_empties() {
        // Arrange
        let mut table = UnitTable::with_defaults();
        assert_eq!(table.len(), 10);

        // Act
        table.clear();

        // Assert
        assert!(table.is_empty());
        assert!(matches!(table.leading_index(1), Err(FormatError::UnresolvedUnit)));
    }

    #[test]
    // Purpose
    // -------
    // Ensure `register` appends in order and rejects a duplicate size while
    // leaving the table unchanged.
    fn register_appends_and_rejects_duplicates() {
        // Arrange
        let mut table = UnitTable::empty();
        table.register(custom("tick", 5_000)).expect("first registration succeeds");

        // Act
        let err = table.register(custom("tock", 5_000)).unwrap_err();

        // Assert
        match err {
            FormatError::DuplicateUnit { millis_per_unit } => assert_eq!(millis_per_unit, 5_000),
            other => panic!("expected DuplicateUnit, got {other:?}"),
        }
        assert_eq!(table.len(), 1);
        assert_eq!(table.units()[0].name, UnitName::Custom("tick".to_string()));
    }

    #[test]
    // Purpose
    // -------
    // Pin leading-unit selection on the default table:
    // - sub-five-minute magnitudes stay on the moment unit (explicit
    //   ceiling),
    // - 12 minutes leads on the minute unit (inferred ceilings skip moment
    //   and second),
    // - multi-day magnitudes lead on the day unit.
    fn leading_unit_walks_effective_ranges() {
        // Arrange
        let table = UnitTable::with_defaults();

        // Act / Assert
        let moment = table.leading_unit(2_000).expect("non-empty table");
        assert_eq!(moment.name, UnitName::Moment);

        let boundary = table.leading_unit(MOMENT_MAX_QUANTITY).expect("non-empty table");
        assert_eq!(boundary.name, UnitName::Minute, "reaching the ceiling overflows");

        let minute = table.leading_unit(12 * MILLIS_PER_MINUTE).expect("non-empty table");
        assert_eq!(minute.name, UnitName::Minute);

        let day = table
            .leading_unit(3 * MILLIS_PER_DAY + 15 * MILLIS_PER_HOUR)
            .expect("non-empty table");
        assert_eq!(day.name, UnitName::Day);
    }

    #[test]
    // Purpose
    // -------
    // Ensure the coarsest unit absorbs magnitudes beyond every range: no
    // unit is "too large".
    fn coarsest_unit_absorbs_everything() {
        // Arrange
        let table = UnitTable::with_defaults();

        // Act
        let unit = table.leading_unit(500 * MILLIS_PER_CENTURY).expect("non-empty table");

        // Assert
        assert_eq!(unit.name, UnitName::Century);
    }

    #[test]
    // Purpose
    // -------
    // Verify that a single-unit custom table leads on that unit for every
    // magnitude, including magnitudes smaller than the unit itself.
    fn single_unit_table_always_leads_on_it() {
        // Arrange
        let mut table = UnitTable::empty();
        table.register(custom("tick", 5_000)).expect("registration succeeds");

        // Act / Assert
        for magnitude in [0, 3_000, 25_000, 1_000_000] {
            let unit = table.leading_unit(magnitude).expect("non-empty table");
            assert_eq!(unit.millis_per_unit, 5_000);
        }
    }
}
