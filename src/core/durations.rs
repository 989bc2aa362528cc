//! Transient duration values produced by decomposition.
//!
//! Purpose
//! -------
//! Define [`Duration`], the (unit, signed quantity, leftover delta) value
//! that decomposition emits and formatting consumes, together with its sign
//! helpers and the tolerance-based rounding rule.
//!
//! Key behaviors
//! -------------
//! - Carry an owned [`TimeUnit`] clone plus the truncated quantity and the
//!   milliseconds still unaccounted for after `quantity * millis_per_unit`.
//! - Classify a duration as future or past from the quantity's sign, falling
//!   back to the leftover delta's sign when the quantity is zero (sub-unit
//!   deltas).
//! - Round the displayed quantity up by one in the sign direction once the
//!   leftover passes a tolerance percentage of one full unit.
//!
//! Invariants & assumptions
//! ------------------------
//! - `quantity` and `delta` share the overall delta's sign (or are zero);
//!   decomposition guarantees `abs(delta) < unit.millis_per_unit` whenever
//!   `quantity != 0`.
//! - Durations are transient: created fresh per decomposition call, never
//!   retained by the engine.
//!
//! Conventions
//! -----------
//! - A zero-signed duration (quantity 0, delta 0) is treated as future, so
//!   an exactly-now instant phrases with the future slots ("moments from
//!   now").

use crate::core::units::TimeUnit;

/// One decomposed (unit, quantity, leftover) entry.
///
/// Produced coarsest-first by `core::decompose`; the terminal entry's
/// `delta` is the final remainder, so summing `quantity * millis_per_unit`
/// over a decomposition plus that remainder reproduces the input delta
/// exactly.
#[derive(Debug, Clone, PartialEq)]
pub struct Duration {
    /// The unit this entry counts.
    pub unit: TimeUnit,
    /// Signed count of whole units, truncated toward zero.
    pub quantity: i64,
    /// Signed milliseconds left unaccounted after `quantity * millis_per_unit`.
    pub delta: i64,
}

impl Duration {
    /// Bundle a decomposition entry.
    pub fn new(unit: TimeUnit, quantity: i64, delta: i64) -> Self {
        Duration { unit, quantity, delta }
    }

    /// Overall sign: the quantity's when non-zero, else the leftover's.
    pub(crate) fn sign(&self) -> i64 {
        if self.quantity != 0 { self.quantity.signum() } else { self.delta.signum() }
    }

    /// True for positive deltas and for the exactly-zero duration.
    pub fn is_in_future(&self) -> bool {
        self.sign() >= 0
    }

    /// True for negative deltas.
    pub fn is_in_past(&self) -> bool {
        self.sign() < 0
    }

    /// Displayed quantity after applying the rounding tolerance: the
    /// magnitude grows by one when the leftover remainder exceeds
    /// `tolerance` percent of one full unit, and the result carries the
    /// duration's overall sign.
    ///
    /// Increasing the tolerance never increases the rounded magnitude, so
    /// rounding is monotone in the tolerance for a fixed delta.
    pub fn quantity_rounded(&self, tolerance: u32) -> i64 {
        let mut magnitude = self.quantity.abs();
        if self.delta.abs().saturating_mul(100)
            > i64::from(tolerance).saturating_mul(self.unit.millis_per_unit)
        {
            magnitude += 1;
        }
        magnitude * self.sign()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::units::{UnitName, MILLIS_PER_HOUR, MILLIS_PER_MINUTE};

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Sign classification, including the zero-quantity fallback to the
    //   leftover delta and the exactly-zero case.
    // - Tolerance rounding at, below, and above the threshold, and its
    //   monotonicity in the tolerance.
    //
    // They intentionally DO NOT cover:
    // - Production of quantities/deltas from raw inputs (tested in
    //   `core::decompose`).
    // - How rounded quantities are rendered (tested in `formatter`).
    // -------------------------------------------------------------------------

    fn hour_duration(quantity: i64, delta: i64) -> Duration {
        let unit =
            TimeUnit::new(UnitName::Hour, MILLIS_PER_HOUR, 0).expect("valid built-in shape");
        Duration::new(unit, quantity, delta)
    }

    #[test]
    // Purpose
    // -------
    // Verify sign classification: positive quantities are future, negative
    // are past, a zero quantity defers to the leftover, and the all-zero
    // duration counts as future.
    fn sign_classification_covers_zero_quantity() {
        assert!(hour_duration(2, 0).is_in_future());
        assert!(hour_duration(-2, 0).is_in_past());
        assert!(hour_duration(0, 30_000).is_in_future());
        assert!(hour_duration(0, -30_000).is_in_past());
        assert!(hour_duration(0, 0).is_in_future());
    }

    #[test]
    // Purpose
    // -------
    // Pin the rounding threshold: a leftover of 49 minutes on one hour
    // (81.7 % of a unit) rounds up at tolerance 50 but not at tolerance 90,
    // and an exactly-half leftover does not round at tolerance 50 (strict
    // inequality).
    fn quantity_rounded_applies_tolerance() {
        // Arrange
        let heavy_leftover = hour_duration(1, 49 * MILLIS_PER_MINUTE);
        let half_leftover = hour_duration(1, 30 * MILLIS_PER_MINUTE);

        // Act / Assert
        assert_eq!(heavy_leftover.quantity_rounded(50), 2);
        assert_eq!(heavy_leftover.quantity_rounded(90), 1);
        assert_eq!(half_leftover.quantity_rounded(50), 1);
        assert_eq!(half_leftover.quantity_rounded(49), 2);
    }

    #[test]
    // Purpose
    // -------
    // Ensure rounding preserves the sign direction for past durations and
    // can lift a zero quantity to ±1.
    fn quantity_rounded_respects_sign() {
        assert_eq!(hour_duration(-1, -49 * MILLIS_PER_MINUTE).quantity_rounded(50), -2);
        assert_eq!(hour_duration(0, 45 * MILLIS_PER_MINUTE).quantity_rounded(50), 1);
        assert_eq!(hour_duration(0, -45 * MILLIS_PER_MINUTE).quantity_rounded(50), -1);
    }

    #[test]
    // Purpose
    // -------
    // Property: for a fixed duration, the rounded magnitude never increases
    // as the tolerance increases.
    fn quantity_rounded_is_monotone_in_tolerance() {
        // Arrange
        let duration = hour_duration(3, 37 * MILLIS_PER_MINUTE);

        // Act / Assert
        let mut previous = duration.quantity_rounded(0).abs();
        for tolerance in 1..=100 {
            let current = duration.quantity_rounded(tolerance).abs();
            assert!(current <= previous, "rounding grew at tolerance {tolerance}");
            previous = current;
        }
    }
}
