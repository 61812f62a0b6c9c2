//! Dimensionless helpers.
//!
//! [`Unitless`] is absorbed by the unit algebra: multiplying or dividing by a dimensionless quantity scales the value
//! and leaves the other operand's unit untouched. A ratio of two quantities that share a dimension becomes
//! dimensionless through [`Quantity::cast`] (or [`Simplify`](crate::Simplify) when the units are identical), which
//! is how transcendental functions such as [`Quantity::exp`] are reached.
//!
//! ```rust
//! use vqty_core::length::Meter;
//! use vqty_core::unitless::Number;
//! use vqty_core::{vector, Quantity, Vector};
//!
//! let v: Quantity<Meter, Vector<i32, 3>> = vector![1, 2, 3] * Meter;
//! let scaled: Quantity<Meter, Vector<i32, 3>> = v * Number::<i32>::new(2);
//! assert_eq!(scaled.value(), vector![2, 4, 6]);
//! ```

use crate::{Quantity, Unitless};

/// A dimensionless quantity.
pub type Number<R = f64> = Quantity<Unitless, R>;

/// The dimensionless one.
pub const ONE: Number = Number::new(1.0);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::length::{Kilometer, Meter, Meters};
    use crate::units::time::{Millisecond, Second};
    use crate::{vector, Per, Simplify, Unit, Vector};
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    // ─────────────────────────────────────────────────────────────────────────────
    // Basic Unitless behavior
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn unitless_new_and_value() {
        let u: Number = Quantity::new(42.0);
        assert_eq!(u.value(), 42.0);
    }

    #[test]
    fn unitless_from_f64() {
        let u: Number = 1.23456.into();
        assert_abs_diff_eq!(u.value(), 1.23456, epsilon = 1e-12);
    }

    #[test]
    fn unitless_ratio_and_symbol() {
        assert!(Unitless::RATIO.is_integer());
        assert_eq!(Unitless::SYMBOL, "");
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Display formatting
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn display_unitless() {
        assert_eq!(format!("{}", Number::new(123.456)), "123.456");
        assert_eq!(format!("{}", Number::new(42.0)), "42");
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Absorption
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn multiplying_by_one_keeps_the_unit() {
        let d: Meters = Meters::new(5.0) * ONE;
        assert_eq!(d.value(), 5.0);
        let d: Meters = ONE * Meters::new(5.0);
        assert_eq!(d.value(), 5.0);
    }

    #[test]
    fn dividing_by_unitless_keeps_the_unit() {
        let v: Quantity<Meter, Vector<f64, 3>> = vector![3.0, 2.0, 1.0] * Meter;
        let half: Quantity<Meter, Vector<f64, 3>> = v / Number::new(0.5);
        assert_eq!(half.value(), vector![6.0, 4.0, 2.0]);
    }

    #[test]
    fn unitless_tag_lifts_scalars() {
        let two: Number<i32> = 2_i32 * Unitless;
        let v: Quantity<Kilometer, Vector<i32, 3>> = vector![1, 2, 3] * Kilometer;
        let scaled: Quantity<Kilometer, Vector<i32, 3>> = two * v;
        assert_eq!(scaled.value(), vector![2, 4, 6]);
    }

    #[test]
    fn lifted_literals_scale_in_place() {
        let m = Meters::new(3.0);
        assert_eq!(((0.5 * Unitless) * m).value(), 1.5);
        assert_eq!((m * (2.0 * Unitless)).value(), 6.0);

        let v: Quantity<Kilometer, Vector<i32, 3>> = vector![1, 2, 3] * Kilometer;
        assert_eq!((v * (2_i32 * Unitless)).value(), vector![2, 4, 6]);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Ratios of like quantities
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn same_unit_ratio_simplifies() {
        let r: Number = (Meters::new(3.0) / Meters::new(4.0)).simplify();
        assert_eq!(r.value(), 0.75);
    }

    #[test]
    fn mixed_unit_ratio_casts() {
        let r = Quantity::<Kilometer>::new(1.0) / Meters::new(250.0);
        let r: Number = r.cast();
        assert_abs_diff_eq!(r.value(), 4.0, epsilon = 1e-12);

        let t: Quantity<Per<Millisecond, Second>> = Quantity::new(500.0);
        assert_abs_diff_eq!(t.cast::<Unitless>().value(), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn exp_of_dimensionless() {
        let zero: Number = Number::new(0.0);
        assert_eq!(zero.exp().value(), 1.0);
        let minus_one: Number = Number::new(-1.0);
        assert_abs_diff_eq!(minus_one.exp().value(), 0.367_879_441_171_442_3, epsilon = 1e-15);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Property-based tests
    // ─────────────────────────────────────────────────────────────────────────────

    proptest! {
        #[test]
        fn prop_unitless_arithmetic(a in -1e6..1e6f64, b in -1e6..1e6f64) {
            let qa: Number = Number::new(a);
            let qb: Number = Number::new(b);
            prop_assert!(((qa + qb).value() - (qb + qa).value()).abs() < 1e-9);
            prop_assert!(((qa + qb).value() - (a + b)).abs() < 1e-9);
        }

        #[test]
        fn prop_scaling_by_number_matches_scalar(v in -1e6..1e6f64, k in -1e3..1e3f64) {
            let by_number: Meters = Meters::new(v) * Number::new(k);
            let by_scalar: Meters = Meters::new(v) * k;
            prop_assert_eq!(by_number.value(), by_scalar.value());
        }
    }
}
