//! Named mechanical products.
//!
//! The newton-second (impulse, momentum) and the newton-metre (torque) are products of units defined elsewhere, so
//! they are aliases over [`Prod`]. A product computed from other units, such as `kg · m/s`, is re-typed into one of
//! these with [`Quantity::cast`].
//!
//! ```rust
//! use vqty_core::length::Meter;
//! use vqty_core::mass::Kilogram;
//! use vqty_core::mechanics::{Momentum, NewtonSecond};
//! use vqty_core::time::Second;
//! use vqty_core::{vector, Quantity, Vector};
//!
//! let m = Quantity::<Kilogram, i32>::new(2);
//! let v = vector![1_i32, 2, 3] * (Meter / Second);
//! let p: Momentum<Vector<i32, 3>> = (m * v).cast::<NewtonSecond>();
//! assert_eq!(p.value(), vector![2, 4, 6]);
//! ```

use crate::units::force::Newton;
use crate::units::length::Meter;
use crate::units::time::Second;
use crate::{Prod, Quantity};

/// Newton-second (`N·s`), the coherent unit of impulse and momentum.
pub type NewtonSecond = Prod<Newton, Second>;

/// Newton-metre (`N·m`), the coherent unit of torque.
pub type NewtonMeter = Prod<Newton, Meter>;

/// Momentum or impulse in newton-seconds.
pub type Momentum<R = f64> = Quantity<NewtonSecond, R>;

/// Torque in newton-metres.
pub type Torque<R = f64> = Quantity<NewtonMeter, R>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::force::Newtons;
    use crate::units::length::{Kilometer, Meters};
    use crate::units::mass::{Gram, Kilogram};
    use crate::units::time::Hour;
    use crate::{Per, Unit};
    use approx::assert_abs_diff_eq;

    #[test]
    fn symbols() {
        let p: Momentum = Quantity::new(1.5);
        assert_eq!(p.to_string(), "1.5 N·s");
        let t: Torque = Quantity::new(30.0);
        assert_eq!(t.to_string(), "30 N·m");
    }

    #[test]
    fn momentum_from_mass_and_velocity() {
        let m = Quantity::<Kilogram>::new(1_200.0);
        let v = Quantity::<Per<Kilometer, Hour>>::new(90.0);
        let p: Momentum = (m * v).cast::<NewtonSecond>();
        assert_abs_diff_eq!(p.value(), 30_000.0, epsilon = 1e-9);
    }

    #[test]
    fn grams_times_meters_per_second_scales_down() {
        let m = Quantity::<Gram>::new(500.0);
        let v = Quantity::<Per<Meter, Second>>::new(4.0);
        let p: Momentum = (m * v).cast();
        assert_abs_diff_eq!(p.value(), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn torque_from_force_and_lever() {
        let t: Torque = Newtons::new(15.0) * Meters::new(2.0);
        assert_abs_diff_eq!(t.value(), 30.0, epsilon = 1e-12);
        assert_eq!(NewtonMeter::RATIO, Newton::RATIO);
    }
}
