//! Force units.
//!
//! The coherent unit for this dimension is [`Newton`] (`1 N = 1 kg·m/s²`). A product such as
//! `Quantity<Kilogram> * Quantity<Per<Meter, ...>>` carries the same dimension and can be re-typed into newtons
//! with [`Quantity::cast`].
//!
//! ```rust
//! use vqty_core::force::{KiloNewton, Newtons};
//!
//! let f = Newtons::new(2_500.0);
//! assert_eq!(f.to::<KiloNewton>().value(), 2.5);
//! ```

use crate::{Dimension, Exponents, Quantity, Unit};
use vqty_derive::Unit;

/// Dimension tag for force (`L·M·T⁻²`).
#[derive(Debug)]
pub enum Force {}
impl Dimension for Force {
    const EXPONENTS: Exponents = Exponents {
        length: 1,
        mass: 1,
        time: -2,
        ..Exponents::NONE
    };
}

/// Marker trait for any [`Unit`] whose dimension is [`Force`].
pub trait ForceUnit: Unit<Dim = Force> {}
impl<T: Unit<Dim = Force>> ForceUnit for T {}

/// Newton (SI derived unit).
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "N", dimension = Force, ratio = 1)]
pub struct Newton;
/// A quantity measured in newtons.
pub type Newtons = Quantity<Newton>;
/// One newton.
pub const N: Newtons = Newtons::new(1.0);

/// Kilonewton (`1 kN = 1000 N`).
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "kN", dimension = Force, ratio = 1_000)]
pub struct KiloNewton;
/// A quantity measured in kilonewtons.
pub type KiloNewtons = Quantity<KiloNewton>;
/// One kilonewton.
pub const KN: KiloNewtons = KiloNewtons::new(1.0);

/// Millinewton (`1 mN = 10^-3 N`).
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "mN", dimension = Force, ratio = 1 / 1_000)]
pub struct MilliNewton;
/// A quantity measured in millinewtons.
pub type MilliNewtons = Quantity<MilliNewton>;

/// Dyne, the CGS force unit (`1 dyn = 10^-5 N`).
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "dyn", dimension = Force, ratio = 1 / 100_000)]
pub struct Dyne;
/// A quantity measured in dynes.
pub type Dynes = Quantity<Dyne>;

crate::impl_unit_conversions!(Newton, KiloNewton, MilliNewton, Dyne);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::length::Meter;
    use crate::units::mass::Kilogram;
    use crate::units::time::Second;
    use crate::{Per, Prod};
    use approx::assert_abs_diff_eq;

    #[test]
    fn prefixes() {
        assert_abs_diff_eq!(KN.to::<Newton>().value(), 1000.0, epsilon = 1e-9);
        assert_abs_diff_eq!(N.to::<Dyne>().value(), 100_000.0, epsilon = 1e-6);
        let mn: Quantity<MilliNewton, i32> = Quantity::new(1_500);
        assert_eq!(mn.truncate_to::<Newton>().value(), 1);
    }

    #[test]
    fn newton_from_base_units() {
        type Accel = Per<Per<Meter, Second>, Second>;
        let m = Quantity::<Kilogram>::new(2.0);
        let a = Quantity::<Accel>::new(9.5);
        let f: Quantity<Prod<Kilogram, Accel>> = m * a;
        assert_abs_diff_eq!(f.cast::<Newton>().value(), 19.0, epsilon = 1e-12);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", KiloNewtons::new(3.0)), "3 kN");
    }
}
