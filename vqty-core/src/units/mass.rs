//! Mass units.
//!
//! The coherent unit for this dimension is [`Kilogram`] (`Kilogram::RATIO == 1`), as in the SI. Gram-based
//! prefixes are therefore exact *submultiples* of the kilogram, which matters for integral quantities: grams
//! convert to milligrams losslessly, but grams to kilograms needs [`Quantity::truncate_to`].
//!
//! ```rust
//! use vqty_core::mass::{Gram, Kilograms};
//!
//! let m = Kilograms::new(0.25);
//! assert_eq!(m.to::<Gram>().value(), 250.0);
//! ```
//!
//! Non-SI units included here:
//! - [`Tonne`] (`1 t = 1000 kg`)
//! - [`Pound`] (international avoirdupois pound, exactly `0.453_592_37 kg`)

use crate::{Dimension, Exponents, Quantity, Unit};
use vqty_derive::Unit;

/// Dimension tag for mass.
#[derive(Debug)]
pub enum Mass {}
impl Dimension for Mass {
    const EXPONENTS: Exponents = Exponents {
        mass: 1,
        ..Exponents::NONE
    };
}

/// Marker trait for any [`Unit`] whose dimension is [`Mass`].
pub trait MassUnit: Unit<Dim = Mass> {}
impl<T: Unit<Dim = Mass>> MassUnit for T {}

/// Kilogram (SI base unit).
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "kg", dimension = Mass, ratio = 1)]
pub struct Kilogram;
/// Shorthand alias for [`Kilogram`].
pub type Kg = Kilogram;
/// Quantity measured in kilograms.
pub type Kilograms = Quantity<Kg>;
/// One kilogram.
pub const KG: Kilograms = Kilograms::new(1.0);

macro_rules! si_gram {
    ($name:ident, $sym:literal, 1 / $den:literal, $alias:ident, $qty:ident, $one:ident) => {
        #[doc = concat!("SI mass unit `", stringify!($name), "` with gram-based prefix (symbol `", $sym, "`).")]
        #[doc = concat!("By definition, `1 ", $sym, " = 1/", stringify!($den), " kg`.")]
        #[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Unit)]
        #[unit(symbol = $sym, dimension = Mass, ratio = 1 / $den)]
        pub struct $name;

        #[doc = concat!("Shorthand alias for [`", stringify!($name), "`].")]
        pub type $alias = $name;

        #[doc = concat!("Quantity measured in ", stringify!($name), " (", $sym, ").")]
        pub type $qty = Quantity<$alias>;

        #[doc = concat!("Constant equal to one ", stringify!($name), " (1 ", $sym, ").")]
        pub const $one: $qty = $qty::new(1.0);
    };
}

si_gram!(Gram, "g", 1 / 1_000, G, Grams, GRAM);
si_gram!(Milligram, "mg", 1 / 1_000_000, Mg, Milligrams, MG);
si_gram!(Microgram, "µg", 1 / 1_000_000_000, Ug, Micrograms, UG);
si_gram!(Nanogram, "ng", 1 / 1_000_000_000_000, Ng, Nanograms, NG);

/// Tonne (metric ton): `1 t = 1000 kg` (exact).
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "t", dimension = Mass, ratio = 1_000)]
pub struct Tonne;
/// Shorthand type alias for [`Tonne`].
pub type T = Tonne;
/// Quantity measured in tonnes.
pub type Tonnes = Quantity<T>;
/// One metric tonne.
pub const TONNE: Tonnes = Tonnes::new(1.0);

/// Avoirdupois pound: `1 lb = 0.453_592_37 kg` (exact).
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "lb", dimension = Mass, ratio = 45_359_237 / 100_000_000)]
pub struct Pound;
/// Shorthand type alias for [`Pound`].
pub type Lb = Pound;
/// Quantity measured in pounds.
pub type Pounds = Quantity<Lb>;
/// One pound.
pub const LB: Pounds = Pounds::new(1.0);

crate::impl_unit_conversions!(Kilogram, Gram, Milligram, Microgram, Nanogram, Tonne, Pound);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Ratio;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use proptest::prelude::*;

    #[test]
    fn gram_ratio_is_exact() {
        assert_eq!(Gram::RATIO, Ratio::new(1, 1000));
        assert_eq!(Nanogram::RATIO, Ratio::new(1, 1_000_000_000_000));
    }

    #[test]
    fn gram_to_kilogram() {
        let g = Grams::new(1000.0);
        let kg = g.to::<Kilogram>();
        assert_abs_diff_eq!(kg.value(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn integral_kilograms_to_grams() {
        let kg: Quantity<Kilogram, i64> = Quantity::new(3);
        assert_eq!(kg.to::<Gram>().value(), 3_000);
        assert_eq!(kg.to::<Microgram>().value(), 3_000_000_000);
    }

    #[test]
    fn integral_grams_truncate_to_kilograms() {
        let g: Quantity<Gram, i32> = Quantity::new(2_750);
        assert_eq!(g.truncate_to::<Kilogram>().value(), 2);
    }

    #[test]
    fn tonne_to_kilograms() {
        assert_abs_diff_eq!(TONNE.to::<Kilogram>().value(), 1000.0, epsilon = 1e-9);
    }

    #[test]
    fn pound_to_grams() {
        let g = LB.to::<Gram>();
        assert_relative_eq!(g.value(), 453.592_37, max_relative = 1e-12);
    }

    #[test]
    fn from_impls() {
        let mg: Milligrams = Grams::new(1.5).into();
        assert_abs_diff_eq!(mg.value(), 1500.0, epsilon = 1e-9);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Kilograms::new(80.0)), "80 kg");
        assert_eq!(format!("{}", Micrograms::new(3.5)), "3.5 µg");
    }

    proptest! {
        #[test]
        fn prop_roundtrip_g_kg(v in -1e6..1e6f64) {
            let back = Grams::new(v).to::<Kilogram>().to::<Gram>();
            prop_assert!((back.value() - v).abs() <= 1e-9 * v.abs().max(1.0));
        }

        #[test]
        fn prop_pound_is_positive_multiple(v in 0.0..1e6f64) {
            let kg = Pounds::new(v).to::<Kilogram>();
            prop_assert!(kg.value() <= v);
        }
    }
}
