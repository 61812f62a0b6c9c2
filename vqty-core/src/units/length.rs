//! Length units.
//!
//! The coherent unit for this dimension is [`Meter`] (`Meter::RATIO == 1`). Every other length unit is an exact
//! rational multiple of the metre, which is what lets integral quantities convert without loss whenever the target
//! is an integer submultiple of the source.
//!
//! This module provides:
//!
//! - **SI ladder**: nanometre through megametre.
//! - **International units**: inch, foot, yard and statute mile (the inch is exactly `0.0254 m`), nautical mile.
//! - **Astronomy**: astronomical unit (exactly `149_597_870_700 m`, IAU 2012) and Julian light-year
//!   (`c · 365.25 d`).
//!
//! ```rust
//! use vqty_core::length::{AstronomicalUnits, Kilometer};
//!
//! let au = AstronomicalUnits::new(1.0);
//! let km = au.to::<Kilometer>();
//! assert_eq!(km.value(), 149_597_870.7);
//! ```
//!
//! Integral positions convert exactly toward finer units:
//!
//! ```rust
//! use vqty_core::length::{Kilometer, Meter};
//! use vqty_core::vector;
//!
//! let v = vector![3, 2, 1] * Kilometer;
//! assert_eq!(v.to::<Meter>().value(), vector![3000, 2000, 1000]);
//! ```

use crate::{Dimension, Exponents, Quantity, Unit};
use vqty_derive::Unit;

/// Dimension tag for length.
#[derive(Debug)]
pub enum Length {}
impl Dimension for Length {
    const EXPONENTS: Exponents = Exponents {
        length: 1,
        ..Exponents::NONE
    };
}

/// Marker trait for any [`Unit`] whose dimension is [`Length`].
pub trait LengthUnit: Unit<Dim = Length> {}
impl<T: Unit<Dim = Length>> LengthUnit for T {}

// ─────────────────────────────────────────────────────────────────────────────
// SI ladder
// ─────────────────────────────────────────────────────────────────────────────

/// Metre (SI base unit).
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "m", dimension = Length, ratio = 1)]
pub struct Meter;
/// A quantity measured in metres.
pub type Meters = Quantity<Meter>;
/// One metre.
pub const M: Meters = Meters::new(1.0);

/// Kilometre (`1000 m`).
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "km", dimension = Length, ratio = 1_000)]
pub struct Kilometer;
/// Type alias shorthand for [`Kilometer`].
pub type Km = Kilometer;
/// A quantity measured in kilometres.
pub type Kilometers = Quantity<Km>;
/// One kilometre.
pub const KM: Kilometers = Kilometers::new(1.0);

/// Hectometre (`100 m`).
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "hm", dimension = Length, ratio = 100)]
pub struct Hectometer;
/// A quantity measured in hectometres.
pub type Hectometers = Quantity<Hectometer>;

/// Megametre (`10^6 m`).
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "Mm", dimension = Length, ratio = 1_000_000)]
pub struct Megameter;
/// A quantity measured in megametres.
pub type Megameters = Quantity<Megameter>;

/// Decimetre (`10^-1 m`).
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "dm", dimension = Length, ratio = 1 / 10)]
pub struct Decimeter;
/// A quantity measured in decimetres.
pub type Decimeters = Quantity<Decimeter>;

/// Centimetre (`10^-2 m`).
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "cm", dimension = Length, ratio = 1 / 100)]
pub struct Centimeter;
/// Type alias shorthand for [`Centimeter`].
pub type Cm = Centimeter;
/// A quantity measured in centimetres.
pub type Centimeters = Quantity<Cm>;
/// One centimetre.
pub const CM: Centimeters = Centimeters::new(1.0);

/// Millimetre (`10^-3 m`).
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "mm", dimension = Length, ratio = 1 / 1_000)]
pub struct Millimeter;
/// Type alias shorthand for [`Millimeter`].
pub type Mm = Millimeter;
/// A quantity measured in millimetres.
pub type Millimeters = Quantity<Mm>;
/// One millimetre.
pub const MM: Millimeters = Millimeters::new(1.0);

/// Micrometre (`10^-6 m`).
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "µm", dimension = Length, ratio = 1 / 1_000_000)]
pub struct Micrometer;
/// A quantity measured in micrometres.
pub type Micrometers = Quantity<Micrometer>;

/// Nanometre (`10^-9 m`).
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "nm", dimension = Length, ratio = 1 / 1_000_000_000)]
pub struct Nanometer;
/// A quantity measured in nanometres.
pub type Nanometers = Quantity<Nanometer>;

// ─────────────────────────────────────────────────────────────────────────────
// International and nautical units
// ─────────────────────────────────────────────────────────────────────────────

/// International inch (exactly `0.0254 m`).
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "in", dimension = Length, ratio = 127 / 5_000)]
pub struct Inch;
/// A quantity measured in inches.
pub type Inches = Quantity<Inch>;

/// International foot (exactly `0.3048 m`).
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "ft", dimension = Length, ratio = 381 / 1_250)]
pub struct Foot;
/// A quantity measured in feet.
pub type Feet = Quantity<Foot>;

/// International yard (exactly `0.9144 m`).
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "yd", dimension = Length, ratio = 1_143 / 1_250)]
pub struct Yard;
/// A quantity measured in yards.
pub type Yards = Quantity<Yard>;

/// International statute mile (exactly `1609.344 m`).
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "mi", dimension = Length, ratio = 201_168 / 125)]
pub struct Mile;
/// A quantity measured in miles.
pub type Miles = Quantity<Mile>;

/// International nautical mile (exactly `1852 m`).
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "nmi", dimension = Length, ratio = 1_852)]
pub struct NauticalMile;
/// A quantity measured in nautical miles.
pub type NauticalMiles = Quantity<NauticalMile>;

// ─────────────────────────────────────────────────────────────────────────────
// Astronomy
// ─────────────────────────────────────────────────────────────────────────────

/// Astronomical unit (exactly `149_597_870_700 m`).
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "au", dimension = Length, ratio = 149_597_870_700)]
pub struct AstronomicalUnit;
/// Type alias shorthand for [`AstronomicalUnit`].
pub type Au = AstronomicalUnit;
/// A quantity measured in astronomical units.
pub type AstronomicalUnits = Quantity<Au>;
/// One astronomical unit.
pub const AU: AstronomicalUnits = AstronomicalUnits::new(1.0);

/// Julian light-year: `299_792_458 m/s · 365.25 d · 86_400 s/d`, an exact integer number of metres.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "ly", dimension = Length, ratio = 9_460_730_472_580_800)]
pub struct LightYear;
/// Type alias shorthand for [`LightYear`].
pub type Ly = LightYear;
/// A quantity measured in light-years.
pub type LightYears = Quantity<Ly>;
/// One light-year.
pub const LY: LightYears = LightYears::new(1.0);

crate::impl_unit_conversions!(
    Meter,
    Kilometer,
    Hectometer,
    Megameter,
    Decimeter,
    Centimeter,
    Millimeter,
    Micrometer,
    Nanometer,
    Inch,
    Foot,
    Yard,
    Mile,
    NauticalMile,
    AstronomicalUnit,
    LightYear
);
