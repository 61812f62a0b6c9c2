//! Electrical units: current, voltage, resistance and capacitance.
//!
//! Each dimension's coherent unit is the SI one ([`Ampere`], [`Volt`], [`Ohm`], [`Farad`]). Because dimensions are
//! compared by their base exponents, derived relations hold without extra impls: `Ω · F` has the dimension of time,
//! and `V / Ω` has the dimension of current.
//!
//! ```rust
//! use vqty_core::electric::{Ampere, KiloOhms, Volts};
//!
//! let i = (Volts::new(5.0) / KiloOhms::new(1.0)).cast::<Ampere>();
//! assert!((i.value() - 0.005).abs() < 1e-15);
//! ```

use crate::{Dimension, Exponents, Quantity};
use vqty_derive::Unit;

// ─────────────────────────────────────────────────────────────────────────────
// Current
// ─────────────────────────────────────────────────────────────────────────────

/// Dimension tag for electric current (`I`).
#[derive(Debug)]
pub enum Current {}
impl Dimension for Current {
    const EXPONENTS: Exponents = Exponents {
        current: 1,
        ..Exponents::NONE
    };
}

/// Ampere (SI base unit).
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "A", dimension = Current, ratio = 1)]
pub struct Ampere;
/// A quantity measured in amperes.
pub type Amperes = Quantity<Ampere>;

/// Milliampere (`10^-3 A`).
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "mA", dimension = Current, ratio = 1 / 1_000)]
pub struct MilliAmpere;
/// A quantity measured in milliamperes.
pub type MilliAmperes = Quantity<MilliAmpere>;

crate::impl_unit_conversions!(Ampere, MilliAmpere);

// ─────────────────────────────────────────────────────────────────────────────
// Voltage
// ─────────────────────────────────────────────────────────────────────────────

/// Dimension tag for electric potential (`L²·M·T⁻³·I⁻¹`).
#[derive(Debug)]
pub enum Voltage {}
impl Dimension for Voltage {
    const EXPONENTS: Exponents = Exponents {
        length: 2,
        mass: 1,
        time: -3,
        current: -1,
        ..Exponents::NONE
    };
}

/// Volt (SI derived unit).
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "V", dimension = Voltage, ratio = 1)]
pub struct Volt;
/// A quantity measured in volts.
pub type Volts = Quantity<Volt>;

/// Millivolt (`10^-3 V`).
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "mV", dimension = Voltage, ratio = 1 / 1_000)]
pub struct MilliVolt;
/// A quantity measured in millivolts.
pub type MilliVolts = Quantity<MilliVolt>;

/// Microvolt (`10^-6 V`).
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "µV", dimension = Voltage, ratio = 1 / 1_000_000)]
pub struct MicroVolt;
/// A quantity measured in microvolts.
pub type MicroVolts = Quantity<MicroVolt>;

/// Nanovolt (`10^-9 V`).
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "nV", dimension = Voltage, ratio = 1 / 1_000_000_000)]
pub struct NanoVolt;
/// A quantity measured in nanovolts.
pub type NanoVolts = Quantity<NanoVolt>;

/// Picovolt (`10^-12 V`).
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "pV", dimension = Voltage, ratio = 1 / 1_000_000_000_000)]
pub struct PicoVolt;
/// A quantity measured in picovolts.
pub type PicoVolts = Quantity<PicoVolt>;

crate::impl_unit_conversions!(Volt, MilliVolt, MicroVolt, NanoVolt, PicoVolt);

// ─────────────────────────────────────────────────────────────────────────────
// Resistance
// ─────────────────────────────────────────────────────────────────────────────

/// Dimension tag for electric resistance (`L²·M·T⁻³·I⁻²`).
#[derive(Debug)]
pub enum Resistance {}
impl Dimension for Resistance {
    const EXPONENTS: Exponents = Exponents {
        length: 2,
        mass: 1,
        time: -3,
        current: -2,
        ..Exponents::NONE
    };
}

/// Ohm (SI derived unit).
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "Ω", dimension = Resistance, ratio = 1)]
pub struct Ohm;
/// A quantity measured in ohms.
pub type Ohms = Quantity<Ohm>;

/// Kilohm (`1 kΩ = 1000 Ω`).
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "kΩ", dimension = Resistance, ratio = 1_000)]
pub struct KiloOhm;
/// A quantity measured in kilohms.
pub type KiloOhms = Quantity<KiloOhm>;

crate::impl_unit_conversions!(Ohm, KiloOhm);

// ─────────────────────────────────────────────────────────────────────────────
// Capacitance
// ─────────────────────────────────────────────────────────────────────────────

/// Dimension tag for capacitance (`L⁻²·M⁻¹·T⁴·I²`).
#[derive(Debug)]
pub enum Capacitance {}
impl Dimension for Capacitance {
    const EXPONENTS: Exponents = Exponents {
        length: -2,
        mass: -1,
        time: 4,
        current: 2,
        ..Exponents::NONE
    };
}

/// Farad (SI derived unit).
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "F", dimension = Capacitance, ratio = 1)]
pub struct Farad;
/// A quantity measured in farads.
pub type Farads = Quantity<Farad>;

/// Microfarad (`10^-6 F`).
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "µF", dimension = Capacitance, ratio = 1 / 1_000_000)]
pub struct MicroFarad;
/// A quantity measured in microfarads.
pub type MicroFarads = Quantity<MicroFarad>;

/// Nanofarad (`10^-9 F`).
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "nF", dimension = Capacitance, ratio = 1 / 1_000_000_000)]
pub struct NanoFarad;
/// A quantity measured in nanofarads.
pub type NanoFarads = Quantity<NanoFarad>;

crate::impl_unit_conversions!(Farad, MicroFarad, NanoFarad);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::time::{Millisecond, Second, Time};
    use crate::{same_dimension, Prod, Unit};
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn rc_has_dimension_of_time() {
        assert!(same_dimension::<Prod<Ohm, Farad>, Second>());
        let rc = <<Prod<KiloOhm, MicroFarad> as Unit>::Dim as Dimension>::EXPONENTS;
        assert!(rc.same_as(<Time as Dimension>::EXPONENTS));
    }

    #[test]
    fn rc_time_constant() {
        let tau = KiloOhms::new(4.7) * MicroFarads::new(0.47);
        let tau = tau.cast::<Millisecond>();
        assert_relative_eq!(tau.value(), 2.209, max_relative = 1e-12);
    }

    #[test]
    fn ohms_law() {
        let i = (Volts::new(12.0) / Ohms::new(4.0)).cast::<MilliAmpere>();
        assert_abs_diff_eq!(i.value(), 3000.0, epsilon = 1e-9);
    }

    #[test]
    fn integral_voltage_ladder() {
        let v: Quantity<MilliVolt, i64> = Quantity::new(5);
        assert_eq!(v.to::<MicroVolt>().value(), 5_000);
        assert_eq!(v.to::<PicoVolt>().value(), 5_000_000_000);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", KiloOhms::new(4.7)), "4.7 kΩ");
        assert_eq!(format!("{}", MicroFarads::new(0.47)), "0.47 µF");
        assert_eq!(format!("{}", Volts::new(5.0) / KiloOhms::new(1.0)), "5 V/kΩ");
    }
}
