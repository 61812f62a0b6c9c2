//! Time units.
//!
//! The coherent unit for this dimension is [`Second`] (`Second::RATIO == 1`). All other time unit ratios are
//! expressed in *seconds*.
//!
//! ## Conventions
//!
//! - Civil units such as [`Day`] use the conventional mapping `1 day = 86_400 s` (leap seconds ignored).
//! - [`JulianYear`] is exactly `365.25 d`, the year used to define the light-year.
//!
//! ```rust
//! use vqty_core::time::{Hour, Hours, Second};
//!
//! let half_hour = Hours::new(0.5);
//! let seconds = half_hour.to::<Second>();
//! assert!((seconds.value() - 1800.0).abs() < 1e-12);
//!
//! let back = seconds.to::<Hour>();
//! assert!((back.value() - 0.5).abs() < 1e-12);
//! ```

use crate::{Dimension, Exponents, Quantity, Unit};
use vqty_derive::Unit;

/// Dimension tag for time.
#[derive(Debug)]
pub enum Time {}
impl Dimension for Time {
    const EXPONENTS: Exponents = Exponents {
        time: 1,
        ..Exponents::NONE
    };
}

/// Marker trait for any [`Unit`] whose dimension is [`Time`].
pub trait TimeUnit: Unit<Dim = Time> {}
impl<T: Unit<Dim = Time>> TimeUnit for T {}

/// Seconds per civil day.
pub const SECONDS_PER_DAY: i64 = 86_400;

// --- SI submultiples of the second ---

/// Nanoseconds (`1 ns = 10^-9 s`).
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "ns", dimension = Time, ratio = 1 / 1_000_000_000)]
pub struct Nanosecond;
/// A quantity measured in nanoseconds.
pub type Nanoseconds = Quantity<Nanosecond>;
/// A constant representing one nanosecond.
pub const NANOSEC: Nanoseconds = Nanoseconds::new(1.0);

/// Microseconds (`1 µs = 10^-6 s`).
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "µs", dimension = Time, ratio = 1 / 1_000_000)]
pub struct Microsecond;
/// A quantity measured in microseconds.
pub type Microseconds = Quantity<Microsecond>;
/// A constant representing one microsecond.
pub const MICROSEC: Microseconds = Microseconds::new(1.0);

/// Milliseconds (`1 ms = 10^-3 s`).
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "ms", dimension = Time, ratio = 1 / 1_000)]
pub struct Millisecond;
/// A quantity measured in milliseconds.
pub type Milliseconds = Quantity<Millisecond>;
/// A constant representing one millisecond.
pub const MILLISEC: Milliseconds = Milliseconds::new(1.0);

/// Seconds (SI base unit).
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "s", dimension = Time, ratio = 1)]
pub struct Second;
/// A quantity measured in seconds.
pub type Seconds = Quantity<Second>;
/// A constant representing one second.
pub const SEC: Seconds = Seconds::new(1.0);

// --- Civil units ---

/// Minutes (`1 min = 60 s`).
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "min", dimension = Time, ratio = 60)]
pub struct Minute;
/// A quantity measured in minutes.
pub type Minutes = Quantity<Minute>;
/// A constant representing one minute.
pub const MIN: Minutes = Minutes::new(1.0);

/// Hours (`1 h = 3_600 s`).
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "h", dimension = Time, ratio = 3_600)]
pub struct Hour;
/// A quantity measured in hours.
pub type Hours = Quantity<Hour>;
/// A constant representing one hour.
pub const HOUR: Hours = Hours::new(1.0);

/// Days (`1 d = 86_400 s`).
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "d", dimension = Time, ratio = 86_400)]
pub struct Day;
/// A quantity measured in days.
pub type Days = Quantity<Day>;
/// A constant representing one day.
pub const DAY: Days = Days::new(1.0);

/// Weeks (`1 wk = 7 d`).
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "wk", dimension = Time, ratio = 604_800)]
pub struct Week;
/// A quantity measured in weeks.
pub type Weeks = Quantity<Week>;
/// A constant representing one week.
pub const WEEK: Weeks = Weeks::new(1.0);

/// Julian year (`1 a = 365.25 d = 31_557_600 s`).
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "a", dimension = Time, ratio = 31_557_600)]
pub struct JulianYear;
/// A quantity measured in Julian years.
pub type JulianYears = Quantity<JulianYear>;
/// A constant representing one Julian year.
pub const JULIAN_YEAR: JulianYears = JulianYears::new(1.0);

crate::impl_unit_conversions!(
    Nanosecond,
    Microsecond,
    Millisecond,
    Second,
    Minute,
    Hour,
    Day,
    Week,
    JulianYear
);
