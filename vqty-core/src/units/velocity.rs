//! Velocity unit aliases (`Length / Time`).
//!
//! Velocities are not standalone units: every velocity is [`Per`] of a length unit and a time unit, so conversions
//! come from the underlying units' exact ratios.
//!
//! The representation parameter defaults to `f64`; a velocity *vector* is `Velocity<N, D, Vector<T, 3>>`.
//!
//! ## Examples
//!
//! ```rust
//! use vqty_core::length::{Kilometer, Kilometers};
//! use vqty_core::time::{Second, Seconds};
//! use vqty_core::velocity::Velocity;
//!
//! let d = Kilometers::new(42.0);
//! let t = Seconds::new(2.0);
//! let v: Velocity<Kilometer, Second> = d / t;
//! assert!((v.value() - 21.0).abs() < 1e-12);
//! ```
//!
//! ```rust
//! use vqty_core::length::Kilometer;
//! use vqty_core::time::Hour;
//! use vqty_core::velocity::Velocity;
//! use vqty_core::{vector, Quantity};
//!
//! let pos = vector![30, 20, 10] * Kilometer;
//! let dur = Quantity::<Hour, i32>::new(2);
//! let v: Velocity<Kilometer, Hour, _> = pos / dur;
//! assert_eq!(v.value(), vector![15, 10, 5]);
//! ```

use crate::units::length::{Kilometer, Length, Meter};
use crate::units::time::{Hour, Second, Time};
use crate::{DivDim, Per, Quantity, Unit};

/// Dimension alias for velocities (`Length / Time`).
pub type VelocityDim = DivDim<Length, Time>;

/// Marker trait for any unit whose dimension is [`VelocityDim`].
pub trait VelocityUnit: Unit<Dim = VelocityDim> {}
impl<T: Unit<Dim = VelocityDim>> VelocityUnit for T {}

/// A velocity quantity parameterized by length and time units and by its representation.
///
/// ```rust
/// use vqty_core::length::{Kilometer, Meter};
/// use vqty_core::time::{Hour, Second};
/// use vqty_core::velocity::Velocity;
/// use vqty_core::Vector;
///
/// let v1: Velocity<Meter, Second> = Velocity::new(10.0);
/// let v2: Velocity<Kilometer, Hour, Vector<f64, 3>> = Velocity::new(Vector::new([36.0, 0.0, 0.0]));
/// assert!(v2.x() == v1);
/// ```
pub type Velocity<N, D, R = f64> = Quantity<Per<N, D>, R>;

/// Metres per second, the coherent velocity unit.
pub type MetersPerSecond = Per<Meter, Second>;
/// Kilometres per hour.
pub type KilometersPerHour = Per<Kilometer, Hour>;
/// Kilometres per second.
pub type KilometersPerSecond = Per<Kilometer, Second>;
