//! Compile-time checked scalar and vector physical quantities.
//!
//! `vqty` is the user-facing crate in this workspace. It re-exports the full API from `vqty-core` plus the predefined
//! units (length, time, mass, force, electric, velocity, mechanics).
//!
//! A value is always a `Quantity<U, R>`: `U` is a zero-sized type describing the unit, `R` the numeric payload. The
//! payload is a scalar (`f64` by default, or any supported integer or float) or a fixed-size [`Vector`]. Units and
//! dimensions exist only at compile time, so a `Quantity<Meter, Vector<i32, 3>>` is exactly three `i32`s at runtime.
//!
//! # What this crate solves
//!
//! - Prevents mixing incompatible dimensions (you can't add metres to seconds).
//! - Makes unit conversion explicit and type-checked (`to::<TargetUnit>()`), and refuses conversions that would
//!   silently truncate integral values.
//! - Carries units through vector algebra: `dot`, `cross` and `norm` produce correctly typed results.
//!
//! # What this crate does not try to solve
//!
//! - Matrices or tensors.
//! - Automatic simplification of arbitrary unit expressions; composed units are re-typed with `cast`.
//! - A full SI-prefix system; only the units defined in this crate are available out of the box.
//!
//! # Quick start
//!
//! Lift a raw vector into a quantity, convert it, and scale it:
//!
//! ```rust
//! use vqty::{vector, Kilometer, Meter};
//!
//! let v = vector![3, 2, 1] * Kilometer;
//! assert_eq!(v.to::<Meter>().value(), vector![3000, 2000, 1000]);
//! assert_eq!((v * 0.5).value(), vector![1.5, 1.0, 0.5]);
//! ```
//!
//! Compose units and use the vector algebra:
//!
//! ```rust
//! use vqty::mechanics::NewtonMeter;
//! use vqty::{cross, norm, vector, Meter, Newton};
//!
//! let r = vector![0, 3, 0] * Meter;
//! let f = vector![10, 0, 0] * Newton;
//! let torque = cross(r, f).cast::<NewtonMeter>();
//! assert_eq!(torque.value(), vector![0, 0, -30]);
//! assert_eq!(norm(torque).value(), 30);
//! ```
//!
//! # Incorrect usage (type errors)
//!
//! Adding different dimensions:
//!
//! ```compile_fail
//! use vqty::{Kilometers, Seconds};
//!
//! let d = Kilometers::new(1.0);
//! let t = Seconds::new(1.0);
//! let _ = d + t;
//! ```
//!
//! Converting an integral quantity toward a coarser unit without opting into truncation:
//!
//! ```compile_fail
//! use vqty::{Kilometer, Meter, Quantity};
//!
//! let d = Quantity::<Meter, i32>::new(1_500);
//! let _ = d.to::<Kilometer>();
//! ```
//!
//! Multiplying two vectors implicitly:
//!
//! ```compile_fail
//! use vqty::{vector, Meter};
//!
//! let a = vector![1, 2, 3] * Meter;
//! let b = vector![4, 5, 6] * Meter;
//! let _ = a * b;
//! ```
//!
//! Cross product outside three dimensions:
//!
//! ```compile_fail
//! use vqty::{cross, vector, Meter};
//!
//! let _ = cross(vector![1, 2] * Meter, vector![3, 4] * Meter);
//! ```
//!
//! Dot product of empty vectors:
//!
//! ```compile_fail
//! use vqty::{dot, Vector};
//!
//! let empty: Vector<i32, 0> = Vector::new([]);
//! let _ = dot(empty, empty);
//! ```
//!
//! Norm of an empty vector:
//!
//! ```compile_fail
//! use vqty::{norm, Vector};
//!
//! let empty: Vector<f64, 0> = Vector::new([]);
//! let _ = norm(empty);
//! ```
//!
//! Casting into a unit of another dimension:
//!
//! ```compile_fail
//! use vqty::{Kilogram, Meter, Quantity};
//!
//! let _ = Quantity::<Meter>::new(1.0).cast::<Kilogram>();
//! ```
//!
//! # Modules
//!
//! Units are grouped by dimension under modules (also re-exported at the crate root for convenience):
//!
//! - `vqty::length` (metres and SI prefixes, imperial lengths, AU, light-year)
//! - `vqty::time` (nanoseconds through Julian years)
//! - `vqty::mass` (grams and SI prefixes, kilograms, tonnes, pounds)
//! - `vqty::force` (newtons, dynes)
//! - `vqty::electric` (amperes, volts, ohms, farads)
//! - `vqty::velocity` (`Length / Time` aliases)
//! - `vqty::mechanics` (newton-seconds, newton-metres)
//! - `vqty::unitless` (dimensionless numbers)
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support in `vqty-core`.
//! - `serde`: enables `serde` support for `Quantity<U, R>` and `Vector<T, N>`; serialization is the raw payload only,
//!   or `{ "value": …, "unit": … }` through [`serde_with_unit`](crate::serde_with_unit).
//!
//! Disable default features for `no_std`:
//!
//! ```toml
//! [dependencies]
//! vqty = { version = "0.1.0", default-features = false }
//! ```
//!
//! # Panics and errors
//!
//! This crate does not define an error type and does not return `Result` from its core operations. Dimension and
//! precision mistakes are compile errors. Arithmetic follows the underlying primitive: integer overflow behaves as in
//! the rest of your program, and floating-point values follow IEEE-754.
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor versions until `1.0`.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub use vqty_core::*;

/// Derive macro used by `vqty-core` to define unit marker types.
///
/// This macro expands in terms of `crate::Unit`, `crate::Quantity` and `crate::impl_unit_algebra!`, so it is intended
/// for use inside `vqty-core` (or crates exposing the same crate-root API). Most users should not need this.
pub use vqty_derive::Unit;

pub use vqty_core::units::electric;
pub use vqty_core::units::force;
pub use vqty_core::units::length;
pub use vqty_core::units::mass;
pub use vqty_core::units::mechanics;
pub use vqty_core::units::time;
pub use vqty_core::units::unitless;
pub use vqty_core::units::velocity;

pub use vqty_core::units::electric::*;
pub use vqty_core::units::force::*;
pub use vqty_core::units::length::*;
pub use vqty_core::units::mass::*;
pub use vqty_core::units::mechanics::*;
pub use vqty_core::units::time::*;
pub use vqty_core::units::velocity::*;
