//! Core type system for compile-time checked scalar and vector physical quantities.
//!
//! `vqty-core` provides a zero-cost units model whose numeric payload is generic:
//!
//! - A *unit* is a zero-sized marker type implementing [`Unit`], with an exact rational [`Ratio`] to the coherent
//!   SI unit of its [`Dimension`].
//! - A value tagged with a unit is a [`Quantity<U, R>`]. The *representation* `R` is a [`Scalar`] (`i32`, `f64`,
//!   …) or a fixed-size [`Vector`] of scalars; it defaults to `f64`.
//! - A vector can also hold independently typed scalar quantities: `Vector<Quantity<U, T>, N>`. Both variants share
//!   the same operators.
//! - Conversions are type-checked scalings. [`Quantity::to`] refuses, at compile time, any integral conversion that
//!   would lose precision; [`Quantity::truncate_to`] opts into truncation; [`Quantity::cast`] re-types a composed
//!   unit (`kg·m/s`) into a named one (`N·s`) after checking the base-dimension exponents.
//! - [`dot`], [`cross`] and [`norm`] implement the vector algebra; vectors never multiply implicitly.
//!
//! Most users should depend on `vqty` (the facade crate) unless they need direct access to these primitives.
//!
//! # What this crate solves
//!
//! - Compile-time separation of dimensions (length vs time vs force, …), including dimensions reached by different
//!   compositions of units.
//! - Lossless integral arithmetic on units: a position in kilometres can be held as `Vector<i32, 3>` and converted to
//!   metres exactly.
//! - Zero runtime overhead for unit tags (phantom types only).
//!
//! # What this crate does not try to solve
//!
//! - Matrices, tensors or non-Euclidean spaces.
//! - Runtime-configurable units.
//! - General-purpose symbolic simplification of arbitrary unit expressions; composed units are re-typed explicitly
//!   with [`Quantity::cast`] or [`Simplify`].
//!
//! # Quick start
//!
//! Lift a raw vector into a quantity and convert it:
//!
//! ```rust
//! use vqty_core::length::{Kilometer, Meter};
//! use vqty_core::vector;
//!
//! let position = vector![3, 2, 1] * Kilometer;
//! assert_eq!(position.to::<Meter>().value(), vector![3000, 2000, 1000]);
//! ```
//!
//! Compose derived units using `/`:
//!
//! ```rust
//! use vqty_core::length::{Meter, Meters};
//! use vqty_core::time::{Second, Seconds};
//! use vqty_core::velocity::Velocity;
//!
//! let d = Meters::new(100.0);
//! let t = Seconds::new(20.0);
//! let v: Velocity<Meter, Second> = d / t;
//! assert!((v.value() - 5.0).abs() < 1e-12);
//! ```
//!
//! # `no_std`
//!
//! Disable default features to build `vqty-core` without `std`:
//!
//! ```toml
//! [dependencies]
//! vqty-core = { version = "0.1.0", default-features = false }
//! ```
//!
//! When `std` is disabled, floating-point math that isn't available in `core` is provided via `libm`.
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support.
//! - `serde`: enables `serde` support for `Quantity<U, R>` and `Vector<T, N>`; a quantity serializes as its raw
//!   representation, and [`serde_with_unit`] adds the unit symbol.
//!
//! # Panics and errors
//!
//! This crate does not define an error type and does not return `Result` from its core operations. Every dimension
//! or precision violation is rejected at compile time. Runtime arithmetic follows the primitive types: integer
//! overflow behaves as in the rest of your program, and floating-point values follow IEEE-754.
//!
//! # SemVer and stability
//!
//! This crate is currently `0.x`. Expect breaking changes between minor versions until `1.0`.

#![deny(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(feature = "serde")]
extern crate alloc;

#[cfg(not(feature = "std"))]
extern crate libm;

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

mod algebra;
mod conversion;
mod dimension;
mod macros;
mod quantity;
mod ratio;
mod repr;
mod unit;
mod vector;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use algebra::{cross, dot, norm, Cross, Dot, Norm};
pub use conversion::{conversion_ratio, same_dimension};
pub use dimension::{Dimension, Dimensionless, DivDim, Exponents, MulDim};
pub use quantity::Quantity;
pub use ratio::Ratio;
pub use repr::{Promote, RepDiv, RepMul, Representation, Scalar, ScalarLike};
pub use unit::{Per, Prod, Simplify, Symbol, Unit, Unitless};
pub use vector::Vector;

#[cfg(feature = "serde")]
pub use quantity::serde_with_unit;

// ─────────────────────────────────────────────────────────────────────────────
// Predefined unit modules (grouped by dimension)
// ─────────────────────────────────────────────────────────────────────────────

/// Predefined unit modules (grouped by dimension).
///
/// These are defined in `vqty-core` so they can implement formatting and operator traits without running into Rust's
/// orphan rules.
pub mod units;

pub use units::electric;
pub use units::force;
pub use units::length;
pub use units::mass;
pub use units::mechanics;
pub use units::time;
pub use units::unitless;
pub use units::velocity;
