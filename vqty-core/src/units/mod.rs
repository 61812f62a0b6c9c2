//! Predefined unit modules grouped by dimension.
//!
//! `vqty-core` ships the units needed for kinematics, mechanics and simple circuits so that conversions and
//! formatting work out of the box without downstream crates having to fight Rust’s orphan rules.
//!
//! Every ratio is an exact rational relative to the coherent SI unit of its dimension.
//!
//! ## Modules
//!
//! - [`length`]: length units (metre is coherent) from nanometres to light-years.
//! - [`time`]: time units (second is coherent) from nanoseconds to Julian years.
//! - [`mass`]: mass units (kilogram is coherent) plus tonne and pound.
//! - [`force`]: force units (newton is coherent).
//! - [`electric`]: current, voltage, resistance and capacitance.
//! - [`velocity`]: velocity aliases (`Length / Time`) built from [`length`] and [`time`].
//! - [`mechanics`]: named products such as the newton-second and the newton-metre.
//! - [`unitless`]: helpers for dimensionless quantities.

pub mod electric;
pub mod force;
pub mod length;
pub mod mass;
pub mod mechanics;
pub mod time;
pub mod unitless;
pub mod velocity;
