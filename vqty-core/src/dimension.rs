//! Dimension types and traits.

use core::marker::PhantomData;

/// Powers of the seven SI base dimensions.
///
/// Every [`Dimension`] exposes its exponents so that two dimensions built in different ways (for example
/// `Force × Time` and `Mass × Velocity`) can be recognised as the same physical kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Exponents {
    /// Length (L).
    pub length: i8,
    /// Mass (M).
    pub mass: i8,
    /// Time (T).
    pub time: i8,
    /// Electric current (I).
    pub current: i8,
    /// Thermodynamic temperature (Θ).
    pub temperature: i8,
    /// Amount of substance (N).
    pub amount: i8,
    /// Luminous intensity (J).
    pub luminosity: i8,
}

impl Exponents {
    /// All exponents zero.
    pub const NONE: Self = Self {
        length: 0,
        mass: 0,
        time: 0,
        current: 0,
        temperature: 0,
        amount: 0,
        luminosity: 0,
    };

    /// Exponents of a product of two dimensions.
    pub const fn mul(self, rhs: Self) -> Self {
        Self {
            length: self.length + rhs.length,
            mass: self.mass + rhs.mass,
            time: self.time + rhs.time,
            current: self.current + rhs.current,
            temperature: self.temperature + rhs.temperature,
            amount: self.amount + rhs.amount,
            luminosity: self.luminosity + rhs.luminosity,
        }
    }

    /// Exponents of a quotient of two dimensions.
    pub const fn div(self, rhs: Self) -> Self {
        Self {
            length: self.length - rhs.length,
            mass: self.mass - rhs.mass,
            time: self.time - rhs.time,
            current: self.current - rhs.current,
            temperature: self.temperature - rhs.temperature,
            amount: self.amount - rhs.amount,
            luminosity: self.luminosity - rhs.luminosity,
        }
    }

    /// Const equality.
    pub const fn same_as(self, rhs: Self) -> bool {
        self.length == rhs.length
            && self.mass == rhs.mass
            && self.time == rhs.time
            && self.current == rhs.current
            && self.temperature == rhs.temperature
            && self.amount == rhs.amount
            && self.luminosity == rhs.luminosity
    }

    /// `true` if every exponent is zero.
    pub const fn is_dimensionless(self) -> bool {
        self.same_as(Self::NONE)
    }
}

/// Marker trait for **dimensions** (Length, Time, Mass …).
///
/// A *dimension* is the category that distinguishes a metre from a second.
/// You usually model each dimension as an empty enum:
///
/// ```rust
/// use vqty_core::{Dimension, Exponents};
///
/// #[derive(Debug)]
/// pub enum Length {}
/// impl Dimension for Length {
///     const EXPONENTS: Exponents = Exponents { length: 1, ..Exponents::NONE };
/// }
/// ```
pub trait Dimension: 'static {
    /// Base-dimension exponents of this dimension.
    const EXPONENTS: Exponents;
}

/// Dimension formed by dividing one [`Dimension`] by another.
///
/// This is used to model composite dimensions such as `Length/Time`
/// for velocities.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DivDim<N: Dimension, D: Dimension>(PhantomData<(N, D)>);
impl<N: Dimension, D: Dimension> Dimension for DivDim<N, D> {
    const EXPONENTS: Exponents = N::EXPONENTS.div(D::EXPONENTS);
}

/// Dimension formed by multiplying two [`Dimension`]s, such as `Force·Length`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MulDim<A: Dimension, B: Dimension>(PhantomData<(A, B)>);
impl<A: Dimension, B: Dimension> Dimension for MulDim<A, B> {
    const EXPONENTS: Exponents = A::EXPONENTS.mul(B::EXPONENTS);
}

/// Dimension for dimensionless quantities.
pub enum Dimensionless {}
impl Dimension for Dimensionless {
    const EXPONENTS: Exponents = Exponents::NONE;
}
