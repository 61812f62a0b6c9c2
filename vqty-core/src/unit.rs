//! Unit types and traits.

use crate::dimension::{Dimension, Dimensionless, DivDim, MulDim};
use crate::ratio::Ratio;
use crate::repr::Representation;
use crate::Quantity;
use core::fmt::{Debug, Display, Formatter, Result};
use core::marker::PhantomData;

/// Trait implemented by every **unit** type.
///
/// * `RATIO` is the exact conversion factor from this unit to the *coherent SI unit* of the same dimension.
///   Example: metres are coherent (`Meter::RATIO == 1`), so kilometres use `Kilometer::RATIO == 1000`
///   because `1 km = 1000 m`.
///
/// * `SYMBOL` is the printable string (e.g. `"m"` or `"km"`).
///
/// * `Dim` ties the unit to its underlying [`Dimension`].
///
/// The four generic associated types describe how the unit composes with another unit under `*` and `/`. Plain
/// units produce [`Prod`] and [`Per`]; [`Unitless`] is absorbed, so `m · 1` stays `m` and `m / 1` stays `m`.
///
/// # Invariants
///
/// - Implementations should be zero-sized marker types (this crate's built-in units are unit structs with no fields).
/// - `RATIO` must be non-zero.
pub trait Unit: Copy + PartialEq + Debug + Default + 'static {
    /// Unit-to-coherent conversion factor.
    const RATIO: Ratio;

    /// Dimension to which this unit belongs.
    type Dim: Dimension;

    /// Printable symbol, shown by [`core::fmt::Display`].
    const SYMBOL: &'static str;

    /// Unit of `Self × R`.
    type Product<R: Unit>: Unit;
    /// Unit of `Self / R`.
    type Quotient<R: Unit>: Unit;
    /// Unit of `L × Self`.
    type LeftProduct<L: Unit>: Unit;
    /// Unit of `L / Self`.
    type LeftQuotient<L: Unit>: Unit;

    /// Writes the symbol; composite units spell out their parts.
    fn fmt_symbol(f: &mut Formatter<'_>) -> Result {
        f.write_str(Self::SYMBOL)
    }
}

/// Displays the symbol of `U`, including composite symbols such as `km/h` that have no `&'static str` form.
///
/// ```rust
/// use vqty_core::length::Kilometer;
/// use vqty_core::time::Hour;
/// use vqty_core::{Per, Symbol};
///
/// assert_eq!(Symbol::<Per<Kilometer, Hour>>::new().to_string(), "km/h");
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Symbol<U: Unit>(PhantomData<U>);

impl<U: Unit> Symbol<U> {
    /// Creates the formatter.
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<U: Unit> Display for Symbol<U> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        U::fmt_symbol(f)
    }
}

/// Unit representing the division of two other units.
///
/// `Per<N, D>` corresponds to `N / D` and carries both the
/// dimensional information and the scaling ratio between the
/// constituent units. It is generic over any numerator and
/// denominator units, which allows implementing arithmetic
/// generically for all pairs without bespoke macros.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Per<N: Unit, D: Unit>(PhantomData<(N, D)>);

impl<N: Unit, D: Unit> Default for Per<N, D> {
    fn default() -> Self {
        Self(PhantomData)
    }
}

impl<N: Unit, D: Unit> Unit for Per<N, D> {
    const RATIO: Ratio = N::RATIO.div(D::RATIO);
    type Dim = DivDim<N::Dim, D::Dim>;
    const SYMBOL: &'static str = "";

    type Product<R: Unit> = R::LeftProduct<Self>;
    type Quotient<R: Unit> = R::LeftQuotient<Self>;
    type LeftProduct<L: Unit> = Prod<L, Self>;
    type LeftQuotient<L: Unit> = Per<L, Self>;

    fn fmt_symbol(f: &mut Formatter<'_>) -> Result {
        N::fmt_symbol(f)?;
        f.write_str("/")?;
        D::fmt_symbol(f)
    }
}

impl<N: Unit, D: Unit, R: Display> Display for Quantity<Per<N, D>, R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        Display::fmt(self.value_ref(), f)?;
        f.write_str(" ")?;
        <Per<N, D>>::fmt_symbol(f)
    }
}

/// Unit representing the product of two other units, such as `N·m`.
///
/// `Prod<A, B>` is what `Quantity<A> * Quantity<B>` produces; named derived units are reached from it with
/// [`Quantity::cast`].
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Prod<A: Unit, B: Unit>(PhantomData<(A, B)>);

impl<A: Unit, B: Unit> Default for Prod<A, B> {
    fn default() -> Self {
        Self(PhantomData)
    }
}

impl<A: Unit, B: Unit> Unit for Prod<A, B> {
    const RATIO: Ratio = A::RATIO.mul(B::RATIO);
    type Dim = MulDim<A::Dim, B::Dim>;
    const SYMBOL: &'static str = "";

    type Product<R: Unit> = R::LeftProduct<Self>;
    type Quotient<R: Unit> = R::LeftQuotient<Self>;
    type LeftProduct<L: Unit> = Prod<L, Self>;
    type LeftQuotient<L: Unit> = Per<L, Self>;

    fn fmt_symbol(f: &mut Formatter<'_>) -> Result {
        A::fmt_symbol(f)?;
        f.write_str("·")?;
        B::fmt_symbol(f)
    }
}

impl<A: Unit, B: Unit, R: Display> Display for Quantity<Prod<A, B>, R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        Display::fmt(self.value_ref(), f)?;
        f.write_str(" ")?;
        <Prod<A, B>>::fmt_symbol(f)
    }
}

/// Zero-sized marker type for dimensionless quantities.
///
/// `Unitless` represents a dimensionless unit with a conversion ratio of 1
/// and an empty symbol. It is used to model the result of simplifying same-unit
/// ratios (e.g., `Meters / Meters`) into a plain "number-like" `Quantity<Unitless>`.
///
/// Multiplying or dividing by a unitless quantity scales the value and leaves the other operand's unit untouched.
///
/// Unlike a type alias to `f64`, this is a proper zero-sized type, which ensures
/// that only explicitly constructed `Quantity<Unitless>` values are treated as
/// dimensionless, not bare `f64` primitives.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Unitless;

impl Unit for Unitless {
    const RATIO: Ratio = Ratio::ONE;
    type Dim = Dimensionless;
    const SYMBOL: &'static str = "";

    type Product<R: Unit> = R;
    type Quotient<R: Unit> = R::LeftQuotient<Unitless>;
    type LeftProduct<L: Unit> = L;
    type LeftQuotient<L: Unit> = L;
}

impl<R: Display> Display for Quantity<Unitless, R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        Display::fmt(self.value_ref(), f)
    }
}

crate::impl_unit_algebra!(impl[N: Unit, D: Unit] Per<N, D>);
crate::impl_unit_algebra!(impl[A: Unit, B: Unit] Prod<A, B>);
crate::impl_unit_algebra!(Unitless);

/// Trait for simplifying composite unit types.
///
/// This allows reducing complex unit expressions to simpler forms,
/// such as `Per<U, U>` to `Unitless`, `Per<N, Per<N, D>>` to `D`, or `Prod<Per<N, D>, D>` to `N`.
/// The numeric value is kept as-is: every rewrite preserves the conversion ratio.
pub trait Simplify {
    /// The simplified unit type.
    type Out: Unit;
    /// Representation carried through unchanged.
    type Repr: Representation;
    /// Convert this quantity to its simplified unit.
    fn simplify(self) -> Quantity<Self::Out, Self::Repr>;
}

impl<U: Unit, R: Representation> Simplify for Quantity<Per<U, U>, R> {
    type Out = Unitless;
    type Repr = R;
    /// ```rust
    /// use vqty_core::length::Meters;
    /// use vqty_core::{Quantity, Simplify, Unitless};
    ///
    /// let ratio = Meters::new(1.0) / Meters::new(2.0);
    /// let unitless: Quantity<Unitless> = ratio.simplify();
    /// assert!((unitless.value() - 0.5).abs() < 1e-12);
    /// ```
    fn simplify(self) -> Quantity<Unitless, R> {
        Quantity::new(self.value())
    }
}

impl<N: Unit, D: Unit, R: Representation> Simplify for Quantity<Per<N, Per<N, D>>, R> {
    type Out = D;
    type Repr = R;
    fn simplify(self) -> Quantity<D, R> {
        Quantity::new(self.value())
    }
}

impl<N: Unit, D: Unit, R: Representation> Simplify for Quantity<Prod<Per<N, D>, D>, R> {
    type Out = N;
    type Repr = R;
    /// ```rust
    /// use vqty_core::length::{Kilometer, Kilometers};
    /// use vqty_core::time::{Hour, Hours};
    /// use vqty_core::velocity::Velocity;
    /// use vqty_core::Simplify;
    ///
    /// let v: Velocity<Kilometer, Hour> = Velocity::new(80.0);
    /// let d: Kilometers = (v * Hours::new(1.5)).simplify();
    /// assert_eq!(d.value(), 120.0);
    /// ```
    fn simplify(self) -> Quantity<N, R> {
        Quantity::new(self.value())
    }
}

impl<N: Unit, D: Unit, R: Representation> Simplify for Quantity<Prod<D, Per<N, D>>, R> {
    type Out = N;
    type Repr = R;
    fn simplify(self) -> Quantity<N, R> {
        Quantity::new(self.value())
    }
}
