//! Numeric representations carried by a [`Quantity`](crate::Quantity).
//!
//! A representation is either a bare [`Scalar`] (`i32`, `f64`, …) or a fixed-size [`Vector`] of scalars. The traits in
//! this module are the seams the operator layer dispatches on:
//!
//! - [`Representation`] marks a valid payload and carries the compile-time [`Representation::IS_VECTOR`] flag.
//! - [`Promote`] fixes the element type of a mixed-type product or quotient.
//! - [`RepMul`] / [`RepDiv`] enumerate which representations combine under `*` and `/`. There is no vector × vector
//!   entry: vectors only meet through [`dot`](crate::dot) and [`cross`](crate::cross).
//! - [`ScalarLike`] lets scalar quantities stand in for numbers inside the vector algebra.

use crate::ratio::Ratio;
use crate::unit::Unit;
use crate::vector::Vector;
use crate::Quantity;
use core::cmp::Ordering;
use core::fmt::Debug;
use core::ops::Neg;
use num_traits::{NumOps, Zero};

/// A numeric payload accepted by [`Quantity`].
///
/// Types opt in explicitly; nothing is a representation by default. Scalars report `IS_VECTOR == false`, the
/// [`Vector`] container reports `true`.
pub trait Representation: Copy + PartialEq + Debug + Zero + 'static {
    /// `true` for fixed-size vectors.
    const IS_VECTOR: bool = false;

    /// Element type (the representation itself for scalars).
    type Element: Scalar;

    /// Applies a unit conversion ratio. Integral elements truncate toward zero.
    fn rescale(self, ratio: Ratio) -> Self;

    /// `self · ratio == other`, evaluated without rounding for integral elements.
    fn eq_rescaled(self, other: Self, ratio: Ratio) -> bool;
}

/// Element type of a representation: a signed integer or floating-point primitive.
pub trait Scalar:
    Representation<Element = Self> + PartialOrd + Default + NumOps + Neg<Output = Self>
{
    /// Floating-point types accept every conversion ratio without truncation.
    const IS_FLOAT: bool;

    /// Ordering of `self · ratio` against `other`.
    fn cmp_rescaled(self, other: Self, ratio: Ratio) -> Option<Ordering>;

    /// Absolute value.
    fn abs(self) -> Self;

    /// Square root; integral types round toward zero.
    fn sqrt(self) -> Self;

    /// `sqrt(self² + other²)` without undue overflow.
    fn hypot(self, other: Self) -> Self;

    /// `sqrt(self² + b² + c²)` without undue overflow.
    fn hypot3(self, b: Self, c: Self) -> Self;
}

pub(crate) mod math {
    #[inline]
    pub(crate) fn sqrt(x: f64) -> f64 {
        #[cfg(feature = "std")]
        {
            f64::sqrt(x)
        }
        #[cfg(not(feature = "std"))]
        {
            libm::sqrt(x)
        }
    }

    #[inline]
    pub(crate) fn hypot(x: f64, y: f64) -> f64 {
        #[cfg(feature = "std")]
        {
            f64::hypot(x, y)
        }
        #[cfg(not(feature = "std"))]
        {
            libm::hypot(x, y)
        }
    }

    #[inline]
    pub(crate) fn hypotf(x: f32, y: f32) -> f32 {
        #[cfg(feature = "std")]
        {
            f32::hypot(x, y)
        }
        #[cfg(not(feature = "std"))]
        {
            libm::hypotf(x, y)
        }
    }

    #[inline]
    pub(crate) fn sqrtf(x: f32) -> f32 {
        #[cfg(feature = "std")]
        {
            f32::sqrt(x)
        }
        #[cfg(not(feature = "std"))]
        {
            libm::sqrtf(x)
        }
    }

    #[inline]
    pub(crate) fn exp(x: f64) -> f64 {
        #[cfg(feature = "std")]
        {
            f64::exp(x)
        }
        #[cfg(not(feature = "std"))]
        {
            libm::exp(x)
        }
    }
}

/// `x · y` as a 256-bit `(high, low)` pair; `x` fits in 64 bits so no partial product overflows.
#[inline]
fn wide_mul(x: u64, y: u128) -> (u128, u128) {
    let x = u128::from(x);
    let low_part = x * (y & u128::from(u64::MAX));
    let high_part = x * (y >> 64);
    let (low, carry) = low_part.overflowing_add(high_part << 64);
    ((high_part >> 64) + u128::from(carry), low)
}

/// Exact ordering of `a · n` against `b · d`, whatever the magnitude of the ratio terms.
fn cmp_scaled(a: i64, n: i128, b: i64, d: i128) -> Ordering {
    let lhs_sign = a.signum() as i8 * n.signum() as i8;
    let rhs_sign = b.signum() as i8 * d.signum() as i8;
    if lhs_sign != rhs_sign || lhs_sign == 0 {
        return lhs_sign.cmp(&rhs_sign);
    }
    let lhs = wide_mul(a.unsigned_abs(), n.unsigned_abs());
    let rhs = wide_mul(b.unsigned_abs(), d.unsigned_abs());
    if lhs_sign > 0 {
        lhs.cmp(&rhs)
    } else {
        rhs.cmp(&lhs)
    }
}

macro_rules! impl_int_scalar {
    ($($t:ty),* $(,)?) => {
        $(
            impl Representation for $t {
                type Element = $t;

                #[inline]
                fn rescale(self, ratio: Ratio) -> Self {
                    (self as i128 * ratio.numer() / ratio.denom()) as $t
                }

                #[inline]
                fn eq_rescaled(self, other: Self, ratio: Ratio) -> bool {
                    cmp_scaled(self as i64, ratio.numer(), other as i64, ratio.denom()).is_eq()
                }
            }

            impl Scalar for $t {
                const IS_FLOAT: bool = false;

                #[inline]
                fn cmp_rescaled(self, other: Self, ratio: Ratio) -> Option<Ordering> {
                    Some(cmp_scaled(self as i64, ratio.numer(), other as i64, ratio.denom()))
                }

                #[inline]
                fn abs(self) -> Self {
                    <$t>::abs(self)
                }

                #[inline]
                fn sqrt(self) -> Self {
                    math::sqrt(self as f64) as $t
                }

                // Squares are summed in f64 so perfect squares come back exact before truncation.
                #[inline]
                fn hypot(self, other: Self) -> Self {
                    let (a, b) = (self as f64, other as f64);
                    math::sqrt(a * a + b * b) as $t
                }

                #[inline]
                fn hypot3(self, b: Self, c: Self) -> Self {
                    let (a, b, c) = (self as f64, b as f64, c as f64);
                    math::sqrt(a * a + b * b + c * c) as $t
                }
            }
        )*
    };
}

impl_int_scalar!(i8, i16, i32, i64, isize);

impl Representation for f64 {
    type Element = f64;

    #[inline]
    fn rescale(self, ratio: Ratio) -> Self {
        self * ratio.numer() as f64 / ratio.denom() as f64
    }

    #[inline]
    fn eq_rescaled(self, other: Self, ratio: Ratio) -> bool {
        self.rescale(ratio) == other
    }
}

impl Scalar for f64 {
    const IS_FLOAT: bool = true;

    #[inline]
    fn cmp_rescaled(self, other: Self, ratio: Ratio) -> Option<Ordering> {
        self.rescale(ratio).partial_cmp(&other)
    }

    #[inline]
    fn abs(self) -> Self {
        if self < 0.0 || (self == 0.0 && self.is_sign_negative()) {
            -self
        } else {
            self
        }
    }

    #[inline]
    fn sqrt(self) -> Self {
        math::sqrt(self)
    }

    #[inline]
    fn hypot(self, other: Self) -> Self {
        math::hypot(self, other)
    }

    #[inline]
    fn hypot3(self, b: Self, c: Self) -> Self {
        math::hypot(math::hypot(self, b), c)
    }
}

impl Representation for f32 {
    type Element = f32;

    #[inline]
    fn rescale(self, ratio: Ratio) -> Self {
        (self as f64 * ratio.numer() as f64 / ratio.denom() as f64) as f32
    }

    #[inline]
    fn eq_rescaled(self, other: Self, ratio: Ratio) -> bool {
        self.rescale(ratio) == other
    }
}

impl Scalar for f32 {
    const IS_FLOAT: bool = true;

    #[inline]
    fn cmp_rescaled(self, other: Self, ratio: Ratio) -> Option<Ordering> {
        self.rescale(ratio).partial_cmp(&other)
    }

    #[inline]
    fn abs(self) -> Self {
        if self < 0.0 || (self == 0.0 && self.is_sign_negative()) {
            -self
        } else {
            self
        }
    }

    #[inline]
    fn sqrt(self) -> Self {
        math::sqrtf(self)
    }

    #[inline]
    fn hypot(self, other: Self) -> Self {
        math::hypotf(self, other)
    }

    #[inline]
    fn hypot3(self, b: Self, c: Self) -> Self {
        math::hypotf(math::hypotf(self, b), c)
    }
}

impl<T: Scalar, const N: usize> Representation for Vector<T, N> {
    const IS_VECTOR: bool = true;
    type Element = T;

    #[inline]
    fn rescale(self, ratio: Ratio) -> Self {
        self.map(|x| x.rescale(ratio))
    }

    #[inline]
    fn eq_rescaled(self, other: Self, ratio: Ratio) -> bool {
        self.iter()
            .zip(other.iter())
            .all(|(a, b)| a.eq_rescaled(*b, ratio))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Numeric promotion
// ─────────────────────────────────────────────────────────────────────────────

/// Element type produced when a `Self` meets an `Rhs` under `*` or `/`.
///
/// Integral × the same integral stays integral, and any integral meets `f64` as `f64`. `f32` pairs only with itself.
/// Every scalar therefore has at most one float partner, which keeps an unsuffixed float literal unambiguous.
pub trait Promote<Rhs: Scalar>: Scalar {
    /// Common element type.
    type Promoted: Scalar;
    /// Converts the left operand.
    fn promote(self) -> Self::Promoted;
    /// Converts the right operand.
    fn promote_rhs(rhs: Rhs) -> Self::Promoted;
}

macro_rules! impl_promote {
    ($($lhs:ty, $rhs:ty => $out:ty);* $(;)?) => {
        $(
            impl Promote<$rhs> for $lhs {
                type Promoted = $out;
                #[inline]
                fn promote(self) -> $out {
                    self as $out
                }
                #[inline]
                fn promote_rhs(rhs: $rhs) -> $out {
                    rhs as $out
                }
            }
        )*
    };
}

impl_promote! {
    i8, i8 => i8; i16, i16 => i16; i32, i32 => i32; i64, i64 => i64; isize, isize => isize;
    f32, f32 => f32; f64, f64 => f64;
    i8, f64 => f64; f64, i8 => f64;
    i16, f64 => f64; f64, i16 => f64;
    i32, f64 => f64; f64, i32 => f64;
    i64, f64 => f64; f64, i64 => f64;
    isize, f64 => f64; f64, isize => f64;
}

// ─────────────────────────────────────────────────────────────────────────────
// Representation composition
// ─────────────────────────────────────────────────────────────────────────────

/// Representation of `Self * Rhs`.
pub trait RepMul<Rhs> {
    /// Resulting representation.
    type Output: Representation;
    /// Elementwise product.
    fn rep_mul(self, rhs: Rhs) -> Self::Output;
}

/// Representation of `Self / Rhs`.
pub trait RepDiv<Rhs> {
    /// Resulting representation.
    type Output: Representation;
    /// Elementwise quotient; integral elements truncate toward zero.
    fn rep_div(self, rhs: Rhs) -> Self::Output;
}

impl<T, S, const N: usize> RepMul<S> for Vector<T, N>
where
    T: Promote<S>,
    S: Scalar,
{
    type Output = Vector<T::Promoted, N>;
    #[inline]
    fn rep_mul(self, rhs: S) -> Self::Output {
        let rhs = T::promote_rhs(rhs);
        self.map(|x| x.promote() * rhs)
    }
}

impl<T, S, const N: usize> RepDiv<S> for Vector<T, N>
where
    T: Promote<S>,
    S: Scalar,
{
    type Output = Vector<T::Promoted, N>;
    #[inline]
    fn rep_div(self, rhs: S) -> Self::Output {
        let rhs = T::promote_rhs(rhs);
        self.map(|x| x.promote() / rhs)
    }
}

macro_rules! impl_scalar_composition {
    ($($s:ty),* $(,)?) => {
        $(
            impl<B: Scalar> RepMul<B> for $s
            where
                $s: Promote<B>,
            {
                type Output = <$s as Promote<B>>::Promoted;
                #[inline]
                fn rep_mul(self, rhs: B) -> Self::Output {
                    self.promote() * <$s as Promote<B>>::promote_rhs(rhs)
                }
            }

            impl<B: Scalar> RepDiv<B> for $s
            where
                $s: Promote<B>,
            {
                type Output = <$s as Promote<B>>::Promoted;
                #[inline]
                fn rep_div(self, rhs: B) -> Self::Output {
                    self.promote() / <$s as Promote<B>>::promote_rhs(rhs)
                }
            }

            impl<T: Scalar, const N: usize> RepMul<Vector<T, N>> for $s
            where
                $s: Promote<T>,
            {
                type Output = Vector<<$s as Promote<T>>::Promoted, N>;
                #[inline]
                fn rep_mul(self, rhs: Vector<T, N>) -> Self::Output {
                    let lhs = self.promote();
                    rhs.map(|x| lhs * <$s as Promote<T>>::promote_rhs(x))
                }
            }
        )*
    };
}

impl_scalar_composition!(i8, i16, i32, i64, isize, f32, f64);

// ─────────────────────────────────────────────────────────────────────────────
// Scalar-like escape hatch
// ─────────────────────────────────────────────────────────────────────────────

/// A value that behaves like a number for the purposes of the vector algebra.
///
/// Every [`Scalar`] is trivially scalar-like. A scalar [`Quantity`] is too: its number is unwrapped, processed, and
/// rewrapped in the same unit, which is how `norm` over a `Vector<Quantity<U, T>, N>` keeps the unit `U`.
pub trait ScalarLike: Copy {
    /// Underlying number.
    type Number: Scalar;
    /// Unwraps the number.
    fn into_number(self) -> Self::Number;
    /// Rewraps a number.
    fn from_number(number: Self::Number) -> Self;
}

impl<T: Scalar> ScalarLike for T {
    type Number = T;
    #[inline]
    fn into_number(self) -> T {
        self
    }
    #[inline]
    fn from_number(number: T) -> Self {
        number
    }
}

impl<U: Unit, T: Scalar> ScalarLike for Quantity<U, T> {
    type Number = T;
    #[inline]
    fn into_number(self) -> T {
        self.value()
    }
    #[inline]
    fn from_number(number: T) -> Self {
        Quantity::new(number)
    }
}
