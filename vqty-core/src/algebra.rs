//! Vector algebra: [`dot`], [`cross`] and [`norm`].
//!
//! The three operations accept either vector variant:
//!
//! - raw [`Vector`]s and `Vector<Quantity<U, T>, N>`: the element operators do the unit bookkeeping, so a dot
//!   product of metres and newtons sums `Quantity<Prod<Meter, Newton>, _>` elements;
//! - `Quantity<U, Vector<T, N>>`: the numbers are combined first and the result is wrapped in
//!   `U::Product<U2>` (or `U` for the norm).
//!
//! ```rust
//! use vqty_core::force::Newton;
//! use vqty_core::length::Meter;
//! use vqty_core::mechanics::NewtonMeter;
//! use vqty_core::{cross, vector, Quantity, Vector};
//!
//! let r = vector![3, 0, 0] * Meter;
//! let f = vector![0, 10, 0] * Newton;
//! let torque: Quantity<NewtonMeter, Vector<i32, 3>> = cross(f, r).cast();
//! assert_eq!(torque.value(), vector![0, 0, -30]);
//! ```
//!
//! Only 3-vectors have a cross product, and vectors never multiply implicitly:
//!
//! ```compile_fail
//! use vqty_core::{cross, vector};
//!
//! let _ = cross(vector![1, 0], vector![0, 1]);
//! ```

use crate::repr::{Promote, Scalar, ScalarLike};
use crate::unit::Unit;
use crate::vector::Vector;
use crate::Quantity;
use core::marker::PhantomData;
use core::ops::{Add, Mul, Sub};
use num_traits::Zero;

/// Inner product.
pub trait Dot<Rhs = Self> {
    /// Type of `Self * Rhs` summed over the elements.
    type Output;
    /// Sum of the elementwise products.
    fn dot(self, rhs: Rhs) -> Self::Output;
}

/// Cross product of 3-vectors.
pub trait Cross<Rhs = Self> {
    /// Vector of `Self * Rhs` elements.
    type Output;
    /// `(a1·b2 − a2·b1, a2·b0 − a0·b2, a0·b1 − a1·b0)`.
    fn cross(self, rhs: Rhs) -> Self::Output;
}

/// Euclidean magnitude.
pub trait Norm {
    /// Magnitude type; shares the element unit.
    type Output;
    /// Length of the vector.
    fn norm(self) -> Self::Output;
}

/// Dot product of two vectors.
///
/// ```rust
/// use vqty_core::{dot, vector};
///
/// assert_eq!(dot(vector![1, 2, 3], vector![4, 5, 6]), 32);
/// ```
#[inline]
pub fn dot<A: Dot<B>, B>(a: A, b: B) -> A::Output {
    a.dot(b)
}

/// Cross product of two 3-vectors.
#[inline]
pub fn cross<A: Cross<B>, B>(a: A, b: B) -> A::Output {
    a.cross(b)
}

/// Magnitude of a vector.
///
/// ```rust
/// use vqty_core::length::Kilometer;
/// use vqty_core::time::Hour;
/// use vqty_core::{norm, vector, Quantity, Per, Vector};
///
/// let v: Quantity<Per<Kilometer, Hour>, Vector<i32, 3>> = vector![2, 3, 6] * (Kilometer / Hour);
/// assert_eq!(norm(v).value(), 7);
/// ```
#[inline]
pub fn norm<V: Norm>(v: V) -> V::Output {
    v.norm()
}

/// Rejects zero-length vectors where an operation has no identity to fall back on.
struct NonEmpty<const N: usize>(PhantomData<[(); N]>);

impl<const N: usize> NonEmpty<N> {
    const OK: () = assert!(N >= 1, "vector algebra needs at least one element");
}

// ─────────────────────────────────────────────────────────────────────────────
// Elementwise variants (raw vectors and vectors of quantities)
// ─────────────────────────────────────────────────────────────────────────────

impl<A, B, const N: usize> Dot<Vector<B, N>> for Vector<A, N>
where
    A: Mul<B> + Copy,
    B: Copy,
    A::Output: Add<Output = A::Output>,
{
    type Output = A::Output;

    fn dot(self, rhs: Vector<B, N>) -> A::Output {
        let () = NonEmpty::<N>::OK;
        let mut sum = self[0] * rhs[0];
        for i in 1..N {
            sum = sum + self[i] * rhs[i];
        }
        sum
    }
}

impl<A, B> Cross<Vector<B, 3>> for Vector<A, 3>
where
    A: Mul<B> + Copy,
    B: Copy,
    A::Output: Sub<Output = A::Output>,
{
    type Output = Vector<A::Output, 3>;

    #[inline]
    fn cross(self, rhs: Vector<B, 3>) -> Self::Output {
        let (a, b) = (self, rhs);
        Vector::new([
            a[1] * b[2] - a[2] * b[1],
            a[2] * b[0] - a[0] * b[2],
            a[0] * b[1] - a[1] * b[0],
        ])
    }
}

impl<E: ScalarLike, const N: usize> Norm for Vector<E, N> {
    type Output = E;

    fn norm(self) -> E {
        let () = NonEmpty::<N>::OK;
        let n = self.map(ScalarLike::into_number);
        let magnitude = match N {
            1 => n[0],
            2 => n[0].hypot(n[1]),
            3 => n[0].hypot3(n[1], n[2]),
            _ => n
                .iter()
                .fold(<E::Number as Zero>::zero(), |acc, &x| acc + x * x)
                .sqrt(),
        };
        E::from_number(magnitude)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Quantities with a vector representation
// ─────────────────────────────────────────────────────────────────────────────

impl<U1, U2, T1, T2, const N: usize> Dot<Quantity<U2, Vector<T2, N>>> for Quantity<U1, Vector<T1, N>>
where
    U1: Unit,
    U2: Unit,
    T1: Promote<T2>,
    T2: Scalar,
{
    type Output = Quantity<U1::Product<U2>, T1::Promoted>;

    #[inline]
    fn dot(self, rhs: Quantity<U2, Vector<T2, N>>) -> Self::Output {
        let a = self.value().map(<T1 as Promote<T2>>::promote);
        let b = rhs.value().map(<T1 as Promote<T2>>::promote_rhs);
        Quantity::new(a.dot(b))
    }
}

impl<U1, U2, T1, T2> Cross<Quantity<U2, Vector<T2, 3>>> for Quantity<U1, Vector<T1, 3>>
where
    U1: Unit,
    U2: Unit,
    T1: Promote<T2>,
    T2: Scalar,
{
    type Output = Quantity<U1::Product<U2>, Vector<T1::Promoted, 3>>;

    #[inline]
    fn cross(self, rhs: Quantity<U2, Vector<T2, 3>>) -> Self::Output {
        let a = self.value().map(<T1 as Promote<T2>>::promote);
        let b = rhs.value().map(<T1 as Promote<T2>>::promote_rhs);
        Quantity::new(a.cross(b))
    }
}

impl<U: Unit, T: Scalar, const N: usize> Norm for Quantity<U, Vector<T, N>> {
    type Output = Quantity<U, T>;

    #[inline]
    fn norm(self) -> Quantity<U, T> {
        Quantity::new(self.value().norm())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::force::Newton;
    use crate::units::length::{Kilometer, Meter};
    use crate::units::mechanics::NewtonMeter;
    use crate::units::time::Hour;
    use crate::{vector, Per, Prod};
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    // ─────────────────────────────────────────────────────────────────────────────
    // Raw vectors
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn dot_is_the_sum_of_products() {
        assert_eq!(dot(vector![1, 2, 3], vector![4, 5, 6]), 32);
        assert_eq!(dot(vector![1, 2, 3], vector![1, 2, 3]), 14);
        assert_ne!(dot(vector![1, 2, 3], vector![4, 5, 6]), dot(vector![1, 2, 3], vector![1, 2, 3]));
        assert_eq!(dot(vector![5_i64], vector![7]), 35);
        assert_eq!(dot(vector![1.5, -2.0, 0.5, 4.0], vector![2.0, 1.0, 8.0, 0.25]), 6.0);
    }

    #[test]
    fn cross_of_basis_vectors() {
        let x = vector![1, 0, 0];
        let y = vector![0, 1, 0];
        assert_eq!(cross(x, y), vector![0, 0, 1]);
        assert_eq!(cross(y, x), vector![0, 0, -1]);
        assert_eq!(cross(x, x), vector![0, 0, 0]);
    }

    #[test]
    fn norm_closed_forms() {
        assert_eq!(norm(vector![-4_i32]), -4);
        assert_eq!(norm(vector![3_i32, 4]), 5);
        assert_eq!(norm(vector![2_i32, 3, 6]), 7);
        assert_eq!(norm(vector![1_i64, 1, 1, 1]), 2);
        assert_relative_eq!(norm(vector![1.0_f64, 2.0, 2.0, 4.0]), 5.0, max_relative = 1e-15);
    }

    #[test]
    fn integral_norm_truncates() {
        assert_eq!(norm(vector![1_i32, 1]), 1);
        assert_eq!(norm(vector![2_i32, 2, 2]), 3);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Quantity<U, Vector>
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn quantity_cross_composes_units() {
        let r: Quantity<Meter, Vector<i32, 3>> = vector![3, 0, 0] * Meter;
        let f: Quantity<Newton, Vector<i32, 3>> = vector![0, 10, 0] * Newton;
        let t: Quantity<Prod<Meter, Newton>, Vector<i32, 3>> = cross(r, f);
        assert_eq!(t.value(), vector![0, 0, 30]);
        assert_eq!(t.cast::<NewtonMeter>().value(), vector![0, 0, 30]);
    }

    #[test]
    fn quantity_dot_promotes() {
        let r: Quantity<Meter, Vector<i32, 3>> = vector![1, 2, 3] * Meter;
        let f: Quantity<Newton, Vector<f64, 3>> = vector![0.5, 0.5, 0.5] * Newton;
        let w: Quantity<Prod<Meter, Newton>, f64> = dot(r, f);
        assert_eq!(w.value(), 3.0);
    }

    #[test]
    fn quantity_norm_keeps_unit() {
        let v: Quantity<Per<Kilometer, Hour>, Vector<i32, 3>> = vector![2, 3, 6] * (Kilometer / Hour);
        let speed: Quantity<Per<Kilometer, Hour>, i32> = norm(v);
        assert_eq!(speed.value(), 7);
        assert_eq!(speed.to_string(), "7 km/h");
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Vector<Quantity>
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn vector_of_quantities() {
        let r: Vector<Quantity<Meter, i32>, 3> = Vector::new([3 * Meter, 0 * Meter, 0 * Meter]);
        let f: Vector<Quantity<Newton, i32>, 3> = Vector::new([0 * Newton, 10 * Newton, 0 * Newton]);

        let t = cross(r, f);
        assert_eq!(t.z().value(), 30);

        let w: Quantity<Prod<Meter, Newton>, i32> = dot(r, f);
        assert_eq!(w.value(), 0);

        let speed: Vector<Quantity<Per<Kilometer, Hour>, i32>, 3> = Vector::new([
            2 * (Kilometer / Hour),
            3 * (Kilometer / Hour),
            6 * (Kilometer / Hour),
        ]);
        assert_eq!(norm(speed).value(), 7);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Property-based tests
    // ─────────────────────────────────────────────────────────────────────────────

    proptest! {
        #[test]
        fn prop_cross_is_anticommutative(
            a in proptest::array::uniform3(-1_000i64..1_000),
            b in proptest::array::uniform3(-1_000i64..1_000),
        ) {
            let (a, b) = (Vector::new(a), Vector::new(b));
            prop_assert_eq!(cross(a, b), -cross(b, a));
        }

        #[test]
        fn prop_cross_is_orthogonal(
            a in proptest::array::uniform3(-1_000i64..1_000),
            b in proptest::array::uniform3(-1_000i64..1_000),
        ) {
            let (a, b) = (Vector::new(a), Vector::new(b));
            let c = cross(a, b);
            prop_assert_eq!(dot(c, a), 0);
            prop_assert_eq!(dot(c, b), 0);
        }

        #[test]
        fn prop_norm_squared_matches_dot(a in proptest::array::uniform3(-1e3..1e3f64)) {
            let v = Vector::new(a);
            let n = norm(v);
            prop_assert!((n * n - dot(v, v)).abs() <= 1e-9 * dot(v, v).max(1.0));
        }
    }
}
