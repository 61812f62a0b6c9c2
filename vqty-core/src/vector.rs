//! Fixed-size vectors.
//!
//! [`Vector<T, N>`] is the container used both as a representation (`Quantity<Meter, Vector<i32, 3>>`, every
//! element shares one unit) and as a sequence of independently typed scalar quantities
//! (`Vector<Quantity<Meter, i32>, 3>`). Arithmetic is elementwise and generic over the element operators, so the
//! same impls serve both variants: whatever `E * S` means for one element, `Vector<E, N> * S` means for all of them.
//!
//! There is no `Vector * Vector`; use [`dot`](crate::dot) or [`cross`](crate::cross).

use crate::unit::Unit;
use crate::Quantity;
use crate::Representation;
use core::fmt::{Display, Formatter, Result};
use core::ops::{Add, AddAssign, Div, Index, IndexMut, Mul, Neg, Sub, SubAssign};
use num_traits::Zero;

/// A fixed-size column vector of `N` elements.
///
/// ```rust
/// use vqty_core::Vector;
///
/// let v = Vector::new([1, 2, 3]);
/// assert_eq!(v[1], 2);
/// assert_eq!(Vector::<i32, 3>::LEN, 3);
/// assert_eq!(v + Vector::new([3, 2, 1]), Vector::new([4, 4, 4]));
/// assert_eq!(format!("{}", v * 2), "[2, 4, 6]");
/// ```
#[derive(Clone, Copy, Debug, Hash)]
pub struct Vector<T, const N: usize>([T; N]);

impl<T, const N: usize> Vector<T, N> {
    /// Number of elements.
    pub const LEN: usize = N;

    /// Wraps an array.
    #[inline]
    pub const fn new(elements: [T; N]) -> Self {
        Self(elements)
    }

    /// Builds a vector by calling `f` with each index.
    #[inline]
    pub fn from_fn(f: impl FnMut(usize) -> T) -> Self {
        Self(core::array::from_fn(f))
    }

    /// Applies `f` to every element.
    #[inline]
    pub fn map<O>(self, f: impl FnMut(T) -> O) -> Vector<O, N> {
        Vector(self.0.map(f))
    }

    /// Iterator over the elements.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.0.iter()
    }

    /// Unwraps the array.
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Borrows the array.
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Number of elements.
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    /// `true` for the zero-sized vector.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }
}

impl<T: Zero + Copy, const N: usize> Vector<T, N> {
    /// The vector of zeros.
    #[inline]
    pub fn zero() -> Self {
        Self([T::zero(); N])
    }
}

impl<T: Copy> Vector<T, 3> {
    /// First component.
    #[inline]
    pub fn x(&self) -> T {
        self.0[0]
    }

    /// Second component.
    #[inline]
    pub fn y(&self) -> T {
        self.0[1]
    }

    /// Third component.
    #[inline]
    pub fn z(&self) -> T {
        self.0[2]
    }
}

impl<T: Zero + Copy, const N: usize> Zero for Vector<T, N> {
    fn zero() -> Self {
        Self([T::zero(); N])
    }

    fn is_zero(&self) -> bool {
        self.0.iter().all(Zero::is_zero)
    }
}

impl<T: Default + Copy, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self([T::default(); N])
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    fn from(elements: [T; N]) -> Self {
        Self(elements)
    }
}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;
    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.0[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.0[index]
    }
}

impl<T, const N: usize> IntoIterator for Vector<T, N> {
    type Item = T;
    type IntoIter = core::array::IntoIter<T, N>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a Vector<T, N> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T: Display, const N: usize> Display for Vector<T, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str("[")?;
        for (i, element) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            Display::fmt(element, f)?;
        }
        f.write_str("]")
    }
}

impl<E, F, const N: usize> PartialEq<Vector<F, N>> for Vector<E, N>
where
    E: PartialEq<F>,
{
    #[inline]
    fn eq(&self, other: &Vector<F, N>) -> bool {
        self.0.iter().zip(other.0.iter()).all(|(a, b)| a == b)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Elementwise arithmetic
// ─────────────────────────────────────────────────────────────────────────────

impl<A, B, const N: usize> Add<Vector<B, N>> for Vector<A, N>
where
    A: Add<B> + Copy,
    B: Copy,
{
    type Output = Vector<A::Output, N>;
    #[inline]
    fn add(self, rhs: Vector<B, N>) -> Self::Output {
        Vector::from_fn(|i| self.0[i] + rhs.0[i])
    }
}

impl<A, B, const N: usize> Sub<Vector<B, N>> for Vector<A, N>
where
    A: Sub<B> + Copy,
    B: Copy,
{
    type Output = Vector<A::Output, N>;
    #[inline]
    fn sub(self, rhs: Vector<B, N>) -> Self::Output {
        Vector::from_fn(|i| self.0[i] - rhs.0[i])
    }
}

impl<A, B, const N: usize> AddAssign<Vector<B, N>> for Vector<A, N>
where
    A: AddAssign<B>,
    B: Copy,
{
    #[inline]
    fn add_assign(&mut self, rhs: Vector<B, N>) {
        for (a, b) in self.0.iter_mut().zip(rhs.0) {
            *a += b;
        }
    }
}

impl<A, B, const N: usize> SubAssign<Vector<B, N>> for Vector<A, N>
where
    A: SubAssign<B>,
    B: Copy,
{
    #[inline]
    fn sub_assign(&mut self, rhs: Vector<B, N>) {
        for (a, b) in self.0.iter_mut().zip(rhs.0) {
            *a -= b;
        }
    }
}

impl<T: Neg, const N: usize> Neg for Vector<T, N> {
    type Output = Vector<T::Output, N>;
    #[inline]
    fn neg(self) -> Self::Output {
        self.map(Neg::neg)
    }
}

macro_rules! impl_vector_scalar_ops {
    ($($s:ty),* $(,)?) => {
        $(
            impl<T: Mul<$s>, const N: usize> Mul<$s> for Vector<T, N> {
                type Output = Vector<T::Output, N>;
                #[inline]
                fn mul(self, rhs: $s) -> Self::Output {
                    self.map(|x| x * rhs)
                }
            }

            impl<T: Div<$s>, const N: usize> Div<$s> for Vector<T, N> {
                type Output = Vector<T::Output, N>;
                #[inline]
                fn div(self, rhs: $s) -> Self::Output {
                    self.map(|x| x / rhs)
                }
            }

            impl<T, const N: usize> Mul<Vector<T, N>> for $s
            where
                $s: Mul<T>,
            {
                type Output = Vector<<$s as Mul<T>>::Output, N>;
                #[inline]
                fn mul(self, rhs: Vector<T, N>) -> Self::Output {
                    rhs.map(|x| self * x)
                }
            }
        )*
    };
}

impl_vector_scalar_ops!(i8, i16, i32, i64, isize, f32, f64);

impl<E, U: Unit, R, const N: usize> Mul<Quantity<U, R>> for Vector<E, N>
where
    E: Mul<Quantity<U, R>>,
    R: Copy,
{
    type Output = Vector<E::Output, N>;
    #[inline]
    fn mul(self, rhs: Quantity<U, R>) -> Self::Output {
        self.map(|x| x * rhs)
    }
}

impl<E, U: Unit, R, const N: usize> Div<Quantity<U, R>> for Vector<E, N>
where
    E: Div<Quantity<U, R>>,
    R: Copy,
{
    type Output = Vector<E::Output, N>;
    #[inline]
    fn div(self, rhs: Quantity<U, R>) -> Self::Output {
        self.map(|x| x / rhs)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Vectors of independently typed quantities
// ─────────────────────────────────────────────────────────────────────────────

impl<U: Unit, T: Representation, const N: usize> Vector<Quantity<U, T>, N> {
    /// Converts every element to `V` through the non-truncating path.
    ///
    /// No `truncate_to` is offered here; a lossy cast exists only on `Quantity<U, Vector<T, N>>`, which applies one
    /// ratio uniformly.
    ///
    /// ```rust
    /// use vqty_core::length::{Kilometer, Meter};
    /// use vqty_core::{Quantity, Vector};
    ///
    /// let v: Vector<Quantity<Kilometer, i32>, 3> = Vector::new([3 * Kilometer, 2 * Kilometer, 1 * Kilometer]);
    /// let m = v.to::<Meter>();
    /// assert_eq!(m, Vector::new([3000 * Meter, 2000 * Meter, 1000 * Meter]));
    /// ```
    ///
    /// ```compile_fail
    /// use vqty_core::length::{Kilometer, Meter};
    /// use vqty_core::{Quantity, Vector};
    ///
    /// let v: Vector<Quantity<Meter, i32>, 3> = Vector::new([1001 * Meter, 1002 * Meter, 1003 * Meter]);
    /// let _ = v.truncate_to::<Kilometer>();
    /// ```
    #[inline]
    pub fn to<V: Unit<Dim = U::Dim>>(self) -> Vector<Quantity<V, T>, N> {
        self.map(Quantity::to)
    }

    /// Re-types every element as `V`, a unit of the same physical dimension reached by a different composition.
    #[inline]
    pub fn cast<V: Unit>(self) -> Vector<Quantity<V, T>, N> {
        self.map(Quantity::cast)
    }

    /// Collapses the elements into one quantity whose representation is a raw vector.
    #[inline]
    pub fn into_quantity(self) -> Quantity<U, Vector<T, N>> {
        Quantity::new(self.map(Quantity::value))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
mod serde_impls {
    use super::Vector;
    use core::fmt;
    use core::marker::PhantomData;
    use serde::de::{Error as DeError, SeqAccess, Visitor};
    use serde::ser::SerializeTuple;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl<T: Serialize, const N: usize> Serialize for Vector<T, N> {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            let mut tuple = serializer.serialize_tuple(N)?;
            for element in self.iter() {
                tuple.serialize_element(element)?;
            }
            tuple.end()
        }
    }

    impl<'de, T, const N: usize> Deserialize<'de> for Vector<T, N>
    where
        T: Deserialize<'de> + Default + Copy,
    {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            struct VectorVisitor<T, const N: usize>(PhantomData<T>);

            impl<'de, T, const N: usize> Visitor<'de> for VectorVisitor<T, N>
            where
                T: Deserialize<'de> + Default + Copy,
            {
                type Value = Vector<T, N>;

                fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                    write!(formatter, "a sequence of {} elements", N)
                }

                fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
                where
                    A: SeqAccess<'de>,
                {
                    let mut elements = [T::default(); N];
                    for (i, slot) in elements.iter_mut().enumerate() {
                        *slot = seq
                            .next_element()?
                            .ok_or_else(|| DeError::invalid_length(i, &self))?;
                    }
                    if seq.next_element::<T>()?.is_some() {
                        return Err(DeError::invalid_length(N + 1, &self));
                    }
                    Ok(Vector::new(elements))
                }
            }

            deserializer.deserialize_tuple(N, VectorVisitor::<T, N>(PhantomData))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::length::{Kilometer, Kilometers, Meter, Meters};
    use crate::Quantity;

    // ─────────────────────────────────────────────────────────────────────────
    // Container basics
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn construction_and_access() {
        let v = Vector::new([1, 2, 3]);
        assert_eq!(v.len(), 3);
        assert!(!v.is_empty());
        assert_eq!(v[0], 1);
        assert_eq!(v.x(), 1);
        assert_eq!(v.y(), 2);
        assert_eq!(v.z(), 3);
        assert_eq!(v.into_array(), [1, 2, 3]);
        assert_eq!(Vector::<f64, 4>::LEN, 4);
    }

    #[test]
    fn from_fn_and_map() {
        let v: Vector<usize, 4> = Vector::from_fn(|i| i * i);
        assert_eq!(v, Vector::new([0, 1, 4, 9]));
        assert_eq!(v.map(|x| x as f64 / 2.0), Vector::new([0.0, 0.5, 2.0, 4.5]));
    }

    #[test]
    fn index_mut() {
        let mut v = Vector::new([1, 2, 3]);
        v[2] = 7;
        assert_eq!(v, Vector::new([1, 2, 7]));
    }

    #[test]
    fn zero_vector() {
        let z: Vector<i32, 3> = Vector::zero();
        assert_eq!(z, Vector::new([0, 0, 0]));
        assert!(Zero::is_zero(&z));
        assert!(!Zero::is_zero(&Vector::new([0.0, 1.0])));
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Vector::new([1, 2, 3])), "[1, 2, 3]");
        assert_eq!(format!("{:.1}", Vector::new([0.26, 1.0])), "[0.3, 1.0]");
    }

    #[test]
    fn iteration() {
        let v = Vector::new([1, 2, 3]);
        assert_eq!(v.iter().sum::<i32>(), 6);
        assert_eq!(v.into_iter().rev().collect::<Vec<_>>(), vec![3, 2, 1]);
        let mut total = 0;
        for x in &v {
            total += x;
        }
        assert_eq!(total, 6);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Arithmetic
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn elementwise_add_sub_neg() {
        let a = Vector::new([1, 2, 3]);
        let b = Vector::new([3, 2, 1]);
        assert_eq!(a + b, Vector::new([4, 4, 4]));
        assert_eq!(a - b, Vector::new([-2, 0, 2]));
        assert_eq!(-a, Vector::new([-1, -2, -3]));

        let mut c = a;
        c += b;
        assert_eq!(c, Vector::new([4, 4, 4]));
        c -= b;
        assert_eq!(c, a);
    }

    #[test]
    fn scaling() {
        let v = Vector::new([2, 4, 6]);
        assert_eq!(v * 2, Vector::new([4, 8, 12]));
        assert_eq!(2 * v, Vector::new([4, 8, 12]));
        assert_eq!(v / 2, Vector::new([1, 2, 3]));
        assert_eq!(Vector::new([1.0, 2.0]) * 0.5, Vector::new([0.5, 1.0]));
    }

    #[test]
    fn equality_across_element_types() {
        let km = Vector::new([Kilometers::new(1.0), Kilometers::new(2.0)]);
        let m = Vector::new([Meters::new(1000.0), Meters::new(2000.0)]);
        assert_eq!(km, m);
        assert_ne!(km, Vector::new([Meters::new(1000.0), Meters::new(2001.0)]));
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Vectors of quantities
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn quantity_elements_convert() {
        let v = Vector::new([3_i32 * Kilometer, 2_i32 * Kilometer, 1_i32 * Kilometer]);
        let m = v.to::<Meter>();
        assert_eq!(m[0].value(), 3000);
        assert_eq!(m[2].value(), 1000);
    }

    #[test]
    fn into_quantity_shares_the_unit() {
        let v = Vector::new([Meters::new(1.5), Meters::new(2.5)]);
        let q = v.into_quantity();
        assert_eq!(q.value(), Vector::new([1.5, 2.5]));
        assert_eq!(q.to::<Kilometer>().value(), Vector::new([0.0015, 0.0025]));
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn serializes_as_sequence() {
            let json = serde_json::to_string(&Vector::new([1, 2, 3])).unwrap();
            assert_eq!(json, "[1,2,3]");
        }

        #[test]
        fn deserializes_exact_length() {
            let v: Vector<f64, 2> = serde_json::from_str("[0.5, 1.5]").unwrap();
            assert_eq!(v, Vector::new([0.5, 1.5]));
        }

        #[test]
        fn rejects_wrong_length() {
            assert!(serde_json::from_str::<Vector<i32, 3>>("[1, 2]").is_err());
            assert!(serde_json::from_str::<Vector<i32, 2>>("[1, 2, 3]").is_err());
        }
    }
}
