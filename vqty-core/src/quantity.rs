//! Quantity type and its implementations.

use crate::conversion::{conversion_ratio, Exact, SameDimension};
use crate::repr::{math, RepDiv, RepMul, Representation, Scalar};
use crate::unit::{Unit, Unitless};
use crate::vector::Vector;
use core::cmp::Ordering;
use core::marker::PhantomData;
use core::ops::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A quantity with a specific unit.
///
/// `Quantity<U, R>` wraps a representation `R` (a scalar such as `f64` or `i32`, or a [`Vector`] of scalars)
/// together with phantom type information about its unit `U`. This enables compile-time dimensional analysis
/// while maintaining zero runtime cost.
///
/// # Examples
///
/// ```rust
/// use vqty_core::length::{Kilometer, Meter};
/// use vqty_core::{vector, Quantity};
///
/// let x = Quantity::<Meter>::new(5.0);
/// let y = Quantity::<Meter>::new(3.0);
/// assert_eq!((x + y).value(), 8.0);
///
/// let position = vector![3, 2, 1] * Kilometer;
/// assert_eq!(position.to::<Meter>().value(), vector![3000, 2000, 1000]);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Quantity<U: Unit, R = f64>(R, PhantomData<U>);

impl<U: Unit, R> Quantity<U, R> {
    /// Creates a new quantity with the given value.
    ///
    /// ```rust
    /// use vqty_core::length::Meters;
    /// let d = Meters::new(3.0);
    /// assert_eq!(d.value(), 3.0);
    /// ```
    #[inline]
    pub const fn new(value: R) -> Self {
        Self(value, PhantomData)
    }

    #[inline]
    pub(crate) fn value_ref(&self) -> &R {
        &self.0
    }
}

impl<U: Unit, R: Copy> Quantity<U, R> {
    /// Returns the raw numeric value.
    ///
    /// ```rust
    /// use vqty_core::time::Seconds;
    /// let t = Seconds::new(2.5);
    /// assert_eq!(t.value(), 2.5);
    /// ```
    #[inline]
    pub fn value(self) -> R {
        self.0
    }
}

impl<U: Unit, R: Representation> Quantity<U, R> {
    /// The zero of this quantity's representation.
    ///
    /// ```rust
    /// use vqty_core::length::Meter;
    /// use vqty_core::{Quantity, Vector};
    /// assert_eq!(Quantity::<Meter, Vector<i32, 3>>::zero().value(), Vector::new([0, 0, 0]));
    /// ```
    #[inline]
    pub fn zero() -> Self {
        Self::new(R::zero())
    }

    /// Rescales into `V` through the non-truncating path, without checking dimensions.
    #[inline]
    fn rescaled<V: Unit>(self) -> Quantity<V, R> {
        Quantity::new(self.0.rescale(Exact::<U, V, R>::RATIO))
    }

    /// Converts this quantity to another unit of the same dimension.
    ///
    /// Floating-point representations accept any target. Integral representations only compile when the target is
    /// an integer submultiple of the source, so that no precision can be lost:
    ///
    /// ```rust
    /// use vqty_core::length::{Kilometer, Meter};
    /// use vqty_core::vector;
    ///
    /// let v = vector![3, 2, 1] * Kilometer;
    /// assert_eq!(v.to::<Meter>().value(), vector![3000, 2000, 1000]);
    /// ```
    ///
    /// ```compile_fail
    /// use vqty_core::length::{Kilometer, Meter};
    /// use vqty_core::vector;
    ///
    /// // 1001 m is not a whole number of kilometres
    /// let _ = (vector![1001, 1002, 1003] * Meter).to::<Kilometer>();
    /// ```
    #[inline]
    pub fn to<V: Unit<Dim = U::Dim>>(self) -> Quantity<V, R> {
        self.rescaled()
    }

    /// Converts to another unit of the same dimension, truncating integral elements toward zero.
    ///
    /// ```rust
    /// use vqty_core::length::{Kilometer, Meter};
    /// use vqty_core::vector;
    ///
    /// let v = vector![1001, 1002, 1003] * Meter;
    /// assert_eq!(v.truncate_to::<Kilometer>().value(), vector![1, 1, 1]);
    /// ```
    #[inline]
    pub fn truncate_to<V: Unit<Dim = U::Dim>>(self) -> Quantity<V, R> {
        Quantity::new(self.0.rescale(conversion_ratio::<U, V>()))
    }

    /// Re-types this quantity as `V`, a unit whose dimension has the same base exponents but may have been
    /// composed differently (for example `kg·(m/s)` as `N·s`). The value is converted exactly as by [`to`].
    ///
    /// ```rust
    /// use vqty_core::mass::Kilogram;
    /// use vqty_core::mechanics::NewtonSecond;
    /// use vqty_core::velocity::Velocity;
    /// use vqty_core::length::Meter;
    /// use vqty_core::time::Second;
    /// use vqty_core::{vector, Quantity, Vector};
    ///
    /// let mass = Quantity::<Kilogram, i32>::new(2);
    /// let v: Velocity<Meter, Second, Vector<i32, 3>> = vector![1, 2, 3] * (Meter / Second);
    /// let p = (mass * v).cast::<NewtonSecond>();
    /// assert_eq!(p.value(), vector![2, 4, 6]);
    /// ```
    ///
    /// ```compile_fail
    /// use vqty_core::length::Meters;
    /// use vqty_core::time::Second;
    ///
    /// let _ = Meters::new(1.0).cast::<Second>();
    /// ```
    ///
    /// [`to`]: Quantity::to
    #[inline]
    pub fn cast<V: Unit>(self) -> Quantity<V, R> {
        let () = SameDimension::<U, V>::OK;
        self.rescaled()
    }

    /// Numerical value of this quantity expressed in `V`.
    ///
    /// ```rust
    /// use vqty_core::length::{Centimeter, Meters};
    /// assert_eq!(Meters::new(1.5).value_in::<Centimeter>(), 150.0);
    /// ```
    #[inline]
    pub fn value_in<V: Unit<Dim = U::Dim>>(self) -> R {
        self.to::<V>().0
    }
}

impl<U: Unit> Quantity<U> {
    /// A constant representing NaN for this quantity type.
    ///
    /// ```rust
    /// use vqty_core::length::Meters;
    /// assert!(Meters::NAN.value().is_nan());
    /// ```
    pub const NAN: Self = Self::new(f64::NAN);
}

impl<U: Unit, T: Scalar> Quantity<U, T> {
    /// Returns the absolute value.
    ///
    /// ```rust
    /// use vqty_core::length::Meters;
    /// assert_eq!(Meters::new(-10.0).abs().value(), 10.0);
    /// ```
    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.0.abs())
    }

    /// Returns the minimum of this quantity and another.
    ///
    /// ```rust
    /// use vqty_core::length::Meters;
    /// assert_eq!(Meters::new(3.0).min(Meters::new(5.0)).value(), 3.0);
    /// ```
    #[inline]
    pub fn min(self, other: Self) -> Self {
        if other.0 < self.0 {
            other
        } else {
            self
        }
    }

    /// Returns the maximum of this quantity and another.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        if other.0 > self.0 {
            other
        } else {
            self
        }
    }
}

impl<U: Unit, T: Scalar, const N: usize> Quantity<U, Vector<T, N>> {
    /// The `i`-th component as a scalar quantity in the same unit.
    ///
    /// # Panics
    ///
    /// Panics if `i >= N`.
    #[inline]
    pub fn component(self, i: usize) -> Quantity<U, T> {
        Quantity::new(self.0[i])
    }

    /// Splits into a vector of independently typed scalar quantities.
    ///
    /// ```rust
    /// use vqty_core::length::Meter;
    /// use vqty_core::vector;
    ///
    /// let parts = (vector![1, 2, 3] * Meter).into_components();
    /// assert_eq!(parts[2].value(), 3);
    /// assert_eq!(parts.into_quantity().value(), vector![1, 2, 3]);
    /// ```
    #[inline]
    pub fn into_components(self) -> Vector<Quantity<U, T>, N> {
        self.0.map(Quantity::new)
    }
}

impl<U: Unit, T: Scalar> Quantity<U, Vector<T, 3>> {
    /// First component.
    #[inline]
    pub fn x(self) -> Quantity<U, T> {
        self.component(0)
    }

    /// Second component.
    #[inline]
    pub fn y(self) -> Quantity<U, T> {
        self.component(1)
    }

    /// Third component.
    #[inline]
    pub fn z(self) -> Quantity<U, T> {
        self.component(2)
    }
}

impl Quantity<Unitless, f64> {
    /// `e` raised to this dimensionless value.
    ///
    /// ```rust
    /// use vqty_core::{Quantity, Unitless};
    /// assert_eq!(Quantity::<Unitless>::new(0.0).exp().value(), 1.0);
    /// ```
    #[inline]
    pub fn exp(self) -> Self {
        Self::new(math::exp(self.0))
    }
}

impl<U: Unit, R: Default> Default for Quantity<U, R> {
    fn default() -> Self {
        Self::new(R::default())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operator implementations
// ─────────────────────────────────────────────────────────────────────────────

impl<U1, U2, R> Add<Quantity<U2, R>> for Quantity<U1, R>
where
    U1: Unit,
    U2: Unit<Dim = U1::Dim>,
    R: Representation + Add<Output = R>,
{
    type Output = Self;
    #[inline]
    fn add(self, rhs: Quantity<U2, R>) -> Self {
        Self::new(self.0 + rhs.rescaled::<U1>().0)
    }
}

impl<U1, U2, R> AddAssign<Quantity<U2, R>> for Quantity<U1, R>
where
    U1: Unit,
    U2: Unit<Dim = U1::Dim>,
    R: Representation + AddAssign,
{
    #[inline]
    fn add_assign(&mut self, rhs: Quantity<U2, R>) {
        self.0 += rhs.rescaled::<U1>().0;
    }
}

impl<U1, U2, R> Sub<Quantity<U2, R>> for Quantity<U1, R>
where
    U1: Unit,
    U2: Unit<Dim = U1::Dim>,
    R: Representation + Sub<Output = R>,
{
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Quantity<U2, R>) -> Self {
        Self::new(self.0 - rhs.rescaled::<U1>().0)
    }
}

impl<U1, U2, R> SubAssign<Quantity<U2, R>> for Quantity<U1, R>
where
    U1: Unit,
    U2: Unit<Dim = U1::Dim>,
    R: Representation + SubAssign,
{
    #[inline]
    fn sub_assign(&mut self, rhs: Quantity<U2, R>) {
        self.0 -= rhs.rescaled::<U1>().0;
    }
}

impl<U: Unit, R: Neg<Output = R>> Neg for Quantity<U, R> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.0)
    }
}

macro_rules! impl_scalar_ops {
    ($($s:ty),* $(,)?) => {
        $(
            impl<U: Unit, R: RepMul<$s>> Mul<$s> for Quantity<U, R> {
                type Output = Quantity<U, R::Output>;
                #[inline]
                fn mul(self, rhs: $s) -> Self::Output {
                    Quantity::new(self.0.rep_mul(rhs))
                }
            }

            impl<U: Unit, R: RepDiv<$s>> Div<$s> for Quantity<U, R> {
                type Output = Quantity<U, R::Output>;
                #[inline]
                fn div(self, rhs: $s) -> Self::Output {
                    Quantity::new(self.0.rep_div(rhs))
                }
            }

            impl<U: Unit, R> Mul<Quantity<U, R>> for $s
            where
                $s: RepMul<R>,
            {
                type Output = Quantity<U, <$s as RepMul<R>>::Output>;
                #[inline]
                fn mul(self, rhs: Quantity<U, R>) -> Self::Output {
                    Quantity::new(self.rep_mul(rhs.0))
                }
            }
        )*
    };
}

impl_scalar_ops!(i8, i16, i32, i64, isize, f32, f64);

impl<U1: Unit, U2: Unit, R1, R2> Mul<Quantity<U2, R2>> for Quantity<U1, R1>
where
    R1: RepMul<R2>,
{
    type Output = Quantity<U1::Product<U2>, R1::Output>;
    #[inline]
    fn mul(self, rhs: Quantity<U2, R2>) -> Self::Output {
        Quantity::new(self.0.rep_mul(rhs.0))
    }
}

impl<U1: Unit, U2: Unit, R1, R2> Div<Quantity<U2, R2>> for Quantity<U1, R1>
where
    R1: RepDiv<R2>,
{
    type Output = Quantity<U1::Quotient<U2>, R1::Output>;
    #[inline]
    fn div(self, rhs: Quantity<U2, R2>) -> Self::Output {
        Quantity::new(self.0.rep_div(rhs.0))
    }
}

impl<U: Unit, R: Copy, E, const N: usize> Mul<Vector<E, N>> for Quantity<U, R>
where
    Quantity<U, R>: Mul<E>,
{
    type Output = Vector<<Quantity<U, R> as Mul<E>>::Output, N>;
    #[inline]
    fn mul(self, rhs: Vector<E, N>) -> Self::Output {
        rhs.map(|x| self * x)
    }
}

impl<U1: Unit, U2: Unit, R: Representation> PartialEq<Quantity<U2, R>> for Quantity<U1, R> {
    /// Equal when both sides denote the same amount of the same dimension. Integral values are compared exactly.
    ///
    /// ```compile_fail
    /// use vqty_core::length::Meters;
    /// use vqty_core::time::Seconds;
    ///
    /// let _ = Meters::new(1.0) == Seconds::new(1.0);
    /// ```
    #[inline]
    fn eq(&self, other: &Quantity<U2, R>) -> bool {
        let () = SameDimension::<U1, U2>::OK;
        self.0.eq_rescaled(other.0, conversion_ratio::<U1, U2>())
    }
}

impl<U1: Unit, U2: Unit, T: Scalar> PartialOrd<Quantity<U2, T>> for Quantity<U1, T> {
    #[inline]
    fn partial_cmp(&self, other: &Quantity<U2, T>) -> Option<Ordering> {
        let () = SameDimension::<U1, U2>::OK;
        self.0.cmp_rescaled(other.0, conversion_ratio::<U1, U2>())
    }
}

impl<U: Unit, R: Representation> From<R> for Quantity<U, R> {
    #[inline]
    fn from(value: R) -> Self {
        Self::new(value)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<U: Unit, R: Serialize> Serialize for Quantity<U, R> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, U: Unit, R: Deserialize<'de>> Deserialize<'de> for Quantity<U, R> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        R::deserialize(deserializer).map(Quantity::new)
    }
}

/// Serde helper module for serializing quantities with unit information.
///
/// Use this with the `#[serde(with = "...")]` attribute to preserve unit symbols
/// in serialized data. The representation is written as-is, so vector quantities
/// serialize their components as a sequence.
///
/// # Example
///
/// ```rust
/// use vqty_core::length::Meter;
/// use vqty_core::{Quantity, Vector};
/// use serde::{Serialize, Deserialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Probe {
///     #[serde(with = "vqty_core::serde_with_unit")]
///     position: Quantity<Meter, Vector<f64, 3>>,
/// }
///
/// let probe = Probe { position: Quantity::new(Vector::new([1.0, 2.0, 3.0])) };
/// let json = serde_json::to_string(&probe).unwrap();
/// assert_eq!(json, r#"{"position":{"value":[1.0,2.0,3.0],"unit":"m"}}"#);
/// ```
#[cfg(feature = "serde")]
pub mod serde_with_unit {
    use super::*;
    use crate::unit::Symbol;
    use alloc::format;
    use alloc::string::{String, ToString};
    use serde::de::{self, MapAccess, Visitor};
    use serde::ser::SerializeStruct;

    /// Serializes a `Quantity<U, R>` as a struct with `value` and `unit` fields.
    ///
    /// # Example JSON Output
    /// ```json
    /// {"value": [1, 2, 3], "unit": "km/h"}
    /// ```
    pub fn serialize<U, R, S>(quantity: &Quantity<U, R>, serializer: S) -> Result<S::Ok, S::Error>
    where
        U: Unit,
        R: Serialize,
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Quantity", 2)?;
        state.serialize_field("value", quantity.value_ref())?;
        state.serialize_field("unit", &Symbol::<U>::new().to_string())?;
        state.end()
    }

    /// Deserializes a `Quantity<U, R>` from a struct with `value` and optionally `unit` fields.
    ///
    /// A present `unit` must match the symbol of `U`; an absent one is accepted and `U` is assumed.
    pub fn deserialize<'de, U, R, D>(deserializer: D) -> Result<Quantity<U, R>, D::Error>
    where
        U: Unit,
        R: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(field_identifier, rename_all = "lowercase")]
        enum Field {
            Value,
            Unit,
        }

        struct QuantityVisitor<U, R>(PhantomData<(U, R)>);

        impl<'de, U: Unit, R: Deserialize<'de>> Visitor<'de> for QuantityVisitor<U, R> {
            type Value = Quantity<U, R>;

            fn expecting(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
                formatter.write_str("struct Quantity with value and unit fields")
            }

            fn visit_map<V>(self, mut map: V) -> Result<Quantity<U, R>, V::Error>
            where
                V: MapAccess<'de>,
            {
                let mut value: Option<R> = None;
                let mut unit: Option<String> = None;

                while let Some(key) = map.next_key()? {
                    match key {
                        Field::Value => {
                            if value.is_some() {
                                return Err(de::Error::duplicate_field("value"));
                            }
                            value = Some(map.next_value()?);
                        }
                        Field::Unit => {
                            if unit.is_some() {
                                return Err(de::Error::duplicate_field("unit"));
                            }
                            unit = Some(map.next_value()?);
                        }
                    }
                }

                let value = value.ok_or_else(|| de::Error::missing_field("value"))?;
                let expected = Symbol::<U>::new().to_string();

                match unit {
                    Some(found) if found != expected => {
                        return Err(de::Error::custom(format!(
                            "unit mismatch: expected '{}', found '{}'",
                            expected, found
                        )));
                    }
                    Some(_) => {}
                    None => log::debug!("no unit in payload, assuming '{}'", expected),
                }

                Ok(Quantity::new(value))
            }
        }

        deserializer.deserialize_struct(
            "Quantity",
            &["value", "unit"],
            QuantityVisitor(PhantomData),
        )
    }
}
