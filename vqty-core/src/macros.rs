//! Macros for defining units, conversions and vectors.

/// Generates `From` trait implementations for all pairs of units within a dimension.
///
/// The generated conversions go through [`Quantity::to`](crate::Quantity::to), so for integral representations they
/// only compile between units related by an integer factor.
#[macro_export]
macro_rules! impl_unit_conversions {
    // Base case: single unit, no conversions needed
    ($unit:ty) => {};

    // Recursive case: implement conversions from first to all others, then recurse
    ($first:ty, $($rest:ty),+ $(,)?) => {
        $(
            impl<R: $crate::Representation> From<$crate::Quantity<$first, R>> for $crate::Quantity<$rest, R> {
                fn from(value: $crate::Quantity<$first, R>) -> Self {
                    value.to::<$rest>()
                }
            }

            impl<R: $crate::Representation> From<$crate::Quantity<$rest, R>> for $crate::Quantity<$first, R> {
                fn from(value: $crate::Quantity<$rest, R>) -> Self {
                    value.to::<$first>()
                }
            }
        )+

        // Recurse with the rest of the units
        $crate::impl_unit_conversions!($($rest),+);
    };
}

/// Operator impls shared by every unit marker: composing units (`Kilometer / Hour`) and lifting scalars and
/// [`Vector`](crate::Vector)s into quantities (`5 * Meter`, `vector![1, 2, 3] * Meter`).
///
/// Emitted by `#[derive(Unit)]`; the bracketed form carries generic parameters for composite units.
///
/// Scalars lift from every integer width and from `f64`; an `f32` quantity is built with
/// [`Quantity::new`](crate::Quantity::new). An unsuffixed integer literal matches every integer lift, so when the
/// lifted quantity feeds another operator it needs a suffix: `v * (2_i32 * Unitless)`.
#[doc(hidden)]
#[macro_export]
macro_rules! impl_unit_algebra {
    (@lift [$($g:tt)*] $unit:ty, $scalar:ty) => {
        impl<$($g)*> ::core::ops::Mul<$unit> for $scalar {
            type Output = $crate::Quantity<$unit, $scalar>;
            #[inline]
            fn mul(self, _: $unit) -> Self::Output {
                $crate::Quantity::new(self)
            }
        }

        impl<$($g)*> ::core::ops::Mul<$scalar> for $unit {
            type Output = $crate::Quantity<$unit, $scalar>;
            #[inline]
            fn mul(self, rhs: $scalar) -> Self::Output {
                $crate::Quantity::new(rhs)
            }
        }
    };

    (impl[$($g:tt)*] $unit:ty) => {
        impl<V: $crate::Unit, $($g)*> ::core::ops::Mul<V> for $unit {
            type Output = <$unit as $crate::Unit>::Product<V>;
            #[inline]
            fn mul(self, _: V) -> Self::Output {
                ::core::default::Default::default()
            }
        }

        impl<V: $crate::Unit, $($g)*> ::core::ops::Div<V> for $unit {
            type Output = <$unit as $crate::Unit>::Quotient<V>;
            #[inline]
            fn div(self, _: V) -> Self::Output {
                ::core::default::Default::default()
            }
        }

        impl<E: $crate::Scalar, const LEN: usize, $($g)*> ::core::ops::Mul<$unit> for $crate::Vector<E, LEN> {
            type Output = $crate::Quantity<$unit, $crate::Vector<E, LEN>>;
            #[inline]
            fn mul(self, _: $unit) -> Self::Output {
                $crate::Quantity::new(self)
            }
        }

        impl<E: $crate::Scalar, const LEN: usize, $($g)*> ::core::ops::Mul<$crate::Vector<E, LEN>> for $unit {
            type Output = $crate::Quantity<$unit, $crate::Vector<E, LEN>>;
            #[inline]
            fn mul(self, rhs: $crate::Vector<E, LEN>) -> Self::Output {
                $crate::Quantity::new(rhs)
            }
        }

        $crate::impl_unit_algebra!(@lift [$($g)*] $unit, i8);
        $crate::impl_unit_algebra!(@lift [$($g)*] $unit, i16);
        $crate::impl_unit_algebra!(@lift [$($g)*] $unit, i32);
        $crate::impl_unit_algebra!(@lift [$($g)*] $unit, i64);
        $crate::impl_unit_algebra!(@lift [$($g)*] $unit, isize);
        // f64 is the only float lift, so `0.5 * Unitless` has a single candidate.
        $crate::impl_unit_algebra!(@lift [$($g)*] $unit, f64);
    };

    ($unit:ty) => {
        $crate::impl_unit_algebra!(impl[] $unit);
    };
}

/// Builds a [`Vector`](crate::Vector) from a comma-separated list of elements.
///
/// ```rust
/// use vqty_core::length::Kilometer;
/// use vqty_core::vector;
///
/// let raw = vector![3, 2, 1];
/// assert_eq!(raw.into_array(), [3, 2, 1]);
///
/// let tagged = vector![3, 2, 1] * Kilometer;
/// assert_eq!(tagged.value(), vector![3, 2, 1]);
/// ```
#[macro_export]
macro_rules! vector {
    ($($elem:expr),+ $(,)?) => {
        $crate::Vector::new([$($elem),+])
    };
}
