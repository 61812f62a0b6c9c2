//! Unit conversion policy.
//!
//! Every conversion is decided at compile time from the two units' exact [`Ratio`]s and the representation's
//! element type:
//!
//! - **non-truncating** ([`Quantity::to`](crate::Quantity::to), and implicitly `+`, `-`, `From`): accepted when
//!   the element type is floating point, or when the reduced ratio is an integer. Anything else is rejected
//!   during constant evaluation with a message naming `truncate_to`.
//! - **truncating** ([`Quantity::truncate_to`](crate::Quantity::truncate_to)): always accepted; integral elements
//!   are truncated toward zero.
//! - **derived** ([`Quantity::cast`](crate::Quantity::cast)): re-types a product or quotient into a named unit.
//!   The base-dimension exponents must match, then the non-truncating rules apply.

use crate::dimension::Dimension;
use crate::ratio::Ratio;
use crate::repr::{Representation, Scalar};
use crate::unit::Unit;
use core::marker::PhantomData;

/// Exact factor that turns a value in `F` into a value in `T`.
///
/// ```rust
/// use vqty_core::conversion_ratio;
/// use vqty_core::length::{Kilometer, Meter};
/// use vqty_core::time::{Hour, Second};
/// use vqty_core::{Per, Ratio};
///
/// assert_eq!(conversion_ratio::<Kilometer, Meter>(), Ratio::integer(1000));
/// assert_eq!(conversion_ratio::<Per<Kilometer, Hour>, Per<Meter, Second>>(), Ratio::new(5, 18));
/// ```
#[inline]
pub const fn conversion_ratio<F: Unit, T: Unit>() -> Ratio {
    F::RATIO.div(T::RATIO)
}

/// `true` when `F` and `T` measure the same physical dimension, however their types were composed.
#[inline]
pub const fn same_dimension<F: Unit, T: Unit>() -> bool {
    <F::Dim as Dimension>::EXPONENTS.same_as(<T::Dim as Dimension>::EXPONENTS)
}

/// Compile-time gate for the non-truncating path.
pub(crate) struct Exact<F, T, R>(PhantomData<(F, T, R)>);

impl<F: Unit, T: Unit, R: Representation> Exact<F, T, R> {
    pub(crate) const RATIO: Ratio = {
        let ratio = conversion_ratio::<F, T>();
        assert!(
            <R::Element as Scalar>::IS_FLOAT || ratio.is_integer(),
            "unit conversion would truncate an integral representation; use `truncate_to`"
        );
        ratio
    };
}

/// Compile-time gate for operations that only relabel a dimension.
pub(crate) struct SameDimension<F, T>(PhantomData<(F, T)>);

impl<F: Unit, T: Unit> SameDimension<F, T> {
    pub(crate) const OK: () = assert!(
        same_dimension::<F, T>(),
        "quantities have different dimensions"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::force::Newton;
    use crate::units::length::{Centimeter, Kilometer, Meter, Mile, Millimeter};
    use crate::units::mass::{Gram, Kilogram};
    use crate::units::mechanics::NewtonSecond;
    use crate::units::time::{Hour, Minute, Second};
    use crate::unit::{Per, Prod};

    #[test]
    fn ratios_between_prefixes() {
        assert_eq!(conversion_ratio::<Kilometer, Millimeter>(), Ratio::integer(1_000_000));
        assert_eq!(conversion_ratio::<Centimeter, Meter>(), Ratio::new(1, 100));
        assert_eq!(conversion_ratio::<Hour, Minute>(), Ratio::integer(60));
        assert_eq!(conversion_ratio::<Gram, Kilogram>(), Ratio::new(1, 1000));
    }

    #[test]
    fn imperial_ratio_is_exact() {
        assert_eq!(conversion_ratio::<Mile, Meter>(), Ratio::new(201_168, 125));
    }

    #[test]
    fn exact_gate_values() {
        assert_eq!(<Exact<Kilometer, Meter, i32>>::RATIO, Ratio::integer(1000));
        assert_eq!(<Exact<Meter, Kilometer, f64>>::RATIO, Ratio::new(1, 1000));
    }

    #[test]
    fn dimension_check_sees_through_composition() {
        assert!(same_dimension::<Prod<Kilogram, Per<Meter, Second>>, NewtonSecond>());
        assert!(same_dimension::<Prod<Newton, Meter>, Prod<Meter, Newton>>());
        assert!(!same_dimension::<Meter, Second>());
        let () = <SameDimension<Per<Kilometer, Hour>, Per<Meter, Second>>>::OK;
    }
}
