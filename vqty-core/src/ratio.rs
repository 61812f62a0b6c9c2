//! Exact rational conversion factors.

use core::fmt::{Display, Formatter, Result};

/// An exact, always-reduced rational number used as a unit conversion factor.
///
/// Units carry their scale as a `Ratio` rather than an `f64` so that the conversion policy can decide at compile time
/// whether a conversion between two units is an integer multiple (safe for integral representations) or not.
///
/// The denominator is always positive and `gcd(numer, denom) == 1`.
///
/// ```rust
/// use vqty_core::Ratio;
///
/// const KM: Ratio = Ratio::integer(1000);
/// const MM: Ratio = Ratio::new(1, 1000);
/// assert_eq!(KM.div(MM), Ratio::integer(1_000_000));
/// assert!(!MM.div(KM).is_integer());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ratio {
    num: i128,
    den: i128,
}

const fn gcd(mut a: i128, mut b: i128) -> i128 {
    if a < 0 {
        a = -a;
    }
    if b < 0 {
        b = -b;
    }
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

impl Ratio {
    /// The identity ratio `1/1`.
    pub const ONE: Self = Self::integer(1);

    /// Creates the reduced fraction `num / den`.
    ///
    /// # Panics
    ///
    /// Panics (at compile time when used in a constant) if `den == 0`.
    pub const fn new(num: i128, den: i128) -> Self {
        assert!(den != 0, "ratio denominator must be non-zero");
        let g = gcd(num, den);
        let (mut num, mut den) = (num / g, den / g);
        if den < 0 {
            num = -num;
            den = -den;
        }
        Self { num, den }
    }

    /// Creates the ratio `n / 1`.
    pub const fn integer(n: i128) -> Self {
        Self { num: n, den: 1 }
    }

    /// Numerator of the reduced fraction.
    #[inline]
    pub const fn numer(self) -> i128 {
        self.num
    }

    /// Denominator of the reduced fraction (always positive).
    #[inline]
    pub const fn denom(self) -> i128 {
        self.den
    }

    /// Product of two ratios.
    pub const fn mul(self, other: Self) -> Self {
        // Cross-reduce first to keep intermediates small.
        let g1 = gcd(self.num, other.den);
        let g2 = gcd(other.num, self.den);
        Self::new(
            (self.num / g1) * (other.num / g2),
            (self.den / g2) * (other.den / g1),
        )
    }

    /// Reciprocal `den / num`.
    ///
    /// # Panics
    ///
    /// Panics if the ratio is zero.
    pub const fn recip(self) -> Self {
        Self::new(self.den, self.num)
    }

    /// Quotient of two ratios.
    pub const fn div(self, other: Self) -> Self {
        self.mul(other.recip())
    }

    /// `true` when the reduced denominator is one.
    #[inline]
    pub const fn is_integer(self) -> bool {
        self.den == 1
    }

    /// Nearest `f64` approximation.
    #[inline]
    pub fn to_f64(self) -> f64 {
        self.num as f64 / self.den as f64
    }
}

impl Display for Ratio {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if self.den == 1 {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_reduces_and_normalizes_sign() {
        let r = Ratio::new(10, -4);
        assert_eq!(r.numer(), -5);
        assert_eq!(r.denom(), 2);
    }

    #[test]
    fn zero_numerator_reduces_to_zero_over_one() {
        let r = Ratio::new(0, 7);
        assert_eq!(r, Ratio::integer(0));
    }

    #[test]
    fn mul_and_div() {
        let km = Ratio::integer(1000);
        let h = Ratio::integer(3600);
        let kmh = km.div(h);
        assert_eq!(kmh, Ratio::new(5, 18));
        assert_eq!(kmh.mul(h), km);
    }

    #[test]
    fn integer_detection() {
        assert!(Ratio::new(3000, 3).is_integer());
        assert!(!Ratio::new(1, 1000).is_integer());
    }

    #[test]
    fn large_ratios_stay_exact() {
        let ly = Ratio::integer(9_460_730_472_580_800);
        let nm = Ratio::new(1, 1_000_000_000);
        assert_eq!(ly.div(nm), Ratio::integer(9_460_730_472_580_800_000_000_000));
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Ratio::integer(1852)), "1852");
        assert_eq!(format!("{}", Ratio::new(5, 18)), "5/18");
    }

    #[test]
    fn to_f64() {
        assert_eq!(Ratio::new(1, 4).to_f64(), 0.25);
    }
}
