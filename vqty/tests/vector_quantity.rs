//! Quantities whose representation is a vector: one unit shared by every element.

use vqty::*;

use approx::assert_abs_diff_eq;

type Position<R = i32> = Quantity<Kilometer, Vector<R, 3>>;

fn position() -> Position {
    vector![3, 2, 1] * Kilometer
}

// ─────────────────────────────────────────────────────────────────────────────
// Construction
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn unit_tag_on_either_side() {
    let v: Position = vector![3, 2, 1] * Kilometer;
    let w: Position = Kilometer * vector![3, 2, 1];
    assert_eq!(v.value(), w.value());
    assert_eq!(v.value(), vector![3, 2, 1]);
}

#[test]
fn components() {
    let v = position();
    assert_eq!(v.x(), Quantity::<Kilometer, i32>::new(3));
    assert_eq!(v.y().value(), 2);
    assert_eq!(v.z().value(), 1);
    assert_eq!(v.component(0).value(), 3);
    assert_eq!(v.into_components(), vector![3_i32 * Kilometer, 2_i32 * Kilometer, 1_i32 * Kilometer]);
}

// ─────────────────────────────────────────────────────────────────────────────
// Conversions
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn to_finer_unit_is_exact() {
    assert_eq!(position().to::<Meter>().value(), vector![3000, 2000, 1000]);
}

#[test]
fn to_coarser_unit_with_float_elements() {
    let v: Quantity<Meter, Vector<f64, 3>> = vector![1500.0, 250.0, 0.0] * Meter;
    assert_eq!(v.to::<Kilometer>().value(), vector![1.5, 0.25, 0.0]);
}

#[test]
fn truncate_to_coarser_unit() {
    let v: Quantity<Meter, Vector<i32, 3>> = vector![1001, 1002, 1003] * Meter;
    assert_eq!(v.truncate_to::<Kilometer>().value(), vector![1, 1, 1]);
    let w: Quantity<Meter, Vector<i32, 3>> = vector![-1999, 999, 2000] * Meter;
    assert_eq!(w.truncate_to::<Kilometer>().value(), vector![-1, 0, 2]);
}

#[test]
fn equality_across_units() {
    let m: Quantity<Meter, Vector<i32, 3>> = vector![3000, 2000, 1000] * Meter;
    assert_eq!(position(), m);
    let off: Quantity<Meter, Vector<i32, 3>> = vector![3000, 2000, 1001] * Meter;
    assert_ne!(position(), off);
}

// ─────────────────────────────────────────────────────────────────────────────
// Scaling
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn scale_by_integral_scalar() {
    let v = position();
    assert_eq!((v * 2_i32).value(), vector![6, 4, 2]);
    assert_eq!((2_i32 * v).value(), vector![6, 4, 2]);
    assert_eq!((v / 2_i32).value(), vector![1, 1, 0]);
}

#[test]
fn scale_by_float_scalar_promotes() {
    let v = position();
    let half: Position<f64> = v * 0.5;
    assert_eq!(half.value(), vector![1.5, 1.0, 0.5]);
    let quarter: Position<f64> = v / 4.0;
    assert_eq!(quarter.value(), vector![0.75, 0.5, 0.25]);
}

#[test]
fn scale_by_unitless_quantity() {
    let v = position();
    let two: unitless::Number<i32> = 2_i32 * Unitless;
    let scaled: Position = v * two;
    assert_eq!(scaled.value(), vector![6, 4, 2]);
    let back: Position = scaled / two;
    assert_eq!(back, v);
}

// ─────────────────────────────────────────────────────────────────────────────
// Addition and subtraction
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn add_in_same_unit() {
    let a = position();
    let b: Position = vector![1, 1, 1] * Kilometer;
    assert_eq!((a + b).value(), vector![4, 3, 2]);
    assert_eq!((a - b).value(), vector![2, 1, 0]);
}

#[test]
fn add_in_different_units_keeps_left_unit() {
    let m: Quantity<Meter, Vector<i32, 3>> = vector![1, 2, 3] * Meter;
    let sum = m + position();
    assert_eq!(sum.value(), vector![3001, 2002, 1003]);
    let diff = m - position();
    assert_eq!(diff.value(), vector![-2999, -1998, -997]);
}

#[test]
fn compound_assignment() {
    let mut m: Quantity<Meter, Vector<i32, 3>> = vector![1, 2, 3] * Meter;
    m += position();
    m -= vector![1, 1, 1] * Meter;
    assert_eq!(m.value(), vector![3000, 2001, 1002]);
    assert_eq!((-m).value(), vector![-3000, -2001, -1002]);
}

// ─────────────────────────────────────────────────────────────────────────────
// Products with scalar quantities
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn position_over_duration_is_velocity() {
    let dur = Quantity::<Hour, i32>::new(2);
    let v: Quantity<Per<Kilometer, Hour>, Vector<i32, 3>> = vector![30, 20, 10] * Kilometer / dur;
    assert_eq!(v.value(), vector![15, 10, 5]);
}

#[test]
fn mass_times_velocity_is_momentum() {
    let m = Kilograms::new(2.0);
    let v = vector![1.0, 2.0, 3.0] * (Meter / Second);
    let p: Momentum<Vector<f64, 3>> = (m * v).cast();
    assert_eq!(p.value(), vector![2.0, 4.0, 6.0]);
}

#[test]
fn velocity_times_duration_simplifies() {
    let v = vector![60.0, 0.0, -30.0] * (Kilometer / Hour);
    let d: Quantity<Kilometer, Vector<f64, 3>> = (v * Hours::new(0.5)).simplify();
    assert_eq!(d.value(), vector![30.0, 0.0, -15.0]);
}

// ─────────────────────────────────────────────────────────────────────────────
// Vector algebra
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn dot_product_of_positions() {
    let a = vector![1, 2, 3] * Meter;
    let b = vector![4, 5, 6] * Meter;
    let area = dot(a, b);
    assert_eq!(area.value(), 32);
    assert_eq!(area.to_string(), "32 m·m");
}

#[test]
fn dot_product_promotes_mixed_elements() {
    let a = vector![1_i32, 0, 0] * Meter;
    let b = vector![2.5, 7.0, 0.0] * Newton;
    let w: Torque = dot(a, b).cast();
    assert_abs_diff_eq!(w.value(), 2.5, epsilon = 1e-12);
}

#[test]
fn cross_product_units_multiply() {
    let r = vector![3, 0, 0] * Meter;
    let f = vector![0, 10, 0] * Newton;
    let t = cross(r, f);
    assert_eq!(t.value(), vector![0, 0, 30]);
    assert_eq!(cross(f, r).value(), vector![0, 0, -30]);
}

#[test]
fn norm_keeps_the_unit() {
    let v = vector![2, 3, 6] * (Kilometer / Hour);
    let speed: Quantity<Per<Kilometer, Hour>, i32> = norm(v);
    assert_eq!(speed.value(), 7);

    let w: Quantity<Meter, Vector<f64, 2>> = vector![3.0, 4.0] * Meter;
    assert_abs_diff_eq!(norm(w).value(), 5.0, epsilon = 1e-12);
}

#[test]
fn display() {
    assert_eq!(position().to_string(), "[3, 2, 1] km");
    let v: Quantity<Meter, Vector<f64, 2>> = vector![0.5, -1.25] * Meter;
    assert_eq!(v.to_string(), "[0.5, -1.25] m");
}
