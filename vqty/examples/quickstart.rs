//! Minimal end-to-end example: tag a vector with a unit, convert it, and compute a velocity.

use vqty::velocity::Velocity;
use vqty::{vector, Hour, Kilometer, Meter, Quantity, Vector};

fn main() {
    let position = vector![3, 2, 1] * Kilometer;
    let in_meters = position.to::<Meter>();
    assert_eq!(in_meters.value(), vector![3000, 2000, 1000]);
    println!("{} = {}", position, in_meters);

    let duration = Quantity::<Hour, i32>::new(2);
    let v: Velocity<Kilometer, Hour, Vector<i32, 3>> = vector![30, 20, 10] * Kilometer / duration;
    assert_eq!(v.value(), vector![15, 10, 5]);
    println!("average velocity: {}", v);
}
