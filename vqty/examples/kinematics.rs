//! Vector kinematics with integral and floating-point representations.
//!
//! Run with: cargo run --example kinematics

use vqty::mechanics::{Momentum, NewtonMeter};
use vqty::{cross, dot, norm, vector, Hour, Kilogram, Kilometer, Meter, Newton, Quantity, Second, Vector};

fn main() {
    // =========================================================================
    // Speed of a velocity vector
    // =========================================================================
    let v = vector![2, 3, 6] * (Kilometer / Hour);
    let speed = norm(v);
    println!("|{}| = {}", v, speed);

    // Mixed units add in the unit of the left operand
    let offset = vector![250, 0, -40] * Meter;
    let start = vector![1, 2, 3] * Kilometer;
    let end = offset + start;
    println!("{} + {} = {}", offset, start, end);

    // Coarsening an integral position needs an explicit truncation
    let coarse = end.truncate_to::<Kilometer>();
    println!("{} truncated to {}", end, coarse);

    // =========================================================================
    // Momentum of a moving body
    // =========================================================================
    let mass = Quantity::<Kilogram>::new(1_200.0);
    let velocity = vector![25.0, 0.0, -2.5] * (Meter / Second);
    let p: Momentum<Vector<f64, 3>> = (mass * velocity).cast();
    println!("p = {} (|p| = {})", p, norm(p));

    // =========================================================================
    // Torque and work
    // =========================================================================
    let lever = vector![0.3, 0.0, 0.0] * Meter;
    let force = vector![0.0, 40.0, 10.0] * Newton;
    let torque: Quantity<NewtonMeter, Vector<f64, 3>> = cross(lever, force).cast();
    println!("r × F = {}", torque);

    let displacement = vector![2.0, 1.0, 0.0] * Meter;
    let work: Quantity<NewtonMeter> = dot(force, displacement).cast();
    println!("F · d = {}", work);
}
