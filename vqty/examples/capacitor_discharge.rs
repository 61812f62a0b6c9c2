//! Discharge of an RC circuit: `V(t) = V0 · exp(-t / RC)`.
//!
//! Run with: cargo run --example capacitor_discharge

use vqty::unitless::Number;
use vqty::{KiloOhms, MicroFarads, Milliseconds, Simplify, Volts};

fn main() {
    let v0 = Volts::new(5.0);
    let r = KiloOhms::new(4.7);
    let c = MicroFarads::new(0.47);

    let tau: Milliseconds = (r * c).cast();
    println!("RC = {} · {} = {}", r, c, tau);

    for step in 0..=10_i32 {
        let t = Milliseconds::new(f64::from(step) * 0.5);
        let ratio: Number = (-t / tau).cast();
        let v = v0 * ratio.exp();
        println!("t = {:>4} → V = {:.4}", t, v.value());
    }

    let at_tau: Number = (-tau / tau).simplify();
    let v_tau = v0 * at_tau.exp();
    println!("V(τ) = {} ({:.1}% of V0)", v_tau, 100.0 * (v_tau / v0).simplify().value());
}
