//! Example demonstrating the serde_with_unit helper module.
//!
//! This shows how to use #[serde(with = "vqty::serde_with_unit")] to keep the unit symbol next to the value in
//! serialized data, for scalar and vector quantities alike.
//!
//! Run with: cargo run --example serde_with_unit --features serde

#[cfg(feature = "serde")]
fn main() {
    use serde::{Deserialize, Serialize};
    use vqty::{vector, Kilometer, Meter, Meters, Quantity, Seconds, Vector};

    println!("=== Using serde_with_unit Helper ===\n");

    // =========================================================================
    // Example 1: Per-field control
    // =========================================================================
    println!("1. Per-Field Control:\n");

    #[derive(Serialize, Deserialize, Debug)]
    struct Waypoint {
        // Serialized WITH unit information
        #[serde(with = "vqty::serde_with_unit")]
        position: Quantity<Kilometer, Vector<i32, 3>>,

        // Default (compact) serialization: the raw payload only
        tolerance: Meters,

        #[serde(with = "vqty::serde_with_unit")]
        timestamp: Seconds,
    }

    let waypoint = Waypoint {
        position: vector![3, 2, 1] * Kilometer,
        tolerance: Meters::new(0.5),
        timestamp: Seconds::new(1_702_562_400.0),
    };

    let json = serde_json::to_string_pretty(&waypoint).unwrap();
    println!("Serialized:\n{}\n", json);

    let restored: Waypoint = serde_json::from_str(&json).unwrap();
    println!("Deserialized successfully!");
    println!("  position: {}", restored.position);
    println!("  tolerance: {}", restored.tolerance);
    println!("  timestamp: {}\n", restored.timestamp);

    // =========================================================================
    // Example 2: Validation
    // =========================================================================
    println!("2. Unit Validation:\n");

    let wrong_unit = r#"{"position":{"value":[3000,2000,1000],"unit":"m"},"tolerance":0.5,"timestamp":{"value":0.0}}"#;
    match serde_json::from_str::<Waypoint>(wrong_unit) {
        Ok(_) => println!("  unexpected success"),
        Err(e) => println!("  rejected: {}", e),
    }

    let wrong_length = r#"{"position":{"value":[1,2]},"tolerance":0.5,"timestamp":{"value":0.0}}"#;
    match serde_json::from_str::<Waypoint>(wrong_length) {
        Ok(_) => println!("  unexpected success"),
        Err(e) => println!("  rejected: {}", e),
    }

    // Converting first and then serializing records the new unit
    #[derive(Serialize)]
    struct InMeters {
        #[serde(with = "vqty::serde_with_unit")]
        position: Quantity<Meter, Vector<i32, 3>>,
    }

    let converted = InMeters {
        position: waypoint.position.to::<Meter>(),
    };
    println!("\n  converted: {}", serde_json::to_string(&converted).unwrap());
}

#[cfg(not(feature = "serde"))]
fn main() {
    println!("This example requires the 'serde' feature.");
    println!("Run with: cargo run --example serde_with_unit --features serde");
}
