//! Arena domain: unit tests for deterministic obstacle placement.

use super::spawn::scatter_blocks;
use crate::content::ScatterDef;

#[test]
fn same_seed_same_arena() {
    let def = ScatterDef::default();
    assert_eq!(scatter_blocks(&def), scatter_blocks(&def));
}

#[test]
fn different_seeds_differ() {
    let a = ScatterDef {
        seed: 1,
        ..ScatterDef::default()
    };
    let b = ScatterDef {
        seed: 2,
        ..ScatterDef::default()
    };
    assert_ne!(scatter_blocks(&a), scatter_blocks(&b));
}

#[test]
fn blocks_respect_bounds_and_spawn_clearance() {
    let def = ScatterDef {
        seed: 42,
        count: 64,
        spread: 25.0,
        min_size: 1.0,
        max_size: 3.0,
    };

    for (position, size) in scatter_blocks(&def) {
        assert!(position.x.abs() <= def.spread);
        assert!(position.z.abs() <= def.spread);
        assert!(size.min_element() >= def.min_size);
        assert!(size.max_element() <= def.max_size);
        // Spawn area stays clear.
        assert!(position.x.hypot(position.z) >= 4.0);
    }
}
