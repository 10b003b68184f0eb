//! Terrain synthesis tests.
//!
//! Tests cover:
//! - Grid topology counts and index validity
//! - Unit-length normals after fault displacement
//! - Determinism under a fixed seed
//! - The flat 4x4 end-to-end scenario

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use terrasphere::{ConfigError, FaultConfig, Terrain, TerrainConfig, TerrainError, Vec3};

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

fn faulted(div: usize, seed: u64, iterations: usize) -> Terrain {
    let config = TerrainConfig::new(div, -6.0, 6.0, -6.0, 6.0).with_fault(FaultConfig {
        iterations,
        delta: 0.0015,
    });
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    Terrain::generate(&config, &mut rng).expect("valid terrain config")
}

// =============================================================================
// SCENARIOS
// =============================================================================

#[test]
fn flat_four_by_four_grid() {
    let config = TerrainConfig::new(4, -1.0, 1.0, -1.0, 1.0).with_fault(FaultConfig::none());
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let terrain = Terrain::generate(&config, &mut rng).unwrap();

    assert_eq!(terrain.num_vertices(), 25);
    assert_eq!(terrain.num_faces(), 32);
    for v in terrain.positions() {
        assert_eq!(v.z, 0.0, "flat grid should have zero elevation, got {:?}", v);
    }
    for n in terrain.normals() {
        assert!(
            (*n - Vec3::Z).length() < 1e-6,
            "flat grid normal should be +Z, got {:?}",
            n
        );
    }
}

#[test]
fn same_seed_same_elevation() {
    let a = faulted(32, 1234, 700);
    let b = faulted(32, 1234, 700);
    assert_eq!(a.positions(), b.positions());
    assert_eq!(a.normals(), b.normals());
}

#[test]
fn different_seed_different_elevation() {
    let a = faulted(32, 1, 700);
    let b = faulted(32, 2, 700);
    assert_ne!(a.positions(), b.positions());
}

#[test]
fn grid_xy_untouched_by_faults() {
    let flat = Terrain::flat(&TerrainConfig::new(16, -6.0, 6.0, -6.0, 6.0)).unwrap();
    let rough = faulted(16, 99, 700);
    for (f, r) in flat.positions().iter().zip(rough.positions()) {
        assert_eq!(f.x, r.x);
        assert_eq!(f.y, r.y);
    }
}

#[test]
fn elevation_bounded_by_iterations() {
    let terrain = faulted(16, 5, 700);
    let (lo, hi) = terrain.elevation_range();
    let bound = 700.0 * 0.0015 + 1e-4;
    assert!(lo >= -bound && hi <= bound, "range ({}, {}) exceeds ±{}", lo, hi, bound);
}

#[test]
fn inverted_bounds_rejected() {
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let result = Terrain::generate(&TerrainConfig::new(8, 6.0, -6.0, -6.0, 6.0), &mut rng);
    assert!(matches!(result, Err(TerrainError::Config(_))));
}

#[test]
fn overflowing_span_rejected() {
    let config = TerrainConfig::new(4, -3e38, 3e38, -1.0, 1.0);
    let mut rng = ChaCha8Rng::seed_from_u64(0);

    assert!(matches!(
        Terrain::flat(&config),
        Err(TerrainError::Config(ConfigError::NonFinite(_)))
    ));
    assert!(matches!(
        Terrain::generate(&config, &mut rng),
        Err(TerrainError::Config(ConfigError::NonFinite(_)))
    ));
}

#[test]
fn edges_follow_faces() {
    let terrain = faulted(3, 8, 10);
    assert_eq!(terrain.num_edges(), 3 * terrain.num_faces());
    for (face, edges) in terrain.faces().iter().zip(terrain.edges().chunks(3)) {
        assert_eq!(edges[0], [face[0], face[1]]);
        assert_eq!(edges[1], [face[1], face[2]]);
        assert_eq!(edges[2], [face[2], face[0]]);
    }
}

// =============================================================================
// PROPERTIES
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    /// Property: topology counts and face indices are valid for any grid size
    #[test]
    fn topology_counts(div in 1usize..24, seed in any::<u64>()) {
        let terrain = faulted(div, seed, 20);

        prop_assert_eq!(terrain.num_vertices(), (div + 1) * (div + 1));
        prop_assert_eq!(terrain.num_faces(), 2 * div * div);
        prop_assert_eq!(terrain.num_edges(), 3 * terrain.num_faces());

        let n = terrain.num_vertices() as u32;
        for [a, b, c] in terrain.faces() {
            prop_assert!(*a < n && *b < n && *c < n);
            prop_assert!(a != b && b != c && a != c, "face ({}, {}, {}) repeats a vertex", a, b, c);
        }
    }

    /// Property: every normal is unit length after displacement
    #[test]
    fn normals_are_unit(div in 1usize..20, seed in any::<u64>(), iterations in 0usize..300) {
        let terrain = faulted(div, seed, iterations);
        prop_assert_eq!(terrain.degenerate_normal_count(), 0);
        for n in terrain.normals() {
            prop_assert!((n.length() - 1.0).abs() < 1e-4, "normal {:?} is not unit length", n);
            // Heightfield normals never point downward.
            prop_assert!(n.z > 0.0);
        }
    }

    /// Property: bounds are spanned exactly by the grid corners
    #[test]
    fn corners_match_bounds(
        div in 1usize..16,
        min_x in -50.0f32..0.0,
        width in 0.5f32..50.0,
        min_y in -50.0f32..0.0,
        height in 0.5f32..50.0,
    ) {
        let config = TerrainConfig::new(div, min_x, min_x + width, min_y, min_y + height);
        let terrain = Terrain::flat(&config).unwrap();

        let first = terrain.vertex(0, 0);
        let last = terrain.vertex(div, div);
        prop_assert_eq!(first.x, min_x);
        prop_assert_eq!(first.y, min_y);
        prop_assert!((last.x - (min_x + width)).abs() < 1e-3);
        prop_assert!((last.y - (min_y + height)).abs() < 1e-3);
    }
}
