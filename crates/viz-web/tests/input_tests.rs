// Host-side tests for pointer normalization.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

#[test]
fn client_point_maps_into_unit_square() {
    let uv = normalize_client(
        Vec2::new(150.0, 75.0),
        Vec2::new(50.0, 25.0),
        Vec2::new(400.0, 200.0),
    );
    assert_eq!(uv, Vec2::new(0.25, 0.25));
}

#[test]
fn outside_points_are_clamped() {
    let uv = normalize_client(Vec2::new(-10.0, 900.0), Vec2::ZERO, Vec2::new(400.0, 300.0));
    assert_eq!(uv, Vec2::new(0.0, 1.0));
}

#[test]
fn collapsed_canvas_reports_center() {
    let uv = normalize_client(Vec2::new(10.0, 10.0), Vec2::ZERO, Vec2::new(0.0, 300.0));
    assert_eq!(uv, Vec2::splat(0.5));
}

#[test]
fn modifier_chords_pass_through() {
    assert!(is_browser_chord(true, false, false));
    assert!(is_browser_chord(false, true, false));
    assert!(!is_browser_chord(false, false, false));
}
