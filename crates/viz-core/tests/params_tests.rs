// Host-side tests for the parameter store, presets and pattern selection.

use rand::rngs::StdRng;
use rand::SeedableRng;
use viz_core::*;

fn assert_in_range(store: &ParameterStore) {
    for (spec, value) in store.iter() {
        match value {
            SignalValue::Scalar(v) => assert!(
                v >= spec.min && v <= spec.max,
                "{:?} = {} outside [{}, {}]",
                spec.id,
                v,
                spec.min,
                spec.max
            ),
            SignalValue::Vec2(v) => {
                assert!(v.x >= spec.min && v.x <= spec.max, "{:?}", spec.id);
                assert!(v.y >= spec.min && v.y <= spec.max, "{:?}", spec.id);
            }
        }
    }
}

#[test]
fn defaults_match_signal_tables() {
    for variant in Variant::ALL {
        let store = ParameterStore::new(variant);
        assert_eq!(store.iter().count(), variant.signals().len());
        for spec in variant.signals() {
            assert_eq!(store.get(spec.id), Some(spec.default));
        }
    }
    let flow = ParameterStore::new(Variant::Flow);
    assert_eq!(flow.scalar(SignalId::Complexity), 3.0);
    let geo = ParameterStore::new(Variant::Geometric);
    assert_eq!(geo.scalar(SignalId::PatternDensity), 8.0);
    assert_eq!(geo.scalar(SignalId::RotationSpeed), 0.3);
}

#[test]
fn slider_writes_stay_in_range() {
    for variant in Variant::ALL {
        let mut store = ParameterStore::new(variant);
        for spec in variant.controls() {
            for v in [f32::MAX, -f32::MAX, 1e9, -1e9, f32::NAN, f32::INFINITY, spec.max + 0.5] {
                store.set(spec.id, v);
                assert_in_range(&store);
            }
        }
    }
}

#[test]
fn set_returns_clamped_value() {
    let mut store = ParameterStore::new(Variant::Flow);
    assert_eq!(store.set(SignalId::Distortion, 9.0), Some(5.0));
    assert_eq!(store.set(SignalId::RotationSpeed, -1.5), Some(-1.5));
    assert_eq!(store.scalar(SignalId::Distortion), 5.0);
}

#[test]
fn writes_outside_the_variant_are_ignored() {
    let mut store = ParameterStore::new(Variant::Flow);
    assert_eq!(store.set(SignalId::PatternType, 3.0), None);
    assert_eq!(store.get(SignalId::PatternType), None);
    // shape mismatch
    assert_eq!(store.set(SignalId::Mouse, 0.2), None);
    assert_eq!(store.set_vec2(SignalId::Time, glam::Vec2::ONE), None);
}

#[test]
fn plasma_preset_sets_distortion() {
    let mut app = VizApp::new(Variant::Flow, 0);
    assert_eq!(app.apply_preset_named("plasma"), Some(Preset::Flow(FlowPreset::Plasma)));
    let p = app.params();
    assert_eq!(p.scalar(SignalId::Distortion), 3.0);
    assert_eq!(p.scalar(SignalId::TimeSpeed), 1.5);
    assert_eq!(p.scalar(SignalId::Complexity), 4.0);
    assert_eq!(p.scalar(SignalId::ColorIntensity), 2.0);
    assert_eq!(p.scalar(SignalId::RotationSpeed), 0.2);
    assert_eq!(p.scalar(SignalId::ScaleFactor), 0.8);
}

#[test]
fn every_preset_stays_in_range() {
    for variant in Variant::ALL {
        for preset in variant.presets() {
            let mut store = ParameterStore::new(variant);
            store.apply(preset.values());
            assert_in_range(&store);
            for &(id, v) in preset.values() {
                assert_eq!(store.scalar(id), v, "{} {:?}", preset, id);
            }
        }
    }
}

#[test]
fn unknown_names_are_no_ops() {
    let mut app = VizApp::new(Variant::Flow, 0);
    let before = app.params().clone();
    assert_eq!(app.apply_preset_named("warp_drive"), None);
    assert_eq!(app.select_pattern_named("spirals"), None);
    // glitch presets belong to the other variant
    assert_eq!(app.apply_preset_named("pixel_death"), None);
    for (spec, value) in before.iter() {
        assert_eq!(app.params().get(spec.id), Some(value));
    }
}

#[test]
fn glitch_presets_on_geometric() {
    let mut app = VizApp::new(Variant::Geometric, 0);
    app.apply_preset_named("pixel_death");
    let p = app.params();
    assert_eq!(p.scalar(SignalId::GlitchIntensity), 0.1);
    assert_eq!(p.scalar(SignalId::PixelCorruption), 0.8);
    assert_eq!(p.scalar(SignalId::DataShift), 0.1);
}

#[test]
fn next_preset_cycles_in_order() {
    let mut app = VizApp::new(Variant::Geometric, 0);
    let names: Vec<_> = (0..5)
        .map(|_| {
            app.run(Command::NextPreset);
            app.params().scalar(SignalId::DataShift)
        })
        .collect();
    assert_eq!(names, vec![0.4, 0.1, 0.7, 0.8, 0.4]);

    let mut flow = VizApp::new(Variant::Flow, 0);
    flow.apply_preset_named("tornado");
    flow.run(Command::NextPreset);
    assert_eq!(flow.params().scalar(SignalId::ScaleFactor), 1.5); // kaleidoscope
}

#[test]
fn reset_restores_controls_only() {
    let mut app = VizApp::new(Variant::Flow, 0);
    app.apply_preset_named("electric");
    app.set_resolution(1280, 800);
    app.run(Command::Reset);
    for spec in Variant::Flow.controls() {
        assert_eq!(app.params().get(spec.id), Some(spec.default));
    }
    assert_eq!(
        app.params().vec2(SignalId::Resolution),
        glam::Vec2::new(1280.0, 800.0)
    );
}

#[test]
fn reset_keeps_the_selected_pattern() {
    let mut app = VizApp::new(Variant::Geometric, 0);
    app.select_pattern_named("hexagons");
    app.apply_preset_named("full_glitch");
    app.run(Command::Reset);
    assert_eq!(app.params().pattern(), Some(Pattern::Hexagons));
    assert_eq!(app.params().scalar(SignalId::GlitchIntensity), 0.0);
    assert_eq!(app.params().scalar(SignalId::DataShift), 0.0);
}

#[test]
fn randomize_is_quantized_and_in_range() {
    let mut rng = StdRng::seed_from_u64(42);
    for variant in Variant::ALL {
        let mut store = ParameterStore::new(variant);
        for _ in 0..50 {
            store.randomize(&mut rng);
            assert_in_range(&store);
            for &id in variant.randomized() {
                let spec = variant.spec(id).unwrap();
                let v = store.scalar(id);
                let steps = (v - spec.min) / spec.step;
                assert!((steps - steps.round()).abs() < 1e-3, "{:?} = {}", id, v);
            }
        }
    }
}

#[test]
fn randomize_leaves_glitch_controls_alone() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut store = ParameterStore::new(Variant::Geometric);
    store.apply(GlitchPreset::FullGlitch.values());
    store.randomize(&mut rng);
    assert_eq!(store.scalar(SignalId::GlitchIntensity), 0.6);
    assert_eq!(store.scalar(SignalId::PixelCorruption), 0.5);
    let pattern = store.scalar(SignalId::PatternType);
    assert_eq!(pattern.fract(), 0.0);
    assert!((0.0..=7.0).contains(&pattern));
}

#[test]
fn randomize_is_deterministic_per_seed() {
    let mut a = VizApp::new(Variant::Flow, 99);
    let mut b = VizApp::new(Variant::Flow, 99);
    a.run(Command::Randomize);
    b.run(Command::Randomize);
    for spec in Variant::Flow.controls() {
        assert_eq!(a.params().get(spec.id), b.params().get(spec.id));
    }
}

#[test]
fn pattern_threshold_ladder_matches_shader() {
    assert_eq!(Pattern::from_uniform(0.0), Pattern::Checkerboard);
    assert_eq!(Pattern::from_uniform(-3.0), Pattern::Checkerboard);
    assert_eq!(Pattern::from_uniform(3.49), Pattern::Triangles);
    assert_eq!(Pattern::from_uniform(3.5), Pattern::Diamonds);
    assert_eq!(Pattern::from_uniform(7.0), Pattern::Waves);
    assert_eq!(Pattern::from_uniform(42.0), Pattern::Waves);
    for p in Pattern::ALL {
        assert_eq!(Pattern::from_uniform(p.uniform_value()), p);
    }
}

#[test]
fn secondary_pattern_wraps() {
    assert_eq!(Pattern::Checkerboard.secondary(), Pattern::Stripes);
    assert_eq!(Pattern::Maze.secondary(), Pattern::Waves);
    assert_eq!(Pattern::Waves.secondary(), Pattern::Checkerboard);
}

#[test]
fn select_pattern_by_name() {
    let mut app = VizApp::new(Variant::Geometric, 0);
    assert_eq!(app.select_pattern_named("hexagons"), Some(Pattern::Hexagons));
    assert_eq!(app.params().pattern(), Some(Pattern::Hexagons));
    assert_eq!(app.params().scalar(SignalId::PatternType), 5.0);
}

#[test]
fn names_round_trip() {
    for p in FlowPreset::ALL {
        assert_eq!(p.name().parse::<FlowPreset>().ok(), Some(p));
    }
    for p in GlitchPreset::ALL {
        assert_eq!(p.name().parse::<GlitchPreset>().ok(), Some(p));
    }
    for p in Pattern::ALL {
        assert_eq!(p.name().parse::<Pattern>().ok(), Some(p));
    }
    assert!(matches!(
        "warp".parse::<Variant>(),
        Err(VizError::UnknownVariant(_))
    ));
    assert_eq!(" Geometric ".parse::<Variant>().ok(), Some(Variant::Geometric));
}
