// Host-side tests tying the packed uniform block to the WGSL sources.

use glam::Vec2;
use viz_core::*;

/// Field names of `struct Params { ... }` in declaration order.
fn wgsl_param_fields(src: &str) -> Vec<String> {
    let start = src.find("struct Params {").expect("Params struct");
    let body = &src[start + "struct Params {".len()..];
    let end = body.find('}').expect("struct end");
    body[..end]
        .lines()
        .filter_map(|line| line.trim().split_once(':'))
        .map(|(name, _)| name.trim().to_string())
        .collect()
}

#[test]
fn wgsl_struct_matches_signal_table() {
    for variant in Variant::ALL {
        let fields = wgsl_param_fields(variant.fragment_source());
        let expected: Vec<_> = variant
            .signals()
            .iter()
            .map(|s| s.id.uniform_name().to_string())
            .collect();
        assert_eq!(fields, expected, "{}", variant);
    }
}

#[test]
fn shader_source_contains_both_stages() {
    for variant in Variant::ALL {
        let src = variant.shader_source();
        assert!(src.contains("fn vs_fullscreen"));
        assert!(src.contains("fn fs_main"));
        assert!(src.contains("@group(0) @binding(0) var<uniform> u: Params;"));
    }
}

#[test]
fn vec2_fields_are_eight_byte_aligned() {
    for variant in Variant::ALL {
        let block = UniformBlock::for_variant(variant);
        assert_eq!(block.size() % 16, 0);
        for spec in variant.signals() {
            let at = block.offset(spec.id).unwrap();
            match spec.default {
                SignalValue::Vec2(_) => assert_eq!(at % 8, 0),
                SignalValue::Scalar(_) => assert_eq!(at % 4, 0),
            }
        }
    }
}

#[test]
fn app_upload_fills_the_block() {
    let mut app = VizApp::new(Variant::Geometric, 0);
    app.set_resolution(1600, 1000);
    app.handle_input_at(InputEvent::Move(Vec2::new(0.25, 0.5)), 0.0);
    app.select_pattern_named("maze");
    app.set_control(SignalId::GeometricBlend, 0.75);
    app.frame_at(1500.0);

    let mut block = UniformBlock::for_variant(Variant::Geometric);
    app.upload(&mut block);
    assert_eq!(block.read_vec2(SignalId::Resolution), Some(Vec2::new(1600.0, 1000.0)));
    assert_eq!(block.read_vec2(SignalId::Mouse), Some(Vec2::new(0.25, 0.5)));
    assert_eq!(block.read_scalar(SignalId::Time), Some(1.5));
    assert_eq!(block.read_scalar(SignalId::PatternType), Some(6.0));
    assert_eq!(block.read_scalar(SignalId::GeometricBlend), Some(0.75));
    assert_eq!(block.read_scalar(SignalId::PatternDensity), Some(8.0));
}

#[derive(Default)]
struct Recorder {
    scalars: Vec<SignalId>,
    vectors: Vec<SignalId>,
}

impl UniformSink for Recorder {
    fn scalar(&mut self, id: SignalId, _value: f32) {
        self.scalars.push(id);
    }
    fn vec2(&mut self, id: SignalId, _value: Vec2) {
        self.vectors.push(id);
    }
}

#[test]
fn upload_dispatches_on_value_shape() {
    let store = ParameterStore::new(Variant::Flow);
    let mut rec = Recorder::default();
    store.upload(&mut rec);
    assert_eq!(rec.vectors, vec![SignalId::Resolution, SignalId::Mouse]);
    assert_eq!(rec.scalars.len(), Variant::Flow.signals().len() - 2);
    assert_eq!(rec.scalars[0], SignalId::Time);
}
