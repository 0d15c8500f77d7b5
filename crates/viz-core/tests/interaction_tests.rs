// Host-side tests for the interaction tracker and per-frame integrator,
// driven through the application context on synthetic time.

use glam::Vec2;
use viz_core::*;

const FRAME_MS: f64 = 1000.0 / 60.0;

fn flow_app() -> VizApp {
    VizApp::new(Variant::Flow, 7)
}

fn click(app: &mut VizApp, at_ms: f64) {
    app.handle_input_at(InputEvent::Down(Vec2::splat(0.5)), at_ms);
    app.handle_input_at(InputEvent::Up, at_ms);
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

#[test]
fn two_quick_clicks_build_a_combo() {
    let mut app = flow_app();
    click(&mut app, 0.0);
    app.frame_at(FRAME_MS);
    click(&mut app, 200.0);
    assert!(approx(app.params().scalar(SignalId::ClickCombo), 0.6));
    assert_eq!(app.tracker().pointer.click_count, 2);
}

#[test]
fn combo_is_capped_at_two() {
    let mut app = flow_app();
    for i in 0..12 {
        click(&mut app, i as f64 * 100.0);
    }
    assert!(approx(app.tracker().levels.combo, 2.0));
    assert_eq!(app.tracker().pointer.click_count, 12);
}

#[test]
fn combo_clears_one_second_after_last_click() {
    let mut app = flow_app();
    click(&mut app, 0.0);
    let mut now = 0.0;
    while now < 1000.0 {
        now += FRAME_MS;
        app.frame_at(now.min(1000.0));
    }
    assert_eq!(app.params().scalar(SignalId::ClickCombo), 0.0);
    assert_eq!(app.tracker().pointer.click_count, 0);
}

#[test]
fn slow_click_restarts_the_streak() {
    let mut app = flow_app();
    click(&mut app, 0.0);
    click(&mut app, 100.0);
    click(&mut app, 600.0);
    assert_eq!(app.tracker().pointer.click_count, 1);
    assert!(approx(app.tracker().levels.combo, 0.3));
}

#[test]
fn click_sets_impulses() {
    let mut app = flow_app();
    click(&mut app, 0.0);
    let l = app.tracker().levels;
    assert!(approx(l.click_effect, 1.3));
    assert!(approx(l.energy, 0.23));
    assert_eq!(l.pulse, 1.0);
    assert_eq!(l.color_boost, 1.0);
}

#[test]
fn impulses_reach_zero_without_going_negative() {
    let mut app = flow_app();
    click(&mut app, 0.0);
    let mut prev = app.tracker().levels;
    let mut now = 0.0;
    for _ in 0..200 {
        now += FRAME_MS;
        app.frame_at(now);
        let l = app.tracker().levels;
        for (before, after) in [
            (prev.click_effect, l.click_effect),
            (prev.pulse, l.pulse),
            (prev.color_boost, l.color_boost),
        ] {
            assert!(after >= 0.0);
            assert!(after <= before);
        }
        prev = l;
    }
    assert_eq!(prev.click_effect, 0.0);
    assert_eq!(prev.pulse, 0.0);
    assert_eq!(prev.color_boost, 0.0);
}

#[test]
fn held_pointer_slows_click_decay() {
    let mut held = flow_app();
    let mut released = flow_app();
    held.handle_input_at(InputEvent::Down(Vec2::splat(0.5)), 0.0);
    click(&mut released, 0.0);
    for i in 1..=10 {
        held.frame_at(i as f64 * FRAME_MS);
        released.frame_at(i as f64 * FRAME_MS);
    }
    assert!(held.tracker().levels.click_effect > released.tracker().levels.click_effect);
}

#[test]
fn holding_for_five_seconds_saturates_energy() {
    let mut app = flow_app();
    app.handle_input_at(InputEvent::Enter, 0.0);
    app.handle_input_at(InputEvent::Down(Vec2::new(0.3, 0.7)), 0.0);
    let mut prev = app.tracker().levels.energy;
    let mut now = 0.0;
    while now < 5000.0 {
        now += FRAME_MS;
        app.frame_at(now);
        let e = app.tracker().levels.energy;
        assert!(e >= prev);
        assert!(e <= 1.0);
        prev = e;
    }
    assert_eq!(app.params().scalar(SignalId::EnergyLevel), 1.0);
    for _ in 0..60 {
        now += FRAME_MS;
        app.frame_at(now);
        assert_eq!(app.tracker().levels.energy, 1.0);
    }
}

#[test]
fn energy_decays_slowly_when_idle() {
    let mut app = flow_app();
    click(&mut app, 0.0);
    let mut prev = app.tracker().levels.energy;
    for i in 1..=300 {
        app.frame_at(i as f64 * FRAME_MS);
        let e = app.tracker().levels.energy;
        assert!((e - prev * 0.995).abs() < 1e-6);
        prev = e;
    }
    // never snapped
    assert!(prev > 0.0);
}

#[test]
fn hover_converges_to_energy_boosted_target() {
    let mut app = flow_app();
    app.handle_input_at(InputEvent::Enter, 0.0);
    for i in 1..=600 {
        app.frame_at(i as f64 * FRAME_MS);
    }
    let l = app.tracker().levels;
    assert_eq!(l.energy, 1.0);
    assert!((l.hover - 1.5).abs() < 1e-3);

    app.handle_input_at(InputEvent::Leave, 600.0 * FRAME_MS);
    for i in 601..=1200 {
        app.frame_at(i as f64 * FRAME_MS);
    }
    assert!(app.tracker().levels.hover < 1e-3);
}

#[test]
fn touch_start_counts_as_hover_and_click() {
    let mut app = flow_app();
    app.handle_input_at(InputEvent::TouchStart(Vec2::new(0.2, 0.4)), 0.0);
    let p = app.tracker().pointer;
    assert!(p.over && p.down);
    assert_eq!(p.click_count, 1);
    assert_eq!(app.params().vec2(SignalId::Mouse), Vec2::new(0.2, 0.4));

    app.handle_input_at(InputEvent::TouchEnd, 50.0);
    let p = app.tracker().pointer;
    assert!(!p.over && !p.down);
}

#[test]
fn uniforms_track_post_integration_state() {
    let mut app = flow_app();
    click(&mut app, 0.0);
    for i in 1..=150 {
        app.frame_at(i as f64 * FRAME_MS);
        let l = app.tracker().levels;
        assert_eq!(app.params().scalar(SignalId::ClickEffect), l.click_effect);
        assert_eq!(app.params().scalar(SignalId::PulseIntensity), l.pulse);
    }
    assert_eq!(app.params().scalar(SignalId::PulseIntensity), 0.0);
}

#[test]
fn geometric_variant_only_tracks_the_pointer() {
    let mut app = VizApp::new(Variant::Geometric, 1);
    app.handle_input_at(InputEvent::Down(Vec2::new(0.9, 0.1)), 0.0);
    app.frame_at(FRAME_MS);
    assert_eq!(app.params().vec2(SignalId::Mouse), Vec2::new(0.9, 0.1));
    assert!(app.params().get(SignalId::ClickEffect).is_none());
}

#[test]
fn time_uniform_follows_the_clock() {
    let mut app = flow_app();
    let t = app.frame_at(2500.0);
    assert_eq!(t.elapsed_sec, 2.5);
    assert_eq!(app.params().scalar(SignalId::Time), 2.5);
}
