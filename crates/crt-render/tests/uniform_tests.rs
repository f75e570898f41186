use std::sync::Arc;

use crt_core::params::{SceneConfig, ScreenParams};
use crt_core::transition::{TransitionEvent, TransitionState};
use crt_render::screen_pass::{ParamSlot, PARAM_UNIFORMS};
use crt_render::shaders;

// ── Uniform registration table ───────────────────────────────────

#[test]
fn every_registered_uniform_is_declared_in_the_fragment() {
    let source = shaders::screen_fragment();
    for (name, _) in PARAM_UNIFORMS {
        assert!(
            source.contains(&format!("uniform float {name};")),
            "uniform '{name}' missing from screen fragment"
        );
    }
    // Base uniforms outside the float table.
    for decl in [
        "uniform sampler2D u_image;",
        "uniform float u_time;",
        "uniform vec2 u_viewport;",
        "uniform bool u_rolling_band_enabled;",
    ] {
        assert!(source.contains(decl), "missing declaration: {decl}");
    }
}

#[test]
fn registered_uniform_names_are_unique() {
    let mut names: Vec<&str> = PARAM_UNIFORMS.iter().map(|(n, _)| *n).collect();
    names.sort();
    names.dedup();
    assert_eq!(names.len(), PARAM_UNIFORMS.len(), "duplicate uniform names");
}

#[test]
fn table_getters_read_distinct_fields() {
    // Perturbing any single float field must change exactly one getter.
    let base = ScreenParams::default();
    let baseline: Vec<f32> = PARAM_UNIFORMS.iter().map(|(_, get)| get(&base)).collect();

    let mut perturbed = base.clone();
    perturbed.vignette_falloff += 1.0;
    let mut changed = 0;
    for (i, (_, get)) in PARAM_UNIFORMS.iter().enumerate() {
        if get(&perturbed) != baseline[i] {
            changed += 1;
        }
    }
    assert_eq!(changed, 1);
}

// ── Snapshot identity semantics ──────────────────────────────────

#[test]
fn same_arc_is_a_noop() {
    let params = Arc::new(ScreenParams::default());
    let mut slot = ParamSlot::new(params.clone());

    assert!(!slot.replace(params));
    assert_eq!(slot.generation(), 0);
}

#[test]
fn equal_by_value_but_distinct_arc_triggers_refresh() {
    let mut slot = ParamSlot::new(Arc::new(ScreenParams::default()));

    // A fresh allocation with identical values still counts as a change.
    assert!(slot.replace(Arc::new(ScreenParams::default())));
    assert_eq!(slot.generation(), 1);
}

#[test]
fn generation_counts_each_accepted_swap() {
    let mut slot = ParamSlot::new(Arc::new(ScreenParams::default()));
    for _ in 0..3 {
        let next = Arc::new(slot.params().with_static_noise(0.5));
        assert!(slot.replace(next));
    }
    assert_eq!(slot.generation(), 3);
}

// ── Transition-driven noise takeover ─────────────────────────────

#[test]
fn transitions_flip_static_noise_between_zero_and_one() {
    // GL-free re-enactment of the driver's event handling.
    let config = SceneConfig {
        automatic_transition: true,
        object_duration: 1.0,
        noise_duration: 0.5,
    };
    let mut state = TransitionState::initial(&config);
    let mut slot = ParamSlot::new(Arc::new(ScreenParams::default()));

    assert_eq!(state.advance(1.0, &config), Some(TransitionEvent::EnteredNoise));
    slot.replace(Arc::new(slot.params().with_static_noise(1.0)));
    assert_eq!(slot.params().static_noise_intensity, 1.0);

    assert_eq!(state.advance(0.5, &config), Some(TransitionEvent::EnteredObject));
    slot.replace(Arc::new(slot.params().with_static_noise(0.0)));
    assert_eq!(slot.params().static_noise_intensity, 0.0);
    assert_eq!(slot.generation(), 2);
}
