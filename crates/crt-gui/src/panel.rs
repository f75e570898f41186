use crt_core::params::{SceneConfig, ScreenParams};
use egui::Ui;

/// Draw the screen effect panel.
///
/// Edits go into a scratch copy; when anything changed this returns a fresh
/// `ScreenParams` for the caller to wrap in a new `Arc`. Downstream change
/// detection is identity-based, so the panel never mutates shared state in
/// place.
pub fn draw_screen_panel(ui: &mut Ui, current: &ScreenParams) -> Option<ScreenParams> {
    let mut p = current.clone();
    let mut changed = false;

    egui::CollapsingHeader::new("screen")
        .default_open(true)
        .show(ui, |ui| {
            changed |= slider(ui, &mut p.resolution_ratio, 0.01..=1.0, "resolution ratio");

            ui.collapsing("scanlines", |ui| {
                changed |= slider(ui, &mut p.scanlines_intensity, 0.0..=1.0, "intensity");
            });

            ui.collapsing("static noise", |ui| {
                changed |= slider(ui, &mut p.static_noise_intensity, 0.0..=1.0, "intensity");
                changed |= slider(ui, &mut p.static_noise_frequency, 0.0..=30.0, "frequency");
            });

            ui.collapsing("brightness noise", |ui| {
                changed |= slider(ui, &mut p.brightness_noise_intensity, 0.0..=1.0, "intensity");
                changed |= slider(ui, &mut p.brightness_noise_frequency, 1.0..=30.0, "frequency");
            });

            ui.collapsing("horizontal tearing", |ui| {
                changed |= slider(ui, &mut p.horizontal_tearing_intensity, 0.0..=1.0, "intensity");
                changed |= slider(ui, &mut p.horizontal_tearing_frequency, 1.0..=30.0, "frequency");
            });

            ui.collapsing("rolling band", |ui| {
                changed |= ui.checkbox(&mut p.rolling_band_enabled, "enabled").changed();
                changed |= slider(ui, &mut p.rolling_band_duration, 0.5..=10.0, "duration");
                changed |= slider(ui, &mut p.rolling_band_height, 0.01..=0.5, "height");
                changed |= slider(ui, &mut p.rolling_band_static_noise, 0.0..=1.0, "static noise");
                changed |= slider(
                    ui,
                    &mut p.rolling_band_brightness_noise,
                    0.0..=1.0,
                    "brightness noise",
                );
                changed |= slider(
                    ui,
                    &mut p.rolling_band_horizontal_tearing,
                    0.0..=1.0,
                    "horizontal tearing",
                );
                changed |= slider(
                    ui,
                    &mut p.rolling_band_chromatic_aberration,
                    0.0..=1.0,
                    "chromatic aberration",
                );
            });

            ui.collapsing("vignette", |ui| {
                changed |= slider(ui, &mut p.vignette_intensity, 0.0..=1.0, "intensity");
                changed |= slider(ui, &mut p.vignette_falloff, 1.0..=100.0, "falloff");
            });

            ui.collapsing("image", |ui| {
                changed |= slider(
                    ui,
                    &mut p.chromatic_aberration_intensity,
                    0.0..=1.0,
                    "chromatic aberration",
                );
                changed |= slider(ui, &mut p.curvature_intensity, 0.5..=15.0, "curvature intensity");
            });
        });

    changed.then_some(p)
}

/// Draw the scene panel; returns a fresh `SceneConfig` when edited.
pub fn draw_scene_panel(ui: &mut Ui, current: &SceneConfig) -> Option<SceneConfig> {
    let mut c = current.clone();
    let mut changed = false;

    egui::CollapsingHeader::new("scene")
        .default_open(true)
        .show(ui, |ui| {
            changed |= ui
                .checkbox(&mut c.automatic_transition, "automatic transition")
                .changed();
            changed |= slider(ui, &mut c.object_duration, 1.0..=30.0, "object duration");
            changed |= slider(ui, &mut c.noise_duration, 0.1..=5.0, "noise duration");
        });

    changed.then_some(c)
}

fn slider(
    ui: &mut Ui,
    value: &mut f32,
    range: std::ops::RangeInclusive<f32>,
    label: &str,
) -> bool {
    ui.add(egui::Slider::new(value, range).text(label)).changed()
}
