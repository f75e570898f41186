use serde::{Deserialize, Serialize};

/// Parameters for the CRT screen effect.
///
/// Each field has a fixed valid range. Out-of-range values are a caller
/// error; the shader only clamps UV coordinates internally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenParams {
    /// Fraction of the viewport resolution used for the grille grid. Range: (0, 1]
    pub resolution_ratio: f32,
    /// Scanline darkening amount. Range: 0.0..1.0
    pub scanlines_intensity: f32,
    /// Static noise mix factor. Range: 0.0..1.0
    pub static_noise_intensity: f32,
    /// Static noise refresh rate in buckets per second. Range: 0.0..30.0
    pub static_noise_frequency: f32,
    /// Additive brightness noise amount. Range: 0.0..1.0
    pub brightness_noise_intensity: f32,
    /// Brightness noise refresh rate. Range: 1.0..30.0
    pub brightness_noise_frequency: f32,
    /// Per-scanline horizontal offset amount. Range: 0.0..1.0
    pub horizontal_tearing_intensity: f32,
    /// Tearing refresh rate. Range: 1.0..30.0
    pub horizontal_tearing_frequency: f32,
    /// Whether the traveling rolling band is drawn.
    pub rolling_band_enabled: bool,
    /// Seconds for the band to travel the full screen height. Range: > 0
    pub rolling_band_duration: f32,
    /// Band half-height in UV units. Range: (0, 0.5]
    pub rolling_band_height: f32,
    /// Extra static noise inside the band. Range: 0.0..1.0
    pub rolling_band_static_noise: f32,
    /// Extra brightness noise inside the band. Range: 0.0..1.0
    pub rolling_band_brightness_noise: f32,
    /// Extra horizontal tearing inside the band. Range: 0.0..1.0
    pub rolling_band_horizontal_tearing: f32,
    /// Extra chromatic aberration inside the band. Range: 0.0..1.0
    pub rolling_band_chromatic_aberration: f32,
    /// Baseline R/B channel shift. Range: 0.0..1.0
    pub chromatic_aberration_intensity: f32,
    /// Barrel distortion strength; lower curves harder. Range: 0.5..15.0
    pub curvature_intensity: f32,
    /// Corner darkening exponent. Range: 0.0..1.0
    pub vignette_intensity: f32,
    /// Vignette falloff multiplier. Range: 1.0..100.0
    pub vignette_falloff: f32,
}

impl Default for ScreenParams {
    fn default() -> Self {
        Self {
            resolution_ratio: 0.5,
            scanlines_intensity: 0.5,
            static_noise_intensity: 0.05,
            static_noise_frequency: 30.0,
            brightness_noise_intensity: 0.05,
            brightness_noise_frequency: 20.0,
            horizontal_tearing_intensity: 0.1,
            horizontal_tearing_frequency: 20.0,
            rolling_band_enabled: true,
            rolling_band_duration: 3.0,
            rolling_band_height: 0.05,
            rolling_band_static_noise: 0.1,
            rolling_band_brightness_noise: 0.1,
            rolling_band_horizontal_tearing: 0.7,
            rolling_band_chromatic_aberration: 0.3,
            chromatic_aberration_intensity: 0.1,
            curvature_intensity: 2.5,
            vignette_intensity: 0.22,
            vignette_falloff: 20.0,
        }
    }
}

impl ScreenParams {
    /// Copy with the static-noise takeover level used during transitions.
    pub fn with_static_noise(&self, intensity: f32) -> Self {
        Self {
            static_noise_intensity: intensity,
            ..self.clone()
        }
    }
}

/// Scene-level configuration, re-read by the controller every frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneConfig {
    /// When false the transition timers freeze but rotation continues.
    pub automatic_transition: bool,
    /// Seconds an object stays on screen. Range: > 0
    pub object_duration: f32,
    /// Seconds of full-static interstitial. Range: > 0
    pub noise_duration: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            automatic_transition: true,
            object_duration: 5.0,
            noise_duration: 0.7,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_static_noise_only_touches_noise() {
        let base = ScreenParams::default();
        let noisy = base.with_static_noise(1.0);
        assert_eq!(noisy.static_noise_intensity, 1.0);
        assert_eq!(noisy.scanlines_intensity, base.scanlines_intensity);
        assert_eq!(noisy.curvature_intensity, base.curvature_intensity);
    }

    #[test]
    fn test_defaults_within_ranges() {
        let p = ScreenParams::default();
        assert!(p.resolution_ratio > 0.0 && p.resolution_ratio <= 1.0);
        assert!(p.rolling_band_height > 0.0 && p.rolling_band_height <= 0.5);
        assert!(p.curvature_intensity >= 0.5 && p.curvature_intensity <= 15.0);
        assert!(p.vignette_falloff >= 1.0 && p.vignette_falloff <= 100.0);
    }
}
