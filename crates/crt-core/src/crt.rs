//! CPU reference of the screen-shader math.
//!
//! Each routine mirrors one stage of `crt-render`'s fragment shader with the
//! same formulas and tie-breaks, so golden-image style tests can assert the
//! exact per-pixel behavior without a GL context.

use glam::Vec2;
use std::f32::consts::PI;

/// Apply barrel distortion to a UV in [0,1]².
///
/// Returns `None` when the curved UV leaves the unit square; those pixels
/// render as opaque black and skip every later stage.
pub fn curve_uv(uv: Vec2, curvature_intensity: f32) -> Option<Vec2> {
    let centered = uv * 2.0 - Vec2::ONE;
    // Each axis is displaced by the square of the orthogonal axis's offset.
    let offset = Vec2::new(centered.y.abs(), centered.x.abs()) / curvature_intensity;
    let curved = (centered + centered * offset * offset) * 0.5 + Vec2::splat(0.5);

    if curved.x < 0.0 || curved.y < 0.0 || curved.x > 1.0 || curved.y > 1.0 {
        None
    } else {
        Some(curved)
    }
}

/// Snap a curved UV to the center of its grille cell.
///
/// The effective grid is `viewport * resolution_ratio` cells; all noise and
/// image sampling after this stage uses the snapped coordinate.
pub fn grille_uv(uv: Vec2, viewport: Vec2, resolution_ratio: f32) -> Vec2 {
    let grid = viewport * resolution_ratio;
    ((uv * grid).floor() + Vec2::splat(0.5)) / grid
}

/// Intensity of the traveling rolling band at a vertical coordinate.
///
/// The band phase is `1 - fract(time / duration)` so it wraps with the
/// configured period. Inside the band (|signed distance| < 1) the profile is
/// a raised cosine with a ±20% flutter term; outside it is zero.
pub fn rolling_band(uv_y: f32, time: f32, duration: f32, height: f32) -> f32 {
    let phase = 1.0 - (time / duration).rem_euclid(1.0);
    let distance = (uv_y - phase) / height;

    if distance.abs() >= 1.0 {
        return 0.0;
    }

    let mut band = (distance * PI).cos() + 1.0;
    band += band * (distance * 7.0 + time * 5.0).cos() * 0.2;
    band
}

/// Scanline darkening mask for an uncurved vertical coordinate.
pub fn scanline_mask(uv_y: f32, grille_rows: f32) -> f32 {
    ((uv_y * grille_rows).rem_euclid(1.0) * PI).sin()
}

/// Corner-darkening factor for a (tearing-adjusted) UV.
pub fn vignette(uv: Vec2, falloff: f32, intensity: f32) -> f32 {
    let v = uv * (Vec2::ONE - Vec2::new(uv.y, uv.x));
    (v.x * v.y * falloff).powf(intensity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_never_curves_out() {
        // UV (0.5, 0.5) is centered coordinate (0, 0): no displacement.
        let curved = curve_uv(Vec2::new(0.5, 0.5), 0.5).unwrap();
        assert!((curved - Vec2::new(0.5, 0.5)).length() < 1e-6);
    }

    #[test]
    fn test_edge_curves_out_at_min_intensity() {
        // At the minimum intensity 0.5 the top edge is pushed outside.
        assert!(curve_uv(Vec2::new(0.0, 1.0), 0.5).is_none());
        // The same corner survives a gentle curvature.
        assert!(curve_uv(Vec2::new(0.5, 1.0), 15.0).is_some());
    }

    #[test]
    fn test_grille_snaps_to_cell_center() {
        let viewport = Vec2::new(800.0, 600.0);
        // ratio 0.5 -> 400x300 cells
        let snapped = grille_uv(Vec2::new(0.5012, 0.5012), viewport, 0.5);
        assert!((snapped.x - 200.5 / 400.0).abs() < 1e-6);
        assert!((snapped.y - 150.5 / 300.0).abs() < 1e-6);

        // Two UVs in the same cell snap identically.
        let a = grille_uv(Vec2::new(0.1001, 0.2001), viewport, 0.5);
        let b = grille_uv(Vec2::new(0.1009, 0.2009), viewport, 0.5);
        assert_eq!(a, b);
    }

    #[test]
    fn test_band_zero_outside_height() {
        // At time 0 the phase is 1.0: the band sits at the top of the screen.
        assert_eq!(rolling_band(0.5, 0.0, 3.0, 0.05), 0.0);
        assert!(rolling_band(1.0, 0.0, 3.0, 0.05) > 0.0);
    }

    #[test]
    fn test_band_period_matches_duration() {
        // One full duration later the band is back at the same place.
        let a = rolling_band(0.3, 0.6, 3.0, 0.05);
        let phase_a = 1.0 - (0.6f32 / 3.0).rem_euclid(1.0);
        let phase_b = 1.0 - (3.6f32 / 3.0).rem_euclid(1.0);
        assert!((phase_a - phase_b).abs() < 1e-6);
        // The flutter term depends on absolute time, so only the envelope
        // position repeats, not the exact intensity.
        let b = rolling_band(0.3, 3.6, 3.0, 0.05);
        assert_eq!(a == 0.0, b == 0.0);
    }

    #[test]
    fn test_scanline_mask_peaks_mid_row() {
        // Mid-cell the sine peaks at 1, on the boundary it reaches 0.
        assert!((scanline_mask(0.5 / 300.0, 300.0) - 1.0).abs() < 1e-5);
        assert!(scanline_mask(1.0 / 300.0, 300.0).abs() < 1e-4);
    }

    #[test]
    fn test_vignette_darkens_corners() {
        let center = vignette(Vec2::new(0.5, 0.5), 20.0, 0.22);
        let corner = vignette(Vec2::new(0.05, 0.05), 20.0, 0.22);
        assert!(center > corner);
    }
}
