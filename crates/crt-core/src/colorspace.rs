//! RGB ↔ HSL conversions.
//!
//! Part of the effect-math library. The screen shader carries a GLSL twin of
//! these routines on a disabled saturation path; this is the tested,
//! reusable form.

use glam::Vec3;

/// Convert an RGB color (channels in [0,1]) to HSL with hue in degrees.
pub fn rgb_to_hsl(rgb: Vec3) -> Vec3 {
    let min = rgb.x.min(rgb.y).min(rgb.z);
    let max = rgb.x.max(rgb.y).max(rgb.z);

    let l = (max + min) / 2.0;

    if max == min {
        return Vec3::new(0.0, 0.0, l);
    }

    let chroma = max - min;

    let mut h = if rgb.x == max {
        ((rgb.y - rgb.z) / chroma).rem_euclid(6.0)
    } else if rgb.y == max {
        (rgb.z - rgb.x) / chroma + 2.0
    } else {
        (rgb.x - rgb.y) / chroma + 4.0
    };
    h *= 60.0;

    let s = if l < 0.5 {
        chroma / (max + min)
    } else {
        chroma / (2.0 - max - min)
    };

    Vec3::new(h, s, l)
}

fn hsl_channel(hsl: Vec3, n: f32) -> f32 {
    let k = (n + hsl.x / 30.0).rem_euclid(12.0);
    let a = hsl.y * hsl.z.min(1.0 - hsl.z);
    hsl.z - a * (-1.0f32).max((k - 3.0).min((9.0 - k).min(1.0)))
}

/// Convert an HSL color (hue in degrees) back to RGB.
pub fn hsl_to_rgb(hsl: Vec3) -> Vec3 {
    Vec3::new(
        hsl_channel(hsl, 0.0),
        hsl_channel(hsl, 8.0),
        hsl_channel(hsl, 4.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).abs().max_element() < 1e-4
    }

    #[test]
    fn test_primaries() {
        assert!(close(rgb_to_hsl(Vec3::X), Vec3::new(0.0, 1.0, 0.5)));
        assert!(close(rgb_to_hsl(Vec3::Y), Vec3::new(120.0, 1.0, 0.5)));
        assert!(close(rgb_to_hsl(Vec3::Z), Vec3::new(240.0, 1.0, 0.5)));
    }

    #[test]
    fn test_grays_have_zero_saturation() {
        let hsl = rgb_to_hsl(Vec3::splat(0.3));
        assert_eq!(hsl.x, 0.0);
        assert_eq!(hsl.y, 0.0);
        assert!((hsl.z - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_round_trip() {
        for &rgb in &[
            Vec3::new(0.8, 0.2, 0.4),
            Vec3::new(0.1, 0.9, 0.7),
            Vec3::new(0.5, 0.5, 0.2),
        ] {
            let back = hsl_to_rgb(rgb_to_hsl(rgb));
            assert!(close(rgb, back), "{rgb:?} -> {back:?}");
        }
    }
}
