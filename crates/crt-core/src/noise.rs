//! Deterministic pseudo-random hashing shared with the screen shader.
//!
//! The GLSL side uses the same sine hash, so golden-image tests can predict
//! the exact noise value for a given grille UV and time bucket.

use glam::Vec2;

/// Hash a 2D seed to a value in [0, 1).
///
/// This is the classic GLSL one-liner
/// `fract(sin(dot(seed, vec2(12.9898, 78.233))) * 43758.5453)`.
/// Identical seeds always produce bit-identical results.
pub fn hash21(seed: Vec2) -> f32 {
    let d = seed.dot(Vec2::new(12.9898, 78.233));
    // rem_euclid(1.0) matches GLSL fract(): x - floor(x), always in [0, 1)
    (d.sin() * 43758.5453).rem_euclid(1.0)
}

/// Quantize time into buckets so noise stays constant within a window
/// of `1 / frequency` seconds and jumps between windows.
pub fn time_bucket(time: f32, frequency: f32) -> f32 {
    (time * frequency).floor()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_deterministic() {
        let seed = Vec2::new(0.4375, 0.8125);
        let a = hash21(seed);
        let b = hash21(seed);
        assert_eq!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn test_hash_in_unit_range() {
        for i in 0..64 {
            for j in 0..64 {
                let v = hash21(Vec2::new(i as f32 / 64.0, j as f32 * 17.3));
                assert!((0.0..1.0).contains(&v), "hash out of range: {v}");
            }
        }
    }

    #[test]
    fn test_hash_varies_with_seed() {
        let a = hash21(Vec2::new(0.1, 0.2));
        let b = hash21(Vec2::new(0.2, 0.1));
        assert_ne!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn test_time_bucket_constant_within_window() {
        // At 20 Hz the bucket changes every 50 ms.
        assert_eq!(time_bucket(1.000, 20.0), time_bucket(1.049, 20.0));
        assert_ne!(time_bucket(1.000, 20.0), time_bucket(1.051, 20.0));
    }
}
