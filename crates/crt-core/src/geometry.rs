use glam::Vec3;

/// Axis-aligned bounding box grown from a point set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn from_points<I: IntoIterator<Item = Vec3>>(points: I) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut aabb = Aabb {
            min: first,
            max: first,
        };
        for p in iter {
            aabb.min = aabb.min.min(p);
            aabb.max = aabb.max.max(p);
        }
        Some(aabb)
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }
}

/// Translation that moves a point set's bounding-box center to the origin.
///
/// Wrapping a re-centered mesh in its own node makes rotation and visibility
/// independent of wherever the asset's pivot happened to be. Returns zero for
/// an empty set.
pub fn centering_offset(positions: &[Vec3]) -> Vec3 {
    Aabb::from_points(positions.iter().copied())
        .map(|aabb| -aabb.center())
        .unwrap_or(Vec3::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_center() {
        let aabb = Aabb::from_points([Vec3::new(-1.0, 2.0, 0.0), Vec3::new(3.0, 4.0, 6.0)]).unwrap();
        assert_eq!(aabb.center(), Vec3::new(1.0, 3.0, 3.0));
    }

    #[test]
    fn test_centering_offset_recents_box() {
        let points = vec![Vec3::new(2.0, 2.0, 2.0), Vec3::new(4.0, 6.0, 2.0)];
        let offset = centering_offset(&points);
        let moved = Aabb::from_points(points.iter().map(|p| *p + offset)).unwrap();
        assert_eq!(moved.center(), Vec3::ZERO);
    }

    #[test]
    fn test_empty_set_is_zero() {
        assert_eq!(centering_offset(&[]), Vec3::ZERO);
    }
}
