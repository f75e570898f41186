use crt_core::geometry::centering_offset;
use glam::{Mat4, Quat, Vec3};

use crate::mesh::MeshData;

/// Placement preset for one showcase object.
#[derive(Debug, Clone)]
pub struct ObjectSpec {
    pub name: &'static str,
    /// Pre-rotation around Y applied inside the node, radians.
    pub rotate_y: f32,
    /// Pre-rotation around Z applied inside the node, radians.
    pub rotate_z: f32,
    /// Uniform scale.
    pub scale: f32,
}

/// The three showcase objects, in display order. Only the first starts
/// visible.
pub fn showcase_objects() -> Vec<ObjectSpec> {
    use std::f32::consts::PI;
    vec![
        ObjectSpec {
            name: "handheld",
            rotate_y: PI / 2.0,
            rotate_z: 0.0,
            scale: 3.5,
        },
        ObjectSpec {
            name: "cassette",
            rotate_y: PI / 2.0,
            rotate_z: PI / 2.0,
            scale: 10.0,
        },
        ObjectSpec {
            name: "pocket_pet",
            rotate_y: PI,
            rotate_z: 0.0,
            scale: 0.025,
        },
    ]
}

/// A display object wrapped in its own node.
///
/// The mesh is re-centered so its bounding-box center sits at the node
/// origin; the node then carries the per-object orientation and scale, so
/// group rotation and visibility never depend on the asset's internal pivot.
pub struct ObjectNode {
    pub name: String,
    pub mesh: MeshData,
    /// Translation applied to the mesh before the node transform.
    pub centering: Vec3,
    rotation: Quat,
    scale: f32,
    pub visible: bool,
}

impl ObjectNode {
    pub fn new(spec: &ObjectSpec, mesh: MeshData) -> Self {
        let centering = centering_offset(&mesh.positions);
        let rotation = Quat::from_rotation_y(spec.rotate_y) * Quat::from_rotation_z(spec.rotate_z);
        Self {
            name: spec.name.to_string(),
            mesh,
            centering,
            rotation,
            scale: spec.scale,
            visible: false,
        }
    }

    /// Local transform of the node, not including the group rotation.
    pub fn local_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(Vec3::splat(self.scale), self.rotation, Vec3::ZERO)
            * Mat4::from_translation(self.centering)
    }
}

/// Ordered set of display objects sharing one spin axis.
pub struct ObjectGroup {
    nodes: Vec<ObjectNode>,
    /// Accumulated rotation about the vertical axis, radians.
    yaw: f32,
}

impl ObjectGroup {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            yaw: 0.0,
        }
    }

    /// Add a node; the first one added becomes visible.
    pub fn push(&mut self, mut node: ObjectNode) {
        node.visible = self.nodes.is_empty();
        self.nodes.push(node);
    }

    pub fn nodes(&self) -> &[ObjectNode] {
        &self.nodes
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Spin the whole group about the vertical axis.
    pub fn rotate_y(&mut self, angle: f32) {
        self.yaw += angle;
    }

    /// Index of the currently visible node, if any.
    pub fn visible_index(&self) -> Option<usize> {
        self.nodes.iter().position(|n| n.visible)
    }

    /// Hide the current node and show the next one, (i + 1) mod N.
    pub fn advance_visible(&mut self) {
        let Some(current) = self.visible_index() else {
            return;
        };
        self.nodes[current].visible = false;
        let next = (current + 1) % self.nodes.len();
        self.nodes[next].visible = true;
    }

    /// World transform for a node: group spin, then the node's own placement.
    pub fn model_matrix(&self, node: &ObjectNode) -> Mat4 {
        Mat4::from_rotation_y(self.yaw) * node.local_matrix()
    }
}

impl Default for ObjectGroup {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_mesh(offset: Vec3) -> MeshData {
        MeshData {
            positions: vec![
                offset + Vec3::new(-1.0, -1.0, 0.0),
                offset + Vec3::new(1.0, -1.0, 0.0),
                offset + Vec3::new(0.0, 1.0, 0.0),
            ],
            normals: vec![Vec3::Z; 3],
            indices: vec![0, 1, 2],
        }
    }

    fn spec(name: &'static str) -> ObjectSpec {
        ObjectSpec {
            name,
            rotate_y: 0.0,
            rotate_z: 0.0,
            scale: 1.0,
        }
    }

    #[test]
    fn test_first_node_visible() {
        let mut group = ObjectGroup::new();
        group.push(ObjectNode::new(&spec("a"), test_mesh(Vec3::ZERO)));
        group.push(ObjectNode::new(&spec("b"), test_mesh(Vec3::ZERO)));
        assert_eq!(group.visible_index(), Some(0));
    }

    #[test]
    fn test_advance_wraps_and_keeps_one_visible() {
        let mut group = ObjectGroup::new();
        for name in ["a", "b", "c"] {
            group.push(ObjectNode::new(&spec(name), test_mesh(Vec3::ZERO)));
        }

        for expected in [1, 2, 0, 1] {
            group.advance_visible();
            assert_eq!(group.visible_index(), Some(expected));
            let visible = group.nodes().iter().filter(|n| n.visible).count();
            assert_eq!(visible, 1);
        }
    }

    #[test]
    fn test_advance_on_empty_group_is_noop() {
        let mut group = ObjectGroup::new();
        group.advance_visible();
        assert_eq!(group.visible_index(), None);
    }

    #[test]
    fn test_node_recenters_mesh() {
        let node = ObjectNode::new(&spec("a"), test_mesh(Vec3::new(10.0, 0.0, 0.0)));
        // Bounding box center of the offset triangle is (10, 0, 0).
        assert_eq!(node.centering, Vec3::new(-10.0, 0.0, 0.0));

        // The local transform maps the box center back to the origin.
        let center = node.local_matrix().transform_point3(Vec3::new(10.0, 0.0, 0.0));
        assert!(center.length() < 1e-5);
    }
}
