use glam::Vec3;
use std::io::Cursor;

/// Triangulated mesh data ready for GPU upload.
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Parse OBJ (Wavefront) mesh data into a single triangulated mesh.
///
/// All models in the file are merged. When the file carries no normals,
/// flat per-vertex normals are accumulated from the triangle faces.
pub fn parse_obj(data: &[u8]) -> Result<MeshData, String> {
    let mut cursor = Cursor::new(data);

    let (models, _materials) = tobj::load_obj_buf(
        &mut cursor,
        &tobj::LoadOptions {
            triangulate: true,
            single_index: true,
            ..Default::default()
        },
        |_| Ok(Default::default()),
    )
    .map_err(|e| format!("Failed to parse OBJ: {e}"))?;

    let mut mesh = MeshData::default();

    for model in &models {
        let m = &model.mesh;
        let vertex_offset = mesh.positions.len() as u32;

        let num_vertices = m.positions.len() / 3;
        for i in 0..num_vertices {
            mesh.positions.push(Vec3::new(
                m.positions[i * 3],
                m.positions[i * 3 + 1],
                m.positions[i * 3 + 2],
            ));
        }

        if m.normals.len() == m.positions.len() {
            for i in 0..num_vertices {
                mesh.normals.push(Vec3::new(
                    m.normals[i * 3],
                    m.normals[i * 3 + 1],
                    m.normals[i * 3 + 2],
                ));
            }
        } else {
            mesh.normals
                .extend(std::iter::repeat(Vec3::ZERO).take(num_vertices));
        }

        mesh.indices
            .extend(m.indices.iter().map(|&i| i + vertex_offset));
    }

    if mesh.is_empty() {
        return Err("OBJ contains no triangles".to_string());
    }

    if mesh.normals.iter().all(|n| *n == Vec3::ZERO) {
        compute_flat_normals(&mut mesh);
    }

    Ok(mesh)
}

/// Accumulate face normals onto vertices and normalize.
fn compute_flat_normals(mesh: &mut MeshData) {
    for tri in mesh.indices.chunks_exact(3) {
        let [a, b, c] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
        let n = (mesh.positions[b] - mesh.positions[a])
            .cross(mesh.positions[c] - mesh.positions[a]);
        mesh.normals[a] += n;
        mesh.normals[b] += n;
        mesh.normals[c] += n;
    }
    for n in &mut mesh.normals {
        *n = n.normalize_or_zero();
    }
}
