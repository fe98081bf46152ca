use super::{Point3, Vector3};
use crate::kernel::types::TriangleMesh;
use serde::{Deserialize, Serialize};

/// Flat vertex buffers ready for upload to a rendering pipeline.
///
/// Positions and normals are flattened `x, y, z` triples; `indices` holds
/// triangle index triples into those buffers.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct RenderMesh {
    pub positions: Vec<f32>, // Flattened x, y, z
    pub normals: Vec<f32>,   // Flattened nx, ny, nz
    pub indices: Vec<u32>,   // Triangle indices
}

impl RenderMesh {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of vertices in the mesh.
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Number of triangles in the mesh.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Axis-aligned bounding box as `(min, max)` corners, or `None` for an
    /// empty mesh.
    pub fn bounding_box(&self) -> Option<([f32; 3], [f32; 3])> {
        if self.positions.is_empty() {
            return None;
        }
        let mut min = [f32::INFINITY; 3];
        let mut max = [f32::NEG_INFINITY; 3];
        for v in self.positions.chunks_exact(3) {
            for k in 0..3 {
                min[k] = min[k].min(v[k]);
                max[k] = max[k].max(v[k]);
            }
        }
        Some((min, max))
    }

    /// Builds a render mesh from a kernel-output triangle mesh.
    ///
    /// Vertex normals are accumulated from incident triangle normals and
    /// renormalized. The kernel tessellation does not share vertices across
    /// topological faces, so accumulation never smooths over feature edges;
    /// a box comes out with exact per-face normals.
    pub fn from_triangle_mesh(mesh: &TriangleMesh) -> Self {
        let positions: Vec<Point3> = mesh.positions.iter().map(|p| Point3::from(*p)).collect();
        let triangles = &mesh.triangles;

        let mut normals = vec![Vector3::zeros(); positions.len()];
        for (i0, i1, i2) in triangles {
            let p0 = positions[*i0 as usize];
            let p1 = positions[*i1 as usize];
            let p2 = positions[*i2 as usize];

            // Cross product, unnormalized: the magnitude weights large
            // triangles more heavily in the accumulated vertex normal.
            let n = (p1 - p0).cross(&(p2 - p0));

            for &idx in &[*i0 as usize, *i1 as usize, *i2 as usize] {
                normals[idx] += n;
            }
        }

        let mut out = Self {
            positions: Vec::with_capacity(positions.len() * 3),
            normals: Vec::with_capacity(positions.len() * 3),
            indices: Vec::with_capacity(triangles.len() * 3),
        };

        for (p, n) in positions.iter().zip(&normals) {
            out.positions.push(p.x as f32);
            out.positions.push(p.y as f32);
            out.positions.push(p.z as f32);

            let n = if n.norm_squared() < 1e-24 {
                Vector3::z()
            } else {
                n.normalize()
            };
            out.normals.push(n.x as f32);
            out.normals.push(n.y as f32);
            out.normals.push(n.z as f32);
        }

        for (i0, i1, i2) in triangles {
            out.indices.push(*i0);
            out.indices.push(*i1);
            out.indices.push(*i2);
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::types::Point3D;

    fn unit_quad() -> TriangleMesh {
        let mut mesh = TriangleMesh::new();
        mesh.add_vertex(Point3D::new(0.0, 0.0, 0.0));
        mesh.add_vertex(Point3D::new(1.0, 0.0, 0.0));
        mesh.add_vertex(Point3D::new(1.0, 1.0, 0.0));
        mesh.add_vertex(Point3D::new(0.0, 1.0, 0.0));
        mesh.add_triangle(0, 1, 2);
        mesh.add_triangle(0, 2, 3);
        mesh
    }

    #[test]
    fn quad_normals_point_along_z() {
        let render = RenderMesh::from_triangle_mesh(&unit_quad());
        assert_eq!(render.vertex_count(), 4);
        assert_eq!(render.triangle_count(), 2);

        for n in render.normals.chunks_exact(3) {
            assert!(n[0].abs() < 1e-6);
            assert!(n[1].abs() < 1e-6);
            assert!((n[2] - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn bounding_box_covers_all_vertices() {
        let render = RenderMesh::from_triangle_mesh(&unit_quad());
        let (min, max) = render.bounding_box().unwrap();
        assert_eq!(min, [0.0, 0.0, 0.0]);
        assert_eq!(max, [1.0, 1.0, 0.0]);
    }

    #[test]
    fn empty_mesh_has_no_bounding_box() {
        let render = RenderMesh::new();
        assert!(render.is_empty());
        assert!(render.bounding_box().is_none());
    }
}
