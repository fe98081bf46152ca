//! Truck-based implementation of the geometry kernel.
//!
//! This module provides a CAD kernel implementation using the Truck library,
//! which is licensed under Apache-2.0 (MIT-compatible).

use super::types::*;
use super::{GeometryKernel, KernelOpError, KernelResult};

// Use truck's pre-exported types which come from cgmath64
use truck_meshalgo::tessellation::MeshableShape;
use truck_modeling::{builder, Point3, Solid, Vector3};

/// Truck-based CAD kernel implementation.
pub struct TruckKernel {
    /// Tessellation tolerance for mesh generation.
    pub tolerance: f64,
}

impl TruckKernel {
    pub fn new() -> Self {
        Self {
            tolerance: 0.01, // 0.01mm precision
        }
    }

    pub fn with_tolerance(tolerance: f64) -> Self {
        Self { tolerance }
    }
}

impl Default for TruckKernel {
    fn default() -> Self {
        Self::new()
    }
}

impl GeometryKernel for TruckKernel {
    type Solid = Solid;

    fn create_box(&self, width: f64, height: f64, depth: f64) -> KernelResult<Self::Solid> {
        let params = BoxParams::new(width, height, depth);
        if !params.is_valid() {
            return Err(KernelOpError::InvalidGeometry(format!(
                "Box dimensions must be finite and positive, got {width} x {height} x {depth}"
            )));
        }

        // Create a box using truck-modeling's builder.
        // Box is from (0,0,0) to (width, height, depth).
        let v = builder::vertex(Point3::new(0.0, 0.0, 0.0));
        let edge = builder::tsweep(&v, Vector3::new(width, 0.0, 0.0));
        let face = builder::tsweep(&edge, Vector3::new(0.0, height, 0.0));
        let solid = builder::tsweep(&face, Vector3::new(0.0, 0.0, depth));

        Ok(solid)
    }

    fn tessellate(&self, solid: &Self::Solid) -> KernelResult<TriangleMesh> {
        // Use truck-meshalgo to triangulate the solid.
        // triangulation returns a Solid<Point3, PolylineCurve, Option<PolygonMesh>>
        // where each face has an Option<PolygonMesh> instead of Surface.
        let meshed_solid = solid.triangulation(self.tolerance);

        // Collect all meshes from all faces into one unified mesh.
        let mut mesh = TriangleMesh::new();
        let mut vertex_offset: u32 = 0;

        for shell in meshed_solid.boundaries() {
            for face in shell.face_iter() {
                if let Some(polygon_mesh) = face.surface() {
                    let positions = polygon_mesh.positions();
                    for pos in positions.iter() {
                        mesh.add_vertex(Point3D::new(pos.x, pos.y, pos.z));
                    }

                    for tri in polygon_mesh.tri_faces() {
                        mesh.add_triangle(
                            vertex_offset + tri[0].pos as u32,
                            vertex_offset + tri[1].pos as u32,
                            vertex_offset + tri[2].pos as u32,
                        );
                    }

                    vertex_offset += positions.len() as u32;
                }
            }
        }

        if mesh.triangles.is_empty() {
            return Err(KernelOpError::TessellationFailed(
                "Triangulation produced no faces".into(),
            ));
        }

        Ok(mesh)
    }
}
