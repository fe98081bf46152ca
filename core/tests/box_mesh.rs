use brepview_core::geometry::RenderMesh;
use brepview_core::kernel::{default_kernel, GeometryKernel};

#[test]
fn box_render_mesh_is_gpu_ready() {
    let kernel = default_kernel();
    let solid = kernel.create_box(10.0, 20.0, 30.0).unwrap();
    let mesh = kernel.tessellate(&solid).unwrap();
    let render = RenderMesh::from_triangle_mesh(&mesh);

    // Buffer lengths must agree: one normal per position, index triples.
    assert_eq!(render.positions.len(), render.normals.len());
    assert_eq!(render.positions.len() % 3, 0);
    assert_eq!(render.indices.len() % 3, 0);
    assert_eq!(render.triangle_count(), mesh.triangles.len());

    let vertex_count = render.vertex_count() as u32;
    assert!(render.indices.iter().all(|i| *i < vertex_count));

    let (min, max) = render.bounding_box().unwrap();
    assert!(min.iter().all(|c| c.abs() < 1e-4));
    for (c, expect) in max.iter().zip([10.0f32, 20.0, 30.0]) {
        assert!((c - expect).abs() < 1e-3, "max {} vs {}", c, expect);
    }
}

#[test]
fn box_normals_are_unit_and_axis_aligned() {
    let kernel = default_kernel();
    let solid = kernel.create_box(5.0, 5.0, 5.0).unwrap();
    let mesh = kernel.tessellate(&solid).unwrap();
    let render = RenderMesh::from_triangle_mesh(&mesh);

    for n in render.normals.chunks_exact(3) {
        let len = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
        assert!((len - 1.0).abs() < 1e-4, "normal length {}", len);

        // A box face normal points along exactly one axis.
        let on_axis = n.iter().filter(|c| (c.abs() - 1.0).abs() < 1e-3).count();
        let off_axis = n.iter().filter(|c| c.abs() < 1e-3).count();
        assert_eq!(on_axis, 1, "normal {:?} not axis-aligned", n);
        assert_eq!(off_axis, 2, "normal {:?} not axis-aligned", n);
    }
}
