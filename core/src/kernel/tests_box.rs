// Box construction and tessellation through the kernel trait.

use super::{default_kernel, GeometryKernel, KernelOpError};
use crate::geometry::ApproxEq;

#[test]
fn box_solid_has_one_shell_with_six_faces() {
    let kernel = default_kernel();
    let solid = kernel.create_box(10.0, 20.0, 30.0).expect("box creation failed");

    assert_eq!(solid.boundaries().len(), 1);
    let shell = &solid.boundaries()[0];
    assert_eq!(shell.face_iter().count(), 6);
}

#[test]
fn box_tessellation_spans_exact_dimensions() {
    let kernel = default_kernel();
    let solid = kernel.create_box(10.0, 20.0, 30.0).expect("box creation failed");
    let mesh = kernel.tessellate(&solid).expect("tessellation failed");

    assert!(!mesh.positions.is_empty());
    assert!(!mesh.triangles.is_empty());

    let mut min = [f64::INFINITY; 3];
    let mut max = [f64::NEG_INFINITY; 3];
    for p in &mesh.positions {
        for (k, c) in p.to_array().iter().enumerate() {
            min[k] = min[k].min(*c);
            max[k] = max[k].max(*c);
        }
    }

    let expect = [10.0, 20.0, 30.0];
    for k in 0..3 {
        assert!(min[k].approx_eq(&0.0), "min[{}] = {}", k, min[k]);
        assert!(max[k].approx_eq(&expect[k]), "max[{}] = {}", k, max[k]);
    }
}

#[test]
fn box_tessellation_indices_are_in_range() {
    let kernel = default_kernel();
    let solid = kernel.create_box(1.0, 2.0, 3.0).expect("box creation failed");
    let mesh = kernel.tessellate(&solid).expect("tessellation failed");

    let n = mesh.positions.len() as u32;
    for (i0, i1, i2) in &mesh.triangles {
        assert!(*i0 < n && *i1 < n && *i2 < n);
    }
}

#[test]
fn box_dimensions_must_be_positive_and_finite() {
    let kernel = default_kernel();

    for dims in [
        (0.0, 20.0, 30.0),
        (10.0, -1.0, 30.0),
        (10.0, 20.0, f64::NAN),
        (f64::INFINITY, 20.0, 30.0),
    ] {
        let result = kernel.create_box(dims.0, dims.1, dims.2);
        assert!(
            matches!(result, Err(KernelOpError::InvalidGeometry(_))),
            "expected InvalidGeometry for {:?}",
            dims
        );
    }
}
