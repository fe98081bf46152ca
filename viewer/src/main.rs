mod app;
mod camera;
mod display;
mod gpu;
mod render;

use tracing::info;

use brepview_core::geometry::RenderMesh;
use brepview_core::kernel::{default_kernel, GeometryKernel};

// Box dimensions, fixed for this demo.
const BOX_WIDTH: f64 = 10.0;
const BOX_HEIGHT: f64 = 20.0;
const BOX_DEPTH: f64 = 30.0;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let kernel = default_kernel();
    let solid = kernel.create_box(BOX_WIDTH, BOX_HEIGHT, BOX_DEPTH)?;
    let mesh = kernel.tessellate(&solid)?;
    let render_mesh = RenderMesh::from_triangle_mesh(&mesh);
    info!(
        "tessellated {}x{}x{} box: {} vertices, {} triangles",
        BOX_WIDTH,
        BOX_HEIGHT,
        BOX_DEPTH,
        render_mesh.vertex_count(),
        render_mesh.triangle_count()
    );

    app::run(render_mesh)
}
