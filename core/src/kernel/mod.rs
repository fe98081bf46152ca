//! Kernel abstraction layer for CAD geometry operations.
//!
//! This module provides a trait-based abstraction over the underlying CAD
//! kernel, allowing for swapping implementations (e.g., Truck → custom
//! kernel) without changing the rest of the codebase.

pub mod types;
mod truck;

#[cfg(test)]
mod tests_box;

pub use truck::TruckKernel;
pub use types::*;

use thiserror::Error;

/// Errors that can occur during kernel operations.
#[derive(Debug, Error, Clone)]
pub enum KernelOpError {
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("Operation failed: {0}")]
    OperationFailed(String),

    #[error("Tessellation failed: {0}")]
    TessellationFailed(String),
}

/// Result type for kernel operations.
pub type KernelResult<T> = Result<T, KernelOpError>;

/// Abstract interface for CAD kernel geometry operations.
///
/// This trait defines the operations needed by the viewer, abstracting
/// over the specific kernel implementation.
pub trait GeometryKernel: Send + Sync {
    /// The kernel's internal solid representation.
    type Solid;

    /// Create a box solid spanning `[0,width] × [0,height] × [0,depth]`.
    ///
    /// All dimensions must be finite and strictly positive.
    fn create_box(&self, width: f64, height: f64, depth: f64) -> KernelResult<Self::Solid>;

    /// Convert a solid to a triangle mesh for rendering.
    fn tessellate(&self, solid: &Self::Solid) -> KernelResult<TriangleMesh>;
}

/// Get the default kernel implementation.
pub fn default_kernel() -> TruckKernel {
    TruckKernel::new()
}
