pub mod geometry;
pub mod kernel;

pub fn version() -> &'static str {
    "0.1.0"
}
