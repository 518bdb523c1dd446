pub mod driver;
pub mod frame_loop;
pub mod geometry;
pub mod gl_driver;
pub mod shaders;
#[cfg(test)]
pub(crate) mod testing;

pub use driver::{GraphicsDriver, PrimitiveTopology};
pub use frame_loop::{FrameLoop, LoopState};
pub use geometry::Mesh;
pub use gl_driver::GlDriver;
pub use shaders::ShaderProgram;
