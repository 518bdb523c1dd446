pub mod shaders;

pub use shaders::{ShaderSource, ShaderSources, ShaderStage};
