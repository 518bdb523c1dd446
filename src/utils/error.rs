use thiserror::Error;

use crate::assets::ShaderStage;

/// Failures that happen before the first frame and end the process.
#[derive(Debug, Error)]
pub enum InitError {
    #[error("Failed to initialize the window system: {0}")]
    WindowSystem(#[from] winit::error::EventLoopError),

    #[error("Failed to create window: {0}")]
    WindowCreation(String),

    #[error("Failed to create OpenGL context: {0}")]
    Context(#[from] glutin::error::Error),

    #[error("Failed to load OpenGL function pointers")]
    FunctionLoader,
}

#[derive(Debug, Error)]
pub enum ShaderError {
    #[error("{stage} shader compilation failed: {log}")]
    Compilation { stage: ShaderStage, log: String },

    #[error("Program linking failed: {0}")]
    Linking(String),

    #[error("Shader source contains an interior NUL byte at offset {0}")]
    Nul(usize),
}

#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("Failed to present frame: {0}")]
    Present(String),
}
