pub mod app;
pub mod assets;
pub mod config;
pub mod render;
pub mod utils;
pub mod window;

// Re-export commonly used types
pub use config::AppConfig;
pub use render::{FrameLoop, GlDriver, GraphicsDriver, Mesh, ShaderProgram};
pub use utils::error::{InitError, ShaderError, SurfaceError};
pub use window::{GlWindow, Surface};
