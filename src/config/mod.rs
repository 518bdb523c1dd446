pub mod core;
pub mod input;
pub mod rendering;
pub mod window;

pub use self::core::AppConfig;
pub use input::InputConfig;
pub use rendering::RenderConfig;
pub use window::{GlProfileKind, WindowConfig};
