use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GlProfileKind {
    Core,
    Compatibility,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub gl_major: u8,
    pub gl_minor: u8,
    pub profile: GlProfileKind,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Hello World".to_string(),
            width: 800,
            height: 600,
            gl_major: 4,
            gl_minor: 5,
            profile: GlProfileKind::Core,
        }
    }
}
