use serde::{Deserialize, Serialize};
use winit::keyboard::KeyCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputConfig {
    /// Pressing this key sets the window's close request.
    pub exit_key: KeyCode,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            exit_key: KeyCode::Escape,
        }
    }
}
