use serde::{Deserialize, Serialize};

use super::{InputConfig, RenderConfig, WindowConfig};

/// Everything the program needs to know up front. The defaults are the
/// only values the binary ever runs with; there is no file or CLI layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub render: RenderConfig,
    pub input: InputConfig,
}

impl AppConfig {
    /// Renders the effective configuration for the startup debug dump.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
