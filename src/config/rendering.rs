use glam::Vec4;
use serde::{Deserialize, Serialize};

use crate::render::driver::PrimitiveTopology;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Passed to the driver untouched. The default is out of the 0..1 range
    /// and gets clamped by the driver to yellow.
    pub clear_color: Vec4,
    pub topology: PrimitiveTopology,
    /// Vertices requested per draw call. The default of 6 is larger than the
    /// 3 uploaded vertices.
    pub draw_vertex_count: i32,
    /// Treat a failed shader build as a fatal init error instead of logging
    /// it and drawing with the broken program.
    pub strict_shaders: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            clear_color: Vec4::new(255.0, 255.0, 0.0, 1.0),
            topology: PrimitiveTopology::Triangles,
            draw_vertex_count: 6,
            strict_shaders: false,
        }
    }
}

impl RenderConfig {
    pub fn clear_color_normalized(&self) -> bool {
        self.clear_color
            .to_array()
            .iter()
            .all(|c| (0.0..=1.0).contains(c))
    }

    /// Same config with the draw count matched to the uploaded geometry.
    pub fn fitted_to(self, vertex_count: usize) -> Self {
        Self {
            draw_vertex_count: vertex_count as i32,
            ..self
        }
    }
}
