use glam::Vec3;
use log::debug;

use super::driver::{BufferId, GraphicsDriver, VertexArrayId, VertexLayout};

/// The single triangle, in normalized device coordinates.
pub const TRIANGLE_VERTICES: [Vec3; 3] = [
    Vec3::new(-0.5, -0.5, 0.0),
    Vec3::new(0.5, -0.5, 0.0),
    Vec3::new(0.0, 0.5, 0.0),
];

/// Tightly packed `vec3` positions at attribute location 0.
pub const POSITION_LAYOUT: VertexLayout = VertexLayout {
    location: 0,
    components: 3,
    stride: std::mem::size_of::<Vec3>() as i32,
    offset: 0,
};

/// GPU copy of a vertex list plus the vertex array describing it.
#[derive(Debug)]
pub struct Mesh {
    pub vbo: BufferId,
    pub vao: VertexArrayId,
    pub vertex_count: usize,
}

impl Mesh {
    pub fn upload<D: GraphicsDriver>(driver: &mut D, vertices: &[Vec3]) -> Self {
        let vbo = driver.create_vertex_buffer(bytemuck::cast_slice(vertices));
        let vao = driver.create_vertex_array(vbo, POSITION_LAYOUT);

        debug!(
            "Uploaded {} vertices to buffer {:?} (vertex array {:?})",
            vertices.len(),
            vbo,
            vao
        );

        Self {
            vbo,
            vao,
            vertex_count: vertices.len(),
        }
    }

    pub fn bind<D: GraphicsDriver>(&self, driver: &mut D) {
        driver.bind_vertex_array(self.vao);
    }

    /// Vertex array first, then the buffer it reads from.
    pub fn delete<D: GraphicsDriver>(self, driver: &mut D) {
        driver.delete_vertex_array(self.vao);
        driver.delete_buffer(self.vbo);
    }
}
