use gl::types::*;
use glam::Vec4;
use serde::{Deserialize, Serialize};

use crate::assets::ShaderStage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShaderId(pub GLuint);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProgramId(pub GLuint);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BufferId(pub GLuint);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VertexArrayId(pub GLuint);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrimitiveTopology {
    Points,
    Lines,
    Triangles,
    TriangleStrip,
    TriangleFan,
}

impl PrimitiveTopology {
    pub fn as_gl(self) -> GLenum {
        match self {
            Self::Points => gl::POINTS,
            Self::Lines => gl::LINES,
            Self::Triangles => gl::TRIANGLES,
            Self::TriangleStrip => gl::TRIANGLE_STRIP,
            Self::TriangleFan => gl::TRIANGLE_FAN,
        }
    }
}

/// How the bytes of one vertex buffer map onto a float attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexLayout {
    pub location: GLuint,
    pub components: GLint,
    pub stride: GLsizei,
    pub offset: usize,
}

/// The graphics calls the shader builder and frame loop rely on.
///
/// Handles are plain ids; nothing here owns GPU memory, so every
/// `create_*` must be paired with the matching `delete_*` by the caller.
pub trait GraphicsDriver {
    fn create_shader(&mut self, stage: ShaderStage) -> ShaderId;
    fn shader_source(&mut self, shader: ShaderId, source: &std::ffi::CStr);
    fn compile_shader(&mut self, shader: ShaderId);
    fn shader_compile_status(&self, shader: ShaderId) -> bool;
    /// At most `capacity` bytes of the shader's info log.
    fn shader_info_log(&self, shader: ShaderId, capacity: usize) -> String;
    fn delete_shader(&mut self, shader: ShaderId);

    fn create_program(&mut self) -> ProgramId;
    fn attach_shader(&mut self, program: ProgramId, shader: ShaderId);
    fn link_program(&mut self, program: ProgramId);
    fn program_link_status(&self, program: ProgramId) -> bool;
    /// At most `capacity` bytes of the program's info log.
    fn program_info_log(&self, program: ProgramId, capacity: usize) -> String;
    fn use_program(&mut self, program: ProgramId);
    fn delete_program(&mut self, program: ProgramId);

    /// Creates a buffer and fills it with `data` for static drawing.
    fn create_vertex_buffer(&mut self, data: &[u8]) -> BufferId;
    fn delete_buffer(&mut self, buffer: BufferId);

    /// Creates a vertex array that reads `buffer` through `layout`.
    fn create_vertex_array(&mut self, buffer: BufferId, layout: VertexLayout) -> VertexArrayId;
    fn bind_vertex_array(&mut self, vertex_array: VertexArrayId);
    fn delete_vertex_array(&mut self, vertex_array: VertexArrayId);

    fn viewport(&mut self, width: i32, height: i32);
    fn clear(&mut self, color: Vec4);
    fn draw_arrays(&mut self, topology: PrimitiveTopology, first: i32, count: i32);
}
