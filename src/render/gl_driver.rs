use std::ffi::CStr;
use std::ptr;

use gl::types::*;
use glam::Vec4;

use super::driver::{
    BufferId, GraphicsDriver, PrimitiveTopology, ProgramId, ShaderId, VertexArrayId,
    VertexLayout,
};
use crate::assets::ShaderStage;
use crate::utils::InitError;

/// [`GraphicsDriver`] backed by the global `gl` function table.
///
/// Only one exists per process, created after the context is made current.
pub struct GlDriver {
    _private: (),
}

impl GlDriver {
    /// Loads every GL entry point through `loader` and checks that the ones
    /// this program calls resolved.
    pub fn load<F>(loader: F) -> Result<Self, InitError>
    where
        F: FnMut(&'static str) -> *const std::ffi::c_void,
    {
        gl::load_with(loader);

        let loaded = gl::CreateShader::is_loaded()
            && gl::CreateProgram::is_loaded()
            && gl::GenBuffers::is_loaded()
            && gl::GenVertexArrays::is_loaded()
            && gl::DrawArrays::is_loaded();

        if !loaded {
            return Err(InitError::FunctionLoader);
        }

        Ok(Self { _private: () })
    }

    fn read_log(capacity: usize, fill: impl FnOnce(GLsizei, *mut GLsizei, *mut GLchar)) -> String {
        let mut buffer: Vec<u8> = vec![0; capacity];
        let mut written: GLsizei = 0;
        fill(capacity as GLsizei, &mut written, buffer.as_mut_ptr() as *mut GLchar);
        buffer.truncate(written.max(0) as usize);
        String::from_utf8_lossy(&buffer).into_owned()
    }
}

impl GraphicsDriver for GlDriver {
    fn create_shader(&mut self, stage: ShaderStage) -> ShaderId {
        ShaderId(unsafe { gl::CreateShader(stage.as_gl()) })
    }

    fn shader_source(&mut self, shader: ShaderId, source: &CStr) {
        unsafe {
            gl::ShaderSource(shader.0, 1, &source.as_ptr(), ptr::null());
        }
    }

    fn compile_shader(&mut self, shader: ShaderId) {
        unsafe {
            gl::CompileShader(shader.0);
        }
    }

    fn shader_compile_status(&self, shader: ShaderId) -> bool {
        let mut success = 0;
        unsafe {
            gl::GetShaderiv(shader.0, gl::COMPILE_STATUS, &mut success);
        }
        success != 0
    }

    fn shader_info_log(&self, shader: ShaderId, capacity: usize) -> String {
        Self::read_log(capacity, |size, written, buffer| unsafe {
            gl::GetShaderInfoLog(shader.0, size, written, buffer);
        })
    }

    fn delete_shader(&mut self, shader: ShaderId) {
        unsafe {
            gl::DeleteShader(shader.0);
        }
    }

    fn create_program(&mut self) -> ProgramId {
        ProgramId(unsafe { gl::CreateProgram() })
    }

    fn attach_shader(&mut self, program: ProgramId, shader: ShaderId) {
        unsafe {
            gl::AttachShader(program.0, shader.0);
        }
    }

    fn link_program(&mut self, program: ProgramId) {
        unsafe {
            gl::LinkProgram(program.0);
        }
    }

    fn program_link_status(&self, program: ProgramId) -> bool {
        let mut success = 0;
        unsafe {
            gl::GetProgramiv(program.0, gl::LINK_STATUS, &mut success);
        }
        success != 0
    }

    fn program_info_log(&self, program: ProgramId, capacity: usize) -> String {
        Self::read_log(capacity, |size, written, buffer| unsafe {
            gl::GetProgramInfoLog(program.0, size, written, buffer);
        })
    }

    fn use_program(&mut self, program: ProgramId) {
        unsafe {
            gl::UseProgram(program.0);
        }
    }

    fn delete_program(&mut self, program: ProgramId) {
        unsafe {
            gl::DeleteProgram(program.0);
        }
    }

    fn create_vertex_buffer(&mut self, data: &[u8]) -> BufferId {
        let mut vbo = 0;
        unsafe {
            gl::GenBuffers(1, &mut vbo);
            gl::BindBuffer(gl::ARRAY_BUFFER, vbo);
            gl::BufferData(
                gl::ARRAY_BUFFER,
                data.len() as GLsizeiptr,
                data.as_ptr() as *const _,
                gl::STATIC_DRAW,
            );
        }
        BufferId(vbo)
    }

    fn delete_buffer(&mut self, buffer: BufferId) {
        unsafe {
            gl::DeleteBuffers(1, &buffer.0);
        }
    }

    fn create_vertex_array(&mut self, buffer: BufferId, layout: VertexLayout) -> VertexArrayId {
        let mut vao = 0;
        unsafe {
            gl::GenVertexArrays(1, &mut vao);
            gl::BindVertexArray(vao);
            gl::BindBuffer(gl::ARRAY_BUFFER, buffer.0);
            gl::VertexAttribPointer(
                layout.location,
                layout.components,
                gl::FLOAT,
                gl::FALSE,
                layout.stride,
                layout.offset as *const _,
            );
            gl::EnableVertexAttribArray(layout.location);
        }
        VertexArrayId(vao)
    }

    fn bind_vertex_array(&mut self, vertex_array: VertexArrayId) {
        unsafe {
            gl::BindVertexArray(vertex_array.0);
        }
    }

    fn delete_vertex_array(&mut self, vertex_array: VertexArrayId) {
        unsafe {
            gl::DeleteVertexArrays(1, &vertex_array.0);
        }
    }

    fn viewport(&mut self, width: i32, height: i32) {
        unsafe {
            gl::Viewport(0, 0, width, height);
        }
    }

    fn clear(&mut self, color: Vec4) {
        unsafe {
            gl::ClearColor(color.x, color.y, color.z, color.w);
            gl::Clear(gl::COLOR_BUFFER_BIT);
        }
    }

    fn draw_arrays(&mut self, topology: PrimitiveTopology, first: i32, count: i32) {
        unsafe {
            gl::DrawArrays(topology.as_gl(), first, count);
        }
    }
}
