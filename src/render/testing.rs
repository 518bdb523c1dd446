//! In-memory driver used by the unit tests.

use std::collections::HashMap;
use std::ffi::CStr;

use glam::Vec4;

use super::driver::{
    BufferId, GraphicsDriver, PrimitiveTopology, ProgramId, ShaderId, VertexArrayId,
    VertexLayout,
};
use crate::assets::ShaderStage;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    CreateShader(ShaderStage, ShaderId),
    ShaderSource(ShaderId),
    CompileShader(ShaderId),
    DeleteShader(ShaderId),
    CreateProgram(ProgramId),
    AttachShader(ProgramId, ShaderId),
    LinkProgram(ProgramId),
    UseProgram(ProgramId),
    DeleteProgram(ProgramId),
    CreateVertexBuffer(BufferId, usize),
    DeleteBuffer(BufferId),
    CreateVertexArray(VertexArrayId, BufferId, VertexLayout),
    BindVertexArray(VertexArrayId),
    DeleteVertexArray(VertexArrayId),
    Viewport(i32, i32),
    Clear(Vec4),
    DrawArrays(PrimitiveTopology, i32, i32),
}

/// Accepts a source when its braces balance and it declares `main`, which
/// is enough to tell the fixtures apart.
pub struct RecordingDriver {
    pub calls: Vec<Call>,
    pub fail_link: bool,
    /// Info log handed out for every failure, before capping.
    pub failure_log: Option<String>,
    next_id: u32,
    sources: HashMap<ShaderId, String>,
    compiled: HashMap<ShaderId, bool>,
    attached: HashMap<ProgramId, Vec<ShaderId>>,
    linked: HashMap<ProgramId, bool>,
}

impl RecordingDriver {
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            fail_link: false,
            failure_log: None,
            next_id: 1,
            sources: HashMap::new(),
            compiled: HashMap::new(),
            attached: HashMap::new(),
            linked: HashMap::new(),
        }
    }

    fn next(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn count(&self, matches: impl Fn(&Call) -> bool) -> usize {
        self.calls.iter().filter(|c| matches(c)).count()
    }

    pub fn draws(&self) -> usize {
        self.count(|c| matches!(c, Call::DrawArrays(..)))
    }

    fn accepts(source: &str) -> bool {
        let opened = source.matches('{').count();
        let closed = source.matches('}').count();
        opened == closed && source.contains("void main()")
    }

    fn log_for(&self, default: String, capacity: usize) -> String {
        let mut log = self.failure_log.clone().unwrap_or(default);
        log.truncate(capacity.min(log.len()));
        log
    }
}

impl GraphicsDriver for RecordingDriver {
    fn create_shader(&mut self, stage: ShaderStage) -> ShaderId {
        let id = ShaderId(self.next());
        self.calls.push(Call::CreateShader(stage, id));
        id
    }

    fn shader_source(&mut self, shader: ShaderId, source: &CStr) {
        self.sources
            .insert(shader, source.to_string_lossy().into_owned());
        self.calls.push(Call::ShaderSource(shader));
    }

    fn compile_shader(&mut self, shader: ShaderId) {
        let ok = self
            .sources
            .get(&shader)
            .map(|s| Self::accepts(s))
            .unwrap_or(false);
        self.compiled.insert(shader, ok);
        self.calls.push(Call::CompileShader(shader));
    }

    fn shader_compile_status(&self, shader: ShaderId) -> bool {
        self.compiled.get(&shader).copied().unwrap_or(false)
    }

    fn shader_info_log(&self, shader: ShaderId, capacity: usize) -> String {
        if self.shader_compile_status(shader) {
            return String::new();
        }
        self.log_for(
            "0:6(1): error: syntax error, unexpected end of file".to_string(),
            capacity,
        )
    }

    fn delete_shader(&mut self, shader: ShaderId) {
        self.calls.push(Call::DeleteShader(shader));
    }

    fn create_program(&mut self) -> ProgramId {
        let id = ProgramId(self.next());
        self.calls.push(Call::CreateProgram(id));
        id
    }

    fn attach_shader(&mut self, program: ProgramId, shader: ShaderId) {
        self.attached.entry(program).or_default().push(shader);
        self.calls.push(Call::AttachShader(program, shader));
    }

    fn link_program(&mut self, program: ProgramId) {
        let shaders = self.attached.get(&program).cloned().unwrap_or_default();
        let ok = !self.fail_link
            && shaders.len() == 2
            && shaders.iter().all(|s| self.shader_compile_status(*s));
        self.linked.insert(program, ok);
        self.calls.push(Call::LinkProgram(program));
    }

    fn program_link_status(&self, program: ProgramId) -> bool {
        self.linked.get(&program).copied().unwrap_or(false)
    }

    fn program_info_log(&self, program: ProgramId, capacity: usize) -> String {
        if self.program_link_status(program) {
            return String::new();
        }
        self.log_for(
            "error: linking with uncompiled/unspecialized shader".to_string(),
            capacity,
        )
    }

    fn use_program(&mut self, program: ProgramId) {
        self.calls.push(Call::UseProgram(program));
    }

    fn delete_program(&mut self, program: ProgramId) {
        self.calls.push(Call::DeleteProgram(program));
    }

    fn create_vertex_buffer(&mut self, data: &[u8]) -> BufferId {
        let id = BufferId(self.next());
        self.calls.push(Call::CreateVertexBuffer(id, data.len()));
        id
    }

    fn delete_buffer(&mut self, buffer: BufferId) {
        self.calls.push(Call::DeleteBuffer(buffer));
    }

    fn create_vertex_array(&mut self, buffer: BufferId, layout: VertexLayout) -> VertexArrayId {
        let id = VertexArrayId(self.next());
        self.calls.push(Call::CreateVertexArray(id, buffer, layout));
        id
    }

    fn bind_vertex_array(&mut self, vertex_array: VertexArrayId) {
        self.calls.push(Call::BindVertexArray(vertex_array));
    }

    fn delete_vertex_array(&mut self, vertex_array: VertexArrayId) {
        self.calls.push(Call::DeleteVertexArray(vertex_array));
    }

    fn viewport(&mut self, width: i32, height: i32) {
        self.calls.push(Call::Viewport(width, height));
    }

    fn clear(&mut self, color: Vec4) {
        self.calls.push(Call::Clear(color));
    }

    fn draw_arrays(&mut self, topology: PrimitiveTopology, first: i32, count: i32) {
        self.calls.push(Call::DrawArrays(topology, first, count));
    }
}
