// shaders.rs - Shader compilation and program linking

use std::ffi::CString;

use log::{debug, error};

use super::driver::{GraphicsDriver, ProgramId, ShaderId};
use crate::assets::{ShaderSource, ShaderSources, ShaderStage};
use crate::utils::ShaderError;

/// Upper bound on the diagnostic text kept from the driver, in bytes.
/// Longer logs are cut off.
pub const INFO_LOG_CAPACITY: usize = 512;

/// Outcome of one compile or link step. Never changed after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildStatus {
    pub success: bool,
    pub log: String,
}

impl BuildStatus {
    fn ok() -> Self {
        Self {
            success: true,
            log: String::new(),
        }
    }

    fn failed(mut log: String) -> Self {
        truncate_to_boundary(&mut log, INFO_LOG_CAPACITY);
        Self {
            success: false,
            log,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledShader {
    pub stage: ShaderStage,
    pub id: ShaderId,
    pub status: BuildStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkedProgram {
    pub id: ProgramId,
    pub status: BuildStatus,
}

/// A linked program together with the result of every step that built it.
///
/// The handle exists even when a step failed; [`ShaderProgram::is_usable`]
/// says whether drawing with it means anything.
#[derive(Debug)]
pub struct ShaderProgram {
    id: ProgramId,
    pub vertex: BuildStatus,
    pub fragment: BuildStatus,
    pub link: BuildStatus,
}

impl ShaderProgram {
    /// Compiles both sources, links them and releases the shader objects.
    ///
    /// Failures are logged and recorded, never returned: the link is
    /// attempted even when a stage failed to compile.
    pub fn build<D: GraphicsDriver>(driver: &mut D, sources: &ShaderSources) -> Self {
        let vertex = Self::compile(driver, sources.vertex);
        let fragment = Self::compile(driver, sources.fragment);

        for shader in [&vertex, &fragment] {
            if !shader.status.success {
                error!(
                    "{} shader compilation failed:\n{}",
                    shader.stage, shader.status.log
                );
            }
        }

        let program = Self::link(driver, vertex.id, fragment.id);
        if !program.status.success {
            error!("Shader program linking failed:\n{}", program.status.log);
        }

        Self::release(driver, &[vertex.id, fragment.id]);

        debug!(
            "Built shader program {:?} (vertex: {}, fragment: {}, link: {})",
            program.id, vertex.status.success, fragment.status.success, program.status.success
        );

        Self {
            id: program.id,
            vertex: vertex.status,
            fragment: fragment.status,
            link: program.status,
        }
    }

    /// Returns the shader handle whether or not compilation succeeded.
    pub fn compile<D: GraphicsDriver>(driver: &mut D, source: ShaderSource) -> CompiledShader {
        let id = driver.create_shader(source.stage);

        let text = match CString::new(source.text) {
            Ok(text) => text,
            Err(e) => {
                return CompiledShader {
                    stage: source.stage,
                    id,
                    status: BuildStatus::failed(ShaderError::Nul(e.nul_position()).to_string()),
                };
            }
        };

        driver.shader_source(id, &text);
        driver.compile_shader(id);

        let status = if driver.shader_compile_status(id) {
            BuildStatus::ok()
        } else {
            BuildStatus::failed(driver.shader_info_log(id, INFO_LOG_CAPACITY))
        };

        CompiledShader {
            stage: source.stage,
            id,
            status,
        }
    }

    /// Leaves both shaders alive; see [`ShaderProgram::release`].
    pub fn link<D: GraphicsDriver>(
        driver: &mut D,
        vertex: ShaderId,
        fragment: ShaderId,
    ) -> LinkedProgram {
        let id = driver.create_program();
        driver.attach_shader(id, vertex);
        driver.attach_shader(id, fragment);
        driver.link_program(id);

        let status = if driver.program_link_status(id) {
            BuildStatus::ok()
        } else {
            BuildStatus::failed(driver.program_info_log(id, INFO_LOG_CAPACITY))
        };

        LinkedProgram { id, status }
    }

    pub fn release<D: GraphicsDriver>(driver: &mut D, shaders: &[ShaderId]) {
        for shader in shaders {
            driver.delete_shader(*shader);
        }
    }

    pub fn id(&self) -> ProgramId {
        self.id
    }

    pub fn is_usable(&self) -> bool {
        self.vertex.success && self.fragment.success && self.link.success
    }

    /// First failure in build order, for callers that want to stop on it.
    pub fn check(&self) -> Result<(), ShaderError> {
        if !self.vertex.success {
            return Err(ShaderError::Compilation {
                stage: ShaderStage::Vertex,
                log: self.vertex.log.clone(),
            });
        }
        if !self.fragment.success {
            return Err(ShaderError::Compilation {
                stage: ShaderStage::Fragment,
                log: self.fragment.log.clone(),
            });
        }
        if !self.link.success {
            return Err(ShaderError::Linking(self.link.log.clone()));
        }
        Ok(())
    }

    pub fn set_used<D: GraphicsDriver>(&self, driver: &mut D) {
        driver.use_program(self.id);
    }

    pub fn delete<D: GraphicsDriver>(self, driver: &mut D) {
        driver.delete_program(self.id);
    }
}

fn truncate_to_boundary(text: &mut String, max: usize) {
    if text.len() <= max {
        return;
    }
    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    text.truncate(end);
}
