use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    pub fn as_gl(self) -> gl::types::GLenum {
        match self {
            Self::Vertex => gl::VERTEX_SHADER,
            Self::Fragment => gl::FRAGMENT_SHADER,
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vertex => f.write_str("vertex"),
            Self::Fragment => f.write_str("fragment"),
        }
    }
}

/// GLSL text tagged with the pipeline stage it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShaderSource {
    pub stage: ShaderStage,
    pub text: &'static str,
}

impl ShaderSource {
    pub const fn vertex(text: &'static str) -> Self {
        Self { stage: ShaderStage::Vertex, text }
    }

    pub const fn fragment(text: &'static str) -> Self {
        Self { stage: ShaderStage::Fragment, text }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShaderSources {
    pub vertex: ShaderSource,
    pub fragment: ShaderSource,
}

/// Position passthrough, `vec3` at attribute location 0.
pub const TRIANGLE_VERTEX: ShaderSource =
    ShaderSource::vertex(include_str!("shaders/triangle.vert"));

/// Opaque orange.
pub const TRIANGLE_FRAGMENT: ShaderSource =
    ShaderSource::fragment(include_str!("shaders/triangle.frag"));

pub const TRIANGLE: ShaderSources = ShaderSources {
    vertex: TRIANGLE_VERTEX,
    fragment: TRIANGLE_FRAGMENT,
};
