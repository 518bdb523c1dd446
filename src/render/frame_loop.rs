use log::{error, info};
use winit::keyboard::KeyCode;

use super::driver::GraphicsDriver;
use super::geometry::Mesh;
use super::shaders::ShaderProgram;
use crate::config::RenderConfig;
use crate::utils::SurfaceError;
use crate::window::Surface;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Closed,
}

/// Draws the same program and mesh every frame until the window is asked
/// to close. Owns nothing: the caller releases the program and mesh after
/// the loop ends.
pub struct FrameLoop<'a> {
    program: &'a ShaderProgram,
    mesh: &'a Mesh,
    config: RenderConfig,
    exit_key: KeyCode,
    state: LoopState,
    frames: u64,
}

impl<'a> FrameLoop<'a> {
    pub fn new(
        program: &'a ShaderProgram,
        mesh: &'a Mesh,
        config: RenderConfig,
        exit_key: KeyCode,
    ) -> Self {
        Self {
            program,
            mesh,
            config,
            exit_key,
            state: LoopState::Running,
            frames: 0,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Frames presented so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// One iteration: check for close, draw, present, pump events.
    ///
    /// Once `Closed` is returned every later call is a no-op.
    pub fn step<S: Surface, D: GraphicsDriver>(
        &mut self,
        surface: &mut S,
        driver: &mut D,
    ) -> Result<LoopState, SurfaceError> {
        if self.state == LoopState::Closed {
            return Ok(LoopState::Closed);
        }

        if surface.is_key_pressed(self.exit_key) {
            surface.set_should_close(true);
        }
        if surface.should_close() {
            info!("Close requested after {} frames", self.frames);
            self.state = LoopState::Closed;
            return Ok(LoopState::Closed);
        }

        driver.clear(self.config.clear_color);
        self.program.set_used(driver);
        self.mesh.bind(driver);
        driver.draw_arrays(self.config.topology, 0, self.config.draw_vertex_count);

        if let Err(e) = surface.swap_buffers() {
            error!("Stopping frame loop: {}", e);
            self.state = LoopState::Closed;
            return Err(e);
        }
        self.frames += 1;

        surface.poll_events();
        Ok(LoopState::Running)
    }

    /// Steps until closed and returns the number of presented frames.
    pub fn run<S: Surface, D: GraphicsDriver>(
        &mut self,
        surface: &mut S,
        driver: &mut D,
    ) -> Result<u64, SurfaceError> {
        while self.step(surface, driver)? == LoopState::Running {}
        Ok(self.frames)
    }
}
