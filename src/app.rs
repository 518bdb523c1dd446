use anyhow::{Context, Result};
use log::{error, info, warn};

use crate::assets::shaders;
use crate::config::{AppConfig, WindowConfig};
use crate::render::geometry::TRIANGLE_VERTICES;
use crate::render::{FrameLoop, GraphicsDriver, Mesh, ShaderProgram};
use crate::utils::InitError;
use crate::window::Surface;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = -1;

/// Runs the whole program and returns the process exit code.
///
/// `init` opens the window and hands back the surface and driver to use.
/// When it fails nothing else runs and the code is [`EXIT_FAILURE`].
pub fn run<S, D, F>(config: &AppConfig, init: F) -> i32
where
    S: Surface,
    D: GraphicsDriver,
    F: FnOnce(&WindowConfig) -> Result<(S, D), InitError>,
{
    match init(&config.window) {
        Ok((mut surface, mut driver)) => run_with(config, &mut surface, &mut driver),
        Err(e) => {
            error!("{}", e);
            EXIT_FAILURE
        }
    }
}

/// Builds the program, uploads the triangle and renders until closed on an
/// already initialized surface and driver.
pub fn run_with<S: Surface, D: GraphicsDriver>(
    config: &AppConfig,
    surface: &mut S,
    driver: &mut D,
) -> i32 {
    match render(config, surface, driver) {
        Ok(frames) => {
            info!("Window closed after {} frames", frames);
            EXIT_SUCCESS
        }
        Err(e) => {
            error!("{:#}", e);
            EXIT_FAILURE
        }
    }
}

fn render<S: Surface, D: GraphicsDriver>(
    config: &AppConfig,
    surface: &mut S,
    driver: &mut D,
) -> Result<u64> {
    driver.viewport(config.window.width as i32, config.window.height as i32);

    let program = ShaderProgram::build(driver, &shaders::TRIANGLE);
    if config.render.strict_shaders {
        if let Err(e) = program.check() {
            program.delete(driver);
            return Err(e).context("Strict shader mode rejected the program");
        }
    }

    let mesh = Mesh::upload(driver, &TRIANGLE_VERTICES);
    warn_on_suspicious_config(config, &mesh);

    let result = FrameLoop::new(&program, &mesh, config.render, config.input.exit_key)
        .run(surface, driver);

    mesh.delete(driver);
    program.delete(driver);

    result.context("Frame loop stopped")
}

fn warn_on_suspicious_config(config: &AppConfig, mesh: &Mesh) {
    let requested = config.render.draw_vertex_count;
    if requested < 0 || requested as usize > mesh.vertex_count {
        warn!(
            "Draw call requests {} vertices but only {} were uploaded",
            requested, mesh.vertex_count
        );
    }
    if !config.render.clear_color_normalized() {
        warn!(
            "Clear color {:?} is outside 0..1 and will be clamped by the driver",
            config.render.clear_color.to_array()
        );
    }
}
