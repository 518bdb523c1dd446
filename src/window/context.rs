use std::ffi::CString;
use std::ptr;
use std::time::Duration;

use glutin::{
    config::ConfigTemplateBuilder,
    context::{ContextApi, ContextAttributesBuilder, GlProfile, PossiblyCurrentContext, Version},
    display::{GetGlDisplay, GlDisplay},
    prelude::*,
    surface::{Surface as GlutinSurface, WindowSurface},
};
use glutin_winit::{DisplayBuilder, GlWindow as _};
use log::{debug, info};
use raw_window_handle::HasRawWindowHandle;
use winit::{
    dpi::LogicalSize,
    event::{ElementState, Event, WindowEvent},
    event_loop::{EventLoop, EventLoopBuilder},
    keyboard::{KeyCode, PhysicalKey},
    platform::pump_events::{EventLoopExtPumpEvents, PumpStatus},
    window::{Window, WindowBuilder},
};

use super::{InputState, Surface};
use crate::config::{GlProfileKind, WindowConfig};
use crate::render::GlDriver;
use crate::utils::{InitError, SurfaceError};

/// A winit window with a current OpenGL context on its surface.
///
/// Fields drop in declaration order: GL surface and context go before the
/// window they draw into.
pub struct GlWindow {
    gl_surface: GlutinSurface<WindowSurface>,
    gl_context: PossiblyCurrentContext,
    window: Window,
    event_loop: EventLoop<()>,
    input: InputState,
    close_requested: bool,
}

impl GlWindow {
    /// Opens the window, makes its context current and loads the GL
    /// function table into a [`GlDriver`].
    pub fn create(config: &WindowConfig) -> Result<(Self, GlDriver), InitError> {
        let event_loop = EventLoopBuilder::new().build()?;

        let window_builder = WindowBuilder::new()
            .with_title(config.title.as_str())
            .with_inner_size(LogicalSize::new(config.width, config.height));

        let template = ConfigTemplateBuilder::new();
        let display_builder = DisplayBuilder::new().with_window_builder(Some(window_builder));

        let (window, gl_config) = display_builder
            .build(&event_loop, template, |configs| {
                // glutin reports an error before calling the picker when no
                // config matches, so the iterator is never empty here.
                configs
                    .reduce(|accum, config| {
                        if config.num_samples() > accum.num_samples() {
                            config
                        } else {
                            accum
                        }
                    })
                    .expect("glutin offered no GL configs")
            })
            .map_err(|e| InitError::WindowCreation(e.to_string()))?;

        let window = window.ok_or_else(|| {
            InitError::WindowCreation("display builder returned no window".to_string())
        })?;

        let profile = match config.profile {
            GlProfileKind::Core => GlProfile::Core,
            GlProfileKind::Compatibility => GlProfile::Compatibility,
        };
        let context_attributes = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::OpenGl(Some(Version::new(
                config.gl_major,
                config.gl_minor,
            ))))
            .with_profile(profile)
            .build(Some(window.raw_window_handle()));

        let gl_display = gl_config.display();
        let gl_context = unsafe { gl_display.create_context(&gl_config, &context_attributes)? };

        let attrs = window.build_surface_attributes(<_>::default());
        let gl_surface = unsafe { gl_display.create_window_surface(&gl_config, &attrs)? };
        let gl_context = gl_context.make_current(&gl_surface)?;

        let driver = GlDriver::load(|symbol| match CString::new(symbol) {
            Ok(symbol) => gl_display.get_proc_address(symbol.as_c_str()) as *const _,
            Err(_) => ptr::null(),
        })?;

        info!(
            "Created {}x{} window \"{}\" with OpenGL {}.{} {:?} context",
            config.width, config.height, config.title, config.gl_major, config.gl_minor, config.profile
        );

        Ok((
            Self {
                gl_surface,
                gl_context,
                window,
                event_loop,
                input: InputState::default(),
                close_requested: false,
            },
            driver,
        ))
    }
}

impl Surface for GlWindow {
    fn poll_events(&mut self) {
        let input = &mut self.input;
        let close_requested = &mut self.close_requested;

        let status = self
            .event_loop
            .pump_events(Some(Duration::ZERO), |event, _| {
                if let Event::WindowEvent { event, .. } = event {
                    match event {
                        WindowEvent::CloseRequested => *close_requested = true,
                        WindowEvent::KeyboardInput { event: key_event, .. } => {
                            if let PhysicalKey::Code(key) = key_event.physical_key {
                                input.handle_key(key, key_event.state == ElementState::Pressed);
                            }
                        }
                        WindowEvent::Focused(false) => input.clear(),
                        _ => {}
                    }
                }
            });

        if let PumpStatus::Exit(code) = status {
            debug!("Event loop exited with status {}", code);
            self.close_requested = true;
        }
    }

    fn should_close(&self) -> bool {
        self.close_requested
    }

    fn set_should_close(&mut self, value: bool) {
        self.close_requested = value;
    }

    fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.input.is_pressed(key)
    }

    fn swap_buffers(&mut self) -> Result<(), SurfaceError> {
        self.window.pre_present_notify();
        self.gl_surface
            .swap_buffers(&self.gl_context)
            .map_err(|e| SurfaceError::Present(e.to_string()))
    }
}
