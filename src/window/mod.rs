pub mod context;
pub mod input;
#[cfg(test)]
pub(crate) mod testing;

pub use context::GlWindow;
pub use input::InputState;

use winit::keyboard::KeyCode;

use crate::utils::SurfaceError;

/// The window-system side of a frame: events, close request, key state and
/// presentation.
pub trait Surface {
    /// Processes whatever events are pending without waiting for more.
    fn poll_events(&mut self);
    fn should_close(&self) -> bool;
    fn set_should_close(&mut self, value: bool);
    fn is_key_pressed(&self, key: KeyCode) -> bool;
    fn swap_buffers(&mut self) -> Result<(), SurfaceError>;
}
