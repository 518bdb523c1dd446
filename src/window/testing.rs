//! Scripted window used by the unit tests.

use std::collections::HashSet;

use winit::keyboard::KeyCode;

use super::Surface;
use crate::utils::SurfaceError;

/// Replays a fixed script: after the given number of polls a key goes down
/// or the window system asks to close.
#[derive(Debug, Default)]
pub struct ScriptedSurface {
    pub polls: usize,
    pub swaps: usize,
    pub press_after_polls: Option<(usize, KeyCode)>,
    pub close_after_polls: Option<usize>,
    pub fail_swap_at: Option<usize>,
    pressed: HashSet<KeyCode>,
    close_requested: bool,
}

impl ScriptedSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pressing(key: KeyCode, after_polls: usize) -> Self {
        Self {
            press_after_polls: Some((after_polls, key)),
            ..Self::default()
        }
    }

    pub fn closing(after_polls: usize) -> Self {
        Self {
            close_after_polls: Some(after_polls),
            ..Self::default()
        }
    }
}

impl Surface for ScriptedSurface {
    fn poll_events(&mut self) {
        self.polls += 1;
        if let Some((after, key)) = self.press_after_polls {
            if self.polls >= after {
                self.pressed.insert(key);
            }
        }
        if self.close_after_polls.is_some_and(|after| self.polls >= after) {
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
        self.pressed.contains(&key)
    }

    fn swap_buffers(&mut self) -> Result<(), SurfaceError> {
        self.swaps += 1;
        if self.fail_swap_at == Some(self.swaps) {
            return Err(SurfaceError::Present("context lost".to_string()));
        }
        Ok(())
    }
}
