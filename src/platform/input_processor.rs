//=========================================================================
// Input Processor
//=========================================================================
//
// Converts winit pointer events into normalized engine TouchEvents.
//
// Architecture:
//   winit Touch / Mouse → TouchTranslator → Viewport::normalize → TouchEvent
//
// Stateful: caches the current viewport (from Resized), the last cursor
// position and whether the left button is held, so the mouse can stand in
// for a single finger on desktop. Without a valid viewport every event is
// dropped (returns None).
//
//=========================================================================

//=== External Dependencies ===============================================

use log::trace;
use winit::{
    dpi::{PhysicalPosition, PhysicalSize},
    event::{ElementState, MouseButton as WinitMouseButton, TouchPhase as WinitTouchPhase},
};

//=== Internal Dependencies ===============================================

use crate::core::input::{PointerId, TouchEvent, TouchPhase, Viewport};

//=== TouchTranslator =====================================================

/// Converts winit pointer input to normalized TouchEvents.
pub(crate) struct TouchTranslator {
    viewport: Option<Viewport>,
    cursor: PhysicalPosition<f64>,
    mouse_down: bool,
}

impl TouchTranslator {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new() -> Self {
        Self {
            viewport: None,
            cursor: PhysicalPosition::new(0.0, 0.0),
            mouse_down: false,
        }
    }

    //--- Viewport ---------------------------------------------------------

    /// Accepts a new surface size; non-positive sizes are discarded and
    /// the previous viewport is kept.
    pub(crate) fn resize(&mut self, size: PhysicalSize<u32>) -> Option<Viewport> {
        let viewport = Viewport::new(i64::from(size.width), i64::from(size.height));
        match viewport {
            Some(viewport) => self.viewport = Some(viewport),
            None => trace!(
                target: "platform::input",
                "Ignoring {}x{} resize",
                size.width,
                size.height
            ),
        }
        viewport
    }

    //--- Touch ------------------------------------------------------------

    /// Converts a winit touch sample.
    pub(crate) fn process_touch(
        &self,
        id: u64,
        phase: WinitTouchPhase,
        location: PhysicalPosition<f64>,
    ) -> Option<TouchEvent> {
        let viewport = self.viewport?;
        Some(viewport.touch(
            pointer_from_touch_id(id),
            location.x as f32,
            location.y as f32,
            TouchPhase::from(phase),
        ))
    }

    //--- Mouse ------------------------------------------------------------

    /// Tracks the cursor; yields a Move while the left button is held.
    pub(crate) fn process_cursor_moved(&mut self, position: PhysicalPosition<f64>) -> Option<TouchEvent> {
        self.cursor = position;
        if !self.mouse_down {
            return None;
        }
        self.mouse_event(TouchPhase::Move)
    }

    /// Left button press/release as pointer down/up. Other buttons are
    /// ignored.
    pub(crate) fn process_mouse_button(
        &mut self,
        button: WinitMouseButton,
        state: ElementState,
    ) -> Option<TouchEvent> {
        if button != WinitMouseButton::Left {
            return None;
        }

        match state {
            ElementState::Pressed => {
                self.mouse_down = true;
                self.mouse_event(TouchPhase::Down)
            }
            ElementState::Released => {
                self.mouse_down = false;
                self.mouse_event(TouchPhase::Up)
            }
        }
    }

    //--- Internal Helpers -------------------------------------------------

    fn mouse_event(&self, phase: TouchPhase) -> Option<TouchEvent> {
        let viewport = self.viewport?;
        Some(viewport.touch(
            PointerId::MOUSE,
            self.cursor.x as f32,
            self.cursor.y as f32,
            phase,
        ))
    }
}

//--- Test Accessors ------------------------------------------------------

#[cfg(test)]
impl TouchTranslator {
    pub(crate) fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }
}

//=========================================================================
// Winit Conversions
//=========================================================================

impl From<WinitTouchPhase> for TouchPhase {
    fn from(phase: WinitTouchPhase) -> Self {
        match phase {
            WinitTouchPhase::Started => TouchPhase::Down,
            WinitTouchPhase::Moved => TouchPhase::Move,
            WinitTouchPhase::Ended => TouchPhase::Up,
            WinitTouchPhase::Cancelled => TouchPhase::Cancel,
        }
    }
}

/// Touch ids are small per-device counters; anything that would collide
/// with the mouse pointer is clamped just below it.
fn pointer_from_touch_id(id: u64) -> PointerId {
    let id = u32::try_from(id).unwrap_or(u32::MAX - 1);
    PointerId(id.min(u32::MAX - 1))
}

//=========================================================================
// Tests
//=========================================================================
