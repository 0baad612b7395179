//=========================================================================
// Touch Event Types
//
// Defines the engine-side representation of a single pointer sample.
// Platform-specific touch data (winit, mouse fallback) is converted into
// this form by the platform layer before crossing the thread boundary.
//
// Responsibilities:
// - Identify pointers independently of the windowing backend
// - Represent the phase of a pointer gesture (down/move/up/cancel)
// - Carry coordinates already normalized to device-independent space
//
//=========================================================================

//=== PointerId ===========================================================
// Identifies one finger (or the mouse) for the duration of a gesture.
//
// Ids are reused by the platform once a pointer is lifted; this layer
// does not track which ids are currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointerId(pub u32);

impl PointerId {
    /// Pointer id used for the primary mouse button on desktop. Kept out
    /// of the range touch devices hand out.
    pub const MOUSE: PointerId = PointerId(u32::MAX);

    pub fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for PointerId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

//=== TouchPhase ==========================================================
// Stage of a pointer gesture.
//
// `Cancel` is reported when the platform aborts a gesture (e.g. palm
// rejection); the render bridge delivers it as a pointer-up so the native
// engine never sees a pointer stuck down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TouchPhase {
    Down,
    Move,
    Up,
    Cancel,
}

impl TouchPhase {
    /// Returns `true` for phases that end a gesture.
    pub fn is_terminal(self) -> bool {
        matches!(self, TouchPhase::Up | TouchPhase::Cancel)
    }
}

//=== TouchEvent ==========================================================

/// A single normalized pointer sample.
///
/// `x` and `y` are normalized device coordinates: the shorter viewport
/// axis spans `[-1, 1]`, the y axis points up. See
/// [`Viewport::normalize`](super::Viewport::normalize).
///
/// Events are plain values: created on the input thread, moved through the
/// event channel, consumed once on the render thread.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchEvent {
    pub pointer: PointerId,
    pub x: f32,
    pub y: f32,
    pub phase: TouchPhase,
}

impl TouchEvent {
    pub fn new(pointer: PointerId, x: f32, y: f32, phase: TouchPhase) -> Self {
        Self { pointer, x, y, phase }
    }

    pub fn down(id: u32, x: f32, y: f32) -> Self {
        Self::new(PointerId(id), x, y, TouchPhase::Down)
    }

    pub fn moved(id: u32, x: f32, y: f32) -> Self {
        Self::new(PointerId(id), x, y, TouchPhase::Move)
    }

    pub fn up(id: u32, x: f32, y: f32) -> Self {
        Self::new(PointerId(id), x, y, TouchPhase::Up)
    }

    pub fn cancel(id: u32, x: f32, y: f32) -> Self {
        Self::new(PointerId(id), x, y, TouchPhase::Cancel)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
