//=========================================================================
// Input
//
// Device-independent pointer input.
//
// Responsibilities:
// - Define the pointer event model shared by both threads
// - Normalize raw pixel coordinates against the current viewport
//
// Notes:
// Everything here is plain data or pure functions. The platform layer
// owns the current `Viewport` and produces `TouchEvent`s; the render
// bridge consumes them.
//
//=========================================================================

//=== Submodules ==========================================================
pub mod event;
pub mod normalizer;

//=== Public API ==========================================================
pub use event::{PointerId, TouchEvent, TouchPhase};
pub use normalizer::Viewport;
