//=========================================================================
// Platform Bridge Interface
//=========================================================================
//
// Platform-to-render interface types (commands and errors).
//
// Defines the contract for communication between the input thread and
// the render thread.
//
//=========================================================================

//=== External Dependencies ===============================================

use thiserror::Error;

//=== Internal Dependencies ===============================================

use crate::core::input::TouchEvent;
use crate::core::surface::SurfaceError;

//=== Command =============================================================

/// Unit of transport from the input thread to the render thread.
///
/// Commands are interpreted by a single dispatch routine on the render
/// thread ([`RenderLoopBridge::apply`](crate::core::RenderLoopBridge::apply)).
/// Lifecycle changes travel through the same queue as input so that a
/// pause never overtakes a pending pointer-up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Normalized pointer sample.
    Touch(TouchEvent),

    /// Application moved to the background.
    Pause,

    /// Application returned to the foreground.
    Resume,

    /// Drawable surface changed size (already validated as positive).
    Resize { width: u32, height: u32 },
}

impl From<TouchEvent> for Command {
    fn from(event: TouchEvent) -> Self {
        Command::Touch(event)
    }
}

//=== PlatformError =======================================================

/// Platform initialization and runtime errors.
///
/// All variants are fatal: the shell cannot continue without an event
/// loop or a usable surface configuration.
#[derive(Debug, Error)]
pub enum PlatformError {
    /// Event loop creation failed (OS-level issue).
    #[error("Event loop creation failed: {0}")]
    EventLoopCreation(String),

    /// Event loop execution error.
    #[error("Event loop error: {0}")]
    EventLoopExecution(String),

    /// Window creation failed.
    #[error("Window creation failed: {0}")]
    WindowCreation(String),

    /// No usable surface configuration could be selected.
    #[error("Surface selection failed: {0}")]
    Surface(#[from] SurfaceError),
}
