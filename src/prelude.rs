//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use touchframe::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Runtime facade
pub use crate::engine::{Bridge, BridgeBuilder};

// Engine entry points and render-side state
pub use crate::core::{LifecycleController, LifecycleState, NativeEngine, RenderLoopBridge};

// Input model
pub use crate::core::input::{PointerId, TouchEvent, TouchPhase, Viewport};

// Event channel
pub use crate::core::platform_bridge::{Command, CommandReceiver, CommandSender, EventChannel, PlatformError};

// Surface selection
pub use crate::core::surface::{select_config, ConfigQuery, ConfigSource, GraphicsBackend, SurfaceConfig, SurfaceError};

// Collaborators
pub use crate::core::services::{AppContext, Haptics, Services, SettingsStore};
