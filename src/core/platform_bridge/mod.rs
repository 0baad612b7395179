//=========================================================================
// Platform Bridge
//=========================================================================
//
// Bridges the platform layer (winit) with the render thread.
//
// This module defines the contract between the input-producing side and
// the frame-driven side, so platform backends can be swapped without
// changing render code.
//
// Components:
// - `interface`: Command and error definitions (the contract)
// - `event_channel`: Ordered non-blocking command queue
//
//=========================================================================

//=== Module Declarations =================================================

pub mod event_channel;
pub mod interface;

//=== Public API ==========================================================

pub use event_channel::{ChannelStatus, CommandReceiver, CommandSender, EventChannel};
pub use interface::{Command, PlatformError};
