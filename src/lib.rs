//=========================================================================
// Touchframe — Library Root
//
// Presentation-layer bridge between a touch-capable window and a native,
// frame-driven simulation/rendering engine.
//
// Responsibilities:
// - Select a multisampled surface configuration once at startup
// - Normalize raw multi-touch input into aspect-corrected device space
// - Marshal input and lifecycle commands, in order and without blocking,
//   from the input thread to the render thread
//
// Typical usage:
// ```ignore
// use touchframe::prelude::*;
//
// fn main() -> Result<(), PlatformError> {
//     BridgeBuilder::new().build().run(MyBackend::new(), MyGame::new)
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` contains the platform-independent pieces: input model, event
// channel, surface selection, render bridge, lifecycle and services.
//
pub mod core;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` holds the winit shell and is not part of the public API.
//
// `engine` defines the builder and runtime facade.
//
mod engine;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use engine::{Bridge, BridgeBuilder};
