//=========================================================================
// Render Loop
//
// Owner of the render thread: graphics context, native engine and the
// consumer half of the event channel.
//
// Responsibilities:
// - Create the graphics context from the selected surface configuration
//   and report the outcome before the first frame
// - Notify the bridge of surface creation with the initial viewport
// - Run one bridge frame per tick at a fixed frame rate
// - Exit when the platform drops its end of the channel
//
// Notes:
// The render thread never talks to the platform directly. Everything it
// learns after startup arrives as ordered `Command`s.
//
//=========================================================================

//=== Standard Library Imports ============================================
use std::thread;
use std::time::{Duration, Instant};

//=== External Crates =====================================================
use crossbeam_channel::{bounded, Sender};
use log::{error, info};

//=== Submodules ==========================================================
pub mod input;
pub mod lifecycle;
pub mod native;
pub mod platform_bridge;
pub mod render_bridge;
pub mod services;
pub mod surface;

#[cfg(test)]
pub(crate) mod testing;

//=== Internal Imports ====================================================
pub use lifecycle::{LifecycleController, LifecycleState};
pub use native::NativeEngine;
pub use render_bridge::RenderLoopBridge;

use input::Viewport;
use platform_bridge::{ChannelStatus, CommandReceiver};
use surface::{GraphicsBackend, SurfaceConfig, SurfaceError};

//=== RenderLoop ==========================================================
//
// Everything the render thread needs, moved onto it in one piece.
//
pub(crate) struct RenderLoop<B: GraphicsBackend, E: NativeEngine> {
    backend: B,
    config: SurfaceConfig<B::Handle>,
    bridge: RenderLoopBridge<E>,
    receiver: CommandReceiver,
    viewport: Viewport,
}

impl<B, E> RenderLoop<B, E>
where
    B: GraphicsBackend,
    B::Handle: Send,
    E: NativeEngine,
{
    //--- Construction -----------------------------------------------------
    pub fn new(
        backend: B,
        config: SurfaceConfig<B::Handle>,
        engine: E,
        receiver: CommandReceiver,
        viewport: Viewport,
    ) -> Self {
        Self {
            backend,
            config,
            bridge: RenderLoopBridge::new(engine),
            receiver,
            viewport,
        }
    }

    //--- spawn() ----------------------------------------------------------
    //
    // Starts the render thread and blocks until it has tried to create the
    // graphics context. On success the handle yields the engine once the
    // channel closes; on failure the thread has already exited and the
    // caller gets the fatal error.
    //
    pub fn spawn(self, frame_rate: f64) -> Result<thread::JoinHandle<E>, SurfaceError> {
        let frame_duration = Duration::from_secs_f64(1.0 / frame_rate);
        let (ready_tx, ready_rx) = bounded(1);

        let handle = thread::spawn(move || self.run(frame_duration, ready_tx));

        match ready_rx.recv() {
            Ok(Ok(())) => Ok(handle),
            Ok(Err(e)) => {
                let _ = handle.join();
                Err(e)
            }
            Err(_) => {
                let _ = handle.join();
                error!(target: "render", "Render thread died during startup");
                Err(SurfaceError::RenderThreadLost)
            }
        }
    }

    //--- run() ------------------------------------------------------------
    //
    // Each frame:
    //  1. Drain + apply commands, update if active
    //  2. Sleep to keep the frame pacing
    //  3. Exit once the platform has hung up and the backlog is empty
    //
    fn run(self, frame_duration: Duration, ready: Sender<Result<(), SurfaceError>>) -> E {
        let RenderLoop { mut backend, config, mut bridge, mut receiver, viewport } = self;

        let sample_count = config.sample_count;
        let _context = match backend.create_context(config) {
            Ok(context) => context,
            Err(e) => {
                error!(target: "render", "Graphics context creation failed: {}", e);
                let _ = ready.send(Err(SurfaceError::ContextCreation(Box::new(e))));
                return bridge.into_engine();
            }
        };
        info!(target: "render", "Graphics context ready ({} samples)", sample_count);
        let _ = ready.send(Ok(()));

        bridge.surface_created(viewport);

        loop {
            let frame_start = Instant::now();

            if bridge.frame(&mut receiver) == ChannelStatus::Closed {
                info!(target: "render", "Render thread exiting.");
                break;
            }

            let elapsed = frame_start.elapsed();
            if elapsed < frame_duration {
                thread::sleep(frame_duration - elapsed);
            }
        }

        bridge.into_engine()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
