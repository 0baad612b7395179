//=========================================================================
// Platform Subsystem
//
// Bridges winit (OS-level events) with the render thread via the ordered
// command channel.
//
// Architecture:
// ```text
//  Main Thread:                        Render Thread:
//  ┌─────────────────────────────┐    ┌────────────────────────┐
//  │  Winit Event Loop           │    │  RenderLoop            │
//  │   ↓                         │    │   ↓ every frame        │
//  │  TouchTranslator            │    │  drain_all()           │
//  │   ├─ Tracks viewport        │    │   ↓                    │
//  │   └─ Normalizes pointers    │    │  RenderLoopBridge      │
//  │   ↓                         │    │   ├─ pointer dispatch  │
//  │  LifecycleController        │    │   ├─ pause/resume      │
//  │   ↓                         │    │   └─ on_frame_update() │
//  │  CommandSender::push ───────┼───►│                        │
//  │                             │    └────────────────────────┘
//  │  resumed() (first time)     │
//  │   ├─ create window          │
//  │   ├─ select_config()        │
//  │   └─ spawn render thread ───┼───► backend + config + engine
//  └─────────────────────────────┘
// ```
//
// Key Design Decisions:
// - **No buffering on this side**: every pointer sample is pushed as soon
//   as it is normalized; batching happens at the render thread's drain
// - **Surface selection on the main thread**: the windowing layer is
//   queried where the window lives; only the chosen config crosses over
// - **Fatal startup failure**: no config, no window or no graphics context
//   is logged and exits the event loop; `start` waits for the render
//   thread to report its context before returning
// - **Shutdown by hang-up**: closing the window drops every sender; the
//   render thread drains what is left and exits
//
//=========================================================================

//=== Submodules ==========================================================

mod input_processor;

//=== Standard Library Imports ============================================

use std::thread::JoinHandle;

//=== External Crates =====================================================

use log::*;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowAttributes, WindowId},
};

//=== Internal Imports ====================================================

use crate::core::input::{TouchEvent, Viewport};
use crate::core::platform_bridge::{Command, CommandReceiver, CommandSender, PlatformError};
use crate::core::surface::{select_config, GraphicsBackend};
use crate::core::{LifecycleController, NativeEngine, RenderLoop};
use input_processor::TouchTranslator;

//=== PlatformSettings ====================================================

/// Window and render parameters, resolved by the builder.
#[derive(Debug, Clone)]
pub(crate) struct PlatformSettings {
    pub title: String,
    pub inner_size: (u32, u32),
    pub requested_samples: u32,
    pub frame_rate: f64,
}

//=== Producer ============================================================
//
// Input-side handles. Dropped as a unit on close so the render thread
// sees the channel hang up.
//
struct Producer {
    sender: CommandSender,
    lifecycle: LifecycleController,
}

//=== Startup =============================================================
//
// Everything consumed when the first surface appears.
//
struct Startup<B, F> {
    backend: B,
    make_engine: F,
    receiver: CommandReceiver,
}

//=== Platform ============================================================

/// Window manager and input event producer.
///
/// Runs on the main thread (winit requirement on macOS/iOS) and pushes
/// ordered commands to the render thread.
///
/// # Lifecycle
///
/// 1. **Construction**: `Platform::new(...)` - nothing is created yet
/// 2. **First resume**: window, surface selection, render thread
/// 3. **Event processing**: pointer/resize/lifecycle → commands
/// 4. **Shutdown**: window closed → producer dropped → render thread exits
pub(crate) struct Platform<B, E, F>
where
    B: GraphicsBackend,
    E: NativeEngine,
    F: FnOnce() -> E,
{
    settings: PlatformSettings,
    window: Option<Window>,
    translator: TouchTranslator,
    producer: Option<Producer>,
    startup: Option<Startup<B, F>>,
    render_thread: Option<JoinHandle<E>>,
    fatal: Option<PlatformError>,
}

impl<B, E, F> Platform<B, E, F>
where
    B: GraphicsBackend,
    B::Handle: Send,
    E: NativeEngine,
    F: FnOnce() -> E,
{
    //--- Construction -----------------------------------------------------

    pub fn new(
        settings: PlatformSettings,
        backend: B,
        make_engine: F,
        sender: CommandSender,
        receiver: CommandReceiver,
    ) -> Self {
        info!(target: "platform", "Platform subsystem initialized");
        Self {
            settings,
            window: None,
            translator: TouchTranslator::new(),
            producer: Some(Producer {
                lifecycle: LifecycleController::new(sender.clone()),
                sender,
            }),
            startup: Some(Startup { backend, make_engine, receiver }),
            render_thread: None,
            fatal: None,
        }
    }

    //--- Execution --------------------------------------------------------

    /// Runs the event loop until the window closes.
    ///
    /// Returns the render thread handle (if one was started) so the caller
    /// can join it.
    ///
    /// # Errors
    ///
    /// [`PlatformError`] if the event loop cannot run, or if startup hit a
    /// fatal error (no surface configuration, no window, no graphics
    /// context).
    pub fn run(mut self) -> Result<Option<JoinHandle<E>>, PlatformError> {
        debug!(target: "platform", "Starting winit event loop");

        let event_loop = EventLoop::new()
            .map_err(|e| PlatformError::EventLoopCreation(e.to_string()))?;

        event_loop
            .run_app(&mut self)
            .map_err(|e| PlatformError::EventLoopExecution(e.to_string()))?;

        match self.fatal.take() {
            Some(err) => Err(err),
            None => Ok(self.render_thread.take()),
        }
    }

    //--- Internal Helpers -------------------------------------------------

    fn push(&self, command: Command) {
        if let Some(producer) = &self.producer {
            producer.sender.push(command);
        }
    }

    fn push_touch(&self, event: Option<TouchEvent>) {
        if let Some(event) = event {
            trace!(target: "platform::input", "{:?}", event);
            self.push(Command::Touch(event));
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: PlatformError) {
        self.abort(err);
        event_loop.exit();
    }

    /// Records a fatal startup error and hangs up the input side.
    fn abort(&mut self, err: PlatformError) {
        error!(target: "platform", "{}", err);
        self.fatal = Some(err);
        self.producer = None;
    }

    /// First resume: window, surface selection, render thread.
    fn start(&mut self, event_loop: &ActiveEventLoop) {
        let Some(startup) = self.startup.take() else {
            return;
        };

        let (width, height) = self.settings.inner_size;
        let attrs = WindowAttributes::default()
            .with_title(self.settings.title.clone())
            .with_inner_size(LogicalSize::new(width, height));

        let window = match event_loop.create_window(attrs) {
            Ok(window) => window,
            Err(e) => return self.fail(event_loop, PlatformError::WindowCreation(e.to_string())),
        };

        let size = window.inner_size();
        info!(
            target: "platform",
            "Window created: {}x{} @ {}x DPI",
            size.width,
            size.height,
            window.scale_factor()
        );
        self.window = Some(window);

        // A zero-sized first surface still needs a viewport for the engine.
        let viewport = self
            .translator
            .resize(size)
            .or_else(|| Viewport::new(i64::from(width), i64::from(height)))
            .unwrap_or_else(|| {
                warn!(target: "platform", "Invalid initial size, assuming 1x1");
                Viewport::UNIT
            });

        if let Err(e) = self.launch(startup, viewport) {
            self.fail(event_loop, e);
        }
    }

    /// Surface selection and render-thread startup. Returns once the
    /// graphics context exists, or with the fatal error that prevented it.
    fn launch(&mut self, startup: Startup<B, F>, viewport: Viewport) -> Result<(), PlatformError> {
        let config = select_config(&startup.backend, self.settings.requested_samples)?;

        let engine = (startup.make_engine)();
        let render = RenderLoop::new(startup.backend, config, engine, startup.receiver, viewport);
        self.render_thread = Some(render.spawn(self.settings.frame_rate)?);
        info!(target: "platform", "Render thread running");
        Ok(())
    }
}

//=== Winit Integration ===================================================

impl<B, E, F> ApplicationHandler for Platform<B, E, F>
where
    B: GraphicsBackend,
    B::Handle: Send,
    E: NativeEngine,
    F: FnOnce() -> E,
{
    /// Called on startup and on every return to the foreground.
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            self.start(event_loop);
            return;
        }

        if let Some(producer) = &self.producer {
            producer.lifecycle.resume();
        }
    }

    /// Called when the application moves to the background.
    fn suspended(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(producer) = &self.producer {
            producer.lifecycle.pause();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                self.producer = None;
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if let Some(viewport) = self.translator.resize(size) {
                    debug!(
                        target: "platform",
                        "Resized to {}x{}",
                        viewport.width(),
                        viewport.height()
                    );
                    self.push(Command::Resize {
                        width: viewport.width(),
                        height: viewport.height(),
                    });
                }
            }

            WindowEvent::Touch(touch) => {
                let event = self.translator.process_touch(touch.id, touch.phase, touch.location);
                self.push_touch(event);
            }

            WindowEvent::CursorMoved { position, .. } => {
                let event = self.translator.process_cursor_moved(position);
                self.push_touch(event);
            }

            WindowEvent::MouseInput { state, button, .. } => {
                let event = self.translator.process_mouse_button(button, state);
                self.push_touch(event);
            }

            _ => {
                // Ignore: keyboard, focus, redraw (the render thread paces itself)
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
