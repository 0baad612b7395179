//=========================================================================
// Touchframe Bridge
//
// Main entry point: configures and runs the platform shell and the
// render thread.
//
// Architecture:
// ```text
//     BridgeBuilder  ──build()──>  Bridge  ──run()──>  [Runtime]
//         │                          │
//         ├─ with_samples()          ├─ builds Services
//         ├─ with_frame_rate()       ├─ creates the event channel
//         ├─ with_title()            ├─ runs the platform (blocks)
//         ├─ with_inner_size()       └─ joins the render thread
//         └─ with_app_context()
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{error, info};

//=== Internal Dependencies ===============================================

use crate::core::platform_bridge::{EventChannel, PlatformError};
use crate::core::services::{AppContext, Services};
use crate::core::surface::GraphicsBackend;
use crate::core::NativeEngine;
use crate::platform::{Platform, PlatformSettings};

//=== BridgeBuilder =======================================================

/// Builder for configuring and constructing a [`Bridge`].
///
/// # Default Values
///
/// - **Requested samples**: 16 (multisample anti-aliasing)
/// - **Frame rate**: 60.0 frames per second on the render thread
/// - **Title**: "touchframe"
/// - **Inner size**: 800x600 logical pixels
/// - **App context**: app name "touchframe", data in the system temp dir
///
/// # Examples
///
/// ```no_run
/// use touchframe::prelude::*;
/// # use touchframe::core::surface::{ConfigQuery, ConfigSource, GraphicsBackend, SurfaceConfig};
/// # struct Gl;
/// # impl ConfigSource for Gl {
/// #     type Handle = u32;
/// #     type Error = std::io::Error;
/// #     fn choose_configs(&self, _: &ConfigQuery) -> Result<Vec<u32>, std::io::Error> { Ok(vec![4]) }
/// #     fn sample_count(&self, h: &u32) -> u32 { *h }
/// # }
/// # impl GraphicsBackend for Gl {
/// #     type Context = ();
/// #     fn create_context(&mut self, _: SurfaceConfig<u32>) -> Result<(), std::io::Error> { Ok(()) }
/// # }
/// # struct Game;
/// # impl Game { fn new(_: Services) -> Self { Game } }
/// # impl NativeEngine for Game {
/// #     fn on_surface_created(&mut self) {}
/// #     fn on_surface_resized(&mut self, _: u32, _: u32) {}
/// #     fn on_frame_update(&mut self) {}
/// #     fn on_pointer_down(&mut self, _: u32, _: f32, _: f32) {}
/// #     fn on_pointer_up(&mut self, _: u32, _: f32, _: f32) {}
/// #     fn on_pointer_move(&mut self, _: u32, _: f32, _: f32) {}
/// #     fn on_pause(&mut self) {}
/// #     fn on_resume(&mut self) {}
/// # }
///
/// BridgeBuilder::new()
///     .with_samples(4)
///     .with_frame_rate(120.0)
///     .with_app_context(AppContext::new("asteroids", "/tmp/asteroids"))
///     .build()
///     .run(Gl, Game::new)?;
/// # Ok::<(), touchframe::core::platform_bridge::PlatformError>(())
/// ```
#[derive(Debug, Clone)]
pub struct BridgeBuilder {
    requested_samples: u32,
    frame_rate: f64,
    title: String,
    inner_size: (u32, u32),
    app_context: AppContext,
}

impl BridgeBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            requested_samples: 16,
            frame_rate: 60.0,
            title: "touchframe".into(),
            inner_size: (800, 600),
            app_context: AppContext::new("touchframe", std::env::temp_dir()),
        }
    }

    /// Sets the requested multisample count.
    ///
    /// Values below 2 disable multisampling and select any valid surface
    /// configuration.
    ///
    /// Default: 16
    pub fn with_samples(mut self, samples: u32) -> Self {
        self.requested_samples = samples;
        self
    }

    /// Sets the render thread's target frame rate.
    ///
    /// Default: 60.0
    ///
    /// # Panics
    ///
    /// Panics if `frame_rate <= 0.0`.
    pub fn with_frame_rate(mut self, frame_rate: f64) -> Self {
        assert!(frame_rate > 0.0, "Frame rate must be positive, got {}", frame_rate);
        self.frame_rate = frame_rate;
        self
    }

    /// Sets the window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the initial window size in logical pixels.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn with_inner_size(mut self, width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "Window size must be positive, got {}x{}", width, height);
        self.inner_size = (width, height);
        self
    }

    /// Sets the application context used to build the settings store and
    /// haptics collaborators.
    pub fn with_app_context(mut self, context: AppContext) -> Self {
        self.app_context = context;
        self
    }

    /// Builds the bridge. Nothing is started until [`Bridge::run`].
    pub fn build(self) -> Bridge {
        info!(
            "Building bridge (samples: {}, frame rate: {})",
            self.requested_samples, self.frame_rate
        );

        Bridge {
            settings: PlatformSettings {
                title: self.title,
                inner_size: self.inner_size,
                requested_samples: self.requested_samples,
                frame_rate: self.frame_rate,
            },
            app_context: self.app_context,
        }
    }
}

impl Default for BridgeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Bridge ==============================================================

/// Touchframe runtime.
///
/// ```text
/// Bridge (Main Thread)
///   ├─► Platform (winit event loop, input producer)
///   │
///   └─► RenderLoop (Render Thread @ frame rate)
///         └─► RenderLoopBridge → NativeEngine
///
/// Communication: EventChannel (Command)
/// ```
#[derive(Debug)]
pub struct Bridge {
    settings: PlatformSettings,
    app_context: AppContext,
}

impl Bridge {
    /// Services built from this bridge's application context.
    pub fn services(&self) -> Services {
        Services::new(self.app_context.clone())
    }

    /// Runs the platform and render thread until the window closes.
    ///
    /// `make_engine` receives the [`Services`] bundle and is called once,
    /// after surface selection succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the event loop cannot run or startup
    /// fails fatally (no surface configuration, no window, no context).
    pub fn run<B, E, F>(self, backend: B, make_engine: F) -> Result<(), PlatformError>
    where
        B: GraphicsBackend,
        B::Handle: Send,
        E: NativeEngine,
        F: FnOnce(Services) -> E,
    {
        info!("Starting bridge runtime (frame rate: {})", self.settings.frame_rate);

        //--- 1. Collaborators --------------------------------------------
        let services = self.services();

        //--- 2. Create communication channel -----------------------------
        let (sender, receiver) = EventChannel::new();

        //--- 3. Launch the platform subsystem -----------------------------
        let platform = Platform::new(
            self.settings,
            backend,
            move || make_engine(services),
            sender,
            receiver,
        );
        info!("Platform initialized, entering event loop");

        let render_thread = platform.run()?;
        info!("Platform event loop exited");

        //--- 4. Cleanup: Wait for render thread to terminate -------------
        let Some(handle) = render_thread else {
            return Ok(());
        };

        match handle.join() {
            Ok(_engine) => {
                info!("Render thread terminated cleanly");
                Ok(())
            }
            Err(e) => {
                error!("Render thread panicked: {:?}", e);
                Ok(())
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
