//=========================================================================
// Touch Trace
//
// Opens a window and logs every engine entry point the bridge invokes.
// Touch the window (or drag with the left mouse button) to see
// normalized pointer events; minimize/restore to see pause/resume.
//
//   RUST_LOG=debug cargo run --example touch_trace
//
//=========================================================================

use std::convert::Infallible;

use log::info;
use touchframe::core::services::DEFAULT_PULSE_MS;
use touchframe::prelude::*;

//=== Backend =============================================================
//
// Software stand-in for a GL/EGL display: advertises a fixed set of
// multisample configurations and "creates" a context by logging it.
//
struct SoftwareBackend {
    sample_counts: Vec<u32>,
}

impl ConfigSource for SoftwareBackend {
    type Handle = u32;
    type Error = Infallible;

    fn choose_configs(&self, query: &ConfigQuery) -> Result<Vec<u32>, Infallible> {
        match query {
            ConfigQuery::Multisample { .. } => Ok(self.sample_counts.clone()),
            ConfigQuery::Any => Ok(vec![0]),
        }
    }

    fn sample_count(&self, handle: &u32) -> u32 {
        *handle
    }
}

impl GraphicsBackend for SoftwareBackend {
    type Context = u32;

    fn create_context(&mut self, config: SurfaceConfig<u32>) -> Result<u32, Infallible> {
        info!("Software context with {} samples", config.sample_count);
        Ok(config.handle)
    }
}

//=== Engine ==============================================================

struct TraceEngine {
    services: Services,
    frames: u64,
    taps: i32,
}

impl TraceEngine {
    fn new(services: Services) -> Self {
        info!("Previous high score: {}", services.settings.read_high_score());
        Self { services, frames: 0, taps: 0 }
    }
}

impl NativeEngine for TraceEngine {
    fn on_surface_created(&mut self) {
        info!("surface created");
    }

    fn on_surface_resized(&mut self, width: u32, height: u32) {
        info!("surface resized {}x{}", width, height);
    }

    fn on_frame_update(&mut self) {
        self.frames += 1;
        if self.frames % 600 == 0 {
            info!("{} frames", self.frames);
        }
    }

    fn on_pointer_down(&mut self, id: u32, x: f32, y: f32) {
        info!("down  #{} ({:+.3}, {:+.3})", id, x, y);
        self.taps += 1;
        self.services.haptics.vibrate(DEFAULT_PULSE_MS);
    }

    fn on_pointer_up(&mut self, id: u32, x: f32, y: f32) {
        info!("up    #{} ({:+.3}, {:+.3})", id, x, y);
    }

    fn on_pointer_move(&mut self, id: u32, x: f32, y: f32) {
        info!("move  #{} ({:+.3}, {:+.3})", id, x, y);
    }

    fn on_pause(&mut self) {
        info!("paused after {} taps", self.taps);
        if self.taps > self.services.settings.read_high_score() {
            self.services.settings.submit_high_score(self.taps);
        }
    }

    fn on_resume(&mut self) {
        info!("resumed");
    }
}

//=== main ================================================================

fn main() -> Result<(), PlatformError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let backend = SoftwareBackend {
        sample_counts: vec![2, 4, 8, 16],
    };

    BridgeBuilder::new()
        .with_title("touch trace")
        .with_samples(8)
        .with_app_context(AppContext::new("touch_trace", std::env::temp_dir()))
        .build()
        .run(backend, TraceEngine::new)
}
