//=========================================================================
// Test Support
//=========================================================================
//
// Recording implementations of the engine and graphics collaborators,
// shared by the unit tests of the render bridge and render loop.
//
//=========================================================================

use std::sync::{Arc, Mutex};

use crate::core::native::NativeEngine;
use crate::core::surface::{ConfigQuery, ConfigSource, GraphicsBackend, SurfaceConfig};

//=== EngineCall ==========================================================

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum EngineCall {
    SurfaceCreated,
    SurfaceResized(u32, u32),
    FrameUpdate,
    PointerDown(u32, f32, f32),
    PointerUp(u32, f32, f32),
    PointerMove(u32, f32, f32),
    Pause,
    Resume,
}

//=== RecordingEngine =====================================================

/// Appends every entry-point call to a shared log.
#[derive(Clone, Default)]
pub(crate) struct RecordingEngine {
    calls: Arc<Mutex<Vec<EngineCall>>>,
}

impl RecordingEngine {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn calls(&self) -> Vec<EngineCall> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }

    fn record(&self, call: EngineCall) {
        self.calls.lock().unwrap().push(call);
    }
}

impl NativeEngine for RecordingEngine {
    fn on_surface_created(&mut self) {
        self.record(EngineCall::SurfaceCreated);
    }

    fn on_surface_resized(&mut self, width: u32, height: u32) {
        self.record(EngineCall::SurfaceResized(width, height));
    }

    fn on_frame_update(&mut self) {
        self.record(EngineCall::FrameUpdate);
    }

    fn on_pointer_down(&mut self, id: u32, x: f32, y: f32) {
        self.record(EngineCall::PointerDown(id, x, y));
    }

    fn on_pointer_up(&mut self, id: u32, x: f32, y: f32) {
        self.record(EngineCall::PointerUp(id, x, y));
    }

    fn on_pointer_move(&mut self, id: u32, x: f32, y: f32) {
        self.record(EngineCall::PointerMove(id, x, y));
    }

    fn on_pause(&mut self) {
        self.record(EngineCall::Pause);
    }

    fn on_resume(&mut self) {
        self.record(EngineCall::Resume);
    }
}

//=== StubBackend =========================================================

#[derive(Debug, thiserror::Error)]
#[error("stub backend failure")]
pub(crate) struct StubError;

/// Graphics backend whose handles are plain sample counts.
pub(crate) struct StubBackend {
    pub(crate) samples: Vec<u32>,
    pub(crate) fail_context: bool,
    pub(crate) created: Arc<Mutex<Vec<u32>>>,
}

impl StubBackend {
    pub(crate) fn new(samples: &[u32]) -> Self {
        Self {
            samples: samples.to_vec(),
            fail_context: false,
            created: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl ConfigSource for StubBackend {
    type Handle = u32;
    type Error = StubError;

    fn choose_configs(&self, query: &ConfigQuery) -> Result<Vec<u32>, StubError> {
        match query {
            ConfigQuery::Multisample { .. } => Ok(self.samples.clone()),
            ConfigQuery::Any => Ok(vec![0]),
        }
    }

    fn sample_count(&self, handle: &u32) -> u32 {
        *handle
    }
}

impl GraphicsBackend for StubBackend {
    type Context = u32;

    fn create_context(&mut self, config: SurfaceConfig<u32>) -> Result<u32, StubError> {
        if self.fail_context {
            return Err(StubError);
        }
        self.created.lock().unwrap().push(config.handle);
        Ok(config.handle)
    }
}
