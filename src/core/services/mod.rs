//=========================================================================
// Services
//=========================================================================
//
// Collaborators the native engine reaches outside the per-frame path.
//
// Architecture:
//   AppContext ──► FileSettingsStore   (high score persistence)
//              └─► HapticWorker        (vibration, own thread)
//
// Both are built from an explicit `AppContext` and handed to the engine
// factory as a `Services` bundle. No global state.
//
//=========================================================================

//=== Module Declarations =================================================

mod app_context;
pub mod haptics;
pub mod settings;

//=== Standard Library Imports ============================================

use std::sync::Arc;

//=== Public API ==========================================================

pub use app_context::AppContext;
pub use haptics::{HapticWorker, Haptics, LogMotor, VibrationMotor, DEFAULT_PULSE_MS};
pub use settings::{FileSettingsStore, MemorySettingsStore, SettingsStore};

//=== Services ============================================================

/// Collaborator handles given to the engine at construction.
///
/// Cheap to clone; every handle is shareable across threads.
#[derive(Clone)]
pub struct Services {
    pub context: AppContext,
    pub settings: Arc<dyn SettingsStore>,
    pub haptics: Arc<dyn Haptics>,
}

impl Services {
    /// File-backed settings and a logging haptics worker.
    pub fn new(context: AppContext) -> Self {
        Self::with_motor(context, LogMotor)
    }

    /// File-backed settings and a haptics worker driving `motor`.
    pub fn with_motor<M: VibrationMotor>(context: AppContext, motor: M) -> Self {
        let settings = Arc::new(FileSettingsStore::new(&context));
        Self {
            context,
            settings,
            haptics: Arc::new(HapticWorker::spawn(motor)),
        }
    }
}

impl std::fmt::Debug for Services {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Services")
            .field("context", &self.context)
            .finish_non_exhaustive()
    }
}
