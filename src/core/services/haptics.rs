//=========================================================================
// Haptics
//=========================================================================
//
// Fire-and-forget vibration requests.
//
// Architecture:
//   any thread ──vibrate(ms)──► crossbeam unbounded ──► haptics thread
//                                                        └─ VibrationMotor
//
// The caller never waits on the motor; the worker thread exits once every
// `HapticWorker` handle has been dropped.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::thread;
use std::time::Duration;

//=== External Crates =====================================================

use crossbeam_channel::{unbounded, Sender};
use log::{debug, trace, warn};

//=== Haptics =============================================================

/// Default pulse length for in-game feedback.
pub const DEFAULT_PULSE_MS: u32 = 50;

/// Vibration collaborator. Failures are invisible to the caller.
pub trait Haptics: Send + Sync {
    fn vibrate(&self, duration_ms: u32);
}

/// Device that actually vibrates. Runs on the haptics thread.
pub trait VibrationMotor: Send + 'static {
    fn pulse(&mut self, duration: Duration);
}

//=== LogMotor ============================================================

/// Motor for devices without vibration hardware; logs each pulse.
#[derive(Debug, Default)]
pub struct LogMotor;

impl VibrationMotor for LogMotor {
    fn pulse(&mut self, duration: Duration) {
        debug!(target: "services", "Vibrate {:?}", duration);
    }
}

//=== HapticWorker ========================================================

/// Dispatches vibration requests onto a dedicated thread.
#[derive(Debug, Clone)]
pub struct HapticWorker {
    sender: Sender<u32>,
}

impl HapticWorker {
    /// Spawns the haptics thread driving `motor`.
    ///
    /// If the thread cannot be spawned, requests are dropped silently.
    pub fn spawn<M: VibrationMotor>(mut motor: M) -> Self {
        let (sender, receiver) = unbounded::<u32>();

        let spawned = thread::Builder::new()
            .name("haptics".into())
            .spawn(move || {
                for duration_ms in receiver.iter() {
                    motor.pulse(Duration::from_millis(u64::from(duration_ms)));
                }
                trace!(target: "services", "Haptics thread exiting");
            });

        if let Err(e) = spawned {
            warn!(target: "services", "Haptics thread unavailable: {}", e);
        }

        Self { sender }
    }
}

impl Haptics for HapticWorker {
    fn vibrate(&self, duration_ms: u32) {
        if self.sender.send(duration_ms).is_err() {
            trace!(target: "services", "Haptics thread gone, dropping {}ms pulse", duration_ms);
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
