//=========================================================================
// Lifecycle
//=========================================================================
//
// Pause/resume sequencing.
//
// Two halves:
// - `LifecycleController` lives on the input thread and turns platform
//   suspend/resume notifications into ordered commands.
// - `LifecycleState` is the render thread's state machine; its transition
//   functions report whether anything actually changed, which makes
//   repeated Pause/Resume idempotent.
//
//   Uninitialized ──surface_created──► Active ◄──resume── Suspended
//                                         └────pause────────►┘
//
//=========================================================================

//=== External Dependencies ===============================================

use log::debug;

//=== Internal Dependencies ===============================================

use crate::core::platform_bridge::{Command, CommandSender};

//=== LifecycleState ======================================================

/// Render-side lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LifecycleState {
    /// No surface yet; frames are not processed.
    #[default]
    Uninitialized,

    /// Surface live, per-frame update runs.
    Active,

    /// Paused; commands are still applied but no update runs.
    Suspended,
}

impl LifecycleState {
    /// Uninitialized → Active. Other states are kept.
    pub fn surface_created(&mut self) -> bool {
        self.transition(LifecycleState::Uninitialized, LifecycleState::Active)
    }

    /// Active → Suspended. Returns `false` if not Active.
    pub fn pause(&mut self) -> bool {
        self.transition(LifecycleState::Active, LifecycleState::Suspended)
    }

    /// Suspended → Active. Returns `false` if not Suspended.
    pub fn resume(&mut self) -> bool {
        self.transition(LifecycleState::Suspended, LifecycleState::Active)
    }

    pub fn is_active(self) -> bool {
        self == LifecycleState::Active
    }

    fn transition(&mut self, from: LifecycleState, to: LifecycleState) -> bool {
        if *self != from {
            return false;
        }
        debug!(target: "render", "Lifecycle {:?} -> {:?}", from, to);
        *self = to;
        true
    }
}

//=== LifecycleController =================================================

/// Producer-side handle for lifecycle notifications.
///
/// Shares the input channel so a pause is applied only after every pointer
/// event that preceded it.
#[derive(Debug, Clone)]
pub struct LifecycleController {
    sender: CommandSender,
}

impl LifecycleController {
    pub fn new(sender: CommandSender) -> Self {
        Self { sender }
    }

    pub fn pause(&self) {
        debug!(target: "platform", "Queueing pause");
        self.sender.push(Command::Pause);
    }

    pub fn resume(&self) {
        debug!(target: "platform", "Queueing resume");
        self.sender.push(Command::Resume);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
