//=========================================================================
// Render Loop Bridge
//=========================================================================
//
// Per-frame command dispatch on the render thread.
//
// Each frame:
//  1. Drain the event channel once (snapshot of the backlog)
//  2. Apply every drained command in order
//  3. Call `on_frame_update()` if the lifecycle state is Active
//
// Pointer commands are delivered in every state after surface creation,
// including Suspended, so a pointer-up queued just before a pause still
// reaches the engine.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, info, trace};

//=== Internal Dependencies ===============================================

use crate::core::input::{TouchEvent, TouchPhase, Viewport};
use crate::core::lifecycle::LifecycleState;
use crate::core::native::NativeEngine;
use crate::core::platform_bridge::{ChannelStatus, Command, CommandReceiver};

//=== RenderLoopBridge ====================================================

/// Explicit state machine driving a [`NativeEngine`].
pub struct RenderLoopBridge<E: NativeEngine> {
    engine: E,
    state: LifecycleState,
    commands: Vec<Command>,
}

impl<E: NativeEngine> RenderLoopBridge<E> {
    //--- Construction -----------------------------------------------------

    pub fn new(engine: E) -> Self {
        Self {
            engine,
            state: LifecycleState::Uninitialized,
            commands: Vec::with_capacity(64),
        }
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn into_engine(self) -> E {
        self.engine
    }

    //--- Surface ----------------------------------------------------------

    /// Surface-creation notification.
    ///
    /// Moves Uninitialized → Active and invokes the engine's creation and
    /// resize entry points. A repeated notification (context loss) only
    /// re-invokes the entry points.
    pub fn surface_created(&mut self, viewport: Viewport) {
        if self.state.surface_created() {
            info!(target: "render", "Surface created ({}x{})", viewport.width(), viewport.height());
        } else {
            debug!(target: "render", "Surface re-created while {:?}", self.state);
        }

        self.engine.on_surface_created();
        self.engine.on_surface_resized(viewport.width(), viewport.height());
    }

    //--- Frame ------------------------------------------------------------

    /// Runs one frame: drain, apply in order, then update if Active.
    ///
    /// Before the surface exists the channel is left untouched so the
    /// backlog is delivered on the first real frame.
    pub fn frame(&mut self, receiver: &mut CommandReceiver) -> ChannelStatus {
        if self.state == LifecycleState::Uninitialized {
            return ChannelStatus::Open;
        }

        let mut commands = std::mem::take(&mut self.commands);
        let status = receiver.drain_into(&mut commands);

        for command in commands.drain(..) {
            self.apply(command);
        }
        self.commands = commands;

        if self.state.is_active() {
            self.engine.on_frame_update();
        }

        status
    }

    //--- Dispatch ---------------------------------------------------------

    /// Applies a single command.
    pub fn apply(&mut self, command: Command) {
        trace!(target: "render", "Applying {:?}", command);

        match command {
            Command::Touch(event) => self.dispatch_touch(event),
            Command::Resize { width, height } => self.engine.on_surface_resized(width, height),
            Command::Pause => {
                if self.state.pause() {
                    self.engine.on_pause();
                }
            }
            Command::Resume => {
                if self.state.resume() {
                    self.engine.on_resume();
                }
            }
        }
    }

    fn dispatch_touch(&mut self, event: TouchEvent) {
        let TouchEvent { pointer, x, y, phase } = event;
        let id = pointer.get();

        match phase {
            TouchPhase::Down => self.engine.on_pointer_down(id, x, y),
            TouchPhase::Move => self.engine.on_pointer_move(id, x, y),
            TouchPhase::Up | TouchPhase::Cancel => self.engine.on_pointer_up(id, x, y),
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::platform_bridge::EventChannel;
    use crate::core::testing::{EngineCall, RecordingEngine};

    fn active_bridge() -> (RenderLoopBridge<RecordingEngine>, RecordingEngine) {
        let engine = RecordingEngine::new();
        let mut bridge = RenderLoopBridge::new(engine.clone());
        bridge.surface_created(Viewport::new(800, 600).unwrap());
        engine.clear();
        (bridge, engine)
    }

    //--- Surface ----------------------------------------------------------

    #[test]
    fn surface_created_activates_and_sizes() {
        let engine = RecordingEngine::new();
        let mut bridge = RenderLoopBridge::new(engine.clone());
        assert_eq!(bridge.state(), LifecycleState::Uninitialized);

        bridge.surface_created(Viewport::new(1280, 720).unwrap());

        assert_eq!(bridge.state(), LifecycleState::Active);
        assert_eq!(
            engine.calls(),
            vec![EngineCall::SurfaceCreated, EngineCall::SurfaceResized(1280, 720)]
        );
    }

    #[test]
    fn frames_before_surface_leave_backlog_queued() {
        let engine = RecordingEngine::new();
        let mut bridge = RenderLoopBridge::new(engine.clone());
        let (tx, mut rx) = EventChannel::new();

        tx.push(Command::Touch(TouchEvent::down(1, 0.0, 0.0)));
        bridge.frame(&mut rx);
        assert!(engine.calls().is_empty());
        assert_eq!(tx.pending(), 1);

        bridge.surface_created(Viewport::new(10, 10).unwrap());
        engine.clear();
        bridge.frame(&mut rx);
        assert_eq!(
            engine.calls(),
            vec![EngineCall::PointerDown(1, 0.0, 0.0), EngineCall::FrameUpdate]
        );
    }

    //--- Dispatch ---------------------------------------------------------

    #[test]
    fn touch_phases_map_to_entry_points() {
        let (mut bridge, engine) = active_bridge();

        bridge.apply(Command::Touch(TouchEvent::down(2, 0.5, -0.5)));
        bridge.apply(Command::Touch(TouchEvent::moved(2, 0.6, -0.4)));
        bridge.apply(Command::Touch(TouchEvent::up(2, 0.7, -0.3)));
        bridge.apply(Command::Touch(TouchEvent::cancel(3, 0.1, 0.1)));

        assert_eq!(
            engine.calls(),
            vec![
                EngineCall::PointerDown(2, 0.5, -0.5),
                EngineCall::PointerMove(2, 0.6, -0.4),
                EngineCall::PointerUp(2, 0.7, -0.3),
                EngineCall::PointerUp(3, 0.1, 0.1),
            ]
        );
    }

    #[test]
    fn unmatched_pointer_up_is_forwarded() {
        let (mut bridge, engine) = active_bridge();
        bridge.apply(Command::Touch(TouchEvent::up(9, 0.0, 0.0)));
        assert_eq!(engine.calls(), vec![EngineCall::PointerUp(9, 0.0, 0.0)]);
    }

    #[test]
    fn resize_reinvokes_resize_entry_point() {
        let (mut bridge, engine) = active_bridge();
        bridge.apply(Command::Resize { width: 1024, height: 768 });
        assert_eq!(engine.calls(), vec![EngineCall::SurfaceResized(1024, 768)]);
    }

    //--- Lifecycle --------------------------------------------------------

    #[test]
    fn pause_while_suspended_stays_suspended() {
        let (mut bridge, engine) = active_bridge();

        bridge.apply(Command::Pause);
        bridge.apply(Command::Pause);

        assert_eq!(bridge.state(), LifecycleState::Suspended);
        assert_eq!(engine.calls(), vec![EngineCall::Pause]);
    }

    #[test]
    fn resume_while_active_stays_active() {
        let (mut bridge, engine) = active_bridge();

        bridge.apply(Command::Resume);

        assert_eq!(bridge.state(), LifecycleState::Active);
        assert!(engine.calls().is_empty());
    }

    #[test]
    fn suspended_frame_applies_commands_without_update() {
        let (mut bridge, engine) = active_bridge();
        let (tx, mut rx) = EventChannel::new();

        tx.push(Command::Pause);
        bridge.frame(&mut rx);
        tx.push(Command::Touch(TouchEvent::up(1, 0.0, 0.0)));
        bridge.frame(&mut rx);

        assert_eq!(
            engine.calls(),
            vec![EngineCall::Pause, EngineCall::PointerUp(1, 0.0, 0.0)]
        );
    }

    #[test]
    fn update_runs_once_per_active_frame() {
        let (mut bridge, engine) = active_bridge();
        let (_tx, mut rx) = EventChannel::new();

        bridge.frame(&mut rx);
        bridge.frame(&mut rx);

        assert_eq!(engine.calls(), vec![EngineCall::FrameUpdate, EngineCall::FrameUpdate]);
    }

    #[test]
    fn surface_recreation_while_suspended_keeps_suspension() {
        let (mut bridge, engine) = active_bridge();
        bridge.apply(Command::Pause);
        engine.clear();

        bridge.surface_created(Viewport::new(640, 480).unwrap());

        assert_eq!(bridge.state(), LifecycleState::Suspended);
        assert_eq!(
            engine.calls(),
            vec![EngineCall::SurfaceCreated, EngineCall::SurfaceResized(640, 480)]
        );
    }

    //--- End-to-end ---------------------------------------------------------
    //
    // Down, Move, Pause, Up, Resume drained in one frame: the Up still
    // arrives while suspended, and update runs because the frame ends
    // Active.
    //
    #[test_log::test]
    fn pause_resume_within_one_frame() {
        let (mut bridge, engine) = active_bridge();
        let (tx, mut rx) = EventChannel::new();

        tx.push(Command::Touch(TouchEvent::down(1, 0.0, 0.0)));
        tx.push(Command::Touch(TouchEvent::moved(1, 0.1, 0.0)));
        tx.push(Command::Pause);
        tx.push(Command::Touch(TouchEvent::up(1, 0.1, 0.0)));
        tx.push(Command::Resume);

        let status = bridge.frame(&mut rx);

        assert_eq!(status, ChannelStatus::Open);
        assert_eq!(bridge.state(), LifecycleState::Active);
        assert_eq!(
            engine.calls(),
            vec![
                EngineCall::PointerDown(1, 0.0, 0.0),
                EngineCall::PointerMove(1, 0.1, 0.0),
                EngineCall::Pause,
                EngineCall::PointerUp(1, 0.1, 0.0),
                EngineCall::Resume,
                EngineCall::FrameUpdate,
            ]
        );
    }

    #[test]
    fn frame_reports_closed_channel() {
        let (mut bridge, _engine) = active_bridge();
        let (tx, mut rx) = EventChannel::new();
        drop(tx);
        assert_eq!(bridge.frame(&mut rx), ChannelStatus::Closed);
    }
}
