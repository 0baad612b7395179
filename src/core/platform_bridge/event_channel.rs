//=========================================================================
// Event Channel
//=========================================================================
//
// Ordered, unbounded, non-blocking command queue from the input thread to
// the render thread.
//
// Architecture:
//   CommandSender::push() → crossbeam unbounded → CommandReceiver::drain_all()
//
// Discipline: one producer role, one consumer role. `drain_all()` takes a
// snapshot of the backlog length and removes exactly that many commands
// before the caller processes any of them. Commands pushed while a drain
// is in progress stay queued for the next frame.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{unbounded, Receiver, Sender, TryRecvError};
use log::{trace, warn};

//=== Internal Dependencies ===============================================

use super::Command;

//=== ChannelStatus =======================================================

/// Producer liveness, reported by [`CommandReceiver::drain_into`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelStatus {
    /// Producer still connected (or backlog not yet exhausted).
    Open,

    /// Every sender has been dropped and the queue is empty.
    Closed,
}

//=== EventChannel ========================================================

/// Constructor for the producer/consumer pair.
pub struct EventChannel;

impl EventChannel {
    /// Creates a new channel, returning its producer and consumer halves.
    #[allow(clippy::new_ret_no_self)]
    pub fn new() -> (CommandSender, CommandReceiver) {
        let (sender, receiver) = unbounded();
        (CommandSender { sender }, CommandReceiver { receiver })
    }
}

//=== CommandSender =======================================================

/// Producer half. Cloned into the lifecycle controller so input and
/// lifecycle commands share one ordering.
#[derive(Debug, Clone)]
pub struct CommandSender {
    sender: Sender<Command>,
}

impl CommandSender {
    /// Appends a command. Never blocks and never fails.
    ///
    /// If the render thread has already exited the command is dropped with
    /// a warning; this only happens during teardown.
    pub fn push(&self, command: Command) {
        if let Err(err) = self.sender.send(command) {
            warn!(
                target: "platform::input",
                "Render thread gone, dropping {:?}",
                err.into_inner()
            );
        }
    }

    /// Number of commands waiting for the next drain.
    pub fn pending(&self) -> usize {
        self.sender.len()
    }
}

//=== CommandReceiver =====================================================

/// Consumer half, owned by the render thread.
#[derive(Debug)]
pub struct CommandReceiver {
    receiver: Receiver<Command>,
}

impl CommandReceiver {
    /// Removes every command queued since the previous drain, in append
    /// order, leaving the channel empty.
    pub fn drain_all(&mut self) -> Vec<Command> {
        let mut commands = Vec::new();
        self.drain_into(&mut commands);
        commands
    }

    /// Drains into a caller-owned buffer (cleared first) and reports
    /// whether the producer is still connected.
    ///
    /// Disconnection is only reported once the backlog is exhausted, so
    /// no command is lost when the input thread shuts down.
    pub fn drain_into(&mut self, out: &mut Vec<Command>) -> ChannelStatus {
        out.clear();

        let backlog = self.receiver.len();
        out.reserve(backlog);

        for _ in 0..backlog {
            match self.receiver.try_recv() {
                Ok(command) => out.push(command),
                Err(_) => break,
            }
        }

        if backlog > 0 {
            trace!(target: "render", "Drained {} commands", out.len());
            return ChannelStatus::Open;
        }

        match self.receiver.try_recv() {
            Ok(command) => {
                out.push(command);
                ChannelStatus::Open
            }
            Err(TryRecvError::Empty) => ChannelStatus::Open,
            Err(TryRecvError::Disconnected) => ChannelStatus::Closed,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.receiver.is_empty()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::TouchEvent;
    use std::thread;

    fn touch(id: u32) -> Command {
        Command::Touch(TouchEvent::down(id, 0.0, 0.0))
    }

    #[test]
    fn drain_empty_channel() {
        let (_tx, mut rx) = EventChannel::new();
        assert!(rx.drain_all().is_empty());
    }

    #[test]
    fn drain_preserves_append_order() {
        let (tx, mut rx) = EventChannel::new();

        tx.push(touch(1));
        tx.push(Command::Pause);
        tx.push(touch(2));
        tx.push(Command::Resize { width: 10, height: 20 });
        tx.push(Command::Resume);

        let drained = rx.drain_all();
        assert_eq!(
            drained,
            vec![
                touch(1),
                Command::Pause,
                touch(2),
                Command::Resize { width: 10, height: 20 },
                Command::Resume,
            ]
        );
        assert!(rx.is_empty());
    }

    #[test]
    fn second_drain_only_sees_new_commands() {
        let (tx, mut rx) = EventChannel::new();

        tx.push(touch(1));
        assert_eq!(rx.drain_all().len(), 1);

        tx.push(touch(2));
        tx.push(touch(3));
        assert_eq!(rx.drain_all(), vec![touch(2), touch(3)]);
        assert!(rx.drain_all().is_empty());
    }

    #[test]
    fn pending_counts_undrained_commands() {
        let (tx, mut rx) = EventChannel::new();
        tx.push(Command::Pause);
        tx.push(Command::Resume);
        assert_eq!(tx.pending(), 2);

        rx.drain_all();
        assert_eq!(tx.pending(), 0);
    }

    #[test]
    fn drain_into_reports_closed_after_backlog() {
        let (tx, mut rx) = EventChannel::new();
        let mut buf = Vec::new();

        tx.push(touch(1));
        drop(tx);

        assert_eq!(rx.drain_into(&mut buf), ChannelStatus::Open);
        assert_eq!(buf, vec![touch(1)]);

        assert_eq!(rx.drain_into(&mut buf), ChannelStatus::Closed);
        assert!(buf.is_empty());
    }

    #[test]
    fn push_after_consumer_dropped_does_not_panic() {
        let (tx, rx) = EventChannel::new();
        drop(rx);
        tx.push(Command::Pause);
    }

    //--- Ordering Under Concurrency --------------------------------------
    //
    // Producer pushes while the consumer drains in a tight loop; the
    // concatenation of all drains must equal the push sequence exactly.
    //
    #[test]
    fn concurrent_push_and_drain_loses_nothing() {
        const COUNT: u32 = 10_000;
        let (tx, mut rx) = EventChannel::new();

        let producer = thread::spawn(move || {
            for id in 0..COUNT {
                tx.push(touch(id));
            }
        });

        let mut seen = Vec::with_capacity(COUNT as usize);
        let mut buf = Vec::new();
        loop {
            let status = rx.drain_into(&mut buf);
            seen.extend(buf.drain(..));
            if status == ChannelStatus::Closed {
                break;
            }
        }

        producer.join().unwrap();

        let expected: Vec<Command> = (0..COUNT).map(touch).collect();
        assert_eq!(seen, expected);
    }
}
