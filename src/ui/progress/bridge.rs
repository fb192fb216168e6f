//! Bounded single-producer, single-consumer queue between a progress
//! producer and the render loop.
//!
//! The producer only ever calls [`Bridge::send`] and
//! [`Bridge::request_dismiss`]; the render loop only ever takes messages.
//! Neither side touches the other's state.

use std::collections::VecDeque;
use std::sync::{Arc, Condvar, Mutex, MutexGuard};
use std::time::{Duration, Instant};

use tracing::trace;

use super::line::ProgressMessage;
use crate::error::{DialogError, Result};
use crate::ui::event::DialogEvent;
use crate::ui::terminal::EventSource;

/// Longest the render loop waits on input before checking the bridge again.
const INPUT_SLICE: Duration = Duration::from_millis(20);

struct BridgeState {
    queue: VecDeque<ProgressMessage>,
    capacity: usize,
    dismiss: bool,
    closed: bool,
}

/// What the consumer found when it looked at the bridge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Received {
    Message(ProgressMessage),
    /// Forced dismissal was requested; takes priority over queued messages.
    Dismissed,
    Empty,
}

pub struct Bridge {
    state: Mutex<BridgeState>,
    not_full: Condvar,
    not_empty: Condvar,
}

impl Bridge {
    pub fn new(capacity: usize) -> Self {
        Self {
            state: Mutex::new(BridgeState {
                queue: VecDeque::with_capacity(capacity),
                capacity: capacity.max(1),
                dismiss: false,
                closed: false,
            }),
            not_full: Condvar::new(),
            not_empty: Condvar::new(),
        }
    }

    fn lock(&self) -> MutexGuard<'_, BridgeState> {
        match self.state.lock() {
            Ok(state) => state,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Queues `message`, blocking while the queue is full.
    ///
    /// Fails with [`DialogError::StreamClosed`] once the render loop has
    /// exited, including while blocked.
    pub fn send(&self, message: ProgressMessage) -> Result<()> {
        let mut state = self.lock();
        while !state.closed && state.queue.len() >= state.capacity {
            state = self
                .not_full
                .wait(state)
                .unwrap_or_else(|poisoned| poisoned.into_inner());
        }
        if state.closed {
            return Err(DialogError::StreamClosed);
        }
        state.queue.push_back(message);
        self.not_empty.notify_one();
        Ok(())
    }

    /// Asks the render loop to stop at its next look at the bridge.
    pub fn request_dismiss(&self) {
        let mut state = self.lock();
        state.dismiss = true;
        self.not_empty.notify_all();
    }

    /// Marks the consumer as gone and wakes a blocked producer.
    pub fn close(&self) {
        let mut state = self.lock();
        state.closed = true;
        state.queue.clear();
        self.not_full.notify_all();
        self.not_empty.notify_all();
    }

    pub fn try_take(&self) -> Received {
        let mut state = self.lock();
        self.take_locked(&mut state)
    }

    /// Waits up to `timeout` for a message or a dismissal.
    pub fn recv_timeout(&self, timeout: Duration) -> Received {
        let deadline = Instant::now() + timeout;
        let mut state = self.lock();
        loop {
            let received = self.take_locked(&mut state);
            if received != Received::Empty || state.closed {
                return received;
            }
            let now = Instant::now();
            if now >= deadline {
                return Received::Empty;
            }
            state = match self.not_empty.wait_timeout(state, deadline - now) {
                Ok((state, _)) => state,
                Err(poisoned) => poisoned.into_inner().0,
            };
        }
    }

    fn take_locked(&self, state: &mut BridgeState) -> Received {
        if state.dismiss {
            return Received::Dismissed;
        }
        match state.queue.pop_front() {
            Some(message) => {
                self.not_full.notify_one();
                Received::Message(message)
            }
            None => Received::Empty,
        }
    }
}

/// Event source that interleaves bridge messages with terminal input.
///
/// The bridge is checked before and after each input poll, so a dismissal
/// ends the render loop within one iteration.
pub struct BridgedEvents<S> {
    input: S,
    bridge: Arc<Bridge>,
}

impl<S> BridgedEvents<S> {
    pub fn new(input: S, bridge: Arc<Bridge>) -> Self {
        Self { input, bridge }
    }
}

fn into_event(received: Received) -> Option<DialogEvent> {
    match received {
        Received::Message(message) => Some(DialogEvent::Progress(message)),
        Received::Dismissed => Some(DialogEvent::Interrupt),
        Received::Empty => None,
    }
}

impl<S: EventSource> EventSource for BridgedEvents<S> {
    fn size(&self) -> Result<(u16, u16)> {
        self.input.size()
    }

    fn poll_event(&mut self, timeout: Duration) -> Result<Option<DialogEvent>> {
        if let Some(event) = into_event(self.bridge.try_take()) {
            return Ok(Some(event));
        }
        if let Some(event) = self.input.poll_event(timeout.min(INPUT_SLICE))? {
            return Ok(Some(event));
        }
        let event = into_event(self.bridge.recv_timeout(timeout.min(INPUT_SLICE)));
        if let Some(event) = &event {
            trace!(?event, "Bridged progress event");
        }
        Ok(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::progress::line::{ProgressLine, ProgressLineKind};
    use std::thread;

    fn line(message: &str) -> ProgressMessage {
        ProgressMessage::Line(ProgressLine::new(ProgressLineKind::Text, message))
    }

    #[test]
    fn delivers_in_send_order() {
        let bridge = Bridge::new(4);
        bridge.send(line("a")).unwrap();
        bridge.send(line("b")).unwrap();
        bridge.send(ProgressMessage::Done).unwrap();
        assert_eq!(bridge.try_take(), Received::Message(line("a")));
        assert_eq!(bridge.try_take(), Received::Message(line("b")));
        assert_eq!(bridge.try_take(), Received::Message(ProgressMessage::Done));
        assert_eq!(bridge.try_take(), Received::Empty);
    }

    #[test]
    fn dismissal_takes_priority() {
        let bridge = Bridge::new(4);
        bridge.send(line("a")).unwrap();
        bridge.request_dismiss();
        assert_eq!(bridge.try_take(), Received::Dismissed);
        assert_eq!(bridge.recv_timeout(Duration::from_millis(1)), Received::Dismissed);
    }

    #[test]
    fn full_queue_blocks_until_taken() {
        let bridge = Arc::new(Bridge::new(2));
        let producer = {
            let bridge = Arc::clone(&bridge);
            thread::spawn(move || {
                for i in 0..10 {
                    bridge.send(line(&i.to_string())).unwrap();
                }
            })
        };

        let mut seen = Vec::new();
        while seen.len() < 10 {
            if let Received::Message(ProgressMessage::Line(l)) =
                bridge.recv_timeout(Duration::from_millis(100))
            {
                seen.push(l.message);
            }
        }
        producer.join().unwrap();
        let expected: Vec<String> = (0..10).map(|i| i.to_string()).collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn close_releases_blocked_sender() {
        let bridge = Arc::new(Bridge::new(1));
        bridge.send(line("fills")).unwrap();
        let producer = {
            let bridge = Arc::clone(&bridge);
            thread::spawn(move || bridge.send(line("blocked")))
        };
        thread::sleep(Duration::from_millis(20));
        bridge.close();
        assert!(matches!(producer.join().unwrap(), Err(DialogError::StreamClosed)));
        assert!(matches!(bridge.send(line("late")), Err(DialogError::StreamClosed)));
    }

    #[test]
    fn recv_times_out_when_idle() {
        let bridge = Bridge::new(1);
        assert_eq!(bridge.recv_timeout(Duration::from_millis(5)), Received::Empty);
    }
}
