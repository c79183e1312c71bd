//! Channel-backed single-writer host for the reducer.
//!
//! A worker thread owns the only [`Store`]. Any number of producers send
//! actions over a channel; the worker applies them one at a time in arrival
//! order. Only the latest resulting state is kept for readers, so a caller
//! that never reads does not build up a backlog.

use std::thread::{self, JoinHandle};

use tracing::{debug, warn};

use super::reducer::Store;
use super::{Action, CalculatorState};
use crate::error::DispatchError;

/// Cloneable sender for a [`Dispatcher`].
#[derive(Clone, Debug)]
pub struct DispatchHandle {
    actions: flume::Sender<Action>,
}

impl DispatchHandle {
    pub fn send(&self, action: Action) -> Result<(), DispatchError> {
        self.actions
            .send(action)
            .map_err(|_| DispatchError::Disconnected)
    }
}

/// Owns the worker thread and the latest published state.
pub struct Dispatcher {
    handle: Option<DispatchHandle>,
    /// Dropping this tells the worker to finish, even with handles still out.
    stop: Option<flume::Sender<()>>,
    states: flume::Receiver<CalculatorState>,
    latest: CalculatorState,
    worker: Option<JoinHandle<CalculatorState>>,
}

impl Dispatcher {
    /// Start a worker from the all-clear state.
    pub fn spawn() -> Self {
        Self::with_state(CalculatorState::default())
    }

    /// Start a worker from `initial`.
    pub fn with_state(initial: CalculatorState) -> Self {
        let (action_tx, action_rx) = flume::unbounded::<Action>();
        let (stop_tx, stop_rx) = flume::bounded::<()>(0);
        // Capacity one: the slot holds the latest state only.
        let (state_tx, state_rx) = flume::bounded::<CalculatorState>(1);
        let slot = state_rx.clone();
        let latest = initial.clone();

        let worker = thread::spawn(move || {
            let mut store = Store::with_state(initial);

            let publish = |state: &CalculatorState| {
                // Replace whatever nobody has read yet.
                let _ = slot.try_recv();
                let _ = state_tx.try_send(state.clone());
            };

            loop {
                let next = flume::Selector::new()
                    .recv(&action_rx, |action| action.ok())
                    .recv(&stop_rx, |_| None)
                    .wait();

                match next {
                    Some(action) => publish(store.dispatch(&action)),
                    None => break,
                }
            }

            // Apply whatever was queued before the stop.
            for action in action_rx.try_iter() {
                publish(store.dispatch(&action));
            }

            debug!(actions = store.history_len(), "Dispatcher worker stopped");
            store.into_state()
        });

        Self {
            handle: Some(DispatchHandle { actions: action_tx }),
            stop: Some(stop_tx),
            states: state_rx,
            latest,
            worker: Some(worker),
        }
    }

    /// A sender that can be moved to other threads.
    pub fn handle(&self) -> Result<DispatchHandle, DispatchError> {
        self.handle.clone().ok_or(DispatchError::Disconnected)
    }

    pub fn send(&self, action: Action) -> Result<(), DispatchError> {
        self.handle
            .as_ref()
            .ok_or(DispatchError::Disconnected)?
            .send(action)
    }

    /// Block until the worker publishes a state not yet read.
    ///
    /// States published in between are skipped; the latest one is returned.
    pub fn recv(&mut self) -> Result<&CalculatorState, DispatchError> {
        self.latest = self
            .states
            .recv()
            .map_err(|_| DispatchError::Disconnected)?;
        Ok(&self.latest)
    }

    /// The most recently published state, without blocking.
    pub fn snapshot(&mut self) -> &CalculatorState {
        if let Ok(state) = self.states.try_recv() {
            self.latest = state;
        }
        &self.latest
    }

    /// Stop the worker once it has applied every action already sent.
    ///
    /// Outstanding [`DispatchHandle`]s get [`DispatchError::Disconnected`]
    /// from then on.
    pub fn shutdown(mut self) -> Result<CalculatorState, DispatchError> {
        self.stop_worker()
            .ok_or(DispatchError::Disconnected)?
            .join()
            .map_err(|_| DispatchError::WorkerPanicked)
    }

    fn stop_worker(&mut self) -> Option<JoinHandle<CalculatorState>> {
        self.handle.take();
        self.stop.take();
        self.worker.take()
    }
}

impl Drop for Dispatcher {
    fn drop(&mut self) {
        if let Some(worker) = self.stop_worker()
            && worker.join().is_err()
        {
            warn!("Dispatcher worker panicked");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::Operation;
    use crate::state::Digit;

    fn d(c: char) -> Action {
        Action::add_digit(Digit::new(c).unwrap())
    }

    #[test]
    fn test_applies_actions_in_order() {
        let dispatcher = Dispatcher::spawn();
        for action in [
            d('1'),
            d('2'),
            Action::choose_operation(Operation::Subtract),
            d('5'),
            Action::Evaluate,
        ] {
            dispatcher.send(action).unwrap();
        }

        let state = dispatcher.shutdown().unwrap();
        assert_eq!(state.current_operand, "7");
        assert!(state.overwrite);
    }

    #[test]
    fn test_publishes_each_state() {
        let mut dispatcher = Dispatcher::spawn();
        dispatcher.send(d('4')).unwrap();
        assert_eq!(dispatcher.recv().unwrap().current_operand, "4");

        dispatcher.send(d('2')).unwrap();
        assert_eq!(dispatcher.recv().unwrap().current_operand, "42");
        assert_eq!(dispatcher.snapshot().current_operand, "42");
    }

    #[test]
    fn test_snapshot_without_actions() {
        let initial = CalculatorState {
            current_operand: "3".to_string(),
            ..CalculatorState::default()
        };
        let mut dispatcher = Dispatcher::with_state(initial.clone());
        assert_eq!(dispatcher.snapshot(), &initial);
    }

    #[test]
    fn test_serializes_concurrent_producers() {
        let dispatcher = Dispatcher::spawn();

        let producers: Vec<_> = (0..4)
            .map(|_| {
                let handle = dispatcher.handle().unwrap();
                thread::spawn(move || {
                    for _ in 0..5 {
                        handle.send(d('1')).unwrap();
                    }
                })
            })
            .collect();

        for producer in producers {
            producer.join().unwrap();
        }

        let state = dispatcher.shutdown().unwrap();
        assert_eq!(state.current_operand, "1".repeat(20));
    }

    #[test]
    fn test_handle_disconnected_after_shutdown() {
        let dispatcher = Dispatcher::spawn();
        let handle = dispatcher.handle().unwrap();
        handle.send(d('1')).unwrap();
        handle.send(d('2')).unwrap();
        handle.send(d('3')).unwrap();

        // A live handle does not keep the worker running.
        let state = dispatcher.shutdown().unwrap();
        assert_eq!(state.current_operand, "123");

        assert_eq!(handle.send(d('4')), Err(DispatchError::Disconnected));
    }

    #[test]
    fn test_drop_with_live_handle() {
        let dispatcher = Dispatcher::spawn();
        let handle = dispatcher.handle().unwrap();
        drop(dispatcher);
        assert_eq!(handle.send(Action::AllClear), Err(DispatchError::Disconnected));
    }

    #[test]
    fn test_unread_states_do_not_pile_up() {
        let mut dispatcher = Dispatcher::spawn();
        for _ in 0..999 {
            dispatcher.send(Action::AllClear).unwrap();
        }
        dispatcher.send(d('7')).unwrap();

        while dispatcher.recv().unwrap().current_operand != "7" {}
        assert!(dispatcher.states.is_empty());
        assert_eq!(dispatcher.snapshot().current_operand, "7");
    }
}
