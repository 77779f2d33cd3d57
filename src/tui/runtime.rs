use tokio::sync::mpsc;
use tracing::{debug, trace};

use super::action::Action;
use super::component::{Component, Effect, Element};
use super::components::{App, AppProps};
use super::reducer::reduce;
use super::state::AppState;

/// Drives the host: dispatches actions through the reducer and runs effects
///
/// Async effects run on a separate executor task and feed their resulting
/// action back through the action channel, which the main loop drains with
/// [`Runtime::process_actions`].
pub struct Runtime {
    state: AppState,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
    effect_tx: mpsc::UnboundedSender<Effect>,
}

impl Runtime {
    /// Must be called inside a tokio runtime
    pub fn new(initial_state: AppState) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let (effect_tx, mut effect_rx) = mpsc::unbounded_channel();

        let action_tx_clone = action_tx.clone();
        tokio::spawn(async move {
            Self::run_effect_executor(&mut effect_rx, action_tx_clone).await;
        });

        Self {
            state: initial_state,
            action_tx,
            action_rx,
            effect_tx,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) {
        trace!("ACTION: Dispatching {:?}", action);
        let effect = reduce(&mut self.state, action);
        self.execute_effect(effect);
    }

    fn execute_effect(&self, effect: Effect) {
        match effect {
            Effect::None => {}
            Effect::Batch(effects) => {
                for e in effects {
                    self.execute_effect(e);
                }
            }
            Effect::Action(_) | Effect::Async(_) => {
                trace!("ACTION: Queueing effect for async execution");
                let _ = self.effect_tx.send(effect);
            }
        }
    }

    /// Process all pending actions in the queue
    ///
    /// Returns the number of actions processed
    pub fn process_actions(&mut self) -> usize {
        let mut count = 0;
        while let Ok(action) = self.action_rx.try_recv() {
            self.dispatch(action);
            count += 1;
        }
        count
    }

    /// Build the virtual element tree from current state
    pub fn build(&self) -> Element {
        let props = AppProps::from_state(&self.state);
        App.view(&props, &())
    }

    /// Get a sender for dispatching actions from external sources
    pub fn action_sender(&self) -> mpsc::UnboundedSender<Action> {
        self.action_tx.clone()
    }

    async fn run_effect_executor(
        effect_rx: &mut mpsc::UnboundedReceiver<Effect>,
        action_tx: mpsc::UnboundedSender<Action>,
    ) {
        while let Some(effect) = effect_rx.recv().await {
            Self::process_effect_async(effect, &action_tx);
        }
        debug!("EFFECT: executor stopped");
    }

    fn process_effect_async(effect: Effect, action_tx: &mpsc::UnboundedSender<Action>) {
        match effect {
            Effect::None => {}
            Effect::Action(action) => {
                let _ = action_tx.send(action);
            }
            Effect::Batch(effects) => {
                for e in effects {
                    Self::process_effect_async(e, action_tx);
                }
            }
            Effect::Async(future) => {
                let action_tx = action_tx.clone();
                tokio::spawn(async move {
                    let action = future.await;
                    let _ = action_tx.send(action);
                });
            }
        }
    }
}
