//! Cross-component jump protocol.
//!
//! A command viewer outside the panel's control flow asks for the hiding view
//! by publishing [`SignalKind::OpenHider`] with a section index. The listener
//! switches to the last tab and releases the index, either after a delay or
//! right away. A released index is handed to the hiding content with a second,
//! tab-internal [`SignalKind::HiderSelect`] signal as soon as that content is
//! mounted, so on the compact form factor it survives until the user opens the
//! hiding tab from the list.

use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use super::bus::{Bus, Subscription};
use super::error::PanelResult;
use super::state::ActiveTabState;

/// Default wait between switching tabs and notifying the hiding content
pub const DEFAULT_JUMP_DELAY: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalKind {
    /// External request: open the hiding tab at a section
    OpenHider,
    /// Tab-internal: preselect a section in the mounted hiding content
    HiderSelect,
}

/// Message schema shared by emitters and receivers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelSignal {
    pub kind: SignalKind,
    pub index: usize,
}

impl PanelSignal {
    pub fn open_hider(index: usize) -> Self {
        Self {
            kind: SignalKind::OpenHider,
            index,
        }
    }

    pub fn hider_select(index: usize) -> Self {
        Self {
            kind: SignalKind::HiderSelect,
            index,
        }
    }
}

/// Channel owned by the panel and injected into emitters and receivers
pub type SignalBus = Bus<PanelSignal>;

/// How the second step of a jump reaches the hiding content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpDelivery {
    /// Release the index after a fixed delay
    Delay(Duration),
    /// Release the index immediately; it is delivered once the content mounts
    OnReady,
}

impl Default for JumpDelivery {
    fn default() -> Self {
        Self::Delay(DEFAULT_JUMP_DELAY)
    }
}

/// Turns `OpenHider` requests into tab switches plus a delivered section index
pub struct ExternalJumpListener {
    bus: SignalBus,
    signals: Subscription<PanelSignal>,
    delivery: JumpDelivery,
    timers: Vec<JoinHandle<()>>,
    released: Arc<Mutex<Option<usize>>>,
}

impl ExternalJumpListener {
    pub fn mount(bus: &SignalBus, delivery: JumpDelivery) -> Self {
        Self {
            bus: bus.clone(),
            signals: bus.subscribe(),
            delivery,
            timers: Vec::new(),
            released: Arc::new(Mutex::new(None)),
        }
    }

    pub fn delivery(&self) -> JumpDelivery {
        self.delivery
    }

    /// Apply every queued jump request to `state`, returning how many were handled
    pub fn apply(&mut self, state: &mut ActiveTabState) -> PanelResult<usize> {
        let mut handled = 0;
        for signal in self.signals.drain() {
            if signal.kind != SignalKind::OpenHider {
                continue;
            }
            debug!("JUMP: open hider at section {}", signal.index);
            state.select(state.last_index())?;
            state.set_drilled_in(true);
            self.schedule(signal.index);
            handled += 1;
        }
        Ok(handled)
    }

    /// The hiding content is mounted and listening
    ///
    /// Publishes the released index, if any, exactly once. The panel calls this
    /// on every refresh while the hiding content is on screen.
    pub fn content_ready(&mut self) {
        let released = self.released.lock().take();
        if let Some(index) = released {
            debug!("JUMP: delivering section {} to hiding content", index);
            self.bus.publish(PanelSignal::hider_select(index));
        }
    }

    /// Index released but not yet handed to the hiding content
    pub fn awaiting_ready(&self) -> Option<usize> {
        *self.released.lock()
    }

    /// Delay timers that have not fired yet
    pub fn pending_timers(&self) -> usize {
        self.timers.iter().filter(|timer| !timer.is_finished()).count()
    }

    fn schedule(&mut self, index: usize) {
        // A newer request replaces any release still pending
        for timer in self.timers.drain(..) {
            timer.abort();
        }
        *self.released.lock() = None;

        match self.delivery {
            JumpDelivery::Delay(delay) => match Handle::try_current() {
                Ok(handle) => {
                    let released = Arc::clone(&self.released);
                    self.timers.push(handle.spawn(async move {
                        tokio::time::sleep(delay).await;
                        *released.lock() = Some(index);
                    }));
                }
                Err(_) => {
                    warn!("JUMP: no runtime for delay timer, releasing section {} now", index);
                    *self.released.lock() = Some(index);
                }
            },
            JumpDelivery::OnReady => {
                *self.released.lock() = Some(index);
            }
        }
    }
}

impl Drop for ExternalJumpListener {
    fn drop(&mut self) {
        for timer in &self.timers {
            timer.abort();
        }
    }
}
