//! Typed publish/subscribe channel with scoped subscriptions.
//!
//! A [`Subscription`] is registered on creation and removed from its bus when
//! dropped, so listener lifetime follows the owner's lifetime on every exit
//! path, including unwinding.

use parking_lot::Mutex;
use std::sync::{Arc, Weak};
use tokio::sync::mpsc;
use tracing::trace;

type Subscribers<T> = Vec<(u64, mpsc::UnboundedSender<T>)>;

struct BusInner<T> {
    next_id: u64,
    subscribers: Subscribers<T>,
}

/// Broadcast channel: every published message reaches every live subscriber
pub struct Bus<T> {
    inner: Arc<Mutex<BusInner<T>>>,
}

impl<T> Clone for Bus<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Clone + Send + 'static> Default for Bus<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Send + 'static> Bus<T> {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(BusInner {
                next_id: 0,
                subscribers: Vec::new(),
            })),
        }
    }

    /// Register a new listener; it stays registered until the returned guard drops
    pub fn subscribe(&self) -> Subscription<T> {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut inner = self.inner.lock();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.subscribers.push((id, tx));
        trace!("BUS: subscribe id={} (now {})", id, inner.subscribers.len());

        Subscription {
            id,
            rx,
            bus: Arc::downgrade(&self.inner),
        }
    }

    /// Deliver `message` to all subscribers, returning how many received it
    pub fn publish(&self, message: T) -> usize {
        let mut inner = self.inner.lock();
        inner
            .subscribers
            .retain(|(_, tx)| tx.send(message.clone()).is_ok());
        inner.subscribers.len()
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.lock().subscribers.len()
    }
}

/// Scoped registration on a [`Bus`]
pub struct Subscription<T> {
    id: u64,
    rx: mpsc::UnboundedReceiver<T>,
    bus: Weak<Mutex<BusInner<T>>>,
}

impl<T> Subscription<T> {
    /// Next queued message, if any, without waiting
    pub fn try_recv(&mut self) -> Option<T> {
        self.rx.try_recv().ok()
    }

    /// Wait for the next message; `None` once the bus is gone
    pub async fn recv(&mut self) -> Option<T> {
        self.rx.recv().await
    }

    /// Take every queued message
    pub fn drain(&mut self) -> Vec<T> {
        let mut messages = Vec::new();
        while let Ok(message) = self.rx.try_recv() {
            messages.push(message);
        }
        messages
    }
}

impl<T> Drop for Subscription<T> {
    fn drop(&mut self) {
        if let Some(inner) = self.bus.upgrade() {
            let mut inner = inner.lock();
            inner.subscribers.retain(|(id, _)| *id != self.id);
            trace!("BUS: unsubscribe id={} (now {})", self.id, inner.subscribers.len());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publish_reaches_every_subscriber() {
        let bus: Bus<u32> = Bus::new();
        let mut a = bus.subscribe();
        let mut b = bus.subscribe();

        assert_eq!(bus.publish(7), 2);
        assert_eq!(a.try_recv(), Some(7));
        assert_eq!(b.try_recv(), Some(7));
        assert_eq!(a.try_recv(), None);
    }

    #[test]
    fn test_drop_unsubscribes() {
        let bus: Bus<u32> = Bus::new();
        let a = bus.subscribe();
        {
            let _b = bus.subscribe();
            assert_eq!(bus.subscriber_count(), 2);
        }
        assert_eq!(bus.subscriber_count(), 1);
        drop(a);
        assert_eq!(bus.subscriber_count(), 0);
        assert_eq!(bus.publish(1), 0);
    }

    #[test]
    fn test_subscription_outlives_bus() {
        let bus: Bus<u32> = Bus::new();
        let mut sub = bus.subscribe();
        bus.publish(3);
        drop(bus);

        assert_eq!(sub.drain(), vec![3]);
        // Dropping after the bus is gone must not panic
        drop(sub);
    }

    #[test]
    fn test_drain_keeps_order() {
        let bus: Bus<u32> = Bus::new();
        let mut sub = bus.subscribe();
        for i in 0..5 {
            bus.publish(i);
        }
        assert_eq!(sub.drain(), vec![0, 1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn test_recv_waits_for_publish() {
        let bus: Bus<&'static str> = Bus::new();
        let mut sub = bus.subscribe();
        let publisher = bus.clone();
        tokio::spawn(async move {
            publisher.publish("hello");
        });
        assert_eq!(sub.recv().await, Some("hello"));
    }
}
