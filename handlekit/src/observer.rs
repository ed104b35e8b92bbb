//! Progress observers.
//!
//! A handle reports each distinct progress value to its observers, in
//! subscription order. Closures and channel senders both work as observers.

use tokio::sync::mpsc;

/// Receives progress changes.
pub trait ProgressObserver {
    fn on_progress(&mut self, progress: f64);
}

impl<F: FnMut(f64)> ProgressObserver for F {
    fn on_progress(&mut self, progress: f64) {
        self(progress)
    }
}

/// Forwards progress values into a tokio channel.
///
/// Sending to a closed channel is silently dropped.
#[derive(Debug, Clone)]
pub struct ChannelObserver(mpsc::UnboundedSender<f64>);

impl ChannelObserver {
    pub fn new(sender: mpsc::UnboundedSender<f64>) -> Self {
        Self(sender)
    }
}

impl ProgressObserver for ChannelObserver {
    fn on_progress(&mut self, progress: f64) {
        if self.0.send(progress).is_err() {
            log::trace!("[observer] receiver dropped, progress {progress} discarded");
        }
    }
}

/// Create a channel-backed observer and the receiving end.
pub fn channel() -> (ChannelObserver, mpsc::UnboundedReceiver<f64>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (ChannelObserver::new(tx), rx)
}

/// Identifies a subscription for later removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Ordered list of subscribed observers.
#[derive(Default)]
pub struct ProgressObservers {
    next_id: u64,
    entries: Vec<(SubscriptionId, Box<dyn ProgressObserver>)>,
}

impl ProgressObservers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, observer: impl ProgressObserver + 'static) -> SubscriptionId {
        self.subscribe_boxed(Box::new(observer))
    }

    pub fn subscribe_boxed(&mut self, observer: Box<dyn ProgressObserver>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, observer));
        id
    }

    /// Remove a subscription. Returns true if it existed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    pub fn notify(&mut self, progress: f64) {
        for (_, observer) in &mut self.entries {
            observer.on_progress(progress);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl std::fmt::Debug for ProgressObservers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ProgressObservers({} subscribed)", self.entries.len())
    }
}
