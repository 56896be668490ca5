use parking_lot::Mutex;
use std::sync::Arc;
use tokio::sync::mpsc;

use super::{BridgeError, Message};

pub type Subscription = mpsc::UnboundedReceiver<Message>;

/// Named broadcast channel shared by bridge clients and service hosts.
///
/// Every subscriber sees every message posted after it subscribed, so clients
/// and hosts filter by service name and call id. Each subscriber has its own
/// unbounded queue: a slow reader delays only itself and never loses messages.
#[derive(Clone, Debug)]
pub struct Endpoint {
    name: String,
    subscribers: Arc<Mutex<Vec<mpsc::UnboundedSender<Message>>>>,
}

impl Endpoint {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            subscribers: Arc::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The subscription ends once every handle to this endpoint is dropped.
    pub fn subscribe(&self) -> Subscription {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers.lock().push(tx);
        rx
    }

    pub fn post(&self, message: Message) -> Result<(), BridgeError> {
        let mut subscribers = self.subscribers.lock();
        subscribers.retain(|tx| tx.send(message.clone()).is_ok());

        if subscribers.is_empty() {
            return Err(BridgeError::NoListeners {
                endpoint: self.name.clone(),
            });
        }
        Ok(())
    }
}
