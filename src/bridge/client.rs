use parking_lot::Mutex;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::debug;
use uuid::Uuid;

use super::endpoint::Subscription;
use super::{BridgeError, Call, Endpoint, Message, Outcome};

type Pending = Arc<Mutex<HashMap<Uuid, oneshot::Sender<Outcome>>>>;

/// Options for binding a client to a remote service
#[derive(Debug, Clone)]
pub struct ClientOptions {
    pub service: String,
    pub endpoint: Endpoint,
}

/// RPC handle for one named service behind a broadcast endpoint.
///
/// Cheap to clone; all clones share one reply listener and pending-call table.
#[derive(Clone)]
pub struct BridgeClient {
    inner: Arc<Inner>,
}

struct Inner {
    service: String,
    endpoint: Endpoint,
    pending: Pending,
    listener: JoinHandle<()>,
}

impl Drop for Inner {
    fn drop(&mut self) {
        self.listener.abort();
    }
}

/// Removes a call from the pending table however its caller finishes,
/// including when the caller's future is dropped mid-call.
struct PendingCall {
    id: Uuid,
    pending: Pending,
}

impl Drop for PendingCall {
    fn drop(&mut self) {
        self.pending.lock().remove(&self.id);
    }
}

impl BridgeClient {
    /// Must be called from within a tokio runtime.
    pub fn new(options: ClientOptions) -> Self {
        let pending: Pending = Arc::default();
        let subscription = options.endpoint.subscribe();
        let listener = tokio::spawn(listen(
            options.service.clone(),
            subscription,
            pending.clone(),
        ));

        Self {
            inner: Arc::new(Inner {
                service: options.service,
                endpoint: options.endpoint,
                pending,
                listener,
            }),
        }
    }

    pub fn service(&self) -> &str {
        &self.inner.service
    }

    /// Calls still waiting for a reply
    #[cfg(test)]
    pub fn pending_calls(&self) -> usize {
        self.inner.pending.lock().len()
    }

    /// Invoke `name` on the remote service and decode its result.
    pub async fn method<R>(&self, name: &str, args: Vec<Value>) -> Result<R, BridgeError>
    where
        R: DeserializeOwned,
    {
        let id = Uuid::new_v4();
        let (tx, rx) = oneshot::channel();
        self.inner.pending.lock().insert(id, tx);
        let _guard = PendingCall {
            id,
            pending: self.inner.pending.clone(),
        };

        let call = Message::Call(Call {
            id,
            service: self.inner.service.clone(),
            method: name.to_string(),
            args,
        });

        debug!("Calling {}.{} ({})", self.inner.service, name, id);
        self.inner.endpoint.post(call)?;

        match rx.await.map_err(|_| BridgeError::Closed)? {
            Outcome::Resolved(value) => Ok(serde_json::from_value(value)?),
            Outcome::Rejected(reason) => Err(BridgeError::Rejected {
                method: name.to_string(),
                reason,
            }),
        }
    }
}

async fn listen(service: String, mut subscription: Subscription, pending: Pending) {
    while let Some(message) = subscription.recv().await {
        if let Message::Reply(reply) = message {
            if reply.service != service {
                continue;
            }
            // Unknown ids belong to other clients of the same service
            let waiting = pending.lock().remove(&reply.id);
            if let Some(tx) = waiting {
                let _ = tx.send(reply.outcome);
            }
        }
    }
    // Only reached once every endpoint handle is gone; anything still
    // waiting can never be answered
    pending.lock().clear();
}
