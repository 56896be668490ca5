use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::{Call, Endpoint, Message, Outcome, Reply};

/// Remote side of the bridge: answers method calls by name.
#[async_trait]
pub trait Service: Send + Sync + 'static {
    async fn call(&self, method: &str, args: Vec<Value>) -> anyhow::Result<Value>;
}

/// Host `service` on `endpoint` under the name `name`.
///
/// The subscription is taken before this returns, so calls posted afterwards
/// are never missed. Each call runs on its own task.
pub fn serve(name: &str, endpoint: Endpoint, service: Arc<dyn Service>) -> JoinHandle<()> {
    let mut receiver = endpoint.subscribe();
    let name = name.to_string();
    info!("Serving {} on endpoint {}", name, endpoint.name());

    tokio::spawn(async move {
        while let Some(message) = receiver.recv().await {
            if let Message::Call(call) = message {
                if call.service == name {
                    tokio::spawn(answer(endpoint.clone(), service.clone(), call));
                }
            }
        }
        debug!("{} stopped", name);
    })
}

async fn answer(endpoint: Endpoint, service: Arc<dyn Service>, call: Call) {
    debug!("{}.{} called ({})", call.service, call.method, call.id);

    let outcome = match service.call(&call.method, call.args).await {
        Ok(value) => Outcome::Resolved(value),
        Err(e) => Outcome::Rejected(e.to_string()),
    };

    let reply = Message::Reply(Reply {
        id: call.id,
        service: call.service,
        outcome,
    });

    if let Err(e) = endpoint.post(reply) {
        warn!("Failed to post reply for {}: {}", call.id, e);
    }
}
