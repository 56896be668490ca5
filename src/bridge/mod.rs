pub use client::{BridgeClient, ClientOptions};
pub use endpoint::Endpoint;
pub use error::BridgeError;
pub use message::{Call, Message, Outcome, Reply};
pub use server::{serve, Service};

mod client;
mod endpoint;
mod error;
mod message;
mod server;
