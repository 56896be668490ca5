use thiserror::Error;

#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("Bridge endpoint closed before a reply arrived")]
    Closed,

    #[error("No listeners on endpoint {endpoint}")]
    NoListeners { endpoint: String },

    #[error("Remote method {method} rejected: {reason}")]
    Rejected { method: String, reason: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(#[from] serde_json::Error),
}
