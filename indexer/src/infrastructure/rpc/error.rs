use thiserror::Error;

/// Error type for JSON-RPC client operations
#[derive(Debug, Error)]
pub enum RpcClientError {
    /// The endpoint could not be reached or the exchange failed mid-flight
    #[error("RPC transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The endpoint answered with a non-2xx HTTP status
    #[error("RPC endpoint returned HTTP status {0}")]
    Status(u16),
    /// The body was not JSON, or the result did not have the expected shape
    #[error("RPC decode error: {0}")]
    Decode(String),
}
