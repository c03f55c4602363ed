//! Errors shared by the remote service ports

use thiserror::Error;

/// Errors that can occur while talking to the QA service
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// The request never produced a response (connection refused, DNS, ...)
    #[error("Network error: {0}")]
    Network(String),

    /// The response body could not be decoded
    #[error("Malformed response: {0}")]
    Decode(String),

    /// The service answered with a non-2xx status
    #[error("Server returned {status}: {body}")]
    Server { status: u16, body: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_display() {
        let err = GatewayError::Server {
            status: 404,
            body: "not found".to_string(),
        };
        assert_eq!(err.to_string(), "Server returned 404: not found");
    }

    #[test]
    fn test_network_error_display() {
        let err = GatewayError::Network("connection refused".to_string());
        assert_eq!(err.to_string(), "Network error: connection refused");
    }
}
