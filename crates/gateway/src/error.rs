//! Error types for the gateway crate

use std::net::SocketAddr;
use thiserror::Error;

/// Failures establishing the connection. Fatal before trading begins.
#[derive(Error, Debug)]
pub enum ConnectionError {
    #[error("Could not resolve host '{host}': {source}")]
    Resolve {
        host: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Host '{host}' resolved to no addresses")]
    NoAddress { host: String },

    #[error("Could not connect to {addr}: {source}")]
    Connect {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
}

/// Failures on an established connection. Fatal to the session.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Error sending to exchange: {0}")]
    Send(#[source] std::io::Error),

    #[error("Error reading line from exchange: {0}")]
    Receive(#[source] std::io::Error),

    #[error("Exchange closed the connection")]
    StreamClosed,

    #[error("Connection closed mid-line after {len} bytes")]
    Unterminated { len: usize },

    #[error("Inbound line exceeds {limit} bytes")]
    LineTooLong { limit: usize },
}

/// A line that does not follow the wire grammar. Recoverable: the line is dropped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProtocolParseError {
    #[error("Empty line")]
    Empty,

    #[error("{message} message is missing field '{field}'")]
    MissingField {
        message: &'static str,
        field: &'static str,
    },

    #[error("Field '{field}' is not an integer: '{token}'")]
    InvalidInteger { field: &'static str, token: String },

    #[error("Unknown order side '{0}'")]
    UnknownSide(String),

    #[error("Unexpected message type '{0}'")]
    UnexpectedMessage(String),
}
