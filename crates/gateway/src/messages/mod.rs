//! Wire message types and the text codec
//!
//! The exchange speaks a line-oriented, space-separated text protocol. This
//! module is the only place that knows its grammar.

pub mod market_data;
pub mod order;

pub use market_data::{InboundMessage, decode};
pub use order::{OutboundCommand, decode_command, encode};

use crate::error::ProtocolParseError;

/// Parse an integer field, naming the field on failure
pub(crate) fn parse_int<T: std::str::FromStr>(
    token: &str,
    field: &'static str,
) -> Result<T, ProtocolParseError> {
    token
        .parse::<T>()
        .map_err(|_| ProtocolParseError::InvalidInteger {
            field,
            token: token.to_string(),
        })
}
