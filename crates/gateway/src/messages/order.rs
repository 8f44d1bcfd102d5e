//! Outbound command messages

use crate::error::ProtocolParseError;
use crate::messages::parse_int;
use etc_core::{Side, WireOrder};
use std::fmt;

/// Commands sent to the exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutboundCommand {
    /// `HELLO <TEAM_NAME>`, sent once at session start
    Hello { team_name: String },
    /// `ADD <id> <SYMBOL> <BUY|SELL> <price> <quantity>`
    Add(WireOrder),
}

impl OutboundCommand {
    pub fn hello(team_name: impl Into<String>) -> Self {
        Self::Hello {
            team_name: team_name.into(),
        }
    }
}

impl fmt::Display for OutboundCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hello { team_name } => write!(f, "HELLO {}", team_name),
            Self::Add(order) => write!(
                f,
                "ADD {} {} {} {} {}",
                order.id, order.symbol, order.side, order.price, order.quantity
            ),
        }
    }
}

/// Encode a command as one wire line (without the newline)
pub fn encode(command: &OutboundCommand) -> String {
    command.to_string()
}

/// Decode a line produced by [`encode`]
pub fn decode_command(line: &str) -> Result<OutboundCommand, ProtocolParseError> {
    let mut tokens = line.split_whitespace();
    let kind = tokens.next().ok_or(ProtocolParseError::Empty)?;

    if kind.eq_ignore_ascii_case("HELLO") {
        let team_name = tokens.next().ok_or(ProtocolParseError::MissingField {
            message: "HELLO",
            field: "team_name",
        })?;
        return Ok(OutboundCommand::hello(team_name));
    }
    if !kind.eq_ignore_ascii_case("ADD") {
        return Err(ProtocolParseError::UnexpectedMessage(kind.to_string()));
    }

    let mut field = |name: &'static str| {
        tokens.next().ok_or(ProtocolParseError::MissingField {
            message: "ADD",
            field: name,
        })
    };
    let id = parse_int(field("id")?, "id")?;
    let symbol = field("symbol")?.to_ascii_uppercase();
    let side_token = field("side")?;
    let side = Side::from_token(side_token)
        .ok_or_else(|| ProtocolParseError::UnknownSide(side_token.to_string()))?;
    let price = parse_int(field("price")?, "price")?;
    let quantity = parse_int(field("quantity")?, "quantity")?;

    Ok(OutboundCommand::Add(WireOrder {
        id,
        symbol,
        side,
        price,
        quantity,
    }))
}
