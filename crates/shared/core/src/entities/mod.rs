mod order;
mod side;
mod snapshot;
mod trade;

pub use order::{OrderIntent, WireOrder};
pub use side::Side;
pub use snapshot::{SymbolQuote, TickSnapshot};
pub use trade::TradeUpdate;
