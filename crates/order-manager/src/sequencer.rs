//! Order id sequencing
//!
//! Ids are handed out in blocks of [`ID_STRIDE`], one block per strategy
//! evaluation pass, whether or not the pass produced any intents. Intents of
//! a pass take consecutive ids from the start of their block.

use etc_core::{OrderId, OrderIntent, WireOrder};

/// Ids reserved per evaluation pass
pub const ID_STRIDE: OrderId = 2;

/// First id ever issued
const FIRST_ID: OrderId = 1;

#[derive(Debug, Clone)]
pub struct OrderSequencer {
    next_base: OrderId,
}

impl Default for OrderSequencer {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderSequencer {
    pub fn new() -> Self {
        Self {
            next_base: FIRST_ID,
        }
    }

    /// Reserve the next block and return its first id
    pub fn next_id(&mut self) -> OrderId {
        let base = self.next_base;
        self.next_base += ID_STRIDE;
        base
    }

    /// Id the next block will start at
    pub fn peek(&self) -> OrderId {
        self.next_base
    }

    /// Assign ids to one pass worth of intents
    ///
    /// A pass larger than a block pushes the following block past the last id
    /// used, keeping block starts on the stride.
    pub fn sequence(&mut self, intents: Vec<OrderIntent>) -> Vec<WireOrder> {
        let base = self.next_id();
        let count = intents.len() as OrderId;

        if count > ID_STRIDE {
            let blocks = count.div_ceil(ID_STRIDE);
            self.next_base = base + blocks * ID_STRIDE;
            log::debug!(
                "[OrderSequencer] pass of {} intents spans {} blocks, next id {}",
                count,
                blocks,
                self.next_base
            );
        }

        intents
            .into_iter()
            .zip(base..)
            .map(|(intent, id)| intent.into_wire(id))
            .collect()
    }
}
