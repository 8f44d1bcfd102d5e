use etc_core::{SymbolQuote, TickId, TickSnapshot};

/// Every snapshot published during a session, in publication order
#[derive(Debug, Clone, Default)]
pub struct SnapshotHistory {
    snapshots: Vec<TickSnapshot>,
}

impl SnapshotHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, snapshot: TickSnapshot) {
        self.snapshots.push(snapshot);
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn last(&self) -> Option<&TickSnapshot> {
        self.snapshots.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TickSnapshot> {
        self.snapshots.iter()
    }

    /// Tick-by-tick quotes for one symbol
    pub fn series<'a>(
        &'a self,
        symbol: &'a str,
    ) -> impl Iterator<Item = (TickId, SymbolQuote)> + 'a {
        self.snapshots.iter().map(move |snap| {
            (
                snap.tick_id(),
                snap.quote(symbol).copied().unwrap_or_default(),
            )
        })
    }
}
