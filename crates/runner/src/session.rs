//! Trading session
//!
//! One task owns the connection and every piece of mutable state. Each
//! inbound line is decoded and folded into the current tick; when the
//! elapsed-second counter moves past the tick, the snapshot is evaluated and
//! any orders are sent before the next line is read.

use crate::config::SessionConfig;
use crate::error::SessionError;
use etc_clock::{Clock, SessionClock, SystemClock};
use etc_core::{TickId, TickSnapshot};
use etc_gateway::{
    InboundMessage, LineStream, LineTransport, OutboundCommand, TransportError, decode, encode,
};
use etc_market_data::{Absorbed, SnapshotHistory, TickAggregator};
use etc_order_manager::OrderSequencer;
use etc_strategy::{RuleBook, Strategy};
use log::{debug, info, trace, warn};
use std::time::Duration;

/// Counters reported when the session ends
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub lines_received: u64,
    pub trades_applied: u64,
    /// Lines that failed to decode
    pub lines_dropped: u64,
    /// Messages other than trade updates
    pub unrecognized: u64,
    /// Trade updates for symbols outside the universe
    pub unknown_symbols: u64,
    pub ticks_evaluated: u64,
    pub orders_sent: u64,
    pub last_tick: Option<TickId>,
}

/// Everything a finished session hands back
#[derive(Debug, Clone, Default)]
pub struct SessionOutcome {
    pub summary: SessionSummary,
    pub history: SnapshotHistory,
    /// The exchange's line after trading ended, if one arrived in time
    pub closing_reply: Option<String>,
}

pub struct Session<T: LineTransport, C: Clock> {
    team_name: String,
    transport: T,
    clock: SessionClock<C>,
    aggregator: TickAggregator,
    strategy: RuleBook,
    sequencer: OrderSequencer,
    history: SnapshotHistory,
    summary: SessionSummary,
    final_reply_timeout: Option<Duration>,
}

impl<T: LineTransport, C: Clock> Session<T, C> {
    pub fn new(config: &SessionConfig, transport: T, clock: C) -> Self {
        Self {
            team_name: config.team_name.clone(),
            transport,
            clock: SessionClock::start(clock),
            aggregator: TickAggregator::new(config.universe.clone(), config.tick_budget),
            strategy: RuleBook::from_config(&config.strategy),
            sequencer: OrderSequencer::new(),
            history: SnapshotHistory::new(),
            summary: SessionSummary::default(),
            final_reply_timeout: config.final_reply_timeout(),
        }
    }

    /// Trade until the tick budget is spent
    ///
    /// Any transport failure ends the session. Lines that fail to decode are
    /// logged and dropped.
    pub async fn run(mut self) -> Result<SessionOutcome, SessionError> {
        self.send(&OutboundCommand::hello(self.team_name.clone())).await?;
        info!("Sent handshake as {}", self.team_name);

        self.clock.restart();
        info!(
            "Session started: {} ticks over {} symbols, {} rule(s)",
            self.aggregator.tick_budget(),
            self.aggregator.universe().len(),
            self.strategy.len()
        );

        while !self.aggregator.is_done() {
            let line = self.transport.receive_line().await?;
            self.summary.lines_received += 1;
            self.handle_line(&line);

            let elapsed = self.clock.elapsed_secs();
            if let Some(snapshot) = self.aggregator.advance(elapsed) {
                self.on_tick(snapshot).await?;
            }
        }

        let closing_reply = self.read_closing_reply().await;

        let summary = self.summary;
        info!(
            "Session complete: {} ticks, {} orders sent, {} trades applied, {} lines dropped",
            summary.ticks_evaluated,
            summary.orders_sent,
            summary.trades_applied,
            summary.lines_dropped
        );

        Ok(SessionOutcome {
            summary,
            history: self.history,
            closing_reply,
        })
    }

    fn handle_line(&mut self, line: &str) {
        match decode(line) {
            Ok(InboundMessage::Trade(update)) => match self.aggregator.absorb(&update) {
                Absorbed::Applied => self.summary.trades_applied += 1,
                Absorbed::UnknownSymbol => {
                    self.summary.unknown_symbols += 1;
                    debug!("Ignoring trade for untracked symbol {}", update.symbol);
                }
                Absorbed::Finished => {}
            },
            Ok(InboundMessage::Unrecognized { kind, .. }) => {
                self.summary.unrecognized += 1;
                trace!("Unrecognized message {}", kind);
            }
            Err(e) => {
                self.summary.lines_dropped += 1;
                warn!("Dropping line {:?}: {}", line, e);
            }
        }
    }

    async fn on_tick(&mut self, snapshot: TickSnapshot) -> Result<(), TransportError> {
        debug!(
            "Tick {} closed, {}/{} symbols priced",
            snapshot.tick_id(),
            snapshot.priced_count(),
            self.aggregator.universe().len()
        );

        let intents = self.strategy.evaluate(&snapshot);
        for order in self.sequencer.sequence(intents) {
            let command = OutboundCommand::Add(order);
            self.send(&command).await?;
            info!("Sent {}", command);
            self.summary.orders_sent += 1;
        }

        self.summary.ticks_evaluated += 1;
        self.summary.last_tick = Some(snapshot.tick_id());
        self.history.push(snapshot);
        Ok(())
    }

    async fn send(&mut self, command: &OutboundCommand) -> Result<(), TransportError> {
        self.transport.send_line(&encode(command)).await
    }

    /// One bounded read after trading; failures here only get logged
    async fn read_closing_reply(&mut self) -> Option<String> {
        let limit = self.final_reply_timeout?;
        match tokio::time::timeout(limit, self.transport.receive_line()).await {
            Ok(Ok(line)) => {
                info!("The exchange replied: {}", line);
                Some(line)
            }
            Ok(Err(e)) => {
                warn!("No closing reply from the exchange: {}", e);
                None
            }
            Err(_) => {
                warn!("No closing reply from the exchange within {:?}", limit);
                None
            }
        }
    }
}

/// Connect to the configured exchange and run a session on the wall clock
pub async fn run_session(config: &SessionConfig) -> Result<SessionOutcome, SessionError> {
    let endpoint = config.exchange.endpoint(&config.team_name);
    info!("Connecting to exchange at {}", endpoint);
    let stream = LineStream::connect(&endpoint).await?;
    Session::new(config, stream, SystemClock::new()).run().await
}
