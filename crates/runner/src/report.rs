//! End-of-session report
//!
//! One section per symbol, in universe order:
//!
//! ```text
//!
//!
//! VALE
//! time,price,volume
//! 0,120,5
//! 1,121,0
//! ```
//!
//! A symbol that had not traded yet has an empty price field.

use crate::error::ReportWriteError;
use etc_core::{Price, SymbolUniverse, TickId, Volume};
use etc_market_data::SnapshotHistory;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

const COLUMNS: [&str; 3] = ["time", "price", "volume"];

#[derive(Serialize)]
struct ReportRow {
    time: TickId,
    price: Option<Price>,
    volume: Volume,
}

/// Write the report to a file, replacing any existing one
pub fn write_report(
    path: &Path,
    universe: &SymbolUniverse,
    history: &SnapshotHistory,
) -> Result<(), ReportWriteError> {
    let file = File::create(path)?;
    write_report_to(file, universe, history)?;
    log::info!(
        "Wrote {} ticks for {} symbols to {}",
        history.len(),
        universe.len(),
        path.display()
    );
    Ok(())
}

pub fn write_report_to<W: Write>(
    mut out: W,
    universe: &SymbolUniverse,
    history: &SnapshotHistory,
) -> Result<(), ReportWriteError> {
    for symbol in universe.iter() {
        // section titles are not csv records
        write!(out, "\n\n{}\n", symbol)?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(&mut out);
        writer.write_record(COLUMNS)?;
        for (time, quote) in history.series(symbol) {
            writer.serialize(ReportRow {
                time,
                price: quote.price,
                volume: quote.volume,
            })?;
        }
        writer.flush()?;
    }

    out.flush()?;
    Ok(())
}
