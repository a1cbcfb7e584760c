//! CSV exports: the prize-draw audit record and the standings table.

use crate::models::{DrawState, Standing, StandingRow};
use serde::Serialize;
use std::io;

#[derive(Serialize)]
struct AuditRecord<'a> {
    position: usize,
    name: &'a str,
    winner: bool,
    seed: &'a str,
}

/// Write the full draw order, one row per name, flagging the winners.
/// Every row carries the seed so the file alone is enough to re-verify.
pub fn write_draw_audit<W: io::Write>(draw: &DrawState, writer: W) -> Result<(), csv::Error> {
    let winners = draw.winners().len();
    let mut wtr = csv::Writer::from_writer(writer);
    for (i, name) in draw.full_order.iter().enumerate() {
        wtr.serialize(AuditRecord {
            position: i + 1,
            name,
            winner: i < winners,
            seed: &draw.seed,
        })?;
    }
    wtr.flush()?;
    Ok(())
}

/// Draw audit record as a CSV string.
pub fn draw_audit_csv(draw: &DrawState) -> Result<String, csv::Error> {
    let mut buf = Vec::new();
    write_draw_audit(draw, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Write standings in the compact table shape.
pub fn write_standings<W: io::Write>(standings: &[Standing], writer: W) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    for s in standings {
        wtr.serialize(StandingRow::from(s))?;
    }
    wtr.flush()?;
    Ok(())
}
