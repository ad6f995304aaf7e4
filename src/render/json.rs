//! JSON report.

use std::io::Write;

use serde::Serialize;

use crate::error::{RankError, Result};
use crate::rank::Ranking;

/// Write `ranking` as a pretty-printed JSON array, in ranked order.
pub fn render_json<W: Write>(ranking: &Ranking, mut writer: W) -> Result<()> {
    let entries: Vec<JsonEntry> = ranking
        .iter()
        .map(|entry| JsonEntry {
            colour: entry.colour.hex(),
            rgba16: entry.colour.to_rgba16(),
            count: entry.count,
        })
        .collect();

    let json = serde_json::to_string_pretty(&entries).map_err(|e| RankError::Render {
        message: format!("Failed to serialize ranking: {}", e),
    })?;
    writeln!(writer, "{}", json)?;
    writer.flush()?;
    Ok(())
}

#[derive(Serialize)]
struct JsonEntry {
    colour: String,
    rgba16: [u16; 4],
    count: u64,
}
