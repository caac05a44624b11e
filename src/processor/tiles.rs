//! Tile metadata → tab-separated rows.

use tracing::info;

use crate::model::{TileDocument, TileRecord};

/// One row per tile, document order:
/// `index \t next \t speed \t type \t tag`.
///
/// A negative `next` (no follow-up tile) is written as `0`.
pub fn tile_rows(doc: &TileDocument) -> Vec<String> {
    doc.tiles
        .iter()
        .inspect(|tile| {
            if !tile.tag.is_empty() {
                info!(index = tile.index, tag = %tile.tag, "tagged tile");
            }
        })
        .map(tile_row)
        .collect()
}

fn tile_row(tile: &TileRecord) -> String {
    let next = if tile.next < 0 { 0 } else { tile.next };
    // speed prints as the editor wrote it: `1` stays `1`, `1.0` stays `1.0`
    format!(
        "{}\t{}\t{}\t{}\t{}",
        tile.index, next, tile.speed, tile.kind, tile.tag
    )
}
