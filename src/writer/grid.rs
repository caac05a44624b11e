//! Grid hitbox mappings as JSON: `{ "<frame>": [[x, y, w, h, type], ...] }`.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::model::FrameHitboxes;

pub fn to_string(frames: &FrameHitboxes) -> Result<String> {
    serde_json::to_string(frames).context("Serialising grid hitboxes")
}

pub fn emit(frames: &FrameHitboxes, path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("Creating {}", path.display()))?;
    let mut out = BufWriter::new(file);
    serde_json::to_writer(&mut out, frames).context("Serialising grid hitboxes")?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
