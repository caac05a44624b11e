//! Loading boundary: files on disk → model values.
//!
//! Every loader distinguishes a missing file from an unreadable one and from
//! JSON that does not match the expected shape (see [`LoadError`]).

use std::fs;
use std::io;
use std::path::Path;

use anyhow::Context;
use image::RgbaImage;
use tracing::debug;

use crate::error::LoadError;
use crate::model::{HitboxDocument, StripConfig, TileDocument};

pub fn hitboxes_from_json(json: &str) -> serde_json::Result<HitboxDocument> {
    serde_json::from_str(json)
}

pub fn tiles_from_json(json: &str) -> serde_json::Result<TileDocument> {
    serde_json::from_str(json)
}

pub fn strip_config_from_json(json: &str) -> serde_json::Result<StripConfig> {
    serde_json::from_str(json)
}

/// Load a hitbox editor document.
///
/// A frame layout with a non-positive width, height or column count is
/// rejected here so the extractor never divides by it.
pub fn load_hitbox_document(path: &Path) -> Result<HitboxDocument, LoadError> {
    let doc = load_with(path, hitboxes_from_json)?;
    if !doc.frame.is_valid() {
        return Err(LoadError::InvalidFrame {
            path: path.to_path_buf(),
            width: doc.frame.frame_width,
            height: doc.frame.frame_height,
            cols: doc.frame.columns,
        });
    }
    debug!(
        path = %path.display(),
        image = doc.image_path.as_deref().unwrap_or("-"),
        hitboxes = doc.hitboxes.len(),
        "hitbox document parsed"
    );
    Ok(doc)
}

/// Load a tile editor document.
pub fn load_tile_document(path: &Path) -> Result<TileDocument, LoadError> {
    let doc = load_with(path, tiles_from_json)?;
    debug!(path = %path.display(), tiles = doc.tiles.len(), "tile document parsed");
    Ok(doc)
}

pub fn load_strip_config(path: &Path) -> Result<StripConfig, LoadError> {
    let cfg = load_with(path, strip_config_from_json)?;
    debug!(
        path = %path.display(),
        monsters = cfg.monsters.len(),
        sequences = cfg.sequences.len(),
        "strip config parsed"
    );
    Ok(cfg)
}

/// Decode a PNG part, converted to 8-bit RGBA.
pub fn load_png(path: &Path) -> anyhow::Result<RgbaImage> {
    let img = image::open(path).with_context(|| format!("Decoding {}", path.display()))?;
    Ok(img.into_rgba8())
}

fn load_with<T>(
    path: &Path,
    parse: fn(&str) -> serde_json::Result<T>,
) -> Result<T, LoadError> {
    let json = read_document(path)?;
    debug!(path = %path.display(), bytes = json.len(), "file loaded");
    parse(&json).map_err(|source| LoadError::DocumentMalformed {
        path: path.to_path_buf(),
        source,
    })
}

fn read_document(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => LoadError::DocumentNotFound {
            path: path.to_path_buf(),
        },
        _ => LoadError::DocumentUnreadable {
            path: path.to_path_buf(),
            source,
        },
    })
}
