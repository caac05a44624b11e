use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Side of one grid cell in pixels. Hitboxes are stored in these units.
pub const GRID_SIZE: i64 = 8;

/// Truncating pixel → grid conversion (`floor(v / GRID_SIZE)`).
pub fn quantize(value: i64) -> i64 {
    value.div_euclid(GRID_SIZE)
}

// ─────────────────────────────────────────────────────
// Hitbox documents (as written by the hitbox editor)
// ─────────────────────────────────────────────────────

/// Frame layout of a sprite sheet.
///
/// All three fields must be strictly positive; the loader rejects
/// documents where they are not (see [`SpriteSheetDescriptor::is_valid`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SpriteSheetDescriptor {
    #[serde(rename = "width")]
    pub frame_width: i64,
    #[serde(rename = "height")]
    pub frame_height: i64,
    #[serde(rename = "cols")]
    pub columns: i64,
}

impl SpriteSheetDescriptor {
    pub fn is_valid(&self) -> bool {
        self.frame_width > 0 && self.frame_height > 0 && self.columns > 0
    }
}

/// One rectangle in absolute sheet pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct RawHitbox {
    pub x: i64,
    pub y: i64,
    pub w: i64,
    pub h: i64,
    /// `0` marks a box that is counted but never emitted.
    #[serde(rename = "type")]
    pub kind: i64,
}

/// Entire hitbox file. Extra keys (e.g. the editor's `frames` dump) are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct HitboxDocument {
    #[serde(rename = "imagePath", default)]
    pub image_path: Option<String>,
    pub frame: SpriteSheetDescriptor,
    pub hitboxes: Vec<RawHitbox>,
}

/// A hitbox coarsened to grid units, relative to its frame origin.
///
/// Serialises as `[x, y, w, h, type]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "[i64; 5]")]
pub struct GridBox {
    pub x: i64,
    pub y: i64,
    pub w: i64,
    pub h: i64,
    pub kind: i64,
}

impl GridBox {
    /// Build from pixel values; every dimension goes through [`quantize`].
    pub fn from_pixels(x: i64, y: i64, w: i64, h: i64, kind: i64) -> Self {
        Self {
            x: quantize(x),
            y: quantize(y),
            w: quantize(w),
            h: quantize(h),
            kind,
        }
    }
}

impl From<GridBox> for [i64; 5] {
    fn from(b: GridBox) -> Self {
        [b.x, b.y, b.w, b.h, b.kind]
    }
}

impl fmt::Display for GridBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}, {}, {}]", self.x, self.y, self.w, self.h, self.kind)
    }
}

/// Frame index → grid boxes of that frame, in input order.
///
/// Frames are created on first insert and iterate in ascending index order.
/// Indices are signed and wide enough for any row/column product of `i64`
/// inputs: coordinates outside the sheet are accepted as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FrameHitboxes {
    frames: BTreeMap<i128, Vec<GridBox>>,
}

impl FrameHitboxes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get-or-create the box list for `frame`.
    pub fn frame_mut(&mut self, frame: i128) -> &mut Vec<GridBox> {
        self.frames.entry(frame).or_default()
    }

    pub fn push(&mut self, frame: i128, grid_box: GridBox) {
        self.frame_mut(frame).push(grid_box);
    }

    pub fn get(&self, frame: i128) -> Option<&[GridBox]> {
        self.frames.get(&frame).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (i128, &[GridBox])> {
        self.frames.iter().map(|(k, v)| (*k, v.as_slice()))
    }

    /// Number of frames in the mapping.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn box_count(&self) -> usize {
        self.frames.values().map(Vec::len).sum()
    }
}

/// Result of one extraction run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    pub frames: FrameHitboxes,
    /// How many type-0 boxes were skipped. Diagnostic only.
    pub discarded: usize,
}

// ─────────────────────────────────────────────────────
// Tile metadata (as written by the tile editor)
// ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct TileDocument {
    pub tiles: Vec<TileRecord>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TileRecord {
    pub index: i32,
    #[serde(rename = "type", default)]
    pub kind: i32,
    /// Next tile of an animation, `-1` for none.
    #[serde(default = "no_next_tile")]
    pub next: i32,
    /// Kept as the JSON number so whole values print as written (`1`, `1.0`).
    #[serde(default = "default_speed")]
    pub speed: Number,
    #[serde(default)]
    pub tag: String,
}

fn no_next_tile() -> i32 {
    -1
}

fn default_speed() -> Number {
    Number::from(1)
}

// ─────────────────────────────────────────────────────
// Animation strip compositing
// ─────────────────────────────────────────────────────

/// Recipe for turning layered PNG parts into animation strips.
#[derive(Debug, Clone, Deserialize)]
pub struct StripConfig {
    #[serde(default = "default_strip_height")]
    pub strip_height: u32,
    /// Output strip `i` is taken from input strip `strip_order[i]`.
    #[serde(default = "default_strip_order")]
    pub strip_order: Vec<usize>,
    pub sequences: Vec<SequenceSpec>,
    pub monsters: Vec<MonsterSpec>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SequenceSpec {
    pub name: String,
    pub frame_width: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MonsterSpec {
    pub name: String,
    /// Bottom to top.
    pub layers: Vec<String>,
    #[serde(default)]
    pub skip: bool,
}

fn default_strip_height() -> u32 {
    64
}

fn default_strip_order() -> Vec<usize> {
    vec![1, 0, 2, 3]
}
