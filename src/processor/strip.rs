//! Layered PNG parts → animation strips with the direction rows reordered.
//!
//! A sequence image holds one horizontal strip per facing direction, each
//! `strip_height` pixels tall, frames laid out left to right. Parts are
//! stacked bottom to top in config order, then the strips are shuffled by
//! `strip_order`.

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use image::{RgbaImage, imageops};
use tracing::debug;

use crate::model::{SequenceSpec, StripConfig};
use crate::parser;

/// Layer that is painted solid white before it is stacked.
pub const FLASH_LAYER: &str = "red";
/// Layer prepended for the shadow variant.
pub const SHADOW_LAYER: &str = "shadow";

#[derive(Debug, Clone)]
pub struct ComposedSequence {
    pub image: RgbaImage,
    /// Frames per strip (`width / frame_width`).
    pub frames: u32,
}

/// `<source>/<Monster>/<Seq>/<Monster>_<Seq>_<layer>.png`
pub fn part_path(source: &Path, monster: &str, seq: &str, layer: &str) -> PathBuf {
    source
        .join(monster)
        .join(seq)
        .join(format!("{monster}_{seq}_{layer}.png"))
}

/// Every pixel with any coverage becomes opaque white.
pub fn whiten(img: &mut RgbaImage) {
    for px in img.pixels_mut() {
        if px.0[3] > 0 {
            px.0 = [255, 255, 255, 255];
        }
    }
}

/// Alpha-composite parts bottom to top. The first part is the base and
/// fixes the canvas size. Returns `None` when there are no parts.
pub fn stack_layers<'a, I>(parts: I) -> Option<RgbaImage>
where
    I: IntoIterator<Item = (&'a str, RgbaImage)>,
{
    let mut parts = parts.into_iter();
    let (_, mut base) = parts.next()?;

    for (layer, mut part) in parts {
        if layer == FLASH_LAYER {
            whiten(&mut part);
        }
        imageops::overlay(&mut base, &part, 0, 0);
    }

    Some(base)
}

/// Cut `img` into `height / strip_height` strips and paste strip
/// `order[i]` at row `i`. Rows past the last whole strip stay transparent.
pub fn reorder_strips(img: &RgbaImage, strip_height: u32, order: &[usize]) -> Result<RgbaImage> {
    if strip_height == 0 {
        bail!("strip height must be positive");
    }

    let (width, height) = img.dimensions();
    let strip_count = (height / strip_height) as usize;
    if order.len() < strip_count {
        bail!(
            "image has {} strips but strip order only covers {}",
            strip_count,
            order.len()
        );
    }

    let mut out = RgbaImage::new(width, height);
    for (i, &src) in order.iter().take(strip_count).enumerate() {
        if src >= strip_count {
            bail!("strip order refers to strip {src}, image has {strip_count}");
        }
        let strip = imageops::crop_imm(img, 0, src as u32 * strip_height, width, strip_height);
        imageops::replace(&mut out, &strip.to_image(), 0, i as i64 * strip_height as i64);
    }

    Ok(out)
}

/// Shadow variant: shadow at the bottom, no flash layer.
pub fn shadow_layers(layers: &[String]) -> Vec<String> {
    let mut out = Vec::with_capacity(layers.len() + 1);
    out.push(SHADOW_LAYER.to_string());
    out.extend(layers.iter().cloned());
    if let Some(pos) = out.iter().position(|l| l == FLASH_LAYER) {
        out.remove(pos);
    }
    out
}

/// Load whichever parts exist, stack them and reorder the strips.
///
/// `Ok(None)` means not a single part file was found for this sequence.
pub fn compose_sequence(
    source: &Path,
    monster: &str,
    seq: &SequenceSpec,
    layers: &[String],
    cfg: &StripConfig,
) -> Result<Option<ComposedSequence>> {
    if seq.frame_width == 0 {
        bail!("sequence `{}` has a zero frame width", seq.name);
    }

    let mut parts = Vec::with_capacity(layers.len());
    for layer in layers {
        let path = part_path(source, monster, &seq.name, layer);
        if !path.is_file() {
            debug!(path = %path.display(), "part missing, skipped");
            continue;
        }
        debug!(layer = %layer, "stacking part");
        parts.push((layer.as_str(), parser::load_png(&path)?));
    }

    let Some(stacked) = stack_layers(parts) else {
        return Ok(None);
    };

    let frames = stacked.width() / seq.frame_width;
    let image = reorder_strips(&stacked, cfg.strip_height, &cfg.strip_order)?;
    Ok(Some(ComposedSequence { image, frames }))
}

/// Manifest lines describing one written sequence.
///
/// `directions` is the number of strips per sequence.
pub fn manifest_block(
    monster: &str,
    seq: &SequenceSpec,
    strip_height: u32,
    frames: u32,
    directions: usize,
    file_name: &str,
) -> Vec<String> {
    vec![
        format!(
            "# {} = {} frames/seq ({}x{})",
            seq.name, frames, seq.frame_width, strip_height
        ),
        format!("# total images: {}", frames as usize * directions),
        format!(
            "{}/{}:{},{}",
            monster.to_lowercase(),
            file_name,
            seq.frame_width,
            strip_height
        ),
        String::new(),
    ]
}
