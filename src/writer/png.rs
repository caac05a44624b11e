//! Composited strip sheets.

use std::path::Path;

use anyhow::{Context, Result};
use image::{ImageFormat, RgbaImage};

pub fn emit(img: &RgbaImage, path: &Path) -> Result<()> {
    img.save_with_format(path, ImageFormat::Png)
        .with_context(|| format!("Writing {}", path.display()))
}
