//! Per-monster strip manifest (`<monster>.txt`).

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub fn manifest_path(out_dir: &Path, monster: &str) -> PathBuf {
    out_dir.join(format!("{}.txt", monster.to_lowercase()))
}

/// Writes the lines joined with `\n` and returns the file path.
pub fn emit(monster: &str, lines: &[String], out_dir: &Path) -> io::Result<PathBuf> {
    let path = manifest_path(out_dir, monster);
    fs::write(&path, lines.join("\n"))?;
    Ok(path)
}
