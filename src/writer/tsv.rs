//! Tab-separated tile rows.

use std::fs;
use std::io;
use std::path::Path;

/// Rows joined with `\n`, no trailing newline.
pub fn emit(rows: &[String], path: &Path) -> io::Result<()> {
    fs::write(path, rows.join("\n"))
}
