use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

pub fn read_file(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("Failed to read file: {:?}", path))
}

/// Truncates or creates `path` and hands a buffered writer to `body`.
///
/// The parent directory must already exist.
pub fn write_with<F>(path: &Path, body: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<()>,
{
    let file = File::create(path)
        .with_context(|| format!("Failed to open for writing: {:?}", path))?;
    let mut out = BufWriter::new(file);
    body(&mut out).with_context(|| format!("Failed to write file: {:?}", path))?;
    out.flush()
        .with_context(|| format!("Failed to write file: {:?}", path))?;
    Ok(())
}
