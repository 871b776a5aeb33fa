use anyhow::Result;
use std::io::Write;
use std::path::Path;

use crate::palette::Palette;
use crate::shared::constants;
use crate::utils::file_utils;

/// Writes the HTML overview: a grid of labelled swatches followed by one
/// `index: r, g, b` line per entry.
pub struct PreviewWriter {
    pub per_row: usize,
}

impl Default for PreviewWriter {
    fn default() -> Self {
        Self {
            per_row: constants::SWATCHES_PER_ROW,
        }
    }
}

impl PreviewWriter {
    pub fn write_to<W: Write>(&self, palette: &Palette, out: &mut W) -> Result<()> {
        out.write_all(b"<html><body>")?;

        for (i, c) in palette.iter().enumerate() {
            if i != 0 && i % self.per_row.max(1) == 0 {
                out.write_all(b"<br/>\n")?;
            }
            writeln!(
                out,
                "<span style=\"background-color:rgb({},{},{});{}\">{}</span>",
                c.r(),
                c.g(),
                c.b(),
                constants::SWATCH_STYLE,
                i
            )?;
        }

        out.write_all(b"<br/><br/>\n")?;

        for (i, c) in palette.iter().enumerate() {
            writeln!(
                out,
                "<div style=\"background-color:rgb({c})\">{i}: {c}</div>",
                c = c,
                i = i
            )?;
        }

        out.write_all(b"</body></html>")?;
        Ok(())
    }

    /// Overwrites `path`. On failure the file may be left half written.
    pub fn write_file(&self, palette: &Palette, path: &Path) -> Result<()> {
        file_utils::write_with(path, |out| self.write_to(palette, out))
    }
}
