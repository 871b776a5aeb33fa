use anyhow::Result;
use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
};
use std::io::Write;

use crate::palette::{Palette, RgbColor};
use crate::shared::constants;

/// Prints the palette as truecolor cells, one labelled cell per entry.
pub struct SwatchView {
    pub per_row: usize,
}

impl Default for SwatchView {
    fn default() -> Self {
        Self {
            per_row: constants::SWATCHES_PER_ROW,
        }
    }
}

impl SwatchView {
    pub fn draw<W: Write>(&self, palette: &Palette, out: &mut W) -> Result<()> {
        for (i, c) in palette.iter().enumerate() {
            if i != 0 && i % self.per_row.max(1) == 0 {
                queue!(out, ResetColor, Print("\n"))?;
            }
            queue!(
                out,
                SetBackgroundColor(Color::from(*c)),
                SetForegroundColor(label_color(*c)),
                Print(format!("{:>4}", i))
            )?;
        }
        queue!(out, ResetColor, Print("\n"))?;
        out.flush()?;
        Ok(())
    }
}

// Black text on light swatches, white on dark (Rec. 601 luma).
fn label_color(c: RgbColor) -> Color {
    let luma = 299 * c.r() as u32 + 587 * c.g() as u32 + 114 * c.b() as u32;
    if luma > 128_000 {
        Color::Black
    } else {
        Color::White
    }
}

/// One plain-text line per entry with the display's packed encodings.
pub fn listing(palette: &Palette) -> String {
    let mut out = String::with_capacity(palette.len() * 40);
    for (i, c) in palette.iter().enumerate() {
        out.push_str(&format!(
            "{:>3}: {:<13} {}  rgb565=0x{:04X}  idx=0x{:02X}\n",
            i,
            c.to_string(),
            c.to_hex(),
            c.to_rgb565(),
            c.to_indexed()
        ));
    }
    out
}
