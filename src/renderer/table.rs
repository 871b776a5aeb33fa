use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;

use crate::palette::{Palette, RgbColor};
use crate::shared::constants;
use crate::utils::file_utils;

/// Which channels go into each `{a, b, c}` initializer.
///
/// `RedDuplicated` is what the display firmware has always been built
/// against: red in the first two fields, blue in the third, green dropped.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum TableChannels {
    #[default]
    RedDuplicated,
    Rgb,
}

impl TableChannels {
    fn fields(self, c: RgbColor) -> (u8, u8, u8) {
        match self {
            TableChannels::RedDuplicated => (c.r(), c.r(), c.b()),
            TableChannels::Rgb => (c.r(), c.g(), c.b()),
        }
    }
}

/// Writes the palette as a C array initializer for `color.h` consumers.
#[derive(Default)]
pub struct TableWriter {
    pub channels: TableChannels,
}

impl TableWriter {
    pub fn new(channels: TableChannels) -> Self {
        Self { channels }
    }

    pub fn write_to<W: Write>(&self, palette: &Palette, out: &mut W) -> Result<()> {
        write!(out, "#include \"{}\"\n\n", constants::TABLE_INCLUDE)?;
        writeln!(
            out,
            "static const {} {} = {{",
            constants::TABLE_TYPE,
            constants::TABLE_NAME
        )?;

        for (i, c) in palette.iter().enumerate() {
            if i != 0 {
                out.write_all(b",\n")?;
            }
            let (f0, f1, f2) = self.channels.fields(*c);
            write!(out, "\t{{{}, {}, {}}}", f0, f1, f2)?;
        }

        out.write_all(b"\n};")?;
        Ok(())
    }

    /// Overwrites `path`. On failure the file may be left half written.
    pub fn write_file(&self, palette: &Palette, path: &Path) -> Result<()> {
        file_utils::write_with(path, |out| self.write_to(palette, out))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(channels: TableChannels) -> String {
        let mut buf = Vec::new();
        TableWriter::new(channels)
            .write_to(&Palette::standard(), &mut buf)
            .unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn initializers(text: &str) -> Vec<&str> {
        text.lines().filter(|l| l.starts_with('\t')).collect()
    }

    #[test]
    fn test_header_and_footer() {
        let text = render(TableChannels::RedDuplicated);
        assert!(text.starts_with(
            "#include \"color.h\"\n\nstatic const Palette standard_palette = {\n\t{0, 0, 0},\n"
        ));
        assert!(text.ends_with("\t{255, 255, 255}\n};"));
    }

    #[test]
    fn test_one_initializer_per_entry() {
        let text = render(TableChannels::RedDuplicated);
        let lines = initializers(&text);
        assert_eq!(lines.len(), 256);
        let (last, rest) = lines.split_last().unwrap();
        assert!(rest.iter().all(|l| l.ends_with("},")));
        assert!(last.ends_with('}'));
        assert!(!text.contains(",\n};"));
    }

    #[test]
    fn test_red_fills_first_two_fields() {
        let palette = Palette::standard();
        let text = render(TableChannels::RedDuplicated);
        for (line, c) in initializers(&text).iter().zip(palette.iter()) {
            let expected = format!("\t{{{}, {}, {}}}", c.r(), c.r(), c.b());
            assert!(line.starts_with(&expected), "{} vs {}", line, expected);
        }
        // Entry 4 is rgb(0, 36, 0): its green never reaches the table.
        assert_eq!(initializers(&text)[4], "\t{0, 0, 0},");
    }

    #[test]
    fn test_rgb_mode_keeps_green() {
        let text = render(TableChannels::Rgb);
        let lines = initializers(&text);
        assert_eq!(lines.len(), 256);
        assert_eq!(lines[4], "\t{0, 36, 0},");
        assert_eq!(lines[37], "\t{36, 36, 85},");
    }
}
