use anyhow::Result;
use std::io::Write;
use std::path::PathBuf;

use crate::palette::{Palette, PaletteConfig};
use crate::renderer::{PreviewWriter, SwatchView, TableWriter};
use crate::utils::logger;

/// Paths actually written by [`generate`].
#[derive(Debug)]
pub struct GenerateReport {
    pub entries: usize,
    pub preview_path: PathBuf,
    pub table_path: PathBuf,
}

/// Builds the palette and writes the preview and the table side by side.
pub fn generate(config: &PaletteConfig) -> Result<GenerateReport> {
    let palette = Palette::generate(config)?;
    logger::info(&format!(
        "generated {} entries ({}x{}x{})",
        palette.len(),
        config.red_levels,
        config.green_levels,
        config.blue_levels
    ));

    let preview = PreviewWriter::default();
    let table = TableWriter::new(config.table_channels);

    let (preview_result, table_result) = rayon::join(
        || preview.write_file(&palette, &config.preview_path),
        || table.write_file(&palette, &config.table_path),
    );

    if let Err(e) = &preview_result {
        logger::error(&format!("preview: {:#}", e));
    }
    if let Err(e) = &table_result {
        logger::error(&format!("table: {:#}", e));
    }
    preview_result?;
    table_result?;

    logger::info(&format!(
        "wrote {} and {}",
        config.preview_path.display(),
        config.table_path.display()
    ));

    Ok(GenerateReport {
        entries: palette.len(),
        preview_path: config.preview_path.clone(),
        table_path: config.table_path.clone(),
    })
}

pub fn list(config: &PaletteConfig, json: bool) -> Result<()> {
    let palette = Palette::generate(config)?;
    logger::debug(&format!("listing {} entries (json={})", palette.len(), json));
    let mut stdout = std::io::stdout().lock();
    if json {
        writeln!(stdout, "{}", serde_json::to_string_pretty(&palette)?)?;
    } else {
        stdout.write_all(crate::renderer::terminal::listing(&palette).as_bytes())?;
    }
    writeln!(stdout, "{}", palette.len())?;
    Ok(())
}

pub fn show(config: &PaletteConfig) -> Result<()> {
    let palette = Palette::generate(config)?;
    SwatchView::default().draw(&palette, &mut std::io::stdout().lock())
}
