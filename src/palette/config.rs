use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::renderer::TableChannels;
use crate::shared::constants;
use crate::utils::file_utils;

/// Everything the generator and both writers need.
///
/// `Default` is the standard 3-3-2 palette written to the standard paths.
/// A JSON file may override any subset of the fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    pub red_levels: u8,
    pub green_levels: u8,
    pub blue_levels: u8,
    pub red_step: f64,
    pub green_step: f64,
    pub blue_step: u16,
    pub preview_path: PathBuf,
    pub table_path: PathBuf,
    pub table_channels: TableChannels,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            red_levels: constants::RED_LEVELS,
            green_levels: constants::GREEN_LEVELS,
            blue_levels: constants::BLUE_LEVELS,
            red_step: constants::RED_STEP,
            green_step: constants::GREEN_STEP,
            blue_step: constants::BLUE_STEP,
            preview_path: PathBuf::from(constants::PREVIEW_PATH),
            table_path: PathBuf::from(constants::TABLE_PATH),
            table_channels: TableChannels::default(),
        }
    }
}

impl PaletteConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = file_utils::read_file(path)?;
        let config: Self = serde_json::from_slice(&bytes)
            .with_context(|| format!("Failed to parse config: {:?}", path))?;
        config
            .validate()
            .with_context(|| format!("Invalid config: {:?}", path))?;
        Ok(config)
    }

    /// Loads `path` if given, otherwise the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        check_levels("red", self.red_levels)?;
        check_levels("green", self.green_levels)?;
        check_levels("blue", self.blue_levels)?;
        check_scaled("red", self.red_levels, self.red_step)?;
        check_scaled("green", self.green_levels, self.green_step)?;

        let blue_max = (self.blue_levels as u32 - 1) * self.blue_step as u32;
        if blue_max > u8::MAX as u32 {
            anyhow::bail!(
                "blue channel reaches {} ({} levels x step {}), max is 255",
                blue_max,
                self.blue_levels,
                self.blue_step
            );
        }
        Ok(())
    }

    /// Number of entries the generator will produce.
    pub fn palette_len(&self) -> usize {
        self.red_levels as usize * self.green_levels as usize * self.blue_levels as usize
    }
}

fn check_levels(axis: &str, levels: u8) -> Result<()> {
    if levels == 0 {
        anyhow::bail!("{} axis must have at least one level", axis);
    }
    Ok(())
}

fn check_scaled(axis: &str, levels: u8, step: f64) -> Result<()> {
    if !step.is_finite() || step < 0.0 {
        anyhow::bail!("{} step must be a non-negative number, got {}", axis, step);
    }
    let max = ((levels - 1) as f64 * step).round();
    if max > u8::MAX as f64 {
        anyhow::bail!(
            "{} channel reaches {} ({} levels x step {}), max is 255",
            axis,
            max,
            levels,
            step
        );
    }
    Ok(())
}
