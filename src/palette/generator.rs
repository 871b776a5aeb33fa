use anyhow::Result;
use serde::Serialize;

use super::color::RgbColor;
use super::config::PaletteConfig;

/// Ordered list of palette entries. The position of an entry is its index
/// in both the HTML preview and the C table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Palette {
    colors: Vec<RgbColor>,
}

impl Palette {
    /// Validates `config` and enumerates red, then green, then blue.
    pub fn generate(config: &PaletteConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::enumerate(config))
    }

    /// The standard 256 color palette.
    pub fn standard() -> Self {
        Self::enumerate(&PaletteConfig::default())
    }

    fn enumerate(config: &PaletteConfig) -> Self {
        let mut colors = Vec::with_capacity(config.palette_len());
        for r in 0..config.red_levels {
            for g in 0..config.green_levels {
                for b in 0..config.blue_levels {
                    colors.push(RgbColor(
                        scale_rounded(r, config.red_step),
                        scale_rounded(g, config.green_step),
                        scale_exact(b, config.blue_step),
                    ));
                }
            }
        }
        Self { colors }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[allow(dead_code)]
    pub fn get(&self, index: usize) -> Option<RgbColor> {
        self.colors.get(index).copied()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RgbColor> {
        self.colors.iter()
    }
}

// Validated configs never clamp; the clamp only keeps the cast total.
fn scale_rounded(index: u8, step: f64) -> u8 {
    (index as f64 * step).round().clamp(0.0, 255.0) as u8
}

fn scale_exact(index: u8, step: u16) -> u8 {
    (index as u32 * step as u32).min(u8::MAX as u32) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_palette_size() {
        let palette = Palette::standard();
        assert_eq!(palette.len(), 256);
        assert_eq!(palette.len(), 8 * 8 * 4);
    }

    #[test]
    fn test_generate_matches_standard() {
        let palette = Palette::generate(&PaletteConfig::default()).unwrap();
        assert_eq!(palette, Palette::standard());
        assert_eq!(Palette::standard(), Palette::standard());
    }

    #[test]
    fn test_red_axis_levels() {
        let palette = Palette::standard();
        let reds: Vec<u8> = (0..8).map(|r| palette.get(r * 32).unwrap().r()).collect();
        assert_eq!(reds, vec![0, 36, 73, 109, 146, 182, 219, 255]);
        for (r, red) in reds.iter().enumerate() {
            assert_eq!(*red, (r as f64 * 36.428571429).round() as u8);
        }
    }

    #[test]
    fn test_green_and_blue_axis_levels() {
        let palette = Palette::standard();
        let greens: Vec<u8> = (0..8).map(|g| palette.get(g * 4).unwrap().g()).collect();
        assert_eq!(greens, vec![0, 36, 73, 109, 146, 182, 219, 255]);
        let blues: Vec<u8> = (0..4).map(|b| palette.get(b).unwrap().b()).collect();
        assert_eq!(blues, vec![0, 85, 170, 255]);
    }

    #[test]
    fn test_enumeration_order() {
        let palette = Palette::standard();
        assert_eq!(palette.get(0), Some(RgbColor(0, 0, 0)));
        assert_eq!(palette.get(1), Some(RgbColor(0, 0, 85)));
        assert_eq!(palette.get(4), Some(RgbColor(0, 36, 0)));
        assert_eq!(palette.get(32), Some(RgbColor(36, 0, 0)));
        assert_eq!(palette.get(255), Some(RgbColor(255, 255, 255)));
        assert_eq!(palette.get(256), None);
    }

    #[test]
    fn test_entries_are_their_own_indexed_color() {
        for (i, color) in Palette::standard().iter().enumerate() {
            assert_eq!(color.to_indexed() as usize, i, "entry {} = {:?}", i, color);
        }
    }

    #[test]
    fn test_generate_rejects_invalid_config() {
        let config = PaletteConfig {
            blue_step: 100,
            ..PaletteConfig::default()
        };
        assert!(Palette::generate(&config).is_err());
    }

    #[test]
    fn test_custom_axes() {
        let config = PaletteConfig {
            red_levels: 2,
            green_levels: 1,
            blue_levels: 2,
            red_step: 255.0,
            blue_step: 255,
            ..PaletteConfig::default()
        };
        let palette = Palette::generate(&config).unwrap();
        let colors: Vec<RgbColor> = palette.iter().copied().collect();
        assert_eq!(
            colors,
            vec![
                RgbColor(0, 0, 0),
                RgbColor(0, 0, 255),
                RgbColor(255, 0, 0),
                RgbColor(255, 0, 255),
            ]
        );
    }
}
