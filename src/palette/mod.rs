pub mod color;
pub mod config;
pub mod generator;

pub use color::RgbColor;
pub use config::PaletteConfig;
pub use generator::Palette;
