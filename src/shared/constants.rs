pub const APP_NAME: &str = "palgen";

pub const ERROR_LOG_FILE: &str = "palgen-error.log";
pub const DEBUG_LOG_FILE: &str = "palgen-debug.log";

// Axis sizes of the standard palette: 8 red x 8 green x 4 blue = 3-3-2 bits.
pub const RED_LEVELS: u8 = 8;
pub const GREEN_LEVELS: u8 = 8;
pub const BLUE_LEVELS: u8 = 4;

/// 255 / 7, rounded per entry.
pub const RED_STEP: f64 = 36.428571429;
pub const GREEN_STEP: f64 = 36.428571429;
/// 255 / 3, exact.
pub const BLUE_STEP: u16 = 85;

pub const PREVIEW_PATH: &str = "palette.html";
pub const TABLE_PATH: &str = "../standard_palette.h";

pub const SWATCHES_PER_ROW: usize = 32;
pub const SWATCH_STYLE: &str = "width:30px;height:20px;margin:0;display:inline-block;";

pub const TABLE_INCLUDE: &str = "color.h";
pub const TABLE_TYPE: &str = "Palette";
pub const TABLE_NAME: &str = "standard_palette";
