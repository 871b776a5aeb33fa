pub mod preview;
pub mod table;
pub mod terminal;

pub use preview::PreviewWriter;
pub use table::{TableChannels, TableWriter};
pub use terminal::SwatchView;
