pub mod palette;
pub mod resolution;

pub use palette::Rgba;
pub use resolution::{GameResolution, NATIVE_HEIGHT, NATIVE_WIDTH};
