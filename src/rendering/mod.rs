pub mod dial;
pub mod hud;
pub mod scene;
pub mod zones;

pub use hud::Hud;
pub use zones::{Present, UpdateZones};
