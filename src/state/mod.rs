pub mod actions;
pub mod content;
pub mod data;
pub mod session;

pub use actions::{ButtonAction, DialogId};
pub use data::GameData;
pub use session::GameSession;
