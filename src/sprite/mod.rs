pub mod animated;
pub mod image;

use thiserror::Error;

pub use animated::{AnimatedSprite, Playback};
pub use image::Sprite;

/// Asset-provider failures. These only occur during startup loading and are
/// fatal: setup propagates them to `main`, which logs and exits.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to read frame directory {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to load texture {path}: {message}")]
    Texture { path: String, message: String },
    #[error("no .png frames found in {path}")]
    EmptyAnimation { path: String },
}
