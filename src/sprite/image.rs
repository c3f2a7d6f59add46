use macroquad::prelude::*;

use crate::core::GameResolution;
use crate::sprite::AssetError;

/// A decoded bitmap with its display extent pre-computed once from the
/// resolution scaling factor. The source art is authored at native
/// resolution, so the texture's own dimensions are the native extent.
pub struct Sprite {
    texture: Texture2D,
    native_size: Vec2,
    size: Vec2,
}

impl Sprite {
    pub fn from_texture(texture: Texture2D, res: &GameResolution) -> Self {
        texture.set_filter(FilterMode::Linear);
        let native_size = vec2(texture.width(), texture.height());
        Sprite {
            size: native_size * res.factor,
            native_size,
            texture,
        }
    }

    /// Load and decode one image file. Failure here is fatal at startup:
    /// the caller propagates it out of setup and the process exits.
    pub async fn load(path: &str, res: &GameResolution) -> Result<Self, AssetError> {
        let texture = load_texture(path).await.map_err(|e| AssetError::Texture {
            path: path.to_string(),
            message: format!("{e:?}"),
        })?;
        Ok(Sprite::from_texture(texture, res))
    }

    /// Extent in native (design) coordinates, used for hit rectangles.
    pub fn native_size(&self) -> Vec2 {
        self.native_size
    }

    /// Draw at a native-resolution position; `centered` recenters by half
    /// the already-scaled extent.
    pub fn draw(&self, pos: Vec2, res: &GameResolution, centered: bool) {
        let mut p = res.to_screen(pos);
        if centered {
            p -= self.size / 2.0;
        }
        draw_texture_ex(
            &self.texture,
            p.x,
            p.y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(self.size),
                ..Default::default()
            },
        );
    }
}
