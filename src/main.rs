mod app;
mod core;
mod input;
mod rendering;
mod sim;
mod sprite;
mod state;
mod ui;

use std::path::Path;

use anyhow::Result;
use macroquad::prelude::*;

use crate::core::{GameResolution, NATIVE_HEIGHT, NATIVE_WIDTH};
use crate::sprite::AnimatedSprite;
use crate::ui::{ButtonVisuals, SpriteKind};

fn window_conf() -> Conf {
    Conf {
        window_title: "Prospect".to_owned(),
        window_width: 1280,
        window_height: 720,
        ..Default::default()
    }
}

/// Optional button art. When the directories exist, the next-year button is
/// dressed with animated visuals; a broken frame set is fatal at startup.
const NEXT_YEAR_ART: &str = "assets/nextyear";
const NEXT_YEAR_HOVER_ART: &str = "assets/nextyear_hover";

async fn setup(res: GameResolution) -> Result<state::GameSession> {
    let mut session = state::content::build_session(res);

    if Path::new(NEXT_YEAR_ART).exists() {
        let idle = AnimatedSprite::load_dir(NEXT_YEAR_ART, 0.1, &res).await?;
        let hover = AnimatedSprite::load_dir(NEXT_YEAR_HOVER_ART, 0.1, &res).await?;
        session.buttons[0].visuals = Some(ButtonVisuals {
            idle: SpriteKind::Animated(idle),
            hover: SpriteKind::Animated(hover),
        });
    }

    Ok(session)
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let res = GameResolution::new(
        vec2(NATIVE_WIDTH, NATIVE_HEIGHT),
        vec2(screen_width(), screen_height()),
    );
    log::info!(
        "display {}x{}, scaling factor {:.3}x{:.3}",
        res.current.x,
        res.current.y,
        res.factor.x,
        res.factor.y
    );

    match setup(res).await {
        Ok(session) => app::run(session).await,
        Err(err) => {
            log::error!("startup failed: {err:#}");
            std::process::exit(1);
        }
    }
}
