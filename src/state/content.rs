//! Startup wiring: the dialog and button definitions that make up the game.

use macroquad::prelude::*;

use crate::core::{palette, GameResolution};
use crate::state::{ButtonAction, DialogId, GameSession};
use crate::ui::{
    Button, ButtonKind, DialogContent, InfoBox, Label, TextItem, TextStyle, ZoomAnimation,
};

const ZOOM_STEPS: u32 = 12;
const ZOOM_FRAME_LENGTH: f32 = 1.0 / 60.0;

/// Dialogs are centered on the native screen.
const DIALOG_CENTER: Vec2 = vec2(1280.0, 720.0);

pub fn build_session(res: GameResolution) -> GameSession {
    // table order must match DialogId::index
    let dialogs = vec![year_report(res), trade(res), settings(res)];
    GameSession::new(res, dialogs, standalone_buttons())
}

fn zoom() -> ZoomAnimation {
    ZoomAnimation::new(ZOOM_STEPS, ZOOM_FRAME_LENGTH)
}

fn normal_button(pos: Vec2, size: Vec2, title: &str, actions: Vec<ButtonAction>) -> Button {
    Button::new(
        ButtonKind::Normal,
        pos,
        size,
        Some(Label::new(title, TextStyle::Small, palette::BLACK)),
        [palette::ORANGE, palette::LIME],
        actions,
    )
}

fn standalone_buttons() -> Vec<Button> {
    vec![
        normal_button(
            vec2(2330.0, 1350.0),
            vec2(380.0, 120.0),
            "NEXT YEAR",
            vec![ButtonAction::AdvanceYear],
        ),
        normal_button(
            vec2(240.0, 1350.0),
            vec2(360.0, 120.0),
            "BUILD MINE",
            vec![ButtonAction::BuildMine],
        ),
        normal_button(
            vec2(650.0, 1350.0),
            vec2(340.0, 120.0),
            "TRADE",
            vec![ButtonAction::OpenDialog(DialogId::Trade)],
        ),
        normal_button(
            vec2(1060.0, 1350.0),
            vec2(340.0, 120.0),
            "SETTINGS",
            vec![ButtonAction::OpenDialog(DialogId::Settings)],
        ),
    ]
}

fn year_report(res: GameResolution) -> InfoBox {
    InfoBox::new(
        vec2(1200.0, 800.0),
        DIALOG_CENTER,
        res,
        DialogContent {
            colour: palette::AQUA,
            text: Vec::new(), // filled before each open
            buttons: vec![normal_button(
                vec2(600.0, 700.0),
                vec2(280.0, 90.0),
                "CONTINUE",
                vec![ButtonAction::CloseDialog],
            )],
        },
        zoom(),
    )
}

fn trade(res: GameResolution) -> InfoBox {
    InfoBox::new(
        vec2(1400.0, 900.0),
        DIALOG_CENTER,
        res,
        DialogContent {
            colour: palette::YELLOW,
            text: vec![TextItem::new(
                Label::new("TRADING POST", TextStyle::MediumBold, palette::BLACK),
                vec2(700.0, 100.0),
                true,
            )],
            buttons: vec![
                normal_button(
                    vec2(420.0, 450.0),
                    vec2(360.0, 120.0),
                    "SELL ORE",
                    vec![ButtonAction::SellOre],
                ),
                normal_button(
                    vec2(980.0, 450.0),
                    vec2(360.0, 120.0),
                    "BUY FOOD",
                    vec![ButtonAction::BuyFood],
                ),
                normal_button(
                    vec2(700.0, 780.0),
                    vec2(280.0, 90.0),
                    "CLOSE",
                    vec![ButtonAction::CloseDialog],
                ),
            ],
        },
        zoom(),
    )
}

fn settings(res: GameResolution) -> InfoBox {
    let fps_checkbox = Button::new(
        ButtonKind::Checkbox,
        vec2(360.0, 330.0),
        vec2(80.0, 80.0),
        Some(Label::new("X", TextStyle::SmallBold, palette::BLACK)),
        [palette::PURPLE, palette::LIME],
        vec![ButtonAction::ToggleFps],
    );

    InfoBox::new(
        vec2(1000.0, 700.0),
        DIALOG_CENTER,
        res,
        DialogContent {
            colour: palette::LIME,
            text: vec![
                TextItem::new(
                    Label::new("SETTINGS", TextStyle::MediumBold, palette::BLACK),
                    vec2(500.0, 90.0),
                    true,
                ),
                TextItem::new(
                    Label::new("Show FPS counter", TextStyle::Medium, palette::BLACK),
                    vec2(430.0, 300.0),
                    false,
                ),
            ],
            buttons: vec![
                fps_checkbox,
                normal_button(
                    vec2(500.0, 580.0),
                    vec2(280.0, 90.0),
                    "CLOSE",
                    vec![ButtonAction::CloseDialog],
                ),
            ],
        },
        zoom(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dialog_table_matches_id_order() {
        let res = GameResolution::new(vec2(2560.0, 1440.0), vec2(1280.0, 720.0));
        let s = build_session(res);
        assert_eq!(s.dialogs.len(), 3);
        assert_eq!(
            s.dialogs[DialogId::Settings.index()].content.buttons[0].kind,
            ButtonKind::Checkbox
        );
    }
}
