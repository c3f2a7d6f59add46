use macroquad::math::vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::core::{palette, GameResolution};
use crate::rendering::UpdateZones;
use crate::sim;
use crate::state::{ButtonAction, DialogId, GameData};
use crate::ui::{Button, InfoBox, Label, TextItem, TextStyle};

/// The one context object the whole game runs against: economic state, the
/// dialog table, which dialog is active, the pending dirty rectangles and
/// the standalone buttons. Passed by reference into the frame loop and the
/// action dispatcher instead of living in globals.
pub struct GameSession {
    pub res: GameResolution,
    pub data: GameData,
    pub rng: StdRng,
    pub dialogs: Vec<InfoBox>,
    pub active_dialog: Option<DialogId>,
    pub zones: UpdateZones,
    pub buttons: Vec<Button>,
    pub show_fps: bool,
    dt: f32,
}

impl GameSession {
    pub fn new(res: GameResolution, dialogs: Vec<InfoBox>, buttons: Vec<Button>) -> Self {
        GameSession {
            res,
            data: GameData::default(),
            rng: StdRng::from_entropy(),
            dialogs,
            active_dialog: None,
            zones: UpdateZones::new(),
            buttons,
            show_fps: false,
            dt: 0.0,
        }
    }

    /// Store the measured frame duration; every ticking component is driven
    /// off this one value for the rest of the frame.
    pub fn begin_frame(&mut self, dt: f32) {
        self.dt = dt;
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active_dialog.map(DialogId::index)
    }

    /// Execute one button command. The return value is the toggle outcome
    /// for checkbox actions (`true` for everything else).
    pub fn apply(&mut self, action: ButtonAction) -> bool {
        match action {
            ButtonAction::AdvanceYear => {
                sim::advance_year(&mut self.data, &mut self.rng);
                log::debug!(
                    "year {} -> mined {}, pop {}, money {:.0}",
                    self.data.year,
                    self.data.last_ore_mined,
                    self.data.population,
                    self.data.money
                );
                let report = report_text(&self.data);
                self.dialogs[DialogId::YearReport.index()].set_text(report);
                self.open_dialog(DialogId::YearReport);
                true
            }
            ButtonAction::BuildMine => {
                if self.data.money >= sim::MINE_COST {
                    self.data.money -= sim::MINE_COST;
                    self.data.mines += 1;
                }
                true
            }
            ButtonAction::SellOre => {
                self.data.money += self.data.ore_stored as f32 * self.data.ore_price;
                self.data.ore_stored = 0;
                true
            }
            ButtonAction::BuyFood => {
                let ration = self.data.population * sim::FOOD_PER_CAPITA;
                let cost = ration as f32 * self.data.food_price;
                if self.data.money >= cost {
                    self.data.money -= cost;
                    self.data.food_stored += ration;
                }
                true
            }
            ButtonAction::OpenDialog(id) => {
                self.open_dialog(id);
                true
            }
            ButtonAction::CloseDialog => {
                log::debug!("dialog closed");
                self.active_dialog = None;
                // scene behind the dialog has to repaint in full
                self.zones.clear();
                true
            }
            ButtonAction::ToggleFps => {
                self.show_fps = !self.show_fps;
                self.show_fps
            }
        }
    }

    pub fn open_dialog(&mut self, id: DialogId) {
        log::debug!("opening dialog {id:?}");
        let dt = self.dt;
        self.dialogs[id.index()].open(dt);
        self.active_dialog = Some(id);
    }
}

/// Rebuild the yearly report body from current economic state. Positions
/// are dialog-local native coordinates.
pub fn report_text(data: &GameData) -> Vec<TextItem> {
    let heading = Label::new(
        format!("YEAR {} REPORT", data.year),
        TextStyle::MediumBold,
        palette::BLACK,
    );
    let line = |text: String| Label::new(text, TextStyle::Medium, palette::BLACK);

    vec![
        TextItem::new(heading, vec2(600.0, 90.0), true),
        TextItem::new(
            line(format!("Ore mined: {}", data.last_ore_mined)),
            vec2(140.0, 180.0),
            false,
        ),
        TextItem::new(
            line(format!("Food consumed: {}", data.last_food_consumed)),
            vec2(140.0, 240.0),
            false,
        ),
        TextItem::new(
            line(format!(
                "Ore price: {:.1} ({:+.1})",
                data.ore_price, data.ore_price_delta
            )),
            vec2(140.0, 300.0),
            false,
        ),
        TextItem::new(
            line(format!(
                "Food price: {:.1} ({:+.1})",
                data.food_price, data.food_price_delta
            )),
            vec2(140.0, 360.0),
            false,
        ),
        TextItem::new(
            line(format!("Population: {}", data.population)),
            vec2(140.0, 420.0),
            false,
        ),
        TextItem::new(
            line(format!("Treasury: {:.0}", data.money)),
            vec2(140.0, 480.0),
            false,
        ),
    ]
}
