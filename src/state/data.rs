/// Colony economy state. Mutated only by the simulation step and the trade
/// actions; the UI core reads it to build readouts and report text.
#[derive(Clone, Debug)]
pub struct GameData {
    pub year: u32,
    pub mines: u32,
    pub population: u32,
    pub money: f32,
    pub ore_price: f32,
    pub food_price: f32,
    /// Last year's absolute price movements, shown in the report.
    pub ore_price_delta: f32,
    pub food_price_delta: f32,
    pub ore_stored: u32,
    pub food_stored: u32,
    /// Clamped to [0.6, 1.2]; the dial sweeps that range.
    pub satisfaction: f32,
    pub last_ore_mined: u32,
    pub last_food_consumed: u32,
}

impl Default for GameData {
    fn default() -> Self {
        GameData {
            year: 1,
            mines: 2,
            population: 40,
            money: 2000.0,
            ore_price: 18.0,
            food_price: 4.0,
            ore_price_delta: 0.0,
            food_price_delta: 0.0,
            ore_stored: 0,
            food_stored: 120,
            satisfaction: 0.9,
            last_ore_mined: 0,
            last_food_consumed: 0,
        }
    }
}
