/// Commands a button can fire. Buttons hold these instead of closures over
/// process-wide state; the session interprets them against its own data, so
/// every mutation path is explicit and testable.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ButtonAction {
    /// Run the simulation step, refresh the yearly report and open it.
    AdvanceYear,
    /// Buy one mine if the treasury covers it.
    BuildMine,
    /// Sell the stored ore at the current price.
    SellOre,
    /// Buy a year's worth of food at the current price.
    BuyFood,
    OpenDialog(DialogId),
    CloseDialog,
    /// Checkbox: flips the fps readout, returns the new state.
    ToggleFps,
}

/// Stable identities for the dialogs built at startup. The session's dialog
/// table is indexed by these, in declaration order.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DialogId {
    YearReport,
    Trade,
    Settings,
}

impl DialogId {
    pub const fn index(self) -> usize {
        match self {
            DialogId::YearReport => 0,
            DialogId::Trade => 1,
            DialogId::Settings => 2,
        }
    }
}
