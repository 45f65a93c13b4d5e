/// User intents, independent of the key that produced them
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    // Navigation
    Select,
    Back,
    Quit,

    // Movement
    Up,
    Down,
    Left,
    Right,
    First,
    Last,

    // Data
    Refresh,
    ToggleAutoRefresh,

    // UI toggles
    ToggleHelp,
    DismissError,
}
