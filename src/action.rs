use serde::{Deserialize, Serialize};
use strum::Display;

/// Host-level actions triggered through keybindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, Deserialize)]
pub enum Action {
    Quit,
    Submit,
    FocusNext,
    FocusPrev,
    ToggleDisabled,
    ResetChannelSize,
}
