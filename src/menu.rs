//! Settings menu logic
//!
//! The menu is modal: while it is open the simulation is not ticked.
//! Key handling is kept free of any windowing types so it can be tested
//! headlessly; the frontend maps pressed digit keys to actions.

use crate::settings::{BallColor, Settings};

/// One action selectable from the settings menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    ToggleSound,
    VolumeUp,
    VolumeDown,
    ToggleLanguage,
    SetBallColor(BallColor),
    Close,
}

/// Map a pressed digit key (1-8) to its menu action
pub fn action_for_digit(digit: u8) -> Option<MenuAction> {
    match digit {
        1 => Some(MenuAction::ToggleSound),
        2 => Some(MenuAction::VolumeUp),
        3 => Some(MenuAction::VolumeDown),
        4 => Some(MenuAction::ToggleLanguage),
        5 => Some(MenuAction::SetBallColor(BallColor::Red)),
        6 => Some(MenuAction::SetBallColor(BallColor::Green)),
        7 => Some(MenuAction::SetBallColor(BallColor::Blue)),
        8 => Some(MenuAction::Close),
        _ => None,
    }
}

/// Apply an action to the settings. Returns true when the menu should close.
pub fn apply(settings: &mut Settings, action: MenuAction) -> bool {
    match action {
        MenuAction::ToggleSound => settings.sound_on = !settings.sound_on,
        MenuAction::VolumeUp => settings.volume_up(),
        MenuAction::VolumeDown => settings.volume_down(),
        MenuAction::ToggleLanguage => settings.language = settings.language.toggled(),
        MenuAction::SetBallColor(color) => settings.ball_color = color,
        MenuAction::Close => return true,
    }
    false
}

/// The menu text, one line per entry, reflecting the current settings
pub fn lines(settings: &Settings) -> Vec<String> {
    vec![
        "Settings:".to_string(),
        format!(
            "1. Sound: {}",
            if settings.sound_on { "On" } else { "Off" }
        ),
        format!("2. Volume Up ({:.0})", settings.volume),
        format!("3. Volume Down ({:.0})", settings.volume),
        format!("4. Language: {}", settings.language.as_str()),
        "5. Ball Color: Red".to_string(),
        "6. Ball Color: Green".to_string(),
        "7. Ball Color: Blue".to_string(),
        "8. Back to Game".to_string(),
    ]
}
