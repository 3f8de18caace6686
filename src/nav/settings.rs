use super::State;
use crate::config::{AUTO_CYCLE_OPTIONS, SECRET_COMBO_OPTIONS};
use std::fmt;
use std::time::Duration;

pub const BACK_TO_MAIN_MENU: &str = "<- Back to Main Menu";

/// Entries of the device settings screen, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceItem {
    Reboot,
    Shutdown,
    RestartApp,
    SecretComboTimer,
    BackToMenu,
}

impl DeviceItem {
    pub const ALL: [DeviceItem; 5] = [
        DeviceItem::Reboot,
        DeviceItem::Shutdown,
        DeviceItem::RestartApp,
        DeviceItem::SecretComboTimer,
        DeviceItem::BackToMenu,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DeviceItem::Reboot => "Reboot Device",
            DeviceItem::Shutdown => "Shutdown Device",
            DeviceItem::RestartApp => "Restart Application",
            DeviceItem::SecretComboTimer => "Secret Combo Timer",
            DeviceItem::BackToMenu => BACK_TO_MAIN_MENU,
        }
    }

    pub fn target(self) -> State {
        match self {
            DeviceItem::Reboot => State::ConfirmReboot,
            DeviceItem::Shutdown => State::ConfirmShutdown,
            DeviceItem::RestartApp => State::ConfirmRestartApp,
            DeviceItem::SecretComboTimer => State::SelectComboDuration,
            DeviceItem::BackToMenu => State::Menu,
        }
    }
}

/// Host-level request published by a confirm screen. The front end executes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceCommand {
    Reboot,
    Shutdown,
    RestartApp,
}

impl DeviceCommand {
    pub fn for_confirm(state: State) -> Option<DeviceCommand> {
        match state {
            State::ConfirmReboot => Some(DeviceCommand::Reboot),
            State::ConfirmShutdown => Some(DeviceCommand::Shutdown),
            State::ConfirmRestartApp => Some(DeviceCommand::RestartApp),
            _ => None,
        }
    }

    pub fn prompt(self) -> &'static str {
        match self {
            DeviceCommand::Reboot => "Reboot the device?",
            DeviceCommand::Shutdown => "Shut the device down?",
            DeviceCommand::RestartApp => "Restart the application?",
        }
    }
}

impl fmt::Display for DeviceCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DeviceCommand::Reboot => "reboot",
            DeviceCommand::Shutdown => "shutdown",
            DeviceCommand::RestartApp => "restart-app",
        })
    }
}

pub const CONFIRM_OPTIONS: [&str; 2] = ["Yes", "No"];
pub const CONFIRM_YES: usize = 0;
pub const CONFIRM_NO: usize = 1;

/// Display settings rows: every interval option, then the way out.
pub fn display_options() -> Vec<String> {
    AUTO_CYCLE_OPTIONS
        .iter()
        .map(|secs| format!("Auto-cycle: {secs}s"))
        .chain(std::iter::once(BACK_TO_MAIN_MENU.to_string()))
        .collect()
}

pub fn combo_options() -> Vec<String> {
    SECRET_COMBO_OPTIONS
        .iter()
        .map(|secs| format!("{secs} seconds"))
        .collect()
}

pub fn device_options() -> Vec<String> {
    DeviceItem::ALL
        .iter()
        .map(|item| item.label().to_string())
        .collect()
}

/// Index of `current` in `options`, or 0 when it is not offered.
pub fn option_index(options: &[u64], current: Duration) -> usize {
    options
        .iter()
        .position(|secs| Duration::from_secs(*secs) == current)
        .unwrap_or(0)
}
