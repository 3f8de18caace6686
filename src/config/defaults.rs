pub const DEFAULT_LONG_PRESS_SECS: f64 = 2.0;
pub const MIN_LONG_PRESS_SECS: f64 = 0.5;
pub const MAX_LONG_PRESS_SECS: f64 = 10.0;

/// Secret-combo hold durations offered on the settings screen (seconds).
pub const SECRET_COMBO_OPTIONS: [u64; 5] = [2, 3, 5, 7, 10];
pub const DEFAULT_SECRET_COMBO_SECS: u64 = 5;

/// Dashboard auto-cycle intervals offered on the settings screen (seconds).
pub const AUTO_CYCLE_OPTIONS: [u64; 6] = [1, 5, 10, 15, 30, 60];
pub const DEFAULT_AUTO_CYCLE_SECS: u64 = 5;

pub const DEFAULT_FPS: u32 = 30;
pub const MAX_FPS: u32 = 60;

pub const DEFAULT_VIEWPORT_WIDTH: u32 = 480;
pub const DEFAULT_VIEWPORT_HEIGHT: u32 = 320;
pub const MIN_VIEWPORT_WIDTH: u32 = 64;
pub const MAX_VIEWPORT_WIDTH: u32 = 1920;
pub const MIN_VIEWPORT_HEIGHT: u32 = 48;
pub const MAX_VIEWPORT_HEIGHT: u32 = 1080;

pub const DEFAULT_SENSOR_POLL_MS: u64 = 500;
pub const MIN_SENSOR_POLL_MS: u64 = 50;
pub const MAX_SENSOR_POLL_MS: u64 = 10_000;

pub const DEFAULT_KEY_PREV: &str = "a";
pub const DEFAULT_KEY_NEXT: &str = "d";
pub const DEFAULT_KEY_SELECT: &str = "enter";
pub const DEFAULT_KEY_BACK: &str = "backspace";
pub const DEFAULT_KEY_FREEZE: &str = "f";
pub const DEFAULT_KEY_QUIT: &str = "esc";
