//! Command-line parsing and validation helpers.

mod defaults;
mod validation;

use crate::games::Viewport;
use crate::input::{Action, Key, KeyMap};
use clap::Parser;
use std::{path::PathBuf, sync::Arc, time::Duration};

pub use defaults::{
    AUTO_CYCLE_OPTIONS, DEFAULT_AUTO_CYCLE_SECS, DEFAULT_FPS, DEFAULT_KEY_BACK, DEFAULT_KEY_FREEZE,
    DEFAULT_KEY_NEXT, DEFAULT_KEY_PREV, DEFAULT_KEY_QUIT, DEFAULT_KEY_SELECT,
    DEFAULT_LONG_PRESS_SECS, DEFAULT_SECRET_COMBO_SECS, DEFAULT_SENSOR_POLL_MS,
    DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH, SECRET_COMBO_OPTIONS,
};

/// CLI options for the tricorder front end. Everything is read once at startup.
#[derive(Debug, Parser, Clone)]
#[command(about = "Tricorder handheld front end", author, version)]
pub struct AppConfig {
    /// Hold PREV this long on a sub-screen to jump back to the main menu (seconds)
    #[arg(
        long = "long-press-secs",
        env = "TRICORDER_LONG_PRESS_SECS",
        default_value_t = DEFAULT_LONG_PRESS_SECS
    )]
    pub long_press_secs: f64,

    /// Hold time for the secret menu combo (seconds; 2, 3, 5, 7 or 10)
    #[arg(
        long = "secret-combo-secs",
        env = "TRICORDER_SECRET_COMBO_SECS",
        default_value_t = DEFAULT_SECRET_COMBO_SECS
    )]
    pub secret_combo_secs: u64,

    /// Dashboard auto-cycle interval (seconds; 1, 5, 10, 15, 30 or 60)
    #[arg(
        long = "auto-cycle-secs",
        env = "TRICORDER_AUTO_CYCLE_SECS",
        default_value_t = DEFAULT_AUTO_CYCLE_SECS
    )]
    pub auto_cycle_secs: u64,

    /// Frame rate of the main loop
    #[arg(long, env = "TRICORDER_FPS", default_value_t = DEFAULT_FPS)]
    pub fps: u32,

    /// Game playfield width in pixels
    #[arg(
        long = "viewport-width",
        env = "TRICORDER_VIEWPORT_WIDTH",
        default_value_t = DEFAULT_VIEWPORT_WIDTH
    )]
    pub viewport_width: u32,

    /// Game playfield height in pixels
    #[arg(
        long = "viewport-height",
        env = "TRICORDER_VIEWPORT_HEIGHT",
        default_value_t = DEFAULT_VIEWPORT_HEIGHT
    )]
    pub viewport_height: u32,

    /// Key bound to PREV
    #[arg(long = "key-prev", env = "TRICORDER_KEY_PREV", default_value = DEFAULT_KEY_PREV)]
    pub key_prev: String,

    /// Key bound to NEXT
    #[arg(long = "key-next", env = "TRICORDER_KEY_NEXT", default_value = DEFAULT_KEY_NEXT)]
    pub key_next: String,

    /// Key bound to SELECT
    #[arg(
        long = "key-select",
        env = "TRICORDER_KEY_SELECT",
        default_value = DEFAULT_KEY_SELECT
    )]
    pub key_select: String,

    /// Key bound to BACK
    #[arg(long = "key-back", env = "TRICORDER_KEY_BACK", default_value = DEFAULT_KEY_BACK)]
    pub key_back: String,

    /// Key bound to FREEZE
    #[arg(
        long = "key-freeze",
        env = "TRICORDER_KEY_FREEZE",
        default_value = DEFAULT_KEY_FREEZE
    )]
    pub key_freeze: String,

    /// Key bound to QUIT
    #[arg(long = "key-quit", env = "TRICORDER_KEY_QUIT", default_value = DEFAULT_KEY_QUIT)]
    pub key_quit: String,

    /// YAML file replacing the built-in sensor and schematic catalog
    #[arg(long, env = "TRICORDER_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Sensor polling period (milliseconds)
    #[arg(
        long = "sensor-poll-ms",
        env = "TRICORDER_SENSOR_POLL_MS",
        default_value_t = DEFAULT_SENSOR_POLL_MS
    )]
    pub sensor_poll_ms: u64,

    /// Print the effective catalog as JSON and exit
    #[arg(long = "dump-catalog", default_value_t = false)]
    pub dump_catalog: bool,

    /// Enable file logging (debug)
    #[arg(long = "logs", env = "TRICORDER_LOGS", default_value_t = false)]
    pub logs: bool,

    /// Disable all file logging (overrides --logs and log env vars)
    #[arg(long = "no-logs", env = "TRICORDER_NO_LOGS", default_value_t = false)]
    pub no_logs: bool,

    /// Allow logging raw key names and sensor text (debug log only)
    #[arg(
        long = "log-content",
        env = "TRICORDER_LOG_CONTENT",
        default_value_t = false
    )]
    pub log_content: bool,
}

/// Immutable settings the navigation core is built from.
#[derive(Debug, Clone)]
pub struct CoreConfig {
    pub keymap: Arc<KeyMap>,
    pub long_press: Duration,
    pub secret_combo: Duration,
    pub auto_cycle: Duration,
    pub viewport: Viewport,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            keymap: Arc::new(KeyMap::default()),
            long_press: Duration::from_secs_f64(DEFAULT_LONG_PRESS_SECS),
            secret_combo: Duration::from_secs(DEFAULT_SECRET_COMBO_SECS),
            auto_cycle: Duration::from_secs(DEFAULT_AUTO_CYCLE_SECS),
            viewport: Viewport::new(DEFAULT_VIEWPORT_WIDTH, DEFAULT_VIEWPORT_HEIGHT),
        }
    }
}

impl AppConfig {
    /// Key names paired with the action they drive, in action order.
    pub fn key_bindings(&self) -> [(&str, Action); 6] {
        [
            (self.key_prev.as_str(), Action::Prev),
            (self.key_next.as_str(), Action::Next),
            (self.key_select.as_str(), Action::Select),
            (self.key_back.as_str(), Action::Back),
            (self.key_freeze.as_str(), Action::Freeze),
            (self.key_quit.as_str(), Action::Quit),
        ]
    }

    /// Build the core configuration. Call after [`AppConfig::validate`].
    pub fn core_config(&self) -> anyhow::Result<CoreConfig> {
        let mut bindings = Vec::with_capacity(6);
        for (name, action) in self.key_bindings() {
            let key: Key = name.parse()?;
            bindings.push((key, action));
        }
        Ok(CoreConfig {
            keymap: Arc::new(KeyMap::new(bindings)),
            long_press: Duration::from_secs_f64(self.long_press_secs),
            secret_combo: Duration::from_secs(self.secret_combo_secs),
            auto_cycle: Duration::from_secs(self.auto_cycle_secs),
            viewport: Viewport::new(self.viewport_width, self.viewport_height),
        })
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.fps.max(1)))
    }

    pub fn sensor_poll_interval(&self) -> Duration {
        Duration::from_millis(self.sensor_poll_ms)
    }
}
