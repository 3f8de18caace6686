use super::defaults::{
    AUTO_CYCLE_OPTIONS, MAX_FPS, MAX_LONG_PRESS_SECS, MAX_SENSOR_POLL_MS, MAX_VIEWPORT_HEIGHT,
    MAX_VIEWPORT_WIDTH, MIN_LONG_PRESS_SECS, MIN_SENSOR_POLL_MS, MIN_VIEWPORT_HEIGHT,
    MIN_VIEWPORT_WIDTH, SECRET_COMBO_OPTIONS,
};
use super::AppConfig;
use crate::input::Key;
use anyhow::{bail, Context, Result};
use clap::Parser;
use std::collections::HashMap;

impl AppConfig {
    /// Parse CLI arguments and validate them right away.
    pub fn parse_args() -> Result<Self> {
        let mut config = Self::parse();
        config.validate()?;
        Ok(config)
    }

    /// Range-check timing and layout values and make sure every key binding is usable.
    pub fn validate(&mut self) -> Result<()> {
        if !self.long_press_secs.is_finite()
            || !(MIN_LONG_PRESS_SECS..=MAX_LONG_PRESS_SECS).contains(&self.long_press_secs)
        {
            bail!(
                "--long-press-secs must be between {MIN_LONG_PRESS_SECS} and {MAX_LONG_PRESS_SECS}, got {}",
                self.long_press_secs
            );
        }

        if !SECRET_COMBO_OPTIONS.contains(&self.secret_combo_secs) {
            bail!(
                "--secret-combo-secs must be one of {}, got {}",
                list_options(&SECRET_COMBO_OPTIONS),
                self.secret_combo_secs
            );
        }

        if !AUTO_CYCLE_OPTIONS.contains(&self.auto_cycle_secs) {
            bail!(
                "--auto-cycle-secs must be one of {}, got {}",
                list_options(&AUTO_CYCLE_OPTIONS),
                self.auto_cycle_secs
            );
        }

        if !(1..=MAX_FPS).contains(&self.fps) {
            bail!("--fps must be between 1 and {MAX_FPS}, got {}", self.fps);
        }

        if !(MIN_VIEWPORT_WIDTH..=MAX_VIEWPORT_WIDTH).contains(&self.viewport_width) {
            bail!(
                "--viewport-width must be between {MIN_VIEWPORT_WIDTH} and {MAX_VIEWPORT_WIDTH}, got {}",
                self.viewport_width
            );
        }
        if !(MIN_VIEWPORT_HEIGHT..=MAX_VIEWPORT_HEIGHT).contains(&self.viewport_height) {
            bail!(
                "--viewport-height must be between {MIN_VIEWPORT_HEIGHT} and {MAX_VIEWPORT_HEIGHT}, got {}",
                self.viewport_height
            );
        }

        if !(MIN_SENSOR_POLL_MS..=MAX_SENSOR_POLL_MS).contains(&self.sensor_poll_ms) {
            bail!(
                "--sensor-poll-ms must be between {MIN_SENSOR_POLL_MS} and {MAX_SENSOR_POLL_MS}, got {}",
                self.sensor_poll_ms
            );
        }

        let mut seen: HashMap<Key, &'static str> = HashMap::new();
        for (name, action) in self.key_bindings() {
            let key: Key = name.parse().with_context(|| {
                format!("--key-{} is not a usable key", flag_suffix(action.label()))
            })?;
            if let Some(other) = seen.insert(key, action.label()) {
                bail!(
                    "key {key} is bound to both {other} and {}; bindings must be distinct",
                    action.label()
                );
            }
        }

        if let Some(path) = &self.catalog {
            if !path.is_file() {
                bail!("--catalog {} does not exist", path.display());
            }
        }

        Ok(())
    }
}

fn flag_suffix(label: &str) -> String {
    label.to_ascii_lowercase()
}

fn list_options(options: &[u64]) -> String {
    options
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
