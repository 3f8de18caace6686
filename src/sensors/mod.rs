//! Sensor readings consumed by rendering.
//!
//! The navigation core only remembers which sensor key is selected. Values are
//! produced by a [`SensorSource`], usually polled on a background thread by
//! [`SensorPoller`] and read back once per frame.

mod poller;
mod system;
#[cfg(test)]
mod tests;

pub use poller::{FrameReader, SensorPoller, SharedFrame};
pub use system::{format_uptime, parse_loadavg, parse_meminfo, SystemSensors};

use std::collections::HashMap;

/// One channel's current value, already formatted for display.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Reading {
    pub text: String,
    pub unit: String,
    pub note: String,
    pub value: Option<f64>,
}

impl Reading {
    pub fn unavailable() -> Self {
        Self {
            text: "N/A".to_string(),
            ..Self::default()
        }
    }

    pub fn number(value: f64, unit: &str, note: impl Into<String>) -> Self {
        Self {
            text: format!("{value:.1}"),
            unit: unit.to_string(),
            note: note.into(),
            value: Some(value),
        }
    }

    pub fn text(text: impl Into<String>, note: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            note: note.into(),
            ..Self::default()
        }
    }
}

pub trait SensorSource: Send {
    /// Unknown keys report [`Reading::unavailable`].
    fn get(&mut self, key: &str) -> Reading;
}

/// Readings for every polled key at one instant.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SensorFrame {
    readings: HashMap<String, Reading>,
}

impl SensorFrame {
    pub fn get(&self, key: &str) -> Option<&Reading> {
        self.readings.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, reading: Reading) {
        self.readings.insert(key.into(), reading);
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }
}

pub fn poll_all(source: &mut dyn SensorSource, keys: &[String]) -> SensorFrame {
    let mut frame = SensorFrame::default();
    for key in keys {
        frame.insert(key.clone(), source.get(key));
    }
    frame
}
