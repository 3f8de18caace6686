//! Control core of a handheld sensor device: input translation, gesture
//! timing, screen navigation, and the hidden mini-games.

pub mod app;
pub mod catalog;
pub mod config;
pub mod games;
pub mod gesture;
pub mod input;
mod lock;
pub mod menu;
pub mod nav;
pub mod sensors;
pub mod session;
mod telemetry;
pub mod terminal_restore;

pub use app::{
    crash_log_path, init_logging, log_debug, log_debug_content, log_file_path, log_panic,
};
pub(crate) use lock::lock_or_recover;
pub use nav::{NavigationStateMachine, Snapshot, State};
pub use telemetry::{init_tracing, tracing_log_path};
