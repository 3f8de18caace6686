//! Terminal front end that drives the tricorder control core.
//!
//! # Architecture
//!
//! - Input thread: turns crossterm events into raw core events
//! - Sensor poller: refreshes readings in the background
//! - Frame loop: drains input, steps the core, executes device commands, draws

mod device;
mod frame_loop;
mod input;
mod render;

use anyhow::{Context, Result};
use crossbeam_channel::bounded;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tricorder::catalog::Catalog;
use tricorder::config::AppConfig;
use tricorder::sensors::{SensorPoller, SystemSensors};
use tricorder::terminal_restore::TerminalRestoreGuard;
use tricorder::{init_logging, init_tracing, log_debug, log_file_path, NavigationStateMachine};

use crate::frame_loop::{run_frame_loop, FrameLoopDeps, LoopExit};
use crate::input::spawn_input_thread;
use crate::render::{RenderContext, SYSTEM_EXTRA_KEYS};

/// Max pending input events before backpressure.
const INPUT_CHANNEL_CAPACITY: usize = 256;

fn main() -> Result<()> {
    let config = AppConfig::parse_args()?;
    let catalog = Catalog::load(config.catalog.as_deref())?;
    if config.dump_catalog {
        println!("{}", catalog.to_json_pretty()?);
        return Ok(());
    }

    init_logging(&config);
    init_tracing(&config);
    log_debug("=== Tricorder Started ===");
    log_debug(&format!("Log file: {:?}", log_file_path()));

    let core = config.core_config()?;
    let mut nav = NavigationStateMachine::new(&core, &catalog);

    let mut sensor_keys = catalog.sensor_keys();
    sensor_keys.extend(SYSTEM_EXTRA_KEYS.iter().map(|key| key.to_string()));
    let poller = SensorPoller::spawn(
        Box::new(SystemSensors::new()),
        sensor_keys,
        config.sensor_poll_interval(),
    );

    let terminal_guard = TerminalRestoreGuard::new();
    let mut stdout = io::stdout();
    let key_release = terminal_guard
        .acquire(&mut stdout)
        .context("failed to prepare the terminal")?;
    if !key_release {
        log_debug("terminal cannot report key releases; holds are unavailable");
    }

    let (input_tx, input_rx) = bounded(INPUT_CHANNEL_CAPACITY);
    let _input_handle = spawn_input_thread(input_tx, key_release);

    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    let mut deps = FrameLoopDeps {
        terminal_guard: &terminal_guard,
        input_rx,
        sensors: poller.reader(),
        render: RenderContext {
            catalog: &catalog,
            keymap: &core.keymap,
        },
        frame_interval: config.frame_interval(),
    };
    let outcome = run_frame_loop(&mut terminal, &mut nav, &mut deps);

    drop(terminal);
    terminal_guard.restore();
    drop(poller);

    let exit = outcome?;
    log_debug(&format!("=== Tricorder Exiting ({exit:?}) ==="));
    if let LoopExit::Device(command) = exit {
        device::execute(command)?;
    }
    Ok(())
}
