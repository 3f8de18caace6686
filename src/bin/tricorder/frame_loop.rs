use crate::input::InputMessage;
use crate::render::{self, RenderContext};
use anyhow::Result;
use crossbeam_channel::Receiver;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::panic::{self, AssertUnwindSafe};
use std::thread;
use std::time::{Duration, Instant};
use tricorder::nav::DeviceCommand;
use tricorder::sensors::{FrameReader, SensorFrame};
use tricorder::terminal_restore::TerminalRestoreGuard;
use tricorder::{log_debug, NavigationStateMachine};

pub(crate) type TermBackend = CrosstermBackend<io::Stdout>;

/// Why the frame loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopExit {
    Quit,
    InputClosed,
    Device(DeviceCommand),
}

pub(crate) struct FrameLoopDeps<'a> {
    pub(crate) terminal_guard: &'a TerminalRestoreGuard,
    pub(crate) input_rx: Receiver<InputMessage>,
    pub(crate) sensors: FrameReader,
    pub(crate) render: RenderContext<'a>,
    pub(crate) frame_interval: Duration,
}

/// Drain input, step the core, then draw. One pass per frame interval.
pub(crate) fn run_frame_loop(
    terminal: &mut Terminal<TermBackend>,
    nav: &mut NavigationStateMachine,
    deps: &mut FrameLoopDeps<'_>,
) -> Result<LoopExit> {
    let mut readings = SensorFrame::default();
    let mut redraw = true;
    let mut events = Vec::new();

    loop {
        let frame_start = Instant::now();

        events.clear();
        let mut input_closed = false;
        loop {
            match deps.input_rx.try_recv() {
                Ok(InputMessage::Raw(event)) => events.push(event),
                Ok(InputMessage::Resize) => redraw = true,
                Err(crossbeam_channel::TryRecvError::Empty) => break,
                Err(crossbeam_channel::TryRecvError::Disconnected) => {
                    input_closed = true;
                    break;
                }
            }
        }

        let now = Instant::now();
        let step = panic::catch_unwind(AssertUnwindSafe(|| {
            let changed = nav.handle_input(&events, now);
            nav.update(now) || changed
        }));
        match step {
            Ok(changed) => redraw |= changed,
            Err(_) => {
                log_debug("frame step panicked; returning to the main menu");
                tracing::error!(state = %nav.current_state(), "frame step panicked");
                nav.recover();
                deps.terminal_guard.reacquire(&mut io::stdout())?;
                terminal.clear()?;
                redraw = true;
            }
        }

        if nav.quit_requested() {
            return Ok(LoopExit::Quit);
        }
        if let Some(command) = nav.take_device_command() {
            return Ok(LoopExit::Device(command));
        }
        if input_closed {
            return Ok(LoopExit::InputClosed);
        }

        // Frozen screens keep showing the readings they had.
        if let Some(frame) = deps.sensors.poll() {
            if !nav.is_frozen() {
                readings = frame;
                redraw |= nav.current_state().is_live_view();
            }
        }

        if redraw {
            let snapshot = nav.snapshot(now);
            terminal.draw(|frame| render::draw(frame, &snapshot, &deps.render, &readings))?;
            redraw = false;
        }

        let elapsed = frame_start.elapsed();
        if elapsed < deps.frame_interval {
            thread::sleep(deps.frame_interval - elapsed);
        }
    }
}
