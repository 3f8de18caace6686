use anyhow::{anyhow, bail, Context, Result};
use std::env;
use std::os::unix::process::CommandExt;
use std::process::Command;
use tricorder::log_debug;
use tricorder::nav::DeviceCommand;

const POWER_PROGRAM: &str = "systemctl";
const REBOOT_ARGS: &[&str] = &["reboot"];
const SHUTDOWN_ARGS: &[&str] = &["poweroff"];

/// Program and arguments for a power command.
pub(crate) fn power_command(
    command: DeviceCommand,
) -> Option<(&'static str, &'static [&'static str])> {
    match command {
        DeviceCommand::Reboot => Some((POWER_PROGRAM, REBOOT_ARGS)),
        DeviceCommand::Shutdown => Some((POWER_PROGRAM, SHUTDOWN_ARGS)),
        DeviceCommand::RestartApp => None,
    }
}

/// Run a confirmed device command. Called after the terminal has been restored.
pub(crate) fn execute(command: DeviceCommand) -> Result<()> {
    log_debug(&format!("executing device command: {command}"));
    tracing::info!(%command, "executing device command");

    if let Some((program, args)) = power_command(command) {
        // SAFETY: sync() takes no arguments and only schedules buffered writes.
        unsafe { libc::sync() };
        let status = Command::new(program)
            .args(args)
            .status()
            .with_context(|| format!("failed to run {program}"))?;
        if !status.success() {
            bail!("{program} {} exited with {status}", args.join(" "));
        }
        return Ok(());
    }

    let exe = env::current_exe().context("cannot locate the running executable")?;
    let err = Command::new(&exe).args(env::args_os().skip(1)).exec();
    Err(anyhow!("failed to restart {}: {err}", exe.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_commands_use_systemctl() {
        assert_eq!(
            power_command(DeviceCommand::Reboot),
            Some(("systemctl", &["reboot"][..]))
        );
        assert_eq!(
            power_command(DeviceCommand::Shutdown),
            Some(("systemctl", &["poweroff"][..]))
        );
        assert_eq!(power_command(DeviceCommand::RestartApp), None);
    }
}
