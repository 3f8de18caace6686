use super::{Reading, SensorSource};
use crate::catalog::CLOCK_KEY;
use std::ffi::CString;
use std::fs;
use std::path::{Path, PathBuf};

/// Host metrics read from procfs and libc. Environment and motion channels
/// need dedicated hardware and report `N/A` here.
#[derive(Debug, Clone)]
pub struct SystemSensors {
    proc_root: PathBuf,
    disk_path: PathBuf,
    cpus: usize,
}

impl Default for SystemSensors {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemSensors {
    pub fn new() -> Self {
        Self::with_roots("/proc", "/")
    }

    pub fn with_roots(proc_root: impl Into<PathBuf>, disk_path: impl Into<PathBuf>) -> Self {
        Self {
            proc_root: proc_root.into(),
            disk_path: disk_path.into(),
            cpus: num_cpus::get().max(1),
        }
    }

    fn read_proc(&self, name: &str) -> Option<String> {
        fs::read_to_string(self.proc_root.join(name)).ok()
    }

    fn cpu(&self) -> Reading {
        let Some(load) = self.read_proc("loadavg").as_deref().and_then(parse_loadavg) else {
            return Reading::unavailable();
        };
        let percent = (load / self.cpus as f64 * 100.0).clamp(0.0, 100.0);
        Reading::number(percent, "%", format!("load {load:.2} on {} cpus", self.cpus))
    }

    fn memory(&self) -> Reading {
        let Some((total_kb, available_kb)) =
            self.read_proc("meminfo").as_deref().and_then(parse_meminfo)
        else {
            return Reading::unavailable();
        };
        let used_kb = total_kb.saturating_sub(available_kb);
        let percent = used_kb as f64 / total_kb as f64 * 100.0;
        Reading::number(
            percent,
            "%",
            format!("{} / {} MiB", used_kb / 1024, total_kb / 1024),
        )
    }

    fn disk(&self) -> Reading {
        match disk_usage(&self.disk_path) {
            Some((used, total)) if total > 0 => Reading::number(
                used as f64 / total as f64 * 100.0,
                "%",
                format!("{} / {} GiB", used >> 30, total >> 30),
            ),
            _ => Reading::unavailable(),
        }
    }

    fn uptime(&self) -> Reading {
        self.read_proc("uptime")
            .as_deref()
            .and_then(|text| text.split_whitespace().next()?.parse::<f64>().ok())
            .map(|secs| Reading::text(format_uptime(secs as u64), "since boot"))
            .unwrap_or_else(Reading::unavailable)
    }

    fn hostname(&self) -> Reading {
        self.read_proc("sys/kernel/hostname")
            .map(|name| Reading::text(name.trim(), "hostname"))
            .unwrap_or_else(Reading::unavailable)
    }
}

impl SensorSource for SystemSensors {
    fn get(&mut self, key: &str) -> Reading {
        match key {
            CLOCK_KEY => local_clock()
                .map(|(time, date)| Reading::text(time, date))
                .unwrap_or_else(Reading::unavailable),
            "CPU_USAGE" => self.cpu(),
            "MEMORY_USAGE" => self.memory(),
            "DISK_USAGE" => self.disk(),
            "UPTIME" => self.uptime(),
            "HOSTNAME" => self.hostname(),
            _ => Reading::unavailable(),
        }
    }
}

/// One-minute load average from `/proc/loadavg`.
pub fn parse_loadavg(text: &str) -> Option<f64> {
    text.split_whitespace().next()?.parse().ok()
}

/// `(MemTotal, MemAvailable)` in kB from `/proc/meminfo`.
pub fn parse_meminfo(text: &str) -> Option<(u64, u64)> {
    let field = |name: &str| {
        text.lines()
            .find_map(|line| line.strip_prefix(name))
            .and_then(|rest| rest.trim_start_matches(':').split_whitespace().next())
            .and_then(|value| value.parse::<u64>().ok())
    };
    let total = field("MemTotal")?;
    let available = field("MemAvailable")?;
    (total > 0).then_some((total, available.min(total)))
}

pub fn format_uptime(secs: u64) -> String {
    let days = secs / 86_400;
    let hours = (secs % 86_400) / 3_600;
    let minutes = (secs % 3_600) / 60;
    if days > 0 {
        format!("{days}d {hours:02}h {minutes:02}m")
    } else {
        format!("{hours:02}h {minutes:02}m")
    }
}

/// `(used_bytes, total_bytes)` of the filesystem holding `path`.
fn disk_usage(path: &Path) -> Option<(u64, u64)> {
    let c_path = CString::new(path.to_str()?).ok()?;
    // SAFETY: statvfs is plain old data, so all-zero is a valid value. c_path is
    // NUL-terminated and stats is writable for the duration of the call.
    let (rc, stats) = unsafe {
        let mut stats: libc::statvfs = std::mem::zeroed();
        let rc = libc::statvfs(c_path.as_ptr(), &mut stats);
        (rc, stats)
    };
    if rc != 0 {
        return None;
    }
    let block = stats.f_frsize as u64;
    let total = stats.f_blocks as u64 * block;
    let free = stats.f_bfree as u64 * block;
    Some((total.saturating_sub(free), total))
}

/// Local `HH:MM:SS` and `YYYY-MM-DD`.
fn local_clock() -> Option<(String, String)> {
    // SAFETY: tm is plain old data, so all-zero is valid. time(NULL) has no
    // preconditions and localtime_r writes only into tm.
    let (ok, tm) = unsafe {
        let mut tm: libc::tm = std::mem::zeroed();
        let now = libc::time(std::ptr::null_mut());
        let ok = !libc::localtime_r(&now, &mut tm).is_null();
        (ok, tm)
    };
    if !ok {
        return None;
    }
    Some((
        format!("{:02}:{:02}:{:02}", tm.tm_hour, tm.tm_min, tm.tm_sec),
        format!(
            "{:04}-{:02}-{:02}",
            tm.tm_year + 1900,
            tm.tm_mon + 1,
            tm.tm_mday
        ),
    ))
}
