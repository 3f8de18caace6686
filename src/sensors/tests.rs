use super::*;
use std::sync::Arc;
use std::time::{Duration, Instant};

struct CountingSource {
    polls: u32,
}

impl SensorSource for CountingSource {
    fn get(&mut self, key: &str) -> Reading {
        self.polls += 1;
        Reading::number(f64::from(self.polls), "", key)
    }
}

#[test]
fn parses_loadavg_first_field() {
    assert_eq!(parse_loadavg("0.52 0.58 0.59 1/467 12345\n"), Some(0.52));
    assert_eq!(parse_loadavg(""), None);
    assert_eq!(parse_loadavg("abc"), None);
}

#[test]
fn parses_meminfo_total_and_available() {
    let text = "MemTotal:        8000000 kB\nMemFree:          100000 kB\nMemAvailable:    2000000 kB\n";
    assert_eq!(parse_meminfo(text), Some((8_000_000, 2_000_000)));
    assert_eq!(parse_meminfo("MemTotal: 0 kB\nMemAvailable: 0 kB\n"), None);
    assert_eq!(parse_meminfo("MemFree: 1 kB\n"), None);
}

#[test]
fn formats_uptime_with_days() {
    assert_eq!(format_uptime(59), "00h 00m");
    assert_eq!(format_uptime(3_660), "01h 01m");
    assert_eq!(format_uptime(90_061), "1d 01h 01m");
}

#[test]
fn system_sensors_read_from_proc_root() {
    let dir = std::env::temp_dir().join(format!("tricorder_proc_{}", std::process::id()));
    std::fs::create_dir_all(dir.join("sys/kernel")).expect("proc dir");
    std::fs::write(dir.join("loadavg"), "0.00 0.01 0.05 1/100 42\n").expect("loadavg");
    std::fs::write(
        dir.join("meminfo"),
        "MemTotal: 1000 kB\nMemAvailable: 250 kB\n",
    )
    .expect("meminfo");
    std::fs::write(dir.join("uptime"), "3700.5 100.0\n").expect("uptime");
    std::fs::write(dir.join("sys/kernel/hostname"), "bridge\n").expect("hostname");

    let mut sensors = SystemSensors::with_roots(&dir, "/");
    let memory = sensors.get("MEMORY_USAGE");
    assert_eq!(memory.value, Some(75.0));
    assert_eq!(memory.unit, "%");
    assert_eq!(sensors.get("CPU_USAGE").value, Some(0.0));
    assert_eq!(sensors.get("UPTIME").text, "01h 01m");
    assert_eq!(sensors.get("HOSTNAME").text, "bridge");
    assert_eq!(sensors.get("TEMPERATURE"), Reading::unavailable());
    assert!(sensors.get("CLOCK").text.contains(':'));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn missing_proc_files_report_unavailable() {
    let mut sensors = SystemSensors::with_roots("/definitely/not/proc", "/definitely/not/disk");
    assert_eq!(sensors.get("CPU_USAGE").text, "N/A");
    assert_eq!(sensors.get("DISK_USAGE").text, "N/A");
}

#[test]
fn poll_all_collects_every_key() {
    let mut source = CountingSource { polls: 0 };
    let keys = vec!["A".to_string(), "B".to_string()];
    let frame = poll_all(&mut source, &keys);
    assert_eq!(frame.len(), 2);
    assert_eq!(frame.get("B").map(|r| r.note.as_str()), Some("B"));
}

#[test]
fn frame_reader_sees_each_generation_once() {
    let shared = Arc::new(SharedFrame::new());
    let mut reader = FrameReader::new(Arc::clone(&shared));
    assert!(reader.poll().is_none());

    let mut frame = SensorFrame::default();
    frame.insert("CLOCK", Reading::text("12:00:00", ""));
    shared.publish(frame.clone());
    assert_eq!(reader.poll(), Some(frame));
    assert!(reader.poll().is_none());
    assert_eq!(shared.generation(), 1);
}

#[test]
fn poller_publishes_and_stops() {
    let mut poller = SensorPoller::spawn(
        Box::new(CountingSource { polls: 0 }),
        vec!["A".to_string()],
        Duration::from_millis(5),
    );
    let mut reader = poller.reader();
    let deadline = Instant::now() + Duration::from_secs(2);
    let mut frame = None;
    while frame.is_none() && Instant::now() < deadline {
        frame = reader.poll();
        std::thread::sleep(Duration::from_millis(1));
    }
    let frame = frame.expect("poller published a frame");
    assert!(frame.get("A").and_then(|r| r.value).is_some());

    poller.stop();
    let settled = poller.shared().generation();
    std::thread::sleep(Duration::from_millis(20));
    assert_eq!(poller.shared().generation(), settled);
}
