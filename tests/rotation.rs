//! Tests for time-gapped file rotation.

use chrono::{DateTime, Local, TimeDelta, TimeZone};
use gaplog::rotation::{FsProvisioner, Provision, next_rollover};
use gaplog::{
    Error, FileNaming, FormatResult, Level, Log, ManualClock, Record, RotatingFileLogger,
    SinkFailure,
};
use gaplog::fmt::Template;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

fn t0() -> DateTime<Local> {
    Local
        .with_ymd_and_hms(2024, 1, 15, 0, 0, 0)
        .single()
        .expect("unambiguous local time")
}

/// Delegates to the filesystem but records every file name and can be told to fail.
#[derive(Clone, Default)]
struct RecordingProvisioner {
    opened: Arc<Mutex<Vec<String>>>,
    fail: Arc<AtomicBool>,
}

impl RecordingProvisioner {
    fn opened(&self) -> Vec<String> {
        self.opened.lock().unwrap().clone()
    }

    fn set_failing(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }
}

impl Provision for RecordingProvisioner {
    fn provision(&self, dir: &Path, file_name: &str) -> io::Result<Box<dyn Write + Send>> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        }
        self.opened.lock().unwrap().push(file_name.to_string());
        FsProvisioner.provision(dir, file_name)
    }
}

fn files_in(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

fn read(dir: &Path, name: &str) -> String {
    fs::read_to_string(dir.join(name)).unwrap()
}

#[test]
fn rollover_advances_by_whole_gaps() {
    let gap = TimeDelta::hours(1);
    let rollover = next_rollover(t0(), t0() + TimeDelta::minutes(90), gap).unwrap();
    assert_eq!(rollover.intervals, 1);
    assert_eq!(rollover.boundary, t0() + TimeDelta::hours(1));

    let rollover = next_rollover(t0(), t0() + TimeDelta::minutes(210), gap).unwrap();
    assert_eq!(rollover.intervals, 3);
    assert_eq!(rollover.boundary, t0() + TimeDelta::hours(3));
}

#[test]
fn rollover_needs_strictly_more_than_one_gap() {
    let gap = TimeDelta::hours(1);
    assert!(next_rollover(t0(), t0() + gap, gap).is_none());
    assert!(next_rollover(t0(), t0() + TimeDelta::minutes(59), gap).is_none());
    assert!(next_rollover(t0(), t0() - TimeDelta::hours(5), gap).is_none());
}

#[test]
fn zero_gap_never_rolls_over() {
    let far = t0() + TimeDelta::days(3650);
    assert!(next_rollover(t0(), far, TimeDelta::zero()).is_none());
}

#[test]
fn first_file_is_opened_at_build() {
    let tmp = TempDir::new().unwrap();
    let logger = RotatingFileLogger::builder(tmp.path())
        .clock(ManualClock::new(t0()))
        .build()
        .unwrap();

    assert_eq!(files_in(tmp.path()), vec!["2024-01-15.log"]);
    assert_eq!(logger.active_path(), tmp.path().join("2024-01-15.log"));
    assert_eq!(logger.last_rotation(), t0());
    assert_eq!(logger.gap(), TimeDelta::zero());
    assert_eq!(logger.level(), Level::Debug);
}

#[test]
fn directory_is_created_recursively() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("a").join("b").join("c");
    let logger = RotatingFileLogger::builder(&dir)
        .clock(ManualClock::new(t0()))
        .build()
        .unwrap();
    logger.info("nested").unwrap();

    assert!(read(&dir, "2024-01-15.log").contains("| nested |"));
}

#[test]
fn zero_gap_keeps_single_file_forever() {
    let tmp = TempDir::new().unwrap();
    let clock = ManualClock::new(t0());
    let logger = RotatingFileLogger::builder(tmp.path())
        .clock(clock.clone())
        .build()
        .unwrap();

    logger.info("day one").unwrap();
    clock.advance(TimeDelta::days(400));
    logger.info("much later").unwrap();

    assert_eq!(files_in(tmp.path()), vec!["2024-01-15.log"]);
    let content = read(tmp.path(), "2024-01-15.log");
    assert_eq!(content.lines().count(), 2);
    assert_eq!(logger.last_rotation(), t0());
}

#[test]
fn rotates_to_boundary_not_to_now() {
    let tmp = TempDir::new().unwrap();
    let clock = ManualClock::new(t0());
    let provisioner = RecordingProvisioner::default();
    let logger = RotatingFileLogger::builder(tmp.path())
        .gap(TimeDelta::hours(1))
        .file_naming(FileNaming::minutely())
        .provisioner(provisioner.clone())
        .clock(clock.clone())
        .build()
        .unwrap();

    logger.info("first").unwrap();
    clock.advance(TimeDelta::minutes(90));
    logger.info("second").unwrap();

    assert_eq!(logger.last_rotation(), t0() + TimeDelta::hours(1));
    assert_eq!(
        provisioner.opened(),
        vec!["2024-01-15_00-00.log", "2024-01-15_01-00.log"]
    );
    assert!(read(tmp.path(), "2024-01-15_00-00.log").contains("| first |"));
    let second = read(tmp.path(), "2024-01-15_01-00.log");
    assert!(second.contains("| second |"));
    assert!(!second.contains("first"));
    // the line itself carries the real write time
    assert!(second.contains("2024/01/15 - 01:30:00.000"));
}

#[test]
fn idle_then_burst_rotates_once() {
    let tmp = TempDir::new().unwrap();
    let clock = ManualClock::new(t0());
    let provisioner = RecordingProvisioner::default();
    let logger = RotatingFileLogger::builder(tmp.path())
        .gap(TimeDelta::hours(1))
        .file_naming(FileNaming::hourly())
        .provisioner(provisioner.clone())
        .clock(clock.clone())
        .build()
        .unwrap();

    clock.advance(TimeDelta::minutes(3 * 60 + 30));
    logger.warn("after idle").unwrap();
    logger.warn("same window").unwrap();

    assert_eq!(
        provisioner.opened(),
        vec!["2024-01-15_00.log", "2024-01-15_03.log"]
    );
    assert_eq!(
        files_in(tmp.path()),
        vec!["2024-01-15_00.log", "2024-01-15_03.log"]
    );
    assert_eq!(logger.last_rotation(), t0() + TimeDelta::hours(3));
    assert_eq!(read(tmp.path(), "2024-01-15_03.log").lines().count(), 2);
}

#[test]
fn boundaries_stay_aligned_across_rotations() {
    let tmp = TempDir::new().unwrap();
    let clock = ManualClock::new(t0());
    let provisioner = RecordingProvisioner::default();
    let logger = RotatingFileLogger::builder(tmp.path())
        .gap(TimeDelta::hours(1))
        .file_naming(FileNaming::minutely())
        .provisioner(provisioner.clone())
        .clock(clock.clone())
        .build()
        .unwrap();

    for minutes in [30, 61, 119, 121, 125] {
        clock.set(t0() + TimeDelta::minutes(minutes));
        logger.info(format!("at {minutes}")).unwrap();
    }

    assert_eq!(
        provisioner.opened(),
        vec![
            "2024-01-15_00-00.log",
            "2024-01-15_01-00.log",
            "2024-01-15_02-00.log",
        ]
    );
    let hour_one = read(tmp.path(), "2024-01-15_01-00.log");
    assert!(hour_one.contains("at 61") && hour_one.contains("at 119"));
}

#[test]
fn daily_names_follow_the_boundary_date() {
    let tmp = TempDir::new().unwrap();
    let clock = ManualClock::new(t0());
    let logger = RotatingFileLogger::builder(tmp.path())
        .gap(TimeDelta::days(1))
        .clock(clock.clone())
        .build()
        .unwrap();

    clock.advance(TimeDelta::hours(25));
    logger.info("next day").unwrap();

    assert_eq!(
        files_in(tmp.path()),
        vec!["2024-01-15.log", "2024-01-16.log"]
    );
}

#[test]
fn filtered_records_do_not_rotate() {
    let tmp = TempDir::new().unwrap();
    let clock = ManualClock::new(t0());
    let logger = RotatingFileLogger::builder(tmp.path())
        .gap(TimeDelta::hours(1))
        .level(Level::Warn)
        .clock(clock.clone())
        .build()
        .unwrap();

    clock.advance(TimeDelta::hours(30));
    logger.debug("filtered").unwrap();

    assert_eq!(logger.last_rotation(), t0());
    assert_eq!(files_in(tmp.path()), vec!["2024-01-15.log"]);
}

#[test]
fn set_gap_enables_rotation_later() {
    let tmp = TempDir::new().unwrap();
    let clock = ManualClock::new(t0());
    let logger = RotatingFileLogger::builder(tmp.path())
        .file_naming(FileNaming::hourly())
        .clock(clock.clone())
        .build()
        .unwrap();

    clock.advance(TimeDelta::minutes(150));
    logger.info("no gap yet").unwrap();
    assert_eq!(logger.last_rotation(), t0());

    logger.set_gap(TimeDelta::hours(1));
    logger.info("gap set").unwrap();
    assert_eq!(logger.last_rotation(), t0() + TimeDelta::hours(2));
    assert_eq!(logger.active_path(), tmp.path().join("2024-01-15_02.log"));
}

#[test]
fn custom_format_keeps_rotation() {
    let tmp = TempDir::new().unwrap();
    let clock = ManualClock::new(t0());
    let logger = RotatingFileLogger::builder(tmp.path())
        .gap(TimeDelta::hours(1))
        .file_naming(FileNaming::hourly())
        .clock(clock.clone())
        .build()
        .unwrap();
    logger.set_format(|record: &Record| {
        FormatResult::new(Template::parse("{}"), vec![record.level.name().to_string()])
    });

    clock.advance(TimeDelta::minutes(70));
    logger.error("x").unwrap();

    assert_eq!(read(tmp.path(), "2024-01-15_01.log"), "ERROR\n");
}

#[test]
fn custom_naming_function() {
    let tmp = TempDir::new().unwrap();
    let logger = RotatingFileLogger::builder(tmp.path())
        .file_naming(FileNaming::custom(|t| format!("app-{}.txt", t.timestamp())))
        .clock(ManualClock::new(t0()))
        .build()
        .unwrap();

    let expected = format!("app-{}.txt", t0().timestamp());
    assert_eq!(logger.active_path(), tmp.path().join(expected));
}

#[test]
fn keep_previous_writes_to_old_file_and_retries() {
    let tmp = TempDir::new().unwrap();
    let clock = ManualClock::new(t0());
    let provisioner = RecordingProvisioner::default();
    let logger = RotatingFileLogger::builder(tmp.path())
        .gap(TimeDelta::hours(1))
        .file_naming(FileNaming::hourly())
        .provisioner(provisioner.clone())
        .clock(clock.clone())
        .build()
        .unwrap();

    provisioner.set_failing(true);
    clock.advance(TimeDelta::minutes(130));
    logger.info("still here").unwrap();

    assert_eq!(logger.last_rotation(), t0());
    assert!(read(tmp.path(), "2024-01-15_00.log").contains("| still here |"));

    provisioner.set_failing(false);
    logger.info("recovered").unwrap();

    assert_eq!(logger.last_rotation(), t0() + TimeDelta::hours(2));
    assert!(read(tmp.path(), "2024-01-15_02.log").contains("| recovered |"));
}

#[test]
fn propagate_returns_sink_unavailable() {
    let tmp = TempDir::new().unwrap();
    let clock = ManualClock::new(t0());
    let provisioner = RecordingProvisioner::default();
    let logger = RotatingFileLogger::builder(tmp.path())
        .gap(TimeDelta::hours(1))
        .file_naming(FileNaming::hourly())
        .on_sink_failure(SinkFailure::Propagate)
        .provisioner(provisioner.clone())
        .clock(clock.clone())
        .build()
        .unwrap();

    provisioner.set_failing(true);
    clock.advance(TimeDelta::minutes(61));
    let err = logger.info("lost").unwrap_err();

    match err {
        Error::SinkUnavailable { path, source } => {
            assert_eq!(path, tmp.path().join("2024-01-15_01.log"));
            assert_eq!(source.kind(), io::ErrorKind::PermissionDenied);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(logger.last_rotation(), t0());
    assert_eq!(read(tmp.path(), "2024-01-15_00.log"), "");
}

#[test]
fn unopenable_first_file_is_an_error() {
    let tmp = TempDir::new().unwrap();
    let blocker = tmp.path().join("blocker");
    fs::write(&blocker, "not a directory").unwrap();

    let result = RotatingFileLogger::builder(blocker.join("logs"))
        .clock(ManualClock::new(t0()))
        .build();

    assert!(matches!(result, Err(Error::SinkUnavailable { .. })));
}

#[test]
fn appends_to_existing_file() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("2024-01-15.log"), "earlier\n").unwrap();

    let logger = RotatingFileLogger::builder(tmp.path())
        .clock(ManualClock::new(t0()))
        .build()
        .unwrap();
    logger.info("appended").unwrap();
    logger.flush().unwrap();

    let content = read(tmp.path(), "2024-01-15.log");
    assert!(content.starts_with("earlier\n"));
    assert!(content.contains("| appended |"));
}

#[test]
fn gap_parsing() {
    use gaplog::rotation::parse_gap;

    assert_eq!(parse_gap("0").unwrap(), TimeDelta::zero());
    assert_eq!(parse_gap("90").unwrap(), TimeDelta::seconds(90));
    assert_eq!(parse_gap("250ms").unwrap(), TimeDelta::milliseconds(250));
    assert_eq!(parse_gap("30m").unwrap(), TimeDelta::minutes(30));
    assert_eq!(parse_gap(" 1H ").unwrap(), TimeDelta::hours(1));
    assert_eq!(parse_gap("7d").unwrap(), TimeDelta::days(7));
    assert_eq!(parse_gap("2w").unwrap(), TimeDelta::weeks(2));

    for bad in ["", "h", "1y", "-1h", "1.5h"] {
        assert!(
            matches!(parse_gap(bad), Err(Error::InvalidGap(_))),
            "{bad:?} should be rejected"
        );
    }
}

#[test]
fn gap_formatting() {
    use gaplog::rotation::format_gap;

    assert_eq!(format_gap(TimeDelta::zero()), "0");
    assert_eq!(format_gap(TimeDelta::seconds(3600)), "1h");
    assert_eq!(format_gap(TimeDelta::minutes(90)), "90m");
    assert_eq!(format_gap(TimeDelta::days(14)), "2w");
    assert_eq!(format_gap(TimeDelta::milliseconds(1500)), "1500ms");
}

#[test]
fn sink_failure_parsing() {
    assert_eq!(SinkFailure::default(), SinkFailure::KeepPrevious);
    assert_eq!("keep".parse::<SinkFailure>().unwrap(), SinkFailure::KeepPrevious);
    assert_eq!(
        "Keep-Previous".parse::<SinkFailure>().unwrap(),
        SinkFailure::KeepPrevious
    );
    assert_eq!("propagate".parse::<SinkFailure>().unwrap(), SinkFailure::Propagate);
    assert_eq!("error".parse::<SinkFailure>().unwrap(), SinkFailure::Propagate);
    assert!(matches!(
        "retry".parse::<SinkFailure>(),
        Err(Error::InvalidSinkFailure(_))
    ));
    assert_eq!(SinkFailure::Propagate.to_string(), "propagate");
}

#[test]
fn file_name_patterns_are_checked_up_front() {
    for bad in ["%Q.log", "%!", "trailing-%"] {
        assert!(
            matches!(FileNaming::pattern(bad), Err(Error::InvalidFileName(p)) if p == bad),
            "{bad:?} should be rejected"
        );
    }

    let naming = FileNaming::pattern("app_%Y%m%d_%H%M.log").unwrap();
    assert_eq!(naming.as_pattern(), Some("app_%Y%m%d_%H%M.log"));
    assert_eq!(naming.name(&t0()), "app_20240115_0000.log");
    assert_eq!(FileNaming::custom(|_| String::new()).as_pattern(), None);
}
