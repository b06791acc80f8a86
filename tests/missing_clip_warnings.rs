//! Missing Clip Warning Tests
//!
//! Runs in its own test binary because it installs a process-wide logger.

mod common;

use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};

use common::{clip, rig};
use wayfarer::AnimationDriver;

/// Records the text of every warning.
struct CaptureLogger {
    warnings: Mutex<Vec<String>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Warn
    }

    fn log(&self, record: &Record) {
        if record.level() == Level::Warn {
            self.warnings
                .lock()
                .unwrap()
                .push(record.args().to_string());
        }
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger {
    warnings: Mutex::new(Vec::new()),
};

#[test]
fn each_missing_clip_warns_once_and_the_rest_play() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Warn);

    let rig = rig();
    let mut driver = AnimationDriver::new();
    for name in ["idle", "waving", "dancing"] {
        driver.register(name, clip(name, 1.0));
    }

    let mixer = driver
        .play(&rig, &["idle", "sitting", "waving", "flying", "dancing"], true)
        .expect("registered clips start");
    assert_eq!(mixer.actions().count(), 3);

    let warnings = LOGGER.warnings.lock().unwrap().clone();
    assert_eq!(warnings.len(), 2, "{warnings:?}");
    assert!(warnings[0].contains("sitting"));
    assert!(warnings[1].contains("flying"));
    assert_eq!(driver.last_missing(), ["sitting", "flying"]);
}
