use kinect_base::logging::{format_record, format_timestamp, init_stdout_logger, parse_level, StdoutLogger};
use log::{LevelFilter, Log};

#[test]
fn test_parse_level() {
    assert_eq!(parse_level("debug"), Some(LevelFilter::Debug));
    assert_eq!(parse_level(" WARN "), Some(LevelFilter::Warn));
    assert_eq!(parse_level("off"), Some(LevelFilter::Off));
    assert_eq!(parse_level("verbose"), None);
}

#[test]
fn test_format_timestamp_structure() {
    let ts = format_timestamp();
    // YYYY-MM-DDTHH:MM:SS
    assert_eq!(ts.len(), 19);
    assert_eq!(&ts[4..5], "-");
    assert_eq!(&ts[7..8], "-");
    assert_eq!(&ts[10..11], "T");
    assert_eq!(&ts[13..14], ":");
    assert_eq!(&ts[16..17], ":");
}

#[test]
fn test_format_record_contains_location_and_message() {
    let record = log::RecordBuilder::new()
        .level(log::Level::Warn)
        .target("test")
        .file(Some("posture.rs"))
        .line(Some(42))
        .args(format_args!("bad record"))
        .build();
    let line = format_record(&record);
    assert!(line.contains("[WARN]"));
    assert!(line.ends_with("posture.rs:42 - bad record"));
}

#[test]
fn test_stdout_logger_after_init() {
    init_stdout_logger();
    // Second call is a no-op
    init_stdout_logger();

    let logger = StdoutLogger;
    let record = log::RecordBuilder::new()
        .level(log::Level::Error)
        .target("test")
        .file(Some("test.rs"))
        .line(Some(1))
        .args(format_args!("logged through StdoutLogger"))
        .build();

    // Must not panic regardless of the configured level
    logger.log(&record);
    logger.flush();
}
