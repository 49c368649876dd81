//! Subscriber output shape. Kept in its own test binary because the global
//! subscriber can only be installed once per process.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use sf_cli::logging::{LogConfig, LogFormat, init_logging_with_writer};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Captured {
    type Writer = Captured;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[test]
fn compact_output_with_timestamps_and_targets() {
    let captured = Captured::default();
    let config = LogConfig {
        level_filter: LevelFilter::DEBUG,
        use_env_filter: false,
        with_timestamps: true,
        with_target: true,
        with_ansi: false,
        format: LogFormat::Compact,
        log_file: None,
    };
    init_logging_with_writer(&config, captured.clone());

    tracing::debug!(cards = 2, "parsed card document");
    tracing::trace!("below the level filter");

    let output = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
    let mut lines = output.lines();
    let line = lines.next().unwrap();
    assert!(line.starts_with(|c: char| c.is_ascii_digit()), "{line}");
    assert!(line.contains("DEBUG"));
    assert!(line.contains("logging:"));
    assert!(line.contains("parsed card document"));
    assert!(line.contains("cards=2"));
    assert_eq!(lines.next(), None);
}
