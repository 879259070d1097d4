//! Logger setup for the binary
//!
//! The TUI owns the terminal, so while it runs log records must never reach
//! stderr. They go to a file when one is given and are dropped otherwise.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use env_logger::{Builder, Env, Target, WriteStyle};

/// Where log records are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSink {
    /// stderr, filtered by `RUST_LOG` (default `warn`)
    Stderr,
    /// Log file truncated at startup, filtered by `RUST_LOG` (default `warn`)
    File(PathBuf),
    /// Logging disabled
    Off,
}

impl LogSink {
    /// Sink for a run: `--dump` and other non-interactive runs log to stderr,
    /// the TUI logs to `log_file` or nowhere.
    pub fn for_run(interactive: bool, log_file: Option<&Path>) -> Self {
        match (interactive, log_file) {
            (_, Some(path)) => LogSink::File(path.to_path_buf()),
            (false, None) => LogSink::Stderr,
            (true, None) => LogSink::Off,
        }
    }
}

/// Build an `env_logger` builder for `sink` without installing it
pub fn builder(sink: &LogSink) -> io::Result<Builder> {
    if *sink == LogSink::Off {
        let mut builder = Builder::new();
        builder.filter_level(log::LevelFilter::Off);
        return Ok(builder);
    }

    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    match sink {
        LogSink::Stderr => {
            builder.target(Target::Stderr);
        }
        LogSink::File(path) => {
            let file = File::create(path)?;
            builder
                .target(Target::Pipe(Box::new(file)))
                .write_style(WriteStyle::Never)
                .format_timestamp_millis();
        }
        LogSink::Off => {}
    }
    Ok(builder)
}

/// Install the global logger for `sink`
pub fn init(sink: &LogSink) -> io::Result<()> {
    builder(sink)?.init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::{Level, Log, Record};

    fn warn_through(logger: &env_logger::Logger, message: &str) {
        logger.log(
            &Record::builder()
                .args(format_args!("{}", message))
                .level(Level::Warn)
                .target("sortty::playback")
                .build(),
        );
        logger.flush();
    }

    #[test]
    fn test_interactive_run_never_logs_to_stderr() {
        assert_eq!(LogSink::for_run(true, None), LogSink::Off);
        assert_eq!(LogSink::for_run(false, None), LogSink::Stderr);

        let path = Path::new("sortty.log");
        assert_eq!(LogSink::for_run(true, Some(path)), LogSink::File(path.to_path_buf()));
        assert_eq!(LogSink::for_run(false, Some(path)), LogSink::File(path.to_path_buf()));
    }

    #[test]
    fn test_off_sink_drops_warnings() {
        let logger = builder(&LogSink::Off).expect("builder failed").build();
        assert!(!logger.enabled(&log::Metadata::builder().level(Level::Error).build()));
    }

    #[test]
    fn test_file_sink_receives_plain_warnings() {
        let dir = tempfile::tempdir().expect("tempdir failed");
        let path = dir.path().join("sortty.log");

        let logger = builder(&LogSink::File(path.clone()))
            .expect("builder failed")
            .build();
        warn_through(&logger, "Counting Sort rejected input");

        let written = std::fs::read_to_string(&path).expect("log file missing");
        assert!(written.contains("Counting Sort rejected input"), "{}", written);
        assert!(!written.contains('\x1b'), "escape codes in log file: {:?}", written);
    }
}
