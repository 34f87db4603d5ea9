//! Logging setup for binaries embedding the traffic core.
//!
//! The library itself only emits `tracing` events (compile info, rejected
//! types, contention traces); this module is the one-call subscriber setup a
//! host simulation or test harness can use:
//! - writes to `logs/groundnet.log` (cleared on session start)
//! - mirrors to stdout
//! - filtered via `RUST_LOG`, defaulting to `info`

use std::fs;
use std::io;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Guard that must be kept alive for the duration of logging.
///
/// Dropping it flushes and closes the log file writer.
pub struct LoggingGuard {
    _file_guard: WorkerGuard,
}

/// Initialize the global subscriber with file and stdout output.
///
/// Creates the log directory if needed and truncates the previous session's
/// file. Can only be called once per process.
///
/// # Errors
///
/// Returns an error if the log directory cannot be created or the log file
/// cannot be truncated.
pub fn init_logging(log_dir: &str, log_file: &str) -> Result<LoggingGuard, io::Error> {
    prepare_log_file(log_dir, log_file)?;

    let file_appender = tracing_appender::rolling::never(log_dir, log_file);
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false)
        .compact();

    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stdout)
        .with_ansi(true)
        .compact();

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stdout_layer)
        .init();

    Ok(LoggingGuard {
        _file_guard: file_guard,
    })
}

/// Create the log directory and truncate the previous session's file.
fn prepare_log_file(log_dir: &str, log_file: &str) -> Result<(), io::Error> {
    fs::create_dir_all(log_dir)?;
    fs::write(Path::new(log_dir).join(log_file), "")?;
    Ok(())
}

/// Default log directory.
pub fn default_log_dir() -> &'static str {
    "logs"
}

/// Default log file name.
pub fn default_log_file() -> &'static str {
    "groundnet.log"
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_paths() {
        assert_eq!(default_log_dir(), "logs");
        assert_eq!(default_log_file(), "groundnet.log");
    }

    #[test]
    fn test_prepare_log_file_creates_dir_and_truncates() {
        // init_logging itself installs a global subscriber and can only run
        // once per process, so only its file-handling path is unit tested.
        let timestamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let dir = format!("test_logs_{}", timestamp);
        let file = PathBuf::from(&dir).join("session.log");

        // First call creates the directory and an empty file.
        prepare_log_file(&dir, "session.log").unwrap();
        assert_eq!(fs::read_to_string(&file).unwrap(), "");

        // A second session truncates the previous one's output.
        fs::write(&file, "previous session").unwrap();
        prepare_log_file(&dir, "session.log").unwrap();
        assert_eq!(fs::read_to_string(&file).unwrap(), "");

        fs::remove_dir_all(&dir).unwrap();
    }
}
