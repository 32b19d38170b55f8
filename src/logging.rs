use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use env_logger::Target;
use log::LevelFilter;

// ---------------------------------------------------------------------------
// Process-wide file logging bootstrap
// ---------------------------------------------------------------------------

/// Directory (under the current working directory) receiving log files.
const LOGS_DIR: &str = "logs";

/// Build the timestamp-keyed log file name, e.g. `08_25_2026_14_03_59.log`.
fn log_file_name(now: DateTime<Local>) -> String {
    format!("{}.log", now.format("%m_%d_%Y_%H_%M_%S"))
}

/// Create `dir` if absent.  A no-op when it already exists.
fn ensure_logs_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("creating log directory {}", dir.display()))
}

/// Configure the process-wide logger, once, at startup.
///
/// Creates `<cwd>/logs/` if absent, opens a timestamp-named file inside it,
/// and installs an `env_logger` backend appending one line per record:
///
/// ```text
/// [ 2026-08-25 14:03:59,120 ] [ INFO ] [ stud_eda::eda ] [ line:42 ] - message
/// ```
///
/// Minimum severity is INFO.  The path is fixed for the process lifetime;
/// the chosen path is returned so callers can report it.
pub fn init() -> Result<PathBuf> {
    let logs_path = std::env::current_dir()
        .context("resolving current directory")?
        .join(LOGS_DIR);
    ensure_logs_dir(&logs_path)?;

    let log_file_path = logs_path.join(log_file_name(Local::now()));
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file_path)
        .with_context(|| format!("opening log file {}", log_file_path.display()))?;

    env_logger::Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "[ {} ] [ {} ] [ {} ] [ line:{} ] - {}",
                Local::now().format("%Y-%m-%d %H:%M:%S,%3f"),
                record.level(),
                record.target(),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .filter_level(LevelFilter::Info)
        .target(Target::Pipe(Box::new(file)))
        .try_init()
        .context("installing the global logger")?;

    Ok(log_file_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn log_file_name_uses_timestamp_key() {
        let ts = Local.with_ymd_and_hms(2026, 8, 25, 14, 3, 59).unwrap();
        assert_eq!(log_file_name(ts), "08_25_2026_14_03_59.log");
    }

    #[test]
    fn ensure_logs_dir_creates_and_tolerates_existing() {
        let dir = tempfile::tempdir().unwrap();
        let logs = dir.path().join("logs");

        ensure_logs_dir(&logs).unwrap();
        assert!(logs.is_dir());

        // Second call must be a no-op, not an error.
        ensure_logs_dir(&logs).unwrap();
        assert!(logs.is_dir());
    }
}
