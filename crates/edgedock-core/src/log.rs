//! Append-only log file for the panel.
//!
//! Lines go to `~/.config/edgedock/logs/edgedock.log`. Before a line
//! would push the file past `max_file_mb`, the file is moved aside to
//! `edgedock.log.1` and a fresh one is started.
//!
//! Until [`init`] succeeds every `log_*!` call is a no-op, so library
//! code and tests can log freely.

use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};

use serde::{Deserialize, Serialize};

static SINK: OnceLock<Mutex<LogSink>> = OnceLock::new();

const LOG_FILE_NAME: &str = "edgedock.log";

/// Severity of a log line. Ordered from most to least verbose.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        })
    }
}

/// The `[logging]` config section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Off unless asked for.
    pub enabled: bool,
    /// Lines below this level are dropped.
    pub level: Level,
    /// Size in megabytes at which the file is rotated. 0 never rotates.
    pub max_file_mb: u64,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: Level::Info,
            max_file_mb: 10,
        }
    }
}

/// A log file that keeps one backup when it grows too large.
struct RotatingFile {
    path: PathBuf,
    file: File,
    len: u64,
    limit: u64,
}

impl RotatingFile {
    fn open(path: PathBuf, limit: u64) -> io::Result<Self> {
        let file = append_to(&path)?;
        let len = file.metadata()?.len();
        Ok(Self {
            path,
            file,
            len,
            limit,
        })
    }

    fn backup_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".1");
        PathBuf::from(name)
    }

    fn append(&mut self, line: &str) -> io::Result<()> {
        let size = line.len() as u64;
        if self.limit > 0 && self.len > 0 && self.len + size > self.limit {
            self.rotate()?;
        }
        self.file.write_all(line.as_bytes())?;
        self.len += size;
        Ok(())
    }

    fn rotate(&mut self) -> io::Result<()> {
        let backup = self.backup_path();
        let _ = fs::remove_file(&backup);
        fs::rename(&self.path, &backup)?;
        self.file = append_to(&self.path)?;
        self.len = 0;
        Ok(())
    }
}

fn append_to(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

struct LogSink {
    min_level: Level,
    out: RotatingFile,
}

/// Opens the log file and starts accepting lines. Call once at startup.
///
/// A disabled config is not an error; the macros simply stay silent.
pub fn init(config: &LogConfig) -> io::Result<()> {
    if !config.enabled {
        return Ok(());
    }
    let dir = crate::config::config_dir()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no home directory"))?
        .join("logs");
    fs::create_dir_all(&dir)?;

    let out = RotatingFile::open(dir.join(LOG_FILE_NAME), config.max_file_mb * 1024 * 1024)?;
    let sink = LogSink {
        min_level: config.level,
        out,
    };
    if SINK.set(Mutex::new(sink)).is_err() {
        return Err(io::Error::new(io::ErrorKind::AlreadyExists, "logger already initialised"));
    }
    Ok(())
}

/// Backs the `log_*!` macros.
pub fn write(level: Level, args: fmt::Arguments<'_>) {
    let Some(sink) = SINK.get() else {
        return;
    };
    let Ok(mut sink) = sink.lock() else {
        return;
    };
    if level < sink.min_level {
        return;
    }
    let _ = sink.out.append(&format_line(&timestamp(), level, args));
}

fn format_line(time: &str, level: Level, args: fmt::Arguments<'_>) -> String {
    format!("{time} {level:<5} {args}\n")
}

/// UTC wall-clock time of day, `HH:MM:SS.mmm`.
fn timestamp() -> String {
    let since_epoch = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default();
    let secs = since_epoch.as_secs();
    format!(
        "{:02}:{:02}:{:02}.{:03}",
        secs / 3600 % 24,
        secs / 60 % 60,
        secs % 60,
        since_epoch.subsec_millis()
    )
}

/// Logs at DEBUG level.
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Debug, format_args!($($arg)*)) };
}

/// Logs at INFO level.
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Info, format_args!($($arg)*)) };
}

/// Logs at WARN level.
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Warn, format_args!($($arg)*)) };
}

/// Logs at ERROR level.
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Error, format_args!($($arg)*)) };
}
