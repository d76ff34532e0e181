use std::{
    cell::Cell,
    collections::VecDeque,
    sync::{Mutex, OnceLock},
};

use chrono::Local;
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};
use serde::{Deserialize, Serialize};

/// Destination of persisted log entries.
pub trait Repository: Send + Sync + 'static {
    fn read_entries(&self) -> Result<VecDeque<Entry>, Error>;
    fn write_entry(&self, entry: Entry) -> Result<(), Error>;
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("{0}")]
    Unknown(String),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Entry {
    pub time: String,
    #[serde(with = "SerializedLevel")]
    pub level: Level,
    pub message: String,
}

#[derive(Serialize, Deserialize)]
#[serde(remote = "Level")]
enum SerializedLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

static LOGGER: Logger = Logger::new();

/// Echo log records to stderr and persist them in `repository`.
///
/// Records emitted while an entry is being persisted, e.g. by the repository itself, are
/// only echoed.
///
/// # Errors
///
/// Returns an error if a logger has already been installed.
pub fn init(repository: impl Repository, max_level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    LOGGER.attach(Box::new(repository));
    log::set_max_level(max_level);
    Ok(())
}

thread_local! {
    static PERSISTING: Cell<bool> = const { Cell::new(false) };
}

/// Marks the current thread as persisting a log entry until dropped.
struct PersistGuard;

impl PersistGuard {
    fn enter() -> Option<Self> {
        if PERSISTING.with(|persisting| persisting.replace(true)) {
            None
        } else {
            Some(Self)
        }
    }
}

impl Drop for PersistGuard {
    fn drop(&mut self) {
        PERSISTING.with(|persisting| persisting.set(false));
    }
}

struct Logger {
    sink: OnceLock<Mutex<Box<dyn Repository>>>,
}

impl Logger {
    const fn new() -> Self {
        Self {
            sink: OnceLock::new(),
        }
    }

    fn attach(&self, repository: Box<dyn Repository>) {
        if self.sink.set(Mutex::new(repository)).is_err() {
            eprintln!("log repository already attached");
        }
    }

    fn persist(&self, entry: Entry) {
        let Some(sink) = self.sink.get() else {
            return;
        };
        let Some(_guard) = PersistGuard::enter() else {
            return;
        };
        let Ok(repository) = sink.lock() else {
            return;
        };
        if let Err(err) = repository.write_entry(entry) {
            eprintln!("failed to persist log entry: {err}");
        }
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let entry = Entry {
            time: Local::now().format("%b %d %H:%M:%S").to_string(),
            level: record.level(),
            message: record.args().to_string(),
        };

        eprintln!("{} {:<5} {}", entry.time, entry.level, entry.message);

        self.persist(entry);
    }

    fn flush(&self) {}
}
