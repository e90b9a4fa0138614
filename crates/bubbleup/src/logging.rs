use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::data::storage::DataDirectory;

/// Maximum log file size before rotation (5 MB)
const MAX_LOG_SIZE: u64 = 5 * 1024 * 1024;
/// Size to keep after rotation (1 MB of most recent logs)
const KEEP_SIZE: u64 = 1024 * 1024;

/// Rotate log file if it exceeds `max_size`.
/// Keeps only the most recent `keep_size` bytes, starting at a line boundary.
fn rotate_log_if_needed(log_path: &Path, max_size: u64, keep_size: u64) -> io::Result<bool> {
    if !log_path.exists() {
        return Ok(false);
    }

    let metadata = fs::metadata(log_path)?;
    if metadata.len() <= max_size {
        return Ok(false);
    }

    let mut file = File::open(log_path)?;
    let start_pos = metadata.len().saturating_sub(keep_size);

    file.seek(SeekFrom::Start(start_pos))?;
    let mut buffer = Vec::new();
    file.read_to_end(&mut buffer)?;
    drop(file);

    // Skip to the first newline to avoid partial lines
    let skip = buffer
        .iter()
        .position(|&b| b == b'\n')
        .map(|i| i + 1)
        .unwrap_or(0);
    let trimmed = &buffer[skip..];

    let mut file = File::create(log_path)?;
    file.write_all(b"--- Log rotated (older entries removed) ---\n")?;
    file.write_all(trimmed)?;

    Ok(true)
}

/// A writer factory that produces writers for the shared log file
#[derive(Clone)]
struct LogWriterFactory {
    file: Arc<Mutex<File>>,
}

impl LogWriterFactory {
    fn new(file: File) -> Self {
        Self {
            file: Arc::new(Mutex::new(file)),
        }
    }
}

/// A writer that holds a reference to the shared file
struct LogWriter {
    file: Arc<Mutex<File>>,
}

impl LogWriter {
    fn lock(&self) -> io::Result<MutexGuard<'_, File>> {
        self.file
            .lock()
            .map_err(|_| io::Error::other("log file lock poisoned"))
    }
}

impl Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.lock()?.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.lock()?.flush()
    }
}

impl<'a> MakeWriter<'a> for LogWriterFactory {
    type Writer = LogWriter;

    fn make_writer(&'a self) -> Self::Writer {
        LogWriter {
            file: self.file.clone(),
        }
    }
}

/// Default filter directive when `RUST_LOG` is not set.
fn default_filter(level: &str) -> String {
    format!("bubbleup={level},bubbleup_core=warn")
}

/// Initialize logging to write to a file in the data directory.
///
/// Logs are written to `{data_dir}/bubbleup.log` with size-based rotation, never to
/// the terminal, which belongs to the UI. When the log exceeds 5MB, older entries
/// are removed keeping only the last 1MB. The log level can be controlled via the
/// `level` parameter or the `RUST_LOG` environment variable.
pub fn init_logging(data_dir: &DataDirectory, level: &str) -> color_eyre::Result<()> {
    data_dir.ensure_exists()?;

    let log_path = data_dir.log_path();

    if let Err(e) = rotate_log_if_needed(&log_path, MAX_LOG_SIZE, KEEP_SIZE) {
        eprintln!("Warning: Failed to rotate log file: {}", e);
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    let writer_factory = LogWriterFactory::new(file);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(level)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(writer_factory)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false),
        )
        .try_init()?;

    tracing::info!(
        "bubbleup logging initialized (log_path={})",
        log_path.display()
    );
    Ok(())
}
