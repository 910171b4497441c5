use std::{
    fs::File,
    io::{self, LineWriter, Write},
    path::Path,
    sync::Mutex,
};

use anyhow::Context;
use chrono::Utc;
use log::{LevelFilter, Log, Metadata, Record};

/// Appends log records to a file, one line each.
///
/// The TUI owns the terminal, so there is no console logger; without a log
/// file every record is discarded by the `log` facade.
#[derive(Debug)]
struct FileLogger {
    level: LevelFilter,
    writer: Mutex<LineWriter<File>>,
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        if let Ok(mut writer) = self.writer.lock() {
            _ = write_record(&mut *writer, record);
        }
    }

    fn flush(&self) {
        if let Ok(mut writer) = self.writer.lock() {
            _ = writer.flush();
        }
    }
}

fn write_record<W>(writer: &mut W, record: &Record) -> io::Result<()>
where
    W: Write + ?Sized,
{
    writeln!(
        writer,
        "{} {:<5} {}: {}",
        Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ"),
        record.level(),
        record.target(),
        record.args()
    )
}

/// Installs the file logger if `path` is given.
pub fn init(path: Option<&Path>, level: LevelFilter) -> anyhow::Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::options()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;
    log::set_boxed_logger(Box::new(FileLogger {
        level,
        writer: Mutex::new(LineWriter::new(file)),
    }))
    .context("Failed to install logger")?;
    log::set_max_level(level);
    Ok(())
}
