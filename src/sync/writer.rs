use std::fmt;
use std::io::{self, Stdout, Write};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// A writer guarded by a mutex, so that each line (or each locked section) reaches the underlying
/// writer in one piece.
///
/// A panic on another thread while holding the lock doesn't make the writer unusable, the poison
/// is ignored and writing continues.
#[derive(Debug, Default)]
pub struct SyncWriter<W: Write> {
    inner: Mutex<W>,
}

impl<W: Write> SyncWriter<W> {
    pub const fn new(inner: W) -> SyncWriter<W> {
        SyncWriter {
            inner: Mutex::new(inner),
        }
    }

    /// Locks the writer for a section of output that shouldn't be split up, such as a multi-line
    /// report. Other writes block until the guard is dropped.
    pub fn lock(&self) -> MutexGuard<'_, W> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Writes the formatted arguments followed by a newline and flushes, all under one lock.
    pub fn write_line(&self, args: fmt::Arguments<'_>) -> io::Result<()> {
        let mut writer = self.lock();
        writer.write_fmt(args)?;
        writer.write_all(b"\n")?;
        writer.flush()
    }

    pub fn write_all(&self, bytes: &[u8]) -> io::Result<()> {
        self.lock().write_all(bytes)
    }

    pub fn into_inner(self) -> W {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SyncWriter<Stdout> {
    pub fn stdout() -> SyncWriter<Stdout> {
        SyncWriter::new(io::stdout())
    }
}

impl<W: Write> Write for &SyncWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.lock().write(buf)
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        self.lock().write_all(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.lock().flush()
    }
}
