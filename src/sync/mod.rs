//! Output shared between threads.
//!
//! Instead of a process-wide lock around printing, a [`SyncWriter`] is created once and handed to
//! whoever needs to print, either by reference (with [`std::thread::scope`]) or behind an
//! [`Arc`](std::sync::Arc).

mod writer;


pub use writer::SyncWriter;

/// Writes a formatted line to a [`SyncWriter`] without interleaving with other threads, returning
/// an [`io::Result`](std::io::Result).
#[macro_export]
macro_rules! sync_println {
    ($writer:expr) => {
        $writer.write_line(format_args!(""))
    };
    ($writer:expr, $($arg:tt)*) => {
        $writer.write_line(format_args!($($arg)*))
    };
}
