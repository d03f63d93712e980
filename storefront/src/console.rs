//! Browser console sink for `tracing` output.

use std::io;

use leptos::logging::{console_error, console_log, console_warn};
use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;

/// Filter used in the browser; there is no `RUST_LOG` to read.
pub const CONSOLE_FILTER: &str = "info,harvest_commerce=debug,harvest_observability=debug";

/// Hands each formatted event to the console method matching its level.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

/// One event's text, flushed to the console when dropped.
pub struct ConsoleLine {
    level: Level,
    buffer: Vec<u8>,
}

impl ConsoleLine {
    fn new(level: Level) -> Self {
        Self {
            level,
            buffer: Vec::new(),
        }
    }
}

impl io::Write for ConsoleLine {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleLine {
    fn drop(&mut self) {
        let text = String::from_utf8_lossy(&self.buffer);
        let line = text.trim_end();
        if line.is_empty() {
            return;
        }

        match self.level {
            Level::ERROR => console_error(line),
            Level::WARN => console_warn(line),
            _ => console_log(line),
        }
    }
}

impl<'a> MakeWriter<'a> for ConsoleSink {
    type Writer = ConsoleLine;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleLine::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleLine::new(*meta.level())
    }
}

/// Route `tracing` events to the browser console. A second call only warns.
pub fn init_console_logging() {
    if let Err(e) = harvest_observability::init_tracing_with_writer(Some(CONSOLE_FILTER), ConsoleSink)
    {
        console_warn(&format!("console logging unavailable: {e}"));
    }
}
