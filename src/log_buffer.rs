//! In-app log sink rendered by the log panel
//!
//! The TUI owns the terminal, so log output cannot go to stderr. Instead
//! `env_logger` is pointed at a pipe that appends finished lines to a global
//! buffer, which the top panel draws every frame.

use chrono::Local;
use env_logger::{Env, Target};
use once_cell::sync::Lazy;
use std::io::Write;
use std::sync::Mutex;

/// Most recent log lines, newest last.
pub static LOG_BUFFER: Lazy<Mutex<Vec<String>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Lines kept before the oldest are dropped.
const MAX_LINES: usize = 200;

struct BufferWriter {
    pending: String,
}

impl Write for BufferWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.pending.push_str(&String::from_utf8_lossy(buf));
        while let Some(pos) = self.pending.find('\n') {
            let line: String = self.pending.drain(..=pos).collect();
            if let Ok(mut lines) = LOG_BUFFER.lock() {
                lines.push(line.trim_end().to_string());
                let overflow = lines.len().saturating_sub(MAX_LINES);
                if overflow > 0 {
                    lines.drain(..overflow);
                }
            }
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Install the buffered logger. `RUST_LOG` filters as usual; defaults to info.
pub fn init() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(BufferWriter {
            pending: String::new(),
        })))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {}",
                Local::now().format("%H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .init();
}
