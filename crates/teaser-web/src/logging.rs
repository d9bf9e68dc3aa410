//! Browser Logging
//!
//! Routes `tracing` events from `teaser-core` to the devtools console.

use std::io;

use tracing_subscriber::filter::LevelFilter;

/// Debug builds also show phrase advances and form transitions
const MAX_LEVEL: LevelFilter = if cfg!(debug_assertions) {
    LevelFilter::DEBUG
} else {
    LevelFilter::INFO
};

/// Install the console subscriber. A second call is a no-op.
pub fn init() {
    let installed = tracing_subscriber::fmt()
        .with_writer(ConsoleWriter::default)
        .with_max_level(MAX_LEVEL)
        .without_time()
        .with_target(false)
        .try_init();

    if installed.is_err() {
        leptos::logging::warn!("tracing subscriber already installed");
    }
}

/// Buffers one formatted event and prints it to the console when dropped
#[derive(Default)]
struct ConsoleWriter {
    buf: Vec<u8>,
}

impl ConsoleWriter {
    fn line(&self) -> Option<String> {
        let line = String::from_utf8_lossy(&self.buf);
        let line = line.trim_end();
        (!line.is_empty()).then(|| line.to_owned())
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if let Some(line) = self.line() {
            leptos::logging::log!("{line}");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_writer_trims_trailing_newline() {
        let mut writer = ConsoleWriter::default();
        writer.write_all(b" INFO Teaser page mounted taglines=4\n").unwrap();
        assert_eq!(
            writer.line().as_deref(),
            Some(" INFO Teaser page mounted taglines=4")
        );
    }

    #[test]
    fn test_writer_skips_blank_output() {
        let mut writer = ConsoleWriter::default();
        writer.write_all(b"\n").unwrap();
        assert_eq!(writer.line(), None);
    }
}
