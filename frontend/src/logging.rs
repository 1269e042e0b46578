//! Browser console sink for tracing
use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;
use wasm_bindgen::JsValue;
use web_sys::console;

/// Makes one [`ConsoleLine`] per event
struct Console;

/// Buffers a formatted event and sends it to console on drop
struct ConsoleLine {
    level: Level,
    buf: Vec<u8>,
}

impl io::Write for ConsoleLine {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleLine {
    fn drop(&mut self) {
        let text = String::from_utf8_lossy(&self.buf);
        let line = JsValue::from_str(text.trim_end());
        if self.level == Level::ERROR {
            console::error_1(&line)
        } else if self.level == Level::WARN {
            console::warn_1(&line)
        } else if self.level == Level::INFO {
            console::info_1(&line)
        } else {
            console::debug_1(&line)
        }
    }
}

impl<'a> MakeWriter<'a> for Console {
    type Writer = ConsoleLine;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleLine { level: Level::INFO, buf: vec![] }
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleLine { level: *meta.level(), buf: vec![] }
    }
}

/// Install global subscriber.
/// There is no clock on wasm, so events go without timestamps
pub fn init(level: Level) {
    tracing_subscriber::fmt()
        .with_writer(Console)
        .without_time()
        .with_file(true)
        .with_line_number(true)
        .with_max_level(level)
        .init();
}
