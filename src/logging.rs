//! Logging.
//!
//! The library only emits `tracing` events. In the browser,
//! [`init_logging`] installs a `tracing-subscriber` formatter that writes
//! each event to the matching `console` method.

use std::str::FromStr;

use tracing::Level;

use crate::error::{Result, StorymapError};

/// Parse a level name (`error`, `warn`, `info`, `debug`, `trace`).
pub fn parse_level(name: &str) -> Result<Level> {
    Level::from_str(name.trim())
        .map_err(|_| StorymapError::Config(format!("unknown log level {name:?}")))
}

#[cfg(target_arch = "wasm32")]
mod console {
    use std::io;

    use tracing::{Level, Metadata};
    use tracing_subscriber::fmt::MakeWriter;
    use wasm_bindgen::JsValue;

    /// Buffers one formatted event and hands it to the console on drop.
    pub(super) struct ConsoleWriter {
        level: Level,
        buf: Vec<u8>,
    }

    impl io::Write for ConsoleWriter {
        fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
            self.buf.extend_from_slice(bytes);
            Ok(bytes.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Drop for ConsoleWriter {
        fn drop(&mut self) {
            let text = String::from_utf8_lossy(&self.buf);
            let line = JsValue::from_str(text.trim_end());
            match self.level {
                Level::ERROR => web_sys::console::error_1(&line),
                Level::WARN => web_sys::console::warn_1(&line),
                Level::INFO => web_sys::console::info_1(&line),
                _ => web_sys::console::debug_1(&line),
            }
        }
    }

    #[derive(Clone, Copy, Default)]
    pub(super) struct MakeConsoleWriter;

    impl<'a> MakeWriter<'a> for MakeConsoleWriter {
        type Writer = ConsoleWriter;

        fn make_writer(&'a self) -> Self::Writer {
            ConsoleWriter {
                level: Level::INFO,
                buf: Vec::new(),
            }
        }

        fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
            ConsoleWriter {
                level: *meta.level(),
                buf: Vec::new(),
            }
        }
    }
}

/// Route `tracing` events at or above `level` to the browser console.
///
/// Calling it again after a subscriber is installed does nothing.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn init_logging(level: &str) -> std::result::Result<(), wasm_bindgen::JsValue> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }
    let level = parse_level(level)?;
    tracing_subscriber::fmt()
        .with_writer(console::MakeConsoleWriter)
        .with_max_level(level)
        .without_time()
        .with_target(false)
        .try_init()
        .map_err(|e| wasm_bindgen::JsValue::from_str(&format!("logging: {e}")))
}
