// web_app/diagnostics.rs - Diagnostic channel
//
// All diagnostics are `tracing` events. In the browser they are written to
// the developer console through `ConsoleMakeWriter`; WARN and ERROR go to
// `console.error`, everything else to `console.log`.

use crate::web_app::model::ProductId;

/// The add-to-cart control's only effect.
pub fn report_add_to_cart(product_id: ProductId) {
    tracing::info!(product_id, "Product added to cart");
}

#[cfg(feature = "csr")]
pub use console::{init, ConsoleMakeWriter, ConsoleWriter};

#[cfg(feature = "csr")]
mod console {
    use std::io;

    use tracing::{Level, Metadata};
    use tracing_subscriber::fmt::MakeWriter;
    use wasm_bindgen::JsValue;

    /// Buffers one formatted event and hands it to the console on drop.
    pub struct ConsoleWriter {
        level: Level,
        buffer: Vec<u8>,
    }

    impl io::Write for ConsoleWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.buffer.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Drop for ConsoleWriter {
        fn drop(&mut self) {
            if self.buffer.is_empty() {
                return;
            }
            let line = String::from_utf8_lossy(&self.buffer);
            let message = JsValue::from_str(line.trim_end());
            if self.level <= Level::WARN {
                web_sys::console::error_1(&message);
            } else {
                web_sys::console::log_1(&message);
            }
        }
    }

    #[derive(Clone, Copy, Debug, Default)]
    pub struct ConsoleMakeWriter;

    impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
        type Writer = ConsoleWriter;

        fn make_writer(&'a self) -> Self::Writer {
            ConsoleWriter {
                level: Level::INFO,
                buffer: Vec::new(),
            }
        }

        fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
            ConsoleWriter {
                level: *meta.level(),
                buffer: Vec::new(),
            }
        }
    }

    /// Install the console subscriber. Safe to call more than once.
    pub fn init() {
        let result = tracing_subscriber::fmt()
            .with_writer(ConsoleMakeWriter)
            .with_ansi(false)
            .without_time()
            .with_target(false)
            .with_max_level(Level::DEBUG)
            .try_init();

        if result.is_err() {
            tracing::debug!("tracing subscriber already installed");
        }
    }
}
