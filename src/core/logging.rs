//! `log` backend for the engine
//!
//! In the browser records go to `console.*`. Native hosts (tests, tools)
//! install their own backend such as `env_logger`; here `init` only sets
//! the level.

use log::LevelFilter;

#[cfg(target_arch = "wasm32")]
mod console {
    use log::{Level, Log, Metadata, Record};

    pub struct ConsoleLogger;

    pub static LOGGER: ConsoleLogger = ConsoleLogger;

    impl Log for ConsoleLogger {
        fn enabled(&self, metadata: &Metadata) -> bool {
            metadata.level() <= log::max_level()
        }

        fn log(&self, record: &Record) {
            if !self.enabled(record.metadata()) {
                return;
            }
            let value =
                wasm_bindgen::JsValue::from_str(&format!("[{}] {}", record.target(), record.args()));
            match record.level() {
                Level::Error => web_sys::console::error_1(&value),
                Level::Warn => web_sys::console::warn_1(&value),
                Level::Info => web_sys::console::info_1(&value),
                Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
            }
        }

        fn flush(&self) {}
    }
}

#[cfg(target_arch = "wasm32")]
pub use console::ConsoleLogger;

/// Install the console logger. A second call is an error from `log`, which
/// callers may ignore.
#[cfg(target_arch = "wasm32")]
pub fn init(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    log::set_logger(&console::LOGGER)?;
    log::set_max_level(level);
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn init(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    log::set_max_level(level);
    Ok(())
}
