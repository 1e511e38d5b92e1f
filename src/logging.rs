// Logger setup plus a tracing macro that compiles out of release builds.

use env_logger::Builder;
use std::io::Write;

/// Initialize the process-wide logger. Levels come from `RUST_LOG`.
pub fn init() {
    let mut builder = Builder::from_default_env();
    builder.format(|buf, record| {
        writeln!(
            buf,
            "[{} {:<5} {}] {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            record.level(),
            record.target(),
            record.args()
        )
    });
    builder.init();
}

/// Hot-path tracing, active only in debug builds.
#[cfg(debug_assertions)]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        log::debug!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{}};
}
