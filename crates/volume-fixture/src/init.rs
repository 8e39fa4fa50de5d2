//! Logger setup.

/// Installs an `env_logger` logger driven by `RUST_LOG`.
///
/// Safe to call more than once; later calls leave the existing logger in place.
/// Library code only uses the `log` facade, so callers that install their own
/// logger can skip this entirely.
pub fn init_logging() {
    if env_logger::try_init().is_ok() {
        log::info!("volume-fixture logging initialized");
    }
}
