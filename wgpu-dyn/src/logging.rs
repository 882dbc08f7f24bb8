//! Routing of the native library's own log output into the [`log`] facade.
//!
//! Messages arrive under the `wgpu_native` target, so they can be filtered
//! separately from the binding's own records.

use log::LevelFilter;

use crate::{callback, ffi::procs, native, Result};

/// Target native messages are logged under.
pub const TARGET: &str = "wgpu_native";

fn native_level(filter: LevelFilter) -> u32 {
    match filter {
        LevelFilter::Off => native::log_level::OFF,
        LevelFilter::Error => native::log_level::ERROR,
        LevelFilter::Warn => native::log_level::WARN,
        LevelFilter::Info => native::log_level::INFO,
        LevelFilter::Debug => native::log_level::DEBUG,
        LevelFilter::Trace => native::log_level::TRACE,
    }
}

/// Installs the log callback and sets the native level from [`log::max_level`].
///
/// Call this after the logger has been set up. Calling it again is harmless.
pub fn init() -> Result<()> {
    let log = callback::trampolines().log;
    // SAFETY: the trampoline has the `WGPULogCallback` signature and lives forever.
    unsafe { procs::SET_LOG_CALLBACK.invoke(&[log, 0]) }?;
    set_level(log::max_level())
}

/// Changes which native messages are produced at all.
pub fn set_level(filter: LevelFilter) -> Result<()> {
    log::debug!("Native log level {}", filter);
    // SAFETY: plain enum argument.
    unsafe { procs::SET_LOG_LEVEL.invoke(&[native_level(filter) as usize]) }.map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels() {
        assert_eq!(native_level(LevelFilter::Off), 0);
        assert_eq!(native_level(LevelFilter::Warn), native::log_level::WARN);
        assert_eq!(native_level(LevelFilter::Trace), 5);
    }
}
