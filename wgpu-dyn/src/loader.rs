//! Process-wide handle to the `wgpu_native` shared library.
//!
//! The library is opened at most once. Whatever the first attempt produces, a
//! loaded image or a failure message, is latched for the lifetime of the process;
//! every later procedure call observes the same outcome.

use std::{ffi::OsStr, fmt, path::PathBuf, sync::OnceLock};

use crate::{ffi::procs, Error, Result};

/// Base name of the native library, decorated per platform by
/// [`libloading::library_filename`].
pub const LIBRARY_NAME: &str = "wgpu_native";

static LIBRARY: OnceLock<Result<libloading::Library, String>> = OnceLock::new();

fn open(path: &OsStr) -> Result<libloading::Library, String> {
    // SAFETY: wgpu-native has no library constructors with preconditions.
    match unsafe { libloading::Library::new(path) } {
        Ok(lib) => {
            log::info!("Loaded {}", path.to_string_lossy());
            Ok(lib)
        }
        Err(e) => {
            log::error!("Unable to load {}: {}", path.to_string_lossy(), e);
            Err(e.to_string())
        }
    }
}

fn latch(path: &OsStr) -> &'static Result<libloading::Library, String> {
    LIBRARY.get_or_init(|| open(path))
}

fn outcome(latched: &'static Result<libloading::Library, String>) -> Result<&'static libloading::Library> {
    latched
        .as_ref()
        .map_err(|reason| Error::LibraryNotLoaded(reason.clone()))
}

/// Loads the library under its conventional file name, searching the platform's
/// default paths.
///
/// Calling this is optional: the first native call does it implicitly.
pub fn init() -> Result<()> {
    outcome(latch(&libloading::library_filename(LIBRARY_NAME))).map(|_| ())
}

/// Loads the library from an explicit path.
///
/// Only effective before anything else has touched the loader; otherwise the
/// latched outcome of the earlier attempt is returned.
pub fn init_from_path(path: impl AsRef<OsStr>) -> Result<()> {
    outcome(latch(path.as_ref())).map(|_| ())
}

/// Where to find the native library.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoaderConfig {
    /// Explicit file to open. `None` searches the default paths for the
    /// conventional file name.
    pub path: Option<PathBuf>,
}

/// Loads the library as `config` describes. See [`init_from_path`] for when this
/// takes effect.
pub fn init_with(config: &LoaderConfig) -> Result<()> {
    match config.path {
        Some(ref path) => init_from_path(path),
        None => init(),
    }
}

/// Returns `true` once the library has been opened successfully.
pub fn is_loaded() -> bool {
    matches!(LIBRARY.get(), Some(Ok(_)))
}

/// Returns the reason the library failed to load, if it did.
pub fn load_error() -> Option<Error> {
    match LIBRARY.get() {
        Some(Err(reason)) => Some(Error::LibraryNotLoaded(reason.clone())),
        _ => None,
    }
}

pub(crate) fn library() -> Result<&'static libloading::Library> {
    match LIBRARY.get() {
        Some(latched) => outcome(latched),
        None => outcome(latch(&libloading::library_filename(LIBRARY_NAME))),
    }
}

/// Looks up `symbol` (nul-terminated) and returns its address.
pub(crate) fn resolve(name: &'static str, symbol: &'static [u8]) -> Result<usize> {
    let lib = library()?;
    // SAFETY: the symbol is only ever reinterpreted by the call bridge, with the
    // signature recorded next to its name.
    unsafe {
        lib.get::<unsafe extern "C" fn()>(symbol)
            .map(|sym| *sym as usize)
            .map_err(|e| {
                log::warn!("Unable to resolve {}: {}", name, e);
                Error::MissingSymbol(name)
            })
    }
}

/// Version of the loaded native library, as packed by `wgpuGetVersion`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub struct NativeVersion {
    pub major: u8,
    pub minor: u8,
    pub patch: u8,
    pub build: u8,
}

impl NativeVersion {
    /// Unpacks `0xMMmmppbb`.
    pub const fn from_packed(packed: u32) -> Self {
        Self {
            major: (packed >> 24) as u8,
            minor: (packed >> 16) as u8,
            patch: (packed >> 8) as u8,
            build: packed as u8,
        }
    }
}

impl fmt::Display for NativeVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}.{}", self.major, self.minor, self.patch, self.build)
    }
}

/// Asks the loaded library for its version.
pub fn version() -> Result<NativeVersion> {
    // SAFETY: takes no arguments.
    let packed = unsafe { procs::GET_VERSION.invoke(&[]) }?;
    Ok(NativeVersion::from_packed(packed as u32))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_unpacks() {
        let v = NativeVersion::from_packed(0x1800_0502);
        assert_eq!(
            v,
            NativeVersion {
                major: 24,
                minor: 0,
                patch: 5,
                build: 2
            }
        );
        assert_eq!(v.to_string(), "24.0.5.2");
        assert!(NativeVersion::from_packed(0x1900_0000) > v);
    }

    #[test]
    fn failure_is_latched() {
        // Whatever the first attempt did, asking again reports the same thing.
        let first = init().is_ok();
        assert_eq!(init_from_path("/nonexistent/libwgpu_native.so").is_ok(), first);
        assert_eq!(is_loaded(), first);
        assert_eq!(load_error().is_some(), !first);
    }
}
