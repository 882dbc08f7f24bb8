use std::fmt;

use thiserror::Error;

/// Result type used throughout this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Classification of an error captured by a device error scope or reported by an
/// operation.
///
/// The variants double as sentinels: [`Error::is`] answers "is this a validation
/// error?" regardless of which operation produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The operation was rejected by validation.
    Validation,
    /// An allocation failed.
    OutOfMemory,
    /// The native library hit an internal error.
    Internal,
    /// The device was lost.
    DeviceLost,
    /// Anything the native library could not classify.
    Unknown,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Validation => "validation",
            Self::OutOfMemory => "out of memory",
            Self::Internal => "internal",
            Self::DeviceLost => "device lost",
            Self::Unknown => "unknown",
        })
    }
}

/// A structured error carrying the failing operation, its kind and the native message.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{operation}: {kind} error: {message}")]
pub struct OperationError {
    /// Name of the operation, e.g. `"Device::pop_error_scope"`.
    pub operation: &'static str,
    /// Classification of the error.
    pub kind: ErrorKind,
    /// Message reported by the native library.
    pub message: String,
}

/// Error returned by [`Surface::get_current_texture`](crate::Surface::get_current_texture).
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq, Hash)]
pub enum SurfaceError {
    /// The underlying surface is lost and must be recreated.
    #[error("The underlying surface has been lost")]
    Lost,
    /// The surface must be reconfigured before acquiring the next texture.
    #[error("The surface is outdated and needs to be reconfigured")]
    NeedsReconfigure,
    /// A timeout was encountered while trying to acquire the next frame.
    #[error("A timeout was encountered while trying to acquire the next frame")]
    Timeout,
    /// There is no more memory left to allocate a new frame.
    #[error("There is no more memory left to allocate a new frame")]
    OutOfMemory,
    /// The device owning the surface configuration was lost.
    #[error("The device was lost")]
    DeviceLost,
    /// Any other native status.
    #[error("Acquiring the surface texture failed with status {0}")]
    Other(u32),
}

/// Failure statuses of a pop error scope request.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq, Hash)]
pub enum PopErrorScopeError {
    /// The device's error scope stack was empty.
    #[error("There are no error scopes to pop")]
    EmptyStack,
    /// The instance was dropped before the request completed.
    #[error("The instance was dropped before the request completed")]
    InstanceDropped,
    /// An unrecognized status code.
    #[error("Unknown status {0}")]
    Other(u32),
}

/// Errors surfaced by this crate.
#[derive(Clone, Debug, Error)]
pub enum Error {
    /// The native library could not be loaded.
    #[error("Native library not loaded: {0}")]
    LibraryNotLoaded(String),
    /// A native entry point is not exported by the loaded library.
    #[error("Native library does not export `{0}`")]
    MissingSymbol(&'static str),
    /// A call did not supply the number of arguments its interface declares.
    #[error("`{name}` takes {expected} arguments, {got} were supplied")]
    ArityMismatch {
        name: &'static str,
        expected: usize,
        got: usize,
    },
    /// A by-value aggregate argument did not have the declared size.
    #[error("`{name}` takes a {expected} byte aggregate, got {got} bytes")]
    AggregateSizeMismatch {
        name: &'static str,
        expected: usize,
        got: usize,
    },
    /// The receiver has already been released, or was never created.
    #[error("{kind} handle has been released")]
    Released { kind: &'static str },
    /// The native factory returned a null handle. Check the device error scope for detail.
    #[error("Creating a {kind} failed")]
    CreationFailed { kind: &'static str },
    /// Requesting an adapter did not succeed.
    #[error("Adapter request failed with status {status}: {message}")]
    RequestAdapter { status: u32, message: String },
    /// Requesting a device did not succeed.
    #[error("Device request failed with status {status}: {message}")]
    RequestDevice { status: u32, message: String },
    /// Mapping a buffer did not succeed.
    #[error("Buffer mapping failed with status {status}: {message}")]
    MapAsync { status: u32, message: String },
    /// Popping an error scope did not succeed.
    #[error(transparent)]
    PopErrorScope(#[from] PopErrorScopeError),
    /// Acquiring a surface texture did not succeed.
    #[error(transparent)]
    Surface(#[from] SurfaceError),
    /// An operation reported a classified error.
    #[error(transparent)]
    Operation(#[from] OperationError),
    /// A native entry point returned a failure status.
    #[error("{operation} returned an error status")]
    Status { operation: &'static str },
    /// An argument could not be encoded for the native library.
    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),
}

impl Error {
    /// Returns `true` if this error belongs to the given class, irrespective of the
    /// operation that produced it.
    pub fn is(&self, kind: ErrorKind) -> bool {
        match *self {
            Self::Operation(ref e) => e.kind == kind,
            Self::Surface(SurfaceError::DeviceLost) => kind == ErrorKind::DeviceLost,
            Self::Surface(SurfaceError::OutOfMemory) => kind == ErrorKind::OutOfMemory,
            _ => false,
        }
    }

    /// Returns the [`ErrorKind`] if this is a classified operation error.
    pub fn kind(&self) -> Option<ErrorKind> {
        match *self {
            Self::Operation(ref e) => Some(e.kind),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_matching() {
        let err = Error::Operation(OperationError {
            operation: "Device::pop_error_scope",
            kind: ErrorKind::Validation,
            message: "bad".to_string(),
        });
        assert!(err.is(ErrorKind::Validation));
        assert!(!err.is(ErrorKind::OutOfMemory));

        let lost = Error::Surface(SurfaceError::DeviceLost);
        assert!(lost.is(ErrorKind::DeviceLost));
        assert!(!Error::Released { kind: "Buffer" }.is(ErrorKind::Validation));
    }

    #[test]
    fn display() {
        let err = Error::Operation(OperationError {
            operation: "Queue::submit",
            kind: ErrorKind::OutOfMemory,
            message: "no room".to_string(),
        });
        assert_eq!(err.to_string(), "Queue::submit: out of memory error: no room");
        assert_eq!(
            Error::from(PopErrorScopeError::EmptyStack).to_string(),
            "There are no error scopes to pop"
        );
    }
}
