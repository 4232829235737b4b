use std::ffi::NulError;
use std::fmt;
use std::fmt::Display;

use crate::Status;

/// Result alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ErrorKind {
    Native(Status),
    InvalidInput,
    RuntimeUnavailable,
}

/// Error type for this crate.
///
/// Failures reported by MinHook carry their [`Status`]; see [`Error::status`].
/// The kind is otherwise private so new non-native causes can be added later.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    message: String,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    pub(crate) fn from_status(status: Status) -> Self {
        Self::new(ErrorKind::Native(status), status.name())
    }

    #[cfg_attr(not(minhook_stub), allow(dead_code))]
    pub(crate) fn runtime_unavailable(msg: impl Display) -> Self {
        Self::new(ErrorKind::RuntimeUnavailable, msg)
    }

    pub(crate) fn interior_nul(label: &'static str, position: usize) -> Self {
        Self::new(
            ErrorKind::InvalidInput,
            format_args!("{label} contains NUL at position {position}"),
        )
    }

    pub(crate) fn from_nul(label: &'static str, err: NulError) -> Self {
        Self::interior_nul(label, err.nul_position()).with_source(err)
    }

    fn with_source(mut self, err: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(err));
        self
    }

    fn new(kind: ErrorKind, msg: impl Display) -> Self {
        Self {
            kind,
            message: msg.to_string(),
            source: None,
        }
    }

    /// The MinHook status behind this error, if MinHook reported it.
    pub fn status(&self) -> Option<Status> {
        match self.kind {
            ErrorKind::Native(status) => Some(status),
            _ => None,
        }
    }

    /// Returns true if an argument could not be passed to MinHook.
    pub fn is_invalid_input(&self) -> bool {
        self.kind == ErrorKind::InvalidInput
    }

    /// Returns true if this build was not linked against MinHook.
    pub fn is_runtime_unavailable(&self) -> bool {
        self.kind == ErrorKind::RuntimeUnavailable
    }
}

impl Clone for Error {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            source: None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}
