use std::fmt;
use std::os::raw::c_int;

use crate::{Error, Result};

/// MinHook status codes (`MH_STATUS`).
///
/// The discriminants match `MinHook.h`; keep this list in lock-step with the
/// native header.
#[must_use]
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// Unknown error. Should not be returned.
    Unknown = -1,
    /// Successful.
    Ok = 0,
    /// MinHook is already initialized.
    AlreadyInitialized = 1,
    /// MinHook is not initialized yet, or already uninitialized.
    NotInitialized = 2,
    /// The hook for the specified target function is already created.
    AlreadyCreated = 3,
    /// The hook for the specified target function is not created yet.
    NotCreated = 4,
    /// The hook for the specified target function is already enabled.
    Enabled = 5,
    /// The hook for the specified target function is not enabled yet, or already disabled.
    Disabled = 6,
    /// The specified pointer points to non-allocated and/or non-executable memory.
    NotExecutable = 7,
    /// The specified target function cannot be hooked.
    UnsupportedFunction = 8,
    /// Failed to allocate memory.
    MemoryAlloc = 9,
    /// Failed to change the memory protection.
    MemoryProtect = 10,
    /// The specified module is not loaded.
    ModuleNotFound = 11,
    /// The specified function is not found.
    FunctionNotFound = 12,
}

impl Status {
    /// Every status, in native code order.
    pub const ALL: [Status; 14] = [
        Status::Unknown,
        Status::Ok,
        Status::AlreadyInitialized,
        Status::NotInitialized,
        Status::AlreadyCreated,
        Status::NotCreated,
        Status::Enabled,
        Status::Disabled,
        Status::NotExecutable,
        Status::UnsupportedFunction,
        Status::MemoryAlloc,
        Status::MemoryProtect,
        Status::ModuleNotFound,
        Status::FunctionNotFound,
    ];

    /// Decode a raw `MH_STATUS` value.
    ///
    /// Values outside the native enumeration decode as [`Status::Unknown`].
    pub fn from_raw(code: c_int) -> Status {
        match code {
            0 => Status::Ok,
            1 => Status::AlreadyInitialized,
            2 => Status::NotInitialized,
            3 => Status::AlreadyCreated,
            4 => Status::NotCreated,
            5 => Status::Enabled,
            6 => Status::Disabled,
            7 => Status::NotExecutable,
            8 => Status::UnsupportedFunction,
            9 => Status::MemoryAlloc,
            10 => Status::MemoryProtect,
            11 => Status::ModuleNotFound,
            12 => Status::FunctionNotFound,
            _ => Status::Unknown,
        }
    }

    /// The raw `MH_STATUS` value.
    pub fn code(self) -> c_int {
        self as c_int
    }

    pub fn is_ok(self) -> bool {
        self == Status::Ok
    }

    /// The native identifier, as `MH_StatusToString` reports it.
    pub fn name(self) -> &'static str {
        match self {
            Status::Unknown => "MH_UNKNOWN",
            Status::Ok => "MH_OK",
            Status::AlreadyInitialized => "MH_ERROR_ALREADY_INITIALIZED",
            Status::NotInitialized => "MH_ERROR_NOT_INITIALIZED",
            Status::AlreadyCreated => "MH_ERROR_ALREADY_CREATED",
            Status::NotCreated => "MH_ERROR_NOT_CREATED",
            Status::Enabled => "MH_ERROR_ENABLED",
            Status::Disabled => "MH_ERROR_DISABLED",
            Status::NotExecutable => "MH_ERROR_NOT_EXECUTABLE",
            Status::UnsupportedFunction => "MH_ERROR_UNSUPPORTED_FUNCTION",
            Status::MemoryAlloc => "MH_ERROR_MEMORY_ALLOC",
            Status::MemoryProtect => "MH_ERROR_MEMORY_PROTECT",
            Status::ModuleNotFound => "MH_ERROR_MODULE_NOT_FOUND",
            Status::FunctionNotFound => "MH_ERROR_FUNCTION_NOT_FOUND",
        }
    }

    /// One-line description from `MinHook.h`.
    pub fn description(self) -> &'static str {
        match self {
            Status::Unknown => "unknown error",
            Status::Ok => "successful",
            Status::AlreadyInitialized => "MinHook is already initialized",
            Status::NotInitialized => "MinHook is not initialized yet, or already uninitialized",
            Status::AlreadyCreated => "the hook for the target function is already created",
            Status::NotCreated => "the hook for the target function is not created yet",
            Status::Enabled => "the hook for the target function is already enabled",
            Status::Disabled => {
                "the hook for the target function is not enabled yet, or already disabled"
            }
            Status::NotExecutable => "the pointer is not allocated and/or not executable",
            Status::UnsupportedFunction => "the target function cannot be hooked",
            Status::MemoryAlloc => "failed to allocate memory",
            Status::MemoryProtect => "failed to change the memory protection",
            Status::ModuleNotFound => "the module is not loaded",
            Status::FunctionNotFound => "the function is not found",
        }
    }

    /// `Ok(())` for [`Status::Ok`], otherwise the matching [`Error`].
    pub fn into_result(self) -> Result<()> {
        match self {
            Status::Ok => Ok(()),
            status => Err(Error::from_status(status)),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Translate a status to its native identifier (`MH_StatusToString`).
pub fn status_to_string(status: Status) -> &'static str {
    status.name()
}
