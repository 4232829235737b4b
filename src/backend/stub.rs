use std::ffi::c_void;

use crate::{Error, Result, Status};

pub(super) const LINKED: bool = false;

pub(super) fn init() -> Result<MinHookBackend> {
    Err(Error::runtime_unavailable(
        "MinHook is not linked into this build (requires an x86/x86_64 Windows target)",
    ))
}

/// Never constructed: `init` always fails when MinHook is not linked.
#[derive(Clone, Copy)]
pub(super) enum MinHookBackend {}

impl MinHookBackend {
    pub(super) unsafe fn initialize(&self) -> Status {
        match *self {}
    }

    pub(super) unsafe fn uninitialize(&self) -> Status {
        match *self {}
    }

    pub(super) unsafe fn create_hook(
        &self,
        _target: *mut c_void,
        _detour: *mut c_void,
        _original: *mut *mut c_void,
    ) -> Status {
        match *self {}
    }

    pub(super) unsafe fn create_hook_api(
        &self,
        _module: *const u16,
        _proc_name: *const u8,
        _detour: *mut c_void,
        _original: *mut *mut c_void,
    ) -> Status {
        match *self {}
    }

    pub(super) unsafe fn create_hook_api_ex(
        &self,
        _module: *const u16,
        _proc_name: *const u8,
        _detour: *mut c_void,
        _original: *mut *mut c_void,
        _target: *mut *mut c_void,
    ) -> Status {
        match *self {}
    }

    pub(super) unsafe fn remove_hook(&self, _target: *mut c_void) -> Status {
        match *self {}
    }

    pub(super) unsafe fn enable_hook(&self, _target: *mut c_void) -> Status {
        match *self {}
    }

    pub(super) unsafe fn disable_hook(&self, _target: *mut c_void) -> Status {
        match *self {}
    }

    pub(super) unsafe fn queue_enable_hook(&self, _target: *mut c_void) -> Status {
        match *self {}
    }

    pub(super) unsafe fn queue_disable_hook(&self, _target: *mut c_void) -> Status {
        match *self {}
    }

    pub(super) unsafe fn apply_queued(&self) -> Status {
        match *self {}
    }
}
