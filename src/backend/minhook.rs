use std::ffi::c_void;
use std::os::raw::c_int;

use windows_sys::core::{PCSTR, PCWSTR};

use crate::{Result, Status};

pub(super) const LINKED: bool = true;

// MinHook.h declares every entry point WINAPI and returns MH_STATUS, an `int`
// enum; decoding happens in `Status::from_raw` so unexpected values stay sound.
unsafe extern "system" {
    fn MH_Initialize() -> c_int;
    fn MH_Uninitialize() -> c_int;

    fn MH_CreateHook(target: *mut c_void, detour: *mut c_void, original: *mut *mut c_void)
    -> c_int;

    fn MH_CreateHookApi(
        module: PCWSTR,
        proc_name: PCSTR,
        detour: *mut c_void,
        original: *mut *mut c_void,
    ) -> c_int;

    fn MH_CreateHookApiEx(
        module: PCWSTR,
        proc_name: PCSTR,
        detour: *mut c_void,
        original: *mut *mut c_void,
        target: *mut *mut c_void,
    ) -> c_int;

    fn MH_RemoveHook(target: *mut c_void) -> c_int;
    fn MH_EnableHook(target: *mut c_void) -> c_int;
    fn MH_DisableHook(target: *mut c_void) -> c_int;
    fn MH_QueueEnableHook(target: *mut c_void) -> c_int;
    fn MH_QueueDisableHook(target: *mut c_void) -> c_int;
    fn MH_ApplyQueued() -> c_int;
}

pub(super) fn init() -> Result<MinHookBackend> {
    Ok(MinHookBackend { _priv: () })
}

#[derive(Clone, Copy)]
pub(super) struct MinHookBackend {
    _priv: (),
}

impl MinHookBackend {
    pub(super) unsafe fn initialize(&self) -> Status {
        Status::from_raw(unsafe { MH_Initialize() })
    }

    pub(super) unsafe fn uninitialize(&self) -> Status {
        Status::from_raw(unsafe { MH_Uninitialize() })
    }

    pub(super) unsafe fn create_hook(
        &self,
        target: *mut c_void,
        detour: *mut c_void,
        original: *mut *mut c_void,
    ) -> Status {
        Status::from_raw(unsafe { MH_CreateHook(target, detour, original) })
    }

    pub(super) unsafe fn create_hook_api(
        &self,
        module: PCWSTR,
        proc_name: PCSTR,
        detour: *mut c_void,
        original: *mut *mut c_void,
    ) -> Status {
        Status::from_raw(unsafe { MH_CreateHookApi(module, proc_name, detour, original) })
    }

    pub(super) unsafe fn create_hook_api_ex(
        &self,
        module: PCWSTR,
        proc_name: PCSTR,
        detour: *mut c_void,
        original: *mut *mut c_void,
        target: *mut *mut c_void,
    ) -> Status {
        Status::from_raw(unsafe { MH_CreateHookApiEx(module, proc_name, detour, original, target) })
    }

    pub(super) unsafe fn remove_hook(&self, target: *mut c_void) -> Status {
        Status::from_raw(unsafe { MH_RemoveHook(target) })
    }

    pub(super) unsafe fn enable_hook(&self, target: *mut c_void) -> Status {
        Status::from_raw(unsafe { MH_EnableHook(target) })
    }

    pub(super) unsafe fn disable_hook(&self, target: *mut c_void) -> Status {
        Status::from_raw(unsafe { MH_DisableHook(target) })
    }

    pub(super) unsafe fn queue_enable_hook(&self, target: *mut c_void) -> Status {
        Status::from_raw(unsafe { MH_QueueEnableHook(target) })
    }

    pub(super) unsafe fn queue_disable_hook(&self, target: *mut c_void) -> Status {
        Status::from_raw(unsafe { MH_QueueDisableHook(target) })
    }

    pub(super) unsafe fn apply_queued(&self) -> Status {
        Status::from_raw(unsafe { MH_ApplyQueued() })
    }
}
