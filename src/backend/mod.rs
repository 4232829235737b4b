use std::ffi::{CStr, CString, OsStr, c_void};
use std::ptr;

use log::{debug, trace};

use crate::{Address, ApiHook, Error, HookTarget, Result, Status};

#[cfg(not(minhook_stub))]
mod minhook;

#[cfg(minhook_stub)]
#[path = "stub.rs"]
mod minhook;

/// Call-through handle to the linked MinHook library.
///
/// MinHook keeps all hook state process-wide, so the handle itself carries none.
#[derive(Clone, Copy)]
pub(crate) struct BackendHandle {
    inner: minhook::MinHookBackend,
}

impl std::fmt::Debug for BackendHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("BackendHandle(..)")
    }
}

pub(crate) fn default_backend() -> Result<BackendHandle> {
    minhook::init().map(|inner| BackendHandle { inner })
}

pub(crate) fn is_linked() -> bool {
    minhook::LINKED
}

impl BackendHandle {
    pub(crate) fn initialize(&self) -> Result<()> {
        trace!("MH_Initialize()");
        check("MH_Initialize", unsafe { self.inner.initialize() })
    }

    pub(crate) unsafe fn uninitialize(&self) -> Result<()> {
        trace!("MH_Uninitialize()");
        check("MH_Uninitialize", unsafe { self.inner.uninitialize() })
    }

    pub(crate) unsafe fn create_hook(&self, target: Address, detour: Address) -> Result<Address> {
        trace!("MH_CreateHook(target={target:?}, detour={detour:?})");
        let mut original: *mut c_void = ptr::null_mut();
        let status = unsafe {
            self.inner
                .create_hook(target.as_ptr(), detour.as_ptr(), &mut original)
        };
        check("MH_CreateHook", status)?;
        Ok(Address::from_mut_ptr(original))
    }

    pub(crate) unsafe fn create_hook_api(
        &self,
        module: &[u16],
        symbol: &CStr,
        detour: Address,
    ) -> Result<Address> {
        trace!(
            "MH_CreateHookApi(module={:?}, symbol={symbol:?}, detour={detour:?})",
            wide_lossy(module)
        );
        let mut original: *mut c_void = ptr::null_mut();
        let status = unsafe {
            self.inner.create_hook_api(
                module.as_ptr(),
                symbol.as_ptr().cast(),
                detour.as_ptr(),
                &mut original,
            )
        };
        check("MH_CreateHookApi", status)?;
        Ok(Address::from_mut_ptr(original))
    }

    pub(crate) unsafe fn create_hook_api_ex(
        &self,
        module: &[u16],
        symbol: &CStr,
        detour: Address,
    ) -> Result<ApiHook> {
        trace!(
            "MH_CreateHookApiEx(module={:?}, symbol={symbol:?}, detour={detour:?})",
            wide_lossy(module)
        );
        let mut original: *mut c_void = ptr::null_mut();
        let mut target: *mut c_void = ptr::null_mut();
        let status = unsafe {
            self.inner.create_hook_api_ex(
                module.as_ptr(),
                symbol.as_ptr().cast(),
                detour.as_ptr(),
                &mut original,
                &mut target,
            )
        };
        check("MH_CreateHookApiEx", status)?;
        Ok(ApiHook::new(
            Address::from_mut_ptr(target),
            Address::from_mut_ptr(original),
        ))
    }

    pub(crate) unsafe fn remove_hook(&self, target: Address) -> Result<()> {
        trace!("MH_RemoveHook(target={target:?})");
        check("MH_RemoveHook", unsafe { self.inner.remove_hook(target.as_ptr()) })
    }

    pub(crate) unsafe fn enable_hook(&self, target: HookTarget) -> Result<()> {
        trace!("MH_EnableHook({target:?})");
        check("MH_EnableHook", unsafe { self.inner.enable_hook(target.as_raw()) })
    }

    pub(crate) unsafe fn disable_hook(&self, target: HookTarget) -> Result<()> {
        trace!("MH_DisableHook({target:?})");
        check("MH_DisableHook", unsafe { self.inner.disable_hook(target.as_raw()) })
    }

    pub(crate) fn queue_enable_hook(&self, target: HookTarget) -> Result<()> {
        trace!("MH_QueueEnableHook({target:?})");
        check("MH_QueueEnableHook", unsafe {
            self.inner.queue_enable_hook(target.as_raw())
        })
    }

    pub(crate) fn queue_disable_hook(&self, target: HookTarget) -> Result<()> {
        trace!("MH_QueueDisableHook({target:?})");
        check("MH_QueueDisableHook", unsafe {
            self.inner.queue_disable_hook(target.as_raw())
        })
    }

    pub(crate) unsafe fn apply_queued(&self) -> Result<()> {
        trace!("MH_ApplyQueued()");
        check("MH_ApplyQueued", unsafe { self.inner.apply_queued() })
    }
}

fn check(call: &'static str, status: Status) -> Result<()> {
    if !status.is_ok() {
        debug!("{call} returned {status} ({})", status.description());
    }
    status.into_result()
}

//=== Argument marshaling ===

/// Encode a module name as a NUL-terminated UTF-16 string (`LPCWSTR`).
pub(crate) fn wide_module_name(name: &OsStr) -> Result<Vec<u16>> {
    let mut wide = encode_wide(name);
    if let Some(pos) = wide.iter().position(|&unit| unit == 0) {
        return Err(Error::interior_nul("module name", pos));
    }
    wide.push(0);
    Ok(wide)
}

/// Encode an export name as a NUL-terminated byte string (`LPCSTR`).
pub(crate) fn symbol_cstring(name: &str) -> Result<CString> {
    CString::new(name).map_err(|err| Error::from_nul("symbol name", err))
}

#[cfg(windows)]
fn encode_wide(name: &OsStr) -> Vec<u16> {
    use std::os::windows::ffi::OsStrExt;

    name.encode_wide().collect()
}

#[cfg(not(windows))]
fn encode_wide(name: &OsStr) -> Vec<u16> {
    name.to_string_lossy().encode_utf16().collect()
}

fn wide_lossy(wide: &[u16]) -> String {
    let len = wide.iter().position(|&unit| unit == 0).unwrap_or(wide.len());
    String::from_utf16_lossy(&wide[..len])
}
