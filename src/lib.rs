//! Thin, typed bindings to the MinHook API hooking library.
//!
//! Every function here is a direct call-through to the matching `MH_*` entry
//! point: arguments are marshaled, MinHook is called, and its `MH_STATUS` is
//! turned into a [`Result`]. Hook state (which targets are hooked, enabled or
//! queued) lives inside MinHook and is process-wide; this crate keeps none.
//!
//! # Quickstart
//! ```no_run
//! use minhook_bind::{Address, ALL_HOOKS};
//!
//! type GetTickCountFn = unsafe extern "system" fn() -> u32;
//!
//! unsafe extern "system" fn detour() -> u32 {
//!     42
//! }
//!
//! minhook_bind::initialize()?;
//! let hook = unsafe {
//!     let detour = Address::from_ptr(detour as *const ());
//!     minhook_bind::create_hook_api_ex("kernel32", "GetTickCount", detour)?
//! };
//! let original: GetTickCountFn = unsafe { std::mem::transmute(hook.trampoline().as_ptr()) };
//! unsafe { minhook_bind::enable_hook(hook.target())? };
//! // ... calls to GetTickCount now land in `detour`; `original` still runs the real one.
//! # let _ = original;
//! unsafe {
//!     minhook_bind::disable_hook(ALL_HOOKS)?;
//!     minhook_bind::uninitialize()?;
//! }
//! # Ok::<(), minhook_bind::Error>(())
//! ```
//!
//! # Queued changes
//! Enabling or disabling several hooks one by one patches code while other
//! threads may run it. Queue the changes and apply them in one pass instead:
//! ```no_run
//! # use minhook_bind::Address;
//! # fn hooks() -> (Address, Address) { unimplemented!() }
//! let (first, second) = hooks();
//! minhook_bind::queue_enable_hook(first)?;
//! minhook_bind::queue_enable_hook(second)?;
//! unsafe { minhook_bind::apply_queued()? };
//! # Ok::<(), minhook_bind::Error>(())
//! ```
//!
//! # Threads
//! Nothing here synchronizes. MinHook suspends other threads while it writes a
//! patch, but callers invoking these functions from several threads must
//! serialize the calls themselves.

use std::ffi::OsStr;

mod address;
mod backend;
mod error;
mod status;

pub use address::{ALL_HOOKS, Address, ApiHook, HookTarget};
pub use error::{Error, Result};
pub use status::{Status, status_to_string};

/// Returns true if this build is linked against MinHook.
///
/// When false, every operation fails with
/// [`Error::is_runtime_unavailable`].
pub fn is_supported() -> bool {
    backend::is_linked()
}

/// MinHook release compiled into this build, when the build script knows it.
pub fn native_version() -> Option<&'static str> {
    option_env!("MINHOOK_BIND_NATIVE_VERSION")
}

/// Initialize MinHook (`MH_Initialize`).
///
/// Call this exactly once before any other operation. A second call fails
/// with [`Status::AlreadyInitialized`].
pub fn initialize() -> Result<()> {
    backend::default_backend()?.initialize()
}

/// Uninitialize MinHook (`MH_Uninitialize`).
///
/// Disables and removes every hook. Fails with [`Status::NotInitialized`]
/// when MinHook was never initialized or is already uninitialized.
///
/// # Safety
/// No thread may be executing a detour or trampoline, since their memory is
/// released.
pub unsafe fn uninitialize() -> Result<()> {
    unsafe { backend::default_backend()?.uninitialize() }
}

/// Create a hook for `target` in disabled state (`MH_CreateHook`).
///
/// Returns the trampoline, which runs the original `target` logic.
///
/// # Examples
/// ```no_run
/// use minhook_bind::Address;
///
/// extern "system" fn target(x: u32) -> u32 { x + 1 }
/// extern "system" fn detour(x: u32) -> u32 { x * 2 }
///
/// minhook_bind::initialize()?;
/// let trampoline = unsafe {
///     minhook_bind::create_hook(
///         Address::from_ptr(target as *const ()),
///         Address::from_ptr(detour as *const ()),
///     )?
/// };
/// # let _ = trampoline;
/// # Ok::<(), minhook_bind::Error>(())
/// ```
///
/// # Safety
/// `target` and `detour` must be functions with the same signature and
/// calling convention, and `detour` must outlive the hook.
pub unsafe fn create_hook(target: Address, detour: Address) -> Result<Address> {
    unsafe { backend::default_backend()?.create_hook(target, detour) }
}

/// Create a hook for an export of a loaded module (`MH_CreateHookApi`).
///
/// The symbol is looked up on every call. Fails with
/// [`Status::ModuleNotFound`] or [`Status::FunctionNotFound`] before any hook
/// is created. Returns the trampoline.
///
/// # Safety
/// See [`create_hook`].
pub unsafe fn create_hook_api(
    module: impl AsRef<OsStr>,
    symbol: &str,
    detour: Address,
) -> Result<Address> {
    let module = backend::wide_module_name(module.as_ref())?;
    let symbol = backend::symbol_cstring(symbol)?;
    unsafe { backend::default_backend()?.create_hook_api(&module, &symbol, detour) }
}

/// Like [`create_hook_api`], but also returns the resolved target address
/// (`MH_CreateHookApiEx`).
///
/// # Examples
/// ```no_run
/// use minhook_bind::Address;
///
/// unsafe extern "system" fn detour() -> u32 { 0 }
///
/// minhook_bind::initialize()?;
/// let hook = unsafe {
///     let detour = Address::from_ptr(detour as *const ());
///     minhook_bind::create_hook_api_ex("kernel32.dll", "GetTickCount", detour)?
/// };
/// unsafe { minhook_bind::enable_hook(hook.target())? };
/// # Ok::<(), minhook_bind::Error>(())
/// ```
///
/// # Safety
/// See [`create_hook`].
pub unsafe fn create_hook_api_ex(
    module: impl AsRef<OsStr>,
    symbol: &str,
    detour: Address,
) -> Result<ApiHook> {
    let module = backend::wide_module_name(module.as_ref())?;
    let symbol = backend::symbol_cstring(symbol)?;
    unsafe { backend::default_backend()?.create_hook_api_ex(&module, &symbol, detour) }
}

/// Remove a created hook (`MH_RemoveHook`).
///
/// # Safety
/// No thread may be executing the detour or trampoline.
pub unsafe fn remove_hook(target: Address) -> Result<()> {
    unsafe { backend::default_backend()?.remove_hook(target) }
}

/// Enable a created hook, or every hook with [`ALL_HOOKS`] (`MH_EnableHook`).
///
/// Fails with [`Status::Enabled`] if the hook is already enabled and
/// [`Status::NotCreated`] if `target` was never hooked.
///
/// # Safety
/// Patches the target's code in place; the detour must be valid for the
/// target's signature.
pub unsafe fn enable_hook(target: impl Into<HookTarget>) -> Result<()> {
    unsafe { backend::default_backend()?.enable_hook(target.into()) }
}

/// Disable a created hook, or every hook with [`ALL_HOOKS`] (`MH_DisableHook`).
///
/// Fails with [`Status::Disabled`] if the hook is not enabled.
///
/// # Safety
/// Restores the target's code in place.
pub unsafe fn disable_hook(target: impl Into<HookTarget>) -> Result<()> {
    unsafe { backend::default_backend()?.disable_hook(target.into()) }
}

/// Queue a hook to be enabled by the next [`apply_queued`] (`MH_QueueEnableHook`).
pub fn queue_enable_hook(target: impl Into<HookTarget>) -> Result<()> {
    backend::default_backend()?.queue_enable_hook(target.into())
}

/// Queue a hook to be disabled by the next [`apply_queued`] (`MH_QueueDisableHook`).
pub fn queue_disable_hook(target: impl Into<HookTarget>) -> Result<()> {
    backend::default_backend()?.queue_disable_hook(target.into())
}

/// Apply all queued enable/disable changes in one pass (`MH_ApplyQueued`).
///
/// # Safety
/// Same as [`enable_hook`] and [`disable_hook`] for every queued hook.
pub unsafe fn apply_queued() -> Result<()> {
    unsafe { backend::default_backend()?.apply_queued() }
}
