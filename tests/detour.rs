#![cfg(windows)]

mod common;

use std::mem;

use minhook_bind::Address;
use windows_sys::Win32::System::LibraryLoader::{GetModuleHandleW, GetProcAddress};

use common::Session;

type GetTickCountFn = unsafe extern "system" fn() -> u32;

const FAKE_TICKS: u32 = 0x5EED;

unsafe extern "system" fn fake_tick_count() -> u32 {
    FAKE_TICKS
}

fn kernel32_export(name: &std::ffi::CStr) -> Address {
    let module: Vec<u16> = "kernel32.dll\0".encode_utf16().collect();
    unsafe {
        let handle = GetModuleHandleW(module.as_ptr());
        assert!(!handle.is_null(), "kernel32 is always loaded");
        let proc = GetProcAddress(handle, name.as_ptr().cast()).expect("export exists");
        Address::from_ptr(proc as *const ())
    }
}

fn detour() -> Address {
    Address::from_ptr(fake_tick_count as *const ())
}

#[test]
fn enabled_hook_redirects_to_detour() {
    let Some(_session) = Session::start("enabled_hook_redirects_to_detour") else {
        return;
    };

    let target = kernel32_export(c"GetTickCount");
    let trampoline = unsafe { minhook_bind::create_hook(target, detour()) }.expect("create");

    let call_target: GetTickCountFn = unsafe { mem::transmute(target.as_ptr()) };
    let call_original: GetTickCountFn = unsafe { mem::transmute(trampoline.as_ptr()) };

    unsafe { minhook_bind::enable_hook(target) }.expect("enable");
    assert_eq!(unsafe { call_target() }, FAKE_TICKS);
    assert_ne!(unsafe { call_original() }, FAKE_TICKS);

    unsafe { minhook_bind::disable_hook(target) }.expect("disable");
    assert_ne!(unsafe { call_target() }, FAKE_TICKS);
}

#[test]
fn by_name_resolves_same_target() {
    let Some(_session) = Session::start("by_name_resolves_same_target") else {
        return;
    };

    let expected = kernel32_export(c"GetTickCount");
    let hook = unsafe { minhook_bind::create_hook_api_ex("kernel32.dll", "GetTickCount", detour()) }
        .expect("create by name");
    assert_eq!(hook.target(), expected);

    minhook_bind::queue_enable_hook(hook.target()).expect("queue enable");
    unsafe { minhook_bind::apply_queued() }.expect("apply queued");

    let call_target: GetTickCountFn = unsafe { mem::transmute(hook.target().as_ptr()) };
    assert_eq!(unsafe { call_target() }, FAKE_TICKS);
}
