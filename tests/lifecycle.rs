mod common;

use minhook_bind::{ALL_HOOKS, Address, HookTarget, Status};

use common::{Session, exclusive};

unsafe extern "system" fn fake_tick_count() -> u32 {
    0x5EED
}

#[inline(never)]
extern "system" fn never_hooked(x: u32) -> u32 {
    std::hint::black_box(x).wrapping_mul(3)
}

static NOT_CODE: [u8; 16] = [0; 16];

fn detour() -> Address {
    Address::from_ptr(fake_tick_count as *const ())
}

fn status_of<T: std::fmt::Debug>(result: minhook_bind::Result<T>) -> Status {
    result
        .unwrap_err()
        .status()
        .expect("error should carry a MinHook status")
}

#[test]
fn uninitialize_before_initialize_fails() {
    let Some(_guard) = exclusive("uninitialize_before_initialize_fails") else {
        return;
    };

    let status = status_of(unsafe { minhook_bind::uninitialize() });
    assert_eq!(status, Status::NotInitialized);
}

#[test]
fn initialize_twice_fails() {
    let Some(_guard) = exclusive("initialize_twice_fails") else {
        return;
    };

    minhook_bind::initialize().expect("first initialize");
    assert_eq!(
        status_of(minhook_bind::initialize()),
        Status::AlreadyInitialized
    );

    unsafe { minhook_bind::uninitialize() }.expect("uninitialize");
    assert_eq!(
        status_of(unsafe { minhook_bind::uninitialize() }),
        Status::NotInitialized
    );
}

#[test]
fn create_hook_twice_fails() {
    let Some(_session) = Session::start("create_hook_twice_fails") else {
        return;
    };

    let hook = unsafe { minhook_bind::create_hook_api_ex("kernel32.dll", "GetTickCount", detour()) }
        .expect("create by name");
    assert!(!hook.target().is_null());
    assert!(!hook.trampoline().is_null());

    let status = status_of(unsafe { minhook_bind::create_hook(hook.target(), detour()) });
    assert_eq!(status, Status::AlreadyCreated);
}

#[test]
fn enable_unknown_target_fails() {
    let Some(_session) = Session::start("enable_unknown_target_fails") else {
        return;
    };

    let target = Address::from_ptr(never_hooked as *const ());
    assert_eq!(
        status_of(unsafe { minhook_bind::enable_hook(target) }),
        Status::NotCreated
    );
    assert_eq!(
        status_of(minhook_bind::queue_enable_hook(target)),
        Status::NotCreated
    );
    assert_eq!(
        status_of(unsafe { minhook_bind::remove_hook(target) }),
        Status::NotCreated
    );
}

#[test]
fn non_executable_target_fails() {
    let Some(_session) = Session::start("non_executable_target_fails") else {
        return;
    };

    let target = Address::from_ptr(NOT_CODE.as_ptr());
    assert_eq!(
        status_of(unsafe { minhook_bind::create_hook(target, detour()) }),
        Status::NotExecutable
    );
}

#[test]
fn enable_and_disable_report_current_state() {
    let Some(_session) = Session::start("enable_and_disable_report_current_state") else {
        return;
    };

    let hook = unsafe { minhook_bind::create_hook_api_ex("kernel32", "GetTickCount", detour()) }
        .expect("create by name");
    let target = hook.target();

    assert_eq!(
        status_of(unsafe { minhook_bind::disable_hook(target) }),
        Status::Disabled
    );
    unsafe { minhook_bind::enable_hook(target) }.expect("enable");
    assert_eq!(
        status_of(unsafe { minhook_bind::enable_hook(target) }),
        Status::Enabled
    );
    unsafe { minhook_bind::disable_hook(target) }.expect("disable");
    assert_eq!(
        status_of(unsafe { minhook_bind::disable_hook(target) }),
        Status::Disabled
    );
}

#[test]
fn all_hooks_sentinel_applies_to_every_hook() {
    let Some(_session) = Session::start("all_hooks_sentinel_applies_to_every_hook") else {
        return;
    };

    let hook = unsafe { minhook_bind::create_hook_api_ex("kernel32", "GetTickCount", detour()) }
        .expect("create by name");

    unsafe { minhook_bind::enable_hook(ALL_HOOKS) }.expect("enable all");
    // MinHook treats ALL_HOOKS as "whatever still needs changing".
    unsafe { minhook_bind::enable_hook(ALL_HOOKS) }.expect("enable all again");
    assert_eq!(
        status_of(unsafe { minhook_bind::enable_hook(hook.target()) }),
        Status::Enabled
    );

    unsafe { minhook_bind::disable_hook(Address::NULL) }.expect("null disables all");
    assert_eq!(
        status_of(unsafe { minhook_bind::disable_hook(hook.target()) }),
        Status::Disabled
    );
}

#[test]
fn queued_enable_applies_like_direct_enable() {
    let Some(_session) = Session::start("queued_enable_applies_like_direct_enable") else {
        return;
    };

    let hook = unsafe { minhook_bind::create_hook_api_ex("kernel32", "GetTickCount", detour()) }
        .expect("create by name");
    let target = HookTarget::from(hook.target());

    minhook_bind::queue_enable_hook(target).expect("queue enable");
    // Queuing alone does not patch anything.
    assert_eq!(
        status_of(unsafe { minhook_bind::disable_hook(target) }),
        Status::Disabled
    );

    unsafe { minhook_bind::apply_queued() }.expect("apply queued");
    assert_eq!(
        status_of(unsafe { minhook_bind::enable_hook(target) }),
        Status::Enabled
    );

    minhook_bind::queue_disable_hook(ALL_HOOKS).expect("queue disable all");
    unsafe { minhook_bind::apply_queued() }.expect("apply queued");
    assert_eq!(
        status_of(unsafe { minhook_bind::disable_hook(target) }),
        Status::Disabled
    );
}

#[test]
fn remove_hook_twice_fails() {
    let Some(_session) = Session::start("remove_hook_twice_fails") else {
        return;
    };

    let hook = unsafe { minhook_bind::create_hook_api_ex("kernel32", "GetTickCount", detour()) }
        .expect("create by name");

    unsafe { minhook_bind::remove_hook(hook.target()) }.expect("remove");
    assert_eq!(
        status_of(unsafe { minhook_bind::remove_hook(hook.target()) }),
        Status::NotCreated
    );
}

#[test]
fn unknown_module_and_symbol_fail() {
    let Some(_session) = Session::start("unknown_module_and_symbol_fail") else {
        return;
    };

    let status = status_of(unsafe {
        minhook_bind::create_hook_api("minhook-bind-not-loaded.dll", "GetTickCount", detour())
    });
    assert_eq!(status, Status::ModuleNotFound);

    let status = status_of(unsafe {
        minhook_bind::create_hook_api_ex("kernel32", "MinHookBindNoSuchExport", detour())
    });
    assert_eq!(status, Status::FunctionNotFound);
}
