use minhook_bind::{ALL_HOOKS, Address};

#[test]
fn stub_build_reports_runtime_unavailable() {
    if minhook_bind::is_supported() {
        eprintln!("skipping stub runtime test (MinHook linked)");
        return;
    }

    let err = minhook_bind::initialize().expect_err("stub should fail");
    assert!(err.is_runtime_unavailable());
    assert_eq!(err.status(), None);

    let err = minhook_bind::queue_enable_hook(ALL_HOOKS).expect_err("stub should fail");
    assert!(err.is_runtime_unavailable());

    let err = unsafe { minhook_bind::create_hook(Address::new(0x1000), Address::new(0x2000)) }
        .expect_err("stub should fail");
    assert!(err.is_runtime_unavailable());
    assert!(minhook_bind::native_version().is_none());
}
