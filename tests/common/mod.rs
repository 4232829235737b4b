#![allow(dead_code)]

use std::sync::{Mutex, MutexGuard};

// MinHook state is process-wide, so tests in one binary take turns.
static MINHOOK: Mutex<()> = Mutex::new(());

/// Exclusive access to MinHook, or `None` when it is not linked.
pub fn exclusive(test: &str) -> Option<MutexGuard<'static, ()>> {
    if !minhook_bind::is_supported() {
        eprintln!("skipping {test} (MinHook not linked)");
        return None;
    }
    Some(MINHOOK.lock().unwrap_or_else(|poisoned| poisoned.into_inner()))
}

/// Initialized MinHook for the duration of a test; uninitializes on drop,
/// which also removes every hook the test left behind.
pub struct Session {
    _guard: MutexGuard<'static, ()>,
}

impl Session {
    pub fn start(test: &str) -> Option<Session> {
        let guard = exclusive(test)?;
        minhook_bind::initialize().expect("initialize MinHook");
        Some(Session { _guard: guard })
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        let _ = unsafe { minhook_bind::uninitialize() };
    }
}
