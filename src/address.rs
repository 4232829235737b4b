use std::ffi::c_void;
use std::fmt;

/// Opaque machine address of a function in the current process.
///
/// The binding never reads through an `Address`; it is passed to MinHook as-is.
///
/// # Examples
/// ```
/// use minhook_bind::Address;
///
/// extern "system" fn detour() {}
///
/// let addr = Address::from_ptr(detour as *const ());
/// assert!(!addr.is_null());
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Address(usize);

impl Address {
    /// The null address. As a hook target it selects every created hook.
    pub const NULL: Address = Address(0);

    pub const fn new(addr: usize) -> Address {
        Address(addr)
    }

    pub fn from_ptr<T>(ptr: *const T) -> Address {
        Address(ptr as usize)
    }

    pub fn from_mut_ptr<T>(ptr: *mut T) -> Address {
        Address(ptr as usize)
    }

    /// Return the address as an integer.
    pub const fn get(self) -> usize {
        self.0
    }

    pub fn as_ptr(self) -> *mut c_void {
        self.0 as *mut c_void
    }

    pub const fn is_null(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({:#x})", self.0)
    }
}

impl fmt::LowerHex for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl fmt::Pointer for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Pointer::fmt(&self.as_ptr(), f)
    }
}

impl<T> From<*const T> for Address {
    fn from(ptr: *const T) -> Self {
        Address::from_ptr(ptr)
    }
}

impl<T> From<*mut T> for Address {
    fn from(ptr: *mut T) -> Self {
        Address::from_mut_ptr(ptr)
    }
}

impl From<Address> for usize {
    fn from(addr: Address) -> Self {
        addr.0
    }
}

/// Selects the hook(s) an enable/disable/queue operation applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookTarget {
    /// Every created hook (`MH_ALL_HOOKS`).
    All,
    /// The hook created for this target address.
    Function(Address),
}

/// Selects every created hook.
pub const ALL_HOOKS: HookTarget = HookTarget::All;

impl HookTarget {
    /// Value passed to MinHook; `All` is the null sentinel.
    pub(crate) fn as_raw(self) -> *mut c_void {
        match self {
            HookTarget::All => Address::NULL.as_ptr(),
            HookTarget::Function(addr) => addr.as_ptr(),
        }
    }
}

/// A null address is the native "all hooks" sentinel, so it converts to
/// [`HookTarget::All`].
impl From<Address> for HookTarget {
    fn from(addr: Address) -> Self {
        if addr.is_null() {
            HookTarget::All
        } else {
            HookTarget::Function(addr)
        }
    }
}

/// Addresses produced by creating a hook by module and symbol name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ApiHook {
    target: Address,
    trampoline: Address,
}

impl ApiHook {
    pub(crate) fn new(target: Address, trampoline: Address) -> Self {
        Self { target, trampoline }
    }

    /// The resolved target function; pass this to enable/disable/remove.
    pub fn target(&self) -> Address {
        self.target
    }

    /// Relay that runs the original target logic.
    pub fn trampoline(&self) -> Address {
        self.trampoline
    }
}
