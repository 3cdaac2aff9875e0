//! Read-only access to the `next` chains handed to `xrCreateInstance`.
use std::{ffi::c_void, fmt, marker::PhantomData, ptr::NonNull};
use xr::sys::{BaseInStructure, StructureType};

/// Marker for structures that can be linked into an OpenXR `next` chain.
///
/// # Safety
/// Implementors must be `#[repr(C)]`, start with a `StructureType` followed by a `next` pointer,
/// and keep `next` either null or pointing at a chain that lives at least as long as `self`.
pub unsafe trait ExtensionStruct {}

/// A borrowed chain of extension structures owned by a platform plugin. The runtime reads it
/// during instance creation; callers can inspect it but neither free nor mutate it.
#[derive(Clone, Copy)]
pub struct InstanceCreateExtension<'a> {
    head: NonNull<BaseInStructure>,
    _owner: PhantomData<&'a BaseInStructure>,
}

impl<'a> InstanceCreateExtension<'a> {
    pub fn new<T: ExtensionStruct>(head: &'a T) -> Self {
        Self {
            head: NonNull::from(head).cast(),
            _owner: PhantomData,
        }
    }

    /// Type tag of the first structure in the chain
    pub fn ty(&self) -> StructureType {
        // SAFETY: `ExtensionStruct` guarantees the header layout and the borrow keeps it alive.
        unsafe { self.head.as_ref().ty }
    }

    /// Type tags of every link, head first
    pub fn types(&self) -> Types<'a> {
        Types {
            next: self.head.as_ptr(),
            _owner: PhantomData,
        }
    }

    /// Number of links in the chain
    pub fn len(&self) -> usize {
        self.types().count()
    }

    /// Always false; a chain has at least its head
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Pointer suitable for `XrInstanceCreateInfo::next`
    pub fn as_ptr(&self) -> *const c_void {
        self.head.as_ptr() as *const c_void
    }
}

impl fmt::Debug for InstanceCreateExtension<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.types()).finish()
    }
}

pub struct Types<'a> {
    next: *const BaseInStructure,
    _owner: PhantomData<&'a BaseInStructure>,
}

impl Iterator for Types<'_> {
    type Item = StructureType;

    fn next(&mut self) -> Option<StructureType> {
        if self.next.is_null() {
            return None;
        }
        // SAFETY: every link outlives `'a` per the `ExtensionStruct` contract.
        let link = unsafe { &*self.next };
        self.next = link.next;
        Some(link.ty)
    }
}
