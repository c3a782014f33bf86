use alloc::alloc::{alloc, dealloc, Layout};
use core::mem::MaybeUninit;
use core::ptr::NonNull;

use crate::error::DequeError;

/// Uninitialised storage for exactly `BLOCK` elements.
///
/// A block never constructs or drops elements on its own. The owning deque
/// knows which slots are live; the block only owns the allocation.
pub(crate) struct Block<T, const BLOCK: usize> {
    ptr: NonNull<MaybeUninit<T>>,
}

// Same rules as `Box<[MaybeUninit<T>]>`.
#[allow(unsafe_code)]
unsafe impl<T: Send, const BLOCK: usize> Send for Block<T, BLOCK> {}
#[allow(unsafe_code)]
unsafe impl<T: Sync, const BLOCK: usize> Sync for Block<T, BLOCK> {}

impl<T, const BLOCK: usize> Block<T, BLOCK> {
    pub(crate) fn layout() -> Result<Layout, DequeError> {
        Layout::array::<MaybeUninit<T>>(BLOCK).map_err(|_| DequeError::CapacityOverflow)
    }

    /// Allocates a fresh block. Zero-sized layouts get a dangling pointer.
    ///
    /// # Errors
    ///
    /// Returns `DequeError::AllocationFailed` if the allocator returns null and
    /// `DequeError::CapacityOverflow` if `BLOCK` elements of `T` do not form a valid layout.
    pub(crate) fn allocate() -> Result<Self, DequeError> {
        let layout = Self::layout()?;
        if layout.size() == 0 {
            return Ok(Self {
                ptr: NonNull::dangling(),
            });
        }

        // Safe: the layout has a non-zero size
        #[allow(unsafe_code)]
        let raw = unsafe { alloc(layout) }.cast::<MaybeUninit<T>>();
        NonNull::new(raw)
            .map(|ptr| Self { ptr })
            .ok_or_else(|| DequeError::allocation_failed(layout))
    }

    /// Pointer to the slot at `offset`.
    ///
    /// # Safety
    ///
    /// `offset` must be less than `BLOCK`. The slot is initialised only if the
    /// deque considers it live.
    #[allow(unsafe_code)]
    pub(crate) unsafe fn slot(&self, offset: usize) -> *mut T {
        debug_assert!(offset < BLOCK, "offset {offset} outside block of {BLOCK}");
        self.ptr.as_ptr().add(offset).cast::<T>()
    }
}

impl<T, const BLOCK: usize> Drop for Block<T, BLOCK> {
    #[allow(unsafe_code)]
    fn drop(&mut self) {
        let Ok(layout) = Self::layout() else {
            return;
        };
        if layout.size() == 0 {
            return;
        }

        // Safe: `ptr` came from `alloc` with this exact layout
        unsafe {
            dealloc(self.ptr.as_ptr().cast::<u8>(), layout);
        }
    }
}
