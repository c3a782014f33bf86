use alloc::alloc::{handle_alloc_error, Layout};
use thiserror::Error;

/// Error types for `Deque` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum DequeError {
    /// Index is beyond the current deque length
    #[error("Index out of bounds: index {index} is beyond deque length {length}")]
    IndexOutOfBounds {
        /// Index that was accessed
        index: usize,
        /// Current length of the deque
        length: usize,
    },
    /// The allocator returned null for a block or for the block directory
    #[error("Allocation failed: {bytes} bytes with alignment {align}")]
    AllocationFailed {
        /// Size of the rejected request
        bytes: usize,
        /// Alignment of the rejected request
        align: usize,
    },
    /// The requested number of slots or blocks does not fit in memory
    #[error("Capacity overflow: the block directory cannot address the requested elements")]
    CapacityOverflow,
}

impl DequeError {
    pub(crate) fn allocation_failed(layout: Layout) -> Self {
        DequeError::AllocationFailed {
            bytes: layout.size(),
            align: layout.align(),
        }
    }

    /// Escalates a failure of an infallible operation the way `alloc` collections do.
    #[cold]
    pub(crate) fn raise(self) -> ! {
        match self {
            DequeError::AllocationFailed { bytes, align } => {
                match Layout::from_size_align(bytes, align) {
                    Ok(layout) => handle_alloc_error(layout),
                    Err(_) => panic!("allocation of {bytes} bytes failed"),
                }
            }
            other => panic!("{other}"),
        }
    }
}
