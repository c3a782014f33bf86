#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

//! `Deque`: a double-ended queue stored as a directory of fixed-size blocks.
//!
//! Elements live in blocks of `BLOCK` slots each. An outer directory holds the
//! blocks in order, and two cursors (the first live slot and the element count)
//! delimit the live elements. Pushing at either end fills the neighbouring slot;
//! when a cursor runs off the directory, only the directory is reallocated and
//! the live blocks are re-centred in it. Elements never move once written.
//!
//! This crate is `no_std` compatible and needs only `alloc`.
//!
//! # Performance Characteristics
//!
//! ## Time Complexity
//! - `push_back()`, `push_front()`: amortised O(1); growth copies block handles, not elements
//! - `pop_back()`, `pop_front()`: O(1), block storage is kept for reuse
//! - `get()`, `at()`, indexing: O(1) via `(first + i) / BLOCK`, `(first + i) % BLOCK`
//! - `insert()`, `remove()`: O(n), shifting the shorter side
//! - Iterator `nth()` and cursor arithmetic: O(1)
//!
//! ## Space Complexity
//! - At most one partially used block at each end
//! - Directory overhead: one pointer per block
//!
//! ## Configuration
//!
//! The block capacity is a const parameter defaulting to [`DEFAULT_BLOCK_SIZE`].
//! The first growth allocates [`INITIAL_DIRECTORY_LEN`] blocks; later growths
//! multiply the directory length by [`GROWTH_FACTOR`].
//!
//! ```
//! # use block_deque::Deque;
//! let mut deque: Deque<i32> = Deque::new();
//! for i in 0..3000 {
//!     deque.push_back(i);
//! }
//! assert_eq!(deque.len(), 3000);
//! assert_eq!(deque[1500], 1500);
//!
//! for expected in 0..3000 {
//!     assert_eq!(deque.pop_front(), Some(expected));
//! }
//! assert!(deque.is_empty());
//! ```
//!
//! # Both Ends
//!
//! ```
//! # use block_deque::Deque;
//! let mut deque: Deque<&str, 4> = Deque::new();
//! deque.push_back("b");
//! deque.push_front("a");
//! deque.push_back("c");
//!
//! assert_eq!(deque.front(), Some(&"a"));
//! assert_eq!(deque.back(), Some(&"c"));
//! assert_eq!(deque.pop_back(), Some("c"));
//! assert_eq!(deque.pop_front(), Some("a"));
//! ```
//!
//! # Checked Access
//!
//! `at()` reports out-of-range indices as an error instead of panicking:
//!
//! ```
//! # use block_deque::{Deque, DequeError};
//! let deque: Deque<u8> = Deque::from([1, 2, 3]);
//! assert_eq!(deque.at(2), Ok(&3));
//! assert_eq!(
//!     deque.at(3),
//!     Err(DequeError::IndexOutOfBounds { index: 3, length: 3 })
//! );
//! ```
//!
//! # Cursors
//!
//! Cursors are random-access positions with arithmetic defined on block
//! coordinates:
//!
//! ```
//! # use block_deque::Deque;
//! let deque: Deque<u32, 2> = (0..10).collect();
//! let begin = deque.begin();
//! let cursor = begin + 7;
//!
//! assert_eq!(cursor.get(), Some(&7));
//! assert_eq!(cursor - begin, 7);
//! assert_eq!(deque.end() - deque.begin(), 10);
//! assert_eq!(deque.end().get(), None);
//!
//! let last = deque.rev_begin();
//! assert_eq!(last.get(), Some(&9));
//! assert_eq!((last + 3).get(), Some(&6));
//! ```
//!
//! [`Deque::begin_mut`] and [`Deque::cursor_at_mut`] give a [`CursorMut`] with
//! the same arithmetic that can also write through `get_mut()`.

extern crate alloc;

mod block;
mod cursor;
mod deque;
mod error;
mod iter;
mod position;

// Re-export public types and traits
pub use crate::deque::{Deque, DEFAULT_BLOCK_SIZE, GROWTH_FACTOR, INITIAL_DIRECTORY_LEN};
pub use cursor::{Cursor, CursorMut, RevCursor};
pub use error::DequeError;
pub use iter::{IntoIter, Iter, IterMut};
pub use position::Position;
