use alloc::alloc::Layout;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use core::mem;
use core::ops::{Index, IndexMut};
use core::ptr;

use crate::block::Block;
use crate::cursor::{Cursor, CursorMut, RevCursor};
use crate::error::DequeError;
use crate::iter::{IntoIter, Iter, IterMut};
use crate::position::Position;

/// Block capacity used when the const parameter is not given.
pub const DEFAULT_BLOCK_SIZE: usize = 1000;
/// Number of blocks allocated by the first growth of an empty directory.
pub const INITIAL_DIRECTORY_LEN: usize = 2;
/// Factor applied to the directory length on every later growth.
pub const GROWTH_FACTOR: usize = 2;

fn directory_error<T, const BLOCK: usize>(len: usize) -> DequeError {
    Layout::array::<Block<T, BLOCK>>(len)
        .map_or(DequeError::CapacityOverflow, DequeError::allocation_failed)
}

#[derive(Debug, Clone, Copy)]
enum End {
    Front,
    Back,
}

/// A double-ended queue stored as a directory of fixed-size blocks
///
/// Elements never move when the deque grows: growth reallocates only the
/// directory of block pointers and re-centres the live blocks inside it.
pub struct Deque<T, const BLOCK: usize = DEFAULT_BLOCK_SIZE> {
    pub(crate) blocks: Vec<Block<T, BLOCK>>,
    pub(crate) head: Position,
    pub(crate) len: usize,
    _owns: PhantomData<T>,
}

impl<T, const BLOCK: usize> Deque<T, BLOCK> {
    const VALID_BLOCK: () = assert!(BLOCK > 0, "Deque block size must be non-zero");

    /// Creates an empty deque. No memory is allocated until the first push.
    #[must_use]
    pub const fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::VALID_BLOCK;
        Self {
            blocks: Vec::new(),
            head: Position::new(0, 0),
            len: 0,
            _owns: PhantomData,
        }
    }

    /// Creates a deque holding `len` default values.
    #[must_use]
    pub fn with_len(len: usize) -> Self
    where
        T: Default,
    {
        let mut deque = Self::new();
        deque.reserve(len);
        for _ in 0..len {
            deque.push_back(T::default());
        }
        deque
    }

    /// Creates a deque holding `len` clones of `value`.
    #[must_use]
    pub fn from_elem(value: T, len: usize) -> Self
    where
        T: Clone,
    {
        let mut deque = Self::new();
        if len == 0 {
            return deque;
        }
        deque.reserve(len);
        for _ in 1..len {
            deque.push_back(value.clone());
        }
        deque.push_back(value);
        deque
    }

    /// Number of elements in the deque.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the deque holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Length of the block directory.
    #[must_use]
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Number of slots in allocated blocks, live or not.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.blocks.len().saturating_mul(BLOCK)
    }

    pub(crate) fn tail(&self) -> Position {
        self.head.advance(self.len, BLOCK)
    }

    fn position_of(&self, index: usize) -> Position {
        self.head.advance(index, BLOCK)
    }

    pub(crate) fn slot_ptr(&self, pos: Position) -> *mut T {
        // Safe: positions are normalised, so the offset is within the block
        #[allow(unsafe_code)]
        let ptr = unsafe { self.blocks[pos.block].slot(pos.offset) };
        ptr
    }

    fn live_blocks(&self) -> usize {
        if self.len == 0 {
            0
        } else {
            self.position_of(self.len - 1).block - self.head.block + 1
        }
    }

    /// Points an empty deque at the middle of its directory.
    fn recenter(&mut self) {
        debug_assert_eq!(self.len, 0);
        self.head = Position::new(self.blocks.len() / 2, 0);
    }

    /// Reallocates the directory so both ends have at least one spare block.
    ///
    /// Every allocation happens before the directory is touched; on failure
    /// the fresh blocks are released and the deque is left as it was.
    fn grow(&mut self, end: End) -> Result<(), DequeError> {
        let old_len = self.blocks.len();
        let live = self.live_blocks();
        let new_len = if old_len == 0 {
            INITIAL_DIRECTORY_LEN
        } else {
            old_len
                .checked_mul(GROWTH_FACTOR)
                .ok_or(DequeError::CapacityOverflow)?
        };
        let new_len = new_len.max(live + 2);
        if new_len.checked_mul(BLOCK).is_none() {
            return Err(DequeError::CapacityOverflow);
        }

        let mut directory: Vec<Block<T, BLOCK>> = Vec::new();
        let mut spare: Vec<Block<T, BLOCK>> = Vec::new();
        directory
            .try_reserve_exact(new_len)
            .map_err(|_| directory_error::<T, BLOCK>(new_len))?;
        spare
            .try_reserve_exact(new_len - live)
            .map_err(|_| directory_error::<T, BLOCK>(new_len - live))?;
        for _ in old_len..new_len {
            match Block::allocate() {
                Ok(block) => spare.push(block),
                Err(err) => {
                    tracing::warn!(
                        old_blocks = old_len,
                        new_blocks = new_len,
                        %err,
                        "block allocation failed, directory left unchanged"
                    );
                    return Err(err);
                }
            }
        }

        // Nothing below allocates: all capacities were reserved above
        let first_live = if live == 0 { 0 } else { self.head.block };
        let mut old = mem::take(&mut self.blocks);
        spare.extend(old.drain(first_live + live..));
        spare.extend(old.drain(..first_live));
        let new_first = (new_len - live) / 2;
        directory.extend(spare.drain(..new_first));
        directory.append(&mut old);
        directory.append(&mut spare);

        if old_len == 0 {
            tracing::trace!(blocks = new_len, block_size = BLOCK, "allocated block directory");
        } else {
            tracing::debug!(
                old_blocks = old_len,
                new_blocks = new_len,
                live_blocks = live,
                ?end,
                "grew block directory"
            );
        }

        self.blocks = directory;
        self.head = if live == 0 {
            Position::new(new_first, 0)
        } else {
            Position::new(new_first, self.head.offset)
        };
        Ok(())
    }

    /// Moves the live blocks to the middle of the current directory.
    ///
    /// Only block handles are rotated, so nothing is allocated and element
    /// addresses do not change.
    fn recenter_live(&mut self, end: End) {
        let live = self.live_blocks();
        let first = self.head.block;
        let new_first = (self.blocks.len() - live) / 2;
        if first > new_first {
            self.blocks.rotate_left(first - new_first);
        } else {
            self.blocks.rotate_right(new_first - first);
        }
        tracing::trace!(
            blocks = self.blocks.len(),
            live_blocks = live,
            ?end,
            "re-centred live blocks"
        );
        self.head.block = new_first;
    }

    /// Frees a spare block at `end`, re-centring when the directory is
    /// mostly unused and growing it otherwise.
    fn make_room(&mut self, end: End) -> Result<(), DequeError> {
        let old_len = self.blocks.len();
        if old_len > 0 && self.live_blocks() + 2 <= old_len / 2 {
            self.recenter_live(end);
            Ok(())
        } else {
            self.grow(end)
        }
    }

    fn prepare_back(&mut self) -> Result<Position, DequeError> {
        if self.len == 0 {
            self.recenter();
        }
        if self.tail().block >= self.blocks.len() {
            self.make_room(End::Back)?;
        }
        Ok(self.tail())
    }

    fn prepare_front(&mut self) -> Result<Position, DequeError> {
        if self.len == 0 {
            self.recenter();
        }
        if self.head == Position::new(0, 0) {
            self.make_room(End::Front)?;
        }
        Ok(self.head.retreat(1, BLOCK))
    }

    /// Makes room for `additional` more elements at the back without further growth.
    ///
    /// # Errors
    ///
    /// Returns `DequeError::CapacityOverflow` if the total does not fit in `usize`,
    /// or `DequeError::AllocationFailed` if a block cannot be allocated. Elements
    /// and their order are unchanged on error.
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), DequeError> {
        let required = self
            .len
            .checked_add(additional)
            .ok_or(DequeError::CapacityOverflow)?;
        if Layout::array::<T>(required).is_err() {
            return Err(DequeError::CapacityOverflow);
        }
        if self.len == 0 {
            self.recenter();
        }
        loop {
            let used = self.head.block * BLOCK + self.head.offset + self.len;
            if self.capacity() - used >= additional {
                return Ok(());
            }
            self.grow(End::Back)?;
        }
    }

    /// Infallible form of [`Deque::try_reserve`].
    ///
    /// # Panics
    ///
    /// Panics on capacity overflow and aborts through `handle_alloc_error`
    /// when the allocator fails.
    pub fn reserve(&mut self, additional: usize) {
        if let Err(err) = self.try_reserve(additional) {
            err.raise();
        }
    }

    /// Appends an element to the back.
    ///
    /// # Errors
    ///
    /// Returns an allocation error if the directory had to grow and could not.
    /// The deque is unchanged on error.
    pub fn try_push_back(&mut self, value: T) -> Result<(), DequeError> {
        self.try_emplace_back(|| value)
    }

    /// Prepends an element to the front.
    ///
    /// # Errors
    ///
    /// Returns an allocation error if the directory had to grow and could not.
    /// The deque is unchanged on error.
    pub fn try_push_front(&mut self, value: T) -> Result<(), DequeError> {
        self.try_emplace_front(|| value)
    }

    /// Constructs an element at the back once a slot has been secured.
    ///
    /// If `make` panics the deque keeps its elements and cursors; only spare
    /// block storage may have been added.
    ///
    /// # Errors
    ///
    /// Returns an allocation error if the directory had to grow and could not.
    pub fn try_emplace_back<F: FnOnce() -> T>(&mut self, make: F) -> Result<(), DequeError> {
        let slot = self.prepare_back()?;
        let value = make();
        // Safe: `prepare_back` returned an allocated slot outside the live span
        #[allow(unsafe_code)]
        unsafe {
            self.slot_ptr(slot).write(value);
        }
        self.len += 1;
        Ok(())
    }

    /// Constructs an element at the front once a slot has been secured.
    ///
    /// # Errors
    ///
    /// Returns an allocation error if the directory had to grow and could not.
    pub fn try_emplace_front<F: FnOnce() -> T>(&mut self, make: F) -> Result<(), DequeError> {
        let slot = self.prepare_front()?;
        let value = make();
        // Safe: `prepare_front` returned an allocated slot outside the live span
        #[allow(unsafe_code)]
        unsafe {
            self.slot_ptr(slot).write(value);
        }
        self.head = slot;
        self.len += 1;
        Ok(())
    }

    /// Appends an element to the back.
    ///
    /// ```
    /// # use block_deque::Deque;
    /// let mut deque: Deque<i32, 2> = Deque::new();
    /// deque.push_back(1);
    /// deque.push_back(2);
    /// deque.push_front(0);
    /// assert_eq!(deque.len(), 3);
    /// assert!(!deque.is_empty());
    /// assert_eq!(deque.back(), Some(&2));
    /// ```
    ///
    /// # Panics
    ///
    /// Panics on capacity overflow and aborts through `handle_alloc_error`
    /// when the allocator fails.
    pub fn push_back(&mut self, value: T) {
        if let Err(err) = self.try_push_back(value) {
            err.raise();
        }
    }

    /// Prepends an element to the front.
    ///
    /// # Panics
    ///
    /// Same as [`Deque::push_back`].
    pub fn push_front(&mut self, value: T) {
        if let Err(err) = self.try_push_front(value) {
            err.raise();
        }
    }

    /// Infallible form of [`Deque::try_emplace_back`].
    pub fn emplace_back<F: FnOnce() -> T>(&mut self, make: F) {
        if let Err(err) = self.try_emplace_back(make) {
            err.raise();
        }
    }

    /// Infallible form of [`Deque::try_emplace_front`].
    pub fn emplace_front<F: FnOnce() -> T>(&mut self, make: F) {
        if let Err(err) = self.try_emplace_front(make) {
            err.raise();
        }
    }

    /// Removes and returns the last element. Block storage is kept for reuse.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        let slot = self.tail();
        // Safe: the slot was the last live one and is no longer counted
        #[allow(unsafe_code)]
        let value = unsafe { self.slot_ptr(slot).read() };
        Some(value)
    }

    /// Removes and returns the first element. Block storage is kept for reuse.
    pub fn pop_front(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let slot = self.head;
        self.head = slot.advance(1, BLOCK);
        self.len -= 1;
        // Safe: the slot was the first live one and is no longer counted
        #[allow(unsafe_code)]
        let value = unsafe { self.slot_ptr(slot).read() };
        Some(value)
    }

    /// Returns the element at `index`, or `None` if out of bounds.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        // Safe: bounds checked above
        #[allow(unsafe_code)]
        let value = unsafe { self.get_unchecked(index) };
        Some(value)
    }

    /// Returns the element at `index` mutably, or `None` if out of bounds.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len {
            return None;
        }
        // Safe: bounds checked above
        #[allow(unsafe_code)]
        let value = unsafe { self.get_unchecked_mut(index) };
        Some(value)
    }

    /// Returns the element at `index`, without bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than `self.len()`.
    #[allow(unsafe_code)]
    #[must_use]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len);
        &*self.slot_ptr(self.position_of(index))
    }

    /// Returns the element at `index` mutably, without bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than `self.len()`.
    #[allow(unsafe_code)]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len);
        &mut *self.slot_ptr(self.position_of(index))
    }

    /// Checked access to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `DequeError::IndexOutOfBounds` if `index >= self.len()`.
    pub fn at(&self, index: usize) -> Result<&T, DequeError> {
        let length = self.len;
        self.get(index)
            .ok_or(DequeError::IndexOutOfBounds { index, length })
    }

    /// Checked mutable access to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `DequeError::IndexOutOfBounds` if `index >= self.len()`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, DequeError> {
        let length = self.len;
        self.get_mut(index)
            .ok_or(DequeError::IndexOutOfBounds { index, length })
    }

    /// First element, or `None` if empty.
    #[must_use]
    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    /// Last element, or `None` if empty.
    #[must_use]
    pub fn back(&self) -> Option<&T> {
        self.len.checked_sub(1).and_then(|last| self.get(last))
    }

    /// First element mutably, or `None` if empty.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.get_mut(0)
    }

    /// Last element mutably, or `None` if empty.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        match self.len.checked_sub(1) {
            Some(last) => self.get_mut(last),
            None => None,
        }
    }

    /// Swaps the elements at `i` and `j`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[allow(unsafe_code)]
    pub fn swap(&mut self, i: usize, j: usize) {
        assert!(
            i < self.len && j < self.len,
            "swap indices {i} and {j} out of bounds for deque of length {}",
            self.len
        );
        let a = self.slot_ptr(self.position_of(i));
        let b = self.slot_ptr(self.position_of(j));
        // Safe: both slots are live; `ptr::swap` allows `a == b`
        unsafe {
            ptr::swap(a, b);
        }
    }

    /// Inserts `value` so that it ends up at `index`, shifting the shorter side.
    ///
    /// # Errors
    ///
    /// Returns `DequeError::IndexOutOfBounds` if `index > self.len()`, or an
    /// allocation error if growth failed. The deque is unchanged on error.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), DequeError> {
        if index > self.len {
            return Err(DequeError::IndexOutOfBounds {
                index,
                length: self.len,
            });
        }

        if index < self.len - index {
            self.try_push_front(value)?;
            for i in 0..index {
                self.swap(i, i + 1);
            }
        } else {
            self.try_push_back(value)?;
            for i in (index..self.len - 1).rev() {
                self.swap(i, i + 1);
            }
        }
        Ok(())
    }

    /// Inserts `value` at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index > self.len()`.
    pub fn insert(&mut self, index: usize, value: T) {
        if let Err(err) = self.try_insert(index, value) {
            err.raise();
        }
    }

    /// Removes the element at `index`, closing the gap from the shorter side.
    ///
    /// # Errors
    ///
    /// Returns `DequeError::IndexOutOfBounds` if `index >= self.len()`.
    pub fn try_remove(&mut self, index: usize) -> Result<T, DequeError> {
        let length = self.len;
        self.remove(index)
            .ok_or(DequeError::IndexOutOfBounds { index, length })
    }

    /// Removes and returns the element at `index`, or `None` if out of bounds.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }

        if index < self.len - 1 - index {
            for i in (0..index).rev() {
                self.swap(i, i + 1);
            }
            self.pop_front()
        } else {
            for i in index..self.len - 1 {
                self.swap(i, i + 1);
            }
            self.pop_back()
        }
    }

    /// Drops every element. Block storage is kept for reuse.
    pub fn clear(&mut self) {
        let mut pos = self.head;
        let mut remaining = self.len;
        // A panicking destructor leaks the rest instead of dropping twice
        self.len = 0;
        while remaining > 0 {
            let run = remaining.min(BLOCK - pos.offset);
            let first = self.slot_ptr(pos);
            // Safe: `run` live slots start at `pos` inside a single block
            #[allow(unsafe_code)]
            unsafe {
                ptr::drop_in_place(ptr::slice_from_raw_parts_mut(first, run));
            }
            remaining -= run;
            pos = Position::new(pos.block + 1, 0);
        }
    }

    /// Returns `true` if some element equals `value`.
    #[must_use]
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|item| item == value)
    }

    /// Returns an iterator over the elements, front to back.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T, BLOCK> {
        Iter::new(&self.blocks, self.head, self.len)
    }

    /// Returns an iterator over the elements, back to front.
    #[must_use]
    pub fn iter_rev(&self) -> core::iter::Rev<Iter<'_, T, BLOCK>> {
        self.iter().rev()
    }

    /// Returns an iterator over mutable references, front to back.
    pub fn iter_mut(&mut self) -> IterMut<'_, T, BLOCK> {
        IterMut::new(&self.blocks, self.head, self.len)
    }

    /// Cursor at the first element.
    #[must_use]
    pub fn begin(&self) -> Cursor<'_, T, BLOCK> {
        Cursor::new(self, self.head)
    }

    /// Cursor one past the last element.
    #[must_use]
    pub fn end(&self) -> Cursor<'_, T, BLOCK> {
        Cursor::new(self, self.tail())
    }

    /// Cursor at logical `index`; `index == len` gives [`Deque::end`].
    #[must_use]
    pub fn cursor_at(&self, index: usize) -> Option<Cursor<'_, T, BLOCK>> {
        (index <= self.len).then(|| Cursor::new(self, self.position_of(index)))
    }

    /// Mutable cursor at the first element.
    pub fn begin_mut(&mut self) -> CursorMut<'_, T, BLOCK> {
        let head = self.head;
        CursorMut::new(self, head)
    }

    /// Mutable cursor one past the last element.
    pub fn end_mut(&mut self) -> CursorMut<'_, T, BLOCK> {
        let tail = self.tail();
        CursorMut::new(self, tail)
    }

    /// Mutable cursor at logical `index`; `index == len` gives [`Deque::end_mut`].
    pub fn cursor_at_mut(&mut self, index: usize) -> Option<CursorMut<'_, T, BLOCK>> {
        if index > self.len {
            return None;
        }
        let position = self.position_of(index);
        Some(CursorMut::new(self, position))
    }

    /// Reverse cursor at the last element.
    #[must_use]
    pub fn rev_begin(&self) -> RevCursor<'_, T, BLOCK> {
        RevCursor::new(self.end())
    }

    /// Reverse cursor one before the first element.
    #[must_use]
    pub fn rev_end(&self) -> RevCursor<'_, T, BLOCK> {
        RevCursor::new(self.begin())
    }
}

impl<T, const BLOCK: usize> Drop for Deque<T, BLOCK> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T, const BLOCK: usize> Default for Deque<T, BLOCK> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, const BLOCK: usize> Clone for Deque<T, BLOCK> {
    fn clone(&self) -> Self {
        let mut copy = Self::new();
        copy.reserve(self.len);
        for value in self {
            copy.push_back(value.clone());
        }
        copy
    }

    /// Copy-and-swap: `self` is only touched once the copy is complete.
    fn clone_from(&mut self, source: &Self) {
        let mut copy = source.clone();
        mem::swap(self, &mut copy);
    }
}

impl<T, const BLOCK: usize> Index<usize> for Deque<T, BLOCK> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        let length = self.len;
        match self.get(index) {
            Some(value) => value,
            None => panic!("index {index} out of bounds for deque of length {length}"),
        }
    }
}

impl<T, const BLOCK: usize> IndexMut<usize> for Deque<T, BLOCK> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        let length = self.len;
        match self.get_mut(index) {
            Some(value) => value,
            None => panic!("index {index} out of bounds for deque of length {length}"),
        }
    }
}

impl<T: fmt::Debug, const BLOCK: usize> fmt::Debug for Deque<T, BLOCK> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq, const BLOCK: usize> PartialEq for Deque<T, BLOCK> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq, const BLOCK: usize> Eq for Deque<T, BLOCK> {}

impl<T: PartialOrd, const BLOCK: usize> PartialOrd for Deque<T, BLOCK> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord, const BLOCK: usize> Ord for Deque<T, BLOCK> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: Hash, const BLOCK: usize> Hash for Deque<T, BLOCK> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len);
        for value in self {
            value.hash(state);
        }
    }
}

impl<T, const BLOCK: usize> Extend<T> for Deque<T, BLOCK> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<'a, T: Copy + 'a, const BLOCK: usize> Extend<&'a T> for Deque<T, BLOCK> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T, const BLOCK: usize> FromIterator<T> for Deque<T, BLOCK> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = Self::new();
        deque.extend(iter);
        deque
    }
}

impl<T, const BLOCK: usize, const N: usize> From<[T; N]> for Deque<T, BLOCK> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T, const BLOCK: usize> From<Vec<T>> for Deque<T, BLOCK> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<'a, T, const BLOCK: usize> IntoIterator for &'a Deque<T, BLOCK> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, BLOCK>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, const BLOCK: usize> IntoIterator for &'a mut Deque<T, BLOCK> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T, BLOCK>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T, const BLOCK: usize> IntoIterator for Deque<T, BLOCK> {
    type Item = T;
    type IntoIter = IntoIter<T, BLOCK>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}
