use core::cmp::Ordering;
use core::ops::{Add, AddAssign, Sub, SubAssign};

use crate::deque::Deque;
use crate::position::Position;

/// A random-access position inside a `Deque`
///
/// A cursor is a block coordinate plus a borrow of the deque. Arithmetic works
/// on the coordinate alone, so stepping across a block boundary re-derives the
/// slot from the next block instead of assuming contiguous memory. A cursor may
/// point outside the live elements (for example [`Deque::end`]); dereferencing
/// it then yields `None`.
///
/// Comparisons and distances are only meaningful between cursors of the same deque.
pub struct Cursor<'a, T, const BLOCK: usize> {
    deque: &'a Deque<T, BLOCK>,
    position: Position,
}

impl<'a, T, const BLOCK: usize> Cursor<'a, T, BLOCK> {
    pub(crate) fn new(deque: &'a Deque<T, BLOCK>, position: Position) -> Self {
        Self { deque, position }
    }

    /// Block coordinate the cursor points at.
    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Signed logical index relative to the first element.
    #[must_use]
    pub fn index(&self) -> isize {
        self.position.distance(self.deque.head, BLOCK)
    }

    /// The element under the cursor, or `None` outside the live elements.
    #[must_use]
    pub fn get(&self) -> Option<&'a T> {
        let index = usize::try_from(self.index()).ok()?;
        if index >= self.deque.len {
            return None;
        }
        // Safe: the position lies inside the live span of a shared-borrowed deque
        #[allow(unsafe_code)]
        let value = unsafe { &*self.deque.slot_ptr(self.position) };
        Some(value)
    }

    /// Moves the cursor by `delta` slots, or returns `None` if that would
    /// leave the block directory's address range.
    #[must_use]
    pub fn checked_offset(self, delta: isize) -> Option<Self> {
        let position = self.position.checked_offset(delta, BLOCK)?;
        Some(Self {
            deque: self.deque,
            position,
        })
    }

    /// Steps to the next slot.
    pub fn move_next(&mut self) {
        *self += 1;
    }

    /// Steps to the previous slot.
    pub fn move_prev(&mut self) {
        *self -= 1;
    }
}

impl<T, const BLOCK: usize> Clone for Cursor<'_, T, BLOCK> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, const BLOCK: usize> Copy for Cursor<'_, T, BLOCK> {}

impl<T, const BLOCK: usize> core::fmt::Debug for Cursor<'_, T, BLOCK> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Cursor")
            .field("position", &self.position)
            .field("index", &self.index())
            .finish()
    }
}

impl<T, const BLOCK: usize> Add<isize> for Cursor<'_, T, BLOCK> {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if the result would precede the first block of the directory.
    fn add(self, delta: isize) -> Self {
        match self.checked_offset(delta) {
            Some(cursor) => cursor,
            None => panic!("cursor offset {delta} leaves the block directory"),
        }
    }
}

impl<T, const BLOCK: usize> Sub<isize> for Cursor<'_, T, BLOCK> {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if the result would precede the first block of the directory.
    fn sub(self, delta: isize) -> Self {
        match self.position.checked_offset_back(delta, BLOCK) {
            Some(position) => Self {
                deque: self.deque,
                position,
            },
            None => panic!("cursor offset back by {delta} leaves the block directory"),
        }
    }
}

impl<T, const BLOCK: usize> AddAssign<isize> for Cursor<'_, T, BLOCK> {
    fn add_assign(&mut self, delta: isize) {
        *self = *self + delta;
    }
}

impl<T, const BLOCK: usize> SubAssign<isize> for Cursor<'_, T, BLOCK> {
    fn sub_assign(&mut self, delta: isize) {
        *self = *self - delta;
    }
}

impl<T, const BLOCK: usize> Sub for Cursor<'_, T, BLOCK> {
    type Output = isize;

    /// Logical distance between two cursors, from block coordinates only.
    fn sub(self, origin: Self) -> isize {
        self.position.distance(origin.position, BLOCK)
    }
}

impl<T, const BLOCK: usize> PartialEq for Cursor<'_, T, BLOCK> {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position
    }
}

impl<T, const BLOCK: usize> Eq for Cursor<'_, T, BLOCK> {}

impl<T, const BLOCK: usize> PartialOrd for Cursor<'_, T, BLOCK> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T, const BLOCK: usize> Ord for Cursor<'_, T, BLOCK> {
    fn cmp(&self, other: &Self) -> Ordering {
        (*self - *other).cmp(&0)
    }
}

/// A cursor walking a `Deque` from back to front
///
/// Wraps a forward cursor one slot past the element it designates, so
/// [`Deque::rev_begin`] wraps [`Deque::end`]. Every step and offset is the
/// negation of the forward one.
pub struct RevCursor<'a, T, const BLOCK: usize> {
    base: Cursor<'a, T, BLOCK>,
}

impl<'a, T, const BLOCK: usize> RevCursor<'a, T, BLOCK> {
    /// Wraps `base`; the reverse cursor designates the element before it.
    #[must_use]
    pub fn new(base: Cursor<'a, T, BLOCK>) -> Self {
        Self { base }
    }

    /// The forward cursor one slot after the designated element.
    #[must_use]
    pub fn base(&self) -> Cursor<'a, T, BLOCK> {
        self.base
    }

    /// The element under the cursor, or `None` outside the live elements.
    #[must_use]
    pub fn get(&self) -> Option<&'a T> {
        self.base.checked_offset(-1)?.get()
    }

    /// Steps towards the front of the deque.
    pub fn move_next(&mut self) {
        self.base -= 1;
    }

    /// Steps towards the back of the deque.
    pub fn move_prev(&mut self) {
        self.base += 1;
    }
}

impl<T, const BLOCK: usize> Clone for RevCursor<'_, T, BLOCK> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, const BLOCK: usize> Copy for RevCursor<'_, T, BLOCK> {}

impl<T, const BLOCK: usize> core::fmt::Debug for RevCursor<'_, T, BLOCK> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RevCursor").field("base", &self.base).finish()
    }
}

impl<T, const BLOCK: usize> Add<isize> for RevCursor<'_, T, BLOCK> {
    type Output = Self;

    fn add(self, delta: isize) -> Self {
        Self {
            base: self.base - delta,
        }
    }
}

impl<T, const BLOCK: usize> Sub<isize> for RevCursor<'_, T, BLOCK> {
    type Output = Self;

    fn sub(self, delta: isize) -> Self {
        Self {
            base: self.base + delta,
        }
    }
}

impl<T, const BLOCK: usize> AddAssign<isize> for RevCursor<'_, T, BLOCK> {
    fn add_assign(&mut self, delta: isize) {
        self.base -= delta;
    }
}

impl<T, const BLOCK: usize> SubAssign<isize> for RevCursor<'_, T, BLOCK> {
    fn sub_assign(&mut self, delta: isize) {
        self.base += delta;
    }
}

impl<T, const BLOCK: usize> Sub for RevCursor<'_, T, BLOCK> {
    type Output = isize;

    fn sub(self, origin: Self) -> isize {
        origin.base - self.base
    }
}

impl<T, const BLOCK: usize> PartialEq for RevCursor<'_, T, BLOCK> {
    fn eq(&self, other: &Self) -> bool {
        self.base == other.base
    }
}

impl<T, const BLOCK: usize> Eq for RevCursor<'_, T, BLOCK> {}

impl<T, const BLOCK: usize> PartialOrd for RevCursor<'_, T, BLOCK> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T, const BLOCK: usize> Ord for RevCursor<'_, T, BLOCK> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.base.cmp(&self.base)
    }
}

/// A random-access position that can modify the element under it
///
/// Holds the deque mutably for `'a`, so only one exists at a time. The
/// arithmetic matches [`Cursor`]. Distances and comparisons go through
/// [`CursorMut::as_cursor`].
pub struct CursorMut<'a, T, const BLOCK: usize> {
    deque: &'a mut Deque<T, BLOCK>,
    position: Position,
}

impl<'a, T, const BLOCK: usize> CursorMut<'a, T, BLOCK> {
    pub(crate) fn new(deque: &'a mut Deque<T, BLOCK>, position: Position) -> Self {
        Self { deque, position }
    }

    /// Block coordinate the cursor points at.
    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Signed logical index relative to the first element.
    #[must_use]
    pub fn index(&self) -> isize {
        self.position.distance(self.deque.head, BLOCK)
    }

    /// A shared cursor at the same position, borrowed from this one.
    #[must_use]
    pub fn as_cursor(&self) -> Cursor<'_, T, BLOCK> {
        Cursor::new(&*self.deque, self.position)
    }

    fn is_live(&self) -> bool {
        usize::try_from(self.index()).is_ok_and(|index| index < self.deque.len)
    }

    /// The element under the cursor, or `None` outside the live elements.
    #[must_use]
    pub fn get(&self) -> Option<&T> {
        if !self.is_live() {
            return None;
        }
        // Safe: the position lies inside the live span
        #[allow(unsafe_code)]
        let value = unsafe { &*self.deque.slot_ptr(self.position) };
        Some(value)
    }

    /// The element under the cursor, mutably, or `None` outside the live elements.
    pub fn get_mut(&mut self) -> Option<&mut T> {
        if !self.is_live() {
            return None;
        }
        // Safe: the position is live and the deque is borrowed mutably through `self`
        #[allow(unsafe_code)]
        let value = unsafe { &mut *self.deque.slot_ptr(self.position) };
        Some(value)
    }

    /// Moves by `delta` slots. Returns `false` and stays put if that would
    /// leave the block directory's address range.
    pub fn try_offset(&mut self, delta: isize) -> bool {
        match self.position.checked_offset(delta, BLOCK) {
            Some(position) => {
                self.position = position;
                true
            }
            None => false,
        }
    }

    /// Steps to the next slot.
    pub fn move_next(&mut self) {
        *self += 1;
    }

    /// Steps to the previous slot.
    pub fn move_prev(&mut self) {
        *self -= 1;
    }
}

impl<T, const BLOCK: usize> core::fmt::Debug for CursorMut<'_, T, BLOCK> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CursorMut")
            .field("position", &self.position)
            .field("index", &self.index())
            .finish()
    }
}

impl<T, const BLOCK: usize> AddAssign<isize> for CursorMut<'_, T, BLOCK> {
    /// # Panics
    ///
    /// Panics if the result would precede the first block of the directory.
    fn add_assign(&mut self, delta: isize) {
        match self.position.checked_offset(delta, BLOCK) {
            Some(position) => self.position = position,
            None => panic!("cursor offset {delta} leaves the block directory"),
        }
    }
}

impl<T, const BLOCK: usize> SubAssign<isize> for CursorMut<'_, T, BLOCK> {
    fn sub_assign(&mut self, delta: isize) {
        match self.position.checked_offset_back(delta, BLOCK) {
            Some(position) => self.position = position,
            None => panic!("cursor offset back by {delta} leaves the block directory"),
        }
    }
}

impl<T, const BLOCK: usize> Add<isize> for CursorMut<'_, T, BLOCK> {
    type Output = Self;

    fn add(mut self, delta: isize) -> Self {
        self += delta;
        self
    }
}

impl<T, const BLOCK: usize> Sub<isize> for CursorMut<'_, T, BLOCK> {
    type Output = Self;

    fn sub(mut self, delta: isize) -> Self {
        self -= delta;
        self
    }
}
