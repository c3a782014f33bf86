use core::iter::FusedIterator;
use core::marker::PhantomData;

use crate::block::Block;
use crate::deque::Deque;
use crate::position::Position;

/// Iterator over references to the elements of a `Deque`
///
/// Both ends are tracked as block coordinates, so `nth` and `nth_back` jump
/// across blocks in constant time.
pub struct Iter<'a, T, const BLOCK: usize> {
    blocks: &'a [Block<T, BLOCK>],
    front: Position,
    back: Position,
    remaining: usize,
}

impl<'a, T, const BLOCK: usize> Iter<'a, T, BLOCK> {
    pub(crate) fn new(blocks: &'a [Block<T, BLOCK>], head: Position, len: usize) -> Self {
        Self {
            blocks,
            front: head,
            back: head.advance(len, BLOCK),
            remaining: len,
        }
    }

    fn element(&self, pos: Position) -> &'a T {
        // Safe: only positions inside the live span are dereferenced, and the
        // shared borrow of the deque keeps them alive for 'a
        #[allow(unsafe_code)]
        let value = unsafe { &*self.blocks[pos.block].slot(pos.offset) };
        value
    }
}

impl<T, const BLOCK: usize> Clone for Iter<'_, T, BLOCK> {
    fn clone(&self) -> Self {
        Self {
            blocks: self.blocks,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<'a, T, const BLOCK: usize> Iterator for Iter<'a, T, BLOCK> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let pos = self.front;
        self.front = pos.advance(1, BLOCK);
        self.remaining -= 1;
        Some(self.element(pos))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        if n >= self.remaining {
            self.front = self.back;
            self.remaining = 0;
            return None;
        }
        self.front = self.front.advance(n, BLOCK);
        self.remaining -= n;
        self.next()
    }

    fn last(mut self) -> Option<Self::Item> {
        self.next_back()
    }

    fn count(self) -> usize {
        self.remaining
    }
}

impl<T, const BLOCK: usize> DoubleEndedIterator for Iter<'_, T, BLOCK> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.back = self.back.retreat(1, BLOCK);
        self.remaining -= 1;
        Some(self.element(self.back))
    }

    fn nth_back(&mut self, n: usize) -> Option<Self::Item> {
        if n >= self.remaining {
            self.back = self.front;
            self.remaining = 0;
            return None;
        }
        self.back = self.back.retreat(n, BLOCK);
        self.remaining -= n;
        self.next_back()
    }
}

impl<T, const BLOCK: usize> ExactSizeIterator for Iter<'_, T, BLOCK> {}

impl<T, const BLOCK: usize> FusedIterator for Iter<'_, T, BLOCK> {}

/// Iterator over mutable references to the elements of a `Deque`
pub struct IterMut<'a, T, const BLOCK: usize> {
    blocks: &'a [Block<T, BLOCK>],
    front: Position,
    back: Position,
    remaining: usize,
    _marker: PhantomData<&'a mut T>,
}

impl<'a, T, const BLOCK: usize> IterMut<'a, T, BLOCK> {
    /// `blocks` must come from a mutable borrow of the deque held for 'a.
    pub(crate) fn new(blocks: &'a [Block<T, BLOCK>], head: Position, len: usize) -> Self {
        Self {
            blocks,
            front: head,
            back: head.advance(len, BLOCK),
            remaining: len,
            _marker: PhantomData,
        }
    }

    fn element(&mut self, pos: Position) -> &'a mut T {
        // Safe: the deque is mutably borrowed for 'a and every live position is
        // yielded at most once, so the returned references never alias
        #[allow(unsafe_code)]
        let value = unsafe { &mut *self.blocks[pos.block].slot(pos.offset) };
        value
    }
}

impl<'a, T, const BLOCK: usize> Iterator for IterMut<'a, T, BLOCK> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let pos = self.front;
        self.front = pos.advance(1, BLOCK);
        self.remaining -= 1;
        Some(self.element(pos))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        if n >= self.remaining {
            self.front = self.back;
            self.remaining = 0;
            return None;
        }
        self.front = self.front.advance(n, BLOCK);
        self.remaining -= n;
        self.next()
    }
}

impl<T, const BLOCK: usize> DoubleEndedIterator for IterMut<'_, T, BLOCK> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.back = self.back.retreat(1, BLOCK);
        self.remaining -= 1;
        let pos = self.back;
        Some(self.element(pos))
    }

    fn nth_back(&mut self, n: usize) -> Option<Self::Item> {
        if n >= self.remaining {
            self.back = self.front;
            self.remaining = 0;
            return None;
        }
        self.back = self.back.retreat(n, BLOCK);
        self.remaining -= n;
        self.next_back()
    }
}

impl<T, const BLOCK: usize> ExactSizeIterator for IterMut<'_, T, BLOCK> {}

impl<T, const BLOCK: usize> FusedIterator for IterMut<'_, T, BLOCK> {}

/// Consuming iterator for `Deque`
///
/// Elements not yielded are dropped together with the iterator. Skipping with
/// `nth` drops each skipped element, so it is linear in `n`.
pub struct IntoIter<T, const BLOCK: usize> {
    deque: Deque<T, BLOCK>,
}

impl<T, const BLOCK: usize> IntoIter<T, BLOCK> {
    pub(crate) fn new(deque: Deque<T, BLOCK>) -> Self {
        Self { deque }
    }
}

impl<T, const BLOCK: usize> Iterator for IntoIter<T, BLOCK> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.deque.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.deque.len();
        (len, Some(len))
    }
}

impl<T, const BLOCK: usize> DoubleEndedIterator for IntoIter<T, BLOCK> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.deque.pop_back()
    }
}

impl<T, const BLOCK: usize> ExactSizeIterator for IntoIter<T, BLOCK> {}

impl<T, const BLOCK: usize> FusedIterator for IntoIter<T, BLOCK> {}
