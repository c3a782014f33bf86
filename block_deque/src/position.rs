/// Coordinate of a slot in the block directory.
///
/// `block` indexes the directory and `offset` is the slot inside that block,
/// always less than the block capacity. Ordering is lexicographic, which is the
/// logical order of slots across blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    /// Index of the block in the directory
    pub block: usize,
    /// Offset of the slot inside the block
    pub offset: usize,
}

impl Position {
    /// Creates a position from a directory index and an in-block offset.
    ///
    /// `offset` is expected to be less than the block size of the deque the
    /// position is used with.
    #[must_use]
    pub const fn new(block: usize, offset: usize) -> Self {
        Self { block, offset }
    }

    /// The position `n` slots after this one.
    #[must_use]
    pub(crate) const fn advance(self, n: usize, block_size: usize) -> Self {
        let offset = self.offset + n;
        Self {
            block: self.block + offset / block_size,
            offset: offset % block_size,
        }
    }

    /// The position `n` slots before this one.
    ///
    /// The caller guarantees that the result does not precede block 0.
    #[must_use]
    pub(crate) const fn retreat(self, n: usize, block_size: usize) -> Self {
        if n <= self.offset {
            return Self {
                block: self.block,
                offset: self.offset - n,
            };
        }
        // Slots still to cover once the start of the current block is passed
        let beyond = n - self.offset - 1;
        Self {
            block: self.block - 1 - beyond / block_size,
            offset: block_size - 1 - beyond % block_size,
        }
    }

    /// Moves by a signed amount, returning `None` before block 0 or past the
    /// last slot whose index still fits in `isize`.
    #[must_use]
    pub(crate) fn checked_offset(self, delta: isize, block_size: usize) -> Option<Self> {
        if delta >= 0 {
            self.checked_forward(delta.unsigned_abs(), block_size)
        } else {
            self.checked_back(delta.unsigned_abs(), block_size)
        }
    }

    /// Moves by `-delta` without negating `delta`, so `isize::MIN` is accepted.
    #[must_use]
    pub(crate) fn checked_offset_back(self, delta: isize, block_size: usize) -> Option<Self> {
        if delta >= 0 {
            self.checked_back(delta.unsigned_abs(), block_size)
        } else {
            self.checked_forward(delta.unsigned_abs(), block_size)
        }
    }

    fn checked_forward(self, steps: usize, block_size: usize) -> Option<Self> {
        let offset = self.offset.checked_add(steps)?;
        let moved = Self {
            block: self.block.checked_add(offset / block_size)?,
            offset: offset % block_size,
        };
        // Distances between slots must stay representable as `isize`
        let slot = moved.block.checked_mul(block_size)?.checked_add(moved.offset)?;
        (slot <= isize::MAX.unsigned_abs()).then_some(moved)
    }

    fn checked_back(self, steps: usize, block_size: usize) -> Option<Self> {
        let available = self
            .block
            .checked_mul(block_size)
            .and_then(|slots| slots.checked_add(self.offset))?;
        (steps <= available).then(|| self.retreat(steps, block_size))
    }

    /// Signed logical distance `self - origin`, counted in slots.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub(crate) const fn distance(self, origin: Self, block_size: usize) -> isize {
        let blocks = self.block as isize - origin.block as isize;
        let offsets = self.offset as isize - origin.offset as isize;
        blocks * block_size as isize + offsets
    }
}
