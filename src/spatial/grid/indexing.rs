use super::*;

impl Grid {
    // === Dimensions ===
    #[inline]
    pub fn size(&self) -> u32 { self.size }

    /// Total cell count (`size * size`)
    #[inline]
    pub fn len(&self) -> usize { self.len }

    #[inline]
    pub fn is_empty(&self) -> bool { self.len == 0 }

    // === Index conversion ===
    #[inline]
    pub fn index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.size as usize) + (x as usize)
    }

    #[inline]
    pub fn coords(&self, idx: usize) -> (u32, u32) {
        let size = self.size as usize;
        ((idx % size) as u32, (idx / size) as u32)
    }

    // === Bounds checking ===
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && (x as i64) < self.size as i64 && y >= 0 && (y as i64) < self.size as i64
    }

    /// Bounds-checked index, `OutOfBounds` otherwise
    #[inline]
    pub fn checked_index(&self, x: i32, y: i32) -> EngineResult<usize> {
        if !self.in_bounds(x, y) {
            return Err(EngineError::OutOfBounds { x, y, size: self.size });
        }
        Ok(self.index(x as u32, y as u32))
    }
}
