use super::super::*;

impl Grid {
    // === Color access ===
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> EngineResult<Color> {
        let idx = self.checked_index(x, y)?;
        Ok(Color::from_abgr(self.colors[idx]))
    }

    #[inline]
    pub fn set(&mut self, x: i32, y: i32, color: Color) -> EngineResult<()> {
        let idx = self.checked_index(x, y)?;
        self.colors[idx] = color.to_abgr();
        Ok(())
    }

    /// Clipping write for bulk tools: returns false (and writes nothing)
    /// when the cell is outside the grid.
    #[inline]
    pub fn put(&mut self, x: i32, y: i32, packed: u32) -> bool {
        if !self.in_bounds(x, y) {
            return false;
        }
        let idx = self.index(x as u32, y as u32);
        self.colors[idx] = packed;
        true
    }
}
