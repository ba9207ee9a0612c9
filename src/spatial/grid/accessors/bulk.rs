use super::super::*;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

impl Grid {
    /// Overwrite every cell
    pub fn fill(&mut self, color: Color) {
        let packed = color.to_abgr();
        #[cfg(feature = "parallel")]
        {
            self.colors.par_iter_mut().for_each(|c| *c = packed);
        }
        #[cfg(not(feature = "parallel"))]
        {
            self.colors.fill(packed);
        }
    }

    /// Row slices, top to bottom
    pub fn rows(&self) -> std::slice::ChunksExact<'_, u32> {
        self.colors.chunks_exact(self.size as usize)
    }

    /// Row-major RGBA bytes, 4 per cell
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.len * 4);
        for &c in self.colors.iter() {
            out.extend_from_slice(&c.to_le_bytes());
        }
        out
    }
}
