//! Main Memory.
//!
//! The machine has a flat 256-byte address space. Addresses are `u8`, so every
//! address is valid and no access can fault; stack bounds are enforced by the
//! CPU, not here.

use super::constants::MEMORY_SIZE;

/// Byte-addressable RAM covering the whole 8-bit address space.
#[derive(Clone, PartialEq, Eq)]
pub struct Memory {
    cells: [u8; MEMORY_SIZE],
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Memory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let used = self.cells.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
        f.debug_struct("Memory")
            .field("size", &MEMORY_SIZE)
            .field("used", &used)
            .finish()
    }
}

impl Memory {
    /// Creates zero-filled memory.
    pub const fn new() -> Self {
        Self {
            cells: [0; MEMORY_SIZE],
        }
    }

    /// Reads the byte at `addr`.
    #[inline]
    pub const fn read(&self, addr: u8) -> u8 {
        self.cells[addr as usize]
    }

    /// Writes `val` to `addr`.
    #[inline]
    pub const fn write(&mut self, addr: u8, val: u8) {
        self.cells[addr as usize] = val;
    }

    /// Copies `data` into memory starting at address 0.
    ///
    /// Returns `false` without writing anything if `data` is longer than memory.
    pub fn load_at_zero(&mut self, data: &[u8]) -> bool {
        match self.cells.get_mut(..data.len()) {
            Some(dst) => {
                dst.copy_from_slice(data);
                true
            }
            None => false,
        }
    }

    /// Zeroes every cell.
    pub fn clear(&mut self) {
        self.cells.fill(0);
    }

    /// Returns the whole address space as a slice.
    pub fn as_slice(&self) -> &[u8] {
        &self.cells
    }
}
