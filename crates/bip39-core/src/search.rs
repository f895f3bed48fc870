//! Externally driven binary search over the word indices.
//!
//! Supports "is your word before or after X?" interfaces: the caller shows
//! the word at `mid`, the user picks a side, and the range halves until a
//! single word is left. The cursor performs no lookups of its own.

use crate::policy::WORD_COUNT;

/// Bounds of an in-progress word search: `lo <= mid < hi` while searching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchCursor {
    lo: u16,
    mid: u16,
    hi: u16,
}

impl SearchCursor {
    /// A cursor spanning the whole table.
    pub fn start() -> Self {
        let hi = WORD_COUNT as u16;
        SearchCursor { lo: 0, mid: hi / 2, hi }
    }

    /// The word is before `mid`.
    pub fn choose_low(&mut self) {
        self.hi = self.mid;
        self.mid = midpoint(self.lo, self.hi);
    }

    /// The word is at or after `mid`.
    pub fn choose_high(&mut self) {
        self.lo = self.mid;
        self.mid = midpoint(self.lo, self.hi);
    }

    /// Only one candidate is left.
    pub fn is_done(&self) -> bool {
        self.lo == self.mid
    }

    /// The resolved word once [`is_done`](Self::is_done) holds.
    pub fn selected(&self) -> u16 {
        self.lo
    }

    pub fn lo(&self) -> u16 {
        self.lo
    }

    pub fn mid(&self) -> u16 {
        self.mid
    }

    pub fn hi(&self) -> u16 {
        self.hi
    }
}

fn midpoint(lo: u16, hi: u16) -> u16 {
    ((lo as u32 + hi as u32) / 2) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Answer the cursor's questions for a target word.
    fn find(target: u16) -> (u16, usize) {
        let mut cursor = SearchCursor::start();
        let mut steps = 0;
        while !cursor.is_done() {
            if target < cursor.mid() {
                cursor.choose_low();
            } else {
                cursor.choose_high();
            }
            steps += 1;
        }
        (cursor.selected(), steps)
    }

    #[test]
    fn test_start() {
        let cursor = SearchCursor::start();
        assert_eq!((cursor.lo(), cursor.mid(), cursor.hi()), (0, 1024, 2048));
        assert!(!cursor.is_done());
    }

    #[test]
    fn test_finds_every_word_in_eleven_steps() {
        for target in 0..WORD_COUNT as u16 {
            assert_eq!(find(target), (target, 11), "target {}", target);
        }
    }

    #[test]
    fn test_transitions() {
        let mut cursor = SearchCursor::start();
        cursor.choose_low();
        assert_eq!((cursor.lo(), cursor.mid(), cursor.hi()), (0, 512, 1024));
        cursor.choose_high();
        assert_eq!((cursor.lo(), cursor.mid(), cursor.hi()), (512, 768, 1024));
    }

    #[test]
    fn test_done_cursor_is_stable() {
        let mut cursor = SearchCursor::default();
        assert!(cursor.is_done());
        cursor.choose_low();
        cursor.choose_high();
        assert!(cursor.is_done());
        assert_eq!(cursor.selected(), 0);
    }
}
