//! The wraparound memory tape.

/// Number of cells on the tape. The cell pointer wraps at this bound.
pub const TAPE_LEN: usize = 30_000;

/// A fixed ring of zero-initialized byte cells with a single data pointer.
///
/// Moving past either end wraps around, and cell arithmetic wraps modulo 256,
/// so the pointer is always in `[0, TAPE_LEN)` and every cell is a valid byte.
#[derive(Debug, Clone)]
pub struct Tape {
    cells: Box<[u8]>,
    pointer: usize,
}

impl Default for Tape {
    fn default() -> Self {
        Self::new()
    }
}

impl Tape {
    pub fn new() -> Self {
        Self {
            cells: vec![0; TAPE_LEN].into_boxed_slice(),
            pointer: 0,
        }
    }

    pub fn pointer(&self) -> usize {
        self.pointer
    }

    /// Value of the cell under the pointer.
    pub fn current(&self) -> u8 {
        self.cells[self.pointer]
    }

    pub fn set_current(&mut self, value: u8) {
        self.cells[self.pointer] = value;
    }

    /// Value of an arbitrary cell. The index wraps like the pointer does.
    pub fn get(&self, index: usize) -> u8 {
        self.cells[index % TAPE_LEN]
    }

    pub fn increment(&mut self) {
        self.cells[self.pointer] = self.cells[self.pointer].wrapping_add(1);
    }

    pub fn decrement(&mut self) {
        self.cells[self.pointer] = self.cells[self.pointer].wrapping_sub(1);
    }

    pub fn move_right(&mut self) {
        self.pointer = (self.pointer + 1) % TAPE_LEN;
    }

    pub fn move_left(&mut self) {
        self.pointer = (self.pointer + TAPE_LEN - 1) % TAPE_LEN;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_tape_reads_zero_everywhere() {
        let tape = Tape::new();
        assert_eq!(tape.pointer(), 0);
        assert_eq!(tape.current(), 0);
        assert_eq!(tape.get(TAPE_LEN - 1), 0);
    }

    #[test]
    fn wrapping_addition() {
        let mut tape = Tape::new();
        for _ in 0..256 {
            tape.increment();
        }
        assert_eq!(tape.current(), 0);
    }

    #[test]
    fn wrapping_subtraction() {
        let mut tape = Tape::new();
        tape.decrement();
        assert_eq!(tape.current(), 255);
    }

    #[test]
    fn pointer_wraps_both_ways() {
        let mut tape = Tape::new();
        tape.move_left();
        assert_eq!(tape.pointer(), TAPE_LEN - 1);
        tape.move_right();
        assert_eq!(tape.pointer(), 0);
    }

    #[test]
    fn cells_are_independent() {
        let mut tape = Tape::new();
        tape.increment();
        tape.move_right();
        tape.set_current(42);
        assert_eq!(tape.get(0), 1);
        assert_eq!(tape.get(1), 42);
        assert_eq!(tape.get(TAPE_LEN + 1), 42);
    }
}
