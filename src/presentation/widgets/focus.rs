//! Keyboard focus cycling.

/// Index of the focused control among `len` controls, wrapping at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusRing {
    index: usize,
    len: usize,
}

impl FocusRing {
    /// Creates a ring over `len` controls with the first one focused.
    #[must_use]
    pub const fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    /// Returns the focused index.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Number of controls.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if there are no controls.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if `index` is focused.
    #[must_use]
    pub const fn is_focused(&self, index: usize) -> bool {
        self.len > 0 && self.index == index
    }

    /// Focuses the next control.
    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    /// Focuses the previous control.
    pub fn previous(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// Focuses `index`; out of range is ignored.
    pub fn focus(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }

    /// Focuses the first control.
    pub fn reset(&mut self) {
        self.index = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0, true, 1 ; "next_from_first")]
    #[test_case(2, true, 0 ; "next_wraps")]
    #[test_case(0, false, 2 ; "previous_wraps")]
    #[test_case(2, false, 1 ; "previous_from_last")]
    fn test_cycle(start: usize, forward: bool, expected: usize) {
        let mut ring = FocusRing::new(3);
        ring.focus(start);
        if forward {
            ring.next();
        } else {
            ring.previous();
        }
        assert_eq!(ring.index(), expected);
    }

    #[test]
    fn test_empty_ring_is_inert() {
        let mut ring = FocusRing::new(0);
        ring.next();
        ring.previous();
        assert_eq!(ring.index(), 0);
        assert!(!ring.is_focused(0));
    }

    #[test]
    fn test_focus_out_of_range_ignored() {
        let mut ring = FocusRing::new(2);
        ring.focus(5);
        assert_eq!(ring.index(), 0);
    }
}
