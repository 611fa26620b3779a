//! Cursor over a vertical list of rows.

/// Focus position of a list widget. Primitive moves report whether the
/// cursor moved so that a move at the boundary can be passed upward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListCursor {
    position: usize,
}

impl ListCursor {
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn down(&mut self, len: usize) -> bool {
        if self.position + 1 < len {
            self.position += 1;
            true
        } else {
            false
        }
    }

    pub fn up(&mut self) -> bool {
        if self.position > 0 {
            self.position -= 1;
            true
        } else {
            false
        }
    }

    pub fn first(&mut self, len: usize) -> bool {
        let moved = len > 0 && self.position != 0;
        self.position = 0;
        moved
    }

    pub fn last(&mut self, len: usize) -> bool {
        let target = len.saturating_sub(1);
        let moved = self.position != target;
        self.position = target;
        moved
    }

    pub fn set(&mut self, position: usize, len: usize) {
        self.position = position.min(len.saturating_sub(1));
    }

    pub fn clamp(&mut self, len: usize) {
        self.set(self.position, len);
    }

    /// Applies a native cursor key. Returns `Some(moved)` for cursor keys,
    /// `None` for any other key.
    pub fn apply(&mut self, key: &str, len: usize) -> Option<bool> {
        match key {
            "down" => Some(self.down(len)),
            "up" => Some(self.up()),
            "home" => Some(self.first(len)),
            "end" => Some(self.last(len)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moves_stop_at_bounds() {
        let mut c = ListCursor::default();
        assert!(!c.up());
        assert!(c.down(3));
        assert!(c.down(3));
        assert!(!c.down(3));
        assert_eq!(c.position(), 2);
    }

    #[test]
    fn test_home_end() {
        let mut c = ListCursor::default();
        assert_eq!(c.apply("end", 5), Some(true));
        assert_eq!(c.position(), 4);
        assert_eq!(c.apply("end", 5), Some(false));
        assert_eq!(c.apply("home", 5), Some(true));
        assert_eq!(c.apply("x", 5), None);
    }

    #[test]
    fn test_clamp_after_shrink() {
        let mut c = ListCursor::default();
        c.set(7, 10);
        c.clamp(3);
        assert_eq!(c.position(), 2);
        c.clamp(0);
        assert_eq!(c.position(), 0);
    }
}
