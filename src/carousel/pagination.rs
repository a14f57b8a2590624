//! Pagination indicator model: one dot per reachable slide position.

/// Indicator set backing the dot row.
///
/// Regenerated only when `max_index` changes (a breakpoint crossing);
/// otherwise the set persists and only the active flag moves.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct PaginationState {
    /// Number of indicators; `max_index + 1` while the carousel is active.
    pub count: usize,
    /// Index of the single active indicator.
    pub active: usize,
}

impl PaginationState {
    /// Regenerate the indicator set for a new `max_index`.
    pub fn rebuild(max_index: usize, active: usize) -> Self {
        Self {
            count: max_index + 1,
            active: active.min(max_index),
        }
    }

    /// Cheap path: move the active flag without regenerating the set.
    pub fn set_active(&mut self, index: usize) {
        self.active = index.min(self.count.saturating_sub(1));
    }

    pub fn is_active(&self, index: usize) -> bool {
        index == self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rebuild_counts_every_position() {
        let dots = PaginationState::rebuild(4, 2);
        assert_eq!(dots.count, 5);
        assert_eq!(dots.active, 2);
    }

    #[test]
    fn rebuild_clamps_active() {
        let dots = PaginationState::rebuild(2, 9);
        assert_eq!(dots.active, 2);
    }

    #[test]
    fn set_active_clamps_to_last_dot() {
        let mut dots = PaginationState::rebuild(3, 0);
        dots.set_active(7);
        assert_eq!(dots.active, 3);
    }
}
