// File: crates/chart-core/src/hit_test.rs
// Summary: Pointer x to nearest sample index, and the selection it drives.

/// Index of the sample whose column is closest to `pointer_x`.
///
/// Total for any input: counts of 0 or 1, degenerate widths and NaN return 0, and
/// the result is always clamped to `[0, sample_count - 1]` (infinities included).
pub fn nearest_index(pointer_x: f32, view_width: f32, sample_count: usize) -> usize {
    if sample_count <= 1 || !(view_width > 0.0) || pointer_x.is_nan() {
        return 0;
    }
    let last = sample_count - 1;
    let step = view_width / last as f32;
    let idx = (pointer_x / step).round();
    if idx <= 0.0 {
        0
    } else {
        (idx as usize).min(last)
    }
}

/// Currently highlighted sample, if any.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SelectionState {
    pub selected_index: Option<usize>,
}

impl SelectionState {
    pub fn select(&mut self, index: usize) -> bool {
        self.replace_with(Some(index))
    }

    pub fn clear(&mut self) -> bool {
        self.replace_with(None)
    }

    /// Set the selection; returns true if it changed.
    pub fn replace_with(&mut self, next: Option<usize>) -> bool {
        let changed = self.selected_index != next;
        self.selected_index = next;
        changed
    }

    /// The selection, only if it still addresses one of `len` points.
    pub fn validated(&self, len: usize) -> Option<usize> {
        self.selected_index.filter(|&i| i < len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_nearest_column() {
        assert_eq!(nearest_index(149.0, 300.0, 4), 1);
        assert_eq!(nearest_index(151.0, 300.0, 4), 2);
        assert_eq!(nearest_index(49.0, 300.0, 4), 0);
        assert_eq!(nearest_index(51.0, 300.0, 4), 1);
    }

    #[test]
    fn clamps_outside_view() {
        assert_eq!(nearest_index(-40.0, 300.0, 4), 0);
        assert_eq!(nearest_index(900.0, 300.0, 4), 3);
        assert_eq!(nearest_index(f32::INFINITY, 300.0, 4), 3);
        assert_eq!(nearest_index(f32::NEG_INFINITY, 300.0, 4), 0);
    }

    #[test]
    fn degenerate_inputs_are_zero() {
        assert_eq!(nearest_index(10.0, 300.0, 0), 0);
        assert_eq!(nearest_index(10.0, 300.0, 1), 0);
        assert_eq!(nearest_index(10.0, 0.0, 5), 0);
        assert_eq!(nearest_index(f32::NAN, 300.0, 5), 0);
    }

    #[test]
    fn stale_selection_is_dropped() {
        let mut s = SelectionState::default();
        assert!(s.select(7));
        assert!(!s.select(7));
        assert_eq!(s.validated(8), Some(7));
        assert_eq!(s.validated(4), None);
        assert!(s.clear());
        assert!(!s.clear());
    }
}
