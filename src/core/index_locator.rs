use crate::core::types::{BrushWindow, DataIndex};

/// Binary search for the index nearest to `x` from below.
///
/// The search keeps two bounds and narrows them until they are adjacent,
/// then returns the upper bound if `x` reached it. Bounds shrink on every
/// iteration, so tables with repeated or unordered coordinates still
/// terminate. Returns `None` only for an empty table.
#[must_use]
pub fn locate_index(table: &[f64], x: f64) -> Option<DataIndex> {
    let last = table.len().checked_sub(1)?;
    let mut start = 0;
    let mut end = last;

    while end - start > 1 {
        let middle = start + (end - start) / 2;
        if table[middle] > x {
            end = middle;
        } else {
            start = middle;
        }
    }

    Some(if x >= table[end] { end } else { start })
}

/// Converts two traveller coordinates into a gap-aligned window.
///
/// The lower coordinate becomes `start_index`, rounded down to a multiple of
/// `gap`. The upper one becomes `end_index`, rounded down likewise unless it
/// is `last_index`, which is always reachable. A `gap` of zero behaves as 1.
#[must_use]
pub fn range_to_indices(
    table: &[f64],
    x_a: f64,
    x_b: f64,
    gap: usize,
    last_index: DataIndex,
) -> BrushWindow {
    let gap = gap.max(1);
    let min_index = locate_index(table, x_a.min(x_b)).unwrap_or(0);
    let max_index = locate_index(table, x_a.max(x_b)).unwrap_or(0);

    let end_index = if max_index == last_index {
        last_index
    } else {
        max_index - max_index % gap
    };

    BrushWindow::new(min_index - min_index % gap, end_index)
}

#[cfg(test)]
mod tests {
    use super::{locate_index, range_to_indices};
    use crate::core::types::BrushWindow;

    const TABLE: [f64; 6] = [0.0, 20.0, 40.0, 60.0, 80.0, 100.0];

    #[test]
    fn locate_returns_lower_neighbour_until_next_coordinate_is_reached() {
        assert_eq!(locate_index(&TABLE, -5.0), Some(0));
        assert_eq!(locate_index(&TABLE, 0.0), Some(0));
        assert_eq!(locate_index(&TABLE, 19.99), Some(0));
        assert_eq!(locate_index(&TABLE, 20.0), Some(1));
        assert_eq!(locate_index(&TABLE, 99.0), Some(4));
        assert_eq!(locate_index(&TABLE, 100.0), Some(5));
        assert_eq!(locate_index(&TABLE, 1_000.0), Some(5));
    }

    #[test]
    fn locate_handles_single_and_empty_tables() {
        assert_eq!(locate_index(&[42.0], -1.0), Some(0));
        assert_eq!(locate_index(&[42.0], 500.0), Some(0));
        assert_eq!(locate_index(&[], 1.0), None);
    }

    #[test]
    fn locate_terminates_on_duplicated_and_unordered_coordinates() {
        assert_eq!(locate_index(&[5.0, 5.0, 5.0, 5.0], 5.0), Some(3));
        let index = locate_index(&[10.0, 0.0, 30.0, 5.0, 2.0], 4.0);
        assert!(index.is_some());
        assert!(locate_index(&TABLE, f64::NAN).is_some());
    }

    #[test]
    fn range_orders_coordinates_before_snapping() {
        assert_eq!(
            range_to_indices(&TABLE, 65.0, 25.0, 1, 5),
            BrushWindow::new(1, 3)
        );
    }

    #[test]
    fn gap_rounds_both_ends_down_except_the_last_index() {
        assert_eq!(
            range_to_indices(&TABLE, 60.0, 80.0, 2, 5),
            BrushWindow::new(2, 4)
        );
        assert_eq!(
            range_to_indices(&TABLE, 20.0, 100.0, 3, 5),
            BrushWindow::new(0, 5)
        );
        assert_eq!(
            range_to_indices(&TABLE, 20.0, 80.0, 3, 5),
            BrushWindow::new(0, 3)
        );
    }

    #[test]
    fn zero_gap_is_treated_as_one() {
        assert_eq!(
            range_to_indices(&TABLE, 20.0, 60.0, 0, 5),
            BrushWindow::new(1, 3)
        );
    }
}
