/// Single coordinate axis used for board width, height, and positions.
pub type Coord = u16;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u32;

/// Two-dimensional coordinates `(x, y)`, `x` picks the column and `y` the row.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    /// Grids are stored with shape `(rows, cols)`, so `(x, y)` lands at `x + y * cols`.
    fn to_nd_index(self) -> Self::Output {
        [self.1.into(), self.0.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Pulls `i` into `[0, len - 1]`. `len` must be at least 1.
pub const fn clamp_axis(i: isize, len: Coord) -> Coord {
    let last = len as isize - 1;
    if i < 0 {
        0
    } else if i > last {
        last as Coord
    } else {
        i as Coord
    }
}

/// The 3x3 window around a cell, with both bounds clamped onto the board and the
/// center skipped. Visits columns in the outer loop and rows in the inner one.
///
/// Clamping the bounds (not the individual offsets) means an edge cell scans a
/// smaller window, never the same position twice.
#[derive(Debug)]
pub struct ScanWindow {
    center: Coord2,
    lo: Coord2,
    hi: Coord2,
    cursor: Option<Coord2>,
}

impl ScanWindow {
    /// `bounds` is `(cols, rows)`.
    pub fn new(center: Coord2, bounds: Coord2) -> Self {
        let (x, y) = (center.0 as isize, center.1 as isize);
        let lo = (clamp_axis(x - 1, bounds.0), clamp_axis(y - 1, bounds.1));
        let hi = (clamp_axis(x + 1, bounds.0), clamp_axis(y + 1, bounds.1));
        Self {
            center,
            lo,
            hi,
            cursor: Some(lo),
        }
    }
}

impl Iterator for ScanWindow {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (x, y) = self.cursor?;

            self.cursor = if y < self.hi.1 {
                Some((x, y + 1))
            } else if x < self.hi.0 {
                Some((x + 1, self.lo.1))
            } else {
                None
            };

            if (x, y) != self.center {
                return Some((x, y));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn clamp_axis_pulls_into_range() {
        assert_eq!(clamp_axis(-5, 4), 0);
        assert_eq!(clamp_axis(-1, 4), 0);
        assert_eq!(clamp_axis(2, 4), 2);
        assert_eq!(clamp_axis(4, 4), 3);
        assert_eq!(clamp_axis(isize::MAX, 4), 3);
        assert_eq!(clamp_axis(7, 1), 0);
    }

    #[test]
    fn clamp_axis_is_idempotent() {
        for len in 1..6 {
            for i in -10..10 {
                let once = clamp_axis(i, len);
                assert_eq!(clamp_axis(once as isize, len), once);
            }
        }
    }

    #[test]
    fn nd_index_is_row_major() {
        assert_eq!((3, 1).to_nd_index(), [1, 3]);
    }

    #[test]
    fn interior_window_has_eight_cells() {
        let cells: Vec<_> = ScanWindow::new((1, 1), (3, 3)).collect();
        assert_eq!(
            cells,
            [(0, 0), (0, 1), (0, 2), (1, 0), (1, 2), (2, 0), (2, 1), (2, 2)]
        );
    }

    #[test]
    fn corner_window_visits_each_cell_once() {
        let cells: Vec<_> = ScanWindow::new((0, 0), (3, 3)).collect();
        assert_eq!(cells, [(0, 1), (1, 0), (1, 1)]);

        let cells: Vec<_> = ScanWindow::new((2, 2), (3, 3)).collect();
        assert_eq!(cells, [(1, 1), (1, 2), (2, 1)]);
    }

    #[test]
    fn edge_window_on_narrow_board() {
        // one column, three rows
        let cells: Vec<_> = ScanWindow::new((0, 1), (1, 3)).collect();
        assert_eq!(cells, [(0, 0), (0, 2)]);
    }

    #[test]
    fn single_cell_window_is_empty() {
        assert_eq!(ScanWindow::new((0, 0), (1, 1)).count(), 0);
    }
}
