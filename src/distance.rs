use crate::grid::GridCell;

/// Manhattan (L1) distance between two cells.
#[inline]
pub fn manhattan(a: GridCell, b: GridCell) -> u32 {
    a.row.abs_diff(b.row).saturating_add(a.col.abs_diff(b.col))
}

/// Euclidean (L2) distance between two cells.
#[inline]
pub fn euclidean(a: GridCell, b: GridCell) -> f64 {
    let d_row = (a.row - b.row) as f64;
    let d_col = (a.col - b.col) as f64;
    (d_row * d_row + d_col * d_col).sqrt()
}

/// Floor of the Euclidean distance. Never exceeds [manhattan], so it stays admissible as an A*
/// heuristic on a 4-connected grid.
#[inline]
pub fn euclidean_floor(a: GridCell, b: GridCell) -> u32 {
    euclidean(a, b).floor() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metrics_on_known_cells() {
        let a = GridCell::new(0, 0);
        let b = GridCell::new(3, 4);
        assert_eq!(manhattan(a, b), 7);
        assert_eq!(manhattan(b, a), 7);
        assert!((euclidean(a, b) - 5.0).abs() < 1e-9);
        assert_eq!(euclidean_floor(a, GridCell::new(1, 1)), 1);
    }

    #[test]
    fn negative_coordinates() {
        assert_eq!(manhattan(GridCell::new(-1, 0), GridCell::new(1, -2)), 4);
        let low = GridCell::new(i32::MIN, i32::MIN);
        let high = GridCell::new(i32::MAX, i32::MAX);
        assert_eq!(manhattan(low, high), u32::MAX);
    }
}
