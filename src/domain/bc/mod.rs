use crate::util::*;

/// A cell is on the boundary of a cube of extent `n` when any
/// coordinate is `0` or `n - 1`.
/// Boundary cells hold their initial value for the whole run.
pub fn is_boundary<const GRID_DIMENSION: usize>(
    coord: &Coord<GRID_DIMENSION>,
    n: usize,
) -> bool {
    AABB::<GRID_DIMENSION>::cube(n).on_boundary(coord)
}

/// Number of boundary cells in a cube of extent `n`.
/// Without an interior (`n < 2`) every cell is on the boundary.
pub fn boundary_cell_count(n: usize, grid_dimension: u32) -> usize {
    let total = n.pow(grid_dimension);
    if n < 2 {
        return total;
    }
    total - (n - 2).pow(grid_dimension)
}
