use super::*;

/// Every boundary cell at one temperature, every interior cell at another.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct UniformShell {
    pub boundary: f64,
    pub interior: f64,
}

impl Default for UniformShell {
    fn default() -> Self {
        UniformShell {
            boundary: 100.0,
            interior: 0.0,
        }
    }
}

impl<const GRID_DIMENSION: usize> InitialCondition<GRID_DIMENSION>
    for UniformShell
{
    fn value(
        &self,
        coord: &Coord<GRID_DIMENSION>,
        aabb: &AABB<GRID_DIMENSION>,
    ) -> f64 {
        if aabb.on_boundary(coord) {
            self.boundary
        } else {
            self.interior
        }
    }
}
