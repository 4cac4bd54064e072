use crate::domain::*;
use crate::stencil::*;

/// One timestep, overwriting interior cells in row major order.
/// Boundary cells are skipped and keep their values.
pub fn in_place_step<
    Operation,
    DomainType,
    const GRID_DIMENSION: usize,
    const NEIGHBORHOOD_SIZE: usize,
>(
    stencil: &Stencil<Operation, GRID_DIMENSION, NEIGHBORHOOD_SIZE>,
    domain: &mut DomainType,
) where
    Operation: StencilOperation<NEIGHBORHOOD_SIZE>,
    DomainType: DomainView<GRID_DIMENSION>,
{
    profiling::scope!("solver::in_place_step");
    let (aabb, buffer) = domain.aabb_buffer_mut();
    for linear_index in 0..buffer.len() {
        let world_coord = aabb.linear_to_coord(linear_index);
        if aabb.on_boundary(&world_coord) {
            continue;
        }
        let value = stencil.apply_at(aabb, buffer, &world_coord);
        buffer[linear_index] = value;
    }
}
