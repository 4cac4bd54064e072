use crate::domain::*;
use crate::stencil::*;

/// One timestep reading only `input` and writing every cell of `output`.
/// Boundary cells are copied through unchanged.
pub fn double_buffered_step<
    Operation,
    DomainType,
    const GRID_DIMENSION: usize,
    const NEIGHBORHOOD_SIZE: usize,
>(
    stencil: &Stencil<Operation, GRID_DIMENSION, NEIGHBORHOOD_SIZE>,
    input: &DomainType,
    output: &mut DomainType,
) where
    Operation: StencilOperation<NEIGHBORHOOD_SIZE>,
    DomainType: DomainView<GRID_DIMENSION>,
{
    profiling::scope!("solver::double_buffered_step");
    debug_assert_eq!(input.aabb(), output.aabb());
    let aabb = input.aabb();
    let input_buffer = input.buffer();
    for (linear_index, value_mut) in
        output.buffer_mut().iter_mut().enumerate()
    {
        let world_coord = aabb.linear_to_coord(linear_index);
        *value_mut = if aabb.on_boundary(&world_coord) {
            input_buffer[linear_index]
        } else {
            stencil.apply_at(aabb, input_buffer, &world_coord)
        };
    }
}
