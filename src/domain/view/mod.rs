mod owned;
mod plane;

pub use owned::*;
pub use plane::*;

use crate::util::*;

pub trait DomainView<const GRID_DIMENSION: usize> {
    fn aabb(&self) -> &AABB<GRID_DIMENSION>;

    fn buffer(&self) -> &[f64];

    fn buffer_mut(&mut self) -> &mut [f64];

    fn aabb_buffer_mut(&mut self) -> (&AABB<GRID_DIMENSION>, &mut [f64]);

    fn view(&self, world_coord: &Coord<GRID_DIMENSION>) -> f64;

    /// Overwrite every value, visiting coordinates in linear order.
    fn set_values<F: FnMut(Coord<GRID_DIMENSION>) -> f64>(
        &mut self,
        mut f: F,
    ) {
        let (aabb, buffer) = self.aabb_buffer_mut();
        for (i, value_mut) in buffer.iter_mut().enumerate() {
            *value_mut = f(aabb.linear_to_coord(i));
        }
    }
}
