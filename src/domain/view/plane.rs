use super::*;
use crate::util::*;

/// The 2D cross section of a cube at `k = n / 2` on the last axis.
/// Rows of the slice follow the first axis, columns the second.
pub fn midplane<DomainType: DomainView<3>>(
    domain: &DomainType,
) -> OwnedDomain<2> {
    let aabb = domain.aabb();
    let k = aabb.bounds[(2, 0)] + aabb.exclusive_bounds()[2] / 2;
    let plane_aabb = AABB::new(matrix![
        aabb.bounds[(0, 0)], aabb.bounds[(0, 1)];
        aabb.bounds[(1, 0)], aabb.bounds[(1, 1)]
    ]);
    let mut plane = OwnedDomain::new(plane_aabb);
    plane.set_values(|c| domain.view(&vector![c[0], c[1], k]));
    plane
}

/// Iterate the rows of a 2D domain, first axis outermost.
pub fn rows(domain: &OwnedDomain<2>) -> impl Iterator<Item = &[f64]> {
    let width = domain.aabb().exclusive_bounds()[1].max(1) as usize;
    domain.buffer().chunks(width)
}
