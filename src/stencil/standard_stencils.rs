//! Heat stencils for the semi-implicit central difference update
//!
//! `new = (1 / (1 + 2 * D * c)) * (centre + c * sum(neighbors))`
//!
//! where `D` is the grid dimension and `c` the diffusion coefficient.
//! For `c >= 0` the weights are non-negative and sum to one, so each
//! update is a convex combination of the old values.
use crate::stencil::*;

pub fn heat_1d(
    coefficient: f64,
) -> Stencil<impl StencilOperation<3>, 1, 3> {
    let scale = 1.0 / (1.0 + 2.0 * coefficient);
    Stencil::new([[0], [1], [-1]], move |args: &[f64; 3]| {
        let middle = args[0];
        let right = args[1];
        let left = args[2];
        scale * (middle + coefficient * (right + left))
    })
}

pub fn heat_3d(
    coefficient: f64,
) -> Stencil<impl StencilOperation<7>, 3, 7> {
    let scale = 1.0 / (1.0 + 6.0 * coefficient);
    Stencil::new(
        [
            [0, 0, 0],
            [1, 0, 0],
            [-1, 0, 0],
            [0, 1, 0],
            [0, -1, 0],
            [0, 0, 1],
            [0, 0, -1],
        ],
        move |args: &[f64; 7]| {
            let middle = args[0];
            let neighbors =
                args[1] + args[2] + args[3] + args[4] + args[5] + args[6];
            scale * (middle + coefficient * neighbors)
        },
    )
}
