use crate::util::*;

/// All stencil operations must provide an operation that adheres to this type
pub trait StencilOperation<const NEIGHBORHOOD_SIZE: usize>:
    Fn(&[f64; NEIGHBORHOOD_SIZE]) -> f64
{
}

impl<const NEIGHBORHOOD_SIZE: usize, F> StencilOperation<NEIGHBORHOOD_SIZE>
    for F
where
    F: Fn(&[f64; NEIGHBORHOOD_SIZE]) -> f64,
{
}

/// For linear stencils, we can extract the weight for a neighbor
/// by passing in 1.0 for that neighbor and 0.0 for the others.
pub fn extract_weights<
    const NEIGHBORHOOD_SIZE: usize,
    F: Fn(&[f64; NEIGHBORHOOD_SIZE]) -> f64,
>(
    f: F,
) -> Values<NEIGHBORHOOD_SIZE> {
    let mut weights = Values::zero();
    let mut arg_buffer = [0.0; NEIGHBORHOOD_SIZE];
    for n in 0..NEIGHBORHOOD_SIZE {
        arg_buffer[n] = 1.0;
        weights[n] = f(&arg_buffer);
        arg_buffer[n] = 0.0;
    }
    weights
}

/// Stencils are the combination of an operation and neighbor offsets.
/// `args[n]` handed to the operation is the value at `offsets[n]`.
pub struct Stencil<
    Operation,
    const GRID_DIMENSION: usize,
    const NEIGHBORHOOD_SIZE: usize,
> where
    Operation: StencilOperation<NEIGHBORHOOD_SIZE>,
{
    operation: Operation,
    offsets: [Coord<GRID_DIMENSION>; NEIGHBORHOOD_SIZE],
}

impl<Operation, const GRID_DIMENSION: usize, const NEIGHBORHOOD_SIZE: usize>
    Stencil<Operation, GRID_DIMENSION, NEIGHBORHOOD_SIZE>
where
    Operation: StencilOperation<NEIGHBORHOOD_SIZE>,
{
    pub fn new(
        offsets: [[i32; GRID_DIMENSION]; NEIGHBORHOOD_SIZE],
        operation: Operation,
    ) -> Self {
        Stencil {
            offsets: std::array::from_fn(|i| {
                Coord::from_column_slice(&offsets[i])
            }),
            operation,
        }
    }

    pub fn weights(&self) -> Values<NEIGHBORHOOD_SIZE> {
        extract_weights(&self.operation)
    }

    #[inline]
    pub fn apply(&self, args: &[f64; NEIGHBORHOOD_SIZE]) -> f64 {
        (self.operation)(args)
    }

    /// Gather neighbor values around `world_coord` from a flat row major
    /// buffer described by `aabb` and apply the operation.
    /// All neighbors must lie inside `aabb`.
    #[inline]
    pub fn apply_at(
        &self,
        aabb: &AABB<GRID_DIMENSION>,
        buffer: &[f64],
        world_coord: &Coord<GRID_DIMENSION>,
    ) -> f64 {
        let args = self.offsets.map(|offset| {
            let n_world_coord = world_coord + offset;
            buffer[aabb.coord_to_linear(&n_world_coord)]
        });
        self.apply(&args)
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn extract_weights_test() {
        {
            let s = Stencil::new([[1]], |args: &[f64; 1]| 2.0 * args[0]);
            let w = s.weights()[0];
            assert_approx_eq!(f64, w, 2.0);
        }

        {
            let s = Stencil::new([[1], [2], [3]], |args: &[f64; 3]| {
                2.0 * args[0] + 3.0 * args[1] + 5.0 * args[2]
            });
            let w = s.weights();
            assert_approx_eq!(f64, w[0], 2.0, ulps = 1);
            assert_approx_eq!(f64, w[1], 3.0, ulps = 1);
            assert_approx_eq!(f64, w[2], 5.0, ulps = 1);
        }
    }

    #[test]
    fn apply_at_gathers_offsets() {
        let aabb = AABB::<2>::cube(4);
        let buffer: Vec<f64> = (0..16).map(|i| i as f64).collect();
        let s = Stencil::new([[0, 0], [-1, 0], [0, 1]], |args: &[f64; 3]| {
            args[0] + 10.0 * args[1] + 100.0 * args[2]
        });
        // centre (1, 1) = 5, (0, 1) = 1, (1, 2) = 6
        let r = s.apply_at(&aabb, &buffer, &vector![1, 1]);
        assert_approx_eq!(f64, r, 5.0 + 10.0 + 600.0);
    }
}
