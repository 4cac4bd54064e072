//! Initial and boundary temperatures.
//! Every policy decides boundary cells with the same classifier the
//! stepper uses, so a cell seeded as boundary is never updated.

mod split_bar;
mod uniform_shell;

pub use split_bar::*;
pub use uniform_shell::*;

use crate::domain::*;
use crate::util::*;

pub trait InitialCondition<const GRID_DIMENSION: usize> {
    /// Temperature of `coord` before the first step.
    fn value(
        &self,
        coord: &Coord<GRID_DIMENSION>,
        aabb: &AABB<GRID_DIMENSION>,
    ) -> f64;
}

/// Overwrite every cell of `domain` from `ic`, prior values are never read.
pub fn initialize<const GRID_DIMENSION: usize, DomainType, IC>(
    domain: &mut DomainType,
    ic: &IC,
) where
    DomainType: DomainView<GRID_DIMENSION>,
    IC: InitialCondition<GRID_DIMENSION>,
{
    let aabb = *domain.aabb();
    domain.set_values(|coord| ic.value(&coord, &aabb));
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn initialize_is_idempotent() {
        let ic = UniformShell::default();
        let mut once = OwnedDomain::<3>::cube(6);
        initialize(&mut once, &ic);

        let mut twice = OwnedDomain::<3>::cube(6);
        twice.set_values(|_| -3.0);
        initialize(&mut twice, &ic);
        initialize(&mut twice, &ic);
        assert_eq!(once, twice);
    }

    #[test]
    fn degenerate_extents() {
        let ic = UniformShell::default();
        let mut single = OwnedDomain::<3>::cube(1);
        initialize(&mut single, &ic);
        assert_eq!(single.buffer(), &[100.0]);

        let mut empty = OwnedDomain::<3>::cube(0);
        initialize(&mut empty, &ic);
        assert!(empty.buffer().is_empty());
    }
}
