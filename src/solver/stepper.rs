use super::*;
use crate::domain::*;
use crate::stencil::*;

/// Advances a grid one timestep at a time with a fixed stencil and scheme.
/// The scratch grid for the double buffered scheme is allocated on first use.
pub struct Stepper<
    Operation,
    const GRID_DIMENSION: usize,
    const NEIGHBORHOOD_SIZE: usize,
> where
    Operation: StencilOperation<NEIGHBORHOOD_SIZE>,
{
    stencil: Stencil<Operation, GRID_DIMENSION, NEIGHBORHOOD_SIZE>,
    scheme: UpdateScheme,
    scratch: Option<OwnedDomain<GRID_DIMENSION>>,
}

impl<Operation, const GRID_DIMENSION: usize, const NEIGHBORHOOD_SIZE: usize>
    Stepper<Operation, GRID_DIMENSION, NEIGHBORHOOD_SIZE>
where
    Operation: StencilOperation<NEIGHBORHOOD_SIZE>,
{
    pub fn new(
        stencil: Stencil<Operation, GRID_DIMENSION, NEIGHBORHOOD_SIZE>,
        scheme: UpdateScheme,
    ) -> Self {
        Stepper {
            stencil,
            scheme,
            scratch: None,
        }
    }

    pub fn scheme(&self) -> UpdateScheme {
        self.scheme
    }

    pub fn step(&mut self, domain: &mut OwnedDomain<GRID_DIMENSION>) {
        match self.scheme {
            UpdateScheme::InPlace => in_place_step(&self.stencil, domain),
            UpdateScheme::DoubleBuffered => {
                let aabb = *domain.aabb();
                let scratch = self
                    .scratch
                    .get_or_insert_with(|| OwnedDomain::new(aabb));
                if scratch.aabb() != &aabb {
                    *scratch = OwnedDomain::new(aabb);
                }
                double_buffered_step(&self.stencil, &*domain, scratch);
                std::mem::swap(domain, scratch);
            }
        }
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use crate::initial_conditions::*;
    use crate::stencil::standard_stencils::*;

    #[test]
    fn schemes_agree_on_first_interior_cell() {
        let mut in_place = Stepper::new(heat_1d(2000.0), UpdateScheme::InPlace);
        let mut jacobi =
            Stepper::new(heat_1d(2000.0), UpdateScheme::DoubleBuffered);
        let mut a = OwnedDomain::<1>::cube(100);
        let mut b = OwnedDomain::<1>::cube(100);
        initialize(&mut a, &SplitBar::default());
        initialize(&mut b, &SplitBar::default());
        in_place.step(&mut a);
        jacobi.step(&mut b);
        assert_eq!(a.buffer()[1], b.buffer()[1]);
        assert_ne!(a.buffer()[2], b.buffer()[2]);
    }

    #[test]
    fn double_buffered_keeps_boundary() {
        let mut stepper =
            Stepper::new(heat_3d(20.0), UpdateScheme::DoubleBuffered);
        let mut domain = OwnedDomain::<3>::cube(6);
        initialize(&mut domain, &UniformShell::default());
        for _ in 0..5 {
            stepper.step(&mut domain);
        }
        for c in domain.aabb().coord_iter() {
            if is_boundary(&c, 6) {
                assert_eq!(domain.view(&c), 100.0);
            }
        }
    }
}
