use super::*;

/// A bar held at different temperatures on each end.
/// A single cell bar takes the left value.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SplitBar {
    pub left: f64,
    pub right: f64,
    pub interior: f64,
}

impl Default for SplitBar {
    fn default() -> Self {
        SplitBar {
            left: 0.0,
            right: 100.0,
            interior: 50.0,
        }
    }
}

impl InitialCondition<1> for SplitBar {
    fn value(&self, coord: &Coord<1>, aabb: &AABB<1>) -> f64 {
        if coord[0] == aabb.bounds[(0, 0)] {
            self.left
        } else if coord[0] == aabb.bounds[(0, 1)] {
            self.right
        } else {
            self.interior
        }
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn bar_ends() {
        let mut domain = OwnedDomain::<1>::cube(100);
        initialize(&mut domain, &SplitBar::default());
        assert_eq!(domain.view(&vector![0]), 0.0);
        assert_eq!(domain.view(&vector![99]), 100.0);
        for i in 1..99 {
            assert_eq!(domain.view(&vector![i]), 50.0);
        }
    }

    #[test]
    fn single_cell_takes_left() {
        let mut domain = OwnedDomain::<1>::cube(1);
        initialize(&mut domain, &SplitBar::default());
        assert_eq!(domain.buffer(), &[0.0]);
    }
}
