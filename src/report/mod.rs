//! Consumers of the grid state, called once before stepping and once
//! after every step.

mod csv;
mod png;
mod text;
mod vtk;

pub use self::csv::*;
pub use self::png::*;
pub use self::text::*;
pub use self::vtk::*;

use crate::domain::*;
use crate::error::ReportError;
use std::path::{Path, PathBuf};

pub trait Reporter<const GRID_DIMENSION: usize> {
    fn report(
        &mut self,
        domain: &OwnedDomain<GRID_DIMENSION>,
        time: f64,
    ) -> Result<(), ReportError>;

    /// Called once after the last step.
    fn finish(&mut self) -> Result<(), ReportError> {
        Ok(())
    }
}

/// Hands every report to each of its reporters in order.
pub struct MultiReporter<'a, const GRID_DIMENSION: usize> {
    reporters: Vec<Box<dyn Reporter<GRID_DIMENSION> + 'a>>,
}

impl<'a, const GRID_DIMENSION: usize> MultiReporter<'a, GRID_DIMENSION> {
    pub fn new() -> Self {
        MultiReporter {
            reporters: Vec::new(),
        }
    }

    pub fn push<R: Reporter<GRID_DIMENSION> + 'a>(&mut self, reporter: R) {
        self.reporters.push(Box::new(reporter));
    }

    pub fn len(&self) -> usize {
        self.reporters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reporters.is_empty()
    }
}

impl<const GRID_DIMENSION: usize> Default
    for MultiReporter<'_, GRID_DIMENSION>
{
    fn default() -> Self {
        Self::new()
    }
}

impl<const GRID_DIMENSION: usize> Reporter<GRID_DIMENSION>
    for MultiReporter<'_, GRID_DIMENSION>
{
    fn report(
        &mut self,
        domain: &OwnedDomain<GRID_DIMENSION>,
        time: f64,
    ) -> Result<(), ReportError> {
        for reporter in &mut self.reporters {
            reporter.report(domain, time)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<(), ReportError> {
        for reporter in &mut self.reporters {
            reporter.finish()?;
        }
        Ok(())
    }
}

impl<const GRID_DIMENSION: usize, R: Reporter<GRID_DIMENSION> + ?Sized>
    Reporter<GRID_DIMENSION> for &mut R
{
    fn report(
        &mut self,
        domain: &OwnedDomain<GRID_DIMENSION>,
        time: f64,
    ) -> Result<(), ReportError> {
        (**self).report(domain, time)
    }

    fn finish(&mut self) -> Result<(), ReportError> {
        (**self).finish()
    }
}

/// Keeps a copy of every reported grid, mostly useful for tests.
#[derive(Debug, Default)]
pub struct History<const GRID_DIMENSION: usize> {
    pub frames: Vec<(f64, OwnedDomain<GRID_DIMENSION>)>,
}

impl<const GRID_DIMENSION: usize> Reporter<GRID_DIMENSION>
    for History<GRID_DIMENSION>
{
    fn report(
        &mut self,
        domain: &OwnedDomain<GRID_DIMENSION>,
        time: f64,
    ) -> Result<(), ReportError> {
        self.frames.push((time, domain.clone()));
        Ok(())
    }
}

/// `dir/frame_0007.ext`
pub fn frame_path(dir: &Path, frame: usize, extension: &str) -> PathBuf {
    let mut result = dir.to_path_buf();
    result.push(format!("frame_{:04}.{}", frame, extension));
    result
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn frame_path_test() {
        let p = frame_path(Path::new("out"), 7, "csv");
        assert_eq!(p, Path::new("out").join("frame_0007.csv"));
    }

    #[test]
    fn multi_reporter_fans_out() {
        let mut a = History::<1>::default();
        let mut b = History::<1>::default();
        {
            let mut multi: MultiReporter<1> = MultiReporter::new();
            multi.push(&mut a);
            multi.push(&mut b);
            assert_eq!(multi.len(), 2);
            let domain = OwnedDomain::<1>::cube(3);
            multi.report(&domain, 0.0).unwrap();
            multi.report(&domain, 0.1).unwrap();
            multi.finish().unwrap();
        }
        assert_eq!(a.frames.len(), 2);
        assert_eq!(b.frames.len(), 2);
        assert_eq!(b.frames[1].0, 0.1);
    }
}
