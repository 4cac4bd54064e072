use super::*;
use crate::util::*;

/// Temperatures mapped onto the colour gradient, values outside clamp.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TemperatureRange {
    pub min: f64,
    pub max: f64,
}

impl Default for TemperatureRange {
    fn default() -> Self {
        TemperatureRange {
            min: 0.0,
            max: 100.0,
        }
    }
}

impl TemperatureRange {
    pub fn normalize(&self, value: f64) -> f64 {
        let span = self.max - self.min;
        if span <= 0.0 {
            return 0.0;
        }
        ((value - self.min) / span).clamp(0.0, 1.0)
    }

    pub fn color(&self, value: f64) -> image::Rgb<u8> {
        let c = colorous::TURBO.eval_continuous(self.normalize(value));
        image::Rgb(c.as_array())
    }
}

/// History of a bar as one PNG, each report adds one line.
pub struct BarImageReporter {
    img_buffer: image::RgbImage,
    range: TemperatureRange,
    path: PathBuf,
    line: u32,
}

impl BarImageReporter {
    /// `lines` should be the number of reports, `n_steps + 1`.
    pub fn new<P: AsRef<Path>>(
        n_cells: usize,
        lines: usize,
        range: TemperatureRange,
        path: P,
    ) -> Self {
        BarImageReporter {
            img_buffer: image::RgbImage::new(n_cells as u32, lines as u32),
            range,
            path: path.as_ref().to_path_buf(),
            line: 0,
        }
    }

    pub fn add_line(&mut self, v: &[f64]) {
        debug_assert_eq!(v.len(), self.img_buffer.width() as usize);
        if self.line >= self.img_buffer.height() {
            tracing::warn!("bar image is full, dropping line {}", self.line);
            return;
        }
        for x in 0..self.img_buffer.width() {
            let c = self.range.color(v[x as usize]);
            self.img_buffer.put_pixel(x, self.line, c);
        }
        self.line += 1;
    }
}

impl Reporter<1> for BarImageReporter {
    fn report(
        &mut self,
        domain: &OwnedDomain<1>,
        _time: f64,
    ) -> Result<(), ReportError> {
        profiling::scope!("report::bar_image");
        self.add_line(domain.buffer());
        Ok(())
    }

    fn finish(&mut self) -> Result<(), ReportError> {
        tracing::info!("Writing: {:?}", self.path);
        self.img_buffer.save(&self.path)?;
        Ok(())
    }
}

pub fn image2d<P: AsRef<Path>, DomainType: DomainView<2>>(
    domain: &DomainType,
    range: &TemperatureRange,
    path: &P,
) -> Result<(), ReportError> {
    let aabb = domain.aabb();
    let exclusive_bounds = aabb.exclusive_bounds();
    let mut img = image::RgbImage::new(
        exclusive_bounds[1] as u32,
        exclusive_bounds[0] as u32,
    );
    for coord in aabb.coord_iter() {
        let local: Coord<2> = coord - aabb.min();
        let c = range.color(domain.view(&coord));
        img.put_pixel(local[1] as u32, local[0] as u32, c);
    }
    img.save(path)?;
    Ok(())
}

/// Midplane of a cube as `frame_NNNN.png`, one file per report.
pub struct SliceImageReporter {
    output_dir: PathBuf,
    range: TemperatureRange,
    frame: usize,
}

impl SliceImageReporter {
    pub fn new<P: AsRef<Path>>(output_dir: P, range: TemperatureRange) -> Self {
        SliceImageReporter {
            output_dir: output_dir.as_ref().to_path_buf(),
            range,
            frame: 0,
        }
    }
}

impl Reporter<3> for SliceImageReporter {
    fn report(
        &mut self,
        domain: &OwnedDomain<3>,
        _time: f64,
    ) -> Result<(), ReportError> {
        profiling::scope!("report::slice_image");
        let path = frame_path(&self.output_dir, self.frame, "png");
        tracing::info!("Writing: {:?}", path);
        image2d(&midplane(domain), &self.range, &path)?;
        self.frame += 1;
        Ok(())
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use crate::initial_conditions::*;

    #[test]
    fn normalize_clamps() {
        let r = TemperatureRange::default();
        assert_eq!(r.normalize(-5.0), 0.0);
        assert_eq!(r.normalize(50.0), 0.5);
        assert_eq!(r.normalize(150.0), 1.0);
        let flat = TemperatureRange { min: 1.0, max: 1.0 };
        assert_eq!(flat.normalize(3.0), 0.0);
    }

    #[test]
    fn bar_image_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bar.png");
        let mut domain = OwnedDomain::<1>::cube(8);
        initialize(&mut domain, &SplitBar::default());
        let mut reporter =
            BarImageReporter::new(8, 2, TemperatureRange::default(), &path);
        reporter.report(&domain, 0.0).unwrap();
        reporter.report(&domain, 0.1).unwrap();
        reporter.report(&domain, 0.2).unwrap();
        reporter.finish().unwrap();

        let img = image::open(&path).unwrap().to_rgb8();
        assert_eq!(img.dimensions(), (8, 2));
        let range = TemperatureRange::default();
        assert_eq!(*img.get_pixel(0, 1), range.color(0.0));
        assert_eq!(*img.get_pixel(7, 0), range.color(100.0));
    }

    #[test]
    fn slice_frames() {
        let dir = tempfile::tempdir().unwrap();
        let mut domain = OwnedDomain::<3>::cube(5);
        initialize(&mut domain, &UniformShell::default());
        let range = TemperatureRange::default();
        let mut reporter = SliceImageReporter::new(dir.path(), range);
        reporter.report(&domain, 0.0).unwrap();
        let img = image::open(frame_path(dir.path(), 0, "png"))
            .unwrap()
            .to_rgb8();
        assert_eq!(img.dimensions(), (5, 5));
        assert_eq!(*img.get_pixel(2, 2), range.color(0.0));
        assert_eq!(*img.get_pixel(0, 2), range.color(100.0));
    }
}
