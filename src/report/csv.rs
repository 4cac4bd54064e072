use super::*;
use std::io::prelude::*;

/// Writes `frame_NNNN.csv` into a directory for every report.
/// A bar is a single row, a cube writes the rows of its midplane.
pub struct CsvReporter {
    output_dir: PathBuf,
    frame: usize,
}

impl CsvReporter {
    pub fn new<P: AsRef<Path>>(output_dir: P) -> Self {
        CsvReporter {
            output_dir: output_dir.as_ref().to_path_buf(),
            frame: 0,
        }
    }

    fn write_rows<'r, I: Iterator<Item = &'r [f64]>>(
        &mut self,
        rows: I,
    ) -> Result<(), ReportError> {
        profiling::scope!("report::csv");
        let path = frame_path(&self.output_dir, self.frame, "csv");
        tracing::info!("Writing: {:?}", path);
        let mut output = std::io::BufWriter::new(std::fs::File::create(&path)?);
        for values in rows {
            write_csv_row(&mut output, values)?;
        }
        output.flush()?;
        self.frame += 1;
        Ok(())
    }
}

pub fn write_csv_row<W: Write>(
    output: &mut W,
    values: &[f64],
) -> std::io::Result<()> {
    if let Some((first, rest)) = values.split_first() {
        write!(output, "{first}")?;
        for r in rest {
            write!(output, ", {r}")?;
        }
    }
    writeln!(output)
}

impl Reporter<1> for CsvReporter {
    fn report(
        &mut self,
        domain: &OwnedDomain<1>,
        _time: f64,
    ) -> Result<(), ReportError> {
        self.write_rows(std::iter::once(domain.buffer()))
    }
}

impl Reporter<3> for CsvReporter {
    fn report(
        &mut self,
        domain: &OwnedDomain<3>,
        _time: f64,
    ) -> Result<(), ReportError> {
        let plane = midplane(domain);
        self.write_rows(rows(&plane))
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use crate::initial_conditions::*;

    #[test]
    fn row_format() {
        let mut out = Vec::new();
        write_csv_row(&mut out, &[0.0, 50.5, 100.0]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "0, 50.5, 100\n");
    }

    #[test]
    fn writes_numbered_frames() {
        let dir = tempfile::tempdir().unwrap();
        let mut reporter = CsvReporter::new(dir.path());
        let mut domain = OwnedDomain::<3>::cube(4);
        initialize(&mut domain, &UniformShell::default());
        reporter.report(&domain, 0.0).unwrap();
        reporter.report(&domain, 0.1).unwrap();

        let second =
            std::fs::read_to_string(frame_path(dir.path(), 1, "csv")).unwrap();
        let lines: Vec<&str> = second.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "100, 100, 100, 100");
        assert_eq!(lines[1], "100, 0, 0, 100");
    }
}
