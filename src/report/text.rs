use super::*;
use std::io::Write;

/// Human readable temperatures, `Time: 0.10s Bar temperature: 0.00K ...`.
/// A bar prints on one line, a cube prints its midplane one row per line.
pub struct TextReporter<W: Write> {
    output: W,
    started: bool,
}

impl<W: Write> TextReporter<W> {
    pub fn new(output: W) -> Self {
        TextReporter {
            output,
            started: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.output
    }

    fn header(&mut self, time: f64) -> Result<(), ReportError> {
        if !self.started {
            writeln!(self.output, "\nPerforming simulation...")?;
            self.started = true;
        }
        write!(self.output, "\nTime: {:4.2}s Bar temperature: ", time)?;
        Ok(())
    }

    fn row(&mut self, values: &[f64]) -> Result<(), ReportError> {
        for v in values {
            write!(self.output, "{:4.2}K ", v)?;
        }
        Ok(())
    }

    fn done(&mut self) -> Result<(), ReportError> {
        writeln!(self.output, "\nDone.")?;
        self.output.flush()?;
        Ok(())
    }
}

impl<W: Write> Reporter<1> for TextReporter<W> {
    fn report(
        &mut self,
        domain: &OwnedDomain<1>,
        time: f64,
    ) -> Result<(), ReportError> {
        profiling::scope!("report::text");
        self.header(time)?;
        self.row(domain.buffer())
    }

    fn finish(&mut self) -> Result<(), ReportError> {
        self.done()
    }
}

impl<W: Write> Reporter<3> for TextReporter<W> {
    fn report(
        &mut self,
        domain: &OwnedDomain<3>,
        time: f64,
    ) -> Result<(), ReportError> {
        profiling::scope!("report::text");
        self.header(time)?;
        writeln!(self.output)?;
        let plane = midplane(domain);
        for values in rows(&plane) {
            self.row(values)?;
            writeln!(self.output)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<(), ReportError> {
        self.done()
    }
}
