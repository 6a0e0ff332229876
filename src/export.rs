use crate::plot::RenderRequest;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::prelude::*;
use std::io::BufWriter;
use std::path::Path;

/// Writes the sampled curve as `x,density,shaded` rows, with a header.
pub fn write_csv<W: Write>(request: &RenderRequest, mut output: W) -> Result<()> {
    writeln!(output, "x,density,shaded")?;
    for ((x, density), shaded) in request
        .xs
        .iter()
        .zip(request.densities.iter())
        .zip(request.shaded.iter())
    {
        writeln!(output, "{},{},{}", x, density, shaded)?;
    }
    output.flush()?;
    Ok(())
}

pub fn write_csv_file<P: AsRef<Path>>(request: &RenderRequest, path: P) -> Result<()> {
    let path = path.as_ref();
    let f = File::create(path).with_context(|| format!("creating {:?}", path))?;
    write_csv(request, BufWriter::new(f)).with_context(|| format!("writing {:?}", path))?;
    log::info!("wrote {} curve samples to {:?}", request.xs.len(), path);
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::evaluate::DistributionParameters;
    use crate::plot::PlotSettings;
    use crate::query::Query;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_write_csv() {
        let params = DistributionParameters::new(0.0, 1.0).unwrap();
        let settings = PlotSettings::new(3, 1.0).unwrap();
        let req = RenderRequest::build(&params, &Query::GreaterThan(0.0), &settings);
        let mut out = Vec::new();
        write_csv(&req, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "x,density,shaded");
        assert!(lines[1].starts_with("-1,") && lines[1].ends_with(",false"));
        assert!(lines[2].starts_with("0,") && lines[2].ends_with(",false"));
        assert!(lines[3].starts_with("1,") && lines[3].ends_with(",true"));
    }

    #[test]
    fn test_write_csv_file_reports_path() {
        let params = DistributionParameters::new(0.0, 1.0).unwrap();
        let req = RenderRequest::build(&params, &Query::Equals(0.0), &PlotSettings::default());
        let err = write_csv_file(&req, "/nonexistent-dir/curve.csv").unwrap_err();
        assert!(format!("{:#}", err).contains("nonexistent-dir"));
    }
}
