use std::io::{self, Write};
use std::path::Path;

use crate::sim::telemetry::Sample;

/// Write telemetry samples in CSV format.
///
/// Columns: time, position, velocity, thrust, fuel
pub fn write_telemetry<'a, W, I>(writer: &mut W, samples: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Sample>,
{
    writeln!(writer, "time,position,velocity,thrust,fuel")?;

    for s in samples {
        writeln!(
            writer,
            "{:.4},{:.4},{:.4},{:.4},{:.4}",
            s.time, s.position, s.velocity, s.thrust, s.fuel,
        )?;
    }

    Ok(())
}

/// Write telemetry to a CSV file at the given path.
pub fn write_telemetry_file<'a, I>(path: &Path, samples: I) -> io::Result<()>
where
    I: IntoIterator<Item = &'a Sample>,
{
    let mut file = io::BufWriter::new(std::fs::File::create(path)?);
    write_telemetry(&mut file, samples)?;
    file.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_output_has_header_and_rows() {
        let samples = vec![
            Sample { time: 0.0, position: 0.0, velocity: 0.0, thrust: 0.0, fuel: 100.0 },
            Sample { time: 1.0 / 60.0, position: 0.0139, velocity: 0.8333, thrust: 100.0, fuel: 99.9167 },
        ];

        let mut buf = Vec::new();
        write_telemetry(&mut buf, &samples).unwrap();
        let output = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "time,position,velocity,thrust,fuel");
        assert_eq!(lines.len(), 3); // header + 2 data rows
        assert_eq!(lines[1], "0.0000,0.0000,0.0000,0.0000,100.0000");
        assert!(lines[2].starts_with("0.0167,"));
    }
}
