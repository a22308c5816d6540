//! Export helpers for CSV and JSON pointing solutions.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use thiserror::Error;

/// Errors surfaced while writing solutions.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to write JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Create a writer for the target path, handling stdout (`-`) by convention.
pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    Ok(Box::new(BufWriter::new(file)))
}

/// Flat records shared by the CSV and JSON writers.
pub mod record {
    use pointing_geodesy::{GeodeticPoint, RelativePosition};
    use serde::Serialize;

    /// A forward solution: origin, pointing request and destination.
    #[derive(Debug, Clone, PartialEq, Serialize)]
    pub struct Destination {
        pub origin_latitude_deg: f64,
        pub origin_longitude_deg: f64,
        pub origin_altitude_m: f64,
        pub distance_m: f64,
        pub azimuth_deg: f64,
        pub elevation_deg: f64,
        pub latitude_deg: f64,
        pub longitude_deg: f64,
        pub altitude_m: f64,
    }

    impl Destination {
        pub fn new(
            origin: &GeodeticPoint,
            distance_m: f64,
            azimuth_deg: f64,
            elevation_deg: f64,
            destination: &GeodeticPoint,
        ) -> Self {
            Self {
                origin_latitude_deg: origin.latitude,
                origin_longitude_deg: origin.longitude,
                origin_altitude_m: origin.altitude,
                distance_m,
                azimuth_deg,
                elevation_deg,
                latitude_deg: destination.latitude,
                longitude_deg: destination.longitude,
                altitude_m: destination.altitude,
            }
        }
    }

    /// An inverse solution: both points and the target's relative position.
    #[derive(Debug, Clone, PartialEq, Serialize)]
    pub struct Relative {
        pub reference_latitude_deg: f64,
        pub reference_longitude_deg: f64,
        pub reference_altitude_m: f64,
        pub target_latitude_deg: f64,
        pub target_longitude_deg: f64,
        pub target_altitude_m: f64,
        pub bearing_deg: f64,
        pub azimuth_deg: f64,
        pub distance_km: f64,
    }

    impl Relative {
        pub fn new(
            reference: &GeodeticPoint,
            target: &GeodeticPoint,
            position: &RelativePosition,
        ) -> Self {
            Self {
                reference_latitude_deg: reference.latitude,
                reference_longitude_deg: reference.longitude,
                reference_altitude_m: reference.altitude,
                target_latitude_deg: target.latitude,
                target_longitude_deg: target.longitude,
                target_altitude_m: target.altitude,
                bearing_deg: position.bearing,
                azimuth_deg: position.azimuth,
                distance_km: position.distance_km,
            }
        }
    }
}

/// CSV tables with a header row.
pub mod table {
    use std::io::Write;

    use serde::Serialize;

    use super::ExportError;
    use super::record::{Destination, Relative};

    /// Write forward solutions with a header row.
    pub fn write_destinations<W: Write>(
        writer: W,
        records: &[Destination],
    ) -> Result<(), ExportError> {
        write_records(writer, records)
    }

    /// Write inverse solutions with a header row.
    pub fn write_relative_positions<W: Write>(
        writer: W,
        records: &[Relative],
    ) -> Result<(), ExportError> {
        write_records(writer, records)
    }

    fn write_records<W: Write, T: Serialize>(writer: W, records: &[T]) -> Result<(), ExportError> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        for record in records {
            csv_writer.serialize(record)?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}

/// Pretty-printed JSON documents.
pub mod json {
    use std::io::Write;

    use serde_json::to_writer_pretty;

    use super::ExportError;
    use super::record::{Destination, Relative};

    /// Write a forward solution as pretty JSON followed by a newline.
    pub fn write_destination<W: Write>(
        mut writer: W,
        record: &Destination,
    ) -> Result<(), ExportError> {
        to_writer_pretty(&mut writer, record)?;
        writeln!(writer)?;
        Ok(())
    }

    /// Write an inverse solution as pretty JSON followed by a newline.
    pub fn write_relative_position<W: Write>(
        mut writer: W,
        record: &Relative,
    ) -> Result<(), ExportError> {
        to_writer_pretty(&mut writer, record)?;
        writeln!(writer)?;
        Ok(())
    }
}
