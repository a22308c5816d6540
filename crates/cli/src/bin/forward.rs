//! Project a destination from an origin along an azimuth/elevation for a given range.

use std::io::Write;

use clap::Parser;
use geodesic_pointing::export::record::Destination;
use geodesic_pointing::export::{json, table, writer_for_path};
use geodesic_pointing::get_point;
use pointing_cli::{CommonArgs, OutputFormat, init_logging, resolve_point};
use tracing::info;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Destination point from origin, range, azimuth and elevation"
)]
struct Cli {
    /// Origin as a site name or `lat,lon[,alt]`
    #[arg(long, allow_hyphen_values = true)]
    origin: String,

    /// Range to the destination in metres
    #[arg(long, allow_hyphen_values = true)]
    distance: f64,

    /// Compass azimuth in degrees (0 north, clockwise)
    #[arg(long, allow_hyphen_values = true)]
    azimuth: f64,

    /// Elevation above the local horizontal in degrees
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    elevation: f64,

    #[command(flatten)]
    common: CommonArgs,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.common.verbose);

    let origin = resolve_point(&cli.origin, &cli.common.sites)?;
    let destination = get_point(&origin, cli.distance, cli.azimuth, cli.elevation)?;
    info!(%origin, %destination, "forward pointing solved");

    let record = Destination::new(
        &origin,
        cli.distance,
        cli.azimuth,
        cli.elevation,
        &destination,
    );
    let mut writer = writer_for_path(&cli.common.output)?;
    match cli.common.format {
        OutputFormat::Text => {
            writeln!(writer, "=== Forward Pointing ===")?;
            writeln!(writer, "Origin      : {origin}")?;
            writeln!(
                writer,
                "Pointing    : range = {:.3} m, azimuth = {:.6}°, elevation = {:.6}°",
                cli.distance, cli.azimuth, cli.elevation
            )?;
            writeln!(
                writer,
                "Destination : lat = {:.8}°, lon = {:.8}°, alt = {:.3} m",
                destination.latitude, destination.longitude, destination.altitude
            )?;
        }
        OutputFormat::Json => json::write_destination(&mut writer, &record)?,
        OutputFormat::Csv => table::write_destinations(&mut writer, &[record])?,
    }
    writer.flush()?;
    Ok(())
}
