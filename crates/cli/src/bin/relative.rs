//! Elevation, azimuth and range of a target as seen from a reference point.

use std::io::Write;

use clap::Parser;
use geodesic_pointing::export::record::Relative;
use geodesic_pointing::export::{json, table, writer_for_path};
use geodesic_pointing::get_relative_point_position;
use pointing_cli::{CommonArgs, OutputFormat, init_logging, resolve_point};
use tracing::info;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Bearing, azimuth and distance between two points"
)]
struct Cli {
    /// Reference point as a site name or `lat,lon[,alt]`
    #[arg(long, allow_hyphen_values = true)]
    from: String,

    /// Target point as a site name or `lat,lon[,alt]`
    #[arg(long, allow_hyphen_values = true)]
    to: String,

    #[command(flatten)]
    common: CommonArgs,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.common.verbose);

    let reference = resolve_point(&cli.from, &cli.common.sites)?;
    let target = resolve_point(&cli.to, &cli.common.sites)?;
    let position = get_relative_point_position(&reference, &target)?;
    info!(
        %reference,
        %target,
        bearing = position.bearing,
        azimuth = position.azimuth,
        distance_km = position.distance_km,
        "relative position solved"
    );

    let record = Relative::new(&reference, &target, &position);
    let mut writer = writer_for_path(&cli.common.output)?;
    match cli.common.format {
        OutputFormat::Text => {
            writeln!(writer, "=== Relative Position ===")?;
            writeln!(writer, "Reference : {reference}")?;
            writeln!(writer, "Target    : {target}")?;
            writeln!(writer, "Bearing   : {:.6}°", position.bearing)?;
            writeln!(writer, "Azimuth   : {:.6}°", position.azimuth)?;
            writeln!(writer, "Distance  : {:.10} km", position.distance_km)?;
        }
        OutputFormat::Json => json::write_relative_position(&mut writer, &record)?,
        OutputFormat::Csv => table::write_relative_positions(&mut writer, &[record])?,
    }
    writer.flush()?;
    Ok(())
}
