//! Shared plumbing for the pointing binaries: logging, point resolution, output.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, ValueEnum};
use geodesic_pointing::GeodeticPoint;
use geodesic_pointing::config::{SiteConfig, find_site, load_sites};
use tracing::{debug, info};

/// Default catalog, relative to the working directory.
pub const DEFAULT_SITES: &str = "data/sites.yaml";

#[derive(Copy, Clone, ValueEnum, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Csv,
}

/// Flags common to every pointing binary.
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Site catalog (YAML list, TOML file, or directory of TOML files)
    #[arg(long, value_name = "PATH", default_value = DEFAULT_SITES)]
    pub sites: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write output to a file instead of stdout (`-` for stdout)
    #[arg(long, value_name = "FILE", default_value = "-")]
    pub output: PathBuf,

    /// Verbose logging (DEBUG level)
    #[arg(long, short, default_value_t = false)]
    pub verbose: bool,
}

/// Install the stderr log subscriber.
pub fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    let _ = tracing_subscriber::fmt()
        .with_target(false)
        .with_thread_ids(false)
        .with_level(true)
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .try_init();
    debug!("Verbose logging enabled (DEBUG level)");
}

/// Resolve a `lat,lon[,alt]` literal, or else a site name from the catalog.
///
/// Text containing a comma is always treated as a literal, so a malformed
/// coordinate reports the parse error instead of a missing site.
pub fn resolve_point(spec: &str, sites_path: &Path) -> anyhow::Result<GeodeticPoint> {
    if spec.contains(',') {
        let point = spec
            .parse::<GeodeticPoint>()
            .with_context(|| format!("invalid coordinates `{spec}`"))?;
        debug!(%point, "using literal coordinates");
        return Ok(point);
    }
    let sites = load_catalog(sites_path)?;
    let site = find_site(&sites, spec)?;
    info!(site = %site.name, point = %site.point(), "resolved site");
    Ok(site.point())
}

fn load_catalog(path: &Path) -> anyhow::Result<Vec<SiteConfig>> {
    let sites = load_sites(path).map_err(|err| {
        anyhow::anyhow!("unable to load site catalog {}: {err}", path.display())
    })?;
    debug!(count = sites.len(), path = %path.display(), "loaded site catalog");
    Ok(sites)
}
