//! Observation site catalogs for the geodesic pointing calculator.

use std::fs::File;
use std::path::{Path, PathBuf};

use pointing_geodesy::{GeodeticPoint, ParsePointError};
use serde::Deserialize;
use thiserror::Error;

/// Named observation site parsed from a catalog.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SiteConfig {
    pub name: String,
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    #[serde(default)]
    pub altitude_m: f64,
    #[serde(default)]
    pub description: Option<String>,
}

impl SiteConfig {
    /// Geodetic position of the site.
    pub fn point(&self) -> GeodeticPoint {
        GeodeticPoint::new(self.latitude_deg, self.longitude_deg, self.altitude_m)
    }
}

/// Errors that can occur while loading site catalogs.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("site `{name}` is invalid: {source}")]
    InvalidSite {
        name: String,
        #[source]
        source: ParsePointError,
    },
    #[error("site `{0}` appears more than once")]
    DuplicateSite(String),
    #[error("site `{0}` not found in catalog")]
    UnknownSite(String),
}

/// Load site configurations from a YAML list, a TOML file, or a directory of TOML files.
///
/// Every site is range-checked; names must be unique ignoring case.
pub fn load_sites<P: AsRef<Path>>(path: P) -> Result<Vec<SiteConfig>, ConfigError> {
    let sites: Vec<SiteConfig> = load_records(path)?;
    let mut seen = std::collections::BTreeSet::new();
    for site in &sites {
        site.point()
            .validate()
            .map_err(|source| ConfigError::InvalidSite {
                name: site.name.clone(),
                source,
            })?;
        if !seen.insert(site.name.to_uppercase()) {
            return Err(ConfigError::DuplicateSite(site.name.clone()));
        }
    }
    Ok(sites)
}

/// Find a site by name, ignoring case.
pub fn find_site<'a>(sites: &'a [SiteConfig], name: &str) -> Result<&'a SiteConfig, ConfigError> {
    let upper = name.to_uppercase();
    sites
        .iter()
        .find(|site| site.name.to_uppercase() == upper)
        .ok_or_else(|| ConfigError::UnknownSite(name.to_string()))
}

fn load_records<T, P>(path: P) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if path.is_dir() {
        read_dir_records(path)
    } else if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
        let contents = std::fs::read_to_string(path)?;
        let record: T = toml::from_str(&contents)?;
        Ok(vec![record])
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

fn read_dir_records<T>(dir: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    let mut records = Vec::new();
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().map(|ext| ext == "toml").unwrap_or(false))
        .collect();
    entries.sort();
    for path in entries {
        let contents = std::fs::read_to_string(&path)?;
        let record: T = toml::from_str(&contents)?;
        records.push(record);
    }
    Ok(records)
}
