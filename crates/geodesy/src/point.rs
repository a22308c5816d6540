//! Geodetic point carrier and its textual form.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Latitude/longitude in decimal degrees, altitude in metres.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GeodeticPoint {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64,
}

/// Errors raised when a point is parsed or range-checked.
#[derive(Debug, Error, PartialEq)]
pub enum ParsePointError {
    #[error("expected `lat,lon[,alt]`, got `{0}`")]
    Shape(String),
    #[error("invalid {field} `{value}`")]
    Number { field: &'static str, value: String },
    #[error("{field} {value} is outside [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

impl GeodeticPoint {
    pub const fn new(latitude: f64, longitude: f64, altitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            altitude,
        }
    }

    /// True when every component is a finite number.
    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite() && self.altitude.is_finite()
    }

    /// Check the latitude/longitude ranges.
    ///
    /// The geodesy routines never call this; out-of-range input flows through
    /// them and yields meaningless numbers. Loaders that accept user data should.
    pub fn validate(&self) -> Result<(), ParsePointError> {
        check_range("latitude", self.latitude, -90.0, 90.0)?;
        check_range("longitude", self.longitude, -180.0, 180.0)?;
        if !self.altitude.is_finite() {
            return Err(ParsePointError::Number {
                field: "altitude",
                value: self.altitude.to_string(),
            });
        }
        Ok(())
    }
}

fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), ParsePointError> {
    if value.is_finite() && (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ParsePointError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}

impl FromStr for GeodeticPoint {
    type Err = ParsePointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if !(2..=3).contains(&parts.len()) {
            return Err(ParsePointError::Shape(s.to_string()));
        }
        let number = |field: &'static str, raw: &str| {
            raw.parse::<f64>().map_err(|_| ParsePointError::Number {
                field,
                value: raw.to_string(),
            })
        };
        let latitude = number("latitude", parts[0])?;
        let longitude = number("longitude", parts[1])?;
        let altitude = match parts.get(2) {
            Some(raw) => number("altitude", raw)?,
            None => 0.0,
        };
        Ok(Self::new(latitude, longitude, altitude))
    }
}

impl fmt::Display for GeodeticPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.8},{:.8},{:.3}",
            self.latitude, self.longitude, self.altitude
        )
    }
}
