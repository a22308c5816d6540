//! Geodesic pointing: forward and inverse observer/target geometry on an
//! ellipsoidal Earth.
//!
//! The computation lives in the member crates; this facade lets front-ends
//! (the CLI today) depend on a single crate.

pub use pointing_config as config;
pub use pointing_core as primitives;
pub use pointing_export as export;
pub use pointing_geodesy as geodesy;

pub use pointing_geodesy::{
    CartesianVector, ComputationFailure, ConstructionError, GeodeticPoint, RelativePosition,
    get_point, get_relative_point_position, project,
};

/// Returns the version of the library for smoke tests.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
