//! Ellipsoidal projection plus forward and inverse pointing geodesics.
//!
//! [`get_point`] walks from an origin along an azimuth/elevation for a given
//! range; [`get_relative_point_position`] recovers elevation, azimuth and
//! range between two points. Both are pure and allocation free.

pub mod ellipsoid;
pub mod forward;
pub mod frame;
pub mod inverse;
pub mod point;

pub use ellipsoid::{CartesianVector, project};
pub use forward::{ConstructionError, get_point};
pub use inverse::{ComputationFailure, PointRole, RelativePosition, get_relative_point_position};
pub use point::{GeodeticPoint, ParsePointError};
