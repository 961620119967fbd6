//! tiepoint
//!
//! Piecewise-linear interpolated coordinates: instead of storing one
//! coordinate value per sample, a coordinate axis is defined by a sparse
//! set of tie points `(index, value)` and any sample's coordinate is
//! reconstructed by linear interpolation. Supports plain numeric axes and
//! calendar (UTC timestamp) axes.

pub mod coordinate;
pub mod mapping;

pub use coordinate::errors::CoordinateError;
pub use coordinate::linear::LinearCoordinate;
pub use coordinate::values::{Value, ValueArray, ValueKind};
