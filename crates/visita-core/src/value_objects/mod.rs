//! Value objects - immutable types that represent domain concepts

mod geo;
mod snowflake;

pub use geo::{haversine_km, haversine_m, Coordinates, EARTH_RADIUS_KM};
pub use snowflake::{Snowflake, SnowflakeGenerator, SnowflakeParseError};
