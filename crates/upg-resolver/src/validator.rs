//! Coordinate validation
//!
//! Every source runs its raw latitude/longitude through [`validate`] before
//! a candidate is accepted.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Valid latitude range in degrees
pub const LATITUDE_RANGE: std::ops::RangeInclusive<f64> = -90.0..=90.0;

/// Valid longitude range in degrees
pub const LONGITUDE_RANGE: std::ops::RangeInclusive<f64> = -180.0..=180.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Latitude => f.write_str("latitude"),
            Axis::Longitude => f.write_str("longitude"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidCoordinate {
    #[error("missing {0}")]
    Missing(Axis),
    #[error("{axis} is not a number: {raw:?}")]
    NotNumeric { axis: Axis, raw: String },
    #[error("{axis} {value} out of range")]
    OutOfRange { axis: Axis, value: f64 },
}

/// Parse and range-check a raw coordinate pair.
pub fn validate(
    lat_raw: Option<&str>,
    lon_raw: Option<&str>,
) -> Result<(f64, f64), InvalidCoordinate> {
    let lat = parse_axis(Axis::Latitude, lat_raw)?;
    let lon = parse_axis(Axis::Longitude, lon_raw)?;
    validate_pair(lat, lon)
}

/// Range-check an already numeric pair.
pub fn validate_pair(lat: f64, lon: f64) -> Result<(f64, f64), InvalidCoordinate> {
    check_range(Axis::Latitude, lat)?;
    check_range(Axis::Longitude, lon)?;
    Ok((lat, lon))
}

fn parse_axis(axis: Axis, raw: Option<&str>) -> Result<f64, InvalidCoordinate> {
    let raw = raw.map(str::trim).filter(|s| !s.is_empty());
    let raw = raw.ok_or(InvalidCoordinate::Missing(axis))?;

    match raw.parse::<f64>() {
        // "NaN" and "inf" parse, but are not coordinates
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(InvalidCoordinate::NotNumeric {
            axis,
            raw: raw.to_string(),
        }),
    }
}

fn check_range(axis: Axis, value: f64) -> Result<(), InvalidCoordinate> {
    let range = match axis {
        Axis::Latitude => LATITUDE_RANGE,
        Axis::Longitude => LONGITUDE_RANGE,
    };
    if value.is_finite() && range.contains(&value) {
        Ok(())
    } else {
        Err(InvalidCoordinate::OutOfRange { axis, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_pair() {
        assert_eq!(validate(Some("42.0"), Some("47.5")), Ok((42.0, 47.5)));
        assert_eq!(validate(Some(" -90 "), Some("180")), Ok((-90.0, 180.0)));
        assert_eq!(validate(Some("90"), Some("-180")), Ok((90.0, -180.0)));
    }

    #[test]
    fn test_missing() {
        assert_eq!(
            validate(None, Some("1.0")),
            Err(InvalidCoordinate::Missing(Axis::Latitude))
        );
        assert_eq!(
            validate(Some("1.0"), Some("   ")),
            Err(InvalidCoordinate::Missing(Axis::Longitude))
        );
    }

    #[test]
    fn test_not_numeric() {
        assert!(matches!(
            validate(Some("north"), Some("1.0")),
            Err(InvalidCoordinate::NotNumeric { axis: Axis::Latitude, .. })
        ));
        assert!(matches!(
            validate(Some("1.0"), Some("NaN")),
            Err(InvalidCoordinate::NotNumeric { axis: Axis::Longitude, .. })
        ));
        assert!(matches!(
            validate(Some("inf"), Some("1.0")),
            Err(InvalidCoordinate::NotNumeric { .. })
        ));
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(
            validate(Some("90.0001"), Some("0")),
            Err(InvalidCoordinate::OutOfRange { axis: Axis::Latitude, value: 90.0001 })
        );
        assert_eq!(
            validate(Some("0"), Some("-180.5")),
            Err(InvalidCoordinate::OutOfRange { axis: Axis::Longitude, value: -180.5 })
        );
        assert!(validate_pair(f64::NAN, 0.0).is_err());
    }
}
