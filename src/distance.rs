//! Planar distance estimation for point sequences
//!
//! Distance-mode splitting needs the total 2D length of a segment. This is an
//! approximation by design: it assumes points are roughly evenly distributed
//! along the path and ignores elevation entirely.

use geo::Point;

/// Conversion factor between meters and statute miles
pub const METERS_PER_MILE: f64 = 1609.34;

/// Earth's mean radius in meters
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Calculate the Haversine distance between two coordinates in meters
#[inline]
pub fn haversine_meters(p1: Point<f64>, p2: Point<f64>) -> f64 {
    let lat1 = p1.y().to_radians();
    let lat2 = p2.y().to_radians();
    let delta_lat = (p2.y() - p1.y()).to_radians();
    let delta_lon = (p2.x() - p1.x()).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_M * c
}

/// Total planar length of a point sequence in meters
///
/// Sums pairwise great-circle distances between consecutive points.
/// Returns 0.0 for sequences of fewer than two points.
pub fn path_length_meters(points: &[gpx::Waypoint]) -> f64 {
    points
        .windows(2)
        .map(|pair| haversine_meters(pair[0].point(), pair[1].point()))
        .sum()
}
