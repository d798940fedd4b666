//! Segment splitting - pure partitioning of point sequences
//!
//! Both splitting strategies reduce to the same primitive: pick a chunk size,
//! then partition the point sequence into consecutive chunks of that size.
//! File-count mode derives the chunk size from `ceil(points / files)`, so the
//! number of output segments can be *less than* the requested file count when
//! the rounding under-fills the last chunk. Distance mode derives it from the
//! estimated points-per-mile density, which assumes points are roughly evenly
//! spaced along the track.

use crate::distance::{METERS_PER_MILE, path_length_meters};
use crate::{Result, SplitError};
use gpx::{TrackSegment, Waypoint};

/// Splitting strategy, carrying its single parameter
///
/// Exactly one mode applies per invocation; mutual exclusivity is enforced at
/// the CLI boundary.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SplitMode {
    /// Split into this many output files (chunk size rounds up)
    FileCount(usize),
    /// Split into chunks of roughly this many miles each
    DistanceMiles(f64),
}

impl SplitMode {
    /// Partition `points` into output segments according to this mode
    pub fn split(&self, points: &[Waypoint]) -> Result<Vec<TrackSegment>> {
        match *self {
            SplitMode::FileCount(count) => by_file_count(points, count),
            SplitMode::DistanceMiles(miles) => by_distance(points, miles),
        }
    }
}

/// Partition points into consecutive chunks of `chunk_size`
///
/// Lazy and restartable. All chunks but the last have exactly `chunk_size`
/// points; the last holds the remainder (or `chunk_size` when the length is
/// evenly divisible). Never yields an empty chunk, so no downstream document
/// can end up with a zero-point segment. `chunk_size` must be non-zero.
pub fn chunk(points: &[Waypoint], chunk_size: usize) -> std::slice::Chunks<'_, Waypoint> {
    points.chunks(chunk_size)
}

/// Split into (at most) `file_count` segments of equal derived chunk size
///
/// The chunk size is `ceil(total / file_count)`, so the output count is
/// `ceil(total / chunk_size)`, which may round below `file_count`. When
/// `file_count >= total`, every point gets its own segment.
pub fn by_file_count(points: &[Waypoint], file_count: usize) -> Result<Vec<TrackSegment>> {
    if file_count == 0 {
        return Err(SplitError::InvalidSplitParameter(
            "file count must be at least 1".to_string(),
        ));
    }
    if points.is_empty() {
        return Ok(Vec::new());
    }

    let chunk_size = points.len().div_ceil(file_count);
    Ok(chunk(points, chunk_size).map(segment_from).collect())
}

/// Split into segments of roughly `target_miles` estimated length each
///
/// Derives a points-per-mile density from the total planar length and chunks
/// by `ceil(density * target_miles)` points. A track with zero planar length
/// has no density to derive, which is rejected rather than divided through.
pub fn by_distance(points: &[Waypoint], target_miles: f64) -> Result<Vec<TrackSegment>> {
    if !target_miles.is_finite() || target_miles <= 0.0 {
        return Err(SplitError::InvalidSplitParameter(format!(
            "target distance must be a positive number of miles, got {target_miles}"
        )));
    }
    if points.is_empty() {
        return Ok(Vec::new());
    }

    let total_miles = path_length_meters(points) / METERS_PER_MILE;
    if total_miles == 0.0 {
        return Err(SplitError::DegenerateTrack);
    }

    let points_per_mile = points.len() as f64 / total_miles;
    let chunk_size = (points_per_mile * target_miles).ceil().max(1.0) as usize;
    Ok(chunk(points, chunk_size).map(segment_from).collect())
}

fn segment_from(points: &[Waypoint]) -> TrackSegment {
    TrackSegment {
        points: points.to_vec(),
    }
}
