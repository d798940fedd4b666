//! GPX Splitter - Core Document Model and Splitting Algorithms
//!
//! This library splits a GPX track recording into multiple smaller track files,
//! either by a fixed number of output files or by a target distance per output
//! segment. Parsing and serialization are delegated to the `gpx` crate, whose
//! owned, `Clone`-able document types give every output file its own deep copy
//! with no aliasing back into the original.
//!
//! # Architecture
//!
//! - **[`TrackDocument`]**: Owned, validated GPX document (parse, clone, serialize)
//! - **[`SplitMode`]**: The two splitting strategies (file count / distance)
//! - **[`split`]**: Pure chunking functions over point sequences
//! - **[`distance`]**: Planar great-circle length estimation
//! - **[`pipeline`]**: Per-file processing (parse, split, assemble, write)
//!
//! Only the first track's first segment is ever split; everything else in the
//! document (metadata, extra tracks) is preserved verbatim on output. This is
//! a documented assumption of the tool, validated up front, not a silent one.

pub mod cli;
pub mod distance;
mod document;
pub mod pipeline;
pub mod split;

pub use document::TrackDocument;
pub use split::SplitMode;

/// Error types for the splitting pipeline
#[derive(Debug, thiserror::Error)]
pub enum SplitError {
    #[error("GPX parsing error: {0}")]
    Parse(#[source] gpx::errors::GpxError),

    #[error("GPX serialization error: {0}")]
    Serialize(#[source] gpx::errors::GpxError),

    #[error("document contains no tracks")]
    NoTracks,

    #[error("first track contains no segment with points")]
    EmptySegment,

    #[error("track has zero planar length, cannot split by distance")]
    DegenerateTrack,

    #[error("invalid split parameter: {0}")]
    InvalidSplitParameter(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SplitError>;
