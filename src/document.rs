//! Track document model - validated GPX data with clone-based assembly
//!
//! This module wraps the raw `gpx::Gpx` value in a [`TrackDocument`] that is
//! only constructible when the document is actually splittable: at least one
//! track whose first segment holds at least one point. Everything downstream
//! relies on that invariant instead of re-checking it.
//!
//! Only the first track's first segment participates in splitting. Additional
//! tracks, segments and document metadata are carried through untouched and
//! reappear verbatim in every output file.

use crate::{Result, SplitError};
use gpx::{Gpx, TrackSegment, Waypoint};
use std::io::{Read, Write};

/// A parsed GPX document validated for splitting
#[derive(Clone, Debug, PartialEq)]
pub struct TrackDocument {
    gpx: Gpx,
}

impl TrackDocument {
    /// Create a document from already-parsed GPX data
    ///
    /// Fails with [`SplitError::NoTracks`] when the document holds no tracks
    /// and [`SplitError::EmptySegment`] when the first track's first segment
    /// holds no points.
    pub fn new(gpx: Gpx) -> Result<Self> {
        let track = gpx.tracks.first().ok_or(SplitError::NoTracks)?;
        let splittable = track
            .segments
            .first()
            .is_some_and(|segment| !segment.points.is_empty());
        if !splittable {
            return Err(SplitError::EmptySegment);
        }
        Ok(Self { gpx })
    }

    /// Parse a GPX document from a byte stream
    pub fn from_reader(reader: impl Read) -> Result<Self> {
        let gpx = gpx::read(reader).map_err(SplitError::Parse)?;
        Self::new(gpx)
    }

    /// Serialize the document as GPX XML to a byte stream
    ///
    /// Preserves all fields the model retains, including metadata and tracks
    /// that splitting never touched.
    pub fn to_writer(&self, writer: impl Write) -> Result<()> {
        gpx::write(&self.gpx, writer).map_err(SplitError::Serialize)
    }

    /// Access the raw GPX data
    #[inline]
    pub fn gpx_data(&self) -> &Gpx {
        &self.gpx
    }

    /// The points of the first track's first segment, the splitting subject
    #[inline]
    pub fn points(&self) -> &[Waypoint] {
        // Non-emptiness of this path is the construction invariant.
        &self.gpx.tracks[0].segments[0].points
    }

    /// Build one output document per segment
    ///
    /// Each output is a deep clone of this document with the first track's
    /// segment list replaced by the single given segment. Output order matches
    /// segment order, and no clone shares mutable state with its siblings or
    /// with `self`.
    pub fn assemble(&self, segments: Vec<TrackSegment>) -> Vec<TrackDocument> {
        segments
            .into_iter()
            .map(|segment| {
                let mut gpx = self.gpx.clone();
                gpx.tracks[0].segments = vec![segment];
                TrackDocument { gpx }
            })
            .collect()
    }
}
