//! Per-file processing pipeline
//!
//! One call to [`process`] handles one input file end to end: parse, split,
//! assemble, write. There is no shared state between calls, so a batch of
//! files could be processed by independent workers, though the CLI currently
//! runs them sequentially.

use crate::{Result, SplitError, SplitMode, TrackDocument};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Split one GPX file and write the resulting files alongside it
///
/// Output files are named `split-<N>-<original file name>` with N starting at
/// 1, written in the input's directory. Existing files with those names are
/// overwritten silently. Returns the written paths in output order.
pub fn process(path: &Path, mode: SplitMode) -> Result<Vec<PathBuf>> {
    tracing::info!("Opening {}", path.display());
    let input = File::open(path)?;
    let document = TrackDocument::from_reader(BufReader::new(input))?;

    let segments = mode.split(document.points())?;
    tracing::debug!(
        "Split {} points into {} segments",
        document.points().len(),
        segments.len()
    );

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| {
            SplitError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "input path has no file name",
            ))
        })?;
    let parent = path.parent().unwrap_or(Path::new(""));

    let mut written = Vec::with_capacity(segments.len());
    for (index, output) in document.assemble(segments).into_iter().enumerate() {
        let output_path = parent.join(format!("split-{}-{}", index + 1, file_name));
        let mut writer = BufWriter::new(File::create(&output_path)?);
        output.to_writer(&mut writer)?;
        writer.flush()?;
        tracing::info!("Saved {}", output_path.display());
        written.push(output_path);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpx::{Gpx, GpxVersion, Track, TrackSegment, Waypoint};

    fn create_test_document(point_count: usize) -> TrackDocument {
        let mut gpx = Gpx {
            version: GpxVersion::Gpx11,
            creator: Some("pipeline tests".to_string()),
            ..Default::default()
        };
        let mut track = Track::default();
        let mut segment = TrackSegment::default();
        for i in 0..point_count {
            segment.points.push(Waypoint::new(geo::Point::new(
                -0.1278 + i as f64 * 0.0001,
                51.5074 + i as f64 * 0.0001,
            )));
        }
        track.segments.push(segment);
        gpx.tracks.push(track);
        TrackDocument::new(gpx).unwrap()
    }

    /// Fresh scratch directory under the system temp dir
    fn create_scratch_dir(label: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "gpx-splitter-{}-{}",
            label,
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_process_writes_numbered_siblings() {
        let dir = create_scratch_dir("numbered");
        let input_path = dir.join("trip.gpx");
        let input = File::create(&input_path).unwrap();
        create_test_document(6).to_writer(input).unwrap();

        let written = process(&input_path, SplitMode::FileCount(3)).unwrap();

        assert_eq!(
            written,
            vec![
                dir.join("split-1-trip.gpx"),
                dir.join("split-2-trip.gpx"),
                dir.join("split-3-trip.gpx"),
            ]
        );
        for (i, path) in written.iter().enumerate() {
            let file = File::open(path).unwrap();
            let output = TrackDocument::from_reader(BufReader::new(file)).unwrap();
            assert_eq!(output.points().len(), 2);
            assert_eq!(
                output.gpx_data().creator.as_deref(),
                Some("pipeline tests"),
                "metadata lost in output {}",
                i + 1
            );
        }

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_process_overwrites_existing_outputs() {
        let dir = create_scratch_dir("overwrite");
        let input_path = dir.join("trip.gpx");
        create_test_document(4)
            .to_writer(File::create(&input_path).unwrap())
            .unwrap();
        std::fs::write(dir.join("split-1-trip.gpx"), "stale").unwrap();

        let written = process(&input_path, SplitMode::FileCount(2)).unwrap();
        assert_eq!(written.len(), 2);
        let replaced = std::fs::read_to_string(dir.join("split-1-trip.gpx")).unwrap();
        assert_ne!(replaced, "stale");

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_process_missing_input_is_io_error() {
        let dir = create_scratch_dir("missing");
        let result = process(&dir.join("nope.gpx"), SplitMode::FileCount(2));
        assert!(matches!(result, Err(SplitError::Io(_))));
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_process_degenerate_track_surfaces_split_error() {
        let dir = create_scratch_dir("degenerate");
        let input_path = dir.join("still.gpx");

        let mut gpx = Gpx {
            version: GpxVersion::Gpx11,
            ..Default::default()
        };
        let mut track = Track::default();
        let mut segment = TrackSegment::default();
        let point = Waypoint::new(geo::Point::new(-0.1278, 51.5074));
        segment.points.push(point.clone());
        segment.points.push(point);
        track.segments.push(segment);
        gpx.tracks.push(track);
        TrackDocument::new(gpx)
            .unwrap()
            .to_writer(File::create(&input_path).unwrap())
            .unwrap();

        let result = process(&input_path, SplitMode::DistanceMiles(1.0));
        assert!(matches!(result, Err(SplitError::DegenerateTrack)));

        // Nothing should have been written for the failed file.
        assert!(!dir.join("split-1-still.gpx").exists());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
