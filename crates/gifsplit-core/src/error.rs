use std::path::PathBuf;

use thiserror::Error;

/// Failures raised while splitting a GIF into frame files. None are recovered
/// locally; the first one aborts the run.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The source is missing, unreadable, not a decodable GIF, or has no frames.
    #[error("cannot read GIF source {}", path.display())]
    UnreadableSource {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// A frame position at or past the end of the source was requested.
    #[error("frame {index} is out of range (source has {frame_count} frames)")]
    SeekOutOfRange { index: u32, frame_count: u32 },

    /// A frame after the first one failed to decode while streaming.
    #[error("frame {index} could not be decoded")]
    CorruptFrame {
        index: u32,
        #[source]
        source: image::ImageError,
    },

    /// A frame could not be written to its output file.
    #[error("failed to write frame to {}", path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}
