use std::path::{Path, PathBuf};

use image::ImageFormat;
use tracing::{debug, error};

use crate::error::ExtractError;
use crate::gif::frame::Frame;

/// Every frame is written in this format.
pub const OUTPUT_FORMAT: ImageFormat = ImageFormat::Png;

/// Base name used when the input path has no file stem.
const FALLBACK_BASE: &str = "frame";

/// Maps frame positions to output files named `<base>_<index>.png`.
#[derive(Debug, Clone)]
pub struct OutputNaming {
    dir: PathBuf,
    base: String,
}

impl OutputNaming {
    pub fn new(dir: impl Into<PathBuf>, base: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            base: base.into(),
        }
    }

    /// Name outputs after the input's file stem, so `6.gif` becomes `6_0.png`, `6_1.png`, ...
    pub fn from_input(dir: impl Into<PathBuf>, input: &Path) -> Self {
        let base = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| FALLBACK_BASE.to_string());
        Self::new(dir, base)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn path_for(&self, index: u32) -> PathBuf {
        let ext = OUTPUT_FORMAT.extensions_str()[0];
        self.dir.join(format!("{}_{}.{}", self.base, index, ext))
    }

    /// Create the output directory if it does not exist yet.
    pub fn prepare(&self) -> Result<(), ExtractError> {
        std::fs::create_dir_all(&self.dir).map_err(|e| {
            error!(dir = ?self.dir, %e, "failed to create output directory");
            ExtractError::WriteFailure {
                path: self.dir.clone(),
                source: image::ImageError::IoError(e),
            }
        })
    }

    /// Encode `frame` into its numbered output file and return the path written.
    pub fn write(&self, frame: &Frame) -> Result<PathBuf, ExtractError> {
        let path = self.path_for(frame.index);
        frame
            .image
            .save_with_format(&path, OUTPUT_FORMAT)
            .map_err(|source| {
                error!(?path, index = frame.index, %source, "failed to write frame");
                ExtractError::WriteFailure {
                    path: path.clone(),
                    source,
                }
            })?;

        debug!(?path, index = frame.index, "wrote frame");
        Ok(path)
    }
}
