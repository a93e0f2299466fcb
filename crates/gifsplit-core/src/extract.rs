use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::ExtractError;
use crate::gif::source::GifSource;
use crate::output::OutputNaming;

/// Parameters for splitting a GIF into frame files.
pub struct ExtractConfig {
    /// Directory the frame files are written into.
    pub output_dir: PathBuf,
    /// Base name for the frame files, or None to use the input's file stem.
    pub base_name: Option<String>,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            base_name: None,
        }
    }
}

/// Write every frame of the GIF at `input` to its own PNG file.
///
/// Returns the written paths in frame order. The first failure aborts the run;
/// files written before it are left in place.
pub fn extract_frames(input: &Path, config: &ExtractConfig) -> Result<Vec<PathBuf>, ExtractError> {
    let naming = match &config.base_name {
        Some(base) => OutputNaming::new(&config.output_dir, base.as_str()),
        None => OutputNaming::from_input(&config.output_dir, input),
    };

    info!(?input, dir = ?naming.dir(), base = naming.base(), "extraction starting");

    let mut source = GifSource::open(input)?;
    naming.prepare()?;

    let mut written = Vec::with_capacity(source.frame_count() as usize);
    for index in source.positions() {
        source.seek(index)?;
        let frame = source.current_frame();
        written.push(naming.write(&frame)?);
    }

    info!(
        ?input,
        frame_count = source.frame_count(),
        files_written = written.len(),
        "extraction complete"
    );
    Ok(written)
}
