use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use image::codecs::gif::GifDecoder;
use image::error::{DecodingError, ImageFormatHint};
use image::{AnimationDecoder, Frames, ImageError, ImageFormat};
use tracing::{debug, error, info, warn};

use super::frame::Frame;
use crate::error::ExtractError;

/// An open GIF with a movable current-frame pointer.
///
/// Frames are decoded lazily from the file as the pointer moves forward; only
/// the current frame is held in memory. Moving backwards reopens the file.
/// Dropping the source closes the file.
pub struct GifSource {
    path: PathBuf,
    frame_count: u32,
    frames: Frames<'static>,
    current: image::Frame,
    position: u32,
}

impl GifSource {
    /// Open a GIF file, count its frames and position the pointer on frame 0.
    pub fn open(path: &Path) -> Result<Self, ExtractError> {
        info!(?path, "opening GIF source");

        let frame_count = count_frames(path)?;
        let (frames, current) = start(path)?;

        let (width, height) = current.buffer().dimensions();
        info!(?path, frame_count, width, height, "GIF source opened");

        Ok(Self {
            path: path.to_path_buf(),
            frame_count,
            frames,
            current,
            position: 0,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Total number of frames reported by the decoder. Always at least 1.
    pub fn frame_count(&self) -> u32 {
        self.frame_count
    }

    /// Position of the current frame (0-based).
    pub fn position(&self) -> u32 {
        self.position
    }

    /// Every valid frame position, in increasing order.
    pub fn positions(&self) -> FramePositions {
        FramePositions {
            next: 0,
            end: self.frame_count,
        }
    }

    /// Move the current-frame pointer to `index`, decoding forward to reach it.
    pub fn seek(&mut self, index: u32) -> Result<(), ExtractError> {
        let frame_count = self.frame_count;
        if index >= frame_count {
            error!(index, frame_count, "seek past the last frame");
            return Err(ExtractError::SeekOutOfRange { index, frame_count });
        }

        if index < self.position {
            debug!(from = self.position, to = index, "rewinding GIF source");
            let (frames, first) = start(&self.path)?;
            self.frames = frames;
            self.current = first;
            self.position = 0;
        }

        while self.position < index {
            let next = self.position + 1;
            match self.frames.next() {
                Some(Ok(frame)) => {
                    self.current = frame;
                    self.position = next;
                }
                Some(Err(source)) => {
                    error!(index = next, %source, "failed to decode frame");
                    return Err(ExtractError::CorruptFrame { index: next, source });
                }
                None => {
                    error!(index = next, frame_count, "GIF stream ended early");
                    return Err(ExtractError::SeekOutOfRange { index, frame_count });
                }
            }
        }
        Ok(())
    }

    /// Render the current frame as a standalone image.
    pub fn current_frame(&self) -> Frame {
        let (numer, denom) = self.current.delay().numer_denom_ms();
        let delay_ms = if denom > 0 { numer / denom } else { 0 };

        debug!(index = self.position, delay_ms, "rendered frame");

        Frame {
            image: self.current.buffer().clone(),
            index: self.position,
            delay_ms,
        }
    }
}

impl Drop for GifSource {
    fn drop(&mut self) {
        info!(path = ?self.path, frame_count = self.frame_count, "GIF source released");
    }
}

fn open_stream(path: &Path) -> Result<Frames<'static>, ImageError> {
    let file = File::open(path).map_err(ImageError::IoError)?;
    let decoder = GifDecoder::new(BufReader::new(file))?;
    Ok(decoder.into_frames())
}

/// Open a fresh frame stream and decode frame 0 from it.
fn start(path: &Path) -> Result<(Frames<'static>, image::Frame), ExtractError> {
    let mut frames = open_stream(path).map_err(|e| unreadable(path, e))?;
    match frames.next() {
        Some(Ok(first)) => Ok((frames, first)),
        Some(Err(source)) => Err(unreadable(path, source)),
        None => Err(unreadable(path, decoding_error("GIF contains no frames"))),
    }
}

/// Walk the whole stream once, dropping each frame as soon as it is counted.
///
/// A frame that fails to decode after at least one good frame still counts, so
/// the frames before it can be extracted and the failure surfaces on seek.
fn count_frames(path: &Path) -> Result<u32, ExtractError> {
    let mut count: u32 = 0;
    for result in open_stream(path).map_err(|e| unreadable(path, e))? {
        match result {
            Ok(_) => {}
            Err(source) if count == 0 => return Err(unreadable(path, source)),
            Err(source) => {
                warn!(?path, index = count, %source, "frame failed to decode while counting");
                count = count.saturating_add(1);
                break;
            }
        }
        count = count
            .checked_add(1)
            .ok_or_else(|| unreadable(path, decoding_error("GIF has too many frames")))?;
    }

    if count == 0 {
        return Err(unreadable(path, decoding_error("GIF contains no frames")));
    }
    Ok(count)
}

fn unreadable(path: &Path, source: ImageError) -> ExtractError {
    error!(?path, %source, "failed to read GIF source");
    ExtractError::UnreadableSource {
        path: path.to_path_buf(),
        source,
    }
}

fn decoding_error(message: &'static str) -> ImageError {
    ImageError::Decoding(DecodingError::new(
        ImageFormatHint::Exact(ImageFormat::Gif),
        message,
    ))
}

/// Frame positions `0..frame_count` of one opened source. Consumed as it is
/// iterated; open the source again to walk the frames a second time.
#[derive(Debug)]
pub struct FramePositions {
    next: u32,
    end: u32,
}

impl Iterator for FramePositions {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        if self.next >= self.end {
            return None;
        }
        let index = self.next;
        self.next += 1;
        Some(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.end - self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for FramePositions {}
