use std::borrow::Cow;
use std::fs::File;
use std::path::Path;

/// One frame of an indexed test GIF, placed at `left`/`top` on the screen.
pub struct FixtureFrame {
    pub left: u16,
    pub top: u16,
    pub width: u16,
    pub height: u16,
    pub indices: Vec<u8>,
}

impl FixtureFrame {
    /// A `width`x`height` rectangle filled with palette entry `index`.
    pub fn solid(left: u16, top: u16, width: u16, height: u16, index: u8) -> Self {
        Self {
            left,
            top,
            width,
            height,
            indices: vec![index; width as usize * height as usize],
        }
    }
}

/// Write an indexed GIF with a global palette. Every frame is shown for 100 ms
/// and left in place for the next one.
pub fn write_indexed_gif(
    path: &Path,
    width: u16,
    height: u16,
    palette: &[[u8; 3]],
    frames: &[FixtureFrame],
) {
    let file = File::create(path).unwrap();
    let flat: Vec<u8> = palette.iter().flatten().copied().collect();
    let mut encoder = gif::Encoder::new(file, width, height, &flat).unwrap();
    for f in frames {
        let frame = gif::Frame {
            left: f.left,
            top: f.top,
            width: f.width,
            height: f.height,
            delay: 10,
            dispose: gif::DisposalMethod::Keep,
            buffer: Cow::Borrowed(f.indices.as_slice()),
            ..gif::Frame::default()
        };
        encoder.write_frame(&frame).unwrap();
    }
}

/// Write an animated GIF with one full-screen solid frame per entry in `colors`.
pub fn write_gif(path: &Path, width: u16, height: u16, colors: &[[u8; 3]]) {
    let frames: Vec<_> = (0..colors.len())
        .map(|i| FixtureFrame::solid(0, 0, width, height, i as u8))
        .collect();
    write_indexed_gif(path, width, height, colors, &frames);
}

/// Grey level of pixel (`x`, `y`) in ramp frame `seed`.
pub fn ramp_value(x: u32, y: u32, seed: u32) -> u8 {
    ((x * 31 + y * 17 + seed * 97) % 251) as u8
}

/// Write `count` full-screen grey-ramp frames. The ramp compresses poorly, so
/// each frame's LZW data is large.
pub fn write_ramp_gif(path: &Path, width: u16, height: u16, count: u32) {
    let greys: Vec<[u8; 3]> = (0..=255u8).map(|v| [v, v, v]).collect();
    let frames: Vec<_> = (0..count)
        .map(|seed| FixtureFrame {
            left: 0,
            top: 0,
            width,
            height,
            indices: (0..height as u32)
                .flat_map(|y| (0..width as u32).map(move |x| ramp_value(x, y, seed)))
                .collect(),
        })
        .collect();
    write_indexed_gif(path, width, height, &greys, &frames);
}

/// Cut `trim` bytes off the end of a file.
pub fn truncate_file(path: &Path, trim: usize) {
    let bytes = std::fs::read(path).unwrap();
    std::fs::write(path, &bytes[..bytes.len() - trim]).unwrap();
}
