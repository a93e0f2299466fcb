use image::RgbaImage;

/// A single decoded animation frame, composited onto the full logical screen.
pub struct Frame {
    /// The frame's image data.
    pub image: RgbaImage,
    /// Position of the frame in the source (0-based).
    pub index: u32,
    /// How long the frame is shown before the next one, in milliseconds.
    pub delay_ms: u32,
}
