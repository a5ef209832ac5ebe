use std::path::Path;

use image::{Rgba, RgbaImage};

use crate::foundation::core::{ColumnEnvelope, ImageSize, SAMPLE_MIN, SAMPLE_RANGE};
use crate::foundation::error::{WavepeekError, WavepeekResult};

const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);
const FOREGROUND: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// In-memory raster accumulating painted columns, white background and black
/// foreground. Encoding punches the foreground out to full transparency, so
/// the waveform renders as a stencil over whatever sits behind the image.
pub struct WaveformCanvas {
    image: RgbaImage,
    row_bound: f32,
}

impl WaveformCanvas {
    /// Create a background-filled canvas of `size`.
    pub fn new(size: ImageSize) -> Self {
        Self {
            image: RgbaImage::from_pixel(size.width, size.height, BACKGROUND),
            row_bound: (size.height - 1) as f32,
        }
    }

    /// Paint `column`'s envelope as a 1-pixel-wide vertical span.
    ///
    /// Amplitudes map to rows via `floor((v - SAMPLE_MIN) / SAMPLE_RANGE *
    /// (height - 1))` in the raster's native top-down order; the axis is
    /// deliberately not inverted.
    ///
    /// # Panics
    ///
    /// Panics if `column` is not within the canvas width.
    pub fn paint_column(&mut self, column: u32, envelope: ColumnEnvelope) {
        debug_assert!(column < self.image.width());
        let y_min = self.amplitude_to_row(envelope.min);
        let y_max = self.amplitude_to_row(envelope.max);
        for y in y_min..=y_max {
            self.image.put_pixel(column, y, FOREGROUND);
        }
    }

    /// Finalize the raster: every foreground pixel becomes fully transparent.
    pub fn into_image(mut self) -> RgbaImage {
        for pixel in self.image.pixels_mut() {
            if *pixel == FOREGROUND {
                pixel.0[3] = 0;
            }
        }
        self.image
    }

    /// Finalize and encode to `path`, with the format selected by the file
    /// extension.
    pub fn write(self, path: &Path) -> WavepeekResult<()> {
        self.into_image().save(path).map_err(|err| {
            WavepeekError::output_write(format!("encode '{}': {err}", path.display()))
        })
    }

    fn amplitude_to_row(&self, value: f32) -> u32 {
        ((value - SAMPLE_MIN) / SAMPLE_RANGE * self.row_bound) as u32
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/canvas.rs"]
mod tests;
