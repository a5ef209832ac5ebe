use crate::foundation::error::{WavepeekError, WavepeekResult};

/// Smallest representable sample amplitude (signed 16-bit).
pub const SAMPLE_MIN: f32 = i16::MIN as f32;
/// Largest representable sample amplitude (signed 16-bit).
pub const SAMPLE_MAX: f32 = i16::MAX as f32;
/// Full amplitude span, used to normalize amplitudes into pixel rows.
pub const SAMPLE_RANGE: f32 = SAMPLE_MAX - SAMPLE_MIN;

/// Output image dimensions in pixels. Both axes must be non-zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ImageSize {
    /// Width in pixels; one waveform column is painted per unit.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl ImageSize {
    /// Validate and build an [`ImageSize`].
    pub fn new(width: u32, height: u32) -> WavepeekResult<Self> {
        if width == 0 {
            return Err(WavepeekError::validation("image width must be > 0"));
        }
        if height == 0 {
            return Err(WavepeekError::validation("image height must be > 0"));
        }
        Ok(Self { width, height })
    }
}

/// The (min, max) pair of mixed-down amplitudes observed within one pixel
/// column's frame window, in sample-amplitude units (not pixel units).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColumnEnvelope {
    /// Quietest mixed-down frame value in the window.
    pub min: f32,
    /// Loudest mixed-down frame value in the window.
    pub max: f32,
}
