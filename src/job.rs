use std::path::PathBuf;

use crate::foundation::core::ImageSize;
use crate::foundation::error::WavepeekResult;

/// One thumbnail render request. The `wavepeek` binary deserializes JSON
/// arrays of these for batch rendering.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct ThumbnailJob {
    /// Source audio file.
    pub input: PathBuf,
    /// Destination image path; the extension selects the encoder.
    pub output: PathBuf,
    /// Output width in pixels, must be > 0.
    pub width: u32,
    /// Output height in pixels, must be > 0.
    pub height: u32,
    /// Cap the frames inspected per column (speed over accuracy).
    #[serde(default)]
    pub cheat: bool,
}

impl ThumbnailJob {
    /// Validate the requested dimensions.
    pub fn size(&self) -> WavepeekResult<ImageSize> {
        ImageSize::new(self.width, self.height)
    }
}
