//! Format-agnostic audio input.
//!
//! Two mutually exclusive decoder backends share one capability set: report
//! frame/channel counts, seek to an absolute frame offset, and read a run of
//! interleaved 16-bit frames. [`AudioSource::open`] selects the backend once,
//! at open time; the compressed backend is tried only after the WAV backend
//! refuses the file.

use std::path::Path;

use crate::foundation::error::{WavepeekError, WavepeekResult};

mod compressed;
mod wav;

pub use compressed::CompressedBackend;
pub use wav::WavBackend;

/// Capability set shared by the decoder backends.
///
/// `seek` and `read` never surface errors: decode and IO problems are
/// backend-internal, logged at `warn`, and reported as a short (possibly
/// zero-frame) read. Only opening a source can fail.
pub trait AudioBackend {
    /// Total number of frames in the stream.
    fn frame_count(&self) -> u64;

    /// Number of interleaved channels, at least 1.
    fn channel_count(&self) -> u16;

    /// Reposition the read cursor to an absolute frame index. Arbitrary
    /// non-monotonic offsets are supported; skipped frames are not decoded
    /// where the backend can avoid it.
    fn seek(&mut self, frame: u64);

    /// Decode up to `buf.len() / channel_count` frames at the cursor into
    /// `buf` as interleaved signed 16-bit PCM, returning the number of whole
    /// frames actually decoded. May return fewer near end-of-stream; `buf`
    /// beyond the returned frames is unspecified.
    fn read(&mut self, buf: &mut [i16]) -> usize;
}

/// An opened audio input, tagged by the backend that recognized it.
#[derive(Debug)]
pub enum AudioSource {
    /// WAV container, decoded by [`WavBackend`].
    Wav(WavBackend),
    /// Compressed container/codec, decoded by [`CompressedBackend`].
    Compressed(CompressedBackend),
}

impl AudioSource {
    /// Open `path`, trying the WAV backend first and the compressed backend
    /// second. Fails with [`WavepeekError::UnrecognizedFormat`] when both
    /// refuse the file.
    pub fn open(path: &Path) -> WavepeekResult<Self> {
        match WavBackend::open(path) {
            Ok(backend) => return Ok(Self::Wav(backend)),
            Err(err) => {
                tracing::debug!(path = %path.display(), %err, "wav backend refused input");
            }
        }
        match CompressedBackend::open(path) {
            Ok(backend) => Ok(Self::Compressed(backend)),
            Err(err) => {
                tracing::debug!(path = %path.display(), %err, "compressed backend refused input");
                Err(WavepeekError::UnrecognizedFormat(path.to_path_buf()))
            }
        }
    }
}

impl AudioBackend for AudioSource {
    fn frame_count(&self) -> u64 {
        match self {
            Self::Wav(b) => b.frame_count(),
            Self::Compressed(b) => b.frame_count(),
        }
    }

    fn channel_count(&self) -> u16 {
        match self {
            Self::Wav(b) => b.channel_count(),
            Self::Compressed(b) => b.channel_count(),
        }
    }

    fn seek(&mut self, frame: u64) {
        match self {
            Self::Wav(b) => b.seek(frame),
            Self::Compressed(b) => b.seek(frame),
        }
    }

    fn read(&mut self, buf: &mut [i16]) -> usize {
        match self {
            Self::Wav(b) => b.read(buf),
            Self::Compressed(b) => b.read(buf),
        }
    }
}
