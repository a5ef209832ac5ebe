use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context as _;
use hound::{SampleFormat, WavReader};

use crate::source::AudioBackend;

/// WAV decoder backend. Samples of any supported width are converted to
/// signed 16-bit on read.
pub struct WavBackend {
    reader: WavReader<BufReader<File>>,
    channels: u16,
    sample_format: SampleFormat,
    bits_per_sample: u16,
    frame_count: u64,
}

impl std::fmt::Debug for WavBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WavBackend")
            .field("channels", &self.channels)
            .field("bits_per_sample", &self.bits_per_sample)
            .field("frame_count", &self.frame_count)
            .finish_non_exhaustive()
    }
}

impl WavBackend {
    /// Open a WAV file. Any parse failure means the file is not a WAV this
    /// backend understands; the caller falls through to the next backend.
    pub fn open(path: &Path) -> anyhow::Result<Self> {
        let reader =
            WavReader::open(path).with_context(|| format!("open wav '{}'", path.display()))?;
        let spec = reader.spec();
        anyhow::ensure!(spec.channels > 0, "wav reports zero channels");
        let frame_count = u64::from(reader.duration());
        Ok(Self {
            reader,
            channels: spec.channels,
            sample_format: spec.sample_format,
            bits_per_sample: spec.bits_per_sample,
            frame_count,
        })
    }
}

impl AudioBackend for WavBackend {
    fn frame_count(&self) -> u64 {
        self.frame_count
    }

    fn channel_count(&self) -> u16 {
        self.channels
    }

    fn seek(&mut self, frame: u64) {
        // RIFF caps sample data at 4 GiB, so an offset past u32::MAX is
        // already past end-of-stream; the clamped seek reads as empty.
        let target = u32::try_from(frame).unwrap_or(u32::MAX);
        if let Err(err) = self.reader.seek(target) {
            tracing::warn!(frame, %err, "wav seek failed; subsequent reads may be empty");
        }
    }

    fn read(&mut self, buf: &mut [i16]) -> usize {
        let channels = usize::from(self.channels);
        let filled = match (self.sample_format, self.bits_per_sample) {
            (SampleFormat::Float, _) => fill(buf, self.reader.samples::<f32>(), |s| {
                (s.clamp(-1.0, 1.0) * SAMPLE_PEAK) as i16
            }),
            (SampleFormat::Int, bits) if bits <= 16 => {
                let shift = 16 - bits;
                fill(buf, self.reader.samples::<i16>(), move |s| s << shift)
            }
            (SampleFormat::Int, bits) => {
                let shift = bits - 16;
                fill(buf, self.reader.samples::<i32>(), move |s| {
                    (s >> shift) as i16
                })
            }
        };
        filled / channels
    }
}

const SAMPLE_PEAK: f32 = i16::MAX as f32;

fn fill<S, I, F>(buf: &mut [i16], mut samples: I, convert: F) -> usize
where
    I: Iterator<Item = hound::Result<S>>,
    F: Fn(S) -> i16,
{
    let mut filled = 0;
    for slot in buf.iter_mut() {
        match samples.next() {
            Some(Ok(sample)) => {
                *slot = convert(sample);
                filled += 1;
            }
            Some(Err(err)) => {
                tracing::warn!(%err, "wav read error; truncating window");
                break;
            }
            None => break,
        }
    }
    filled
}
