use crate::envelope::plan::SamplingPlan;
use crate::foundation::core::{ColumnEnvelope, SAMPLE_MAX, SAMPLE_MIN};
use crate::foundation::error::{WavepeekError, WavepeekResult};
use crate::source::AudioBackend;

/// Reduces each pixel column's frame window to a (min, max) amplitude pair.
///
/// Owns the interleaved scratch buffer, allocated once and overwritten every
/// column. Columns share this buffer and the source's seek cursor, so a
/// sampler must never be driven from more than one column at a time.
pub struct EnvelopeSampler {
    plan: SamplingPlan,
    channels: u16,
    frames: Vec<i16>,
}

impl EnvelopeSampler {
    /// Allocate the scratch buffer for `plan`'s window over `channels`
    /// interleaved channels. Fails with [`WavepeekError::OutOfMemory`] when
    /// the reservation cannot be satisfied.
    pub fn new(plan: SamplingPlan, channels: u16) -> WavepeekResult<Self> {
        if channels == 0 {
            return Err(WavepeekError::validation("channel count must be > 0"));
        }
        let len = plan.window_frames() * usize::from(channels);
        let mut frames = Vec::new();
        frames
            .try_reserve_exact(len)
            .map_err(|_| WavepeekError::OutOfMemory(len * size_of::<i16>()))?;
        frames.resize(len, 0);
        Ok(Self {
            plan,
            channels,
            frames,
        })
    }

    /// The plan this sampler was allocated for.
    pub fn plan(&self) -> &SamplingPlan {
        &self.plan
    }

    /// Seek to `column`'s frame window, mix each frame's channels down to
    /// their arithmetic mean, and return the running (min, max) of those
    /// means. Returns `None` when the window yields no frames (empty stream
    /// or a backend that could not produce data); such columns are left
    /// unpainted.
    pub fn sample_column(
        &mut self,
        source: &mut impl AudioBackend,
        column: u32,
    ) -> Option<ColumnEnvelope> {
        let start = self.plan.start_frame(column);
        if start >= source.frame_count() {
            return None;
        }

        let channels = usize::from(self.channels);
        source.seek(start);
        let frames_read = source.read(&mut self.frames);
        if frames_read == 0 {
            return None;
        }

        // Initialized inverted so the reduction below can only tighten.
        let mut min = SAMPLE_MAX;
        let mut max = SAMPLE_MIN;
        for frame in self.frames[..frames_read * channels].chunks_exact(channels) {
            let mut sum = 0.0f32;
            for &sample in frame {
                sum += f32::from(sample);
            }
            let value = sum / channels as f32;
            if value < min {
                min = value;
            }
            if value > max {
                max = value;
            }
        }
        Some(ColumnEnvelope { min, max })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/envelope/sampler.rs"]
mod tests;
