use super::*;

/// In-memory backend over a fixed interleaved sample vector. `max_read`
/// artificially truncates reads to exercise short-read handling.
struct MemoryBackend {
    channels: u16,
    samples: Vec<i16>,
    cursor: u64,
    max_read: Option<usize>,
}

impl MemoryBackend {
    fn new(channels: u16, samples: Vec<i16>) -> Self {
        Self {
            channels,
            samples,
            cursor: 0,
            max_read: None,
        }
    }
}

impl AudioBackend for MemoryBackend {
    fn frame_count(&self) -> u64 {
        (self.samples.len() / usize::from(self.channels)) as u64
    }

    fn channel_count(&self) -> u16 {
        self.channels
    }

    fn seek(&mut self, frame: u64) {
        self.cursor = frame;
    }

    fn read(&mut self, buf: &mut [i16]) -> usize {
        let channels = usize::from(self.channels);
        let start = (self.cursor as usize) * channels;
        if start >= self.samples.len() {
            return 0;
        }
        let available = &self.samples[start..];
        let mut frames = (buf.len() / channels).min(available.len() / channels);
        if let Some(cap) = self.max_read {
            frames = frames.min(cap);
        }
        buf[..frames * channels].copy_from_slice(&available[..frames * channels]);
        self.cursor += frames as u64;
        frames
    }
}

fn plan(frame_count: u64, width: u32) -> SamplingPlan {
    SamplingPlan::compute(frame_count, width, false)
}

#[test]
fn mixdown_averages_channels() {
    // One stereo frame per column: mean of (1000, 3000) is 2000.
    let mut source = MemoryBackend::new(2, vec![1000, 3000, -500, 500]);
    let mut sampler = EnvelopeSampler::new(plan(2, 2), 2).unwrap();

    let env = sampler.sample_column(&mut source, 0).unwrap();
    assert_eq!(env, ColumnEnvelope {
        min: 2000.0,
        max: 2000.0
    });

    let env = sampler.sample_column(&mut source, 1).unwrap();
    assert_eq!(env, ColumnEnvelope { min: 0.0, max: 0.0 });
}

#[test]
fn envelope_tracks_window_extremes() {
    // Single column covering the whole mono ramp.
    let mut source = MemoryBackend::new(1, vec![-4, -2, 0, 7, 3, -9, 1, 2]);
    let mut sampler = EnvelopeSampler::new(plan(8, 1), 1).unwrap();

    let env = sampler.sample_column(&mut source, 0).unwrap();
    assert_eq!(env, ColumnEnvelope {
        min: -9.0,
        max: 7.0
    });
}

#[test]
fn columns_seek_to_their_own_window() {
    // Two columns over four mono frames; the second column must not see the
    // first column's frames.
    let mut source = MemoryBackend::new(1, vec![100, 200, -300, -400]);
    let mut sampler = EnvelopeSampler::new(plan(4, 2), 1).unwrap();

    let first = sampler.sample_column(&mut source, 0).unwrap();
    assert_eq!(first, ColumnEnvelope {
        min: 100.0,
        max: 200.0
    });

    let second = sampler.sample_column(&mut source, 1).unwrap();
    assert_eq!(second, ColumnEnvelope {
        min: -400.0,
        max: -300.0
    });
}

#[test]
fn short_reads_exclude_stale_scratch_content() {
    let mut source = MemoryBackend::new(1, vec![30_000, 30_000, 30_000, 30_000, -7, -7, -7, -7]);
    let mut sampler = EnvelopeSampler::new(plan(8, 2), 1).unwrap();

    // First column fills the scratch buffer with loud frames.
    let first = sampler.sample_column(&mut source, 0).unwrap();
    assert_eq!(first.max, 30_000.0);

    // Second column under-fills; leftovers from the first read must not
    // leak into the reduction.
    source.max_read = Some(1);
    let second = sampler.sample_column(&mut source, 1).unwrap();
    assert_eq!(second, ColumnEnvelope {
        min: -7.0,
        max: -7.0
    });
}

#[test]
fn image_wider_than_stream_samples_single_frames() {
    // Six columns over three mono frames: every column is in range and
    // inspects exactly one frame.
    let mut source = MemoryBackend::new(1, vec![10, -20, 30]);
    let mut sampler = EnvelopeSampler::new(plan(3, 6), 1).unwrap();
    assert_eq!(sampler.plan().frames_to_inspect, 0);

    for column in 0..6 {
        let env = sampler.sample_column(&mut source, column).unwrap();
        assert_eq!(env.min, env.max);
    }
    let last = sampler.sample_column(&mut source, 5).unwrap();
    assert_eq!(last.max, 30.0);
}

#[test]
fn empty_stream_yields_no_envelope() {
    let mut source = MemoryBackend::new(1, Vec::new());
    let mut sampler = EnvelopeSampler::new(plan(0, 4), 1).unwrap();
    assert!(sampler.sample_column(&mut source, 0).is_none());
    assert!(sampler.sample_column(&mut source, 3).is_none());
}
