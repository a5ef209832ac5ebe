use std::collections::VecDeque;
use std::fs::File;
use std::path::Path;

use anyhow::Context as _;
use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::{CODEC_TYPE_NULL, Decoder, DecoderOptions};
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::{FormatOptions, FormatReader, SeekMode, SeekTo};
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use crate::source::AudioBackend;

/// Compressed-format decoder backend (MP3, FLAC, OGG/Vorbis, AAC, ...).
///
/// Packets decode to whole buffers rather than exact frame runs, so decoded
/// samples the caller has not consumed yet sit in a pending queue aligned
/// with the frame cursor.
pub struct CompressedBackend {
    format: Box<dyn FormatReader>,
    decoder: Box<dyn Decoder>,
    track_id: u32,
    channels: u16,
    frame_count: u64,
    /// Frame index of the next sample at the front of `pending`.
    cursor: u64,
    pending: VecDeque<i16>,
}

impl std::fmt::Debug for CompressedBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompressedBackend")
            .field("track_id", &self.track_id)
            .field("channels", &self.channels)
            .field("frame_count", &self.frame_count)
            .field("cursor", &self.cursor)
            .finish_non_exhaustive()
    }
}

impl CompressedBackend {
    /// Probe and open a compressed audio file. When the container does not
    /// declare its length, the stream is scanned packet-by-packet to count
    /// frames and rewound before the first read.
    pub fn open(path: &Path) -> anyhow::Result<Self> {
        let file =
            File::open(path).with_context(|| format!("open audio '{}'", path.display()))?;
        let stream = MediaSourceStream::new(Box::new(file), Default::default());

        let mut hint = Hint::new();
        if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
            hint.with_extension(ext);
        }

        let probed = symphonia::default::get_probe()
            .format(
                &hint,
                stream,
                &FormatOptions::default(),
                &MetadataOptions::default(),
            )
            .context("probe failed")?;
        let mut format = probed.format;

        let track = format
            .tracks()
            .iter()
            .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
            .context("no decodable audio track")?;
        let track_id = track.id;
        let channels = track
            .codec_params
            .channels
            .map(|c| c.count())
            .filter(|&c| c > 0)
            .context("channel layout unknown")?;
        let channels = u16::try_from(channels).context("channel count out of range")?;
        let declared_frames = track.codec_params.n_frames;

        let decoder = symphonia::default::get_codecs()
            .make(&track.codec_params, &DecoderOptions::default())
            .context("decoder creation failed")?;

        let mut backend = Self {
            format,
            decoder,
            track_id,
            channels,
            frame_count: 0,
            cursor: 0,
            pending: VecDeque::new(),
        };
        backend.frame_count = match declared_frames {
            Some(frames) => frames,
            None => backend.scan_frame_count()?,
        };
        Ok(backend)
    }

    /// Count frames by walking every packet, then rewind to frame zero.
    fn scan_frame_count(&mut self) -> anyhow::Result<u64> {
        let mut total = 0u64;
        loop {
            match self.format.next_packet() {
                Ok(packet) => {
                    if packet.track_id() == self.track_id {
                        total += packet.dur;
                    }
                }
                Err(_) => break,
            }
        }
        let seeked = self
            .format
            .seek(
                SeekMode::Accurate,
                SeekTo::TimeStamp {
                    ts: 0,
                    track_id: self.track_id,
                },
            )
            .context("rewind after length scan failed")?;
        self.decoder.reset();
        self.cursor = seeked.actual_ts;
        Ok(total)
    }

    /// Decode the next packet of our track into `pending`. Returns false at
    /// end of stream or on an unrecoverable demux error.
    fn decode_next_packet(&mut self) -> bool {
        loop {
            let packet = match self.format.next_packet() {
                Ok(packet) => packet,
                Err(SymphoniaError::ResetRequired) => return false,
                Err(SymphoniaError::IoError(err))
                    if err.kind() == std::io::ErrorKind::UnexpectedEof =>
                {
                    return false;
                }
                Err(err) => {
                    tracing::warn!(%err, "demux error; treating as end of stream");
                    return false;
                }
            };
            if packet.track_id() != self.track_id {
                continue;
            }
            match self.decoder.decode(&packet) {
                Ok(decoded) => {
                    let spec = *decoded.spec();
                    let mut samples = SampleBuffer::<i16>::new(decoded.capacity() as u64, spec);
                    samples.copy_interleaved_ref(decoded);
                    self.pending.extend(samples.samples().iter().copied());
                    return true;
                }
                Err(SymphoniaError::DecodeError(err)) => {
                    // Corrupt packet; skip it and keep decoding.
                    tracing::warn!(%err, "decode error; skipping packet");
                }
                Err(err) => {
                    tracing::warn!(%err, "decoder failed; treating as end of stream");
                    return false;
                }
            }
        }
    }

    /// Discard `count` frames from the front of the stream.
    fn skip_frames(&mut self, mut count: u64) {
        let channels = self.channels as usize;
        while count > 0 {
            if self.pending.is_empty() && !self.decode_next_packet() {
                return;
            }
            let have = (self.pending.len() / channels) as u64;
            let take = have.min(count);
            self.pending.drain(..take as usize * channels);
            self.cursor += take;
            count -= take;
        }
    }
}

impl AudioBackend for CompressedBackend {
    fn frame_count(&self) -> u64 {
        self.frame_count
    }

    fn channel_count(&self) -> u16 {
        self.channels
    }

    fn seek(&mut self, frame: u64) {
        if frame == self.cursor {
            return;
        }
        match self.format.seek(
            SeekMode::Accurate,
            SeekTo::TimeStamp {
                ts: frame,
                track_id: self.track_id,
            },
        ) {
            Ok(seeked) => {
                self.decoder.reset();
                self.pending.clear();
                self.cursor = seeked.actual_ts;
            }
            Err(err) => {
                tracing::warn!(frame, %err, "seek failed; reading from current cursor");
                return;
            }
        }
        // Accurate seeks land at or before the requested frame.
        self.skip_frames(frame.saturating_sub(self.cursor));
    }

    fn read(&mut self, buf: &mut [i16]) -> usize {
        let channels = usize::from(self.channels);
        let mut filled = 0;
        while filled < buf.len() {
            match self.pending.pop_front() {
                Some(sample) => {
                    buf[filled] = sample;
                    filled += 1;
                }
                None => {
                    if !self.decode_next_packet() {
                        break;
                    }
                }
            }
        }
        let frames = filled / channels;
        self.cursor += frames as u64;
        frames
    }
}
