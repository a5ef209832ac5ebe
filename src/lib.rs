//! Wavepeek renders a visual waveform thumbnail from an audio file.
//!
//! Given an input audio path, a target image size, and a fidelity flag, it
//! produces a bitmap where each horizontal pixel column encodes the local
//! amplitude envelope (min/max) of the corresponding time slice of the
//! decoded signal.
//!
//! # Pipeline overview
//!
//! 1. **Open**: [`AudioSource::open`] probes the input with a WAV backend
//!    first and falls back to a compressed-format backend (MP3/FLAC/OGG/AAC).
//! 2. **Plan**: [`SamplingPlan::compute`] fixes, once per render, how many
//!    frames each pixel column covers and how many of them are inspected.
//! 3. **Sample**: [`EnvelopeSampler`] seeks to each column's frame window,
//!    mixes channels down to a per-frame mean, and reduces the window to a
//!    `(min, max)` amplitude pair.
//! 4. **Paint**: [`WaveformCanvas`] maps each pair to a vertical pixel span,
//!    fills it, and finally encodes the canvas to the output path's
//!    extension-selected format.
//!
//! The pipeline is single-threaded and synchronous: columns share one seek
//! cursor and one scratch buffer, so there is deliberately no parallelism.
//!
//! # Getting started
//!
//! [`draw`] is the one-call entry point; [`render_thumbnail`] is the same
//! operation driven by a [`ThumbnailJob`], which is also what the `wavepeek`
//! binary deserializes for batch rendering.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod envelope;
mod foundation;
mod job;
mod render;
mod source;

pub use envelope::plan::{SPEED_HACK_FRAMES, SamplingPlan};
pub use envelope::sampler::EnvelopeSampler;
pub use foundation::core::{ColumnEnvelope, ImageSize, SAMPLE_MAX, SAMPLE_MIN, SAMPLE_RANGE};
pub use foundation::error::{WavepeekError, WavepeekResult};
pub use job::ThumbnailJob;
pub use render::canvas::WaveformCanvas;
pub use render::pipeline::{draw, render_thumbnail};
pub use source::{AudioBackend, AudioSource, CompressedBackend, WavBackend};
