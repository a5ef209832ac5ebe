use std::path::Path;

use crate::envelope::plan::SamplingPlan;
use crate::envelope::sampler::EnvelopeSampler;
use crate::foundation::error::WavepeekResult;
use crate::job::ThumbnailJob;
use crate::render::canvas::WaveformCanvas;
use crate::source::{AudioBackend as _, AudioSource};

/// Render one waveform thumbnail.
///
/// The stages run strictly in order: validate, open audio, compute the plan,
/// allocate the scratch buffer, paint columns left to right, encode. The
/// audio source is opened before any canvas or buffer allocation so an
/// unrecognized input never leaves a partially built raster behind, and every
/// failure path releases what was acquired by drop.
#[tracing::instrument(skip_all, fields(input = %job.input.display(), output = %job.output.display()))]
pub fn render_thumbnail(job: &ThumbnailJob) -> WavepeekResult<()> {
    let size = job.size()?;
    let mut source = AudioSource::open(&job.input)?;
    let plan = SamplingPlan::compute(source.frame_count(), size.width, job.cheat);
    tracing::debug!(
        frame_count = source.frame_count(),
        channels = source.channel_count(),
        frames_per_pixel = plan.frames_per_pixel,
        frames_to_inspect = plan.frames_to_inspect,
        "sampling plan"
    );

    let mut sampler = EnvelopeSampler::new(plan, source.channel_count())?;
    let mut canvas = WaveformCanvas::new(size);
    for column in 0..size.width {
        if let Some(envelope) = sampler.sample_column(&mut source, column) {
            canvas.paint_column(column, envelope);
        }
    }
    canvas.write(&job.output)
}

/// One-call entry point: render the waveform of `input_audio` to
/// `output_image` at `image_width` x `image_height` pixels. `cheat` caps the
/// frames inspected per column at [`crate::SPEED_HACK_FRAMES`].
pub fn draw(
    input_audio: impl AsRef<Path>,
    output_image: impl AsRef<Path>,
    image_width: u32,
    image_height: u32,
    cheat: bool,
) -> WavepeekResult<()> {
    render_thumbnail(&ThumbnailJob {
        input: input_audio.as_ref().to_path_buf(),
        output: output_image.as_ref().to_path_buf(),
        width: image_width,
        height: image_height,
        cheat,
    })
}
