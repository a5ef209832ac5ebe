/// Per-column inspection cap applied in cheat mode, trading accuracy for
/// speed on long files or wide images.
pub const SPEED_HACK_FRAMES: u64 = 500;

/// Per-pixel sampling parameters, derived once per render.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SamplingPlan {
    /// Frames covered by one pixel column: `frame_count / image_width`.
    pub frames_per_pixel: f64,
    /// Frames actually inspected per column: `floor(frames_per_pixel)`,
    /// capped at [`SPEED_HACK_FRAMES`] in cheat mode.
    pub frames_to_inspect: u64,
}

impl SamplingPlan {
    /// Derive the plan from the stream length and output width.
    ///
    /// `image_width` must already be validated as non-zero.
    pub fn compute(frame_count: u64, image_width: u32, cheat: bool) -> Self {
        let frames_per_pixel = frame_count as f64 / f64::from(image_width);
        let mut frames_to_inspect = frames_per_pixel as u64;
        if cheat {
            frames_to_inspect = frames_to_inspect.min(SPEED_HACK_FRAMES);
        }
        Self {
            frames_per_pixel,
            frames_to_inspect,
        }
    }

    /// First frame of `column`'s window.
    pub fn start_frame(&self, column: u32) -> u64 {
        (f64::from(column) * self.frames_per_pixel).floor() as u64
    }

    /// Frame window actually read per column: at least one frame, so that an
    /// image wider than the stream still samples something for in-range
    /// columns instead of reducing over an empty window.
    pub fn window_frames(&self) -> usize {
        self.frames_to_inspect.max(1) as usize
    }
}
