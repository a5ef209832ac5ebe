use std::path::PathBuf;

/// Convenience result type used across Wavepeek.
pub type WavepeekResult<T> = Result<T, WavepeekError>;

/// Top-level error taxonomy. Every failure is fatal to the render call;
/// acquired resources are released by drop on all paths.
#[derive(thiserror::Error, Debug)]
pub enum WavepeekError {
    /// Neither decoder backend could open or identify the input file.
    #[error("unrecognized audio format: '{}'", .0.display())]
    UnrecognizedFormat(PathBuf),

    /// Reserving the frame scratch buffer failed.
    #[error("out of memory: failed to reserve {0} bytes for the frame buffer")]
    OutOfMemory(usize),

    /// Unsupported output extension, unwritable path, or encoder failure.
    #[error("output write error: {0}")]
    OutputWrite(String),

    /// Invalid user-provided arguments or job data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl WavepeekError {
    /// Build a [`WavepeekError::OutputWrite`] value.
    pub fn output_write(msg: impl Into<String>) -> Self {
        Self::OutputWrite(msg.into())
    }

    /// Build a [`WavepeekError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
