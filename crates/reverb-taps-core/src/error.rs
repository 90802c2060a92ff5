//! Invalid-argument errors for delay conversion and buffer sizing.

/// Errors raised when an input to the converter is out of its domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConvertError {
    /// Sample rate must be greater than zero.
    InvalidSampleRate(u32),
    /// A delay was negative, not finite, or too long to count in frames.
    InvalidDelay {
        /// Position of the offending delay within its input slice.
        index: usize,
        /// The rejected delay in milliseconds.
        value: f64,
    },
    /// Maximum delay scale must be at least 1.
    InvalidHeadroom(u32),
    /// Delay scale must lie in `(0, max]` and keep every loop non-empty.
    InvalidScale {
        /// The rejected scale factor.
        scale: f64,
        /// The headroom's maximum scale.
        max: u32,
    },
}

#[cfg(feature = "std")]
impl std::fmt::Display for ConvertError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidSampleRate(hz) => {
                write!(f, "invalid sample rate {hz} Hz: must be greater than 0")
            }
            Self::InvalidDelay { index, value } => write!(
                f,
                "invalid delay {value}ms at index {index}: must be finite, non-negative and fit in a frame count"
            ),
            Self::InvalidHeadroom(max) => {
                write!(f, "invalid maximum delay scale {max}: must be at least 1")
            }
            Self::InvalidScale { scale, max } => {
                write!(
                    f,
                    "invalid delay scale {scale}: must be in (0, {max}] and leave every delay loop at least one frame"
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConvertError {}
