//! Error types shared across the pipeline.

use std::error;
use std::fmt;
use std::io;

/// Errors raised by the acquisition and processing pipeline.
///
/// `SourceUnavailable` and `HardwareFault` are fatal: the acquisition
/// cycle transitions to `Stopped` and releases its source before either
/// is surfaced. `ShortRead` is transient: the affected tick is dropped
/// and the cycle keeps running.
#[derive(Debug)]
pub enum ScopeError {
    /// The sample source could not be opened or configured.
    SourceUnavailable(String),
    /// Fewer samples were available than requested.
    ShortRead { wanted: usize, got: usize },
    /// The sample source raised a fault mid-read.
    HardwareFault(String),
    /// A frame pushed to the waterfall does not match its bin width.
    FrameWidth { expected: usize, got: usize },
    /// An operation that requires a running cycle was invoked on a
    /// stopped one.
    NotRunning,
    /// Underlying file I/O failure.
    Io(io::Error),
}

impl fmt::Display for ScopeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ScopeError::SourceUnavailable(reason) => {
                write!(f, "sample source unavailable: {}", reason)
            }
            ScopeError::ShortRead { wanted, got } => {
                write!(f, "short read: wanted {} samples, got {}", wanted, got)
            }
            ScopeError::HardwareFault(reason) => {
                write!(f, "hardware fault: {}", reason)
            }
            ScopeError::FrameWidth { expected, got } => write!(
                f,
                "frame width mismatch: expected {} bins, got {}",
                expected, got
            ),
            ScopeError::NotRunning => {
                write!(f, "acquisition cycle is not running")
            }
            ScopeError::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl error::Error for ScopeError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            ScopeError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for ScopeError {
    fn from(err: io::Error) -> ScopeError {
        ScopeError::Io(err)
    }
}

#[cfg(test)]
mod test {
    use crate::error::ScopeError;

    #[test]
    fn test_display() {
        let err = ScopeError::ShortRead {
            wanted: 1024,
            got: 512,
        };
        assert_eq!(
            format!("{}", err),
            "short read: wanted 1024 samples, got 512"
        );
    }
}
