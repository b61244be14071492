//! This module provides an easy single import for those using this crate.

pub use crate::acquisition::{AcquisitionCycle, CycleState, TickOutput};
pub use crate::config::Config;
pub use crate::demodulation::fm::FMDemodulator;
pub use crate::error::ScopeError;
pub use crate::hardware::SampleSource;
pub use crate::spectrum::SpectralEstimator;
pub use crate::waterfall::WaterfallBuffer;
pub use num::Complex;

/// One complex baseband sample.
pub type IQSample = Complex<f32>;
