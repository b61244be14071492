//! Sample sources feeding the acquisition cycle, and the generic trait
//! that encapsulates them.

#[cfg(feature = "rtlsdr_source")]
extern crate rtlsdr;

#[cfg(feature = "rtlsdr_source")]
pub mod rtlsdr_source;

pub mod tone;

use crate::config::Config;
use crate::error::ScopeError;
use num::Complex;

/// A blocking source of complex baseband samples.
///
/// The acquisition cycle owns one source for its lifetime: `configure`
/// is called once on start, `read_samples` once per tick, and `close`
/// exactly once during shutdown regardless of which path triggered it.
pub trait SampleSource {
    /// Applies the sample rate, center frequency, and gain from the
    /// configuration.
    fn configure(&mut self, config: &Config) -> Result<(), ScopeError>;

    /// Reads `count` samples, blocking until data or an error is
    /// available. A result shorter than `count` is classified by the
    /// cycle as a transient short read; an `Err` is fatal.
    fn read_samples(
        &mut self,
        count: usize,
    ) -> Result<Vec<Complex<f32>>, ScopeError>;

    /// Releases the underlying handle.
    fn close(&mut self) -> Result<(), ScopeError>;
}
