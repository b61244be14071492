//! Synthetic sample source for running the pipeline without hardware.

use crate::config::Config;
use crate::error::ScopeError;
use crate::hardware::SampleSource;
use num::Complex;
use rand::distributions::Normal;
use rand::{FromEntropy, Rng, StdRng};
use std::f32::consts::PI;

/// Generates a unit-amplitude complex tone at a fixed baseband offset
/// with additive Gaussian noise on both rails. Useful for demos and
/// tests when no radio is attached.
pub struct ToneSource {
    tone_freq: f64,
    noise: Normal,
    rng: StdRng,
    sample_rate: f64,
    phase: f32,
}

impl ToneSource {
    /// Creates a source producing a tone `tone_freq` Hz from the center
    /// frequency, with Gaussian noise of the given standard deviation
    /// added to each rail.
    ///
    /// # Examples
    ///
    /// ```
    /// use iqscope::hardware::tone::ToneSource;
    ///
    /// let source = ToneSource::new(100e3, 0.01);
    /// ```
    pub fn new(tone_freq: f64, noise_std: f64) -> ToneSource {
        ToneSource {
            tone_freq,
            noise: Normal::new(0.0, noise_std.max(0.0)),
            rng: StdRng::from_entropy(),
            sample_rate: 0.0,
            phase: 0.0,
        }
    }
}

impl SampleSource for ToneSource {
    fn configure(&mut self, config: &Config) -> Result<(), ScopeError> {
        if config.sample_rate <= 0.0 {
            return Err(ScopeError::SourceUnavailable(
                "sample rate must be positive".to_string(),
            ));
        }
        self.sample_rate = config.sample_rate;
        Ok(())
    }

    fn read_samples(
        &mut self,
        count: usize,
    ) -> Result<Vec<Complex<f32>>, ScopeError> {
        if self.sample_rate <= 0.0 {
            return Err(ScopeError::SourceUnavailable(
                "tone source has not been configured".to_string(),
            ));
        }
        let step = (2.0 * std::f64::consts::PI * self.tone_freq
            / self.sample_rate) as f32;
        let mut samples = Vec::with_capacity(count);
        for _ in 0..count {
            let noise_re = self.rng.sample::<f64, _>(&self.noise) as f32;
            let noise_im = self.rng.sample::<f64, _>(&self.noise) as f32;
            samples.push(Complex::new(
                self.phase.cos() + noise_re,
                self.phase.sin() + noise_im,
            ));
            self.phase += step;
            // Keep the accumulator small so precision holds over long runs.
            if self.phase > PI {
                self.phase -= 2.0 * PI;
            } else if self.phase < -PI {
                self.phase += 2.0 * PI;
            }
        }
        Ok(samples)
    }

    fn close(&mut self) -> Result<(), ScopeError> {
        Ok(())
    }
}
