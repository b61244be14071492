//! Windowed power-spectrum estimation.
//!
//! The estimator multiplies a block of complex samples by a Hann window,
//! runs a forward FFT via [RustFFT](https://github.com/awelkie/RustFFT),
//! rearranges the result so DC sits in the middle of the frame, and
//! converts each bin to decibels. The underlying library plan operates
//! on `f64`, so `f32` samples are cast at the boundary and cast back
//! after the transform.

use crate::error::ScopeError;
use num::Complex;
use rustfft::num_complex::Complex as FFTComplex;
use rustfft::num_traits::Zero;
use rustfft::{FFTplanner, FFT};
use std::sync::Arc;

/// Floor added to `|X|^2` before taking the logarithm so that an
/// all-zero input maps to a finite decibel value (-100 dB) instead of
/// negative infinity.
pub const POWER_FLOOR: f64 = 1e-10;

/// Hann window coefficients of the given length.
///
/// The window is symmetric: `w[i] = 0.5 - 0.5 cos(2 pi i / (len - 1))`.
pub fn hann_window(len: usize) -> Vec<f64> {
    if len <= 1 {
        return vec![1.0; len];
    }
    let denom = (len - 1) as f64;
    (0..len)
        .map(|i| {
            0.5 - 0.5
                * (2.0 * std::f64::consts::PI * i as f64 / denom).cos()
        })
        .collect()
}

/// Power-spectrum estimator of a fixed transform size.
///
/// The FFT plan and window coefficients are computed once at
/// construction; `estimate` is a pure function of its input block.
pub struct SpectralEstimator {
    fft: Arc<dyn FFT<f64>>,
    fft_size: usize,
    window: Vec<f64>,
}

impl SpectralEstimator {
    /// Creates an estimator for blocks of `fft_size` samples.
    ///
    /// # Examples
    ///
    /// ```
    /// use iqscope::spectrum::SpectralEstimator;
    ///
    /// let estimator = SpectralEstimator::new(1024);
    /// ```
    pub fn new(fft_size: usize) -> SpectralEstimator {
        let mut planner = FFTplanner::new(false);
        let fft = planner.plan_fft(fft_size);
        let window = hann_window(fft_size);
        SpectralEstimator {
            fft,
            fft_size,
            window,
        }
    }

    /// Transform size of this estimator.
    pub fn fft_size(&self) -> usize {
        self.fft_size
    }

    /// Estimates the power spectrum of one block of samples, in dB
    /// relative to an arbitrary reference.
    ///
    /// Only the first `fft_size` samples are used when the block is
    /// longer. A shorter block is rejected with `ShortRead`: the output
    /// frame is always exactly `fft_size` bins wide and every value is
    /// finite. Bin `i` corresponds to frequency
    /// `center_freq + (i - fft_size / 2) * sample_rate / fft_size`.
    pub fn estimate(
        &self,
        block: &[Complex<f32>],
    ) -> Result<Vec<f32>, ScopeError> {
        if block.len() < self.fft_size {
            return Err(ScopeError::ShortRead {
                wanted: self.fft_size,
                got: block.len(),
            });
        }

        let mut input: Vec<FFTComplex<f64>> = block[..self.fft_size]
            .iter()
            .zip(self.window.iter())
            .map(|(x, w)| {
                FFTComplex::new(f64::from(x.re) * w, f64::from(x.im) * w)
            })
            .collect();
        let mut output: Vec<FFTComplex<f64>> =
            vec![FFTComplex::zero(); self.fft_size];
        self.fft.process(&mut input[..], &mut output[..]);

        // Frequency-shift rearrangement: DC moves from bin 0 to bin
        // N/2, negative frequencies fill the first half of the frame.
        output.rotate_right(self.fft_size / 2);

        let frame = output
            .iter()
            .map(|x| (10.0 * (x.norm_sqr() + POWER_FLOOR).log10()) as f32)
            .collect();
        Ok(frame)
    }
}
