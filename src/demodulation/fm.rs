//! FM demodulation of captured IQ buffers.
//!
//! The demodulator follows the classic discriminator chain:
//! instantaneous phase, first difference (the instantaneous-frequency
//! proxy carrying the FM message), phase unwrapping, anti-alias
//! decimation down to the audio rate, and peak normalization. Each
//! stage is exposed as a free function; [`FMDemodulator`] runs the
//! whole chain over one buffer and keeps no state between calls.

use crate::error::ScopeError;
use crate::filter;
use num::Complex;
use std::f32::consts::PI;

/// Peak magnitudes below this are treated as silence by [`normalize`]
/// instead of being divided through.
const SILENCE_FLOOR: f32 = 1e-12;

/// Instantaneous phase of each sample, in radians on (-pi, pi].
pub fn instantaneous_phase(samples: &[Complex<f32>]) -> Vec<f32> {
    samples.iter().map(|samp| samp.arg()).collect()
}

/// First difference of consecutive phase values, approximating the
/// instantaneous frequency deviation. Output length is one less than
/// the input length.
pub fn phase_diff(phase: &[f32]) -> Vec<f32> {
    phase.windows(2).map(|pair| pair[1] - pair[0]).collect()
}

/// Unwraps a phase sequence in place: wherever consecutive values jump
/// by more than pi, multiples of 2 pi are folded into the remainder of
/// the sequence so that it is continuous.
pub fn unwrap(seq: &mut [f32]) {
    let mut correction = 0.0_f32;
    for i in 1..seq.len() {
        let raw = seq[i];
        let mut delta = raw + correction - seq[i - 1];
        while delta > PI {
            correction -= 2.0 * PI;
            delta -= 2.0 * PI;
        }
        while delta < -PI {
            correction += 2.0 * PI;
            delta += 2.0 * PI;
        }
        seq[i] = raw + correction;
    }
}

/// Scales the signal so its peak magnitude is 1.0.
///
/// An all-zero (or all-near-zero) signal is returned unchanged rather
/// than divided: the guard turns a degenerate input into silence
/// instead of NaN.
pub fn normalize(mut signal: Vec<f32>) -> Vec<f32> {
    let peak = signal.iter().fold(0.0_f32, |acc, x| acc.max(x.abs()));
    if peak < SILENCE_FLOOR {
        return signal;
    }
    for samp in &mut signal {
        *samp /= peak;
    }
    signal
}

/// One-shot FM demodulator over a captured buffer.
///
/// The demodulator owns no persistent state; `demodulate` is a pure
/// transform of its input.
pub struct FMDemodulator {
    decimation: usize,
}

impl FMDemodulator {
    /// Creates a demodulator that decimates its output by `decimation`,
    /// producing audio at `input_rate / decimation`.
    pub fn new(decimation: usize) -> FMDemodulator {
        FMDemodulator { decimation }
    }

    /// Demodulates a captured IQ buffer into a normalized audio signal.
    ///
    /// Unwrapping is applied to the already-differenced phase sequence,
    /// not to the raw phases before differencing; the two orders are
    /// not numerically identical for large excursions. Decimation uses
    /// the anti-alias FIR described at [`filter::decimate`].
    ///
    /// A buffer of fewer than two samples carries no frequency
    /// information and is rejected with `ShortRead`.
    pub fn demodulate(
        &self,
        samples: &[Complex<f32>],
    ) -> Result<Vec<f32>, ScopeError> {
        if samples.len() < 2 {
            return Err(ScopeError::ShortRead {
                wanted: 2,
                got: samples.len(),
            });
        }
        let phase = instantaneous_phase(samples);
        let mut deviation = phase_diff(&phase);
        unwrap(&mut deviation);
        let audio = filter::decimate(&deviation, self.decimation);
        Ok(normalize(audio))
    }
}
