//! Filtering and sample-rate reduction.
//!
//! Only finite impulse response (FIR) filters are implemented here.
//! FIR filters are feedforward systems: they cannot become unstable
//! regardless of the input data, they are simple to implement, and they
//! have a linear phase response with a constant group delay. The cost
//! is tap count — an IIR design could match a given response with far
//! fewer taps — but at the rates this crate handles that inefficiency
//! does not matter.

pub mod fir;

use std::f64::consts::PI;

/// Tap count of the decimation anti-alias filter.
pub const DECIMATION_TAPS: usize = 63;

/// Designs a low-pass FIR filter by the window method: an ideal sinc
/// response truncated to `n_taps` points and shaped by a Hamming window
/// (first sidelobe at -53 dB). Taps are normalized for unity gain at
/// DC.
///
/// # Arguments
///
/// * `n_taps` - Number of output taps.
/// * `cutoff` - Cutoff as a fraction of the sample rate, on (0, 0.5).
pub fn lowpass_taps(n_taps: usize, cutoff: f64) -> Vec<f32> {
    let mid = (n_taps - 1) as f64 / 2.0;
    let taps: Vec<f64> = (0..n_taps)
        .map(|i| {
            let t = i as f64 - mid;
            let sinc = if t.abs() < std::f64::EPSILON {
                2.0 * cutoff
            } else {
                (2.0 * PI * cutoff * t).sin() / (PI * t)
            };
            let hamming = 0.54
                - 0.46 * (2.0 * PI * i as f64 / (n_taps - 1) as f64).cos();
            sinc * hamming
        })
        .collect();
    let gain: f64 = taps.iter().sum();
    taps.iter().map(|tap| (tap / gain) as f32).collect()
}

/// Reduces the sample rate of `signal` by `factor`: the signal is
/// low-pass filtered to the decimated Nyquist band and every
/// `factor`-th sample of the result is kept.
///
/// The anti-alias filter is a [`DECIMATION_TAPS`]-tap Hamming-windowed
/// sinc with its cutoff at 0.8 times the decimated Nyquist rate. A
/// factor of 1 or less returns the signal unchanged.
pub fn decimate(signal: &[f32], factor: usize) -> Vec<f32> {
    if factor <= 1 {
        return signal.to_vec();
    }
    let taps = lowpass_taps(DECIMATION_TAPS, 0.4 / factor as f64);
    let mut state = vec![0.0_f32; taps.len()];
    let filtered = fir::batch_fir(signal, &taps, &mut state);
    filtered.into_iter().step_by(factor).collect()
}

#[cfg(test)]
mod test {
    use crate::filter::{decimate, lowpass_taps};
    use assert_approx_eq::assert_approx_eq;
    use std::f32::consts::PI;

    #[test]
    fn test_taps_unity_dc_gain() {
        let taps = lowpass_taps(63, 0.1);
        let gain: f32 = taps.iter().sum();
        assert_approx_eq!(gain, 1.0, 1e-6);
        // Symmetric (linear phase).
        for i in 0..taps.len() {
            assert_approx_eq!(taps[i], taps[taps.len() - 1 - i], 1e-9);
        }
    }

    #[test]
    fn test_decimate_length_and_dc() {
        let signal = vec![1.0_f32; 1000];
        let out = decimate(&signal, 10);
        assert_eq!(out.len(), 100);
        // Past the filter transient, a DC input stays at DC.
        for sample in &out[10..] {
            assert_approx_eq!(*sample, 1.0_f32, 1e-3);
        }
    }

    #[test]
    fn test_decimate_rejects_out_of_band_tone() {
        // A tone well above the decimated Nyquist rate should be
        // strongly attenuated.
        let factor = 8;
        let signal: Vec<f32> = (0..4096)
            .map(|i| (2.0 * PI * 0.4 * i as f32).sin())
            .collect();
        let out = decimate(&signal, factor);
        let peak = out[16..]
            .iter()
            .fold(0.0_f32, |acc, x| acc.max(x.abs()));
        assert!(peak < 0.05, "out-of-band peak {} too high", peak);
    }

    #[test]
    fn test_decimate_factor_one_is_identity() {
        let signal: Vec<f32> = (0..32).map(|i| i as f32).collect();
        assert_eq!(decimate(&signal, 1), signal);
    }
}
