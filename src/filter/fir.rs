//! Implementation of a finite impulse response (FIR) filter.
//!
//! The filter is generic over the sample type so the same routine
//! serves both the complex baseband path and the real-valued audio
//! path. Initial state is all zeros unless a state vector is carried
//! over from a previous batch.

use num_traits::Num;

/// Filters a single sample, updating the delay line in place.
///
/// # Arguments
///
/// * `input` - Input sample to be filtered.
/// * `taps` - FIR filter taps.
/// * `state` - FIR filter internal state; must be `taps.len()` long.
///
/// # Examples
///
/// ```
/// use iqscope::filter::fir::fir;
///
/// let taps = vec![0.2_f32, 0.6, 0.6, 0.2];
/// let mut state = vec![0.0_f32; 4];
/// let output = fir(&1.0, &taps, &mut state);
/// ```
pub fn fir<T>(input: &T, taps: &[T], state: &mut Vec<T>) -> T
where
    T: Num + Copy,
{
    state.rotate_right(1);
    state[0] = *input;
    taps.iter()
        .zip(state.iter())
        .fold(T::zero(), |acc, (tap, samp)| acc + *tap * *samp)
}

/// Filters a batch of samples through the delay line in `state`.
///
/// # Arguments
///
/// * `input` - Input batch of samples to be filtered.
/// * `taps` - FIR filter taps.
/// * `state` - FIR filter internal state; must be `taps.len()` long.
pub fn batch_fir<T>(input: &[T], taps: &[T], state: &mut Vec<T>) -> Vec<T>
where
    T: Num + Copy,
{
    let mut output = Vec::with_capacity(input.len());
    for sample in input {
        output.push(fir(sample, taps, state));
    }
    output
}

#[cfg(test)]
mod test {
    use crate::filter::fir::{batch_fir, fir};
    use assert_approx_eq::assert_approx_eq;
    use num::Complex;

    #[test]
    fn test_fir_impulse_response() {
        // An impulse through the filter reproduces the taps.
        let taps = vec![0.2_f32, 0.6, 0.6, 0.2];
        let mut state = vec![0.0_f32; taps.len()];
        let input = vec![1.0_f32, 0.0, 0.0, 0.0];
        let output = batch_fir(&input, &taps, &mut state);
        for (out, tap) in output.iter().zip(taps.iter()) {
            assert_approx_eq!(*out, *tap);
        }
    }

    #[test]
    fn test_fir_complex_samples() {
        let taps = vec![
            Complex::new(0.5_f32, 0.0),
            Complex::new(0.5_f32, 0.0),
        ];
        let mut state = vec![Complex::new(0.0_f32, 0.0); 2];
        let first = fir(&Complex::new(1.0_f32, 1.0), &taps, &mut state);
        let second = fir(&Complex::new(1.0_f32, -1.0), &taps, &mut state);
        assert_approx_eq!(first.re, 0.5);
        assert_approx_eq!(first.im, 0.5);
        assert_approx_eq!(second.re, 1.0);
        assert_approx_eq!(second.im, 0.0);
    }

    #[test]
    fn test_batch_matches_single() {
        let taps = vec![0.25_f32, 0.5, 0.25];
        let input: Vec<f32> = (0..16).map(|i| (i as f32 * 0.3).sin()).collect();

        let mut batch_state = vec![0.0_f32; taps.len()];
        let batch_out = batch_fir(&input, &taps, &mut batch_state);

        let mut single_state = vec![0.0_f32; taps.len()];
        for (samp, expected) in input.iter().zip(batch_out.iter()) {
            assert_approx_eq!(fir(samp, &taps, &mut single_state), expected);
        }
    }
}
