//! Pipeline configuration.

use serde::{Deserialize, Serialize};

/// Immutable configuration for a pipeline instance.
///
/// A `Config` is constructed once and passed by reference to every
/// component that needs it; no component reads ambient configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Tuner center frequency in Hz.
    pub center_freq: f64,
    /// Source sample rate in samples per second.
    pub sample_rate: f64,
    /// Tuner gain in tenths of a dB. `None` selects automatic gain.
    pub gain: Option<i32>,
    /// FFT size N. Every spectral frame is exactly this many bins wide.
    pub fft_size: usize,
    /// Number of samples read from the source per tick. Must be at
    /// least `fft_size`; only the first `fft_size` samples of a block
    /// feed the estimator.
    pub block_len: usize,
    /// Number of spectral frames retained in the waterfall history.
    pub history_depth: usize,
    /// Cadence of the externally driven tick, in milliseconds.
    pub update_interval_ms: u64,
    /// Decimation factor applied during FM demodulation.
    pub decimation: usize,
}

impl Config {
    /// Sample rate of the demodulated audio output.
    pub fn output_sample_rate(&self) -> f64 {
        self.sample_rate / self.decimation as f64
    }

    /// Frequency axis for rendering a spectral frame: `fft_size` evenly
    /// spaced values centered on `center_freq` with spacing
    /// `sample_rate / fft_size`. Index `i` of the axis corresponds to
    /// bin `i` of a frame.
    pub fn freq_axis(&self) -> Vec<f64> {
        let n = self.fft_size;
        let step = self.sample_rate / n as f64;
        (0..n)
            .map(|i| self.center_freq + (i as f64 - (n / 2) as f64) * step)
            .collect()
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            center_freq: 101.9e6,
            sample_rate: 2.4e6,
            gain: None,
            fft_size: 1024,
            block_len: 10240,
            history_depth: 200,
            update_interval_ms: 50,
            decimation: 48,
        }
    }
}

#[cfg(test)]
mod test {
    use crate::config::Config;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_freq_axis() {
        let config = Config {
            center_freq: 1000.0,
            sample_rate: 400.0,
            fft_size: 4,
            ..Config::default()
        };
        assert_eq!(config.freq_axis(), vec![800.0, 900.0, 1000.0, 1100.0]);
    }

    #[test]
    fn test_freq_axis_centered() {
        let config = Config::default();
        let axis = config.freq_axis();
        assert_eq!(axis.len(), config.fft_size);
        assert_approx_eq!(axis[config.fft_size / 2], config.center_freq);
    }

    #[test]
    fn test_output_sample_rate() {
        let config = Config::default();
        assert_approx_eq!(config.output_sample_rate(), 50_000.0);
    }
}
