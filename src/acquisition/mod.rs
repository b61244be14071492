//! Live acquisition cycle tying a sample source to the estimator and
//! the waterfall history.
//!
//! The cycle is driven by an external scheduler: the host invokes
//! [`AcquisitionCycle::tick`] once per `update_interval_ms` and hands
//! the returned output to its renderer. The cycle owns no timer and no
//! thread, and `tick` takes `&mut self`, so at most one tick is ever in
//! flight per instance. Hosts running several pipelines keep one fully
//! independent cycle per pipeline.

use crate::config::Config;
use crate::error::ScopeError;
use crate::hardware::SampleSource;
use crate::spectrum::SpectralEstimator;
use crate::waterfall::WaterfallBuffer;

/// Lifecycle state of an acquisition cycle.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CycleState {
    Stopped,
    Running,
}

/// Output of one tick, handed to the external renderer together with
/// the frequency axis from [`Config::freq_axis`].
#[derive(Clone, Debug, PartialEq)]
pub enum TickOutput {
    /// A fresh spectral frame plus a copy of the waterfall history.
    Frame {
        frame: Vec<f32>,
        snapshot: Vec<Vec<f32>>,
    },
    /// The source returned fewer samples than requested; the tick was
    /// dropped and the cycle stays running. The scheduler simply tries
    /// again at the next cadence.
    Skipped,
}

/// Periodic acquisition pipeline: source -> estimator -> waterfall.
///
/// The cycle owns its source for its whole lifetime and guarantees the
/// handle is released exactly once, on whichever of explicit stop,
/// fatal fault, or drop comes first.
pub struct AcquisitionCycle<S: SampleSource> {
    config: Config,
    source: S,
    estimator: SpectralEstimator,
    waterfall: WaterfallBuffer,
    state: CycleState,
    released: bool,
}

impl<S: SampleSource> AcquisitionCycle<S> {
    /// Creates a stopped cycle around an open source. Call `start`
    /// before ticking.
    pub fn new(config: Config, source: S) -> AcquisitionCycle<S> {
        let estimator = SpectralEstimator::new(config.fft_size);
        let waterfall =
            WaterfallBuffer::new(config.history_depth, config.fft_size);
        AcquisitionCycle {
            config,
            source,
            estimator,
            waterfall,
            state: CycleState::Stopped,
            released: false,
        }
    }

    pub fn state(&self) -> CycleState {
        self.state
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Read-only view of the waterfall history.
    pub fn waterfall(&self) -> &WaterfallBuffer {
        &self.waterfall
    }

    /// Configures the sample source and transitions to `Running`.
    ///
    /// A configuration failure is fatal: the source is released and the
    /// cycle stays stopped. Starting an already-running cycle is a
    /// no-op; a cycle whose source has been released cannot be
    /// restarted.
    pub fn start(&mut self) -> Result<(), ScopeError> {
        if self.state == CycleState::Running {
            return Ok(());
        }
        if self.released {
            return Err(ScopeError::SourceUnavailable(
                "source handle has already been released".to_string(),
            ));
        }
        if let Err(err) = self.source.configure(&self.config) {
            let _ = self.shutdown();
            return Err(err);
        }
        self.state = CycleState::Running;
        Ok(())
    }

    /// Runs one acquisition tick: reads a block of `block_len` samples,
    /// estimates its spectrum, and records the frame in the waterfall.
    ///
    /// A short read skips the tick and leaves the cycle running. A read
    /// fault is fatal: the cycle transitions to `Stopped`, releases the
    /// source, and surfaces the error.
    pub fn tick(&mut self) -> Result<TickOutput, ScopeError> {
        if self.state != CycleState::Running {
            return Err(ScopeError::NotRunning);
        }

        let block = match self.source.read_samples(self.config.block_len) {
            Ok(block) => block,
            Err(err) => {
                let _ = self.shutdown();
                return Err(err);
            }
        };
        if block.len() < self.config.block_len {
            return Ok(TickOutput::Skipped);
        }

        let frame = match self.estimator.estimate(&block) {
            Ok(frame) => frame,
            // A block shorter than the transform is the same transient
            // condition as a short read from the source.
            Err(ScopeError::ShortRead { .. }) => {
                return Ok(TickOutput::Skipped)
            }
            Err(err) => {
                let _ = self.shutdown();
                return Err(err);
            }
        };

        self.waterfall.push(frame.clone())?;
        Ok(TickOutput::Frame {
            frame,
            snapshot: self.waterfall.snapshot(),
        })
    }

    /// Stops the cycle and releases the source. Safe to call more than
    /// once; the handle is only ever released once.
    pub fn stop(&mut self) -> Result<(), ScopeError> {
        self.shutdown()
    }

    /// Centralized teardown used by `stop`, the fatal-fault path, and
    /// `Drop`. The `released` flag flips before the close call so a
    /// reentrant or repeated shutdown finds nothing left to do.
    fn shutdown(&mut self) -> Result<(), ScopeError> {
        self.state = CycleState::Stopped;
        if self.released {
            return Ok(());
        }
        self.released = true;
        self.source.close()
    }
}

impl<S: SampleSource> Drop for AcquisitionCycle<S> {
    fn drop(&mut self) {
        let _ = self.shutdown();
    }
}

#[cfg(test)]
mod test {
    use crate::acquisition::{AcquisitionCycle, CycleState, TickOutput};
    use crate::config::Config;
    use crate::error::ScopeError;
    use crate::hardware::tone::ToneSource;

    fn test_config() -> Config {
        Config {
            sample_rate: 1.024e6,
            fft_size: 256,
            block_len: 1024,
            history_depth: 4,
            ..Config::default()
        }
    }

    #[test]
    fn test_tick_before_start_fails() {
        let mut cycle = AcquisitionCycle::new(
            test_config(),
            ToneSource::new(10e3, 0.0),
        );
        match cycle.tick() {
            Err(ScopeError::NotRunning) => (),
            other => panic!("expected NotRunning, got {:?}", other),
        }
    }

    #[test]
    fn test_tick_produces_frames() {
        let config = test_config();
        let mut cycle = AcquisitionCycle::new(
            config.clone(),
            ToneSource::new(10e3, 0.0),
        );
        cycle.start().unwrap();
        assert_eq!(cycle.state(), CycleState::Running);

        match cycle.tick().unwrap() {
            TickOutput::Frame { frame, snapshot } => {
                assert_eq!(frame.len(), config.fft_size);
                assert_eq!(snapshot.len(), 1);
                assert_eq!(snapshot[0], frame);
            }
            TickOutput::Skipped => panic!("tone source never short-reads"),
        }
    }

    #[test]
    fn test_stop_is_idempotent() {
        let mut cycle = AcquisitionCycle::new(
            test_config(),
            ToneSource::new(10e3, 0.0),
        );
        cycle.start().unwrap();
        cycle.stop().unwrap();
        assert_eq!(cycle.state(), CycleState::Stopped);
        cycle.stop().unwrap();
    }

    #[test]
    fn test_restart_after_release_fails() {
        let mut cycle = AcquisitionCycle::new(
            test_config(),
            ToneSource::new(10e3, 0.0),
        );
        cycle.start().unwrap();
        cycle.stop().unwrap();
        assert!(cycle.start().is_err());
    }
}
