//! RTL-SDR backed sample source.

use crate::config::Config;
use crate::error::ScopeError;
use crate::hardware::rtlsdr::{self, RTLSDRDevice, RTLSDRError};
use crate::hardware::SampleSource;
use num::Complex;

/// Sample source reading from an RTL-SDR dongle.
///
/// The dongle delivers unsigned 8-bit interleaved IQ; samples are
/// recentered and scaled to unit-range complex floats before being
/// handed to the pipeline.
pub struct RtlSdrSource {
    device: RTLSDRDevice,
}

fn unavailable(err: RTLSDRError) -> ScopeError {
    ScopeError::SourceUnavailable(format!("{:?}", err))
}

fn fault(err: RTLSDRError) -> ScopeError {
    ScopeError::HardwareFault(format!("{:?}", err))
}

/// Opens the RTL-SDR at the given device index. The device is left
/// unconfigured; the acquisition cycle applies the configuration when
/// it starts.
pub fn open(index: i32) -> Result<RtlSdrSource, ScopeError> {
    let device = rtlsdr::open(index).map_err(unavailable)?;
    Ok(RtlSdrSource { device })
}

impl SampleSource for RtlSdrSource {
    fn configure(&mut self, config: &Config) -> Result<(), ScopeError> {
        self.device
            .set_center_freq(config.center_freq as u32)
            .map_err(unavailable)?;
        self.device
            .set_sample_rate(config.sample_rate as u32)
            .map_err(unavailable)?;
        match config.gain {
            Some(gain) => {
                self.device.set_tuner_gain(gain).map_err(unavailable)?
            }
            None => self.device.set_agc_mode(true).map_err(unavailable)?,
        }
        self.device.reset_buffer().map_err(unavailable)?;
        Ok(())
    }

    fn read_samples(
        &mut self,
        count: usize,
    ) -> Result<Vec<Complex<f32>>, ScopeError> {
        let raw = self.device.read_sync(count * 2).map_err(fault)?;
        Ok(raw
            .chunks(2)
            .filter(|pair| pair.len() == 2)
            .map(|pair| {
                Complex::new(
                    (f32::from(pair[0]) - 127.5) / 127.5,
                    (f32::from(pair[1]) - 127.5) / 127.5,
                )
            })
            .collect())
    }

    fn close(&mut self) -> Result<(), ScopeError> {
        self.device.close().map_err(fault)
    }
}
