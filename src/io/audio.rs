//! Audio playback of demodulated signals.

use crate::error::ScopeError;
use crate::io::rodio::buffer::SamplesBuffer;
use crate::io::rodio::{self, Sink};

/// Plays a mono signal on the default output device, blocking until
/// playback completes.
///
/// # Arguments
///
/// * `samples` - Normalized audio samples to play.
/// * `sample_rate` - Playback rate in Hz, i.e. the decimated rate the
///   demodulator produced.
pub fn play_blocking(
    samples: Vec<f32>,
    sample_rate: u32,
) -> Result<(), ScopeError> {
    let device = rodio::default_output_device().ok_or_else(|| {
        ScopeError::SourceUnavailable(
            "no default audio output device".to_string(),
        )
    })?;
    let sink = Sink::new(&device);
    sink.append(SamplesBuffer::new(1, sample_rate, samples));
    sink.sleep_until_end();
    Ok(())
}
