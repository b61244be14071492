//! Input/output support: captured IQ sample files and audio playback.

#[cfg(feature = "audio")]
extern crate rodio;

#[cfg(feature = "audio")]
pub mod audio;

pub mod raw_iq;
