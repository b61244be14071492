//! Building blocks for a software spectrum analyzer: windowed
//! power-spectrum estimation, a scrolling waterfall history, a pull-based
//! acquisition cycle over a sample source, and FM demodulation of
//! captured IQ buffers.
//!
//! The live path is externally scheduled: a host calls
//! [`acquisition::AcquisitionCycle::tick`] once per update interval and
//! hands the returned frame and waterfall snapshot to whatever renderer
//! it uses. The demodulation path is a one-shot transform over a whole
//! captured buffer.

pub mod acquisition;
pub mod config;
pub mod demodulation;
pub mod error;
pub mod filter;
pub mod hardware;
pub mod io;
pub mod prelude;
pub mod spectrum;
pub mod waterfall;
