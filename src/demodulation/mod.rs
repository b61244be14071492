//! Demodulation of captured sample buffers.

pub mod fm;
