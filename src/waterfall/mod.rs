//! Fixed-depth scrolling history of spectral frames.

use crate::error::ScopeError;
use std::collections::VecDeque;

/// Scrolling history of spectral frames, most recent first.
///
/// The buffer holds at most `depth` frames of exactly `width` bins
/// each. A push inserts the new frame at row 0 and, once the buffer has
/// seen more than `depth` frames, evicts the oldest row. Ordering is by
/// recency only; no timestamps are stored.
///
/// The buffer is not thread-safe; callers running pushes from more than
/// one thread must serialize access externally.
#[derive(Clone, Debug)]
pub struct WaterfallBuffer {
    frames: VecDeque<Vec<f32>>,
    depth: usize,
    width: usize,
}

impl WaterfallBuffer {
    /// Creates an empty buffer holding up to `depth` frames of `width`
    /// bins.
    pub fn new(depth: usize, width: usize) -> WaterfallBuffer {
        WaterfallBuffer {
            frames: VecDeque::with_capacity(depth),
            depth,
            width,
        }
    }

    /// Inserts `frame` at the most-recent row, evicting the oldest row
    /// when the buffer is full.
    ///
    /// A frame whose length differs from the configured width is
    /// rejected with `FrameWidth` rather than padded or truncated; a
    /// misaligned frame is always a caller bug.
    pub fn push(&mut self, frame: Vec<f32>) -> Result<(), ScopeError> {
        if frame.len() != self.width {
            return Err(ScopeError::FrameWidth {
                expected: self.width,
                got: frame.len(),
            });
        }
        if self.depth == 0 {
            return Ok(());
        }
        if self.frames.len() == self.depth {
            self.frames.pop_back();
        }
        self.frames.push_front(frame);
        Ok(())
    }

    /// Owned copy of the history, most recent frame first. The copy
    /// does not alias the stored frames.
    pub fn snapshot(&self) -> Vec<Vec<f32>> {
        self.frames.iter().cloned().collect()
    }

    /// Number of frames currently held.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Configured history depth.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Configured frame width in bins.
    pub fn width(&self) -> usize {
        self.width
    }
}

#[cfg(test)]
mod test {
    use crate::error::ScopeError;
    use crate::waterfall::WaterfallBuffer;

    fn frame(value: f32) -> Vec<f32> {
        vec![value; 4]
    }

    #[test]
    fn test_fills_in_push_order() {
        let mut buffer = WaterfallBuffer::new(3, 4);
        for value in 0..3 {
            buffer.push(frame(value as f32)).unwrap();
        }
        assert_eq!(buffer.len(), 3);
        assert_eq!(
            buffer.snapshot(),
            vec![frame(2.0), frame(1.0), frame(0.0)]
        );
    }

    #[test]
    fn test_overflow_evicts_oldest() {
        let mut buffer = WaterfallBuffer::new(3, 4);
        // A, B, C, D: D lands at row 0 and A is evicted.
        for value in &[1.0, 2.0, 3.0, 4.0] {
            buffer.push(frame(*value)).unwrap();
        }
        assert_eq!(buffer.len(), 3);
        assert_eq!(
            buffer.snapshot(),
            vec![frame(4.0), frame(3.0), frame(2.0)]
        );
    }

    #[test]
    fn test_rejects_mismatched_width() {
        let mut buffer = WaterfallBuffer::new(3, 4);
        match buffer.push(vec![0.0; 5]) {
            Err(ScopeError::FrameWidth { expected, got }) => {
                assert_eq!(expected, 4);
                assert_eq!(got, 5);
            }
            other => panic!("expected FrameWidth, got {:?}", other),
        }
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_snapshot_is_a_copy() {
        let mut buffer = WaterfallBuffer::new(2, 4);
        buffer.push(frame(1.0)).unwrap();
        let mut snapshot = buffer.snapshot();
        snapshot[0][0] = 99.0;
        assert_eq!(buffer.snapshot()[0][0], 1.0);
    }
}
