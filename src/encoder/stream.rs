//! Append-only queue of emitted commands.

/// Ordered list of command units.
///
/// A unit is whatever one builder returned: a command, a text run, a raw
/// slice. Units are only ever appended; the whole queue is drained by
/// [`CommandStream::finalize`].
#[derive(Debug, Clone, Default)]
pub struct CommandStream {
    units: Vec<Vec<u8>>,
}

impl CommandStream {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one unit.
    #[inline]
    pub fn push(&mut self, unit: Vec<u8>) {
        self.units.push(unit);
    }

    /// Number of queued units.
    pub fn units(&self) -> usize {
        self.units.len()
    }

    /// Number of bytes the queue will finalize to.
    pub fn byte_len(&self) -> usize {
        self.units.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Copy every unit into one buffer, in append order, and empty the queue.
    pub fn finalize(&mut self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.byte_len());
        for unit in self.units.drain(..) {
            out.extend_from_slice(&unit);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_stream() {
        let mut stream = CommandStream::new();
        assert!(stream.is_empty());
        assert_eq!(stream.byte_len(), 0);
        assert!(stream.finalize().is_empty());
    }

    #[test]
    fn test_finalize_preserves_order() {
        let mut stream = CommandStream::new();
        stream.push(vec![0x01]);
        stream.push(vec![0x02, 0x03]);
        stream.push(Vec::new());
        stream.push(vec![0x04]);

        assert_eq!(stream.units(), 4);
        assert_eq!(stream.byte_len(), 4);

        let bytes = stream.finalize();
        assert_eq!(bytes, vec![0x01, 0x02, 0x03, 0x04]);
    }

    #[test]
    fn test_finalize_drains() {
        let mut stream = CommandStream::new();
        stream.push(vec![0xAA]);
        let _ = stream.finalize();
        assert!(stream.is_empty());
        assert!(stream.finalize().is_empty());
    }
}
