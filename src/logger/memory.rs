//! In-process capture sink.

use std::io;
use std::sync::{Arc, Mutex};

use tracing_subscriber::fmt::MakeWriter;

/// Shared byte buffer that a memory transport writes formatted records into.
///
/// Clones share the same storage, so a test can keep one handle and hand the
/// other to [`Transport::memory`](super::Transport::memory).
#[derive(Debug, Clone, Default)]
pub struct MemoryBuffer {
    inner: Arc<Mutex<Vec<u8>>>,
}

impl MemoryBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded.
    pub fn contents(&self) -> String {
        let bytes = self.inner.lock().expect("memory buffer mutex poisoned");
        String::from_utf8_lossy(&bytes).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_owned).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().expect("memory buffer mutex poisoned").is_empty()
    }

    pub fn clear(&self) {
        self.inner.lock().expect("memory buffer mutex poisoned").clear();
    }
}

/// Writer handed out per record by [`MemoryBuffer`].
pub struct MemoryWriter {
    inner: Arc<Mutex<Vec<u8>>>,
}

impl io::Write for MemoryWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut bytes = self
            .inner
            .lock()
            .map_err(|_| io::Error::other("memory buffer mutex poisoned"))?;
        bytes.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for MemoryBuffer {
    type Writer = MemoryWriter;

    fn make_writer(&'a self) -> Self::Writer {
        MemoryWriter {
            inner: Arc::clone(&self.inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_clones_share_storage() {
        let buffer = MemoryBuffer::new();
        let handle = buffer.clone();

        let mut writer = handle.make_writer();
        writer.write_all(b"first\nsecond\n").unwrap();

        assert_eq!(buffer.lines(), vec!["first", "second"]);
        buffer.clear();
        assert!(handle.is_empty());
    }
}
