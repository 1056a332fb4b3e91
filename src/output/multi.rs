//! Fan-out to several sinks.

use super::Sink;
use std::io;
use std::sync::Arc;

/// Writes every line to each member in order. A failing member does not stop
/// the others; the first error is reported after all were tried.
#[derive(Clone, Default)]
pub struct MultiSink {
    sinks: Vec<Arc<dyn Sink>>,
}

impl MultiSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a member sink.
    #[must_use]
    pub fn with(mut self, sink: impl Sink + 'static) -> Self {
        self.sinks.push(Arc::new(sink));
        self
    }

    /// Adds an already shared member sink.
    #[must_use]
    pub fn with_shared(mut self, sink: Arc<dyn Sink>) -> Self {
        self.sinks.push(sink);
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

impl FromIterator<Arc<dyn Sink>> for MultiSink {
    fn from_iter<I: IntoIterator<Item = Arc<dyn Sink>>>(iter: I) -> Self {
        Self {
            sinks: iter.into_iter().collect(),
        }
    }
}

impl Sink for MultiSink {
    fn write(&self, bytes: &[u8]) -> io::Result<usize> {
        let mut first_err = None;
        for sink in &self.sinks {
            if let Err(e) = sink.write(bytes) {
                first_err.get_or_insert(e);
            }
        }
        first_err.map_or(Ok(bytes.len()), Err)
    }

    fn flush(&self) -> io::Result<()> {
        let mut first_err = None;
        for sink in &self.sinks {
            if let Err(e) = sink.flush() {
                first_err.get_or_insert(e);
            }
        }
        first_err.map_or(Ok(()), Err)
    }
}
