//! Line-oriented output seam.
//!
//! The match engine's only observable side effect is the transcript it
//! writes through a [`Reporter`]. The interactive binary supplies a terminal
//! reporter; tests capture the transcript with [`BufferReporter`] and assert
//! on its lines.

/// Destination for one line of human-readable match output.
pub trait Reporter {
    /// Append one line to the output surface.
    fn report(&mut self, line: &str);
}

/// Reporter that collects lines in memory.
///
/// The capture sink used by the test harness.
#[derive(Clone, Debug, Default)]
pub struct BufferReporter {
    lines: Vec<String>,
}

impl BufferReporter {
    /// Create an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines captured so far, in emission order.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Consume the buffer, returning the captured lines.
    #[must_use]
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl Reporter for BufferReporter {
    fn report(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_preserves_order() {
        let mut reporter = BufferReporter::new();
        reporter.report("first");
        reporter.report("second");
        reporter.report("third");

        assert_eq!(reporter.lines(), ["first", "second", "third"]);
        assert_eq!(reporter.into_lines().len(), 3);
    }

    #[test]
    fn test_empty_buffer() {
        let reporter = BufferReporter::new();
        assert!(reporter.lines().is_empty());
    }
}
